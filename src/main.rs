use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use codeforge::config::{Config, DEFAULT_COMPILE_DELAY_MS};
use codeforge::{protocol, repl, runner, Session};
use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "codeforge", version, about = "Mock C IDE with a simulated compile-and-run")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Append logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Debug-level logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Artificial compile latency in milliseconds
    #[arg(long, global = true, default_value_t = DEFAULT_COMPILE_DELAY_MS)]
    delay_ms: u64,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compile and run one file from disk
    Run {
        file: PathBuf,
        /// Print only the program output
        #[arg(long)]
        raw: bool,
    },
    /// Interactive session on stdin/stdout (default)
    Repl,
    /// Serve the framed JSON protocol on stdio
    Serve,
}

fn init_logging(cli: &Cli) -> Result<()> {
    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    match &cli.log_file {
        Some(path) => {
            let file = fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Opening log file {}", path.display()))?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).init();
        }
        // stdout carries program output and protocol frames
        None => builder.with_writer(io::stderr).init(),
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    let config = Config::with_delay_ms(cli.delay_ms);
    info!(?config, command = ?cli.command, "codeforge started");

    match cli.command {
        Some(Command::Run { ref file, raw }) => {
            let stdout = io::stdout();
            let code = runner::run_file(file, &config, raw, &mut stdout.lock())
                .with_context(|| format!("Running {}", file.display()))?;
            std::process::exit(code);
        }
        Some(Command::Serve) => {
            protocol::run_protocol_mode(config).context("Serving protocol")?;
        }
        Some(Command::Repl) | None => {
            let mut session = Session::new(config);
            let stdin = io::stdin();
            let stdout = io::stdout();
            repl::run_repl(&mut session, stdin.lock(), &mut stdout.lock())
                .context("Interactive session")?;
        }
    }

    info!("codeforge exiting");
    Ok(())
}
