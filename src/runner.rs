use crate::config::Config;
use crate::session::{render_transcript, timestamp_now};
use crate::simulator::{simulate, SimulationResult};
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::thread;
use tracing::info;

/// Simulate one source file from disk and write its console transcript
/// (or only the program output when `raw`). Returns the simulated exit code.
pub fn run_file<W: Write>(path: &Path, config: &Config, raw: bool, out: &mut W) -> io::Result<i32> {
    let source = fs::read_to_string(path)?;
    info!(file = %path.display(), bytes = source.len(), "compiling");

    if !config.compile_delay.is_zero() {
        thread::sleep(config.compile_delay);
    }
    let result = simulate(&source);

    if raw {
        match &result {
            SimulationResult::Success { output } => write!(out, "{}", output)?,
            SimulationResult::Failure { error } => writeln!(out, "Error: {}", error)?,
        }
    } else {
        for line in render_transcript(&result, &timestamp_now()) {
            writeln!(out, "{}", line)?;
        }
    }
    out.flush()?;

    info!(exit_code = result.exit_code(), "program finished");
    Ok(result.exit_code())
}
