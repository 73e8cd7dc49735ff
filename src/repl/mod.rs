//! Line-oriented front end over a [`Session`].

mod commands;

use crate::session::Session;
use crate::workspace::SAMPLE_PROGRAMS;
use std::io::{self, BufRead, Write};
use tracing::debug;

pub use commands::{parse_command, ReplCommand, HELP};

/// Line that ends multi-line input after `edit`.
pub const EDIT_TERMINATOR: &str = ".";

/// Drive `session` from `input` until `quit` or end of input.
pub fn run_repl<R: BufRead, W: Write>(
    session: &mut Session,
    mut input: R,
    out: &mut W,
) -> io::Result<()> {
    writeln!(out, "CodeForge ready. {}", HELP)?;

    loop {
        write!(out, "{}> ", session.workspace().current())?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }

        let cmd = match parse_command(line.trim()) {
            Ok(cmd) => cmd,
            Err(msg) => {
                writeln!(out, "❓ {}", msg)?;
                continue;
            }
        };
        debug!(?cmd, "repl command");

        match cmd {
            ReplCommand::Empty => {}
            ReplCommand::Quit => break,
            ReplCommand::Help => writeln!(out, "{}", HELP)?,
            ReplCommand::List => {
                let ws = session.workspace();
                for name in ws.names() {
                    let marker = if name == ws.current() { "*" } else { " " };
                    writeln!(out, "{} {}", marker, name)?;
                }
                writeln!(out, "({})", ws.file_count_label())?;
            }
            ReplCommand::Open(name) => report(out, session.switch_to(&name), session)?,
            ReplCommand::New(name) => report(out, session.new_file(&name).map(|_| ()), session)?,
            ReplCommand::Remove(name) => report(out, session.delete(&name), session)?,
            ReplCommand::Show => {
                let buffer = session.buffer();
                for (i, text) in buffer.text().split('\n').enumerate() {
                    writeln!(out, "{:>4} | {}", i + 1, text)?;
                }
            }
            ReplCommand::Edit => {
                writeln!(
                    out,
                    "Enter the new contents; finish with a line containing only '{}'",
                    EDIT_TERMINATOR
                )?;
                let text = read_until_terminator(&mut input)?;
                session.edit(text);
                writeln!(out, "{}", session.status())?;
            }
            ReplCommand::Save => {
                session.save();
                writeln!(out, "{}", session.status())?;
            }
            ReplCommand::Examples => {
                for (i, sample) in SAMPLE_PROGRAMS.iter().enumerate() {
                    writeln!(out, "  {}. {}", i + 1, sample.name)?;
                }
            }
            ReplCommand::Example(n) => report(out, session.load_example(n - 1).map(|_| ()), session)?,
            ReplCommand::Run => {
                writeln!(out, "⏳ Compiling...")?;
                out.flush()?;
                session.compile_and_run();
                write!(out, "{}", session.console().text())?;
            }
            ReplCommand::Clear => {
                session.clear_console();
                write!(out, "{}", session.console().text())?;
            }
            ReplCommand::Status => {
                writeln!(
                    out,
                    "{} | {} | {}",
                    session.status(),
                    session.buffer().cursor_label(),
                    session.workspace().file_count_label()
                )?;
            }
            ReplCommand::Cursor(offset) => {
                session.buffer_mut().set_caret(offset);
                writeln!(out, "{}", session.buffer().cursor_label())?;
            }
        }
    }

    writeln!(out, "Bye.")?;
    Ok(())
}

fn report<W: Write, E: std::fmt::Display>(
    out: &mut W,
    result: Result<(), E>,
    session: &Session,
) -> io::Result<()> {
    match result {
        Ok(()) => writeln!(out, "{}", session.status()),
        Err(e) => writeln!(out, "❌ {}", e),
    }
}

/// Collect lines until the terminator (or end of input), joined with `\n`.
fn read_until_terminator<R: BufRead>(input: &mut R) -> io::Result<String> {
    let mut lines = Vec::new();
    loop {
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim_end_matches(['\r', '\n']);
        if line == EDIT_TERMINATOR {
            break;
        }
        lines.push(line.to_string());
    }
    Ok(lines.join("\n"))
}
