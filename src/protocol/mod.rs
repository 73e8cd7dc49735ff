//! Front-end protocol: `Content-Length` framed JSON messages on stdio,
//! the same framing the Debug Adapter Protocol uses.

mod message;
mod server;

use crate::config::Config;
use crate::error::ProtocolError;
use crate::session::Session;
use std::io;
use tracing::info;

pub use message::{Message, MessageContent};
pub use server::{ProtocolServer, MAX_FRAME};

pub fn run_protocol_mode(config: Config) -> Result<(), ProtocolError> {
    info!("protocol server starting");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut server = ProtocolServer::new(stdin.lock(), stdout.lock(), Session::new(config));
    server.run()?;

    info!("protocol server exiting");
    Ok(())
}
