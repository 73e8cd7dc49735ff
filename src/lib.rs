//! Headless engine for a mock C IDE: a multi-file workspace, an editor
//! buffer, bundled sample programs and a simulated compile-and-run.

pub mod config;
pub mod editor;
pub mod error;
pub mod protocol;
pub mod repl;
pub mod runner;
pub mod session;
pub mod simulator;
pub mod workspace;

pub use config::Config;
pub use error::{ProtocolError, WorkspaceError};
pub use session::Session;
pub use simulator::{simulate, CompileError, SimulationResult};
pub use workspace::Workspace;
