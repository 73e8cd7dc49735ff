mod console;
mod context;

pub use console::{format_clock, render_transcript, timestamp_now, Console, CLEARED_MESSAGE};
pub use context::{Session, READY};
