mod files;
mod samples;

pub use files::{SourceFile, Workspace, DEFAULT_FILE, DEFAULT_PROGRAM, NEW_FILE_TEMPLATE};
pub use samples::{sample, SampleProgram, SAMPLE_PROGRAMS};
