mod buffer;

pub use buffer::{EditorBuffer, TAB_INSERT};
