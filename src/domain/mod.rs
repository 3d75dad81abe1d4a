pub mod diff;
pub mod document;
pub mod error;
pub mod extractor;
pub mod form;
pub mod output;

pub const DEFAULT_OUTPUT_FILE: &str = "New Diff.txt";
pub const DEFAULT_OUTPUT_EXTENSION: &str = "txt";
pub const DEFAULT_CONTEXT_LINES: usize = 3;
