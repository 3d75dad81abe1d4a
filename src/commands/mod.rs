//! Commands exposed by the `addlines` binary
//!
//! - `extract`: save the lines added in the altered file to an output file
//! - `diff`: print the unified diff between the two files

pub mod diff;
pub mod extract;
