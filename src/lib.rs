//! Extract the lines added between two text files.
//!
//! The crate is split in two layers:
//!
//! - `domain`: reading documents, the sequence matcher, unified diff rendering,
//!   the additions extractor, the output writer and the form state that ties
//!   them together
//! - `commands`: the operations exposed by the `addlines` binary, implemented
//!   on top of a [`session::Session`]

pub mod commands;
pub mod domain;
pub mod logging;
pub mod session;
