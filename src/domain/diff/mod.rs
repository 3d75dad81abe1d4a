//! Line diffing
//!
//! - `sequence_matcher`: gestalt pattern matching producing matching blocks
//!   and opcodes
//! - `unified`: grouping of opcodes into hunks and unified diff rendering
//!
//! Both work over slices of any `Eq + Hash` element; the rest of the crate
//! feeds them lines of text.

pub mod sequence_matcher;
pub mod unified;

use derive_new::new;
use std::fmt::Display;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit<T> {
    Delete { value: T },
    Insert { value: T },
    Equal { value: T },
}

impl<T> Edit<T> {
    pub fn marker(&self) -> char {
        match self {
            Edit::Delete { .. } => '-',
            Edit::Insert { .. } => '+',
            Edit::Equal { .. } => ' ',
        }
    }

    pub fn value(&self) -> &T {
        match self {
            Edit::Delete { value } | Edit::Insert { value } | Edit::Equal { value } => value,
        }
    }
}

impl<T: Display> Display for Edit<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.marker(), self.value())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Equal,
    Replace,
    Delete,
    Insert,
}

/// A common run: `a[a..a + size] == b[b..b + size]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, new)]
pub struct Match {
    pub a: usize,
    pub b: usize,
    pub size: usize,
}

/// Describes how to turn `a[a_start..a_end]` into `b[b_start..b_end]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct Opcode {
    pub tag: Tag,
    pub a_start: usize,
    pub a_end: usize,
    pub b_start: usize,
    pub b_end: usize,
}

impl Opcode {
    pub fn a_len(&self) -> usize {
        self.a_end - self.a_start
    }

    pub fn b_len(&self) -> usize {
        self.b_end - self.b_start
    }
}
