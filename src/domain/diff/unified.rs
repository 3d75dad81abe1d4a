use crate::domain::DEFAULT_CONTEXT_LINES;
use crate::domain::diff::sequence_matcher::SequenceMatcher;
use crate::domain::diff::{Edit, Opcode, Tag};
use std::fmt::Display;
use std::hash::Hash;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hunk<T> {
    a_start: usize,
    a_end: usize,
    b_start: usize,
    b_end: usize,
    edits: Vec<Edit<T>>,
}

impl<T> Hunk<T> {
    /// Zero-based start of the hunk in `a`.
    pub fn a_start(&self) -> usize {
        self.a_start
    }

    pub fn a_size(&self) -> usize {
        self.a_end - self.a_start
    }

    /// Zero-based start of the hunk in `b`.
    pub fn b_start(&self) -> usize {
        self.b_start
    }

    pub fn b_size(&self) -> usize {
        self.b_end - self.b_start
    }

    pub fn edits(&self) -> &[Edit<T>] {
        &self.edits
    }

    /// The `@@ -a +b @@` line introducing the hunk.
    pub fn header(&self) -> String {
        format!(
            "@@ -{} +{} @@",
            format_range(self.a_start, self.a_end),
            format_range(self.b_start, self.b_end)
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiffLine<T> {
    FromFile(String),
    ToFile(String),
    HunkHeader(String),
    Edit(Edit<T>),
}

impl<T: Display> Display for DiffLine<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DiffLine::FromFile(label) => write!(f, "--- {label}"),
            DiffLine::ToFile(label) => write!(f, "+++ {label}"),
            DiffLine::HunkHeader(header) => write!(f, "{header}"),
            DiffLine::Edit(edit) => write!(f, "{edit}"),
        }
    }
}

/// Unified format range: one-based start, length omitted when it is 1, and
/// an empty range reported as the line before it.
fn format_range(start: usize, end: usize) -> String {
    let length = end - start;
    match length {
        0 => format!("{start},0"),
        1 => format!("{}", start + 1),
        _ => format!("{},{length}", start + 1),
    }
}

/// Unified diff of two line sequences.
#[derive(Debug, Clone)]
pub struct UnifiedDiff<'d, T: Eq + Hash> {
    matcher: SequenceMatcher<'d, T>,
    context: usize,
    from_label: String,
    to_label: String,
}

impl<'d, T: Eq + Hash + Clone> UnifiedDiff<'d, T> {
    pub fn new(a: &'d [T], b: &'d [T]) -> Self {
        UnifiedDiff {
            matcher: SequenceMatcher::new(a, b),
            context: DEFAULT_CONTEXT_LINES,
            from_label: String::new(),
            to_label: String::new(),
        }
    }

    pub fn context(mut self, context: usize) -> Self {
        self.context = context;
        self
    }

    pub fn labels(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.from_label = from.into();
        self.to_label = to.into();
        self
    }

    pub fn hunks(&self) -> Vec<Hunk<T>> {
        self.matcher
            .grouped_opcodes(self.context)
            .into_iter()
            .map(|group| self.hunk_from_group(&group))
            .collect()
    }

    fn hunk_from_group(&self, group: &[Opcode]) -> Hunk<T> {
        let (a, b) = (self.matcher.a(), self.matcher.b());
        let mut edits = Vec::new();

        for op in group {
            if op.tag == Tag::Equal {
                edits.extend(a[op.a_start..op.a_end].iter().map(|value| Edit::Equal {
                    value: value.clone(),
                }));
                continue;
            }
            if matches!(op.tag, Tag::Replace | Tag::Delete) {
                edits.extend(a[op.a_start..op.a_end].iter().map(|value| Edit::Delete {
                    value: value.clone(),
                }));
            }
            if matches!(op.tag, Tag::Replace | Tag::Insert) {
                edits.extend(b[op.b_start..op.b_end].iter().map(|value| Edit::Insert {
                    value: value.clone(),
                }));
            }
        }

        // groups are never empty
        let (first, last) = (group[0], group[group.len() - 1]);
        Hunk {
            a_start: first.a_start,
            a_end: last.a_end,
            b_start: first.b_start,
            b_end: last.b_end,
            edits,
        }
    }
}

impl<T: Eq + Hash + Clone + Display> UnifiedDiff<'_, T> {
    /// The unified diff stream: both file headers, then each hunk header
    /// followed by its edits. Equal inputs yield nothing, not even the file
    /// headers.
    pub fn stream(&self) -> Vec<DiffLine<T>> {
        let hunks = self.hunks();
        if hunks.is_empty() {
            return Vec::new();
        }

        let mut stream = vec![
            DiffLine::FromFile(self.from_label.clone()),
            DiffLine::ToFile(self.to_label.clone()),
        ];
        for hunk in hunks {
            stream.push(DiffLine::HunkHeader(hunk.header()));
            stream.extend(hunk.edits.into_iter().map(DiffLine::Edit));
        }

        stream
    }

    /// The stream as text, one entry per line, terminators trimmed.
    pub fn lines(&self) -> Vec<String> {
        self.stream()
            .iter()
            .map(|line| {
                let line = line.to_string();
                match line.strip_suffix('\n') {
                    Some(trimmed) => trimmed.to_string(),
                    None => line,
                }
            })
            .collect()
    }
}
