use crate::domain::diff::{Match, Opcode, Tag};
use std::collections::HashMap;
use std::hash::Hash;

/// Sequences shorter than this never have popular elements.
const POPULAR_THRESHOLD: usize = 200;

/// Finds the longest contiguous matching block, then recurses on the pieces
/// to its left and right. Matches are not guaranteed minimal, but they tend
/// to look right to people reading the diff.
#[derive(Debug, Clone)]
pub struct SequenceMatcher<'d, T: Eq + Hash> {
    a: &'d [T],
    b: &'d [T],
    // element of b -> ascending positions in b; popular elements are left out
    b2j: HashMap<&'d T, Vec<usize>>,
}

impl<'d, T: Eq + Hash> SequenceMatcher<'d, T> {
    pub fn new(a: &'d [T], b: &'d [T]) -> Self {
        let mut b2j: HashMap<&'d T, Vec<usize>> = HashMap::new();
        for (j, elem) in b.iter().enumerate() {
            b2j.entry(elem).or_default().push(j);
        }

        let n = b.len();
        if n >= POPULAR_THRESHOLD {
            let max_occurrences = n / 100 + 1;
            b2j.retain(|_, indices| indices.len() <= max_occurrences);
        }

        SequenceMatcher { a, b, b2j }
    }

    pub fn a(&self) -> &'d [T] {
        self.a
    }

    pub fn b(&self) -> &'d [T] {
        self.b
    }

    /// Longest matching block in `a[alo..ahi]` and `b[blo..bhi]`.
    ///
    /// Of all maximal blocks, returns the one starting earliest in `a`, and of
    /// those the one starting earliest in `b`. Returns a block of size 0 when
    /// nothing matches.
    pub fn find_longest_match(&self, alo: usize, ahi: usize, blo: usize, bhi: usize) -> Match {
        let (mut best_i, mut best_j, mut best_size) = (alo, blo, 0);

        // j2len[j] = length of the longest match ending at a[i - 1] and b[j]
        let mut j2len: HashMap<usize, usize> = HashMap::new();
        for i in alo..ahi {
            let mut new_j2len = HashMap::new();

            if let Some(indices) = self.b2j.get(&self.a[i]) {
                for &j in indices {
                    if j < blo {
                        continue;
                    }
                    if j >= bhi {
                        break;
                    }

                    let k = j
                        .checked_sub(1)
                        .and_then(|prev| j2len.get(&prev))
                        .copied()
                        .unwrap_or(0)
                        + 1;
                    new_j2len.insert(j, k);

                    if k > best_size {
                        (best_i, best_j, best_size) = (i + 1 - k, j + 1 - k, k);
                    }
                }
            }

            j2len = new_j2len;
        }

        // popular elements never seed a match, but they may still extend one
        while best_i > alo && best_j > blo && self.a[best_i - 1] == self.b[best_j - 1] {
            best_i -= 1;
            best_j -= 1;
            best_size += 1;
        }
        while best_i + best_size < ahi
            && best_j + best_size < bhi
            && self.a[best_i + best_size] == self.b[best_j + best_size]
        {
            best_size += 1;
        }

        Match::new(best_i, best_j, best_size)
    }

    /// Non-overlapping matching blocks in increasing order, adjacent blocks
    /// merged, terminated by the sentinel `(len(a), len(b), 0)`.
    pub fn matching_blocks(&self) -> Vec<Match> {
        let (la, lb) = (self.a.len(), self.b.len());

        let mut queue = vec![(0, la, 0, lb)];
        let mut blocks = Vec::new();
        while let Some((alo, ahi, blo, bhi)) = queue.pop() {
            let found = self.find_longest_match(alo, ahi, blo, bhi);
            if found.size == 0 {
                continue;
            }

            blocks.push(found);
            if alo < found.a && blo < found.b {
                queue.push((alo, found.a, blo, found.b));
            }
            if found.a + found.size < ahi && found.b + found.size < bhi {
                queue.push((found.a + found.size, ahi, found.b + found.size, bhi));
            }
        }
        blocks.sort();

        let mut merged: Vec<Match> = Vec::with_capacity(blocks.len() + 1);
        for block in blocks {
            match merged.last_mut() {
                Some(last) if last.a + last.size == block.a && last.b + last.size == block.b => {
                    last.size += block.size;
                }
                _ => merged.push(block),
            }
        }
        merged.push(Match::new(la, lb, 0));

        merged
    }

    /// Edit operations turning `a` into `b`, in order, covering both
    /// sequences end to end.
    pub fn opcodes(&self) -> Vec<Opcode> {
        let (mut i, mut j) = (0, 0);
        let mut opcodes = Vec::new();

        for block in self.matching_blocks() {
            let tag = match (i < block.a, j < block.b) {
                (true, true) => Some(Tag::Replace),
                (true, false) => Some(Tag::Delete),
                (false, true) => Some(Tag::Insert),
                (false, false) => None,
            };
            if let Some(tag) = tag {
                opcodes.push(Opcode::new(tag, i, block.a, j, block.b));
            }

            (i, j) = (block.a + block.size, block.b + block.size);
            if block.size > 0 {
                opcodes.push(Opcode::new(Tag::Equal, block.a, i, block.b, j));
            }
        }

        opcodes
    }

    /// Opcodes grouped into hunks with up to `context` lines of unchanged
    /// context around each change. Equal inputs produce no groups.
    pub fn grouped_opcodes(&self, context: usize) -> Vec<Vec<Opcode>> {
        let mut codes = self.opcodes();
        if codes.is_empty() {
            codes.push(Opcode::new(Tag::Equal, 0, 1, 0, 1));
        }

        // trim the leading and trailing context down to size
        if let Some(first) = codes.first_mut().filter(|c| c.tag == Tag::Equal) {
            first.a_start = first.a_start.max(first.a_end.saturating_sub(context));
            first.b_start = first.b_start.max(first.b_end.saturating_sub(context));
        }
        if let Some(last) = codes.last_mut().filter(|c| c.tag == Tag::Equal) {
            last.a_end = last.a_end.min(last.a_start.saturating_add(context));
            last.b_end = last.b_end.min(last.b_start.saturating_add(context));
        }

        let mut groups = Vec::new();
        let mut group = Vec::new();
        for code in codes {
            let (mut a_start, mut b_start) = (code.a_start, code.b_start);

            // a long unchanged run closes the current group and opens the next
            if code.tag == Tag::Equal && code.a_len() > context.saturating_mul(2) {
                group.push(Opcode::new(
                    Tag::Equal,
                    a_start,
                    code.a_end.min(a_start.saturating_add(context)),
                    b_start,
                    code.b_end.min(b_start.saturating_add(context)),
                ));
                groups.push(std::mem::take(&mut group));

                a_start = a_start.max(code.a_end - context);
                b_start = b_start.max(code.b_end - context);
            }

            group.push(Opcode::new(code.tag, a_start, code.a_end, b_start, code.b_end));
        }

        if !group.is_empty() && !(group.len() == 1 && group[0].tag == Tag::Equal) {
            groups.push(group);
        }

        groups
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn char_inputs() -> (Vec<char>, Vec<char>) {
        ("abxcd".chars().collect(), "abcd".chars().collect())
    }

    #[rstest]
    fn finds_longest_match_earliest_in_a() {
        let a: Vec<char> = " abcd".chars().collect();
        let b: Vec<char> = "abcd abcd".chars().collect();

        let matcher = SequenceMatcher::new(&a, &b);

        assert_eq!(matcher.find_longest_match(0, 5, 0, 9), Match::new(0, 4, 5));
    }

    #[rstest]
    fn ties_prefer_earliest_block_in_b() {
        let a = vec!["A", "B"];
        let b = vec!["B", "A"];

        let matcher = SequenceMatcher::new(&a, &b);

        assert_eq!(matcher.find_longest_match(0, 2, 0, 2), Match::new(0, 1, 1));
    }

    #[rstest]
    fn no_match_yields_empty_block() {
        let a = vec!["x"];
        let b = vec!["y"];

        let matcher = SequenceMatcher::new(&a, &b);

        assert_eq!(matcher.find_longest_match(0, 1, 0, 1), Match::new(0, 0, 0));
    }

    #[rstest]
    fn matching_blocks_are_merged_and_terminated(char_inputs: (Vec<char>, Vec<char>)) {
        let (a, b) = char_inputs;

        let blocks = SequenceMatcher::new(&a, &b).matching_blocks();

        assert_eq!(
            blocks,
            vec![Match::new(0, 0, 2), Match::new(3, 2, 2), Match::new(5, 4, 0)]
        );
    }

    #[rstest]
    fn opcodes_describe_the_transformation() {
        let a: Vec<char> = "qabxcd".chars().collect();
        let b: Vec<char> = "abycdf".chars().collect();

        let opcodes = SequenceMatcher::new(&a, &b).opcodes();

        assert_eq!(
            opcodes,
            vec![
                Opcode::new(Tag::Delete, 0, 1, 0, 0),
                Opcode::new(Tag::Equal, 1, 3, 0, 2),
                Opcode::new(Tag::Replace, 3, 4, 2, 3),
                Opcode::new(Tag::Equal, 4, 6, 3, 5),
                Opcode::new(Tag::Insert, 6, 6, 5, 6),
            ]
        );
    }

    #[rstest]
    fn equal_sequences_have_no_groups() {
        let a = vec!["one", "two", "three"];

        assert!(SequenceMatcher::new(&a, &a).grouped_opcodes(3).is_empty());
    }

    #[rstest]
    fn empty_sequences_have_no_groups() {
        let a: Vec<&str> = vec![];

        assert!(SequenceMatcher::new(&a, &a).grouped_opcodes(3).is_empty());
    }

    #[rstest]
    fn distant_changes_are_split_into_groups() {
        let a: Vec<String> = (1..=20).map(|i| i.to_string()).collect();
        let mut b = a.clone();
        b[1] = "changed".to_string();
        b[17] = "changed too".to_string();

        let groups = SequenceMatcher::new(&a, &b).grouped_opcodes(3);

        assert_eq!(
            groups,
            vec![
                vec![
                    Opcode::new(Tag::Equal, 0, 1, 0, 1),
                    Opcode::new(Tag::Replace, 1, 2, 1, 2),
                    Opcode::new(Tag::Equal, 2, 5, 2, 5),
                ],
                vec![
                    Opcode::new(Tag::Equal, 14, 17, 14, 17),
                    Opcode::new(Tag::Replace, 17, 18, 17, 18),
                    Opcode::new(Tag::Equal, 18, 20, 18, 20),
                ],
            ]
        );
    }

    #[rstest]
    fn popular_lines_do_not_seed_matches() {
        // "x" occurs 300 times in b, far above the popularity limit of 4
        let a = vec!["y", "x", "x"];
        let b = vec!["x"; 300];

        let matcher = SequenceMatcher::new(&a, &b);

        assert_eq!(matcher.find_longest_match(0, 3, 0, 300), Match::new(0, 0, 0));
        assert_eq!(matcher.matching_blocks(), vec![Match::new(3, 300, 0)]);
    }

    #[rstest]
    #[case(usize::MAX)]
    #[case(usize::MAX / 2 + 1)]
    fn huge_context_keeps_a_single_group(#[case] context: usize) {
        let a = vec!["A", "B"];
        let b = vec!["B", "A"];

        let groups = SequenceMatcher::new(&a, &b).grouped_opcodes(context);

        assert_eq!(
            groups,
            vec![vec![
                Opcode::new(Tag::Insert, 0, 0, 0, 1),
                Opcode::new(Tag::Equal, 0, 1, 1, 2),
                Opcode::new(Tag::Delete, 1, 2, 2, 2),
            ]]
        );
    }

    proptest! {
        #[test]
        fn opcodes_cover_both_sequences(
            a in proptest::collection::vec(0u8..4, 0..40),
            b in proptest::collection::vec(0u8..4, 0..40),
        ) {
            let opcodes = SequenceMatcher::new(&a, &b).opcodes();

            let (mut i, mut j) = (0, 0);
            for op in &opcodes {
                prop_assert_eq!(op.a_start, i);
                prop_assert_eq!(op.b_start, j);
                if op.tag == Tag::Equal {
                    prop_assert_eq!(&a[op.a_start..op.a_end], &b[op.b_start..op.b_end]);
                }
                (i, j) = (op.a_end, op.b_end);
            }
            prop_assert_eq!(i, a.len());
            prop_assert_eq!(j, b.len());
        }

        #[test]
        fn matching_blocks_are_strictly_increasing(
            a in proptest::collection::vec(0u8..4, 0..40),
            b in proptest::collection::vec(0u8..4, 0..40),
        ) {
            let blocks = SequenceMatcher::new(&a, &b).matching_blocks();

            for pair in blocks.windows(2) {
                prop_assert!(pair[0].a + pair[0].size <= pair[1].a);
                prop_assert!(pair[0].b + pair[0].size <= pair[1].b);
            }
        }
    }
}
