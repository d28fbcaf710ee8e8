//! Word-level diff highlighting for before/after sections.
//!
//! Alignment uses the greedy longest-matching-block strategy: take the longest
//! common run of words (earliest in the old text, then earliest in the new text
//! on ties), then recurse on the words left and right of it. There is no junk
//! heuristic. The resulting opcodes are `similar::DiffOp` values so callers can
//! use `as_tag_tuple` to get the ranges.

use similar::{DiffOp, DiffTag};
use std::collections::HashMap;
use std::hash::Hash;

pub const REMOVED_OPEN: &str = "<del>";
pub const REMOVED_CLOSE: &str = "</del>";
pub const ADDED_OPEN: &str = "<ins>";
pub const ADDED_CLOSE: &str = "</ins>";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Block {
    old: usize,
    new: usize,
    len: usize,
}

struct BlockMatcher<'a, T> {
    old: &'a [T],
    new: &'a [T],
    positions: HashMap<&'a T, Vec<usize>>,
}

impl<'a, T: Eq + Hash> BlockMatcher<'a, T> {
    fn new(old: &'a [T], new: &'a [T]) -> Self {
        let mut positions: HashMap<&'a T, Vec<usize>> = HashMap::new();
        for (j, item) in new.iter().enumerate() {
            positions.entry(item).or_default().push(j);
        }
        Self {
            old,
            new,
            positions,
        }
    }

    /// Longest common run within `old[alo..ahi]` and `new[blo..bhi]`.
    fn longest_match(&self, alo: usize, ahi: usize, blo: usize, bhi: usize) -> Block {
        let mut best = Block {
            old: alo,
            new: blo,
            len: 0,
        };
        // run_lengths[j] = length of the common run ending at old[i - 1], new[j]
        let mut run_lengths: HashMap<usize, usize> = HashMap::new();
        for i in alo..ahi {
            let mut next = HashMap::new();
            if let Some(js) = self.positions.get(&self.old[i]) {
                for &j in js {
                    if j < blo {
                        continue;
                    }
                    if j >= bhi {
                        break;
                    }
                    let k = j
                        .checked_sub(1)
                        .and_then(|prev| run_lengths.get(&prev))
                        .copied()
                        .unwrap_or(0)
                        + 1;
                    next.insert(j, k);
                    if k > best.len {
                        best = Block {
                            old: i + 1 - k,
                            new: j + 1 - k,
                            len: k,
                        };
                    }
                }
            }
            run_lengths = next;
        }
        best
    }

    /// Matching blocks in order, adjacent runs merged, terminated by an
    /// empty sentinel at `(old.len(), new.len())`.
    fn matching_blocks(&self) -> Vec<Block> {
        let mut pending = vec![(0, self.old.len(), 0, self.new.len())];
        let mut blocks = Vec::new();

        while let Some((alo, ahi, blo, bhi)) = pending.pop() {
            let block = self.longest_match(alo, ahi, blo, bhi);
            if block.len == 0 {
                continue;
            }
            blocks.push(block);
            if alo < block.old && blo < block.new {
                pending.push((alo, block.old, blo, block.new));
            }
            let (old_end, new_end) = (block.old + block.len, block.new + block.len);
            if old_end < ahi && new_end < bhi {
                pending.push((old_end, ahi, new_end, bhi));
            }
        }
        blocks.sort_by_key(|b| (b.old, b.new));

        let mut merged: Vec<Block> = Vec::with_capacity(blocks.len() + 1);
        for block in blocks {
            if let Some(last) = merged.last_mut()
                && last.old + last.len == block.old
                && last.new + last.len == block.new
            {
                last.len += block.len;
            } else {
                merged.push(block);
            }
        }
        merged.push(Block {
            old: self.old.len(),
            new: self.new.len(),
            len: 0,
        });
        merged
    }
}

/// Alignment of `old` against `new` as equal/delete/insert/replace opcodes.
///
/// The ranges of the returned ops cover `0..old.len()` and `0..new.len()`
/// exactly once, in order.
pub fn opcodes<T: Eq + Hash>(old: &[T], new: &[T]) -> Vec<DiffOp> {
    let matcher = BlockMatcher::new(old, new);
    let mut ops = Vec::new();
    let (mut i, mut j) = (0, 0);

    for block in matcher.matching_blocks() {
        match (i < block.old, j < block.new) {
            (true, true) => ops.push(DiffOp::Replace {
                old_index: i,
                old_len: block.old - i,
                new_index: j,
                new_len: block.new - j,
            }),
            (true, false) => ops.push(DiffOp::Delete {
                old_index: i,
                old_len: block.old - i,
                new_index: j,
            }),
            (false, true) => ops.push(DiffOp::Insert {
                old_index: i,
                new_index: j,
                new_len: block.new - j,
            }),
            (false, false) => {}
        }
        i = block.old + block.len;
        j = block.new + block.len;
        if block.len > 0 {
            ops.push(DiffOp::Equal {
                old_index: block.old,
                new_index: block.new,
                len: block.len,
            });
        }
    }
    ops
}

/// Highlight word-level changes between `original` and `updated`.
///
/// Removed words are wrapped in `<del>` in the first output, added words in
/// `<ins>` in the second. Both outputs are re-joined with single spaces.
pub fn highlight(original: &str, updated: &str) -> (String, String) {
    let old: Vec<&str> = original.split_whitespace().collect();
    let new: Vec<&str> = updated.split_whitespace().collect();

    let mut old_marked: Vec<String> = Vec::with_capacity(old.len());
    let mut new_marked: Vec<String> = Vec::with_capacity(new.len());

    for op in opcodes(&old, &new) {
        let (tag, old_range, new_range) = op.as_tag_tuple();
        match tag {
            DiffTag::Equal => {
                old_marked.extend(old[old_range].iter().map(|w| w.to_string()));
                new_marked.extend(new[new_range].iter().map(|w| w.to_string()));
            }
            DiffTag::Delete => {
                old_marked.push(wrap(&old[old_range], REMOVED_OPEN, REMOVED_CLOSE));
            }
            DiffTag::Insert => {
                new_marked.push(wrap(&new[new_range], ADDED_OPEN, ADDED_CLOSE));
            }
            DiffTag::Replace => {
                old_marked.push(wrap(&old[old_range], REMOVED_OPEN, REMOVED_CLOSE));
                new_marked.push(wrap(&new[new_range], ADDED_OPEN, ADDED_CLOSE));
            }
        }
    }

    (old_marked.join(" "), new_marked.join(" "))
}

fn wrap(words: &[&str], open: &str, close: &str) -> String {
    format!("{open}{}{close}", words.join(" "))
}
