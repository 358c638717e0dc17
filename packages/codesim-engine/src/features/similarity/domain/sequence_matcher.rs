//! Sequence Matcher
//!
//! Longest-matching-blocks alignment of two sequences of any hashable
//! element type (structural labels, characters, lines).
//!
//! # Algorithm
//!
//! 1. Index the second sequence: element → ascending positions
//! 2. Auto-junk: for `len(b) >= 200`, drop elements occurring more than
//!    `len(b) / 100 + 1` times from the index (they can still extend a
//!    block at its edges)
//! 3. Find the longest common run inside the current window (earliest in `a`,
//!    then earliest in `b`, on ties), extend it over equal neighbours
//! 4. Recurse on the unmatched left and right windows (explicit work stack)
//! 5. Sort by offset, coalesce adjacent blocks, append the sentinel
//!
//! `ratio = 2 * M / T` with `M` the matched length and `T = len(a) + len(b)`;
//! two empty sequences have ratio 1.0.

use ahash::AHashMap;
use std::hash::Hash;

use super::MatchingBlock;

/// Minimum length of `b` for the auto-junk heuristic to apply
pub const AUTOJUNK_MIN_LEN: usize = 200;

/// Matcher over a pair of sequences
pub struct SequenceMatcher<'a, T: Eq + Hash> {
    a: &'a [T],
    b: &'a [T],

    /// Positions of each (non-popular) element of `b`
    b2j: AHashMap<&'a T, Vec<usize>>,
}

impl<'a, T: Eq + Hash> SequenceMatcher<'a, T> {
    /// Matcher with the auto-junk heuristic enabled
    pub fn new(a: &'a [T], b: &'a [T]) -> Self {
        Self::with_autojunk(a, b, true)
    }

    pub fn with_autojunk(a: &'a [T], b: &'a [T], autojunk: bool) -> Self {
        let mut b2j: AHashMap<&'a T, Vec<usize>> = AHashMap::new();
        for (j, elt) in b.iter().enumerate() {
            b2j.entry(elt).or_default().push(j);
        }

        let n = b.len();
        if autojunk && n >= AUTOJUNK_MIN_LEN {
            let ntest = n / 100 + 1;
            b2j.retain(|_, positions| positions.len() <= ntest);
        }

        Self { a, b, b2j }
    }

    /// Longest matching block in `a[alo..ahi]` × `b[blo..bhi]`
    ///
    /// Returns a zero-size block at `(alo, blo)` when nothing matches.
    pub fn find_longest_match(&self, alo: usize, ahi: usize, blo: usize, bhi: usize) -> MatchingBlock {
        let (a, b) = (self.a, self.b);
        let mut best_i = alo;
        let mut best_j = blo;
        let mut best_size = 0;

        // j2len[j] = length of the run ending at a[i-1], b[j]
        let mut j2len: AHashMap<usize, usize> = AHashMap::new();

        for i in alo..ahi {
            let mut new_j2len: AHashMap<usize, usize> = AHashMap::new();

            if let Some(positions) = self.b2j.get(&a[i]) {
                for &j in positions {
                    if j < blo {
                        continue;
                    }
                    if j >= bhi {
                        break;
                    }

                    let prev_len = if j > 0 {
                        j2len.get(&(j - 1)).copied().unwrap_or(0)
                    } else {
                        0
                    };
                    let k = prev_len + 1;
                    new_j2len.insert(j, k);

                    if k > best_size {
                        best_i = i + 1 - k;
                        best_j = j + 1 - k;
                        best_size = k;
                    }
                }
            }
            j2len = new_j2len;
        }

        // Extend over elements the index left out
        while best_i > alo && best_j > blo && a[best_i - 1] == b[best_j - 1] {
            best_i -= 1;
            best_j -= 1;
            best_size += 1;
        }

        while best_i + best_size < ahi
            && best_j + best_size < bhi
            && a[best_i + best_size] == b[best_j + best_size]
        {
            best_size += 1;
        }

        MatchingBlock::new(best_i, best_j, best_size)
    }

    /// All matching blocks, ordered by offset, ending with the sentinel
    pub fn matching_blocks(&self) -> Vec<MatchingBlock> {
        let (la, lb) = (self.a.len(), self.b.len());

        let mut queue: Vec<(usize, usize, usize, usize)> = vec![(0, la, 0, lb)];
        let mut blocks: Vec<MatchingBlock> = Vec::new();

        while let Some((alo, ahi, blo, bhi)) = queue.pop() {
            let block = self.find_longest_match(alo, ahi, blo, bhi);

            if block.size > 0 {
                blocks.push(block);

                if alo < block.a && blo < block.b {
                    queue.push((alo, block.a, blo, block.b));
                }
                if block.a_end() < ahi && block.b_end() < bhi {
                    queue.push((block.a_end(), ahi, block.b_end(), bhi));
                }
            }
        }

        blocks.sort();

        // Coalesce blocks that touch in both sequences
        let mut non_adjacent: Vec<MatchingBlock> = Vec::with_capacity(blocks.len() + 1);
        let mut current = MatchingBlock::new(0, 0, 0);

        for block in blocks {
            if current.a_end() == block.a && current.b_end() == block.b {
                current.size += block.size;
            } else {
                if current.size > 0 {
                    non_adjacent.push(current);
                }
                current = block;
            }
        }

        if current.size > 0 {
            non_adjacent.push(current);
        }

        non_adjacent.push(MatchingBlock::new(la, lb, 0));
        non_adjacent
    }

    /// Total matched length
    pub fn matched_len(&self) -> usize {
        self.matching_blocks().iter().map(|b| b.size).sum()
    }

    /// Similarity ratio in `[0.0, 1.0]`
    pub fn ratio(&self) -> f64 {
        let total = self.a.len() + self.b.len();
        if total == 0 {
            return 1.0;
        }
        2.0 * self.matched_len() as f64 / total as f64
    }
}
