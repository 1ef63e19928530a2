//! Subset-stepping search heuristic.
//!
//! The outer cursor advances by the needle length instead of one byte,
//! so the expected number of outer iterations drops to haystack/needle
//! when strides rarely anchor. Each stride byte is matched against every
//! needle offset (the fold); a hit proposes the window starting that
//! many bytes back, which is then verified left to right. Worst case
//! degrades to brute-force cost.
//!
//! The traversal order is part of the contract: the first verified
//! candidate wins, and within one stride window candidates are tried
//! from the stride byte backwards. On haystacks with several
//! occurrences this can disagree with the rightmost answer of
//! [`crate::baselines::BruteForceSearcher`], and also with a strictly
//! leftmost answer. That asymmetry is what the benchmark measures, so
//! it is preserved rather than normalized.

use crate::SubstringSearcher;

/// Stride-stepping matcher. See the module docs for the exact traversal
/// order it commits to.
pub struct SubstepSearcher;

impl SubstringSearcher for SubstepSearcher {
    fn find(&self, haystack: &[u8], needle: &[u8]) -> Option<usize> {
        if needle.is_empty() || needle.len() > haystack.len() {
            return None;
        }

        for i in (0..haystack.len()).step_by(needle.len()) {
            'fold: for fold in 0..needle.len() {
                if needle[fold] != haystack[i] {
                    continue;
                }
                if fold > i {
                    continue;
                }
                let fidx = i - fold;
                if fidx + needle.len() > haystack.len() {
                    continue;
                }
                // Anchor re-check before paying for the full scan.
                if haystack[fidx] != needle[0] {
                    continue;
                }
                for (j, &b) in needle.iter().enumerate() {
                    if haystack[fidx + j] != b {
                        continue 'fold;
                    }
                }
                return Some(fidx);
            }
        }
        None
    }
}
