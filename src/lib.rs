//! Last-Occurrence Search Benchmark
//!
//! Compares a right-to-left brute-force matcher against a stride-stepping
//! heuristic that advances the scan cursor by the needle length and
//! re-anchors through a local fold scan. The haystack is a deterministic
//! noise buffer derived from a seeded keyspace string.

pub mod baselines;
pub mod harness;
pub mod noise;
pub mod substep;

/// Trait for substring search implementations.
///
/// Implementations agree on *whether* a match exists but not on *which*
/// occurrence they report: [`baselines::BruteForceSearcher`] returns the
/// rightmost match, while [`substep::SubstepSearcher`] returns the first
/// match its stride traversal verifies. An empty needle and a needle
/// longer than the haystack both yield `None`.
pub trait SubstringSearcher {
    /// Find an occurrence of `needle` in `haystack`.
    /// Returns the byte offset of the reported match, or `None`.
    fn find(&self, haystack: &[u8], needle: &[u8]) -> Option<usize>;
}
