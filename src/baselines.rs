use crate::SubstringSearcher;

/// Right-to-left brute-force matcher.
///
/// Candidate windows are scanned by their end position from the top of
/// the haystack downward, and each window is compared tail-first with a
/// short-circuit on the first mismatch, so the rightmost occurrence is
/// reported. O(n*m) worst case.
pub struct BruteForceSearcher;

impl SubstringSearcher for BruteForceSearcher {
    fn find(&self, haystack: &[u8], needle: &[u8]) -> Option<usize> {
        if needle.is_empty() || needle.len() > haystack.len() {
            return None;
        }

        let tail = needle.len() - 1;
        'window: for end in (tail..haystack.len()).rev() {
            let start = end - tail;
            for j in (0..needle.len()).rev() {
                if haystack[start + j] != needle[j] {
                    continue 'window;
                }
            }
            return Some(start);
        }
        None
    }
}
