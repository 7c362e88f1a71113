use std::collections::HashMap;
use std::hash::Hash;

/// Length of the longest contiguous run of pairwise-distinct symbols.
///
/// Single forward pass with a last-occurrence index map: the window
/// `[left, right]` always contains only distinct symbols, and `left` only
/// ever moves forward. O(n) time, O(alphabet) space.
pub fn longest_unique_run<T: Eq + Hash>(seq: &[T]) -> usize {
    let mut last_seen: HashMap<&T, usize> = HashMap::new();
    let mut left = 0;
    let mut max_len = 0;

    for (right, symbol) in seq.iter().enumerate() {
        if let Some(&idx) = last_seen.get(symbol) {
            // A hit behind `left` is already outside the window
            if idx >= left {
                left = idx + 1;
            }
        }
        last_seen.insert(symbol, right);
        max_len = max_len.max(right - left + 1);
    }

    max_len
}

/// [`longest_unique_run`] over the chars of a string.
pub fn longest_unique_substring(s: &str) -> usize {
    let chars: Vec<char> = s.chars().collect();
    longest_unique_run(&chars)
}

/// Input: the string to scan on a single line.
pub fn solve(input: &str) -> anyhow::Result<usize> {
    Ok(longest_unique_substring(input.trim_end_matches(['\r', '\n'])))
}
