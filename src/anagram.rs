use anyhow::Context;
use itertools::Itertools;
use lazy_format::lazy_format;

use crate::library::Counter;

/// True if `a` and `b` contain the same symbols with the same frequencies.
/// Unequal lengths fail fast without counting anything.
pub fn is_anagram_of(a: &str, b: &str) -> bool {
    if a.chars().count() != b.chars().count() {
        return false;
    }

    let left: Counter<char> = a.chars().collect();
    let right: Counter<char> = b.chars().collect();
    left == right
}

/// Input: the two candidate strings, one per line.
pub fn solve(input: &str) -> anyhow::Result<bool> {
    let line_count = input.lines().count();
    let (a, b) = input
        .lines()
        .collect_tuple()
        .context(lazy_format!("expected exactly two lines, got {line_count}"))?;

    Ok(is_anagram_of(a, b))
}
