/// True if the alphanumeric characters of `s` read the same in both
/// directions, ignoring case. Two-pointer scan; non-alphanumeric characters
/// are skipped rather than compared.
pub fn is_palindrome_ignoring_non_alnum(s: &str) -> bool {
    let chars: Vec<char> = s.chars().collect();
    let mut left = 0;
    let mut right = chars.len();

    loop {
        while left < right && !chars[left].is_alphanumeric() {
            left += 1;
        }
        while left < right && !chars[right - 1].is_alphanumeric() {
            right -= 1;
        }

        if right - left < 2 {
            break true;
        }

        let a = chars[left].to_lowercase();
        let b = chars[right - 1].to_lowercase();
        if !a.eq(b) {
            break false;
        }

        left += 1;
        right -= 1;
    }
}

/// Input: the candidate string on a single line.
pub fn solve(input: &str) -> anyhow::Result<bool> {
    Ok(is_palindrome_ignoring_non_alnum(
        input.trim_end_matches(['\r', '\n']),
    ))
}
