/// Reverse a sequence in place with a two-pointer swap.
pub fn reverse_in_place<T>(seq: &mut [T]) {
    let mut left = 0;
    let mut right = seq.len();

    while right - left > 1 {
        seq.swap(left, right - 1);
        left += 1;
        right -= 1;
    }
}

/// Input: the string to reverse on a single line.
pub fn solve(input: &str) -> anyhow::Result<String> {
    let mut chars: Vec<char> = input.trim_end_matches(['\r', '\n']).chars().collect();
    reverse_in_place(&mut chars);
    Ok(chars.into_iter().collect())
}
