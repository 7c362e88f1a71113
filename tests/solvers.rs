//! End-to-end tests for the kata drivers: raw textual input in, printed
//! value out, the same path the CLI binary takes.

use katas::{anagram, palindrome, reverse, two_sum, window};

#[test]
fn unique_window_on_raw_input() {
    assert_eq!(window::solve("abcabcbb\n").unwrap(), 3);
    assert_eq!(window::solve("").unwrap(), 0);
}

#[test]
fn two_sum_on_raw_input() {
    assert_eq!(two_sum::solve("2 7 11 15\n9\n").unwrap(), (0, 1));

    let err = two_sum::solve("2 7 11 15\n1000\n").unwrap_err();
    assert_eq!(
        err.downcast_ref::<two_sum::NoPairFound>().unwrap().target,
        1000
    );
}

#[test]
fn anagram_on_raw_input() {
    assert!(anagram::solve("anagram\nnagaram\n").unwrap());
    assert!(!anagram::solve("anagram\nnagaramm\n").unwrap());
}

#[test]
fn palindrome_on_raw_input() {
    assert!(palindrome::solve("A man, a plan, a canal: Panama\n").unwrap());
    assert!(!palindrome::solve("race a car\n").unwrap());
}

#[test]
fn reverse_on_raw_input() {
    assert_eq!(reverse::solve("desserts\n").unwrap(), "stressed");
}

#[test]
fn kernels_agree_with_each_other_on_shared_inputs() {
    // A string of pairwise-distinct characters is its own longest window,
    // and reversing it changes neither that nor its anagram class.
    let s = "abcdefg";
    let reversed = reverse::solve(s).unwrap();

    assert_eq!(katas::longest_unique_substring(s), s.len());
    assert_eq!(
        katas::longest_unique_substring(&reversed),
        reversed.chars().count()
    );
    assert!(anagram::is_anagram_of(s, &reversed));
}
