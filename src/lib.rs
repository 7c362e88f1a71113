pub mod anagram;
pub mod library;
pub mod palindrome;
pub mod reverse;
pub mod two_sum;
pub mod window;

pub use window::{longest_unique_run, longest_unique_substring};
