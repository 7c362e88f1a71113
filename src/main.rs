use std::fs;
use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Kata {
    /// Longest run of non-repeating characters
    UniqueWindow,
    /// Indices of the first pair of values summing to a target
    TwoSum,
    /// Are two strings anagrams of each other
    Anagram,
    /// Is a string a palindrome, ignoring case and punctuation
    Palindrome,
    /// Reverse a string
    Reverse,
}

/// Run one of the interview katas against an input file (or stdin).
#[derive(Debug, Parser)]
#[command(version)]
struct Args {
    /// Which kata to run
    #[arg(value_enum)]
    kata: Kata,

    /// Input file; reads stdin when omitted
    input: Option<PathBuf>,
}

fn read_input(path: Option<&PathBuf>) -> anyhow::Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .context("failed to read stdin")?;
            Ok(input)
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let input = read_input(args.input.as_ref())?;

    match args.kata {
        Kata::UniqueWindow => println!("{}", katas::window::solve(&input)?),
        Kata::TwoSum => {
            let (i, j) = katas::two_sum::solve(&input)?;
            println!("{i} {j}");
        }
        Kata::Anagram => println!("{}", katas::anagram::solve(&input)?),
        Kata::Palindrome => println!("{}", katas::palindrome::solve(&input)?),
        Kata::Reverse => println!("{}", katas::reverse::solve(&input)?),
    }

    Ok(())
}
