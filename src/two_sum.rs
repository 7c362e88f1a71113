use std::collections::HashMap;

use anyhow::Context;
use nom::{
    character::complete::{i64 as parse_i64, line_ending, space1},
    combinator::eof,
    IResult, Parser,
};
use nom_supreme::{
    error::ErrorTree,
    final_parser::{final_parser, Location},
    multi::collect_separated_terminated,
    ParserExt,
};
use thiserror::Error;

/// First pair of positions (by scan order of the right index) whose values
/// sum to `target`. One hash-map pass; earlier occurrences win ties among
/// duplicate values.
pub fn pair_indices_summing_to(values: &[i64], target: i64) -> Option<(usize, usize)> {
    let mut seen: HashMap<i64, usize> = HashMap::new();

    for (right, &value) in values.iter().enumerate() {
        if let Some(&left) = target
            .checked_sub(value)
            .and_then(|needed| seen.get(&needed))
        {
            return Some((left, right));
        }
        seen.entry(value).or_insert(right);
    }

    None
}

#[derive(Debug, Error)]
#[error("no pair of values sums to {target}")]
pub struct NoPairFound {
    pub target: i64,
}

#[derive(Debug, Clone)]
struct TwoSumInput {
    values: Vec<i64>,
    target: i64,
}

fn parse_number(input: &str) -> IResult<&str, i64, ErrorTree<&str>> {
    parse_i64(input)
}

fn parse_values(input: &str) -> IResult<&str, Vec<i64>, ErrorTree<&str>> {
    collect_separated_terminated(parse_number.context("value"), space1, line_ending).parse(input)
}

fn parse_input(input: &str) -> IResult<&str, TwoSumInput, ErrorTree<&str>> {
    parse_values
        .context("value list")
        .and(parse_number.context("target"))
        .terminated(eof.opt_preceded_by(line_ending))
        .map(|(values, target)| TwoSumInput { values, target })
        .parse(input)
}

fn final_parse_input(input: &str) -> Result<TwoSumInput, ErrorTree<Location>> {
    final_parser(parse_input)(input)
}

/// Input: one line of space-separated integers, then a line with the target.
pub fn solve(input: &str) -> anyhow::Result<(usize, usize)> {
    let TwoSumInput { values, target } =
        final_parse_input(input.trim()).context("failed to parse input")?;

    pair_indices_summing_to(&values, target)
        .ok_or(NoPairFound { target })
        .map_err(Into::into)
}
