//! Tab-separated election results.
//!
//! ```text
//! State	Democrat_votes	Republican_votes	EC_votes
//! AL	795696	1255925	9
//! ```
//!
//! The first line is a header and is ignored, as are blank lines.

use crate::config::ElectionConfig;
use crate::model::{Election, ElectionError, StateRecord};
use lazy_static::lazy_static;
use nom::bytes::complete::take_till1;
use nom::character::complete::{char, digit1};
use nom::combinator::{all_consuming, map_res};
use nom::sequence::{terminated, tuple};
use nom::IResult;
use regex::Regex;
use std::fs;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Line {line}: expected `state<TAB>dem<TAB>rep<TAB>ec`, got {text:?}")]
    Malformed { line: usize, text: String },
    #[error("Line {line}: invalid state name {name:?}")]
    InvalidStateName { line: usize, name: String },
    #[error("Electoral votes add up to {found}, expected {expected}")]
    ElectoralTotalMismatch { expected: u32, found: u32 },
    #[error("Election error: {0}")]
    Election(#[from] ElectionError),
}

pub type Result<T> = std::result::Result<T, FormatError>;

lazy_static! {
    static ref STATE_NAME_RX: Regex = Regex::new(r"^[A-Z0-9]{1,3}$").unwrap();
}

type Row<'a> = (&'a str, u64, u64, u32);

fn field(input: &str) -> IResult<&str, &str> {
    take_till1(|c| c == '\t')(input)
}

fn votes(input: &str) -> IResult<&str, u64> {
    map_res(digit1, str::parse::<u64>)(input)
}

fn electoral_votes(input: &str) -> IResult<&str, u32> {
    map_res(digit1, str::parse::<u32>)(input)
}

fn row(input: &str) -> IResult<&str, Row<'_>> {
    all_consuming(tuple((
        terminated(field, char('\t')),
        terminated(votes, char('\t')),
        terminated(votes, char('\t')),
        electoral_votes,
    )))(input)
}

fn parse_row(line_number: usize, line: &str) -> Result<StateRecord> {
    let (_, (name, dem, rep, ec)) = row(line).map_err(|_| FormatError::Malformed {
        line: line_number,
        text: line.to_string(),
    })?;

    let name = name.trim();
    if !STATE_NAME_RX.is_match(name) {
        return Err(FormatError::InvalidStateName {
            line: line_number,
            name: name.to_string(),
        });
    }

    Ok(StateRecord::new(name, dem, rep, ec))
}

/// Parse election results from the contents of a results file.
pub fn parse_election(contents: &str, config: &ElectionConfig) -> Result<Election> {
    let states = contents
        .lines()
        .enumerate()
        .skip(1)
        .map(|(index, line)| (index + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
        .map(|(line_number, line)| parse_row(line_number, line))
        .collect::<Result<Vec<_>>>()?;

    let election = Election::new(states)?.with_tie_break(config.tie_break);

    if let Some(expected) = config.total_electoral_votes {
        let found = election.total_electoral_votes();
        if found != expected {
            return Err(FormatError::ElectoralTotalMismatch { expected, found });
        }
    }

    Ok(election)
}

/// Read a results file from disk.
pub fn read_election(path: &Path, config: &ElectionConfig) -> Result<Election> {
    let contents = fs::read_to_string(path)?;
    let election = parse_election(&contents, config)?;
    log::info!(
        "loaded {} states ({} EC) from {}",
        election.len(),
        election.total_electoral_votes(),
        path.display()
    );
    Ok(election)
}
