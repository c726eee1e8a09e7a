pub mod tsv;

pub use tsv::{parse_election, read_election, FormatError};
