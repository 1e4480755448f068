//! Line-oriented record intake producing the roster and buyer list for a run.

mod parser;

pub use parser::{parse_buyer, parse_neighborhood, ParseError};

use crate::workflows::placement::{Buyer, NeighborhoodRoster};
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use tracing::{debug, info, warn};

#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
    #[error("failed to read input records: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid input record: {0}")]
    Parse(#[from] ParseError),
}

/// Everything a placement run needs, as read from the input.
#[derive(Debug, Default)]
pub struct ParsedInput {
    pub roster: NeighborhoodRoster,
    /// Input order; ranking ties fall back to this order.
    pub buyers: Vec<Buyer>,
}

pub fn load_records<P: AsRef<Path>>(path: P) -> Result<ParsedInput, IntakeError> {
    let path = path.as_ref();
    let file = std::fs::File::open(path)?;
    let parsed = parse_records(file)?;
    info!(
        path = %path.display(),
        neighborhoods = parsed.roster.len(),
        buyers = parsed.buyers.len(),
        "loaded input records"
    );
    Ok(parsed)
}

/// Lines starting with `N` are neighborhoods, lines starting with `H` are
/// buyers, and everything else is skipped.
pub fn parse_records<R: Read>(reader: R) -> Result<ParsedInput, IntakeError> {
    let mut parsed = ParsedInput::default();

    for (index, line) in BufReader::new(reader).lines().enumerate() {
        let line = line?;
        let line = line.trim();
        let line_number = index + 1;

        if line.starts_with('N') {
            parsed.roster.insert(parse_neighborhood(line, line_number)?);
        } else if line.starts_with('H') {
            parsed.buyers.push(parse_buyer(line, line_number)?);
        } else if !line.is_empty() {
            debug!(line_number, "skipping unrecognized line");
        }
    }

    if parsed.roster.is_empty() && !parsed.buyers.is_empty() {
        warn!(
            buyers = parsed.buyers.len(),
            "input lists buyers but no neighborhoods"
        );
    }

    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn parses_mixed_records_in_order() {
        let input = "N N1 E:7 W:5 R:8\n\n# comment\nH H1 E:8 W:6 R:9 N1>N2\nN N2 E:1\nH H2 E:1 N2\n";
        let parsed = parse_records(Cursor::new(input)).expect("records parse");

        assert_eq!(parsed.roster.len(), 2);
        assert_eq!(
            parsed.roster.get("N1").expect("N1 present").scores.get("E"),
            7
        );
        let names: Vec<&str> = parsed.buyers.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["H1", "H2"]);
        assert_eq!(parsed.buyers[0].goals.get("E"), 8);
    }

    #[test]
    fn empty_input_yields_empty_sets() {
        let parsed = parse_records(Cursor::new("")).expect("empty input parses");
        assert!(parsed.roster.is_empty());
        assert!(parsed.buyers.is_empty());
    }

    #[test]
    fn buyers_parse_without_any_neighborhoods() {
        let parsed = parse_records(Cursor::new("H H1 E:1 N1\nH H2 E:2 N1\n"))
            .expect("buyers-only input parses");
        assert!(parsed.roster.is_empty());
        assert_eq!(parsed.buyers.len(), 2);
    }

    #[test]
    fn parse_errors_report_line_number() {
        let input = "N N1 E:7\nH H1 E:8 W:invalid R:9 N1>N2\n";
        let error = parse_records(Cursor::new(input)).expect_err("invalid weight");
        match error {
            IntakeError::Parse(ParseError::InvalidWeight { line, ref value, .. }) => {
                assert_eq!(line, 2);
                assert_eq!(value, "invalid");
            }
            other => panic!("expected invalid weight, got {other:?}"),
        }
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        let parsed =
            parse_records(Cursor::new("   N N1   E:7\tW:5  \r\n")).expect("records parse");
        let scores = &parsed.roster.get("N1").expect("N1 present").scores;
        assert_eq!(scores.get("E"), 7);
        assert_eq!(scores.get("W"), 5);
    }

    #[test]
    fn load_records_propagates_io_errors() {
        let error = load_records("./does-not-exist.txt").expect_err("missing file");
        assert!(matches!(error, IntakeError::Io(_)));
    }
}
