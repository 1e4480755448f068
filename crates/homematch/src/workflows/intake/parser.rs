use crate::workflows::placement::{AttributeWeights, Buyer, Neighborhood};
use std::num::{IntErrorKind, ParseIntError};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("line {line}: record has no name")]
    MissingName { line: usize },
    #[error("line {line}: buyer {buyer} has no preference list")]
    MissingPreferences { line: usize, buyer: String },
    #[error("line {line}: expected attribute:weight, found '{token}'")]
    MalformedPair { line: usize, token: String },
    #[error("line {line}: weight '{value}' for attribute {attribute} is not an integer")]
    InvalidWeight {
        line: usize,
        attribute: String,
        value: String,
        #[source]
        source: ParseIntError,
    },
    #[error("line {line}: weight '{value}' for attribute {attribute} is outside the 64-bit range")]
    WeightOutOfRange {
        line: usize,
        attribute: String,
        value: String,
    },
}

/// `N <name> <attr>:<weight> ...`
pub fn parse_neighborhood(line: &str, line_number: usize) -> Result<Neighborhood, ParseError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let name = tokens
        .get(1)
        .ok_or(ParseError::MissingName { line: line_number })?;
    let scores = parse_weights(&tokens[2..], line_number)?;

    Ok(Neighborhood::new(*name, scores))
}

/// `H <name> <attr>:<weight> ... <pref>><pref>...`; the final token is always
/// the preference list.
pub fn parse_buyer(line: &str, line_number: usize) -> Result<Buyer, ParseError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let name = tokens
        .get(1)
        .ok_or(ParseError::MissingName { line: line_number })?;
    if tokens.len() < 3 {
        return Err(ParseError::MissingPreferences {
            line: line_number,
            buyer: name.to_string(),
        });
    }

    let last = tokens.len() - 1;
    let goals = parse_weights(&tokens[2..last], line_number)?;
    let preferences = tokens[last].split('>').map(str::to_string).collect();

    Ok(Buyer::new(*name, goals, preferences))
}

fn parse_weights(tokens: &[&str], line_number: usize) -> Result<AttributeWeights, ParseError> {
    let mut weights = AttributeWeights::new();

    for token in tokens {
        let mut parts = token.split(':');
        let (Some(attribute), Some(value), None) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(ParseError::MalformedPair {
                line: line_number,
                token: token.to_string(),
            });
        };

        let weight = value
            .parse::<i64>()
            .map_err(|source| {
                let overflow = matches!(
                    source.kind(),
                    IntErrorKind::PosOverflow | IntErrorKind::NegOverflow
                );
                if overflow {
                    ParseError::WeightOutOfRange {
                        line: line_number,
                        attribute: attribute.to_string(),
                        value: value.to_string(),
                    }
                } else {
                    ParseError::InvalidWeight {
                        line: line_number,
                        attribute: attribute.to_string(),
                        value: value.to_string(),
                        source,
                    }
                }
            })?;
        weights.insert(attribute, weight);
    }

    Ok(weights)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_neighborhood_scores() {
        let neighborhood = parse_neighborhood("N N1 E:10 W:5 R:7", 1).expect("valid record");
        assert_eq!(neighborhood.name, "N1");
        assert_eq!(neighborhood.scores.get("E"), 10);
        assert_eq!(neighborhood.scores.get("W"), 5);
        assert_eq!(neighborhood.scores.get("R"), 7);
        assert!(neighborhood.assigned().is_empty());
    }

    #[test]
    fn parses_buyer_goals_and_ordered_preferences() {
        let buyer = parse_buyer("H H1 E:8 W:6 R:9 N1>N2>N3", 1).expect("valid record");
        assert_eq!(buyer.name, "H1");
        assert_eq!(buyer.goals.get("E"), 8);
        assert_eq!(buyer.goals.get("W"), 6);
        assert_eq!(buyer.goals.get("R"), 9);
        assert_eq!(buyer.preferences, vec!["N1", "N2", "N3"]);
    }

    #[test]
    fn buyer_without_goals_keeps_preferences() {
        let buyer = parse_buyer("H H1 N2", 1).expect("valid record");
        assert!(buyer.goals.is_empty());
        assert_eq!(buyer.preferences, vec!["N2"]);
    }

    #[test]
    fn signed_weights_parse() {
        let neighborhood = parse_neighborhood("N N1 E:-3 W:+4", 1).expect("valid record");
        assert_eq!(neighborhood.scores.get("E"), -3);
        assert_eq!(neighborhood.scores.get("W"), 4);
    }

    #[test]
    fn rejects_non_integer_neighborhood_weight() {
        let error = parse_neighborhood("N N1 E:invalid W:5 R:8", 3).expect_err("invalid weight");
        assert!(matches!(
            error,
            ParseError::InvalidWeight { line: 3, ref attribute, .. } if attribute == "E"
        ));
    }

    #[test]
    fn rejects_non_integer_buyer_goal() {
        let error = parse_buyer("H H1 E:8 W:invalid R:9 N1>N2", 1).expect_err("invalid goal");
        assert!(matches!(error, ParseError::InvalidWeight { .. }));
    }

    #[test]
    fn large_weights_within_i64_parse() {
        let neighborhood = parse_neighborhood("N N1 E:5000000000", 1).expect("valid record");
        assert_eq!(neighborhood.scores.get("E"), 5_000_000_000);
    }

    #[test]
    fn weights_wider_than_i64_are_out_of_range() {
        let error =
            parse_neighborhood("N N1 E:99999999999999999999", 2).expect_err("out of range");
        assert_eq!(
            error,
            ParseError::WeightOutOfRange {
                line: 2,
                attribute: "E".to_string(),
                value: "99999999999999999999".to_string(),
            }
        );
        assert!(matches!(
            parse_buyer("H H1 E:-99999999999999999999 N1", 1),
            Err(ParseError::WeightOutOfRange { .. })
        ));
    }

    #[test]
    fn rejects_pairs_without_single_separator() {
        assert!(matches!(
            parse_neighborhood("N N1 E10", 1),
            Err(ParseError::MalformedPair { ref token, .. }) if token == "E10"
        ));
        assert!(matches!(
            parse_neighborhood("N N1 E:1:2", 1),
            Err(ParseError::MalformedPair { .. })
        ));
    }

    #[test]
    fn rejects_records_without_name() {
        assert_eq!(
            parse_neighborhood("N", 4).expect_err("missing name"),
            ParseError::MissingName { line: 4 }
        );
    }

    #[test]
    fn rejects_buyer_without_preference_token() {
        assert_eq!(
            parse_buyer("H H1", 2).expect_err("missing preferences"),
            ParseError::MissingPreferences {
                line: 2,
                buyer: "H1".to_string(),
            }
        );
    }
}
