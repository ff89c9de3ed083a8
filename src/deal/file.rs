use super::deck::{Hand, HANDS_PER_ROUND};
use super::round::{Auxiliary, DealError, Round};
use crate::card::{parse_cards, CardParseError};
use std::io::BufRead;
use std::path::Path;
use thiserror::Error;

pub const LINES_PER_ROUND: usize = 1 + HANDS_PER_ROUND;

#[derive(Error, Debug)]
pub enum DealFileError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Invalid round at line {line}: {source}")]
    InvalidRound { line: usize, source: DealError },
    #[error("Invalid card at line {line}: {source}")]
    InvalidCard { line: usize, source: CardParseError },
    #[error("Truncated round starting at line {line}: expected {expected} lines, found {found}")]
    Truncated {
        line: usize,
        expected: usize,
        found: usize,
    },
}

/// Read a deal file and return every round in order
pub fn read_deal_file(path: impl AsRef<Path>) -> Result<Vec<Round>, DealFileError> {
    let file = std::fs::File::open(path)?;
    read_rounds(std::io::BufReader::new(file))
}

/// Parse rounds from a reader: a header line ("<1-7><NESW>") then four hand lines
pub fn read_rounds<R: BufRead>(reader: R) -> Result<Vec<Round>, DealFileError> {
    let lines = reader.lines().collect::<Result<Vec<_>, _>>()?;
    let mut rounds = Vec::with_capacity(lines.len() / LINES_PER_ROUND);

    for (index, chunk) in lines.chunks(LINES_PER_ROUND).enumerate() {
        let first_line = index * LINES_PER_ROUND + 1;
        if chunk.len() != LINES_PER_ROUND {
            return Err(DealFileError::Truncated {
                line: first_line,
                expected: LINES_PER_ROUND,
                found: chunk.len(),
            });
        }

        let auxiliary = Auxiliary::parse(chunk[0].trim_end()).map_err(|source| {
            DealFileError::InvalidRound {
                line: first_line,
                source,
            }
        })?;

        let mut hands: [Hand; HANDS_PER_ROUND] = Default::default();
        for (offset, text) in chunk[1..].iter().enumerate() {
            let cards = parse_cards(text.trim_end()).map_err(|source| DealFileError::InvalidCard {
                line: first_line + 1 + offset,
                source,
            })?;
            hands[offset] = Hand::new(cards);
        }

        let round = Round { auxiliary, hands };
        round.validate().map_err(|source| DealFileError::InvalidRound {
            line: first_line,
            source,
        })?;
        rounds.push(round);
    }

    Ok(rounds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::DealRng;
    use std::io::Cursor;

    fn sample_text(seed: u64, count: usize) -> (Vec<Round>, String) {
        let mut rng = DealRng::new(Some(seed));
        let rounds: Vec<Round> = (0..count).map(|_| Round::generate(&mut rng)).collect();
        let text = rounds.iter().map(|r| r.to_string()).collect();
        (rounds, text)
    }

    #[test]
    fn test_read_generated_rounds() {
        let (rounds, text) = sample_text(42, 3);
        let parsed = read_rounds(Cursor::new(text)).expect("valid deal text");
        assert_eq!(parsed, rounds);
    }

    #[test]
    fn test_empty_input_has_no_rounds() {
        let parsed = read_rounds(Cursor::new("")).expect("empty is valid");
        assert!(parsed.is_empty());
    }

    #[test]
    fn test_truncated_round() {
        let (_, text) = sample_text(1, 2);
        let short: String = text.lines().take(8).map(|l| format!("{}\n", l)).collect();

        match read_rounds(Cursor::new(short)) {
            Err(DealFileError::Truncated { line, found, .. }) => {
                assert_eq!(line, 6);
                assert_eq!(found, 3);
            }
            other => panic!("expected truncation error, got {:?}", other),
        }
    }

    #[test]
    fn test_bad_header_reports_line() {
        let (_, text) = sample_text(5, 2);
        let mut lines: Vec<String> = text.lines().map(String::from).collect();
        lines[5] = "9Q".to_string();

        match read_rounds(Cursor::new(lines.join("\n"))) {
            Err(DealFileError::InvalidRound { line, .. }) => assert_eq!(line, 6),
            other => panic!("expected header error, got {:?}", other),
        }
    }

    #[test]
    fn test_bad_card_reports_line() {
        let (_, text) = sample_text(6, 1);
        let mut lines: Vec<String> = text.lines().map(String::from).collect();
        lines[3] = lines[3].replacen(|c| c == 'S' || c == 'H' || c == 'D' || c == 'C', "X", 1);

        match read_rounds(Cursor::new(lines.join("\n"))) {
            Err(DealFileError::InvalidCard { line, .. }) => assert_eq!(line, 4),
            other => panic!("expected card error, got {:?}", other),
        }
    }

    #[test]
    fn test_swapped_card_breaks_partition() {
        let (_, text) = sample_text(9, 1);
        let mut lines: Vec<String> = text.lines().map(String::from).collect();
        // replace hand 4 with a copy of hand 3
        lines[4] = lines[3].clone();

        match read_rounds(Cursor::new(lines.join("\n"))) {
            Err(DealFileError::InvalidRound { line: 1, source }) => {
                assert!(matches!(source, DealError::DuplicateCard(_)));
            }
            other => panic!("expected partition error, got {:?}", other),
        }
    }
}
