use super::deck::{Deck, Hand, DECK_SIZE, HANDS_PER_ROUND, HAND_SIZE};
use crate::rng::RandomSource;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use thiserror::Error;

pub const MIN_ROUND_TYPE: u8 = 1;
pub const MAX_ROUND_TYPE: u8 = 7;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DealError {
    #[error("Round type {0} out of range 1-7")]
    RoundTypeOutOfRange(u8),
    #[error("Invalid direction: '{0}'")]
    InvalidDirection(String),
    #[error("Malformed round header: '{0}'")]
    MalformedHeader(String),
    #[error("Hand {hand} has {count} cards, expected 13")]
    WrongHandSize { hand: usize, count: usize },
    #[error("Card {0} dealt more than once")]
    DuplicateCard(String),
    #[error("Round covers {0} distinct cards, expected 52")]
    IncompleteDeck(usize),
}

/// Seat that leads the round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    N,
    E,
    S,
    W,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::N, Direction::E, Direction::S, Direction::W];

    pub fn to_char(&self) -> char {
        match self {
            Direction::N => 'N',
            Direction::E => 'E',
            Direction::S => 'S',
            Direction::W => 'W',
        }
    }

    pub fn from_char(c: char) -> Result<Self, DealError> {
        Direction::ALL
            .iter()
            .copied()
            .find(|d| d.to_char() == c)
            .ok_or_else(|| DealError::InvalidDirection(c.to_string()))
    }
}

/// Game variant number for a round, always within 1-7
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct RoundType(u8);

impl RoundType {
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for RoundType {
    type Error = DealError;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        if (MIN_ROUND_TYPE..=MAX_ROUND_TYPE).contains(&n) {
            Ok(RoundType(n))
        } else {
            Err(DealError::RoundTypeOutOfRange(n))
        }
    }
}

impl From<RoundType> for u8 {
    fn from(t: RoundType) -> u8 {
        t.0
    }
}

/// The number/direction pair drawn independently of the deck
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Auxiliary {
    pub round_type: RoundType,
    pub direction: Direction,
}

impl Auxiliary {
    pub fn draw<R: RandomSource>(rng: &mut R) -> Self {
        let n = rng.next_int(MIN_ROUND_TYPE as u32, MAX_ROUND_TYPE as u32) as u8;
        Auxiliary {
            round_type: RoundType(n),
            direction: *rng.choice(&Direction::ALL),
        }
    }

    /// Parse a header line such as "3E"
    pub fn parse(line: &str) -> Result<Self, DealError> {
        let mut chars = line.chars();
        let (Some(digit), Some(dir), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(DealError::MalformedHeader(line.to_string()));
        };
        let n = digit
            .to_digit(10)
            .ok_or_else(|| DealError::MalformedHeader(line.to_string()))?;

        Ok(Auxiliary {
            round_type: RoundType::try_from(n as u8)?,
            direction: Direction::from_char(dir)?,
        })
    }
}

impl fmt::Display for Auxiliary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.round_type.value(), self.direction.to_char())
    }
}

/// One unit of output: an auxiliary token plus four hands
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    pub auxiliary: Auxiliary,
    pub hands: [Hand; HANDS_PER_ROUND],
}

impl Round {
    /// Draw the auxiliary token, then deal a freshly shuffled deck
    pub fn generate<R: RandomSource>(rng: &mut R) -> Self {
        let auxiliary = Auxiliary::draw(rng);
        let deck = Deck::shuffled(rng);
        Round {
            auxiliary,
            hands: deck.hands(),
        }
    }

    /// Check that the hands are four disjoint 13-card sets covering the deck
    pub fn validate(&self) -> Result<(), DealError> {
        let mut seen = HashSet::with_capacity(DECK_SIZE);
        for (i, hand) in self.hands.iter().enumerate() {
            if hand.len() != HAND_SIZE {
                return Err(DealError::WrongHandSize {
                    hand: i + 1,
                    count: hand.len(),
                });
            }
            for card in hand.cards() {
                if !seen.insert(*card) {
                    return Err(DealError::DuplicateCard(card.to_string()));
                }
            }
        }

        if seen.len() != DECK_SIZE {
            return Err(DealError::IncompleteDeck(seen.len()));
        }
        Ok(())
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl fmt::Display for Round {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.auxiliary)?;
        for hand in &self.hands {
            writeln!(f, "{}", hand)?;
        }
        Ok(())
    }
}
