use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CardParseError {
    #[error("Invalid card value: '{0}'")]
    InvalidValue(String),
    #[error("Invalid suit: '{0}'")]
    InvalidSuit(String),
    #[error("Incomplete card token: '{0}'")]
    Incomplete(String),
}

/// Card values, lowest to highest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Value {
    #[serde(rename = "2")]
    Two,
    #[serde(rename = "3")]
    Three,
    #[serde(rename = "4")]
    Four,
    #[serde(rename = "5")]
    Five,
    #[serde(rename = "6")]
    Six,
    #[serde(rename = "7")]
    Seven,
    #[serde(rename = "8")]
    Eight,
    #[serde(rename = "9")]
    Nine,
    #[serde(rename = "10")]
    Ten,
    #[serde(rename = "J")]
    Jack,
    #[serde(rename = "Q")]
    Queen,
    #[serde(rename = "K")]
    King,
    #[serde(rename = "A")]
    Ace,
}

impl Value {
    pub const ALL: [Value; 13] = [
        Value::Two,
        Value::Three,
        Value::Four,
        Value::Five,
        Value::Six,
        Value::Seven,
        Value::Eight,
        Value::Nine,
        Value::Ten,
        Value::Jack,
        Value::Queen,
        Value::King,
        Value::Ace,
    ];

    pub fn text(&self) -> &'static str {
        match self {
            Value::Two => "2",
            Value::Three => "3",
            Value::Four => "4",
            Value::Five => "5",
            Value::Six => "6",
            Value::Seven => "7",
            Value::Eight => "8",
            Value::Nine => "9",
            Value::Ten => "10",
            Value::Jack => "J",
            Value::Queen => "Q",
            Value::King => "K",
            Value::Ace => "A",
        }
    }
}

impl FromStr for Value {
    type Err = CardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Value::ALL
            .iter()
            .copied()
            .find(|v| v.text() == s)
            .ok_or_else(|| CardParseError::InvalidValue(s.to_string()))
    }
}

/// Card suits in deck-building order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    #[serde(rename = "S")]
    Spades,
    #[serde(rename = "H")]
    Hearts,
    #[serde(rename = "D")]
    Diamonds,
    #[serde(rename = "C")]
    Clubs,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];

    /// Convert to the single character representation
    pub fn to_char(&self) -> char {
        match self {
            Suit::Spades => 'S',
            Suit::Hearts => 'H',
            Suit::Diamonds => 'D',
            Suit::Clubs => 'C',
        }
    }

    pub fn from_char(c: char) -> Option<Suit> {
        Suit::ALL.iter().copied().find(|s| s.to_char() == c)
    }
}

/// A single playing card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Card {
    pub value: Value,
    pub suit: Suit,
}

impl Card {
    pub fn new(value: Value, suit: Suit) -> Self {
        Card { value, suit }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value.text(), self.suit.to_char())
    }
}

impl FromStr for Card {
    type Err = CardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let suit_char = s
            .chars()
            .last()
            .ok_or_else(|| CardParseError::Incomplete(s.to_string()))?;
        let value_text = &s[..s.len() - suit_char.len_utf8()];
        if value_text.is_empty() {
            return Err(CardParseError::Incomplete(s.to_string()));
        }

        let value = value_text.parse()?;
        let suit = Suit::from_char(suit_char)
            .ok_or_else(|| CardParseError::InvalidSuit(suit_char.to_string()))?;
        Ok(Card { value, suit })
    }
}

/// Split a line of concatenated card tokens (e.g. "10HAS7C") into cards
pub fn parse_cards(line: &str) -> Result<Vec<Card>, CardParseError> {
    let mut cards = Vec::new();
    let mut rest = line;

    while !rest.is_empty() {
        // "10" is the only two-character value
        let token_len = if rest.starts_with("10") { 3 } else { 2 };
        let Some(token) = rest.get(..token_len) else {
            return Err(CardParseError::Incomplete(rest.to_string()));
        };
        cards.push(token.parse()?);
        rest = &rest[token_len..];
    }

    Ok(cards)
}
