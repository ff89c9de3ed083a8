pub mod types;

pub use types::{parse_cards, Card, CardParseError, Suit, Value};
