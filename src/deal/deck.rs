use crate::card::{Card, Suit, Value};
use crate::rng::RandomSource;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const DECK_SIZE: usize = 52;
pub const HAND_SIZE: usize = 13;
pub const HANDS_PER_ROUND: usize = DECK_SIZE / HAND_SIZE;

/// Full 52-card deck, ordered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Every value/suit combination, value-major
    pub fn standard() -> Self {
        let cards = Value::ALL
            .iter()
            .flat_map(|&value| Suit::ALL.iter().map(move |&suit| Card::new(value, suit)))
            .collect();
        Deck { cards }
    }

    pub fn shuffled<R: RandomSource>(rng: &mut R) -> Self {
        let mut deck = Deck::standard();
        deck.shuffle(rng);
        deck
    }

    pub fn shuffle<R: RandomSource>(&mut self, rng: &mut R) {
        rng.shuffle(&mut self.cards);
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Split into contiguous hands at offsets 0, 13, 26, 39
    pub fn hands(&self) -> [Hand; HANDS_PER_ROUND] {
        let mut chunks = self.cards.chunks(HAND_SIZE).map(|c| Hand::new(c.to_vec()));
        std::array::from_fn(|_| chunks.next().unwrap_or_default())
    }
}

/// One player's cards for a round
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new(cards: Vec<Card>) -> Self {
        Hand { cards }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for card in &self.cards {
            write!(f, "{}", card)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::DealRng;
    use std::collections::HashSet;

    #[test]
    fn test_standard_deck_is_complete() {
        let deck = Deck::standard();
        assert_eq!(deck.len(), DECK_SIZE);

        let unique: HashSet<_> = deck.cards().iter().collect();
        assert_eq!(unique.len(), DECK_SIZE, "Deck should have no duplicates");
    }

    #[test]
    fn test_standard_deck_order() {
        let tokens: Vec<String> = Deck::standard().cards().iter().map(|c| c.to_string()).collect();
        assert_eq!(&tokens[..5], &["2S", "2H", "2D", "2C", "3S"]);
        assert_eq!(tokens.last().map(String::as_str), Some("AC"));
    }

    #[test]
    fn test_shuffled_deck_keeps_every_card() {
        let mut rng = DealRng::new(Some(2024));
        let deck = Deck::shuffled(&mut rng);

        let mut shuffled = deck.cards().to_vec();
        shuffled.sort();
        let mut standard = Deck::standard().cards().to_vec();
        standard.sort();
        assert_eq!(shuffled, standard);
        assert_ne!(deck, Deck::standard(), "Shuffle should reorder the deck");
    }

    #[test]
    fn test_hands_partition_deck() {
        let mut rng = DealRng::new(Some(11));
        let deck = Deck::shuffled(&mut rng);
        let hands = deck.hands();

        for (i, hand) in hands.iter().enumerate() {
            assert_eq!(hand.len(), HAND_SIZE);
            assert_eq!(hand.cards(), &deck.cards()[i * HAND_SIZE..(i + 1) * HAND_SIZE]);
        }
    }

    #[test]
    fn test_hand_display_concatenates_tokens() {
        let hand = Hand::new(vec![
            Card::new(Value::Ten, Suit::Hearts),
            Card::new(Value::Ace, Suit::Spades),
        ]);
        assert_eq!(hand.to_string(), "10HAS");
    }
}
