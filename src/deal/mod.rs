pub mod deck;
pub mod file;
pub mod round;

pub use deck::{Deck, Hand, DECK_SIZE, HANDS_PER_ROUND, HAND_SIZE};
pub use file::{read_deal_file, read_rounds, DealFileError, LINES_PER_ROUND};
pub use round::{Auxiliary, DealError, Direction, Round, RoundType};
