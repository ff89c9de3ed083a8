pub mod card;
pub mod deal;
pub mod output;
pub mod rng;
