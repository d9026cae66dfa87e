pub mod basic;
pub mod hands;

pub use basic::{Card, Rank, Suit};
pub use hands::{compare_hands, Category, Evaluation, Hand, HandError, TieBreak, HAND_SIZE};
