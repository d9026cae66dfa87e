// Library crate for five-card poker hand evaluation
// This file exposes the public API for integration tests and the binary

pub mod cards;
pub mod showdown;

// Re-export commonly used types for easier access
pub use cards::{compare_hands, Card, Category, Evaluation, Hand, HandError, Rank, Suit, TieBreak};
pub use showdown::{run_battery, Check, CheckOutcome};
