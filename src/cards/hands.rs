use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::str::FromStr;

use strum_macros::EnumIter;
use thiserror::Error;
use tracing::debug;

use super::basic::{Card, Rank};

/// Number of cards in a poker hand.
pub const HAND_SIZE: usize = 5;

/// Rank values of the ace-low straight.
const WHEEL: [u8; HAND_SIZE] = [2, 3, 4, 5, 14];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HandError {
    #[error("Invalid card {0:?}")]
    InvalidCard(String),
    #[error("Invalid hand size: expected {expected} cards, got {0}", expected = HAND_SIZE)]
    InvalidHandSize(usize),
    #[error("Duplicate card {0}")]
    DuplicateCard(Card),
}

/// The nine hand categories, the discriminant is the category rank.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
    EnumIter,
)]
pub enum Category {
    HighCard = 1,
    Pair = 2,
    TwoPair = 3,
    ThreeOfAKind = 4,
    Straight = 5,
    Flush = 6,
    FullHouse = 7,
    FourOfAKind = 8,
    StraightFlush = 9,
}

impl Category {
    pub fn rank(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            Category::HighCard => "high card",
            Category::Pair => "pair",
            Category::TwoPair => "two pair",
            Category::ThreeOfAKind => "three of a kind",
            Category::Straight => "straight",
            Category::Flush => "flush",
            Category::FullHouse => "full house",
            Category::FourOfAKind => "four of a kind",
            Category::StraightFlush => "straight flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Ranks deciding between two hands of the same category, most significant
/// first, compared lexicographically.
///
/// | Category        | Ranks                              |
/// |-----------------|------------------------------------|
/// | straight flush  | top card (5 for A-2-3-4-5)         |
/// | four of a kind  | quad, kicker                       |
/// | full house      | triplet, pair                      |
/// | flush           | all five, descending               |
/// | straight        | top card (5 for A-2-3-4-5)         |
/// | three of a kind | triplet, two kickers descending    |
/// | two pair        | high pair, low pair, kicker        |
/// | pair            | pair, three kickers descending     |
/// | high card       | all five, descending               |
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
pub struct TieBreak(Vec<u8>);

impl TieBreak {
    pub fn ranks(&self) -> &[u8] {
        &self.0
    }
}

/// The classification of a hand.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize)]
pub struct Evaluation {
    category: Category,
    tiebreak: TieBreak,
}

impl Evaluation {
    pub fn category(&self) -> Category {
        self.category
    }

    pub fn tiebreak(&self) -> &TieBreak {
        &self.tiebreak
    }

    /// The most significant tie-break rank: the highest rank among the
    /// largest group, or the straight top card.
    pub fn determining(&self) -> u8 {
        // Only built by classification, which always yields at least one rank
        self.tiebreak.0[0]
    }
}

impl PartialOrd for Evaluation {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Evaluation {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.category.rank().cmp(&other.category.rank()) {
            Ordering::Equal => self.tiebreak.cmp(&other.tiebreak),
            other => other,
        }
    }
}

/// Five distinct cards stored in canonical order.
///
/// Two hands are equal when they evaluate the same, whatever their suits.
#[derive(Clone)]
pub struct Hand {
    cards: [Card; HAND_SIZE],
    evaluation: Evaluation,
}

impl Hand {
    pub fn from_cards(cards: &[Card]) -> Result<Self, HandError> {
        let mut array: [Card; HAND_SIZE] = cards.try_into().map_err(|_| {
            debug!(count = cards.len(), "Rejected hand with wrong number of cards");
            HandError::InvalidHandSize(cards.len())
        })?;

        let mut seen = HashSet::with_capacity(HAND_SIZE);
        if let Some(duplicate) = array.iter().find(|card| !seen.insert(**card)) {
            debug!(card = %duplicate, "Rejected hand with duplicate card");
            return Err(HandError::DuplicateCard(*duplicate));
        }

        array.sort_by_key(Card::canonical_key);
        let evaluation = Self::classify(&array);

        let hand = Self {
            cards: array,
            evaluation,
        };
        debug!(%hand, category = %hand.category(), "Evaluated hand");

        Ok(hand)
    }

    pub fn from_tokens<I, S>(tokens: I) -> Result<Self, HandError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let cards = tokens
            .into_iter()
            .map(|token| token.as_ref().parse::<Card>())
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_cards(&cards)
    }

    /// The cards in canonical order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn evaluate(&self) -> &Evaluation {
        &self.evaluation
    }

    pub fn category(&self) -> Category {
        self.evaluation.category
    }

    fn classify(cards: &[Card; HAND_SIZE]) -> Evaluation {
        let is_flush = cards.iter().all(|card| card.suit() == cards[0].suit());
        let straight_top = Self::straight_top(cards);

        let groups = Self::rank_groups(cards);
        let counts: Vec<usize> = groups.iter().map(|&(count, _)| count).collect();

        let category = match (straight_top, is_flush, counts.as_slice()) {
            (Some(_), true, _) => Category::StraightFlush,
            (_, _, [4, ..]) => Category::FourOfAKind,
            (_, _, [3, 2]) => Category::FullHouse,
            (_, true, _) => Category::Flush,
            (Some(_), _, _) => Category::Straight,
            (_, _, [3, ..]) => Category::ThreeOfAKind,
            (_, _, [2, 2, ..]) => Category::TwoPair,
            (_, _, [2, ..]) => Category::Pair,
            _ => Category::HighCard,
        };

        let tiebreak = match (category, straight_top) {
            (Category::StraightFlush | Category::Straight, Some(top)) => vec![top],
            _ => groups.iter().map(|&(_, rank)| rank).collect(),
        };

        Evaluation {
            category,
            tiebreak: TieBreak(tiebreak),
        }
    }

    /// Returns the top card value if the cards make a straight.
    fn straight_top(cards: &[Card; HAND_SIZE]) -> Option<u8> {
        let mut ranks: Vec<u8> = cards.iter().map(|card| card.rank().value()).collect();
        ranks.sort_unstable();
        ranks.dedup();

        if ranks.len() != HAND_SIZE {
            return None;
        }

        // The ace plays low in A-2-3-4-5
        if ranks == WHEEL {
            return Some(Rank::Five.value());
        }

        let (low, high) = (ranks[0], ranks[HAND_SIZE - 1]);
        (high - low == 4).then_some(high)
    }

    /// Returns (count, rank) pairs sorted by count then rank, both descending.
    fn rank_groups(cards: &[Card; HAND_SIZE]) -> Vec<(usize, u8)> {
        let mut counts = HashMap::new();
        for card in cards {
            *counts.entry(card.rank().value()).or_insert(0) += 1;
        }

        let mut groups: Vec<(usize, u8)> = counts
            .into_iter()
            .map(|(rank, count)| (count, rank))
            .collect();
        groups.sort_unstable_by(|a, b| b.cmp(a));
        groups
    }
}

impl FromStr for Hand {
    type Err = HandError;

    /// Parses whitespace separated card tokens, e.g. `"As Ks Qs Js 10s"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tokens(s.split_whitespace())
    }
}

impl PartialEq for Hand {
    fn eq(&self, other: &Self) -> bool {
        self.evaluation == other.evaluation
    }
}

impl Eq for Hand {}

impl PartialOrd for Hand {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Hand {
    fn cmp(&self, other: &Self) -> Ordering {
        self.evaluation.cmp(&other.evaluation)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Hand {self}>")
    }
}

/// Parses two hands and orders the first against the second.
pub fn compare_hands(hand: &str, other: &str) -> Result<Ordering, HandError> {
    let hand: Hand = hand.parse()?;
    let other: Hand = other.parse()?;

    let ordering = hand.cmp(&other);
    debug!(
        %hand,
        category = %hand.category(),
        %other,
        other_category = %other.category(),
        ?ordering,
        "Compared hands"
    );

    Ok(ordering)
}
