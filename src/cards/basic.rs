use std::cmp::Reverse;
use std::fmt;
use std::str::FromStr;

use strum::IntoEnumIterator;
use strum_macros::EnumIter;

use super::hands::HandError;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize, EnumIter,
)]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

impl Suit {
    /// The single character used for this suit in card tokens.
    pub fn symbol(self) -> char {
        match self {
            Suit::Hearts => 'h',
            Suit::Diamonds => 'd',
            Suit::Clubs => 'c',
            Suit::Spades => 's',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl TryFrom<char> for Suit {
    type Error = String;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'h' => Ok(Suit::Hearts),
            'd' => Ok(Suit::Diamonds),
            'c' => Ok(Suit::Clubs),
            's' => Ok(Suit::Spades),
            _ => Err(c.to_string()),
        }
    }
}

/// Card rank, the discriminant is the numeric value with the ace played high.
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
pub enum Rank {
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Ten = 10,
    Jack = 11,
    Queen = 12,
    King = 13,
    Ace = 14,
}

impl Rank {
    pub fn value(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Rank::Two => "2",
                Rank::Three => "3",
                Rank::Four => "4",
                Rank::Five => "5",
                Rank::Six => "6",
                Rank::Seven => "7",
                Rank::Eight => "8",
                Rank::Nine => "9",
                Rank::Ten => "10",
                Rank::Jack => "J",
                Rank::Queen => "Q",
                Rank::King => "K",
                Rank::Ace => "A",
            }
        )
    }
}

impl TryFrom<&str> for Rank {
    type Error = String;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "2" => Ok(Rank::Two),
            "3" => Ok(Rank::Three),
            "4" => Ok(Rank::Four),
            "5" => Ok(Rank::Five),
            "6" => Ok(Rank::Six),
            "7" => Ok(Rank::Seven),
            "8" => Ok(Rank::Eight),
            "9" => Ok(Rank::Nine),
            "10" => Ok(Rank::Ten),
            "J" => Ok(Rank::Jack),
            "Q" => Ok(Rank::Queen),
            "K" => Ok(Rank::King),
            "A" => Ok(Rank::Ace),
            _ => Err(s.to_string()),
        }
    }
}

/// A playing card.
///
/// Cards have no public ordering, hands sort them with [`Card::canonical_key`]
/// for display and classification only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    pub fn rank(&self) -> Rank {
        self.rank
    }

    pub fn suit(&self) -> Suit {
        self.suit
    }

    /// Sort key putting higher ranks first, then higher suit characters.
    pub(crate) fn canonical_key(&self) -> (Reverse<Rank>, Reverse<char>) {
        (Reverse(self.rank), Reverse(self.suit.symbol()))
    }

    pub fn all_cards() -> Vec<Card> {
        let mut cards = Vec::new();
        for suit in Suit::iter() {
            for rank in Rank::iter() {
                cards.push(Card::new(rank, suit));
            }
        }
        cards
    }
}

impl FromStr for Card {
    type Err = HandError;

    /// Parses a `<rank><suit>` token such as `"Ks"` or `"10d"`, the last
    /// character is the suit and everything before it the rank.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || HandError::InvalidCard(s.to_string());

        let mut chars = s.chars();
        let suit = chars.next_back().ok_or_else(invalid)?;
        let rank = Rank::try_from(chars.as_str()).map_err(|_| invalid())?;
        let suit = Suit::try_from(suit).map_err(|_| invalid())?;

        Ok(Self::new(rank, suit))
    }
}

impl TryFrom<&str> for Card {
    type Error = HandError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_from_string() {
        let king_spades: Card = "Ks".parse().unwrap();
        assert_eq!(king_spades.rank(), Rank::King);
        assert_eq!(king_spades.rank().value(), 13);
        assert_eq!(king_spades.suit(), Suit::Spades);

        let ace_clubs = Card::try_from("Ac").unwrap();
        assert_eq!(ace_clubs.rank().value(), 14);
        assert_eq!(ace_clubs.suit(), Suit::Clubs);

        let ten_diamonds: Card = "10d".parse().unwrap();
        assert_eq!(ten_diamonds.rank(), Rank::Ten);
        assert_eq!(ten_diamonds.suit(), Suit::Diamonds);

        // Invalid tokens
        assert!("Zh".parse::<Card>().is_err());
        assert!("Kx".parse::<Card>().is_err());
        assert!("K".parse::<Card>().is_err());
    }

    #[test]
    fn test_card_from_string_edge_cases() {
        assert_eq!(
            "".parse::<Card>(),
            Err(HandError::InvalidCard(String::new()))
        );

        // Ranks and suits are case-sensitive
        assert!("ks".parse::<Card>().is_err());
        assert!("KS".parse::<Card>().is_err());

        // Ten is only spelled "10"
        assert!("Ts".parse::<Card>().is_err());
        assert!("1s".parse::<Card>().is_err());
        assert!("010s".parse::<Card>().is_err());

        // Multibyte characters are rejected, not split
        assert!("K♠".parse::<Card>().is_err());
        assert!("♠s".parse::<Card>().is_err());
    }

    #[test]
    fn test_rank_try_from() {
        let expected = [
            ("2", 2),
            ("3", 3),
            ("4", 4),
            ("5", 5),
            ("6", 6),
            ("7", 7),
            ("8", 8),
            ("9", 9),
            ("10", 10),
            ("J", 11),
            ("Q", 12),
            ("K", 13),
            ("A", 14),
        ];

        for (text, value) in expected {
            assert_eq!(Rank::try_from(text).map(Rank::value), Ok(value));
        }

        assert!(Rank::try_from("1").is_err());
        assert!(Rank::try_from("11").is_err());
        assert!(Rank::try_from("").is_err());
    }

    #[test]
    fn test_suit_try_from() {
        assert_eq!(Suit::try_from('h'), Ok(Suit::Hearts));
        assert_eq!(Suit::try_from('d'), Ok(Suit::Diamonds));
        assert_eq!(Suit::try_from('c'), Ok(Suit::Clubs));
        assert_eq!(Suit::try_from('s'), Ok(Suit::Spades));

        assert!(Suit::try_from('x').is_err());
        assert!(Suit::try_from('H').is_err());
    }

    #[test]
    fn test_card_display() {
        assert_eq!(Card::new(Rank::King, Suit::Hearts).to_string(), "Kh");
        assert_eq!(Card::new(Rank::Two, Suit::Spades).to_string(), "2s");
        assert_eq!(Card::new(Rank::Ten, Suit::Diamonds).to_string(), "10d");
        assert_eq!(Card::new(Rank::Ace, Suit::Clubs).to_string(), "Ac");
    }

    #[test]
    fn test_card_display_parses_back() {
        let cards = Card::all_cards();
        assert_eq!(cards.len(), 52);

        for card in cards {
            let parsed: Card = card.to_string().parse().unwrap();
            assert_eq!(card, parsed);
        }
    }

    #[test]
    fn test_card_equality() {
        assert_eq!(
            Card::new(Rank::Queen, Suit::Hearts),
            "Qh".parse::<Card>().unwrap()
        );
        assert_ne!(
            Card::new(Rank::Queen, Suit::Hearts),
            Card::new(Rank::Queen, Suit::Spades)
        );
    }

    #[test]
    fn test_canonical_key() {
        let mut cards: Vec<Card> = ["7c", "8d", "7s", "7h", "7d"]
            .into_iter()
            .map(|t| t.parse().unwrap())
            .collect();
        cards.sort_by_key(Card::canonical_key);

        let tokens: Vec<String> = cards.iter().map(Card::to_string).collect();
        assert_eq!(tokens, vec!["8d", "7s", "7h", "7d", "7c"]);
    }
}
