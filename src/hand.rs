use crate::cards::{parse_cards, Card};
use std::fmt;
use std::str::FromStr;

/// Hole cards per starting hand.
pub const HOLE_CARDS: usize = 2;
/// Community cards on a complete board.
pub const BOARD_CARDS: usize = 5;
/// Cards in a showdown hand: hole + board.
pub const HAND_CARDS: usize = HOLE_CARDS + BOARD_CARDS;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error("expected exactly 2 hole cards, got {0}")]
    HoleCount(usize),
    #[error("expected {expected} cards, got {got}")]
    CardCount { expected: usize, got: usize },
    #[error("duplicate card {0}")]
    DuplicateCards(Card),
    #[error("card parse error: {0}")]
    CardParse(String),
}

/// Return the first card that appears twice in `cards`, if any.
pub(crate) fn first_duplicate(cards: &[Card]) -> Option<Card> {
    let mut seen = 0u64;
    for &c in cards {
        if seen & c.mask() != 0 {
            return Some(c);
        }
        seen |= c.mask();
    }
    None
}

/// A player's two private starting cards.
///
/// ```
/// use poker_equity::hand::StartingHand;
///
/// let hole: StartingHand = "As 2s".parse().unwrap();
/// assert_eq!(hole.to_string(), "As2s");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StartingHand([Card; HOLE_CARDS]);

impl StartingHand {
    pub fn try_new(a: Card, b: Card) -> Result<Self, HandError> {
        if a == b {
            return Err(HandError::DuplicateCards(a));
        }
        Ok(Self([a, b]))
    }

    pub fn from_slice(slice: &[Card]) -> Result<Self, HandError> {
        match slice {
            [a, b] => Self::try_new(*a, *b),
            _ => Err(HandError::HoleCount(slice.len())),
        }
    }

    pub fn first(&self) -> Card {
        self.0[0]
    }

    pub fn second(&self) -> Card {
        self.0[1]
    }

    pub fn cards(&self) -> [Card; HOLE_CARDS] {
        self.0
    }

    /// Combined 52-bit mask of both cards.
    pub fn mask(&self) -> u64 {
        self.0[0].mask() | self.0[1].mask()
    }
}

impl fmt::Display for StartingHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.0[0], self.0[1])
    }
}

impl FromStr for StartingHand {
    type Err = HandError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s).map_err(|e| HandError::CardParse(e.to_string()))?;
        Self::from_slice(&cards)
    }
}

/// A complete showdown hand: hole cards followed by five community cards.
///
/// Card order carries no meaning for evaluation; it is kept as assembled so
/// output stays reproducible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hand([Card; HAND_CARDS]);

impl Hand {
    /// Assemble a hand from hole cards and a complete board.
    pub fn assemble(hole: &StartingHand, board: &[Card; BOARD_CARDS]) -> Result<Self, HandError> {
        let [a, b] = hole.cards();
        let cards = [a, b, board[0], board[1], board[2], board[3], board[4]];
        Self::from_array(cards)
    }

    pub fn from_slice(cards: &[Card]) -> Result<Self, HandError> {
        let cards: [Card; HAND_CARDS] = cards
            .try_into()
            .map_err(|_| HandError::CardCount { expected: HAND_CARDS, got: cards.len() })?;
        Self::from_array(cards)
    }

    fn from_array(cards: [Card; HAND_CARDS]) -> Result<Self, HandError> {
        match first_duplicate(&cards) {
            Some(dup) => Err(HandError::DuplicateCards(dup)),
            None => Ok(Self(cards)),
        }
    }

    pub fn cards(&self) -> &[Card; HAND_CARDS] {
        &self.0
    }
}

impl FromStr for Hand {
    type Err = HandError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s).map_err(|e| HandError::CardParse(e.to_string()))?;
        Self::from_slice(&cards)
    }
}
