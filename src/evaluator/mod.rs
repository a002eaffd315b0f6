pub(crate) mod detector;
pub(crate) mod hand_analysis;
pub(crate) mod rank_groups;
pub(crate) mod straight_info;
pub(crate) mod suit_info;

use crate::cards::{Card, Rank};
use crate::hand::{Hand, HandError, StartingHand, BOARD_CARDS, HAND_CARDS};
use core::cmp::Ordering;
use std::fmt;

/// Longest tie-break sequence any category needs.
pub const MAX_TIEBREAK: usize = 5;

/// Poker hand category from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
#[repr(u8)]
pub enum Category {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    RoyalFlush = 9,
}

impl Category {
    pub const ALL: [Category; 10] = [
        Category::HighCard,
        Category::OnePair,
        Category::TwoPair,
        Category::ThreeOfAKind,
        Category::Straight,
        Category::Flush,
        Category::FullHouse,
        Category::FourOfAKind,
        Category::StraightFlush,
        Category::RoyalFlush,
    ];

    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Number of tie-break ranks a hand of this category carries.
    pub const fn tiebreak_len(self) -> usize {
        match self {
            Category::HighCard | Category::Flush => 5,
            Category::OnePair => 4,
            Category::TwoPair | Category::ThreeOfAKind => 3,
            Category::FullHouse | Category::FourOfAKind => 2,
            Category::Straight | Category::StraightFlush | Category::RoyalFlush => 1,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::OnePair => "One Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
            Category::RoyalFlush => "Royal Flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Showdown strength of a hand: a category plus its tie-break ranks in
/// descending priority. Higher is better.
///
/// Ordering compares the category first, then the tie-break sequences
/// lexicographically. Equal values are a true draw.
#[derive(Debug, Clone, Copy)]
pub struct HandValue {
    category: Category,
    ranks: [Rank; MAX_TIEBREAK],
    len: u8,
}

impl HandValue {
    /// Build a value from a category and tie-break ranks, highest priority
    /// first. Ranks beyond the fifth are ignored.
    pub fn new(category: Category, tiebreak: &[Rank]) -> Self {
        Self::from_ranks(category, tiebreak.iter().copied())
    }

    pub(crate) fn from_ranks<I>(category: Category, tiebreak: I) -> Self
    where
        I: IntoIterator<Item = Rank>,
    {
        let mut ranks = [Rank::Two; MAX_TIEBREAK];
        let mut len = 0;
        for (slot, rank) in ranks.iter_mut().zip(tiebreak) {
            *slot = rank;
            len += 1;
        }
        Self { category, ranks, len }
    }

    pub const fn category(&self) -> Category {
        self.category
    }

    pub fn tiebreak(&self) -> &[Rank] {
        &self.ranks[..self.len as usize]
    }
}

impl Ord for HandValue {
    fn cmp(&self, other: &Self) -> Ordering {
        self.category.cmp(&other.category).then_with(|| self.tiebreak().cmp(other.tiebreak()))
    }
}

impl PartialOrd for HandValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for HandValue {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HandValue {}

impl fmt::Display for HandValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [", self.category)?;
        for (i, r) in self.tiebreak().iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{r}")?;
        }
        f.write_str("]")
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EvalError {
    #[error("invalid hand: {0}")]
    InvalidHand(#[from] HandError),
}

/// Evaluate exactly seven distinct cards (hole + board, any order).
///
/// ```
/// use poker_equity::cards::{parse_cards, Rank};
/// use poker_equity::evaluator::{evaluate, Category};
///
/// let cards = parse_cards("Ac 2c 3c 4c 5c 2d 9d").unwrap();
/// let value = evaluate(&cards).unwrap();
/// assert_eq!(value.category(), Category::StraightFlush);
/// assert_eq!(value.tiebreak(), &[Rank::Five]);
///
/// assert!(evaluate(&cards[..6]).is_err());
/// ```
pub fn evaluate(cards: &[Card]) -> Result<HandValue, EvalError> {
    let hand = Hand::from_slice(cards)?;
    Ok(evaluate_hand(&hand))
}

/// Evaluate a validated seven-card hand.
pub fn evaluate_hand(hand: &Hand) -> HandValue {
    evaluate_seven(hand.cards())
}

/// Evaluate hole cards against a complete five-card board.
pub fn evaluate_holdem(hole: &StartingHand, board: &[Card; BOARD_CARDS]) -> Result<HandValue, EvalError> {
    let hand = Hand::assemble(hole, board)?;
    Ok(evaluate_hand(&hand))
}

/// Evaluate seven cards without validation. The cards must be distinct.
///
/// Runs the category detectors strongest first over a single shared
/// analysis; the first match wins and high card is the fallback.
pub fn evaluate_seven(cards: &[Card; HAND_CARDS]) -> HandValue {
    use detector::{high_card, DETECTORS};
    use hand_analysis::HandAnalysis;

    let analysis = HandAnalysis::new(cards);
    DETECTORS.iter().find_map(|d| d.detect(&analysis)).unwrap_or_else(|| high_card(&analysis))
}
