//! Showdown comparison across already-evaluated hands.
//!
//! ```
//! use poker_equity::cards::parse_cards;
//! use poker_equity::evaluator::evaluate;
//! use poker_equity::showdown::{compare, Outcome};
//!
//! let a = evaluate(&parse_cards("As Ah Kc Qd 9s 4h 2c").unwrap()).unwrap();
//! let b = evaluate(&parse_cards("Ks Kh Kc Qd 9s 4h 2c").unwrap()).unwrap();
//! let winners = compare(&[a, b]).unwrap();
//! assert_eq!(winners.outcome(), Some(Outcome::Win(1)));
//! ```

use crate::evaluator::{Category, HandValue};
use core::cmp::Ordering;
use std::fmt;

/// Largest number of hands a single comparison can hold.
pub const MAX_HANDS: usize = u64::BITS as usize;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ShowdownError {
    /// Two values of one category carry tie-breaks of different lengths.
    /// Only a broken evaluator produces this.
    #[error("tie-break length mismatch for {category}: {left} vs {right}")]
    TiebreakLength { category: Category, left: usize, right: usize },
    #[error("cannot compare {0} hands at once (max 64)")]
    TooManyHands(usize),
}

/// Result of a showdown reduced to a single label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// One hand holds the sole best value.
    Win(usize),
    /// Two or more hands share the best value.
    Tie,
}

/// Indices of the hands holding the best value, as a bit set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Winners(u64);

impl Winners {
    pub const fn empty() -> Self {
        Winners(0)
    }

    pub const fn bits(&self) -> u64 {
        self.0
    }

    pub const fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_tie(&self) -> bool {
        self.len() > 1
    }

    pub fn contains(&self, index: usize) -> bool {
        index < MAX_HANDS && self.0 & (1u64 << index) != 0
    }

    /// Winning indices in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> {
        let mut bits = self.0;
        std::iter::from_fn(move || {
            if bits == 0 {
                return None;
            }
            let i = bits.trailing_zeros() as usize;
            bits &= bits - 1;
            Some(i)
        })
    }

    /// `None` when nothing was compared.
    pub fn outcome(&self) -> Option<Outcome> {
        match self.len() {
            0 => None,
            1 => Some(Outcome::Win(self.0.trailing_zeros() as usize)),
            _ => Some(Outcome::Tie),
        }
    }

    fn only(index: usize) -> Self {
        Winners(1u64 << index)
    }

    fn insert(&mut self, index: usize) {
        self.0 |= 1u64 << index;
    }
}

impl fmt::Display for Winners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (n, i) in self.iter().enumerate() {
            if n > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{i}")?;
        }
        f.write_str("}")
    }
}

/// Order two values, checking that equal categories carry equal-length
/// tie-breaks.
pub fn compare_pair(a: &HandValue, b: &HandValue) -> Result<Ordering, ShowdownError> {
    if a.category() == b.category() && a.tiebreak().len() != b.tiebreak().len() {
        return Err(ShowdownError::TiebreakLength {
            category: a.category(),
            left: a.tiebreak().len(),
            right: b.tiebreak().len(),
        });
    }
    Ok(a.cmp(b))
}

/// Find every index holding the maximal value. An empty input yields an
/// empty set.
pub fn compare(values: &[HandValue]) -> Result<Winners, ShowdownError> {
    if values.len() > MAX_HANDS {
        return Err(ShowdownError::TooManyHands(values.len()));
    }
    let Some((first, rest)) = values.split_first() else {
        return Ok(Winners::empty());
    };

    let mut best = first;
    let mut winners = Winners::only(0);
    for (i, v) in rest.iter().enumerate().map(|(i, v)| (i + 1, v)) {
        match compare_pair(v, best)? {
            Ordering::Greater => {
                best = v;
                winners = Winners::only(i);
            }
            Ordering::Equal => winners.insert(i),
            Ordering::Less => {}
        }
    }
    Ok(winners)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Rank;

    fn pair(r: Rank, kickers: [Rank; 3]) -> HandValue {
        HandValue::new(Category::OnePair, &[r, kickers[0], kickers[1], kickers[2]])
    }

    #[test]
    fn sole_winner() {
        let low = pair(Rank::Six, [Rank::Ace, Rank::Nine, Rank::Four]);
        let high = pair(Rank::Jack, [Rank::Ace, Rank::Nine, Rank::Four]);
        let w = compare(&[low, high, low]).unwrap();
        assert_eq!(w.outcome(), Some(Outcome::Win(1)));
        assert!(w.contains(1));
        assert!(!w.contains(0));
        assert!(!w.is_tie());
    }

    #[test]
    fn tie_collects_all_best() {
        let a = pair(Rank::King, [Rank::Queen, Rank::Nine, Rank::Four]);
        let b = pair(Rank::Two, [Rank::Queen, Rank::Nine, Rank::Four]);
        let w = compare(&[a, b, a, a]).unwrap();
        assert_eq!(w.iter().collect::<Vec<_>>(), vec![0, 2, 3]);
        assert_eq!(w.outcome(), Some(Outcome::Tie));
        assert_eq!(w.to_string(), "{0, 2, 3}");
    }

    #[test]
    fn later_better_hand_resets_ties() {
        let a = HandValue::new(Category::Straight, &[Rank::Nine]);
        let b = HandValue::new(Category::Flush, &[Rank::Seven, Rank::Six, Rank::Five, Rank::Three, Rank::Two]);
        let w = compare(&[a, a, b]).unwrap();
        assert_eq!(w.outcome(), Some(Outcome::Win(2)));
    }

    #[test]
    fn empty_input() {
        let w = compare(&[]).unwrap();
        assert!(w.is_empty());
        assert_eq!(w.outcome(), None);
    }

    #[test]
    fn tiebreak_mismatch_is_a_logic_error() {
        let a = HandValue::new(Category::TwoPair, &[Rank::Ace, Rank::King, Rank::Two]);
        let b = HandValue::new(Category::TwoPair, &[Rank::Ace, Rank::King]);
        assert_eq!(
            compare(&[a, b]),
            Err(ShowdownError::TiebreakLength { category: Category::TwoPair, left: 2, right: 3 })
        );
        // different categories never need equal lengths
        let c = HandValue::new(Category::Straight, &[Rank::Ace]);
        assert_eq!(compare_pair(&c, &a), Ok(Ordering::Greater));
    }

    #[test]
    fn too_many_hands() {
        let v = HandValue::new(Category::Straight, &[Rank::Ace]);
        let values = vec![v; MAX_HANDS + 1];
        assert_eq!(compare(&values), Err(ShowdownError::TooManyHands(65)));
        assert_eq!(compare(&values[..MAX_HANDS]).unwrap().len(), MAX_HANDS);
    }
}
