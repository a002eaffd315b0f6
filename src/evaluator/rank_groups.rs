use crate::cards::{Card, Rank, NUM_RANKS};

/// Per-rank card counts for a hand, indexed by [`Rank::index`].
///
/// Example: AAAKQ counts Ace 3, King 1, Queen 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankGroups {
    counts: [u8; NUM_RANKS],
    max: u8,
}

impl RankGroups {
    pub fn from_cards(cards: &[Card]) -> Self {
        let mut counts = [0u8; NUM_RANKS];
        for c in cards {
            counts[c.rank().index()] += 1;
        }
        let max = counts.iter().copied().max().unwrap_or(0);
        Self { counts, max }
    }

    pub fn count(&self, rank: Rank) -> u8 {
        self.counts[rank.index()]
    }

    /// Frequency of the most common rank.
    pub fn max_count(&self) -> u8 {
        self.max
    }

    /// Ranks present in the hand, highest first.
    pub fn descending(&self) -> impl Iterator<Item = Rank> + '_ {
        Rank::ALL.iter().rev().copied().filter(move |r| self.counts[r.index()] > 0)
    }

    /// Highest rank held at least `min` times, skipping `except`.
    pub fn highest_with(&self, min: u8, except: Option<Rank>) -> Option<Rank> {
        self.descending().find(|&r| Some(r) != except && self.count(r) >= min)
    }

    /// Distinct ranks not in `exclude`, highest first.
    pub fn kickers<'a>(&'a self, exclude: &'a [Rank]) -> impl Iterator<Item = Rank> + 'a {
        self.descending().filter(move |r| !exclude.contains(r))
    }
}
