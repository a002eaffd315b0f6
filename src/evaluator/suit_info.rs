use crate::cards::{Card, Rank, Suit, NUM_SUITS};

/// Minimum cards of one suit for a flush.
const FLUSH_SIZE: u8 = 5;

/// Per-suit counts and rank masks for a hand.
///
/// Rank masks set bit [`Rank::index`] for every rank held in that suit, so
/// same-rank cards of other suits never leak into a suit's view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuitInfo {
    pub counts: [u8; NUM_SUITS],
    pub masks: [u16; NUM_SUITS],
    pub flush_suit: Option<Suit>,
}

impl SuitInfo {
    pub fn detect(cards: &[Card]) -> Self {
        let mut counts = [0u8; NUM_SUITS];
        let mut masks = [0u16; NUM_SUITS];
        for c in cards {
            let s = c.suit().index();
            counts[s] += 1;
            masks[s] |= 1u16 << c.rank().index();
        }
        // with seven cards at most one suit can reach five
        let flush_suit = Suit::ALL.iter().copied().find(|s| counts[s.index()] >= FLUSH_SIZE);
        SuitInfo { counts, masks, flush_suit }
    }

    /// Rank mask of the flush suit, if any.
    pub fn flush_mask(&self) -> Option<u16> {
        self.flush_suit.map(|s| self.masks[s.index()])
    }

    /// The five highest ranks of the flush suit, highest first.
    pub fn flush_ranks(&self) -> Option<impl Iterator<Item = Rank>> {
        let mask = self.flush_mask()?;
        Some(Rank::ALL.into_iter().rev().filter(move |r| mask & (1u16 << r.index()) != 0).take(5))
    }
}
