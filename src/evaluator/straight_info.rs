use crate::cards::{Rank, NUM_RANKS};

const RUN: usize = 5;

/// Straight adjacency: index difference of one, or Ace next to Two.
///
/// Only straight detection uses this; ordinary comparison keeps Ace high.
pub fn connected(a: Rank, b: Rank) -> bool {
    a.index().abs_diff(b.index()) == 1
        || matches!((a, b), (Rank::Ace, Rank::Two) | (Rank::Two, Rank::Ace))
}

/// Whether a set of ranks holds a five-card run, and the run's top rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StraightInfo {
    pub top_rank: Option<Rank>,
}

impl StraightInfo {
    pub const NONE: StraightInfo = StraightInfo { top_rank: None };

    /// Detect the highest straight among the ranks set in `mask` (bit
    /// [`Rank::index`] per rank). Duplicated ranks collapse into one bit.
    pub fn detect(mask: u16) -> Self {
        let mut ordered = [Rank::Two; NUM_RANKS];
        let mut len = 0;
        for r in Rank::ALL {
            if mask & (1u16 << r.index()) != 0 {
                ordered[len] = r;
                len += 1;
            }
        }
        if len < RUN {
            return Self::NONE;
        }
        if let Some(top) = highest_run(&ordered[..len]) {
            return StraightInfo { top_rank: Some(top) };
        }
        // wheel: move the Ace to the low end and scan again
        if ordered[len - 1] == Rank::Ace {
            ordered.copy_within(0..len - 1, 1);
            ordered[0] = Rank::Ace;
            return StraightInfo { top_rank: highest_run(&ordered[..len]) };
        }
        Self::NONE
    }

    pub fn is_straight(&self) -> bool {
        self.top_rank.is_some()
    }
}

/// Scan from the top for five consecutive connected ranks.
fn highest_run(ordered: &[Rank]) -> Option<Rank> {
    let mut top = ordered.len().checked_sub(1)?;
    let mut run = 1;
    for i in (0..top).rev() {
        if connected(ordered[i + 1], ordered[i]) {
            run += 1;
            if run == RUN {
                return Some(ordered[top]);
            }
        } else {
            run = 1;
            top = i;
        }
    }
    None
}
