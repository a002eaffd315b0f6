use crate::showdown::Winners;

/// Per-hand outcome counters for a run of deals.
///
/// Workers each own one and are merged by plain addition at the end, so the
/// totals never depend on the order deals were visited.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Tally {
    pub deals: u64,
    /// Deals where the hand held the best value, alone or tied.
    pub wins: Vec<u64>,
    /// Deals where the hand shared the best value.
    pub ties: Vec<u64>,
    /// Sum of `1 / winners` over won deals.
    pub shares: Vec<f64>,
}

impl Tally {
    pub fn new(hands: usize) -> Self {
        Self { deals: 0, wins: vec![0; hands], ties: vec![0; hands], shares: vec![0.0; hands] }
    }

    pub fn record(&mut self, winners: Winners) {
        self.deals += 1;
        let split = 1.0 / winners.len() as f64;
        let tie = winners.is_tie();
        for i in winners.iter() {
            self.wins[i] += 1;
            self.shares[i] += split;
            if tie {
                self.ties[i] += 1;
            }
        }
    }

    #[cfg(any(test, feature = "parallel"))]
    pub fn merge(mut self, other: Tally) -> Tally {
        debug_assert_eq!(self.wins.len(), other.wins.len());
        self.deals += other.deals;
        for (a, b) in self.wins.iter_mut().zip(&other.wins) {
            *a += b;
        }
        for (a, b) in self.ties.iter_mut().zip(&other.ties) {
            *a += b;
        }
        for (a, b) in self.shares.iter_mut().zip(&other.shares) {
            *a += b;
        }
        self
    }
}
