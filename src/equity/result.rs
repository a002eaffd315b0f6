use super::tally::Tally;
use crate::hand::StartingHand;
use std::fmt;

/// Outcome counts and percentages for one hand.
///
/// `win_percent` credits every tied hand with a full win, so it can sum past
/// 100 across hands. `equity_percent` splits each tied deal evenly among the
/// tied hands and sums to 100.
#[derive(Debug, Clone, PartialEq)]
pub struct HandEquity {
    /// `None` for the synthetic field hand of a single-hand query.
    pub hand: Option<StartingHand>,
    pub wins: u64,
    pub ties: u64,
    share: f64,
    deals: u64,
}

impl HandEquity {
    fn percent(&self, count: f64) -> f64 {
        if self.deals == 0 {
            return 0.0;
        }
        count * 100.0 / self.deals as f64
    }

    /// Deals won outright or tied, as a percentage of all deals.
    pub fn win_percent(&self) -> f64 {
        self.percent(self.wins as f64)
    }

    /// Deals tied for the best hand.
    pub fn tie_percent(&self) -> f64 {
        self.percent(self.ties as f64)
    }

    /// Deals won with no other hand tying.
    pub fn sole_win_percent(&self) -> f64 {
        self.percent((self.wins - self.ties) as f64)
    }

    /// Pot share with ties split evenly.
    pub fn equity_percent(&self) -> f64 {
        self.percent(self.share)
    }
}

/// Equity for every hand in a query, indexed like the input.
#[derive(Debug, Clone, PartialEq)]
pub struct EquityResult {
    hands: Vec<HandEquity>,
    deals: u64,
}

impl EquityResult {
    pub(crate) fn from_tally(labels: Vec<Option<StartingHand>>, tally: Tally) -> Self {
        debug_assert_eq!(labels.len(), tally.wins.len());
        let deals = tally.deals;
        let hands = labels
            .into_iter()
            .zip(tally.wins)
            .zip(tally.ties)
            .zip(tally.shares)
            .map(|(((hand, wins), ties), share)| HandEquity { hand, wins, ties, share, deals })
            .collect();
        Self { hands, deals }
    }

    /// Number of board completions enumerated.
    pub fn deals(&self) -> u64 {
        self.deals
    }

    pub fn len(&self) -> usize {
        self.hands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hands.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&HandEquity> {
        self.hands.get(index)
    }

    pub fn hands(&self) -> &[HandEquity] {
        &self.hands
    }

    pub fn iter(&self) -> impl Iterator<Item = &HandEquity> {
        self.hands.iter()
    }

    /// Full-credit win percentages in input order.
    pub fn win_percents(&self) -> Vec<f64> {
        self.hands.iter().map(HandEquity::win_percent).collect()
    }
}

impl fmt::Display for EquityResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, h) in self.hands.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "H{i}: {:.2}", h.win_percent())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result() -> EquityResult {
        let tally = Tally {
            deals: 4,
            wins: vec![3, 2],
            ties: vec![1, 1],
            shares: vec![2.5, 1.5],
        };
        EquityResult::from_tally(vec![None, None], tally)
    }

    #[test]
    fn percentages_follow_tie_convention() {
        let r = result();
        let a = r.get(0).unwrap();
        assert_eq!(a.win_percent(), 75.0);
        assert_eq!(a.tie_percent(), 25.0);
        assert_eq!(a.sole_win_percent(), 50.0);
        assert_eq!(a.equity_percent(), 62.5);
        let total: f64 = r.iter().map(HandEquity::equity_percent).sum();
        assert_eq!(total, 100.0);
        assert_eq!(r.win_percents().iter().sum::<f64>(), 125.0);
    }

    #[test]
    fn display_lists_win_percent() {
        assert_eq!(result().to_string(), "H0: 75.00 H1: 50.00");
    }
}
