use super::hand_analysis::HandAnalysis;
use crate::cards::Rank;
use crate::evaluator::{Category, HandValue};
use std::iter::once;

/// Strategy pattern: each detector recognises one category and builds its
/// value with the matching tie-break sequence.
pub trait CategoryDetector: Sync {
    fn category(&self) -> Category;
    fn detect(&self, analysis: &HandAnalysis) -> Option<HandValue>;
}

// ============================================================================
// Detector Implementations (in priority order: highest to lowest)
// ============================================================================

/// Royal Flush: Ace-high straight flush.
pub struct RoyalFlushDetector;

impl CategoryDetector for RoyalFlushDetector {
    fn category(&self) -> Category {
        Category::RoyalFlush
    }

    fn detect(&self, analysis: &HandAnalysis) -> Option<HandValue> {
        let top = analysis.straight_flush_info.top_rank.filter(|&r| r == Rank::Ace)?;
        Some(HandValue::new(self.category(), &[top]))
    }
}

/// Straight Flush: five connected ranks within one suit.
pub struct StraightFlushDetector;

impl CategoryDetector for StraightFlushDetector {
    fn category(&self) -> Category {
        Category::StraightFlush
    }

    fn detect(&self, analysis: &HandAnalysis) -> Option<HandValue> {
        let top = analysis.straight_flush_info.top_rank?;
        Some(HandValue::new(self.category(), &[top]))
    }
}

/// Four of a Kind: quad rank, then best remaining kicker.
pub struct FourOfAKindDetector;

impl CategoryDetector for FourOfAKindDetector {
    fn category(&self) -> Category {
        Category::FourOfAKind
    }

    fn detect(&self, analysis: &HandAnalysis) -> Option<HandValue> {
        let groups = &analysis.rank_groups;
        if groups.max_count() != 4 {
            return None;
        }
        let quad = groups.highest_with(4, None)?;
        let kicker = groups.kickers(&[quad]).next()?;
        Some(HandValue::new(self.category(), &[quad, kicker]))
    }
}

/// Full House: the highest trips, then the best other rank held twice or more.
pub struct FullHouseDetector;

impl CategoryDetector for FullHouseDetector {
    fn category(&self) -> Category {
        Category::FullHouse
    }

    fn detect(&self, analysis: &HandAnalysis) -> Option<HandValue> {
        let groups = &analysis.rank_groups;
        if groups.max_count() != 3 {
            return None;
        }
        let trips = groups.highest_with(3, None)?;
        let pair = groups.highest_with(2, Some(trips))?;
        Some(HandValue::new(self.category(), &[trips, pair]))
    }
}

/// Flush: five highest ranks of the flush suit.
pub struct FlushDetector;

impl CategoryDetector for FlushDetector {
    fn category(&self) -> Category {
        Category::Flush
    }

    fn detect(&self, analysis: &HandAnalysis) -> Option<HandValue> {
        let ranks = analysis.suit_info.flush_ranks()?;
        Some(HandValue::from_ranks(self.category(), ranks))
    }
}

/// Straight: top card of the highest run.
pub struct StraightDetector;

impl CategoryDetector for StraightDetector {
    fn category(&self) -> Category {
        Category::Straight
    }

    fn detect(&self, analysis: &HandAnalysis) -> Option<HandValue> {
        let top = analysis.straight_info.top_rank?;
        Some(HandValue::new(self.category(), &[top]))
    }
}

/// Three of a Kind: trip rank, then two kickers.
pub struct ThreeOfAKindDetector;

impl CategoryDetector for ThreeOfAKindDetector {
    fn category(&self) -> Category {
        Category::ThreeOfAKind
    }

    fn detect(&self, analysis: &HandAnalysis) -> Option<HandValue> {
        let groups = &analysis.rank_groups;
        if groups.max_count() != 3 {
            return None;
        }
        let trips = groups.highest_with(3, None)?;
        let used = [trips];
        let kickers = groups.kickers(&used).take(2);
        Some(HandValue::from_ranks(self.category(), once(trips).chain(kickers)))
    }
}

/// Two Pair: the two highest pairs, then the best remaining kicker.
pub struct TwoPairDetector;

impl CategoryDetector for TwoPairDetector {
    fn category(&self) -> Category {
        Category::TwoPair
    }

    fn detect(&self, analysis: &HandAnalysis) -> Option<HandValue> {
        let groups = &analysis.rank_groups;
        let high = groups.highest_with(2, None)?;
        let low = groups.highest_with(2, Some(high))?;
        let kicker = groups.kickers(&[high, low]).next()?;
        Some(HandValue::new(self.category(), &[high, low, kicker]))
    }
}

/// One Pair: pair rank, then three kickers.
pub struct OnePairDetector;

impl CategoryDetector for OnePairDetector {
    fn category(&self) -> Category {
        Category::OnePair
    }

    fn detect(&self, analysis: &HandAnalysis) -> Option<HandValue> {
        let groups = &analysis.rank_groups;
        let pair = groups.highest_with(2, None)?;
        let used = [pair];
        let kickers = groups.kickers(&used).take(3);
        Some(HandValue::from_ranks(self.category(), once(pair).chain(kickers)))
    }
}

/// High Card: the five highest ranks. Always applies.
pub fn high_card(analysis: &HandAnalysis) -> HandValue {
    HandValue::from_ranks(Category::HighCard, analysis.rank_groups.descending())
}

// ============================================================================
// Static detector list (in priority order)
// ============================================================================

pub const DETECTORS: [&dyn CategoryDetector; 9] = [
    &RoyalFlushDetector,
    &StraightFlushDetector,
    &FourOfAKindDetector,
    &FullHouseDetector,
    &FlushDetector,
    &StraightDetector,
    &ThreeOfAKindDetector,
    &TwoPairDetector,
    &OnePairDetector,
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{parse_cards, Card};
    use crate::hand::HAND_CARDS;

    fn analyze(s: &str) -> HandAnalysis {
        let cards: [Card; HAND_CARDS] = parse_cards(s).unwrap().try_into().unwrap();
        HandAnalysis::new(&cards)
    }

    #[test]
    fn test_detectors_are_in_descending_category_order() {
        for pair in DETECTORS.windows(2) {
            assert!(pair[0].category() > pair[1].category());
        }
    }

    #[test]
    fn test_royal_flush_detector() {
        let a = analyze("Ah Kh Qh Jh Th 9h 2c");
        let v = RoyalFlushDetector.detect(&a).unwrap();
        assert_eq!(v.tiebreak(), &[Rank::Ace]);
        assert!(RoyalFlushDetector.detect(&analyze("Kh Qh Jh Th 9h 2c 3d")).is_none());
    }

    #[test]
    fn test_four_of_a_kind_detector() {
        let v = FourOfAKindDetector.detect(&analyze("Jc Jd Jh Js Kc 2d 3h")).unwrap();
        assert_eq!(v.tiebreak(), &[Rank::Jack, Rank::King]);
        // kicker may come from a pair
        let v = FourOfAKindDetector.detect(&analyze("4c 4d 4h 4s 9c 9d 2h")).unwrap();
        assert_eq!(v.tiebreak(), &[Rank::Four, Rank::Nine]);
    }

    #[test]
    fn test_full_house_from_two_trips() {
        let v = FullHouseDetector.detect(&analyze("9c 9d 9h Ks Kc Kd 2h")).unwrap();
        assert_eq!(v.tiebreak(), &[Rank::King, Rank::Nine]);
    }

    #[test]
    fn test_full_house_picks_highest_pair() {
        let v = FullHouseDetector.detect(&analyze("5c 5d 5h Qs Qc 8d 8h")).unwrap();
        assert_eq!(v.tiebreak(), &[Rank::Five, Rank::Queen]);
    }

    #[test]
    fn test_full_house_needs_a_pair() {
        assert!(FullHouseDetector.detect(&analyze("5c 5d 5h Qs Jc 8d 2h")).is_none());
        assert!(ThreeOfAKindDetector.detect(&analyze("5c 5d 5h Qs Jc 8d 2h")).is_some());
    }

    #[test]
    fn test_flush_detector_takes_top_five() {
        let v = FlushDetector.detect(&analyze("2d 4d 6d 8d Td Qd Ac")).unwrap();
        assert_eq!(v.tiebreak(), &[Rank::Queen, Rank::Ten, Rank::Eight, Rank::Six, Rank::Four]);
    }

    #[test]
    fn test_two_pair_uses_best_two_of_three() {
        let v = TwoPairDetector.detect(&analyze("Ac Ad 9h 9s 4c 4d 2h")).unwrap();
        assert_eq!(v.tiebreak(), &[Rank::Ace, Rank::Nine, Rank::Four]);
    }

    #[test]
    fn test_three_of_a_kind_kickers() {
        let v = ThreeOfAKindDetector.detect(&analyze("8c 8d 8h Ks Tc 4d 2h")).unwrap();
        assert_eq!(v.category(), Category::ThreeOfAKind);
        assert_eq!(v.tiebreak(), &[Rank::Eight, Rank::King, Rank::Ten]);
        assert!(ThreeOfAKindDetector.detect(&analyze("8c 8d 7h Ks Tc 4d 2h")).is_none());
    }

    #[test]
    fn test_one_pair_kickers() {
        let v = OnePairDetector.detect(&analyze("7c 7d Ah Js 9c 4d 2h")).unwrap();
        assert_eq!(v.tiebreak(), &[Rank::Seven, Rank::Ace, Rank::Jack, Rank::Nine]);
    }

    #[test]
    fn test_high_card_fallback() {
        let v = high_card(&analyze("Ah Kd 7s 5c 2d 9h Jc"));
        assert_eq!(v.category(), Category::HighCard);
        assert_eq!(v.tiebreak(), &[Rank::Ace, Rank::King, Rank::Jack, Rank::Nine, Rank::Seven]);
    }
}
