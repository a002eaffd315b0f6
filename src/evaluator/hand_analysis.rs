use super::rank_groups::RankGroups;
use super::straight_info::StraightInfo;
use super::suit_info::SuitInfo;
use crate::cards::Card;
use crate::hand::HAND_CARDS;

/// Pre-computed analysis of a seven-card hand.
/// Built once and shared by all category detectors.
#[derive(Debug, Clone)]
pub struct HandAnalysis {
    pub rank_groups: RankGroups,
    pub suit_info: SuitInfo,
    /// Best straight over all ranks held.
    pub straight_info: StraightInfo,
    /// Best straight within the flush suit only.
    pub straight_flush_info: StraightInfo,
}

impl HandAnalysis {
    pub fn new(cards: &[Card; HAND_CARDS]) -> Self {
        let rank_groups = RankGroups::from_cards(cards);
        let suit_info = SuitInfo::detect(cards);

        let all_ranks = suit_info.masks.iter().fold(0u16, |acc, m| acc | m);
        let straight_info = StraightInfo::detect(all_ranks);
        // a straight flush needs a straight at all, so skip the second scan otherwise
        let straight_flush_info = match suit_info.flush_mask() {
            Some(mask) if straight_info.is_straight() => StraightInfo::detect(mask),
            _ => StraightInfo::NONE,
        };

        Self { rank_groups, suit_info, straight_info, straight_flush_info }
    }
}
