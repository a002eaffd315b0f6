use poker_equity::cards::{Card, Rank, Suit};
use poker_equity::deck::Deck;
use poker_equity::evaluator::{evaluate, evaluate_seven, Category};
use proptest::prelude::*;

/// Seven distinct cards in random order.
fn seven_cards() -> impl Strategy<Value = [Card; 7]> {
    prop::sample::subsequence(Deck::standard().into_cards(), 7)
        .prop_shuffle()
        .prop_map(|v| <[Card; 7]>::try_from(v).expect("seven cards"))
}

fn rank_from_val(v: u8) -> Rank {
    Rank::from_index(usize::from(v - 2)).unwrap_or(Rank::Ace)
}

/// An offsuit straight topped by `top` (5 means the wheel), padded with two
/// more cards of its lowest rank so it also holds trips.
fn straight_seven(top: u8) -> [Card; 7] {
    let ranks: Vec<Rank> = if top == 5 {
        vec![Rank::Ace, Rank::Two, Rank::Three, Rank::Four, Rank::Five]
    } else {
        (top - 4..=top).map(rank_from_val).collect()
    };
    let suits = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades, Suit::Clubs];
    let mut cards = [Card::new(Rank::Two, Suit::Hearts); 7];
    for (i, (&r, &s)) in ranks.iter().zip(&suits).enumerate() {
        cards[i] = Card::new(r, s);
    }
    let low = ranks[0];
    cards[5] = Card::new(low, Suit::Hearts);
    cards[6] = Card::new(low, Suit::Spades);
    cards
}

proptest! {
    #[test]
    fn tiebreak_length_is_fixed_per_category(cards in seven_cards()) {
        let v = evaluate_seven(&cards);
        prop_assert_eq!(v.tiebreak().len(), v.category().tiebreak_len());
    }

    #[test]
    fn order_of_cards_does_not_matter(cards in seven_cards()) {
        let v = evaluate_seven(&cards);
        let mut reversed = cards;
        reversed.reverse();
        let mut sorted = cards;
        sorted.sort();
        let mut rotated = cards;
        rotated.rotate_left(3);
        for other in [reversed, sorted, rotated] {
            let w = evaluate_seven(&other);
            prop_assert_eq!(w, v);
            prop_assert_eq!(w.tiebreak(), v.tiebreak());
        }
    }

    #[test]
    fn validated_and_raw_paths_agree(cards in seven_cards()) {
        prop_assert_eq!(evaluate(&cards).unwrap(), evaluate_seven(&cards));
    }

    #[test]
    fn ordering_is_antisymmetric_and_transitive(a in seven_cards(), b in seven_cards(), c in seven_cards()) {
        let ea = evaluate_seven(&a);
        let eb = evaluate_seven(&b);
        let ec = evaluate_seven(&c);

        // antisymmetric: if a >= b and b >= a then a == b
        if ea >= eb && eb >= ea { prop_assert_eq!(ea, eb); }

        // transitive: if a > b and b > c then a > c
        if ea > eb && eb > ec { prop_assert!(ea > ec); }
        if ea >= eb && eb >= ec { prop_assert!(ea >= ec); }
    }

    #[test]
    fn repeated_rank_is_at_least_a_pair(cards in seven_cards()) {
        let mut counts = [0u8; 13];
        for c in &cards {
            counts[c.rank().index()] += 1;
        }
        let v = evaluate_seven(&cards);
        if counts.iter().any(|&n| n >= 2) {
            prop_assert!(v.category() >= Category::OnePair);
        }
        if counts.iter().any(|&n| n == 4) {
            prop_assert!(v.category() >= Category::FourOfAKind);
        }
    }

    #[test]
    fn five_of_a_suit_is_at_least_a_flush(cards in seven_cards()) {
        let mut counts = [0u8; 4];
        for c in &cards {
            counts[c.suit().index()] += 1;
        }
        let v = evaluate_seven(&cards);
        if counts.iter().any(|&n| n >= 5) {
            prop_assert!(v.category() >= Category::Flush);
        } else {
            prop_assert!(!matches!(v.category(), Category::Flush | Category::StraightFlush | Category::RoyalFlush));
        }
    }

    #[test]
    fn straight_ordering_respects_top_card(top_hi in 6u8..=14u8, top_lo in 5u8..=13u8) {
        prop_assume!(top_hi > top_lo);
        let hi = evaluate_seven(&straight_seven(top_hi));
        let lo = evaluate_seven(&straight_seven(top_lo));
        prop_assert_eq!(hi.category(), Category::Straight);
        prop_assert_eq!(lo.category(), Category::Straight);
        prop_assert_eq!(hi.tiebreak(), &[rank_from_val(top_hi)]);
        prop_assert!(hi > lo);
    }
}
