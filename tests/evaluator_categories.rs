use poker_equity::cards::{parse_cards, Card, Rank, Suit};
use poker_equity::evaluator::{evaluate, evaluate_seven, Category, EvalError};
use poker_equity::hand::HandError;

fn eval(s: &str) -> poker_equity::evaluator::HandValue {
    evaluate(&parse_cards(s).unwrap()).unwrap()
}

#[test]
fn wheel_straight_flush() {
    let e = eval("Ac 2c 3c 4c 5c 2d 9d");
    assert_eq!(e.category(), Category::StraightFlush);
    assert_eq!(e.tiebreak(), &[Rank::Five]);
}

#[test]
fn straight_not_flush_when_suits_split() {
    // four hearts in the run, the king is a spade
    let e = eval("Th 9h Ks Jh Qd 8h 9s");
    assert_eq!(e.category(), Category::Straight);
    assert_eq!(e.tiebreak(), &[Rank::King]);
}

#[test]
fn four_jacks_with_king_kicker() {
    let e = eval("Jc Jd Jh Js Kc 2d 3h");
    assert_eq!(e.category(), Category::FourOfAKind);
    assert_eq!(e.tiebreak(), &[Rank::Jack, Rank::King]);
}

#[test]
fn fewer_than_seven_cards_is_rejected() {
    let six = parse_cards("Jc Jd Jh Js Kc 2d").unwrap();
    assert_eq!(
        evaluate(&six),
        Err(EvalError::InvalidHand(HandError::CardCount { expected: 7, got: 6 }))
    );
    assert!(evaluate(&[]).is_err());
}

#[test]
fn category_royal_flush() {
    let e = eval("As Ks Qs Js Ts 2d 2h");
    assert_eq!(e.category(), Category::RoyalFlush);
    assert_eq!(e.tiebreak(), &[Rank::Ace]);
}

#[test]
fn straight_flush_beats_higher_unsuited_straight() {
    let e = eval("9h 8h 7h 6h 5h Ts Jd");
    assert_eq!(e.category(), Category::StraightFlush);
    assert_eq!(e.tiebreak(), &[Rank::Nine]);
}

#[test]
fn quads_beside_trips() {
    let e = eval("9c 9d 9h 9s Kc Kd Kh");
    assert_eq!(e.category(), Category::FourOfAKind);
    assert_eq!(e.tiebreak(), &[Rank::Nine, Rank::King]);
}

#[test]
fn full_house_with_four_to_a_flush() {
    let e = eval("Qh Qd Qs 8h 8c 4h 2h");
    assert_eq!(e.category(), Category::FullHouse);
    assert_eq!(e.tiebreak(), &[Rank::Queen, Rank::Eight]);
}

#[test]
fn full_house_from_two_trips() {
    let e = eval("3c 3d 3h Js Jc Jd 2h");
    assert_eq!(e.category(), Category::FullHouse);
    assert_eq!(e.tiebreak(), &[Rank::Jack, Rank::Three]);
}

#[test]
fn flush_uses_top_five_of_suit() {
    let e = eval("Kh Th 8h 6h 3h 2h As");
    assert_eq!(e.category(), Category::Flush);
    assert_eq!(e.tiebreak(), &[Rank::King, Rank::Ten, Rank::Eight, Rank::Six, Rank::Three]);
}

#[test]
fn flush_beats_straight() {
    let e = eval("2h 5h 9h Jh Kh Tc Qd");
    assert_eq!(e.category(), Category::Flush);
}

#[test]
fn ace_high_straight_with_paired_board() {
    let e = eval("As Kd Qh Jc Tc Td 2s");
    assert_eq!(e.category(), Category::Straight);
    assert_eq!(e.tiebreak(), &[Rank::Ace]);
}

#[test]
fn three_of_a_kind_kickers() {
    let e = eval("7c 7d 7h As 9c 4d 2h");
    assert_eq!(e.category(), Category::ThreeOfAKind);
    assert_eq!(e.tiebreak(), &[Rank::Seven, Rank::Ace, Rank::Nine]);
}

#[test]
fn two_pair_from_three_pairs() {
    let e = eval("Ac Ad 9h 9s 4c 4d Kh");
    assert_eq!(e.category(), Category::TwoPair);
    assert_eq!(e.tiebreak(), &[Rank::Ace, Rank::Nine, Rank::King]);
}

#[test]
fn one_pair_kickers() {
    let e = eval("5c 5d Ah Qs 9c 4d 2h");
    assert_eq!(e.category(), Category::OnePair);
    assert_eq!(e.tiebreak(), &[Rank::Five, Rank::Ace, Rank::Queen, Rank::Nine]);
}

#[test]
fn high_card_top_five() {
    let e = eval("Ah Kd 7s 5c 2d 9h Jc");
    assert_eq!(e.category(), Category::HighCard);
    assert_eq!(e.tiebreak(), &[Rank::Ace, Rank::King, Rank::Jack, Rank::Nine, Rank::Seven]);
}

#[test]
fn near_wheel_is_not_a_straight() {
    let e = eval("Ac 2d 3h 4s 6c 9d Jh");
    assert_eq!(e.category(), Category::HighCard);
}

#[test]
fn evaluate_seven_matches_validated_path() {
    let cards = [
        Card::new(Rank::Ten, Suit::Hearts),
        Card::new(Rank::Nine, Suit::Hearts),
        Card::new(Rank::King, Suit::Spades),
        Card::new(Rank::Jack, Suit::Hearts),
        Card::new(Rank::Queen, Suit::Diamonds),
        Card::new(Rank::Eight, Suit::Hearts),
        Card::new(Rank::Nine, Suit::Spades),
    ];
    assert_eq!(evaluate_seven(&cards), evaluate(&cards).unwrap());
}
