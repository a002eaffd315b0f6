use super::tally::Tally;
use crate::cards::{Card, Rank, Suit};
use crate::combinations::{CombinationStream, Combinations};
use crate::evaluator::{evaluate_seven, HandValue};
use crate::hand::{StartingHand, BOARD_CARDS, HAND_CARDS, HOLE_CARDS};
use crate::showdown::{compare, ShowdownError, Winners};

const FILLER: Card = Card::new(Rank::Two, Suit::Clubs);

/// Turns each drawn set of unknown cards into a showdown.
///
/// A deal fills the missing board cards. In single-hand mode the first two
/// drawn cards are dealt to a field hand first, which scores after the
/// named hands.
#[derive(Debug, Clone)]
pub(crate) struct Dealer {
    holes: Vec<[Card; HOLE_CARDS]>,
    board: [Card; BOARD_CARDS],
    known: usize,
    field: bool,
}

impl Dealer {
    /// `board` must hold at most five cards; callers validate.
    pub fn new(hands: &[StartingHand], board: &[Card]) -> Self {
        debug_assert!(board.len() <= BOARD_CARDS);
        let mut full = [FILLER; BOARD_CARDS];
        full[..board.len()].copy_from_slice(board);
        Self {
            holes: hands.iter().map(StartingHand::cards).collect(),
            board: full,
            known: board.len(),
            field: hands.len() == 1,
        }
    }

    /// Unknown cards per deal.
    pub fn draw(&self) -> usize {
        let field = if self.field { HOLE_CARDS } else { 0 };
        field + BOARD_CARDS - self.known
    }

    /// Hands scored per deal, field hand included.
    pub fn players(&self) -> usize {
        self.holes.len() + usize::from(self.field)
    }

    pub fn score(&self, drawn: &[Card], values: &mut Vec<HandValue>) -> Result<Winners, ShowdownError> {
        debug_assert_eq!(drawn.len(), self.draw());
        let (field, rest) = if self.field {
            let (f, r) = drawn.split_at(HOLE_CARDS);
            (Some([f[0], f[1]]), r)
        } else {
            (None, drawn)
        };
        let mut board = self.board;
        board[self.known..].copy_from_slice(rest);

        values.clear();
        for [a, b] in self.holes.iter().copied().chain(field) {
            let seven: [Card; HAND_CARDS] = [a, b, board[0], board[1], board[2], board[3], board[4]];
            values.push(evaluate_seven(&seven));
        }
        compare(values)
    }

    /// Score every deal of an in-thread enumeration.
    pub fn tally(&self, mut deals: Combinations<'_, Card>) -> Result<Tally, ShowdownError> {
        let mut tally = Tally::new(self.players());
        let mut values = Vec::with_capacity(self.players());
        let mut buf = [FILLER; HAND_CARDS];
        let drawn = &mut buf[..self.draw()];
        while deals.fill_next(drawn) {
            tally.record(self.score(drawn, &mut values)?);
        }
        Ok(tally)
    }

    /// Score deals handed over by a producer thread. Returning early drops
    /// the stream, which stops the producer.
    pub fn tally_stream(&self, stream: CombinationStream<Card>) -> Result<Tally, ShowdownError> {
        let mut tally = Tally::new(self.players());
        let mut values = Vec::with_capacity(self.players());
        for drawn in stream {
            tally.record(self.score(&drawn, &mut values)?);
        }
        Ok(tally)
    }

    /// Score disjoint partitions on the rayon pool and sum the tallies.
    #[cfg(feature = "parallel")]
    pub fn tally_parallel(&self, remaining: &[Card]) -> Result<Tally, ShowdownError> {
        use crate::combinations::partitions;
        use rayon::prelude::*;

        partitions(remaining, self.draw())
            .into_par_iter()
            .enumerate()
            .map(|(first, part)| -> Result<Tally, ShowdownError> {
                let tally = self.tally(part)?;
                log::trace!("partition {first}: {} deals", tally.deals);
                Ok(tally)
            })
            .try_reduce(|| Tally::new(self.players()), |a, b| Ok(a.merge(b)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;
    use crate::showdown::Outcome;

    fn hands(s: &[&str]) -> Vec<StartingHand> {
        s.iter().map(|h| h.parse().unwrap()).collect()
    }

    #[test]
    fn draw_sizes() {
        let two = hands(&["As Ks", "Qd Qc"]);
        assert_eq!(Dealer::new(&two, &[]).draw(), 5);
        let flop = parse_cards("2c 7d 9h").unwrap();
        assert_eq!(Dealer::new(&two, &flop).draw(), 2);
        let one = hands(&["As Ks"]);
        let d = Dealer::new(&one, &flop);
        assert_eq!(d.draw(), 4);
        assert_eq!(d.players(), 2);
    }

    #[test]
    fn score_completes_the_board() {
        let dealer = Dealer::new(&hands(&["As Ad", "Kc Kd"]), &parse_cards("2c 7d 9h").unwrap());
        let mut values = Vec::new();
        let w = dealer.score(&parse_cards("Kh 3s").unwrap(), &mut values).unwrap();
        assert_eq!(w.outcome(), Some(Outcome::Win(1)));
        let w = dealer.score(&parse_cards("4h 3s").unwrap(), &mut values).unwrap();
        assert_eq!(w.outcome(), Some(Outcome::Win(0)));
    }

    #[test]
    fn field_hand_takes_first_two_drawn() {
        let board = parse_cards("2c 7d 9h Jc").unwrap();
        let dealer = Dealer::new(&hands(&["3s 4s"]), &board);
        let mut values = Vec::new();
        // field gets a pair of aces, river is a blank
        let w = dealer.score(&parse_cards("Ah As 5d").unwrap(), &mut values).unwrap();
        assert_eq!(w.outcome(), Some(Outcome::Win(1)));
        assert_eq!(values.len(), 2);
    }

    #[test]
    fn tally_counts_every_deal() {
        let board = parse_cards("2c 7d 9h Jc").unwrap();
        let dealer = Dealer::new(&hands(&["As Ad", "Kc Kd"]), &board);
        let remaining: Vec<Card> = crate::deck::Deck::standard()
            .into_cards()
            .into_iter()
            .filter(|c| !board.contains(c) && !["As", "Ad", "Kc", "Kd"].contains(&c.to_string().as_str()))
            .collect();
        let tally = dealer.tally(Combinations::new(&remaining, 1)).unwrap();
        assert_eq!(tally.deals, 44);
        // only the two remaining kings beat the aces
        assert_eq!(tally.wins, vec![42, 2]);
    }
}
