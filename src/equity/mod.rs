//! Exhaustive equity enumeration.
//!
//! Every completion of the board is dealt from the cards nobody holds, each
//! hand is evaluated, and the showdown winners are counted. With a single
//! starting hand, each deal also hands two unknown cards to a generic field
//! opponent, reported as the last result entry.
//!
//! ```
//! use poker_equity::cards::parse_cards;
//! use poker_equity::equity::{equity_with, EquityConfig};
//!
//! let hands = ["As Ad".parse().unwrap(), "Kc Kd".parse().unwrap()];
//! let config = EquityConfig::default().with_board(parse_cards("2c 7d 9h Jc").unwrap());
//! let result = equity_with(&hands, &config).unwrap();
//! assert_eq!(result.deals(), 44);
//! assert_eq!(result.to_string(), "H0: 95.45 H1: 4.55");
//! ```

mod deal;
mod result;
mod tally;

pub use result::{EquityResult, HandEquity};

use crate::cards::Card;
use crate::combinations::{binomial, CombinationError, CombinationStream, Combinations};
use crate::deck::{Deck, DeckError};
use crate::hand::{first_duplicate, HandError, StartingHand, BOARD_CARDS};
use crate::showdown::ShowdownError;
use deal::Dealer;
use std::fmt;
use std::str::FromStr;

/// Most starting hands one query accepts: 23 hands and a full board use 51
/// cards.
pub const MAX_HANDS: usize = 23;

/// Default channel capacity for [`Strategy::Streamed`].
pub const DEFAULT_CAPACITY: usize = 1024;

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum EquityError {
    #[error("no starting hands given")]
    NoHands,
    #[error("{0} starting hands given, at most 23 fit in one deck")]
    TooManyHands(usize),
    #[error("card {0} is used more than once")]
    DuplicateCard(Card),
    #[error("board has {0} cards, at most 5 allowed")]
    BoardTooLong(usize),
    #[error("deck error: {0}")]
    Deck(#[from] DeckError),
    #[error("invalid hand: {0}")]
    Hand(#[from] HandError),
    #[error("showdown logic error: {0}")]
    Logic(#[from] ShowdownError),
    #[error("enumeration error: {0}")]
    Enumeration(#[from] CombinationError),
}

/// How the deals are enumerated. All strategies visit the same deals and
/// produce identical results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Lazy enumeration on the calling thread.
    #[default]
    Sequential,
    /// A producer thread hands deals over a bounded channel of `capacity`.
    Streamed { capacity: usize },
    /// Partitions by first drawn card across the rayon pool. Needs the
    /// `parallel` feature and runs sequentially without it.
    Parallel,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Sequential => f.write_str("sequential"),
            Strategy::Streamed { capacity } => write!(f, "streamed({capacity})"),
            Strategy::Parallel => f.write_str("parallel"),
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown strategy '{0}' (expected sequential, streamed or parallel)")]
pub struct StrategyParseError(String);

impl FromStr for Strategy {
    type Err = StrategyParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sequential" | "seq" => Ok(Strategy::Sequential),
            "streamed" | "stream" => Ok(Strategy::Streamed { capacity: DEFAULT_CAPACITY }),
            "parallel" | "par" => Ok(Strategy::Parallel),
            _ => Err(StrategyParseError(s.to_string())),
        }
    }
}

/// Options for [`equity_with`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EquityConfig {
    /// Community cards already known, zero to five.
    pub board: Vec<Card>,
    pub strategy: Strategy,
}

impl EquityConfig {
    pub fn with_board(mut self, board: Vec<Card>) -> Self {
        self.board = board;
        self
    }

    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }
}

/// Parse starting hands such as `"As2s"` or `"9c Ts"`.
pub fn parse_hands<S: AsRef<str>>(inputs: &[S]) -> Result<Vec<StartingHand>, EquityError> {
    inputs.iter().map(|s| s.as_ref().parse::<StartingHand>().map_err(EquityError::from)).collect()
}

/// Equity of `hands` over every possible five-card board.
pub fn equity(hands: &[StartingHand]) -> Result<EquityResult, EquityError> {
    equity_with(hands, &EquityConfig::default())
}

/// Equity of `hands` over every completion of `config.board`.
pub fn equity_with(hands: &[StartingHand], config: &EquityConfig) -> Result<EquityResult, EquityError> {
    let remaining = remaining_deck(hands, &config.board)?;
    let dealer = Dealer::new(hands, &config.board);
    log::debug!(
        "equity: {} hands, {} board cards, C({}, {}) = {} deals, {}",
        hands.len(),
        config.board.len(),
        remaining.len(),
        dealer.draw(),
        binomial(remaining.len(), dealer.draw()),
        config.strategy
    );

    let tally = run(&dealer, remaining.into_cards(), config.strategy)?;
    log::debug!("equity: scored {} deals", tally.deals);

    let mut labels: Vec<Option<StartingHand>> = hands.iter().copied().map(Some).collect();
    labels.resize(dealer.players(), None);
    Ok(EquityResult::from_tally(labels, tally))
}

/// Validate the query and take every used card out of a fresh deck.
fn remaining_deck(hands: &[StartingHand], board: &[Card]) -> Result<Deck, EquityError> {
    if hands.is_empty() {
        return Err(EquityError::NoHands);
    }
    if hands.len() > MAX_HANDS {
        return Err(EquityError::TooManyHands(hands.len()));
    }
    if board.len() > BOARD_CARDS {
        return Err(EquityError::BoardTooLong(board.len()));
    }
    let used: Vec<Card> = hands.iter().flat_map(StartingHand::cards).chain(board.iter().copied()).collect();
    if let Some(card) = first_duplicate(&used) {
        return Err(EquityError::DuplicateCard(card));
    }
    let mut deck = Deck::standard();
    deck.remove_all(&used)?;
    Ok(deck)
}

fn run(dealer: &Dealer, remaining: Vec<Card>, strategy: Strategy) -> Result<tally::Tally, EquityError> {
    let tally = match strategy {
        Strategy::Sequential => dealer.tally(Combinations::new(&remaining, dealer.draw()))?,
        Strategy::Streamed { capacity } => {
            let stream = CombinationStream::spawn(remaining, dealer.draw(), capacity)?;
            dealer.tally_stream(stream)?
        }
        #[cfg(feature = "parallel")]
        Strategy::Parallel => dealer.tally_parallel(&remaining)?,
        #[cfg(not(feature = "parallel"))]
        Strategy::Parallel => {
            log::warn!("built without the `parallel` feature, enumerating sequentially");
            dealer.tally(Combinations::new(&remaining, dealer.draw()))?
        }
    };
    Ok(tally)
}
