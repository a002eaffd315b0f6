//! poker-equity: seven-card Hold'em evaluation and exhaustive equity
//!
//! Goals:
//! - Deterministic evaluation of any seven cards into a totally ordered value
//! - Exact equity by enumerating every board completion, no sampling
//! - No panics for invalid input; use `Result` for recoverable errors
//!
//! ## Quick start: evaluate seven cards
//! ```
//! use poker_equity::cards::{parse_cards, Rank};
//! use poker_equity::evaluator::{evaluate, Category};
//!
//! let cards = parse_cards("Jc Jd Jh Js Kc 2d 3h").unwrap();
//! let value = evaluate(&cards).unwrap();
//! assert_eq!(value.category(), Category::FourOfAKind);
//! assert_eq!(value.tiebreak(), &[Rank::Jack, Rank::King]);
//! ```
//!
//! ## Quick start: equity on the turn
//! ```
//! use poker_equity::cards::parse_cards;
//! use poker_equity::equity::{equity_with, parse_hands, EquityConfig};
//!
//! let hands = parse_hands(&["As 2s", "9c Ts"]).unwrap();
//! let config = EquityConfig::default().with_board(parse_cards("Ks 7s 8d 3h").unwrap());
//! let result = equity_with(&hands, &config).unwrap();
//! assert_eq!(result.deals(), 44);
//! ```
//!
//! ## CLI
//! ```sh
//! cargo run --bin equity -- As2s 9cTs
//! ```

pub mod cards;
pub mod combinations;
pub mod deck;
pub mod equity;
pub mod evaluator;
pub mod hand;
pub mod showdown;
pub mod table;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
