use clap::Parser;
use poker_equity::cards::{parse_cards, Card};
use poker_equity::deck::Deck;
use poker_equity::equity::{equity_with, parse_hands, EquityConfig, Strategy};
use poker_equity::hand::StartingHand;
use poker_equity::table::{HandClass, ProbabilityTable};
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(author, version, about = "Exact Hold'em equity by enumerating every board", long_about = None)]
struct Cli {
    /// Starting hands, e.g. `As2s` or `"9c Ts"`. A single hand plays against a random field hand.
    hands: Vec<String>,
    /// Known community cards, e.g. `"Ks 7s 8d"`.
    #[arg(short, long)]
    board: Option<String>,
    /// sequential, streamed or parallel.
    #[arg(short, long, default_value = "sequential")]
    strategy: Strategy,
    /// Channel capacity for the streamed strategy.
    #[arg(long, default_value_t = poker_equity::equity::DEFAULT_CAPACITY)]
    capacity: usize,
    /// Deal this many extra random starting hands.
    #[arg(long)]
    deal: Option<usize>,
    /// Seed for `--deal`; random when omitted.
    #[arg(long, requires = "deal")]
    seed: Option<u64>,
    /// CSV of `class, win, tie` reference rows to print alongside results.
    #[arg(long)]
    table: Option<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let board = match &cli.board {
        Some(s) => parse_cards(s)?,
        None => Vec::new(),
    };
    let mut hands = parse_hands(&cli.hands)?;
    if let Some(n) = cli.deal {
        let seed = cli.seed.unwrap_or_else(rand::random);
        log::info!("dealing {n} hands with seed {seed}");
        hands.extend(deal(&hands, &board, n, seed)?);
    }
    let table = cli.table.as_ref().map(ProbabilityTable::from_path).transpose()?;

    let strategy = match cli.strategy {
        Strategy::Streamed { .. } => Strategy::Streamed { capacity: cli.capacity },
        other => other,
    };
    let config = EquityConfig::default().with_board(board).with_strategy(strategy);
    let result = equity_with(&hands, &config)?;

    println!("board: {}", join(&config.board));
    println!("deals: {} ({strategy})", result.deals());
    for (i, h) in result.iter().enumerate() {
        let (label, class) = match h.hand {
            Some(hand) => (hand.to_string(), HandClass::of(&hand).to_string()),
            None => ("field".to_string(), "-".to_string()),
        };
        print!(
            "H{i} {label:<5} {class:<4} win {:6.2}%  tie {:6.2}%  equity {:6.2}%",
            h.win_percent(),
            h.tie_percent(),
            h.equity_percent()
        );
        if let (Some(table), Some(hand)) = (&table, h.hand) {
            match table.lookup(&hand) {
                Some(p) => print!("  [table win {:.2}% tie {:.2}%]", p.win, p.tie),
                None => print!("  [no table row]"),
            }
        }
        println!();
    }
    Ok(())
}

/// Deal `n` starting hands from a seeded shuffle of the unused cards.
fn deal(hands: &[StartingHand], board: &[Card], n: usize, seed: u64) -> Result<Vec<StartingHand>, Box<dyn Error>> {
    let mut deck = Deck::standard();
    let used: Vec<Card> = hands.iter().flat_map(StartingHand::cards).chain(board.iter().copied()).collect();
    deck.remove_all(&used)?;
    deck.shuffle_seeded(seed);
    let mut out = Vec::with_capacity(n);
    for _ in 0..n {
        let cards = deck.draw_n(2);
        out.push(StartingHand::from_slice(&cards)?);
    }
    Ok(out)
}

fn join(cards: &[Card]) -> String {
    if cards.is_empty() {
        return "none".to_string();
    }
    cards.iter().map(Card::to_string).collect::<Vec<_>>().join(" ")
}
