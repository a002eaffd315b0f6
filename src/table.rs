//! Starting-hand classes and precomputed win/tie reference data.
//!
//! The 1,326 two-card starting hands collapse into 169 classes once suits
//! only matter for whether the two cards match: pairs (`99`), suited
//! (`AKs`) and offsuit (`AKo`).
//!
//! ```
//! use poker_equity::table::{HandClass, ProbabilityTable};
//!
//! let data = "# class, win, tie\nAKs, 67.0, 1.7\n99, 72.1, 0.6\n";
//! let table = ProbabilityTable::from_reader(data.as_bytes()).unwrap();
//! let hand = "Kh Ah".parse().unwrap();
//! assert_eq!(HandClass::of(&hand).to_string(), "AKs");
//! assert_eq!(table.lookup(&hand).unwrap().win, 67.0);
//! ```

use crate::cards::Rank;
use crate::hand::StartingHand;
use std::collections::HashMap;
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

/// Number of distinct starting-hand classes.
pub const NUM_CLASSES: usize = 169;

/// A starting hand with suits abstracted away. `high >= low`; pairs are
/// never suited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HandClass {
    high: Rank,
    low: Rank,
    suited: bool,
}

impl HandClass {
    /// Returns `None` for a suited pair.
    pub fn new(a: Rank, b: Rank, suited: bool) -> Option<Self> {
        if a == b && suited {
            return None;
        }
        Some(Self { high: a.max(b), low: a.min(b), suited })
    }

    pub fn of(hand: &StartingHand) -> Self {
        let (a, b) = (hand.first(), hand.second());
        let suited = a.suit() == b.suit();
        // two distinct cards of one rank are never suited
        Self { high: a.rank().max(b.rank()), low: a.rank().min(b.rank()), suited }
    }

    pub fn high(&self) -> Rank {
        self.high
    }

    pub fn low(&self) -> Rank {
        self.low
    }

    pub fn is_pair(&self) -> bool {
        self.high == self.low
    }

    pub fn is_suited(&self) -> bool {
        self.suited
    }

    /// Concrete starting hands in this class: 6 for a pair, 4 suited, 12
    /// offsuit.
    pub fn combos(&self) -> usize {
        match (self.is_pair(), self.suited) {
            (true, _) => 6,
            (false, true) => 4,
            (false, false) => 12,
        }
    }

    /// Every class, strongest ranks first.
    pub fn all() -> Vec<HandClass> {
        let mut out = Vec::with_capacity(NUM_CLASSES);
        for (i, &high) in Rank::ALL.iter().enumerate().rev() {
            out.push(HandClass { high, low: high, suited: false });
            for &low in Rank::ALL[..i].iter().rev() {
                out.push(HandClass { high, low, suited: true });
                out.push(HandClass { high, low, suited: false });
            }
        }
        out
    }
}

impl fmt::Display for HandClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.high, self.low)?;
        match (self.is_pair(), self.suited) {
            (true, _) => Ok(()),
            (false, true) => f.write_str("s"),
            (false, false) => f.write_str("o"),
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid hand class '{0}'")]
pub struct HandClassParseError(String);

impl FromStr for HandClass {
    type Err = HandClassParseError;

    /// Accepts either rank order (`89o` reads as `98o`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || HandClassParseError(s.to_string());
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        let (a, b, suited) = match chars.as_slice() {
            [a, b] => (*a, *b, None),
            [a, b, k] => (*a, *b, Some(k.to_ascii_lowercase())),
            _ => return Err(err()),
        };
        let a = Rank::try_from(a).map_err(|_| err())?;
        let b = Rank::try_from(b).map_err(|_| err())?;
        let suited = match (a == b, suited) {
            (true, None) => false,
            (false, Some('s')) => true,
            (false, Some('o')) => false,
            _ => return Err(err()),
        };
        HandClass::new(a, b, suited).ok_or_else(err)
    }
}

/// Reference probabilities for one class, in percent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandProb {
    pub win: f64,
    pub tie: f64,
}

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum TableError {
    #[error("failed to read table: {0}")]
    Io(#[from] io::Error),
    #[error("line {line}: expected 'class, win, tie', got {fields} field(s)")]
    Malformed { line: usize, fields: usize },
    #[error("line {line}: {source}")]
    Class { line: usize, source: HandClassParseError },
    #[error("line {line}: invalid number '{text}'")]
    Number { line: usize, text: String },
    #[error("line {line}: duplicate class {class}")]
    Duplicate { line: usize, class: HandClass },
}

/// Read-only table of precomputed win/tie percentages keyed by class.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProbabilityTable {
    rows: HashMap<HandClass, HandProb>,
}

impl ProbabilityTable {
    /// Load comma-separated `class, win, tie` rows. Lines starting with `#`
    /// and blank lines are skipped; whitespace inside fields is ignored.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, TableError> {
        let mut rows = HashMap::new();
        for (n, line) in reader.lines().enumerate() {
            let line = line?;
            let line_no = n + 1;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            let fields: Vec<String> =
                trimmed.split(',').map(|f| f.chars().filter(|c| !c.is_whitespace()).collect()).collect();
            let [class, win, tie] = fields.as_slice() else {
                return Err(TableError::Malformed { line: line_no, fields: fields.len() });
            };
            let class: HandClass = class.parse().map_err(|source| TableError::Class { line: line_no, source })?;
            let number = |text: &String| {
                text.parse::<f64>().map_err(|_| TableError::Number { line: line_no, text: text.clone() })
            };
            let prob = HandProb { win: number(win)?, tie: number(tie)? };
            if rows.insert(class, prob).is_some() {
                return Err(TableError::Duplicate { line: line_no, class });
            }
        }
        log::debug!("loaded {} hand classes", rows.len());
        Ok(Self { rows })
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, TableError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn get(&self, class: &HandClass) -> Option<&HandProb> {
        self.rows.get(class)
    }

    pub fn lookup(&self, hand: &StartingHand) -> Option<&HandProb> {
        self.get(&HandClass::of(hand))
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Whether every one of the 169 classes has a row.
    pub fn is_complete(&self) -> bool {
        self.rows.len() == NUM_CLASSES
    }
}
