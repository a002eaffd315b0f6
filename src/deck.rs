use crate::cards::{Card, Rank, Suit, NUM_CARDS};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DeckError {
    #[error("card {0} is not in the deck")]
    Missing(Card),
}

/// A deck of distinct cards, starting from the standard 52.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Fresh, unshuffled deck in suit-major order (2c..Ac, 2d..Ad, ...).
    ///
    /// ```
    /// use poker_equity::deck::Deck;
    ///
    /// let deck = Deck::standard();
    /// assert_eq!(deck.len(), 52);
    /// ```
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(NUM_CARDS);
        for s in Suit::ALL {
            for r in Rank::ALL {
                cards.push(Card::new(r, s));
            }
        }
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// Remove one specific card, preserving the order of the rest.
    pub fn remove(&mut self, card: Card) -> Result<(), DeckError> {
        let pos = self.cards.iter().position(|&c| c == card).ok_or(DeckError::Missing(card))?;
        self.cards.remove(pos);
        Ok(())
    }

    /// Remove every card in `cards`. Either all are removed or, on the first
    /// missing card, the deck is left untouched.
    ///
    /// ```
    /// use poker_equity::cards::parse_cards;
    /// use poker_equity::deck::Deck;
    ///
    /// let mut deck = Deck::standard();
    /// deck.remove_all(&parse_cards("As 2s 9c Ts").unwrap()).unwrap();
    /// assert_eq!(deck.len(), 48);
    /// ```
    pub fn remove_all(&mut self, cards: &[Card]) -> Result<(), DeckError> {
        let mut drop = 0u64;
        for &card in cards {
            if drop & card.mask() != 0 || !self.contains(card) {
                return Err(DeckError::Missing(card));
            }
            drop |= card.mask();
        }
        self.cards.retain(|c| drop & c.mask() == 0);
        Ok(())
    }

    /// Shuffle using a seeded RNG for reproducibility.
    pub fn shuffle_seeded(&mut self, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.cards.shuffle(&mut rng);
    }

    /// Shuffle using the provided RNG implementing Rng.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Draw one card from the top of the deck.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Draw `n` cards from the top of the deck.
    pub fn draw_n(&mut self, n: usize) -> Vec<Card> {
        (0..n).filter_map(|_| self.draw()).collect()
    }

    pub fn into_cards(self) -> Vec<Card> {
        self.cards
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::standard()
    }
}
