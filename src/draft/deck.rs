//! The deck: the shuffled, size-limited domino supply for one match.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{GameError, GameRng};

use super::domino::Domino;

/// The dominoes sampled for this match.
///
/// Built once at setup by shuffling the full definition set and
/// keeping `size` of them; a drawn domino is never re-added.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    dominoes: Vec<Domino>,
}

impl Deck {
    /// Shuffle `definitions` and keep `size` of them as this match's
    /// supply.
    #[must_use]
    pub fn new(mut definitions: Vec<Domino>, size: usize, rng: &mut GameRng) -> Self {
        rng.shuffle(&mut definitions);
        definitions.truncate(size);
        debug!(size = definitions.len(), "deck dealt");
        Self {
            dominoes: definitions,
        }
    }

    /// Remove and return `n` dominoes, sorted ascending by rank.
    ///
    /// Fails with `DeckExhausted`, drawing nothing, when fewer than `n`
    /// remain.
    pub fn draw(&mut self, n: usize) -> Result<Vec<Domino>, GameError> {
        let remaining = self.dominoes.len();
        if remaining < n {
            return Err(GameError::DeckExhausted {
                requested: n,
                remaining,
            });
        }

        let mut drawn = self.dominoes.split_off(remaining - n);
        drawn.sort_unstable();
        Ok(drawn)
    }

    /// True iff no dominoes remain.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dominoes.is_empty()
    }

    /// Dominoes left in the supply.
    #[must_use]
    pub fn len(&self) -> usize {
        self.dominoes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draft::domino::standard_set;

    #[test]
    fn test_new_limits_to_size() {
        let mut rng = GameRng::new(42);
        let deck = Deck::new(standard_set(), 36, &mut rng);
        assert_eq!(deck.len(), 36);
        assert!(!deck.is_empty());
    }

    #[test]
    fn test_draw_returns_sorted() {
        let mut rng = GameRng::new(42);
        let mut deck = Deck::new(standard_set(), 48, &mut rng);

        let drawn = deck.draw(4).unwrap();
        assert_eq!(drawn.len(), 4);
        assert!(drawn.windows(2).all(|w| w[0].number < w[1].number));
        assert_eq!(deck.len(), 44);
    }

    #[test]
    fn test_draw_never_repeats() {
        let mut rng = GameRng::new(7);
        let mut deck = Deck::new(standard_set(), 48, &mut rng);

        let mut seen = std::collections::HashSet::new();
        while !deck.is_empty() {
            for domino in deck.draw(4).unwrap() {
                assert!(seen.insert(domino.number), "domino drawn twice");
            }
        }
        assert_eq!(seen.len(), 48);
    }

    #[test]
    fn test_exhausted_draw_fails_without_consuming() {
        let mut rng = GameRng::new(42);
        let mut deck = Deck::new(standard_set(), 2, &mut rng);

        let err = deck.draw(4).unwrap_err();
        assert_eq!(
            err,
            GameError::DeckExhausted {
                requested: 4,
                remaining: 2
            }
        );
        // Nothing was drawn by the failed request.
        assert_eq!(deck.len(), 2);
    }

    #[test]
    fn test_same_seed_same_deck() {
        let deck_a = Deck::new(standard_set(), 24, &mut GameRng::new(99));
        let deck_b = Deck::new(standard_set(), 24, &mut GameRng::new(99));
        assert_eq!(deck_a, deck_b);
    }
}
