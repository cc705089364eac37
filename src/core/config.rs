//! Match configuration.
//!
//! A `Ruleset` is decided once at setup and never changes afterwards.
//! Everything the rules vary on (draw count, picks per player, match
//! length, board extent, bonus toggles) is derived from the player
//! count and the selected variants, not from flags checked ad hoc
//! around the engine.
//!
//! ## Usage
//!
//! ```
//! use kingdomino::core::Ruleset;
//!
//! let rules = Ruleset::new(3).unwrap();
//! assert_eq!(rules.draw_count(), 3);
//! assert_eq!(rules.deck_size(), 36);
//!
//! // Mighty duel: 2 players, doubled match on a 12x12 board.
//! let duel = Ruleset::new(2).unwrap().mighty_duel().unwrap();
//! assert_eq!(duel.board_size(), 12);
//! assert_eq!(duel.deck_size(), 48);
//! ```

use serde::{Deserialize, Serialize};

use super::error::GameError;
use super::geometry::Point;

/// Turns each player takes in a standard match.
const STANDARD_TURNS: usize = 12;

/// Immutable rule configuration for one match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ruleset {
    player_count: usize,
    mighty_duel: bool,
    contained_kingdom_bonus: bool,
    harmony_bonus: bool,
}

impl Ruleset {
    /// Create a standard ruleset for 2-4 players.
    ///
    /// Both scoring bonuses start disabled; enable them with the
    /// `with_*` builders.
    pub fn new(player_count: usize) -> Result<Self, GameError> {
        if !(2..=4).contains(&player_count) {
            return Err(GameError::InvalidRuleCombination(format!(
                "{} players (supported: 2-4)",
                player_count
            )));
        }

        Ok(Self {
            player_count,
            mighty_duel: false,
            contained_kingdom_bonus: false,
            harmony_bonus: false,
        })
    }

    /// Select the mighty-duel variant: two players, doubled turn count,
    /// 12x12 board. Rejected for any other player count.
    pub fn mighty_duel(mut self) -> Result<Self, GameError> {
        if self.player_count != 2 {
            return Err(GameError::InvalidRuleCombination(format!(
                "mighty duel requires 2 players, got {}",
                self.player_count
            )));
        }
        self.mighty_duel = true;
        Ok(self)
    }

    /// Enable the contained-kingdom scoring bonus.
    #[must_use]
    pub fn with_contained_kingdom_bonus(mut self) -> Self {
        self.contained_kingdom_bonus = true;
        self
    }

    /// Enable the harmony scoring bonus.
    #[must_use]
    pub fn with_harmony_bonus(mut self) -> Self {
        self.harmony_bonus = true;
        self
    }

    /// Number of seats in the match.
    #[must_use]
    pub const fn player_count(&self) -> usize {
        self.player_count
    }

    /// Dominoes drawn into the line each round: 3 for three players,
    /// 4 otherwise.
    #[must_use]
    pub const fn draw_count(&self) -> usize {
        if self.player_count == 3 {
            3
        } else {
            4
        }
    }

    /// Line slots each player claims per round. Two-player matches
    /// draft twice per round.
    #[must_use]
    pub const fn picks_per_player(&self) -> usize {
        if self.player_count == 2 {
            2
        } else {
            1
        }
    }

    /// Placements each player makes over the whole match.
    #[must_use]
    pub const fn max_turns(&self) -> usize {
        if self.mighty_duel {
            STANDARD_TURNS * 2
        } else {
            STANDARD_TURNS
        }
    }

    /// Dominoes sampled for the match: max turns x player count.
    #[must_use]
    pub const fn deck_size(&self) -> usize {
        self.max_turns() * self.player_count
    }

    /// Side length of the board's coordinate extent.
    #[must_use]
    pub const fn board_size(&self) -> i32 {
        if self.mighty_duel {
            12
        } else {
            9
        }
    }

    /// Side length of the playable inner sub-square the
    /// contained-kingdom bonus is judged against.
    #[must_use]
    pub const fn inner_size(&self) -> i32 {
        if self.mighty_duel {
            7
        } else {
            5
        }
    }

    /// The castle cell, at the center of the extent.
    #[must_use]
    pub const fn origin(&self) -> Point {
        let mid = self.board_size() / 2;
        Point::new(mid, mid)
    }

    /// Is the contained-kingdom bonus in force?
    #[must_use]
    pub const fn contained_kingdom_bonus(&self) -> bool {
        self.contained_kingdom_bonus
    }

    /// Is the harmony bonus in force?
    #[must_use]
    pub const fn harmony_bonus(&self) -> bool {
        self.harmony_bonus
    }
}
