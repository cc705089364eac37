//! # kingdomino
//!
//! A board engine for the tile-drafting game Kingdomino (2-4 players):
//! domino placement with suit-matching and castle-anchoring rules,
//! connected-region scoring over a disjoint-set, and the draft
//! scheduler that couples what you pick now to when you go next.
//!
//! ## Design Principles
//!
//! 1. **Validate then apply**: `place` and `choose` reject bad input
//!    without mutating anything, so recoverable errors simply re-prompt.
//!
//! 2. **Deterministic**: a match is a pure function of its seed and
//!    its providers' choices. Shuffling and random providers draw from
//!    seeded, forkable streams.
//!
//! 3. **Rules decided once**: every variant knob (draw count, doubled
//!    two-player draft, mighty duel, scoring bonuses) lives in an
//!    immutable `Ruleset` built at setup.
//!
//! ## Modules
//!
//! - `core`: geometry, player ids, RNG, ruleset, error taxonomy
//! - `board`: tile surface, placement validation, connectivity, scoring
//! - `draft`: domino/tile/play value types, the line, the deck
//! - `game`: the round scheduler and the move-provider seam

pub mod board;
pub mod core;
pub mod draft;
pub mod game;

// Re-export commonly used types
pub use crate::core::{Direction, GameError, GameRng, MatchAbort, PlayerId, PlayerMap, Point, Ruleset};

pub use crate::board::{Board, DisjointSet, Score, CONTAINED_KINGDOM_BONUS, HARMONY_BONUS};

pub use crate::draft::{standard_set, Deck, Domino, Line, Play, Slot, Suit, Tile};

pub use crate::game::{
    FirstChoice, Game, MatchReport, MoveProvider, PlayerStanding, RandomChoice, TurnQueue,
};
