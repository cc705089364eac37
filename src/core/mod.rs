//! Core engine types: geometry, players, RNG, rules configuration,
//! and the error taxonomy.
//!
//! Everything here is match-agnostic: the board and draft modules
//! build on these without knowing which variant is in force.

pub mod config;
pub mod error;
pub mod geometry;
pub mod player;
pub mod rng;

pub use config::Ruleset;
pub use error::{GameError, MatchAbort};
pub use geometry::{Direction, Point};
pub use player::{PlayerId, PlayerMap};
pub use rng::GameRng;
