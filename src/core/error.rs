//! Engine error taxonomy.
//!
//! Placement and claim errors are local and recoverable: the scheduler
//! re-queries the offending move provider. `DeckExhausted` ends the
//! round, `InvalidRuleCombination` is fatal at setup, and `Aborted`
//! reports a provider-initiated cancellation. Every failing operation
//! validates before it applies, so an error never leaves a board, line,
//! or deck partially mutated.

use thiserror::Error;

use super::geometry::{Direction, Point};
use super::player::PlayerId;

/// Everything that can go wrong inside the engine.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    /// The play violates bounds, occupancy, or the castle/suit
    /// adjacency rule. Recoverable: retry with a different play or
    /// accept the discard.
    #[error("invalid placement: anchor {anchor} facing {orientation}")]
    InvalidPlacement { anchor: Point, orientation: Direction },

    /// The line slot already has a claimant. Recoverable: re-prompt.
    #[error("line slot {index} already claimed by {claimant}")]
    SlotAlreadyClaimed { index: usize, claimant: PlayerId },

    /// The slot index does not exist in this line. Recoverable: re-prompt.
    #[error("line slot {index} out of range (line holds {len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// More dominoes were requested than remain. The scheduler never
    /// triggers this when it respects `Deck::is_empty`.
    #[error("deck exhausted: requested {requested} with {remaining} remaining")]
    DeckExhausted { requested: usize, remaining: usize },

    /// Unsupported player-count/variant mix, rejected at setup.
    #[error("invalid rule combination: {0}")]
    InvalidRuleCombination(String),

    /// A move provider cancelled the match mid-turn.
    #[error("match aborted by a move provider")]
    Aborted,
}

/// Cancellation signal from a move provider.
///
/// Providers return this instead of a choice to abort the match. The
/// scheduler only consults providers before `choose`/`place` mutate
/// anything, so an aborted match leaves boards, line, and deck intact.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MatchAbort;

impl From<MatchAbort> for GameError {
    fn from(_: MatchAbort) -> Self {
        GameError::Aborted
    }
}
