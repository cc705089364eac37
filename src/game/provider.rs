//! The move-provider seam.
//!
//! A `MoveProvider` is the engine's only window onto a player's will:
//! which line slot to claim during Select, and which of the legal
//! plays to make during Place. Implementations (a terminal prompt, a
//! script, an AI) are pluggable and live outside the engine core; the
//! two scripted providers here drive tests and simulations.
//!
//! Providers may abort instead of choosing. The scheduler consults a
//! provider strictly before `choose`/`place` mutate anything, so an
//! abort never leaves a half-applied turn behind.

use crate::board::Board;
use crate::core::{GameRng, MatchAbort, PlayerId};
use crate::draft::{Domino, Line, Play};

/// Supplies a player's draft and placement choices.
pub trait MoveProvider {
    /// Pick an unclaimed slot index from the line.
    ///
    /// A choice the line rejects is re-prompted; implementations must
    /// eventually return a valid slot or abort.
    fn choose_slot(&mut self, player: PlayerId, line: &Line) -> Result<usize, MatchAbort>;

    /// Pick one of the legal plays for the claimed domino.
    ///
    /// Only called when `legal` is non-empty; an unplaceable domino is
    /// discarded without consulting the provider.
    fn choose_play(
        &mut self,
        player: PlayerId,
        board: &Board,
        domino: &Domino,
        legal: &[Play],
    ) -> Result<Play, MatchAbort>;
}

/// Deterministic provider: lowest unclaimed slot, first legal play.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstChoice;

impl MoveProvider for FirstChoice {
    fn choose_slot(&mut self, _player: PlayerId, line: &Line) -> Result<usize, MatchAbort> {
        Ok(line.unclaimed().next().unwrap_or(0))
    }

    fn choose_play(
        &mut self,
        _player: PlayerId,
        _board: &Board,
        _domino: &Domino,
        legal: &[Play],
    ) -> Result<Play, MatchAbort> {
        Ok(legal[0])
    }
}

/// Uniformly random provider with its own deterministic stream.
#[derive(Clone, Debug)]
pub struct RandomChoice {
    rng: GameRng,
}

impl RandomChoice {
    /// Create a provider seeded independently of the match RNG.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }
}

impl MoveProvider for RandomChoice {
    fn choose_slot(&mut self, _player: PlayerId, line: &Line) -> Result<usize, MatchAbort> {
        let open: Vec<usize> = line.unclaimed().collect();
        Ok(self.rng.choose(&open).copied().unwrap_or(0))
    }

    fn choose_play(
        &mut self,
        _player: PlayerId,
        _board: &Board,
        _domino: &Domino,
        legal: &[Play],
    ) -> Result<Play, MatchAbort> {
        Ok(*self.rng.choose(legal).expect("choose_play requires legal plays"))
    }
}
