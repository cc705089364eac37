//! The draft line: the shared row of face-up dominoes.
//!
//! Each round the scheduler draws a fresh line. Players claim slots in
//! pick order during Select; during Place the line is popped lowest
//! rank first, which is exactly draft order. Because the slots are
//! pre-sorted ascending by rank, "picked an early slot" translates
//! into "places first and goes later next round".

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

use crate::core::{GameError, PlayerId};

use super::domino::Domino;

/// One face-up domino and its claimant, if any.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub domino: Domino,
    pub claimant: Option<PlayerId>,
}

/// The ordered row of dominoes drawn this round.
///
/// A line never holds more than four slots, so the storage is inline.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    slots: SmallVec<[Slot; 4]>,
}

impl Line {
    /// Build a line from this round's draw, sorted ascending by rank.
    #[must_use]
    pub fn new(mut dominoes: Vec<Domino>) -> Self {
        dominoes.sort_unstable();
        Self {
            slots: dominoes
                .into_iter()
                .map(|domino| Slot {
                    domino,
                    claimant: None,
                })
                .collect(),
        }
    }

    /// Number of slots remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True once every slot has been popped.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Read-only view of the slots, lowest rank first.
    #[must_use]
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Indices of the slots nobody has claimed yet.
    pub fn unclaimed(&self) -> impl Iterator<Item = usize> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.claimant.is_none())
            .map(|(i, _)| i)
    }

    /// Assign `player` as the claimant of slot `index`.
    ///
    /// Fails with `SlotAlreadyClaimed` if the slot has a claimant and
    /// `IndexOutOfRange` if the index does not exist; neither failure
    /// changes the line.
    pub fn choose(&mut self, player: PlayerId, index: usize) -> Result<(), GameError> {
        let len = self.slots.len();
        let slot = self
            .slots
            .get_mut(index)
            .ok_or(GameError::IndexOutOfRange { index, len })?;

        if let Some(claimant) = slot.claimant {
            return Err(GameError::SlotAlreadyClaimed { index, claimant });
        }

        slot.claimant = Some(player);
        debug!(%player, index, domino = %slot.domino, "claimed");
        Ok(())
    }

    /// Remove and return the lowest-rank slot.
    ///
    /// Place-phase order: dominoes come off the line in draft order.
    pub fn pop(&mut self) -> Option<Slot> {
        if self.slots.is_empty() {
            None
        } else {
            Some(self.slots.remove(0))
        }
    }
}
