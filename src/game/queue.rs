//! The pick-order queue.
//!
//! Turn order in Kingdomino is a consequence of the players' own
//! drafting: the order dominoes are placed in one round is exactly the
//! order players pick in the next. That coupling is easy to get subtly
//! wrong inline (especially the doubled queue of two-player matches),
//! so it lives behind an explicit FIFO with its rotation pinned by
//! tests.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// FIFO queue of seats waiting to pick.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnQueue {
    queue: VecDeque<PlayerId>,
}

impl TurnQueue {
    /// An empty queue, ready to collect next round's order.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// The opening order: seats 0..n repeated `picks_per_player`
    /// times. Two-player matches draft twice per round, so their
    /// opening queue is `[0, 1, 0, 1]`.
    #[must_use]
    pub fn seating(player_count: usize, picks_per_player: usize) -> Self {
        let mut queue = VecDeque::with_capacity(player_count * picks_per_player);
        for _ in 0..picks_per_player {
            queue.extend(PlayerId::all(player_count));
        }
        Self { queue }
    }

    /// Remove and return the front seat.
    pub fn pop(&mut self) -> Option<PlayerId> {
        self.queue.pop_front()
    }

    /// Append a seat at the back.
    pub fn push(&mut self, player: PlayerId) {
        self.queue.push_back(player);
    }

    /// Seats currently queued, front to back.
    pub fn iter(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.queue.iter().copied()
    }

    /// Number of queued seats.
    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// True when the queue has been drained.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
