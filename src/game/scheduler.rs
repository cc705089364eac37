//! The match scheduler.
//!
//! Drives `Setup -> (Round)* -> Scored`, where each round is
//! Draw -> Select -> Place:
//!
//! - **Draw**: deal `draw_count` dominoes from the deck into a fresh
//!   line.
//! - **Select**: drain the pick-order queue front to back; each seat's
//!   provider claims an unclaimed slot.
//! - **Place**: pop the line lowest rank first; each claimed domino is
//!   played onto its claimant's board (or discarded when no legal
//!   placement exists), and the claimant joins the back of next
//!   round's queue.
//!
//! That last step is the game's core turn-order invariant: placement
//! order this round *is* pick order next round.
//!
//! ## Usage
//!
//! ```
//! use kingdomino::core::Ruleset;
//! use kingdomino::game::{FirstChoice, Game, MoveProvider};
//!
//! let rules = Ruleset::new(2).unwrap();
//! let providers: Vec<Box<dyn MoveProvider>> =
//!     vec![Box::new(FirstChoice), Box::new(FirstChoice)];
//!
//! let game = Game::new(rules, providers, 42).unwrap();
//! let report = game.play().unwrap();
//! assert_eq!(report.standings().len(), 2);
//! ```

use serde::{Deserialize, Serialize};
use tracing::{info, info_span, warn};

use crate::board::{Board, Score};
use crate::core::{GameError, GameRng, PlayerId, PlayerMap, Ruleset};
use crate::draft::{standard_set, Deck, Domino, Line};

use super::provider::MoveProvider;
use super::queue::TurnQueue;

/// One player's final placement in the match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStanding {
    pub player: PlayerId,
    pub score: Score,
}

/// The read-only outcome of a finished match.
///
/// Boards are final here: the game that owned them has been consumed,
/// so nothing can place on them again.
#[derive(Debug)]
pub struct MatchReport {
    standings: Vec<PlayerStanding>,
    boards: PlayerMap<Board>,
}

impl MatchReport {
    /// Standings ranked by score descending, ties broken by total
    /// crown count, then by seat for stability.
    #[must_use]
    pub fn standings(&self) -> &[PlayerStanding] {
        &self.standings
    }

    /// The top-ranked standing.
    #[must_use]
    pub fn winner(&self) -> PlayerStanding {
        self.standings[0]
    }

    /// A player's final board, for rendering or inspection.
    #[must_use]
    pub fn board(&self, player: PlayerId) -> &Board {
        &self.boards[player]
    }
}

/// One Kingdomino match: boards, deck, pick order, and providers.
pub struct Game {
    rules: Ruleset,
    boards: PlayerMap<Board>,
    providers: PlayerMap<Box<dyn MoveProvider>>,
    deck: Deck,
    pick_order: TurnQueue,
    round: u32,
}

impl std::fmt::Debug for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("rules", &self.rules)
            .field("boards", &self.boards)
            .field("deck", &self.deck)
            .field("pick_order", &self.pick_order)
            .field("round", &self.round)
            .finish_non_exhaustive()
    }
}

impl Game {
    /// Set up a match over the standard 48-domino set.
    pub fn new(
        rules: Ruleset,
        providers: Vec<Box<dyn MoveProvider>>,
        seed: u64,
    ) -> Result<Self, GameError> {
        Self::with_set(rules, providers, standard_set(), seed)
    }

    /// Set up a match over a custom domino set.
    ///
    /// The set must be able to fill the ruleset's deck; one provider
    /// is required per seat.
    pub fn with_set(
        rules: Ruleset,
        providers: Vec<Box<dyn MoveProvider>>,
        definitions: Vec<Domino>,
        seed: u64,
    ) -> Result<Self, GameError> {
        let player_count = rules.player_count();

        if providers.len() != player_count {
            return Err(GameError::InvalidRuleCombination(format!(
                "{} providers for {} players",
                providers.len(),
                player_count
            )));
        }
        if definitions.len() < rules.deck_size() {
            return Err(GameError::InvalidRuleCombination(format!(
                "domino set of {} cannot fill a deck of {}",
                definitions.len(),
                rules.deck_size()
            )));
        }

        let mut rng = GameRng::new(seed);
        let deck = Deck::new(definitions, rules.deck_size(), &mut rng);

        let mut provider_iter = providers.into_iter();
        let providers = PlayerMap::new(player_count, |_| {
            provider_iter.next().expect("provider count checked above")
        });

        Ok(Self {
            rules,
            boards: PlayerMap::new(player_count, |_| Board::new(rules)),
            providers,
            deck,
            pick_order: TurnQueue::seating(player_count, rules.picks_per_player()),
            round: 0,
        })
    }

    /// The ruleset in force.
    #[must_use]
    pub const fn rules(&self) -> &Ruleset {
        &self.rules
    }

    /// A player's board mid-match (read-only).
    #[must_use]
    pub fn board(&self, player: PlayerId) -> &Board {
        &self.boards[player]
    }

    /// Run the match to completion and score it.
    ///
    /// Consumes the game: the boards in the returned report are final.
    pub fn play(mut self) -> Result<MatchReport, GameError> {
        info!(players = self.rules.player_count(), "match started");

        while !self.deck.is_empty() {
            self.round += 1;
            let span = info_span!("round", number = self.round);
            let _guard = span.enter();
            self.play_round()?;
        }

        Ok(self.into_report())
    }

    /// One Draw -> Select -> Place cycle.
    fn play_round(&mut self) -> Result<(), GameError> {
        let mut line = Line::new(self.deck.draw(self.rules.draw_count())?);
        info!(slots = line.len(), "line drawn");

        // Select: drain the queue in pick order. Recoverable claim
        // errors re-prompt the same provider.
        let mut order = std::mem::take(&mut self.pick_order);
        while let Some(player) = order.pop() {
            loop {
                let index = self.providers[player].choose_slot(player, &line)?;
                match line.choose(player, index) {
                    Ok(()) => break,
                    Err(err) => warn!(%player, %err, "slot rejected, re-prompting"),
                }
            }
        }

        // Place: lowest rank first. Each claimant goes to the back of
        // next round's queue as their domino resolves.
        let mut next_order = TurnQueue::empty();
        while let Some(slot) = line.pop() {
            let player = slot.claimant.expect("line slot left unclaimed after select");

            let legal = self.boards[player].legal_placements(&slot.domino);
            if legal.is_empty() {
                info!(%player, domino = %slot.domino, "no legal placement, discarding");
                self.boards[player].discard(slot.domino);
            } else {
                loop {
                    let play =
                        self.providers[player].choose_play(player, &self.boards[player], &slot.domino, &legal)?;
                    match self.boards[player].place(&play) {
                        Ok(()) => break,
                        Err(err) => warn!(%player, %err, "play rejected, re-prompting"),
                    }
                }
            }

            next_order.push(player);
        }

        self.pick_order = next_order;
        Ok(())
    }

    fn into_report(self) -> MatchReport {
        let mut standings: Vec<PlayerStanding> = self
            .boards
            .iter()
            .map(|(player, board)| PlayerStanding {
                player,
                score: board.score(),
            })
            .collect();

        standings.sort_by(|a, b| {
            b.score
                .points
                .cmp(&a.score.points)
                .then(b.score.crowns.cmp(&a.score.crowns))
                .then(a.player.0.cmp(&b.player.0))
        });

        for standing in &standings {
            info!(player = %standing.player, points = standing.score.points, "final score");
        }

        MatchReport {
            standings,
            boards: self.boards,
        }
    }
}
