//! The player board: tile surface, placement rules, and scoring.
//!
//! Each player owns one `Board`: a sparse tile surface inside a fixed
//! square extent, with the castle at the center. All bounds and
//! neighbor logic lives here. Callers work in `Point`s and never
//! touch raw indices.
//!
//! Placement follows the castle-or-suit rule: a domino may land only
//! where both cells are free and at least one of its halves touches
//! the castle or a tile of its own suit. Every successful placement
//! incrementally extends the suit regions tracked by the disjoint-set,
//! so scoring never has to rediscover connectivity.
//!
//! ## Usage
//!
//! ```
//! use kingdomino::board::Board;
//! use kingdomino::core::{Direction, Point, Ruleset};
//! use kingdomino::draft::{Play, standard_set};
//!
//! let rules = Ruleset::new(4).unwrap();
//! let mut board = Board::new(rules);
//!
//! // Rank 1 is wheat|wheat; anchored south of the castle it is legal.
//! let domino = standard_set()[0];
//! let play = Play::new(domino, Point::new(4, 5), Direction::East);
//! assert!(board.valid_placement(&play));
//! board.place(&play).unwrap();
//! ```

use std::collections::VecDeque;

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{Direction, GameError, Point, Ruleset};
use crate::draft::{Domino, Play, Tile};

use super::connectivity::DisjointSet;

/// Points for keeping the whole kingdom inside the playable inner bound.
pub const CONTAINED_KINGDOM_BONUS: u32 = 10;

/// Points for finishing the match without discarding a domino.
pub const HARMONY_BONUS: u32 = 5;

/// A final score: points for ranking, total crowns for tie-breaking.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub points: u32,
    pub crowns: u32,
}

/// One player's private kingdom.
#[derive(Clone, Debug)]
pub struct Board {
    surface: FxHashMap<Point, Tile>,
    regions: DisjointSet,
    discards: Vec<Domino>,
    rules: Ruleset,
    origin: Point,
}

impl Board {
    /// Create an empty board with the castle at the extent's center.
    #[must_use]
    pub fn new(rules: Ruleset) -> Self {
        let origin = rules.origin();

        let mut surface = FxHashMap::default();
        surface.insert(origin, Tile::CASTLE);

        let mut regions = DisjointSet::new();
        regions.find(origin);

        Self {
            surface,
            regions,
            discards: Vec::new(),
            rules,
            origin,
        }
    }

    /// The castle cell.
    #[must_use]
    pub const fn origin(&self) -> Point {
        self.origin
    }

    /// True iff `p` lies within the board's coordinate extent.
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        let size = self.rules.board_size();
        (0..size).contains(&p.x) && (0..size).contains(&p.y)
    }

    /// The tile at `p`, or `None` if the cell is empty or out of range.
    #[must_use]
    pub fn tile_at(&self, p: Point) -> Option<Tile> {
        if !self.contains(p) {
            return None;
        }
        self.surface.get(&p).copied()
    }

    /// Iterate over all occupied cells (castle included).
    pub fn tiles(&self) -> impl Iterator<Item = (Point, Tile)> + '_ {
        self.surface.iter().map(|(&p, &t)| (p, t))
    }

    /// Dominoes this board had to throw away.
    #[must_use]
    pub fn discards(&self) -> &[Domino] {
        &self.discards
    }

    /// Total crowns on the surface.
    #[must_use]
    pub fn crowns(&self) -> u32 {
        self.surface.values().map(|t| t.crowns as u32).sum()
    }

    /// Can this play be applied right now?
    ///
    /// True iff both cells are in the extent, both are free, and at
    /// least one of the up-to-six orthogonal neighbors of the play's
    /// cells (the play's own cells excluded) is the castle or shares a
    /// suit with the adjacent half.
    #[must_use]
    pub fn valid_placement(&self, play: &Play) -> bool {
        let (a, b) = play.cells();

        if !self.contains(a) || !self.contains(b) {
            return false;
        }
        if self.surface.contains_key(&a) || self.surface.contains_key(&b) {
            return false;
        }

        play.tiles()
            .into_iter()
            .any(|(cell, tile)| self.half_is_supported(cell, tile, a, b))
    }

    /// Does one half of a play touch the castle or its own suit?
    fn half_is_supported(&self, cell: Point, tile: Tile, a: Point, b: Point) -> bool {
        cell.neighbors()
            .filter(|&n| n != a && n != b)
            .filter_map(|n| self.tile_at(n))
            .any(|neighbor| neighbor.is_castle() || neighbor.suit == tile.suit)
    }

    /// Apply a play: write both tiles, then join every same-suit
    /// orthogonal pairing the new tiles created.
    ///
    /// Validates first; an `InvalidPlacement` error leaves the board
    /// untouched.
    pub fn place(&mut self, play: &Play) -> Result<(), GameError> {
        if !self.valid_placement(play) {
            return Err(GameError::InvalidPlacement {
                anchor: play.anchor,
                orientation: play.orientation,
            });
        }

        for (cell, tile) in play.tiles() {
            self.surface.insert(cell, tile);
            self.regions.find(cell);
        }

        // The play's own cells are on the surface now, so a same-suit
        // domino merges across its own halves here as well.
        for (cell, tile) in play.tiles() {
            for n in cell.neighbors() {
                if let Some(neighbor) = self.tile_at(n) {
                    if neighbor.suit == tile.suit {
                        self.regions.join(cell, n);
                    }
                }
            }
        }

        debug!(play = %play, "placed");
        Ok(())
    }

    /// Record a domino that could not legally be placed.
    pub fn discard(&mut self, domino: Domino) {
        debug!(domino = %domino, "discarded");
        self.discards.push(domino);
    }

    /// Empty cells bordering the kingdom, found by breadth-first
    /// expansion from the castle over occupied cells.
    ///
    /// Only cells reachable from the origin can appear; the rest of
    /// the extent is never scanned.
    #[must_use]
    pub fn frontier(&self) -> Vec<Point> {
        let mut visited = FxHashSet::default();
        let mut frontier = FxHashSet::default();
        let mut queue = VecDeque::new();

        visited.insert(self.origin);
        queue.push_back(self.origin);

        while let Some(p) = queue.pop_front() {
            for n in p.neighbors() {
                if !self.contains(n) {
                    continue;
                }
                if self.surface.contains_key(&n) {
                    if visited.insert(n) {
                        queue.push_back(n);
                    }
                } else {
                    frontier.insert(n);
                }
            }
        }

        let mut frontier: Vec<_> = frontier.into_iter().collect();
        frontier.sort_unstable();
        frontier
    }

    /// Every `(anchor, orientation)` pair under which `domino` can
    /// legally be placed, anchored on or next to the frontier.
    #[must_use]
    pub fn legal_placements(&self, domino: &Domino) -> Vec<Play> {
        let mut seen: FxHashSet<(Point, Direction)> = FxHashSet::default();
        let mut plays = Vec::new();

        for cell in self.frontier() {
            for dir in Direction::ALL {
                // The frontier cell can host either half: the anchor
                // itself, or the right half when anchored one step back.
                for anchor in [cell, cell + dir.opposite()] {
                    if !seen.insert((anchor, dir)) {
                        continue;
                    }
                    let play = Play::new(*domino, anchor, dir);
                    if self.valid_placement(&play) {
                        plays.push(play);
                    }
                }
            }
        }

        plays
    }

    /// Score the board: for every connected same-suit region, region
    /// size times total crowns, plus the ruleset-gated bonuses.
    #[must_use]
    pub fn score(&self) -> Score {
        let mut points = 0u32;

        for group in self.regions.groups() {
            let tile = self.surface[&group[0]];
            if tile.is_castle() {
                continue;
            }

            let crowns: u32 = group
                .iter()
                .map(|p| self.surface[p].crowns as u32)
                .sum();
            points += crowns * group.len() as u32;
        }

        if self.rules.contained_kingdom_bonus() && self.is_contained() {
            points += CONTAINED_KINGDOM_BONUS;
        }
        if self.rules.harmony_bonus() && self.discards.is_empty() {
            points += HARMONY_BONUS;
        }

        Score {
            points,
            crowns: self.crowns(),
        }
    }

    /// True when no tile lies outside the centered playable inner
    /// sub-square (5x5 standard, 7x7 mighty duel).
    fn is_contained(&self) -> bool {
        let half = self.rules.inner_size() / 2;
        self.surface.keys().all(|p| {
            (p.x - self.origin.x).abs() <= half && (p.y - self.origin.y).abs() <= half
        })
    }
}
