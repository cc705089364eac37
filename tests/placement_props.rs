//! Property-based tests for connectivity, placement validity, and
//! score stability.

use std::collections::HashSet;

use proptest::prelude::*;

use kingdomino::board::{Board, DisjointSet};
use kingdomino::core::{Direction, GameRng, Point, Ruleset};
use kingdomino::draft::{standard_set, Play};

/// Straight-line restatement of the placement rule: bounds, occupancy,
/// then the castle-or-suit adjacency scan over the play's up-to-six
/// neighbors.
fn brute_force_valid(board: &Board, play: &Play) -> bool {
    let (a, b) = play.cells();

    if !board.contains(a) || !board.contains(b) {
        return false;
    }
    if board.tile_at(a).is_some() || board.tile_at(b).is_some() {
        return false;
    }

    let mut supported = false;
    for (cell, tile) in play.tiles() {
        for n in cell.neighbors() {
            if n == a || n == b {
                continue;
            }
            if let Some(existing) = board.tile_at(n) {
                if existing.is_castle() || existing.suit == tile.suit {
                    supported = true;
                }
            }
        }
    }
    supported
}

/// Grow a standard board with up to `moves` random legal placements.
fn random_board(seed: u64, moves: usize) -> (Board, Vec<Play>) {
    let mut rng = GameRng::new(seed);
    let mut board = Board::new(Ruleset::new(4).unwrap());
    let set = standard_set();
    let mut played = Vec::new();

    for _ in 0..moves {
        let domino = *rng.choose(&set).unwrap();
        let legal = board.legal_placements(&domino);
        if let Some(&play) = rng.choose(&legal) {
            board.place(&play).unwrap();
            played.push(play);
        }
    }

    (board, played)
}

fn direction(index: usize) -> Direction {
    Direction::ALL[index % 4]
}

proptest! {
    /// Joining a chain of points leaves them all in one component.
    #[test]
    fn prop_join_transitivity(coords in prop::collection::vec((0..9i32, 0..9i32), 3..30)) {
        let points: Vec<Point> = coords.iter().map(|&(x, y)| Point::new(x, y)).collect();

        let mut ds = DisjointSet::new();
        for pair in points.windows(2) {
            ds.join(pair[0], pair[1]);
        }

        let root = ds.find(points[0]);
        for &p in &points {
            prop_assert_eq!(ds.find(p), root);
        }
    }

    /// `valid_placement` agrees with the brute-force rule everywhere,
    /// including out-of-bounds anchors.
    #[test]
    fn prop_valid_placement_matches_brute_force(
        seed in any::<u64>(),
        moves in 0usize..14,
        x in -1i32..10,
        y in -1i32..10,
        dir in 0usize..4,
        dom in 0usize..48,
    ) {
        let (board, _) = random_board(seed, moves);
        let domino = standard_set()[dom];
        let play = Play::new(domino, Point::new(x, y), direction(dir));

        prop_assert_eq!(board.valid_placement(&play), brute_force_valid(&board, &play));
    }

    /// `legal_placements` equals the exhaustive scan of every
    /// (anchor, orientation) pair over the whole extent.
    #[test]
    fn prop_legal_placements_is_exhaustive(
        seed in any::<u64>(),
        moves in 0usize..14,
        dom in 0usize..48,
    ) {
        let (board, _) = random_board(seed, moves);
        let domino = standard_set()[dom];

        let legal: HashSet<(Point, Direction)> = board
            .legal_placements(&domino)
            .iter()
            .map(|p| (p.anchor, p.orientation))
            .collect();

        let mut expected = HashSet::new();
        for x in 0..9 {
            for y in 0..9 {
                for dir in Direction::ALL {
                    let play = Play::new(domino, Point::new(x, y), dir);
                    if brute_force_valid(&board, &play) {
                        expected.insert((play.anchor, dir));
                    }
                }
            }
        }

        prop_assert_eq!(legal, expected);
    }

    /// Every legal play sits on the frontier: reachable from the
    /// castle through occupied cells at generation time.
    #[test]
    fn prop_legal_placements_touch_the_frontier(
        seed in any::<u64>(),
        moves in 0usize..14,
        dom in 0usize..48,
    ) {
        let (board, _) = random_board(seed, moves);
        let domino = standard_set()[dom];
        let frontier: HashSet<Point> = board.frontier().into_iter().collect();

        for play in board.legal_placements(&domino) {
            let (a, b) = play.cells();
            prop_assert!(
                frontier.contains(&a) || frontier.contains(&b),
                "play {} does not border the kingdom", play
            );
        }
    }

    /// The final score does not depend on the order placements were
    /// applied in, as long as each is legal when applied.
    #[test]
    fn prop_score_is_order_independent(
        seed in any::<u64>(),
        moves in 1usize..16,
        perm_seed in any::<u64>(),
    ) {
        let (board, played) = random_board(seed, moves);
        let expected = board.score();

        let mut rng = GameRng::new(perm_seed);
        let mut pending = played;
        rng.shuffle(&mut pending);

        // Greedy multi-pass replay: any play whose support is already
        // down goes in; the rest wait for a later pass.
        let mut replay = Board::new(Ruleset::new(4).unwrap());
        while !pending.is_empty() {
            let before = pending.len();
            pending.retain(|play| replay.place(play).is_err());
            prop_assert!(pending.len() < before, "replay stopped making progress");
        }

        prop_assert_eq!(replay.score(), expected);
    }
}
