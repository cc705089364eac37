//! Domino, tile, and placement value types.
//!
//! A `Domino` is a static definition: a draft rank and two suited,
//! possibly crowned halves. Who has claimed a domino lives in the
//! line slot, and how it is oriented lives in the `Play`; the domino
//! itself never mutates.
//!
//! Domino sets are interchanged as
//! `{number, left: {suit, crowns}, right: {suit, crowns}}` with suits
//! in lowercase; the serde derives below pin that shape. The full
//! standard 48-domino distribution ships as [`standard_set`].

use serde::{Deserialize, Serialize};

use crate::core::{Direction, Point};

/// Terrain suit of a tile.
///
/// Closed enumeration. `Castle` only ever appears at a board's origin;
/// it is placed at construction and never on a domino.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Suit {
    Wheat,
    Forest,
    Water,
    Grass,
    Swamp,
    Mine,
    Castle,
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Suit::Wheat => "wheat",
            Suit::Forest => "forest",
            Suit::Water => "water",
            Suit::Grass => "grass",
            Suit::Swamp => "swamp",
            Suit::Mine => "mine",
            Suit::Castle => "castle",
        };
        write!(f, "{}", name)
    }
}

/// One board cell's worth of terrain: a suit and a crown count.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    pub suit: Suit,
    pub crowns: u8,
}

impl Tile {
    /// The origin tile of every board.
    pub const CASTLE: Tile = Tile::new(Suit::Castle, 0);

    /// Create a tile.
    #[must_use]
    pub const fn new(suit: Suit, crowns: u8) -> Self {
        Self { suit, crowns }
    }

    /// True for the castle tile.
    #[must_use]
    pub const fn is_castle(&self) -> bool {
        matches!(self.suit, Suit::Castle)
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.suit, self.crowns)
    }
}

/// A two-tile playable piece with a draft rank.
///
/// Ranks are a total order: lower-ranked dominoes sit earlier in the
/// line and are placed first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Domino {
    pub number: u8,
    pub left: Tile,
    pub right: Tile,
}

impl Domino {
    /// Create a domino definition.
    #[must_use]
    pub const fn new(number: u8, left: Tile, right: Tile) -> Self {
        Self {
            number,
            left,
            right,
        }
    }

    /// Total crowns across both halves.
    #[must_use]
    pub const fn crowns(&self) -> u32 {
        self.left.crowns as u32 + self.right.crowns as u32
    }
}

impl PartialOrd for Domino {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Domino {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.number.cmp(&other.number)
    }
}

impl std::fmt::Display for Domino {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{} {}|{}", self.number, self.left, self.right)
    }
}

/// A proposed placement of a domino on a board.
///
/// The anchor cell holds the domino's left half; `anchor + orientation`
/// holds the right half. Plays are built per attempt and never stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Play {
    pub domino: Domino,
    pub anchor: Point,
    pub orientation: Direction,
}

impl Play {
    /// Create a play.
    #[must_use]
    pub const fn new(domino: Domino, anchor: Point, orientation: Direction) -> Self {
        Self {
            domino,
            anchor,
            orientation,
        }
    }

    /// The two cells this play occupies: anchor first.
    #[must_use]
    pub fn cells(&self) -> (Point, Point) {
        (self.anchor, self.anchor + self.orientation)
    }

    /// The two cells paired with the tiles that land on them.
    #[must_use]
    pub fn tiles(&self) -> [(Point, Tile); 2] {
        [
            (self.anchor, self.domino.left),
            (self.anchor + self.orientation, self.domino.right),
        ]
    }
}

impl std::fmt::Display for Play {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {} facing {}", self.domino, self.anchor, self.orientation)
    }
}

/// The standard 48-domino distribution.
///
/// Numbers 1-48 in rank order. A match samples `Ruleset::deck_size`
/// of these; the mighty-duel variant uses all 48.
#[must_use]
pub fn standard_set() -> Vec<Domino> {
    use Suit::{Forest, Grass, Mine, Swamp, Water, Wheat};
    let t = Tile::new;

    vec![
        Domino::new(1, t(Wheat, 0), t(Wheat, 0)),
        Domino::new(2, t(Wheat, 0), t(Wheat, 0)),
        Domino::new(3, t(Forest, 0), t(Forest, 0)),
        Domino::new(4, t(Forest, 0), t(Forest, 0)),
        Domino::new(5, t(Forest, 0), t(Forest, 0)),
        Domino::new(6, t(Forest, 0), t(Forest, 0)),
        Domino::new(7, t(Water, 0), t(Water, 0)),
        Domino::new(8, t(Water, 0), t(Water, 0)),
        Domino::new(9, t(Water, 0), t(Water, 0)),
        Domino::new(10, t(Grass, 0), t(Grass, 0)),
        Domino::new(11, t(Grass, 0), t(Grass, 0)),
        Domino::new(12, t(Swamp, 0), t(Swamp, 0)),
        Domino::new(13, t(Wheat, 0), t(Forest, 0)),
        Domino::new(14, t(Wheat, 0), t(Water, 0)),
        Domino::new(15, t(Wheat, 0), t(Grass, 0)),
        Domino::new(16, t(Wheat, 0), t(Swamp, 0)),
        Domino::new(17, t(Forest, 0), t(Water, 0)),
        Domino::new(18, t(Forest, 0), t(Grass, 0)),
        Domino::new(19, t(Wheat, 1), t(Forest, 0)),
        Domino::new(20, t(Wheat, 1), t(Water, 0)),
        Domino::new(21, t(Wheat, 1), t(Grass, 0)),
        Domino::new(22, t(Wheat, 1), t(Swamp, 0)),
        Domino::new(23, t(Wheat, 1), t(Mine, 0)),
        Domino::new(24, t(Forest, 1), t(Wheat, 0)),
        Domino::new(25, t(Forest, 1), t(Wheat, 0)),
        Domino::new(26, t(Forest, 1), t(Forest, 0)),
        Domino::new(27, t(Forest, 1), t(Forest, 0)),
        Domino::new(28, t(Forest, 1), t(Forest, 0)),
        Domino::new(29, t(Forest, 1), t(Forest, 0)),
        Domino::new(30, t(Water, 1), t(Wheat, 0)),
        Domino::new(31, t(Water, 1), t(Wheat, 0)),
        Domino::new(32, t(Water, 1), t(Water, 0)),
        Domino::new(33, t(Water, 1), t(Water, 0)),
        Domino::new(34, t(Water, 1), t(Water, 0)),
        Domino::new(35, t(Water, 1), t(Water, 0)),
        Domino::new(36, t(Wheat, 0), t(Grass, 1)),
        Domino::new(37, t(Water, 0), t(Grass, 1)),
        Domino::new(38, t(Wheat, 0), t(Swamp, 1)),
        Domino::new(39, t(Grass, 0), t(Swamp, 1)),
        Domino::new(40, t(Mine, 1), t(Wheat, 0)),
        Domino::new(41, t(Wheat, 0), t(Grass, 2)),
        Domino::new(42, t(Water, 0), t(Grass, 2)),
        Domino::new(43, t(Wheat, 0), t(Swamp, 2)),
        Domino::new(44, t(Grass, 0), t(Swamp, 2)),
        Domino::new(45, t(Mine, 2), t(Wheat, 0)),
        Domino::new(46, t(Swamp, 0), t(Mine, 2)),
        Domino::new(47, t(Swamp, 0), t(Mine, 2)),
        Domino::new(48, t(Wheat, 0), t(Mine, 3)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Direction;

    #[test]
    fn test_standard_set_shape() {
        let set = standard_set();
        assert_eq!(set.len(), 48);

        // Ranks are 1..=48 in order, each used once.
        for (i, domino) in set.iter().enumerate() {
            assert_eq!(domino.number as usize, i + 1);
        }

        // The castle never appears on a domino.
        for domino in &set {
            assert_ne!(domino.left.suit, Suit::Castle);
            assert_ne!(domino.right.suit, Suit::Castle);
        }
    }

    #[test]
    fn test_standard_set_crown_distribution() {
        let set = standard_set();

        let total: u32 = set.iter().map(Domino::crowns).sum();
        assert_eq!(total, 38);

        // Crowns sit on exactly one half of any crowned domino.
        for domino in &set {
            assert!(domino.left.crowns == 0 || domino.right.crowns == 0);
        }
    }

    #[test]
    fn test_domino_ordering_is_by_rank() {
        let set = standard_set();
        let mut shuffled = vec![set[40], set[3], set[17]];
        shuffled.sort();

        let numbers: Vec<u8> = shuffled.iter().map(|d| d.number).collect();
        assert_eq!(numbers, vec![4, 18, 41]);
    }

    #[test]
    fn test_play_cells() {
        let domino = Domino::new(19, Tile::new(Suit::Wheat, 1), Tile::new(Suit::Forest, 0));
        let play = Play::new(domino, Point::new(4, 5), Direction::East);

        let (a, b) = play.cells();
        assert_eq!(a, Point::new(4, 5));
        assert_eq!(b, Point::new(5, 5));

        let tiles = play.tiles();
        assert_eq!(tiles[0], (Point::new(4, 5), domino.left));
        assert_eq!(tiles[1], (Point::new(5, 5), domino.right));
    }

    #[test]
    fn test_domino_wire_shape() {
        let json = r#"{
            "number": 19,
            "left": {"suit": "wheat", "crowns": 1},
            "right": {"suit": "forest", "crowns": 0}
        }"#;

        let domino: Domino = serde_json::from_str(json).unwrap();
        assert_eq!(domino.number, 19);
        assert_eq!(domino.left, Tile::new(Suit::Wheat, 1));
        assert_eq!(domino.right, Tile::new(Suit::Forest, 0));

        // Suits serialize back to the lowercase form.
        let out = serde_json::to_string(&domino.left.suit).unwrap();
        assert_eq!(out, "\"wheat\"");
    }

    #[test]
    fn test_display() {
        let domino = Domino::new(48, Tile::new(Suit::Wheat, 0), Tile::new(Suit::Mine, 3));
        assert_eq!(format!("{}", domino), "#48 wheat(0)|mine(3)");
    }
}
