//! Grid geometry: integer points and the four orthogonal directions.
//!
//! Boards are addressed by `Point` and navigated by `Direction`.
//! A domino occupies two cells: its anchor and `anchor + orientation`.
//!
//! ## Usage
//!
//! ```
//! use kingdomino::core::{Direction, Point};
//!
//! let castle = Point::new(4, 4);
//! let east = castle + Direction::East;
//! assert_eq!(east, Point::new(5, 4));
//!
//! // The four orthogonal neighbors of a cell.
//! let neighbors: Vec<_> = castle.neighbors().collect();
//! assert_eq!(neighbors.len(), 4);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::Add;

/// An integer grid coordinate.
///
/// Immutable value type. Arithmetic is limited to `Point + Direction`;
/// nothing in the engine manipulates raw indices directly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Create a point at `(x, y)`.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Iterate over the four orthogonally adjacent points.
    pub fn neighbors(self) -> impl Iterator<Item = Point> {
        Direction::ALL.into_iter().map(move |d| self + d)
    }

    /// True if `other` is orthogonally adjacent to this point.
    #[must_use]
    pub fn is_adjacent(self, other: Point) -> bool {
        (self.x - other.x).abs() + (self.y - other.y).abs() == 1
    }
}

impl Add<Direction> for Point {
    type Output = Point;

    fn add(self, dir: Direction) -> Point {
        let (dx, dy) = dir.offset();
        Point::new(self.x + dx, self.y + dy)
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// One of the four orthogonal directions.
///
/// Closed enumeration; each variant is a unit offset. East/West move
/// along x, South/North along y (y grows southward, matching screen
/// coordinates).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    East,
    South,
    West,
    North,
}

impl Direction {
    /// All four directions, in east-south-west-north order.
    pub const ALL: [Direction; 4] = [
        Direction::East,
        Direction::South,
        Direction::West,
        Direction::North,
    ];

    /// The unit `(dx, dy)` offset for this direction.
    #[must_use]
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Direction::East => (1, 0),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
            Direction::North => (0, -1),
        }
    }

    /// The direction pointing the opposite way.
    #[must_use]
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
            Direction::North => Direction::South,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Direction::East => "east",
            Direction::South => "south",
            Direction::West => "west",
            Direction::North => "north",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_plus_direction() {
        let p = Point::new(3, 7);

        assert_eq!(p + Direction::East, Point::new(4, 7));
        assert_eq!(p + Direction::South, Point::new(3, 8));
        assert_eq!(p + Direction::West, Point::new(2, 7));
        assert_eq!(p + Direction::North, Point::new(3, 6));
    }

    #[test]
    fn test_opposite_round_trips() {
        for dir in Direction::ALL {
            assert_eq!(dir.opposite().opposite(), dir);

            let p = Point::new(0, 0);
            assert_eq!(p + dir + dir.opposite(), p);
        }
    }

    #[test]
    fn test_neighbors() {
        let p = Point::new(1, 1);
        let neighbors: Vec<_> = p.neighbors().collect();

        assert_eq!(neighbors.len(), 4);
        assert!(neighbors.contains(&Point::new(2, 1)));
        assert!(neighbors.contains(&Point::new(1, 2)));
        assert!(neighbors.contains(&Point::new(0, 1)));
        assert!(neighbors.contains(&Point::new(1, 0)));

        for n in neighbors {
            assert!(p.is_adjacent(n));
        }
    }

    #[test]
    fn test_adjacency_excludes_diagonals_and_self() {
        let p = Point::new(2, 2);

        assert!(!p.is_adjacent(p));
        assert!(!p.is_adjacent(Point::new(3, 3)));
        assert!(!p.is_adjacent(Point::new(1, 1)));
        assert!(!p.is_adjacent(Point::new(4, 2)));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Point::new(4, 5)), "(4, 5)");
        assert_eq!(format!("{}", Direction::North), "north");
    }

    #[test]
    fn test_serialization() {
        let p = Point::new(-2, 9);
        let json = serde_json::to_string(&p).unwrap();
        let back: Point = serde_json::from_str(&json).unwrap();
        assert_eq!(p, back);

        let json = serde_json::to_string(&Direction::East).unwrap();
        assert_eq!(json, "\"east\"");
    }
}
