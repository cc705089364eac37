//! Drafting: domino value types, the shared line, and the deck.

pub mod deck;
pub mod domino;
pub mod line;

pub use deck::Deck;
pub use domino::{standard_set, Domino, Play, Suit, Tile};
pub use line::{Line, Slot};
