// Scoreboard domain module
// Contains the scoreboard registry, the match aggregate and the team value object

#![allow(clippy::module_inception)]

pub mod errors;
pub mod game;
pub mod scoreboard;
pub mod value_objects;

// Re-export main types for convenience
pub use errors::{ErrorKind, ScoreboardError, ScoreboardResult};
pub use game::Match;
pub use scoreboard::Scoreboard;
pub use value_objects::Team;
