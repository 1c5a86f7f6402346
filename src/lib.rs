//! Live Football Scoreboard Library
//!
//! An in-memory registry of live football matches. Supports starting a
//! game, updating its score, finishing it, and retrieving a summary
//! ranked by total score (ties broken by most recently started).
//!
//! The crate is a pure in-process library: no I/O, no persistence and
//! no internal synchronization. A multi-threaded host is responsible
//! for serializing access to a [`Scoreboard`] instance.
//!
//! # Example
//! ```
//! use live_scoreboard::Scoreboard;
//!
//! let mut scoreboard = Scoreboard::new();
//!
//! scoreboard.start_game("Mexico", "Canada")?;
//! scoreboard.start_game("Spain", "Brazil")?;
//! scoreboard.update_score("Mexico", "Canada", 0, 5)?;
//! scoreboard.update_score("Spain", "Brazil", 10, 2)?;
//!
//! for game in scoreboard.get_summary() {
//!     println!("{}", game);
//! }
//! # Ok::<(), live_scoreboard::ScoreboardError>(())
//! ```

pub mod domain;

// Re-export the public surface at the crate root
pub use domain::scoreboard::{
    ErrorKind, Match, Scoreboard, ScoreboardError, ScoreboardResult, Team,
};
