use serde::Serialize;
use std::fmt;

use super::errors::{ScoreboardError, ScoreboardResult};
use super::value_objects::Team;

/// Match aggregate root
///
/// Represents a live football match between two fixed teams. Holds the
/// current score and the order in which the match was created, used by
/// the scoreboard to break ties between matches with equal totals.
///
/// # Invariants
/// - Teams are fixed for the lifetime of the match
/// - Scores are non-negative and only change through [`Match::update_score`]
/// - Creation order is immutable after construction
///
/// A match does not check that its teams differ; that rule belongs to
/// the scoreboard, which owns match identity.
///
/// # Example
/// ```
/// use live_scoreboard::{Match, Team};
///
/// let home = Team::new("Mexico").expect("valid team name");
/// let away = Team::new("Canada").expect("valid team name");
/// let mut game = Match::new(home, away, 0);
///
/// game.update_score(0, 5).expect("valid scores");
/// assert_eq!(game.total_score(), 5);
/// assert_eq!(game.to_string(), "Mexico 0 - Canada 5");
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct Match {
    home_team: Team,
    away_team: Team,
    home_score: u32,
    away_score: u32,
    creation_order: u64,
}

impl Match {
    /// Creates a new match with an initial score of 0-0
    ///
    /// # Arguments
    /// * `home_team` - The home team
    /// * `away_team` - The away team
    /// * `creation_order` - The order in which this match was created
    pub fn new(home_team: Team, away_team: Team, creation_order: u64) -> Self {
        Self {
            home_team,
            away_team,
            home_score: 0,
            away_score: 0,
            creation_order,
        }
    }

    /// Replaces both scores with new absolute values
    ///
    /// Both values are validated before either is applied, so a failed
    /// update leaves the previous score intact.
    ///
    /// # Returns
    /// * `Ok(())` - Scores were replaced
    /// * `Err(ScoreboardError::NegativeScore)` - If either value is negative
    pub fn update_score(&mut self, home_score: i32, away_score: i32) -> ScoreboardResult<()> {
        if home_score < 0 || away_score < 0 {
            return Err(ScoreboardError::NegativeScore {
                home: home_score,
                away: away_score,
            });
        }

        self.home_score = home_score as u32;
        self.away_score = away_score as u32;

        Ok(())
    }

    /// Returns the combined score of both teams, computed on demand
    pub fn total_score(&self) -> u64 {
        u64::from(self.home_score) + u64::from(self.away_score)
    }

    // ===== Getters =====

    /// Returns the home team
    pub fn home_team(&self) -> &Team {
        &self.home_team
    }

    /// Returns the away team
    pub fn away_team(&self) -> &Team {
        &self.away_team
    }

    /// Returns the current home team score
    pub fn home_score(&self) -> u32 {
        self.home_score
    }

    /// Returns the current away team score
    pub fn away_score(&self) -> u32 {
        self.away_score
    }

    /// Returns the order in which this match was created
    pub fn creation_order(&self) -> u64 {
        self.creation_order
    }
}

impl fmt::Display for Match {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {} - {} {}",
            self.home_team, self.home_score, self.away_team, self.away_score
        )
    }
}
