use serde::{Deserialize, Serialize};
use std::fmt;

use super::errors::{ScoreboardError, ScoreboardResult};

/// Team value object representing a named football team
///
/// # Invariants
/// - Name is never empty or whitespace-only
/// - Name is stored exactly as supplied (not trimmed)
/// - Is immutable after construction
///
/// Equality and hashing use the exact, case-sensitive name, so
/// `"Mexico"` and `"mexico"` are different teams. Multiple `Team`
/// values may exist for the same name; they compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Team(String);

impl Team {
    /// Creates a new Team value object
    ///
    /// # Arguments
    /// * `name` - The team name to validate
    ///
    /// # Returns
    /// * `Ok(Team)` - If the name is non-blank
    /// * `Err(ScoreboardError::BlankTeamName)` - If the name is empty or
    ///   consists solely of whitespace
    ///
    /// # Example
    /// ```
    /// use live_scoreboard::Team;
    ///
    /// let team = Team::new("Mexico").expect("valid team name");
    /// assert_eq!(team.name(), "Mexico");
    /// ```
    pub fn new(name: impl Into<String>) -> ScoreboardResult<Self> {
        let name = name.into();
        if Self::is_valid(&name) {
            Ok(Team(name))
        } else {
            Err(ScoreboardError::BlankTeamName)
        }
    }

    /// Validates a team name
    ///
    /// # Validation Rules
    /// - Must contain at least one non-whitespace character
    fn is_valid(name: &str) -> bool {
        !name.trim().is_empty()
    }

    /// Returns the team name as a string slice, unchanged from input
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
