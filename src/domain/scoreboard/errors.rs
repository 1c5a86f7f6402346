use thiserror::Error;

/// Errors that can occur when operating the scoreboard
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreboardError {
    #[error("Team name cannot be empty or blank")]
    BlankTeamName,

    #[error("Home team and away team must be different")]
    TeamsNotDistinct { name: String },

    #[error("Scores cannot be negative")]
    NegativeScore { home: i32, away: i32 },

    #[error("Match between {home} and {away} already exists")]
    MatchAlreadyExists { home: String, away: String },

    #[error("Match between {home} and {away} does not exist")]
    MatchNotFound { home: String, away: String },
}

/// The two classes of scoreboard failure
///
/// Every error is either a structurally invalid input
/// (`InvalidArgument`) or a request that is inconsistent with the
/// current set of live matches (`IllegalState`). No failure mutates
/// scoreboard state; the registry stays usable afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
    IllegalState,
}

impl ScoreboardError {
    /// Returns which class of failure this error belongs to
    pub fn kind(&self) -> ErrorKind {
        match self {
            ScoreboardError::BlankTeamName
            | ScoreboardError::TeamsNotDistinct { .. }
            | ScoreboardError::NegativeScore { .. } => ErrorKind::InvalidArgument,
            ScoreboardError::MatchAlreadyExists { .. }
            | ScoreboardError::MatchNotFound { .. } => ErrorKind::IllegalState,
        }
    }
}

pub type ScoreboardResult<T> = Result<T, ScoreboardError>;
