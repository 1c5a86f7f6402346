use std::collections::HashMap;

use super::errors::{ScoreboardError, ScoreboardResult};
use super::game::Match;
use super::value_objects::Team;

/// Internal key identifying a live match by its ordered team pair
///
/// The pair is directional: `(A, B)` and `(B, A)` are distinct keys,
/// so both orientations may be live at the same time.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct MatchKey {
    home_team: Team,
    away_team: Team,
}

/// Scoreboard managing the set of live football matches
///
/// Owns every live match, enforces at most one live match per ordered
/// `(home, away)` pair, and assigns each started match a strictly
/// increasing creation order used to rank equal-total matches by
/// recency. The counter never resets or reuses a value, including
/// values from matches that have already finished.
///
/// All operations are synchronous and non-blocking; a multi-threaded
/// host must serialize access to a single instance externally.
///
/// # Example
/// ```
/// use live_scoreboard::Scoreboard;
///
/// let mut scoreboard = Scoreboard::new();
/// scoreboard.start_game("Mexico", "Canada").expect("started");
/// scoreboard.update_score("Mexico", "Canada", 0, 5).expect("updated");
///
/// let summary = scoreboard.get_summary();
/// assert_eq!(summary[0].to_string(), "Mexico 0 - Canada 5");
/// ```
#[derive(Debug, Default)]
pub struct Scoreboard {
    matches: HashMap<MatchKey, Match>,
    order_counter: u64,
}

impl Scoreboard {
    /// Creates a new empty scoreboard
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new game with an initial score of 0-0
    ///
    /// # Arguments
    /// * `home_team_name` - The home team name
    /// * `away_team_name` - The away team name
    ///
    /// # Returns
    /// * `Ok(Match)` - A snapshot of the newly created match
    /// * `Err(ScoreboardError::BlankTeamName)` - If either name is blank
    /// * `Err(ScoreboardError::TeamsNotDistinct)` - If both names resolve
    ///   to the same team
    /// * `Err(ScoreboardError::MatchAlreadyExists)` - If this ordered pair
    ///   already has a live match
    pub fn start_game(
        &mut self,
        home_team_name: &str,
        away_team_name: &str,
    ) -> ScoreboardResult<Match> {
        let home_team = Team::new(home_team_name)?;
        let away_team = Team::new(away_team_name)?;

        if home_team == away_team {
            return Err(ScoreboardError::TeamsNotDistinct {
                name: home_team_name.to_string(),
            });
        }

        let key = MatchKey {
            home_team: home_team.clone(),
            away_team: away_team.clone(),
        };

        if self.matches.contains_key(&key) {
            return Err(ScoreboardError::MatchAlreadyExists {
                home: home_team_name.to_string(),
                away: away_team_name.to_string(),
            });
        }

        let order = self.order_counter;
        self.order_counter += 1;

        let game = Match::new(home_team, away_team, order);
        self.matches.insert(key, game.clone());

        tracing::debug!("Match started: {} (order {})", game, order);

        Ok(game)
    }

    /// Updates the score of a live match with absolute values
    ///
    /// # Returns
    /// * `Ok(())` - Score was replaced
    /// * `Err(ScoreboardError::MatchNotFound)` - If no live match exists
    ///   for this ordered pair
    /// * `Err(ScoreboardError::NegativeScore)` - If either score is
    ///   negative; the previous score is left intact
    pub fn update_score(
        &mut self,
        home_team_name: &str,
        away_team_name: &str,
        home_score: i32,
        away_score: i32,
    ) -> ScoreboardResult<()> {
        let key = self.key_for(home_team_name, away_team_name)?;

        let game = self.matches.get_mut(&key).ok_or_else(|| {
            ScoreboardError::MatchNotFound {
                home: home_team_name.to_string(),
                away: away_team_name.to_string(),
            }
        })?;

        game.update_score(home_score, away_score)?;

        tracing::debug!("Score updated: {}", game);

        Ok(())
    }

    /// Finishes a game and removes it from the scoreboard permanently
    ///
    /// The match's creation order is never reassigned; restarting the
    /// same pair later creates a new match with a larger order.
    ///
    /// # Returns
    /// * `Ok(())` - Match was removed
    /// * `Err(ScoreboardError::MatchNotFound)` - If no live match exists
    ///   for this ordered pair
    pub fn finish_game(
        &mut self,
        home_team_name: &str,
        away_team_name: &str,
    ) -> ScoreboardResult<()> {
        let key = self.key_for(home_team_name, away_team_name)?;

        let game = self.matches.remove(&key).ok_or_else(|| {
            ScoreboardError::MatchNotFound {
                home: home_team_name.to_string(),
                away: away_team_name.to_string(),
            }
        })?;

        tracing::debug!("Match finished: {}", game);

        Ok(())
    }

    /// Returns a ranked snapshot of all live matches
    ///
    /// Matches are ordered by total score descending; matches with equal
    /// totals are ordered by creation order descending, so the most
    /// recently started match comes first. Creation orders are unique,
    /// which makes this a total order.
    ///
    /// The returned matches are detached clones; mutating them does not
    /// affect scoreboard state.
    pub fn get_summary(&self) -> Vec<Match> {
        let mut summary: Vec<Match> = self.matches.values().cloned().collect();

        summary.sort_by(|a, b| {
            b.total_score()
                .cmp(&a.total_score())
                .then(b.creation_order().cmp(&a.creation_order()))
        });

        summary
    }

    /// Returns the number of live matches
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    /// Returns true when no match is live
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Builds the lookup key for an ordered pair of team names
    ///
    /// Name validation happens here too, so lookups with blank names
    /// fail the same way `start_game` does.
    fn key_for(&self, home_team_name: &str, away_team_name: &str) -> ScoreboardResult<MatchKey> {
        Ok(MatchKey {
            home_team: Team::new(home_team_name)?,
            away_team: Team::new(away_team_name)?,
        })
    }
}
