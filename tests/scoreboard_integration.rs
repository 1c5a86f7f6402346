//! End-to-end scoreboard workflow tests
//!
//! These tests drive the public crate surface through complete
//! tournament scenarios: starting games, updating scores, finishing
//! games and reading the ranked summary.

use live_scoreboard::{ErrorKind, Match, Scoreboard};

fn assert_match_equals(game: &Match, home: &str, away: &str, home_score: u32, away_score: u32) {
    assert_eq!(
        game.home_team().name(),
        home,
        "expected home team {} but got {}",
        home,
        game.home_team().name()
    );
    assert_eq!(
        game.away_team().name(),
        away,
        "expected away team {} but got {}",
        away,
        game.away_team().name()
    );
    assert_eq!(
        game.home_score(),
        home_score,
        "unexpected home score for {} vs {}",
        home,
        away
    );
    assert_eq!(
        game.away_score(),
        away_score,
        "unexpected away score for {} vs {}",
        home,
        away
    );
}

#[test]
fn world_cup_summary_is_ranked_by_total_then_recency() {
    let mut scoreboard = Scoreboard::new();

    scoreboard.start_game("Mexico", "Canada").unwrap();
    scoreboard.start_game("Spain", "Brazil").unwrap();
    scoreboard.start_game("Germany", "France").unwrap();
    scoreboard.start_game("Uruguay", "Italy").unwrap();
    scoreboard.start_game("Argentina", "Australia").unwrap();

    scoreboard.update_score("Mexico", "Canada", 0, 5).unwrap();
    scoreboard.update_score("Spain", "Brazil", 10, 2).unwrap();
    scoreboard.update_score("Germany", "France", 2, 2).unwrap();
    scoreboard.update_score("Uruguay", "Italy", 6, 6).unwrap();
    scoreboard.update_score("Argentina", "Australia", 3, 1).unwrap();

    let summary = scoreboard.get_summary();

    assert_eq!(summary.len(), 5);
    assert_match_equals(&summary[0], "Uruguay", "Italy", 6, 6);
    assert_match_equals(&summary[1], "Spain", "Brazil", 10, 2);
    assert_match_equals(&summary[2], "Mexico", "Canada", 0, 5);
    assert_match_equals(&summary[3], "Argentina", "Australia", 3, 1);
    assert_match_equals(&summary[4], "Germany", "France", 2, 2);
}

#[test]
fn finishing_a_game_drops_it_from_the_summary() {
    let mut scoreboard = Scoreboard::new();

    scoreboard.start_game("Mexico", "Canada").unwrap();
    scoreboard.start_game("Spain", "Brazil").unwrap();
    scoreboard.start_game("Germany", "France").unwrap();

    scoreboard.update_score("Mexico", "Canada", 0, 5).unwrap();
    scoreboard.update_score("Spain", "Brazil", 10, 2).unwrap();
    scoreboard.update_score("Germany", "France", 2, 2).unwrap();

    scoreboard.finish_game("Germany", "France").unwrap();

    let summary = scoreboard.get_summary();

    assert_eq!(summary.len(), 2);
    assert_match_equals(&summary[0], "Spain", "Brazil", 10, 2);
    assert_match_equals(&summary[1], "Mexico", "Canada", 0, 5);
}

#[test]
fn all_zero_totals_rank_by_most_recently_started() {
    let mut scoreboard = Scoreboard::new();

    scoreboard.start_game("Mexico", "Canada").unwrap();
    scoreboard.start_game("Spain", "Brazil").unwrap();
    scoreboard.start_game("Germany", "France").unwrap();

    let summary = scoreboard.get_summary();

    assert_eq!(summary.len(), 3);
    assert_match_equals(&summary[0], "Germany", "France", 0, 0);
    assert_match_equals(&summary[1], "Spain", "Brazil", 0, 0);
    assert_match_equals(&summary[2], "Mexico", "Canada", 0, 0);
}

#[test]
fn single_game_summary() {
    let mut scoreboard = Scoreboard::new();

    scoreboard.start_game("Mexico", "Canada").unwrap();
    scoreboard.update_score("Mexico", "Canada", 3, 2).unwrap();

    let summary = scoreboard.get_summary();

    assert_eq!(summary.len(), 1);
    assert_match_equals(&summary[0], "Mexico", "Canada", 3, 2);
}

#[test]
fn scoreboard_stays_usable_after_failures() {
    let mut scoreboard = Scoreboard::new();

    // Each precondition failure leaves the registry unchanged.
    assert_eq!(
        scoreboard.start_game("Mexico", "Mexico").unwrap_err().kind(),
        ErrorKind::InvalidArgument
    );
    assert_eq!(
        scoreboard.update_score("Mexico", "Canada", 0, 5).unwrap_err().kind(),
        ErrorKind::IllegalState
    );
    assert_eq!(
        scoreboard.finish_game("Mexico", "Canada").unwrap_err().kind(),
        ErrorKind::IllegalState
    );

    scoreboard.start_game("Mexico", "Canada").unwrap();
    assert_eq!(
        scoreboard.start_game("Mexico", "Canada").unwrap_err().kind(),
        ErrorKind::IllegalState
    );
    assert_eq!(
        scoreboard.update_score("Mexico", "Canada", -1, 0).unwrap_err().kind(),
        ErrorKind::InvalidArgument
    );

    scoreboard.update_score("Mexico", "Canada", 0, 5).unwrap();

    let summary = scoreboard.get_summary();
    assert_eq!(summary.len(), 1);
    assert_match_equals(&summary[0], "Mexico", "Canada", 0, 5);
}

#[test]
fn creation_order_keeps_growing_across_finished_games() {
    let mut scoreboard = Scoreboard::new();

    scoreboard.start_game("Mexico", "Canada").unwrap();
    scoreboard.start_game("Spain", "Brazil").unwrap();
    scoreboard.finish_game("Mexico", "Canada").unwrap();
    scoreboard.finish_game("Spain", "Brazil").unwrap();

    // Restarted pair ranks as the most recent among equal totals.
    scoreboard.start_game("Mexico", "Canada").unwrap();
    scoreboard.start_game("Germany", "France").unwrap();
    scoreboard.update_score("Mexico", "Canada", 1, 1).unwrap();
    scoreboard.update_score("Germany", "France", 2, 0).unwrap();

    let summary = scoreboard.get_summary();

    assert_match_equals(&summary[0], "Germany", "France", 2, 0);
    assert_match_equals(&summary[1], "Mexico", "Canada", 1, 1);
}

#[test]
fn summary_lines_render_like_a_scoreboard() {
    let mut scoreboard = Scoreboard::new();

    scoreboard.start_game("Uruguay", "Italy").unwrap();
    scoreboard.start_game("Spain", "Brazil").unwrap();
    scoreboard.update_score("Uruguay", "Italy", 6, 6).unwrap();
    scoreboard.update_score("Spain", "Brazil", 10, 2).unwrap();

    let lines: Vec<String> = scoreboard
        .get_summary()
        .iter()
        .map(Match::to_string)
        .collect();

    assert_eq!(lines, vec!["Spain 10 - Brazil 2", "Uruguay 6 - Italy 6"]);
}

#[test]
fn summary_serializes_for_host_rendering() {
    let mut scoreboard = Scoreboard::new();

    scoreboard.start_game("Mexico", "Canada").unwrap();
    scoreboard.update_score("Mexico", "Canada", 0, 5).unwrap();

    let json = serde_json::to_value(scoreboard.get_summary()).unwrap();

    assert_eq!(json[0]["home_team"], "Mexico");
    assert_eq!(json[0]["away_team"], "Canada");
    assert_eq!(json[0]["home_score"], 0);
    assert_eq!(json[0]["away_score"], 5);
}
