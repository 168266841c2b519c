//! Matchup recommendation engine.
//!
//! Given an opponent and a list of banned teams, ranks the remaining catalog
//! two ways:
//! - Best available: symmetric differential score, highest first
//! - Close matchups: teams rated just above the opponent, closest first
//!
//! Both rankings use stable sorts, so equal values keep catalog order.

use crate::error::MatchupError;
use crate::models::{BestAvailableEntry, CloseMatchupEntry, Recommendation};
use crate::team_catalog::{normalize_name, TeamCatalog};
use crate::types::Team;
use rustc_hash::FxHashSet;
use tracing::debug;

/// Maximum entries in the best-available list.
pub const BEST_AVAILABLE_LIMIT: usize = 3;
/// Maximum entries in the close-matchups list.
pub const CLOSE_MATCHUPS_LIMIT: usize = 3;
/// How far above the opponent's overall rating still counts as close.
pub const CLOSE_MATCHUP_DELTA: f64 = 10.0;

/// Differential score of `candidate` against `opponent`.
///
/// `(c.offense - o.defense) + (c.defense - o.offense)`; unbounded in sign.
pub fn matchup_score(candidate: &Team, opponent: &Team) -> i32 {
    (i32::from(candidate.offense) - i32::from(opponent.defense))
        + (i32::from(candidate.defense) - i32::from(opponent.offense))
}

/// Strictly above the opponent, at most [`CLOSE_MATCHUP_DELTA`] above.
pub fn is_close_matchup(opponent_overall: f64, overall: f64) -> bool {
    overall > opponent_overall && overall <= opponent_overall + CLOSE_MATCHUP_DELTA
}

/// Rank the catalog against `opponent`, skipping the opponent and every banned name.
///
/// Name matching is case-insensitive exact equality. Unknown or duplicate banned
/// names are ignored. The banned list is echoed back as supplied.
pub fn recommend(
    catalog: &TeamCatalog,
    opponent: &str,
    banned_teams: &[String],
) -> Result<Recommendation, MatchupError> {
    if opponent.is_empty() {
        return Err(MatchupError::InvalidOpponent);
    }

    let opponent_team = catalog
        .lookup(opponent)
        .ok_or_else(|| MatchupError::OpponentNotFound {
            name: opponent.to_string(),
            suggestion: catalog.suggest(opponent).map(str::to_string),
        })?;
    let opponent_overall = opponent_team.overall();

    let opponent_key = normalize_name(&opponent_team.name);
    let banned: FxHashSet<String> = banned_teams.iter().map(|b| normalize_name(b)).collect();

    let candidates: Vec<&Team> = catalog
        .teams()
        .iter()
        .filter(|team| {
            let key = normalize_name(&team.name);
            key != opponent_key && !banned.contains(&key)
        })
        .collect();

    let best_available = rank_best_available(&candidates, opponent_team);
    let close_matchups = rank_close_matchups(&candidates, opponent_overall);

    debug!(
        "Recommendation for {} (overall {:.1}): {} candidates, {} best, {} close",
        opponent_team.name,
        opponent_overall,
        candidates.len(),
        best_available.len(),
        close_matchups.len()
    );

    Ok(Recommendation {
        opponent: opponent_team.name.clone(),
        banned_teams: banned_teams.to_vec(),
        best_available,
        close_matchups,
    })
}

fn rank_best_available(candidates: &[&Team], opponent: &Team) -> Vec<BestAvailableEntry> {
    let mut scored: Vec<BestAvailableEntry> = candidates
        .iter()
        .map(|team| BestAvailableEntry {
            team: team.name.clone(),
            score: matchup_score(team, opponent),
        })
        .collect();

    // sort_by is stable: equal scores keep catalog order
    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored.truncate(BEST_AVAILABLE_LIMIT);
    scored
}

fn rank_close_matchups(candidates: &[&Team], opponent_overall: f64) -> Vec<CloseMatchupEntry> {
    let mut close: Vec<CloseMatchupEntry> = candidates
        .iter()
        .map(|team| CloseMatchupEntry {
            team: team.name.clone(),
            overall: team.overall(),
        })
        .filter(|entry| is_close_matchup(opponent_overall, entry.overall))
        .collect();

    close.sort_by(|a, b| a.overall.total_cmp(&b.overall));
    close.truncate(CLOSE_MATCHUPS_LIMIT);
    close
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn best_names(rec: &Recommendation) -> Vec<&str> {
        rec.best_available.iter().map(|e| e.team.as_str()).collect()
    }

    fn close_names(rec: &Recommendation) -> Vec<&str> {
        rec.close_matchups.iter().map(|e| e.team.as_str()).collect()
    }

    fn banned(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_matchup_score() {
        let packers = Team::new("Packers", 70, 65, 65, 70);
        let niners = Team::new("49ers", 95, 90, 85, 95);
        assert_eq!(matchup_score(&niners, &packers), 50);
        assert_eq!(matchup_score(&packers, &niners), -50);
    }

    #[test]
    fn test_close_matchup_bounds() {
        assert!(!is_close_matchup(67.5, 67.5));
        assert!(is_close_matchup(67.5, 68.0));
        assert!(is_close_matchup(67.5, 77.5));
        assert!(!is_close_matchup(67.5, 78.0));
    }

    #[test]
    fn test_packers_no_bans() {
        let catalog = TeamCatalog::default_roster();
        let rec = recommend(&catalog, "Packers", &[]).unwrap();

        assert_eq!(rec.opponent, "Packers");
        assert!(rec.banned_teams.is_empty());

        // 49ers and Giants tie at 50; Eagles beats Raiders at 45 on catalog order
        assert_eq!(best_names(&rec), vec!["49ers", "Giants", "Eagles"]);
        let scores: Vec<i32> = rec.best_available.iter().map(|e| e.score).collect();
        assert_eq!(scores, vec![50, 50, 45]);

        assert_eq!(close_names(&rec), vec!["Cardinals", "Jets", "Seahawks"]);
        assert!(rec.close_matchups.iter().all(|e| e.overall == 70.0));
    }

    #[test]
    fn test_case_insensitive_opponent_gives_identical_result() {
        let catalog = TeamCatalog::default_roster();
        let upper = recommend(&catalog, "Packers", &banned(&["Giants"])).unwrap();
        let lower = recommend(&catalog, "packers", &banned(&["Giants"])).unwrap();
        assert_eq!(upper, lower);
        assert_eq!(lower.opponent, "Packers");
    }

    #[test]
    fn test_banned_teams_excluded_case_insensitive() {
        let catalog = TeamCatalog::default_roster();
        let rec = recommend(&catalog, "Packers", &banned(&["49ERS", "cardinals", "Jets"])).unwrap();

        assert_eq!(best_names(&rec), vec!["Giants", "Eagles", "Raiders"]);
        assert_eq!(close_names(&rec), vec!["Seahawks", "Falcons", "Bengals"]);
        assert_eq!(rec.banned_teams, banned(&["49ERS", "cardinals", "Jets"]));
    }

    #[test]
    fn test_banned_matching_is_exact() {
        let catalog = TeamCatalog::default_roster();
        let rec = recommend(&catalog, "Packers", &banned(&["49", "Giant", "Eagles "])).unwrap();
        assert_eq!(best_names(&rec), vec!["49ers", "Giants", "Eagles"]);
    }

    #[test]
    fn test_unknown_and_duplicate_bans_tolerated() {
        let catalog = TeamCatalog::default_roster();
        let rec =
            recommend(&catalog, "Packers", &banned(&["Martians", "Giants", "giants"])).unwrap();
        assert_eq!(best_names(&rec), vec!["49ers", "Eagles", "Raiders"]);
        assert_eq!(rec.banned_teams.len(), 3);
    }

    #[test]
    fn test_opponent_in_banned_list_is_harmless() {
        let catalog = TeamCatalog::default_roster();
        let plain = recommend(&catalog, "Packers", &[]).unwrap();
        let self_banned = recommend(&catalog, "Packers", &banned(&["packers"])).unwrap();
        assert_eq!(plain.best_available, self_banned.best_available);
        assert_eq!(plain.close_matchups, self_banned.close_matchups);
    }

    #[test]
    fn test_opponent_never_recommended() {
        let catalog = TeamCatalog::default_roster();
        for name in catalog.names() {
            let rec = recommend(&catalog, name, &[]).unwrap();
            assert!(rec.best_available.iter().all(|e| e.team != name));
            assert!(rec.close_matchups.iter().all(|e| e.team != name));
        }
    }

    #[test]
    fn test_ordering_and_window_hold_for_every_opponent() {
        let catalog = TeamCatalog::default_roster();
        for opponent in catalog.teams() {
            let rec = recommend(&catalog, &opponent.name, &[]).unwrap();
            let base = opponent.overall();

            assert!(rec.best_available.len() <= BEST_AVAILABLE_LIMIT);
            assert!(rec.close_matchups.len() <= CLOSE_MATCHUPS_LIMIT);
            assert!(rec
                .best_available
                .windows(2)
                .all(|w| w[0].score >= w[1].score));
            assert!(rec
                .close_matchups
                .windows(2)
                .all(|w| w[0].overall <= w[1].overall));
            assert!(rec
                .close_matchups
                .iter()
                .all(|e| e.overall > base && e.overall <= base + CLOSE_MATCHUP_DELTA));
        }
    }

    #[test]
    fn test_fractional_overall_sorted_by_real_value() {
        let catalog = TeamCatalog::default_roster();
        let rec = recommend(&catalog, "Colts", &[]).unwrap();
        assert_eq!(close_names(&rec), vec!["Patriots", "Browns", "Packers"]);
        let overalls: Vec<f64> = rec.close_matchups.iter().map(|e| e.overall).collect();
        assert_eq!(overalls, vec![62.5, 65.0, 67.5]);
    }

    #[test]
    fn test_upper_bound_inclusive() {
        let catalog = TeamCatalog::default_roster();
        let rec = recommend(
            &catalog,
            "Packers",
            &banned(&["Cardinals", "Jets", "Seahawks", "Falcons", "Bengals"]),
        )
        .unwrap();
        assert_eq!(close_names(&rec), vec!["Lions", "Cowboys", "Buccaneers"]);
        assert!(rec.close_matchups.iter().all(|e| e.overall == 77.5));
    }

    #[test]
    fn test_equal_overall_not_close() {
        // Giants share the 49ers' 92.5 overall and nothing rates higher
        let catalog = TeamCatalog::default_roster();
        let rec = recommend(&catalog, "49ers", &[]).unwrap();
        assert!(rec.close_matchups.is_empty());
        assert_eq!(best_names(&rec), vec!["Giants", "Eagles", "Raiders"]);
        let scores: Vec<i32> = rec.best_available.iter().map(|e| e.score).collect();
        assert_eq!(scores, vec![0, -5, -5]);
    }

    #[test]
    fn test_all_others_banned_gives_empty_lists() {
        let catalog = TeamCatalog::default_roster();
        let everyone: Vec<String> = catalog
            .names()
            .into_iter()
            .filter(|n| *n != "Packers")
            .map(str::to_string)
            .collect();
        let rec = recommend(&catalog, "Packers", &everyone).unwrap();
        assert!(rec.best_available.is_empty());
        assert!(rec.close_matchups.is_empty());
    }

    #[test]
    fn test_fewer_candidates_than_limit() {
        let catalog = TeamCatalog::new(vec![
            Team::new("Colts", 60, 60, 60, 60),
            Team::new("Browns", 65, 65, 65, 65),
        ])
        .unwrap();
        let rec = recommend(&catalog, "Colts", &[]).unwrap();
        assert_eq!(best_names(&rec), vec!["Browns"]);
        assert_eq!(rec.best_available[0].score, 10);
        assert_eq!(close_names(&rec), vec!["Browns"]);
    }

    #[test]
    fn test_unknown_opponent() {
        let catalog = TeamCatalog::default_roster();
        let err = recommend(&catalog, "Martians", &[]).unwrap_err();
        assert!(err.is_not_found());
        match err {
            MatchupError::OpponentNotFound { name, suggestion } => {
                assert_eq!(name, "Martians");
                assert_eq!(suggestion, None);
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_unknown_opponent_with_suggestion() {
        let catalog = TeamCatalog::default_roster();
        let err = recommend(&catalog, "Packrs", &[]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Opponent team \"Packrs\" not found (did you mean \"Packers\"?)"
        );
    }

    #[test]
    fn test_empty_opponent_rejected() {
        let catalog = TeamCatalog::default_roster();
        let err = recommend(&catalog, "", &[]).unwrap_err();
        assert!(matches!(err, MatchupError::InvalidOpponent));
    }
}
