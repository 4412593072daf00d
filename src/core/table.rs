// SoccerRank - core/table.rs
//
// Points aggregation. The table is a value threaded through the pipeline:
// each result folds into the previous table to produce the next one.

use crate::core::model::MatchResult;
use std::collections::BTreeMap;

/// Team name -> total points.
///
/// Every team that appears in an applied result has exactly one entry,
/// even if it has never earned a point.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeagueTable {
    points: BTreeMap<String, u32>,
}

impl LeagueTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one game's points for both teams, creating entries as needed.
    ///
    /// Repeated fixtures are added again; there is no deduplication.
    #[must_use]
    pub fn add_result(
        mut self,
        first: &str,
        first_points: u32,
        second: &str,
        second_points: u32,
    ) -> Self {
        self.credit(first, first_points);
        self.credit(second, second_points);
        self
    }

    /// Apply a parsed game using the league points rule.
    #[must_use]
    pub fn apply(self, result: &MatchResult) -> Self {
        let (first_points, second_points) = result.points();
        self.add_result(
            &result.first.name,
            first_points,
            &result.second.name,
            second_points,
        )
    }

    /// Build a table from a sequence of games.
    pub fn from_results<'a, I>(results: I) -> Self
    where
        I: IntoIterator<Item = &'a MatchResult>,
    {
        results.into_iter().fold(Self::new(), Self::apply)
    }

    fn credit(&mut self, team: &str, points: u32) {
        match self.points.get_mut(team) {
            Some(total) => *total = total.saturating_add(points),
            None => {
                self.points.insert(team.to_string(), points);
            }
        }
    }

    /// Total points for `team`, if it has played.
    pub fn points(&self, team: &str) -> Option<u32> {
        self.points.get(team).copied()
    }

    /// Iterate (team, points) in team-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.points.iter().map(|(team, &points)| (team.as_str(), points))
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Sum of all teams' points.
    pub fn total_points(&self) -> u64 {
        self.points.values().map(|&p| u64::from(p)).sum()
    }
}

impl<S: Into<String>> FromIterator<(S, u32)> for LeagueTable {
    fn from_iter<T: IntoIterator<Item = (S, u32)>>(iter: T) -> Self {
        Self {
            points: iter.into_iter().map(|(team, pts)| (team.into(), pts)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::parser::parse_content;

    #[test]
    fn test_sequential_add_result() {
        let table = LeagueTable::new().add_result("a", 3, "b", 1);
        assert_eq!(table, [("a", 3), ("b", 1)].into_iter().collect());

        let table = table.add_result("a", 2, "c", 1);
        assert_eq!(table, [("a", 5), ("b", 1), ("c", 1)].into_iter().collect());
    }

    #[test]
    fn test_zero_point_team_is_present() {
        let table = LeagueTable::new().add_result("Lions", 3, "Grouches", 0);
        assert_eq!(table.points("Grouches"), Some(0));
        assert_eq!(table.points("Snakes"), None);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_team_names_are_case_sensitive() {
        let table = LeagueTable::new().add_result("lions", 1, "Lions", 1);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_repeated_fixture_adds_again() {
        let table = LeagueTable::new()
            .add_result("a", 3, "b", 0)
            .add_result("a", 3, "b", 0);
        assert_eq!(table.points("a"), Some(6));
    }

    #[test]
    fn test_points_saturate_instead_of_wrapping() {
        let table = LeagueTable::new()
            .add_result("a", u32::MAX - 1, "b", 0)
            .add_result("a", 3, "b", 0);
        assert_eq!(table.points("a"), Some(u32::MAX));
    }

    #[test]
    fn test_total_points_matches_game_outcomes() {
        let parsed = parse_content(
            "Lions 3, Snakes 3\n\
             Tarantulas 1, FC Awesome 0\n\
             Lions 1, FC Awesome 1\n\
             Tarantulas 3, Snakes 1\n\
             Lions 4, Grouches 0",
        );
        let table = LeagueTable::from_results(&parsed.results);

        let draws = parsed
            .results
            .iter()
            .filter(|r| r.first.score == r.second.score)
            .count() as u64;
        let decisive = parsed.results.len() as u64 - draws;
        assert_eq!(table.total_points(), 3 * decisive + 2 * draws);
    }

    #[test]
    fn test_application_order_does_not_change_totals() {
        let parsed = parse_content("A 1, B 0\nB 2, C 2\nC 0, A 4\nA 1, C 1");
        let forward = LeagueTable::from_results(&parsed.results);
        let backward = LeagueTable::from_results(parsed.results.iter().rev());
        assert_eq!(forward, backward);
    }
}
