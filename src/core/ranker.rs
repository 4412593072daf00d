// SoccerRank - core/ranker.rs
//
// Table ordering: points descending, then team name ascending (byte order).

use crate::core::table::LeagueTable;
use std::cmp::Reverse;

/// Order the table's teams for display.
///
/// Names are unique keys, so this is a total order and the result is the
/// same on every call.
pub fn rank(table: &LeagueTable) -> Vec<&str> {
    let mut teams: Vec<(&str, u32)> = table.iter().collect();
    teams.sort_by(|(name_a, pts_a), (name_b, pts_b)| {
        (Reverse(pts_a), name_a).cmp(&(Reverse(pts_b), name_b))
    });
    teams.into_iter().map(|(name, _)| name).collect()
}
