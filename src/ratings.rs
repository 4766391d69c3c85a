//! Baseline attack/defence ratings derived from full historical results.

use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::domain::{MatchResult, Side};

#[derive(Debug, Error)]
#[error("no historical matches to rate")]
pub struct EmptyHistoryError;

/// Mean goals scored and conceded by a team in one venue role. A field is
/// `None` when the team has no appearances in that role; a mean over an empty
/// set is absent, never a silent zero.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct VenueMeans {
    pub goals_for: Option<f64>,
    pub goals_against: Option<f64>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TeamRating {
    pub home: VenueMeans,
    pub away: VenueMeans,
}
impl TeamRating {
    /// Composite scoring rate: the mean of the home and away goals-for means.
    /// When one venue role has no history (e.g. a newly promoted team early in
    /// the season), the sole available mean stands in for the composite.
    pub fn attack(&self) -> Option<f64> {
        mean_of(self.home.goals_for, self.away.goals_for)
    }

    /// Composite conceding rate; same fallback as [`attack`](Self::attack).
    pub fn defense(&self) -> Option<f64> {
        mean_of(self.home.goals_against, self.away.goals_against)
    }
}

/// Mean of the present values; `None` only when both are absent.
pub(crate) fn mean_of(a: Option<f64>, b: Option<f64>) -> Option<f64> {
    match (a, b) {
        (Some(a), Some(b)) => Some((a + b) / 2.0),
        (some @ Some(_), None) => some,
        (None, some @ Some(_)) => some,
        (None, None) => None,
    }
}

#[derive(Default)]
struct VenueTally {
    matches: u32,
    goals_for: u32,
    goals_against: u32,
}
impl VenueTally {
    fn record(&mut self, result: &MatchResult, side: Side) {
        self.matches += 1;
        self.goals_for += result.goals_for(side) as u32;
        self.goals_against += result.goals_against(side) as u32;
    }

    fn means(&self) -> VenueMeans {
        if self.matches == 0 {
            return VenueMeans::default();
        }
        let matches = self.matches as f64;
        VenueMeans {
            goals_for: Some(self.goals_for as f64 / matches),
            goals_against: Some(self.goals_against as f64 / matches),
        }
    }
}

/// Baseline ratings for every team appearing in the historical results, plus
/// the home-field-advantage scalar: global mean home goals less global mean
/// away goals.
#[derive(Clone, Debug, PartialEq)]
pub struct Ratings {
    pub teams: FxHashMap<String, TeamRating>,
    pub home_advantage: f64,
}
impl Ratings {
    pub fn from_results(results: &[MatchResult]) -> Result<Self, EmptyHistoryError> {
        if results.is_empty() {
            return Err(EmptyHistoryError);
        }

        let mut tallies: FxHashMap<String, (VenueTally, VenueTally)> = FxHashMap::default();
        let (mut home_goals, mut away_goals) = (0u32, 0u32);
        for result in results {
            home_goals += result.score.home as u32;
            away_goals += result.score.away as u32;
            tallies
                .entry(result.home_team.clone())
                .or_default()
                .0
                .record(result, Side::Home);
            tallies
                .entry(result.away_team.clone())
                .or_default()
                .1
                .record(result, Side::Away);
        }

        let teams = tallies
            .into_iter()
            .map(|(team, (home, away))| {
                (
                    team,
                    TeamRating {
                        home: home.means(),
                        away: away.means(),
                    },
                )
            })
            .collect();
        let matches = results.len() as f64;
        let home_advantage = home_goals as f64 / matches - away_goals as f64 / matches;
        Ok(Self {
            teams,
            home_advantage,
        })
    }

    pub fn rating(&self, team: &str) -> Option<&TeamRating> {
        self.teams.get(team)
    }
}
