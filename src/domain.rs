//! Core domain model: scores, venue sides, historical results and upcoming fixtures.

use chrono::NaiveDate;
use std::fmt::{Display, Formatter};

#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Score {
    pub home: u8,
    pub away: u8,
}
impl Score {
    pub fn new(home: u8, away: u8) -> Self {
        Self { home, away }
    }
}

impl Display for Score {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.home, self.away)
    }
}

#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum Side {
    Home,
    Away,
}

/// A completed match. Immutable once loaded; `date` is the chronological
/// ordering key that the form window relies upon.
#[derive(Clone, Debug, PartialEq)]
pub struct MatchResult {
    pub date: NaiveDate,
    pub home_team: String,
    pub away_team: String,
    pub score: Score,
}
impl MatchResult {
    /// The venue role `team` occupied in this match, if it played at all.
    pub fn side_of(&self, team: &str) -> Option<Side> {
        if self.home_team == team {
            Some(Side::Home)
        } else if self.away_team == team {
            Some(Side::Away)
        } else {
            None
        }
    }

    pub fn goals_for(&self, side: Side) -> u8 {
        match side {
            Side::Home => self.score.home,
            Side::Away => self.score.away,
        }
    }

    pub fn goals_against(&self, side: Side) -> u8 {
        match side {
            Side::Home => self.score.away,
            Side::Away => self.score.home,
        }
    }
}

/// An upcoming match awaiting a forecast.
#[derive(Clone, Debug, PartialEq)]
pub struct Fixture {
    pub round: Option<u32>,
    pub home_team: String,
    pub away_team: String,
}

impl Display for Fixture {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} vs {}", self.home_team, self.away_team)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> MatchResult {
        MatchResult {
            date: NaiveDate::from_ymd_opt(2024, 8, 17).unwrap(),
            home_team: "Arsenal".into(),
            away_team: "Wolves".into(),
            score: Score::new(2, 0),
        }
    }

    #[test]
    fn side_of() {
        let result = sample();
        assert_eq!(Some(Side::Home), result.side_of("Arsenal"));
        assert_eq!(Some(Side::Away), result.side_of("Wolves"));
        assert_eq!(None, result.side_of("Spurs"));
    }

    #[test]
    fn goals_by_side() {
        let result = sample();
        assert_eq!(2, result.goals_for(Side::Home));
        assert_eq!(0, result.goals_against(Side::Home));
        assert_eq!(0, result.goals_for(Side::Away));
        assert_eq!(2, result.goals_against(Side::Away));
    }

    #[test]
    fn score_display() {
        assert_eq!("2-0", format!("{}", Score::new(2, 0)));
    }
}
