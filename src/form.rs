//! Recency-weighted form ratings, exponentially blended with the baseline.

use rustc_hash::FxHashMap;

use crate::domain::{MatchResult, Side};
use crate::ratings::{mean_of, Ratings};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FormConfig {
    /// Number of most recent matches (in either venue role) contributing to a
    /// team's form window. A team with fewer matches uses all it has.
    pub window: usize,

    /// Weight of the windowed form mean versus the baseline rating; `0.0`
    /// reproduces the baseline, `1.0` discards it.
    pub alpha: f64,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            window: 20,
            alpha: 0.65,
        }
    }
}

/// A team's blended attack and defence scoring rates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FormRating {
    pub attack: f64,
    pub defense: f64,
}

#[derive(Default)]
struct WindowTally {
    matches: u32,
    goals_for: u32,
    goals_against: u32,
}
impl WindowTally {
    fn record(&mut self, result: &MatchResult, side: Side) {
        self.matches += 1;
        self.goals_for += result.goals_for(side) as u32;
        self.goals_against += result.goals_against(side) as u32;
    }

    fn mean_goals_for(&self) -> Option<f64> {
        (self.matches > 0).then(|| self.goals_for as f64 / self.matches as f64)
    }

    fn mean_goals_against(&self) -> Option<f64> {
        (self.matches > 0).then(|| self.goals_against as f64 / self.matches as f64)
    }
}

/// Computes the blended form rating for every rated team. `results` must be in
/// chronological order; the window selects from its tail. Given identical
/// input ordering and parameters the output is exactly reproducible.
pub fn blend(
    results: &[MatchResult],
    ratings: &Ratings,
    config: &FormConfig,
) -> FxHashMap<String, FormRating> {
    let mut form = FxHashMap::default();
    for (team, rating) in &ratings.teams {
        let (Some(baseline_attack), Some(baseline_defense)) = (rating.attack(), rating.defense())
        else {
            continue;
        };

        let (mut home, mut away) = (WindowTally::default(), WindowTally::default());
        for result in results.iter().rev() {
            if home.matches + away.matches == config.window as u32 {
                break;
            }
            match result.side_of(team) {
                Some(Side::Home) => home.record(result, Side::Home),
                Some(Side::Away) => away.record(result, Side::Away),
                None => {}
            }
        }

        let windowed_attack = mean_of(home.mean_goals_for(), away.mean_goals_for());
        let windowed_defense = mean_of(home.mean_goals_against(), away.mean_goals_against());
        form.insert(
            team.clone(),
            FormRating {
                attack: blend_value(baseline_attack, windowed_attack, config.alpha),
                defense: blend_value(baseline_defense, windowed_defense, config.alpha),
            },
        );
    }
    form
}

/// `(1 - alpha) * baseline + alpha * windowed`; a team with no qualifying
/// matches in the window keeps its baseline unmodified.
fn blend_value(baseline: f64, windowed: Option<f64>, alpha: f64) -> f64 {
    match windowed {
        Some(windowed) => (1.0 - alpha) * baseline + alpha * windowed,
        None => baseline,
    }
}
