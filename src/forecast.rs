//! Per-fixture forecast orchestration: ties ratings, form, projection and the
//! scoreline distribution together for a run of upcoming fixtures.

use rustc_hash::FxHashMap;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::domain::{Fixture, MatchResult};
use crate::form::{self, FormConfig, FormRating};
use crate::projection::{self, FixtureProjection, HomeAdvantage, MissingRatingError};
use crate::ratings::{EmptyHistoryError, Ratings};
use crate::scoregrid::{InvalidRateError, ScoreGrid, DEFAULT_MAX_GOALS};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Config {
    pub form: FormConfig,
    pub max_goals: usize,
    pub home_advantage: HomeAdvantage,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            form: FormConfig::default(),
            max_goals: DEFAULT_MAX_GOALS,
            home_advantage: HomeAdvantage::default(),
        }
    }
}

impl Config {
    fn validate(&self) -> Result<(), EngineError> {
        if !(0.0..=1.0).contains(&self.form.alpha) {
            return Err(EngineError::InvalidAlpha(self.form.alpha));
        }
        if self.form.window == 0 {
            return Err(EngineError::ZeroWindow);
        }
        if self.max_goals == 0 {
            return Err(EngineError::ZeroMaxGoals);
        }
        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("{0}")]
    EmptyHistory(#[from] EmptyHistoryError),

    #[error("alpha {0} lies outside [0, 1]")]
    InvalidAlpha(f64),

    #[error("window must be at least 1")]
    ZeroWindow,

    #[error("max goals must be at least 1")]
    ZeroMaxGoals,
}

#[derive(Debug, Error)]
pub enum ForecastError {
    #[error("{0}")]
    MissingRating(#[from] MissingRatingError),

    #[error("{0}")]
    InvalidRate(#[from] InvalidRateError),
}

/// The forecast for one fixture: the expected-goal projection, the full
/// scoreline distribution, and the derived outcome probabilities.
#[derive(Clone, Debug, PartialEq)]
pub struct Forecast {
    pub fixture: Fixture,
    pub projection: FixtureProjection,
    pub scoregrid: ScoreGrid,
    pub home_win: f64,
    pub draw: f64,
    pub away_win: f64,
}

impl Forecast {
    /// The boundary record handed to the presentation collaborator, with the
    /// scoreline matrix truncated to a display-friendly sub-range.
    pub fn to_record(&self, display_goals: usize) -> ForecastRecord {
        let display = self.scoregrid.truncated(display_goals);
        let scoregrid = (0..display.rows())
            .map(|row| display.row_slice(row).to_vec())
            .collect();
        ForecastRecord {
            round: self.fixture.round,
            home_team: self.fixture.home_team.clone(),
            away_team: self.fixture.away_team.clone(),
            home_rate: self.projection.home_rate,
            away_rate: self.projection.away_rate,
            home_win: self.home_win,
            draw: self.draw,
            away_win: self.away_win,
            scoregrid,
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct ForecastRecord {
    pub round: Option<u32>,
    pub home_team: String,
    pub away_team: String,
    pub home_rate: f64,
    pub away_rate: f64,
    pub home_win: f64,
    pub draw: f64,
    pub away_win: f64,
    pub scoregrid: Vec<Vec<f64>>,
}

/// A forecasting run over an immutable set of historical results. Built once
/// from explicit inputs; exposes pure query methods and holds no ambient
/// state.
#[derive(Debug)]
pub struct ForecastEngine {
    config: Config,
    ratings: Ratings,
    form: FxHashMap<String, FormRating>,
}

impl ForecastEngine {
    /// `results` must be in chronological order.
    pub fn try_new(results: &[MatchResult], config: Config) -> Result<Self, EngineError> {
        config.validate()?;
        let ratings = Ratings::from_results(results)?;
        debug!(
            "rated {} teams over {} results, home advantage {:+.3}",
            ratings.teams.len(),
            results.len(),
            ratings.home_advantage
        );
        let form = form::blend(results, &ratings, &config.form);
        Ok(Self {
            config,
            ratings,
            form,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn ratings(&self) -> &Ratings {
        &self.ratings
    }

    pub fn form(&self, team: &str) -> Option<&FormRating> {
        self.form.get(team)
    }

    /// Forecasts a single fixture, failing eagerly when a team is unrated or
    /// the projected rates are unusable.
    pub fn forecast(&self, fixture: &Fixture) -> Result<Forecast, ForecastError> {
        let projection = projection::project(
            &fixture.home_team,
            &fixture.away_team,
            &self.form,
            self.config.home_advantage,
        )?;
        let scoregrid = ScoreGrid::from_rates(
            projection.home_rate,
            projection.away_rate,
            self.config.max_goals,
        )?;
        let (home_win, draw, away_win) = (scoregrid.home_win(), scoregrid.draw(), scoregrid.away_win());
        Ok(Forecast {
            fixture: fixture.clone(),
            projection,
            scoregrid,
            home_win,
            draw,
            away_win,
        })
    }

    /// Forecasts a round of fixtures independently. This is the sole recovery
    /// boundary: a fixture that cannot be forecast is logged and omitted,
    /// never defaulted.
    pub fn forecast_all(&self, fixtures: &[Fixture]) -> Vec<Forecast> {
        let mut forecasts = Vec::with_capacity(fixtures.len());
        for fixture in fixtures {
            match self.forecast(fixture) {
                Ok(forecast) => forecasts.push(forecast),
                Err(error) => warn!("skipping {fixture}: {error}"),
            }
        }
        forecasts
    }
}
