//! The joint scoreline probability distribution for a fixture.

use thiserror::Error;

use crate::domain::{Score, Side};
use crate::linear::Matrix;
use crate::poisson;
use crate::probs::SliceExt;

/// Cumulative probability mass beyond 12 goals per side is negligible for
/// top-flight football scoring rates.
pub const DEFAULT_MAX_GOALS: usize = 12;

#[derive(Debug, Error)]
#[error("invalid expected-goals rate {rate}")]
pub struct InvalidRateError {
    pub rate: f64,
}

/// A square matrix of joint scoreline probabilities, indexed by
/// `(home goals, away goals)` over `[0, max_goals)` and normalised to unit
/// mass.
#[derive(Clone, Debug, PartialEq)]
pub struct ScoreGrid {
    matrix: Matrix<f64>,
}

impl ScoreGrid {
    /// Builds the joint distribution of home and away goal counts, modelled as
    /// independent Poisson variables with the given rates, truncated to
    /// `max_goals` per side and renormalised to reclaim the truncated mass.
    ///
    /// Independence is a modelling simplification, not an empirical fact; real
    /// match goals exhibit slight negative correlation through game-state
    /// effects.
    pub fn from_rates(
        home_rate: f64,
        away_rate: f64,
        max_goals: usize,
    ) -> Result<Self, InvalidRateError> {
        validate_rate(home_rate)?;
        validate_rate(away_rate)?;
        let home_probs = truncated_series(home_rate, max_goals)?;
        let away_probs = truncated_series(away_rate, max_goals)?;
        let mut matrix = Matrix::allocate(max_goals, max_goals);
        for (home_goals, &home_prob) in home_probs.iter().enumerate() {
            let row = matrix.row_slice_mut(home_goals);
            for (away_goals, &away_prob) in away_probs.iter().enumerate() {
                row[away_goals] = home_prob * away_prob;
            }
        }
        matrix.flatten_mut().normalise(1.0);
        Ok(Self { matrix })
    }

    pub fn max_goals(&self) -> usize {
        self.matrix.rows()
    }

    pub fn matrix(&self) -> &Matrix<f64> {
        &self.matrix
    }

    /// Probability of the exact scoreline; zero beyond the grid bounds.
    pub fn probability(&self, score: &Score) -> f64 {
        if (score.home as usize) < self.matrix.rows() && (score.away as usize) < self.matrix.cols()
        {
            self.matrix[(score.home as usize, score.away as usize)]
        } else {
            0.0
        }
    }

    pub fn win(&self, side: Side) -> f64 {
        let mut prob = 0.0;
        match side {
            Side::Home => {
                for row in 1..self.matrix.rows() {
                    for col in 0..row {
                        prob += self.matrix[(row, col)];
                    }
                }
            }
            Side::Away => {
                for col in 1..self.matrix.cols() {
                    for row in 0..col {
                        prob += self.matrix[(row, col)];
                    }
                }
            }
        }
        prob
    }

    pub fn draw(&self) -> f64 {
        let mut prob = 0.0;
        for index in 0..self.matrix.rows() {
            prob += self.matrix[(index, index)];
        }
        prob
    }

    pub fn home_win(&self) -> f64 {
        self.win(Side::Home)
    }

    pub fn away_win(&self) -> f64 {
        self.win(Side::Away)
    }

    /// Mean goals for each side under the (truncated) distribution.
    pub fn expectations(&self) -> (f64, f64) {
        let (mut home_expectation, mut away_expectation) = (0.0, 0.0);
        for home_goals in 0..self.matrix.rows() {
            for away_goals in 0..self.matrix.cols() {
                let prob = self.matrix[(home_goals, away_goals)];
                home_expectation += home_goals as f64 * prob;
                away_expectation += away_goals as f64 * prob;
            }
        }
        (home_expectation, away_expectation)
    }

    /// Copies the display-friendly `goals x goals` sub-range for rendering;
    /// the copy is not renormalised.
    pub fn truncated(&self, goals: usize) -> Matrix<f64> {
        let goals = usize::min(goals, self.matrix.rows());
        let mut truncated = Matrix::allocate(goals, goals);
        for row in 0..goals {
            truncated
                .row_slice_mut(row)
                .copy_from_slice(&self.matrix.row_slice(row)[..goals]);
        }
        truncated
    }
}

fn validate_rate(rate: f64) -> Result<(), InvalidRateError> {
    if rate.is_finite() && rate > 0.0 {
        Ok(())
    } else {
        Err(InvalidRateError { rate })
    }
}

/// A rate so far beyond the grid bound that its PMF underflows to zero within
/// the bound leaves no mass to normalise; rejecting it here keeps the grid
/// free of NaN.
fn truncated_series(rate: f64, max_goals: usize) -> Result<Vec<f64>, InvalidRateError> {
    let probs = poisson::series(rate, max_goals);
    if probs.sum() > 0.0 {
        Ok(probs)
    } else {
        Err(InvalidRateError { rate })
    }
}

#[cfg(test)]
mod tests;
