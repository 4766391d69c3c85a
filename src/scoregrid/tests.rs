use super::*;
use crate::probs::SliceExt;
use assert_float_eq::*;

#[test]
fn cells_nonnegative_and_sum_to_unity() {
    for (home_rate, away_rate) in [(0.3, 0.4), (1.5, 1.2), (2.8, 0.9), (6.5, 5.5)] {
        let grid = ScoreGrid::from_rates(home_rate, away_rate, DEFAULT_MAX_GOALS).unwrap();
        assert!(grid.matrix().flatten().iter().all(|&p| p >= 0.0));
        assert_float_absolute_eq!(1.0, grid.matrix().flatten().sum(), 1e-9);
    }
}

#[test]
fn summary_probabilities_sum_to_unity() {
    let grid = ScoreGrid::from_rates(1.5, 1.2, DEFAULT_MAX_GOALS).unwrap();
    let total = grid.home_win() + grid.draw() + grid.away_win();
    assert_float_absolute_eq!(1.0, total, 1e-9);
    for prob in [grid.home_win(), grid.draw(), grid.away_win()] {
        assert!(prob > 0.0 && prob < 1.0, "prob: {prob}");
    }
}

#[test]
fn truncation_mass_negligible_at_default_bound() {
    use crate::poisson;
    let home_mass = poisson::series(1.5, DEFAULT_MAX_GOALS).sum();
    let away_mass = poisson::series(1.2, DEFAULT_MAX_GOALS).sum();
    assert!(home_mass * away_mass > 0.999);
}

#[test]
fn exact_scoreline_probability() {
    let grid = ScoreGrid::from_rates(1.0, 1.0, DEFAULT_MAX_GOALS).unwrap();
    // P(0-0) = e^-1 * e^-1, modulo the truncation correction
    assert_float_absolute_eq!(f64::exp(-2.0), grid.probability(&Score::new(0, 0)), 1e-6);
    assert_eq!(0.0, grid.probability(&Score::new(50, 0)));
}

#[test]
fn venue_swap_mirrors_summary_probabilities() {
    let grid = ScoreGrid::from_rates(1.7, 1.1, DEFAULT_MAX_GOALS).unwrap();
    let swapped = ScoreGrid::from_rates(1.1, 1.7, DEFAULT_MAX_GOALS).unwrap();
    assert_float_absolute_eq!(grid.home_win(), swapped.away_win(), 1e-12);
    assert_float_absolute_eq!(grid.away_win(), swapped.home_win(), 1e-12);
    assert_float_absolute_eq!(grid.draw(), swapped.draw(), 1e-12);
}

#[test]
fn symmetric_rates_balance_win_probabilities() {
    let grid = ScoreGrid::from_rates(1.3, 1.3, DEFAULT_MAX_GOALS).unwrap();
    assert_float_absolute_eq!(grid.home_win(), grid.away_win(), 1e-12);
}

#[test]
fn stronger_attack_shifts_the_outcome() {
    let grid = ScoreGrid::from_rates(2.4, 0.8, DEFAULT_MAX_GOALS).unwrap();
    assert!(grid.home_win() > grid.away_win());
    assert!(grid.home_win() > grid.draw());
}

#[test]
fn expectations_approximate_rates() {
    let grid = ScoreGrid::from_rates(1.5, 1.2, DEFAULT_MAX_GOALS).unwrap();
    let (home_expectation, away_expectation) = grid.expectations();
    assert_float_absolute_eq!(1.5, home_expectation, 1e-3);
    assert_float_absolute_eq!(1.2, away_expectation, 1e-3);
}

#[test]
fn truncated_display_range() {
    let grid = ScoreGrid::from_rates(1.5, 1.2, DEFAULT_MAX_GOALS).unwrap();
    let display = grid.truncated(6);
    assert_eq!(6, display.rows());
    assert_eq!(6, display.cols());
    for row in 0..6 {
        for col in 0..6 {
            assert_eq!(grid.matrix()[(row, col)], display[(row, col)]);
        }
    }

    // requesting more than the grid holds caps at the grid bound
    let capped = grid.truncated(100);
    assert_eq!(DEFAULT_MAX_GOALS, capped.rows());
}

#[test]
fn rate_beyond_grid_mass_rejected() {
    // exp(-800) underflows to zero, leaving no Poisson mass within the grid
    // bound to normalise
    let error = ScoreGrid::from_rates(800.0, 1.2, DEFAULT_MAX_GOALS).unwrap_err();
    assert_eq!(800.0, error.rate);
    assert!(ScoreGrid::from_rates(1.2, 800.0, DEFAULT_MAX_GOALS).is_err());

    // a merely large rate still carries usable mass
    let grid = ScoreGrid::from_rates(40.0, 1.2, DEFAULT_MAX_GOALS).unwrap();
    assert!(grid.matrix().flatten().iter().all(|p| p.is_finite()));
    assert_float_absolute_eq!(1.0, grid.matrix().flatten().sum(), 1e-9);
}

#[test]
fn invalid_rates_rejected() {
    for rate in [0.0, -1.5, f64::NAN, f64::INFINITY] {
        assert!(
            ScoreGrid::from_rates(rate, 1.0, DEFAULT_MAX_GOALS).is_err(),
            "rate: {rate}"
        );
        assert!(
            ScoreGrid::from_rates(1.0, rate, DEFAULT_MAX_GOALS).is_err(),
            "rate: {rate}"
        );
    }
    let error = ScoreGrid::from_rates(-1.5, 1.0, DEFAULT_MAX_GOALS).unwrap_err();
    assert_eq!("invalid expected-goals rate -1.5", error.to_string());
}
