//! The Poisson probability mass function.

use crate::factorial::Factorial;

/// Probability of observing exactly `k` events given a rate parameter `lambda`.
#[inline]
pub fn univariate(k: u8, lambda: f64, factorial: &impl Factorial) -> f64 {
    lambda.powi(k as i32) * f64::exp(-lambda) / factorial.get(k) as f64
}

/// The first `terms` entries of the PMF, computed by the multiplicative
/// recurrence `p(0) = e^-lambda`, `p(k) = p(k-1) * lambda / k`. Unlike
/// [`univariate`], this form never materialises a factorial and remains finite
/// for arbitrarily deep grids and large rates.
pub fn series(lambda: f64, terms: usize) -> Vec<f64> {
    let mut probs = Vec::with_capacity(terms);
    let mut prob = f64::exp(-lambda);
    for k in 0..terms {
        if k > 0 {
            prob *= lambda / k as f64;
        }
        probs.push(prob);
    }
    probs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factorial::Calculator;
    use crate::probs::SliceExt;
    use assert_float_eq::*;

    #[test]
    fn test_univariate() {
        assert_float_relative_eq!(0.36787944117144233, univariate(0, 1.0, &Calculator));
        assert_float_relative_eq!(0.36787944117144233, univariate(1, 1.0, &Calculator));
        assert_float_relative_eq!(0.18393972058572117, univariate(2, 1.0, &Calculator));
        assert_float_relative_eq!(0.0820849986238988, univariate(0, 2.5, &Calculator));
        assert_float_relative_eq!(0.205212496559747, univariate(1, 2.5, &Calculator));
        assert_float_relative_eq!(0.25651562069968376, univariate(2, 2.5, &Calculator));
    }

    #[test]
    fn series_agrees_with_univariate() {
        for lambda in [0.1, 1.0, 2.5, 6.3] {
            let series = series(lambda, 13);
            for (k, &prob) in series.iter().enumerate() {
                assert_float_relative_eq!(univariate(k as u8, lambda, &Calculator), prob);
            }
        }
    }

    #[test]
    fn series_mass_nearly_complete() {
        // truncation mass beyond 12 goals is negligible for football scoring rates
        for lambda in [0.5, 1.2, 1.5, 3.0] {
            let mass = series(lambda, 12).sum();
            assert!(mass > 0.999, "lambda: {lambda}, mass: {mass}");
        }
    }

    #[test]
    fn series_survives_large_rates() {
        let series = series(40.0, 100);
        assert!(series.iter().all(|p| p.is_finite()));
        assert_float_absolute_eq!(1.0, series.sum(), 1e-9);
    }
}
