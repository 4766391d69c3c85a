//! Utilities for working with probabilities.

pub trait SliceExt {
    fn sum(&self) -> f64;
    fn normalise(&mut self, target: f64) -> f64;
    fn scale(&mut self, factor: f64);
}
impl SliceExt for [f64] {
    fn sum(&self) -> f64 {
        self.iter().sum()
    }

    fn normalise(&mut self, target: f64) -> f64 {
        let sum = self.sum();
        self.scale(target / sum);
        sum
    }

    fn scale(&mut self, factor: f64) {
        for element in self {
            *element *= factor;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_float_eq::*;

    #[test]
    fn sum() {
        let data = [0.0, 0.1, 0.2];
        assert_f64_near!(0.3, data.sum(), 1);
    }

    #[test]
    fn normalise() {
        let mut data = [0.05, 0.1, 0.15, 0.2];
        let sum = data.normalise(1.0);
        assert_f64_near!(0.5, sum, 1);
        assert_f64_near!(0.1, data[0], 1);
        assert_f64_near!(0.2, data[1], 1);
        assert_f64_near!(0.3, data[2], 1);
        assert_f64_near!(0.4, data[3], 1);
    }

    #[test]
    fn scale() {
        let mut data = [0.1, 0.2, 0.3];
        data.scale(10.0);
        assert_f64_near!(1.0, data[0], 1);
        assert_f64_near!(2.0, data[1], 1);
        assert_f64_near!(3.0, data[2], 1);
    }
}
