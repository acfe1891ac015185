use super::{BuildError, Sample, SampledFunction};

impl SampledFunction {
    /// Numerical derivative on the same x-grid.
    ///
    /// Forward difference at the first sample, backward difference at the last one
    /// and central difference `(y[i+1] - y[i-1]) / (x[i+1] - x[i-1])` in between.
    /// A single-sample function derives to zero.
    ///
    /// Fails with [`BuildError::NonFinite`] if a difference quotient overflows.
    pub fn derivative(&self) -> Result<SampledFunction, BuildError> {
        let s = self.samples();
        let n = s.len();
        if n == 1 {
            let derived = vec![Sample::new(s[0].x, 0.0)];
            return SampledFunction::from_sorted(derived, *self.tolerance());
        }

        let quotient = |l: &Sample, r: &Sample| (r.y - l.y) / (r.x - l.x);
        let derived = (0..n)
            .map(|i| {
                let dy = match i {
                    0 => quotient(&s[0], &s[1]),
                    i if i == n - 1 => quotient(&s[n - 2], &s[n - 1]),
                    i => quotient(&s[i - 1], &s[i + 1]),
                };
                Sample::new(s[i].x, dy)
            })
            .collect();
        SampledFunction::from_sorted(derived, *self.tolerance())
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::EngineConfig;

    fn func(pairs: &[(f64, f64)]) -> SampledFunction {
        SampledFunction::new(pairs.iter().copied(), &EngineConfig::default()).unwrap()
    }

    #[test]
    fn test_derivative_of_parabola() {
        let tested = func(&[(0.0, 0.0), (1.0, 1.0), (2.0, 4.0), (3.0, 9.0)])
            .derivative()
            .unwrap();

        let expected = [(0.0, 1.0), (1.0, 2.0), (2.0, 4.0), (3.0, 5.0)];
        assert_eq!(tested.len(), expected.len());
        for (s, (x, dy)) in tested.samples().iter().zip(expected) {
            assert_eq!(s.x, x);
            assert_abs_diff_eq!(s.y, dy, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_derivative_of_line_is_constant() {
        let tested = func(&[(-1.0, 1.0), (0.5, 4.0), (4.0, 11.0)])
            .derivative()
            .unwrap();

        for s in tested.samples() {
            assert_abs_diff_eq!(s.y, 2.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_derivative_of_two_samples() {
        let tested = func(&[(0.0, 0.0), (1.0, 2.0)]).derivative().unwrap();

        assert_eq!(tested.samples(), &[Sample::new(0.0, 2.0), Sample::new(1.0, 2.0)]);
    }

    #[test]
    fn test_derivative_of_single_sample() {
        let tested = func(&[(5.0, 10.0)]).derivative().unwrap();

        assert_eq!(tested.samples(), &[Sample::new(5.0, 0.0)]);
    }

    #[test]
    fn test_derivative_overflow() {
        let tested = func(&[(0.0, -f64::MAX), (1e-3, f64::MAX)]).derivative();

        assert_eq!(
            tested.unwrap_err(),
            BuildError::NonFinite {
                index: 0,
                x: 0.0,
                y: f64::INFINITY
            }
        );
    }
}
