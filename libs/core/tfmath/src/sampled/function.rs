use itertools::Itertools;

use crate::{
    num::{approx_eq, extrapolate, lerp_clamped, near_zero, DerX1d, Func1d},
    EngineConfig, Tolerance,
};

use super::{normalize::normalize, BuildError, Sample};

// -----------------------------------------------------------------------------
// SampledFunction
// -----------------------------------------------------------------------------
/// An immutable tabulated function: at least one finite sample, strictly increasing in x.
///
/// Evaluation interpolates linearly between neighboring samples and
/// extends the first and last segments linearly outside of the sampled range.
#[derive(Debug, Clone, PartialEq, serde::Serialize, schemars::JsonSchema)]
pub struct SampledFunction {
    samples: Vec<Sample>,
    tolerance: Tolerance,
}

/// Where a query point falls relative to the samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Location {
    /// The function has exactly one sample.
    Single,
    /// At or below the first sample.
    Below,
    /// At or above the last sample.
    Above,
    /// Matches the sample at the index.
    Exact(usize),
    /// Strictly inside the interval `[i - 1, i]`.
    Between(usize),
}

//
// ctors
//
impl SampledFunction {
    /// Build from raw samples which may be unsorted, contain x-duplicates or non-finite values.
    ///
    /// Duplicates are resolved by [`EngineConfig::duplicates`] and
    /// non-finite samples are handled by [`EngineConfig::non_finite`].
    /// [`EngineConfig::max_samples`] is not checked here; see [`crate::boundary`].
    pub fn new<S>(
        samples: impl IntoIterator<Item = S>,
        config: &EngineConfig,
    ) -> Result<Self, BuildError>
    where
        S: Into<Sample>,
    {
        let samples = normalize(samples.into_iter().map(Into::into), config)?;
        Ok(SampledFunction {
            samples,
            tolerance: config.tolerance,
        })
    }

    /// Build from samples which are already sorted and free of x-duplicates.
    ///
    /// Nothing is repaired; the first violation is returned as an error.
    pub fn from_sorted(samples: Vec<Sample>, tolerance: Tolerance) -> Result<Self, BuildError> {
        if samples.is_empty() {
            return Err(BuildError::Empty);
        }
        if let Some((index, s)) = samples.iter().find_position(|s| !s.is_finite()) {
            return Err(BuildError::NonFinite {
                index,
                x: s.x,
                y: s.y,
            });
        }
        for (i, (prev, next)) in samples.iter().tuple_windows().enumerate() {
            if approx_eq(prev.x, next.x, tolerance.eps_x()) {
                return Err(BuildError::Duplicated { index: i + 1 });
            }
            if next.x < prev.x {
                return Err(BuildError::Unordered { index: i + 1 });
            }
        }
        Ok(SampledFunction { samples, tolerance })
    }
}

//
// methods
//
impl SampledFunction {
    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    #[inline]
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    #[inline]
    pub fn into_samples(self) -> Vec<Sample> {
        self.samples
    }

    #[inline]
    pub fn xs(&self) -> impl ExactSizeIterator<Item = f64> + '_ {
        self.samples.iter().map(|s| s.x)
    }

    #[inline]
    pub fn ys(&self) -> impl ExactSizeIterator<Item = f64> + '_ {
        self.samples.iter().map(|s| s.y)
    }

    #[inline]
    pub fn first(&self) -> &Sample {
        &self.samples[0]
    }

    #[inline]
    pub fn last(&self) -> &Sample {
        &self.samples[self.samples.len() - 1]
    }

    /// `(min_x, max_x)` of the samples.
    #[inline]
    pub fn domain(&self) -> (f64, f64) {
        (self.first().x, self.last().x)
    }

    #[inline]
    pub fn tolerance(&self) -> &Tolerance {
        &self.tolerance
    }

    /// Evaluate the function at `x`.
    ///
    /// * A single-sample function is constant.
    /// * At or beyond either end (within `eps_x`), the boundary segment is extended linearly.
    /// * A query within `eps_x` of a sample returns that sample's y as-is.
    /// * Otherwise the bracketing samples are interpolated linearly.
    ///
    /// Returns `NaN` only if `x` is `NaN`.
    pub fn value_at(&self, x: f64) -> f64 {
        if x.is_nan() {
            return f64::NAN;
        }
        let n = self.samples.len();
        match self.locate(x) {
            Location::Single => self.samples[0].y,
            Location::Below => {
                let (s0, s1) = (&self.samples[0], &self.samples[1]);
                if self.is_degenerate(s0, s1) {
                    s0.y
                } else {
                    extrapolate(s0.as_pair(), s1.as_pair(), s0.as_pair(), x)
                }
            }
            Location::Above => {
                let (s0, s1) = (&self.samples[n - 2], &self.samples[n - 1]);
                if self.is_degenerate(s0, s1) {
                    s1.y
                } else {
                    extrapolate(s0.as_pair(), s1.as_pair(), s1.as_pair(), x)
                }
            }
            Location::Exact(i) => self.samples[i].y,
            Location::Between(i) => {
                let (s0, s1) = (&self.samples[i - 1], &self.samples[i]);
                if self.is_degenerate(s0, s1) {
                    s0.y
                } else {
                    lerp_clamped(x, s0.as_pair(), s1.as_pair())
                }
            }
        }
    }

    /// Slope of the segment which [`SampledFunction::value_at`] uses around `x`.
    ///
    /// At an interior sample the segment on its right is used.
    /// Single-sample functions and degenerate segments have zero slope.
    pub fn slope_at(&self, x: f64) -> f64 {
        if x.is_nan() {
            return f64::NAN;
        }
        let n = self.samples.len();
        let (l, r) = match self.locate(x) {
            Location::Single => return 0.0,
            Location::Below => (0, 1),
            Location::Above => (n - 2, n - 1),
            Location::Exact(i) => (i, i + 1),
            Location::Between(i) => (i - 1, i),
        };
        let (s0, s1) = (&self.samples[l], &self.samples[r]);
        if self.is_degenerate(s0, s1) {
            0.0
        } else {
            (s1.y - s0.y) / (s1.x - s0.x)
        }
    }

    #[inline]
    fn is_degenerate(&self, s0: &Sample, s1: &Sample) -> bool {
        near_zero(s1.x - s0.x, self.tolerance.eps_x())
    }

    fn locate(&self, x: f64) -> Location {
        let n = self.samples.len();
        if n == 1 {
            return Location::Single;
        }
        let eps_x = self.tolerance.eps_x();
        if x <= self.first().x + eps_x {
            return Location::Below;
        }
        if x >= self.last().x - eps_x {
            return Location::Above;
        }

        // smallest index whose x is not less than the query
        let i = self.samples.partition_point(|s| s.x < x);
        debug_assert!(
            0 < i && i < n,
            "bracketing interval must exist inside the domain"
        );
        if approx_eq(self.samples[i].x, x, eps_x) {
            Location::Exact(i)
        } else if approx_eq(self.samples[i - 1].x, x, eps_x) {
            Location::Exact(i - 1)
        } else {
            Location::Between(i)
        }
    }
}

impl Func1d<f64> for SampledFunction {
    type Output = f64;

    #[inline]
    fn eval(&self, x: &f64) -> f64 {
        self.value_at(*x)
    }
}

impl DerX1d<f64> for SampledFunction {
    type DerX = f64;

    #[inline]
    fn der_x(&self, x: &f64) -> f64 {
        self.slope_at(*x)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use rstest::rstest;

    use super::*;
    use crate::DuplicatePolicy;

    fn func(pairs: &[(f64, f64)]) -> SampledFunction {
        SampledFunction::new(pairs.iter().copied(), &EngineConfig::default()).unwrap()
    }

    #[test]
    fn test_new_normalizes() {
        let tested = func(&[(2.0, 4.0), (0.0, 0.0), (1.0, 1.0), (1.0, 5.0)]);

        assert_eq!(tested.len(), 3);
        assert!(!tested.is_empty());
        assert_eq!(tested.xs().collect::<Vec<_>>(), vec![0.0, 1.0, 2.0]);
        assert_eq!(tested.ys().collect::<Vec<_>>(), vec![0.0, 1.0, 4.0]);
        assert_eq!(tested.domain(), (0.0, 2.0));
        assert_eq!(tested.first(), &Sample::new(0.0, 0.0));
        assert_eq!(tested.last(), &Sample::new(2.0, 4.0));
    }

    #[test]
    fn test_new_empty() {
        let tested = SampledFunction::new(Vec::<Sample>::new(), &EngineConfig::default());

        assert_eq!(tested.unwrap_err(), BuildError::Empty);
    }

    #[rstest]
    #[case::ok(vec![(0.0, 0.0), (1.0, 1.0)], None)]
    #[case::empty(vec![], Some(BuildError::Empty))]
    #[case::unordered(vec![(0.0, 0.0), (2.0, 1.0), (1.0, 1.0)], Some(BuildError::Unordered { index: 2 }))]
    #[case::duplicated(vec![(0.0, 0.0), (1.0, 1.0), (1.0, 2.0)], Some(BuildError::Duplicated { index: 2 }))]
    #[case::near_duplicated(vec![(0.0, 0.0), (1e-12, 1.0)], Some(BuildError::Duplicated { index: 1 }))]
    #[case::non_finite(vec![(0.0, 0.0), (1.0, f64::INFINITY)], Some(BuildError::NonFinite { index: 1, x: 1.0, y: f64::INFINITY }))]
    fn test_from_sorted(#[case] pairs: Vec<(f64, f64)>, #[case] expected: Option<BuildError>) {
        let samples = pairs.into_iter().map(Sample::from).collect::<Vec<_>>();

        let tested = SampledFunction::from_sorted(samples.clone(), Tolerance::default());

        match expected {
            None => assert_eq!(tested.unwrap().samples(), samples.as_slice()),
            Some(err) => assert_eq!(tested.unwrap_err(), err),
        }
    }

    #[rstest]
    #[case(DuplicatePolicy::FirstWins)]
    #[case(DuplicatePolicy::LastWins)]
    #[case(DuplicatePolicy::Average)]
    fn test_new_output_is_valid_sorted_input(#[case] policy: DuplicatePolicy) {
        let config = EngineConfig::default().with_duplicates(policy);
        let tested = SampledFunction::new(
            [(1.0 + 0.9e-9, 10.0), (1.0, 20.0), (1.0 + 1.5e-9, 30.0), (2.0, 0.0)],
            &config,
        )
        .unwrap();

        let rebuilt = SampledFunction::from_sorted(tested.samples().to_vec(), *tested.tolerance());

        assert_eq!(rebuilt.unwrap(), tested);
        assert_eq!(tested.derivative().unwrap().len(), tested.len());
        assert_eq!(
            crate::combine::combine(&tested, &tested, crate::combine::BinaryOp::Add)
                .unwrap()
                .len(),
            tested.len()
        );
    }

    #[rstest]
    #[case(-100.0)]
    #[case(0.0)]
    #[case(5.0)]
    #[case(1e300)]
    fn test_single_sample_is_constant(#[case] x: f64) {
        let tested = func(&[(5.0, 10.0)]);

        assert_eq!(tested.value_at(x), 10.0);
        assert_eq!(tested.slope_at(x), 0.0);
    }

    #[test]
    fn test_identity_at_samples() {
        let pairs = [(-1.3, 0.1), (0.1, 0.7), (0.3, 0.1 + 0.2), (2.9, -4.4), (3.7, 1e-3)];
        let tested = func(&pairs);

        for (x, y) in pairs {
            assert_eq!(tested.value_at(x), y);
        }
    }

    #[rstest]
    #[case(0.5, 0.5)]
    #[case(1.5, 2.5)]
    #[case(1.25, 1.75)]
    #[case(0.1, 0.1)]
    fn test_interpolation(#[case] x: f64, #[case] expected: f64) {
        let tested = func(&[(0.0, 0.0), (1.0, 1.0), (2.0, 4.0)]);

        assert_abs_diff_eq!(tested.value_at(x), expected, epsilon = 1e-12);
    }

    #[test]
    fn test_interpolation_bounds() {
        let pairs = [(0.0, 3.0), (0.7, -1.0), (1.1, 8.0), (4.0, 8.0), (9.5, 2.0)];
        let tested = func(&pairs);

        for (s0, s1) in pairs.iter().tuple_windows() {
            for k in 1..50 {
                let x = s0.0 + (s1.0 - s0.0) * (k as f64) / 50.0;
                let y = tested.value_at(x);

                assert!(y >= s0.1.min(s1.1), "{} at {}", y, x);
                assert!(y <= s0.1.max(s1.1), "{} at {}", y, x);
            }
        }
    }

    #[rstest]
    #[case(-1.0, -2.0)]
    #[case(-10.0, -20.0)]
    #[case(5.0, 10.0)]
    #[case(0.5, 1.0)]
    fn test_extrapolation_two_samples(#[case] x: f64, #[case] expected: f64) {
        let tested = func(&[(0.0, 0.0), (1.0, 2.0)]);

        assert_abs_diff_eq!(tested.value_at(x), expected, epsilon = 1e-12);
    }

    #[rstest]
    #[case(-1.0)]
    #[case(-0.25)]
    #[case(-1e6)]
    fn test_extrapolation_below_uses_first_segment(#[case] x: f64) {
        let (x0, y0, x1, y1) = (0.0, 1.0, 0.5, 2.0);
        let tested = func(&[(x0, y0), (x1, y1), (3.0, -7.0)]);

        let expected = y0 + (x - x0) * (y1 - y0) / (x1 - x0);

        assert_abs_diff_eq!(tested.value_at(x), expected, epsilon = 1e-9);
        assert_abs_diff_eq!(tested.slope_at(x), 2.0, epsilon = 1e-12);
    }

    #[rstest]
    #[case(4.0)]
    #[case(3.25)]
    #[case(1e6)]
    fn test_extrapolation_above_uses_last_segment(#[case] x: f64) {
        let (xn1, yn1, xn, yn) = (1.0, 5.0, 3.0, -1.0);
        let tested = func(&[(0.0, 0.0), (xn1, yn1), (xn, yn)]);

        let expected = yn1 + (x - xn1) * (yn - yn1) / (xn - xn1);

        assert_abs_diff_eq!(tested.value_at(x), expected, epsilon = 1e-6);
        assert_abs_diff_eq!(tested.slope_at(x), -3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_degenerate_boundary_segments() {
        // samples closer than eps_x can only come from `from_sorted` with a coarser tolerance
        let tolerance = Tolerance::new(0.0, 1e-9).unwrap();
        let samples = vec![
            Sample::new(0.0, 1.0),
            Sample::new(1e-12, 2.0),
            Sample::new(1.0, 3.0),
            Sample::new(1.0 + 1e-12, 4.0),
        ];
        let tested = SampledFunction::from_sorted(samples, tolerance).unwrap();
        let tested = SampledFunction {
            tolerance: Tolerance::new(1e-9, 1e-9).unwrap(),
            ..tested
        };

        assert_eq!(tested.value_at(-5.0), 1.0);
        assert_eq!(tested.value_at(5.0), 4.0);
        assert_eq!(tested.slope_at(-5.0), 0.0);
        assert_eq!(tested.slope_at(5.0), 0.0);
    }

    #[test]
    fn test_query_within_eps_of_sample() {
        let tested = func(&[(0.0, 0.0), (1.0, 1.0), (2.0, 4.0), (3.0, 9.0)]);

        assert_eq!(tested.value_at(1.0 + 1e-12), 1.0);
        assert_eq!(tested.value_at(2.0 - 1e-12), 4.0);
    }

    #[rstest]
    #[case(0.5, 1.0)]
    #[case(1.0, 3.0)]
    #[case(1.5, 3.0)]
    #[case(2.0, 3.0)]
    #[case(-3.0, 1.0)]
    fn test_slope_at(#[case] x: f64, #[case] expected: f64) {
        let tested = func(&[(0.0, 0.0), (1.0, 1.0), (2.0, 4.0)]);

        assert_abs_diff_eq!(tested.slope_at(x), expected, epsilon = 1e-12);
        assert_abs_diff_eq!(tested.der_x(&x), expected, epsilon = 1e-12);
    }

    #[test]
    fn test_non_finite_query() {
        let tested = func(&[(0.0, 0.0), (1.0, 2.0)]);

        assert!(tested.value_at(f64::NAN).is_nan());
        assert!(tested.slope_at(f64::NAN).is_nan());
        assert_eq!(tested.value_at(f64::INFINITY), f64::INFINITY);
        assert_eq!(tested.value_at(f64::NEG_INFINITY), f64::NEG_INFINITY);
    }

    #[test]
    fn test_func1d() {
        let tested = func(&[(0.0, 0.0), (2.0, 2.0)]);

        assert_eq!(tested.eval(&1.0), 1.0);
        assert_eq!((&tested).eval(&3.0), 3.0);
        assert_eq!(tested.der_0_x(&1.0), (1.0, 1.0));
    }

    #[test]
    fn test_large_table_binary_search() {
        let pairs = (0..5000)
            .map(|i| {
                let x = i as f64 * 0.5;
                (x, x * x)
            })
            .collect::<Vec<_>>();
        let tested = func(&pairs);

        for i in 0..4999 {
            let x = i as f64 * 0.5 + 0.25;
            let (y0, y1) = (pairs[i].1, pairs[i + 1].1);

            assert_abs_diff_eq!(tested.value_at(x), (y0 + y1) / 2.0, epsilon = 1e-6);
        }
    }
}
