use crate::num::approx_eq;

// -----------------------------------------------------------------------------
// Sample
// -----------------------------------------------------------------------------
/// One `(x, y)` point of a tabulated function.
#[derive(
    Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize, schemars::JsonSchema,
)]
pub struct Sample {
    pub x: f64,
    pub y: f64,
}

impl Sample {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Sample { x, y }
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Both coordinates match within the given tolerances.
    #[inline]
    pub fn approx_eq(&self, other: &Sample, eps_x: f64, eps_y: f64) -> bool {
        approx_eq(self.x, other.x, eps_x) && approx_eq(self.y, other.y, eps_y)
    }

    #[inline]
    pub(crate) fn as_pair(&self) -> (f64, f64) {
        (self.x, self.y)
    }
}

impl From<(f64, f64)> for Sample {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Sample { x, y }
    }
}

impl From<Sample> for (f64, f64) {
    #[inline]
    fn from(s: Sample) -> Self {
        (s.x, s.y)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(Sample::new(0.0, 0.0), true)]
    #[case(Sample::new(f64::NAN, 0.0), false)]
    #[case(Sample::new(0.0, f64::INFINITY), false)]
    #[case(Sample::new(f64::NEG_INFINITY, f64::NAN), false)]
    fn test_is_finite(#[case] sample: Sample, #[case] expected: bool) {
        assert_eq!(sample.is_finite(), expected);
    }

    #[test]
    fn test_approx_eq() {
        let lhs = Sample::new(1.0, 2.0);

        assert!(lhs.approx_eq(&Sample::new(1.0 + 1e-12, 2.0 - 1e-12), 1e-9, 1e-9));
        assert!(!lhs.approx_eq(&Sample::new(1.0 + 1e-6, 2.0), 1e-9, 1e-9));
        assert!(!lhs.approx_eq(&Sample::new(1.0, 2.0 + 1e-6), 1e-9, 1e-9));
    }

    #[test]
    fn test_serde() {
        let json = serde_json::json!({ "x": 1.5, "y": -2.0 });

        let tested: Sample = serde_json::from_value(json.clone()).unwrap();

        assert_eq!(tested, Sample::new(1.5, -2.0));
        assert_eq!(serde_json::to_value(tested).unwrap(), json);
    }
}
