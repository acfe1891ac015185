// -----------------------------------------------------------------------------
// approx_eq
// near_zero
// -----------------------------------------------------------------------------
/// Returns `true` if `a` and `b` differ by less than `eps`.
///
/// Exactly equal values are always considered equal, even when `eps` is zero.
#[inline]
pub fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
    a == b || (a - b).abs() < eps
}

/// Returns `true` if `|v| < eps`.
#[inline]
pub fn near_zero(v: f64, eps: f64) -> bool {
    v.abs() < eps
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(1.0, 1.0, 0.0, true)]
    #[case(1.0, 1.0 + 1e-12, 1e-9, true)]
    #[case(1.0, 1.0 + 1e-9, 1e-9, false)]
    #[case(1.0, 1.1, 1e-9, false)]
    #[case(-0.0, 0.0, 0.0, true)]
    #[case(f64::NAN, f64::NAN, 1e-9, false)]
    #[case(f64::INFINITY, f64::INFINITY, 1e-9, true)]
    fn test_approx_eq(#[case] a: f64, #[case] b: f64, #[case] eps: f64, #[case] expected: bool) {
        assert_eq!(approx_eq(a, b, eps), expected);
        assert_eq!(approx_eq(b, a, eps), expected);
    }

    #[rstest]
    #[case(0.0, 1e-9, true)]
    #[case(-1e-10, 1e-9, true)]
    #[case(1e-9, 1e-9, false)]
    #[case(0.0, 0.0, false)]
    #[case(f64::NAN, 1e-9, false)]
    fn test_near_zero(#[case] v: f64, #[case] eps: f64, #[case] expected: bool) {
        assert_eq!(near_zero(v, eps), expected);
    }
}
