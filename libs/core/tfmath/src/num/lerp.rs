// -----------------------------------------------------------------------------
// lerp_clamped
// extrapolate
// -----------------------------------------------------------------------------
/// Linear interpolation between `(x0, y0)` and `(x1, y1)` evaluated at `x`.
///
/// The result is clamped into the closed range spanned by `y0` and `y1`,
/// so rounding never lets the value leave the segment.
/// Callers must ensure `x0 != x1`.
#[inline]
pub fn lerp_clamped(x: f64, (x0, y0): (f64, f64), (x1, y1): (f64, f64)) -> f64 {
    let t = (x - x0) / (x1 - x0);
    let y = y0 + t * (y1 - y0);
    let (lo, hi) = if y0 <= y1 { (y0, y1) } else { (y1, y0) };
    y.clamp(lo, hi)
}

/// Extends the line through `(xa, ya)` and `(xb, yb)` and evaluates it at `x`.
///
/// The line is anchored at `anchor`, which must be one of the two points,
/// so that `extrapolate(.., anchor, anchor.0) == anchor.1` holds exactly.
/// A flat line yields `y_anchor` for every `x`, including infinite ones.
/// Callers must ensure `xa != xb`.
#[inline]
pub fn extrapolate(
    (xa, ya): (f64, f64),
    (xb, yb): (f64, f64),
    (x_anchor, y_anchor): (f64, f64),
    x: f64,
) -> f64 {
    let slope = (yb - ya) / (xb - xa);
    if slope == 0.0 {
        return y_anchor;
    }
    y_anchor + (x - x_anchor) * slope
}
