use itertools::Itertools;

use crate::{num::approx_eq, sampled::SampledFunction};

// -----------------------------------------------------------------------------
// domain_union
// -----------------------------------------------------------------------------
/// Sorted union of the x-coordinates of both functions.
///
/// A value within `eps_x` of the previously kept value is merged into it,
/// so the smaller one survives; on an exact tie the value from `lhs` is kept.
pub fn domain_union(lhs: &SampledFunction, rhs: &SampledFunction, eps_x: f64) -> Vec<f64> {
    lhs.xs()
        .merge(rhs.xs())
        .coalesce(|prev, next| {
            if approx_eq(prev, next, eps_x) {
                Ok(prev)
            } else {
                Err((prev, next))
            }
        })
        .collect()
}
