use crate::{num::near_zero, sampled::SampledFunction, EngineConfig};

use super::{domain_union, BinaryOp, CombineError, Combined, ResultSample};

// -----------------------------------------------------------------------------
// Combiner
// -----------------------------------------------------------------------------
/// Combines two sampled functions point-wise over the union of their x-grids.
///
/// Stateless apart from its configuration; every call is independent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Combiner {
    config: EngineConfig,
}

impl Combiner {
    #[inline]
    pub fn new(config: EngineConfig) -> Self {
        Combiner { config }
    }

    #[inline]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Evaluate `lhs op rhs` at every x of either function.
    ///
    /// The first failure aborts the whole combination, so the result is either
    /// complete or an error describing where and why it failed.
    pub fn combine(
        &self,
        lhs: &SampledFunction,
        rhs: &SampledFunction,
        op: BinaryOp,
    ) -> Result<Combined, CombineError> {
        let xs = domain_union(lhs, rhs, self.config.tolerance.eps_x());
        log::debug!(
            "Combining {} and {} samples with '{}' over {} points",
            lhs.len(),
            rhs.len(),
            op,
            xs.len()
        );

        let samples = xs
            .into_iter()
            .map(|x| self.combine_at(lhs, rhs, op, x))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|err| {
                log::warn!("Combination aborted: {}", err);
                err
            })?;
        Ok(Combined::new(op, samples))
    }

    fn combine_at(
        &self,
        lhs: &SampledFunction,
        rhs: &SampledFunction,
        op: BinaryOp,
        x: f64,
    ) -> Result<ResultSample, CombineError> {
        let y_a = lhs.value_at(x);
        let y_b = rhs.value_at(x);
        if !y_a.is_finite() || !y_b.is_finite() {
            return Err(CombineError::NonFiniteOperand {
                op,
                x,
                lhs: y_a,
                rhs: y_b,
            });
        }
        let zero_divisor = y_b == 0.0 || near_zero(y_b, self.config.tolerance.eps_y());
        if op == BinaryOp::Divide && zero_divisor {
            return Err(CombineError::DivisionByZero {
                x,
                lhs: y_a,
                rhs: y_b,
            });
        }

        let y = op.apply(y_a, y_b);
        if !y.is_finite() {
            return Err(CombineError::NonFiniteResult {
                op,
                x,
                lhs: y_a,
                rhs: y_b,
                value: y,
            });
        }
        Ok(ResultSample { x, y, y_a, y_b })
    }
}

/// [`Combiner::combine`] with the default configuration.
#[inline]
pub fn combine(
    lhs: &SampledFunction,
    rhs: &SampledFunction,
    op: BinaryOp,
) -> Result<Combined, CombineError> {
    Combiner::default().combine(lhs, rhs, op)
}
