use crate::{
    sampled::{BuildError, Sample, SampledFunction},
    EngineConfig,
};

use super::BinaryOp;

// -----------------------------------------------------------------------------
// ResultSample
// -----------------------------------------------------------------------------
/// One point of a combined function together with the operand values which produced it.
#[derive(
    Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize, schemars::JsonSchema,
)]
pub struct ResultSample {
    pub x: f64,
    pub y: f64,
    /// Value of the left operand at `x`.
    pub y_a: f64,
    /// Value of the right operand at `x`.
    pub y_b: f64,
}

impl ResultSample {
    #[inline]
    pub fn sample(&self) -> Sample {
        Sample::new(self.x, self.y)
    }
}

// -----------------------------------------------------------------------------
// Combined
// -----------------------------------------------------------------------------
/// Successful outcome of a combination, sorted by x.
#[derive(Debug, Clone, PartialEq, serde::Serialize, schemars::JsonSchema)]
pub struct Combined {
    op: BinaryOp,
    samples: Vec<ResultSample>,
}

impl Combined {
    #[inline]
    pub(super) fn new(op: BinaryOp, samples: Vec<ResultSample>) -> Self {
        Combined { op, samples }
    }

    #[inline]
    pub fn op(&self) -> BinaryOp {
        self.op
    }

    #[inline]
    pub fn samples(&self) -> &[ResultSample] {
        &self.samples
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// The `(x, y)` points to persist. Operand values are left out.
    #[inline]
    pub fn points(&self) -> impl ExactSizeIterator<Item = Sample> + '_ {
        self.samples.iter().map(ResultSample::sample)
    }

    /// Turn the result into a function of its own, e.g. to combine it again.
    pub fn into_function(self, config: &EngineConfig) -> Result<SampledFunction, BuildError> {
        let samples = self.samples.iter().map(ResultSample::sample).collect();
        SampledFunction::from_sorted(samples, config.tolerance)
    }

    /// Display name for the stored result, e.g. `"f + g"`.
    #[inline]
    pub fn suggested_name(&self, lhs: &str, rhs: &str) -> String {
        format!("{} {} {}", lhs, self.op.symbol(), rhs)
    }
}

impl<'a> IntoIterator for &'a Combined {
    type Item = &'a ResultSample;
    type IntoIter = std::slice::Iter<'a, ResultSample>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}
