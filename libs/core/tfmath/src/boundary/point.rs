use crate::{
    combine::Combined,
    sampled::{BuildError, Sample, SampledFunction},
    EngineConfig,
};

use super::Numeric;

// -----------------------------------------------------------------------------
// PointDto
// -----------------------------------------------------------------------------
/// A stored point as it comes from (and goes back to) the storage layer.
///
/// Fields other than `x` and `y`, such as ids or indices, are ignored.
#[derive(
    Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize, schemars::JsonSchema,
)]
pub struct PointDto {
    pub x: Numeric,
    pub y: Numeric,
}

impl From<PointDto> for Sample {
    #[inline]
    fn from(p: PointDto) -> Self {
        Sample::new(p.x.into(), p.y.into())
    }
}

impl From<Sample> for PointDto {
    #[inline]
    fn from(s: Sample) -> Self {
        PointDto {
            x: s.x.into(),
            y: s.y.into(),
        }
    }
}

// -----------------------------------------------------------------------------
// PointSet
// -----------------------------------------------------------------------------
/// All points of one stored function, in storage order.
#[derive(
    Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize, schemars::JsonSchema,
)]
#[serde(transparent)]
pub struct PointSet(pub Vec<PointDto>);

impl PointSet {
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check the per-function sample cap and build a [`SampledFunction`].
    pub fn normalize(self, config: &EngineConfig) -> Result<SampledFunction, BuildError> {
        if let Some(limit) = config.max_samples {
            if self.len() > limit {
                return Err(BuildError::TooManySamples {
                    limit,
                    actual: self.len(),
                });
            }
        }
        SampledFunction::new(self.0, config)
    }
}

impl FromIterator<PointDto> for PointSet {
    #[inline]
    fn from_iter<T: IntoIterator<Item = PointDto>>(iter: T) -> Self {
        PointSet(iter.into_iter().collect())
    }
}

/// The `(x, y)` points of a combination result, ready to be stored as a new function.
#[inline]
pub fn to_point_dtos(combined: &Combined) -> Vec<PointDto> {
    combined.points().map(PointDto::from).collect()
}
