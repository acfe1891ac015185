//! Normalization of loosely-typed point data handed over by the storage layer.
//!
//! Point objects may carry their coordinates as JSON numbers or numeric strings,
//! together with fields the engine does not care about.
mod numeric;
mod point;

pub use numeric::Numeric;
pub use point::{to_point_dtos, PointDto, PointSet};
