mod approx;
mod func1d;
mod lerp;

pub use approx::{approx_eq, near_zero};
pub use func1d::{DerX1d, Func1d};
pub use lerp::{extrapolate, lerp_clamped};
