mod derivative;
mod error;
mod function;
mod normalize;
mod sample;

pub use error::BuildError;
pub use function::SampledFunction;
pub use sample::Sample;
