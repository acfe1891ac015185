// -----------------------------------------------------------------------------
// BuildError
// -----------------------------------------------------------------------------
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BuildError {
    #[error("No finite samples are given")]
    Empty,
    #[error("Sample #{} is not finite: ({}, {})", .index, .x, .y)]
    NonFinite { index: usize, x: f64, y: f64 },
    #[error("Sample #{} is not in ascending order of x", .index)]
    Unordered { index: usize },
    #[error("Sample #{} duplicates the x of the previous sample", .index)]
    Duplicated { index: usize },
    #[error("Too many samples. limit: {}, actual: {}", .limit, .actual)]
    TooManySamples { limit: usize, actual: usize },
}
