mod combiner;
mod error;
mod op;
mod result;
mod union;

pub use combiner::{combine, Combiner};
pub use error::CombineError;
pub use op::BinaryOp;
pub use result::{Combined, ResultSample};
pub use union::domain_union;
