use super::BinaryOp;

// -----------------------------------------------------------------------------
// CombineError
// -----------------------------------------------------------------------------
/// Reason why a combination was aborted. No partial result survives any of these.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CombineError {
    #[error("Division by near-zero at x = {}: {} / {}", .x, .lhs, .rhs)]
    DivisionByZero { x: f64, lhs: f64, rhs: f64 },
    #[error("Operand of '{}' is not finite at x = {}: lhs = {}, rhs = {}", .op, .x, .lhs, .rhs)]
    NonFiniteOperand { op: BinaryOp, x: f64, lhs: f64, rhs: f64 },
    #[error("Result of '{}' is not finite at x = {}: {} {} {} = {}", .op, .x, .lhs, .op.symbol(), .rhs, .value)]
    NonFiniteResult {
        op: BinaryOp,
        x: f64,
        lhs: f64,
        rhs: f64,
        value: f64,
    },
}

impl CombineError {
    #[inline]
    pub fn op(&self) -> BinaryOp {
        match self {
            CombineError::DivisionByZero { .. } => BinaryOp::Divide,
            CombineError::NonFiniteOperand { op, .. } | CombineError::NonFiniteResult { op, .. } => {
                *op
            }
        }
    }

    /// The x at which the combination failed.
    #[inline]
    pub fn x(&self) -> f64 {
        match self {
            CombineError::DivisionByZero { x, .. }
            | CombineError::NonFiniteOperand { x, .. }
            | CombineError::NonFiniteResult { x, .. } => *x,
        }
    }
}
