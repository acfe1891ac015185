// -----------------------------------------------------------------------------
// BinaryOp
// -----------------------------------------------------------------------------
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    serde::Serialize,
    serde::Deserialize,
    schemars::JsonSchema,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl BinaryOp {
    /// Apply the operator without any guard.
    #[inline]
    pub fn apply(&self, lhs: f64, rhs: f64) -> f64 {
        match self {
            BinaryOp::Add => lhs + rhs,
            BinaryOp::Subtract => lhs - rhs,
            BinaryOp::Multiply => lhs * rhs,
            BinaryOp::Divide => lhs / rhs,
        }
    }

    #[inline]
    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Subtract => "-",
            BinaryOp::Multiply => "*",
            BinaryOp::Divide => "/",
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use strum::IntoEnumIterator;

    use super::*;

    #[rstest]
    #[case(BinaryOp::Add, 6.0, 3.0, 9.0)]
    #[case(BinaryOp::Subtract, 6.0, 3.0, 3.0)]
    #[case(BinaryOp::Multiply, 6.0, 3.0, 18.0)]
    #[case(BinaryOp::Divide, 6.0, 3.0, 2.0)]
    fn test_apply(#[case] op: BinaryOp, #[case] lhs: f64, #[case] rhs: f64, #[case] expected: f64) {
        assert_eq!(op.apply(lhs, rhs), expected);
    }

    #[test]
    fn test_str_roundtrip() {
        for op in BinaryOp::iter() {
            let s = op.to_string();
            let json = serde_json::to_value(op).unwrap();

            assert_eq!(s.parse::<BinaryOp>().unwrap(), op);
            assert_eq!(json, serde_json::Value::String(s));
        }
    }

    #[rstest]
    #[case("add", BinaryOp::Add)]
    #[case("subtract", BinaryOp::Subtract)]
    #[case("multiply", BinaryOp::Multiply)]
    #[case("divide", BinaryOp::Divide)]
    fn test_from_str(#[case] s: &str, #[case] expected: BinaryOp) {
        assert_eq!(s.parse::<BinaryOp>().unwrap(), expected);
    }

    #[test]
    fn test_from_str_err() {
        assert!("modulo".parse::<BinaryOp>().is_err());
    }
}
