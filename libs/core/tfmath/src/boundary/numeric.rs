use std::{fmt::Display, str::FromStr};

// -----------------------------------------------------------------------------
// Numeric
// -----------------------------------------------------------------------------
/// A coordinate which accepts both a JSON number and a numeric string.
///
/// Strings are trimmed before parsing. Anything unparsable is rejected,
/// never coerced to zero.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, schemars::JsonSchema)]
#[schemars(transparent)]
pub struct Numeric(pub f64);

impl From<f64> for Numeric {
    #[inline]
    fn from(v: f64) -> Self {
        Numeric(v)
    }
}

impl From<Numeric> for f64 {
    #[inline]
    fn from(v: Numeric) -> Self {
        v.0
    }
}

impl Display for Numeric {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for Numeric {
    type Err = std::num::ParseFloatError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Numeric)
    }
}

impl serde::Serialize for Numeric {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_f64(self.0)
    }
}

impl<'de> serde::Deserialize<'de> for Numeric {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Number(f64),
            Text(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Number(v) => Ok(Numeric(v)),
            Repr::Text(s) => s.parse().map_err(|e| {
                serde::de::Error::custom(format!("Invalid numeric string '{}': {}", s, e))
            }),
        }
    }
}
