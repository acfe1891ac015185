// -----------------------------------------------------------------------------
// Tolerance
// -----------------------------------------------------------------------------
/// Numeric tolerances shared by construction, evaluation and combination.
///
/// * `eps_x`: two x-coordinates closer than this are treated as one.
/// * `eps_y`: a denominator whose magnitude is below this is treated as zero.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, schemars::JsonSchema)]
pub struct Tolerance {
    eps_x: f64,
    eps_y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
#[error("Tolerances must be finite and non-negative. eps_x: {}, eps_y: {}", .eps_x, .eps_y)]
pub struct InvalidTolerance {
    pub eps_x: f64,
    pub eps_y: f64,
}

impl Tolerance {
    pub const DEFAULT_EPS: f64 = 1e-9;

    #[inline]
    pub fn new(eps_x: f64, eps_y: f64) -> Result<Self, InvalidTolerance> {
        let valid = |eps: f64| eps.is_finite() && eps >= 0.0;
        if valid(eps_x) && valid(eps_y) {
            Ok(Tolerance { eps_x, eps_y })
        } else {
            Err(InvalidTolerance { eps_x, eps_y })
        }
    }

    #[inline]
    pub fn eps_x(&self) -> f64 {
        self.eps_x
    }

    #[inline]
    pub fn eps_y(&self) -> f64 {
        self.eps_y
    }
}

impl Default for Tolerance {
    #[inline]
    fn default() -> Self {
        Tolerance {
            eps_x: Self::DEFAULT_EPS,
            eps_y: Self::DEFAULT_EPS,
        }
    }
}

impl<'de> serde::Deserialize<'de> for Tolerance {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        #[serde(default)]
        struct Data {
            eps_x: f64,
            eps_y: f64,
        }
        impl Default for Data {
            fn default() -> Self {
                Data {
                    eps_x: Tolerance::DEFAULT_EPS,
                    eps_y: Tolerance::DEFAULT_EPS,
                }
            }
        }

        let data = Data::deserialize(deserializer)?;
        Tolerance::new(data.eps_x, data.eps_y).map_err(serde::de::Error::custom)
    }
}

// -----------------------------------------------------------------------------
// DuplicatePolicy
// -----------------------------------------------------------------------------
/// How samples whose x-coordinates fall within `eps_x` of each other are merged.
///
/// A cluster starts at its smallest x and absorbs every following sample
/// closer than `eps_x` to that anchor.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    serde::Serialize,
    serde::Deserialize,
    schemars::JsonSchema,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum DuplicatePolicy {
    /// Keep the sample which comes first in the input order.
    #[default]
    FirstWins,
    /// Keep the sample which comes last in the input order.
    LastWins,
    /// Keep the anchor x and the mean of all y in the cluster.
    Average,
}

// -----------------------------------------------------------------------------
// NonFinitePolicy
// -----------------------------------------------------------------------------
/// What to do with samples carrying `NaN` or infinite coordinates.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    serde::Serialize,
    serde::Deserialize,
    schemars::JsonSchema,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum NonFinitePolicy {
    /// Drop the sample and report it through the log.
    #[default]
    Drop,
    /// Fail the construction.
    Reject,
}

// -----------------------------------------------------------------------------
// EngineConfig
// -----------------------------------------------------------------------------
#[derive(
    Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize, schemars::JsonSchema,
)]
#[serde(default)]
pub struct EngineConfig {
    pub tolerance: Tolerance,
    pub duplicates: DuplicatePolicy,
    pub non_finite: NonFinitePolicy,
    /// Upper bound of samples per function accepted at the boundary.
    /// `None` disables the check.
    pub max_samples: Option<usize>,
}

impl EngineConfig {
    pub const DEFAULT_MAX_SAMPLES: usize = 1000;

    #[inline]
    pub fn with_tolerance(mut self, tolerance: Tolerance) -> Self {
        self.tolerance = tolerance;
        self
    }

    #[inline]
    pub fn with_duplicates(mut self, duplicates: DuplicatePolicy) -> Self {
        self.duplicates = duplicates;
        self
    }

    #[inline]
    pub fn with_non_finite(mut self, non_finite: NonFinitePolicy) -> Self {
        self.non_finite = non_finite;
        self
    }

    #[inline]
    pub fn with_max_samples(mut self, max_samples: Option<usize>) -> Self {
        self.max_samples = max_samples;
        self
    }
}

impl Default for EngineConfig {
    #[inline]
    fn default() -> Self {
        EngineConfig {
            tolerance: Tolerance::default(),
            duplicates: DuplicatePolicy::default(),
            non_finite: NonFinitePolicy::default(),
            max_samples: Some(Self::DEFAULT_MAX_SAMPLES),
        }
    }
}
