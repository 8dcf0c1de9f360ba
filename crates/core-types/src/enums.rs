use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The minimization algorithm variants measured by the benchmark harness.
///
/// The derived ordering is the order in which algorithms appear in every
/// generated chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    Hopcroft,
    Incremental,
    Hybrid,
}

impl Algorithm {
    /// Every known variant, in chart order.
    pub const ALL: [Algorithm; 3] = [Algorithm::Hopcroft, Algorithm::Incremental, Algorithm::Hybrid];

    /// The identifier used in the benchmark CSV files and chart legends.
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Hopcroft => "Hopcroft",
            Algorithm::Incremental => "Incremental",
            Algorithm::Hybrid => "Hybrid",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|alg| alg.name() == s)
            .ok_or_else(|| CoreError::UnknownAlgorithm(s.to_string()))
    }
}
