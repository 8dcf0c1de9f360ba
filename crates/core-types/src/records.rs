use crate::enums::Algorithm;
use crate::error::CoreError;
use serde::{Deserialize, Serialize};

/// One timed minimization run, as written by the benchmark harness.
///
/// Records are validated on construction and never mutated afterwards, so
/// every downstream computation may rely on `state_count > 0`,
/// `minimal_state_count <= state_count` and `elapsed_time_ns > 0`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BenchmarkRecord {
    algorithm: Algorithm,
    state_count: u32,
    alphabet_size: u32,
    elapsed_time_ns: i64,
    source_file: String,
    minimal_state_count: u32,
}

impl BenchmarkRecord {
    pub fn new(
        algorithm: Algorithm,
        state_count: u32,
        alphabet_size: u32,
        elapsed_time_ns: i64,
        source_file: impl Into<String>,
        minimal_state_count: u32,
    ) -> Result<Self, CoreError> {
        if state_count == 0 {
            return Err(CoreError::InvalidInput(
                "state_count".to_string(),
                "an automaton must have at least one state".to_string(),
            ));
        }
        if minimal_state_count > state_count {
            return Err(CoreError::InvalidInput(
                "minimal_state_count".to_string(),
                format!("{} exceeds the state count {}", minimal_state_count, state_count),
            ));
        }
        if elapsed_time_ns <= 0 {
            return Err(CoreError::InvalidInput(
                "elapsed_time_ns".to_string(),
                format!("{} is not a positive duration", elapsed_time_ns),
            ));
        }

        Ok(Self {
            algorithm,
            state_count,
            alphabet_size,
            elapsed_time_ns,
            source_file: source_file.into(),
            minimal_state_count,
        })
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn state_count(&self) -> u32 {
        self.state_count
    }

    pub fn alphabet_size(&self) -> u32 {
        self.alphabet_size
    }

    pub fn elapsed_time_ns(&self) -> i64 {
        self.elapsed_time_ns
    }

    pub fn source_file(&self) -> &str {
        &self.source_file
    }

    pub fn minimal_state_count(&self) -> u32 {
        self.minimal_state_count
    }

    /// Fraction of states eliminated by minimization, in `[0, 1]`.
    pub fn compression_ratio(&self) -> f64 {
        f64::from(self.state_count - self.minimal_state_count) / f64::from(self.state_count)
    }
}

/// One row of the NFA determinization experiment: a generated NFA of a given
/// shape, the size of its subset-construction DFA, and the outcome of each
/// minimization algorithm on that DFA.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DensityRecord {
    pub states: u32,
    pub alphabet: u32,
    /// Fraction of defined transitions over all possible transitions.
    pub density: f64,
    /// Fraction of final states.
    pub final_density: f64,
    pub dfa_states: u64,
    pub hopcroft_classes: u64,
    pub hopcroft_time_ns: i64,
    pub incremental_classes: u64,
    pub incremental_time_ns: i64,
    pub hybrid_classes: u64,
    pub hybrid_time_ns: i64,
}

impl DensityRecord {
    /// Checks the invariants the density report depends on.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.dfa_states == 0 {
            return Err(CoreError::InvalidInput(
                "dfa_states".to_string(),
                "a determinized automaton must have at least one state".to_string(),
            ));
        }
        if self.hopcroft_classes > self.dfa_states {
            return Err(CoreError::InvalidInput(
                "hopcroft_classes".to_string(),
                format!("{} exceeds the DFA state count {}", self.hopcroft_classes, self.dfa_states),
            ));
        }
        if !self.density.is_finite() || !self.final_density.is_finite() {
            return Err(CoreError::InvalidInput(
                "density".to_string(),
                "densities must be finite numbers".to_string(),
            ));
        }
        Ok(())
    }

    /// Fraction of DFA states merged away by Hopcroft's algorithm.
    pub fn compression_ratio(&self) -> f64 {
        (self.dfa_states - self.hopcroft_classes) as f64 / self.dfa_states as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compression_ratio_is_fraction_of_removed_states() {
        let record = BenchmarkRecord::new(Algorithm::Hopcroft, 10, 2, 100, "f1", 8).unwrap();
        assert!((record.compression_ratio() - 0.2).abs() < 1e-12);

        let already_minimal = BenchmarkRecord::new(Algorithm::Hybrid, 7, 2, 1, "f", 7).unwrap();
        assert_eq!(already_minimal.compression_ratio(), 0.0);
    }

    #[test]
    fn rejects_invariant_violations() {
        assert!(BenchmarkRecord::new(Algorithm::Hopcroft, 10, 2, 100, "f", 11).is_err());
        assert!(BenchmarkRecord::new(Algorithm::Hopcroft, 10, 2, 0, "f", 5).is_err());
        assert!(BenchmarkRecord::new(Algorithm::Hopcroft, 10, 2, -3, "f", 5).is_err());
        assert!(BenchmarkRecord::new(Algorithm::Hopcroft, 0, 2, 3, "f", 0).is_err());
    }

    #[test]
    fn density_record_validation() {
        let mut record = DensityRecord {
            states: 8,
            alphabet: 2,
            density: 0.5,
            final_density: 0.1,
            dfa_states: 20,
            hopcroft_classes: 15,
            hopcroft_time_ns: 10,
            incremental_classes: 15,
            incremental_time_ns: 12,
            hybrid_classes: 15,
            hybrid_time_ns: 9,
        };
        assert!(record.validate().is_ok());
        assert!((record.compression_ratio() - 0.25).abs() < 1e-12);

        record.hopcroft_classes = 21;
        assert!(record.validate().is_err());
    }
}
