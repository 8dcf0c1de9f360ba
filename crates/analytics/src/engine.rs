use crate::report::{AggregatedPoint, DensityPoint};
use core_types::{BenchmarkRecord, DensityRecord, DimensionValue};
use std::collections::BTreeMap;

/// A stateless calculator that groups records by a dimension and summarizes
/// each group.
#[derive(Debug, Default)]
pub struct AggregationEngine {}

impl AggregationEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Groups `records` by the key returned from `selector` and computes the
    /// mean statistics of every group.
    ///
    /// # Arguments
    ///
    /// * `records` - The runs to aggregate, typically already filtered to one
    ///   algorithm and one value of the held-fixed dimension.
    /// * `selector` - Extracts the grouping key from a record.
    ///
    /// # Returns
    ///
    /// One `AggregatedPoint` per distinct key, sorted ascending by key. An
    /// empty input yields an empty vector.
    pub fn aggregate<'a, I, F>(&self, records: I, selector: F) -> Vec<AggregatedPoint>
    where
        I: IntoIterator<Item = &'a BenchmarkRecord>,
        F: Fn(&BenchmarkRecord) -> DimensionValue,
    {
        group_by(records, selector)
            .into_iter()
            .map(|(dimension, group)| {
                let sample_count = group.len();
                // Integer sum: exact and independent of record order.
                let total_time: i128 = group.iter().map(|r| i128::from(r.elapsed_time_ns())).sum();
                let mean_time_ns = total_time as f64 / sample_count as f64;
                let mean_compression_ratio =
                    ordered_mean(group.iter().map(|r| r.compression_ratio()).collect());

                tracing::trace!(%dimension, sample_count, mean_time_ns, "Aggregated group.");

                AggregatedPoint {
                    dimension,
                    mean_time_ns,
                    frequency_hz: 1.0e9 / mean_time_ns,
                    mean_compression_ratio,
                    sample_count,
                }
            })
            .collect()
    }

    /// Groups determinization results by the key returned from `selector` and
    /// averages the DFA size and Hopcroft compression ratio of each group.
    pub fn aggregate_density<'a, I, F>(&self, records: I, selector: F) -> Vec<DensityPoint>
    where
        I: IntoIterator<Item = &'a DensityRecord>,
        F: Fn(&DensityRecord) -> DimensionValue,
    {
        group_by(records, selector)
            .into_iter()
            .map(|(dimension, group)| {
                let sample_count = group.len();
                let total_states: u128 = group.iter().map(|r| u128::from(r.dfa_states)).sum();

                DensityPoint {
                    dimension,
                    mean_dfa_states: total_states as f64 / sample_count as f64,
                    mean_compression_ratio: ordered_mean(
                        group.iter().map(|r| r.compression_ratio()).collect(),
                    ),
                    sample_count,
                }
            })
            .collect()
    }
}

/// Buckets records by exact key equality. The map keeps keys sorted, and only
/// keys taken from an actual record are ever inserted, so no bucket is empty.
fn group_by<'a, R, I, F>(records: I, selector: F) -> BTreeMap<DimensionValue, Vec<&'a R>>
where
    R: 'a,
    I: IntoIterator<Item = &'a R>,
    F: Fn(&R) -> DimensionValue,
{
    let mut groups: BTreeMap<DimensionValue, Vec<&'a R>> = BTreeMap::new();
    for record in records {
        groups.entry(selector(record)).or_default().push(record);
    }
    groups
}

/// Mean of a non-empty sample. Values are summed in sorted order so that the
/// result does not depend on the order the records arrived in.
fn ordered_mean(mut values: Vec<f64>) -> f64 {
    values.sort_by(|a, b| a.total_cmp(b));
    values.iter().sum::<f64>() / values.len() as f64
}
