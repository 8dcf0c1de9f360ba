use crate::error::AnalyticsError;
use crate::report::{AggregatedPoint, RatioPoint};
use core_types::DimensionValue;
use std::collections::BTreeMap;

/// Compares two algorithms' aggregated series point by point.
#[derive(Debug, Default)]
pub struct RatioEngine {}

impl RatioEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Divides the numerator's mean time by the denominator's mean time at
    /// every dimension value both series share.
    ///
    /// This is an inner join: a dimension value present on only one side
    /// produces no point. The result is sorted ascending by dimension value.
    pub fn time_ratio(
        &self,
        numerator: &[AggregatedPoint],
        denominator: &[AggregatedPoint],
    ) -> Result<Vec<RatioPoint>, AnalyticsError> {
        let numerator = index_by_dimension(numerator)?;
        let denominator = index_by_dimension(denominator)?;

        let mut points = Vec::with_capacity(numerator.len().min(denominator.len()));
        for (dimension, num_mean) in numerator {
            let Some(&den_mean) = denominator.get(&dimension) else {
                tracing::trace!(%dimension, "No denominator point; dropped from ratio.");
                continue;
            };
            if !(den_mean > 0.0) {
                return Err(AnalyticsError::DivisionByZero(dimension.to_string()));
            }
            points.push(RatioPoint {
                dimension,
                ratio: num_mean / den_mean,
            });
        }

        Ok(points)
    }
}

fn index_by_dimension(points: &[AggregatedPoint]) -> Result<BTreeMap<DimensionValue, f64>, AnalyticsError> {
    let mut index = BTreeMap::new();
    for point in points {
        if index.insert(point.dimension, point.mean_time_ns).is_some() {
            return Err(AnalyticsError::DuplicateDimension(point.dimension.to_string()));
        }
    }
    Ok(index)
}
