#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Per-model grid statistics and metric lookups for the prediction map.
//!
//! Everything here is a pure function of the fetched responses. The
//! view layer calls [`model_stats`] once per visible layer and rounds
//! for display; no rounding happens here.

use crime_predict_predictions_models::{
    GridRecord, MetricRecord, MetricsResponse, ModelKind, PredictionsResponse,
};

/// Aggregate statistics over one model's grid counts.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GridStats {
    /// Largest count.
    pub max: f64,
    /// Mean count (unrounded).
    pub avg: f64,
    /// Sum of all counts.
    pub total: f64,
}

/// Aggregates a list of grid counts into `{max, avg, total}`.
///
/// An empty list returns the all-zero sentinel — "no data yet", not an
/// error — so a model with no grids for the selected period still
/// renders a stats panel.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn aggregate(counts: &[f64]) -> GridStats {
    if counts.is_empty() {
        return GridStats::default();
    }

    let total: f64 = counts.iter().sum();
    let max = counts.iter().copied().fold(f64::MIN, f64::max);

    GridStats {
        max,
        avg: total / counts.len() as f64,
        total,
    }
}

/// Statistics for one model's grids in a predictions response.
#[must_use]
pub fn model_stats(response: &PredictionsResponse, model: ModelKind) -> GridStats {
    let counts: Vec<f64> = response
        .data
        .records(model)
        .iter()
        .map(GridRecord::count)
        .collect();

    aggregate(&counts)
}

/// Finds the metric row for a model by case-insensitive wire name.
#[must_use]
pub fn metric_for(metrics: &MetricsResponse, model: ModelKind) -> Option<&MetricRecord> {
    metrics
        .metrics
        .iter()
        .find(|metric| metric.model.eq_ignore_ascii_case(model.as_ref()))
}

#[cfg(test)]
mod tests {
    use crime_predict_predictions_models::{
        ActualCrimeGrid, GridData, MetricRecord, MetricsResponse, ModelCounts, ModelKind,
        PredictionsResponse,
    };

    use super::*;

    fn actual_grid(grid_id: u32, count: u64, rank: u32) -> ActualCrimeGrid {
        ActualCrimeGrid {
            grid_id,
            center_latitude: 27.33,
            center_longitude: -82.53,
            southwest_lat: 27.32,
            southwest_lng: -82.54,
            northeast_lat: 27.34,
            northeast_lng: -82.52,
            target_period: 202302,
            actual_crime_count: count,
            rank: Some(rank),
        }
    }

    fn response() -> PredictionsResponse {
        PredictionsResponse {
            success: true,
            period: 202302,
            data: GridData {
                actual: vec![
                    actual_grid(1, 21, 1),
                    actual_grid(2, 14, 2),
                    actual_grid(3, 8, 3),
                ],
                mlp: Vec::new(),
                baseline: Vec::new(),
            },
            counts: ModelCounts {
                actual: 3,
                mlp: 0,
                baseline: 0,
            },
            error: None,
            message: None,
        }
    }

    #[test]
    fn aggregate_matches_sum_and_max() {
        let counts = [21.0, 14.0, 8.0];
        let stats = aggregate(&counts);
        assert!((stats.total - 43.0).abs() < f64::EPSILON);
        assert!((stats.max - 21.0).abs() < f64::EPSILON);
        assert!((stats.avg - 43.0 / 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn aggregate_handles_fractional_counts() {
        let stats = aggregate(&[1.5, 2.5]);
        assert!((stats.total - 4.0).abs() < f64::EPSILON);
        assert!((stats.avg - 2.0).abs() < f64::EPSILON);
        assert!((stats.max - 2.5).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_counts_return_zero_sentinel() {
        assert_eq!(aggregate(&[]), GridStats::default());
    }

    #[test]
    fn single_count_is_its_own_max_avg_total() {
        let stats = aggregate(&[7.0]);
        assert!((stats.max - 7.0).abs() < f64::EPSILON);
        assert!((stats.avg - 7.0).abs() < f64::EPSILON);
        assert!((stats.total - 7.0).abs() < f64::EPSILON);
    }

    #[test]
    fn model_stats_aggregates_the_chosen_model() {
        let resp = response();
        let stats = model_stats(&resp, ModelKind::Actual);
        assert!((stats.total - 43.0).abs() < f64::EPSILON);
        assert!((stats.max - 21.0).abs() < f64::EPSILON);
    }

    #[test]
    fn model_without_grids_gets_the_sentinel() {
        let resp = response();
        assert_eq!(model_stats(&resp, ModelKind::Baseline), GridStats::default());
    }

    #[test]
    fn metric_lookup_is_case_insensitive() {
        let metrics = MetricsResponse {
            success: true,
            period: 1,
            metrics: vec![MetricRecord {
                id: 1,
                model: "MLP".to_string(),
                model_display: "MLP Neural Network".to_string(),
                pei_percent: 78.4,
                accuracy: 81.2,
                target_period: 1,
                color: "#4ECDC4".to_string(),
                icon: "brain".to_string(),
            }],
            comparison: None,
            count: 1,
            error: None,
            message: None,
        };

        let metric = metric_for(&metrics, ModelKind::Mlp).unwrap();
        assert!((metric.pei_percent - 78.4).abs() < f64::EPSILON);
        assert!(metric_for(&metrics, ModelKind::Baseline).is_none());
    }
}
