//! Text rendering for the period snapshot view.
//!
//! Mirrors what the map demo's stat panels show: per-model grid counts,
//! max/avg/total (average rounded to one decimal for display), the
//! rank-faded color of the top cell, and PEI/accuracy metrics with the
//! comparison winner when metrics are present.

use std::fmt::Write as _;

use crime_predict_analytics::{metric_for, model_stats};
use crime_predict_map::{DEFAULT_MAP_CENTER, bounds_of, center_of, color_for};
use crime_predict_predictions::PeriodSnapshot;
use crime_predict_predictions_models::ModelKind;

/// Renders the full snapshot: one section per model, then the metrics
/// comparison (or an "unavailable" line when metrics degraded).
pub fn render_snapshot(snapshot: &PeriodSnapshot) -> String {
    let mut out = String::new();
    writeln!(
        out,
        "Period {} (map center {}, {})",
        snapshot.predictions.period, DEFAULT_MAP_CENTER.0, DEFAULT_MAP_CENTER.1
    )
    .unwrap();

    for model in ModelKind::ALL {
        writeln!(out).unwrap();
        out.push_str(&model_section(snapshot, model));
    }

    writeln!(out).unwrap();
    match &snapshot.metrics {
        Some(metrics) => {
            if let Some(comparison) = &metrics.comparison {
                writeln!(
                    out,
                    "Comparison: PEI winner {} (+{:.2}), accuracy winner {} (+{:.2})",
                    comparison.pei.winner,
                    comparison.pei.difference,
                    comparison.accuracy.winner,
                    comparison.accuracy.difference,
                )
                .unwrap();
            }
        }
        None => {
            writeln!(out, "Metrics unavailable for this period").unwrap();
        }
    }

    out
}

/// Renders one model's stats panel.
fn model_section(snapshot: &PeriodSnapshot, model: ModelKind) -> String {
    let mut out = String::new();
    let records = snapshot.predictions.data.records(model);
    let stats = model_stats(&snapshot.predictions, model);

    writeln!(
        out,
        "{} ({}) - {} grids",
        model.display_name(),
        model.base_color(),
        records.len()
    )
    .unwrap();
    writeln!(
        out,
        "  max {}  avg {:.1}  total {}",
        stats.max, stats.avg, stats.total
    )
    .unwrap();

    // Records arrive rank-ordered, so the first is the most severe cell.
    if let Some(top) = records.first() {
        let (southwest, northeast) = bounds_of(top);
        let center = center_of(top);
        writeln!(
            out,
            "  top cell: grid {} rank {} color {} center ({}, {}) sw ({}, {}) ne ({}, {})",
            top.grid_id(),
            top.rank().map_or_else(|| "N/A".to_string(), |r| r.to_string()),
            color_for(model.base_color(), top.rank()),
            center.0,
            center.1,
            southwest.0,
            southwest.1,
            northeast.0,
            northeast.1,
        )
        .unwrap();
    }

    if let Some(metrics) = &snapshot.metrics {
        if let Some(metric) = metric_for(metrics, model) {
            writeln!(
                out,
                "  PEI {:.1}%  accuracy {:.1}%",
                metric.pei_percent, metric.accuracy
            )
            .unwrap();
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use crime_predict_predictions::PeriodSnapshot;
    use crime_predict_predictions_models::{
        ActualCrimeGrid, GridData, MetricComparison, MetricDelta, MetricRecord, MetricsResponse,
        ModelCounts, PredictionsResponse,
    };

    use super::*;

    fn snapshot(metrics: Option<MetricsResponse>) -> PeriodSnapshot {
        PeriodSnapshot {
            predictions: PredictionsResponse {
                success: true,
                period: 202302,
                data: GridData {
                    actual: vec![ActualCrimeGrid {
                        grid_id: 1,
                        center_latitude: 27.33,
                        center_longitude: -82.53,
                        southwest_lat: 27.32,
                        southwest_lng: -82.54,
                        northeast_lat: 27.34,
                        northeast_lng: -82.52,
                        target_period: 202302,
                        actual_crime_count: 21,
                        rank: Some(1),
                    }],
                    mlp: Vec::new(),
                    baseline: Vec::new(),
                },
                counts: ModelCounts {
                    actual: 1,
                    mlp: 0,
                    baseline: 0,
                },
                error: None,
                message: None,
            },
            metrics,
        }
    }

    fn metrics() -> MetricsResponse {
        MetricsResponse {
            success: true,
            period: 1,
            metrics: vec![MetricRecord {
                id: 1,
                model: "actual".to_string(),
                model_display: "Actual Crime".to_string(),
                pei_percent: 100.0,
                accuracy: 100.0,
                target_period: 1,
                color: "#FF6B6B".to_string(),
                icon: "target".to_string(),
            }],
            comparison: Some(MetricComparison {
                pei: MetricDelta {
                    winner: "mlp".to_string(),
                    difference: 12.3,
                    mlp_value: 78.4,
                    baseline_value: 66.1,
                },
                accuracy: MetricDelta {
                    winner: "mlp".to_string(),
                    difference: 5.0,
                    mlp_value: 81.2,
                    baseline_value: 76.2,
                },
            }),
            count: 1,
            error: None,
            message: None,
        }
    }

    #[test]
    fn renders_stats_and_faded_color_for_the_top_cell() {
        let out = render_snapshot(&snapshot(None));
        assert!(out.contains("Actual Crime (#FF6B6B) - 1 grids"));
        assert!(out.contains("max 21  avg 21.0  total 21"));
        assert!(out.contains("color #FF6B6Bfc"));
        assert!(out.contains("center (27.33, -82.53)"));
        assert!(out.contains("sw (27.32, -82.54) ne (27.34, -82.52)"));
        assert!(out.contains("Period 202302 (map center 27.3364, -82.5307)"));
    }

    #[test]
    fn renders_empty_models_with_the_zero_sentinel() {
        let out = render_snapshot(&snapshot(None));
        assert!(out.contains("Baseline Predictions (#FFD166) - 0 grids"));
        assert!(out.contains("max 0  avg 0.0  total 0"));
    }

    #[test]
    fn degraded_metrics_render_an_unavailable_line() {
        let out = render_snapshot(&snapshot(None));
        assert!(out.contains("Metrics unavailable for this period"));
    }

    #[test]
    fn present_metrics_render_scores_and_comparison() {
        let out = render_snapshot(&snapshot(Some(metrics())));
        assert!(out.contains("PEI 100.0%  accuracy 100.0%"));
        assert!(out.contains("Comparison: PEI winner mlp (+12.30), accuracy winner mlp (+5.00)"));
        assert!(!out.contains("Metrics unavailable"));
    }
}
