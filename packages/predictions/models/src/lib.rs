#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Wire types for the crime prediction API.
//!
//! These mirror the JSON emitted by the prediction backend exactly
//! (snake_case field names, nullable `rank`, per-model count fields).
//! All records are immutable once deserialized; the view layer replaces
//! them wholesale when the selected period changes.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// A year-month period identifier in `YYYYMM` form (e.g. `202302`).
pub type Period = u32;

/// The three prediction models the API reports on.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ModelKind {
    /// Observed crime counts (ground truth).
    Actual,
    /// MLP neural network predictions.
    Mlp,
    /// Naive baseline predictions.
    Baseline,
}

impl ModelKind {
    /// All models, in the order the API reports them.
    pub const ALL: [Self; 3] = [Self::Actual, Self::Mlp, Self::Baseline];

    /// Human-readable name used in layer toggles and stat panels.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Actual => "Actual Crime",
            Self::Mlp => "MLP Predictions",
            Self::Baseline => "Baseline Predictions",
        }
    }

    /// Base hex color for this model's map layer.
    #[must_use]
    pub const fn base_color(self) -> &'static str {
        match self {
            Self::Actual => "#FF6B6B",
            Self::Mlp => "#4ECDC4",
            Self::Baseline => "#FFD166",
        }
    }
}

/// A grid cell with observed crime counts for one period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActualCrimeGrid {
    /// Stable grid identifier.
    pub grid_id: u32,
    /// Grid center latitude.
    pub center_latitude: f64,
    /// Grid center longitude.
    pub center_longitude: f64,
    /// Southwest corner latitude.
    pub southwest_lat: f64,
    /// Southwest corner longitude.
    pub southwest_lng: f64,
    /// Northeast corner latitude.
    pub northeast_lat: f64,
    /// Northeast corner longitude.
    pub northeast_lng: f64,
    /// The `YYYYMM` period this record was computed for.
    pub target_period: Period,
    /// Observed crime count in this cell.
    pub actual_crime_count: u64,
    /// 1-based severity rank within this period (1 = most severe),
    /// `None` if unranked.
    pub rank: Option<u32>,
}

/// A grid cell with MLP-predicted crime counts for one period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MlpCrimeGrid {
    /// Stable grid identifier.
    pub grid_id: u32,
    /// Grid center latitude.
    pub center_latitude: f64,
    /// Grid center longitude.
    pub center_longitude: f64,
    /// Southwest corner latitude.
    pub southwest_lat: f64,
    /// Southwest corner longitude.
    pub southwest_lng: f64,
    /// Northeast corner latitude.
    pub northeast_lat: f64,
    /// Northeast corner longitude.
    pub northeast_lng: f64,
    /// The `YYYYMM` period this record was computed for.
    pub target_period: Period,
    /// MLP-predicted crime count in this cell.
    pub mlp_crime_count: u64,
    /// 1-based severity rank within this period (1 = most severe),
    /// `None` if unranked.
    pub rank: Option<u32>,
}

/// A grid cell with baseline-predicted crime counts for one period.
///
/// The baseline model emits fractional predictions, so its count field
/// is a float unlike the other two models.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaselineCrimeGrid {
    /// Stable grid identifier.
    pub grid_id: u32,
    /// Grid center latitude.
    pub center_latitude: f64,
    /// Grid center longitude.
    pub center_longitude: f64,
    /// Southwest corner latitude.
    pub southwest_lat: f64,
    /// Southwest corner longitude.
    pub southwest_lng: f64,
    /// Northeast corner latitude.
    pub northeast_lat: f64,
    /// Northeast corner longitude.
    pub northeast_lng: f64,
    /// The `YYYYMM` period this record was computed for.
    pub target_period: Period,
    /// Baseline-predicted crime count in this cell.
    pub baseline_predicted_count: f64,
    /// 1-based severity rank within this period (1 = most severe),
    /// `None` if unranked.
    pub rank: Option<u32>,
}

/// A grid record tagged by the model that produced it.
///
/// Rendering helpers take this instead of loosely-typed parameters so
/// model-specific fields are resolved by exhaustive matching.
#[derive(Debug, Clone, PartialEq)]
pub enum GridRecord<'a> {
    /// Observed crime cell.
    Actual(&'a ActualCrimeGrid),
    /// MLP-predicted cell.
    Mlp(&'a MlpCrimeGrid),
    /// Baseline-predicted cell.
    Baseline(&'a BaselineCrimeGrid),
}

impl GridRecord<'_> {
    /// Which model produced this record.
    #[must_use]
    pub const fn model(&self) -> ModelKind {
        match self {
            Self::Actual(_) => ModelKind::Actual,
            Self::Mlp(_) => ModelKind::Mlp,
            Self::Baseline(_) => ModelKind::Baseline,
        }
    }

    /// Stable grid identifier.
    #[must_use]
    pub const fn grid_id(&self) -> u32 {
        match self {
            Self::Actual(g) => g.grid_id,
            Self::Mlp(g) => g.grid_id,
            Self::Baseline(g) => g.grid_id,
        }
    }

    /// Severity rank, if assigned.
    #[must_use]
    pub const fn rank(&self) -> Option<u32> {
        match self {
            Self::Actual(g) => g.rank,
            Self::Mlp(g) => g.rank,
            Self::Baseline(g) => g.rank,
        }
    }

    /// The crime count for this record's model, as a float so that the
    /// baseline's fractional predictions and the integer counts of the
    /// other models share one statistics path.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub const fn count(&self) -> f64 {
        match self {
            Self::Actual(g) => g.actual_crime_count as f64,
            Self::Mlp(g) => g.mlp_crime_count as f64,
            Self::Baseline(g) => g.baseline_predicted_count,
        }
    }

    /// Grid center as `(latitude, longitude)`.
    #[must_use]
    pub const fn center(&self) -> (f64, f64) {
        match self {
            Self::Actual(g) => (g.center_latitude, g.center_longitude),
            Self::Mlp(g) => (g.center_latitude, g.center_longitude),
            Self::Baseline(g) => (g.center_latitude, g.center_longitude),
        }
    }

    /// Southwest corner as `(latitude, longitude)`.
    #[must_use]
    pub const fn southwest(&self) -> (f64, f64) {
        match self {
            Self::Actual(g) => (g.southwest_lat, g.southwest_lng),
            Self::Mlp(g) => (g.southwest_lat, g.southwest_lng),
            Self::Baseline(g) => (g.southwest_lat, g.southwest_lng),
        }
    }

    /// Northeast corner as `(latitude, longitude)`.
    #[must_use]
    pub const fn northeast(&self) -> (f64, f64) {
        match self {
            Self::Actual(g) => (g.northeast_lat, g.northeast_lng),
            Self::Mlp(g) => (g.northeast_lat, g.northeast_lng),
            Self::Baseline(g) => (g.northeast_lat, g.northeast_lng),
        }
    }
}

/// Per-model grid lists returned by the top-predictions endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GridData {
    /// Observed crime grids.
    pub actual: Vec<ActualCrimeGrid>,
    /// MLP-predicted grids.
    pub mlp: Vec<MlpCrimeGrid>,
    /// Baseline-predicted grids.
    pub baseline: Vec<BaselineCrimeGrid>,
}

impl GridData {
    /// Tagged records for one model's grid list.
    #[must_use]
    pub fn records(&self, model: ModelKind) -> Vec<GridRecord<'_>> {
        match model {
            ModelKind::Actual => self.actual.iter().map(GridRecord::Actual).collect(),
            ModelKind::Mlp => self.mlp.iter().map(GridRecord::Mlp).collect(),
            ModelKind::Baseline => self.baseline.iter().map(GridRecord::Baseline).collect(),
        }
    }
}

/// Per-model record counts returned by the top-predictions endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelCounts {
    /// Number of observed crime grids.
    pub actual: u64,
    /// Number of MLP-predicted grids.
    pub mlp: u64,
    /// Number of baseline-predicted grids.
    pub baseline: u64,
}

/// Envelope for `GET /api/top-predictions/?period={period}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionsResponse {
    /// Whether the backend considers the request successful.
    pub success: bool,
    /// The period the data was computed for.
    pub period: Period,
    /// Per-model grid lists.
    pub data: GridData,
    /// Per-model record counts.
    pub counts: ModelCounts,
    /// Backend error description, if any.
    #[serde(default)]
    pub error: Option<String>,
    /// Backend status message, if any.
    #[serde(default)]
    pub message: Option<String>,
}

/// A per-model evaluation metric row for one period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricRecord {
    /// Row identifier.
    pub id: u32,
    /// Model wire name (`"actual"`, `"mlp"`, `"baseline"`).
    pub model: String,
    /// Human-readable model name.
    pub model_display: String,
    /// Predictive Efficiency Index as a percentage.
    pub pei_percent: f64,
    /// Prediction accuracy as a percentage.
    pub accuracy: f64,
    /// The period this metric was computed for.
    pub target_period: Period,
    /// Display color for this model.
    pub color: String,
    /// Icon reference for this model.
    pub icon: String,
}

/// Winner and margin for a single metric across the two predictive models.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricDelta {
    /// Wire name of the winning model.
    pub winner: String,
    /// Absolute difference between the two models' scores.
    pub difference: f64,
    /// The MLP model's score.
    pub mlp_value: f64,
    /// The baseline model's score.
    pub baseline_value: f64,
}

/// Pairwise MLP-vs-baseline comparison for one period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricComparison {
    /// Predictive Efficiency Index comparison.
    pub pei: MetricDelta,
    /// Accuracy comparison.
    pub accuracy: MetricDelta,
}

/// Envelope for `GET /api/metrics-by-period/?period={period}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsResponse {
    /// Whether the backend considers the request successful.
    pub success: bool,
    /// The metric period the data was computed for.
    pub period: u32,
    /// Per-model metric rows.
    pub metrics: Vec<MetricRecord>,
    /// MLP-vs-baseline comparison, when both models have metrics.
    pub comparison: Option<MetricComparison>,
    /// Number of metric rows.
    pub count: u64,
    /// Backend error description, if any.
    #[serde(default)]
    pub error: Option<String>,
    /// Backend status message, if any.
    #[serde(default)]
    pub message: Option<String>,
}

/// Detail row for one available period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodInfo {
    /// The `YYYYMM` period.
    pub period: Period,
    /// Wire names of the models with data for this period.
    pub available_models: Vec<String>,
    /// Human-readable period label from the backend.
    pub period_label: String,
}

/// Envelope for `GET /api/available-periods/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodsResponse {
    /// Whether the backend considers the request successful.
    pub success: bool,
    /// All available `YYYYMM` periods.
    pub periods: Vec<Period>,
    /// Per-period detail rows.
    pub periods_detail: Vec<PeriodInfo>,
    /// Number of available periods.
    pub count: u64,
    /// Backend error description, if any.
    #[serde(default)]
    pub error: Option<String>,
    /// Backend status message, if any.
    #[serde(default)]
    pub message: Option<String>,
}
