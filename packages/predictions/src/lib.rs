#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! HTTP client for the crime prediction API.
//!
//! Wraps the four backend endpoints behind [`PredictionClient`]:
//!
//! - `GET /api/top-predictions/?period={period}` — ranked grids for all
//!   three models
//! - `GET /api/metrics-by-period/?period={period}` — PEI/accuracy metrics
//! - `GET /api/available-periods/` — periods with data
//! - `GET /api/health/` — liveness probe
//!
//! Requests are single-shot: no retries, no client-side timeouts. A
//! failed request is terminal for that call and surfaces to the caller
//! as a [`ClientError`], except the health probe which maps every
//! failure to "unhealthy". Metrics are optional by design — a period
//! snapshot still resolves when only the grid fetch succeeds.

use crime_predict_predictions_models::{
    MetricsResponse, Period, PeriodsResponse, PredictionsResponse,
};
use thiserror::Error;

/// Default backend when `CRIME_PREDICT_API_URL` is not set.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Errors from prediction API requests.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport failure (connection refused, DNS, body decode).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with a non-2xx status.
    #[error("HTTP status {status}")]
    Status {
        /// The HTTP status code.
        status: u16,
    },
}

/// Grid data plus optional metrics for one selected period.
#[derive(Debug, Clone, PartialEq)]
pub struct PeriodSnapshot {
    /// Ranked grids for all three models.
    pub predictions: PredictionsResponse,
    /// Metrics for the period, `None` when the metrics endpoint was
    /// unavailable or errored.
    pub metrics: Option<MetricsResponse>,
}

/// Client for the crime prediction API.
#[derive(Debug, Clone)]
pub struct PredictionClient {
    http: reqwest::Client,
    base_url: String,
}

impl PredictionClient {
    /// Creates a client against the given base URL (trailing slashes
    /// are stripped).
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: normalize_base_url(base_url),
        }
    }

    /// Creates a client from the `CRIME_PREDICT_API_URL` environment
    /// variable, falling back to [`DEFAULT_API_BASE_URL`].
    #[must_use]
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("CRIME_PREDICT_API_URL").unwrap_or_else(|_| DEFAULT_API_BASE_URL.into());
        Self::new(&base_url)
    }

    /// The normalized base URL this client targets.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches the top-ranked grids for all three models for one period.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Status`] for a non-2xx response and
    /// [`ClientError::Http`] for transport or decode failures.
    pub async fn fetch_top_predictions(
        &self,
        period: Period,
    ) -> Result<PredictionsResponse, ClientError> {
        let url = format!("{}/api/top-predictions/", self.base_url);
        let resp = self
            .http
            .get(&url)
            .query(&[("period", period)])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ClientError::Status {
                status: status.as_u16(),
            });
        }

        Ok(resp.json().await?)
    }

    /// Fetches PEI/accuracy metrics for one metric period.
    ///
    /// Note the argument is the *metric* period ordinal, not the
    /// `YYYYMM` period — see [`metric_period_for`].
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Status`] for a non-2xx response and
    /// [`ClientError::Http`] for transport or decode failures.
    pub async fn fetch_metrics_by_period(
        &self,
        metric_period: u32,
    ) -> Result<MetricsResponse, ClientError> {
        let url = format!("{}/api/metrics-by-period/", self.base_url);
        let resp = self
            .http
            .get(&url)
            .query(&[("period", metric_period)])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ClientError::Status {
                status: status.as_u16(),
            });
        }

        Ok(resp.json().await?)
    }

    /// Fetches the list of periods that have prediction data.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Status`] for a non-2xx response and
    /// [`ClientError::Http`] for transport or decode failures.
    pub async fn fetch_available_periods(&self) -> Result<PeriodsResponse, ClientError> {
        let url = format!("{}/api/available-periods/", self.base_url);
        let resp = self.http.get(&url).send().await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ClientError::Status {
                status: status.as_u16(),
            });
        }

        Ok(resp.json().await?)
    }

    /// Probes the health endpoint. Any 2xx response is healthy; every
    /// error — transport, DNS, or an error status — is reported as
    /// unhealthy, never propagated.
    pub async fn check_health(&self) -> bool {
        let url = format!("{}/api/health/", self.base_url);
        match self.http.get(&url).send().await {
            Ok(resp) => healthy_status(resp.status()),
            Err(_) => false,
        }
    }

    /// Fetches the full snapshot for one period: grids plus metrics.
    ///
    /// A metrics failure degrades to `metrics: None` rather than
    /// failing the snapshot; only the grid fetch error propagates.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the grid fetch fails.
    pub async fn fetch_period_snapshot(
        &self,
        period: Period,
    ) -> Result<PeriodSnapshot, ClientError> {
        let predictions = self.fetch_top_predictions(period).await?;
        let metrics = self.fetch_metrics_by_period(metric_period_for(period)).await;

        Ok(snapshot_from(predictions, metrics))
    }
}

/// Strips trailing slashes from a base URL so endpoint paths can be
/// appended unconditionally.
#[must_use]
pub fn normalize_base_url(base_url: &str) -> String {
    base_url.trim_end_matches('/').to_string()
}

/// Maps a `YYYYMM` period to the ordinal metric period the metrics
/// endpoint is keyed by. The backend stores metrics for the three demo
/// periods as 1, 2, 3; anything else falls back to 1.
#[must_use]
pub const fn metric_period_for(period: Period) -> u32 {
    match period {
        202303 => 2,
        202304 => 3,
        _ => 1,
    }
}

/// Combines a successful grid fetch with an optional metrics result.
/// A metrics error is logged and degrades to `metrics: None`.
#[must_use]
pub fn snapshot_from(
    predictions: PredictionsResponse,
    metrics: Result<MetricsResponse, ClientError>,
) -> PeriodSnapshot {
    let metrics = match metrics {
        Ok(metrics) => Some(metrics),
        Err(e) => {
            log::info!(
                "Metrics not available for period {}: {e}",
                predictions.period
            );
            None
        }
    };

    PeriodSnapshot {
        predictions,
        metrics,
    }
}

/// Whether a health-probe status counts as healthy.
#[must_use]
pub fn healthy_status(status: reqwest::StatusCode) -> bool {
    status.is_success()
}
