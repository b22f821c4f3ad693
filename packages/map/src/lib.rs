#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Grid geometry and layer color mapping for the prediction map.
//!
//! Pure functions only: resolving a grid record's stored corners into a
//! renderable rectangle, and fading a model's base color by severity
//! rank so that rank 1 draws fully opaque and low-ranked cells fade
//! toward (but never reach) transparency.

use crime_predict_predictions_models::GridRecord;

/// Default map center (Sarasota, FL) as `(latitude, longitude)`.
pub const DEFAULT_MAP_CENTER: (f64, f64) = (27.3364, -82.5307);

/// Intensity floor for ranked cells. Ranks at or beyond 100 all draw at
/// this opacity so no ranked cell disappears from the map.
pub const MIN_INTENSITY: f64 = 0.3;

/// Resolves a grid record's stored bounding coordinates into the
/// `(southwest, northeast)` corner pair used to draw its rectangle,
/// each corner as `(latitude, longitude)`.
///
/// No transformation or validation is applied: the backend guarantees
/// southwest < northeast component-wise, and this function simply
/// projects what is stored.
#[must_use]
pub const fn bounds_of(record: &GridRecord<'_>) -> ((f64, f64), (f64, f64)) {
    (record.southwest(), record.northeast())
}

/// A grid record's stored center as `(latitude, longitude)`.
#[must_use]
pub const fn center_of(record: &GridRecord<'_>) -> (f64, f64) {
    record.center()
}

/// Fades a base hex color by severity rank.
///
/// An unranked cell keeps the base color unchanged (full opacity
/// implied). A ranked cell gets a two-digit hex alpha channel appended,
/// computed from `intensity = 1 - rank/100` clamped to
/// `[MIN_INTENSITY, 1.0]`. The upper clamp means rank 0 draws fully
/// opaque instead of overflowing the alpha byte.
#[must_use]
pub fn color_for(base_color: &str, rank: Option<u32>) -> String {
    let Some(rank) = rank else {
        return base_color.to_string();
    };

    let intensity = (1.0 - f64::from(rank) / 100.0).clamp(MIN_INTENSITY, 1.0);
    format!("{base_color}{:02x}", alpha_byte(intensity))
}

/// Converts an intensity in `[0, 1]` to its alpha byte.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn alpha_byte(intensity: f64) -> u8 {
    (intensity * 255.0).round() as u8
}
