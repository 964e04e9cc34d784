//! Demand forecasting from historical precedent.
//!
//! Matching narrows from similar-magnitude events in the region, to every event
//! in the region, to the whole history, and finally to a fixed default estimate.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::ForecastSettings;
use crate::models::{ForecastedNeed, HistoricalEvent, ResourceCategory};
use crate::statistics::{mean, truncate_quantity, weighted_mean};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ForecastBasis {
    SimilarEvents,
    RegionHistory,
    GlobalHistory,
    Default,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    pub need: ForecastedNeed,
    pub basis: ForecastBasis,
    pub matched_events: usize,
    pub uniform_weighting: bool,
    pub scale_factor: f64,
}

/// `1 + max(0, magnitude - threshold) * step`.
pub fn magnitude_factor(magnitude: f64, settings: &ForecastSettings) -> f64 {
    let excess = magnitude - settings.scale_threshold;
    if excess > 0.0 {
        1.0 + excess * settings.scale_step
    } else {
        1.0
    }
}

pub fn select_matches<'a>(
    region: &str,
    magnitude: f64,
    history: &'a [HistoricalEvent],
    window: f64,
) -> (Vec<&'a HistoricalEvent>, ForecastBasis) {
    let similar: Vec<&HistoricalEvent> = history
        .iter()
        .filter(|event| {
            event.region == region
                && event.magnitude >= magnitude - window
                && event.magnitude <= magnitude + window
        })
        .collect();
    if !similar.is_empty() {
        return (similar, ForecastBasis::SimilarEvents);
    }

    let regional: Vec<&HistoricalEvent> = history.iter().filter(|event| event.region == region).collect();
    if !regional.is_empty() {
        return (regional, ForecastBasis::RegionHistory);
    }

    if !history.is_empty() {
        return (history.iter().collect(), ForecastBasis::GlobalHistory);
    }

    (Vec::new(), ForecastBasis::Default)
}

pub fn forecast_with(
    region: &str,
    magnitude: f64,
    history: &[HistoricalEvent],
    settings: &ForecastSettings,
) -> Forecast {
    let factor = magnitude_factor(magnitude, settings);
    let (matches, basis) = select_matches(region, magnitude, history, settings.similarity_window);

    let scale = |quantity: u64| truncate_quantity(quantity as f64 * factor);

    if matches.is_empty() {
        debug!(region, magnitude, "no historical events, using default estimate");
        let base = &settings.default_need;
        return Forecast {
            need: ForecastedNeed::from_fn(|category| scale(base.get(category))),
            basis,
            matched_events: 0,
            uniform_weighting: false,
            scale_factor: factor,
        };
    }

    let weights: Vec<f64> = matches.iter().map(|event| event.magnitude).collect();
    let mut uniform_weighting = false;

    let need = ForecastedNeed::from_fn(|category: ResourceCategory| {
        let usage: Vec<f64> = matches
            .iter()
            .map(|event| event.resource_usage.get(category) as f64)
            .collect();
        let average = match weighted_mean(&usage, &weights) {
            Some(value) => value,
            None => {
                uniform_weighting = true;
                mean(&usage)
            }
        };
        scale(truncate_quantity(average))
    });

    if uniform_weighting {
        debug!(region, magnitude, "matched magnitudes sum to zero, using uniform average");
    }
    debug!(
        region,
        magnitude,
        basis = ?basis,
        matched = matches.len(),
        factor,
        "forecast computed"
    );

    Forecast {
        need,
        basis,
        matched_events: matches.len(),
        uniform_weighting,
        scale_factor: factor,
    }
}

pub fn forecast(region: &str, magnitude: f64, history: &[HistoricalEvent]) -> ForecastedNeed {
    forecast_with(region, magnitude, history, &ForecastSettings::default()).need
}
