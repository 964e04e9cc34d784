use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::ForecastedNeed;

pub const ENV_PREFIX: &str = "RELIEF";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForecastSettings {
    /// Half-width of the magnitude band counted as a similar event.
    pub similarity_window: f64,
    /// Magnitude above which forecasts are scaled up.
    pub scale_threshold: f64,
    /// Scale-up per magnitude unit above the threshold.
    pub scale_step: f64,
    /// Terminal fallback when no history exists at all.
    pub default_need: ForecastedNeed,
}

impl Default for ForecastSettings {
    fn default() -> Self {
        Self {
            similarity_window: 0.5,
            scale_threshold: 5.0,
            scale_step: 0.2,
            default_need: ForecastedNeed {
                water_liters: 5000,
                food_kg: 2000,
                medicine_units: 500,
                shelter_kits: 200,
                ambulances: 10,
                relief_teams: 5,
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DroneSettings {
    pub min_battery: u8,
    pub assessment_limit: usize,
    pub delivery_limit: usize,
    pub communication_limit: usize,
    pub surveillance_limit: usize,
    pub communication_magnitude: f64,
}

impl Default for DroneSettings {
    fn default() -> Self {
        Self {
            min_battery: 70,
            assessment_limit: 2,
            delivery_limit: 3,
            communication_limit: 1,
            surveillance_limit: 2,
            communication_magnitude: 5.5,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InventorySettings {
    pub expiry_horizon_days: u64,
}

impl Default for InventorySettings {
    fn default() -> Self {
        Self {
            expiry_horizon_days: 30,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub forecast: ForecastSettings,
    pub drones: DroneSettings,
    pub inventory: InventorySettings,
}

impl EngineConfig {
    /// Layers an optional config file and `RELIEF_*` environment variables over
    /// the defaults. Nested keys use `__`, e.g. `RELIEF_DRONES__MIN_BATTERY=80`.
    pub fn load(path: Option<&Path>) -> Result<Self, EngineError> {
        let mut builder = config::Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path).required(false));
        }
        let settings = builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;
        Ok(settings.try_deserialize()?)
    }
}
