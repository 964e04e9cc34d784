use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Resource categories tracked by historical usage and forecasts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceCategory {
    WaterLiters,
    FoodKg,
    MedicineUnits,
    ShelterKits,
    Ambulances,
    ReliefTeams,
}

impl ResourceCategory {
    pub const ALL: [ResourceCategory; 6] = [
        ResourceCategory::WaterLiters,
        ResourceCategory::FoodKg,
        ResourceCategory::MedicineUnits,
        ResourceCategory::ShelterKits,
        ResourceCategory::Ambulances,
        ResourceCategory::ReliefTeams,
    ];
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceUsage {
    pub water_liters: u64,
    pub food_kg: u64,
    pub medicine_units: u64,
    pub shelter_kits: u64,
    pub ambulances: u64,
    pub relief_teams: u64,
}

impl ResourceUsage {
    pub fn get(&self, category: ResourceCategory) -> u64 {
        match category {
            ResourceCategory::WaterLiters => self.water_liters,
            ResourceCategory::FoodKg => self.food_kg,
            ResourceCategory::MedicineUnits => self.medicine_units,
            ResourceCategory::ShelterKits => self.shelter_kits,
            ResourceCategory::Ambulances => self.ambulances,
            ResourceCategory::ReliefTeams => self.relief_teams,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoricalEvent {
    pub date: NaiveDate,
    pub region: String,
    pub magnitude: f64,
    pub affected_population: u64,
    pub resource_usage: ResourceUsage,
}

/// Estimated quantities for one region/magnitude query. Unsigned fields keep
/// every forecast non-negative.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastedNeed {
    pub water_liters: u64,
    pub food_kg: u64,
    pub medicine_units: u64,
    pub shelter_kits: u64,
    pub ambulances: u64,
    pub relief_teams: u64,
}

impl ForecastedNeed {
    pub fn from_fn(mut quantity: impl FnMut(ResourceCategory) -> u64) -> Self {
        Self {
            water_liters: quantity(ResourceCategory::WaterLiters),
            food_kg: quantity(ResourceCategory::FoodKg),
            medicine_units: quantity(ResourceCategory::MedicineUnits),
            shelter_kits: quantity(ResourceCategory::ShelterKits),
            ambulances: quantity(ResourceCategory::Ambulances),
            relief_teams: quantity(ResourceCategory::ReliefTeams),
        }
    }

    pub fn get(&self, category: ResourceCategory) -> u64 {
        match category {
            ResourceCategory::WaterLiters => self.water_liters,
            ResourceCategory::FoodKg => self.food_kg,
            ResourceCategory::MedicineUnits => self.medicine_units,
            ResourceCategory::ShelterKits => self.shelter_kits,
            ResourceCategory::Ambulances => self.ambulances,
            ResourceCategory::ReliefTeams => self.relief_teams,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ItemType {
    Food,
    Water,
    Medicine,
    Shelter,
    Equipment,
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ItemType::Food => "Food",
            ItemType::Water => "Water",
            ItemType::Medicine => "Medicine",
            ItemType::Shelter => "Shelter",
            ItemType::Equipment => "Equipment",
        };
        f.write_str(label)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StockStatus {
    Adequate,
    Low,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InventoryRecord {
    pub region: String,
    pub item_type: ItemType,
    pub item_name: String,
    pub quantity: u64,
    pub unit: String,
    pub expiry: NaiveDate,
    pub status: StockStatus,
    pub reorder_level: u64,
    pub optimal_level: u64,
}

impl InventoryRecord {
    /// Status implied by the stock level; the stored `status` is not trusted.
    pub fn derived_status(&self) -> StockStatus {
        if self.quantity < self.reorder_level {
            StockStatus::Low
        } else {
            StockStatus::Adequate
        }
    }

    pub fn set_quantity(&mut self, quantity: u64) {
        self.quantity = quantity;
        self.status = self.derived_status();
    }
}

/// Overwrites every record's status with the one derived from its quantity.
pub fn normalize_statuses(records: &mut [InventoryRecord]) {
    for record in records.iter_mut() {
        record.status = record.derived_status();
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogisticsCapacity {
    pub region: String,
    pub shelter_centers: u32,
    pub ambulances: u32,
    pub relief_supplies_tons: u32,
    pub medical_teams: u32,
    pub drones_available: u32,
    pub autonomous_vehicles: u32,
    pub emergency_contact: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CapacityField {
    ShelterCenters,
    Ambulances,
    ReliefSuppliesTons,
    MedicalTeams,
    DronesAvailable,
    AutonomousVehicles,
}

impl FromStr for CapacityField {
    type Err = EngineError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim() {
            "shelter_centers" => Ok(CapacityField::ShelterCenters),
            "ambulances" => Ok(CapacityField::Ambulances),
            "relief_supplies_tons" => Ok(CapacityField::ReliefSuppliesTons),
            "medical_teams" => Ok(CapacityField::MedicalTeams),
            "drones_available" => Ok(CapacityField::DronesAvailable),
            "autonomous_vehicles" => Ok(CapacityField::AutonomousVehicles),
            other => Err(EngineError::UnknownField(other.to_string())),
        }
    }
}

impl LogisticsCapacity {
    pub fn get(&self, field: CapacityField) -> u32 {
        match field {
            CapacityField::ShelterCenters => self.shelter_centers,
            CapacityField::Ambulances => self.ambulances,
            CapacityField::ReliefSuppliesTons => self.relief_supplies_tons,
            CapacityField::MedicalTeams => self.medical_teams,
            CapacityField::DronesAvailable => self.drones_available,
            CapacityField::AutonomousVehicles => self.autonomous_vehicles,
        }
    }

    /// Overwrites a single field and returns the previous value.
    pub fn set(&mut self, field: CapacityField, value: u32) -> u32 {
        let slot = match field {
            CapacityField::ShelterCenters => &mut self.shelter_centers,
            CapacityField::Ambulances => &mut self.ambulances,
            CapacityField::ReliefSuppliesTons => &mut self.relief_supplies_tons,
            CapacityField::MedicalTeams => &mut self.medical_teams,
            CapacityField::DronesAvailable => &mut self.drones_available,
            CapacityField::AutonomousVehicles => &mut self.autonomous_vehicles,
        };
        std::mem::replace(slot, value)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DroneType {
    Surveillance,
    Delivery,
    Communication,
    Assessment,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DroneStatus {
    Ready,
    Charging,
    Maintenance,
    Deployed,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DroneUnit {
    pub region: String,
    pub id: String,
    pub drone_type: DroneType,
    pub status: DroneStatus,
    pub battery_level: u8,
    pub max_payload_kg: f64,
    pub range_km: f64,
    pub base_location: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}
