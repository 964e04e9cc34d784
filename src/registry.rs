//! In-memory region store.
//!
//! Each region sits behind its own mutex so updates to one region are
//! serialized while other regions stay writable. Reads hand out snapshots;
//! the historical log is shared and never mutated after construction.

use std::sync::Arc;

use dashmap::DashMap;
use parking_lot::Mutex;

use crate::error::EngineError;
use crate::models::{normalize_statuses, CapacityField, DroneUnit, HistoricalEvent, InventoryRecord, LogisticsCapacity};
use crate::routing::CoordinateTable;
use crate::source::ReliefDataSource;
use crate::telemetry::{log_capacity_update, log_inventory_update};

#[derive(Clone, Debug, Default)]
pub struct RegionState {
    pub capacity: Option<LogisticsCapacity>,
    pub inventory: Vec<InventoryRecord>,
    pub fleet: Vec<DroneUnit>,
}

pub struct ResourceRegistry {
    regions: DashMap<String, Arc<Mutex<RegionState>>>,
    history: Arc<[HistoricalEvent]>,
    coordinates: CoordinateTable,
}

impl ResourceRegistry {
    pub fn new(history: Vec<HistoricalEvent>, coordinates: CoordinateTable) -> Self {
        Self {
            regions: DashMap::new(),
            history: history.into(),
            coordinates,
        }
    }

    fn region(&self, region: &str) -> Option<Arc<Mutex<RegionState>>> {
        self.regions.get(region).map(|entry| Arc::clone(entry.value()))
    }

    fn region_or_insert(&self, region: &str) -> Arc<Mutex<RegionState>> {
        Arc::clone(
            self.regions
                .entry(region.to_string())
                .or_insert_with(|| Arc::new(Mutex::new(RegionState::default())))
                .value(),
        )
    }

    pub fn regions(&self) -> Vec<String> {
        let mut names: Vec<String> = self.regions.iter().map(|entry| entry.key().clone()).collect();
        names.sort();
        names
    }

    pub fn history(&self) -> Arc<[HistoricalEvent]> {
        Arc::clone(&self.history)
    }

    pub fn insert_capacity(&self, capacity: LogisticsCapacity) {
        let state = self.region_or_insert(&capacity.region);
        state.lock().capacity = Some(capacity);
    }

    /// Adds records, re-deriving their status from quantity.
    pub fn insert_inventory(&self, mut records: Vec<InventoryRecord>) {
        normalize_statuses(&mut records);
        for record in records {
            let state = self.region_or_insert(&record.region);
            state.lock().inventory.push(record);
        }
    }

    pub fn insert_fleet(&self, units: Vec<DroneUnit>) {
        for unit in units {
            let state = self.region_or_insert(&unit.region);
            state.lock().fleet.push(unit);
        }
    }

    /// Overwrites one capacity field, returning the previous value.
    pub fn update_capacity(&self, region: &str, field: CapacityField, value: u32) -> Result<u32, EngineError> {
        let state = self.region(region).ok_or_else(|| EngineError::not_found(region))?;
        let mut guard = state.lock();
        let capacity = guard.capacity.as_mut().ok_or_else(|| EngineError::not_found(region))?;
        let previous = capacity.set(field, value);
        log_capacity_update(region, field, previous, value);
        Ok(previous)
    }

    pub fn set_inventory_quantity(&self, region: &str, item_name: &str, quantity: u64) -> Result<InventoryRecord, EngineError> {
        self.modify_inventory(region, item_name, |_| Ok(quantity))
    }

    /// Applies a signed delta, refusing to go below zero.
    pub fn adjust_inventory(&self, region: &str, item_name: &str, delta: i64) -> Result<InventoryRecord, EngineError> {
        self.modify_inventory(region, item_name, |current| {
            let updated = if delta >= 0 {
                current.checked_add(delta.unsigned_abs())
            } else {
                current.checked_sub(delta.unsigned_abs())
            };
            updated.ok_or_else(|| EngineError::InvalidQuantity {
                item: item_name.to_string(),
                current,
                delta,
            })
        })
    }

    fn modify_inventory(
        &self,
        region: &str,
        item_name: &str,
        next_quantity: impl FnOnce(u64) -> Result<u64, EngineError>,
    ) -> Result<InventoryRecord, EngineError> {
        let state = self.region(region).ok_or_else(|| EngineError::not_found(region))?;
        let mut guard = state.lock();
        let record = guard
            .inventory
            .iter_mut()
            .find(|record| record.item_name == item_name)
            .ok_or_else(|| EngineError::ItemNotFound {
                region: region.to_string(),
                item: item_name.to_string(),
            })?;
        let previous = record.quantity;
        record.set_quantity(next_quantity(previous)?);
        log_inventory_update(record, previous);
        Ok(record.clone())
    }

    pub fn snapshot(&self, region: &str) -> Option<RegionState> {
        self.region(region).map(|state| state.lock().clone())
    }
}

impl ReliefDataSource for ResourceRegistry {
    fn historical_events(&self) -> Result<Arc<[HistoricalEvent]>, EngineError> {
        Ok(self.history())
    }

    fn inventory(&self, region: &str) -> Result<Vec<InventoryRecord>, EngineError> {
        Ok(self.snapshot(region).map(|state| state.inventory).unwrap_or_default())
    }

    fn capacity(&self, region: &str) -> Result<Option<LogisticsCapacity>, EngineError> {
        Ok(self.snapshot(region).and_then(|state| state.capacity))
    }

    fn fleet(&self, region: &str) -> Result<Vec<DroneUnit>, EngineError> {
        Ok(self.snapshot(region).map(|state| state.fleet).unwrap_or_default())
    }

    fn coordinates(&self) -> Result<CoordinateTable, EngineError> {
        Ok(self.coordinates.clone())
    }
}
