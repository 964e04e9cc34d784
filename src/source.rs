//! Boundary through which upstream collaborators hand data to the engine.

use std::sync::Arc;

use crate::error::EngineError;
use crate::models::{DroneUnit, HistoricalEvent, InventoryRecord, LogisticsCapacity};
use crate::routing::CoordinateTable;

/// Supplies already-materialized inputs for one allocation. Implementations
/// own any I/O, caching, or retries; a failure here is the only error the
/// engine propagates.
pub trait ReliefDataSource: Send + Sync {
    /// Shared across concurrent requests; callers never copy the log.
    fn historical_events(&self) -> Result<Arc<[HistoricalEvent]>, EngineError>;

    fn inventory(&self, region: &str) -> Result<Vec<InventoryRecord>, EngineError>;

    /// `Ok(None)` means the region is unknown, not that the source failed.
    fn capacity(&self, region: &str) -> Result<Option<LogisticsCapacity>, EngineError>;

    fn fleet(&self, region: &str) -> Result<Vec<DroneUnit>, EngineError>;

    fn coordinates(&self) -> Result<CoordinateTable, EngineError>;
}

/// Everything one allocation reads, captured up front.
#[derive(Clone, Debug)]
pub struct Snapshot {
    pub history: Arc<[HistoricalEvent]>,
    pub inventory: Vec<InventoryRecord>,
    pub capacity: Option<LogisticsCapacity>,
    pub fleet: Vec<DroneUnit>,
    pub coordinates: CoordinateTable,
}

impl Snapshot {
    pub fn capture<S: ReliefDataSource + ?Sized>(source: &S, region: &str) -> Result<Self, EngineError> {
        Ok(Self {
            history: source.historical_events()?,
            inventory: source.inventory(region)?,
            capacity: source.capacity(region)?,
            fleet: source.fleet(region)?,
            coordinates: source.coordinates()?,
        })
    }
}
