pub mod alerts;
pub mod allocator;
pub mod config;
pub mod drones;
pub mod error;
pub mod fixtures;
pub mod forecast;
pub mod inventory;
pub mod models;
pub mod registry;
pub mod routing;
pub mod severity;
pub mod source;
pub mod statistics;
pub mod telemetry;

pub use crate::allocator::{allocate, allocate_across, allocate_batch, plan_region, AllocationPlan, AllocationRequest};
pub use crate::config::EngineConfig;
pub use crate::error::EngineError;
pub use crate::registry::ResourceRegistry;
pub use crate::source::ReliefDataSource;
