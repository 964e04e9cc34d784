use std::collections::BTreeMap;
use std::num::NonZeroUsize;
use std::thread;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::EngineConfig;
use crate::drones::{plan_with, DeploymentPlan, DeploymentRequest};
use crate::error::EngineError;
use crate::forecast::{forecast_with, ForecastBasis};
use crate::inventory::{reconcile, SufficiencyInfo};
use crate::models::{DroneUnit, ForecastedNeed, HistoricalEvent, InventoryRecord, ItemType, LogisticsCapacity};
use crate::routing::{optimize, round_km, CoordinateTable, RouteCondition};
use crate::severity::{classify, SeverityTier};
use crate::source::{ReliefDataSource, Snapshot};
use crate::statistics::truncate_quantity;
use crate::telemetry::mask_contact;

/// Share of a region's fixed capacity released for one event.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapacityAllocation {
    pub shelter_centers: u32,
    pub ambulances: u32,
    pub medical_teams: u32,
    pub drones_to_deploy: u32,
    pub emergency_contact: String,
}

fn scaled(value: u32, multiplier: f64) -> u32 {
    truncate_quantity(f64::from(value) * multiplier).min(u64::from(u32::MAX)) as u32
}

pub fn scale_capacity(capacity: &LogisticsCapacity, tier: SeverityTier) -> CapacityAllocation {
    CapacityAllocation {
        shelter_centers: scaled(capacity.shelter_centers, tier.shelter_multiplier()),
        ambulances: scaled(capacity.ambulances, tier.ambulance_multiplier()),
        medical_teams: scaled(capacity.medical_teams, tier.shelter_multiplier()),
        drones_to_deploy: scaled(capacity.drones_available, tier.drone_multiplier()),
        emergency_contact: capacity.emergency_contact.clone(),
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlanStatus {
    #[default]
    Complete,
    NotFound,
}

/// Fallbacks taken while building a plan. None of them make the plan partial.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Advisory {
    /// Forecast drew on region or global history instead of similar events.
    HistoryFallback(ForecastBasis),
    /// No history at all; the fixed default estimate was used.
    DefaultForecast,
    UniformWeighting,
    UnknownOrigin(String),
    MissingCoordinates(Vec<String>),
    NoEligibleDrones,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AllocationPlan {
    pub region: String,
    pub magnitude: f64,
    pub status: PlanStatus,
    pub severity_tier: SeverityTier,
    pub severity_weight: f64,
    pub capacity_allocation: CapacityAllocation,
    pub forecasted_need: ForecastedNeed,
    pub inventory_status: BTreeMap<ItemType, SufficiencyInfo>,
    pub resource_gaps: BTreeMap<ItemType, u64>,
    pub optimal_route: Vec<String>,
    pub route_distance_km: f64,
    pub drone_deployment: DeploymentPlan,
    pub advisories: Vec<Advisory>,
}

impl AllocationPlan {
    /// Zero-valued plan for a region without a capacity record.
    pub fn not_found(region: &str, magnitude: f64) -> Self {
        Self {
            region: region.to_string(),
            magnitude,
            status: PlanStatus::NotFound,
            severity_tier: SeverityTier::default(),
            severity_weight: 0.0,
            capacity_allocation: CapacityAllocation::default(),
            forecasted_need: ForecastedNeed::default(),
            inventory_status: BTreeMap::new(),
            resource_gaps: BTreeMap::new(),
            optimal_route: Vec::new(),
            route_distance_km: 0.0,
            drone_deployment: DeploymentPlan::default(),
            advisories: Vec::new(),
        }
    }

    pub fn is_found(&self) -> bool {
        self.status == PlanStatus::Complete
    }
}

/// Read-only inputs for one allocation.
#[derive(Clone, Copy)]
pub struct PlanningContext<'a> {
    pub history: &'a [HistoricalEvent],
    pub inventory: &'a [InventoryRecord],
    pub fleet: &'a [DroneUnit],
    pub coordinates: &'a CoordinateTable,
    pub config: &'a EngineConfig,
}

impl<'a> PlanningContext<'a> {
    pub fn from_snapshot(snapshot: &'a Snapshot, config: &'a EngineConfig) -> Self {
        Self {
            history: &snapshot.history,
            inventory: &snapshot.inventory,
            fleet: &snapshot.fleet,
            coordinates: &snapshot.coordinates,
            config,
        }
    }
}

pub fn allocate(
    region: &str,
    magnitude: f64,
    capacity: Option<&LogisticsCapacity>,
    ctx: &PlanningContext<'_>,
) -> AllocationPlan {
    allocate_across(region, magnitude, capacity, &[region], ctx)
}

/// Allocation whose delivery route runs from `region`'s base over every
/// affected area.
pub fn allocate_across<S: AsRef<str>>(
    region: &str,
    magnitude: f64,
    capacity: Option<&LogisticsCapacity>,
    affected_areas: &[S],
    ctx: &PlanningContext<'_>,
) -> AllocationPlan {
    let Some(capacity) = capacity.filter(|record| record.region == region) else {
        warn!(region, magnitude, "no logistics capacity for region");
        return AllocationPlan::not_found(region, magnitude);
    };

    let (tier, weight) = classify(magnitude);
    let mut advisories = Vec::new();

    let forecast = forecast_with(region, magnitude, ctx.history, &ctx.config.forecast);
    match forecast.basis {
        ForecastBasis::SimilarEvents => {}
        ForecastBasis::Default => advisories.push(Advisory::DefaultForecast),
        basis => advisories.push(Advisory::HistoryFallback(basis)),
    }
    if forecast.uniform_weighting {
        advisories.push(Advisory::UniformWeighting);
    }

    let reconciliation = reconcile(region, &forecast.need, ctx.inventory);

    let route = optimize(region, affected_areas, ctx.coordinates);
    if let Some(RouteCondition::UnknownOrigin(origin)) = &route.condition {
        advisories.push(Advisory::UnknownOrigin(origin.clone()));
    }
    if !route.unresolved.is_empty() {
        advisories.push(Advisory::MissingCoordinates(route.unresolved.clone()));
    }

    let request = DeploymentRequest {
        region,
        magnitude,
        need_assessment: true,
        delivery_needed: reconciliation.has_deficits(),
    };
    let drone_deployment = plan_with(&request, ctx.fleet, &ctx.config.drones);
    if drone_deployment.total_assigned() == 0 {
        advisories.push(Advisory::NoEligibleDrones);
    }

    let capacity_allocation = scale_capacity(capacity, tier);

    info!(
        region,
        magnitude,
        tier = %tier,
        gaps = reconciliation.deficits.len(),
        drones = drone_deployment.total_assigned(),
        contact = %mask_contact(&capacity_allocation.emergency_contact),
        "allocation plan assembled"
    );

    AllocationPlan {
        region: region.to_string(),
        magnitude,
        status: PlanStatus::Complete,
        severity_tier: tier,
        severity_weight: weight,
        capacity_allocation,
        forecasted_need: forecast.need,
        inventory_status: reconciliation.status,
        resource_gaps: reconciliation.deficits,
        optimal_route: route.stops,
        route_distance_km: round_km(route.total_distance_km),
        drone_deployment,
        advisories,
    }
}

/// Pulls a snapshot from `source` and allocates against it. Source failures
/// are the only errors returned.
pub fn plan_region<S: ReliefDataSource + ?Sized>(
    source: &S,
    region: &str,
    magnitude: f64,
    config: &EngineConfig,
) -> Result<AllocationPlan, EngineError> {
    let snapshot = Snapshot::capture(source, region)?;
    let ctx = PlanningContext::from_snapshot(&snapshot, config);
    Ok(allocate(region, magnitude, snapshot.capacity.as_ref(), &ctx))
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AllocationRequest {
    pub region: String,
    pub magnitude: f64,
}

impl AllocationRequest {
    pub fn new(region: impl Into<String>, magnitude: f64) -> Self {
        Self {
            region: region.into(),
            magnitude,
        }
    }
}

fn batch_width() -> usize {
    thread::available_parallelism().map(NonZeroUsize::get).unwrap_or(1)
}

/// Evaluates independent requests in parallel, at most one thread per
/// available core at a time. Results keep request order.
pub fn allocate_batch<S: ReliefDataSource + ?Sized>(
    source: &S,
    requests: &[AllocationRequest],
    config: &EngineConfig,
) -> Vec<Result<AllocationPlan, EngineError>> {
    let mut results = Vec::with_capacity(requests.len());
    for chunk in requests.chunks(batch_width()) {
        thread::scope(|scope| {
            let handles: Vec<_> = chunk
                .iter()
                .map(|request| scope.spawn(move || plan_region(source, &request.region, request.magnitude, config)))
                .collect();
            results.extend(
                handles
                    .into_iter()
                    .map(|handle| handle.join().unwrap_or_else(|payload| std::panic::resume_unwind(payload))),
            );
        });
    }
    results
}
