use chrono::NaiveDate;

use reliefcore::alerts::AlertBrief;
use reliefcore::allocator::{allocate, plan_region, PlanStatus, PlanningContext};
use reliefcore::config::EngineConfig;
use reliefcore::drones::{plan, MissionCategory};
use reliefcore::fixtures::{SampleData, SAMPLE_REGIONS};
use reliefcore::forecast::forecast;
use reliefcore::inventory::reconcile;
use reliefcore::models::{DroneStatus, DroneType, DroneUnit, GeoPoint, ItemType, LogisticsCapacity};
use reliefcore::routing::{optimize, CoordinateTable};
use reliefcore::severity::{severity_tier, SeverityTier};

fn as_of() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
}

#[test]
fn delta_without_history_or_stock() {
    assert_eq!(severity_tier(6.0), SeverityTier::High);

    let need = forecast("Delta", 6.0, &[]);
    assert_eq!(
        (need.water_liters, need.food_kg, need.medicine_units, need.shelter_kits, need.ambulances, need.relief_teams),
        (6000, 2400, 600, 240, 12, 6)
    );

    let reconciliation = reconcile("Delta", &need, &[]);
    for (item_type, expected) in [
        (ItemType::Water, 6000),
        (ItemType::Food, 2400),
        (ItemType::Medicine, 600),
        (ItemType::Shelter, 240),
    ] {
        assert_eq!(reconciliation.status[&item_type].available, 0);
        assert_eq!(reconciliation.deficits[&item_type], expected);
    }
}

#[test]
fn lone_delivery_drone_in_delta() {
    let fleet = vec![DroneUnit {
        region: "Delta".into(),
        id: "DR-DE-101".into(),
        drone_type: DroneType::Delivery,
        status: DroneStatus::Ready,
        battery_level: 80,
        max_payload_kg: 7.5,
        range_km: 20.0,
        base_location: "Delta Base 1".into(),
    }];
    let deployment = plan("Delta", 3.0, &fleet, false, true);
    assert_eq!(deployment.get(MissionCategory::Delivery).len(), 1);
    assert_eq!(deployment.get(MissionCategory::Delivery)[0].payload_kg, 7.5);
    assert!(deployment.get(MissionCategory::Assessment).is_empty());
    assert!(deployment.get(MissionCategory::Communication).is_empty());
    assert!(deployment.get(MissionCategory::Surveillance).is_empty());
}

#[test]
fn route_from_delta_skips_foxtrot() {
    let coordinates = CoordinateTable::from([
        ("Delta".to_string(), GeoPoint::new(0.0, 0.0)),
        ("Echo".to_string(), GeoPoint::new(0.0, 1.0)),
    ]);
    let route = optimize("Delta", &["Echo", "Foxtrot"], &coordinates);
    assert_eq!(route.stops, vec!["Echo"]);
    assert!((route.total_distance_km - 111.2).abs() < 0.05);
    assert!(!route.stops.iter().any(|stop| stop == "Foxtrot"));
}

#[test]
fn full_plan_for_delta_is_fully_populated() {
    let config = EngineConfig::default();
    let coordinates = CoordinateTable::from([("Delta".to_string(), GeoPoint::new(0.0, 0.0))]);
    let capacity = LogisticsCapacity {
        region: "Delta".into(),
        shelter_centers: 10,
        ambulances: 20,
        relief_supplies_tons: 45,
        medical_teams: 9,
        drones_available: 7,
        autonomous_vehicles: 4,
        emergency_contact: "+918767549928".into(),
    };
    let ctx = PlanningContext {
        history: &[],
        inventory: &[],
        fleet: &[],
        coordinates: &coordinates,
        config: &config,
    };
    let plan = allocate("Delta", 6.0, Some(&capacity), &ctx);

    assert_eq!(plan.status, PlanStatus::Complete);
    assert_eq!(plan.severity_tier, SeverityTier::High);
    assert_eq!(plan.forecasted_need.water_liters, 6000);
    assert_eq!(plan.resource_gaps.len(), 4);
    assert_eq!(plan.capacity_allocation.ambulances, 16);
    assert_eq!(plan.optimal_route, vec!["Delta"]);

    let brief = AlertBrief::from_plan(&plan).unwrap();
    assert_eq!(brief.shelter_info, "10 centers activated");
    assert_eq!(brief.medical_info, "9 teams deployed");
    assert_eq!(brief.deficits.len(), 4);
    assert!(brief.drone_missions.is_empty());
    assert!(brief.sms_body("Delta City").starts_with("Earthquake Alert: Delta City affected."));
    assert!(brief.gap_lines().contains(&"Gap: 6000 units of Water needed".to_string()));
}

#[test]
fn not_found_plans_have_no_brief() {
    let config = EngineConfig::default();
    let coordinates = CoordinateTable::new();
    let ctx = PlanningContext {
        history: &[],
        inventory: &[],
        fleet: &[],
        coordinates: &coordinates,
        config: &config,
    };
    let plan = allocate("Delta", 6.0, None, &ctx);
    assert!(AlertBrief::from_plan(&plan).is_none());
}

#[test]
fn sample_data_is_reproducible() {
    let first = SampleData::generate(7, as_of());
    let second = SampleData::generate(7, as_of());
    assert_eq!(first.history, second.history);
    assert_eq!(first.inventory, second.inventory);
    assert_eq!(first.fleet, second.fleet);
    assert_eq!(first.capacities.len(), SAMPLE_REGIONS.len());
    assert_eq!(first.inventory.len(), SAMPLE_REGIONS.len() * 17);
    assert!(first
        .inventory
        .iter()
        .all(|record| record.status == record.derived_status()));
    assert!(first
        .history
        .iter()
        .all(|event| (3.0..=7.5).contains(&event.magnitude)));
    assert!(first.fleet.iter().all(|unit| (30..=100).contains(&unit.battery_level)));
}

#[test]
fn sample_registry_plans_every_region() {
    let registry = SampleData::generate(42, as_of()).into_registry();
    let config = EngineConfig::default();
    for region in SAMPLE_REGIONS {
        let plan = plan_region(&registry, region, 6.8, &config).unwrap();
        assert_eq!(plan.status, PlanStatus::Complete);
        assert_eq!(plan.optimal_route, vec![region.to_string()]);
        assert!(plan.drone_deployment.get(MissionCategory::Communication).len() <= 1);
        let ids = plan.drone_deployment.drone_ids();
        let mut unique = ids.clone();
        unique.sort_unstable();
        unique.dedup();
        assert_eq!(unique.len(), ids.len());
    }
}
