use std::collections::HashSet;

use reliefcore::config::DroneSettings;
use reliefcore::drones::{is_eligible, plan, plan_with, DeploymentRequest, MissionCategory};
use reliefcore::models::{DroneStatus, DroneType, DroneUnit};

fn drone(id: &str, drone_type: DroneType, status: DroneStatus, battery: u8) -> DroneUnit {
    DroneUnit {
        region: "Delta".into(),
        id: id.into(),
        drone_type,
        status,
        battery_level: battery,
        max_payload_kg: 4.5,
        range_km: 30.0,
        base_location: "Delta Base 1".into(),
    }
}

fn mixed_fleet() -> Vec<DroneUnit> {
    vec![
        drone("S1", DroneType::Surveillance, DroneStatus::Ready, 90),
        drone("S2", DroneType::Surveillance, DroneStatus::Ready, 85),
        drone("S3", DroneType::Surveillance, DroneStatus::Ready, 75),
        drone("A1", DroneType::Assessment, DroneStatus::Ready, 100),
        drone("D1", DroneType::Delivery, DroneStatus::Ready, 70),
        drone("D2", DroneType::Delivery, DroneStatus::Charging, 95),
        drone("D3", DroneType::Delivery, DroneStatus::Ready, 69),
        drone("C1", DroneType::Communication, DroneStatus::Ready, 80),
        drone("C2", DroneType::Communication, DroneStatus::Ready, 80),
    ]
}

#[test]
fn eligibility_requires_ready_and_charge() {
    let fleet = mixed_fleet();
    assert!(is_eligible(&fleet[4], "Delta", 70));
    assert!(!is_eligible(&fleet[5], "Delta", 70));
    assert!(!is_eligible(&fleet[6], "Delta", 70));
    assert!(!is_eligible(&fleet[0], "Echo", 70));
}

#[test]
fn single_delivery_drone_low_magnitude() {
    let fleet = vec![drone("D1", DroneType::Delivery, DroneStatus::Ready, 80)];
    let deployment = plan("Delta", 3.0, &fleet, false, true);
    assert_eq!(deployment.get(MissionCategory::Delivery).len(), 1);
    assert!(deployment.get(MissionCategory::Assessment).is_empty());
    assert!(deployment.get(MissionCategory::Communication).is_empty());
    assert!(deployment.get(MissionCategory::Surveillance).is_empty());
    assert_eq!(deployment.iter().count(), 4);
}

#[test]
fn assessment_consumes_surveillance_units_first() {
    let deployment = plan("Delta", 6.0, &mixed_fleet(), true, true);

    let assessment: Vec<&str> = deployment
        .get(MissionCategory::Assessment)
        .iter()
        .map(|a| a.drone_id.as_str())
        .collect();
    assert_eq!(assessment, vec!["S1", "S2"]);

    let surveillance: Vec<&str> = deployment
        .get(MissionCategory::Surveillance)
        .iter()
        .map(|a| a.drone_id.as_str())
        .collect();
    assert_eq!(surveillance, vec!["S3"]);

    let delivery = deployment.get(MissionCategory::Delivery);
    assert_eq!(delivery.len(), 1);
    assert_eq!(delivery[0].drone_id, "D1");
    assert_eq!(delivery[0].mission, "Deliver emergency medical supplies and water");

    assert_eq!(deployment.get(MissionCategory::Communication).len(), 1);
}

#[test]
fn communication_requires_high_magnitude() {
    let deployment = plan("Delta", 5.49, &mixed_fleet(), false, false);
    assert!(deployment.get(MissionCategory::Communication).is_empty());
    assert!(deployment.get(MissionCategory::Delivery).is_empty());
    assert_eq!(deployment.get(MissionCategory::Surveillance).len(), 2);

    let deployment = plan("Delta", 5.5, &mixed_fleet(), false, false);
    assert_eq!(deployment.get(MissionCategory::Communication).len(), 1);
}

#[test]
fn no_drone_is_assigned_twice() {
    let mut fleet = mixed_fleet();
    fleet.push(drone("S1", DroneType::Surveillance, DroneStatus::Ready, 99));
    fleet.push(drone("A2", DroneType::Assessment, DroneStatus::Ready, 99));

    for (need_assessment, delivery_needed, magnitude) in
        [(true, true, 8.0), (true, false, 4.0), (false, true, 6.0), (false, false, 2.0)]
    {
        let deployment = plan("Delta", magnitude, &fleet, need_assessment, delivery_needed);
        let ids = deployment.drone_ids();
        let unique: HashSet<&str> = ids.iter().copied().collect();
        assert_eq!(unique.len(), ids.len());
        assert_eq!(ids.len(), deployment.total_assigned());
    }
}

#[test]
fn empty_fleet_produces_empty_categories() {
    let deployment = plan("Delta", 9.0, &[], true, true);
    assert_eq!(deployment.total_assigned(), 0);
    assert_eq!(deployment.iter().count(), 4);
}

#[test]
fn settings_override_limits_and_battery() {
    let settings = DroneSettings {
        min_battery: 90,
        surveillance_limit: 5,
        ..DroneSettings::default()
    };
    let request = DeploymentRequest {
        region: "Delta",
        magnitude: 2.0,
        need_assessment: false,
        delivery_needed: false,
    };
    let deployment = plan_with(&request, &mixed_fleet(), &settings);
    let surveillance: Vec<&str> = deployment
        .get(MissionCategory::Surveillance)
        .iter()
        .map(|a| a.drone_id.as_str())
        .collect();
    assert_eq!(surveillance, vec!["S1"]);
}
