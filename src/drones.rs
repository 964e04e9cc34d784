use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::config::DroneSettings;
use crate::models::{DroneStatus, DroneType, DroneUnit};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissionCategory {
    Assessment,
    Delivery,
    Communication,
    Surveillance,
}

impl MissionCategory {
    pub const ALL: [MissionCategory; 4] = [
        MissionCategory::Assessment,
        MissionCategory::Delivery,
        MissionCategory::Communication,
        MissionCategory::Surveillance,
    ];

    pub fn mission(self) -> &'static str {
        match self {
            MissionCategory::Assessment => "Rapid damage assessment and search for victims",
            MissionCategory::Delivery => "Deliver emergency medical supplies and water",
            MissionCategory::Communication => "Establish emergency communication network",
            MissionCategory::Surveillance => "Continuous monitoring of affected areas and population movements",
        }
    }

    fn accepts(self, drone_type: DroneType) -> bool {
        match self {
            MissionCategory::Assessment => {
                matches!(drone_type, DroneType::Assessment | DroneType::Surveillance)
            }
            MissionCategory::Delivery => drone_type == DroneType::Delivery,
            MissionCategory::Communication => drone_type == DroneType::Communication,
            MissionCategory::Surveillance => drone_type == DroneType::Surveillance,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MissionAssignment {
    pub drone_id: String,
    pub drone_type: DroneType,
    pub range_km: f64,
    pub payload_kg: f64,
    pub mission: String,
}

/// Assignments keyed by category. Every category is present, possibly empty,
/// and a drone id appears at most once across the whole plan.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DeploymentPlan {
    assignments: BTreeMap<MissionCategory, Vec<MissionAssignment>>,
}

impl Default for DeploymentPlan {
    fn default() -> Self {
        Self {
            assignments: MissionCategory::ALL
                .into_iter()
                .map(|category| (category, Vec::new()))
                .collect(),
        }
    }
}

impl DeploymentPlan {
    pub fn get(&self, category: MissionCategory) -> &[MissionAssignment] {
        self.assignments
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = (MissionCategory, &[MissionAssignment])> {
        self.assignments
            .iter()
            .map(|(category, assigned)| (*category, assigned.as_slice()))
    }

    pub fn total_assigned(&self) -> usize {
        self.assignments.values().map(Vec::len).sum()
    }

    pub fn drone_ids(&self) -> Vec<&str> {
        self.assignments
            .values()
            .flatten()
            .map(|assignment| assignment.drone_id.as_str())
            .collect()
    }
}

pub struct DeploymentRequest<'a> {
    pub region: &'a str,
    pub magnitude: f64,
    pub need_assessment: bool,
    pub delivery_needed: bool,
}

pub fn is_eligible(unit: &DroneUnit, region: &str, min_battery: u8) -> bool {
    unit.region == region && unit.status == DroneStatus::Ready && unit.battery_level >= min_battery
}

pub fn plan_with(request: &DeploymentRequest<'_>, fleet: &[DroneUnit], settings: &DroneSettings) -> DeploymentPlan {
    let eligible: Vec<&DroneUnit> = fleet
        .iter()
        .filter(|unit| is_eligible(unit, request.region, settings.min_battery))
        .collect();

    let rules = [
        (MissionCategory::Assessment, request.need_assessment, settings.assessment_limit),
        (MissionCategory::Delivery, request.delivery_needed, settings.delivery_limit),
        (
            MissionCategory::Communication,
            request.magnitude >= settings.communication_magnitude,
            settings.communication_limit,
        ),
        (MissionCategory::Surveillance, true, settings.surveillance_limit),
    ];

    let mut plan = DeploymentPlan::default();
    let mut assigned: HashSet<&str> = HashSet::new();

    for (category, active, limit) in rules {
        if !active {
            continue;
        }
        let slot = plan.assignments.entry(category).or_default();
        for unit in eligible.iter().filter(|unit| category.accepts(unit.drone_type)) {
            if slot.len() >= limit {
                break;
            }
            // Rosters can repeat an id; the first claim wins.
            if !assigned.insert(unit.id.as_str()) {
                continue;
            }
            slot.push(MissionAssignment {
                drone_id: unit.id.clone(),
                drone_type: unit.drone_type,
                range_km: unit.range_km,
                payload_kg: unit.max_payload_kg,
                mission: category.mission().to_string(),
            });
        }
    }

    plan
}

pub fn plan(
    region: &str,
    magnitude: f64,
    fleet: &[DroneUnit],
    need_assessment: bool,
    delivery_needed: bool,
) -> DeploymentPlan {
    let request = DeploymentRequest {
        region,
        magnitude,
        need_assessment,
        delivery_needed,
    };
    plan_with(&request, fleet, &DroneSettings::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_plan_has_every_category() {
        let plan = DeploymentPlan::default();
        for category in MissionCategory::ALL {
            assert!(plan.get(category).is_empty());
        }
        assert_eq!(plan.iter().count(), 4);
    }

    #[test]
    fn assessment_accepts_surveillance_airframes() {
        assert!(MissionCategory::Assessment.accepts(DroneType::Surveillance));
        assert!(!MissionCategory::Delivery.accepts(DroneType::Surveillance));
    }
}
