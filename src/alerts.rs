//! Payload handed to the notification layer. Delivery itself (email, SMS)
//! happens outside the engine.

use serde::{Deserialize, Serialize};

use crate::allocator::AllocationPlan;
use crate::drones::MissionCategory;
use crate::models::ItemType;
use crate::severity::SeverityTier;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DroneMission {
    pub drone_id: String,
    pub category: MissionCategory,
    pub mission: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AlertBrief {
    pub region: String,
    pub severity_tier: SeverityTier,
    pub shelter_info: String,
    pub medical_info: String,
    pub emergency_contact: String,
    pub deficits: Vec<(ItemType, u64)>,
    pub drone_missions: Vec<DroneMission>,
}

impl AlertBrief {
    /// `None` for plans that were not found.
    pub fn from_plan(plan: &AllocationPlan) -> Option<Self> {
        if !plan.is_found() {
            return None;
        }
        let capacity = &plan.capacity_allocation;
        let drone_missions = plan
            .drone_deployment
            .iter()
            .flat_map(|(category, assigned)| {
                assigned.iter().map(move |assignment| DroneMission {
                    drone_id: assignment.drone_id.clone(),
                    category,
                    mission: assignment.mission.clone(),
                })
            })
            .collect();

        Some(Self {
            region: plan.region.clone(),
            severity_tier: plan.severity_tier,
            shelter_info: format!("{} centers activated", capacity.shelter_centers),
            medical_info: format!("{} teams deployed", capacity.medical_teams),
            emergency_contact: capacity.emergency_contact.clone(),
            deficits: plan.resource_gaps.iter().map(|(item, gap)| (*item, *gap)).collect(),
            drone_missions,
        })
    }

    pub fn sms_body(&self, location: &str) -> String {
        format!(
            "Earthquake Alert: {location} affected. Take precautions! \nShelter: {}. \nMedical: {}. \nDrop, Cover, Hold On. Move to open area if outside.",
            self.shelter_info, self.medical_info
        )
    }

    /// One line per shortfall, for procurement notices.
    pub fn gap_lines(&self) -> Vec<String> {
        self.deficits
            .iter()
            .map(|(item, gap)| format!("Gap: {gap} units of {item} needed"))
            .collect()
    }
}
