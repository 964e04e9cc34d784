use std::collections::BTreeMap;

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{ForecastedNeed, InventoryRecord, ItemType, StockStatus};
use crate::statistics::capped_percentage;

/// Item types reconciled against a forecast, paired with the need they cover.
/// Equipment has no forecasted counterpart and is left out.
pub const RECONCILED_TYPES: [ItemType; 4] = [ItemType::Water, ItemType::Food, ItemType::Medicine, ItemType::Shelter];

pub fn needed_for(item_type: ItemType, need: &ForecastedNeed) -> Option<u64> {
    match item_type {
        ItemType::Water => Some(need.water_liters),
        ItemType::Food => Some(need.food_kg),
        ItemType::Medicine => Some(need.medicine_units),
        ItemType::Shelter => Some(need.shelter_kits),
        ItemType::Equipment => None,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sufficiency {
    Sufficient,
    Insufficient,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SufficiencyInfo {
    pub available: u64,
    pub needed: u64,
    pub status: Sufficiency,
    pub sufficiency_pct: u8,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reconciliation {
    pub status: BTreeMap<ItemType, SufficiencyInfo>,
    /// Only categories that are short; never holds a zero.
    pub deficits: BTreeMap<ItemType, u64>,
}

impl Reconciliation {
    pub fn has_deficits(&self) -> bool {
        !self.deficits.is_empty()
    }
}

pub fn stock_by_type<'a>(
    region: &str,
    inventory: impl IntoIterator<Item = &'a InventoryRecord>,
) -> BTreeMap<ItemType, u64> {
    let mut totals = BTreeMap::new();
    for record in inventory.into_iter().filter(|record| record.region == region) {
        let entry = totals.entry(record.item_type).or_insert(0_u64);
        *entry = entry.saturating_add(record.quantity);
    }
    totals
}

pub fn reconcile(region: &str, need: &ForecastedNeed, inventory: &[InventoryRecord]) -> Reconciliation {
    let available_by_type = stock_by_type(region, inventory);
    let mut reconciliation = Reconciliation::default();

    for item_type in RECONCILED_TYPES {
        let needed = needed_for(item_type, need).unwrap_or(0);
        let available = available_by_type.get(&item_type).copied().unwrap_or(0);

        let status = if available >= needed {
            Sufficiency::Sufficient
        } else {
            reconciliation.deficits.insert(item_type, needed - available);
            Sufficiency::Insufficient
        };

        reconciliation.status.insert(
            item_type,
            SufficiencyInfo {
                available,
                needed,
                status,
                sufficiency_pct: capped_percentage(available, needed),
            },
        );
    }

    reconciliation
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StockLevel {
    Low,
    Moderate,
    Optimal,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockSummary {
    pub quantity: u64,
    pub reorder_level: u64,
    pub optimal_level: u64,
    pub level: StockLevel,
    pub pct_of_optimal: u8,
}

/// Per item type totals against the summed reorder and optimal levels.
pub fn stock_summary(region: &str, inventory: &[InventoryRecord]) -> BTreeMap<ItemType, StockSummary> {
    let mut sums: BTreeMap<ItemType, (u64, u64, u64)> = BTreeMap::new();
    for record in inventory.iter().filter(|record| record.region == region) {
        let entry = sums.entry(record.item_type).or_insert((0, 0, 0));
        entry.0 = entry.0.saturating_add(record.quantity);
        entry.1 = entry.1.saturating_add(record.reorder_level);
        entry.2 = entry.2.saturating_add(record.optimal_level);
    }

    sums.into_iter()
        .map(|(item_type, (quantity, reorder_level, optimal_level))| {
            let level = if quantity < reorder_level {
                StockLevel::Low
            } else if quantity < optimal_level {
                StockLevel::Moderate
            } else {
                StockLevel::Optimal
            };
            (
                item_type,
                StockSummary {
                    quantity,
                    reorder_level,
                    optimal_level,
                    level,
                    pct_of_optimal: capped_percentage(quantity, optimal_level),
                },
            )
        })
        .collect()
}

/// Records below their reorder level, judged from quantity rather than the stored status.
pub fn low_stock<'a>(region: &str, inventory: &'a [InventoryRecord]) -> Vec<&'a InventoryRecord> {
    inventory
        .iter()
        .filter(|record| record.region == region && record.derived_status() == StockStatus::Low)
        .collect()
}

/// Records expiring on or before `as_of + days`, soonest first.
pub fn expiring_within<'a>(
    region: &str,
    inventory: &'a [InventoryRecord],
    as_of: NaiveDate,
    days: u64,
) -> Vec<&'a InventoryRecord> {
    let horizon = as_of.checked_add_days(Days::new(days)).unwrap_or(NaiveDate::MAX);
    let mut expiring: Vec<&InventoryRecord> = inventory
        .iter()
        .filter(|record| record.region == region && record.expiry <= horizon)
        .collect();
    expiring.sort_by(|a, b| a.expiry.cmp(&b.expiry).then_with(|| a.item_name.cmp(&b.item_name)));
    expiring
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcurementRequest {
    pub id: Uuid,
    pub region: String,
    pub item_type: ItemType,
    pub quantity: u64,
}

pub fn procurement_requests(region: &str, deficits: &BTreeMap<ItemType, u64>) -> Vec<ProcurementRequest> {
    deficits
        .iter()
        .filter(|(_, quantity)| **quantity > 0)
        .map(|(item_type, quantity)| ProcurementRequest {
            id: Uuid::new_v4(),
            region: region.to_string(),
            item_type: *item_type,
            quantity: *quantity,
        })
        .collect()
}
