//! Logging utilities

use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::models::{CapacityField, InventoryRecord};

/// Initialize the logger. Honours `RUST_LOG`, defaulting to `info`. Safe to
/// call more than once.
pub fn init_logger() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).json().try_init();
}

/// Masks all but the last four characters of a contact number.
pub fn mask_contact(value: &str) -> String {
    let chars: Vec<char> = value.chars().collect();
    if chars.len() <= 4 {
        return "****".to_string();
    }
    let visible: String = chars[chars.len() - 4..].iter().collect();
    format!("****{}", visible)
}

pub fn log_capacity_update(region: &str, field: CapacityField, previous: u32, value: u32) {
    info!(region, field = ?field, previous, value, "logistics capacity updated");
}

pub fn log_inventory_update(record: &InventoryRecord, previous: u64) {
    info!(
        region = %record.region,
        item = %record.item_name,
        previous,
        quantity = record.quantity,
        status = ?record.status,
        "inventory quantity updated"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_numbers_are_masked() {
        assert_eq!(mask_contact("+917796571177"), "****1177");
        assert_eq!(mask_contact("112"), "****");
    }

    #[test]
    fn repeated_init_does_not_panic() {
        init_logger();
        init_logger();
    }
}
