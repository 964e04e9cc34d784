use std::path::PathBuf;

use anyhow::Context;
use tracing::{info, warn};

use reliefcore::alerts::AlertBrief;
use reliefcore::fixtures::{SampleData, SAMPLE_REGIONS};
use reliefcore::inventory::expiring_within;
use reliefcore::source::ReliefDataSource;
use reliefcore::telemetry::init_logger;
use reliefcore::{allocate_batch, AllocationRequest, EngineConfig};

const DEFAULT_SEED: u64 = 42;

/// Usage: `reliefcore <magnitude> [config-path]`
fn main() -> anyhow::Result<()> {
    init_logger();

    let mut args = std::env::args().skip(1);
    let magnitude: f64 = match args.next() {
        Some(raw) => raw.parse().with_context(|| format!("invalid magnitude `{raw}`"))?,
        None => 6.0,
    };
    let config_path = args.next().map(PathBuf::from);
    let config = EngineConfig::load(config_path.as_deref()).context("loading engine configuration")?;

    let today = chrono::Utc::now().date_naive();
    let registry = SampleData::generate(DEFAULT_SEED, today).into_registry();

    let requests: Vec<AllocationRequest> = SAMPLE_REGIONS
        .iter()
        .map(|region| AllocationRequest::new(*region, magnitude))
        .collect();

    let mut briefs = Vec::new();
    for (request, result) in requests.iter().zip(allocate_batch(&registry, &requests, &config)) {
        let plan = result.with_context(|| format!("planning {}", request.region))?;

        let inventory = registry.inventory(&request.region)?;
        let expiring = expiring_within(&request.region, &inventory, today, config.inventory.expiry_horizon_days);
        if !expiring.is_empty() {
            warn!(region = %request.region, items = expiring.len(), "stock nearing expiry");
        }

        if let Some(brief) = AlertBrief::from_plan(&plan) {
            briefs.push(brief);
        }
        println!("{}", serde_json::to_string_pretty(&plan)?);
    }

    info!(plans = briefs.len(), "alert briefs ready for dispatch");
    Ok(())
}
