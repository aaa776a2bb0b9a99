use anyhow::{Context, Result};

use crate::share;
use crate::store::PlanStore;

/// Print the plan as a share string (or a full link with `--url`).
pub fn run_share(data_dir: Option<String>, url: Option<String>) -> Result<()> {
    let store = PlanStore::open(data_dir)?;

    match url {
        Some(base) => {
            let link = share::encode_as_url(store.state(), &base)
                .context("Failed to encode the plan")?;
            println!("{link}");
        }
        None => {
            let encoded = share::encode(store.state()).context("Failed to encode the plan")?;
            println!("{encoded}");
        }
    }

    Ok(())
}

/// Replace the local plan with a decoded share string.
pub fn run_import(data_dir: Option<String>, raw: &str) -> Result<()> {
    // Decode loudly here; the store's silent fallback chain is for
    // initialization, not for an explicit import request.
    let state = share::decode(raw).context("Could not decode the share string")?;

    let mut store = PlanStore::open(data_dir)?;
    let trip_name = state.trip_name.clone();
    let slot_count = state.slots.len();
    store.replace(state)?;

    println!("✅ Imported plan {trip_name:?} ({slot_count} meals).");
    println!("   Saved to {:?}", store.plan_path());

    Ok(())
}
