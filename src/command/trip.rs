use anyhow::Result;

use crate::store::PlanStore;

/// Show or change the trip name and subtitle.
pub fn run_trip(
    data_dir: Option<String>,
    name: Option<String>,
    subtitle: Option<String>,
) -> Result<()> {
    let mut store = PlanStore::open(data_dir)?;

    if name.is_none() && subtitle.is_none() {
        let state = store.state();
        println!("{} — {}", state.trip_name, state.trip_subtitle);
        return Ok(());
    }

    if let Some(name) = name {
        store.update_trip_name(name)?;
    }
    if let Some(subtitle) = subtitle {
        store.update_trip_subtitle(subtitle)?;
    }

    let state = store.state();
    println!("✅ Trip is now: {} — {}", state.trip_name, state.trip_subtitle);

    Ok(())
}
