use anyhow::Result;

use crate::store::PlanStore;

/// Show the roster, or replace it when names are given.
pub fn run_participants(data_dir: Option<String>, names: Vec<String>) -> Result<()> {
    let mut store = PlanStore::open(data_dir)?;

    if names.is_empty() {
        let roster = &store.state().participants;
        println!("Participants ({}):", roster.len());
        for name in roster {
            println!("  {name}");
        }
        return Ok(());
    }

    let count = names.len();
    store.update_participants(names)?;
    println!("✅ Roster replaced ({count} participants).");

    Ok(())
}
