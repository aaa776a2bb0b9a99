use anyhow::Result;

use crate::store::PlanStore;

/// Wipe the plan back to the seed calendar, after confirmation.
pub fn run_reset(data_dir: Option<String>, yes: bool) -> Result<()> {
    let mut store = PlanStore::open(data_dir)?;

    if !yes {
        println!("⚠️  This erases every menu, cook assignment and ingredient of the trip.");
        print!("Reset the whole plan? [y/N]: ");
        use std::io::{self, Write};
        io::stdout().flush()?;

        let mut answer = String::new();
        io::stdin().read_line(&mut answer)?;
        let answer = answer.trim().to_lowercase();

        if answer != "y" && answer != "yes" {
            println!("Reset cancelled. Your plan is untouched.");
            return Ok(());
        }
    }

    store.reset()?;
    println!(
        "✅ Plan reset to the seed calendar ({} meals).",
        store.state().slots.len()
    );

    Ok(())
}
