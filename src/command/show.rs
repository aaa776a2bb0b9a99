use anyhow::Result;

use crate::command::format_quantity;
use crate::store::PlanStore;

/// Print the whole plan, day by day.
pub fn run_show(data_dir: Option<String>) -> Result<()> {
    let store = PlanStore::open(data_dir)?;
    let state = store.state();

    println!("{} — {}", state.trip_name, state.trip_subtitle);
    println!(
        "{} participants · {} meals",
        state.participants.len(),
        state.slots.len()
    );

    let mut current_day = "";
    for slot in &state.slots {
        if slot.day_name != current_day {
            current_day = &slot.day_name;
            println!("\n{current_day}");
        }

        if slot.is_restaurant {
            println!("  {}  🍴 Restaurant", slot.id);
            continue;
        }

        let mut line = format!("  {}  ", slot.id);
        if slot.recipe_name.is_empty() {
            line.push('—');
        } else {
            line.push_str(&slot.recipe_name);
            if !slot.cooks.is_empty() {
                line.push_str(&format!(" ({})", slot.cooks.join(", ")));
            }
        }
        println!("{line}");

        if let Some(notes) = &slot.notes {
            println!("      note: {notes}");
        }
        for ing in &slot.ingredients {
            println!(
                "      - {} {} {}",
                ing.name,
                format_quantity(ing.quantity),
                ing.unit
            );
        }
    }

    Ok(())
}
