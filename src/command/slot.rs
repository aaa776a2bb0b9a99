use anyhow::{anyhow, Result};

use crate::cli::SlotAction;
use crate::domain::{self, parse_quantity, Ingredient, MealSlot, MealType};
use crate::seed;
use crate::store::PlanStore;

/// Apply one edit to a meal slot.
pub fn run_slot(data_dir: Option<String>, action: SlotAction) -> Result<()> {
    let mut store = PlanStore::open(data_dir)?;

    match action {
        SlotAction::Recipe { slot_id, name } => {
            let mut slot = fetch(&store, &slot_id)?;
            slot.recipe_name = name;
            store.update_slot(slot)?;
            println!("✅ Recipe set for {slot_id}.");
        }
        SlotAction::Notes { slot_id, text } => {
            let mut slot = fetch(&store, &slot_id)?;
            slot.notes = if text.trim().is_empty() {
                None
            } else {
                Some(text)
            };
            store.update_slot(slot)?;
            println!("✅ Notes updated for {slot_id}.");
        }
        SlotAction::Cooks { slot_id, names } => {
            let mut slot = fetch(&store, &slot_id)?;
            slot.cooks = names;
            store.update_slot(slot)?;
            println!("✅ Cooks updated for {slot_id}.");
        }
        SlotAction::Restaurant { slot_id, on } => {
            let mut slot = fetch(&store, &slot_id)?;
            slot.is_restaurant = on;
            store.update_slot(slot)?;
            if on {
                println!("✅ {slot_id} marked as restaurant; its menu and ingredients were cleared.");
            } else {
                println!("✅ {slot_id} is a cooked meal again.");
            }
        }
        SlotAction::Ingredient {
            slot_id,
            name,
            quantity,
            unit,
        } => {
            let quantity = parse_quantity(&quantity)
                .map_err(|err| anyhow!("invalid quantity {quantity:?}: {err}"))?;
            let mut slot = fetch(&store, &slot_id)?;
            if slot.is_restaurant {
                return Err(anyhow!(
                    "{slot_id} is marked as restaurant; turn restaurant mode off first"
                ));
            }
            let known_unit = seed::UNITS.contains(&unit.as_str());
            slot.ingredients.push(Ingredient::new(name, quantity, unit));
            store.update_slot(slot)?;
            println!("✅ Ingredient added to {slot_id}.");
            if !known_unit {
                println!(
                    "   (unusual unit; the list merges by exact unit — common ones: {})",
                    seed::UNITS.join(", ")
                );
            }
        }
        SlotAction::RemoveIngredient { slot_id, name } => {
            let mut slot = fetch(&store, &slot_id)?;
            let wanted = name.trim().to_lowercase();
            let before = slot.ingredients.len();
            slot.ingredients
                .retain(|i| i.name.trim().to_lowercase() != wanted && i.id != name);
            let removed = before - slot.ingredients.len();
            store.update_slot(slot)?;
            if removed == 0 {
                println!("No ingredient named {name:?} in {slot_id}.");
            } else {
                println!("✅ Removed {removed} ingredient(s) from {slot_id}.");
            }
        }
    }

    Ok(())
}

/// Resolve a slot id, tolerating a lowercase or English meal-type suffix
/// ("2026-01-24-midi", "2026-01-24-lunch").
fn fetch(store: &PlanStore, slot_id: &str) -> Result<MealSlot> {
    if let Some(slot) = store.find_slot(slot_id) {
        return Ok(slot.clone());
    }

    if let Some((date, meal)) = slot_id.rsplit_once('-') {
        if let Ok(meal_type) = meal.parse::<MealType>() {
            if let Some(slot) = store.find_slot(&domain::slot_id(date, meal_type)) {
                return Ok(slot.clone());
            }
        }
    }

    Err(anyhow!(
        "no slot with id {slot_id:?}; run 'mealplan show' to list slot ids"
    ))
}
