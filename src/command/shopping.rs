use anyhow::Result;

use crate::command::format_quantity;
use crate::store::PlanStore;

/// Print the aggregated shopping list.
pub fn run_shopping(data_dir: Option<String>) -> Result<()> {
    let store = PlanStore::open(data_dir)?;
    let items = store.shopping_list();

    if items.is_empty() {
        println!("The shopping list is empty. Add ingredients with 'mealplan slot ingredient'.");
        return Ok(());
    }

    println!("🛒 Shopping list ({} items)", items.len());
    for item in &items {
        println!(
            "  {:<28} {} {}",
            item.name,
            format_quantity(item.total_quantity),
            item.unit
        );
    }

    Ok(())
}
