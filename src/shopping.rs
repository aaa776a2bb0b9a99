//! Shopping list aggregation.
//!
//! Pure derivation: meal slots in, deduplicated shopping list out. Ingredients
//! are grouped by normalized name + unit, quantities summed, and the result
//! sorted with a locale fold so accented French names land where a reader
//! expects them.

use std::cmp::Ordering;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::domain::{MealSlot, ShoppingItem};

/// Aggregation key: lowercased trimmed name + "-" + lowercased unit.
fn aggregation_key(name: &str, unit: &str) -> String {
    format!("{}-{}", name.trim().to_lowercase(), unit.to_lowercase())
}

/// Derive the shopping list from the slot sequence.
///
/// Restaurant slots are skipped wholesale. The first-seen spelling of a name
/// (trimmed) and unit wins for display; later occurrences only add to the
/// total. Output order depends only on the final sort, not on input order.
///
/// Quantities are validated at entry, so a non-finite value here can only
/// come from a hand-edited plan file; it is treated as 0 rather than allowed
/// to poison the sum.
pub fn aggregate(slots: &[MealSlot]) -> Vec<ShoppingItem> {
    let mut by_key: HashMap<String, ShoppingItem> = HashMap::new();

    for slot in slots.iter().filter(|s| !s.is_restaurant) {
        for ing in &slot.ingredients {
            let quantity = if ing.quantity.is_finite() {
                ing.quantity
            } else {
                0.0
            };
            let key = aggregation_key(&ing.name, &ing.unit);
            match by_key.entry(key) {
                Entry::Occupied(mut entry) => {
                    entry.get_mut().total_quantity += quantity;
                }
                Entry::Vacant(entry) => {
                    entry.insert(ShoppingItem {
                        name: ing.name.trim().to_string(),
                        unit: ing.unit.clone(),
                        total_quantity: quantity,
                    });
                }
            }
        }
    }

    let mut items: Vec<ShoppingItem> = by_key.into_values().collect();
    items.sort_by(|a, b| locale_cmp(&a.name, &b.name));
    items
}

/// Locale-aware name comparison: accent- and case-insensitive primary key,
/// codepoint order as tiebreak so the ordering stays total and deterministic.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    sort_key(a).cmp(&sort_key(b)).then_with(|| a.cmp(b))
}

fn sort_key(s: &str) -> String {
    s.chars().flat_map(char::to_lowercase).map(fold_accent).collect()
}

/// Collapse the accented letters common in French onto their base letter.
fn fold_accent(c: char) -> char {
    match c {
        'à' | 'á' | 'â' | 'ä' | 'ã' | 'å' => 'a',
        'ç' => 'c',
        'è' | 'é' | 'ê' | 'ë' => 'e',
        'ì' | 'í' | 'î' | 'ï' => 'i',
        'ñ' => 'n',
        'ò' | 'ó' | 'ô' | 'ö' | 'õ' => 'o',
        'ù' | 'ú' | 'û' | 'ü' => 'u',
        'ý' | 'ÿ' => 'y',
        'œ' => 'o',
        'æ' => 'a',
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Ingredient, MealSlot, MealType};

    fn slot(date: &str, meal_type: MealType, ingredients: Vec<Ingredient>) -> MealSlot {
        let mut slot = MealSlot::new(date, "Jour", meal_type);
        slot.ingredients = ingredients;
        slot
    }

    #[test]
    fn test_merges_same_name_and_unit_across_slots() {
        // Name trim/case and unit case differences must collapse to one line.
        let slots = vec![
            slot(
                "2026-01-24",
                MealType::Lunch,
                vec![Ingredient::new("Tomate", 2.0, "kg")],
            ),
            slot(
                "2026-01-24",
                MealType::Dinner,
                vec![Ingredient::new("tomate ", 1.0, "KG")],
            ),
        ];

        let items = aggregate(&slots);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Tomate");
        assert_eq!(items[0].unit, "kg");
        assert_eq!(items[0].total_quantity, 3.0);
    }

    #[test]
    fn test_same_name_different_unit_stays_separate() {
        let slots = vec![slot(
            "2026-01-24",
            MealType::Lunch,
            vec![
                Ingredient::new("Lait", 1.0, "L"),
                Ingredient::new("Lait", 50.0, "cl"),
            ],
        )];

        let items = aggregate(&slots);
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn test_no_duplicate_keys_in_output() {
        let slots = vec![
            slot(
                "2026-01-24",
                MealType::Lunch,
                vec![
                    Ingredient::new("Pain", 2.0, "unité(s)"),
                    Ingredient::new("PAIN", 1.0, "Unité(s)"),
                ],
            ),
            slot(
                "2026-01-25",
                MealType::Lunch,
                vec![Ingredient::new(" pain", 1.0, "unité(s)")],
            ),
        ];

        let items = aggregate(&slots);
        let mut keys: Vec<(String, String)> = items
            .iter()
            .map(|i| (i.name.to_lowercase(), i.unit.to_lowercase()))
            .collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), items.len());
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].total_quantity, 4.0);
    }

    #[test]
    fn test_restaurant_slots_contribute_nothing() {
        let mut restaurant = slot(
            "2026-01-24",
            MealType::Dinner,
            vec![Ingredient::new("Fondue", 1.0, "kg")],
        );
        restaurant.is_restaurant = true;

        assert!(aggregate(&[restaurant]).is_empty());
    }

    #[test]
    fn test_restaurant_toggle_round_trip_restores_aggregate() {
        let cooking = slot(
            "2026-01-24",
            MealType::Lunch,
            vec![Ingredient::new("Riz", 1.5, "kg")],
        );
        let mut other = slot(
            "2026-01-24",
            MealType::Dinner,
            vec![Ingredient::new("Pâtes", 1.0, "kg")],
        );

        let slots = vec![cooking.clone(), other.clone()];
        let before = aggregate(&slots);

        // Flag only (no save-path clearing): contribution disappears...
        other.is_restaurant = true;
        let during = aggregate(&[cooking.clone(), other.clone()]);
        assert_eq!(during, aggregate(&[cooking.clone()]));

        // ...and comes back identically when toggled off.
        other.is_restaurant = false;
        let after = aggregate(&[cooking, other]);
        assert_eq!(before, after);
    }

    #[test]
    fn test_order_independent() {
        let a = slot(
            "2026-01-24",
            MealType::Lunch,
            vec![
                Ingredient::new("Tomate", 2.0, "kg"),
                Ingredient::new("Oignon", 3.0, "unité(s)"),
            ],
        );
        let b = slot(
            "2026-01-25",
            MealType::Dinner,
            vec![Ingredient::new("tomate", 1.0, "kg")],
        );

        let forward = aggregate(&[a.clone(), b.clone()]);

        let mut a_rev = a.clone();
        a_rev.ingredients.reverse();
        let backward = aggregate(&[b, a_rev]);

        assert_eq!(forward, backward);
    }

    #[test]
    fn test_idempotent() {
        let slots = vec![slot(
            "2026-01-24",
            MealType::Lunch,
            vec![
                Ingredient::new("Beurre", 250.0, "g"),
                Ingredient::new("Farine", 1.0, "kg"),
            ],
        )];

        let first = aggregate(&slots);
        let second = aggregate(&slots);
        let third = aggregate(&slots);
        assert_eq!(first, second);
        assert_eq!(second, third);
    }

    #[test]
    fn test_sorted_with_accents_in_natural_order() {
        let slots = vec![slot(
            "2026-01-24",
            MealType::Lunch,
            vec![
                Ingredient::new("Fraise", 1.0, "kg"),
                Ingredient::new("Épinard", 1.0, "kg"),
                Ingredient::new("Endive", 1.0, "kg"),
                Ingredient::new("abricot", 1.0, "kg"),
            ],
        )];

        let names: Vec<String> = aggregate(&slots).into_iter().map(|i| i.name).collect();
        // Byte order would push "Épinard" after "abricot"; the locale fold
        // keeps it between the other E names and "Fraise".
        assert_eq!(names, vec!["abricot", "Endive", "Épinard", "Fraise"]);
    }

    #[test]
    fn test_non_finite_stored_quantity_clamps_to_zero() {
        let mut bad = Ingredient::new("Sel", 1.0, "g");
        bad.quantity = f64::NAN;
        let slots = vec![slot(
            "2026-01-24",
            MealType::Lunch,
            vec![bad, Ingredient::new("sel", 2.0, "g")],
        )];

        let items = aggregate(&slots);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].total_quantity, 2.0);
    }
}
