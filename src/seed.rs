//! Seed data: the fixed trip calendar and default roster.
//!
//! The calendar is a fixed ordered list of (date, day label, meal type)
//! triples. Generating slots from it is deterministic: no clock, no
//! randomness, same ids every time. `reset` regenerates the whole set from
//! here.

use chrono::Utc;

use crate::domain::{AppState, MealSlot, MealType};

pub const DEFAULT_TRIP_NAME: &str = "ADDR SNOWEEK";
pub const DEFAULT_TRIP_SUBTITLE: &str = "SÉJOUR JANVIER 2026";

pub const DEFAULT_PARTICIPANTS: &[&str] = &[
    "Amau", "Ani", "David", "Jojo", "Laure", "Léo", "Lucile", "Nathan", "Paloma", "Ségo", "Solé",
    "Thib", "Youri",
];

/// Suggested units for ingredient entry. Free-text units are still accepted;
/// this list only feeds completion in the presentation layer.
pub const UNITS: &[&str] = &[
    "unité(s)",
    "g",
    "kg",
    "ml",
    "cl",
    "L",
    "cuillère(s)",
    "pincée(s)",
    "paquet(s)",
    "botte(s)",
];

/// The trip calendar: arrival Saturday lunch through departure Sunday lunch.
const TRIP_CALENDAR: &[(&str, &str, MealType)] = &[
    ("2026-01-24", "Samedi 24", MealType::Lunch),
    ("2026-01-24", "Samedi 24", MealType::Dinner),
    ("2026-01-25", "Dimanche 25", MealType::Lunch),
    ("2026-01-25", "Dimanche 25", MealType::Dinner),
    ("2026-01-26", "Lundi 26", MealType::Lunch),
    ("2026-01-26", "Lundi 26", MealType::Dinner),
    ("2026-01-27", "Mardi 27", MealType::Lunch),
    ("2026-01-27", "Mardi 27", MealType::Dinner),
    ("2026-01-28", "Mercredi 28", MealType::Lunch),
    ("2026-01-28", "Mercredi 28", MealType::Dinner),
    ("2026-01-29", "Jeudi 29", MealType::Lunch),
    ("2026-01-29", "Jeudi 29", MealType::Dinner),
    ("2026-01-30", "Vendredi 30", MealType::Lunch),
    ("2026-01-30", "Vendredi 30", MealType::Dinner),
    ("2026-01-31", "Samedi 31", MealType::Lunch),
    ("2026-01-31", "Samedi 31", MealType::Dinner),
    ("2026-02-01", "Dimanche 01", MealType::Lunch),
];

/// One empty slot per calendar entry.
pub fn initial_slots() -> Vec<MealSlot> {
    TRIP_CALENDAR
        .iter()
        .map(|&(date, day_name, meal_type)| MealSlot::new(date, day_name, meal_type))
        .collect()
}

/// A fresh generation token (millisecond timestamp, like the original
/// `Date.now()`).
pub fn fresh_version() -> i64 {
    Utc::now().timestamp_millis()
}

/// The default plan: seed calendar, default roster, fixed trip labels.
pub fn default_state() -> AppState {
    AppState {
        slots: initial_slots(),
        participants: DEFAULT_PARTICIPANTS.iter().map(|s| s.to_string()).collect(),
        trip_name: DEFAULT_TRIP_NAME.to_string(),
        trip_subtitle: DEFAULT_TRIP_SUBTITLE.to_string(),
        version: fresh_version(),
    }
}
