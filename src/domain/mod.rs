//! Domain types for the trip meal plan.
//!
//! Everything that persists lives here: ingredients, meal slots and the
//! top-level plan state. Serialized field names stay camelCase so plan files
//! and share strings produced by the original web app keep parsing.

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// One meal opportunity per day, serialized with the original wire values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MealType {
    #[serde(rename = "Midi")]
    Lunch,
    #[serde(rename = "Soir")]
    Dinner,
}

impl MealType {
    /// The value used in slot ids and in serialized state.
    pub fn wire_name(&self) -> &'static str {
        match self {
            MealType::Lunch => "Midi",
            MealType::Dinner => "Soir",
        }
    }
}

impl std::fmt::Display for MealType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.wire_name())
    }
}

impl std::str::FromStr for MealType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "midi" | "lunch" => Ok(MealType::Lunch),
            "soir" | "dinner" => Ok(MealType::Dinner),
            other => Err(format!(
                "unknown meal type {other:?} (expected midi/lunch or soir/dinner)"
            )),
        }
    }
}

/// A single ingredient line, owned by its meal slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    pub id: String,
    pub name: String,
    #[serde(deserialize_with = "quantity_from_wire")]
    pub quantity: f64,
    pub unit: String,
}

/// Decode a quantity that may arrive as a JSON number or a string.
///
/// The web app stores whatever the form input held, so shared plans routinely
/// carry `"quantity": "2"`. Strings go through [`parse_quantity`]; anything it
/// rejects becomes 0 rather than failing the whole payload or letting NaN
/// through.
fn quantity_from_wire<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Wire {
        Number(f64),
        Text(String),
    }

    match Wire::deserialize(deserializer)? {
        Wire::Number(n) if n.is_finite() => Ok(n),
        Wire::Number(_) => Ok(0.0),
        Wire::Text(raw) => Ok(parse_quantity(&raw).unwrap_or(0.0)),
    }
}

impl Ingredient {
    pub fn new(name: impl Into<String>, quantity: f64, unit: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            quantity,
            unit: unit.into(),
        }
    }
}

/// One lunch or dinner of the trip calendar.
///
/// Slots are created once per trip (or reset) and never individually deleted;
/// only their fields change. The id is derived from date and meal type so
/// regenerating the calendar always yields the same ids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealSlot {
    pub id: String,
    pub date: String,
    pub day_name: String,
    #[serde(rename = "type")]
    pub meal_type: MealType,
    pub is_restaurant: bool,
    pub recipe_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub cooks: Vec<String>,
    pub ingredients: Vec<Ingredient>,
}

impl MealSlot {
    /// Build an empty slot for one calendar entry.
    pub fn new(date: impl Into<String>, day_name: impl Into<String>, meal_type: MealType) -> Self {
        let date = date.into();
        Self {
            id: slot_id(&date, meal_type),
            date,
            day_name: day_name.into(),
            meal_type,
            is_restaurant: false,
            recipe_name: String::new(),
            notes: None,
            cooks: Vec::new(),
            ingredients: Vec::new(),
        }
    }

    /// Empty the recipe, notes, cooks and ingredients.
    ///
    /// Applied whenever a slot is stored with restaurant mode on: a
    /// restaurant slot carries no meal data of its own.
    pub fn clear_meal_data(&mut self) {
        self.recipe_name.clear();
        self.notes = None;
        self.cooks.clear();
        self.ingredients.clear();
    }
}

/// Deterministic slot id: `"{date}-{Midi|Soir}"`.
pub fn slot_id(date: &str, meal_type: MealType) -> String {
    format!("{}-{}", date, meal_type.wire_name())
}

/// The whole plan. Sole unit of persistence and transfer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    pub slots: Vec<MealSlot>,
    pub participants: Vec<String>,
    pub trip_name: String,
    pub trip_subtitle: String,
    /// Generation token: a fresh value marks each reset of the plan.
    pub version: i64,
}

/// One line of the derived shopping list. Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingItem {
    pub name: String,
    pub unit: String,
    pub total_quantity: f64,
}

/// Rejected quantity input.
#[derive(Debug, Error, PartialEq)]
pub enum QuantityError {
    #[error("not a number: {0:?}")]
    NotANumber(String),
    #[error("quantity must be finite")]
    NotFinite,
    #[error("quantity must not be negative: {0}")]
    Negative(f64),
}

/// Parse a user-entered quantity.
///
/// Accepts a decimal comma as well as a decimal point. Rejects anything that
/// is not a finite, non-negative number so NaN can never reach a running
/// total.
pub fn parse_quantity(raw: &str) -> Result<f64, QuantityError> {
    let value: f64 = raw
        .trim()
        .replace(',', ".")
        .parse()
        .map_err(|_| QuantityError::NotANumber(raw.to_string()))?;
    if !value.is_finite() {
        return Err(QuantityError::NotFinite);
    }
    if value < 0.0 {
        return Err(QuantityError::Negative(value));
    }
    Ok(value)
}
