//! Plan state store.
//!
//! Owns the single [`AppState`] and its plan file (`~/.mealplan/plan.json` by
//! default). Initialization walks a fallback chain — share-string import,
//! then the plan file, then seed defaults — and every mutation replaces the
//! state wholesale and saves synchronously before returning, so the file
//! never lags behind memory across operations.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::domain::{AppState, MealSlot, ShoppingItem};
use crate::seed;
use crate::share;
use crate::shopping;

/// Plan file name inside the data directory.
pub const PLAN_FILE: &str = "plan.json";

/// The owner of the plan state.
pub struct PlanStore {
    plan_path: PathBuf,
    state: AppState,
}

impl PlanStore {
    /// Open the store: load the plan file if it parses, else start from seed
    /// defaults.
    ///
    /// # Arguments
    /// * `data_dir` - Optional custom data directory. Defaults to ~/.mealplan
    pub fn open(data_dir: Option<String>) -> Result<Self> {
        let base_dir = match data_dir {
            Some(dir) => PathBuf::from(dir),
            None => dirs::home_dir()
                .context("Could not determine home directory")?
                .join(".mealplan"),
        };

        std::fs::create_dir_all(&base_dir)
            .with_context(|| format!("Failed to create data directory: {:?}", base_dir))?;

        let plan_path = base_dir.join(PLAN_FILE);
        let state = load_plan_file(&plan_path).unwrap_or_else(|| {
            info!("no usable plan file, starting from the seed calendar");
            seed::default_state()
        });

        Ok(Self { plan_path, state })
    }

    /// Open the store with a one-shot share-string import.
    ///
    /// Import failures are swallowed (logged at warn) and initialization
    /// falls through to the plan file, then to defaults. A successful import
    /// is persisted immediately so it is not reapplied on the next open.
    /// The `import` command decodes loudly instead, so this chain only
    /// serves embedders that want the web app's silent-fallback startup.
    #[allow(dead_code)]
    pub fn open_with_import(data_dir: Option<String>, import: &str) -> Result<Self> {
        match share::decode(import) {
            Ok(state) => {
                let mut store = Self::open(data_dir)?;
                store.replace(state)?;
                info!("imported shared plan");
                Ok(store)
            }
            Err(err) => {
                warn!("ignoring invalid share string: {err}");
                Self::open(data_dir)
            }
        }
    }

    /// The plan file path.
    pub fn plan_path(&self) -> &PathBuf {
        &self.plan_path
    }

    /// Current state, read-only.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Look up a slot by id.
    pub fn find_slot(&self, id: &str) -> Option<&MealSlot> {
        self.state.slots.iter().find(|s| s.id == id)
    }

    /// The derived shopping list, recomputed in full on every call.
    pub fn shopping_list(&self) -> Vec<ShoppingItem> {
        shopping::aggregate(&self.state.slots)
    }

    /// Replace the slot whose id matches.
    ///
    /// Unknown ids are a silent no-op: the only way to hold one is through a
    /// stale reference, and nothing useful can be done about it here. A slot
    /// stored with restaurant mode on has its meal data cleared first.
    pub fn update_slot(&mut self, mut slot: MealSlot) -> Result<()> {
        if slot.is_restaurant {
            slot.clear_meal_data();
        }
        let Some(existing) = self.state.slots.iter_mut().find(|s| s.id == slot.id) else {
            debug!("update for unknown slot id {:?}, ignoring", slot.id);
            return Ok(());
        };
        *existing = slot;
        self.save()
    }

    /// Replace the participant roster wholesale.
    pub fn update_participants(&mut self, participants: Vec<String>) -> Result<()> {
        self.state.participants = participants;
        self.save()
    }

    pub fn update_trip_name(&mut self, name: String) -> Result<()> {
        self.state.trip_name = name;
        self.save()
    }

    pub fn update_trip_subtitle(&mut self, subtitle: String) -> Result<()> {
        self.state.trip_subtitle = subtitle;
        self.save()
    }

    /// Adopt a whole new state (import path) and persist it.
    pub fn replace(&mut self, state: AppState) -> Result<()> {
        self.state = state;
        self.save()
    }

    /// Wipe the plan back to the seed calendar and default roster.
    ///
    /// Confirmation is the caller's job. The fresh version token makes a
    /// reset observably distinct from the state it replaces even when the
    /// content is identical.
    pub fn reset(&mut self) -> Result<()> {
        self.state = seed::default_state();
        self.save()
    }

    fn save(&self) -> Result<()> {
        let content =
            serde_json::to_string_pretty(&self.state).context("Failed to serialize plan state")?;
        std::fs::write(&self.plan_path, content)
            .with_context(|| format!("Failed to write plan file: {:?}", self.plan_path))?;
        debug!("plan saved to {:?}", self.plan_path);
        Ok(())
    }
}

/// Read and decode the plan file. Any failure is logged and treated as
/// "nothing usable" so initialization can fall through.
fn load_plan_file(path: &Path) -> Option<AppState> {
    if !path.exists() {
        return None;
    }
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) => {
            warn!("failed to read plan file {:?}: {err}", path);
            return None;
        }
    };
    match serde_json::from_str::<AppState>(&content) {
        Ok(state) => Some(state),
        Err(err) => {
            warn!("ignoring corrupt plan file {:?}: {err}", path);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Ingredient;
    use tempfile::tempdir;

    fn dir_arg(tmp: &tempfile::TempDir) -> Option<String> {
        Some(tmp.path().to_string_lossy().to_string())
    }

    #[test]
    fn test_open_defaults_when_no_file() {
        let tmp = tempdir().unwrap();
        let store = PlanStore::open(dir_arg(&tmp)).unwrap();
        assert_eq!(store.state().slots.len(), 17);
        assert_eq!(store.state().trip_name, seed::DEFAULT_TRIP_NAME);
    }

    #[test]
    fn test_mutations_persist_across_opens() {
        let tmp = tempdir().unwrap();
        let mut store = PlanStore::open(dir_arg(&tmp)).unwrap();

        let mut slot = store.state().slots[0].clone();
        slot.recipe_name = "Raclette".to_string();
        slot.cooks = vec!["Thib".to_string(), "Ségo".to_string()];
        slot.ingredients.push(Ingredient::new("Fromage", 1.2, "kg"));
        store.update_slot(slot.clone()).unwrap();

        let reopened = PlanStore::open(dir_arg(&tmp)).unwrap();
        assert_eq!(reopened.state().slots[0], slot);
        assert_eq!(reopened.state(), store.state());
    }

    #[test]
    fn test_update_slot_unknown_id_is_a_noop() {
        let tmp = tempdir().unwrap();
        let mut store = PlanStore::open(dir_arg(&tmp)).unwrap();
        let before = store.state().clone();

        let mut stray = before.slots[0].clone();
        stray.id = "2099-12-31-Midi".to_string();
        stray.recipe_name = "Fantôme".to_string();
        store.update_slot(stray).unwrap();

        assert_eq!(store.state(), &before);
    }

    #[test]
    fn test_update_slot_restaurant_clears_meal_data() {
        let tmp = tempdir().unwrap();
        let mut store = PlanStore::open(dir_arg(&tmp)).unwrap();

        let mut slot = store.state().slots[3].clone();
        slot.recipe_name = "Burgers".to_string();
        slot.ingredients.push(Ingredient::new("Pain", 8.0, "unité(s)"));
        store.update_slot(slot.clone()).unwrap();

        slot.is_restaurant = true;
        store.update_slot(slot).unwrap();

        let stored = store.find_slot(&store.state().slots[3].id.clone()).unwrap();
        assert!(stored.is_restaurant);
        assert!(stored.recipe_name.is_empty());
        assert!(stored.ingredients.is_empty());
    }

    #[test]
    fn test_reset_restores_seed_with_fresh_version() {
        let tmp = tempdir().unwrap();
        let mut store = PlanStore::open(dir_arg(&tmp)).unwrap();

        let mut slot = store.state().slots[0].clone();
        slot.recipe_name = "Soupe".to_string();
        store.update_slot(slot).unwrap();
        store.update_participants(vec!["Seul".to_string()]).unwrap();
        let old_version = store.state().version;

        store.reset().unwrap();

        let state = store.state();
        assert_eq!(state.slots.len(), 17);
        assert!(state.slots.iter().all(|s| s.recipe_name.is_empty()));
        assert!(state.slots.iter().all(|s| !s.is_restaurant));
        assert_eq!(state.participants.len(), 13);
        assert_ne!(state.version, old_version);
    }

    #[test]
    fn test_corrupt_plan_file_falls_back_to_defaults() {
        let tmp = tempdir().unwrap();
        std::fs::write(tmp.path().join(PLAN_FILE), "{not json at all").unwrap();

        let store = PlanStore::open(dir_arg(&tmp)).unwrap();
        assert_eq!(store.state().slots.len(), 17);
        assert_eq!(store.state().trip_name, seed::DEFAULT_TRIP_NAME);
    }

    #[test]
    fn test_import_adopts_and_persists_immediately() {
        let tmp = tempdir().unwrap();

        let mut shared = seed::default_state();
        shared.trip_name = "AUTRE SÉJOUR".to_string();
        let encoded = share::encode(&shared).unwrap();

        let store = PlanStore::open_with_import(dir_arg(&tmp), &encoded).unwrap();
        assert_eq!(store.state().trip_name, "AUTRE SÉJOUR");

        // One-shot: the import already landed in the plan file.
        let reopened = PlanStore::open(dir_arg(&tmp)).unwrap();
        assert_eq!(reopened.state().trip_name, "AUTRE SÉJOUR");
    }

    #[test]
    fn test_replace_adopts_and_persists() {
        let tmp = tempdir().unwrap();
        let mut store = PlanStore::open(dir_arg(&tmp)).unwrap();

        let mut other = seed::default_state();
        other.trip_name = "PLAN REÇU".to_string();
        store.replace(other).unwrap();
        assert_eq!(store.state().trip_name, "PLAN REÇU");

        let reopened = PlanStore::open(dir_arg(&tmp)).unwrap();
        assert_eq!(reopened.state().trip_name, "PLAN REÇU");
    }

    #[test]
    fn test_invalid_import_falls_through_to_file() {
        let tmp = tempdir().unwrap();
        let mut store = PlanStore::open(dir_arg(&tmp)).unwrap();
        store.update_trip_name("SÉJOUR LOCAL".to_string()).unwrap();

        let store = PlanStore::open_with_import(dir_arg(&tmp), "garbage!!").unwrap();
        assert_eq!(store.state().trip_name, "SÉJOUR LOCAL");
    }

    #[test]
    fn test_state_round_trips_through_serde() {
        let tmp = tempdir().unwrap();
        let mut store = PlanStore::open(dir_arg(&tmp)).unwrap();
        let mut slot = store.state().slots[5].clone();
        slot.notes = Some("prévoir un grand faitout".to_string());
        slot.ingredients.push(Ingredient::new("Oignon", 6.0, "unité(s)"));
        store.update_slot(slot).unwrap();

        let json = serde_json::to_string(store.state()).unwrap();
        let decoded: AppState = serde_json::from_str(&json).unwrap();
        assert_eq!(&decoded, store.state());
    }
}
