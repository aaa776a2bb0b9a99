use clap::{Parser, Subcommand};

/// Mealplan CLI - group-trip meal planning and shopping lists
#[derive(Parser)]
#[command(name = "mealplan")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory holding the plan file. Defaults to ~/.mealplan
    #[arg(long, env = "MEALPLAN_DATA_DIR", global = true)]
    pub data_dir: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the meal plan (default when no command is given)
    Show,
    /// Show the aggregated shopping list
    Shopping,
    /// Edit one meal slot
    Slot {
        #[command(subcommand)]
        action: SlotAction,
    },
    /// Show or replace the participant roster
    Participants {
        /// New roster (replaces the old one). Shows the current roster when omitted
        names: Vec<String>,
    },
    /// Show or set the trip name and subtitle
    Trip {
        /// New trip name
        #[arg(long)]
        name: Option<String>,

        /// New trip subtitle
        #[arg(long)]
        subtitle: Option<String>,
    },
    /// Print the plan as a shareable string
    Share {
        /// Emit a full link by appending the plan to this URL as a fragment
        #[arg(long)]
        url: Option<String>,
    },
    /// Import a plan from a share string or link
    Import {
        /// The share string (or a full URL carrying one)
        share: String,
    },
    /// Erase everything and restart from the seed calendar
    Reset {
        /// Skip the confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
pub enum SlotAction {
    /// Set the recipe name
    Recipe { slot_id: String, name: String },
    /// Set the notes (empty text clears them)
    Notes { slot_id: String, text: String },
    /// Assign the cooks (replaces the previous assignment)
    Cooks {
        slot_id: String,
        names: Vec<String>,
    },
    /// Turn restaurant mode on or off
    Restaurant { slot_id: String, on: bool },
    /// Add an ingredient to the slot
    Ingredient {
        slot_id: String,
        name: String,
        quantity: String,
        unit: String,
    },
    /// Remove an ingredient by name
    RemoveIngredient { slot_id: String, name: String },
}
