mod participants;
mod reset;
mod share;
mod shopping;
mod show;
mod slot;
mod trip;

pub use participants::run_participants;
pub use reset::run_reset;
pub use share::{run_import, run_share};
pub use shopping::run_shopping;
pub use show::run_show;
pub use slot::run_slot;
pub use trip::run_trip;

/// Render a quantity without trailing noise: whole numbers lose the decimal
/// part, the rest keep at most two decimals.
pub(crate) fn format_quantity(quantity: f64) -> String {
    if quantity.fract() == 0.0 {
        format!("{:.0}", quantity)
    } else {
        format!("{}", (quantity * 100.0).round() / 100.0)
    }
}
