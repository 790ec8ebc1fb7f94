//! Dashboard shell: the date-selection state machine and its async driver.
//!
//! The shell holds one piece of primary state, the selected date key, with a
//! derived view state per load outcome. Transitions live in a pure reducer so
//! they are testable without any rendering environment; the driver wires the
//! reducer to an artifact store on the tokio runtime and guarantees that the
//! most recently selected date always wins over slower, stale loads.

mod driver;
mod prefs;
mod state;

pub use driver::ShellDriver;
pub use prefs::UiPrefs;
pub use state::{reduce, ShellEvent, ShellState, ViewState};
