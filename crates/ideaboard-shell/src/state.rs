//! Pure shell state machine.

use ideaboard_core::{AnalysisDocument, DateKey};
use ideaboard_store::LoadError;

/// Derived view state for the currently selected date.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    Loading,
    Loaded(AnalysisDocument),
    /// No artifact exists for the selected date — expected, not an error.
    NotFound,
    /// The load failed; the reason is user-presentable.
    Errored(String),
}

impl ViewState {
    /// The user-facing message for non-content states. "Nothing to show" and
    /// "something went wrong" stay distinct; a blank screen is never an
    /// acceptable rendering.
    #[must_use]
    pub fn status_message(&self) -> Option<String> {
        match self {
            ViewState::Loading | ViewState::Loaded(_) => None,
            ViewState::NotFound => Some("no data for this date".to_string()),
            ViewState::Errored(reason) => Some(format!("failed to load data: {reason}")),
        }
    }
}

/// The shell's complete data state: which date is selected and what the view
/// shows for it. The in-memory document is replaced wholesale on every
/// selection change; nothing is patched incrementally.
#[derive(Debug, Clone, PartialEq)]
pub struct ShellState {
    pub selected: DateKey,
    pub view: ViewState,
}

impl ShellState {
    /// Initial state: loading the given key.
    #[must_use]
    pub fn initial(key: DateKey) -> Self {
        Self {
            selected: key,
            view: ViewState::Loading,
        }
    }

    /// Initial state for today's key on the local clock.
    #[must_use]
    pub fn today() -> Self {
        Self::initial(DateKey::today())
    }
}

/// Everything that can happen to the shell.
///
/// Load outcomes carry the key they were issued for; the reducer compares it
/// against the current selection and drops anything stale.
#[derive(Debug)]
pub enum ShellEvent {
    SelectDate(DateKey),
    LoadSucceeded(DateKey, AnalysisDocument),
    LoadFailed(DateKey, LoadError),
}

/// Applies one event to the shell state.
///
/// `SelectDate` always re-enters `Loading` for the new key, so no state is
/// terminal. Completion events for any key other than the current selection
/// are dropped — a slow load for a previously selected date must never
/// clobber the display of the current one.
#[must_use]
pub fn reduce(state: &ShellState, event: ShellEvent) -> ShellState {
    match event {
        ShellEvent::SelectDate(key) => ShellState {
            selected: key,
            view: ViewState::Loading,
        },
        ShellEvent::LoadSucceeded(key, doc) => {
            if key != state.selected {
                tracing::debug!(%key, selected = %state.selected, "dropping stale load result");
                return state.clone();
            }
            ShellState {
                selected: key,
                view: ViewState::Loaded(doc),
            }
        }
        ShellEvent::LoadFailed(key, error) => {
            if key != state.selected {
                tracing::debug!(%key, selected = %state.selected, "dropping stale load failure");
                return state.clone();
            }
            let view = if error.is_not_found() {
                ViewState::NotFound
            } else {
                ViewState::Errored(error.to_string())
            };
            ShellState {
                selected: key,
                view,
            }
        }
    }
}
