/// Orthogonal UI preferences: theme and sidebar visibility.
///
/// Deliberately separate from [`ShellState`](crate::ShellState) — toggling
/// either has no effect on data loading, and a load outcome never touches
/// these flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UiPrefs {
    pub dark_mode: bool,
    pub sidebar_open: bool,
}

impl UiPrefs {
    #[must_use]
    pub fn toggle_theme(self) -> Self {
        Self {
            dark_mode: !self.dark_mode,
            ..self
        }
    }

    #[must_use]
    pub fn toggle_sidebar(self) -> Self {
        Self {
            sidebar_open: !self.sidebar_open,
            ..self
        }
    }
}
