use crate::cell::StateCell;
use crate::paths::THEME_KEY;
use crate::store::Store;
use crate::types::ThemeMode;

/// Persisted display mode, defaulting to dark.
pub struct ThemePreference<'s> {
    cell: StateCell<'s, ThemeMode>,
}

impl<'s> ThemePreference<'s> {
    pub fn load(store: &'s Store) -> Self {
        Self {
            cell: StateCell::load(store, THEME_KEY, ThemeMode::default()),
        }
    }

    pub fn mode(&self) -> ThemeMode {
        *self.cell.get()
    }

    pub fn set(&mut self, mode: ThemeMode) {
        self.cell.set(mode);
    }

    /// Flip between the two modes and return the new one.
    pub fn toggle(&mut self) -> ThemeMode {
        let next = self.mode().toggled();
        self.cell.set(next);
        next
    }
}
