//! Gemeinsame Hilfsfunktionen für die Selektions-Use-Cases.

use crate::app::state::SelectionMode;
use crate::app::AppState;

/// Leert Punkt- und Flächenselektion.
pub fn clear_selection(state: &mut AppState) {
    state.selection.clear();
}

/// Wechselt den Selektionsmodus; ein Moduswechsel lässt die bestehende
/// Selektion unverändert.
pub fn set_selection_mode(state: &mut AppState, mode: SelectionMode) {
    if state.selection.mode != mode {
        state.selection.mode = mode;
        log::debug!("Selektionsmodus: {:?}", mode);
    }
}
