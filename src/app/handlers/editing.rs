//! Handler für Struktur-Mutationen und Editierfarben.

use crate::app::use_cases;
use crate::app::AppState;
use crate::store::SightStore;

/// Schneidet alle aktuell selektierten Punkte.
pub fn cut_selected(state: &mut AppState, store: &mut dyn SightStore) -> anyhow::Result<()> {
    use_cases::editing::cut_selected_points(state, store)
}

/// Dupliziert alle aktuell selektierten Punkte.
pub fn split_selected(state: &mut AppState, store: &mut dyn SightStore) -> anyhow::Result<()> {
    use_cases::editing::split_selected_points(state, store)
}

/// Setzt die aktive Cut-Farbe für kommende Operationen.
pub fn set_cut_color(state: &mut AppState, color: String) {
    log::debug!("Cut-Farbe: {color}");
    state.options.cut_color = color;
}

/// Setzt die aktive Split-Farbe für kommende Operationen.
pub fn set_split_color(state: &mut AppState, color: String) {
    log::debug!("Split-Farbe: {color}");
    state.options.split_color = color;
}
