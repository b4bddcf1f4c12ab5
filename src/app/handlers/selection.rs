//! Handler für Punkt-, Flächen- und Lasso-Selektion.

use glam::Vec2;

use crate::app::state::SelectionMode;
use crate::app::use_cases;
use crate::app::AppState;
use crate::store::ScreenProjector;

/// Selektiert einen Punkt per Klick.
pub fn select_point(state: &mut AppState, point_id: &str, additive: bool) {
    use_cases::selection::select_point(state, point_id, additive);
}

/// Selektiert eine Fläche per Klick.
pub fn select_face(state: &mut AppState, face_id: &str, additive: bool) {
    use_cases::selection::select_face(state, face_id, additive);
}

/// Selektiert alle Punkte innerhalb eines Lasso-Polygons.
pub fn select_in_lasso(state: &mut AppState, projector: &dyn ScreenProjector, polygon: &[Vec2]) {
    use_cases::selection::select_points_in_lasso(state, projector, polygon);
}

/// Leert die komplette Selektion.
pub fn clear(state: &mut AppState) {
    use_cases::selection::clear_selection(state);
}

/// Wechselt den Selektionsmodus.
pub fn set_mode(state: &mut AppState, mode: SelectionMode) {
    use_cases::selection::set_selection_mode(state, mode);
}
