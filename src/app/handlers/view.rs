//! Handler für Ansichtswechsel.

use crate::app::use_cases;
use crate::app::AppState;

/// Wechselt zwischen 3D- und 2D-Ansicht.
pub fn toggle_graph_view(state: &mut AppState) {
    use_cases::view::toggle_graph_view(state);
}

/// Schaltet die Flächendarstellung um.
pub fn toggle_faces(state: &mut AppState) {
    use_cases::view::toggle_faces(state);
}
