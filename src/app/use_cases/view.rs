//! Use-Case: Ansichtswechsel (3D/2D, Flächen-Sichtbarkeit).

use crate::app::state::{GraphView, SelectionMode};
use crate::app::AppState;

/// Wechselt zwischen 3D- und 2D-Ansicht.
///
/// Der Wechsel leert die Selektion und erzwingt einen Szenen-Neuaufbau.
/// Beim Wechsel in die 2D-Ansicht fällt der Lasso-Modus auf
/// Einzelselektion zurück, da Lasso nur in 3D verfügbar ist.
pub fn toggle_graph_view(state: &mut AppState) {
    state.view.graph_view = match state.view.graph_view {
        GraphView::ThreeD => GraphView::TwoD,
        GraphView::TwoD => GraphView::ThreeD,
    };

    state.selection.clear();
    if state.view.graph_view == GraphView::TwoD && state.selection.mode == SelectionMode::Lasso {
        state.selection.mode = SelectionMode::Single;
        log::debug!("Lasso-Modus in 2D nicht verfügbar, zurück auf Einzelselektion");
    }
    state.view.bump_scene_epoch();

    log::info!("Graph-Ansicht: {:?}", state.view.graph_view);
}

/// Schaltet die Flächendarstellung um; die Selektion bleibt unberührt.
pub fn toggle_faces(state: &mut AppState) {
    state.view.show_faces = !state.view.show_faces;
    log::debug!("Flächendarstellung: {}", state.view.show_faces);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ansichtswechsel_leert_selektion_und_bumpt_epoche() {
        let mut state = AppState::new();
        state.selection.point_ids_mut().insert("a".to_string());
        let epoch_before = state.view.scene_epoch;

        toggle_graph_view(&mut state);

        assert_eq!(state.view.graph_view, GraphView::TwoD);
        assert!(state.selection.is_empty());
        assert!(state.view.scene_epoch > epoch_before);
    }

    #[test]
    fn wechsel_in_2d_stuft_lasso_auf_single_zurueck() {
        let mut state = AppState::new();
        state.selection.mode = SelectionMode::Lasso;

        toggle_graph_view(&mut state);

        assert_eq!(state.selection.mode, SelectionMode::Single);
    }

    #[test]
    fn flaechen_umschalten_laesst_selektion_unberuehrt() {
        let mut state = AppState::new();
        state.selection.point_ids_mut().insert("a".to_string());

        toggle_faces(&mut state);

        assert!(!state.view.show_faces);
        assert!(!state.selection.is_empty());
    }
}
