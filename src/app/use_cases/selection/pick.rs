//! Use-Case: Punkt-/Flächen-Selektion per Klick.

use crate::app::state::SelectionMode;
use crate::app::AppState;

/// Selektiert einen Punkt per Klick.
///
/// - `Single`: der Pick ersetzt die Selektion; Klick auf einen bereits
///   selektierten Punkt hebt die Selektion auf.
/// - `Multi`: mit `additive` (Strg) wird getoggelt, ohne ersetzt.
/// - `Lasso`/`NoSelection`: Picks werden ignoriert.
///
/// Unbekannte IDs werden verworfen, damit die Selektion nur gültige
/// Struktur-IDs enthält.
pub fn select_point(state: &mut AppState, point_id: &str, additive: bool) {
    let Some(complex) = state.complex.as_ref() else {
        return;
    };
    if !complex.contains_point(point_id) {
        log::debug!("Pick auf unbekannten Punkt {point_id:?} ignoriert");
        return;
    }

    match state.selection.mode {
        SelectionMode::Single => {
            let was_selected = state.selection.selected_point_ids.contains(point_id);
            state.selection.point_ids_mut().clear();
            if !was_selected {
                state.selection.point_ids_mut().insert(point_id.to_string());
            }
        }
        SelectionMode::Multi => {
            if additive {
                let ids = state.selection.point_ids_mut();
                if !ids.shift_remove(point_id) {
                    ids.insert(point_id.to_string());
                }
            } else {
                state.selection.point_ids_mut().clear();
                state.selection.point_ids_mut().insert(point_id.to_string());
            }
        }
        SelectionMode::Lasso | SelectionMode::NoSelection => {}
    }
}

/// Selektiert eine Fläche per Klick; spiegelt die Punkt-Pick-Semantik.
pub fn select_face(state: &mut AppState, face_id: &str, additive: bool) {
    let Some(complex) = state.complex.as_ref() else {
        return;
    };
    if !complex.faces.iter().any(|f| f.id == face_id) {
        log::debug!("Pick auf unbekannte Fläche {face_id:?} ignoriert");
        return;
    }

    match state.selection.mode {
        SelectionMode::Single => {
            let was_selected = state.selection.selected_face_ids.contains(face_id);
            state.selection.face_ids_mut().clear();
            if !was_selected {
                state.selection.face_ids_mut().insert(face_id.to_string());
            }
        }
        SelectionMode::Multi => {
            if additive {
                let ids = state.selection.face_ids_mut();
                if !ids.shift_remove(face_id) {
                    ids.insert(face_id.to_string());
                }
            } else {
                state.selection.face_ids_mut().clear();
                state.selection.face_ids_mut().insert(face_id.to_string());
            }
        }
        SelectionMode::Lasso | SelectionMode::NoSelection => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Complex, Face, Point};
    use glam::Vec3;
    use std::sync::Arc;

    fn triangle_state() -> AppState {
        let mut complex = Complex::new();
        complex.add_point(Point::new("a", Vec3::ZERO));
        complex.add_point(Point::new("b", Vec3::new(1.0, 0.0, 0.0)));
        complex.add_point(Point::new("c", Vec3::new(0.0, 1.0, 0.0)));
        complex.add_face(Face::new(
            "f1",
            ["a".to_string(), "b".to_string(), "c".to_string()],
        ));

        let mut state = AppState::new();
        state.complex = Some(Arc::new(complex));
        state
    }

    #[test]
    fn single_pick_ersetzt_selektion() {
        let mut state = triangle_state();

        select_point(&mut state, "a", false);
        select_point(&mut state, "b", false);

        assert_eq!(state.selection.selected_point_ids.len(), 1);
        assert!(state.selection.selected_point_ids.contains("b"));
    }

    #[test]
    fn single_pick_auf_selektierten_punkt_deselektiert() {
        let mut state = triangle_state();

        select_point(&mut state, "a", false);
        select_point(&mut state, "a", false);

        assert!(state.selection.is_empty());
    }

    #[test]
    fn multi_pick_mit_strg_toggelt() {
        let mut state = triangle_state();
        state.selection.mode = SelectionMode::Multi;

        select_point(&mut state, "a", true);
        select_point(&mut state, "b", true);
        assert_eq!(state.selection.selected_point_ids.len(), 2);

        select_point(&mut state, "a", true);
        assert_eq!(state.selection.selected_point_ids.len(), 1);
        assert!(state.selection.selected_point_ids.contains("b"));
    }

    #[test]
    fn pick_auf_unbekannte_id_ist_noop() {
        let mut state = triangle_state();

        select_point(&mut state, "zz", false);

        assert!(state.selection.is_empty());
    }

    #[test]
    fn no_selection_ignoriert_picks() {
        let mut state = triangle_state();
        state.selection.mode = SelectionMode::NoSelection;

        select_point(&mut state, "a", false);
        select_face(&mut state, "f1", false);

        assert!(state.selection.is_empty());
    }

    #[test]
    fn face_pick_spiegelt_punkt_semantik() {
        let mut state = triangle_state();

        select_face(&mut state, "f1", false);
        assert!(state.selection.selected_face_ids.contains("f1"));

        select_face(&mut state, "f1", false);
        assert!(state.selection.selected_face_ids.is_empty());
    }
}
