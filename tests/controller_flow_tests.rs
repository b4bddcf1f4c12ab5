use glam::{Vec2, Vec3};
use std::collections::HashMap;
use zen_sight_editor::{
    point_color, AppIntent, AppState, Complex, Connection, EditorController, Face, GraphView,
    MemoryStore, NullProjector, Point, ScreenProjector, SelectionMode,
};

/// Pfad A-B-C plus Dreiecksfläche über A, B, C.
fn make_test_complex() -> Complex {
    let mut complex = Complex::new();
    complex.add_point(Point::new("a", Vec3::new(0.0, 0.0, 0.0)));
    complex.add_point(Point::new("b", Vec3::new(1.0, 0.0, 0.0)));
    complex.add_point(Point::new("c", Vec3::new(2.0, 0.0, 0.0)));
    complex.add_connection(Connection::new("a", "b"));
    complex.add_connection(Connection::new("b", "c"));
    complex.add_face(Face::new(
        "f1",
        ["a".to_string(), "b".to_string(), "c".to_string()],
    ));
    complex
}

fn loaded_session() -> (EditorController, AppState, MemoryStore) {
    let mut controller = EditorController::new();
    let mut state = AppState::new();
    let mut store = MemoryStore::new(make_test_complex());

    controller
        .handle_intent(&mut state, &mut store, &NullProjector, AppIntent::LoadRequested)
        .expect("Laden sollte funktionieren");

    (controller, state, store)
}

#[test]
fn test_load_initial_appends_initial_record() {
    let (_, state, store) = loaded_session();

    assert_eq!(state.point_count(), 3);
    assert_eq!(state.op_log.len(), 1);
    assert_eq!(state.timeline_index, Some(0));
    assert_eq!(store.records().len(), 1);
    assert!(state.can_record_operations());
}

#[test]
fn test_cut_via_intent_removes_point_and_decorates_neighbors() {
    let (mut controller, mut state, mut store) = loaded_session();

    controller
        .handle_intent(
            &mut state,
            &mut store,
            &NullProjector,
            AppIntent::CutColorChanged {
                color: "#ff0000".to_string(),
            },
        )
        .expect("Farbwechsel sollte funktionieren");
    controller
        .handle_intent(
            &mut state,
            &mut store,
            &NullProjector,
            AppIntent::PointPickRequested {
                point_id: "b".to_string(),
                additive: false,
            },
        )
        .expect("Pick sollte funktionieren");
    controller
        .handle_intent(
            &mut state,
            &mut store,
            &NullProjector,
            AppIntent::CutSelectedRequested,
        )
        .expect("Cut sollte funktionieren");

    let complex = state.complex.as_ref().expect("Komplex geladen");
    assert_eq!(complex.point_count(), 2);
    assert!(!complex.contains_point("b"));
    // Keine überlebende Verbindung/Fläche referenziert den entfernten Punkt
    assert_eq!(complex.connection_count(), 0);
    assert_eq!(complex.face_count(), 0);

    // Selektion wird bei jeder Strukturmutation geleert
    assert!(state.selection.is_empty());

    // Nachbarn tragen die Cut-Farbe
    assert_eq!(point_color(&state, "a"), "#ff0000");
    assert_eq!(point_color(&state, "c"), "#ff0000");

    assert_eq!(state.op_log.len(), 2);
    assert_eq!(store.records().len(), 2);
}

#[test]
fn test_cut_intent_with_empty_selection_is_filtered() {
    let (mut controller, mut state, mut store) = loaded_session();

    controller
        .handle_intent(
            &mut state,
            &mut store,
            &NullProjector,
            AppIntent::CutSelectedRequested,
        )
        .expect("Gefilterter Intent sollte ohne Fehler durchlaufen");

    assert_eq!(state.point_count(), 3);
    assert_eq!(state.op_log.len(), 1);
}

#[test]
fn test_split_via_intent_duplicates_neighborhood() {
    let (mut controller, mut state, mut store) = loaded_session();

    controller
        .handle_intent(
            &mut state,
            &mut store,
            &NullProjector,
            AppIntent::SplitColorChanged {
                color: "#00ff00".to_string(),
            },
        )
        .expect("Farbwechsel sollte funktionieren");
    controller
        .handle_intent(
            &mut state,
            &mut store,
            &NullProjector,
            AppIntent::PointPickRequested {
                point_id: "b".to_string(),
                additive: false,
            },
        )
        .expect("Pick sollte funktionieren");
    controller
        .handle_intent(
            &mut state,
            &mut store,
            &NullProjector,
            AppIntent::SplitSelectedRequested,
        )
        .expect("Split sollte funktionieren");

    let complex = state.complex.as_ref().expect("Komplex geladen");
    assert_eq!(complex.point_count(), 4);
    // Original bleibt vollständig erhalten
    assert!(complex.contains_point("b"));
    assert!(complex.has_connection("a", "b"));
    // Duplikat übernimmt die Nachbarschaft, ohne Verbindung zum Original
    assert!(complex.contains_point("b_s1"));
    assert!(complex.has_connection("a", "b_s1"));
    assert!(complex.has_connection("b_s1", "c"));
    assert!(!complex.has_connection("b", "b_s1"));
    // Fläche mit selektiertem Eckpunkt wird dupliziert
    assert_eq!(complex.face_count(), 2);

    assert_eq!(point_color(&state, "b_s1"), "#00ff00");
    complex.check_integrity().expect("Integrität nach Split");
}

#[test]
fn test_view_toggle_clears_selection_and_downgrades_lasso() {
    let (mut controller, mut state, mut store) = loaded_session();
    state.selection.mode = SelectionMode::Lasso;
    state.selection.point_ids_mut().insert("a".to_string());
    let epoch_before = state.view.scene_epoch;

    controller
        .handle_intent(
            &mut state,
            &mut store,
            &NullProjector,
            AppIntent::GraphViewToggleRequested,
        )
        .expect("Ansichtswechsel sollte funktionieren");

    assert_eq!(state.view.graph_view, GraphView::TwoD);
    assert!(state.selection.is_empty());
    assert_eq!(state.selection.mode, SelectionMode::Single);
    assert!(state.view.scene_epoch > epoch_before);
}

#[test]
fn test_face_toggle_keeps_selection() {
    let (mut controller, mut state, mut store) = loaded_session();
    state.selection.point_ids_mut().insert("a".to_string());

    controller
        .handle_intent(
            &mut state,
            &mut store,
            &NullProjector,
            AppIntent::FaceVisibilityToggleRequested,
        )
        .expect("Flächen-Toggle sollte funktionieren");

    assert!(!state.view.show_faces);
    assert!(!state.selection.is_empty());
}

#[test]
fn test_clear_selection_intent() {
    let (mut controller, mut state, mut store) = loaded_session();
    state.selection.point_ids_mut().insert("a".to_string());
    state.selection.face_ids_mut().insert("f1".to_string());

    controller
        .handle_intent(
            &mut state,
            &mut store,
            &NullProjector,
            AppIntent::ClearSelectionRequested,
        )
        .expect("Leeren sollte funktionieren");

    assert!(state.selection.is_empty());
}

/// Projiziert IDs auf fest verdrahtete Screen-Positionen.
struct FixedProjector(HashMap<String, Vec2>);

impl ScreenProjector for FixedProjector {
    fn screen_position_of(&self, point_id: &str) -> Option<Vec2> {
        self.0.get(point_id).copied()
    }
}

#[test]
fn test_lasso_selection_via_projector() {
    let (mut controller, mut state, mut store) = loaded_session();
    state.selection.mode = SelectionMode::Lasso;

    let mut positions = HashMap::new();
    positions.insert("a".to_string(), Vec2::new(5.0, 5.0));
    positions.insert("b".to_string(), Vec2::new(6.0, 6.0));
    positions.insert("c".to_string(), Vec2::new(50.0, 50.0));
    let projector = FixedProjector(positions);

    let polygon = vec![
        Vec2::new(0.0, 0.0),
        Vec2::new(10.0, 0.0),
        Vec2::new(10.0, 10.0),
        Vec2::new(0.0, 10.0),
    ];

    controller
        .handle_intent(
            &mut state,
            &mut store,
            &projector,
            AppIntent::LassoSelectionRequested { polygon },
        )
        .expect("Lasso sollte funktionieren");

    assert!(state.selection.selected_point_ids.contains("a"));
    assert!(state.selection.selected_point_ids.contains("b"));
    assert!(!state.selection.selected_point_ids.contains("c"));
}

#[test]
fn test_lasso_intent_in_2d_is_filtered() {
    let (mut controller, mut state, mut store) = loaded_session();
    state.selection.mode = SelectionMode::Lasso;
    state.view.graph_view = GraphView::TwoD;

    let mut positions = HashMap::new();
    positions.insert("a".to_string(), Vec2::new(5.0, 5.0));
    let projector = FixedProjector(positions);

    controller
        .handle_intent(
            &mut state,
            &mut store,
            &projector,
            AppIntent::LassoSelectionRequested {
                polygon: vec![
                    Vec2::new(0.0, 0.0),
                    Vec2::new(10.0, 0.0),
                    Vec2::new(0.0, 10.0),
                ],
            },
        )
        .expect("Gefilterter Intent sollte ohne Fehler durchlaufen");

    assert!(state.selection.is_empty());
}

#[test]
fn test_face_pick_selects_and_deselects() {
    let (mut controller, mut state, mut store) = loaded_session();

    controller
        .handle_intent(
            &mut state,
            &mut store,
            &NullProjector,
            AppIntent::FacePickRequested {
                face_id: "f1".to_string(),
                additive: false,
            },
        )
        .expect("Flächen-Pick sollte funktionieren");
    assert!(state.selection.selected_face_ids.contains("f1"));

    controller
        .handle_intent(
            &mut state,
            &mut store,
            &NullProjector,
            AppIntent::FacePickRequested {
                face_id: "f1".to_string(),
                additive: false,
            },
        )
        .expect("Flächen-Pick sollte funktionieren");
    assert!(state.selection.selected_face_ids.is_empty());
}
