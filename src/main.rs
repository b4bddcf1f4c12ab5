//! Zen Sight Editor — Headless-Demo.
//!
//! Fährt eine komplette Editor-Sitzung gegen den In-Memory-Store:
//! Laden, Selektion, Cut, Split, Replay und Settling. Gibt am Ende die
//! Timeline als JSON und die aufgelösten Punktfarben aus.

use glam::Vec3;
use zen_sight_editor::shared::options::EDIT_COLOR_PALETTE;
use zen_sight_editor::{
    point_color, AppIntent, AppState, Complex, Connection, EditorController, EditorOptions, Face,
    MemoryStore, NullProjector, Point, SelectionMode,
};

/// Tetraeder: 4 Punkte, 6 Kanten, 4 Dreiecksflächen.
fn sample_complex() -> Complex {
    let mut complex = Complex::new();

    let positions = [
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(0.5, 1.0, 0.0),
        Vec3::new(0.5, 0.5, 1.0),
    ];
    for (i, position) in positions.iter().enumerate() {
        complex.add_point(Point::new(i.to_string(), *position));
    }

    for (a, b) in [(0, 1), (0, 2), (1, 2), (0, 3), (1, 3), (2, 3)] {
        complex.add_connection(Connection::new(a.to_string(), b.to_string()));
    }

    for (id, [a, b, c]) in [
        ("f0", [0, 1, 2]),
        ("f1", [0, 1, 3]),
        ("f2", [0, 2, 3]),
        ("f3", [1, 2, 3]),
    ] {
        complex.add_face(Face::new(
            id,
            [a.to_string(), b.to_string(), c.to_string()],
        ));
    }

    complex
}

fn print_state(state: &AppState, label: &str) {
    println!("--- {label} ---");
    println!(
        "Punkte: {}, Verbindungen: {}, Flächen: {}",
        state.point_count(),
        state.connection_count(),
        state.face_count()
    );
    if let Some(complex) = state.complex.as_ref() {
        for id in complex.points.keys() {
            println!("  Punkt {id}: {}", point_color(state, id));
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Zen Sight Editor v{} startet...", env!("CARGO_PKG_VERSION"));

    let config_path = EditorOptions::config_path();
    let options = EditorOptions::load_from_file(&config_path);

    let mut state = AppState::new();
    state.options = options;

    let mut store = MemoryStore::new(sample_complex());
    let projector = NullProjector;
    let mut controller = EditorController::new();

    controller.handle_intent(&mut state, &mut store, &projector, AppIntent::LoadRequested)?;
    print_state(&state, "Nach dem Laden");

    // Zwei Punkte im Multi-Modus selektieren und schneiden
    controller.handle_intent(
        &mut state,
        &mut store,
        &projector,
        AppIntent::SelectionModeChangeRequested {
            mode: SelectionMode::Multi,
        },
    )?;
    for id in ["0", "1"] {
        controller.handle_intent(
            &mut state,
            &mut store,
            &projector,
            AppIntent::PointPickRequested {
                point_id: id.to_string(),
                additive: true,
            },
        )?;
    }
    controller.handle_intent(
        &mut state,
        &mut store,
        &projector,
        AppIntent::CutColorChanged {
            color: EDIT_COLOR_PALETTE[0].to_string(),
        },
    )?;
    controller.handle_intent(&mut state, &mut store, &projector, AppIntent::CutSelectedRequested)?;
    print_state(&state, "Nach dem Cut");

    // Einen verbliebenen Punkt duplizieren
    controller.handle_intent(
        &mut state,
        &mut store,
        &projector,
        AppIntent::PointPickRequested {
            point_id: "2".to_string(),
            additive: true,
        },
    )?;
    controller.handle_intent(
        &mut state,
        &mut store,
        &projector,
        AppIntent::SplitColorChanged {
            color: EDIT_COLOR_PALETTE[1].to_string(),
        },
    )?;
    controller.handle_intent(
        &mut state,
        &mut store,
        &projector,
        AppIntent::SplitSelectedRequested,
    )?;
    print_state(&state, "Nach dem Split");

    // Timeline zurück auf den Zustand nach dem Laden und wieder nach vorn
    controller.handle_intent(
        &mut state,
        &mut store,
        &projector,
        AppIntent::ReplayToRequested { index: 0 },
    )?;
    controller.handle_intent(&mut state, &mut store, &projector, AppIntent::ReplaySettled)?;
    print_state(&state, "Replay auf Index 0");

    if let Some(tail) = state.op_log.tail_index() {
        controller.handle_intent(
            &mut state,
            &mut store,
            &projector,
            AppIntent::ReplayToRequested { index: tail },
        )?;
        controller.handle_intent(&mut state, &mut store, &projector, AppIntent::ReplaySettled)?;
        print_state(&state, "Replay auf das Log-Ende");
    }

    println!("--- Timeline ---");
    println!("{}", serde_json::to_string_pretty(state.op_log.entries())?);

    Ok(())
}
