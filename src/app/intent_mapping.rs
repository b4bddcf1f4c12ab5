//! Mapping von UI-Intents auf mutierende App-Commands.
//!
//! Hier sitzt die Vorfilterung: Intents die im aktuellen Zustand nichts
//! bewirken können (leere Selektion, Replay im Gang, falscher Modus)
//! werden zu einer leeren Command-Liste und erreichen die Handler nie.

use super::state::{GraphView, SelectionMode};
use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::LoadRequested => vec![AppCommand::LoadInitial],

        AppIntent::PointPickRequested { point_id, additive } => {
            match state.selection.mode {
                // Picks wirken nur in den Klick-Modi
                SelectionMode::Single | SelectionMode::Multi => {
                    vec![AppCommand::SelectPoint { point_id, additive }]
                }
                SelectionMode::Lasso | SelectionMode::NoSelection => Vec::new(),
            }
        }
        AppIntent::FacePickRequested { face_id, additive } => match state.selection.mode {
            SelectionMode::Single | SelectionMode::Multi => {
                vec![AppCommand::SelectFace { face_id, additive }]
            }
            SelectionMode::Lasso | SelectionMode::NoSelection => Vec::new(),
        },
        AppIntent::LassoSelectionRequested { polygon } => {
            if state.selection.mode == SelectionMode::Lasso
                && state.view.graph_view == GraphView::ThreeD
                && polygon.len() >= 3
            {
                vec![AppCommand::SelectPointsInLasso { polygon }]
            } else {
                Vec::new()
            }
        }
        AppIntent::ClearSelectionRequested => vec![AppCommand::ClearSelection],
        AppIntent::SelectionModeChangeRequested { mode } => {
            // Lasso gibt es nur in der 3D-Ansicht
            if mode == SelectionMode::Lasso && state.view.graph_view == GraphView::TwoD {
                Vec::new()
            } else {
                vec![AppCommand::SetSelectionMode { mode }]
            }
        }

        AppIntent::CutColorChanged { color } => vec![AppCommand::SetCutColor { color }],
        AppIntent::SplitColorChanged { color } => vec![AppCommand::SetSplitColor { color }],
        AppIntent::CutSelectedRequested => {
            if state.selection.selected_point_ids.is_empty() {
                Vec::new()
            } else {
                vec![AppCommand::CutSelected]
            }
        }
        AppIntent::SplitSelectedRequested => {
            if state.selection.selected_point_ids.is_empty() {
                Vec::new()
            } else {
                vec![AppCommand::SplitSelected]
            }
        }

        AppIntent::ReplayToRequested { index } => {
            // Replays sind nicht abbrechbar: neue Anfragen warten bis der
            // Guard gelöscht ist
            if state.replaying || index >= state.op_log.len() {
                Vec::new()
            } else {
                vec![AppCommand::ReplayTo { index }]
            }
        }
        AppIntent::ReplaySettled => vec![AppCommand::FinishReplay],
        AppIntent::LogResyncRequested => vec![AppCommand::ResyncLog],

        AppIntent::GraphViewToggleRequested => vec![AppCommand::ToggleGraphView],
        AppIntent::FaceVisibilityToggleRequested => vec![AppCommand::ToggleFaces],
    }
}
