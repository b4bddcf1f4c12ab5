//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState};
use crate::store::{ScreenProjector, SightStore};

/// Orchestriert Host-Events und Use-Cases auf den AppState.
///
/// Der Controller selbst hält keinen Zustand: alles Fachliche lebt im
/// `AppState`, die Kollaborateure (Store, Projektor) werden pro Aufruf
/// hereingereicht.
#[derive(Default)]
pub struct EditorController;

impl EditorController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über das Intent->Command Mapping.
    pub fn handle_intent(
        &mut self,
        state: &mut AppState,
        store: &mut dyn SightStore,
        projector: &dyn ScreenProjector,
        intent: AppIntent,
    ) -> anyhow::Result<()> {
        let commands = super::intent_mapping::map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, store, projector, command)?;
        }

        Ok(())
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        store: &mut dyn SightStore,
        projector: &dyn ScreenProjector,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        use super::handlers;

        match command {
            // === Sitzung & Log ===
            AppCommand::LoadInitial => handlers::session::load_initial(state, store)?,
            AppCommand::ResyncLog => handlers::session::resync_log(state, store)?,

            // === Selektion ===
            AppCommand::SelectPoint { point_id, additive } => {
                handlers::selection::select_point(state, &point_id, additive)
            }
            AppCommand::SelectFace { face_id, additive } => {
                handlers::selection::select_face(state, &face_id, additive)
            }
            AppCommand::SelectPointsInLasso { polygon } => {
                handlers::selection::select_in_lasso(state, projector, &polygon)
            }
            AppCommand::ClearSelection => handlers::selection::clear(state),
            AppCommand::SetSelectionMode { mode } => handlers::selection::set_mode(state, mode),

            // === Editing ===
            AppCommand::SetCutColor { color } => handlers::editing::set_cut_color(state, color),
            AppCommand::SetSplitColor { color } => handlers::editing::set_split_color(state, color),
            AppCommand::CutSelected => handlers::editing::cut_selected(state, store)?,
            AppCommand::SplitSelected => handlers::editing::split_selected(state, store)?,

            // === Timeline ===
            AppCommand::ReplayTo { index } => handlers::timeline::replay_to(state, store, index)?,
            AppCommand::FinishReplay => handlers::timeline::finish_replay(state),

            // === Ansicht ===
            AppCommand::ToggleGraphView => handlers::view::toggle_graph_view(state),
            AppCommand::ToggleFaces => handlers::view::toggle_faces(state),
        }

        Ok(())
    }
}
