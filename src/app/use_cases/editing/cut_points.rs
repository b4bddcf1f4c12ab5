//! Use-Case: Selektierte Punkte schneiden (inkl. aller inzidenter Simplizes).

use std::sync::Arc;

use anyhow::Context;

use crate::app::op_log::OperationRecord;
use crate::app::AppState;
use crate::store::SightStore;

/// Entfernt alle selektierten Punkte samt inzidenter Verbindungen und
/// Flächen und hängt ein `cut_nodes`-Record an.
///
/// Die Nachbarn der entfernten Punkte werden mit der aktiven Cut-Farbe
/// dekoriert. Der neue Snapshot wird optimistisch lokal installiert;
/// schlägt das Anhängen beim Store fehl, bleibt der Snapshot bestehen,
/// das lokale Log wird als abweichend markiert und der Fehler
/// weitergereicht.
pub fn cut_selected_points(state: &mut AppState, store: &mut dyn SightStore) -> anyhow::Result<()> {
    if !state.can_record_operations() {
        log::warn!("Cut abgelehnt: Replay im Gang oder kein Komplex geladen");
        return Ok(());
    }

    if state.selection.selected_point_ids.is_empty() {
        log::debug!("Nichts zum Schneiden selektiert");
        return Ok(());
    }

    let Some(complex) = state.complex.as_ref() else {
        return Ok(());
    };

    let Some(result) = complex.cut(&state.selection.selected_point_ids) else {
        // Selektion bestand nur aus unbekannten IDs
        log::debug!("Cut ohne gültige Punkt-IDs: No-op");
        state.selection.clear();
        return Ok(());
    };

    let color = state.options.cut_color.clone();
    let cut_count = result.cut_point_ids.len();
    let record = OperationRecord::cut(
        result.cut_point_ids,
        color.clone(),
        result.affected_point_ids.iter().cloned().collect(),
    );

    state.complex = Some(Arc::new(result.complex));
    state
        .decorations
        .record_cut(color, result.affected_point_ids, record.timestamp_ms);
    state.selection.clear();

    match store.append_operation(record.clone()) {
        Ok(()) => {
            state.op_log.append(record);
            state.timeline_index = state.op_log.tail_index();
            log::info!(
                "{} Punkt(e) geschnitten, {} Punkt(e) verbleiben",
                cut_count,
                state.point_count()
            );
            Ok(())
        }
        Err(err) => {
            state.log_desynced = true;
            log::error!("Anhängen des Cut-Records fehlgeschlagen: {err:#}");
            Err(err).context("Cut-Operation konnte nicht ins Log geschrieben werden")
        }
    }
}
