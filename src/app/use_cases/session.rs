//! Use-Case: Sitzungs-Lebenszyklus — initiales Laden und Log-Resync.

use std::sync::Arc;

use anyhow::Context;

use crate::app::decoration::DecorationState;
use crate::app::op_log::OperationRecord;
use crate::app::AppState;
use crate::store::SightStore;

/// Lädt den initialen Komplex vom Store, übernimmt eine eventuell
/// vorhandene Historie und hängt ein `initial_load`-Record an.
///
/// Vor dem erfolgreichen Laden werden keine Operationen aufgezeichnet.
pub fn load_initial(state: &mut AppState, store: &mut dyn SightStore) -> anyhow::Result<()> {
    let history = store
        .fetch_log()
        .context("Operationslog nicht abrufbar")?;

    // Der installierte Snapshot muss zur Timeline-Position passen: bei
    // vorhandener Historie ist das der Zustand am Log-Ende, nicht der
    // Startzustand
    let complex = match history.len().checked_sub(1) {
        None => store
            .load_initial_complex()
            .context("Initialer Komplex nicht ladbar")?,
        tail => store
            .fetch_snapshot_at_index(tail)
            .context("Snapshot am Log-Ende nicht ladbar")?,
    };
    complex
        .check_integrity()
        .context("Geladener Komplex verletzt die referentielle Integrität")?;

    state.complex = Some(Arc::new(complex));
    state.selection.clear();
    state.op_log.replace_all(history);
    state.decorations = DecorationState::rebuild_from_records(
        state.op_log.records_up_to(state.op_log.tail_index()),
    );

    let record = OperationRecord::initial_load();
    match store.append_operation(record.clone()) {
        Ok(()) => {
            state.op_log.append(record);
            state.log_desynced = false;
        }
        Err(err) => {
            state.log_desynced = true;
            log::error!("initial_load-Record nicht anhängbar: {err:#}");
        }
    }

    state.timeline_index = state.op_log.tail_index();
    state.view.bump_scene_epoch();

    log::info!(
        "Komplex geladen: {} Punkte, {} Verbindungen, {} Flächen, {} Log-Einträge",
        state.point_count(),
        state.connection_count(),
        state.face_count(),
        state.op_log.len()
    );
    Ok(())
}

/// Holt das autoritative Log neu und ersetzt die lokale Sicht.
///
/// Rekonstruiert danach Timeline-Index und Dekorationen aus dem neuen Log
/// und löscht das Desync-Flag. Während eines Replays nicht erlaubt.
pub fn resync_log(state: &mut AppState, store: &dyn SightStore) -> anyhow::Result<()> {
    if state.replaying {
        log::warn!("Log-Resync während eines Replays ignoriert");
        return Ok(());
    }

    let records = store
        .fetch_log()
        .context("Autoritatives Log nicht abrufbar")?;
    state.op_log.replace_all(records);
    state.timeline_index = state.op_log.tail_index();
    state.decorations = DecorationState::rebuild_from_records(
        state.op_log.records_up_to(state.timeline_index),
    );
    state.log_desynced = false;

    log::info!("Log resynchronisiert: {} Einträge", state.op_log.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Complex, Connection, Point};
    use crate::store::MemoryStore;
    use glam::Vec3;

    fn path_a_b() -> Complex {
        let mut complex = Complex::new();
        complex.add_point(Point::new("a", Vec3::ZERO));
        complex.add_point(Point::new("b", Vec3::new(1.0, 0.0, 0.0)));
        complex.add_connection(Connection::new("a", "b"));
        complex
    }

    #[test]
    fn load_installiert_komplex_und_initial_record() {
        let mut state = AppState::new();
        let mut store = MemoryStore::new(path_a_b());

        load_initial(&mut state, &mut store).expect("Laden");

        assert_eq!(state.point_count(), 2);
        assert_eq!(state.op_log.len(), 1);
        assert_eq!(state.timeline_index, Some(0));
        assert!(state.can_record_operations());
        assert_eq!(store.records().len(), 1);
    }

    #[test]
    fn load_uebernimmt_bestehende_historie() {
        let mut state = AppState::new();
        let mut store = MemoryStore::new(path_a_b());
        store
            .append_operation(OperationRecord::cut(
                vec!["b".to_string()],
                "#ff0000".to_string(),
                vec!["a".to_string()],
            ))
            .expect("Append");

        load_initial(&mut state, &mut store).expect("Laden");

        // Bestehender Cut-Record + neues initial_load
        assert_eq!(state.op_log.len(), 2);
        assert_eq!(state.decorations.cuts.len(), 1);
        assert_eq!(state.timeline_index, Some(1));

        // Der Snapshot entspricht dem Log-Ende: der historische Cut
        // ist bereits angewendet, nicht nur dekoriert
        let complex = state.complex.as_ref().expect("Komplex");
        assert!(!complex.contains_point("b"));
        assert_eq!(complex.point_count(), 1);
        assert_eq!(complex.connection_count(), 0);
    }

    #[test]
    fn resync_ersetzt_lokale_sicht_und_loescht_flag() {
        let mut state = AppState::new();
        let mut store = MemoryStore::new(path_a_b());
        load_initial(&mut state, &mut store).expect("Laden");

        state.log_desynced = true;
        store
            .append_operation(OperationRecord::cut(
                vec!["b".to_string()],
                "#ff0000".to_string(),
                vec!["a".to_string()],
            ))
            .expect("Append");

        resync_log(&mut state, &store).expect("Resync");

        assert!(!state.log_desynced);
        assert_eq!(state.op_log.len(), 2);
        assert_eq!(state.timeline_index, Some(1));
        assert_eq!(state.decorations.cuts.len(), 1);
    }
}
