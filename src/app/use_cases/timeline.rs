//! Use-Case: Timeline-Replay auf einen Log-Index.

use std::sync::Arc;

use anyhow::Context;

use crate::app::decoration::DecorationState;
use crate::app::AppState;
use crate::store::SightStore;

/// Spielt den Editor auf den Zustand nach Log-Record `index` zurück.
///
/// Ablauf: Guard setzen (blockiert Anhängen und weitere Replays), Snapshot
/// von der Snapshot-Autorität holen, Selektion leeren, Dekorationen aus dem
/// Log-Präfix rekonstruieren, alles zusammen installieren und die Szene neu
/// aufbauen lassen. Der Guard bleibt bis zum expliziten `finish_replay`
/// gesetzt, damit der ausgelagerte Renderer sich settlen kann.
///
/// Schlägt der Snapshot-Abruf fehl, bleibt der vorherige Zustand vollständig
/// erhalten und der Guard wird gelöscht.
pub fn replay_to_index(
    state: &mut AppState,
    store: &dyn SightStore,
    index: usize,
) -> anyhow::Result<()> {
    if state.replaying {
        log::warn!("Replay auf Index {index} ignoriert: Replay bereits im Gang");
        return Ok(());
    }

    if state.complex.is_none() {
        log::warn!("Replay auf Index {index} ignoriert: kein Komplex geladen");
        return Ok(());
    }

    if index >= state.op_log.len() {
        log::warn!(
            "Replay-Index {index} außerhalb des Logs ({} Einträge)",
            state.op_log.len()
        );
        return Ok(());
    }

    state.replaying = true;

    let snapshot = match store.fetch_snapshot_at_index(Some(index)) {
        Ok(snapshot) => snapshot,
        Err(err) => {
            state.replaying = false;
            log::error!("Replay-Snapshot für Index {index} nicht abrufbar: {err:#}");
            return Err(err).context("Replay abgebrochen, vorheriger Zustand bleibt aktiv");
        }
    };

    state.selection.clear();
    state.decorations =
        DecorationState::rebuild_from_records(state.op_log.records_up_to(Some(index)));
    state.complex = Some(Arc::new(snapshot));
    state.timeline_index = Some(index);
    state.view.bump_scene_epoch();

    log::info!(
        "Replay auf Index {index} installiert: {} Punkte, {} Cut-/{} Split-Dekorationen",
        state.point_count(),
        state.decorations.cuts.len(),
        state.decorations.splits.len()
    );
    Ok(())
}

/// Beendet die Settling-Phase nach einem Replay und gibt das Anhängen
/// wieder frei. Wird vom Host gerufen, sobald die Szene steht.
pub fn finish_replay(state: &mut AppState) {
    if state.replaying {
        state.replaying = false;
        log::debug!("Replay-Settling abgeschlossen, Aufzeichnung wieder frei");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::op_log::OperationRecord;
    use crate::core::{Complex, Connection, Point};
    use crate::store::MemoryStore;
    use glam::Vec3;

    fn path_a_b_c() -> Complex {
        let mut complex = Complex::new();
        complex.add_point(Point::new("a", Vec3::ZERO));
        complex.add_point(Point::new("b", Vec3::new(1.0, 0.0, 0.0)));
        complex.add_point(Point::new("c", Vec3::new(2.0, 0.0, 0.0)));
        complex.add_connection(Connection::new("a", "b"));
        complex.add_connection(Connection::new("b", "c"));
        complex
    }

    /// Store dessen Snapshot-Abruf immer fehlschlägt.
    struct BrokenStore;

    impl SightStore for BrokenStore {
        fn load_initial_complex(&mut self) -> anyhow::Result<Complex> {
            anyhow::bail!("nicht erreichbar")
        }
        fn fetch_snapshot_at_index(&self, _index: Option<usize>) -> anyhow::Result<Complex> {
            anyhow::bail!("nicht erreichbar")
        }
        fn append_operation(&mut self, _record: OperationRecord) -> anyhow::Result<()> {
            anyhow::bail!("nicht erreichbar")
        }
        fn fetch_log(&self) -> anyhow::Result<Vec<OperationRecord>> {
            anyhow::bail!("nicht erreichbar")
        }
    }

    fn state_with_log() -> AppState {
        let mut state = AppState::new();
        state.complex = Some(Arc::new(path_a_b_c()));
        state.op_log.append(OperationRecord::initial_load());
        state.op_log.append(OperationRecord::cut(
            vec!["b".to_string()],
            "#ff0000".to_string(),
            vec!["a".to_string(), "c".to_string()],
        ));
        state.timeline_index = Some(1);
        state
    }

    #[test]
    fn replay_installiert_snapshot_und_dekorationen() {
        let mut state = state_with_log();
        let mut store = MemoryStore::new(path_a_b_c());
        for record in state.op_log.entries() {
            store.append_operation(record.clone()).expect("Append");
        }
        let epoch_before = state.view.scene_epoch;

        replay_to_index(&mut state, &store, 0).expect("Replay");

        assert_eq!(state.point_count(), 3);
        assert!(state.decorations.cuts.is_empty());
        assert_eq!(state.timeline_index, Some(0));
        assert!(state.replaying);
        assert!(state.view.scene_epoch > epoch_before);

        finish_replay(&mut state);
        assert!(!state.replaying);
    }

    #[test]
    fn replay_waehrend_replay_wird_ignoriert() {
        let mut state = state_with_log();
        let store = MemoryStore::new(path_a_b_c());
        state.replaying = true;
        state.timeline_index = Some(1);

        replay_to_index(&mut state, &store, 0).expect("Replay");

        assert_eq!(state.timeline_index, Some(1));
    }

    #[test]
    fn replay_index_hinter_log_ende_wird_ignoriert() {
        let mut state = state_with_log();
        let store = MemoryStore::new(path_a_b_c());

        replay_to_index(&mut state, &store, 99).expect("Replay");

        assert_eq!(state.timeline_index, Some(1));
        assert!(!state.replaying);
    }

    #[test]
    fn replay_fehler_laesst_zustand_intakt_und_loescht_guard() {
        let mut state = state_with_log();
        state.selection.point_ids_mut().insert("a".to_string());
        let complex_before = state.complex.clone();

        let result = replay_to_index(&mut state, &BrokenStore, 0);

        assert!(result.is_err());
        assert!(!state.replaying);
        assert_eq!(state.timeline_index, Some(1));
        assert!(state.selection.selected_point_ids.contains("a"));
        assert!(Arc::ptr_eq(
            state.complex.as_ref().expect("Komplex"),
            complex_before.as_ref().expect("Komplex")
        ));
    }
}
