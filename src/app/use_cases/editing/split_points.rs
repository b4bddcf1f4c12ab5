//! Use-Case: Selektierte Punkte duplizieren (Split mit Positions-Jitter).

use std::sync::Arc;

use anyhow::Context;

use crate::app::op_log::OperationRecord;
use crate::app::AppState;
use crate::store::SightStore;

/// Dupliziert alle selektierten Punkte samt deren Nachbarschaft und hängt
/// ein `split_nodes`-Record an.
///
/// Die Originale bleiben unverändert erhalten; Original und Duplikat werden
/// nie direkt verbunden. Die Duplikate werden mit der aktiven Split-Farbe
/// dekoriert. Append-Fehler werden wie beim Cut behandelt: Snapshot bleibt,
/// Log wird als abweichend markiert.
pub fn split_selected_points(
    state: &mut AppState,
    store: &mut dyn SightStore,
) -> anyhow::Result<()> {
    if !state.can_record_operations() {
        log::warn!("Split abgelehnt: Replay im Gang oder kein Komplex geladen");
        return Ok(());
    }

    if state.selection.selected_point_ids.is_empty() {
        log::debug!("Nichts zum Duplizieren selektiert");
        return Ok(());
    }

    let Some(complex) = state.complex.as_ref() else {
        return Ok(());
    };

    let jitter = state.options.split_jitter;
    let Some(result) = complex.split(&state.selection.selected_point_ids, jitter, &mut rand::rng())
    else {
        log::debug!("Split ohne gültige Punkt-IDs: No-op");
        state.selection.clear();
        return Ok(());
    };

    let color = state.options.split_color.clone();
    let record = OperationRecord::split(
        result.mapping.keys().cloned().collect(),
        result.duplicated_point_ids.clone(),
        color.clone(),
    );

    let originals = result.mapping.keys().cloned().collect();
    let duplicates = result.duplicated_point_ids.iter().cloned().collect();
    let split_count = result.duplicated_point_ids.len();

    state.complex = Some(Arc::new(result.complex));
    state
        .decorations
        .record_split(color, originals, duplicates, record.timestamp_ms);
    state.selection.clear();

    match store.append_operation(record.clone()) {
        Ok(()) => {
            state.op_log.append(record);
            state.timeline_index = state.op_log.tail_index();
            log::info!(
                "{} Punkt(e) dupliziert, Komplex hat jetzt {} Punkte",
                split_count,
                state.point_count()
            );
            Ok(())
        }
        Err(err) => {
            state.log_desynced = true;
            log::error!("Anhängen des Split-Records fehlgeschlagen: {err:#}");
            Err(err).context("Split-Operation konnte nicht ins Log geschrieben werden")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::decoration::point_color;
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

    fn loaded_state(complex: Complex) -> AppState {
        let mut state = AppState::new();
        state.complex = Some(Arc::new(complex));
        state
    }

    #[test]
    fn split_dupliziert_punkt_und_nachbarschaft() {
        let mut state = loaded_state(path_a_b_c());
        let mut store = MemoryStore::new(path_a_b_c());
        state.options.split_color = "#00ff00".to_string();
        state.selection.point_ids_mut().insert("b".to_string());

        split_selected_points(&mut state, &mut store).expect("Split");

        let complex = state.complex.as_ref().expect("Komplex");
        assert_eq!(complex.point_count(), 4);
        assert!(complex.contains_point("b"));
        assert!(complex.contains_point("b_s1"));
        // Duplikat übernimmt die Nachbarschaft des Originals
        assert!(complex.has_connection("a", "b_s1"));
        assert!(complex.has_connection("b_s1", "c"));
        // Original und Duplikat sind nie direkt verbunden
        assert!(!complex.has_connection("b", "b_s1"));
        assert!(state.selection.is_empty());
        assert_eq!(point_color(&state, "b_s1"), "#00ff00");
        assert_eq!(state.op_log.len(), 1);
    }

    #[test]
    fn split_mit_leerer_selektion_ist_noop() {
        let mut state = loaded_state(path_a_b_c());
        let mut store = MemoryStore::new(path_a_b_c());

        split_selected_points(&mut state, &mut store).expect("Split");

        assert_eq!(state.point_count(), 3);
        assert!(state.op_log.is_empty());
        assert!(store.records().is_empty());
    }

    #[test]
    fn split_vor_dem_laden_wird_abgelehnt() {
        let mut state = AppState::new();
        let mut store = MemoryStore::new(path_a_b_c());
        state.selection.point_ids_mut().insert("b".to_string());

        split_selected_points(&mut state, &mut store).expect("Split");

        assert!(state.complex.is_none());
        assert!(state.op_log.is_empty());
    }
}
