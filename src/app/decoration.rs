//! Abgeleitete Dekorationen (Cut/Split-Einfärbungen) und der Farb-Resolver.
//!
//! Dekorationen sind nicht-autoritative Annotationen: sie werden nie
//! persistiert, sondern live beim Editieren mitgeführt und beim Replay aus
//! dem Log-Präfix rekonstruiert.

use indexmap::IndexSet;

use super::op_log::{OperationPayload, OperationRecord};
use super::AppState;

/// Dekoration eines `cut_nodes`-Records: Farbe für die betroffenen Nachbarn
#[derive(Debug, Clone, PartialEq)]
pub struct CutDecoration {
    /// Gewählte Cut-Farbe (`#rrggbb`)
    pub color: String,
    /// Nachbarn der entfernten Punkte
    pub affected_point_ids: IndexSet<String>,
    /// Zeitstempel des Records
    pub timestamp_ms: u64,
}

/// Dekoration eines `split_nodes`-Records: Farbe für die Duplikate
#[derive(Debug, Clone, PartialEq)]
pub struct SplitDecoration {
    /// Gewählte Split-Farbe (`#rrggbb`)
    pub color: String,
    /// Die ursprünglich selektierten Punkte
    pub original_point_ids: IndexSet<String>,
    /// Die erzeugten Duplikat-Punkte
    pub duplicated_point_ids: IndexSet<String>,
    /// Zeitstempel des Records
    pub timestamp_ms: u64,
}

/// Alle aktuell wirksamen Dekorationen, in Log-Reihenfolge
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DecorationState {
    /// Cut-Dekorationen in Log-Reihenfolge
    pub cuts: Vec<CutDecoration>,
    /// Split-Dekorationen in Log-Reihenfolge
    pub splits: Vec<SplitDecoration>,
    /// Vereinigung aller je betroffenen/duplizierten Punkte
    /// (Hilfs-Highlighting, keine Farb-Präzedenz)
    pub ever_affected: IndexSet<String>,
}

impl DecorationState {
    /// Setzt alle Dekorationen zurück.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Nimmt eine Cut-Dekoration auf (Live-Pfad nach einer Mutation).
    pub fn record_cut(
        &mut self,
        color: String,
        affected_point_ids: IndexSet<String>,
        timestamp_ms: u64,
    ) {
        self.ever_affected.extend(affected_point_ids.iter().cloned());
        self.cuts.push(CutDecoration {
            color,
            affected_point_ids,
            timestamp_ms,
        });
    }

    /// Nimmt eine Split-Dekoration auf (Live-Pfad nach einer Mutation).
    pub fn record_split(
        &mut self,
        color: String,
        original_point_ids: IndexSet<String>,
        duplicated_point_ids: IndexSet<String>,
        timestamp_ms: u64,
    ) {
        self.ever_affected.extend(duplicated_point_ids.iter().cloned());
        self.splits.push(SplitDecoration {
            color,
            original_point_ids,
            duplicated_point_ids,
            timestamp_ms,
        });
    }

    /// Rekonstruiert den Dekorationszustand aus einem Log-Präfix
    /// (Replay-Pfad). `initial_load`-Records erzeugen keine Dekoration.
    pub fn rebuild_from_records(records: &[OperationRecord]) -> Self {
        let mut state = Self::default();
        for record in records {
            match &record.payload {
                OperationPayload::InitialLoad => {}
                OperationPayload::CutNodes {
                    color,
                    affected_point_ids,
                    ..
                } => {
                    state.record_cut(
                        color.clone(),
                        affected_point_ids.iter().cloned().collect(),
                        record.timestamp_ms,
                    );
                }
                OperationPayload::SplitNodes {
                    original_point_ids,
                    duplicated_point_ids,
                    color,
                } => {
                    state.record_split(
                        color.clone(),
                        original_point_ids.iter().cloned().collect(),
                        duplicated_point_ids.iter().cloned().collect(),
                        record.timestamp_ms,
                    );
                }
            }
        }
        state
    }
}

/// Ermittelt die Anzeigefarbe eines Punkts zum Render-Zeitpunkt.
///
/// Feste Präzedenz:
/// 1. Selektion
/// 2. Split-Dekorationen, jüngste zuerst (Duplikat-Mengen)
/// 3. Cut-Dekorationen, jüngste zuerst (Affected-Mengen)
/// 4. Eigene Punktfarbe, sonst Default aus den Optionen
///
/// Wird pro Aufruf ausgewertet und nie über Struktur- oder
/// Dekorationsänderungen hinweg gecacht.
pub fn point_color(state: &AppState, point_id: &str) -> String {
    if state.selection.selected_point_ids.contains(point_id) {
        return state.options.point_color_selected.clone();
    }

    for split in state.decorations.splits.iter().rev() {
        if split.duplicated_point_ids.contains(point_id) {
            return split.color.clone();
        }
    }

    for cut in state.decorations.cuts.iter().rev() {
        if cut.affected_point_ids.contains(point_id) {
            return cut.color.clone();
        }
    }

    state
        .complex
        .as_ref()
        .and_then(|c| c.points.get(point_id))
        .and_then(|p| p.color.clone())
        .unwrap_or_else(|| state.options.point_color_default.clone())
}

/// Ermittelt die Anzeigegröße eines Punkts (Selektion vergrößert).
pub fn point_size(state: &AppState, point_id: &str) -> f32 {
    let base = state
        .complex
        .as_ref()
        .and_then(|c| c.points.get(point_id))
        .map(|p| p.size)
        .unwrap_or(state.options.point_size_default);

    if state.selection.selected_point_ids.contains(point_id) {
        base * state.options.selection_size_factor
    } else {
        base
    }
}

/// Ermittelt die Füllfarbe einer Fläche (Selektion vor eigener Farbe).
pub fn face_color(state: &AppState, face_id: &str) -> String {
    if state.selection.selected_face_ids.contains(face_id) {
        return state.options.face_color_selected.clone();
    }

    state
        .complex
        .as_ref()
        .and_then(|c| c.faces.iter().find(|f| f.id == face_id))
        .and_then(|f| f.color.clone())
        .unwrap_or_else(|| state.options.face_color_default.clone())
}
