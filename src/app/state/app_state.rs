use std::sync::Arc;

use crate::app::decoration::DecorationState;
use crate::app::op_log::OperationLog;
use crate::core::Complex;
use crate::shared::EditorOptions;

use super::{SelectionState, ViewState};

/// Hauptzustand der Anwendung.
///
/// Einziger Zustandscontainer: jede Aktion (Cut, Split, Selektion, Replay)
/// läuft als explizite Übergangsfunktion über diesen Zustand.
pub struct AppState {
    /// Aktueller Struktur-Snapshot (None = noch nicht geladen)
    pub complex: Option<Arc<Complex>>,
    /// Selection-State
    pub selection: SelectionState,
    /// View-State
    pub view: ViewState,
    /// Lokale Sicht auf das Operationslog
    pub op_log: OperationLog,
    /// Abgeleitete Cut/Split-Dekorationen
    pub decorations: DecorationState,
    /// Aktuell angezeigter Timeline-Index (None = nichts geladen)
    pub timeline_index: Option<usize>,
    /// Guard-Flag: Replay im Gang — blockiert Anhängen und neue Replays,
    /// wird erst nach vollständiger Installation + Host-Settling gelöscht
    pub replaying: bool,
    /// Lokales Log weicht vom autoritativen Log ab (Append-Fehler);
    /// wird durch einen Log-Resync wieder gelöscht
    pub log_desynced: bool,
    /// Laufzeit-Optionen (Farben, Größen, Jitter)
    pub options: EditorOptions,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State.
    pub fn new() -> Self {
        Self {
            complex: None,
            selection: SelectionState::new(),
            view: ViewState::new(),
            op_log: OperationLog::new(),
            decorations: DecorationState::default(),
            timeline_index: None,
            replaying: false,
            log_desynced: false,
            options: EditorOptions::default(),
        }
    }

    /// Gibt die Anzahl der Punkte zurück (für UI-Anzeige).
    pub fn point_count(&self) -> usize {
        self.complex.as_ref().map_or(0, |c| c.point_count())
    }

    /// Gibt die Anzahl der Verbindungen zurück (für UI-Anzeige).
    pub fn connection_count(&self) -> usize {
        self.complex.as_ref().map_or(0, |c| c.connection_count())
    }

    /// Gibt die Anzahl der Flächen zurück (für UI-Anzeige).
    pub fn face_count(&self) -> usize {
        self.complex.as_ref().map_or(0, |c| c.face_count())
    }

    /// Prüft ob aktuell Operationen aufgezeichnet werden dürfen:
    /// abgelehnt während eines Replays und solange der initiale Snapshot
    /// nicht geladen ist.
    pub fn can_record_operations(&self) -> bool {
        !self.replaying && self.complex.is_some()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
