use std::sync::Arc;

use indexmap::IndexSet;

/// Aktiver Selektionsmodus (Lasso nur in der 3D-Ansicht verfügbar)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionMode {
    /// Einzelselektion: Pick ersetzt die Selektion
    #[default]
    Single,
    /// Mehrfachselektion: Strg-Pick toggelt, Pick ohne Strg ersetzt
    Multi,
    /// Lasso-Selektion über Screen-Polygon (nur 3D)
    Lasso,
    /// Picks werden ignoriert
    NoSelection,
}

/// Auswahlbezogener Anwendungszustand.
///
/// Ephemer: wird bei jeder Strukturmutation, beim Ansichtswechsel und beim
/// Replay geleert und nie ins Operationslog geschrieben.
#[derive(Clone, Default)]
pub struct SelectionState {
    /// Aktuell selektierte Punkt-IDs (Arc für O(1)-Clone, geordnet für
    /// deterministische Operation-Payloads)
    pub selected_point_ids: Arc<IndexSet<String>>,
    /// Aktuell selektierte Flächen-IDs
    pub selected_face_ids: Arc<IndexSet<String>>,
    /// Aktiver Selektionsmodus
    pub mode: SelectionMode,
}

impl SelectionState {
    /// Erstellt einen leeren Selektionszustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mutable Referenz auf die Punkt-Selektion (CoW: klont nur wenn nötig).
    #[inline]
    pub fn point_ids_mut(&mut self) -> &mut IndexSet<String> {
        Arc::make_mut(&mut self.selected_point_ids)
    }

    /// Mutable Referenz auf die Flächen-Selektion (CoW: klont nur wenn nötig).
    #[inline]
    pub fn face_ids_mut(&mut self) -> &mut IndexSet<String> {
        Arc::make_mut(&mut self.selected_face_ids)
    }

    /// Leert Punkt- und Flächenselektion (der Modus bleibt erhalten).
    pub fn clear(&mut self) {
        if !self.selected_point_ids.is_empty() {
            self.point_ids_mut().clear();
        }
        if !self.selected_face_ids.is_empty() {
            self.face_ids_mut().clear();
        }
    }

    /// Prüft ob weder Punkte noch Flächen selektiert sind.
    pub fn is_empty(&self) -> bool {
        self.selected_point_ids.is_empty() && self.selected_face_ids.is_empty()
    }
}
