use glam::Vec2;

use crate::app::state::SelectionMode;

/// Intents sind Eingaben aus UI/Host ohne direkte Mutationslogik.
/// Sie werden über das Intent->Command-Mapping gefiltert und übersetzt.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Initialen Komplex vom Store laden
    LoadRequested,
    /// Punkt per Klick selektieren (`additive` = Strg gedrückt)
    PointPickRequested { point_id: String, additive: bool },
    /// Fläche per Klick selektieren
    FacePickRequested { face_id: String, additive: bool },
    /// Punkte innerhalb eines Screen-Polygons selektieren (Lasso)
    LassoSelectionRequested { polygon: Vec<Vec2> },
    /// Komplette Selektion leeren
    ClearSelectionRequested,
    /// Selektionsmodus wechseln
    SelectionModeChangeRequested { mode: SelectionMode },
    /// Cut-Farbe für kommende Operationen setzen
    CutColorChanged { color: String },
    /// Split-Farbe für kommende Operationen setzen
    SplitColorChanged { color: String },
    /// Selektierte Punkte schneiden
    CutSelectedRequested,
    /// Selektierte Punkte duplizieren
    SplitSelectedRequested,
    /// Timeline auf einen Log-Index zurückspielen
    ReplayToRequested { index: usize },
    /// Host meldet: Szene nach Replay fertig aufgebaut
    ReplaySettled,
    /// Lokale Log-Sicht mit dem autoritativen Log abgleichen
    LogResyncRequested,
    /// Zwischen 3D- und 2D-Ansicht wechseln
    GraphViewToggleRequested,
    /// Flächendarstellung umschalten
    FaceVisibilityToggleRequested,
}
