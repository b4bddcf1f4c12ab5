use glam::Vec2;

use crate::app::state::SelectionMode;

/// Commands sind validierte, direkt ausführbare Mutationen auf dem
/// `AppState` (plus Kollaborateure). Sie entstehen ausschließlich aus
/// dem Intent->Command-Mapping.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Initialen Komplex laden und Log starten
    LoadInitial,
    /// Punkt selektieren
    SelectPoint { point_id: String, additive: bool },
    /// Fläche selektieren
    SelectFace { face_id: String, additive: bool },
    /// Punkte im Lasso-Polygon selektieren
    SelectPointsInLasso { polygon: Vec<Vec2> },
    /// Selektion leeren
    ClearSelection,
    /// Selektionsmodus setzen
    SetSelectionMode { mode: SelectionMode },
    /// Cut-Farbe setzen
    SetCutColor { color: String },
    /// Split-Farbe setzen
    SetSplitColor { color: String },
    /// Selektierte Punkte schneiden
    CutSelected,
    /// Selektierte Punkte duplizieren
    SplitSelected,
    /// Auf Log-Index zurückspielen
    ReplayTo { index: usize },
    /// Replay-Settling beenden
    FinishReplay,
    /// Log-Sicht resynchronisieren
    ResyncLog,
    /// 3D/2D-Ansicht wechseln
    ToggleGraphView,
    /// Flächendarstellung umschalten
    ToggleFaces,
}
