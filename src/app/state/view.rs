/// Aktive Graph-Ansicht (beeinflusst nur die ausgelagerte Darstellung
/// und die Verfügbarkeit der Lasso-Selektion)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GraphView {
    /// 3D-Ansicht mit Lasso-Unterstützung
    #[default]
    ThreeD,
    /// 2D-Ansicht (Lasso deaktiviert)
    TwoD,
}

/// Ansichtsbezogener Anwendungszustand
#[derive(Debug, Clone)]
pub struct ViewState {
    /// Aktive Graph-Ansicht
    pub graph_view: GraphView,
    /// Ob Flächen gezeichnet werden
    pub show_faces: bool,
    /// Re-Mount-Schlüssel für den ausgelagerten Renderer: jede Erhöhung
    /// signalisiert "Szene komplett neu aufbauen" (Replay, Ansichtswechsel)
    pub scene_epoch: u64,
}

impl ViewState {
    /// Erstellt den Standard-Ansichtszustand (3D, Flächen sichtbar).
    pub fn new() -> Self {
        Self {
            graph_view: GraphView::ThreeD,
            show_faces: true,
            scene_epoch: 0,
        }
    }

    /// Erzwingt einen Szenen-Neuaufbau beim Host.
    pub fn bump_scene_epoch(&mut self) {
        self.scene_epoch = self.scene_epoch.wrapping_add(1);
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}
