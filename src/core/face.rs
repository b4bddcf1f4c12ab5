//! Repräsentiert eine Dreiecksfläche (2-Simplex) über drei Punkten.

use serde::{Deserialize, Serialize};

/// Eine Fläche über genau drei Punkten.
///
/// Höherdimensionale Simplizes (Tetraeder etc.) sind bewusst außen vor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Face {
    /// Eindeutige ID der Fläche
    pub id: String,
    /// Die drei Eckpunkte (geordnet)
    pub point_ids: [String; 3],
    /// Eigene Füllfarbe als `#rrggbb` (None = Default aus den Optionen)
    pub color: Option<String>,
    /// Deckkraft der Füllung
    pub opacity: f32,
}

impl Face {
    /// Erstellt eine neue Fläche mit Standard-Darstellung.
    pub fn new(id: impl Into<String>, point_ids: [String; 3]) -> Self {
        Self {
            id: id.into(),
            point_ids,
            color: None,
            opacity: crate::shared::options::FACE_OPACITY_DEFAULT,
        }
    }

    /// Prüft ob die Fläche den Punkt als Eckpunkt enthält.
    pub fn contains_point(&self, point_id: &str) -> bool {
        self.point_ids.iter().any(|id| id == point_id)
    }
}
