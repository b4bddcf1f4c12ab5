//! Repräsentiert eine Verbindung (1-Simplex) zwischen zwei Punkten.

use serde::{Deserialize, Serialize};

/// Eine ungerichtete Verbindung zwischen zwei Punkten
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connection {
    /// ID des einen Endpunkts
    pub source_id: String,
    /// ID des anderen Endpunkts
    pub target_id: String,
    /// Eigene Anzeigefarbe als `#rrggbb` (None = Default aus den Optionen)
    pub color: Option<String>,
    /// Linienstärke
    pub width: f32,
}

impl Connection {
    /// Erstellt eine neue Verbindung mit Standard-Darstellung.
    pub fn new(source_id: impl Into<String>, target_id: impl Into<String>) -> Self {
        Self {
            source_id: source_id.into(),
            target_id: target_id.into(),
            color: None,
            width: crate::shared::options::CONNECTION_WIDTH_DEFAULT,
        }
    }

    /// Prüft ob die Verbindung den Punkt berührt.
    pub fn touches(&self, point_id: &str) -> bool {
        self.source_id == point_id || self.target_id == point_id
    }

    /// Gibt den jeweils anderen Endpunkt zurück, falls `point_id` Endpunkt ist.
    pub fn other_endpoint(&self, point_id: &str) -> Option<&str> {
        if self.source_id == point_id {
            Some(self.target_id.as_str())
        } else if self.target_id == point_id {
            Some(self.source_id.as_str())
        } else {
            None
        }
    }

    /// Prüft ob die Verbindung die beiden Punkte verbindet (ungerichtet).
    pub fn links(&self, a: &str, b: &str) -> bool {
        (self.source_id == a && self.target_id == b) || (self.source_id == b && self.target_id == a)
    }
}
