//! Repräsentiert einen Punkt (0-Simplex) des Komplexes.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Ein Punkt des Komplexes mit Position und Darstellungsattributen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Eindeutige ID des Punkts
    pub id: String,
    /// Position im Raum (2D-Fall nutzt x/y)
    pub position: Vec3,
    /// Eigene Anzeigefarbe als `#rrggbb` (None = Default aus den Optionen)
    pub color: Option<String>,
    /// Anzeigegröße
    pub size: f32,
}

impl Point {
    /// Erstellt einen neuen Punkt mit Standard-Darstellung.
    pub fn new(id: impl Into<String>, position: Vec3) -> Self {
        Self {
            id: id.into(),
            position,
            color: None,
            size: crate::shared::options::POINT_SIZE_DEFAULT,
        }
    }
}
