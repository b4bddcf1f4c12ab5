//! Zentrale Konfiguration für den Zen-Sight-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Punkte ──────────────────────────────────────────────────────────

/// Standard-Punktgröße.
pub const POINT_SIZE_DEFAULT: f32 = 5.0;
/// Standard-Farbe für Punkte ohne eigene Farbe.
pub const POINT_COLOR_DEFAULT: &str = "#696969";
/// Farbe für selektierte Punkte (höchste Präzedenz im Resolver).
pub const POINT_COLOR_SELECTED: &str = "#ff6969";
/// Größenfaktor für selektierte Punkte.
pub const SELECTION_SIZE_FACTOR: f32 = 1.5;

// ── Verbindungen ────────────────────────────────────────────────────

/// Standard-Linienstärke für Verbindungen.
pub const CONNECTION_WIDTH_DEFAULT: f32 = 1.0;
/// Standard-Farbe für Verbindungen.
pub const CONNECTION_COLOR_DEFAULT: &str = "#b3b3b3";

// ── Flächen ─────────────────────────────────────────────────────────

/// Standard-Füllfarbe für Flächen.
pub const FACE_COLOR_DEFAULT: &str = "#6496fa";
/// Füllfarbe für selektierte Flächen.
pub const FACE_COLOR_SELECTED: &str = "#ff6b6b";
/// Standard-Deckkraft für Flächen.
pub const FACE_OPACITY_DEFAULT: f32 = 0.3;

// ── Editier-Operationen ─────────────────────────────────────────────

/// Voreingestellte Cut-Farbe.
pub const CUT_COLOR_DEFAULT: &str = "#ff6969";
/// Voreingestellte Split-Farbe.
pub const SPLIT_COLOR_DEFAULT: &str = "#69ff69";
/// Vordefinierte Farbpalette für Cut/Split.
pub const EDIT_COLOR_PALETTE: [&str; 8] = [
    "#ff6969", "#69ff69", "#6969ff", "#ffff69", "#ff69ff", "#69ffff", "#ffa500", "#800080",
];
/// Maximale Koordinaten-Verschiebung für Duplikat-Punkte beim Split.
/// Größenordnung des typischen Punktabstands im Layout; verhindert nur
/// exakte Überlappung, keine Korrektheits-Invariante.
pub const SPLIT_JITTER: f32 = 0.15;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `zen_sight_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorOptions {
    // ── Punkte ──────────────────────────────────────────────────
    /// Standard-Punktgröße
    pub point_size_default: f32,
    /// Standard-Farbe für Punkte ohne eigene Farbe
    pub point_color_default: String,
    /// Farbe für selektierte Punkte
    pub point_color_selected: String,
    /// Größenfaktor für selektierte Punkte
    pub selection_size_factor: f32,

    // ── Verbindungen ────────────────────────────────────────────
    /// Standard-Linienstärke
    pub connection_width_default: f32,
    /// Standard-Farbe für Verbindungen
    pub connection_color_default: String,

    // ── Flächen ─────────────────────────────────────────────────
    /// Standard-Füllfarbe für Flächen
    pub face_color_default: String,
    /// Füllfarbe für selektierte Flächen
    pub face_color_selected: String,
    /// Standard-Deckkraft für Flächen
    pub face_opacity_default: f32,

    // ── Editier-Operationen ─────────────────────────────────────
    /// Aktive Cut-Farbe (Farbwähler)
    pub cut_color: String,
    /// Aktive Split-Farbe (Farbwähler)
    pub split_color: String,
    /// Split-Jitter: maximale Verschiebung pro Koordinate
    #[serde(default = "default_split_jitter")]
    pub split_jitter: f32,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            point_size_default: POINT_SIZE_DEFAULT,
            point_color_default: POINT_COLOR_DEFAULT.to_string(),
            point_color_selected: POINT_COLOR_SELECTED.to_string(),
            selection_size_factor: SELECTION_SIZE_FACTOR,

            connection_width_default: CONNECTION_WIDTH_DEFAULT,
            connection_color_default: CONNECTION_COLOR_DEFAULT.to_string(),

            face_color_default: FACE_COLOR_DEFAULT.to_string(),
            face_color_selected: FACE_COLOR_SELECTED.to_string(),
            face_opacity_default: FACE_OPACITY_DEFAULT,

            cut_color: CUT_COLOR_DEFAULT.to_string(),
            split_color: SPLIT_COLOR_DEFAULT.to_string(),
            split_jitter: SPLIT_JITTER,
        }
    }
}

/// Serde-Default für `split_jitter` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_split_jitter() -> f32 {
    SPLIT_JITTER
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("zen_sight_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("zen_sight_editor.toml")
    }
}
