//! Use-Case-Schicht: die Übergangsfunktionen des Editors.
//!
//! Jede Funktion nimmt den `AppState` (plus benötigte Kollaborateure)
//! und führt genau einen fachlichen Übergang aus:
//! - `editing` — Cut/Split mit Log-Append
//! - `selection` — Pick, Lasso, Modus
//! - `session` — Initiales Laden, Log-Resync
//! - `timeline` — Replay und Settling
//! - `view` — Ansichtswechsel

pub mod editing;
pub mod selection;
pub mod session;
pub mod timeline;
pub mod view;
