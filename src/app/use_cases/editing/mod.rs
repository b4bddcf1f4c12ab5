//! Use-Case-Funktionen für Struktur-Mutationen.
//!
//! Aufgeteilt nach Operation:
//! - `cut_points` — Selektierte Punkte entfernen
//! - `split_points` — Selektierte Punkte duplizieren

mod cut_points;
mod split_points;

pub use cut_points::cut_selected_points;
pub use split_points::split_selected_points;
