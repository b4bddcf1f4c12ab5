//! Use-Case-Funktionen für die Selektion.
//!
//! Aufgeteilt nach Selektionsart:
//! - `pick` — Klick-Selektion für Punkte und Flächen
//! - `lasso` — Lasso-Selektion über ein Screen-Polygon (nur 3D)
//! - `helpers` — Gemeinsame Hilfsfunktionen

mod helpers;
mod lasso;
mod pick;

pub use helpers::{clear_selection, set_selection_mode};
pub use lasso::select_points_in_lasso;
pub use pick::{select_face, select_point};
