//! Use-Case: Lasso-Selektion über ein Screen-Polygon (nur 3D-Ansicht).

use glam::Vec2;

use crate::app::state::{GraphView, SelectionMode};
use crate::app::AppState;
use crate::store::ScreenProjector;

/// Prüft ob ein Punkt auf einem Liniensegment liegt.
fn point_on_segment(point: Vec2, a: Vec2, b: Vec2) -> bool {
    let ab = b - a;
    let ap = point - a;
    let cross = ab.perp_dot(ap).abs();
    if cross > 1e-4 {
        return false;
    }

    let dot = ap.dot(ab);
    if dot < 0.0 {
        return false;
    }

    let ab_len_sq = ab.length_squared();
    if dot > ab_len_sq {
        return false;
    }

    true
}

/// Prüft ob ein Punkt innerhalb eines Polygons liegt (Ray-Casting,
/// Rand zählt als innen).
fn point_in_polygon(point: Vec2, polygon: &[Vec2]) -> bool {
    if polygon.len() < 3 {
        return false;
    }

    let mut inside = false;
    let mut previous = polygon[polygon.len() - 1];

    for &current in polygon {
        if point_on_segment(point, previous, current) {
            return true;
        }

        // Die Kreuzungsbedingung garantiert previous.y != current.y
        let intersect = ((current.y > point.y) != (previous.y > point.y))
            && (point.x
                < (previous.x - current.x) * (point.y - current.y)
                    / (previous.y - current.y)
                    + current.x);

        if intersect {
            inside = !inside;
        }

        previous = current;
    }

    inside
}

/// Selektiert alle Punkte deren Screen-Projektion innerhalb des
/// Lasso-Polygons liegt (inkl. Rand).
///
/// Nur im Lasso-Modus der 3D-Ansicht wirksam; Punkte ohne projizierbare
/// Screen-Position werden übersprungen. Das Lasso ersetzt die bestehende
/// Punktselektion.
pub fn select_points_in_lasso(
    state: &mut AppState,
    projector: &dyn ScreenProjector,
    polygon: &[Vec2],
) {
    if polygon.len() < 3 {
        return;
    }

    if state.selection.mode != SelectionMode::Lasso
        || state.view.graph_view != GraphView::ThreeD
    {
        log::debug!("Lasso außerhalb des 3D-Lasso-Modus ignoriert");
        return;
    }

    let Some(complex) = state.complex.as_ref() else {
        return;
    };

    let hits: Vec<String> = complex
        .points
        .keys()
        .filter(|id| {
            projector
                .screen_position_of(id)
                .is_some_and(|pos| point_in_polygon(pos, polygon))
        })
        .cloned()
        .collect();

    let ids = state.selection.point_ids_mut();
    ids.clear();
    ids.extend(hits);

    log::debug!(
        "Lasso-Selektion: {} Punkt(e)",
        state.selection.selected_point_ids.len()
    );
}
