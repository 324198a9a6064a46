//! Fenster-/Kreuzungs-Selektion über ein aufgezogenes Rechteck.
//!
//! Die Zugrichtung bestimmt die Semantik (Zeichenprogramm-Konvention):
//! von links nach rechts aufgezogen selektiert nur vollständig
//! enthaltene Shapes (Fenster), von rechts nach links zusätzlich
//! geschnittene (Kreuzung).

use glam::DVec2;

use super::geometry::segment_intersection;
use super::shape::{Bounds, Shape, ShapeGeometry, ShapeId};

/// Selektionsmodus eines aufgezogenen Rechtecks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoxSelectMode {
    /// Nur vollständig enthaltene Shapes.
    Window,
    /// Zusätzlich vom Rand geschnittene Shapes.
    Crossing,
}

/// Bestimmt den Modus aus der Zugrichtung: endet der Zug links vom
/// Start (`b.x < a.x`), ist es eine Kreuzungs-Selektion.
pub fn classify(a: DVec2, b: DVec2) -> BoxSelectMode {
    if b.x < a.x {
        BoxSelectMode::Crossing
    } else {
        BoxSelectMode::Window
    }
}

/// Selektiert Shapes im aufgezogenen Rechteck von `corner_a` nach
/// `corner_b`; der Modus folgt aus der Zugrichtung. Verdeckte Shapes
/// und Shapes ohne Bounding-Box werden übersprungen.
pub fn select_in_box(shapes: &[Shape], corner_a: DVec2, corner_b: DVec2) -> Vec<ShapeId> {
    let mode = classify(corner_a, corner_b);
    let Some(selection_box) = Bounds::from_points([corner_a, corner_b]) else {
        return Vec::new();
    };

    let mut result = Vec::new();
    for shape in shapes.iter().filter(|s| !s.hidden) {
        let Some(bounds) = shape.geometry.bounding_box() else {
            continue;
        };
        let included = match mode {
            BoxSelectMode::Window => selection_box.contains(&bounds),
            BoxSelectMode::Crossing => {
                selection_box.contains(&bounds) || crosses(&shape.geometry, &selection_box)
            }
        };
        if included {
            result.push(shape.id);
        }
    }
    result
}

/// Kreuzungstest pro Shape-Art.
///
/// Kreise und Bögen nutzen bewusst den Volle-Kreis-Test (nächster
/// Rechteckpunkt zum Zentrum ≤ Radius) ohne Winkelbereich; das
/// überselektiert Bögen, deren Trägerkreis das Rechteck schneidet,
/// deren sichtbares Segment aber nicht.
fn crosses(geometry: &ShapeGeometry, selection_box: &Bounds) -> bool {
    match geometry {
        ShapeGeometry::Circle { center, radius }
        | ShapeGeometry::Arc { center, radius, .. } => {
            let clamped = center.clamp(selection_box.min, selection_box.max);
            clamped.distance(*center) <= *radius
        }
        ShapeGeometry::Line { .. }
        | ShapeGeometry::Polyline { .. }
        | ShapeGeometry::Rectangle { .. }
        | ShapeGeometry::Dimension { .. } => {
            let box_edges = edges_of(selection_box);
            geometry.edge_segments().iter().any(|(a, b)| {
                selection_box.contains_point(*a)
                    || selection_box.contains_point(*b)
                    || box_edges
                        .iter()
                        .any(|(e1, e2)| segment_intersection(*a, *b, *e1, *e2).is_some())
            })
        }
        _ => geometry
            .bounding_box()
            .is_some_and(|b| selection_box.intersects(&b)),
    }
}

fn edges_of(b: &Bounds) -> [(DVec2, DVec2); 4] {
    let tl = DVec2::new(b.min.x, b.max.y);
    let br = DVec2::new(b.max.x, b.min.y);
    [
        (b.min, br),
        (br, b.max),
        (b.max, tl),
        (tl, b.min),
    ]
}
