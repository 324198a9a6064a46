//! Schnittpunkte zwischen Shape-Paaren.
//!
//! Polygonale Shapes (Linie, Polylinie, Rechteck) werden in Strecken
//! zerlegt; Bögen filtern Kandidaten über den Winkelbereich.

use glam::DVec2;

use super::geometry::{
    circle_circle_intersection, direction_deg, is_angle_between, segment_circle_intersection,
    segment_intersection,
};
use super::shape::ShapeGeometry;

/// Grobe Ordnung zur Normalisierung der Paar-Reihenfolge.
fn rank(geometry: &ShapeGeometry) -> u8 {
    match geometry {
        ShapeGeometry::Line { .. }
        | ShapeGeometry::Polyline { .. }
        | ShapeGeometry::Rectangle { .. } => 0,
        ShapeGeometry::Circle { .. } | ShapeGeometry::Arc { .. } => 1,
        _ => 2,
    }
}

/// Kreisparameter (Zentrum, Radius, optionaler Winkelbereich) eines
/// kreisförmigen Shapes.
fn circle_params(geometry: &ShapeGeometry) -> Option<(DVec2, f64, Option<(f64, f64)>)> {
    match geometry {
        ShapeGeometry::Circle { center, radius } => Some((*center, *radius, None)),
        ShapeGeometry::Arc {
            center,
            radius,
            start_angle,
            end_angle,
        } => Some((*center, *radius, Some((*start_angle, *end_angle)))),
        _ => None,
    }
}

/// Behält nur Punkte, deren Winkel zum Zentrum im Bogenbereich liegt.
fn filter_by_arc_range(
    points: Vec<DVec2>,
    center: DVec2,
    range: Option<(f64, f64)>,
) -> Vec<DVec2> {
    match range {
        None => points,
        Some((start, end)) => points
            .into_iter()
            .filter(|p| is_angle_between(direction_deg(center, *p), start, end))
            .collect(),
    }
}

/// Alle Schnittpunkte zweier Shapes.
///
/// Unterstützte Paarungen: polygonale Shapes untereinander, polygonal ×
/// Kreis/Bogen sowie Kreis/Bogen untereinander. Andere Kombinationen
/// liefern eine leere Menge.
pub fn shape_intersections(a: &ShapeGeometry, b: &ShapeGeometry) -> Vec<DVec2> {
    if rank(a) > rank(b) {
        return shape_intersections(b, a);
    }

    let segs_a = a.edge_segments();

    // Polygonal × Polygonal
    if rank(a) == 0 && rank(b) == 0 {
        let segs_b = b.edge_segments();
        let mut result = Vec::new();
        for (a1, a2) in &segs_a {
            for (b1, b2) in &segs_b {
                if let Some(p) = segment_intersection(*a1, *a2, *b1, *b2) {
                    result.push(p);
                }
            }
        }
        return result;
    }

    // Polygonal × Kreis/Bogen
    if rank(a) == 0 {
        let Some((center, radius, range)) = circle_params(b) else {
            return Vec::new();
        };
        let mut result = Vec::new();
        for (s1, s2) in &segs_a {
            let hits = segment_circle_intersection(*s1, *s2, center, radius);
            result.extend(filter_by_arc_range(hits, center, range));
        }
        return result;
    }

    // Kreis/Bogen × Kreis/Bogen
    if let (Some((c1, r1, range1)), Some((c2, r2, range2))) = (circle_params(a), circle_params(b))
    {
        let hits = circle_circle_intersection(c1, r1, c2, r2);
        let hits = filter_by_arc_range(hits, c1, range1);
        return filter_by_arc_range(hits, c2, range2);
    }

    Vec::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn line_crosses_circle_twice() {
        let line = ShapeGeometry::Line {
            start: DVec2::new(-10.0, 0.0),
            end: DVec2::new(10.0, 0.0),
        };
        let circle = ShapeGeometry::Circle {
            center: DVec2::ZERO,
            radius: 5.0,
        };
        assert_eq!(shape_intersections(&line, &circle).len(), 2);
    }

    #[test]
    fn arc_filters_out_of_range_hits() {
        let line = ShapeGeometry::Line {
            start: DVec2::new(-10.0, 0.0),
            end: DVec2::new(10.0, 0.0),
        };
        // Oberer Halbbogen: schneidet die X-Achse nur an seinen Endpunkten
        let arc = ShapeGeometry::Arc {
            center: DVec2::ZERO,
            radius: 5.0,
            start_angle: 45.0,
            end_angle: 135.0,
        };
        assert!(shape_intersections(&line, &arc).is_empty());
    }

    #[test]
    fn rectangle_decomposes_into_four_edges() {
        let rect = ShapeGeometry::Rectangle {
            origin: DVec2::ZERO,
            width: 10.0,
            height: 10.0,
        };
        let line = ShapeGeometry::Line {
            start: DVec2::new(-5.0, 5.0),
            end: DVec2::new(15.0, 5.0),
        };
        let hits = shape_intersections(&rect, &line);
        assert_eq!(hits.len(), 2);
        for p in &hits {
            assert_relative_eq!(p.y, 5.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn unsupported_pairs_yield_no_points() {
        let text = ShapeGeometry::Text {
            origin: DVec2::ZERO,
            content: "a".to_string(),
            font_size: 5.0,
        };
        let line = ShapeGeometry::Line {
            start: DVec2::new(-1.0, 0.0),
            end: DVec2::new(1.0, 0.0),
        };
        assert!(shape_intersections(&text, &line).is_empty());
    }
}
