//! Statische Fangpunkt-Kandidaten pro Shape (Stufe 1 des Resolvers).

use glam::DVec2;

use crate::core::geometry::{is_angle_between, midpoint, normalize_deg, point_at_angle};
use crate::core::shape::ShapeGeometry;
use crate::core::snap::{SnapKind, SnapSettings};

/// Die vier Quadranten-Winkel eines Kreises.
const QUADRANT_ANGLES: [f64; 4] = [0.0, 90.0, 180.0, 270.0];

/// Zählt exakte Fangpunkte (Endpunkt, Mittelpunkt, Zentrum, Quadrant)
/// des Shapes auf. Deaktivierte Arten werden gar nicht erst berechnet.
pub(super) fn static_candidates(
    geometry: &ShapeGeometry,
    settings: &SnapSettings,
) -> Vec<(SnapKind, DVec2)> {
    let mut out = Vec::new();

    match geometry {
        ShapeGeometry::Line { start, end } => {
            if settings.endpoint {
                out.push((SnapKind::Endpoint, *start));
                out.push((SnapKind::Endpoint, *end));
            }
            if settings.midpoint {
                out.push((SnapKind::Midpoint, midpoint(*start, *end)));
            }
        }
        ShapeGeometry::Rectangle {
            origin,
            width,
            height,
        } => {
            let corners = geometry.rectangle_corners();
            if settings.endpoint {
                for c in corners {
                    out.push((SnapKind::Endpoint, c));
                }
            }
            if settings.midpoint {
                for i in 0..4 {
                    out.push((SnapKind::Midpoint, midpoint(corners[i], corners[(i + 1) % 4])));
                }
            }
            if settings.center {
                out.push((
                    SnapKind::Center,
                    *origin + DVec2::new(*width / 2.0, *height / 2.0),
                ));
            }
        }
        ShapeGeometry::Circle { center, radius } => {
            if settings.center {
                out.push((SnapKind::Center, *center));
            }
            if settings.quadrant {
                for angle in QUADRANT_ANGLES {
                    out.push((SnapKind::Quadrant, point_at_angle(*center, *radius, angle)));
                }
            }
        }
        ShapeGeometry::Arc {
            center,
            radius,
            start_angle,
            end_angle,
        } => {
            if settings.center {
                out.push((SnapKind::Center, *center));
            }
            if settings.endpoint {
                out.push((SnapKind::Endpoint, point_at_angle(*center, *radius, *start_angle)));
                out.push((SnapKind::Endpoint, point_at_angle(*center, *radius, *end_angle)));
            }
            if settings.midpoint {
                let sweep = normalize_deg(*end_angle - *start_angle);
                let mid = normalize_deg(*start_angle + sweep / 2.0);
                out.push((SnapKind::Midpoint, point_at_angle(*center, *radius, mid)));
            }
            if settings.quadrant {
                for angle in QUADRANT_ANGLES {
                    if is_angle_between(angle, *start_angle, *end_angle) {
                        out.push((SnapKind::Quadrant, point_at_angle(*center, *radius, angle)));
                    }
                }
            }
        }
        ShapeGeometry::Ellipse { center, rx, ry } => {
            if settings.center {
                out.push((SnapKind::Center, *center));
            }
            if settings.quadrant {
                out.push((SnapKind::Quadrant, *center + DVec2::new(*rx, 0.0)));
                out.push((SnapKind::Quadrant, *center - DVec2::new(*rx, 0.0)));
                out.push((SnapKind::Quadrant, *center + DVec2::new(0.0, *ry)));
                out.push((SnapKind::Quadrant, *center - DVec2::new(0.0, *ry)));
            }
        }
        ShapeGeometry::Polyline { points, closed } => {
            if settings.endpoint {
                for p in points {
                    out.push((SnapKind::Endpoint, *p));
                }
            }
            if settings.midpoint {
                for pair in points.windows(2) {
                    out.push((SnapKind::Midpoint, midpoint(pair[0], pair[1])));
                }
                if *closed && points.len() > 2 {
                    out.push((
                        SnapKind::Midpoint,
                        midpoint(points[points.len() - 1], points[0]),
                    ));
                }
            }
        }
        ShapeGeometry::Dimension { start, end, .. } => {
            if settings.endpoint {
                out.push((SnapKind::Endpoint, *start));
                out.push((SnapKind::Endpoint, *end));
            }
            if settings.midpoint {
                out.push((SnapKind::Midpoint, midpoint(*start, *end)));
            }
        }
        // Text und Blockreferenzen liefern keine exakten Fangpunkte
        ShapeGeometry::Text { .. } | ShapeGeometry::BlockReference { .. } => {}
    }

    out
}
