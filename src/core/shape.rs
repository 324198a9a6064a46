//! Shape-Modell: Tagged Union über alle Zeichnungselemente,
//! Hit-Tests und Bounding-Box-Berechnung.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::geometry::{
    self, direction_deg, is_angle_between, normalize_deg, point_at_angle,
    point_segment_distance,
};

/// Eindeutige, stabile Shape-ID innerhalb einer Zeichnung.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct ShapeId(pub u64);

/// Layer-Referenz.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct LayerId(pub u64);

/// Strichart eines Shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineStyle {
    Solid,
    Dashed,
    Dotted,
    DashDot,
}

/// Darstellungs-Stil (Strichfarbe, Breite, Strichart).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Style {
    /// Strichfarbe als Hex-String (z.B. "#ffffff")
    pub color: String,
    /// Linienbreite in Welt-Einheiten
    pub width: f64,
    /// Strichart
    pub line_style: LineStyle,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            color: "#ffffff".to_string(),
            width: 1.0,
            line_style: LineStyle::Solid,
        }
    }
}

/// Zeichnungs-Layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    pub id: LayerId,
    pub name: String,
    pub color: String,
    pub visible: bool,
    pub locked: bool,
}

impl Layer {
    /// Erstellt einen sichtbaren, entsperrten Layer.
    pub fn new(id: LayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            color: "#ffffff".to_string(),
            visible: true,
            locked: false,
        }
    }
}

/// Geschätzter Glyphen-Breitenfaktor für Text-Bounding-Boxen.
const TEXT_GLYPH_WIDTH_FACTOR: f64 = 0.6;

/// Toleranz-Multiplikator für Bemaßungslinien (dünne Klickziele).
const DIMENSION_TOLERANCE_FACTOR: f64 = 2.0;

/// Geometrie-Payload pro Shape-Art.
///
/// Winkel sind Grad, CCW ab +X, normalisiert auf `[0, 360)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ShapeGeometry {
    Line {
        start: DVec2,
        end: DVec2,
    },
    Rectangle {
        origin: DVec2,
        width: f64,
        height: f64,
    },
    Circle {
        center: DVec2,
        radius: f64,
    },
    Arc {
        center: DVec2,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
    },
    Ellipse {
        center: DVec2,
        rx: f64,
        ry: f64,
    },
    Polyline {
        points: Vec<DVec2>,
        closed: bool,
    },
    Text {
        origin: DVec2,
        content: String,
        font_size: f64,
    },
    Dimension {
        start: DVec2,
        end: DVec2,
        /// Senkrechter Versatz der Maßlinie zur gemessenen Strecke
        offset: f64,
    },
    BlockReference {
        name: String,
        origin: DVec2,
        scale: f64,
        rotation: f64,
    },
}

/// Achsenparallele Bounding-Box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: DVec2,
    pub max: DVec2,
}

impl Bounds {
    /// Baut eine Box aus einer Punktmenge; `None` wenn leer oder nicht-finit.
    pub fn from_points<I: IntoIterator<Item = DVec2>>(points: I) -> Option<Self> {
        let mut min = DVec2::splat(f64::INFINITY);
        let mut max = DVec2::splat(f64::NEG_INFINITY);
        let mut any = false;

        for p in points {
            if !p.is_finite() {
                return None;
            }
            min = min.min(p);
            max = max.max(p);
            any = true;
        }

        any.then_some(Self { min, max })
    }

    /// Liegt der Punkt in der Box (inklusive Rand)?
    pub fn contains_point(&self, p: DVec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// Liegt `other` vollständig in dieser Box?
    pub fn contains(&self, other: &Bounds) -> bool {
        self.contains_point(other.min) && self.contains_point(other.max)
    }

    /// Überlappen sich beide Boxen (inklusive Rand)?
    pub fn intersects(&self, other: &Bounds) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
    }
}

impl ShapeGeometry {
    /// Zerlegt polygonale Shapes (Linie, Polylinie, Rechteck) in Strecken.
    ///
    /// Für alle anderen Arten leer.
    pub fn edge_segments(&self) -> Vec<(DVec2, DVec2)> {
        match self {
            ShapeGeometry::Line { start, end } => vec![(*start, *end)],
            ShapeGeometry::Polyline { points, closed } => {
                let mut segs: Vec<(DVec2, DVec2)> =
                    points.windows(2).map(|w| (w[0], w[1])).collect();
                if *closed && points.len() > 2 {
                    segs.push((points[points.len() - 1], points[0]));
                }
                segs
            }
            ShapeGeometry::Rectangle { .. } => {
                let corners = self.rectangle_corners();
                (0..4).map(|i| (corners[i], corners[(i + 1) % 4])).collect()
            }
            _ => Vec::new(),
        }
    }

    /// Die vier Ecken eines Rechtecks (CCW ab Ursprung); leer-äquivalent
    /// für andere Arten (liefert vier identische Punkte).
    pub fn rectangle_corners(&self) -> [DVec2; 4] {
        if let ShapeGeometry::Rectangle {
            origin,
            width,
            height,
        } = self
        {
            [
                *origin,
                DVec2::new(origin.x + width, origin.y),
                DVec2::new(origin.x + width, origin.y + height),
                DVec2::new(origin.x, origin.y + height),
            ]
        } else {
            [DVec2::ZERO; 4]
        }
    }

    /// Distanzbasierter Hit-Test gegen einen Welt-Punkt.
    ///
    /// `tolerance` ist bereits in Welt-Einheiten umgerechnet
    /// (`pixel_tolerance / zoom`, siehe [`crate::core::Viewport`]).
    pub fn hit_test(&self, p: DVec2, tolerance: f64) -> bool {
        match self {
            ShapeGeometry::Line { start, end } => {
                point_segment_distance(p, *start, *end) <= tolerance
            }
            ShapeGeometry::Rectangle { .. } | ShapeGeometry::Polyline { .. } => self
                .edge_segments()
                .iter()
                .any(|(a, b)| point_segment_distance(p, *a, *b) <= tolerance),
            ShapeGeometry::Circle { center, radius } => {
                (p.distance(*center) - radius).abs() <= tolerance
            }
            ShapeGeometry::Arc {
                center,
                radius,
                start_angle,
                end_angle,
            } => {
                (p.distance(*center) - radius).abs() <= tolerance
                    && is_angle_between(direction_deg(*center, p), *start_angle, *end_angle)
            }
            ShapeGeometry::Ellipse { center, rx, ry } => {
                if *rx <= 0.0 || *ry <= 0.0 {
                    return false;
                }
                let d = p - *center;
                let normalized = ((d.x / rx).powi(2) + (d.y / ry).powi(2)).sqrt();
                (normalized - 1.0).abs() * rx.min(*ry) <= tolerance
            }
            ShapeGeometry::Text { .. } => self
                .bounding_box()
                .is_some_and(|bounds| bounds.contains_point(p)),
            ShapeGeometry::Dimension { start, end, offset } => {
                let (a, b) = geometry::offset_segment(*start, *end, *offset);
                point_segment_distance(p, a, b) <= tolerance * DIMENSION_TOLERANCE_FACTOR
            }
            ShapeGeometry::BlockReference { origin, .. } => p.distance(*origin) <= tolerance,
        }
    }

    /// Bounding-Box; `None` bei degenerierter oder nicht-finiter Geometrie.
    pub fn bounding_box(&self) -> Option<Bounds> {
        match self {
            ShapeGeometry::Line { start, end } => {
                if start == end {
                    return None;
                }
                Bounds::from_points([*start, *end])
            }
            ShapeGeometry::Rectangle { width, height, .. } => {
                if *width <= 0.0 || *height <= 0.0 {
                    return None;
                }
                Bounds::from_points(self.rectangle_corners())
            }
            ShapeGeometry::Circle { center, radius } => {
                if *radius <= 0.0 {
                    return None;
                }
                Bounds::from_points([
                    *center - DVec2::splat(*radius),
                    *center + DVec2::splat(*radius),
                ])
            }
            ShapeGeometry::Arc {
                center,
                radius,
                start_angle,
                end_angle,
            } => {
                if *radius <= 0.0 {
                    return None;
                }
                // Bogen-Endpunkte plus alle Quadranten innerhalb des Winkelbereichs
                let mut pts = vec![
                    point_at_angle(*center, *radius, *start_angle),
                    point_at_angle(*center, *radius, *end_angle),
                ];
                for quadrant in [0.0, 90.0, 180.0, 270.0] {
                    if is_angle_between(quadrant, *start_angle, *end_angle) {
                        pts.push(point_at_angle(*center, *radius, quadrant));
                    }
                }
                Bounds::from_points(pts)
            }
            ShapeGeometry::Ellipse { center, rx, ry } => {
                if *rx <= 0.0 || *ry <= 0.0 {
                    return None;
                }
                Bounds::from_points([
                    *center - DVec2::new(*rx, *ry),
                    *center + DVec2::new(*rx, *ry),
                ])
            }
            ShapeGeometry::Polyline { points, .. } => {
                if points.len() < 2 {
                    return None;
                }
                Bounds::from_points(points.iter().copied())
            }
            ShapeGeometry::Text {
                origin,
                content,
                font_size,
            } => {
                if content.is_empty() || *font_size <= 0.0 {
                    return None;
                }
                let width = content.chars().count() as f64 * font_size * TEXT_GLYPH_WIDTH_FACTOR;
                Bounds::from_points([*origin, *origin + DVec2::new(width, *font_size)])
            }
            ShapeGeometry::Dimension { start, end, offset } => {
                if start == end {
                    return None;
                }
                let (a, b) = geometry::offset_segment(*start, *end, *offset);
                Bounds::from_points([*start, *end, a, b])
            }
            ShapeGeometry::BlockReference { origin, .. } => {
                Bounds::from_points([*origin])
            }
        }
    }

    /// Verschobene Kopie der Geometrie (reine Ableitung, Quelle bleibt unberührt).
    pub fn translated(&self, delta: DVec2) -> ShapeGeometry {
        let mut out = self.clone();
        match &mut out {
            ShapeGeometry::Line { start, end } | ShapeGeometry::Dimension { start, end, .. } => {
                *start += delta;
                *end += delta;
            }
            ShapeGeometry::Rectangle { origin, .. }
            | ShapeGeometry::Text { origin, .. }
            | ShapeGeometry::BlockReference { origin, .. } => *origin += delta,
            ShapeGeometry::Circle { center, .. }
            | ShapeGeometry::Arc { center, .. }
            | ShapeGeometry::Ellipse { center, .. } => *center += delta,
            ShapeGeometry::Polyline { points, .. } => {
                for p in points.iter_mut() {
                    *p += delta;
                }
            }
        }
        out
    }

    /// Um `pivot` rotierte Kopie (Winkel in Grad, CCW).
    ///
    /// Achsparallele Rechtecke werden dabei zu geschlossenen Polylinien,
    /// Ellipsen behalten ihre Achsen und rotieren nur das Zentrum.
    pub fn rotated(&self, pivot: DVec2, angle_deg: f64) -> ShapeGeometry {
        let rot = |p: DVec2| geometry::rotate_point(p, pivot, angle_deg);
        match self {
            ShapeGeometry::Line { start, end } => ShapeGeometry::Line {
                start: rot(*start),
                end: rot(*end),
            },
            ShapeGeometry::Rectangle { .. } => ShapeGeometry::Polyline {
                points: self.rectangle_corners().iter().map(|c| rot(*c)).collect(),
                closed: true,
            },
            ShapeGeometry::Circle { center, radius } => ShapeGeometry::Circle {
                center: rot(*center),
                radius: *radius,
            },
            ShapeGeometry::Arc {
                center,
                radius,
                start_angle,
                end_angle,
            } => ShapeGeometry::Arc {
                center: rot(*center),
                radius: *radius,
                start_angle: normalize_deg(start_angle + angle_deg),
                end_angle: normalize_deg(end_angle + angle_deg),
            },
            ShapeGeometry::Ellipse { center, rx, ry } => ShapeGeometry::Ellipse {
                center: rot(*center),
                rx: *rx,
                ry: *ry,
            },
            ShapeGeometry::Polyline { points, closed } => ShapeGeometry::Polyline {
                points: points.iter().map(|p| rot(*p)).collect(),
                closed: *closed,
            },
            ShapeGeometry::Text {
                origin,
                content,
                font_size,
            } => ShapeGeometry::Text {
                origin: rot(*origin),
                content: content.clone(),
                font_size: *font_size,
            },
            ShapeGeometry::Dimension { start, end, offset } => ShapeGeometry::Dimension {
                start: rot(*start),
                end: rot(*end),
                offset: *offset,
            },
            ShapeGeometry::BlockReference {
                name,
                origin,
                scale,
                rotation,
            } => ShapeGeometry::BlockReference {
                name: name.clone(),
                origin: rot(*origin),
                scale: *scale,
                rotation: normalize_deg(rotation + angle_deg),
            },
        }
    }

    /// Um `pivot` skalierte Kopie (`factor > 0`).
    pub fn scaled(&self, pivot: DVec2, factor: f64) -> ShapeGeometry {
        let sc = |p: DVec2| pivot + (p - pivot) * factor;
        match self {
            ShapeGeometry::Line { start, end } => ShapeGeometry::Line {
                start: sc(*start),
                end: sc(*end),
            },
            ShapeGeometry::Rectangle {
                origin,
                width,
                height,
            } => ShapeGeometry::Rectangle {
                origin: sc(*origin),
                width: width * factor,
                height: height * factor,
            },
            ShapeGeometry::Circle { center, radius } => ShapeGeometry::Circle {
                center: sc(*center),
                radius: radius * factor,
            },
            ShapeGeometry::Arc {
                center,
                radius,
                start_angle,
                end_angle,
            } => ShapeGeometry::Arc {
                center: sc(*center),
                radius: radius * factor,
                start_angle: *start_angle,
                end_angle: *end_angle,
            },
            ShapeGeometry::Ellipse { center, rx, ry } => ShapeGeometry::Ellipse {
                center: sc(*center),
                rx: rx * factor,
                ry: ry * factor,
            },
            ShapeGeometry::Polyline { points, closed } => ShapeGeometry::Polyline {
                points: points.iter().map(|p| sc(*p)).collect(),
                closed: *closed,
            },
            ShapeGeometry::Text {
                origin,
                content,
                font_size,
            } => ShapeGeometry::Text {
                origin: sc(*origin),
                content: content.clone(),
                font_size: font_size * factor,
            },
            ShapeGeometry::Dimension { start, end, offset } => ShapeGeometry::Dimension {
                start: sc(*start),
                end: sc(*end),
                offset: offset * factor,
            },
            ShapeGeometry::BlockReference {
                name,
                origin,
                scale,
                rotation,
            } => ShapeGeometry::BlockReference {
                name: name.clone(),
                origin: sc(*origin),
                scale: scale * factor,
                rotation: *rotation,
            },
        }
    }
}

/// Ein Zeichnungselement: ID, Geometrie, optionaler Stil, Layer.
///
/// Shapes sind aus Kern-Sicht unveränderliche Wert-Objekte: Werkzeuge
/// erzeugen neue Geometrie und reichen sie an den Mutations-Kollaborateur
/// weiter, der Kern mutiert nie in-place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    pub id: ShapeId,
    pub geometry: ShapeGeometry,
    pub style: Option<Style>,
    pub layer: LayerId,
    /// Transientes Sichtbarkeits-Flag aus der Layer-Schaltung (nicht persistiert)
    #[serde(skip)]
    pub hidden: bool,
}

impl Shape {
    /// Erstellt ein sichtbares Shape auf dem angegebenen Layer.
    pub fn new(id: ShapeId, geometry: ShapeGeometry, layer: LayerId) -> Self {
        Self {
            id,
            geometry,
            style: None,
            layer,
            hidden: false,
        }
    }
}

/// Read-only Momentaufnahme der Zeichnung für einen Kern-Aufruf.
///
/// Der Kern liest die Shape-Liste pro Frame; alle Mutationen laufen über
/// den [`crate::app::store::ShapeStore`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Drawing {
    pub shapes: Vec<Shape>,
    pub layers: Vec<Layer>,
    pub active_layer: LayerId,
}

impl Drawing {
    /// Erstellt eine leere Zeichnung mit Standard-Layer "0".
    pub fn new() -> Self {
        Self {
            shapes: Vec::new(),
            layers: vec![Layer::new(LayerId(0), "0")],
            active_layer: LayerId(0),
        }
    }

    /// Sucht ein Shape per ID.
    pub fn shape(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.id == id)
    }

    /// Alle aktuell sichtbaren Shapes (hidden-Flag bereits angewendet).
    pub fn visible_shapes(&self) -> impl Iterator<Item = &Shape> {
        self.shapes.iter().filter(|s| !s.hidden)
    }

    /// Überträgt die Layer-Sichtbarkeit in die transienten hidden-Flags.
    pub fn refresh_hidden_flags(&mut self) {
        let hidden_layers: Vec<LayerId> = self
            .layers
            .iter()
            .filter(|l| !l.visible)
            .map(|l| l.id)
            .collect();
        for shape in &mut self.shapes {
            shape.hidden = hidden_layers.contains(&shape.layer);
        }
    }

    /// Hit-Test in umgekehrter Z-Reihenfolge (zuletzt gezeichnet gewinnt).
    ///
    /// `tolerance` in Welt-Einheiten; versteckte Shapes werden übersprungen.
    pub fn hit_test(&self, p: DVec2, tolerance: f64) -> Option<ShapeId> {
        self.shapes
            .iter()
            .rev()
            .filter(|s| !s.hidden)
            .find(|s| s.geometry.hit_test(p, tolerance))
            .map(|s| s.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn line(id: u64, a: (f64, f64), b: (f64, f64)) -> Shape {
        Shape::new(
            ShapeId(id),
            ShapeGeometry::Line {
                start: DVec2::new(a.0, a.1),
                end: DVec2::new(b.0, b.1),
            },
            LayerId(0),
        )
    }

    #[test]
    fn line_hit_within_tolerance() {
        let geom = ShapeGeometry::Line {
            start: DVec2::ZERO,
            end: DVec2::new(10.0, 0.0),
        };
        assert!(geom.hit_test(DVec2::new(5.0, 0.4), 0.5));
        assert!(!geom.hit_test(DVec2::new(5.0, 0.6), 0.5));
        // Hinter dem Endpunkt zählt der geklemmte Abstand
        assert!(!geom.hit_test(DVec2::new(12.0, 0.0), 0.5));
    }

    #[test]
    fn circle_hit_tests_perimeter_not_area() {
        let geom = ShapeGeometry::Circle {
            center: DVec2::ZERO,
            radius: 5.0,
        };
        assert!(geom.hit_test(DVec2::new(5.2, 0.0), 0.5));
        assert!(!geom.hit_test(DVec2::new(2.0, 0.0), 0.5));
    }

    #[test]
    fn arc_hit_respects_angle_range() {
        let geom = ShapeGeometry::Arc {
            center: DVec2::ZERO,
            radius: 5.0,
            start_angle: 0.0,
            end_angle: 90.0,
        };
        assert!(geom.hit_test(DVec2::new(3.5, 3.5), 0.2));
        // Gleicher Radius, aber außerhalb des Winkelbereichs
        assert!(!geom.hit_test(DVec2::new(-3.5, -3.5), 0.2));
    }

    #[test]
    fn rectangle_hit_tests_edges_only() {
        let geom = ShapeGeometry::Rectangle {
            origin: DVec2::ZERO,
            width: 10.0,
            height: 6.0,
        };
        assert!(geom.hit_test(DVec2::new(5.0, 0.1), 0.2));
        assert!(geom.hit_test(DVec2::new(9.9, 3.0), 0.2));
        assert!(!geom.hit_test(DVec2::new(5.0, 3.0), 0.2));
    }

    #[test]
    fn dimension_uses_wider_tolerance() {
        let geom = ShapeGeometry::Dimension {
            start: DVec2::ZERO,
            end: DVec2::new(10.0, 0.0),
            offset: 0.0,
        };
        // 0.8 Welt-Einheiten entfernt, Basis-Toleranz 0.5 → Faktor 2 greift
        assert!(geom.hit_test(DVec2::new(5.0, 0.8), 0.5));
        assert!(!geom.hit_test(DVec2::new(5.0, 1.2), 0.5));
    }

    #[test]
    fn bounding_box_none_for_non_finite() {
        let geom = ShapeGeometry::Line {
            start: DVec2::new(f64::NAN, 0.0),
            end: DVec2::new(10.0, 0.0),
        };
        assert!(geom.bounding_box().is_none());

        let geom = ShapeGeometry::Circle {
            center: DVec2::new(f64::INFINITY, 0.0),
            radius: 5.0,
        };
        assert!(geom.bounding_box().is_none());
    }

    #[test]
    fn bounding_box_none_for_degenerate() {
        let geom = ShapeGeometry::Circle {
            center: DVec2::ZERO,
            radius: 0.0,
        };
        assert!(geom.bounding_box().is_none());

        let geom = ShapeGeometry::Polyline {
            points: vec![DVec2::ZERO],
            closed: false,
        };
        assert!(geom.bounding_box().is_none());
    }

    #[test]
    fn arc_bounding_box_uses_quadrants_in_range() {
        let geom = ShapeGeometry::Arc {
            center: DVec2::ZERO,
            radius: 5.0,
            start_angle: 0.0,
            end_angle: 90.0,
        };
        let b = geom.bounding_box().unwrap();
        assert_relative_eq!(b.min.x, 0.0, epsilon = 1e-9);
        assert_relative_eq!(b.min.y, 0.0, epsilon = 1e-9);
        assert_relative_eq!(b.max.x, 5.0, epsilon = 1e-9);
        assert_relative_eq!(b.max.y, 5.0, epsilon = 1e-9);
    }

    #[test]
    fn hit_test_prefers_last_drawn_shape() {
        let mut drawing = Drawing::new();
        drawing.shapes.push(line(1, (0.0, 0.0), (10.0, 0.0)));
        drawing.shapes.push(line(2, (0.0, 0.0), (10.0, 0.0)));
        assert_eq!(drawing.hit_test(DVec2::new(5.0, 0.0), 0.5), Some(ShapeId(2)));
    }

    #[test]
    fn hit_test_skips_hidden_shapes() {
        let mut drawing = Drawing::new();
        let mut top = line(2, (0.0, 0.0), (10.0, 0.0));
        top.hidden = true;
        drawing.shapes.push(line(1, (0.0, 0.0), (10.0, 0.0)));
        drawing.shapes.push(top);
        assert_eq!(drawing.hit_test(DVec2::new(5.0, 0.0), 0.5), Some(ShapeId(1)));
    }

    #[test]
    fn refresh_hidden_flags_applies_layer_visibility() {
        let mut drawing = Drawing::new();
        drawing.layers.push(Layer {
            visible: false,
            ..Layer::new(LayerId(1), "hilfslinien")
        });
        let mut s = line(1, (0.0, 0.0), (1.0, 0.0));
        s.layer = LayerId(1);
        drawing.shapes.push(s);
        drawing.shapes.push(line(2, (0.0, 0.0), (1.0, 0.0)));

        drawing.refresh_hidden_flags();
        assert!(drawing.shape(ShapeId(1)).unwrap().hidden);
        assert!(!drawing.shape(ShapeId(2)).unwrap().hidden);
    }

    #[test]
    fn rotated_rectangle_becomes_closed_polyline() {
        let geom = ShapeGeometry::Rectangle {
            origin: DVec2::ZERO,
            width: 4.0,
            height: 2.0,
        };
        match geom.rotated(DVec2::ZERO, 90.0) {
            ShapeGeometry::Polyline { points, closed } => {
                assert!(closed);
                assert_eq!(points.len(), 4);
                assert_relative_eq!(points[1].x, 0.0, epsilon = 1e-12);
                assert_relative_eq!(points[1].y, 4.0, epsilon = 1e-12);
            }
            other => panic!("unerwartete Geometrie: {other:?}"),
        }
    }

    #[test]
    fn scaled_circle_scales_center_and_radius() {
        let geom = ShapeGeometry::Circle {
            center: DVec2::new(4.0, 0.0),
            radius: 2.0,
        };
        match geom.scaled(DVec2::ZERO, 2.0) {
            ShapeGeometry::Circle { center, radius } => {
                assert_relative_eq!(center.x, 8.0);
                assert_relative_eq!(radius, 4.0);
            }
            other => panic!("unerwartete Geometrie: {other:?}"),
        }
    }

    #[test]
    fn shape_serializes_with_type_tag() {
        let shape = line(7, (0.0, 0.0), (1.0, 1.0));
        let json = serde_json::to_string(&shape).unwrap();
        assert!(json.contains("\"type\":\"line\""));
    }
}
