//! Objektfang: priorisierte Kandidatensuche über dem Shape-Snapshot.
//!
//! Der Resolver arbeitet in strikten Stufen (statische Fangpunkte,
//! Schnittpunkte, kontextuelle Fänge, Verlängerung, Nächster-Punkt,
//! Raster). Über alle Stufen läuft ein einziges Bestkandidat/Minimal-
//! distanz-Paar; eine spätere Stufe gewinnt nur durch strikt kleinere
//! Distanz. Deaktivierte Fangarten überspringen ihre Berechnung
//! vollständig, nicht erst beim Filtern.

mod candidates;


use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::geometry::{
    direction_deg, is_angle_between, nearest_point_on_circle, on_segment, perpendicular_foot,
    tangent_points,
};
use super::intersect::shape_intersections;
use super::shape::{Shape, ShapeGeometry};

/// Benannte Toleranzen des Resolvers. Alle `_PX`-Werte sind
/// Screen-Pixel und werden an der Aufrufstelle durch den Zoom geteilt.
pub mod tolerances {
    /// Schnittpunkt-Stufe nur rechnen, wenn kein statischer Kandidat
    /// näher als dieser Gate-Wert liegt (paarweise Stufe, teuer).
    pub const INTERSECTION_GATE_PX: f64 = 5.0;
    /// Nächster-Punkt-Stufe nur rechnen, wenn kein früherer Kandidat
    /// näher als dieser Gate-Wert liegt.
    pub const NEAREST_GATE_PX: f64 = 8.0;
    /// Verlängerungsfang greift nur innerhalb dieser Zone um den
    /// näheren Endpunkt der Strecke.
    pub const EXTENSION_ZONE_PX: f64 = 300.0;
}

/// Art eines Fangpunkts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SnapKind {
    Endpoint,
    Midpoint,
    Center,
    Quadrant,
    Intersection,
    Perpendicular,
    Tangent,
    Nearest,
    Extension,
    Grid,
}

/// Ergebnis des Resolvers: höchstens ein Fangpunkt pro Cursor-Sample.
/// Wird pro Sample neu abgeleitet, nie gespeichert.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SnapPoint {
    pub kind: SnapKind,
    pub point: DVec2,
}

/// Pro-Fangart-Schalter plus Rasterweite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapSettings {
    pub endpoint: bool,
    pub midpoint: bool,
    pub center: bool,
    pub quadrant: bool,
    pub intersection: bool,
    pub perpendicular: bool,
    pub tangent: bool,
    pub nearest: bool,
    pub extension: bool,
    pub grid: bool,
    /// Rasterweite in Welt-Einheiten.
    pub grid_spacing: f64,
}

impl Default for SnapSettings {
    fn default() -> Self {
        Self {
            endpoint: true,
            midpoint: true,
            center: true,
            quadrant: true,
            intersection: true,
            perpendicular: true,
            tangent: true,
            nearest: true,
            extension: true,
            grid: false,
            grid_spacing: 10.0,
        }
    }
}

impl SnapSettings {
    /// Alle Fangarten aus (für Tests und den Select-Modus).
    pub fn none() -> Self {
        Self {
            endpoint: false,
            midpoint: false,
            center: false,
            quadrant: false,
            intersection: false,
            perpendicular: false,
            tangent: false,
            nearest: false,
            extension: false,
            grid: false,
            grid_spacing: 10.0,
        }
    }

    fn any_static(&self) -> bool {
        self.endpoint || self.midpoint || self.center || self.quadrant
    }
}

/// Laufender Bestkandidat. `consider` akzeptiert nur strikt kleinere
/// Distanzen, damit z. B. ein Endpunkt einen deckungsgleichen
/// Rasterpunkt immer schlägt.
struct BestCandidate {
    point: Option<SnapPoint>,
    dist: f64,
}

impl BestCandidate {
    fn new() -> Self {
        Self {
            point: None,
            dist: f64::INFINITY,
        }
    }

    fn consider(&mut self, kind: SnapKind, candidate: DVec2, cursor: DVec2, limit: f64) {
        let d = cursor.distance(candidate);
        if d <= limit && d < self.dist {
            self.dist = d;
            self.point = Some(SnapPoint {
                kind,
                point: candidate,
            });
        }
    }
}

/// Sucht den besten Fangpunkt für ein Cursor-Sample in Welt-Koordinaten.
///
/// `pixel_tolerance` ist die Fang-Toleranz in Screen-Pixeln; `zoom`
/// rechnet sie (und die Stufen-Gates) in Welt-Einheiten um.
/// `base_point` ist der Ankerpunkt des aktiven Werkzeugs; ohne ihn
/// entfallen Lot- und Tangentenfang.
pub fn find_snap_point(
    cursor: DVec2,
    pixel_tolerance: f64,
    zoom: f64,
    settings: &SnapSettings,
    shapes: &[Shape],
    base_point: Option<DVec2>,
) -> Option<SnapPoint> {
    if !zoom.is_finite() || zoom <= 0.0 || !cursor.is_finite() {
        return None;
    }

    let tol = pixel_tolerance / zoom;
    let mut best = BestCandidate::new();

    let visible: Vec<&Shape> = shapes.iter().filter(|s| !s.hidden).collect();

    // Stufe 1: statische Fangpunkte pro Shape
    if settings.any_static() {
        for shape in &visible {
            for (kind, point) in candidates::static_candidates(&shape.geometry, settings) {
                best.consider(kind, point, cursor, tol);
            }
        }
    }

    // Stufe 2: Schnittpunkte, nur wenn kein statischer Kandidat bereits
    // innerhalb des Gates liegt (paarweise Stufe)
    if settings.intersection && best.dist > tolerances::INTERSECTION_GATE_PX / zoom {
        for (i, a) in visible.iter().enumerate() {
            for b in visible.iter().skip(i + 1) {
                for p in shape_intersections(&a.geometry, &b.geometry) {
                    best.consider(SnapKind::Intersection, p, cursor, tol);
                }
            }
        }
    }

    // Stufe 3: kontextuelle Fänge, nur mit gesetztem Ankerpunkt
    if let Some(base) = base_point {
        if settings.perpendicular {
            for shape in &visible {
                for (a, b) in shape.geometry.edge_segments() {
                    let foot = perpendicular_foot(base, a, b);
                    if on_segment(foot, a, b) {
                        best.consider(SnapKind::Perpendicular, foot, cursor, tol);
                    }
                }
            }
        }
        if settings.tangent {
            for shape in &visible {
                match &shape.geometry {
                    ShapeGeometry::Circle { center, radius } => {
                        for p in tangent_points(base, *center, *radius) {
                            best.consider(SnapKind::Tangent, p, cursor, tol);
                        }
                    }
                    ShapeGeometry::Arc {
                        center,
                        radius,
                        start_angle,
                        end_angle,
                    } => {
                        for p in tangent_points(base, *center, *radius) {
                            let angle = direction_deg(*center, p);
                            if is_angle_between(angle, *start_angle, *end_angle) {
                                best.consider(SnapKind::Tangent, p, cursor, tol);
                            }
                        }
                    }
                    _ => {}
                }
            }
        }
    }

    // Stufe 4: Verlängerung über die Strecke hinaus, begrenzt auf die
    // Phantom-Zone um den näheren Endpunkt
    if settings.extension {
        let zone = tolerances::EXTENSION_ZONE_PX / zoom;
        for shape in &visible {
            if let ShapeGeometry::Line { start, end } = &shape.geometry {
                let ab = *end - *start;
                let len_sq = ab.length_squared();
                if len_sq <= f64::EPSILON {
                    continue;
                }
                let t = (cursor - *start).dot(ab) / len_sq;
                if (0.0..=1.0).contains(&t) {
                    continue;
                }
                let foot = *start + ab * t;
                let near_end = foot.distance(*start).min(foot.distance(*end));
                if near_end <= zone {
                    best.consider(SnapKind::Extension, foot, cursor, tol);
                }
            }
        }
    }

    // Stufe 5: nächster Punkt auf einer Kante, reiner Fallback
    if settings.nearest && best.dist > tolerances::NEAREST_GATE_PX / zoom {
        for shape in &visible {
            match &shape.geometry {
                ShapeGeometry::Circle { center, radius } => {
                    let p = nearest_point_on_circle(cursor, *center, *radius);
                    best.consider(SnapKind::Nearest, p, cursor, tol);
                }
                ShapeGeometry::Arc {
                    center,
                    radius,
                    start_angle,
                    end_angle,
                } => {
                    let p = nearest_point_on_circle(cursor, *center, *radius);
                    let angle = direction_deg(*center, p);
                    if is_angle_between(angle, *start_angle, *end_angle) {
                        best.consider(SnapKind::Nearest, p, cursor, tol);
                    }
                }
                geometry => {
                    for (a, b) in geometry.edge_segments() {
                        let p = super::geometry::closest_point_on_segment(cursor, a, b);
                        best.consider(SnapKind::Nearest, p, cursor, tol);
                    }
                }
            }
        }
    }

    // Raster als unterste Stufe: gewinnt nur durch strikt kleinere Distanz
    if settings.grid && settings.grid_spacing > 0.0 {
        let s = settings.grid_spacing;
        let grid = DVec2::new((cursor.x / s).round() * s, (cursor.y / s).round() * s);
        best.consider(SnapKind::Grid, grid, cursor, tol);
    }

    best.point
}
