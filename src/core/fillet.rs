//! Tangentenbogen-Konstruktion (Fillet) zwischen zwei Linien.
//!
//! Konstruktion über Parallelversatz: beide Linien werden um den Radius
//! zur Innenseite der Ecke versetzt, der Schnitt der versetzten
//! Geraden ist das Bogenzentrum, die Lotfußpunkte auf den
//! Originallinien sind die Tangentenpunkte. Alle degenerierten
//! Eingaben liefern `None`, nie einen Panic.

use glam::DVec2;

use super::geometry::{
    direction_deg, infinite_intersection, normalize_deg, perpendicular_foot, point_at_angle,
};

/// Ergebnis der Fillet-Konstruktion.
///
/// Neben dem Bogen selbst werden die gekürzten Ersatzlinien
/// (Tangentenpunkt → behaltener Endpunkt) mitgeliefert, damit der
/// Store die komplette Bearbeitung in einem Schritt anwenden kann.
#[derive(Debug, Clone, PartialEq)]
pub struct Fillet {
    /// Bogenzentrum.
    pub center: DVec2,
    /// Bogenradius (0 bei scharfer Ecke).
    pub radius: f64,
    /// Startwinkel des Bogens in Grad, CCW ab +X.
    pub start_angle: f64,
    /// Endwinkel des Bogens in Grad, CCW ab +X.
    pub end_angle: f64,
    /// Tangentenpunkt auf der ersten Linie.
    pub tangent_a: DVec2,
    /// Tangentenpunkt auf der zweiten Linie.
    pub tangent_b: DVec2,
    /// Schnittpunkt der unendlichen Trägergeraden (die Ecke).
    pub corner: DVec2,
    /// Gekürzte erste Linie (Tangentenpunkt → behaltener Endpunkt).
    pub trimmed_a: (DVec2, DVec2),
    /// Gekürzte zweite Linie (Tangentenpunkt → behaltener Endpunkt).
    pub trimmed_b: (DVec2, DVec2),
}

/// Behaltener Endpunkt einer Linie: der von der Ecke weiter entfernte.
/// Bei (nahezu) gleichem Abstand entscheidet der Pick-Punkt — behalten
/// wird die vom Pick abgewandte Seite.
fn far_endpoint(line: (DVec2, DVec2), corner: DVec2, pick: DVec2) -> DVec2 {
    let (p1, p2) = line;
    let d1 = p1.distance(corner);
    let d2 = p2.distance(corner);
    if (d1 - d2).abs() > 1e-9 {
        if d1 > d2 {
            p1
        } else {
            p2
        }
    } else if p1.distance(pick) >= p2.distance(pick) {
        p1
    } else {
        p2
    }
}

/// Wählt von den beiden möglichen Normalen diejenige, die zur anderen
/// Linie hin (also zur Innenseite der Ecke) zeigt.
fn inward_normal(dir: DVec2, other_dir: DVec2) -> Option<DVec2> {
    let n = DVec2::new(-dir.y, dir.x);
    let dot = n.dot(other_dir);
    if dot > 0.0 {
        Some(n)
    } else if dot < 0.0 {
        Some(-n)
    } else {
        // kollinear, keine eindeutige Innenseite
        None
    }
}

/// Konstruiert den Tangentenbogen zwischen zwei Linien.
///
/// `pick` ist der ungefähre Klickpunkt nahe der gewünschten Ecke; er
/// dient nur der Disambiguierung, nicht der Radiusgeometrie. Parallele
/// Linien, Längen-0-Richtungen und negative Radien liefern `None`.
pub fn fillet_between(
    line_a: (DVec2, DVec2),
    line_b: (DVec2, DVec2),
    radius: f64,
    pick: DVec2,
) -> Option<Fillet> {
    if !radius.is_finite() || radius < 0.0 {
        return None;
    }

    let corner = infinite_intersection(line_a.0, line_a.1, line_b.0, line_b.1)?;

    let far_a = far_endpoint(line_a, corner, pick);
    let far_b = far_endpoint(line_b, corner, pick);

    if radius == 0.0 {
        // Scharfe Ecke: beide Linien enden exakt im Schnittpunkt
        return Some(Fillet {
            center: corner,
            radius: 0.0,
            start_angle: 0.0,
            end_angle: 0.0,
            tangent_a: corner,
            tangent_b: corner,
            corner,
            trimmed_a: (corner, far_a),
            trimmed_b: (corner, far_b),
        });
    }

    let dir_a = (far_a - corner).try_normalize()?;
    let dir_b = (far_b - corner).try_normalize()?;

    let normal_a = inward_normal(dir_a, dir_b)?;
    let normal_b = inward_normal(dir_b, dir_a)?;

    // Versetzte Trägergeraden schneiden: Bogenzentrum
    let center = infinite_intersection(
        line_a.0 + normal_a * radius,
        line_a.1 + normal_a * radius,
        line_b.0 + normal_b * radius,
        line_b.1 + normal_b * radius,
    )?;

    let tangent_a = perpendicular_foot(center, line_a.0, line_a.1);
    let tangent_b = perpendicular_foot(center, line_b.0, line_b.1);

    let angle_a = direction_deg(center, tangent_a);
    let angle_b = direction_deg(center, tangent_b);

    // Von den beiden möglichen CCW-Sweeps ist derjenige richtig, dessen
    // Winkel-Mittelpunkt näher an der Ecke liegt: der Bogen wölbt sich
    // in die Ecke hinein, nicht über sie hinweg.
    let (start_angle, end_angle) = pick_sweep(center, radius, angle_a, angle_b, corner);

    Some(Fillet {
        center,
        radius,
        start_angle,
        end_angle,
        tangent_a,
        tangent_b,
        corner,
        trimmed_a: (tangent_a, far_a),
        trimmed_b: (tangent_b, far_b),
    })
}

/// Vergleicht beide CCW-Sweeps über ihren Winkel-Mittelpunkt.
fn pick_sweep(center: DVec2, radius: f64, a: f64, b: f64, corner: DVec2) -> (f64, f64) {
    let mid_of = |start: f64, end: f64| {
        let sweep = normalize_deg(end - start);
        point_at_angle(center, radius, normalize_deg(start + sweep / 2.0))
    };
    if mid_of(a, b).distance(corner) <= mid_of(b, a).distance(corner) {
        (normalize_deg(a), normalize_deg(b))
    } else {
        (normalize_deg(b), normalize_deg(a))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geometry::{is_angle_between, point_segment_distance};
    use approx::assert_relative_eq;

    #[test]
    fn right_angle_fillet_has_expected_center_and_tangents() {
        let a = (DVec2::new(0.0, 0.0), DVec2::new(10.0, 0.0));
        let b = (DVec2::new(0.0, 0.0), DVec2::new(0.0, 10.0));
        let f = fillet_between(a, b, 2.0, DVec2::new(1.0, 1.0)).expect("fillet erwartet");

        assert_relative_eq!(f.center.x, 2.0, epsilon = 1e-9);
        assert_relative_eq!(f.center.y, 2.0, epsilon = 1e-9);
        assert_relative_eq!(f.tangent_a.x, 2.0, epsilon = 1e-9);
        assert_relative_eq!(f.tangent_a.y, 0.0, epsilon = 1e-9);
        assert_relative_eq!(f.tangent_b.x, 0.0, epsilon = 1e-9);
        assert_relative_eq!(f.tangent_b.y, 2.0, epsilon = 1e-9);

        // Der Bogen überstreicht den der Ecke zugewandten Quadranten:
        // sein Mittelpunkt liegt nahe (0.586, 0.586)
        let sweep = (f.end_angle - f.start_angle).rem_euclid(360.0);
        let mid = (f.start_angle + sweep / 2.0).rem_euclid(360.0);
        let mid_point = point_at_angle(f.center, f.radius, mid);
        assert_relative_eq!(mid_point.x, 2.0 - 2.0 / 2f64.sqrt(), epsilon = 1e-9);
        assert_relative_eq!(mid_point.y, 2.0 - 2.0 / 2f64.sqrt(), epsilon = 1e-9);
        assert!(is_angle_between(225.0, f.start_angle, f.end_angle));
    }

    #[test]
    fn fillet_arc_is_tangent_to_both_lines() {
        let a = (DVec2::new(-3.0, 1.0), DVec2::new(12.0, 1.0));
        let b = (DVec2::new(2.0, -4.0), DVec2::new(8.0, 14.0));
        let f = fillet_between(a, b, 1.5, DVec2::new(5.0, 3.0)).expect("fillet erwartet");

        assert_relative_eq!(point_segment_distance(f.center, a.0, a.1), 1.5, epsilon = 1e-9);
        assert_relative_eq!(point_segment_distance(f.center, b.0, b.1), 1.5, epsilon = 1e-9);
        assert_relative_eq!(f.center.distance(f.tangent_a), 1.5, epsilon = 1e-9);
        assert_relative_eq!(f.center.distance(f.tangent_b), 1.5, epsilon = 1e-9);
    }

    #[test]
    fn trimmed_lines_run_from_tangent_to_far_endpoint() {
        let a = (DVec2::new(0.0, 0.0), DVec2::new(10.0, 0.0));
        let b = (DVec2::new(0.0, 0.0), DVec2::new(0.0, 10.0));
        let f = fillet_between(a, b, 2.0, DVec2::new(1.0, 1.0)).expect("fillet erwartet");

        assert_eq!(f.trimmed_a, (DVec2::new(2.0, 0.0), DVec2::new(10.0, 0.0)));
        assert_eq!(f.trimmed_b, (DVec2::new(0.0, 2.0), DVec2::new(0.0, 10.0)));
    }

    #[test]
    fn zero_radius_yields_sharp_corner() {
        let a = (DVec2::new(-5.0, 0.0), DVec2::new(10.0, 0.0));
        let b = (DVec2::new(0.0, -5.0), DVec2::new(0.0, 10.0));
        let f = fillet_between(a, b, 0.0, DVec2::new(1.0, 1.0)).expect("fillet erwartet");

        assert_eq!(f.radius, 0.0);
        assert_eq!(f.tangent_a, DVec2::ZERO);
        assert_eq!(f.trimmed_a, (DVec2::ZERO, DVec2::new(10.0, 0.0)));
        assert_eq!(f.trimmed_b, (DVec2::ZERO, DVec2::new(0.0, 10.0)));
    }

    #[test]
    fn parallel_lines_yield_none() {
        let a = (DVec2::new(0.0, 0.0), DVec2::new(10.0, 0.0));
        let b = (DVec2::new(0.0, 5.0), DVec2::new(10.0, 5.0));
        assert!(fillet_between(a, b, 2.0, DVec2::ZERO).is_none());
    }

    #[test]
    fn degenerate_inputs_yield_none() {
        let point = (DVec2::new(3.0, 3.0), DVec2::new(3.0, 3.0));
        let b = (DVec2::new(0.0, 0.0), DVec2::new(10.0, 0.0));
        assert!(fillet_between(point, b, 2.0, DVec2::ZERO).is_none());

        let a = (DVec2::new(0.0, 0.0), DVec2::new(10.0, 0.0));
        assert!(fillet_between(a, b, -1.0, DVec2::ZERO).is_none());
    }
}
