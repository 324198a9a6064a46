//! Reine geometrische Primitive: Schnittpunkte, Lotfußpunkte, Tangenten.
//!
//! Alle Funktionen arbeiten in Welt-Koordinaten (f64) und geben bei
//! degenerierter Eingabe (parallele Linien, Null-Vektoren) `None` bzw.
//! leere Ergebnisse zurück — niemals einen Panic.

use glam::DVec2;

/// Determinanten-Schwelle, unterhalb derer zwei Richtungen als parallel gelten.
pub const PARALLEL_EPS: f64 = 1e-10;

/// Abstands-Schwelle für "Punkt liegt auf Segment"-Tests (Welt-Einheiten).
pub const ON_SEGMENT_EPS: f64 = 1e-4;

/// Mittelpunkt zweier Punkte.
pub fn midpoint(a: DVec2, b: DVec2) -> DVec2 {
    (a + b) * 0.5
}

/// Normalisiert einen Winkel in Grad auf `[0, 360)`.
pub fn normalize_deg(angle: f64) -> f64 {
    let a = angle % 360.0;
    if a < 0.0 {
        a + 360.0
    } else {
        a
    }
}

/// Winkel in Grad von `from` nach `to`, normalisiert auf `[0, 360)`.
pub fn direction_deg(from: DVec2, to: DVec2) -> f64 {
    normalize_deg((to.y - from.y).atan2(to.x - from.x).to_degrees())
}

/// Prüft ob ein Winkel (Grad, CCW) im Bogenbereich `[start, end]` liegt.
///
/// Alle drei Werte werden auf `[0, 360)` normalisiert; bei `start > end`
/// läuft der Bereich über 0/360 hinweg.
pub fn is_angle_between(angle: f64, start: f64, end: f64) -> bool {
    let a = normalize_deg(angle);
    let s = normalize_deg(start);
    let e = normalize_deg(end);

    if s <= e {
        s <= a && a <= e
    } else {
        a >= s || a <= e
    }
}

/// Rotiert einen Punkt um ein Zentrum (Winkel in Grad, CCW).
pub fn rotate_point(point: DVec2, center: DVec2, angle_deg: f64) -> DVec2 {
    let rad = angle_deg.to_radians();
    let (sin_a, cos_a) = rad.sin_cos();
    let d = point - center;
    DVec2::new(
        center.x + d.x * cos_a - d.y * sin_a,
        center.y + d.x * sin_a + d.y * cos_a,
    )
}

/// Schnittpunkt zweier Strecken `a1-a2` und `b1-b2`.
///
/// `None` wenn die Strecken parallel sind oder der Schnittpunkt außerhalb
/// eines der Parameterbereiche `[0, 1]` liegt.
pub fn segment_intersection(a1: DVec2, a2: DVec2, b1: DVec2, b2: DVec2) -> Option<DVec2> {
    let (t, u) = line_parameters(a1, a2, b1, b2)?;
    if (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u) {
        Some(a1 + (a2 - a1) * t)
    } else {
        None
    }
}

/// Schnittpunkt zweier unendlicher Geraden durch `a1-a2` bzw. `b1-b2`.
///
/// Variante ohne Bereichsprüfung — wird vom Fillet-Konstruktor genutzt.
pub fn infinite_intersection(a1: DVec2, a2: DVec2, b1: DVec2, b2: DVec2) -> Option<DVec2> {
    let (t, _) = line_parameters(a1, a2, b1, b2)?;
    Some(a1 + (a2 - a1) * t)
}

/// Löst das parametrische 2x2-System beider Geraden.
fn line_parameters(a1: DVec2, a2: DVec2, b1: DVec2, b2: DVec2) -> Option<(f64, f64)> {
    let d1 = a2 - a1;
    let d2 = b2 - b1;
    let denom = d1.x * d2.y - d1.y * d2.x;
    if denom.abs() < PARALLEL_EPS {
        return None;
    }

    let d = b1 - a1;
    let t = (d.x * d2.y - d.y * d2.x) / denom;
    let u = (d.x * d1.y - d.y * d1.x) / denom;
    Some((t, u))
}

/// Schnittpunkte einer Strecke mit einem Kreis (0, 1 oder 2 Punkte).
///
/// Setzt die parametrische Gerade in die Kreisgleichung ein und verwirft
/// nicht-reelle Wurzeln sowie Parameter außerhalb `[0, 1]`.
pub fn segment_circle_intersection(
    p1: DVec2,
    p2: DVec2,
    center: DVec2,
    radius: f64,
) -> Vec<DVec2> {
    let d = p2 - p1;
    let f = p1 - center;

    let a = d.dot(d);
    let b = 2.0 * f.dot(d);
    let c = f.dot(f) - radius * radius;

    let disc = b * b - 4.0 * a * c;
    if disc < 0.0 || a.abs() < PARALLEL_EPS {
        return Vec::new();
    }

    let sqrt_disc = disc.sqrt();
    let mut results = Vec::new();
    for sign in [1.0, -1.0] {
        let t = (-b + sign * sqrt_disc) / (2.0 * a);
        if (0.0..=1.0).contains(&t) {
            results.push(p1 + d * t);
        }
    }
    results
}

/// Schnittpunkte zweier Kreise (0, 1 oder 2 Punkte).
pub fn circle_circle_intersection(c1: DVec2, r1: f64, c2: DVec2, r2: f64) -> Vec<DVec2> {
    let d = c1.distance(c2);
    if d > r1 + r2 || d < (r1 - r2).abs() || d < PARALLEL_EPS {
        return Vec::new();
    }

    let a = (r1 * r1 - r2 * r2 + d * d) / (2.0 * d);
    let h_sq = r1 * r1 - a * a;
    if h_sq < 0.0 {
        return Vec::new();
    }
    let h = h_sq.sqrt();

    let m = c1 + (c2 - c1) * (a / d);
    if h < PARALLEL_EPS {
        return vec![m];
    }

    let offset = DVec2::new(
        h * (c2.y - c1.y) / d,
        h * (c2.x - c1.x) / d,
    );
    vec![
        DVec2::new(m.x + offset.x, m.y - offset.y),
        DVec2::new(m.x - offset.x, m.y + offset.y),
    ]
}

/// Nächster Punkt auf der Strecke `a-b` zum Punkt `p` (Parameter geklemmt).
pub fn closest_point_on_segment(p: DVec2, a: DVec2, b: DVec2) -> DVec2 {
    let d = b - a;
    let len_sq = d.length_squared();
    if len_sq < PARALLEL_EPS {
        return a;
    }
    let t = ((p - a).dot(d) / len_sq).clamp(0.0, 1.0);
    a + d * t
}

/// Lotfußpunkt von `p` auf die unendliche Gerade durch `a-b` (ohne Klemmung).
pub fn perpendicular_foot(p: DVec2, a: DVec2, b: DVec2) -> DVec2 {
    let d = b - a;
    let len_sq = d.length_squared();
    if len_sq < PARALLEL_EPS {
        return a;
    }
    let t = (p - a).dot(d) / len_sq;
    a + d * t
}

/// Senkrechter Abstand von `p` zur geklemmten Strecke `a-b`.
pub fn point_segment_distance(p: DVec2, a: DVec2, b: DVec2) -> f64 {
    p.distance(closest_point_on_segment(p, a, b))
}

/// Prüft ob `p` (innerhalb einer Toleranz) auf der Strecke `a-b` liegt.
pub fn on_segment(p: DVec2, a: DVec2, b: DVec2) -> bool {
    (a.distance(b) - (a.distance(p) + p.distance(b))).abs() < ON_SEGMENT_EPS
}

/// Nächster Punkt auf dem Kreisumfang zum Punkt `p`.
///
/// Fällt `p` mit dem Zentrum zusammen, wird der Punkt bei 0° geliefert.
pub fn nearest_point_on_circle(p: DVec2, center: DVec2, radius: f64) -> DVec2 {
    let d = p - center;
    let len = d.length();
    if len < PARALLEL_EPS {
        return center + DVec2::new(radius, 0.0);
    }
    center + d * (radius / len)
}

/// Tangentenpunkte vom externen Punkt `point` an einen Kreis.
///
/// - Punkt innerhalb des Kreises → keine Lösung
/// - Punkt exakt auf dem Kreis → der Punkt selbst
/// - sonst die zwei symmetrischen Tangentenpunkte
pub fn tangent_points(point: DVec2, center: DVec2, radius: f64) -> Vec<DVec2> {
    let d = center - point;
    let dist = d.length();

    if dist < radius {
        return Vec::new();
    }
    if (dist - radius).abs() < PARALLEL_EPS {
        return vec![point];
    }

    let angle = d.y.atan2(d.x);
    let offset = (radius / dist).acos();

    [angle + offset, angle - offset]
        .iter()
        .map(|t| DVec2::new(center.x - radius * t.cos(), center.y - radius * t.sin()))
        .collect()
}

/// Punkt auf einem Kreis bei gegebenem Winkel (Grad, CCW ab +X).
pub fn point_at_angle(center: DVec2, radius: f64, angle_deg: f64) -> DVec2 {
    let rad = angle_deg.to_radians();
    center + DVec2::new(radius * rad.cos(), radius * rad.sin())
}

/// Verschiebt eine Strecke senkrecht um `dist` entlang der Normalen `(-dy, dx)`.
///
/// Degenerierte Strecken (Länge ~0) werden unverändert zurückgegeben.
pub fn offset_segment(a: DVec2, b: DVec2, dist: f64) -> (DVec2, DVec2) {
    let d = b - a;
    let len = d.length();
    if len < PARALLEL_EPS {
        return (a, b);
    }
    let normal = DVec2::new(-d.y / len, d.x / len) * dist;
    (a + normal, b + normal)
}

/// Verschiebt einen Polylinienzug senkrecht um `dist`.
///
/// Benachbarte Offset-Segmente werden über den Schnitt ihrer unendlichen
/// Geraden verbunden; bei parallelen Nachbarn dient der Segment-Endpunkt
/// als Fallback.
pub fn offset_polyline(points: &[DVec2], dist: f64, closed: bool) -> Vec<DVec2> {
    if points.len() < 2 {
        return points.to_vec();
    }

    let mut segments: Vec<(DVec2, DVec2)> = points
        .windows(2)
        .map(|w| offset_segment(w[0], w[1], dist))
        .collect();
    if closed {
        segments.push(offset_segment(points[points.len() - 1], points[0], dist));
    }

    let mut result = Vec::with_capacity(points.len());
    if !closed {
        result.push(segments[0].0);
    }

    for pair in segments.windows(2) {
        let (s1, s2) = (pair[0], pair[1]);
        match infinite_intersection(s1.0, s1.1, s2.0, s2.1) {
            Some(p) => result.push(p),
            None => result.push(s1.1),
        }
    }

    if closed {
        let last = segments[segments.len() - 1];
        let first = segments[0];
        let joint = infinite_intersection(last.0, last.1, first.0, first.1)
            .unwrap_or(last.1);
        result.push(joint);
        result.insert(0, joint);
    } else {
        result.push(segments[segments.len() - 1].1);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn segment_intersection_inside_both_ranges() {
        let p = segment_intersection(
            DVec2::new(0.0, 0.0),
            DVec2::new(10.0, 10.0),
            DVec2::new(0.0, 10.0),
            DVec2::new(10.0, 0.0),
        )
        .unwrap();
        assert_relative_eq!(p.x, 5.0);
        assert_relative_eq!(p.y, 5.0);
    }

    #[test]
    fn segment_intersection_rejects_out_of_range() {
        // Die Geraden schneiden sich bei (5, 5), aber außerhalb der zweiten Strecke
        let p = segment_intersection(
            DVec2::new(0.0, 0.0),
            DVec2::new(10.0, 10.0),
            DVec2::new(0.0, 10.0),
            DVec2::new(4.0, 6.0),
        );
        assert!(p.is_none());
    }

    #[test]
    fn parallel_segments_have_no_intersection() {
        let p = segment_intersection(
            DVec2::new(0.0, 0.0),
            DVec2::new(10.0, 0.0),
            DVec2::new(0.0, 1.0),
            DVec2::new(10.0, 1.0),
        );
        assert!(p.is_none());
    }

    #[test]
    fn infinite_intersection_ignores_segment_bounds() {
        let p = infinite_intersection(
            DVec2::new(0.0, 0.0),
            DVec2::new(1.0, 0.0),
            DVec2::new(5.0, -1.0),
            DVec2::new(5.0, 1.0),
        )
        .unwrap();
        assert_relative_eq!(p.x, 5.0);
        assert_relative_eq!(p.y, 0.0);
    }

    #[test]
    fn closest_point_clamps_to_segment() {
        let a = DVec2::new(0.0, 0.0);
        let b = DVec2::new(10.0, 0.0);
        let on = closest_point_on_segment(DVec2::new(4.0, 3.0), a, b);
        assert_relative_eq!(on.x, 4.0);
        assert_relative_eq!(on.y, 0.0);

        let clamped = closest_point_on_segment(DVec2::new(-5.0, 3.0), a, b);
        assert_relative_eq!(clamped.x, 0.0);
        assert_relative_eq!(clamped.y, 0.0);
    }

    #[test]
    fn perpendicular_foot_extends_beyond_segment() {
        let foot = perpendicular_foot(
            DVec2::new(15.0, 5.0),
            DVec2::new(0.0, 0.0),
            DVec2::new(10.0, 0.0),
        );
        assert_relative_eq!(foot.x, 15.0);
        assert_relative_eq!(foot.y, 0.0);
    }

    #[test]
    fn segment_circle_intersection_two_points() {
        let pts = segment_circle_intersection(
            DVec2::new(-10.0, 0.0),
            DVec2::new(10.0, 0.0),
            DVec2::ZERO,
            5.0,
        );
        assert_eq!(pts.len(), 2);
        for p in &pts {
            assert_relative_eq!(p.x.abs(), 5.0, epsilon = 1e-9);
            assert_relative_eq!(p.y, 0.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn segment_circle_intersection_respects_segment_bounds() {
        let pts = segment_circle_intersection(
            DVec2::new(-10.0, 0.0),
            DVec2::new(-6.0, 0.0),
            DVec2::ZERO,
            5.0,
        );
        assert!(pts.is_empty());
    }

    #[test]
    fn tangent_points_are_symmetric_and_on_circle() {
        let anchor = DVec2::new(0.0, 10.0);
        let center = DVec2::ZERO;
        let radius = 5.0;
        let pts = tangent_points(anchor, center, radius);
        assert_eq!(pts.len(), 2);

        // Spiegelsymmetrie zur Y-Achse
        assert_relative_eq!(pts[0].x, -pts[1].x, epsilon = 1e-9);
        assert_relative_eq!(pts[0].y, pts[1].y, epsilon = 1e-9);

        for p in &pts {
            assert_relative_eq!(p.distance(center), radius, epsilon = 1e-9);
            // Berührungsradius steht senkrecht auf der Tangente
            let radial = *p - center;
            let tangent = *p - anchor;
            assert_relative_eq!(radial.dot(tangent), 0.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn tangent_points_inside_circle_is_empty() {
        assert!(tangent_points(DVec2::new(1.0, 0.0), DVec2::ZERO, 5.0).is_empty());
    }

    #[test]
    fn tangent_point_on_circle_is_the_point_itself() {
        let pts = tangent_points(DVec2::new(5.0, 0.0), DVec2::ZERO, 5.0);
        assert_eq!(pts.len(), 1);
        assert_relative_eq!(pts[0].x, 5.0);
    }

    #[test]
    fn angle_between_handles_wraparound() {
        assert!(is_angle_between(350.0, 300.0, 30.0));
        assert!(is_angle_between(10.0, 300.0, 30.0));
        assert!(!is_angle_between(180.0, 300.0, 30.0));
        assert!(is_angle_between(45.0, 0.0, 90.0));
        assert!(!is_angle_between(91.0, 0.0, 90.0));
    }

    #[test]
    fn normalize_deg_maps_into_range() {
        assert_relative_eq!(normalize_deg(-90.0), 270.0);
        assert_relative_eq!(normalize_deg(720.0), 0.0);
        assert_relative_eq!(normalize_deg(359.5), 359.5);
    }

    #[test]
    fn rotate_point_quarter_turn() {
        let p = rotate_point(DVec2::new(1.0, 0.0), DVec2::ZERO, 90.0);
        assert_relative_eq!(p.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(p.y, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn offset_segment_shifts_along_normal() {
        let (a, b) = offset_segment(DVec2::ZERO, DVec2::new(10.0, 0.0), 2.0);
        assert_relative_eq!(a.y, 2.0);
        assert_relative_eq!(b.y, 2.0);
        assert_relative_eq!(a.x, 0.0);
        assert_relative_eq!(b.x, 10.0);
    }

    #[test]
    fn offset_polyline_joins_at_miter() {
        // L-Form: Offset nach innen trifft sich im Geraden-Schnitt
        let pts = vec![
            DVec2::new(0.0, 0.0),
            DVec2::new(10.0, 0.0),
            DVec2::new(10.0, 10.0),
        ];
        let off = offset_polyline(&pts, 1.0, false);
        assert_eq!(off.len(), 3);
        assert_relative_eq!(off[1].x, 9.0, epsilon = 1e-9);
        assert_relative_eq!(off[1].y, 1.0, epsilon = 1e-9);
    }

    #[test]
    fn circle_circle_intersection_two_points() {
        let pts = circle_circle_intersection(DVec2::ZERO, 5.0, DVec2::new(8.0, 0.0), 5.0);
        assert_eq!(pts.len(), 2);
        for p in &pts {
            assert_relative_eq!(p.x, 4.0, epsilon = 1e-9);
            assert_relative_eq!(p.y.abs(), 3.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn disjoint_circles_do_not_intersect() {
        assert!(circle_circle_intersection(DVec2::ZERO, 1.0, DVec2::new(10.0, 0.0), 1.0).is_empty());
    }
}
