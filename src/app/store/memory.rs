//! In-Memory-Referenzimplementierung des [`ShapeStore`].
//!
//! Dient Tests und Demos als Backend; die Operationssemantik (Kopie =
//! Klon + Verschiebung, Offset-Seite per Kreuzprodukt, Trim zwischen
//! Schnittpunkten, Fillet ersetzt beide Linien) ist die des echten
//! Zeichnungs-Backends.

use anyhow::{bail, Context, Result};
use glam::DVec2;

use super::ShapeStore;
use crate::core::fillet::fillet_between;
use crate::core::geometry::{offset_polyline, offset_segment};
use crate::core::intersect::shape_intersections;
use crate::core::shape::{Drawing, Shape, ShapeGeometry, ShapeId};

/// Parameter-Fenster, in dem Schnittpunkte als echte Teilungen einer
/// Linie zählen (Endpunkt-Berührungen teilen nicht).
const TRIM_PARAM_EPS: f64 = 1e-9;

pub struct MemoryStore {
    drawing: Drawing,
    next_id: u64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            drawing: Drawing::new(),
            next_id: 1,
        }
    }

    fn fresh_id(&mut self) -> ShapeId {
        let id = ShapeId(self.next_id);
        self.next_id += 1;
        id
    }

    fn shape(&self, id: ShapeId) -> Result<&Shape> {
        self.drawing
            .shape(id)
            .with_context(|| format!("Shape {:?} existiert nicht", id))
    }

    fn shape_mut(&mut self, id: ShapeId) -> Result<&mut Shape> {
        self.drawing
            .shapes
            .iter_mut()
            .find(|s| s.id == id)
            .with_context(|| format!("Shape {:?} existiert nicht", id))
    }

    fn push(&mut self, geometry: ShapeGeometry) -> ShapeId {
        let id = self.fresh_id();
        let layer = self.drawing.active_layer;
        self.drawing.shapes.push(Shape::new(id, geometry, layer));
        id
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ShapeStore for MemoryStore {
    fn add_shape(&mut self, geometry: ShapeGeometry) -> Result<ShapeId> {
        Ok(self.push(geometry))
    }

    fn delete_shape(&mut self, id: ShapeId) -> Result<()> {
        let before = self.drawing.shapes.len();
        self.drawing.shapes.retain(|s| s.id != id);
        if self.drawing.shapes.len() == before {
            bail!("Shape {:?} existiert nicht", id);
        }
        Ok(())
    }

    fn delete_shapes(&mut self, ids: &[ShapeId]) -> Result<()> {
        for id in ids {
            self.delete_shape(*id)?;
        }
        Ok(())
    }

    fn modify_shape(&mut self, id: ShapeId, geometry: ShapeGeometry) -> Result<()> {
        self.shape_mut(id)?.geometry = geometry;
        Ok(())
    }

    fn copy_shapes(&mut self, ids: &[ShapeId], delta: DVec2) -> Result<Vec<ShapeId>> {
        let mut copies = Vec::with_capacity(ids.len());
        for id in ids {
            let source = self.shape(*id)?.clone();
            copies.push((source.geometry.translated(delta), source.style, source.layer));
        }
        let mut new_ids = Vec::with_capacity(copies.len());
        for (geometry, style, layer) in copies {
            let id = self.fresh_id();
            let mut shape = Shape::new(id, geometry, layer);
            shape.style = style;
            self.drawing.shapes.push(shape);
            new_ids.push(id);
        }
        Ok(new_ids)
    }

    fn translate_shapes(&mut self, ids: &[ShapeId], delta: DVec2) -> Result<()> {
        for id in ids {
            let geometry = self.shape(*id)?.geometry.translated(delta);
            self.shape_mut(*id)?.geometry = geometry;
        }
        Ok(())
    }

    fn rotate_shapes(&mut self, ids: &[ShapeId], pivot: DVec2, angle_deg: f64) -> Result<()> {
        for id in ids {
            let geometry = self.shape(*id)?.geometry.rotated(pivot, angle_deg);
            self.shape_mut(*id)?.geometry = geometry;
        }
        Ok(())
    }

    fn scale_shapes(&mut self, ids: &[ShapeId], pivot: DVec2, factor: f64) -> Result<()> {
        if !factor.is_finite() || factor <= 0.0 {
            bail!("ungültiger Skalierfaktor {factor}");
        }
        for id in ids {
            let geometry = self.shape(*id)?.geometry.scaled(pivot, factor);
            self.shape_mut(*id)?.geometry = geometry;
        }
        Ok(())
    }

    fn trim_shape(&mut self, id: ShapeId, pick: DVec2) -> Result<()> {
        let shape = self.shape(id)?.clone();
        let ShapeGeometry::Line { start, end } = shape.geometry else {
            bail!("Trimmen unterstützt nur Linien");
        };
        let dir = end - start;
        let len_sq = dir.length_squared();
        if len_sq <= f64::EPSILON {
            bail!("Linie hat Länge 0");
        }

        // Schnittparameter im Inneren der Linie sammeln
        let mut cuts: Vec<f64> = Vec::new();
        for other in &self.drawing.shapes {
            if other.id == id || other.hidden {
                continue;
            }
            for p in shape_intersections(&shape.geometry, &other.geometry) {
                let t = (p - start).dot(dir) / len_sq;
                if t > TRIM_PARAM_EPS && t < 1.0 - TRIM_PARAM_EPS {
                    cuts.push(t);
                }
            }
        }
        cuts.sort_by(|a, b| a.total_cmp(b));

        let t_pick = ((pick - start).dot(dir) / len_sq).clamp(0.0, 1.0);
        let lower = cuts.iter().copied().filter(|t| *t < t_pick).next_back();
        let upper = cuts.iter().copied().find(|t| *t >= t_pick);

        match (lower, upper) {
            // Keine Schnitte: die ganze Linie fällt weg
            (None, None) => self.delete_shape(id),
            (Some(l), None) => self.modify_shape(
                id,
                ShapeGeometry::Line {
                    start,
                    end: start + dir * l,
                },
            ),
            (None, Some(u)) => self.modify_shape(
                id,
                ShapeGeometry::Line {
                    start: start + dir * u,
                    end,
                },
            ),
            // Mittleres Teilstück entfernen: zwei Reststücke
            (Some(l), Some(u)) => {
                self.modify_shape(
                    id,
                    ShapeGeometry::Line {
                        start,
                        end: start + dir * l,
                    },
                )?;
                self.push(ShapeGeometry::Line {
                    start: start + dir * u,
                    end,
                });
                Ok(())
            }
        }
    }

    fn offset_shape(&mut self, id: ShapeId, distance: f64, pick: DVec2) -> Result<ShapeId> {
        if !distance.is_finite() || distance <= 0.0 {
            bail!("ungültiger Offset-Abstand {distance}");
        }
        let geometry = self.shape(id)?.geometry.clone();
        let offset = match geometry {
            ShapeGeometry::Line { start, end } => {
                // Kreuzprodukt-Vorzeichen wählt die Seite des Picks
                let side = (end - start).perp_dot(pick - start);
                let signed = if side >= 0.0 { distance } else { -distance };
                let (a, b) = offset_segment(start, end, signed);
                ShapeGeometry::Line { start: a, end: b }
            }
            ShapeGeometry::Circle { center, radius } => {
                let new_radius = if pick.distance(center) >= radius {
                    radius + distance
                } else {
                    radius - distance
                };
                if new_radius <= 0.0 {
                    bail!("Offset-Radius wird nicht positiv");
                }
                ShapeGeometry::Circle {
                    center,
                    radius: new_radius,
                }
            }
            ShapeGeometry::Polyline { ref points, closed } => {
                if points.len() < 2 {
                    bail!("Polylinie zu kurz für Offset");
                }
                let side = (points[1] - points[0]).perp_dot(pick - points[0]);
                let signed = if side >= 0.0 { distance } else { -distance };
                let offset_points = offset_polyline(points, signed, closed);
                if offset_points.len() < 2 {
                    bail!("Offset degeneriert");
                }
                ShapeGeometry::Polyline {
                    points: offset_points,
                    closed,
                }
            }
            _ => bail!("Offset unterstützt nur Linien, Kreise und Polylinien"),
        };
        Ok(self.push(offset))
    }

    fn fillet_shapes(
        &mut self,
        id_a: ShapeId,
        id_b: ShapeId,
        radius: f64,
        pick: DVec2,
    ) -> Result<Option<ShapeId>> {
        let geom_a = self.shape(id_a)?.geometry.clone();
        let geom_b = self.shape(id_b)?.geometry.clone();
        let (ShapeGeometry::Line {
            start: a1,
            end: a2,
        }, ShapeGeometry::Line {
            start: b1,
            end: b2,
        }) = (geom_a, geom_b)
        else {
            bail!("Fillet unterstützt nur Linien");
        };

        let fillet = fillet_between((a1, a2), (b1, b2), radius, pick)
            .context("Fillet-Konstruktion fehlgeschlagen (parallele oder degenerierte Linien)")?;

        self.modify_shape(
            id_a,
            ShapeGeometry::Line {
                start: fillet.trimmed_a.0,
                end: fillet.trimmed_a.1,
            },
        )?;
        self.modify_shape(
            id_b,
            ShapeGeometry::Line {
                start: fillet.trimmed_b.0,
                end: fillet.trimmed_b.1,
            },
        )?;

        if fillet.radius == 0.0 {
            return Ok(None);
        }
        let arc_id = self.push(ShapeGeometry::Arc {
            center: fillet.center,
            radius: fillet.radius,
            start_angle: fillet.start_angle,
            end_angle: fillet.end_angle,
        });
        Ok(Some(arc_id))
    }

    fn drawing(&self) -> &Drawing {
        &self.drawing
    }
}
