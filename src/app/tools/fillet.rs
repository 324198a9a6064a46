//! Abrunde-Werkzeug: zwei Linien picken, Ecke mit Tangentenbogen
//! ersetzen.
//!
//! Der Zustand ist implizit zweistufig (erste Linie gepickt oder
//! nicht). Der zweite Klick liefert zugleich den Pick-Punkt, der die
//! Ecke disambiguiert, und löst `fillet_shapes` aus.

use glam::DVec2;

use super::{DraftTool, InteractionContext, PreviewShape, ToolFlow, ToolKey, ToolKind};
use crate::app::store::ShapeStore;
use crate::core::fillet::fillet_between;
use crate::core::shape::{Drawing, ShapeGeometry, ShapeId};

/// Schrittweite der Radius-Tasten.
const RADIUS_STEP: f64 = 1.0;

pub struct FilletTool {
    first: Option<ShapeId>,
    radius: f64,
}

impl FilletTool {
    pub fn new() -> Self {
        Self {
            first: None,
            radius: 5.0,
        }
    }

    pub fn set_radius(&mut self, radius: f64) {
        if radius.is_finite() && radius >= 0.0 {
            self.radius = radius;
        }
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Liefert die Linien-Endpunkte, falls das Shape eine Linie ist.
    fn line_of(drawing: &Drawing, id: ShapeId) -> Option<(DVec2, DVec2)> {
        match drawing.shape(id)?.geometry {
            ShapeGeometry::Line { start, end } => Some((start, end)),
            _ => None,
        }
    }

    /// Pickt eine Linie unter dem Cursor.
    fn pick_line(drawing: &Drawing, pos: DVec2, tolerance: f64) -> Option<ShapeId> {
        let id = drawing.hit_test(pos, tolerance)?;
        Self::line_of(drawing, id).map(|_| id)
    }
}

impl Default for FilletTool {
    fn default() -> Self {
        Self::new()
    }
}

impl DraftTool for FilletTool {
    fn kind(&self) -> ToolKind {
        ToolKind::Fillet
    }

    fn status_text(&self) -> &str {
        if self.first.is_none() {
            "Erste Linie wählen (+/-: Radius)"
        } else {
            "Zweite Linie nahe der Ecke wählen"
        }
    }

    fn on_pointer_down(
        &mut self,
        pos: DVec2,
        drawing: &Drawing,
        ctx: &mut InteractionContext,
        store: &mut dyn ShapeStore,
    ) -> ToolFlow {
        let Some(hit) = Self::pick_line(drawing, pos, ctx.pick_tolerance) else {
            return ToolFlow::Continue;
        };
        let Some(first) = self.first else {
            self.first = Some(hit);
            return ToolFlow::Continue;
        };
        if hit == first {
            return ToolFlow::Continue;
        }
        match store.fillet_shapes(first, hit, self.radius, pos) {
            Ok(_) => {
                self.reset();
                ctx.clear_transient();
                ToolFlow::Committed
            }
            Err(err) => {
                log::warn!("Abrunden fehlgeschlagen: {err:#}");
                ToolFlow::Continue
            }
        }
    }

    fn on_pointer_move(&mut self, pos: DVec2, drawing: &Drawing, ctx: &mut InteractionContext) {
        ctx.preview.clear();
        let Some(first) = self.first else {
            return;
        };
        let Some(hover) = Self::pick_line(drawing, pos, ctx.pick_tolerance) else {
            return;
        };
        if hover == first {
            return;
        }
        let (Some(line_a), Some(line_b)) =
            (Self::line_of(drawing, first), Self::line_of(drawing, hover))
        else {
            return;
        };
        let Some(fillet) = fillet_between(line_a, line_b, self.radius, pos) else {
            return;
        };
        if fillet.radius > 0.0 {
            ctx.preview.push(PreviewShape::new(ShapeGeometry::Arc {
                center: fillet.center,
                radius: fillet.radius,
                start_angle: fillet.start_angle,
                end_angle: fillet.end_angle,
            }));
        }
        ctx.preview.push(PreviewShape::new(ShapeGeometry::Line {
            start: fillet.trimmed_a.0,
            end: fillet.trimmed_a.1,
        }));
        ctx.preview.push(PreviewShape::new(ShapeGeometry::Line {
            start: fillet.trimmed_b.0,
            end: fillet.trimmed_b.1,
        }));
    }

    fn on_key(
        &mut self,
        key: ToolKey,
        cursor: DVec2,
        drawing: &Drawing,
        ctx: &mut InteractionContext,
        _store: &mut dyn ShapeStore,
    ) -> ToolFlow {
        match key {
            ToolKey::Increase => self.radius += RADIUS_STEP,
            ToolKey::Decrease => self.radius = (self.radius - RADIUS_STEP).max(0.0),
            _ => return ToolFlow::Continue,
        }
        // Radius-Änderung sofort in der Hover-Vorschau zeigen
        self.on_pointer_move(cursor, drawing, ctx);
        ToolFlow::Continue
    }

    fn reset(&mut self) {
        self.first = None;
    }

    fn has_pending_input(&self) -> bool {
        self.first.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::store::test_support::FailingStore;
    use crate::app::store::MemoryStore;

    fn setup() -> (MemoryStore, Drawing, InteractionContext, FilletTool) {
        let mut store = MemoryStore::new();
        store
            .add_shape(ShapeGeometry::Line {
                start: DVec2::ZERO,
                end: DVec2::new(10.0, 0.0),
            })
            .unwrap();
        store
            .add_shape(ShapeGeometry::Line {
                start: DVec2::ZERO,
                end: DVec2::new(0.0, 10.0),
            })
            .unwrap();
        let drawing = store.drawing().clone();
        let mut ctx = InteractionContext::new();
        ctx.pick_tolerance = 0.5;
        let mut tool = FilletTool::new();
        tool.set_radius(2.0);
        (store, drawing, ctx, tool)
    }

    #[test]
    fn two_picks_commit_the_fillet() {
        let (mut store, drawing, mut ctx, mut tool) = setup();

        tool.on_pointer_down(DVec2::new(9.0, 0.1), &drawing, &mut ctx, &mut store);
        assert!(tool.has_pending_input());
        let flow = tool.on_pointer_down(DVec2::new(0.1, 9.0), &drawing, &mut ctx, &mut store);

        assert_eq!(flow, ToolFlow::Committed);
        let arcs = store
            .drawing()
            .shapes
            .iter()
            .filter(|s| matches!(s.geometry, ShapeGeometry::Arc { .. }))
            .count();
        assert_eq!(arcs, 1);
        assert!(!tool.has_pending_input());
    }

    #[test]
    fn picking_the_same_line_twice_does_nothing() {
        let (mut store, drawing, mut ctx, mut tool) = setup();

        tool.on_pointer_down(DVec2::new(9.0, 0.1), &drawing, &mut ctx, &mut store);
        let flow = tool.on_pointer_down(DVec2::new(5.0, 0.1), &drawing, &mut ctx, &mut store);

        assert_eq!(flow, ToolFlow::Continue);
        assert_eq!(store.drawing().shapes.len(), 2);
    }

    #[test]
    fn hover_preview_shows_arc_and_trimmed_lines() {
        let (store, drawing, mut ctx, mut tool) = setup();

        tool.on_pointer_down(
            DVec2::new(9.0, 0.1),
            &drawing,
            &mut ctx,
            &mut MemoryStore::new(),
        );
        tool.on_pointer_move(DVec2::new(0.1, 9.0), &drawing, &mut ctx);

        assert_eq!(ctx.preview.len(), 3);
        assert!(matches!(
            ctx.preview[0].geometry,
            ShapeGeometry::Arc { .. }
        ));
        // Store unverändert
        assert_eq!(store.drawing().shapes.len(), 2);
    }

    #[test]
    fn store_failure_keeps_first_pick() {
        let (_, drawing, mut ctx, mut tool) = setup();
        let mut failing = FailingStore::new();

        tool.on_pointer_down(DVec2::new(9.0, 0.1), &drawing, &mut ctx, &mut failing);
        let flow = tool.on_pointer_down(DVec2::new(0.1, 9.0), &drawing, &mut ctx, &mut failing);

        assert_eq!(flow, ToolFlow::Continue);
        assert!(tool.has_pending_input());
    }

    #[test]
    fn radius_key_refreshes_hover_preview() {
        let (mut store, drawing, mut ctx, mut tool) = setup();

        tool.on_pointer_down(DVec2::new(9.0, 0.1), &drawing, &mut ctx, &mut store);
        tool.on_pointer_move(DVec2::new(0.1, 9.0), &drawing, &mut ctx);
        match ctx.preview[0].geometry {
            ShapeGeometry::Arc { radius, .. } => assert_eq!(radius, 2.0),
            _ => panic!("Bogen erwartet"),
        }

        tool.on_key(
            ToolKey::Increase,
            DVec2::new(0.1, 9.0),
            &drawing,
            &mut ctx,
            &mut store,
        );

        match ctx.preview[0].geometry {
            ShapeGeometry::Arc { radius, .. } => assert_eq!(radius, 3.0),
            _ => panic!("Bogen erwartet"),
        }
    }

    #[test]
    fn radius_keys_never_go_negative() {
        let (mut store, drawing, mut ctx, mut tool) = setup();
        tool.set_radius(0.5);

        tool.on_key(ToolKey::Decrease, DVec2::ZERO, &drawing, &mut ctx, &mut store);
        assert_eq!(tool.radius(), 0.0);
        tool.on_key(ToolKey::Increase, DVec2::ZERO, &drawing, &mut ctx, &mut store);
        assert_eq!(tool.radius(), 1.0);
    }
}
