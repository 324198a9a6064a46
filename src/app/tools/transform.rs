//! Verschiebe-/Rotier-Werkzeug über einen Basispunkt.
//!
//! Nach dem Basispunkt folgt die Zielposition: im Verschiebe-Modus ist
//! das Delta Cursor − Basis, im Rotier-Modus der Winkel von der Basis
//! zum Cursor. `R` schaltet zwischen beiden um, `C` erzeugt Kopien
//! statt die Originale zu verändern.

use glam::DVec2;

use super::{
    capture_selection, DraftTool, InteractionContext, PreviewShape, ToolFlow, ToolKey, ToolKind,
};
use crate::app::store::ShapeStore;
use crate::core::geometry::direction_deg;
use crate::core::shape::{Drawing, Shape, ShapeGeometry, ShapeId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TransformState {
    PickBase,
    Transforming,
}

pub struct TransformTool {
    state: TransformState,
    base: Option<DVec2>,
    rotate: bool,
    copy: bool,
    snapshot: Vec<Shape>,
}

impl TransformTool {
    pub fn new() -> Self {
        Self {
            state: TransformState::PickBase,
            base: None,
            rotate: false,
            copy: false,
            snapshot: Vec::new(),
        }
    }

    /// Wendet die aktuelle Transformation auf eine Geometrie an.
    fn transformed(&self, geometry: &ShapeGeometry, base: DVec2, cursor: DVec2) -> ShapeGeometry {
        if self.rotate {
            geometry.rotated(base, direction_deg(base, cursor))
        } else {
            geometry.translated(cursor - base)
        }
    }

    fn commit(
        &mut self,
        cursor: DVec2,
        ctx: &mut InteractionContext,
        store: &mut dyn ShapeStore,
    ) -> ToolFlow {
        let Some(base) = self.base else {
            return ToolFlow::Continue;
        };
        if self.rotate && base.distance(cursor) <= f64::EPSILON {
            // Winkel undefiniert, Klick ignorieren
            return ToolFlow::Continue;
        }
        let ids: Vec<ShapeId> = self.snapshot.iter().map(|s| s.id).collect();
        let result = match (self.copy, self.rotate) {
            (false, false) => store.translate_shapes(&ids, cursor - base),
            (false, true) => store.rotate_shapes(&ids, base, direction_deg(base, cursor)),
            (true, false) => store.copy_shapes(&ids, cursor - base).map(|_| ()),
            (true, true) => self.snapshot.iter().try_for_each(|s| {
                store
                    .add_shape(s.geometry.rotated(base, direction_deg(base, cursor)))
                    .map(|_| ())
            }),
        };
        match result {
            Ok(()) => {
                self.reset();
                ctx.clear_transient();
                ToolFlow::Committed
            }
            Err(err) => {
                log::warn!("Transformation fehlgeschlagen: {err:#}");
                ToolFlow::Continue
            }
        }
    }
}

impl Default for TransformTool {
    fn default() -> Self {
        Self::new()
    }
}

impl DraftTool for TransformTool {
    fn kind(&self) -> ToolKind {
        ToolKind::Transform
    }

    fn status_text(&self) -> &str {
        match (self.state, self.rotate) {
            (TransformState::PickBase, _) => "Basispunkt wählen",
            (TransformState::Transforming, false) => "Zielpunkt wählen (R: Rotieren, C: Kopie)",
            (TransformState::Transforming, true) => "Drehwinkel per Klick (R: Verschieben, C: Kopie)",
        }
    }

    fn activate(&mut self, drawing: &Drawing, ctx: &mut InteractionContext) {
        self.reset();
        self.snapshot = capture_selection(drawing, ctx);
    }

    fn on_pointer_down(
        &mut self,
        pos: DVec2,
        _drawing: &Drawing,
        ctx: &mut InteractionContext,
        store: &mut dyn ShapeStore,
    ) -> ToolFlow {
        if self.snapshot.is_empty() {
            return ToolFlow::Continue;
        }
        match self.state {
            TransformState::PickBase => {
                self.base = Some(pos);
                ctx.snap_base_point = Some(pos);
                self.state = TransformState::Transforming;
                ToolFlow::Continue
            }
            TransformState::Transforming => self.commit(pos, ctx, store),
        }
    }

    fn on_pointer_move(&mut self, pos: DVec2, _drawing: &Drawing, ctx: &mut InteractionContext) {
        ctx.preview.clear();
        let Some(base) = self.base else {
            return;
        };
        if self.rotate && base.distance(pos) <= f64::EPSILON {
            return;
        }
        ctx.preview.extend(
            self.snapshot
                .iter()
                .map(|s| PreviewShape::new(self.transformed(&s.geometry, base, pos))),
        );
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
            ToolKey::ToggleCopy => self.copy = !self.copy,
            ToolKey::ToggleRotate => self.rotate = !self.rotate,
            _ => return ToolFlow::Continue,
        }
        // Der Modus-Wechsel wirkt sofort auf die Vorschau
        self.on_pointer_move(cursor, drawing, ctx);
        ToolFlow::Continue
    }

    fn reset(&mut self) {
        self.state = TransformState::PickBase;
        self.base = None;
        self.rotate = false;
        self.copy = false;
        self.snapshot.clear();
    }

    fn has_pending_input(&self) -> bool {
        self.state != TransformState::PickBase
    }
}
