//! Polylinien-Werkzeug: Klick für Klick Stützpunkte setzen.
//!
//! Jeder Klick hängt einen Punkt an, die Vorschau zeigt die bisherige
//! Kette plus Gummiband-Segment zum Cursor. `Enter` committet offen,
//! `Close` schließt den Zug und committet.

use glam::DVec2;

use super::{DraftTool, InteractionContext, PreviewShape, ToolFlow, ToolKey, ToolKind};
use crate::app::store::ShapeStore;
use crate::core::shape::{Drawing, ShapeGeometry};

pub struct PolylineTool {
    points: Vec<DVec2>,
}

impl PolylineTool {
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    fn commit(
        &mut self,
        closed: bool,
        ctx: &mut InteractionContext,
        store: &mut dyn ShapeStore,
    ) -> ToolFlow {
        let min_points = if closed { 3 } else { 2 };
        if self.points.len() < min_points {
            return ToolFlow::Continue;
        }
        match store.add_shape(ShapeGeometry::Polyline {
            points: self.points.clone(),
            closed,
        }) {
            Ok(_) => {
                self.reset();
                ctx.clear_transient();
                ToolFlow::Committed
            }
            Err(err) => {
                log::warn!("Polylinie konnte nicht angelegt werden: {err:#}");
                ToolFlow::Continue
            }
        }
    }
}

impl Default for PolylineTool {
    fn default() -> Self {
        Self::new()
    }
}

impl DraftTool for PolylineTool {
    fn kind(&self) -> ToolKind {
        ToolKind::Polyline
    }

    fn status_text(&self) -> &str {
        if self.points.is_empty() {
            "Startpunkt wählen"
        } else {
            "Nächsten Punkt wählen (Enter: fertig, C: schließen)"
        }
    }

    fn on_pointer_down(
        &mut self,
        pos: DVec2,
        _drawing: &Drawing,
        ctx: &mut InteractionContext,
        _store: &mut dyn ShapeStore,
    ) -> ToolFlow {
        // Doppelklicks auf denselben Punkt erzeugen keine Null-Segmente
        if self.points.last() != Some(&pos) {
            self.points.push(pos);
        }
        // Der letzte Punkt ist Anker für Lot- und Tangentenfang
        ctx.snap_base_point = Some(pos);
        ToolFlow::Continue
    }

    fn on_pointer_move(&mut self, pos: DVec2, _drawing: &Drawing, ctx: &mut InteractionContext) {
        ctx.preview.clear();
        if self.points.is_empty() {
            return;
        }
        let mut chain = self.points.clone();
        chain.push(pos);
        ctx.preview.push(PreviewShape::new(ShapeGeometry::Polyline {
            points: chain,
            closed: false,
        }));
    }

    fn on_key(
        &mut self,
        key: ToolKey,
        _cursor: DVec2,
        _drawing: &Drawing,
        ctx: &mut InteractionContext,
        store: &mut dyn ShapeStore,
    ) -> ToolFlow {
        match key {
            ToolKey::Confirm => self.commit(false, ctx, store),
            ToolKey::Close => self.commit(true, ctx, store),
            _ => ToolFlow::Continue,
        }
    }

    fn reset(&mut self) {
        self.points.clear();
    }

    fn has_pending_input(&self) -> bool {
        !self.points.is_empty()
    }
}
