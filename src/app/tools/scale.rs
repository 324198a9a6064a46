//! Skalier-Werkzeug mit Direkt- und Referenzmodus.
//!
//! Direktmodus: der Faktor ist der Welt-Abstand vom Basispunkt zum
//! Klick (1 Zeichnungseinheit ⇒ Faktor 1). Referenzmodus: zwei Klicks
//! messen eine Referenzlänge, der dritte gibt die neue Länge vor,
//! Faktor = neue Länge / Referenzlänge.

use glam::DVec2;

use super::{
    capture_selection, DraftTool, InteractionContext, PreviewShape, ToolFlow, ToolKey, ToolKind,
};
use crate::app::store::ShapeStore;
use crate::core::shape::{Drawing, Shape, ShapeId};

/// Faktoren unterhalb dieser Schwelle gelten als degeneriert.
const MIN_FACTOR: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScaleState {
    PickBase,
    PickFactor,
    RefFirst,
    RefSecond,
    RefNew,
}

pub struct ScaleTool {
    state: ScaleState,
    base: Option<DVec2>,
    ref_first: Option<DVec2>,
    ref_length: Option<f64>,
    reference: bool,
    copy: bool,
    snapshot: Vec<Shape>,
}

impl ScaleTool {
    pub fn new() -> Self {
        Self {
            state: ScaleState::PickBase,
            base: None,
            ref_first: None,
            ref_length: None,
            reference: false,
            copy: false,
            snapshot: Vec::new(),
        }
    }

    /// Faktor für die aktuelle Cursorposition, zustandsabhängig.
    fn factor_at(&self, cursor: DVec2) -> Option<f64> {
        let base = self.base?;
        let factor = match self.state {
            ScaleState::PickFactor => base.distance(cursor),
            ScaleState::RefNew => base.distance(cursor) / self.ref_length?,
            _ => return None,
        };
        (factor.is_finite() && factor > MIN_FACTOR).then_some(factor)
    }

    fn commit(
        &mut self,
        factor: f64,
        ctx: &mut InteractionContext,
        store: &mut dyn ShapeStore,
    ) -> ToolFlow {
        let Some(base) = self.base else {
            return ToolFlow::Continue;
        };
        let result = if self.copy {
            self.snapshot.iter().try_for_each(|s| {
                store
                    .add_shape(s.geometry.scaled(base, factor))
                    .map(|_| ())
            })
        } else {
            let ids: Vec<ShapeId> = self.snapshot.iter().map(|s| s.id).collect();
            store.scale_shapes(&ids, base, factor)
        };
        match result {
            Ok(()) => {
                self.reset();
                ctx.clear_transient();
                ToolFlow::Committed
            }
            Err(err) => {
                // Zustand bleibt stehen, der Nutzer kann erneut klicken
                log::warn!("Skalieren fehlgeschlagen: {err:#}");
                ToolFlow::Continue
            }
        }
    }
}

impl Default for ScaleTool {
    fn default() -> Self {
        Self::new()
    }
}

impl DraftTool for ScaleTool {
    fn kind(&self) -> ToolKind {
        ToolKind::Scale
    }

    fn status_text(&self) -> &str {
        match self.state {
            ScaleState::PickBase => "Basispunkt wählen",
            ScaleState::PickFactor => "Faktor per Klick bestimmen (R: Referenz, C: Kopie)",
            ScaleState::RefFirst => "Ersten Referenzpunkt wählen",
            ScaleState::RefSecond => "Zweiten Referenzpunkt wählen",
            ScaleState::RefNew => "Neue Länge wählen",
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
            ScaleState::PickBase => {
                self.base = Some(pos);
                ctx.snap_base_point = Some(pos);
                self.state = if self.reference {
                    ScaleState::RefFirst
                } else {
                    ScaleState::PickFactor
                };
                ToolFlow::Continue
            }
            ScaleState::RefFirst => {
                self.ref_first = Some(pos);
                self.state = ScaleState::RefSecond;
                ToolFlow::Continue
            }
            ScaleState::RefSecond => {
                let Some(first) = self.ref_first else {
                    return ToolFlow::Continue;
                };
                let length = first.distance(pos);
                if length <= MIN_FACTOR {
                    log::warn!("Referenzlänge 0, Punkt erneut wählen");
                    return ToolFlow::Continue;
                }
                self.ref_length = Some(length);
                self.state = ScaleState::RefNew;
                ToolFlow::Continue
            }
            ScaleState::PickFactor | ScaleState::RefNew => match self.factor_at(pos) {
                Some(factor) => self.commit(factor, ctx, store),
                None => ToolFlow::Continue,
            },
        }
    }

    fn on_pointer_move(&mut self, pos: DVec2, _drawing: &Drawing, ctx: &mut InteractionContext) {
        ctx.preview.clear();
        let (Some(base), Some(factor)) = (self.base, self.factor_at(pos)) else {
            return;
        };
        ctx.preview.extend(
            self.snapshot
                .iter()
                .map(|s| PreviewShape::new(s.geometry.scaled(base, factor))),
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
            ToolKey::ToggleReference => {
                // Ab dem zweiten Referenzpunkt ist der Pfad festgelegt
                if matches!(self.state, ScaleState::RefSecond | ScaleState::RefNew) {
                    return ToolFlow::Continue;
                }
                self.reference = !self.reference;
                match self.state {
                    ScaleState::PickFactor if self.reference => self.state = ScaleState::RefFirst,
                    ScaleState::RefFirst if !self.reference => self.state = ScaleState::PickFactor,
                    _ => {}
                }
            }
            _ => return ToolFlow::Continue,
        }
        // Umschalten wirkt sofort auf die Vorschau, nicht erst bei der
        // nächsten Mausbewegung
        self.on_pointer_move(cursor, drawing, ctx);
        ToolFlow::Continue
    }

    fn reset(&mut self) {
        self.state = ScaleState::PickBase;
        self.base = None;
        self.ref_first = None;
        self.ref_length = None;
        self.reference = false;
        self.copy = false;
        self.snapshot.clear();
    }

    fn has_pending_input(&self) -> bool {
        self.state != ScaleState::PickBase
    }
}
