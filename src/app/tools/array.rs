//! Anordnungs-Werkzeug: rechteckiges Raster oder polare Anordnung.
//!
//! Die Konfiguration (Zeilen/Spalten/Abstand bzw. Anzahl/Gesamtwinkel)
//! wird programmatisch gesetzt und per Tasten nachjustiert. Polar
//! braucht zusätzlich einen Zentrumsklick. Der Commit erzeugt eine
//! Store-Kopie pro Element; das Original bleibt unberührt.

use glam::DVec2;

use super::{
    capture_selection, DraftTool, InteractionContext, PreviewShape, ToolFlow, ToolKey, ToolKind,
};
use crate::app::store::ShapeStore;
use crate::core::shape::{Drawing, Shape, ShapeId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrayMode {
    Rectangular,
    Polar,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ArrayState {
    Configure,
    PickCenter,
    Preview,
}

pub struct ArrayTool {
    state: ArrayState,
    mode: ArrayMode,
    rows: usize,
    cols: usize,
    spacing: DVec2,
    count: usize,
    sweep_deg: f64,
    center: Option<DVec2>,
    snapshot: Vec<Shape>,
}

impl ArrayTool {
    pub fn new() -> Self {
        Self {
            state: ArrayState::Configure,
            mode: ArrayMode::Rectangular,
            rows: 2,
            cols: 2,
            spacing: DVec2::new(10.0, 10.0),
            count: 6,
            sweep_deg: 360.0,
            center: None,
            snapshot: Vec::new(),
        }
    }

    /// Rechteck-Konfiguration setzen und in die Vorschau wechseln.
    pub fn configure_rectangular(&mut self, rows: usize, cols: usize, spacing: DVec2) {
        self.mode = ArrayMode::Rectangular;
        self.rows = rows.max(1);
        self.cols = cols.max(1);
        self.spacing = spacing;
        self.state = ArrayState::Preview;
    }

    /// Polar-Konfiguration setzen; das Zentrum folgt per Klick.
    pub fn configure_polar(&mut self, count: usize, sweep_deg: f64) {
        self.mode = ArrayMode::Polar;
        self.count = count.max(2);
        self.sweep_deg = sweep_deg;
        self.state = ArrayState::PickCenter;
    }

    /// Versätze aller Kopien im Rechteck-Modus (ohne das Original).
    fn rectangular_offsets(&self) -> Vec<DVec2> {
        let mut offsets = Vec::new();
        for row in 0..self.rows {
            for col in 0..self.cols {
                if row == 0 && col == 0 {
                    continue;
                }
                offsets.push(DVec2::new(
                    col as f64 * self.spacing.x,
                    row as f64 * self.spacing.y,
                ));
            }
        }
        offsets
    }

    /// Drehwinkel aller Kopien im Polar-Modus (ohne das Original).
    /// Bei vollen 360° bleibt die letzte Position frei (sonst läge die
    /// letzte Kopie auf dem Original).
    fn polar_angles(&self) -> Vec<f64> {
        let step = if (self.sweep_deg - 360.0).abs() < 1e-9 {
            self.sweep_deg / self.count as f64
        } else {
            self.sweep_deg / (self.count - 1) as f64
        };
        (1..self.count).map(|k| step * k as f64).collect()
    }

    fn commit(&mut self, ctx: &mut InteractionContext, store: &mut dyn ShapeStore) -> ToolFlow {
        let ids: Vec<ShapeId> = self.snapshot.iter().map(|s| s.id).collect();
        let result = match self.mode {
            ArrayMode::Rectangular => self
                .rectangular_offsets()
                .into_iter()
                .try_for_each(|delta| store.copy_shapes(&ids, delta).map(|_| ())),
            ArrayMode::Polar => {
                let Some(center) = self.center else {
                    return ToolFlow::Continue;
                };
                self.polar_angles().into_iter().try_for_each(|angle| {
                    let copies = store.copy_shapes(&ids, DVec2::ZERO)?;
                    store.rotate_shapes(&copies, center, angle)
                })
            }
        };
        match result {
            Ok(()) => {
                self.reset();
                ctx.clear_transient();
                ToolFlow::Committed
            }
            Err(err) => {
                log::warn!("Anordnung fehlgeschlagen: {err:#}");
                ToolFlow::Continue
            }
        }
    }

    fn rebuild_preview(&self, ctx: &mut InteractionContext) {
        ctx.preview.clear();
        if self.state != ArrayState::Preview {
            return;
        }
        match self.mode {
            ArrayMode::Rectangular => {
                for delta in self.rectangular_offsets() {
                    ctx.preview.extend(
                        self.snapshot
                            .iter()
                            .map(|s| PreviewShape::new(s.geometry.translated(delta))),
                    );
                }
            }
            ArrayMode::Polar => {
                let Some(center) = self.center else {
                    return;
                };
                for angle in self.polar_angles() {
                    ctx.preview.extend(
                        self.snapshot
                            .iter()
                            .map(|s| PreviewShape::new(s.geometry.rotated(center, angle))),
                    );
                }
            }
        }
    }
}

impl Default for ArrayTool {
    fn default() -> Self {
        Self::new()
    }
}

impl DraftTool for ArrayTool {
    fn kind(&self) -> ToolKind {
        ToolKind::Array
    }

    fn status_text(&self) -> &str {
        match self.state {
            ArrayState::Configure => "Anordnung konfigurieren",
            ArrayState::PickCenter => "Zentrum der polaren Anordnung wählen",
            ArrayState::Preview => "Klick bestätigt die Anordnung (+/-: Anzahl)",
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
            ArrayState::Configure => {
                // Mit der aktuellen Konfiguration weiterschalten
                self.state = match self.mode {
                    ArrayMode::Rectangular => ArrayState::Preview,
                    ArrayMode::Polar => ArrayState::PickCenter,
                };
                self.rebuild_preview(ctx);
                ToolFlow::Continue
            }
            ArrayState::PickCenter => {
                self.center = Some(pos);
                ctx.snap_base_point = Some(pos);
                self.state = ArrayState::Preview;
                self.rebuild_preview(ctx);
                ToolFlow::Continue
            }
            ArrayState::Preview => self.commit(ctx, store),
        }
    }

    fn on_pointer_move(&mut self, _pos: DVec2, _drawing: &Drawing, ctx: &mut InteractionContext) {
        self.rebuild_preview(ctx);
    }

    fn on_key(
        &mut self,
        key: ToolKey,
        _cursor: DVec2,
        _drawing: &Drawing,
        ctx: &mut InteractionContext,
        _store: &mut dyn ShapeStore,
    ) -> ToolFlow {
        match (key, self.mode) {
            (ToolKey::Increase, ArrayMode::Rectangular) => self.cols += 1,
            (ToolKey::Decrease, ArrayMode::Rectangular) => self.cols = (self.cols - 1).max(1),
            (ToolKey::Increase, ArrayMode::Polar) => self.count += 1,
            (ToolKey::Decrease, ArrayMode::Polar) => self.count = (self.count - 1).max(2),
            _ => return ToolFlow::Continue,
        }
        self.rebuild_preview(ctx);
        ToolFlow::Continue
    }

    fn reset(&mut self) {
        self.state = ArrayState::Configure;
        self.center = None;
        self.snapshot.clear();
    }

    fn has_pending_input(&self) -> bool {
        self.state != ArrayState::Configure
    }
}
