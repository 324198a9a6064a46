//! Trait-basiertes Werkzeug-System für die interaktiven Zeichenbefehle.
//!
//! Jedes Werkzeug implementiert den `DraftTool`-Trait als kleine
//! Zustandsmaschine und wird einmalig in der `ToolRegistry`
//! registriert. Werkzeuge lesen den Zeichnungs-Snapshot, schreiben
//! Vorschau-Geometrie in den `InteractionContext` und committen
//! ausschließlich über den `ShapeStore`.

pub mod array;
pub mod fillet;
pub mod polyline;
pub mod scale;
pub mod transform;

use glam::DVec2;
use indexmap::IndexSet;

use crate::app::store::ShapeStore;
use crate::core::shape::{Drawing, Shape, ShapeGeometry, ShapeId, Style};
use crate::core::snap::SnapPoint;

// ── Typen ────────────────────────────────────────────────────────

/// Die auswählbaren Werkzeuge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolKind {
    /// Standard: Picken und Rechteck-Selektion
    Select,
    Scale,
    Transform,
    Array,
    Fillet,
    Polyline,
}

/// Werkzeug-relevante Tasten, vom Host bereits auf Bedeutungen gemappt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolKey {
    /// `C` — Kopier-Modus umschalten bzw. Polylinie schließen
    ToggleCopy,
    /// `R` — Referenz-Modus (Skalieren) umschalten
    ToggleReference,
    /// `R` — Rotieren statt Verschieben umschalten
    ToggleRotate,
    /// `Enter` — aktuelle Eingabe bestätigen
    Confirm,
    /// Polylinie schließen und bestätigen
    Close,
    /// Parameter erhöhen (Radius, Anzahl, …)
    Increase,
    /// Parameter verringern
    Decrease,
}

/// Rückgabe der Eingabe-Handler — steuert den Werkzeug-Flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolFlow {
    /// Eingabe registriert, Werkzeug bleibt aktiv
    Continue,
    /// Mutation erfolgreich committet, Werkzeug wurde zurückgesetzt
    Committed,
    /// Eingabe verworfen
    Cancelled,
}

/// Transiente Vorschau-Geometrie — trägt nie eine persistierte ID und
/// wird bei jeder Mausbewegung komplett neu abgeleitet.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewShape {
    pub geometry: ShapeGeometry,
    pub style: Option<Style>,
}

impl PreviewShape {
    pub fn new(geometry: ShapeGeometry) -> Self {
        Self {
            geometry,
            style: None,
        }
    }
}

/// Geteilter Interaktionszustand, explizit per `&mut` an jedes
/// Werkzeug gereicht statt als globaler Zustand.
#[derive(Debug, Default)]
pub struct InteractionContext {
    /// Selektierte Shape-IDs in deterministischer Reihenfolge
    pub selection: IndexSet<ShapeId>,
    /// Shape unter dem Cursor
    pub hover: Option<ShapeId>,
    /// Aktuelle Vorschau-Geometrie
    pub preview: Vec<PreviewShape>,
    /// Ankerpunkt des aktiven Werkzeugs (aktiviert Lot-/Tangentenfang)
    pub snap_base_point: Option<DVec2>,
    /// Zuletzt aufgelöster Fangpunkt (fürs Rendering des Markers)
    pub active_snap: Option<SnapPoint>,
    /// Pick-Toleranz in Welt-Einheiten, vom Controller pro Event
    /// aus Pixel-Toleranz und Zoom aktualisiert
    pub pick_tolerance: f64,
}

impl InteractionContext {
    pub fn new() -> Self {
        Self {
            pick_tolerance: 5.0,
            ..Default::default()
        }
    }

    /// Verwirft Vorschau und Werkzeug-Anker.
    pub fn clear_transient(&mut self) {
        self.preview.clear();
        self.snap_base_point = None;
        self.active_snap = None;
    }
}

// ── DraftTool-Trait ──────────────────────────────────────────────

/// Schnittstelle aller interaktiven Zeichenbefehle.
///
/// Pointer-Down schaltet den Zustand weiter und/oder committet;
/// Pointer-Move berechnet ausschließlich die Vorschau neu (aus dem bei
/// der Aktivierung eingefrorenen Snapshot, nie aus früheren
/// Vorschauen); Tasten schalten Untermodi um, ohne den Hauptzustand zu
/// ändern. Scheitert der Store beim Commit, bleibt der Zustand für
/// einen erneuten Versuch stehen.
pub trait DraftTool {
    fn kind(&self) -> ToolKind;

    /// Statustext für die Statuszeile (z. B. "Basispunkt wählen").
    fn status_text(&self) -> &str;

    /// Werkzeug-Aktivierung: Snapshot der Selektion einfrieren.
    fn activate(&mut self, _drawing: &Drawing, _ctx: &mut InteractionContext) {}

    /// Klick in Welt-Koordinaten (bereits gefangen, falls Snap aktiv).
    fn on_pointer_down(
        &mut self,
        pos: DVec2,
        drawing: &Drawing,
        ctx: &mut InteractionContext,
        store: &mut dyn ShapeStore,
    ) -> ToolFlow;

    /// Mausbewegung: Vorschau neu ableiten, keine Mutation.
    fn on_pointer_move(&mut self, pos: DVec2, drawing: &Drawing, ctx: &mut InteractionContext);

    /// Maustaste losgelassen (Standard: keine Wirkung).
    fn on_pointer_up(&mut self, _pos: DVec2, _ctx: &mut InteractionContext) {}

    /// Untermodus-Taste oder Bestätigung.
    fn on_key(
        &mut self,
        _key: ToolKey,
        _cursor: DVec2,
        _drawing: &Drawing,
        _ctx: &mut InteractionContext,
        _store: &mut dyn ShapeStore,
    ) -> ToolFlow {
        ToolFlow::Continue
    }

    /// Werkzeug-Wechsel: Zustand und transiente Daten verwerfen.
    fn deactivate(&mut self, ctx: &mut InteractionContext) {
        self.reset();
        ctx.clear_transient();
    }

    /// Zustand auf den Anfangszustand zurücksetzen (Escape, Commit).
    fn reset(&mut self);

    /// Hat das Werkzeug angefangene Eingaben (für die Escape-Logik)?
    fn has_pending_input(&self) -> bool;
}

/// Friert die aktuelle Selektion als Werkzeug-Snapshot ein, damit
/// Live-Transformationen nicht mutierten Zustand nachlesen.
pub fn capture_selection(drawing: &Drawing, ctx: &InteractionContext) -> Vec<Shape> {
    ctx.selection
        .iter()
        .filter_map(|id| drawing.shape(*id).cloned())
        .collect()
}

// ── ToolRegistry ─────────────────────────────────────────────────

/// Hält genau eine Instanz jedes Zeichenbefehls, einmalig konstruiert.
pub struct ToolRegistry {
    tools: Vec<Box<dyn DraftTool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self {
            tools: vec![
                Box::new(scale::ScaleTool::new()),
                Box::new(transform::TransformTool::new()),
                Box::new(array::ArrayTool::new()),
                Box::new(fillet::FilletTool::new()),
                Box::new(polyline::PolylineTool::new()),
            ],
        }
    }

    pub fn tool_mut(&mut self, kind: ToolKind) -> Option<&mut dyn DraftTool> {
        // Expliziter Loop: die Closure-Variante scheitert am Borrowck,
        // weil der &mut-Trait-Objekt-Reborrow invariant ist
        for tool in self.tools.iter_mut() {
            if tool.kind() == kind {
                return Some(tool.as_mut());
            }
        }
        None
    }

    pub fn tool(&self, kind: ToolKind) -> Option<&dyn DraftTool> {
        self.tools
            .iter()
            .find(|t| t.kind() == kind)
            .map(|t| t.as_ref())
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}
