//! Draftboard — Geometrie-Kern eines interaktiven 2D-Zeichnungseditors.
//!
//! Kern-Funktionalität als Library: Viewport-Transformation, Shape-
//! Modell mit Hit-Testing, priorisierter Objektfang, Fenster-/
//! Kreuzungs-Selektion, Tangentenbogen-Konstruktion und die
//! Werkzeug-Zustandsmaschinen der Zeichenbefehle.

pub mod app;
pub mod core;

pub use app::{
    AppState, EditorController, EditorIntent, EditorToolState, InteractionContext, MemoryStore,
    PreviewShape, ShapeStore, ToolKey, ToolKind, ViewState,
};
pub use core::{
    Drawing, Layer, LayerId, Shape, ShapeGeometry, ShapeId, SnapKind, SnapPoint, SnapSettings,
    Style, Viewport,
};
