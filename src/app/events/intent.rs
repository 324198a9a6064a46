//! Editor-Intents: Eingaben aus UI/System ohne eigene Mutationslogik.
//!
//! Der Host (Rendering-Oberfläche) übersetzt rohe Maus-/Tastatur-
//! Events in diese geschlossene Menge; der Controller ordnet sie den
//! Use-Cases und dem aktiven Werkzeug zu.

use glam::DVec2;

use crate::app::tools::{ToolKey, ToolKind};
use crate::core::snap::SnapSettings;

#[derive(Debug, Clone)]
pub enum EditorIntent {
    /// Maustaste gedrückt (Screen-Pixel); `additive` = Shift gehalten
    PointerPressed { screen_pos: DVec2, additive: bool },
    /// Mausbewegung (Screen-Pixel)
    PointerMoved { screen_pos: DVec2 },
    /// Maustaste losgelassen; `additive` = Shift gehalten
    PointerReleased { screen_pos: DVec2, additive: bool },
    /// Werkzeug-relevante Taste (bereits auf Bedeutung gemappt)
    KeyPressed { key: ToolKey },
    /// Escape: Werkzeug abbrechen, zurück zur Selektion
    EscapePressed,
    /// Kamera um ein Screen-Delta verschieben
    CameraPan { delta_screen: DVec2 },
    /// Kamera zoomen, optional auf einen Screen-Ankerpunkt
    CameraZoom {
        factor: f64,
        focus_screen: Option<DVec2>,
    },
    /// Viewport-Größe hat sich geändert
    ViewportResized { size: DVec2 },
    /// Werkzeug gewechselt
    ToolSelected { tool: ToolKind },
    /// Fang-Konfiguration geändert
    SnapSettingsChanged { settings: SnapSettings },
}
