//! Editor-Werkzeug-Zustand: aktives Werkzeug und Fang-Konfiguration.

use crate::app::tools::ToolKind;
use crate::core::snap::SnapSettings;

#[derive(Debug, Clone)]
pub struct EditorToolState {
    /// Aktives Werkzeug
    pub active_tool: ToolKind,
    /// Fang-Konfiguration (pro-Art-Schalter, Rasterweite)
    pub snap: SnapSettings,
    /// Pick-Toleranz in Screen-Pixeln
    pub pick_tolerance_px: f64,
    /// Fang-Toleranz in Screen-Pixeln
    pub snap_tolerance_px: f64,
}

impl EditorToolState {
    pub fn new() -> Self {
        Self {
            active_tool: ToolKind::Select,
            snap: SnapSettings::default(),
            pick_tolerance_px: 5.0,
            snap_tolerance_px: 10.0,
        }
    }
}

impl Default for EditorToolState {
    fn default() -> Self {
        Self::new()
    }
}
