//! Use-Case-Funktionen für Viewport und Kamera.

use glam::DVec2;

use crate::app::state::AppState;

/// Aktualisiert die gespeicherte Viewport-Größe.
pub fn resize(state: &mut AppState, size: DVec2) {
    state.view.viewport.viewport_size = size;
}

/// Verschiebt die Ansicht um ein Screen-Delta.
pub fn pan(state: &mut AppState, delta_screen: DVec2) {
    state.view.viewport.pan_by(delta_screen);
}

/// Zoomt, optional auf einen Screen-Ankerpunkt.
pub fn zoom(state: &mut AppState, factor: f64, focus_screen: Option<DVec2>) {
    match focus_screen {
        Some(anchor) => state.view.viewport.zoom_at(anchor, factor),
        None => state.view.viewport.zoom_by(factor),
    }
}
