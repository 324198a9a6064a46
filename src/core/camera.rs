//! Viewport-Transformation: affine Welt↔Screen-Abbildung mit Pan und Zoom.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Affine 2D-Ansicht: `screen = world * zoom + pan`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Viewport {
    /// Zoom-Faktor (1.0 = 1 Welt-Einheit pro Pixel)
    pub zoom: f64,
    /// Pan-Versatz in Screen-Pixeln
    pub pan: DVec2,
    /// Aktuelle Viewport-Größe in Pixel
    pub viewport_size: DVec2,
}

impl Viewport {
    /// Minimaler Zoom-Faktor.
    pub const ZOOM_MIN: f64 = 0.02;
    /// Maximaler Zoom-Faktor.
    pub const ZOOM_MAX: f64 = 50.0;

    /// Erstellt einen Viewport mit Zoom 1 und ohne Versatz.
    pub fn new() -> Self {
        Self {
            zoom: 1.0,
            pan: DVec2::ZERO,
            viewport_size: DVec2::ZERO,
        }
    }

    /// Effektive (zoom, pan)-Werte; fällt bei nicht-finitem Zustand auf
    /// `zoom=1, pan=0` zurück, damit NaN nie ins Rendering oder den
    /// Hit-Test propagiert.
    fn effective(&self) -> (f64, DVec2) {
        if self.zoom.is_finite() && self.zoom > 0.0 && self.pan.is_finite() {
            (self.zoom, self.pan)
        } else {
            (1.0, DVec2::ZERO)
        }
    }

    /// Repariert nicht-finite Zustände in-place.
    pub fn sanitize(&mut self) {
        let (zoom, pan) = self.effective();
        self.zoom = zoom;
        self.pan = pan;
    }

    /// Welt → Screen.
    pub fn world_to_screen(&self, world: DVec2) -> DVec2 {
        let (zoom, pan) = self.effective();
        world * zoom + pan
    }

    /// Screen → Welt.
    pub fn screen_to_world(&self, screen: DVec2) -> DVec2 {
        let (zoom, pan) = self.effective();
        (screen - pan) / zoom
    }

    /// Rechnet eine Pixel-Toleranz in Welt-Einheiten um.
    pub fn world_tolerance(&self, pixel_tolerance: f64) -> f64 {
        let (zoom, _) = self.effective();
        pixel_tolerance / zoom
    }

    /// Verschiebt die Ansicht um ein Screen-Delta.
    pub fn pan_by(&mut self, delta_screen: DVec2) {
        self.sanitize();
        self.pan += delta_screen;
        self.sanitize();
    }

    /// Multipliziert den Zoom (geklemmt auf `[ZOOM_MIN, ZOOM_MAX]`).
    pub fn zoom_by(&mut self, factor: f64) {
        self.sanitize();
        self.zoom = (self.zoom * factor).clamp(Self::ZOOM_MIN, Self::ZOOM_MAX);
        self.sanitize();
    }

    /// Zoomt auf einen Screen-Ankerpunkt.
    ///
    /// Der Welt-Punkt unter dem Anker bleibt unter dem Anker: erst den
    /// Welt-Punkt vor der Faktor-Änderung bestimmen, dann den neuen Zoom
    /// anwenden und `pan` so nachziehen, dass derselbe Welt-Punkt wieder
    /// auf den Anker abgebildet wird.
    pub fn zoom_at(&mut self, anchor_screen: DVec2, factor: f64) {
        self.sanitize();
        let world_under_anchor = self.screen_to_world(anchor_screen);
        self.zoom_by(factor);
        self.pan = anchor_screen - world_under_anchor * self.zoom;
        self.sanitize();
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new()
    }
}
