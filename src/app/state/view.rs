//! View-bezogener Anwendungszustand.

use crate::core::camera::Viewport;

#[derive(Debug, Clone, Default)]
pub struct ViewState {
    /// Affine Welt↔Screen-Abbildung der Ansicht
    pub viewport: Viewport,
}

impl ViewState {
    /// Erstellt den Standard-View-Zustand.
    pub fn new() -> Self {
        Self {
            viewport: Viewport::new(),
        }
    }
}
