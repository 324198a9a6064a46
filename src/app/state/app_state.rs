//! Hauptzustand der Anwendung.

use crate::app::tools::InteractionContext;
use crate::core::shape::Drawing;

use super::{EditorToolState, ViewState};

/// Hauptzustand: Zeichnungs-Snapshot plus View-, Interaktions- und
/// Editor-Teilzustand.
///
/// `drawing` ist die Read-only-Momentaufnahme des Stores; der
/// Controller spiegelt sie nach jedem erfolgreichen Commit neu.
pub struct AppState {
    /// Aktueller Zeichnungs-Snapshot
    pub drawing: Drawing,
    /// View-State (Viewport-Transformation)
    pub view: ViewState,
    /// Geteilter Interaktionszustand der Werkzeuge
    pub interaction: InteractionContext,
    /// Editor-Werkzeug-State
    pub editor: EditorToolState,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State.
    pub fn new() -> Self {
        Self {
            drawing: Drawing::new(),
            view: ViewState::new(),
            interaction: InteractionContext::new(),
            editor: EditorToolState::new(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
