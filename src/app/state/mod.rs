//! Aufgeteilter Anwendungszustand (View / Interaktion / Editor).

mod app_state;
mod editor;
mod view;

pub use app_state::AppState;
pub use editor::EditorToolState;
pub use view::ViewState;
