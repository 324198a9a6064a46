//! Interaktive Schicht: Zustand, Events, Werkzeuge und Controller.

pub mod controller;
pub mod events;
pub mod state;
pub mod store;
pub mod tools;
pub mod use_cases;

pub use controller::EditorController;
pub use events::EditorIntent;
pub use state::{AppState, EditorToolState, ViewState};
pub use store::{MemoryStore, ShapeStore};
pub use tools::{
    DraftTool, InteractionContext, PreviewShape, ToolFlow, ToolKey, ToolKind, ToolRegistry,
};
