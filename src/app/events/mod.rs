//! Eingabe-Events des Editors.

mod intent;

pub use intent::EditorIntent;
