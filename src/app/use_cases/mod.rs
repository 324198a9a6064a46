//! Use-Case-Funktionen: freie Funktionen über `&mut AppState`.

pub mod selection;
pub mod viewport;
