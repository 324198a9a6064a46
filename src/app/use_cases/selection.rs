//! Use-Case-Funktionen für Selektion (Pick und Rechteck).

use glam::DVec2;

use crate::app::state::AppState;
use crate::core::box_select::select_in_box;

/// Einzel-Pick am Welt-Punkt.
///
/// Nicht-additiv ersetzt die Selektion; additiv toggelt das getroffene
/// Shape. Ein Pick ins Leere leert die Selektion (nicht-additiv).
pub fn pick(state: &mut AppState, world: DVec2, additive: bool) {
    let hit = state.drawing.hit_test(world, state.interaction.pick_tolerance);
    if !additive {
        state.interaction.selection.clear();
    }
    if let Some(id) = hit {
        if additive && state.interaction.selection.contains(&id) {
            state.interaction.selection.shift_remove(&id);
        } else {
            state.interaction.selection.insert(id);
        }
    }
}

/// Rechteck-Selektion; Fenster-/Kreuzungssemantik folgt der
/// Zugrichtung (`core::box_select`).
pub fn box_select(state: &mut AppState, from: DVec2, to: DVec2, additive: bool) {
    let hits = select_in_box(&state.drawing.shapes, from, to);
    if !additive {
        state.interaction.selection.clear();
    }
    state.interaction.selection.extend(hits);
}

/// Hover-Shape unter dem Cursor aktualisieren.
pub fn update_hover(state: &mut AppState, world: DVec2) {
    state.interaction.hover = state
        .drawing
        .hit_test(world, state.interaction.pick_tolerance);
}

/// Selektion leeren.
pub fn clear(state: &mut AppState) {
    state.interaction.selection.clear();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::shape::{LayerId, Shape, ShapeGeometry, ShapeId};

    fn state_with_lines() -> AppState {
        let mut state = AppState::new();
        state.interaction.pick_tolerance = 0.5;
        state.drawing.shapes = vec![
            Shape::new(
                ShapeId(1),
                ShapeGeometry::Line {
                    start: DVec2::new(2.0, 2.0),
                    end: DVec2::new(8.0, 2.0),
                },
                LayerId(0),
            ),
            Shape::new(
                ShapeId(2),
                ShapeGeometry::Line {
                    start: DVec2::new(-5.0, 5.0),
                    end: DVec2::new(5.0, 5.0),
                },
                LayerId(0),
            ),
        ];
        state
    }

    #[test]
    fn pick_replaces_selection() {
        let mut state = state_with_lines();
        state.interaction.selection.insert(ShapeId(2));

        pick(&mut state, DVec2::new(5.0, 2.1), false);

        assert_eq!(state.interaction.selection.len(), 1);
        assert!(state.interaction.selection.contains(&ShapeId(1)));
    }

    #[test]
    fn additive_pick_toggles() {
        let mut state = state_with_lines();

        pick(&mut state, DVec2::new(5.0, 2.1), true);
        pick(&mut state, DVec2::new(0.0, 5.1), true);
        assert_eq!(state.interaction.selection.len(), 2);

        pick(&mut state, DVec2::new(5.0, 2.1), true);
        assert_eq!(state.interaction.selection.len(), 1);
        assert!(state.interaction.selection.contains(&ShapeId(2)));
    }

    #[test]
    fn empty_pick_clears_selection() {
        let mut state = state_with_lines();
        state.interaction.selection.insert(ShapeId(1));

        pick(&mut state, DVec2::new(50.0, 50.0), false);

        assert!(state.interaction.selection.is_empty());
    }

    #[test]
    fn window_box_selects_contained_only() {
        let mut state = state_with_lines();

        box_select(&mut state, DVec2::ZERO, DVec2::new(10.0, 10.0), false);

        assert_eq!(state.interaction.selection.len(), 1);
        assert!(state.interaction.selection.contains(&ShapeId(1)));
    }

    #[test]
    fn crossing_box_also_selects_crossers() {
        let mut state = state_with_lines();

        box_select(&mut state, DVec2::new(10.0, 10.0), DVec2::ZERO, false);

        assert_eq!(state.interaction.selection.len(), 2);
    }
}
