//! Editor-Controller: zentrale Zuordnung der Intents zu Use-Cases und
//! zum aktiven Werkzeug.
//!
//! Der Controller konvertiert Screen- in Welt-Koordinaten, löst vor
//! jeder Werkzeug-Eingabe den Objektfang auf und spiegelt nach jedem
//! erfolgreichen Commit den Store-Stand in den Zeichnungs-Snapshot.
//! Escape wird hier einheitlich behandelt: Werkzeug zurücksetzen,
//! Vorschau verwerfen, zurück zum Selektions-Werkzeug.

use glam::DVec2;

use super::events::EditorIntent;
use super::state::AppState;
use super::store::ShapeStore;
use super::tools::{ToolFlow, ToolKey, ToolKind, ToolRegistry};
use super::use_cases;
use crate::core::snap::find_snap_point;

pub struct EditorController {
    registry: ToolRegistry,
    /// Startpunkt eines Selektions-Drags in Welt-Koordinaten
    drag_origin: Option<DVec2>,
    /// Letzte Cursorposition in Welt-Koordinaten (für Tasten-Commits)
    last_cursor_world: DVec2,
}

impl EditorController {
    pub fn new() -> Self {
        Self {
            registry: ToolRegistry::new(),
            drag_origin: None,
            last_cursor_world: DVec2::ZERO,
        }
    }

    /// Statustext des aktiven Werkzeugs für die Statuszeile.
    pub fn status_text(&self, state: &AppState) -> &str {
        self.registry
            .tool(state.editor.active_tool)
            .map(|t| t.status_text())
            .unwrap_or("Objekte wählen")
    }

    /// Verarbeitet einen Intent.
    pub fn handle_intent(
        &mut self,
        state: &mut AppState,
        store: &mut dyn ShapeStore,
        intent: EditorIntent,
    ) {
        match intent {
            EditorIntent::ViewportResized { size } => use_cases::viewport::resize(state, size),
            EditorIntent::CameraPan { delta_screen } => {
                use_cases::viewport::pan(state, delta_screen)
            }
            EditorIntent::CameraZoom {
                factor,
                focus_screen,
            } => use_cases::viewport::zoom(state, factor, focus_screen),
            EditorIntent::SnapSettingsChanged { settings } => state.editor.snap = settings,
            EditorIntent::ToolSelected { tool } => self.select_tool(state, tool),
            EditorIntent::EscapePressed => self.cancel(state),
            EditorIntent::PointerPressed {
                screen_pos,
                additive: _,
            } => self.pointer_pressed(state, store, screen_pos),
            EditorIntent::PointerMoved { screen_pos } => self.pointer_moved(state, screen_pos),
            EditorIntent::PointerReleased {
                screen_pos,
                additive,
            } => self.pointer_released(state, screen_pos, additive),
            EditorIntent::KeyPressed { key } => self.key_pressed(state, store, key),
        }
    }

    fn select_tool(&mut self, state: &mut AppState, tool: ToolKind) {
        if state.editor.active_tool == tool {
            return;
        }
        if let Some(old) = self.registry.tool_mut(state.editor.active_tool) {
            old.deactivate(&mut state.interaction);
        }
        state.editor.active_tool = tool;
        state.interaction.clear_transient();
        self.drag_origin = None;
        if let Some(new_tool) = self.registry.tool_mut(tool) {
            new_tool.activate(&state.drawing, &mut state.interaction);
        }
    }

    /// Escape: synchron abbrechen, zurück zur Selektion.
    fn cancel(&mut self, state: &mut AppState) {
        if let Some(tool) = self.registry.tool_mut(state.editor.active_tool) {
            tool.reset();
        }
        state.interaction.clear_transient();
        state.editor.active_tool = ToolKind::Select;
        self.drag_origin = None;
    }

    /// Cursor in Welt-Koordinaten, Pick-Toleranz nachgeführt.
    fn to_world(&mut self, state: &mut AppState, screen_pos: DVec2) -> DVec2 {
        let world = state.view.viewport.screen_to_world(screen_pos);
        state.interaction.pick_tolerance = state
            .view
            .viewport
            .world_tolerance(state.editor.pick_tolerance_px);
        self.last_cursor_world = world;
        world
    }

    /// Fang auflösen; Ergebnis ersetzt ggf. die rohe Cursorposition.
    fn resolve_snap(&self, state: &mut AppState, world: DVec2) -> DVec2 {
        let snap = find_snap_point(
            world,
            state.editor.snap_tolerance_px,
            state.view.viewport.zoom,
            &state.editor.snap,
            &state.drawing.shapes,
            state.interaction.snap_base_point,
        );
        state.interaction.active_snap = snap;
        snap.map(|s| s.point).unwrap_or(world)
    }

    fn pointer_pressed(&mut self, state: &mut AppState, store: &mut dyn ShapeStore, screen: DVec2) {
        let world = self.to_world(state, screen);
        if state.editor.active_tool == ToolKind::Select {
            self.drag_origin = Some(world);
            return;
        }
        let pos = self.resolve_snap(state, world);
        if let Some(tool) = self.registry.tool_mut(state.editor.active_tool) {
            let flow = tool.on_pointer_down(pos, &state.drawing, &mut state.interaction, store);
            if flow == ToolFlow::Committed {
                sync_snapshot(state, store);
            }
        }
    }

    fn pointer_moved(&mut self, state: &mut AppState, screen: DVec2) {
        let world = self.to_world(state, screen);
        if state.editor.active_tool == ToolKind::Select {
            use_cases::selection::update_hover(state, world);
            return;
        }
        let pos = self.resolve_snap(state, world);
        if let Some(tool) = self.registry.tool_mut(state.editor.active_tool) {
            tool.on_pointer_move(pos, &state.drawing, &mut state.interaction);
        }
    }

    fn pointer_released(&mut self, state: &mut AppState, screen: DVec2, additive: bool) {
        let world = self.to_world(state, screen);
        if state.editor.active_tool == ToolKind::Select {
            let Some(origin) = self.drag_origin.take() else {
                return;
            };
            // Drag vs. Klick über die Pick-Toleranz unterscheiden
            if origin.distance(world) > state.interaction.pick_tolerance {
                use_cases::selection::box_select(state, origin, world, additive);
            } else {
                use_cases::selection::pick(state, world, additive);
            }
            return;
        }
        if let Some(tool) = self.registry.tool_mut(state.editor.active_tool) {
            tool.on_pointer_up(world, &mut state.interaction);
        }
    }

    fn key_pressed(&mut self, state: &mut AppState, store: &mut dyn ShapeStore, key: ToolKey) {
        if let Some(tool) = self.registry.tool_mut(state.editor.active_tool) {
            let flow = tool.on_key(
                key,
                self.last_cursor_world,
                &state.drawing,
                &mut state.interaction,
                store,
            );
            if flow == ToolFlow::Committed {
                sync_snapshot(state, store);
            }
        }
    }
}

impl Default for EditorController {
    fn default() -> Self {
        Self::new()
    }
}

/// Spiegelt den Store-Stand in den Read-only-Snapshot.
fn sync_snapshot(state: &mut AppState, store: &dyn ShapeStore) {
    state.drawing = store.drawing().clone();
    state.drawing.refresh_hidden_flags();
}
