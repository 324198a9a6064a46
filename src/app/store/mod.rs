//! Mutations-Kollaborateur: die einzige Schreibstelle für committete
//! Shapes.
//!
//! Werkzeuge committen ausschließlich über den [`ShapeStore`]-Trait;
//! jede Operation kann fehlschlagen (Netz-/Speicherfehler beim echten
//! Backend), deshalb geben alle Methoden `anyhow::Result` zurück und
//! die Werkzeuge setzen sich erst nach `Ok` zurück.

mod memory;

pub use memory::MemoryStore;

#[cfg(test)]
pub mod test_support;

use anyhow::Result;
use glam::DVec2;

use crate::core::shape::{Drawing, ShapeGeometry, ShapeId};

/// Schnittstelle des Shape-Backends.
///
/// `drawing()` liefert den aktuellen Stand als Read-only-Snapshot; der
/// Controller spiegelt ihn nach jedem erfolgreichen Commit in den
/// App-Zustand.
pub trait ShapeStore {
    fn add_shape(&mut self, geometry: ShapeGeometry) -> Result<ShapeId>;

    fn delete_shape(&mut self, id: ShapeId) -> Result<()>;

    fn delete_shapes(&mut self, ids: &[ShapeId]) -> Result<()>;

    /// Ersetzt die Geometrie eines Shapes; Stil und Layer bleiben.
    fn modify_shape(&mut self, id: ShapeId, geometry: ShapeGeometry) -> Result<()>;

    /// Dupliziert Shapes und verschiebt die Kopien um `delta`.
    fn copy_shapes(&mut self, ids: &[ShapeId], delta: DVec2) -> Result<Vec<ShapeId>>;

    fn translate_shapes(&mut self, ids: &[ShapeId], delta: DVec2) -> Result<()>;

    fn rotate_shapes(&mut self, ids: &[ShapeId], pivot: DVec2, angle_deg: f64) -> Result<()>;

    fn scale_shapes(&mut self, ids: &[ShapeId], pivot: DVec2, factor: f64) -> Result<()>;

    /// Entfernt das geklickte Teilstück einer Linie zwischen ihren
    /// Schnittpunkten mit den übrigen Shapes.
    fn trim_shape(&mut self, id: ShapeId, pick: DVec2) -> Result<()>;

    /// Erzeugt eine Parallel-Kopie; die Seite folgt aus dem Pick-Punkt.
    fn offset_shape(&mut self, id: ShapeId, distance: f64, pick: DVec2) -> Result<ShapeId>;

    /// Rundet die Ecke zweier Linien; liefert die ID des neuen Bogens
    /// (`None` bei Radius 0 — scharfe Ecke ohne Bogen).
    fn fillet_shapes(
        &mut self,
        id_a: ShapeId,
        id_b: ShapeId,
        radius: f64,
        pick: DVec2,
    ) -> Result<Option<ShapeId>>;

    /// Aktueller Stand als Read-only-Snapshot.
    fn drawing(&self) -> &Drawing;
}
