//! Test-Doubles für den [`ShapeStore`].

use anyhow::{bail, Result};
use glam::DVec2;

use super::ShapeStore;
use crate::core::shape::{Drawing, ShapeGeometry, ShapeId};

/// Store, dessen Operationen allesamt fehlschlagen — simuliert das
/// abgelehnte Backend, gegen das Werkzeuge ihren Zustand behalten
/// müssen.
pub struct FailingStore {
    drawing: Drawing,
}

impl FailingStore {
    pub fn new() -> Self {
        Self {
            drawing: Drawing::new(),
        }
    }
}

impl Default for FailingStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ShapeStore for FailingStore {
    fn add_shape(&mut self, _geometry: ShapeGeometry) -> Result<ShapeId> {
        bail!("Backend nicht erreichbar")
    }

    fn delete_shape(&mut self, _id: ShapeId) -> Result<()> {
        bail!("Backend nicht erreichbar")
    }

    fn delete_shapes(&mut self, _ids: &[ShapeId]) -> Result<()> {
        bail!("Backend nicht erreichbar")
    }

    fn modify_shape(&mut self, _id: ShapeId, _geometry: ShapeGeometry) -> Result<()> {
        bail!("Backend nicht erreichbar")
    }

    fn copy_shapes(&mut self, _ids: &[ShapeId], _delta: DVec2) -> Result<Vec<ShapeId>> {
        bail!("Backend nicht erreichbar")
    }

    fn translate_shapes(&mut self, _ids: &[ShapeId], _delta: DVec2) -> Result<()> {
        bail!("Backend nicht erreichbar")
    }

    fn rotate_shapes(&mut self, _ids: &[ShapeId], _pivot: DVec2, _angle_deg: f64) -> Result<()> {
        bail!("Backend nicht erreichbar")
    }

    fn scale_shapes(&mut self, _ids: &[ShapeId], _pivot: DVec2, _factor: f64) -> Result<()> {
        bail!("Backend nicht erreichbar")
    }

    fn trim_shape(&mut self, _id: ShapeId, _pick: DVec2) -> Result<()> {
        bail!("Backend nicht erreichbar")
    }

    fn offset_shape(&mut self, _id: ShapeId, _distance: f64, _pick: DVec2) -> Result<ShapeId> {
        bail!("Backend nicht erreichbar")
    }

    fn fillet_shapes(
        &mut self,
        _id_a: ShapeId,
        _id_b: ShapeId,
        _radius: f64,
        _pick: DVec2,
    ) -> Result<Option<ShapeId>> {
        bail!("Backend nicht erreichbar")
    }

    fn drawing(&self) -> &Drawing {
        &self.drawing
    }
}
