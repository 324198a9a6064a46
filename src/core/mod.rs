//! Reiner Modell- und Geometrie-Kern, frei von App- und UI-Zustand.

pub mod box_select;
pub mod camera;
pub mod fillet;
pub mod geometry;
pub mod intersect;
pub mod shape;
pub mod snap;

pub use camera::Viewport;
pub use shape::{Drawing, Layer, LayerId, Shape, ShapeGeometry, ShapeId, Style};
pub use snap::{SnapKind, SnapPoint, SnapSettings};
