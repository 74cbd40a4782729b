//! Aggregate geometry over a parsed volumetric model
//!
//! This module provides model-level queries built from per-cell volume and
//! mass:
//! - Total volume and mass
//! - Mass broken down per material
//! - Axis-aligned bounding box
//!
//! The viewer uses the bounding box for camera framing and the totals for
//! model inspection panels.

use crate::cell::Cell;
use crate::error::{Error, Result};
use crate::model::Model;
use nalgebra::Point3;

/// An axis-aligned bounding box represented as (min_corner, max_corner)
pub type BoundingBox = (Point3<f64>, Point3<f64>);

/// Total volume of a model: the sum of its cell volumes
///
/// Cells may overlap in malformed input; no attempt is made to detect that,
/// the per-cell volumes are simply summed. An empty or surface model has
/// volume 0.
pub fn compute_model_volume(model: &Model) -> f64 {
    model.cells().iter().map(Cell::volume).sum()
}

/// Total mass of a model: the sum of its cell masses
pub fn compute_model_mass(model: &Model) -> f64 {
    model.cells().iter().map(Cell::mass).sum()
}

/// Mass per material, in material declaration order
///
/// Returns `(material id, summed mass)` pairs. Materials no cell uses are
/// included with mass 0 so the breakdown always covers the whole material
/// list.
pub fn mass_by_material(model: &Model) -> Vec<(usize, f64)> {
    model
        .materials()
        .iter()
        .map(|material| {
            let mass = model
                .cells()
                .iter()
                .filter(|cell| cell.material().id() == material.id())
                .map(Cell::mass)
                .sum();
            (material.id(), mass)
        })
        .collect()
}

/// Compute the axis-aligned bounding box over every cell vertex
///
/// # Returns
/// A `(min_corner, max_corner)` pair, or [`Error::EmptyModel`] when the
/// model has no cells (surface models included, since their geometry lives
/// with the external renderer).
pub fn compute_model_aabb(model: &Model) -> Result<BoundingBox> {
    let mut corners: Option<BoundingBox> = None;

    for cell in model.cells() {
        for vertex in cell.vertices() {
            let point: Point3<f64> = (*vertex).into();
            corners = Some(match corners {
                None => (point, point),
                Some((min, max)) => (
                    Point3::new(min.x.min(point.x), min.y.min(point.y), min.z.min(point.z)),
                    Point3::new(max.x.max(point.x), max.y.max(point.y), max.z.max(point.z)),
                ),
            });
        }
    }

    corners.ok_or_else(|| {
        Error::EmptyModel("cannot compute bounding box of a model with no cells".to_string())
    })
}
