//! MOD text writing
//!
//! This module serializes a volumetric [`Model`] back to MOD record text:
//! material records first in declaration order, then cell records. Text
//! written here parses back to an equivalent model.

use crate::error::{Error, Result};
use crate::model::Model;

/// Serialize a volumetric model to MOD record text
///
/// Surface models hold no cells or materials (their geometry belongs to the
/// external renderer), so serializing one is an [`Error::UnsupportedFormat`].
pub fn write_model(model: &Model) -> Result<String> {
    if model.is_surface() {
        return Err(Error::UnsupportedFormat(
            "surface models are read by the renderer and cannot be written as MOD".to_string(),
        ));
    }

    let mut text = String::new();

    for material in model.materials() {
        text.push_str(&format!(
            "material {} {} {} {}\n",
            material.id(),
            material.density(),
            material.color(),
            material.name()
        ));
    }

    if !model.materials().is_empty() && !model.cells().is_empty() {
        text.push('\n');
    }

    for cell in model.cells() {
        let shape = cell.shape();
        text.push_str(&format!(
            "cell {} {} {}",
            shape.tag(),
            shape.vertex_count(),
            cell.material().id()
        ));
        for vertex in cell.vertices() {
            text.push_str(&format!("  {} {} {}", vertex.x, vertex.y, vertex.z));
        }
        text.push('\n');
    }

    Ok(text)
}
