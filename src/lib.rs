//! # libmod
//!
//! A pure Rust implementation for parsing MOD volumetric mesh files.
//!
//! This library provides the solid-model data layer of a CAD viewer: it
//! reads the record-based `.mod` format into typed polyhedral cells
//! (tetrahedra, pyramids, hexahedra) bound to shared material records, and
//! computes each cell's volume and mass from its vertex coordinates and
//! material density.
//!
//! ## Features
//!
//! - Pure Rust implementation with no unsafe code
//! - Parse `.mod` files into materials and typed cells
//! - Per-cell volume via tetrahedral decomposition, winding-insensitive
//! - Aggregate queries: total volume/mass, per-material mass, bounding box
//! - Serialize volumetric models back to MOD text
//!
//! Rendering, camera control and the GUI shell are external collaborators:
//! they consume [`Model::cells`] and [`Model::materials`] and are not part
//! of this crate. Surface (`.stl`) files are only classified here; their
//! triangle data is read by the renderer itself.
//!
//! ## Example
//!
//! ```no_run
//! use libmod::Model;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let model = Model::from_path("part.mod")?;
//!
//! for cell in model.cells() {
//!     println!(
//!         "{}: volume {:.3}, mass {:.3}",
//!         cell.material().name(),
//!         cell.volume(),
//!         cell.mass()
//!     );
//! }
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod cell;
pub mod error;
pub mod material;
pub mod model;
pub mod model_ops;
pub mod parser;
pub mod vector;
mod writer;

pub use cell::{Cell, Shape, tetrahedron_volume};
pub use error::{Error, Result};
pub use material::{Material, parse_color};
pub use model::{Model, ModelKind};
pub use model_ops::{
    BoundingBox, compute_model_aabb, compute_model_mass, compute_model_volume, mass_by_material,
};
pub use vector::Vector3D;

use std::path::Path;

impl Model {
    /// Load a model from a file path
    ///
    /// The path is classified by extension first. A `.mod` file is read
    /// whole and parsed into cells and materials; a `.stl` file produces a
    /// surface model that records the path for the external renderer and
    /// carries no cells. Any other extension is an error.
    ///
    /// All parse errors abort the load: either a complete model is returned
    /// or none at all.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use libmod::Model;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let model = Model::from_path("part.mod")?;
    /// println!("Model contains {} cells", model.cells().len());
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        match Self::classify(path)? {
            ModelKind::Surface => Ok(Self::surface(path)),
            ModelKind::Volumetric => {
                let text = std::fs::read_to_string(path)?;
                let mut model = Self::parse_mod(&text)?;
                model.path = Some(path.to_path_buf());
                Ok(model)
            }
        }
    }

    /// Write a volumetric model to a `.mod` file
    ///
    /// This is a convenience method that serializes the model to MOD record
    /// text and writes it to the given path.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use libmod::Model;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let model = Model::from_path("part.mod")?;
    /// model.write_to_file("copy.mod")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let text = writer::write_model(self)?;
        std::fs::write(path, text)?;
        Ok(())
    }

    /// Serialize a volumetric model to MOD record text
    pub fn to_mod_string(&self) -> Result<String> {
        writer::write_model(self)
    }
}
