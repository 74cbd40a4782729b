//! Data structures representing loaded models
//!
//! A [`Model`] is the top-level container the viewer works with. Loading a
//! new file replaces the previous model wholesale; nothing is ever mutated
//! in place.

use crate::cell::Cell;
use crate::error::{Error, Result};
use crate::material::Material;
use crate::parser;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Classification of a model file by its extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelKind {
    /// Triangulated shell only (`.stl`); read entirely by the external renderer
    Surface,
    /// Volumetric cell mesh (`.mod`); parsed by this crate
    Volumetric,
}

/// A loaded model: ordered materials and cells, or a surface-file reference
///
/// For volumetric models the struct owns the parsed materials and cells.
/// For surface models no cells or materials exist; only the path is kept so
/// the rendering collaborator can hand it to its own mesh reader.
#[derive(Debug, Clone)]
pub struct Model {
    pub(crate) kind: ModelKind,
    pub(crate) path: Option<PathBuf>,
    pub(crate) materials: Vec<Arc<Material>>,
    pub(crate) cells: Vec<Cell>,
}

impl Model {
    /// Classify a file path by extension
    ///
    /// `.stl` maps to [`ModelKind::Surface`] and `.mod` to
    /// [`ModelKind::Volumetric`], case-insensitively. Anything else is an
    /// [`Error::UnsupportedFormat`].
    pub fn classify<P: AsRef<Path>>(path: P) -> Result<ModelKind> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();

        if extension.eq_ignore_ascii_case("stl") {
            Ok(ModelKind::Surface)
        } else if extension.eq_ignore_ascii_case("mod") {
            Ok(ModelKind::Volumetric)
        } else {
            Err(Error::UnsupportedFormat(format!(
                "'{}' is not a .mod or .stl file",
                path.display()
            )))
        }
    }

    /// Parse MOD text into a volumetric model
    ///
    /// This is a pure function of the input text; no I/O happens here.
    ///
    /// # Example
    ///
    /// ```
    /// use libmod::Model;
    ///
    /// let text = "\
    /// material 0 8940 b87333 cu
    /// cell tetra 4 0  0 0 0  1 0 0  0 1 0  0 0 1
    /// ";
    /// let model = Model::parse_mod(text)?;
    /// assert_eq!(model.cells().len(), 1);
    /// # Ok::<(), libmod::Error>(())
    /// ```
    pub fn parse_mod(text: &str) -> Result<Self> {
        let (materials, cells) = parser::parse_mod_text(text)?;
        Ok(Self {
            kind: ModelKind::Volumetric,
            path: None,
            materials,
            cells,
        })
    }

    /// Build a surface model that defers to the external renderer
    pub(crate) fn surface(path: &Path) -> Self {
        Self {
            kind: ModelKind::Surface,
            path: Some(path.to_path_buf()),
            materials: Vec::new(),
            cells: Vec::new(),
        }
    }

    /// Classification of this model
    pub fn kind(&self) -> ModelKind {
        self.kind
    }

    /// Whether this is a surface (`.stl`) model
    pub fn is_surface(&self) -> bool {
        self.kind == ModelKind::Surface
    }

    /// The path this model was loaded from, if it came from a file
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// The parsed cells in declaration order; empty for surface models
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// The declared materials in declaration order; empty for surface models
    pub fn materials(&self) -> &[Arc<Material>] {
        &self.materials
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_by_extension() {
        assert_eq!(Model::classify("part.mod").unwrap(), ModelKind::Volumetric);
        assert_eq!(Model::classify("part.MOD").unwrap(), ModelKind::Volumetric);
        assert_eq!(Model::classify("shell.stl").unwrap(), ModelKind::Surface);
        assert_eq!(Model::classify("shell.Stl").unwrap(), ModelKind::Surface);
        assert!(matches!(
            Model::classify("scene.obj"),
            Err(Error::UnsupportedFormat(_))
        ));
        assert!(matches!(
            Model::classify("no_extension"),
            Err(Error::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_surface_model_has_no_cells() {
        let model = Model::surface(Path::new("shell.stl"));
        assert!(model.is_surface());
        assert!(model.cells().is_empty());
        assert!(model.materials().is_empty());
        assert_eq!(model.path(), Some(Path::new("shell.stl")));
    }
}
