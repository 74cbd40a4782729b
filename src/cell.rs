//! Polyhedral cells and their volume decompositions
//!
//! A [`Cell`] is one solid element of a volumetric mesh: an ordered, fixed
//! arity vertex list plus a shared material handle. The three shapes are a
//! tagged sum type rather than a trait hierarchy so the arity invariant is
//! checked once, at construction, and volume dispatch is a plain `match`.
//!
//! Volume is computed by decomposing each shape into tetrahedra and summing
//! unsigned tetrahedron volumes, so vertex winding order never flips a sign.
//! Degenerate geometry (coplanar vertices) is not rejected; it yields volume
//! zero and mass zero.

use crate::error::{Error, Result};
use crate::material::Material;
use crate::vector::Vector3D;
use std::sync::Arc;

/// The polyhedron shapes a cell record may declare
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// 4 vertices
    Tetrahedron,
    /// 4 base vertices plus an apex
    Pyramid,
    /// 8 vertices, quadrilateral base first then the top face
    Hexahedron,
}

impl Shape {
    /// Resolve a MOD record shape tag
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "tetra" => Some(Shape::Tetrahedron),
            "pyramid" => Some(Shape::Pyramid),
            "hexa" => Some(Shape::Hexahedron),
            _ => None,
        }
    }

    /// The MOD record tag for this shape
    pub fn tag(&self) -> &'static str {
        match self {
            Shape::Tetrahedron => "tetra",
            Shape::Pyramid => "pyramid",
            Shape::Hexahedron => "hexa",
        }
    }

    /// A human-readable name for this shape
    pub fn name(&self) -> &'static str {
        match self {
            Shape::Tetrahedron => "tetrahedron",
            Shape::Pyramid => "pyramid",
            Shape::Hexahedron => "hexahedron",
        }
    }

    /// Number of vertices this shape requires
    pub fn vertex_count(&self) -> usize {
        match self {
            Shape::Tetrahedron => 4,
            Shape::Pyramid => 5,
            Shape::Hexahedron => 8,
        }
    }
}

/// A single polyhedral solid element of a volumetric mesh
///
/// Each variant carries its fixed-size vertex array and a shared handle to
/// the material it is made of. Cells are immutable once constructed; a new
/// model load replaces them wholesale.
#[derive(Debug, Clone)]
pub enum Cell {
    /// A 4-vertex solid
    Tetrahedron {
        /// The four corners
        vertices: [Vector3D; 4],
        /// Shared material handle
        material: Arc<Material>,
    },
    /// A 5-vertex solid: quadrilateral base V1..V4, apex V5
    Pyramid {
        /// Base vertices in order, then the apex
        vertices: [Vector3D; 5],
        /// Shared material handle
        material: Arc<Material>,
    },
    /// An 8-vertex solid: quadrilateral base V1..V4, top face V5..V8
    Hexahedron {
        /// Base vertices in order, then the top face in matching order
        vertices: [Vector3D; 8],
        /// Shared material handle
        material: Arc<Material>,
    },
}

impl Cell {
    /// Construct a tetrahedron; fails unless exactly 4 vertices are given
    pub fn tetrahedron(vertices: Vec<Vector3D>, material: Arc<Material>) -> Result<Self> {
        let vertices: [Vector3D; 4] = vertices
            .try_into()
            .map_err(|v: Vec<Vector3D>| Error::wrong_vertex_count("tetrahedron", 4, v.len()))?;
        Ok(Cell::Tetrahedron { vertices, material })
    }

    /// Construct a pyramid; fails unless exactly 5 vertices are given
    pub fn pyramid(vertices: Vec<Vector3D>, material: Arc<Material>) -> Result<Self> {
        let vertices: [Vector3D; 5] = vertices
            .try_into()
            .map_err(|v: Vec<Vector3D>| Error::wrong_vertex_count("pyramid", 5, v.len()))?;
        Ok(Cell::Pyramid { vertices, material })
    }

    /// Construct a hexahedron; fails unless exactly 8 vertices are given
    pub fn hexahedron(vertices: Vec<Vector3D>, material: Arc<Material>) -> Result<Self> {
        let vertices: [Vector3D; 8] = vertices
            .try_into()
            .map_err(|v: Vec<Vector3D>| Error::wrong_vertex_count("hexahedron", 8, v.len()))?;
        Ok(Cell::Hexahedron { vertices, material })
    }

    /// Construct the cell variant matching `shape`
    pub fn from_shape(
        shape: Shape,
        vertices: Vec<Vector3D>,
        material: Arc<Material>,
    ) -> Result<Self> {
        match shape {
            Shape::Tetrahedron => Cell::tetrahedron(vertices, material),
            Shape::Pyramid => Cell::pyramid(vertices, material),
            Shape::Hexahedron => Cell::hexahedron(vertices, material),
        }
    }

    /// Which shape this cell is
    pub fn shape(&self) -> Shape {
        match self {
            Cell::Tetrahedron { .. } => Shape::Tetrahedron,
            Cell::Pyramid { .. } => Shape::Pyramid,
            Cell::Hexahedron { .. } => Shape::Hexahedron,
        }
    }

    /// Ordered vertex list; length always equals `self.shape().vertex_count()`
    pub fn vertices(&self) -> &[Vector3D] {
        match self {
            Cell::Tetrahedron { vertices, .. } => vertices,
            Cell::Pyramid { vertices, .. } => vertices,
            Cell::Hexahedron { vertices, .. } => vertices,
        }
    }

    /// The material this cell is made of
    pub fn material(&self) -> &Material {
        self.shared_material()
    }

    /// The shared material handle, for callers that need to compare or clone it
    pub fn shared_material(&self) -> &Arc<Material> {
        match self {
            Cell::Tetrahedron { material, .. } => material,
            Cell::Pyramid { material, .. } => material,
            Cell::Hexahedron { material, .. } => material,
        }
    }

    /// Unsigned volume of this cell
    ///
    /// - Tetrahedron A,B,C,D: `|((B-A) × (C-A)) · (D-A)| / 6`.
    /// - Pyramid: two tetrahedra sharing the base diagonal V1-V3,
    ///   (V1,V2,V3,apex) + (V1,V3,V4,apex).
    /// - Hexahedron: five tetrahedra, the central one (V2,V4,V5,V7) plus the
    ///   corner tetrahedra (V1,V2,V4,V5), (V2,V3,V4,V7), (V2,V5,V6,V7) and
    ///   (V4,V5,V7,V8). Exact on any parallelepiped; for irregular
    ///   hexahedra the result depends on this decomposition, which is why it
    ///   is pinned here.
    ///
    /// Degenerate cells return 0 rather than an error.
    pub fn volume(&self) -> f64 {
        match self {
            Cell::Tetrahedron {
                vertices: [a, b, c, d],
                ..
            } => tetrahedron_volume(*a, *b, *c, *d),
            Cell::Pyramid {
                vertices: [v1, v2, v3, v4, apex],
                ..
            } => {
                tetrahedron_volume(*v1, *v2, *v3, *apex) + tetrahedron_volume(*v1, *v3, *v4, *apex)
            }
            Cell::Hexahedron { vertices: v, .. } => {
                tetrahedron_volume(v[0], v[1], v[3], v[4])
                    + tetrahedron_volume(v[1], v[2], v[3], v[6])
                    + tetrahedron_volume(v[1], v[4], v[5], v[6])
                    + tetrahedron_volume(v[3], v[4], v[6], v[7])
                    + tetrahedron_volume(v[1], v[3], v[4], v[6])
            }
        }
    }

    /// Mass of this cell: `volume * material.density`
    pub fn mass(&self) -> f64 {
        self.volume() * self.material().density()
    }
}

/// Unsigned volume of the tetrahedron spanned by four points
///
/// The triple product is taken as an absolute value so vertex winding order
/// cannot leak a sign into the result.
pub fn tetrahedron_volume(a: Vector3D, b: Vector3D, c: Vector3D, d: Vector3D) -> f64 {
    (b - a).cross(c - a).dot(d - a).abs() / 6.0
}
