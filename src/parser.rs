//! Record parsing for MOD model files
//!
//! The MOD format is textual and record oriented: one logical entity per
//! line. Blank lines are ignored and `#` starts a comment that runs to the
//! end of the line.
//!
//! ```text
//! # materials: id, density, color, name
//! material 0 8940 b87333 cu
//!
//! # cells: shape tag, vertex count, material id, then count coordinate triples
//! cell pyramid 5 0  0 0 0  0 -2 0  2 -2 0  2 0 0  1 -1 2
//! ```
//!
//! Parsing is a pure function from file content to materials and cells. Any
//! error aborts the whole load; no partial model ever escapes. Material
//! records are collected in a first pass, so a cell may reference a material
//! declared later in the file.

use crate::cell::{Cell, Shape};
use crate::error::{Error, Result};
use crate::material::Material;
use crate::vector::Vector3D;
use std::collections::HashMap;
use std::sync::Arc;

/// Record keyword opening a material declaration
const MATERIAL_KEYWORD: &str = "material";

/// Record keyword opening a cell declaration
const CELL_KEYWORD: &str = "cell";

/// Parse MOD text into its declared materials and cells
///
/// Materials and cells are returned in declaration order. Every cell's
/// material handle points at an entry of the returned material list.
pub fn parse_mod_text(text: &str) -> Result<(Vec<Arc<Material>>, Vec<Cell>)> {
    // First pass: materials only, so cells may forward-reference them
    let mut materials: Vec<Arc<Material>> = Vec::new();
    let mut by_id: HashMap<usize, Arc<Material>> = HashMap::new();

    for (number, line) in records(text) {
        let mut fields = line.split_whitespace();
        match fields.next() {
            Some(MATERIAL_KEYWORD) => {
                let material = Arc::new(parse_material_record(number, &mut fields)?);
                if by_id.contains_key(&material.id()) {
                    return Err(Error::InvalidMaterial(format!(
                        "line {}: duplicate material id {}",
                        number,
                        material.id()
                    )));
                }
                by_id.insert(material.id(), Arc::clone(&material));
                materials.push(material);
            }
            Some(CELL_KEYWORD) => {}
            Some(keyword) => {
                return Err(Error::malformed_record(
                    number,
                    format!("unknown record keyword '{}'", keyword),
                ));
            }
            None => {}
        }
    }

    // Second pass: cells, resolving material references against the map
    let mut cells: Vec<Cell> = Vec::new();
    for (number, line) in records(text) {
        let mut fields = line.split_whitespace();
        if fields.next() == Some(CELL_KEYWORD) {
            cells.push(parse_cell_record(number, &mut fields, &by_id)?);
        }
    }

    Ok((materials, cells))
}

/// Iterate non-empty records with their 1-based line numbers, comments stripped
fn records(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines().enumerate().filter_map(|(index, line)| {
        let record = line.split('#').next().unwrap_or("").trim();
        if record.is_empty() {
            None
        } else {
            Some((index + 1, record))
        }
    })
}

/// Parse the fields of a `material` record: id, density, color, name
fn parse_material_record<'a>(
    number: usize,
    fields: &mut impl Iterator<Item = &'a str>,
) -> Result<Material> {
    let id = parse_field::<usize>(number, fields, "material id")?;
    let density = parse_field::<f64>(number, fields, "material density")?;
    let color = next_field(number, fields, "material color")?;
    let name = next_field(number, fields, "material name")?;

    if let Some(extra) = fields.next() {
        return Err(Error::malformed_record(
            number,
            format!("unexpected trailing field '{}' in material record", extra),
        ));
    }

    Material::new(id, density, color, name)
}

/// Parse the fields of a `cell` record: shape tag, vertex count, material id,
/// then `count` coordinate triples
fn parse_cell_record<'a>(
    number: usize,
    fields: &mut impl Iterator<Item = &'a str>,
    materials: &HashMap<usize, Arc<Material>>,
) -> Result<Cell> {
    let tag = next_field(number, fields, "cell shape tag")?;
    let shape = Shape::from_tag(tag)
        .ok_or_else(|| Error::malformed_record(number, format!("unknown shape tag '{}'", tag)))?;

    let declared = parse_field::<usize>(number, fields, "cell vertex count")?;
    if declared != shape.vertex_count() {
        return Err(Error::malformed_record(
            number,
            format!(
                "shape '{}' requires {} vertices but the record declares {}",
                tag,
                shape.vertex_count(),
                declared
            ),
        ));
    }

    let material_id = parse_field::<usize>(number, fields, "cell material id")?;
    let material = materials
        .get(&material_id)
        .cloned()
        .ok_or_else(|| Error::unknown_material(number, material_id))?;

    let mut vertices = Vec::with_capacity(declared);
    for vertex in 0..declared {
        let x = parse_coordinate(number, fields, vertex, "x")?;
        let y = parse_coordinate(number, fields, vertex, "y")?;
        let z = parse_coordinate(number, fields, vertex, "z")?;
        vertices.push(Vector3D::new(x, y, z));
    }

    if let Some(extra) = fields.next() {
        return Err(Error::malformed_record(
            number,
            format!("unexpected trailing field '{}' in cell record", extra),
        ));
    }

    Cell::from_shape(shape, vertices, material)
}

/// Take the next whitespace-separated field or fail with a missing-field error
fn next_field<'a>(
    number: usize,
    fields: &mut impl Iterator<Item = &'a str>,
    what: &str,
) -> Result<&'a str> {
    fields
        .next()
        .ok_or_else(|| Error::malformed_record(number, format!("missing {}", what)))
}

/// Take the next field and parse it as `T`
fn parse_field<'a, T: std::str::FromStr>(
    number: usize,
    fields: &mut impl Iterator<Item = &'a str>,
    what: &str,
) -> Result<T> {
    let field = next_field(number, fields, what)?;
    field
        .parse::<T>()
        .map_err(|_| Error::malformed_field(number, what, field))
}

/// Take and parse one coordinate component of a vertex
fn parse_coordinate<'a>(
    number: usize,
    fields: &mut impl Iterator<Item = &'a str>,
    vertex: usize,
    axis: &str,
) -> Result<f64> {
    let what = format!("vertex {} {} coordinate", vertex + 1, axis);
    parse_field::<f64>(number, fields, &what)
}
