//! Integration tests for MOD parsing, classification and loading

use libmod::{Error, Model, ModelKind, Shape};
use std::io::Write;
use std::sync::Arc;

/// A well-formed file exercising all three shapes and shared materials
const EXAMPLE_MODEL: &str = "\
# example model: copper and aluminium
material 0 8940 b87333 cu
material 1 2700 a0a0a0 al

cell tetra 4 0  5 0 0  5 1 1  6 1 5  5.5 6.5 0.5
cell pyramid 5 0  0 0 0  0 -2 0  2 -2 0  2 0 0  1 -1 2
cell hexa 8 1  0 0 0  1 0 0  1 1 0  0 1 0  0 0 1  1 0 1  1 1 1  0 1 1
";

#[test]
fn test_parse_example_model() {
    let model = Model::parse_mod(EXAMPLE_MODEL).unwrap();

    assert!(!model.is_surface());
    assert_eq!(model.kind(), ModelKind::Volumetric);
    assert_eq!(model.materials().len(), 2);
    assert_eq!(model.cells().len(), 3);

    // Declaration order is preserved
    assert_eq!(model.materials()[0].name(), "cu");
    assert_eq!(model.materials()[1].name(), "al");
    assert_eq!(model.cells()[0].shape(), Shape::Tetrahedron);
    assert_eq!(model.cells()[1].shape(), Shape::Pyramid);
    assert_eq!(model.cells()[2].shape(), Shape::Hexahedron);
}

#[test]
fn test_cells_share_material_instances() {
    let model = Model::parse_mod(EXAMPLE_MODEL).unwrap();

    // Both copper cells hold the same Arc as the model's material list
    assert!(Arc::ptr_eq(
        model.cells()[0].shared_material(),
        &model.materials()[0]
    ));
    assert!(Arc::ptr_eq(
        model.cells()[1].shared_material(),
        &model.materials()[0]
    ));
    assert!(Arc::ptr_eq(
        model.cells()[2].shared_material(),
        &model.materials()[1]
    ));
}

#[test]
fn test_parsed_fixture_values() {
    let model = Model::parse_mod(EXAMPLE_MODEL).unwrap();

    let tetra = &model.cells()[0];
    assert!((tetra.volume() - 1.33).abs() < 0.009);
    assert!((tetra.mass() - 11920.0).abs() < 0.009);

    let pyramid = &model.cells()[1];
    assert!((pyramid.volume() - 2.67).abs() < 0.009);
    assert!((pyramid.mass() - 23840.0).abs() < 0.009);

    let cube = &model.cells()[2];
    assert!((cube.volume() - 1.0).abs() < 1e-12);
}

#[test]
fn test_unknown_material_reference() {
    let text = "\
material 0 8940 b87333 cu
cell tetra 4 3  0 0 0  1 0 0  0 1 0  0 0 1
";
    let err = Model::parse_mod(text).unwrap_err();
    assert!(matches!(err, Error::UnknownMaterialReference(_)));
    assert!(err.to_string().contains("material id 3"));
    assert!(err.to_string().contains("line 2"));
}

#[test]
fn test_vertex_count_without_matching_shape() {
    // 6 vertices matches no shape tag; the mismatch against 'tetra' is a
    // malformed record
    let text = "\
material 0 8940 b87333 cu
cell tetra 6 0  0 0 0  1 0 0  0 1 0  0 0 1  1 1 0  1 1 1
";
    assert!(matches!(
        Model::parse_mod(text),
        Err(Error::MalformedRecord(_))
    ));
}

#[test]
fn test_shape_tag_count_mismatch() {
    let text = "\
material 0 8940 b87333 cu
cell pyramid 4 0  0 0 0  1 0 0  0 1 0  0 0 1
";
    let err = Model::parse_mod(text).unwrap_err();
    assert!(matches!(err, Error::MalformedRecord(_)));
    assert!(err.to_string().contains("pyramid"));
}

#[test]
fn test_non_numeric_coordinate() {
    let text = "\
material 0 8940 b87333 cu
cell tetra 4 0  0 0 0  1 0 0  0 one 0  0 0 1
";
    let err = Model::parse_mod(text).unwrap_err();
    assert!(matches!(err, Error::MalformedRecord(_)));
    assert!(err.to_string().contains("'one'"));
}

#[test]
fn test_truncated_cell_record() {
    let text = "\
material 0 8940 b87333 cu
cell tetra 4 0  0 0 0  1 0 0
";
    assert!(matches!(
        Model::parse_mod(text),
        Err(Error::MalformedRecord(_))
    ));
}

#[test]
fn test_unknown_shape_tag() {
    let text = "\
material 0 8940 b87333 cu
cell prism 6 0  0 0 0  1 0 0  0 1 0  0 0 1  1 1 0  1 1 1
";
    let err = Model::parse_mod(text).unwrap_err();
    assert!(err.to_string().contains("'prism'"));
}

#[test]
fn test_non_positive_density_in_file() {
    let err = Model::parse_mod("material 0 0 b87333 cu\n").unwrap_err();
    assert!(matches!(err, Error::InvalidMaterial(_)));
}

#[test]
fn test_duplicate_material_id() {
    let text = "\
material 0 8940 b87333 cu
material 0 2700 a0a0a0 al
";
    let err = Model::parse_mod(text).unwrap_err();
    assert!(matches!(err, Error::InvalidMaterial(_)));
    assert!(err.to_string().contains("duplicate"));
}

#[test]
fn test_error_reports_line_number() {
    // The bad record sits on line 4 once comments and blanks are counted
    let text = "\
# header comment
material 0 8940 b87333 cu

cell tetra 4 0  0 0 0  1 0 0  0 1 0  bad 0 1
";
    let err = Model::parse_mod(text).unwrap_err();
    assert!(err.to_string().contains("line 4"), "{}", err);
}

#[test]
fn test_failure_yields_no_model() {
    // An error on the last record must not leak the cells parsed before it
    let text = "\
material 0 8940 b87333 cu
cell tetra 4 0  0 0 0  1 0 0  0 1 0  0 0 1
cell tetra 4 9  0 0 0  1 0 0  0 1 0  0 0 1
";
    assert!(Model::parse_mod(text).is_err());
}

#[test]
fn test_classify_extensions() {
    assert_eq!(Model::classify("a/b/part.mod").unwrap(), ModelKind::Volumetric);
    assert_eq!(Model::classify("shell.STL").unwrap(), ModelKind::Surface);
    assert!(matches!(
        Model::classify("image.png"),
        Err(Error::UnsupportedFormat(_))
    ));
}

#[test]
fn test_from_path_volumetric() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("example.mod");
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(EXAMPLE_MODEL.as_bytes()).unwrap();

    let model = Model::from_path(&path).unwrap();
    assert_eq!(model.cells().len(), 3);
    assert_eq!(model.path(), Some(path.as_path()));
}

#[test]
fn test_from_path_surface_defers_to_renderer() {
    // Content is never read for .stl; only the path is recorded
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("shell.stl");
    std::fs::write(&path, b"solid shell\nendsolid shell\n").unwrap();

    let model = Model::from_path(&path).unwrap();
    assert!(model.is_surface());
    assert!(model.cells().is_empty());
    assert!(model.materials().is_empty());
    assert_eq!(model.path(), Some(path.as_path()));
}

#[test]
fn test_from_path_missing_file_is_io_error() {
    let err = Model::from_path("does_not_exist.mod").unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}
