//! Error types for MOD parsing
//!
//! This module provides error handling for MOD file operations. All errors
//! include error codes for categorization and enough context to locate the
//! offending record in the input file.
//!
//! # Error Codes
//!
//! Error codes follow the pattern: `E<category><number>`
//!
//! Categories:
//! - **E1xxx**: I/O and file-format errors
//! - **E2xxx**: record syntax errors
//! - **E3xxx**: model validation errors
//!
//! ## Common Error Codes
//!
//! - `E1001`: I/O error reading file
//! - `E1002`: Unsupported file format
//! - `E2001`: Malformed record
//! - `E3001`: Invalid material
//! - `E3002`: Invalid cell geometry
//! - `E3003`: Unknown material reference
//! - `E3004`: Empty model

use std::io;
use thiserror::Error;

/// Result type for MOD operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when loading MOD files
#[derive(Error, Debug)]
pub enum Error {
    /// IO error occurred while reading the file
    ///
    /// **Error Code**: E1001
    ///
    /// **Common Causes**:
    /// - File not found
    /// - Insufficient permissions
    /// - Disk read error
    #[error("[E1001] I/O error: {0}")]
    Io(#[from] io::Error),

    /// File extension is neither `.mod` nor `.stl`
    ///
    /// **Error Code**: E1002
    ///
    /// **Common Causes**:
    /// - Passing a path to a format the viewer does not handle
    /// - A renamed file whose extension no longer matches its content
    #[error("[E1002] Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Syntax or type error in a MOD record
    ///
    /// **Error Code**: E2001
    ///
    /// **Common Causes**:
    /// - Missing fields in a material or cell record
    /// - Non-numeric coordinate values
    /// - Vertex count that does not match the declared shape tag
    /// - Unknown record keyword
    #[error("[E2001] Malformed record: {0}")]
    MalformedRecord(String),

    /// Material record failed validation
    ///
    /// **Error Code**: E3001
    ///
    /// **Common Causes**:
    /// - Non-positive density (mass computation would be meaningless)
    /// - Color string that is not 6 hexadecimal digits
    /// - Duplicate material id within one file
    #[error("[E3001] Invalid material: {0}")]
    InvalidMaterial(String),

    /// Cell constructed with the wrong number of vertices for its shape
    ///
    /// **Error Code**: E3002
    #[error("[E3002] Invalid cell geometry: {0}")]
    InvalidCellGeometry(String),

    /// Cell record references a material id that was never declared
    ///
    /// **Error Code**: E3003
    #[error("[E3003] Unknown material reference: {0}")]
    UnknownMaterialReference(String),

    /// Aggregate query on a model that contains no cells
    ///
    /// **Error Code**: E3004
    #[error("[E3004] Empty model: {0}")]
    EmptyModel(String),
}

impl From<std::num::ParseFloatError> for Error {
    fn from(err: std::num::ParseFloatError) -> Self {
        Error::MalformedRecord(format!("failed to parse floating-point number: {}", err))
    }
}

impl From<std::num::ParseIntError> for Error {
    fn from(err: std::num::ParseIntError) -> Self {
        Error::MalformedRecord(format!("failed to parse integer: {}", err))
    }
}

impl Error {
    /// Create a MalformedRecord error pointing at a 1-based input line
    ///
    /// # Example
    /// ```ignore
    /// Error::malformed_record(7, "cell record is missing its material id")
    /// ```
    pub fn malformed_record(line: usize, message: impl Into<String>) -> Self {
        Error::MalformedRecord(format!("line {}: {}", line, message.into()))
    }

    /// Create a MalformedRecord error for a field that failed to parse
    ///
    /// # Arguments
    /// * `line` - 1-based line number of the record
    /// * `field` - The name of the field being parsed (e.g., "vertex x coordinate")
    /// * `value` - The value that failed to parse
    pub fn malformed_field(line: usize, field: &str, value: &str) -> Self {
        Error::MalformedRecord(format!(
            "line {}: failed to parse {}: got '{}'",
            line, field, value
        ))
    }

    /// Create an InvalidCellGeometry error for a vertex-count mismatch
    pub fn wrong_vertex_count(shape: &str, expected: usize, got: usize) -> Self {
        Error::InvalidCellGeometry(format!(
            "{} requires exactly {} vertices, got {}",
            shape, expected, got
        ))
    }

    /// Create an UnknownMaterialReference error for a cell record
    pub fn unknown_material(line: usize, id: usize) -> Self {
        Error::UnknownMaterialReference(format!(
            "line {}: cell references undeclared material id {}",
            line, id
        ))
    }
}
