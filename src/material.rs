//! Material records shared by cells
//!
//! A [`Material`] couples a physical density with a display color. One
//! material is typically referenced by many cells; the model owns each
//! material behind an `Arc` and cells hold clones of that handle, so a
//! material is never deep-copied per cell.

use crate::error::{Error, Result};

/// A named material with density and display color
///
/// Invariants enforced at construction:
/// - `density > 0` (mass is `volume * density`, so a non-positive density
///   would make every mass meaningless)
/// - `color` is exactly 6 hexadecimal digits (an optional leading `#` is
///   stripped and not stored)
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    id: usize,
    density: f64,
    color: String,
    name: String,
}

impl Material {
    /// Create a new material, validating density and color
    ///
    /// # Arguments
    ///
    /// * `id` - Identifier cells use to reference this material
    /// * `density` - Mass per unit volume, must be positive
    /// * `color` - 6-hex-digit RGB string such as `"b87333"` (leading `#` allowed)
    /// * `name` - Short material name such as `"cu"`
    ///
    /// # Example
    ///
    /// ```
    /// use libmod::Material;
    ///
    /// let copper = Material::new(0, 8940.0, "b87333", "cu").unwrap();
    /// assert_eq!(copper.density(), 8940.0);
    /// ```
    pub fn new(
        id: usize,
        density: f64,
        color: impl Into<String>,
        name: impl Into<String>,
    ) -> Result<Self> {
        if !(density > 0.0) {
            return Err(Error::InvalidMaterial(format!(
                "material {} has non-positive density {}",
                id, density
            )));
        }

        let color = color.into();
        let color = color.strip_prefix('#').unwrap_or(&color).to_string();
        if parse_color(&color).is_none() {
            return Err(Error::InvalidMaterial(format!(
                "material {} has invalid color '{}', expected 6 hexadecimal digits",
                id, color
            )));
        }

        Ok(Self {
            id,
            density,
            color,
            name: name.into(),
        })
    }

    /// Identifier used by cell records to reference this material
    pub fn id(&self) -> usize {
        self.id
    }

    /// Mass per unit volume
    pub fn density(&self) -> f64 {
        self.density
    }

    /// Display color as a 6-hex-digit RGB string (no leading `#`)
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Short material name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Display color as normalized `[0, 1]` RGB components
    ///
    /// This is the form the rendering collaborator consumes. Construction
    /// validated the color string, so this cannot fail.
    pub fn color_rgb(&self) -> (f64, f64, f64) {
        let (r, g, b) = parse_color(&self.color).unwrap_or((0, 0, 0));
        (
            f64::from(r) / 255.0,
            f64::from(g) / 255.0,
            f64::from(b) / 255.0,
        )
    }
}

/// Parse a color string in RRGGBB format
///
/// An optional leading `#` is accepted. Returns `None` for any other length
/// or for non-hexadecimal digits.
pub fn parse_color(color_str: &str) -> Option<(u8, u8, u8)> {
    let color_str = color_str.trim_start_matches('#');

    if color_str.len() != 6 || !color_str.is_ascii() {
        return None;
    }

    let r = u8::from_str_radix(&color_str[0..2], 16).ok()?;
    let g = u8::from_str_radix(&color_str[2..4], 16).ok()?;
    let b = u8::from_str_radix(&color_str[4..6], 16).ok()?;
    Some((r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color() {
        assert_eq!(parse_color("FF0000"), Some((255, 0, 0)));
        assert_eq!(parse_color("00FF00"), Some((0, 255, 0)));
        assert_eq!(parse_color("0000FF"), Some((0, 0, 255)));
        assert_eq!(parse_color("b87333"), Some((184, 115, 51)));

        // Leading '#' is tolerated
        assert_eq!(parse_color("#FF0000"), Some((255, 0, 0)));

        // Invalid formats
        assert_eq!(parse_color("FF"), None);
        assert_eq!(parse_color("FF0000AA"), None);
        assert_eq!(parse_color("GG0000"), None);
        assert_eq!(parse_color(""), None);
    }

    #[test]
    fn test_color_rgb_normalized() {
        let m = Material::new(0, 8940.0, "b87333", "cu").unwrap();
        let (r, g, b) = m.color_rgb();
        assert!((r - 184.0 / 255.0).abs() < 1e-12);
        assert!((g - 115.0 / 255.0).abs() < 1e-12);
        assert!((b - 51.0 / 255.0).abs() < 1e-12);
    }

    #[test]
    fn test_non_positive_density_rejected() {
        assert!(matches!(
            Material::new(1, 0.0, "ffffff", "void"),
            Err(Error::InvalidMaterial(_))
        ));
        assert!(matches!(
            Material::new(1, -2.5, "ffffff", "antimatter"),
            Err(Error::InvalidMaterial(_))
        ));
        assert!(matches!(
            Material::new(1, f64::NAN, "ffffff", "nan"),
            Err(Error::InvalidMaterial(_))
        ));
    }

    #[test]
    fn test_invalid_color_rejected() {
        assert!(matches!(
            Material::new(2, 1000.0, "xyzxyz", "bad"),
            Err(Error::InvalidMaterial(_))
        ));
        assert!(matches!(
            Material::new(2, 1000.0, "fff", "short"),
            Err(Error::InvalidMaterial(_))
        ));
    }

    #[test]
    fn test_hash_prefix_stripped() {
        let m = Material::new(3, 2700.0, "#a0a0a0", "al").unwrap();
        assert_eq!(m.color(), "a0a0a0");
    }
}
