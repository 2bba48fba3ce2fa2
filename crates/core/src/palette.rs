//! The fixed color palette categories are drawn from.
//!
//! The same list is seeded into the `colors` table by migration; each color
//! can be held by at most one category at a time.

use serde::Serialize;

use crate::error::CoreError;

/// A named palette entry. `code` is an uppercase six-digit hex string
/// without the leading `#`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaletteColor {
    pub name: &'static str,
    pub code: &'static str,
}

pub const PALETTE: &[PaletteColor] = &[
    PaletteColor { name: "Red", code: "FE0000" },
    PaletteColor { name: "Orange", code: "EF8906" },
    PaletteColor { name: "Yellow", code: "FFD100" },
    PaletteColor { name: "Green", code: "A9E59E" },
    PaletteColor { name: "Blue", code: "94CAEE" },
    PaletteColor { name: "Purple", code: "D39AFF" },
    PaletteColor { name: "Pink", code: "ECC8FC" },
    PaletteColor { name: "White", code: "FFFFFF" },
];

/// Look up a palette entry by hex code. Accepts any case and an optional
/// leading `#`.
pub fn find_by_code(code: &str) -> Option<&'static PaletteColor> {
    let code = code.trim().trim_start_matches('#');
    PALETTE.iter().find(|c| c.code.eq_ignore_ascii_case(code))
}

/// Validate a color code against the palette, returning its canonical
/// (uppercase) form.
pub fn validate_color_code(code: &str) -> Result<&'static str, CoreError> {
    find_by_code(code).map(|c| c.code).ok_or_else(|| {
        CoreError::Validation(format!(
            "'{code}' is not a palette color. Valid codes: {}",
            PALETTE.iter().map(|c| c.code).collect::<Vec<_>>().join(", ")
        ))
    })
}
