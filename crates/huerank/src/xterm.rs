//! The xterm 256-color palette.
//!
//! Terminals that support 8-bit color index into a palette of 256 colors:
//!
//!   * Indices 0–15 are the 16 ANSI colors. Their actual colors depend on the
//!     terminal's theme; this module uses xterm's defaults.
//!   * Indices 16–231 form a 6×6×6 RGB cube, with each coordinate selecting
//!     one of the levels in [`CUBE_LEVELS`].
//!   * Indices 232–255 form a 24-step gray gradient from `#080808` to
//!     `#eeeeee`.
//!
//! [`palette`] returns all 256 colors as [`PaletteEntry`] values, ready for
//! ranking.
//!
//! ```
//! # use huerank::{rank, xterm, DeltaEMethod};
//! # use huerank::error::Error;
//! let palette = xterm::palette();
//! let closest = rank("#ff8800", &palette, 1, DeltaEMethod::Ciede2000)?;
//! assert_eq!(closest[0].id, 208);
//! # Ok::<(), Error>(())
//! ```

use crate::{PaletteEntry, Srgb};

/// The names and xterm default colors of the 16 ANSI colors.
pub const ANSI_COLORS: [(&str, [u8; 3]); 16] = [
    ("black", [0x00, 0x00, 0x00]),
    ("red", [0xcd, 0x00, 0x00]),
    ("green", [0x00, 0xcd, 0x00]),
    ("yellow", [0xcd, 0xcd, 0x00]),
    ("blue", [0x00, 0x00, 0xee]),
    ("magenta", [0xcd, 0x00, 0xcd]),
    ("cyan", [0x00, 0xcd, 0xcd]),
    ("white", [0xe5, 0xe5, 0xe5]),
    ("bright black", [0x7f, 0x7f, 0x7f]),
    ("bright red", [0xff, 0x00, 0x00]),
    ("bright green", [0x00, 0xff, 0x00]),
    ("bright yellow", [0xff, 0xff, 0x00]),
    ("bright blue", [0x5c, 0x5c, 0xff]),
    ("bright magenta", [0xff, 0x00, 0xff]),
    ("bright cyan", [0x00, 0xff, 0xff]),
    ("bright white", [0xff, 0xff, 0xff]),
];

/// The six levels of each coordinate in the embedded RGB cube.
pub const CUBE_LEVELS: [u8; 6] = [0, 95, 135, 175, 215, 255];

/// The kind of an 8-bit color.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Kind {
    Ansi(usize),
    Cube([u8; 3]),
    Gray(u8),
}

impl Kind {
    const fn of(index: u8) -> Self {
        match index {
            0..=15 => Self::Ansi(index as usize),
            16..=231 => {
                let n = index - 16;
                Self::Cube([n / 36, n / 6 % 6, n % 6])
            }
            232..=255 => Self::Gray(index - 232),
        }
    }
}

/// Get the 24-bit color for the 8-bit color index.
///
/// # Examples
///
/// ```
/// # use huerank::xterm::to_24bit;
/// assert_eq!(to_24bit(1), [0xcd, 0x00, 0x00]);
/// assert_eq!(to_24bit(75), [0x5f, 0xaf, 0xff]);
/// assert_eq!(to_24bit(252), [0xd0, 0xd0, 0xd0]);
/// ```
pub const fn to_24bit(index: u8) -> [u8; 3] {
    match Kind::of(index) {
        Kind::Ansi(index) => ANSI_COLORS[index].1,
        Kind::Cube([r, g, b]) => [
            CUBE_LEVELS[r as usize],
            CUBE_LEVELS[g as usize],
            CUBE_LEVELS[b as usize],
        ],
        Kind::Gray(level) => {
            let value = 8 + 10 * level;
            [value, value, value]
        }
    }
}

/// Get the name for the 8-bit color index.
///
/// ANSI colors have their usual names. Colors in the RGB cube are named after
/// their cube coordinates and colors in the gray gradient after their level.
///
/// ```
/// # use huerank::xterm::name;
/// assert_eq!(name(9), "bright red");
/// assert_eq!(name(208), "rgb6(5, 2, 0)");
/// assert_eq!(name(255), "gray(23)");
/// ```
pub fn name(index: u8) -> String {
    match Kind::of(index) {
        Kind::Ansi(index) => ANSI_COLORS[index].0.to_owned(),
        Kind::Cube([r, g, b]) => format!("rgb6({}, {}, {})", r, g, b),
        Kind::Gray(level) => format!("gray({})", level),
    }
}

/// Get the palette entry for the 8-bit color index.
pub fn entry(index: u8) -> PaletteEntry {
    let [r, g, b] = to_24bit(index);
    PaletteEntry::new(
        u32::from(index),
        name(index),
        Srgb::from_24bit(r, g, b).to_string(),
    )
}

/// Get the entire 256-color palette in index order.
pub fn palette() -> Vec<PaletteEntry> {
    (0..=u8::MAX).map(entry).collect()
}
