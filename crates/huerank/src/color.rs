use std::str::FromStr;

use crate::core::{
    delta_e_2000 as compute_delta_e_2000, format_hex, from_24bit, hue_angle, parse_hex,
    srgb_to_xyz, to_24bit, xyz_to_lab, DeltaEMethod, Weights,
};
use crate::error::ColorFormatError;
use crate::Float;

/// A gamma-corrected sRGB color.
///
/// All three coordinates are in unit range `0..=1`. [`Srgb::new`] enforces
/// that invariant by clamping; the other constructors satisfy it by
/// construction. Colors are immutable values.
///
/// # Examples
///
/// ```
/// # use huerank::Srgb;
/// # use huerank::error::ColorFormatError;
/// let monokai: Srgb = "#66d9ef".parse()?;
/// assert_eq!(monokai.to_24bit(), [0x66, 0xd9, 0xef]);
/// assert_eq!(monokai, Srgb::from_24bit(0x66, 0xd9, 0xef));
/// assert_eq!(monokai.to_string(), "#66d9ef");
/// # Ok::<(), ColorFormatError>(())
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Srgb([Float; 3]);

impl Srgb {
    /// Create a new sRGB color, clamping each coordinate to `0..=1`.
    /// Not-a-number coordinates become zero.
    pub fn new(r: Float, g: Float, b: Float) -> Self {
        #[inline]
        fn clamp(value: Float) -> Float {
            if value.is_nan() {
                0.0
            } else {
                value.clamp(0.0, 1.0)
            }
        }

        Self([clamp(r), clamp(g), clamp(b)])
    }

    /// Create a new sRGB color from 24-bit integer coordinates.
    pub fn from_24bit(r: u8, g: u8, b: u8) -> Self {
        Self(from_24bit(r, g, b))
    }

    /// Parse a color in hexadecimal notation.
    ///
    /// The string must have exactly six hexadecimal digits with an optional
    /// leading `#`. Red is the most significant byte and blue the least
    /// significant one.
    pub fn parse_hex(s: &str) -> Result<Self, ColorFormatError> {
        let [r, g, b] = parse_hex(s)?;
        Ok(Self::from_24bit(r, g, b))
    }

    /// Access the red coordinate.
    pub const fn red(&self) -> Float {
        self.0[0]
    }

    /// Access the green coordinate.
    pub const fn green(&self) -> Float {
        self.0[1]
    }

    /// Access the blue coordinate.
    pub const fn blue(&self) -> Float {
        self.0[2]
    }

    /// Convert this color to 24-bit representation.
    pub fn to_24bit(&self) -> [u8; 3] {
        to_24bit(&self.0)
    }

    /// Convert this color to CIEXYZ.
    pub fn to_xyz(&self) -> Xyz {
        Xyz(srgb_to_xyz(&self.0))
    }

    /// Convert this color to CIELAB.
    pub fn to_lab(&self) -> Lab {
        self.to_xyz().to_lab()
    }
}

impl FromStr for Srgb {
    type Err = ColorFormatError;

    /// Parse a color in hexadecimal notation. See [`Srgb::parse_hex`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_hex(s)
    }
}

impl TryFrom<&str> for Srgb {
    type Error = ColorFormatError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse_hex(value)
    }
}

impl AsRef<[Float; 3]> for Srgb {
    fn as_ref(&self) -> &[Float; 3] {
        &self.0
    }
}

impl std::ops::Index<usize> for Srgb {
    type Output = Float;

    /// Access the coordinate with the given index.
    ///
    /// # Panics
    ///
    /// This method panics if `2 < index`.
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl std::fmt::Display for Srgb {
    /// Format this color in `#rrggbb` notation.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        format_hex(&self.to_24bit(), f)
    }
}

// ====================================================================================================================

/// A CIEXYZ color with the D65 reference white.
///
/// The luminance Y of the reference white is 1, not 100.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Xyz([Float; 3]);

impl Xyz {
    /// Create a new CIEXYZ color.
    pub const fn new(x: Float, y: Float, z: Float) -> Self {
        Self([x, y, z])
    }

    /// Access the X coordinate.
    pub const fn x(&self) -> Float {
        self.0[0]
    }

    /// Access the luminance Y.
    pub const fn y(&self) -> Float {
        self.0[1]
    }

    /// Access the Z coordinate.
    pub const fn z(&self) -> Float {
        self.0[2]
    }

    /// Convert this color to CIELAB.
    pub fn to_lab(&self) -> Lab {
        Lab(xyz_to_lab(&self.0))
    }
}

impl From<Srgb> for Xyz {
    fn from(value: Srgb) -> Self {
        value.to_xyz()
    }
}

impl AsRef<[Float; 3]> for Xyz {
    fn as_ref(&self) -> &[Float; 3] {
        &self.0
    }
}

// ====================================================================================================================

/// A CIELAB color with the D65 reference white and 2º observer.
///
/// For colors inside the sRGB gamut, lightness L* ranges `0..=100`, whereas
/// a* and b* stay roughly within `-128..=128`.
///
/// # Examples
///
/// ```
/// # use huerank::{hex_to_lab, DeltaEMethod, Lab};
/// # use huerank::error::ColorFormatError;
/// let white = hex_to_lab("#ffffff")?;
/// assert!((white.lightness() - 100.0).abs() < 1e-9);
///
/// let gray = hex_to_lab("#777777")?;
/// assert!(gray.chroma() < 1e-9);
/// assert!(0.0 < white.delta_e(&gray, DeltaEMethod::Ciede2000));
/// # Ok::<(), ColorFormatError>(())
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Lab([Float; 3]);

impl Lab {
    /// Create a new CIELAB color.
    pub const fn new(l: Float, a: Float, b: Float) -> Self {
        Self([l, a, b])
    }

    /// Access the lightness L*.
    pub const fn lightness(&self) -> Float {
        self.0[0]
    }

    /// Access the green/red axis a*.
    pub const fn a(&self) -> Float {
        self.0[1]
    }

    /// Access the blue/yellow axis b*.
    pub const fn b(&self) -> Float {
        self.0[2]
    }

    /// Compute the chroma C*, i.e., the distance from the neutral axis.
    pub fn chroma(&self) -> Float {
        self.0[1].hypot(self.0[2])
    }

    /// Compute the hue angle h in degrees `0..360`. Neutral colors have
    /// hue zero.
    pub fn hue(&self) -> Float {
        hue_angle(self.0[1], self.0[2])
    }

    /// Compute the difference to the other color with the given method and
    /// default weighting factors.
    ///
    /// This color is the reference color, which only matters for CIE94.
    pub fn delta_e(&self, other: &Self, method: DeltaEMethod) -> Float {
        method.compute(&self.0, &other.0, &Weights::default())
    }

    /// Compute the difference to the other color with the given method and
    /// weighting factors.
    pub fn delta_e_with(&self, other: &Self, method: DeltaEMethod, weights: &Weights) -> Float {
        method.compute(&self.0, &other.0, weights)
    }
}

impl DeltaEMethod {
    /// Compute the difference between the two CIELAB colors with this method
    /// and the given weighting factors.
    ///
    /// ```
    /// # use huerank::{DeltaEMethod, Lab, Weights};
    /// let gray = Lab::new(50.0, 0.0, 0.0);
    /// let teal = Lab::new(50.0, -1.0, 2.0);
    /// let d = DeltaEMethod::Cie1976.delta_e(&gray, &teal, &Weights::default());
    /// assert!((d - 5.0_f64.sqrt()).abs() < 1e-12);
    /// ```
    pub fn delta_e(&self, lab1: &Lab, lab2: &Lab, weights: &Weights) -> Float {
        self.compute(&lab1.0, &lab2.0, weights)
    }
}

impl From<Xyz> for Lab {
    fn from(value: Xyz) -> Self {
        value.to_lab()
    }
}

impl From<Srgb> for Lab {
    fn from(value: Srgb) -> Self {
        value.to_lab()
    }
}

impl AsRef<[Float; 3]> for Lab {
    fn as_ref(&self) -> &[Float; 3] {
        &self.0
    }
}

impl std::ops::Index<usize> for Lab {
    type Output = Float;

    /// Access the coordinate with the given index.
    ///
    /// # Panics
    ///
    /// This method panics if `2 < index`.
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

// ====================================================================================================================

/// Convert a color in hexadecimal notation to CIELAB.
///
/// This function composes [`Srgb::parse_hex`], [`Srgb::to_xyz`], and
/// [`Xyz::to_lab`] and is the only conversion needed for ranking palettes.
pub fn hex_to_lab(s: &str) -> Result<Lab, ColorFormatError> {
    Srgb::parse_hex(s).map(|srgb| srgb.to_xyz().to_lab())
}

/// Compute the CIEDE2000 difference between two CIELAB colors with the
/// default weighting factors k<sub>L</sub> = k<sub>C</sub> = k<sub>H</sub> =
/// 1.
///
/// The result is non-negative and zero for identical colors.
///
/// # Examples
///
/// ```
/// # use huerank::{delta_e_2000, Lab};
/// let d = delta_e_2000(&Lab::new(50.0, 0.0, 0.0), &Lab::new(50.0, -1.0, 2.0));
/// assert!((d - 2.3669).abs() < 1e-4);
/// ```
pub fn delta_e_2000(lab1: &Lab, lab2: &Lab) -> Float {
    compute_delta_e_2000(&lab1.0, &lab2.0, &Weights::default())
}

// ====================================================================================================================
