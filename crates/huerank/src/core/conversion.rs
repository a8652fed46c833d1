use crate::Float;

/// Convert the given 24-bit RGB coordinates to floating point coordinates.
#[inline]
pub(crate) fn from_24bit(r: u8, g: u8, b: u8) -> [Float; 3] {
    [r as Float / 255.0, g as Float / 255.0, b as Float / 255.0]
}

/// Convert the color coordinates to 24-bit representation.
///
/// This function assumes that the coordinates are in-gamut, i.e., range
/// `0..=1`. Even if that is not the case, the conversion automatically clamps
/// coordinates to the range `0x00..=0xff`.
pub(crate) fn to_24bit(coordinates: &[Float; 3]) -> [u8; 3] {
    #[inline]
    fn convert(value: Float) -> u8 {
        (value.clamp(0.0, 1.0) * 255.0).round() as u8
    }

    [
        convert(coordinates[0]),
        convert(coordinates[1]),
        convert(coordinates[2]),
    ]
}

// --------------------------------------------------------------------------------------------------------------------

/// Multiply the 3 by 3 matrix and 3-element vector with each other, producing a
/// new 3-element vector.
#[inline]
fn multiply(matrix: &[[Float; 3]; 3], vector: &[Float; 3]) -> [Float; 3] {
    let [row1, row2, row3] = matrix;

    [
        row1[0].mul_add(vector[0], row1[1].mul_add(vector[1], row1[2] * vector[2])),
        row2[0].mul_add(vector[0], row2[1].mul_add(vector[1], row2[2] * vector[2])),
        row3[0].mul_add(vector[0], row3[1].mul_add(vector[1], row3[2] * vector[2])),
    ]
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert coordinates from gamma-corrected sRGB to linear sRGB. This is the
/// inverse of sRGB companding, with a linear segment for small values and a
/// power law with exponent 2.4 otherwise.
pub(crate) fn srgb_to_linear_srgb(value: &[Float; 3]) -> [Float; 3] {
    #[inline]
    fn convert(value: Float) -> Float {
        let magnitude = value.abs();
        if magnitude <= 0.04045 {
            value / 12.92
        } else {
            ((magnitude + 0.055) / 1.055).powf(2.4).copysign(value)
        }
    }

    [convert(value[0]), convert(value[1]), convert(value[2])]
}

// --------------------------------------------------------------------------------------------------------------------
// https://github.com/color-js/color.js/blob/a77e080a070039c534dda3965a769675aac5f75e/src/spaces/srgb-linear.js

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const LINEAR_SRGB_TO_XYZ: [[Float; 3]; 3] = [
    [ 0.41239079926595934, 0.357584339383878,   0.1804807884018343  ],
    [ 0.21263900587151027, 0.715168678767756,   0.07219231536073371 ],
    [ 0.01933081871559182, 0.11919477979462598, 0.9505321522496607  ],
];

/// Convert coordinates for linear sRGB to XYZ. This is a one-hop, direct
/// conversion.
pub(crate) fn linear_srgb_to_xyz(value: &[Float; 3]) -> [Float; 3] {
    multiply(&LINEAR_SRGB_TO_XYZ, value)
}

/// Convert coordinates for gamma-corrected sRGB to XYZ with the D65 reference
/// white.
pub(crate) fn srgb_to_xyz(value: &[Float; 3]) -> [Float; 3] {
    linear_srgb_to_xyz(&srgb_to_linear_srgb(value))
}

// --------------------------------------------------------------------------------------------------------------------

/// The tristimulus values of the D65 reference white for the 2º observer,
/// derived from its chromaticity coordinates x = 0.3127, y = 0.3290.
#[allow(clippy::excessive_precision)]
pub(crate) const D65: [Float; 3] = [
    0.3127 / 0.3290,
    1.0,
    (1.0 - 0.3127 - 0.3290) / 0.3290,
];

mod cielab {
    use crate::Float;

    /// CIE's ϵ = 216/24389, i.e., (6/29)³.
    pub(super) const EPSILON: Float = 216.0 / 24389.0;
    /// CIE's κ = 24389/27, i.e., (29/3)³.
    pub(super) const KAPPA: Float = 24389.0 / 27.0;

    /// CIELAB's nonlinear transfer function.
    #[inline]
    pub(super) fn transfer(t: Float) -> Float {
        if EPSILON < t {
            t.cbrt()
        } else {
            KAPPA.mul_add(t, 16.0) / 116.0
        }
    }
}

/// Convert coordinates for XYZ to CIELAB, both with the D65 reference white.
/// This is a one-hop, direct conversion.
#[allow(non_snake_case)]
pub(crate) fn xyz_to_lab(value: &[Float; 3]) -> [Float; 3] {
    let [X, Y, Z] = *value;
    let [Xn, Yn, Zn] = D65;

    let fx = cielab::transfer(X / Xn);
    let fy = cielab::transfer(Y / Yn);
    let fz = cielab::transfer(Z / Zn);

    [
        fy.mul_add(116.0, -16.0),
        500.0 * (fx - fy),
        200.0 * (fy - fz),
    ]
}

// ====================================================================================================================
