#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::Float;

/// 25⁷, the chroma pivot of CIEDE2000's G and R<sub>C</sub> terms.
const POW25_7: Float = 6_103_515_625.0;

/// The parametric weighting factors k<sub>L</sub>, k<sub>C</sub>, and
/// k<sub>H</sub>.
///
/// The factors divide the lightness, chroma, and hue differences,
/// respectively. The reference conditions for CIE94 and CIEDE2000 set all
/// three to 1, which is the default. Textile applications conventionally use
/// a lightness factor of 2.
///
/// # Examples
///
/// ```
/// # use huerank::Weights;
/// let textiles = Weights::new(2.0, 1.0, 1.0);
/// assert_eq!(textiles.lightness, 2.0);
/// assert_eq!(Weights::default(), Weights::new(1.0, 1.0, 1.0));
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Weights {
    /// The lightness factor k<sub>L</sub>.
    pub lightness: Float,
    /// The chroma factor k<sub>C</sub>.
    pub chroma: Float,
    /// The hue factor k<sub>H</sub>.
    pub hue: Float,
}

impl Weights {
    /// Create new weighting factors.
    pub const fn new(lightness: Float, chroma: Float, hue: Float) -> Self {
        Self {
            lightness,
            chroma,
            hue,
        }
    }
}

impl Default for Weights {
    fn default() -> Self {
        Self::new(1.0, 1.0, 1.0)
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// A choice of color difference formula.
///
/// All three formulae compute a delta-E, i.e., a non-negative scalar that is
/// smaller for more similar colors, from two CIELAB colors.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, eq_int, frozen, hash, module = "huerank")
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum DeltaEMethod {
    /// The Euclidian distance in CIELAB.
    Cie1976,
    /// The CIE94 formula with graphic arts constants. It treats the first
    /// color as reference and hence is not symmetric.
    Cie1994,
    /// The CIEDE2000 formula.
    #[default]
    Ciede2000,
}

impl DeltaEMethod {
    /// Compute the difference between the two CIELAB coordinate triples.
    ///
    /// CIE76 ignores the weighting factors.
    pub(crate) fn compute(
        &self,
        lab1: &[Float; 3],
        lab2: &[Float; 3],
        weights: &Weights,
    ) -> Float {
        match self {
            Self::Cie1976 => delta_e_1976(lab1, lab2),
            Self::Cie1994 => delta_e_1994(lab1, lab2, weights),
            Self::Ciede2000 => delta_e_2000(lab1, lab2, weights),
        }
    }

    /// Get this method's name.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Cie1976 => "CIE 1976",
            Self::Cie1994 => "CIE 1994",
            Self::Ciede2000 => "CIE 2000",
        }
    }
}

impl std::fmt::Display for DeltaEMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// Compute CIE76 Delta-E, i.e., the Euclidian distance in CIELAB.
#[allow(non_snake_case)]
pub(crate) fn delta_e_1976(coordinates1: &[Float; 3], coordinates2: &[Float; 3]) -> Float {
    let [L1, a1, b1] = coordinates1;
    let [L2, a2, b2] = coordinates2;

    let ΔL = L1 - L2;
    let Δa = a1 - a2;
    let Δb = b1 - b2;

    ΔL.mul_add(ΔL, Δa.mul_add(Δa, Δb * Δb)).sqrt()
}

/// Compute CIE94 Delta-E with the graphic arts constants K1 = 0.045 and K2 =
/// 0.015. The first color is the reference.
#[allow(non_snake_case)]
pub(crate) fn delta_e_1994(
    coordinates1: &[Float; 3],
    coordinates2: &[Float; 3],
    weights: &Weights,
) -> Float {
    let [L1, a1, b1] = *coordinates1;
    let [L2, a2, b2] = *coordinates2;

    let C1 = a1.hypot(b1);
    let C2 = a2.hypot(b2);

    let ΔL = L1 - L2;
    let ΔC = C1 - C2;
    let Δa = a1 - a2;
    let Δb = b1 - b2;
    // Rounding may push the hue difference ever so slightly below zero. Not a
    // number must propagate, so no max().
    let ΔH2 = Δa.mul_add(Δa, Δb.mul_add(Δb, -ΔC * ΔC));
    let ΔH2 = if ΔH2 < 0.0 { 0.0 } else { ΔH2 };

    let SC = 0.045_f64.mul_add(C1, 1.0);
    let SH = 0.015_f64.mul_add(C1, 1.0);

    let l = ΔL / weights.lightness;
    let c = ΔC / (weights.chroma * SC);
    let h2 = ΔH2 / (weights.hue * SH).powi(2);

    l.mul_add(l, c.mul_add(c, h2)).sqrt()
}

// --------------------------------------------------------------------------------------------------------------------

/// Compute the hue angle in degrees `0..360` for the Cartesian a/b
/// coordinates. By convention, the hue angle of the origin is zero.
#[inline]
pub(crate) fn hue_angle(a: Float, b: Float) -> Float {
    if a == 0.0 && b == 0.0 {
        return 0.0;
    }

    let h = b.atan2(a).to_degrees();
    if h < 0.0 {
        h + 360.0
    } else {
        h
    }
}

/// Compute CIEDE2000 Delta-E.
///
/// This function implements the formula as presented by Sharma, Wu, and Dalal
/// in "The CIEDE2000 Color-Difference Formula: Implementation Notes,
/// Supplementary Test Data, and Mathematical Observations" (2005). Hue angles
/// are in degrees throughout and only converted to radians for trigonometric
/// functions. If either chroma is zero, the hue difference is zero and the
/// mean hue is the sum of both hues.
///
/// The formula is symmetric except for pairs whose hues differ by exactly
/// 180º, where the mean hue is discontinuous.
#[allow(non_snake_case)]
pub(crate) fn delta_e_2000(
    coordinates1: &[Float; 3],
    coordinates2: &[Float; 3],
    weights: &Weights,
) -> Float {
    let [L1, a1, b1] = *coordinates1;
    let [L2, a2, b2] = *coordinates2;

    // Rescale a* by G, which depends on the mean chroma.
    let C_mean = (a1.hypot(b1) + a2.hypot(b2)) / 2.0;
    let C_mean7 = C_mean.powi(7);
    let G = 0.5 * (1.0 - (C_mean7 / (C_mean7 + POW25_7)).sqrt());

    let a1p = a1 * (1.0 + G);
    let a2p = a2 * (1.0 + G);

    let C1p = a1p.hypot(b1);
    let C2p = a2p.hypot(b2);
    let h1p = hue_angle(a1p, b1);
    let h2p = hue_angle(a2p, b2);

    // Differences in lightness, chroma, and hue
    let ΔLp = L2 - L1;
    let ΔCp = C2p - C1p;

    let C1pC2p = C1p * C2p;
    let Δhp = if C1pC2p == 0.0 {
        0.0
    } else {
        let Δ = h2p - h1p;
        if 180.0 < Δ {
            Δ - 360.0
        } else if Δ < -180.0 {
            Δ + 360.0
        } else {
            Δ
        }
    };
    let ΔHp = 2.0 * C1pC2p.sqrt() * (Δhp.to_radians() / 2.0).sin();

    // Means of lightness, chroma, and hue
    let L_mean = (L1 + L2) / 2.0;
    let Cp_mean = (C1p + C2p) / 2.0;
    let hp_mean = if C1pC2p == 0.0 {
        h1p + h2p
    } else if (h1p - h2p).abs() <= 180.0 {
        (h1p + h2p) / 2.0
    } else if h1p + h2p < 360.0 {
        (h1p + h2p + 360.0) / 2.0
    } else {
        (h1p + h2p - 360.0) / 2.0
    };

    // Weighting functions
    let T = (-0.17_f64).mul_add(
        (hp_mean - 30.0).to_radians().cos(),
        0.24_f64.mul_add(
            (2.0 * hp_mean).to_radians().cos(),
            0.32_f64.mul_add(
                3.0_f64.mul_add(hp_mean, 6.0).to_radians().cos(),
                (-0.20_f64).mul_add(4.0_f64.mul_add(hp_mean, -63.0).to_radians().cos(), 1.0),
            ),
        ),
    );

    let L50 = (L_mean - 50.0).powi(2);
    let SL = 1.0 + 0.015 * L50 / (20.0 + L50).sqrt();
    let SC = 0.045_f64.mul_add(Cp_mean, 1.0);
    let SH = (0.015 * Cp_mean).mul_add(T, 1.0);

    // Rotation term for blues
    let Δθ = 30.0 * (-((hp_mean - 275.0) / 25.0).powi(2)).exp();
    let Cp_mean7 = Cp_mean.powi(7);
    let RC = 2.0 * (Cp_mean7 / (Cp_mean7 + POW25_7)).sqrt();
    let RT = -(2.0 * Δθ).to_radians().sin() * RC;

    let l = ΔLp / (weights.lightness * SL);
    let c = ΔCp / (weights.chroma * SC);
    let h = ΔHp / (weights.hue * SH);

    // The quadratic form is positive semi-definite, but only up to rounding.
    // Not a number must propagate, so no max().
    let q = RT.mul_add(c * h, l.mul_add(l, c.mul_add(c, h * h)));
    if q < 0.0 {
        0.0
    } else {
        q.sqrt()
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{delta_e_1976, delta_e_1994, delta_e_2000, hue_angle, DeltaEMethod, Weights};
    use crate::assert_close_enough;
    use crate::Float;

    /// A selection of pairs from Sharma, Wu, and Dalal's supplementary test
    /// data with the expected CIEDE2000 difference.
    const SHARMA: [([Float; 3], [Float; 3], Float); 8] = [
        ([50.0, 2.6772, -79.7751], [50.0, 0.0, -82.7485], 2.0425),
        ([50.0, 3.1571, -77.2803], [50.0, 0.0, -82.7485], 2.8615),
        ([50.0, 0.0, 0.0], [50.0, -1.0, 2.0], 2.3669),
        ([50.0, 2.5, 0.0], [50.0, 0.0, -2.5], 4.3065),
        ([50.0, 2.5, 0.0], [73.0, 25.0, -18.0], 27.1492),
        ([50.0, 2.5, 0.0], [50.0, 3.1736, 0.5854], 1.0000),
        ([60.2574, -34.0099, 36.2677], [60.4626, -34.1751, 39.4387], 1.2644),
        ([2.0776, 0.0795, -1.1350], [0.9033, -0.0636, -0.5514], 0.9082),
    ];

    #[test]
    fn test_hue_angle() {
        assert_eq!(hue_angle(0.0, 0.0), 0.0);
        assert_eq!(hue_angle(-0.0, -0.0), 0.0);
        assert_close_enough!(hue_angle(1.0, 0.0), 0.0);
        assert_close_enough!(hue_angle(0.0, 1.0), 90.0);
        assert_close_enough!(hue_angle(-1.0, 0.0), 180.0);
        assert_close_enough!(hue_angle(0.0, -1.0), 270.0);
    }

    #[test]
    fn test_ciede2000_reference_pairs() {
        let weights = Weights::default();
        for (lab1, lab2, expected) in SHARMA {
            let forward = delta_e_2000(&lab1, &lab2, &weights);
            let backward = delta_e_2000(&lab2, &lab1, &weights);
            assert!(
                (forward - expected).abs() < 5e-5,
                "ΔE00 of {:?} and {:?} is {} instead of {}",
                lab1,
                lab2,
                forward,
                expected
            );
            assert!((forward - backward).abs() < 1e-9);
        }
    }

    #[test]
    fn test_ciede2000_identity() {
        let weights = Weights::default();
        for lab in [
            [0.0, 0.0, 0.0],
            [100.0, 0.0, 0.0],
            [53.2371, 80.0901, 67.2033],
            [32.3009, 79.1953, -107.8555],
            [50.0, -0.0, -0.0],
        ] {
            assert_eq!(delta_e_2000(&lab, &lab, &weights), 0.0);
        }
    }

    #[test]
    fn test_ciede2000_hue_wraparound() {
        // Hues of 5º and 355º are 10º apart, not 350º.
        let weights = Weights::default();
        let polar = |h: Float| [50.0, 20.0 * h.to_radians().cos(), 20.0 * h.to_radians().sin()];
        let lab1 = polar(5.0);
        let lab2 = polar(355.0);
        let lab3 = polar(15.0);

        let across = delta_e_2000(&lab1, &lab2, &weights);
        let within = delta_e_2000(&lab1, &lab3, &weights);
        assert!(across < 2.0 * within);
        assert!(within < 2.0 * across);
    }

    #[test]
    fn test_ciede2000_weights() {
        let lab1 = [50.0, 2.5, 0.0];
        let lab2 = [73.0, 25.0, -18.0];
        let plain = delta_e_2000(&lab1, &lab2, &Weights::default());
        let textiles = delta_e_2000(&lab1, &lab2, &Weights::new(2.0, 1.0, 1.0));
        assert!(textiles < plain);

        // Lightness only
        let lab1 = [40.0, 0.0, 0.0];
        let lab2 = [60.0, 0.0, 0.0];
        let plain = delta_e_2000(&lab1, &lab2, &Weights::default());
        let halved = delta_e_2000(&lab1, &lab2, &Weights::new(2.0, 1.0, 1.0));
        assert_close_enough!(halved, plain / 2.0);
    }

    #[test]
    fn test_cie76_and_cie94() {
        let target = [81.1154737083014, -26.407522332515644, -20.641178632119406];
        let white = [100.0, 0.0, 0.0];

        assert!((delta_e_1976(&target, &white) - 38.471298708611734).abs() < 1e-9);
        assert!(
            (delta_e_1994(&target, &white, &Weights::default()) - 23.134102350835796).abs()
                < 1e-9
        );
        assert_eq!(delta_e_1976(&target, &target), 0.0);
        assert_eq!(delta_e_1994(&target, &target, &Weights::default()), 0.0);
    }

    #[test]
    fn test_not_a_number_propagates() {
        let weights = Weights::default();
        let gray = [50.0, 0.0, 0.0];
        for broken in [
            [Float::NAN, 0.0, 0.0],
            [50.0, Float::NAN, 0.0],
            [50.0, 0.0, Float::NAN],
        ] {
            assert!(delta_e_1976(&gray, &broken).is_nan(), "{:?}", broken);
            assert!(delta_e_1994(&gray, &broken, &weights).is_nan(), "{:?}", broken);
            assert!(delta_e_1994(&broken, &gray, &weights).is_nan(), "{:?}", broken);
            assert!(delta_e_2000(&gray, &broken, &weights).is_nan(), "{:?}", broken);
            assert!(delta_e_2000(&broken, &gray, &weights).is_nan(), "{:?}", broken);
        }
    }

    #[test]
    fn test_method() {
        let lab1 = [50.0, 0.0, 0.0];
        let lab2 = [50.0, -1.0, 2.0];
        let weights = Weights::default();

        assert_eq!(DeltaEMethod::default(), DeltaEMethod::Ciede2000);
        assert_close_enough!(
            DeltaEMethod::Cie1976.compute(&lab1, &lab2, &weights),
            (5.0 as Float).sqrt()
        );
        assert_eq!(
            DeltaEMethod::Ciede2000.compute(&lab1, &lab2, &weights),
            delta_e_2000(&lab1, &lab2, &weights)
        );
        assert_eq!(DeltaEMethod::Ciede2000.to_string(), "CIE 2000");
    }
}
