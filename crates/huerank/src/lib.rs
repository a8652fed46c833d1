//! # Huerank
//!
//! Huerank ranks color palettes by perceptual closeness to a target color.
#![cfg_attr(
    not(feature = "pyffi"),
    doc = " This version of the API documentation **covers native Rust interfaces
only**."
)]
#![cfg_attr(
    feature = "pyffi",
    doc = " This version of the API documentation **covers both Rust and Python
interfaces**."
)]
//!
//!
//! ## 1. Overview
//!
//! At its core, huerank is a small colorimetric pipeline:
//!
//!   * [`Srgb`], [`Xyz`], and [`Lab`] are **immutable color values**. Colors in
//!     hexadecimal notation are parsed into sRGB, converted to CIEXYZ with the
//!     sRGB primaries and D65 white point, and then converted to CIELAB.
//!     [`hex_to_lab`] composes all three steps.
//!   * [`delta_e_2000`] computes the **CIEDE2000 color difference** between
//!     two CIELAB colors. [`DeltaEMethod`] also offers the older CIE76 and
//!     CIE94 formulae, and [`Weights`] holds the parametric factors
//!     k<sub>L</sub>, k<sub>C</sub>, and k<sub>H</sub>.
//!   * The [`select`] module implements **bounded top-k selection** with
//!     [`TopK`](select::TopK) and
//!     [`select_k_smallest`](select::select_k_smallest). Memory stays
//!     proportional to k, no matter the size of the input.
//!   * [`rank`], [`rank_with`], and [`Ranker`] tie everything together and
//!     return the palette entries closest to a target color as
//!     [`RankedResult`]s, ordered by ascending delta-E and then identifier.
//!     The [`opt`] module defines the corresponding [`Options`](opt::Options).
//!   * The [`xterm`] module provides the **xterm 256-color palette**.
//!
//! Reading palette files, parsing command line arguments, and colorizing
//! terminal output are the caller's responsibility.
//!
//!
//! ## 2. Example
//!
//! ```
//! # use huerank::{rank, DeltaEMethod, PaletteEntry};
//! # use huerank::error::Error;
//! let palette = vec![
//!     PaletteEntry::new(1, "A", "#66d9ef"),
//!     PaletteEntry::new(2, "B", "#000000"),
//!     PaletteEntry::new(3, "C", "#ffffff"),
//! ];
//!
//! let closest = rank("#66d9ef", &palette, 2, DeltaEMethod::Ciede2000)?;
//! assert_eq!(closest.len(), 2);
//! assert_eq!((closest[0].id, closest[0].delta_e), (1, 0.0));
//! assert_eq!(closest[1].name, "C");
//! # Ok::<(), Error>(())
//! ```
//!
//!
//! ## 3. Optional Features
//!
//! Huerank supports three feature flags:
//!
//!   - **`serde`** derives `Serialize` and `Deserialize` for the color values,
//!     palette entries, ranked results, and options. Palette entries use the
//!     `colorId`, `name`, and `hexString` keys of common xterm palette files.
//!     This feature is disabled by default.
//!   - **`parallel`** adds [`rank_parallel`] and
//!     [`Ranker::rank_parallel`], which distribute the computation of color
//!     differences across [rayon](https://docs.rs/rayon)'s thread pool. This
//!     feature is disabled by default.
//!   - **`pyffi`** controls huerank's Python integration through
//!     [PyO3](https://pyo3.rs/). This feature is disabled by default.
//!
//! Huerank logs through [tracing](https://docs.rs/tracing). Ranking runs in a
//! `rank` span and reports every scored palette entry at trace level as well
//! as malformed colors and the number of results at debug level. It is up to
//! the application to install a subscriber.
//!
//!
//! ## 4. Precision
//!
//! All computations use [`Float`], i.e., `f64`. Near-ties in delta-E may
//! hence order differently than with extended precision arithmetic. Exact
//! ties are broken by the palette entries' identifiers.
//!
//!

/// The floating point type in use.
pub type Float = f64;

/// [`Float`]'s bits.
pub type Bits = u64;

mod color;
mod core;
pub mod error;
pub mod opt;
mod rank;
pub mod select;
pub mod xterm;

#[doc(hidden)]
pub use core::to_eq_bits;

pub use color::{delta_e_2000, hex_to_lab, Lab, Srgb, Xyz};
pub use core::{DeltaEMethod, Weights};
#[cfg(feature = "parallel")]
pub use rank::rank_parallel;
pub use rank::{rank, rank_with, PaletteEntry, RankedResult, Ranker};

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

/// Compute the CIEDE2000 difference between two colors in hexadecimal
/// notation. <i class=python-only>Python only!</i>
#[cfg(feature = "pyffi")]
#[pyfunction]
pub fn delta_e_hex(hex1: &str, hex2: &str) -> Result<Float, error::Error> {
    Ok(delta_e_2000(&hex_to_lab(hex1)?, &hex_to_lab(hex2)?))
}

/// Convert a color in hexadecimal notation to its CIELAB coordinates. <i
/// class=python-only>Python only!</i>
#[cfg(feature = "pyffi")]
#[pyfunction]
#[pyo3(name = "hex_to_lab")]
pub fn py_hex_to_lab(hex: &str) -> Result<[Float; 3], error::ColorFormatError> {
    hex_to_lab(hex).map(|lab| *lab.as_ref())
}

#[doc(hidden)]
#[cfg(feature = "pyffi")]
#[pymodule]
pub fn huerank(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(rank::py_rank, m)?)?;
    m.add_function(wrap_pyfunction!(py_hex_to_lab, m)?)?;
    m.add_function(wrap_pyfunction!(delta_e_hex, m)?)?;

    m.add_class::<DeltaEMethod>()?;
    m.add_class::<PaletteEntry>()?;
    m.add_class::<RankedResult>()?;

    Ok(())
}
