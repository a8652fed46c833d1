use std::num::NonZeroUsize;

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, debug_span, trace};

use crate::error::Error;
use crate::opt::Options;
use crate::select::TopK;
use crate::{hex_to_lab, DeltaEMethod, Float, Lab};

/// An entry in a color palette.
///
/// Each entry has a numeric identifier, a display name, and a color in
/// hexadecimal notation. The identifier doubles as tie-breaker when two
/// entries are equally close to a target color. Entries are read-only inputs;
/// ranking never changes them.
///
/// With the `serde` feature enabled, entries use the field names of the
/// common xterm palette files, i.e., `colorId`, `name`, and `hexString`. The
/// `colorId` may be an integer or a string containing an integer.
///
/// # Examples
///
/// ```
/// # use huerank::PaletteEntry;
/// let entry = PaletteEntry::new(81, "SteelBlue1", "#5fd7ff");
/// assert_eq!(entry.id, 81);
/// assert_eq!(entry.name, "SteelBlue1");
/// ```
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, frozen, get_all, module = "huerank")
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PaletteEntry {
    /// The identifier.
    #[cfg_attr(
        feature = "serde",
        serde(rename = "colorId", deserialize_with = "color_id::deserialize")
    )]
    pub id: u32,
    /// The display name.
    pub name: String,
    /// The color in hexadecimal notation, with or without leading `#`.
    #[cfg_attr(feature = "serde", serde(rename = "hexString"))]
    pub hex: String,
}

impl PaletteEntry {
    /// Create a new palette entry.
    pub fn new<N: Into<String>, H: Into<String>>(id: u32, name: N, hex: H) -> Self {
        Self {
            id,
            name: name.into(),
            hex: hex.into(),
        }
    }

    /// Convert this entry's color to CIELAB.
    ///
    /// A malformed color is logged together with the entry's identifier.
    pub fn to_lab(&self) -> Result<Lab, Error> {
        hex_to_lab(&self.hex).map_err(|error| {
            debug!(id = self.id, %error, "malformed palette color");
            Error::from(error)
        })
    }
}

#[cfg(feature = "pyffi")]
#[pymethods]
impl PaletteEntry {
    /// Create a new palette entry. <i class=python-only>Python only!</i>
    #[new]
    pub fn py_new(id: u32, name: String, hex: String) -> Self {
        Self { id, name, hex }
    }

    /// Render a debug representation. <i class=python-only>Python only!</i>
    pub fn __repr__(&self) -> String {
        format!(
            "PaletteEntry(id={}, name={:?}, hex={:?})",
            self.id, self.name, self.hex
        )
    }
}

#[cfg(feature = "serde")]
mod color_id {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum ColorId {
        Number(u32),
        Text(String),
    }

    /// Deserialize an identifier given as integer or string of digits.
    pub(super) fn deserialize<'de, D>(deserializer: D) -> Result<u32, D::Error>
    where
        D: Deserializer<'de>,
    {
        match ColorId::deserialize(deserializer)? {
            ColorId::Number(id) => Ok(id),
            ColorId::Text(text) => text.trim().parse().map_err(|_| {
                D::Error::custom(format!("color id `{}` should be an unsigned integer", text))
            }),
        }
    }
}

// ====================================================================================================================

/// The distance between a palette entry and the target color.
///
/// Results order by ascending delta-E and then by ascending identifier.
#[cfg_attr(
    feature = "pyffi",
    pyclass(frozen, get_all, module = "huerank")
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct RankedResult {
    /// The palette entry's identifier.
    pub id: u32,
    /// The palette entry's display name.
    pub name: String,
    /// The non-negative color difference to the target color.
    pub delta_e: Float,
}

impl RankedResult {
    fn new(entry: &PaletteEntry, delta_e: Float) -> Self {
        Self {
            id: entry.id,
            name: entry.name.clone(),
            delta_e,
        }
    }
}

#[cfg(feature = "pyffi")]
#[pymethods]
impl RankedResult {
    /// Render a debug representation. <i class=python-only>Python only!</i>
    pub fn __repr__(&self) -> String {
        format!(
            "RankedResult(id={}, name={:?}, delta_e={})",
            self.id, self.name, self.delta_e
        )
    }
}

// ====================================================================================================================

/// A ranker of palettes by closeness to a fixed target color.
///
/// A ranker converts the target color to CIELAB once and validates the count
/// of requested results upfront. It then ranks any number of palettes. Each
/// ranking selects the closest palette entries with a bounded [`TopK`], so
/// memory stays proportional to the count, not the palette size.
///
/// # Examples
///
/// ```
/// # use huerank::{PaletteEntry, Ranker, opt::Options};
/// # use huerank::error::Error;
/// let palette = vec![
///     PaletteEntry::new(16, "Grey0", "#000000"),
///     PaletteEntry::new(81, "SteelBlue1", "#5fd7ff"),
///     PaletteEntry::new(231, "Grey100", "#ffffff"),
/// ];
///
/// let ranker = Ranker::new("#66d9ef", Options::with_count(2))?;
/// let closest = ranker.rank(&palette)?;
/// assert_eq!(closest.len(), 2);
/// assert_eq!(closest[0].name, "SteelBlue1");
/// assert_eq!(closest[1].name, "Grey100");
/// # Ok::<(), Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct Ranker {
    target: Lab,
    count: NonZeroUsize,
    options: Options,
}

impl Ranker {
    /// Create a new ranker for the target color in hexadecimal notation.
    ///
    /// This function fails with [`Error::InvalidArgument`] if the options
    /// request zero results and with [`Error::InvalidFormat`] if the target
    /// color is malformed.
    pub fn new(target_hex: &str, options: Options) -> Result<Self, Error> {
        let count = NonZeroUsize::new(options.count()).ok_or(Error::InvalidArgument {
            name: "k",
            value: options.count(),
        })?;
        let target = hex_to_lab(target_hex).map_err(|error| {
            debug!(%error, "malformed target color");
            Error::from(error)
        })?;

        Ok(Self {
            target,
            count,
            options,
        })
    }

    /// Get the target color.
    pub const fn target(&self) -> &Lab {
        &self.target
    }

    /// Get the options.
    pub const fn options(&self) -> &Options {
        &self.options
    }

    /// Compute the difference between the target color and the palette
    /// entry's color.
    pub fn delta_e(&self, entry: &PaletteEntry) -> Result<Float, Error> {
        let lab = entry.to_lab()?;
        let delta_e =
            self.target
                .delta_e_with(&lab, self.options.method(), self.options.weights());
        trace!(id = entry.id, delta_e, "scored palette entry");
        Ok(delta_e)
    }

    /// Score the palette entry.
    pub fn score(&self, entry: &PaletteEntry) -> Result<RankedResult, Error> {
        self.delta_e(entry)
            .map(|delta_e| RankedResult::new(entry, delta_e))
    }

    /// Rank the palette.
    ///
    /// This method consumes the palette one entry at a time and returns the
    /// closest entries in ascending order by delta-E and identifier. It stops
    /// at the first malformed color and returns the error.
    pub fn rank<'a, P>(&self, palette: P) -> Result<Vec<RankedResult>, Error>
    where
        P: IntoIterator<Item = &'a PaletteEntry>,
    {
        let palette = palette.into_iter();
        let span = debug_span!(
            "rank",
            k = self.count.get(),
            method = %self.options.method(),
            size = palette.size_hint().0
        );
        let _guard = span.enter();

        let mut selection = TopK::with_capacity(self.count);
        for entry in palette {
            let delta_e = self.delta_e(entry)?;
            selection.push(delta_e, entry.id, (entry, delta_e));
        }

        Ok(Self::finish(selection))
    }

    /// Rank the palette on rayon's thread pool.
    ///
    /// Every worker selects the closest entries of its share of the palette
    /// and the partial selections are then merged. The result is the same as
    /// for [`Ranker::rank`]. However, if the palette contains several
    /// malformed colors, the returned error may be for any one of them.
    #[cfg(feature = "parallel")]
    pub fn rank_parallel(&self, palette: &[PaletteEntry]) -> Result<Vec<RankedResult>, Error> {
        let span = debug_span!(
            "rank",
            k = self.count.get(),
            method = %self.options.method(),
            size = palette.len()
        );
        let _guard = span.enter();

        let selection = palette
            .par_iter()
            .try_fold(
                || TopK::with_capacity(self.count),
                |mut selection, entry| {
                    let delta_e = self.delta_e(entry)?;
                    selection.push(delta_e, entry.id, (entry, delta_e));
                    Ok::<_, Error>(selection)
                },
            )
            .try_reduce(
                || TopK::with_capacity(self.count),
                |selection, other| Ok(selection.merge(other)),
            )?;

        Ok(Self::finish(selection))
    }

    fn finish(selection: TopK<u32, (&PaletteEntry, Float)>) -> Vec<RankedResult> {
        let results: Vec<_> = selection
            .into_sorted_vec()
            .into_iter()
            .map(|(entry, delta_e)| RankedResult::new(entry, delta_e))
            .collect();

        debug!(count = results.len(), "ranked palette");
        results
    }
}

// ====================================================================================================================

/// Rank the palette by closeness to the target color.
///
/// This function returns up to `k` palette entries in ascending order by
/// their delta-E to the target color, with ties broken by ascending
/// identifier. It fails with [`Error::InvalidArgument`] if `k` is zero and
/// with [`Error::InvalidFormat`] if the target or any palette color is
/// malformed. Malformed palette colors are never skipped.
///
/// # Examples
///
/// ```
/// # use huerank::{rank, DeltaEMethod, PaletteEntry};
/// # use huerank::error::Error;
/// let palette = vec![
///     PaletteEntry::new(1, "A", "#66d9ef"),
///     PaletteEntry::new(2, "B", "#000000"),
///     PaletteEntry::new(3, "C", "#ffffff"),
/// ];
///
/// let closest = rank("#66d9ef", &palette, 2, DeltaEMethod::Ciede2000)?;
/// assert_eq!(closest[0].id, 1);
/// assert_eq!(closest[0].delta_e, 0.0);
/// assert_eq!(closest[1].id, 3);
///
/// let error = rank("#66d9ef", &palette, 0, DeltaEMethod::Ciede2000);
/// assert!(error.is_err_and(|e| e.is_invalid_argument()));
/// # Ok::<(), Error>(())
/// ```
pub fn rank<'a, P>(
    target_hex: &str,
    palette: P,
    k: usize,
    method: DeltaEMethod,
) -> Result<Vec<RankedResult>, Error>
where
    P: IntoIterator<Item = &'a PaletteEntry>,
{
    let options = Options::builder().count(k).method(method).build();
    rank_with(target_hex, palette, &options)
}

/// Rank the palette by closeness to the target color with the given options.
///
/// This function behaves like [`rank`] but also supports custom weighting
/// factors.
pub fn rank_with<'a, P>(
    target_hex: &str,
    palette: P,
    options: &Options,
) -> Result<Vec<RankedResult>, Error>
where
    P: IntoIterator<Item = &'a PaletteEntry>,
{
    Ranker::new(target_hex, options.clone())?.rank(palette)
}

/// Rank the palette by closeness to the target color on rayon's thread pool.
///
/// This function returns the same results as [`rank_with`].
#[cfg(feature = "parallel")]
pub fn rank_parallel(
    target_hex: &str,
    palette: &[PaletteEntry],
    options: &Options,
) -> Result<Vec<RankedResult>, Error> {
    Ranker::new(target_hex, options.clone())?.rank_parallel(palette)
}

/// Rank the palette by closeness to the target color. <i
/// class=python-only>Python only!</i>
#[cfg(feature = "pyffi")]
#[pyfunction]
#[pyo3(name = "rank", signature = (target_hex, palette, k = 5, method = DeltaEMethod::Ciede2000))]
pub fn py_rank(
    target_hex: &str,
    palette: Vec<PaletteEntry>,
    k: usize,
    method: DeltaEMethod,
) -> Result<Vec<RankedResult>, Error> {
    rank(target_hex, &palette, k, method)
}

// ====================================================================================================================
