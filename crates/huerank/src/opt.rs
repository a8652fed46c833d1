//! Helper module with the options for ranking palettes.
//!
//! This module provides the options for [`rank_with`](crate::rank_with) and
//! the corresponding builder.
//!
//!
//! # Example
//!
//! ```
//! # use huerank::{opt::Options, DeltaEMethod};
//! let options = Options::builder()
//!     .count(3)
//!     .method(DeltaEMethod::Cie1994)
//!     .build();
//!
//! assert_eq!(options.count(), 3);
//! assert_eq!(options.method(), DeltaEMethod::Cie1994);
//! ```

use crate::{DeltaEMethod, Weights};

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
struct OptionData {
    count: usize,
    method: DeltaEMethod,
    weights: Weights,
}

impl OptionData {
    pub const fn new() -> Self {
        Self {
            count: 5,
            method: DeltaEMethod::Ciede2000,
            weights: Weights::new(1.0, 1.0, 1.0),
        }
    }
}

impl Default for OptionData {
    fn default() -> Self {
        Self::new()
    }
}

/// A builder of options objects.
#[derive(Debug)]
pub struct OptionBuilder(OptionData);

impl OptionBuilder {
    /// Set the number of closest palette entries to return.
    ///
    /// A count of zero is accepted here but rejected by the ranking functions.
    pub fn count(&mut self, count: usize) -> &mut Self {
        self.0.count = count;
        self
    }

    /// Set the color difference formula.
    pub fn method(&mut self, method: DeltaEMethod) -> &mut Self {
        self.0.method = method;
        self
    }

    /// Set the parametric weights for lightness, chroma, and hue.
    pub fn weights(&mut self, weights: Weights) -> &mut Self {
        self.0.weights = weights;
        self
    }

    /// Instantiate the options.
    pub fn build(&self) -> Options {
        Options(self.0.clone())
    }
}

/// An options object.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Options(OptionData);

impl Default for Options {
    fn default() -> Self {
        Options(OptionData::new())
    }
}

impl Options {
    /// Create a new builder with the default option values.
    pub fn builder() -> OptionBuilder {
        OptionBuilder(OptionData::new())
    }

    /// Instantiate the default options but with the given count.
    pub fn with_count(count: usize) -> Options {
        Self::builder().count(count).build()
    }

    /// Get the number of closest palette entries to return.
    pub fn count(&self) -> usize {
        self.0.count
    }

    /// Get the color difference formula.
    pub fn method(&self) -> DeltaEMethod {
        self.0.method
    }

    /// Get the parametric weights.
    pub fn weights(&self) -> &Weights {
        &self.0.weights
    }
}

#[cfg(test)]
mod test {
    use super::Options;
    use crate::{DeltaEMethod, Weights};

    #[test]
    fn test_defaults() {
        let options = Options::default();
        assert_eq!(options.count(), 5);
        assert_eq!(options.method(), DeltaEMethod::Ciede2000);
        assert_eq!(options.weights(), &Weights::default());
        assert_eq!(options, Options::builder().build());
    }

    #[test]
    fn test_builder() {
        let options = Options::builder()
            .count(0)
            .method(DeltaEMethod::Cie1976)
            .weights(Weights::new(2.0, 1.0, 1.0))
            .build();

        assert_eq!(options.count(), 0);
        assert_eq!(options.method(), DeltaEMethod::Cie1976);
        assert_eq!(options.weights().lightness, 2.0);

        let options = Options::with_count(12);
        assert_eq!(options.count(), 12);
        assert_eq!(options.method(), DeltaEMethod::Ciede2000);
    }
}
