//! Utility module with huerank's errors.

#[cfg(feature = "pyffi")]
use pyo3::{exceptions::PyValueError, prelude::*};

/// An erroneous hexadecimal color format.
///
/// Both variants carry the offending input, so that callers ranking a large
/// palette can tell which entry is corrupt.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ColorFormatError {
    /// A color format with anything other than six hexadecimal digits after
    /// the optional `#` prefix. For example, `#12345` is missing a digit.
    #[error("hex color `{0}` should have exactly 6 digits")]
    UnexpectedLength(String),

    /// A color format with the right length but characters that are not
    /// hexadecimal digits. For example, `zzzzzz` has no valid digit at all.
    #[error("hex color `{0}` should contain hexadecimal digits only")]
    MalformedHex(String),
}

#[cfg(feature = "pyffi")]
impl From<ColorFormatError> for PyErr {
    fn from(value: ColorFormatError) -> Self {
        PyValueError::new_err(value.to_string())
    }
}

// ====================================================================================================================

/// The errors surfaced by palette ranking.
///
/// There are exactly two kinds. Conversion between color spaces and the
/// computation of color differences are total and never fail.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A target or palette color is not a valid hexadecimal color.
    #[error(transparent)]
    InvalidFormat(#[from] ColorFormatError),

    /// A selection parameter is out of range, e.g., `k` is zero.
    #[error("{name} should be positive but is {value}")]
    InvalidArgument { name: &'static str, value: usize },
}

impl Error {
    /// Determine whether this error is an invalid format error.
    pub const fn is_invalid_format(&self) -> bool {
        matches!(self, Self::InvalidFormat(_))
    }

    /// Determine whether this error is an invalid argument error.
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }
}

#[cfg(feature = "pyffi")]
impl From<Error> for PyErr {
    fn from(value: Error) -> Self {
        PyValueError::new_err(value.to_string())
    }
}
