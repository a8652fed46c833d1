mod conversion;
mod difference;
mod equality;
mod string;

// conversion
pub(crate) use conversion::{from_24bit, srgb_to_xyz, to_24bit, xyz_to_lab};

// difference
pub use difference::{DeltaEMethod, Weights};
pub(crate) use difference::{delta_e_2000, hue_angle};

// equality
pub use equality::to_eq_bits;

// string
pub(crate) use string::{format_hex, parse_hex};
