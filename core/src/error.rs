//! Error types.
//!
//! Not finding a path is not an error: searches return `None` instead.

use thiserror::Error;

use crate::grid::Hex;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A ring or area was requested with a negative radius.
    #[error("invalid radius {0}: must not be negative")]
    InvalidRadius(i32),

    /// A ring walk produced a hexagon that is not on the ring. This
    /// indicates a bug in the walk, not a problem with the input.
    #[error("internal error: ring walk around {center} with radius {radius} reached {hex}")]
    OffRing {
        hex: Hex,
        center: Hex,
        radius: i32,
    },
}
