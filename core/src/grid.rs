//! Hexagonal grids addressed by axial coordinates.
pub mod dir;
pub mod hex;
pub mod traverse;

pub use self::dir::*;
pub use self::hex::*;
pub use self::traverse::*;
