//! Coordinates, traversal and cheapest-path search on an unbounded
//! hexagonal grid.
//!
//! Hexagons are addressed by axial coordinates ([`grid::Hex`]). Rings and
//! areas around a hexagon are enumerated lazily and can be cancelled
//! ([`grid::Cancel`]). Paths are found with A*, where the cost of every
//! step and the estimate guiding the search are supplied by the caller
//! through a [`search::Pather`].
//!
//! ```
//! use hexpath::grid::Hex;
//! use hexpath::search::Uniform;
//!
//! let path = Hex::ORIGIN.path_to(Hex::new(2, -1), &mut Uniform).unwrap();
//! assert_eq!(path.cost(), 2);
//! assert_eq!(path.hexes(), &[Hex::new(0, 0), Hex::new(1, 0), Hex::new(2, -1)]);
//! ```

#[macro_use]
extern crate num_derive;

pub mod error;
pub mod geo;
pub mod grid;
pub mod search;

pub use error::{ Error, Result };
pub use grid::{ Cancel, Direction, Hex };
pub use search::{ Path, Pather, SearchOptions };
