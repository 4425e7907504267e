//! A mutable 3-dimensional vector type with in-place and copy-returning
//! arithmetic.

#[macro_use]
mod macros;

#[cfg(feature = "fuzzing")]
pub mod fuzzing;
pub mod vector;

pub use vector::Vector3;
