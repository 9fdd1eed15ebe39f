//! Dense linear algebra — Matrix, Vector, Gaussian elimination.
//!
//! Generic over `matra::Scalar`, row-major storage, with every
//! result-writing operation taking an explicit destination so storage
//! policy stays with the caller.

#![no_std]

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

mod error;
mod matrix;
mod vector;

pub use error::{LinAlgError, Result};
pub use matrix::Matrix;
pub use vector::Vector;
