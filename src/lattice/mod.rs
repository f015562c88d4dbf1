//! Core lattice operations and types
//!
//! This module provides the arithmetic every other part of the crate is
//! built on: scalars, vectors and matrices over Z_q, plus the parameter set
//! that fixes q and the dimension.

pub mod matrix;
pub mod modular;
pub mod params;
pub mod vector;

pub use matrix::Matrix;
pub use params::Params;
pub use vector::Vector;
