//! Parameter sets
//!
//! A parameter set fixes the field Z_q and the dimension n shared by a key
//! pair, its signer and every verifier. The reference set (q = 97, n = 4) is
//! illustrative only; nothing here claims security at any particular size.

use super::matrix::Matrix;
use super::modular::is_prime;
use super::vector::Vector;
use crate::error::{LatticeError, Result};
use log::warn;

/// Dimension and modulus for one key pair
///
/// Only built through [`Params::new`] (or derived from a validated matrix),
/// so every instance has `dimension >= 1` and `modulus >= 2`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Params {
    /// Length of every vector; matrices are `dimension x dimension`
    dimension: usize,
    /// Modulus q; expected to be prime
    modulus: u64,
}

impl Default for Params {
    fn default() -> Self {
        // Toy parameters from the reference demonstration
        Params {
            dimension: 4,
            modulus: 97,
        }
    }
}

impl Params {
    /// Validate and build a parameter set
    ///
    /// A composite modulus is accepted (the arithmetic does not need a
    /// field) but logged, since the challenge distribution assumes one.
    pub fn new(dimension: usize, modulus: u64) -> Result<Self> {
        let params = Params::checked(dimension, modulus)?;
        if !params.is_prime_modulus() {
            warn!("modulus {} is not prime; Z_q is not a field", modulus);
        }
        Ok(params)
    }

    /// Range checks only; no primality test and no log output
    fn checked(dimension: usize, modulus: u64) -> Result<Self> {
        if dimension < 1 {
            return Err(LatticeError::invalid_params("dimension must be at least 1"));
        }
        if modulus < 2 {
            return Err(LatticeError::invalid_params(format!(
                "modulus must be at least 2, got {}",
                modulus
            )));
        }
        Ok(Params { dimension, modulus })
    }

    /// Recover the parameters a public matrix was generated under
    ///
    /// Called on every free-function sign and verify, so the primality
    /// check of [`Params::new`] is not repeated here.
    pub fn from_matrix(a: &Matrix) -> Result<Self> {
        if !a.is_square() {
            return Err(LatticeError::DimensionMismatch {
                expected: a.num_rows(),
                actual: a.num_cols(),
            });
        }
        Params::checked(a.num_rows(), a.modulus())
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    pub fn is_prime_modulus(&self) -> bool {
        is_prime(self.modulus)
    }

    /// Bytes per field element on the wire: enough to hold `q - 1`
    pub fn element_width(&self) -> usize {
        let bits = 64 - (self.modulus - 1).leading_zeros() as usize;
        bits.div_ceil(8).max(1)
    }

    /// Check a vector has this set's modulus and dimension
    pub fn check_vector(&self, v: &Vector) -> Result<()> {
        if v.modulus() != self.modulus {
            return Err(LatticeError::ModulusMismatch {
                expected: self.modulus,
                actual: v.modulus(),
            });
        }
        if v.len() != self.dimension {
            return Err(LatticeError::DimensionMismatch {
                expected: self.dimension,
                actual: v.len(),
            });
        }
        Ok(())
    }

    /// Check a matrix is `dimension x dimension` over this modulus
    pub fn check_matrix(&self, a: &Matrix) -> Result<()> {
        if a.modulus() != self.modulus {
            return Err(LatticeError::ModulusMismatch {
                expected: self.modulus,
                actual: a.modulus(),
            });
        }
        for actual in [a.num_rows(), a.num_cols()] {
            if actual != self.dimension {
                return Err(LatticeError::DimensionMismatch {
                    expected: self.dimension,
                    actual,
                });
            }
        }
        Ok(())
    }
}
