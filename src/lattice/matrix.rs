//! Matrix operations over Z_q

use super::params::Params;
use super::vector::Vector;
use crate::error::{LatticeError, Result};
use crate::zk::randomness::RandomSource;

/// A matrix in Z_q^{m x n}, stored as row vectors
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Matrix {
    rows: Vec<Vector>,
    modulus: u64,
}

impl Matrix {
    /// Build a matrix from rows; every row must share one length and modulus
    pub fn new(rows: Vec<Vector>) -> Result<Self> {
        let first = rows
            .first()
            .ok_or_else(|| LatticeError::invalid_params("matrix must have at least one row"))?;
        for row in &rows[1..] {
            first.check_compatible(row)?;
        }
        let modulus = first.modulus();
        Ok(Matrix { rows, modulus })
    }

    /// Build a matrix from raw row-major coefficients
    pub fn from_rows(rows: Vec<Vec<u64>>, modulus: u64) -> Result<Self> {
        let rows = rows
            .into_iter()
            .map(|r| Vector::new(r, modulus))
            .collect::<Result<Vec<_>>>()?;
        Matrix::new(rows)
    }

    pub fn identity(params: &Params) -> Self {
        let n = params.dimension();
        let rows = (0..n)
            .map(|i| {
                let coeffs = (0..n).map(|j| u64::from(i == j)).collect();
                Vector::from_reduced(coeffs, params.modulus())
            })
            .collect();
        Matrix {
            rows,
            modulus: params.modulus(),
        }
    }

    /// Square matrix with every entry drawn from the nonzero residues `[1, q - 1]`
    pub fn random_nonzero<S: RandomSource + ?Sized>(source: &mut S, params: &Params) -> Self {
        let n = params.dimension();
        let rows = (0..n)
            .map(|_| Vector::random_nonzero(source, n, params))
            .collect();
        Matrix {
            rows,
            modulus: params.modulus(),
        }
    }

    /// Matrix-vector product Av mod q
    pub fn mul_vec(&self, v: &Vector) -> Result<Vector> {
        if v.modulus() != self.modulus {
            return Err(LatticeError::ModulusMismatch {
                expected: self.modulus,
                actual: v.modulus(),
            });
        }
        if v.len() != self.num_cols() {
            return Err(LatticeError::DimensionMismatch {
                expected: self.num_cols(),
                actual: v.len(),
            });
        }
        let coeffs = self
            .rows
            .iter()
            .map(|row| row.inner_product(v))
            .collect::<Result<Vec<_>>>()?;
        Ok(Vector::from_reduced(coeffs, self.modulus))
    }

    pub fn rows(&self) -> &[Vector] {
        &self.rows
    }

    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn num_cols(&self) -> usize {
        self.rows.first().map(|r| r.len()).unwrap_or(0)
    }

    pub fn is_square(&self) -> bool {
        self.num_rows() == self.num_cols()
    }
}
