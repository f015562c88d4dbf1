//! Vector operations over Z_q

use super::modular::{add_mod, mul_mod, reduce, sub_mod};
use super::params::Params;
use crate::error::{LatticeError, Result};
use crate::zk::randomness::RandomSource;
use std::fmt;

/// A vector in Z_q^n
///
/// Coefficients are always stored reduced into `[0, q)`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Vector {
    coeffs: Vec<u64>,
    modulus: u64,
}

impl Vector {
    /// Build a vector, reducing every coefficient modulo `modulus`
    pub fn new(coeffs: Vec<u64>, modulus: u64) -> Result<Self> {
        if modulus < 2 {
            return Err(LatticeError::invalid_params(format!(
                "modulus must be at least 2, got {}",
                modulus
            )));
        }
        let coeffs = coeffs.into_iter().map(|c| reduce(c, modulus)).collect();
        Ok(Vector { coeffs, modulus })
    }

    /// Caller guarantees `coeffs` are reduced and `modulus >= 2`
    pub(crate) fn from_reduced(coeffs: Vec<u64>, modulus: u64) -> Self {
        debug_assert!(coeffs.iter().all(|&c| c < modulus));
        Vector { coeffs, modulus }
    }

    /// Sample `n` coefficients uniformly from the nonzero residues `[1, q - 1]`
    pub fn random_nonzero<S: RandomSource + ?Sized>(
        source: &mut S,
        n: usize,
        params: &Params,
    ) -> Self {
        let q = params.modulus();
        let coeffs = (0..n).map(|_| source.uniform(1, q)).collect();
        Vector::from_reduced(coeffs, q)
    }

    pub fn coeffs(&self) -> &[u64] {
        &self.coeffs
    }

    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    pub fn len(&self) -> usize {
        self.coeffs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Check that `other` lives in the same Z_q^n as `self`
    pub fn check_compatible(&self, other: &Vector) -> Result<()> {
        if self.modulus != other.modulus {
            return Err(LatticeError::ModulusMismatch {
                expected: self.modulus,
                actual: other.modulus,
            });
        }
        if self.len() != other.len() {
            return Err(LatticeError::DimensionMismatch {
                expected: self.len(),
                actual: other.len(),
            });
        }
        Ok(())
    }

    /// Componentwise sum mod q
    pub fn add(&self, other: &Vector) -> Result<Vector> {
        self.zip_with(other, add_mod)
    }

    /// Componentwise difference mod q, normalized into `[0, q)`
    pub fn sub(&self, other: &Vector) -> Result<Vector> {
        self.zip_with(other, sub_mod)
    }

    /// Scalar multiplication; the scalar is reduced before use
    pub fn scalar_mul(&self, scalar: u64) -> Vector {
        let q = self.modulus;
        let k = reduce(scalar, q);
        let coeffs = self.coeffs.iter().map(|&c| mul_mod(k, c, q)).collect();
        Vector::from_reduced(coeffs, q)
    }

    /// Inner product mod q
    pub fn inner_product(&self, other: &Vector) -> Result<u64> {
        self.check_compatible(other)?;
        let q = self.modulus;
        Ok(self
            .coeffs
            .iter()
            .zip(other.coeffs.iter())
            .fold(0, |acc, (&a, &b)| add_mod(acc, mul_mod(a, b, q), q)))
    }

    fn zip_with(&self, other: &Vector, op: fn(u64, u64, u64) -> u64) -> Result<Vector> {
        self.check_compatible(other)?;
        let q = self.modulus;
        let coeffs = self
            .coeffs
            .iter()
            .zip(other.coeffs.iter())
            .map(|(&a, &b)| op(a, b, q))
            .collect();
        Ok(Vector::from_reduced(coeffs, q))
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} (mod {})", self.coeffs, self.modulus)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn test_vector_operations() {
        let q = 7681;
        let v1 = Vector::new(vec![1, 2, 3, 4], q).unwrap();
        let v2 = Vector::new(vec![5, 6, 7, 8], q).unwrap();

        let sum = v1.add(&v2).unwrap();
        assert_eq!(sum.coeffs(), &[6, 8, 10, 12]);

        let scaled = v1.scalar_mul(2);
        assert_eq!(scaled.coeffs(), &[2, 4, 6, 8]);

        let inner = v1.inner_product(&v2).unwrap();
        assert_eq!(inner, 5 + 12 + 21 + 32); // 70
    }

    #[test]
    fn test_reduction_on_construction() {
        let v = Vector::new(vec![97, 98, 200], 97).unwrap();
        assert_eq!(v.coeffs(), &[0, 1, 6]);

        assert!(matches!(
            Vector::new(vec![1], 1),
            Err(LatticeError::InvalidParameters { .. })
        ));
    }

    #[test]
    fn test_subtraction_never_negative() {
        let q = 97;
        let a = Vector::new(vec![3, 0, 50], q).unwrap();
        let b = Vector::new(vec![10, 96, 50], q).unwrap();
        let diff = a.sub(&b).unwrap();
        assert_eq!(diff.coeffs(), &[90, 1, 0]);
        assert_eq!(diff.add(&b).unwrap(), a);
    }

    #[test]
    fn test_scalar_is_reduced_first() {
        let v = Vector::new(vec![1, 2, 3], 97).unwrap();
        assert_eq!(v.scalar_mul(98), v.scalar_mul(1));
        assert_eq!(v.scalar_mul(97).coeffs(), &[0, 0, 0]);
    }

    #[test]
    fn test_shape_errors() {
        let v3 = Vector::new(vec![1, 2, 3], 97).unwrap();
        let v4 = Vector::new(vec![1, 2, 3, 4], 97).unwrap();
        assert_eq!(
            v3.add(&v4),
            Err(LatticeError::DimensionMismatch {
                expected: 3,
                actual: 4
            })
        );

        let other_q = Vector::new(vec![1, 2, 3], 101).unwrap();
        assert_eq!(
            v3.inner_product(&other_q),
            Err(LatticeError::ModulusMismatch {
                expected: 97,
                actual: 101
            })
        );
    }

    #[test]
    fn test_componentwise_against_reference() {
        let mut rng = ChaCha20Rng::seed_from_u64(12345);
        let q = 8380417;
        for _ in 0..50 {
            let a: Vec<u64> = (0..8).map(|_| rng.gen_range(0..q)).collect();
            let b: Vec<u64> = (0..8).map(|_| rng.gen_range(0..q)).collect();
            let k = rng.gen::<u64>();

            let va = Vector::new(a.clone(), q).unwrap();
            let vb = Vector::new(b.clone(), q).unwrap();
            let sum = va.add(&vb).unwrap();
            let scaled = va.scalar_mul(k);

            for i in 0..8 {
                assert_eq!(sum.coeffs()[i], (a[i] + b[i]) % q);
                let expected = ((k % q) as u128 * a[i] as u128 % q as u128) as u64;
                assert_eq!(scaled.coeffs()[i], expected);
            }
        }
    }

    #[test]
    fn test_random_nonzero_range() {
        let mut rng = ChaCha20Rng::seed_from_u64(7);
        let params = Params::new(64, 2).unwrap();
        let v = Vector::random_nonzero(&mut rng, 64, &params);
        assert!(v.coeffs().iter().all(|&c| c == 1));

        let params = Params::new(256, 97).unwrap();
        let v = Vector::random_nonzero(&mut rng, 256, &params);
        assert!(v.coeffs().iter().all(|&c| (1..97).contains(&c)));
    }
}
