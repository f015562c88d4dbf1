//! Fiat-Shamir challenge: hash of commitment and message into Z_q
//!
//! The hashed byte string is
//!
//! ```text
//! TAG || n (u64 BE) || w[0] (u64 BE) || ... || w[n-1] (u64 BE) || message
//! ```
//!
//! Every component takes exactly eight bytes and the count is fixed up
//! front, so the message boundary is unambiguous. The SHA-256 digest is read
//! as a big-endian integer and reduced modulo q.

use crate::lattice::modular::reduce_be_bytes;
use crate::lattice::Vector;
use log::trace;
use sha2::{Digest, Sha256};

const CHALLENGE_TAG: &[u8] = b"lattice-sig/challenge/v1";

/// Canonical byte encoding of `(w, message)` fed to the hash
pub fn challenge_input(w: &Vector, message: &[u8]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(CHALLENGE_TAG.len() + 8 * (w.len() + 1) + message.len());
    bytes.extend_from_slice(CHALLENGE_TAG);
    bytes.extend_from_slice(&(w.len() as u64).to_be_bytes());
    for coeff in w.coeffs() {
        bytes.extend_from_slice(&coeff.to_be_bytes());
    }
    bytes.extend_from_slice(message);
    bytes
}

/// Hash-based challenge c = H(w, message) mod q
pub fn challenge(w: &Vector, message: &[u8]) -> u64 {
    let digest = Sha256::digest(challenge_input(w, message));
    let c = reduce_be_bytes(&digest, w.modulus());
    trace!("challenge over {} components: c = {}", w.len(), c);
    c
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deterministic_challenge() {
        let w = Vector::new(vec![1, 2, 3, 4], 7681).unwrap();
        let message = b"test message";

        let c1 = challenge(&w, message);
        let c2 = challenge(&w, message);
        assert_eq!(c1, c2, "Same inputs should produce same challenge");
        assert!(c1 < 7681);
    }

    #[test]
    fn test_challenge_sensitivity() {
        let q = (1u64 << 61) - 1;
        let w = Vector::new(vec![1, 2, 3, 4], q).unwrap();
        let c = challenge(&w, b"test message");

        assert_ne!(c, challenge(&w, b"different message"));
        let w2 = Vector::new(vec![1, 2, 3, 5], q).unwrap();
        assert_ne!(c, challenge(&w2, b"test message"));
    }

    #[test]
    fn test_input_is_unambiguous() {
        // Moving a byte between the vector and the message changes the input
        let w1 = Vector::new(vec![1, 2], 1 << 20).unwrap();
        let w2 = Vector::new(vec![1], 1 << 20).unwrap();
        let mut msg2 = 2u64.to_be_bytes().to_vec();
        msg2.extend_from_slice(b"m");
        assert_ne!(challenge_input(&w1, b"m"), challenge_input(&w2, &msg2));

        let input = challenge_input(&w1, b"m");
        assert_eq!(input.len(), CHALLENGE_TAG.len() + 8 + 16 + 1);
    }

    #[test]
    fn test_matches_reference_reduction() {
        let w = Vector::new(vec![7, 8, 9], 97).unwrap();
        let digest = Sha256::digest(challenge_input(&w, b"abc"));
        let expected = digest
            .iter()
            .fold(0u128, |acc, &b| (acc * 256 + b as u128) % 97) as u64;
        assert_eq!(challenge(&w, b"abc"), expected);
    }
}
