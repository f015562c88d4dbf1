//! Injected randomness sources
//!
//! Key generation and signing never reach for an ambient generator; the
//! caller passes a [`RandomSource`]. Any `rand::RngCore` qualifies, so
//! production code hands in `OsRng` (or another CSPRNG) and tests hand in a
//! seeded `ChaCha20Rng` or a [`SequenceSource`].
//!
//! A source shared between threads must serialize its draws; the simplest
//! discipline is one source per thread or per call.

use crate::error::{LatticeError, Result};
use crate::lattice::Vector;
use rand::{Rng, RngCore};
use sha2::{Digest, Sha256};

const DERIVE_TAG: &[u8] = b"lattice-sig/derive/v1";

/// A capability producing uniform integers in a half-open range
pub trait RandomSource {
    /// Uniform integer in `[low, high)`. Returns `low` when the range is empty.
    fn uniform(&mut self, low: u64, high: u64) -> u64;
}

impl<R: RngCore + ?Sized> RandomSource for R {
    fn uniform(&mut self, low: u64, high: u64) -> u64 {
        if high <= low {
            return low;
        }
        self.gen_range(low..high)
    }
}

/// Replays a fixed list of values, cycling when exhausted
///
/// Values already inside the requested range are returned unchanged, so a
/// known-answer test can pin down `y` exactly. Out-of-range values are
/// folded into range.
#[derive(Clone, Debug)]
pub struct SequenceSource {
    values: Vec<u64>,
    pos: usize,
    draws: usize,
}

impl SequenceSource {
    pub fn new(values: Vec<u64>) -> Result<Self> {
        if values.is_empty() {
            return Err(LatticeError::invalid_params(
                "sequence source needs at least one value",
            ));
        }
        Ok(SequenceSource {
            values,
            pos: 0,
            draws: 0,
        })
    }

    /// Number of values drawn so far
    pub fn draws(&self) -> usize {
        self.draws
    }
}

impl RandomSource for SequenceSource {
    fn uniform(&mut self, low: u64, high: u64) -> u64 {
        let v = self.values[self.pos];
        self.pos = (self.pos + 1) % self.values.len();
        self.draws += 1;

        if high <= low {
            low
        } else if (low..high).contains(&v) {
            v
        } else {
            low + v % (high - low)
        }
    }
}

/// Deterministic source derived from `(secret, message, nonce)`
///
/// Expands SHA-256 in counter mode over a seed that binds the secret key,
/// the message and a caller nonce. Two signatures share a blinding vector
/// only if all three inputs repeat, so the nonce must be unique per call
/// for distinct signatures over the same message.
pub struct DerivedSource {
    seed: [u8; 32],
    counter: u64,
    block: [u8; 32],
    pos: usize,
}

impl DerivedSource {
    pub fn new(secret: &Vector, message: &[u8], nonce: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(DERIVE_TAG);
        hasher.update((secret.len() as u64).to_be_bytes());
        for coeff in secret.coeffs() {
            hasher.update(coeff.to_be_bytes());
        }
        hasher.update((message.len() as u64).to_be_bytes());
        hasher.update(message);
        hasher.update((nonce.len() as u64).to_be_bytes());
        hasher.update(nonce);

        DerivedSource {
            seed: hasher.finalize().into(),
            counter: 0,
            block: [0; 32],
            pos: 32,
        }
    }

    fn next_word(&mut self) -> u64 {
        if self.pos + 8 > self.block.len() {
            let mut hasher = Sha256::new();
            hasher.update(self.seed);
            hasher.update(self.counter.to_be_bytes());
            self.block = hasher.finalize().into();
            self.counter += 1;
            self.pos = 0;
        }
        let mut word = [0u8; 8];
        word.copy_from_slice(&self.block[self.pos..self.pos + 8]);
        self.pos += 8;
        u64::from_be_bytes(word)
    }
}

impl RandomSource for DerivedSource {
    fn uniform(&mut self, low: u64, high: u64) -> u64 {
        if high <= low {
            return low;
        }
        let span = high - low;
        // Reject words in the final partial copy of [0, span) to stay uniform
        let rem = ((1u128 << 64) % span as u128) as u64;
        let limit = (1u128 << 64) - rem as u128;
        loop {
            let word = self.next_word();
            if (word as u128) < limit {
                return low + word % span;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn test_rng_source_range() {
        let mut rng = ChaCha20Rng::seed_from_u64(12345);
        for _ in 0..1000 {
            let v = rng.uniform(1, 97);
            assert!((1..97).contains(&v));
        }
        assert_eq!(rng.uniform(5, 5), 5);
    }

    #[test]
    fn test_sequence_source_replays() {
        let mut src = SequenceSource::new(vec![10, 22, 5, 60]).unwrap();
        let drawn: Vec<u64> = (0..6).map(|_| src.uniform(1, 97)).collect();
        assert_eq!(drawn, vec![10, 22, 5, 60, 10, 22]);
        assert_eq!(src.draws(), 6);

        // Out-of-range values fold into range
        let mut src = SequenceSource::new(vec![0, 200]).unwrap();
        assert_eq!(src.uniform(1, 97), 1);
        assert_eq!(src.uniform(1, 97), 1 + 200 % 96);

        assert!(SequenceSource::new(vec![]).is_err());
    }

    #[test]
    fn test_derived_source_deterministic() {
        let secret = Vector::new(vec![3, 51, 20, 88], 97).unwrap();
        let draw = |msg: &[u8], nonce: &[u8]| {
            let mut src = DerivedSource::new(&secret, msg, nonce);
            (0..16).map(|_| src.uniform(1, 97)).collect::<Vec<_>>()
        };

        let a = draw(b"message", b"nonce-1");
        assert_eq!(a, draw(b"message", b"nonce-1"));
        assert_ne!(a, draw(b"message", b"nonce-2"));
        assert_ne!(a, draw(b"other message", b"nonce-1"));
        assert!(a.iter().all(|v| (1..97).contains(v)));
    }

    #[test]
    fn test_derived_source_length_prefixing() {
        // Shifting bytes between message and nonce must change the seed
        let secret = Vector::new(vec![1, 2], 97).unwrap();
        let mut a = DerivedSource::new(&secret, b"ab", b"c");
        let mut b = DerivedSource::new(&secret, b"a", b"bc");
        let wa: Vec<u64> = (0..4).map(|_| a.uniform(0, u64::MAX)).collect();
        let wb: Vec<u64> = (0..4).map(|_| b.uniform(0, u64::MAX)).collect();
        assert_ne!(wa, wb);
    }
}
