//! Zero-knowledge proof support
//!
//! This module turns the identification protocol for knowledge of `s` with
//! `A s = t` into a signature scheme via the Fiat-Shamir transform, together
//! with the hash challenge, randomness sources and wire encoding it needs.

pub mod challenge;
pub mod encoding;
pub mod fiat_shamir;
pub mod randomness;

pub use challenge::challenge;
pub use fiat_shamir::{
    generate, sign, verify, Commitment, KeyPair, ProverState, PublicKey, SecretKey, Signature,
    SignatureScheme,
};
pub use randomness::{DerivedSource, RandomSource, SequenceSource};
