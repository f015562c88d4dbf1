//! # Lattice Signature Library
//!
//! A Fiat-Shamir signature scheme proving knowledge of a secret vector `s`
//! satisfying the public relation `A s = t (mod q)`:
//!
//! - **Core lattice operations**: vectors and matrices over Z_q
//! - **Signatures**: key generation, signing and verification with a
//!   SHA-256 challenge and injected randomness
//!
//! ## Modules
//!
//! - [`lattice`]: modular arithmetic, vectors, matrices, parameter sets
//! - [`zk`]: challenge hash, randomness sources, the signature scheme and its wire format
//! - [`error`]: the crate error type
//!
//! ## Example
//!
//! ```
//! use lattice_sig::{generate, sign, verify};
//! use rand::rngs::OsRng;
//!
//! let (pk, sk) = generate(4, 97, &mut OsRng)?;
//! let sig = sign(b"hello quantum world", pk.a(), &sk, &mut OsRng)?;
//! assert!(verify(b"hello quantum world", pk.a(), pk.t(), &sig)?);
//! # Ok::<(), lattice_sig::LatticeError>(())
//! ```

pub mod error;
pub mod lattice;
pub mod zk;

// Re-export commonly used types
pub use error::{LatticeError, Result};
pub use lattice::{Matrix, Params, Vector};
pub use zk::{
    challenge, generate, sign, verify, KeyPair, PublicKey, RandomSource, SecretKey,
    SequenceSource, Signature, SignatureScheme,
};
