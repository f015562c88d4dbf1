//! Fiat-Shamir signatures over a linear relation in Z_q
//!
//! The prover knows `s` with `A s = t (mod q)`. The interactive protocol is
//!
//! 1. commit: sample `y`, send `w = A y`
//! 2. challenge: verifier sends a scalar `c`
//! 3. respond: send `z = y + c s`
//!
//! and the verifier accepts when `A z - c t = w`. Replacing step 2 with
//! `c = H(w, message)` binds the transcript to a message and yields a
//! signature `(z, c)`; the verifier recomputes `w' = A z - c t` and checks
//! that `H(w', message) = c`.
//!
//! There is no noise term in `t`, so the relation can be solved by linear
//! algebra given enough samples. The parameters are illustrative.
//!
//! The blinding vector `y` must never repeat under one secret key: two
//! signatures sharing `y` give `z1 - z2 = (c1 - c2) s`.

use super::challenge::challenge;
use super::randomness::{DerivedSource, RandomSource};
use crate::error::Result;
use crate::lattice::{Matrix, Params, Vector};
use log::debug;

/// Secret key: the vector `s` with every coefficient nonzero
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SecretKey {
    s: Vector,
}

impl SecretKey {
    pub fn new(s: Vector) -> Self {
        SecretKey { s }
    }

    pub fn s(&self) -> &Vector {
        &self.s
    }
}

/// Public key: matrix A and t = As mod q
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublicKey {
    a: Matrix,
    t: Vector,
    params: Params,
}

impl PublicKey {
    /// Pair a square matrix with an image vector of matching shape
    pub fn new(a: Matrix, t: Vector) -> Result<Self> {
        let params = Params::from_matrix(&a)?;
        params.check_vector(&t)?;
        Ok(PublicKey { a, t, params })
    }

    pub fn a(&self) -> &Matrix {
        &self.a
    }

    pub fn t(&self) -> &Vector {
        &self.t
    }

    /// Parameters the key was generated under
    pub fn params(&self) -> Params {
        self.params
    }

    /// Structural check against an expected parameter set
    pub fn validate(&self, params: &Params) -> Result<()> {
        params.check_matrix(&self.a)?;
        params.check_vector(&self.t)
    }
}

/// Key pair
#[derive(Clone, Debug)]
pub struct KeyPair {
    pub sk: SecretKey,
    pub pk: PublicKey,
}

/// Commitment (first message from prover)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Commitment {
    pub w: Vector,
}

/// Prover's state (kept secret during protocol)
#[derive(Clone, Debug)]
pub struct ProverState {
    y: Vector,
}

/// A signature `(z, c)`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Signature {
    z: Vector,
    c: u64,
}

impl Signature {
    /// Build a signature; `c` is reduced into Z_q alongside `z`
    pub fn new(z: Vector, c: u64) -> Self {
        let c = c % z.modulus();
        Signature { z, c }
    }

    pub fn z(&self) -> &Vector {
        &self.z
    }

    pub fn c(&self) -> u64 {
        self.c
    }
}

/// Signature scheme bound to one parameter set
#[derive(Clone, Debug)]
pub struct SignatureScheme {
    pub params: Params,
}

impl SignatureScheme {
    pub fn new(params: Params) -> Self {
        SignatureScheme { params }
    }

    /// Generate a key pair
    ///
    /// Draws `s` first, then `A` row by row: `n + n^2` draws in total.
    pub fn keygen<S: RandomSource + ?Sized>(&self, source: &mut S) -> Result<KeyPair> {
        let n = self.params.dimension();

        // Secret key: nonzero vector
        let s = Vector::random_nonzero(source, n, &self.params);

        // Public matrix A
        let a = Matrix::random_nonzero(source, &self.params);

        // Public key component t = As
        let t = a.mul_vec(&s)?;

        debug!(
            "generated key pair (n = {}, q = {})",
            n, self.params.modulus()
        );
        Ok(KeyPair {
            sk: SecretKey { s },
            pk: PublicKey {
                a,
                t,
                params: self.params,
            },
        })
    }

    /// Prover's first message: commitment w = Ay
    pub fn commit<S: RandomSource + ?Sized>(
        &self,
        source: &mut S,
        a: &Matrix,
    ) -> Result<(Commitment, ProverState)> {
        self.params.check_matrix(a)?;
        let y = Vector::random_nonzero(source, self.params.dimension(), &self.params);
        let w = a.mul_vec(&y)?;
        Ok((Commitment { w }, ProverState { y }))
    }

    /// Prover's response z = y + cs
    pub fn respond(&self, sk: &SecretKey, state: &ProverState, c: u64) -> Result<Vector> {
        self.params.check_vector(&sk.s)?;
        let cs = sk.s.scalar_mul(c);
        state.y.add(&cs)
    }

    /// Sign a message with fresh blinding drawn from `source`
    pub fn sign<S: RandomSource + ?Sized>(
        &self,
        source: &mut S,
        message: &[u8],
        a: &Matrix,
        sk: &SecretKey,
    ) -> Result<Signature> {
        self.params.check_vector(&sk.s)?;

        // Step 1: commit
        let (commitment, state) = self.commit(source, a)?;

        // Step 2: challenge is a hash of commitment and message
        let c = challenge(&commitment.w, message);

        // Step 3: respond
        let z = self.respond(sk, &state, c)?;

        debug!(
            "signed {}-byte message (n = {}, q = {})",
            message.len(),
            self.params.dimension(),
            self.params.modulus()
        );
        Ok(Signature { z, c })
    }

    /// Sign with blinding derived from `(sk, message, nonce)`
    ///
    /// Removes the dependence on an external generator; the nonce must be
    /// unique per call if the same message is signed more than once.
    pub fn sign_derived(
        &self,
        message: &[u8],
        a: &Matrix,
        sk: &SecretKey,
        nonce: &[u8],
    ) -> Result<Signature> {
        let mut source = DerivedSource::new(&sk.s, message, nonce);
        self.sign(&mut source, message, a, sk)
    }

    /// Verify a signature against a public key
    ///
    /// `Ok(false)` means the signature does not match; `Err` means the
    /// inputs are malformed.
    pub fn verify(&self, pk: &PublicKey, message: &[u8], sig: &Signature) -> Result<bool> {
        self.verify_parts(message, &pk.a, &pk.t, &sig.z, sig.c)
    }

    /// Verify from the raw components `(A, t, z, c)`
    pub fn verify_parts(
        &self,
        message: &[u8],
        a: &Matrix,
        t: &Vector,
        z: &Vector,
        c: u64,
    ) -> Result<bool> {
        self.params.check_matrix(a)?;
        self.params.check_vector(t)?;
        self.params.check_vector(z)?;
        let c = c % self.params.modulus();

        // Reconstruct the commitment: w' = Az - ct
        let az = a.mul_vec(z)?;
        let ct = t.scalar_mul(c);
        let w = az.sub(&ct)?;

        let valid = challenge(&w, message) == c;
        debug!(
            "verified {}-byte message: {}",
            message.len(),
            if valid { "valid" } else { "invalid" }
        );
        Ok(valid)
    }
}

/// Generate `(PublicKey, SecretKey)` for the given dimension and modulus
pub fn generate<S: RandomSource + ?Sized>(
    dimension: usize,
    modulus: u64,
    source: &mut S,
) -> Result<(PublicKey, SecretKey)> {
    let scheme = SignatureScheme::new(Params::new(dimension, modulus)?);
    let KeyPair { pk, sk } = scheme.keygen(source)?;
    Ok((pk, sk))
}

/// Sign `message` under `sk`; parameters are taken from the public matrix
pub fn sign<S: RandomSource + ?Sized>(
    message: &[u8],
    a: &Matrix,
    sk: &SecretKey,
    source: &mut S,
) -> Result<Signature> {
    SignatureScheme::new(Params::from_matrix(a)?).sign(source, message, a, sk)
}

/// Verify `sig` over `message` against the public pair `(A, t)`
pub fn verify(message: &[u8], a: &Matrix, t: &Vector, sig: &Signature) -> Result<bool> {
    SignatureScheme::new(Params::from_matrix(a)?).verify_parts(message, a, t, &sig.z, sig.c)
}
