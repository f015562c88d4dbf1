//! Wire encoding for signatures and public keys
//!
//! Every field element is written big-endian in `Params::element_width()`
//! bytes. The layouts are rigid and carry no version or length fields:
//!
//! - signature: `z[0] .. z[n-1] || c`, `(n + 1) * w` bytes
//! - public key: `A` row-major `|| t`, `(n^2 + n) * w` bytes
//!
//! Decoding rejects wrong lengths and any element `>= q`.

use super::fiat_shamir::{PublicKey, Signature};
use crate::error::{LatticeError, Result};
use crate::lattice::{Matrix, Params, Vector};

fn put_element(out: &mut Vec<u8>, value: u64, width: usize) {
    out.extend_from_slice(&value.to_be_bytes()[8 - width..]);
}

fn put_vector(out: &mut Vec<u8>, v: &Vector, width: usize) {
    for &c in v.coeffs() {
        put_element(out, c, width);
    }
}

/// Split `bytes` into field elements, rejecting non-canonical values
fn read_elements(
    bytes: &[u8],
    params: &Params,
    count: usize,
    context: &'static str,
) -> Result<Vec<u64>> {
    let width = params.element_width();
    if bytes.len() != count * width {
        return Err(LatticeError::Decoding { context });
    }
    bytes
        .chunks_exact(width)
        .map(|chunk| {
            let value = chunk.iter().fold(0u64, |acc, &b| (acc << 8) | b as u64);
            if value >= params.modulus() {
                Err(LatticeError::Decoding {
                    context: "element out of range",
                })
            } else {
                Ok(value)
            }
        })
        .collect()
}

/// Encoded signature length in bytes
pub fn signature_len(params: &Params) -> usize {
    (params.dimension() + 1) * params.element_width()
}

/// Encoded public key length in bytes
pub fn public_key_len(params: &Params) -> usize {
    (params.dimension() * params.dimension() + params.dimension()) * params.element_width()
}

impl Signature {
    pub fn to_bytes(&self, params: &Params) -> Result<Vec<u8>> {
        params.check_vector(self.z())?;
        let width = params.element_width();
        let mut out = Vec::with_capacity(signature_len(params));
        put_vector(&mut out, self.z(), width);
        put_element(&mut out, self.c(), width);
        Ok(out)
    }

    pub fn from_bytes(bytes: &[u8], params: &Params) -> Result<Self> {
        let n = params.dimension();
        let mut elements = read_elements(bytes, params, n + 1, "signature length")?;
        let c = elements.pop().unwrap_or_default();
        let z = Vector::new(elements, params.modulus())?;
        Ok(Signature::new(z, c))
    }
}

impl PublicKey {
    pub fn to_bytes(&self, params: &Params) -> Result<Vec<u8>> {
        self.validate(params)?;
        let width = params.element_width();
        let mut out = Vec::with_capacity(public_key_len(params));
        for row in self.a().rows() {
            put_vector(&mut out, row, width);
        }
        put_vector(&mut out, self.t(), width);
        Ok(out)
    }

    pub fn from_bytes(bytes: &[u8], params: &Params) -> Result<Self> {
        let n = params.dimension();
        let mut elements = read_elements(bytes, params, n * n + n, "public key length")?;
        let t = Vector::new(elements.split_off(n * n), params.modulus())?;
        let rows = elements.chunks(n).map(|row| row.to_vec()).collect();
        let a = Matrix::from_rows(rows, params.modulus())?;
        PublicKey::new(a, t)
    }
}
