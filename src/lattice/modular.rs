//! Scalar arithmetic in Z_q
//!
//! All functions take operands already reduced into `[0, q)` unless noted,
//! and always return a value in `[0, q)`. Intermediates are widened to
//! `u128`, so any `q < 2^64` is supported.

/// Reduce an arbitrary value into `[0, q)`
#[inline(always)]
pub fn reduce(a: u64, q: u64) -> u64 {
    a % q
}

/// Add two values modulo q
#[inline(always)]
pub fn add_mod(a: u64, b: u64, q: u64) -> u64 {
    ((a as u128 + b as u128) % q as u128) as u64
}

/// Subtract two values modulo q
///
/// Assumes a, b < q. The result is never negative.
#[inline(always)]
pub fn sub_mod(a: u64, b: u64, q: u64) -> u64 {
    if a >= b {
        a - b
    } else {
        q - b + a
    }
}

/// Multiply two values modulo q
#[inline(always)]
pub fn mul_mod(a: u64, b: u64, q: u64) -> u64 {
    ((a as u128 * b as u128) % q as u128) as u64
}

/// Compute base^exp mod q using binary exponentiation
pub fn pow_mod(mut base: u64, mut exp: u64, q: u64) -> u64 {
    let mut result = 1 % q;
    base %= q;
    while exp > 0 {
        if exp & 1 == 1 {
            result = mul_mod(result, base, q);
        }
        exp >>= 1;
        base = mul_mod(base, base, q);
    }
    result
}

/// Reduce a big-endian unsigned integer of arbitrary length modulo q
///
/// Used to map hash digests into the field without a big-integer type.
pub fn reduce_be_bytes(bytes: &[u8], q: u64) -> u64 {
    bytes.iter().fold(0u64, |acc, &byte| {
        ((((acc as u128) << 8) | byte as u128) % q as u128) as u64
    })
}

/// Deterministic Miller-Rabin primality test for 64-bit integers
///
/// The witness set {2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37} is exact
/// for every n < 2^64.
pub fn is_prime(n: u64) -> bool {
    const WITNESSES: [u64; 12] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];

    if n < 2 {
        return false;
    }
    for &p in &WITNESSES {
        if n % p == 0 {
            return n == p;
        }
    }

    // n - 1 = d * 2^s with d odd
    let s = (n - 1).trailing_zeros();
    let d = (n - 1) >> s;

    'witness: for &a in &WITNESSES {
        let mut x = pow_mod(a, d, n);
        if x == 1 || x == n - 1 {
            continue;
        }
        for _ in 1..s {
            x = mul_mod(x, x, n);
            if x == n - 1 {
                continue 'witness;
            }
        }
        return false;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_ops() {
        let q = 97;
        assert_eq!(add_mod(90, 10, q), 3);
        assert_eq!(sub_mod(3, 10, q), 90);
        assert_eq!(sub_mod(10, 3, q), 7);
        assert_eq!(mul_mod(50, 50, q), 2500 % 97);
        assert_eq!(pow_mod(5, 96, q), 1); // Fermat
    }

    #[test]
    fn test_no_overflow_near_u64_max() {
        let q = u64::MAX - 58; // largest 64-bit prime
        let a = q - 1;
        assert_eq!(add_mod(a, a, q), q - 2);
        assert_eq!(mul_mod(a, a, q), 1); // (-1)^2
        assert_eq!(sub_mod(0, 1, q), q - 1);
    }

    #[test]
    fn test_reduce_be_bytes() {
        assert_eq!(reduce_be_bytes(&[], 97), 0);
        assert_eq!(reduce_be_bytes(&[0x01, 0x00], 97), 256 % 97);
        let bytes = 0x0123_4567_89ab_cdefu64.to_be_bytes();
        assert_eq!(reduce_be_bytes(&bytes, 7681), 0x0123_4567_89ab_cdef % 7681);
    }

    #[test]
    fn test_is_prime() {
        let primes = [2u64, 3, 97, 7681, 8380417, (1 << 61) - 1, u64::MAX - 58];
        for p in primes {
            assert!(is_prime(p), "{} should be prime", p);
        }
        let composites = [0u64, 1, 4, 96, 561, 7681 * 97, u64::MAX];
        for c in composites {
            assert!(!is_prime(c), "{} should be composite", c);
        }
    }
}
