//! Demonstration of the Fiat-Shamir signature over A s = t (mod q)
//!
//! Run with `RUST_LOG=info cargo run --example signature_demo` to see output.
//! For the library's own trace, use `RUST_LOG=debug`.

use lattice_sig::*;
use log::{error, info};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn main() {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    if let Err(e) = run() {
        error!("demo failed: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    info!("=== Fiat-Shamir Signature Demo ===");
    info!("");

    let mut rng = ChaCha20Rng::seed_from_u64(42);
    let params = Params::default();
    info!("Parameters:");
    info!("  Dimension n = {}", params.dimension());
    info!("  Modulus q = {}", params.modulus());
    info!("  Element width = {} byte(s)", params.element_width());
    info!("  Prime modulus: {}", params.is_prime_modulus());
    info!("");

    // 1. Key generation
    let scheme = SignatureScheme::new(params);
    let keypair = scheme.keygen(&mut rng)?;
    info!("Secret key s = {}", keypair.sk.s());
    info!("Public key (A, t):");
    for row in keypair.pk.a().rows() {
        info!("  {}", row);
    }
    info!("  t = {}", keypair.pk.t());
    info!(
        "  Encoded public key: {} bytes",
        keypair.pk.to_bytes(&keypair.pk.params())?.len()
    );
    info!("");

    // 2. Message to sign
    let message = b"hello quantum world";
    info!("Message: {:?}", String::from_utf8_lossy(message));

    // 3. Sign the message
    let sig = scheme.sign(&mut rng, message, keypair.pk.a(), &keypair.sk)?;
    info!("  Response z = {}", sig.z());
    info!("  Challenge c = {}", sig.c());
    info!(
        "  Encoded signature: {} bytes",
        sig.to_bytes(&keypair.pk.params())?.len()
    );
    info!("");

    // 4. Verify the signature
    let valid = scheme.verify(&keypair.pk, message, &sig)?;
    info!(
        "  Verification: {}",
        if valid { "PASS ✓" } else { "FAIL ✗" }
    );

    // Try wrong message
    let wrong = b"tampered";
    let invalid = scheme.verify(&keypair.pk, wrong, &sig)?;
    info!(
        "  Wrong message verification: {}",
        if invalid {
            "PASS (BAD!)"
        } else {
            "FAIL ✓ (as expected)"
        }
    );
    info!("");

    // 5. Derived blinding: no external randomness at signing time
    let derived = scheme.sign_derived(message, keypair.pk.a(), &keypair.sk, b"demo-nonce")?;
    info!("Derived-randomness signature: z = {}, c = {}", derived.z(), derived.c());
    info!(
        "  Verification: {}",
        if scheme.verify(&keypair.pk, message, &derived)? {
            "PASS ✓"
        } else {
            "FAIL ✗"
        }
    );

    Ok(())
}
