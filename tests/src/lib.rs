//! Shared fixtures for the peerkey integration tests

use std::sync::Once;

use peerkey_sign::{CurveKind, Ecdsa, KeyPair};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Install a test subscriber once per binary
///
/// Honours `RUST_LOG`; silent by default.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}

/// Façade over the default provider
pub fn ecdsa() -> Ecdsa {
    Ecdsa::default()
}

/// A fresh key pair on every supported curve
pub fn key_pairs() -> Vec<KeyPair> {
    CurveKind::ALL
        .into_iter()
        .map(|curve| ecdsa().generate_key_pair(curve).expect("key generation"))
        .collect()
}

/// Deterministic non-empty messages of assorted lengths
pub fn messages(seed: u8, count: usize) -> Vec<Vec<u8>> {
    let mut rng = ChaCha20Rng::from_seed([seed; 32]);
    (0..count)
        .map(|i| {
            let mut msg = vec![0u8; 1 + i * 37];
            rng.fill_bytes(&mut msg);
            msg
        })
        .collect()
}
