//! Key derivation binding
//!
//! The 32-byte wallet secret key is Argon2id over the 16 secret bytes
//! with t_cost = 3, m_cost = 256 MiB and a single lane. The 25-byte
//! salt binds the seed format version and the quantized creation date:
//!
//! | bytes | content                            |
//! |-------|------------------------------------|
//! | 0..19 | ASCII `Monero 14-word seed`        |
//! | 19    | NUL terminator                     |
//! | 20    | version                            |
//! | 21..  | quantized date as little-endian u32|

use argon2::{Algorithm, Argon2, Params, Version};
use zeroize::Zeroizing;

use crate::seed::SeedError;

const ARGON2_T_COST: u32 = 3;
const ARGON2_M_COST: u32 = 256 * 1024; // KiB
const ARGON2_LANES: u32 = 1;

/// Derived key length
pub const KEY_SIZE: usize = 32;

/// Salt length: 20-byte prefix, version byte, 32-bit date
pub const SALT_SIZE: usize = 25;

/// Salt prefix: 19 ASCII characters and their NUL terminator
const SALT_PREFIX: &[u8; 20] = b"Monero 14-word seed\0";

/// Build the 25-byte salt for a given version and quantized date.
pub(crate) fn build_salt(version: u8, quantized_date: u32) -> [u8; SALT_SIZE] {
    let mut salt = [0u8; SALT_SIZE];
    salt[..SALT_PREFIX.len()].copy_from_slice(SALT_PREFIX);
    salt[20] = version;
    salt[21..].copy_from_slice(&quantized_date.to_le_bytes());
    salt
}

/// Derive the wallet secret key from the seed secret.
///
/// Deterministic: identical `(secret, version, quantized_date)` triples
/// yield byte-identical keys. Blocks the calling thread for the
/// duration of the memory-hard hash. The key is returned in a
/// [`Zeroizing`] wrapper that clears it from memory on drop.
pub fn derive_key(
    secret: &[u8; 16],
    version: u8,
    quantized_date: u32,
) -> Result<Zeroizing<[u8; KEY_SIZE]>, SeedError> {
    let params = Params::new(ARGON2_M_COST, ARGON2_T_COST, ARGON2_LANES, Some(KEY_SIZE))
        .map_err(|e| SeedError::Crypto(e.to_string()))?;
    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

    let salt = build_salt(version, quantized_date);
    let mut key = Zeroizing::new([0u8; KEY_SIZE]);
    argon2
        .hash_password_into(secret, &salt, &mut *key)
        .map_err(|e| SeedError::Crypto(e.to_string()))?;

    Ok(key)
}
