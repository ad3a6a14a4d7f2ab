//! 14-word mnemonic seed for wallet secrets
//!
//! Encodes a 128-bit wallet secret together with its creation date into
//! a 14-word English phrase carrying a Reed-Solomon checksum, and
//! derives the 32-byte wallet secret key with Argon2id.
//!
//! # Phrase format
//!
//! 14 words from the BIP-39 English list, separated by single spaces.
//! The first word is a checksum: any single mistyped word is detected,
//! and a single word replaced by the placeholder `xxxx` is recovered
//! automatically.
//!
//! # Key derivation
//!
//! Argon2id (3 passes, 256 MiB, one lane) over the 16 secret bytes,
//! salted with the format version and the quantized creation date, so
//! the same phrase always derives the same key.

pub mod kdf;
pub mod seed;
pub mod wordlist;

pub use seed::{Correction, Seed, SeedError, EPOCH, ERASURE, PHRASE_WORDS, TIME_STEP};
