//! 14-word mnemonic seed
//!
//! A seed binds a 128-bit secret to its creation date, a format version
//! and two reserved bits. The payload is packed into 13 data
//! coefficients of a GF(2^11) polynomial, protected by a one-word
//! Reed-Solomon checksum, and rendered as 14 English words. The phrase
//! detects any single mistyped word and corrects a single erasure (a
//! word replaced by [`ERASURE`]).
//!
//! A seed is constructed once, from a creation date ([`Seed::generate`]),
//! from raw secret bytes ([`Seed::from_secret`]) or from a phrase
//! ([`Seed::parse`]), and is immutable afterwards. Secret material is
//! zeroed when the seed is dropped and is never printed by anything but
//! the explicit [`Seed::phrase`] call.

use std::sync::OnceLock;

use moneroseed_coding::bits::{BitReader, BitWriter, TOTAL_BITS};
use moneroseed_coding::poly::{GfPoly, MAX_DEGREE};
use moneroseed_coding::rs::ReedSolomonCode;
use rand::rngs::OsRng;
use rand::RngCore;
use thiserror::Error;
use zeroize::{Zeroize, Zeroizing};

use crate::kdf;
use crate::wordlist;

/// First valid creation date: 1 June 2020 UTC
pub const EPOCH: i64 = 1590969600;

/// Date quantization step: 1/12 of the mean Gregorian year, in seconds
pub const TIME_STEP: i64 = 2629746;

/// Words in a phrase
pub const PHRASE_WORDS: usize = MAX_DEGREE + 1;

/// Placeholder for a single unreadable word
pub const ERASURE: &str = "xxxx";

/// Secret seed length in bytes (128 bits)
pub const SECRET_SIZE: usize = 16;

const VERSION_BITS: u32 = 3;
const RESERVED_BITS: u32 = 2;
const DATE_BITS: u32 = 10;
const DATE_MASK: u32 = (1 << DATE_BITS) - 1;
const CHECK_DIGITS: usize = 1;

/// Current seed format version
const SEED_VERSION: u8 = 0;

#[derive(Error, Debug)]
pub enum SeedError {
    /// Creation date before the format epoch
    #[error("date_created must not be before 1st June 2020")]
    InvalidDate,
    /// The phrase did not contain exactly 14 space-separated words
    #[error("the mnemonic phrase must consist of 14 words")]
    WrongWordCount,
    /// A word that is neither in the wordlist nor the erasure marker
    #[error("unrecognized word: '{0}'")]
    UnknownWord(String),
    /// More than one erasure marker in the phrase
    #[error("two or more erasures cannot be corrected")]
    ErasureOverflow,
    /// All words known but the checksum does not verify
    #[error("phrase is invalid (checksum mismatch)")]
    ChecksumMismatch,
    /// RNG or KDF failure; not recoverable
    #[error("crypto operation failed: {0}")]
    Crypto(String),
}

/// The process-wide coder; built once, immutable afterwards.
fn code() -> &'static ReedSolomonCode {
    static CODE: OnceLock<ReedSolomonCode> = OnceLock::new();
    CODE.get_or_init(|| ReedSolomonCode::new(CHECK_DIGITS))
}

/// A word recovered by erasure correction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Correction {
    /// Zero-based position of the erased word in the phrase
    pub position: usize,
    /// The recovered word
    pub word: &'static str,
}

/// An immutable seed: the packed codeword plus the decoded fields and
/// the derived wallet key.
pub struct Seed {
    version: u8,
    reserved: u8,
    date: i64,
    secret: [u8; SECRET_SIZE],
    key: [u8; kdf::KEY_SIZE],
    message: GfPoly,
    correction: Option<Correction>,
}

impl Seed {
    /// Generate a new seed: sample 16 random bytes from the OS and bind
    /// them to the creation date.
    ///
    /// # Errors
    ///
    /// [`SeedError::InvalidDate`] when `date_created` is before the
    /// epoch; [`SeedError::Crypto`] when the OS random source or the
    /// KDF fails.
    pub fn generate(date_created: i64) -> Result<Self, SeedError> {
        let mut secret = Zeroizing::new([0u8; SECRET_SIZE]);
        OsRng
            .try_fill_bytes(&mut *secret)
            .map_err(|e| SeedError::Crypto(e.to_string()))?;
        Self::from_secret(&secret, date_created)
    }

    /// Build a seed from an existing 128-bit secret and creation date.
    pub fn from_secret(secret: &[u8; SECRET_SIZE], date_created: i64) -> Result<Self, SeedError> {
        if date_created < EPOCH {
            return Err(SeedError::InvalidDate);
        }
        let quantized_date = (((date_created - EPOCH) / TIME_STEP) as u32) & DATE_MASK;

        let message = encode_message(secret, SEED_VERSION, 0, quantized_date);
        let key = kdf::derive_key(secret, SEED_VERSION, quantized_date)?;

        Ok(Self {
            version: SEED_VERSION,
            reserved: 0,
            date: EPOCH + i64::from(quantized_date) * TIME_STEP,
            secret: *secret,
            key: *key,
            message,
            correction: None,
        })
    }

    /// Parse a 14-word phrase, correcting at most one erasure, and
    /// re-derive the wallet key.
    pub fn parse(phrase: &str) -> Result<Self, SeedError> {
        let decoded = decode_phrase(phrase)?;
        let key = kdf::derive_key(&decoded.secret, decoded.version, decoded.quantized_date)?;
        Ok(Self {
            version: decoded.version,
            reserved: decoded.reserved,
            date: EPOCH + i64::from(decoded.quantized_date) * TIME_STEP,
            secret: decoded.secret,
            key: *key,
            message: decoded.message.clone(),
            correction: decoded.correction,
        })
    }

    /// Render the phrase: 14 words separated by single spaces, the
    /// checksum word first.
    pub fn phrase(&self) -> String {
        render_message(&self.message)
    }

    pub fn version(&self) -> u8 {
        self.version
    }

    pub fn reserved(&self) -> u8 {
        self.reserved
    }

    /// Creation date quantized to the step, as seconds since the Unix
    /// epoch.
    pub fn date(&self) -> i64 {
        self.date
    }

    /// The 128-bit secret.
    pub fn secret(&self) -> &[u8; SECRET_SIZE] {
        &self.secret
    }

    /// The derived 32-byte wallet secret key.
    pub fn key(&self) -> &[u8; kdf::KEY_SIZE] {
        &self.key
    }

    /// The word recovered by erasure correction, when parsing corrected
    /// one.
    pub fn correction(&self) -> Option<Correction> {
        self.correction
    }
}

impl Zeroize for Seed {
    fn zeroize(&mut self) {
        self.secret.zeroize();
        self.key.zeroize();
        self.message.zeroize();
    }
}

impl Drop for Seed {
    fn drop(&mut self) {
        self.zeroize();
    }
}

/// Pack the payload into coefficients 1..=13 and append the checksum.
fn encode_message(
    secret: &[u8; SECRET_SIZE],
    version: u8,
    reserved: u8,
    quantized_date: u32,
) -> GfPoly {
    let mut message = GfPoly::new();
    let mut writer = BitWriter::new(&mut message);
    writer.write(u32::from(version), VERSION_BITS);
    writer.write(u32::from(reserved), RESERVED_BITS);
    writer.write(quantized_date, DATE_BITS);
    for &byte in secret {
        writer.write(u32::from(byte), u8::BITS);
    }
    debug_assert!(writer.is_full());
    code().encode(&mut message);
    message
}

fn render_message(message: &GfPoly) -> String {
    let mut out = String::new();
    for i in 0..=message.degree() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(wordlist::word_of(message.get(i)));
    }
    out
}

/// The verified codeword and unpacked payload of a phrase, before key
/// derivation.
struct DecodedPhrase {
    message: GfPoly,
    version: u8,
    reserved: u8,
    quantized_date: u32,
    secret: [u8; SECRET_SIZE],
    correction: Option<Correction>,
}

impl Zeroize for DecodedPhrase {
    fn zeroize(&mut self) {
        self.secret.zeroize();
        self.message.zeroize();
    }
}

impl Drop for DecodedPhrase {
    fn drop(&mut self) {
        self.zeroize();
    }
}

/// Tokenize, verify or correct, and unpack a phrase.
fn decode_phrase(phrase: &str) -> Result<DecodedPhrase, SeedError> {
    let mut message = GfPoly::new();
    let mut erasure: Option<usize> = None;
    let mut count = 0usize;

    for word in phrase.split(' ') {
        if count == PHRASE_WORDS {
            return Err(SeedError::WrongWordCount);
        }
        match wordlist::index_of(word) {
            Some(index) => message.set(count, index),
            None if word == ERASURE => {
                if erasure.is_some() {
                    return Err(SeedError::ErasureOverflow);
                }
                erasure = Some(count);
                message.set(count, 0);
            }
            None => return Err(SeedError::UnknownWord(word.to_string())),
        }
        count += 1;
    }
    if count != PHRASE_WORDS {
        return Err(SeedError::WrongWordCount);
    }
    message.set_degree(MAX_DEGREE);

    let correction = match erasure {
        Some(position) => {
            code().correct(&mut message, position);
            Some(Correction {
                position,
                word: wordlist::word_of(message.get(position)),
            })
        }
        None => {
            if !code().check(&message) {
                return Err(SeedError::ChecksumMismatch);
            }
            None
        }
    };

    let mut reader = BitReader::new(&message);
    let version = reader.read(VERSION_BITS) as u8;
    let reserved = reader.read(RESERVED_BITS) as u8;
    let quantized_date = reader.read(DATE_BITS);
    let mut secret = [0u8; SECRET_SIZE];
    for byte in &mut secret {
        *byte = reader.read(u8::BITS) as u8;
    }
    debug_assert_eq!(reader.used_bits(), TOTAL_BITS);

    Ok(DecodedPhrase {
        message,
        version,
        reserved,
        quantized_date,
        secret,
        correction,
    })
}
