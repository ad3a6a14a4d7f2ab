//! Coding pipeline for the 14-word mnemonic seed
//!
//! Pure math layer: GF(2^11) arithmetic, a fixed-capacity polynomial,
//! the single-check-digit Reed-Solomon code, and the bit codec that maps
//! the structured seed payload onto polynomial coefficients.
//!
//! Everything here is synchronous, allocation-free and reentrant. The
//! field tables are built once on first use behind a one-shot guard.

pub mod bits;
pub mod gf2048;
pub mod poly;
pub mod rs;

pub use poly::{GfPoly, MAX_DEGREE};
pub use rs::ReedSolomonCode;
