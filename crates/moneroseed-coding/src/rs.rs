//! Reed-Solomon code over GF(2^11)
//!
//! Systematic code with n = 14 symbols and `check_digits` parity symbols
//! in the low positions. The generator is g(x) = Π (x + α^i) for
//! i < check_digits; the shipped configuration uses a single check
//! symbol, g(x) = x + 1, so a codeword is one whose coefficients XOR to
//! zero.
//!
//! With one parity symbol the minimum distance is 2: any single
//! corrupted word is detected, and a single erasure (a word whose
//! position is known) is corrected. Errors at unknown positions cannot
//! be corrected and no attempt is made to.

use crate::gf2048::{gf_add, gf_mul, gf_pow, GF_GENERATOR};
use crate::poly::{GfPoly, MAX_DEGREE};

pub struct ReedSolomonCode {
    check_digits: usize,
    generator: GfPoly,
}

impl ReedSolomonCode {
    /// Build the code with `check_digits` parity symbols.
    pub fn new(check_digits: usize) -> Self {
        assert!(
            check_digits >= 1 && check_digits <= MAX_DEGREE,
            "check digit count out of range"
        );
        let mut generator = GfPoly::new();
        generator.set(0, 1);
        for i in 0..check_digits {
            // multiply the accumulated generator by (x + α^i)
            let root = gf_pow(GF_GENERATOR, i as u32);
            let degree = generator.degree();
            let mut next = GfPoly::new();
            for j in (0..=degree).rev() {
                let c = generator.get(j);
                next.set(j + 1, gf_add(next.get(j + 1), c));
                next.set(j, gf_add(next.get(j), gf_mul(c, root)));
            }
            generator = next;
        }
        Self {
            check_digits,
            generator,
        }
    }

    pub fn check_digits(&self) -> usize {
        self.check_digits
    }

    pub fn generator(&self) -> &GfPoly {
        &self.generator
    }

    /// Systematic encode: the data occupies positions
    /// `check_digits..=MAX_DEGREE` and the parity symbols (the remainder
    /// of the data part modulo the generator) are written into positions
    /// `0..check_digits`.
    ///
    /// Post-condition: the polynomial evaluates to zero at every
    /// generator root, so [`check`](Self::check) passes.
    pub fn encode(&self, message: &mut GfPoly) {
        let mut rem = [0u16; MAX_DEGREE];
        for i in (self.check_digits..=MAX_DEGREE).rev() {
            let feedback = gf_add(message.get(i), rem[self.check_digits - 1]);
            for j in (1..self.check_digits).rev() {
                rem[j] = gf_add(rem[j - 1], gf_mul(feedback, self.generator.get(j)));
            }
            rem[0] = gf_mul(feedback, self.generator.get(0));
        }
        for (j, &parity) in rem[..self.check_digits].iter().enumerate() {
            message.set(j, parity);
        }
        message.set_degree(MAX_DEGREE);
    }

    /// Verify the checksum: every syndrome (the evaluation at each
    /// generator root) must be zero.
    pub fn check(&self, message: &GfPoly) -> bool {
        (0..self.check_digits).all(|i| message.eval(gf_pow(GF_GENERATOR, i as u32)) == 0)
    }

    /// Fill in a single erased coefficient so the checksum passes.
    ///
    /// With one check symbol the erased value is the XOR of the other 13
    /// coefficients, the unique solution of the single syndrome
    /// equation.
    pub fn correct(&self, message: &mut GfPoly, position: usize) {
        debug_assert_eq!(self.check_digits, 1);
        let mut value = 0;
        for i in 0..=message.degree() {
            if i != position {
                value = gf_add(value, message.get(i));
            }
        }
        message.set(position, value);
    }
}
