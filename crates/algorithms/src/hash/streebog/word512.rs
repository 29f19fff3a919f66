//! Fixed-width 512-bit words for the Streebog state and counters

use byteorder::{BigEndian, ByteOrder};
use core::ops::BitXor;
use zeroize::Zeroize;

/// A 512-bit value as eight 64-bit words, most significant word first.
///
/// Addition wraps modulo 2⁵¹² with the carry propagated from the least
/// significant word (index 7) towards index 0.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Zeroize)]
pub(crate) struct Word512(pub(crate) [u64; 8]);

impl Word512 {
    pub(crate) const ZERO: Word512 = Word512([0u64; 8]);

    /// Read 64 big-endian bytes
    pub(crate) fn from_be_slice(bytes: &[u8]) -> Self {
        debug_assert_eq!(bytes.len(), 64);
        let mut words = [0u64; 8];
        BigEndian::read_u64_into(bytes, &mut words);
        Word512(words)
    }

    pub(crate) fn to_be_bytes(self) -> [u8; 64] {
        let mut out = [0u8; 64];
        BigEndian::write_u64_into(&self.0, &mut out);
        out
    }

    /// (self + other) mod 2⁵¹²
    pub(crate) fn wrapping_add(&self, other: &Word512) -> Word512 {
        let mut out = [0u64; 8];
        let mut carry = false;
        for i in (0..8).rev() {
            let (sum, c1) = self.0[i].overflowing_add(other.0[i]);
            let (sum, c2) = sum.overflowing_add(carry as u64);
            out[i] = sum;
            carry = c1 || c2;
        }
        Word512(out)
    }

    /// (self + value) mod 2⁵¹²
    pub(crate) fn wrapping_add_u64(&self, value: u64) -> Word512 {
        let mut rhs = Word512::ZERO;
        rhs.0[7] = value;
        self.wrapping_add(&rhs)
    }
}

impl BitXor for Word512 {
    type Output = Word512;

    fn bitxor(self, rhs: Word512) -> Word512 {
        let mut out = self.0;
        for (o, r) in out.iter_mut().zip(rhs.0.iter()) {
            *o ^= r;
        }
        Word512(out)
    }
}
