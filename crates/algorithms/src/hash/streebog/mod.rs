//! Streebog hash function (GOST R 34.11-2012, RFC 6986)
//!
//! Both output lengths share one compression function
//! `g(N, h, m) = E(LPS(h ⊕ N), m) ⊕ h ⊕ m`, where `E` is a 12-round
//! SP-network keyed by `LPS(h ⊕ N)`. The two variants differ only in the
//! initialisation vector and in how much of the final state is returned.
//!
//! A message is treated as one big-endian number: full 64-byte blocks are
//! taken from the end of the byte string first, and the leading remainder
//! becomes the padded final block. [`Streebog512`] and [`Streebog256`]
//! therefore buffer their input until `finalize`.

mod tables;
mod word512;

use gostsig_params::utils::hash::{
    STREEBOG256_OUTPUT_SIZE, STREEBOG512_OUTPUT_SIZE, STREEBOG_BLOCK_SIZE,
};
use once_cell::sync::Lazy;
use zeroize::Zeroize;

use self::tables::{A, C, PI};
use self::word512::Word512;
use super::HashFunction;

/// Combined S, P and L lookup: `LPS_TABLES[c][v]` is `l(π(v) << (56 - 8c))`
static LPS_TABLES: Lazy<Box<[[u64; 256]; 8]>> = Lazy::new(build_lps_tables);

const IV_512: Word512 = Word512::ZERO;
const IV_256: Word512 = Word512([0x0101_0101_0101_0101; 8]);

/// The linear map l on one 64-bit word
fn l_word(v: u64) -> u64 {
    let mut r = 0u64;
    for (i, row) in A.iter().rev().enumerate() {
        if (v >> i) & 1 == 1 {
            r ^= row;
        }
    }
    r
}

fn build_lps_tables() -> Box<[[u64; 256]; 8]> {
    let mut tables = Box::new([[0u64; 256]; 8]);
    for (c, table) in tables.iter_mut().enumerate() {
        for (v, entry) in table.iter_mut().enumerate() {
            *entry = l_word((PI[v] as u64) << (56 - 8 * c));
        }
    }
    tables
}

/// L(P(S(state)))
fn lps(state: &Word512) -> Word512 {
    let tables = &**LPS_TABLES;
    let mut out = [0u64; 8];
    for (r, word) in out.iter_mut().enumerate() {
        let shift = 56 - 8 * r;
        *word = tables
            .iter()
            .zip(state.0.iter())
            .fold(0u64, |acc, (table, s)| acc ^ table[((s >> shift) & 0xff) as usize]);
    }
    Word512(out)
}

/// Block cipher E(K, m): twelve LPS∘X rounds and a final key XOR
fn encrypt(key: &Word512, block: &Word512) -> Word512 {
    let mut k = *key;
    let mut state = *block;
    for c in C.iter() {
        state = lps(&(state ^ k));
        k = lps(&(k ^ Word512(*c)));
    }
    state ^ k
}

/// Compression function g_N(h, m)
fn compress(n: &Word512, h: &Word512, m: &Word512) -> Word512 {
    let key = lps(&(*h ^ *n));
    encrypt(&key, m) ^ *h ^ *m
}

/// Final block: the remaining bytes right-aligned, preceded by a single 0x01
fn pad(tail: &[u8]) -> Word512 {
    debug_assert!(tail.len() < STREEBOG_BLOCK_SIZE);
    let mut block = [0u8; STREEBOG_BLOCK_SIZE];
    let start = STREEBOG_BLOCK_SIZE - tail.len();
    block[start..].copy_from_slice(tail);
    block[start - 1] = 0x01;
    let word = Word512::from_be_slice(&block);
    block.zeroize();
    word
}

/// Chaining value `h`, bit counter `N` and block checksum `Σ`
#[derive(Zeroize)]
struct HashState {
    h: Word512,
    n: Word512,
    sigma: Word512,
}

impl HashState {
    fn new(iv: Word512) -> Self {
        HashState {
            h: iv,
            n: Word512::ZERO,
            sigma: Word512::ZERO,
        }
    }

    fn absorb_block(&mut self, m: &Word512) {
        self.h = compress(&self.n, &self.h, m);
        self.n = self.n.wrapping_add_u64(512);
        self.sigma = self.sigma.wrapping_add(m);
    }

    fn absorb_final(&mut self, tail: &[u8]) {
        let m = pad(tail);
        self.h = compress(&self.n, &self.h, &m);
        self.n = self.n.wrapping_add_u64(8 * tail.len() as u64);
        self.sigma = self.sigma.wrapping_add(&m);
    }

    fn finish(mut self) -> Word512 {
        self.h = compress(&Word512::ZERO, &self.h, &self.n);
        self.h = compress(&Word512::ZERO, &self.h, &self.sigma);
        let h = self.h;
        self.zeroize();
        h
    }
}

fn digest_with_iv(iv: Word512, message: &[u8]) -> [u8; 64] {
    let mut state = HashState::new(iv);
    let mut rest = message;
    while rest.len() >= STREEBOG_BLOCK_SIZE {
        let (head, block) = rest.split_at(rest.len() - STREEBOG_BLOCK_SIZE);
        state.absorb_block(&Word512::from_be_slice(block));
        rest = head;
    }
    state.absorb_final(rest);
    state.finish().to_be_bytes()
}

/// Streebog-512 of `message`, big-endian
pub fn hash512(message: &[u8]) -> [u8; STREEBOG512_OUTPUT_SIZE] {
    digest_with_iv(IV_512, message)
}

/// Streebog-256 of `message`, big-endian
pub fn hash256(message: &[u8]) -> [u8; STREEBOG256_OUTPUT_SIZE] {
    let mut full = digest_with_iv(IV_256, message);
    let mut out = [0u8; STREEBOG256_OUTPUT_SIZE];
    out.copy_from_slice(&full[..STREEBOG256_OUTPUT_SIZE]);
    full.zeroize();
    out
}

/// Streebog with a 512-bit digest
///
/// Buffers the whole message until `finalize`.
#[derive(Clone, Default, Zeroize)]
pub struct Streebog512 {
    buffer: Vec<u8>,
}

/// Streebog with a 256-bit digest
///
/// Buffers the whole message until `finalize`.
#[derive(Clone, Default, Zeroize)]
pub struct Streebog256 {
    buffer: Vec<u8>,
}

impl Drop for Streebog512 {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl Drop for Streebog256 {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl HashFunction for Streebog512 {
    type Output = [u8; STREEBOG512_OUTPUT_SIZE];

    fn new() -> Self {
        Self::default()
    }

    /// Appends `data` to the internal buffer.
    ///
    /// Nothing is compressed before `finalize`, so memory use grows with
    /// the total input length.
    fn update(&mut self, data: &[u8]) -> &mut Self {
        self.buffer.extend_from_slice(data);
        self
    }

    fn finalize(&mut self) -> Self::Output {
        let out = hash512(&self.buffer);
        self.buffer.zeroize();
        out
    }

    fn output_size() -> usize {
        STREEBOG512_OUTPUT_SIZE
    }

    fn block_size() -> usize {
        STREEBOG_BLOCK_SIZE
    }

    fn name() -> &'static str {
        "Streebog-512"
    }
}

impl HashFunction for Streebog256 {
    type Output = [u8; STREEBOG256_OUTPUT_SIZE];

    fn new() -> Self {
        Self::default()
    }

    /// Appends `data` to the internal buffer.
    ///
    /// Nothing is compressed before `finalize`, so memory use grows with
    /// the total input length.
    fn update(&mut self, data: &[u8]) -> &mut Self {
        self.buffer.extend_from_slice(data);
        self
    }

    fn finalize(&mut self) -> Self::Output {
        let out = hash256(&self.buffer);
        self.buffer.zeroize();
        out
    }

    fn output_size() -> usize {
        STREEBOG256_OUTPUT_SIZE
    }

    fn block_size() -> usize {
        STREEBOG_BLOCK_SIZE
    }

    fn name() -> &'static str {
        "Streebog-256"
    }
}
