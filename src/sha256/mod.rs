//! SHA-256 digest engine (FIPS 180-4).
//!
//! The whole message is padded up front and folded into the hash state one 64-byte block at a
//! time. Each block goes through two phases: [`schedule`] expands it into 64 words, then
//! [`compress`] runs the 64 rounds and adds the result back into the hash state.

mod digest;

pub use digest::Digest;

use log::debug;

/// Size of one message block in bytes
pub const BLOCK_LEN: usize = 64;

/// Size of the final digest in bytes
pub const DIGEST_LEN: usize = 32;

// Bytes taken up at the end of the final block by the message length in bits
const LEN_FIELD: usize = 8;

/// The first 32 bits of the fractional part of the square roots of the first 8 primes 2..19
pub const INITIAL_HASH: [u32; 8] = [
    0x6A09E667, 0xBB67AE85, 0x3C6EF372, 0xA54FF53A, 0x510E527F, 0x9B05688C, 0x1F83D9AB, 0x5BE0CD19,
];

// The first 32 bits of the fractional part of the cube roots of the first 64 primes 2..311
static K: [u32; 64] = [
    0x428A2F98, 0x71374491, 0xB5C0FBCF, 0xE9B5DBA5, 0x3956C25B, 0x59F111F1, 0x923F82A4, 0xAB1C5ED5,
    0xD807AA98, 0x12835B01, 0x243185BE, 0x550C7DC3, 0x72BE5D74, 0x80DEB1FE, 0x9BDC06A7, 0xC19BF174,
    0xE49B69C1, 0xEFBE4786, 0x0FC19DC6, 0x240CA1CC, 0x2DE92C6F, 0x4A7484AA, 0x5CB0A9DC, 0x76F988DA,
    0x983E5152, 0xA831C66D, 0xB00327C8, 0xBF597FC7, 0xC6E00BF3, 0xD5A79147, 0x06CA6351, 0x14292967,
    0x27B70A85, 0x2E1B2138, 0x4D2C6DFC, 0x53380D13, 0x650A7354, 0x766A0ABB, 0x81C2C92E, 0x92722C85,
    0xA2BFE8A1, 0xA81A664B, 0xC24B8B70, 0xC76C51A3, 0xD192E819, 0xD6990624, 0xF40E3585, 0x106AA070,
    0x19A4C116, 0x1E376C08, 0x2748774C, 0x34B0BCB5, 0x391C0CB3, 0x4ED8AA4A, 0x5B9CCA4F, 0x682E6FF3,
    0x748F82EE, 0x78A5636F, 0x84C87814, 0x8CC70208, 0x90BEFFFA, 0xA4506CEB, 0xBEF9A3F7, 0xC67178F2,
];

// - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - -
// Bitwise helpers
// - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - -
// Message schedule: σ0, σ1
#[inline(always)]
fn small_sigma0(w: u32) -> u32 {
    w.rotate_right(7) ^ w.rotate_right(18) ^ (w >> 3)
}

#[inline(always)]
fn small_sigma1(w: u32) -> u32 {
    w.rotate_right(17) ^ w.rotate_right(19) ^ (w >> 10)
}

// Compression rounds: Σ0 mixes `a`, Σ1 mixes `e`
#[inline(always)]
fn big_sigma0(a: u32) -> u32 {
    a.rotate_right(2) ^ a.rotate_right(13) ^ a.rotate_right(22)
}

#[inline(always)]
fn big_sigma1(e: u32) -> u32 {
    e.rotate_right(6) ^ e.rotate_right(11) ^ e.rotate_right(25)
}

/// Each bit of `e` picks the matching bit from `f` (set) or `g` (clear)
#[inline(always)]
fn ch(e: u32, f: u32, g: u32) -> u32 {
    (e & f) ^ (!e & g)
}

/// Bitwise two-out-of-three vote
#[inline(always)]
fn maj(a: u32, b: u32, c: u32) -> u32 {
    (a & b) ^ (a & c) ^ (b & c)
}

// - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - -
// Padding
// - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - -
/// Number of 64-byte blocks spanned by the padded form of a `message_len` byte message.
///
/// The padding needs at least 9 bytes (the `0x80` marker plus the 64-bit length), so any message
/// whose length mod 64 falls in 56..=63 spills into one extra block.
pub fn block_count(message_len: u64) -> u64 {
    (message_len + LEN_FIELD as u64) / BLOCK_LEN as u64 + 1
}

/// Apply Merkle–Damgård padding: the message, a single `0x80` byte, zero fill, then the message
/// length in bits as a big-endian `u64`. The result is always a whole number of blocks.
pub fn pad_message(message: &[u8]) -> Vec<u8> {
    // Lengths beyond 2^61 bytes are not representable in the length field
    let bit_len = (message.len() as u64).wrapping_mul(8);
    let padded_len = block_count(message.len() as u64) as usize * BLOCK_LEN;

    let mut padded = Vec::with_capacity(padded_len);
    padded.extend_from_slice(message);
    padded.push(0x80);
    padded.resize(padded_len - LEN_FIELD, 0);
    padded.extend_from_slice(&bit_len.to_be_bytes());

    debug_assert_eq!(padded.len() % BLOCK_LEN, 0);
    padded
}

// - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - -
/// Expand one 64-byte block into `msg_schedule`.
///
/// Entries 0..16 are the block read as big-endian words; every later entry `j` is
/// `w[j-16] + σ0(w[j-15]) + w[j-7] + σ1(w[j-2])` modulo 2^32.
///
/// # Panics
///
/// If `msg_blk` is not exactly [`BLOCK_LEN`] bytes long.
pub fn schedule(msg_blk: &[u8], msg_schedule: &mut [u32; 64]) {
    assert_eq!(msg_blk.len(), BLOCK_LEN, "message block must be exactly {BLOCK_LEN} bytes");

    for (word, bytes) in msg_schedule.iter_mut().zip(msg_blk.chunks_exact(4)) {
        *word = u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
    }

    for j in 16..64 {
        msg_schedule[j] = msg_schedule[j - 16]
            .wrapping_add(small_sigma0(msg_schedule[j - 15]))
            .wrapping_add(msg_schedule[j - 7])
            .wrapping_add(small_sigma1(msg_schedule[j - 2]));
    }
}

// - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - -
/// Run the 64 compression rounds over one message schedule and add the working variables back
/// into the hash state
pub fn compress(msg_schedule: &[u32; 64], hash_vals: &mut [u32; 8]) {
    let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *hash_vals;

    for (k, w) in K.iter().zip(msg_schedule) {
        let t1 = h
            .wrapping_add(big_sigma1(e))
            .wrapping_add(ch(e, f, g))
            .wrapping_add(*k)
            .wrapping_add(*w);
        let t2 = big_sigma0(a).wrapping_add(maj(a, b, c));

        // Rotate the working variables one place down the register
        h = g;
        g = f;
        f = e;
        e = d.wrapping_add(t1);
        d = c;
        c = b;
        b = a;
        a = t1.wrapping_add(t2);
    }

    for (hv, working) in hash_vals.iter_mut().zip([a, b, c, d, e, f, g, h]) {
        *hv = hv.wrapping_add(working);
    }
}

// - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - -
/// SHA-256 engine.
///
/// Holds the eight hash words between blocks. Every call to [`Sha256::hash`] starts again from
/// [`INITIAL_HASH`], so an engine can be reused for any number of independent messages.
#[derive(Clone, Debug)]
pub struct Sha256 {
    hash_vals: [u32; 8],
    finished: bool,
}

impl Default for Sha256 {
    fn default() -> Self {
        Self::new()
    }
}

impl Sha256 {
    pub fn new() -> Self {
        Self {
            hash_vals: INITIAL_HASH,
            finished: false,
        }
    }

    /// `true` once a digest has been produced and the hash state is terminal
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Hash `message` and return its 256-bit digest
    pub fn hash(&mut self, message: &[u8]) -> Digest {
        self.hash_vals = INITIAL_HASH;
        self.finished = false;

        let padded = pad_message(message);
        let mut msg_schedule = [0u32; 64];

        for msg_blk in padded.chunks_exact(BLOCK_LEN) {
            schedule(msg_blk, &mut msg_schedule);
            compress(&msg_schedule, &mut self.hash_vals);
        }

        self.finished = true;
        debug!(
            "hashed {} bytes in {} blocks",
            message.len(),
            padded.len() / BLOCK_LEN
        );

        self.output()
    }

    fn output(&self) -> Digest {
        let mut bytes = [0u8; DIGEST_LEN];
        for (out, hv) in bytes.chunks_exact_mut(4).zip(self.hash_vals) {
            out.copy_from_slice(&hv.to_be_bytes());
        }
        Digest::from(bytes)
    }
}

/// One-shot SHA-256 of `message`
pub fn digest(message: &[u8]) -> Digest {
    Sha256::new().hash(message)
}
