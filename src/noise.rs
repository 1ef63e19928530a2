//! Deterministic noise input for the search benchmarks.
//!
//! A seeded keyspace string is pushed through a fixed integer mixing
//! pipeline into a byte buffer. For a given seed, length, and key the
//! buffer is reproducible run over run within this implementation; no
//! bit-compatibility with any other generator is attempted.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Alphabet for the seeded input string.
pub const KEYSPACE: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789_-";

const ACC_INIT: i32 = 5_345_213;

/// Generate `len` characters drawn uniformly from [`KEYSPACE`].
pub fn seeded_keyspace_string(len: usize, seed: u64) -> String {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len)
        .map(|_| KEYSPACE[rng.gen_range(0..KEYSPACE.len())] as char)
        .collect()
}

/// Scramble `input` into a noise byte buffer.
///
/// An i32 accumulator is folded over the characters first, wrapping on
/// overflow. Every character is then mixed with the final accumulator
/// and emitted as a char followed by a space; the buffer is the UTF-8
/// encoding of that text. Mixed character codes can exceed the ASCII
/// range and take two bytes each. The result is noise, not text.
pub fn scramble(input: &str, key: u8) -> Vec<u8> {
    let key = i32::from(key);
    let acc = input.chars().fold(ACC_INIT, |acc, c| {
        acc.wrapping_add((c as i32).wrapping_mul(acc) ^ key)
    });

    let mut buf = String::with_capacity(input.len() * 3);
    for c in input.chars() {
        let code = splash(c as i32, acc);
        // splash is 4 * |x| with |x| <= 88, far below the surrogate range.
        buf.push(char::from_u32(code as u32).expect("mixed code is a valid scalar"));
        buf.push(' ');
    }
    buf.into_bytes()
}

fn nx(x: i32) -> i32 {
    3 + x % 2 - x % 4 + x % 8 - x % 16
}

fn ash(x: i32, l: i32, b: i32) -> i32 {
    x.wrapping_add(nx(x.wrapping_add(l.wrapping_mul(b))))
}

fn splash(x: i32, l: i32) -> i32 {
    4 * (ash(x, l, 255) % 13 + ash(x, l, 128) % 27 - ash(x, l, 64) % 51).abs()
}
