//! Command-word builders and trace helpers for tests
#![allow(dead_code)]

use crate::Fir4;

/// Sampling command: opcode `00`, 6-bit sample payload.
pub const fn sample(x: u8) -> u8 {
    x & 0x3f
}

/// Write h0: opcode `01`.
pub const fn write_h0(h: u8) -> u8 {
    0x40 | (h & 0x3f)
}

/// Write h1: opcode `10`.
pub const fn write_h1(h: u8) -> u8 {
    0x80 | (h & 0x3f)
}

/// Mode load: opcode `11`, payload bit 3 set, mode in bits `[5:4]`.
pub const fn load(mode: u8) -> u8 {
    0xc0 | ((mode & 3) << 4) | 0x08
}

/// Legacy split write: opcode `11`, payload bit 3 clear,
/// h2 field in bits `[5:3]` (bit 3 must stay clear), h3 field in `[2:0]`.
pub const fn split(h2: u8, h3: u8) -> u8 {
    0xc0 | ((h2 & 0x6) << 3) | (h3 & 0x7)
}

/// Tick once per word and collect the accumulator after each cycle.
pub fn trace(fir: &mut Fir4, words: &[u8]) -> Vec<i16> {
    words
        .iter()
        .map(|w| {
            fir.tick(*w);
            fir.acc()
        })
        .collect()
}
