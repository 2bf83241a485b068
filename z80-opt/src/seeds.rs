//! The two fixed, global, read-only seed tables the fingerprint oracle runs
//! every sequence against: [`QC_SEEDS`] (8 states) and [`MID_SEEDS`] (24
//! further states). Both are populated once at process start and never
//! mutated afterward.

use z80_isa::Z80State;

/// Builds a seed state from its `{A,F,B,C,D,E,H,L,SP}` fields, matching the
/// literal order the seed tables are specified in.
const fn seed(a: u8, f: u8, b: u8, c: u8, d: u8, e: u8, h: u8, l: u8, sp: u16) -> Z80State {
    Z80State {
        a,
        f,
        b,
        c,
        d,
        e,
        h,
        l,
        sp,
        m: 0,
    }
}

/// The 8 QuickCheck seeds: edge values chosen to span all-zero, all-ones,
/// ascending, sign/alternating, `0x55`/`0xAA`, inverted alternating,
/// nibble-split, and the `0x7F`/`0x80` sign boundary.
pub const QC_SEEDS: [Z80State; 8] = [
    seed(0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x0000),
    seed(0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFFFF),
    seed(0x01, 0x00, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x1234),
    seed(0x80, 0x01, 0x40, 0x20, 0x10, 0x08, 0x04, 0x02, 0x8000),
    seed(0x55, 0x00, 0xAA, 0x55, 0xAA, 0x55, 0xAA, 0x55, 0x5555),
    seed(0xAA, 0x01, 0x55, 0xAA, 0x55, 0xAA, 0x55, 0xAA, 0xAAAA),
    seed(0x0F, 0x00, 0xF0, 0x0F, 0xF0, 0x0F, 0xF0, 0x0F, 0xFFFE),
    seed(0x7F, 0x01, 0x80, 0x7F, 0x80, 0x7F, 0x80, 0x7F, 0x7FFF),
];

/// The 24 MidCheck seeds, biased toward single-bit accumulator values,
/// per-register unique bit patterns, and sign/mask boundaries, per spec's
/// description of this tier's intent: exposing `BIT`/`RES`/`SET` aliasing
/// that the 8 QC seeds happen to agree on.
///
/// The spec gives no seed literals for this tier (only the QC seeds are
/// spelled out); these values are a concrete resolution of that gap,
/// constructed to the letter of the prose description. See `DESIGN.md`.
pub const MID_SEEDS: [Z80State; 24] = [
    // Single-bit accumulator values 0x01..0x80, each paired with the same
    // bit rotated into every other register so every register exercises
    // every bit position across this block.
    seed(0x01, 0x00, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40, 0x0101),
    seed(0x02, 0x00, 0x04, 0x08, 0x10, 0x20, 0x40, 0x80, 0x0202),
    seed(0x04, 0x00, 0x08, 0x10, 0x20, 0x40, 0x80, 0x01, 0x0404),
    seed(0x08, 0x00, 0x10, 0x20, 0x40, 0x80, 0x01, 0x02, 0x0808),
    seed(0x10, 0x00, 0x20, 0x40, 0x80, 0x01, 0x02, 0x04, 0x1010),
    seed(0x20, 0x00, 0x40, 0x80, 0x01, 0x02, 0x04, 0x08, 0x2020),
    seed(0x40, 0x00, 0x80, 0x01, 0x02, 0x04, 0x08, 0x10, 0x4040),
    seed(0x80, 0x01, 0x01, 0x02, 0x04, 0x08, 0x10, 0x20, 0x8080),
    // Per-register unique bit patterns, carry flag alternating, so ADC/SBC
    // see both carry-in states against a Latin-square-like bit spread.
    seed(0x01, 0x00, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40, 0x0001),
    seed(0x02, 0x01, 0x04, 0x08, 0x10, 0x20, 0x40, 0x80, 0x0002),
    seed(0x04, 0x00, 0x08, 0x10, 0x20, 0x40, 0x80, 0x01, 0x0004),
    seed(0x08, 0x01, 0x10, 0x20, 0x40, 0x80, 0x01, 0x02, 0x0008),
    seed(0x10, 0x00, 0x20, 0x40, 0x80, 0x01, 0x02, 0x04, 0x0010),
    seed(0x20, 0x01, 0x40, 0x80, 0x01, 0x02, 0x04, 0x08, 0x0020),
    seed(0x40, 0x00, 0x80, 0x01, 0x02, 0x04, 0x08, 0x10, 0x0040),
    seed(0x80, 0x01, 0x01, 0x02, 0x04, 0x08, 0x10, 0x20, 0x0080),
    // Sign/mask boundaries: 0x7F/0x80 and 0xBF/0xC0 spread across every
    // register, with the four combinations of the two boundary pairs.
    seed(0x7F, 0x00, 0x80, 0x7F, 0x80, 0x7F, 0x80, 0x7F, 0x7F80),
    seed(0x80, 0x00, 0x7F, 0x80, 0x7F, 0x80, 0x7F, 0x80, 0x807F),
    seed(0xBF, 0x00, 0xC0, 0xBF, 0xC0, 0xBF, 0xC0, 0xBF, 0xBFC0),
    seed(0xC0, 0x00, 0xBF, 0xC0, 0xBF, 0xC0, 0xBF, 0xC0, 0xC0BF),
    seed(0x7F, 0x01, 0xBF, 0xC0, 0x7F, 0x80, 0xBF, 0xC0, 0xFFFF),
    seed(0x80, 0x01, 0xC0, 0xBF, 0x80, 0x7F, 0xC0, 0xBF, 0x0000),
    seed(0xBF, 0x01, 0x7F, 0x80, 0xC0, 0xBF, 0x7F, 0x80, 0x8000),
    seed(0xC0, 0x01, 0x80, 0x7F, 0xBF, 0xC0, 0x80, 0x7F, 0x7FFF),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn qc_seeds_are_distinct() {
        for i in 0..QC_SEEDS.len() {
            for j in (i + 1)..QC_SEEDS.len() {
                assert_ne!(QC_SEEDS[i], QC_SEEDS[j]);
            }
        }
    }

    #[test]
    fn mid_seeds_are_distinct() {
        for i in 0..MID_SEEDS.len() {
            for j in (i + 1)..MID_SEEDS.len() {
                assert_ne!(MID_SEEDS[i], MID_SEEDS[j]);
            }
        }
    }

    #[test]
    fn tier_sizes_match_the_spec() {
        assert_eq!(QC_SEEDS.len(), 8);
        assert_eq!(MID_SEEDS.len(), 24);
    }
}
