//! [`Instruction`]: an [`Opcode`] paired with whatever immediate value it
//! carries, plus disassembly formatting.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::opcode::Opcode;

/// One concrete instruction: an opcode tag plus its immediate operand.
///
/// `imm16` is ignored by opcodes that take no immediate, and truncated to
/// its low byte by opcodes that take an 8-bit immediate; [`Opcode::meta`]
/// says which is which.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Instruction {
    /// The opcode tag.
    pub opcode: Opcode,
    /// The immediate operand, if any (8-bit immediates live in the low byte).
    pub imm16: u16,
}

impl Instruction {
    /// Builds an instruction with no immediate operand.
    #[must_use]
    pub const fn bare(opcode: Opcode) -> Self {
        Self { opcode, imm16: 0 }
    }

    /// Builds an instruction carrying an 8-bit immediate.
    #[must_use]
    pub const fn with_imm8(opcode: Opcode, n: u8) -> Self {
        Self {
            opcode,
            imm16: n as u16,
        }
    }

    /// Builds an instruction carrying a 16-bit immediate.
    #[must_use]
    pub const fn with_imm16(opcode: Opcode, nn: u16) -> Self {
        Self { opcode, imm16: nn }
    }

    /// Renders the lowercase Z80 assembly text for this instruction, per the
    /// `n`/`nn` formatting convention: 8-bit immediates as two hex digits,
    /// 16-bit immediates as four, both suffixed with `h`, with a leading `0`
    /// inserted when the leftmost digit would otherwise be a letter (so the
    /// text parses unambiguously as a number rather than an identifier).
    #[must_use]
    pub fn to_asm_string(self) -> String {
        let meta = self.opcode.meta();
        if meta.has_imm16 {
            meta.asm_template
                .replace("{nn}", &format_hex_operand(self.imm16 as u32, 4))
        } else if meta.has_immediate {
            meta.asm_template
                .replace("{n}", &format_hex_operand(self.imm16 as u8 as u32, 2))
        } else {
            meta.asm_template.to_string()
        }
    }
}

/// Renders `value` as `digits` lowercase hex digits (zero-padded), suffixed
/// with `h`, prefixing an extra `0` when the leftmost digit is `a`..`f`.
fn format_hex_operand(value: u32, digits: usize) -> String {
    let body = format!("{:0width$x}", value, width = digits);
    let leads_with_letter = body
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_hexdigit() && !c.is_ascii_digit());
    if leads_with_letter {
        format!("0{body}h")
    } else {
        format!("{body}h")
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_asm_string())
    }
}

/// Renders a sequence of instructions as `" : "`-joined assembly, the
/// textual form the Rule I/O contract uses for `source_asm`/`replacement_asm`.
#[must_use]
pub fn sequence_to_asm_string(seq: &[Instruction]) -> String {
    seq.iter()
        .map(|i| i.to_asm_string())
        .collect::<Vec<_>>()
        .join(" : ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reg_reg_has_no_immediate_suffix() {
        let i = Instruction::bare(Opcode::LD_A_B);
        assert_eq!(i.to_asm_string(), "ld a,b");
    }

    #[test]
    fn imm8_is_padded_to_two_hex_digits() {
        let i = Instruction::with_imm8(Opcode::LD_A_N, 0x07);
        assert_eq!(i.to_asm_string(), "ld a,07h");
    }

    #[test]
    fn imm16_is_padded_to_four_hex_digits() {
        let i = Instruction::with_imm16(Opcode::LD_BC_NN, 0x2A);
        assert_eq!(i.to_asm_string(), "ld bc,002ah");
    }

    #[test]
    fn imm8_leading_letter_digit_gets_a_zero_prefix() {
        let i = Instruction::with_imm8(Opcode::LD_A_N, 0xA0);
        assert_eq!(i.to_asm_string(), "ld a,0a0h");
    }

    #[test]
    fn imm16_leading_letter_digit_gets_a_zero_prefix() {
        let i = Instruction::with_imm16(Opcode::LD_BC_NN, 0xDEAD);
        assert_eq!(i.to_asm_string(), "ld bc,0deadh");
    }

    #[test]
    fn sequences_join_with_colons() {
        let seq = [
            Instruction::bare(Opcode::AND_A_B),
            Instruction::bare(Opcode::OR_A_B),
        ];
        assert_eq!(sequence_to_asm_string(&seq), "and a,b : or a,b");
    }
}
