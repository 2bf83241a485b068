//! Per-opcode static metadata: encoded size, timing, register footprint, and
//! the assembly template used by [`crate::instruction::Instruction`]'s
//! `Display` impl.
//!
//! [`OpMeta::reads`] and [`OpMeta::writes`] are the register masks the
//! enumerator and pruner use to detect dead writes and self-loads without
//! having to execute anything (spec'd in `crate::opcode`'s module docs).

use crate::opcode::Opcode;

bitflags::bitflags! {
    /// Which of the ten state-carrying locations an instruction touches.
    ///
    /// `M` stands for the virtual memory byte, not a CPU register, but it
    /// is tracked the same way for pruning purposes.
    pub struct RegMask: u16 {
        /// Accumulator.
        const A = 0b00_0000_0001;
        /// Flags.
        const F = 0b00_0000_0010;
        const B = 0b00_0000_0100;
        const C = 0b00_0000_1000;
        const D = 0b00_0001_0000;
        const E = 0b00_0010_0000;
        const H = 0b00_0100_0000;
        const L = 0b00_1000_0000;
        /// Stack pointer, touched as a 16-bit unit.
        const SP = 0b01_0000_0000;
        /// The virtual memory byte (`mem-ops` opcodes only).
        const M = 0b10_0000_0000;
        /// `BC` as a pair; set alongside `B`/`C` for 16-bit ops.
        const BC = Self::B.bits | Self::C.bits;
        /// `DE` as a pair; set alongside `D`/`E` for 16-bit ops.
        const DE = Self::D.bits | Self::E.bits;
        /// `HL` as a pair; set alongside `H`/`L` for 16-bit ops.
        const HL = Self::H.bits | Self::L.bits;
    }
}

/// Static facts about one [`Opcode`] variant, independent of any particular
/// instance's immediate value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpMeta {
    /// Length of the encoded instruction in bytes, including any prefix and
    /// immediate operand.
    pub encoded_bytes: u8,
    /// Nominal T-state (clock cycle) count.
    pub t_states: u8,
    /// Locations this instruction reads before computing its result.
    pub reads: RegMask,
    /// Locations this instruction overwrites.
    pub writes: RegMask,
    /// Whether this opcode carries an 8-bit immediate operand.
    pub has_immediate: bool,
    /// Whether this opcode carries a 16-bit immediate operand.
    pub has_imm16: bool,
    /// Lowercase assembly template; `{n}`/`{nn}` mark immediate operands.
    pub asm_template: &'static str,
}

impl Opcode {
    /// Looks up this opcode's static metadata.
    ///
    /// A dense match on the opcode tag, the shape recommended for
    /// exhaustive, branch-predictable dispatch over a closed opcode set.
    #[must_use]
    pub fn meta(self) -> OpMeta {
        match self {
        Opcode::LD_A_A => OpMeta {
            encoded_bytes: 1,
            t_states: 4,
            reads: RegMask::A,
            writes: RegMask::A,
            has_immediate: false,
            has_imm16: false,
            asm_template: "ld a,a",
        },
        Opcode::LD_A_B => OpMeta {
            encoded_bytes: 1,
            t_states: 4,
            reads: RegMask::B,
            writes: RegMask::A,
            has_immediate: false,
            has_imm16: false,
            asm_template: "ld a,b",
        },
        Opcode::LD_A_C => OpMeta {
            encoded_bytes: 1,
            t_states: 4,
            reads: RegMask::C,
            writes: RegMask::A,
            has_immediate: false,
            has_imm16: false,
            asm_template: "ld a,c",
        },
        Opcode::LD_A_D => OpMeta {
            encoded_bytes: 1,
            t_states: 4,
            reads: RegMask::D,
            writes: RegMask::A,
            has_immediate: false,
            has_imm16: false,
            asm_template: "ld a,d",
        },
        Opcode::LD_A_E => OpMeta {
            encoded_bytes: 1,
            t_states: 4,
            reads: RegMask::E,
            writes: RegMask::A,
            has_immediate: false,
            has_imm16: false,
            asm_template: "ld a,e",
        },
        Opcode::LD_A_H => OpMeta {
            encoded_bytes: 1,
            t_states: 4,
            reads: RegMask::H,
            writes: RegMask::A,
            has_immediate: false,
            has_imm16: false,
            asm_template: "ld a,h",
        },
        Opcode::LD_A_L => OpMeta {
            encoded_bytes: 1,
            t_states: 4,
            reads: RegMask::L,
            writes: RegMask::A,
            has_immediate: false,
            has_imm16: false,
            asm_template: "ld a,l",
        },
        Opcode::LD_B_A => OpMeta {
            encoded_bytes: 1,
            t_states: 4,
            reads: RegMask::A,
            writes: RegMask::B,
            has_immediate: false,
            has_imm16: false,
            asm_template: "ld b,a",
        },
        Opcode::LD_B_B => OpMeta {
            encoded_bytes: 1,
            t_states: 4,
            reads: RegMask::B,
            writes: RegMask::B,
            has_immediate: false,
            has_imm16: false,
            asm_template: "ld b,b",
        },
        Opcode::LD_B_C => OpMeta {
            encoded_bytes: 1,
            t_states: 4,
            reads: RegMask::C,
            writes: RegMask::B,
            has_immediate: false,
            has_imm16: false,
            asm_template: "ld b,c",
        },
        Opcode::LD_B_D => OpMeta {
            encoded_bytes: 1,
            t_states: 4,
            reads: RegMask::D,
            writes: RegMask::B,
            has_immediate: false,
            has_imm16: false,
            asm_template: "ld b,d",
        },
        Opcode::LD_B_E => OpMeta {
            encoded_bytes: 1,
            t_states: 4,
            reads: RegMask::E,
            writes: RegMask::B,
            has_immediate: false,
            has_imm16: false,
            asm_template: "ld b,e",
        },
        Opcode::LD_B_H => OpMeta {
            encoded_bytes: 1,
            t_states: 4,
            reads: RegMask::H,
            writes: RegMask::B,
            has_immediate: false,
            has_imm16: false,
            asm_template: "ld b,h",
        },
        Opcode::LD_B_L => OpMeta {
            encoded_bytes: 1,
            t_states: 4,
            reads: RegMask::L,
            writes: RegMask::B,
            has_immediate: false,
            has_imm16: false,
            asm_template: "ld b,l",
        },
        Opcode::LD_C_A => OpMeta {
            encoded_bytes: 1,
            t_states: 4,
            reads: RegMask::A,
            writes: RegMask::C,
            has_immediate: false,
            has_imm16: false,
            asm_template: "ld c,a",
        },
        Opcode::LD_C_B => OpMeta {
            encoded_bytes: 1,
            t_states: 4,
            reads: RegMask::B,
            writes: RegMask::C,
            has_immediate: false,
            has_imm16: false,
            asm_template: "ld c,b",
        },
        Opcode::LD_C_C => OpMeta {
            encoded_bytes: 1,
            t_states: 4,
            reads: RegMask::C,
            writes: RegMask::C,
            has_immediate: false,
            has_imm16: false,
            asm_template: "ld c,c",
        },
        Opcode::LD_C_D => OpMeta {
            encoded_bytes: 1,
            t_states: 4,
            reads: RegMask::D,
            writes: RegMask::C,
            has_immediate: false,
            has_imm16: false,
            asm_template: "ld c,d",
        },
        Opcode::LD_C_E => OpMeta {
            encoded_bytes: 1,
            t_states: 4,
            reads: RegMask::E,
            writes: RegMask::C,
            has_immediate: false,
            has_imm16: false,
            asm_template: "ld c,e",
        },
        Opcode::LD_C_H => OpMeta {
            encoded_bytes: 1,
            t_states: 4,
            reads: RegMask::H,
            writes: RegMask::C,
            has_immediate: false,
            has_imm16: false,
            asm_template: "ld c,h",
        },
        Opcode::LD_C_L => OpMeta {
            encoded_bytes: 1,
            t_states: 4,
            reads: RegMask::L,
            writes: RegMask::C,
            has_immediate: false,
            has_imm16: false,
            asm_template: "ld c,l",
        },
        Opcode::LD_D_A => OpMeta {
            encoded_bytes: 1,
            t_states: 4,
            reads: RegMask::A,
            writes: RegMask::D,
            has_immediate: false,
            has_imm16: false,
            asm_template: "ld d,a",
        },
        Opcode::LD_D_B => OpMeta {
            encoded_bytes: 1,
            t_states: 4,
            reads: RegMask::B,
            writes: RegMask::D,
            has_immediate: false,
            has_imm16: false,
            asm_template: "ld d,b",
        },
        Opcode::LD_D_C => OpMeta {
            encoded_bytes: 1,
            t_states: 4,
            reads: RegMask::C,
            writes: RegMask::D,
            has_immediate: false,
            has_imm16: false,
            asm_template: "ld d,c",
        },
        Opcode::LD_D_D => OpMeta {
            encoded_bytes: 1,
            t_states: 4,
            reads: RegMask::D,
            writes: RegMask::D,
            has_immediate: false,
            has_imm16: false,
            asm_template: "ld d,d",
        },
        Opcode::LD_D_E => OpMeta {
            encoded_bytes: 1,
            t_states: 4,
            reads: RegMask::E,
            writes: RegMask::D,
            has_immediate: false,
            has_imm16: false,
            asm_template: "ld d,e",
        },
        Opcode::LD_D_H => OpMeta {
            encoded_bytes: 1,
            t_states: 4,
            reads: RegMask::H,
            writes: RegMask::D,
            has_immediate: false,
            has_imm16: false,
            asm_template: "ld d,h",
        },
        Opcode::LD_D_L => OpMeta {
            encoded_bytes: 1,
            t_states: 4,
            reads: RegMask::L,
            writes: RegMask::D,
            has_immediate: false,
            has_imm16: false,
            asm_template: "ld d,l",
        },
        Opcode::LD_E_A => OpMeta {
            encoded_bytes: 1,
            t_states: 4,
            reads: RegMask::A,
            writes: RegMask::E,
            has_immediate: false,
            has_imm16: false,
            asm_template: "ld e,a",
        },
        Opcode::LD_E_B => OpMeta {
            encoded_bytes: 1,
            t_states: 4,
            reads: RegMask::B,
            writes: RegMask::E,
            has_immediate: false,
            has_imm16: false,
            asm_template: "ld e,b",
        },
        Opcode::LD_E_C => OpMeta {
            encoded_bytes: 1,
            t_states: 4,
            reads: RegMask::C,
            writes: RegMask::E,
            has_immediate: false,
            has_imm16: false,
            asm_template: "ld e,c",
        },
        Opcode::LD_E_D => OpMeta {
            encoded_bytes: 1,
            t_states: 4,
            reads: RegMask::D,
            writes: RegMask::E,
            has_immediate: false,
            has_imm16: false,
            asm_template: "ld e,d",
        },
        Opcode::LD_E_E => OpMeta {
            encoded_bytes: 1,
            t_states: 4,
            reads: RegMask::E,
            writes: RegMask::E,
            has_immediate: false,
            has_imm16: false,
            asm_template: "ld e,e",
        },
        Opcode::LD_E_H => OpMeta {
            encoded_bytes: 1,
            t_states: 4,
            reads: RegMask::H,
            writes: RegMask::E,
            has_immediate: false,
            has_imm16: false,
            asm_template: "ld e,h",
        },
        Opcode::LD_E_L => OpMeta {
            encoded_bytes: 1,
            t_states: 4,
            reads: RegMask::L,
            writes: RegMask::E,
            has_immediate: false,
            has_imm16: false,
            asm_template: "ld e,l",
        },
        Opcode::LD_H_A => OpMeta {
            encoded_bytes: 1,
            t_states: 4,
            reads: RegMask::A,
            writes: RegMask::H,
            has_immediate: false,
            has_imm16: false,
            asm_template: "ld h,a",
        },
        Opcode::LD_H_B => OpMeta {
            encoded_bytes: 1,
            t_states: 4,
            reads: RegMask::B,
            writes: RegMask::H,
            has_immediate: false,
            has_imm16: false,
            asm_template: "ld h,b",
        },
        Opcode::LD_H_C => OpMeta {
            encoded_bytes: 1,
            t_states: 4,
            reads: RegMask::C,
            writes: RegMask::H,
            has_immediate: false,
            has_imm16: false,
            asm_template: "ld h,c",
        },
        Opcode::LD_H_D => OpMeta {
            encoded_bytes: 1,
            t_states: 4,
            reads: RegMask::D,
            writes: RegMask::H,
            has_immediate: false,
            has_imm16: false,
            asm_template: "ld h,d",
        },
        Opcode::LD_H_E => OpMeta {
            encoded_bytes: 1,
            t_states: 4,
            reads: RegMask::E,
            writes: RegMask::H,
            has_immediate: false,
            has_imm16: false,
            asm_template: "ld h,e",
        },
        Opcode::LD_H_H => OpMeta {
            encoded_bytes: 1,
            t_states: 4,
            reads: RegMask::H,
            writes: RegMask::H,
            has_immediate: false,
            has_imm16: false,
            asm_template: "ld h,h",
        },
        Opcode::LD_H_L => OpMeta {
            encoded_bytes: 1,
            t_states: 4,
            reads: RegMask::L,
            writes: RegMask::H,
            has_immediate: false,
            has_imm16: false,
            asm_template: "ld h,l",
        },
        Opcode::LD_L_A => OpMeta {
            encoded_bytes: 1,
            t_states: 4,
            reads: RegMask::A,
            writes: RegMask::L,
            has_immediate: false,
            has_imm16: false,
            asm_template: "ld l,a",
        },
        Opcode::LD_L_B => OpMeta {
            encoded_bytes: 1,
            t_states: 4,
            reads: RegMask::B,
            writes: RegMask::L,
            has_immediate: false,
            has_imm16: false,
            asm_template: "ld l,b",
        },
        Opcode::LD_L_C => OpMeta {
            encoded_bytes: 1,
            t_states: 4,
            reads: RegMask::C,
            writes: RegMask::L,
            has_immediate: false,
            has_imm16: false,
            asm_template: "ld l,c",
        },
        Opcode::LD_L_D => OpMeta {
            encoded_bytes: 1,
            t_states: 4,
            reads: RegMask::D,
            writes: RegMask::L,
            has_immediate: false,
            has_imm16: false,
            asm_template: "ld l,d",
        },
        Opcode::LD_L_E => OpMeta {
            encoded_bytes: 1,
            t_states: 4,
            reads: RegMask::E,
            writes: RegMask::L,
            has_immediate: false,
            has_imm16: false,
            asm_template: "ld l,e",
        },
        Opcode::LD_L_H => OpMeta {
            encoded_bytes: 1,
            t_states: 4,
            reads: RegMask::H,
            writes: RegMask::L,
            has_immediate: false,
            has_imm16: false,
            asm_template: "ld l,h",
        },
        Opcode::LD_L_L => OpMeta {
            encoded_bytes: 1,
            t_states: 4,
            reads: RegMask::L,
            writes: RegMask::L,
            has_immediate: false,
            has_imm16: false,
            asm_template: "ld l,l",
        },
        Opcode::LD_A_N => OpMeta {
            encoded_bytes: 2,
            t_states: 7,
            reads: RegMask::empty(),
            writes: RegMask::A,
            has_immediate: true,
            has_imm16: false,
            asm_template: "ld a,{n}",
        },
        Opcode::LD_B_N => OpMeta {
            encoded_bytes: 2,
            t_states: 7,
            reads: RegMask::empty(),
            writes: RegMask::B,
            has_immediate: true,
            has_imm16: false,
            asm_template: "ld b,{n}",
        },
        Opcode::LD_C_N => OpMeta {
            encoded_bytes: 2,
            t_states: 7,
            reads: RegMask::empty(),
            writes: RegMask::C,
            has_immediate: true,
            has_imm16: false,
            asm_template: "ld c,{n}",
        },
        Opcode::LD_D_N => OpMeta {
            encoded_bytes: 2,
            t_states: 7,
            reads: RegMask::empty(),
            writes: RegMask::D,
            has_immediate: true,
            has_imm16: false,
            asm_template: "ld d,{n}",
        },
        Opcode::LD_E_N => OpMeta {
            encoded_bytes: 2,
            t_states: 7,
            reads: RegMask::empty(),
            writes: RegMask::E,
            has_immediate: true,
            has_imm16: false,
            asm_template: "ld e,{n}",
        },
        Opcode::LD_H_N => OpMeta {
            encoded_bytes: 2,
            t_states: 7,
            reads: RegMask::empty(),
            writes: RegMask::H,
            has_immediate: true,
            has_imm16: false,
            asm_template: "ld h,{n}",
        },
        Opcode::LD_L_N => OpMeta {
            encoded_bytes: 2,
            t_states: 7,
            reads: RegMask::empty(),
            writes: RegMask::L,
            has_immediate: true,
            has_imm16: false,
            asm_template: "ld l,{n}",
        },
        Opcode::ADD_A_A => OpMeta {
            encoded_bytes: 1,
            t_states: 4,
            reads: RegMask::A | RegMask::A,
            writes: RegMask::A | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "add a,a",
        },
        Opcode::ADD_A_B => OpMeta {
            encoded_bytes: 1,
            t_states: 4,
            reads: RegMask::A | RegMask::B,
            writes: RegMask::A | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "add a,b",
        },
        Opcode::ADD_A_C => OpMeta {
            encoded_bytes: 1,
            t_states: 4,
            reads: RegMask::A | RegMask::C,
            writes: RegMask::A | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "add a,c",
        },
        Opcode::ADD_A_D => OpMeta {
            encoded_bytes: 1,
            t_states: 4,
            reads: RegMask::A | RegMask::D,
            writes: RegMask::A | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "add a,d",
        },
        Opcode::ADD_A_E => OpMeta {
            encoded_bytes: 1,
            t_states: 4,
            reads: RegMask::A | RegMask::E,
            writes: RegMask::A | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "add a,e",
        },
        Opcode::ADD_A_H => OpMeta {
            encoded_bytes: 1,
            t_states: 4,
            reads: RegMask::A | RegMask::H,
            writes: RegMask::A | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "add a,h",
        },
        Opcode::ADD_A_L => OpMeta {
            encoded_bytes: 1,
            t_states: 4,
            reads: RegMask::A | RegMask::L,
            writes: RegMask::A | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "add a,l",
        },
        Opcode::ADD_A_N => OpMeta {
            encoded_bytes: 2,
            t_states: 7,
            reads: RegMask::A,
            writes: RegMask::A | RegMask::F,
            has_immediate: true,
            has_imm16: false,
            asm_template: "add a,{n}",
        },
        Opcode::ADC_A_A => OpMeta {
            encoded_bytes: 1,
            t_states: 4,
            reads: RegMask::A | RegMask::A,
            writes: RegMask::A | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "adc a,a",
        },
        Opcode::ADC_A_B => OpMeta {
            encoded_bytes: 1,
            t_states: 4,
            reads: RegMask::A | RegMask::B,
            writes: RegMask::A | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "adc a,b",
        },
        Opcode::ADC_A_C => OpMeta {
            encoded_bytes: 1,
            t_states: 4,
            reads: RegMask::A | RegMask::C,
            writes: RegMask::A | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "adc a,c",
        },
        Opcode::ADC_A_D => OpMeta {
            encoded_bytes: 1,
            t_states: 4,
            reads: RegMask::A | RegMask::D,
            writes: RegMask::A | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "adc a,d",
        },
        Opcode::ADC_A_E => OpMeta {
            encoded_bytes: 1,
            t_states: 4,
            reads: RegMask::A | RegMask::E,
            writes: RegMask::A | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "adc a,e",
        },
        Opcode::ADC_A_H => OpMeta {
            encoded_bytes: 1,
            t_states: 4,
            reads: RegMask::A | RegMask::H,
            writes: RegMask::A | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "adc a,h",
        },
        Opcode::ADC_A_L => OpMeta {
            encoded_bytes: 1,
            t_states: 4,
            reads: RegMask::A | RegMask::L,
            writes: RegMask::A | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "adc a,l",
        },
        Opcode::ADC_A_N => OpMeta {
            encoded_bytes: 2,
            t_states: 7,
            reads: RegMask::A,
            writes: RegMask::A | RegMask::F,
            has_immediate: true,
            has_imm16: false,
            asm_template: "adc a,{n}",
        },
        Opcode::SUB_A_A => OpMeta {
            encoded_bytes: 1,
            t_states: 4,
            reads: RegMask::A | RegMask::A,
            writes: RegMask::A | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "sub a,a",
        },
        Opcode::SUB_A_B => OpMeta {
            encoded_bytes: 1,
            t_states: 4,
            reads: RegMask::A | RegMask::B,
            writes: RegMask::A | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "sub a,b",
        },
        Opcode::SUB_A_C => OpMeta {
            encoded_bytes: 1,
            t_states: 4,
            reads: RegMask::A | RegMask::C,
            writes: RegMask::A | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "sub a,c",
        },
        Opcode::SUB_A_D => OpMeta {
            encoded_bytes: 1,
            t_states: 4,
            reads: RegMask::A | RegMask::D,
            writes: RegMask::A | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "sub a,d",
        },
        Opcode::SUB_A_E => OpMeta {
            encoded_bytes: 1,
            t_states: 4,
            reads: RegMask::A | RegMask::E,
            writes: RegMask::A | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "sub a,e",
        },
        Opcode::SUB_A_H => OpMeta {
            encoded_bytes: 1,
            t_states: 4,
            reads: RegMask::A | RegMask::H,
            writes: RegMask::A | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "sub a,h",
        },
        Opcode::SUB_A_L => OpMeta {
            encoded_bytes: 1,
            t_states: 4,
            reads: RegMask::A | RegMask::L,
            writes: RegMask::A | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "sub a,l",
        },
        Opcode::SUB_A_N => OpMeta {
            encoded_bytes: 2,
            t_states: 7,
            reads: RegMask::A,
            writes: RegMask::A | RegMask::F,
            has_immediate: true,
            has_imm16: false,
            asm_template: "sub a,{n}",
        },
        Opcode::SBC_A_A => OpMeta {
            encoded_bytes: 1,
            t_states: 4,
            reads: RegMask::A | RegMask::A,
            writes: RegMask::A | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "sbc a,a",
        },
        Opcode::SBC_A_B => OpMeta {
            encoded_bytes: 1,
            t_states: 4,
            reads: RegMask::A | RegMask::B,
            writes: RegMask::A | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "sbc a,b",
        },
        Opcode::SBC_A_C => OpMeta {
            encoded_bytes: 1,
            t_states: 4,
            reads: RegMask::A | RegMask::C,
            writes: RegMask::A | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "sbc a,c",
        },
        Opcode::SBC_A_D => OpMeta {
            encoded_bytes: 1,
            t_states: 4,
            reads: RegMask::A | RegMask::D,
            writes: RegMask::A | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "sbc a,d",
        },
        Opcode::SBC_A_E => OpMeta {
            encoded_bytes: 1,
            t_states: 4,
            reads: RegMask::A | RegMask::E,
            writes: RegMask::A | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "sbc a,e",
        },
        Opcode::SBC_A_H => OpMeta {
            encoded_bytes: 1,
            t_states: 4,
            reads: RegMask::A | RegMask::H,
            writes: RegMask::A | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "sbc a,h",
        },
        Opcode::SBC_A_L => OpMeta {
            encoded_bytes: 1,
            t_states: 4,
            reads: RegMask::A | RegMask::L,
            writes: RegMask::A | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "sbc a,l",
        },
        Opcode::SBC_A_N => OpMeta {
            encoded_bytes: 2,
            t_states: 7,
            reads: RegMask::A,
            writes: RegMask::A | RegMask::F,
            has_immediate: true,
            has_imm16: false,
            asm_template: "sbc a,{n}",
        },
        Opcode::AND_A_A => OpMeta {
            encoded_bytes: 1,
            t_states: 4,
            reads: RegMask::A | RegMask::A,
            writes: RegMask::A | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "and a,a",
        },
        Opcode::AND_A_B => OpMeta {
            encoded_bytes: 1,
            t_states: 4,
            reads: RegMask::A | RegMask::B,
            writes: RegMask::A | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "and a,b",
        },
        Opcode::AND_A_C => OpMeta {
            encoded_bytes: 1,
            t_states: 4,
            reads: RegMask::A | RegMask::C,
            writes: RegMask::A | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "and a,c",
        },
        Opcode::AND_A_D => OpMeta {
            encoded_bytes: 1,
            t_states: 4,
            reads: RegMask::A | RegMask::D,
            writes: RegMask::A | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "and a,d",
        },
        Opcode::AND_A_E => OpMeta {
            encoded_bytes: 1,
            t_states: 4,
            reads: RegMask::A | RegMask::E,
            writes: RegMask::A | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "and a,e",
        },
        Opcode::AND_A_H => OpMeta {
            encoded_bytes: 1,
            t_states: 4,
            reads: RegMask::A | RegMask::H,
            writes: RegMask::A | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "and a,h",
        },
        Opcode::AND_A_L => OpMeta {
            encoded_bytes: 1,
            t_states: 4,
            reads: RegMask::A | RegMask::L,
            writes: RegMask::A | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "and a,l",
        },
        Opcode::AND_A_N => OpMeta {
            encoded_bytes: 2,
            t_states: 7,
            reads: RegMask::A,
            writes: RegMask::A | RegMask::F,
            has_immediate: true,
            has_imm16: false,
            asm_template: "and a,{n}",
        },
        Opcode::XOR_A_A => OpMeta {
            encoded_bytes: 1,
            t_states: 4,
            reads: RegMask::A | RegMask::A,
            writes: RegMask::A | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "xor a,a",
        },
        Opcode::XOR_A_B => OpMeta {
            encoded_bytes: 1,
            t_states: 4,
            reads: RegMask::A | RegMask::B,
            writes: RegMask::A | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "xor a,b",
        },
        Opcode::XOR_A_C => OpMeta {
            encoded_bytes: 1,
            t_states: 4,
            reads: RegMask::A | RegMask::C,
            writes: RegMask::A | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "xor a,c",
        },
        Opcode::XOR_A_D => OpMeta {
            encoded_bytes: 1,
            t_states: 4,
            reads: RegMask::A | RegMask::D,
            writes: RegMask::A | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "xor a,d",
        },
        Opcode::XOR_A_E => OpMeta {
            encoded_bytes: 1,
            t_states: 4,
            reads: RegMask::A | RegMask::E,
            writes: RegMask::A | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "xor a,e",
        },
        Opcode::XOR_A_H => OpMeta {
            encoded_bytes: 1,
            t_states: 4,
            reads: RegMask::A | RegMask::H,
            writes: RegMask::A | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "xor a,h",
        },
        Opcode::XOR_A_L => OpMeta {
            encoded_bytes: 1,
            t_states: 4,
            reads: RegMask::A | RegMask::L,
            writes: RegMask::A | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "xor a,l",
        },
        Opcode::XOR_A_N => OpMeta {
            encoded_bytes: 2,
            t_states: 7,
            reads: RegMask::A,
            writes: RegMask::A | RegMask::F,
            has_immediate: true,
            has_imm16: false,
            asm_template: "xor a,{n}",
        },
        Opcode::OR_A_A => OpMeta {
            encoded_bytes: 1,
            t_states: 4,
            reads: RegMask::A | RegMask::A,
            writes: RegMask::A | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "or a,a",
        },
        Opcode::OR_A_B => OpMeta {
            encoded_bytes: 1,
            t_states: 4,
            reads: RegMask::A | RegMask::B,
            writes: RegMask::A | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "or a,b",
        },
        Opcode::OR_A_C => OpMeta {
            encoded_bytes: 1,
            t_states: 4,
            reads: RegMask::A | RegMask::C,
            writes: RegMask::A | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "or a,c",
        },
        Opcode::OR_A_D => OpMeta {
            encoded_bytes: 1,
            t_states: 4,
            reads: RegMask::A | RegMask::D,
            writes: RegMask::A | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "or a,d",
        },
        Opcode::OR_A_E => OpMeta {
            encoded_bytes: 1,
            t_states: 4,
            reads: RegMask::A | RegMask::E,
            writes: RegMask::A | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "or a,e",
        },
        Opcode::OR_A_H => OpMeta {
            encoded_bytes: 1,
            t_states: 4,
            reads: RegMask::A | RegMask::H,
            writes: RegMask::A | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "or a,h",
        },
        Opcode::OR_A_L => OpMeta {
            encoded_bytes: 1,
            t_states: 4,
            reads: RegMask::A | RegMask::L,
            writes: RegMask::A | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "or a,l",
        },
        Opcode::OR_A_N => OpMeta {
            encoded_bytes: 2,
            t_states: 7,
            reads: RegMask::A,
            writes: RegMask::A | RegMask::F,
            has_immediate: true,
            has_imm16: false,
            asm_template: "or a,{n}",
        },
        Opcode::CP_A_A => OpMeta {
            encoded_bytes: 1,
            t_states: 4,
            reads: RegMask::A | RegMask::A,
            writes: RegMask::empty() | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "cp a,a",
        },
        Opcode::CP_A_B => OpMeta {
            encoded_bytes: 1,
            t_states: 4,
            reads: RegMask::A | RegMask::B,
            writes: RegMask::empty() | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "cp a,b",
        },
        Opcode::CP_A_C => OpMeta {
            encoded_bytes: 1,
            t_states: 4,
            reads: RegMask::A | RegMask::C,
            writes: RegMask::empty() | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "cp a,c",
        },
        Opcode::CP_A_D => OpMeta {
            encoded_bytes: 1,
            t_states: 4,
            reads: RegMask::A | RegMask::D,
            writes: RegMask::empty() | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "cp a,d",
        },
        Opcode::CP_A_E => OpMeta {
            encoded_bytes: 1,
            t_states: 4,
            reads: RegMask::A | RegMask::E,
            writes: RegMask::empty() | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "cp a,e",
        },
        Opcode::CP_A_H => OpMeta {
            encoded_bytes: 1,
            t_states: 4,
            reads: RegMask::A | RegMask::H,
            writes: RegMask::empty() | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "cp a,h",
        },
        Opcode::CP_A_L => OpMeta {
            encoded_bytes: 1,
            t_states: 4,
            reads: RegMask::A | RegMask::L,
            writes: RegMask::empty() | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "cp a,l",
        },
        Opcode::CP_A_N => OpMeta {
            encoded_bytes: 2,
            t_states: 7,
            reads: RegMask::A,
            writes: RegMask::empty() | RegMask::F,
            has_immediate: true,
            has_imm16: false,
            asm_template: "cp a,{n}",
        },
        Opcode::INC_A => OpMeta {
            encoded_bytes: 1,
            t_states: 4,
            reads: RegMask::A,
            writes: RegMask::A | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "inc a",
        },
        Opcode::INC_B => OpMeta {
            encoded_bytes: 1,
            t_states: 4,
            reads: RegMask::B,
            writes: RegMask::B | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "inc b",
        },
        Opcode::INC_C => OpMeta {
            encoded_bytes: 1,
            t_states: 4,
            reads: RegMask::C,
            writes: RegMask::C | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "inc c",
        },
        Opcode::INC_D => OpMeta {
            encoded_bytes: 1,
            t_states: 4,
            reads: RegMask::D,
            writes: RegMask::D | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "inc d",
        },
        Opcode::INC_E => OpMeta {
            encoded_bytes: 1,
            t_states: 4,
            reads: RegMask::E,
            writes: RegMask::E | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "inc e",
        },
        Opcode::INC_H => OpMeta {
            encoded_bytes: 1,
            t_states: 4,
            reads: RegMask::H,
            writes: RegMask::H | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "inc h",
        },
        Opcode::INC_L => OpMeta {
            encoded_bytes: 1,
            t_states: 4,
            reads: RegMask::L,
            writes: RegMask::L | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "inc l",
        },
        Opcode::DEC_A => OpMeta {
            encoded_bytes: 1,
            t_states: 4,
            reads: RegMask::A,
            writes: RegMask::A | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "dec a",
        },
        Opcode::DEC_B => OpMeta {
            encoded_bytes: 1,
            t_states: 4,
            reads: RegMask::B,
            writes: RegMask::B | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "dec b",
        },
        Opcode::DEC_C => OpMeta {
            encoded_bytes: 1,
            t_states: 4,
            reads: RegMask::C,
            writes: RegMask::C | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "dec c",
        },
        Opcode::DEC_D => OpMeta {
            encoded_bytes: 1,
            t_states: 4,
            reads: RegMask::D,
            writes: RegMask::D | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "dec d",
        },
        Opcode::DEC_E => OpMeta {
            encoded_bytes: 1,
            t_states: 4,
            reads: RegMask::E,
            writes: RegMask::E | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "dec e",
        },
        Opcode::DEC_H => OpMeta {
            encoded_bytes: 1,
            t_states: 4,
            reads: RegMask::H,
            writes: RegMask::H | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "dec h",
        },
        Opcode::DEC_L => OpMeta {
            encoded_bytes: 1,
            t_states: 4,
            reads: RegMask::L,
            writes: RegMask::L | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "dec l",
        },
        Opcode::RLCA => OpMeta {
            encoded_bytes: 1,
            t_states: 4,
            reads: RegMask::A,
            writes: RegMask::A | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "rlca",
        },
        Opcode::RRCA => OpMeta {
            encoded_bytes: 1,
            t_states: 4,
            reads: RegMask::A,
            writes: RegMask::A | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "rrca",
        },
        Opcode::RLA => OpMeta {
            encoded_bytes: 1,
            t_states: 4,
            reads: RegMask::A | RegMask::F,
            writes: RegMask::A | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "rla",
        },
        Opcode::RRA => OpMeta {
            encoded_bytes: 1,
            t_states: 4,
            reads: RegMask::A | RegMask::F,
            writes: RegMask::A | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "rra",
        },
        Opcode::DAA => OpMeta {
            encoded_bytes: 1,
            t_states: 4,
            reads: RegMask::A | RegMask::F,
            writes: RegMask::A | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "daa",
        },
        Opcode::CPL => OpMeta {
            encoded_bytes: 1,
            t_states: 4,
            reads: RegMask::A,
            writes: RegMask::A | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "cpl",
        },
        Opcode::SCF => OpMeta {
            encoded_bytes: 1,
            t_states: 4,
            reads: RegMask::A | RegMask::F,
            writes: RegMask::empty() | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "scf",
        },
        Opcode::CCF => OpMeta {
            encoded_bytes: 1,
            t_states: 4,
            reads: RegMask::A | RegMask::F,
            writes: RegMask::empty() | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "ccf",
        },
        Opcode::NEG => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::A,
            writes: RegMask::A | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "neg",
        },
        Opcode::NOP => OpMeta {
            encoded_bytes: 1,
            t_states: 4,
            reads: RegMask::empty(),
            writes: RegMask::empty(),
            has_immediate: false,
            has_imm16: false,
            asm_template: "nop",
        },
        Opcode::RLC_A => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::A | RegMask::F,
            writes: RegMask::A | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "rlc a",
        },
        Opcode::RLC_B => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::B | RegMask::F,
            writes: RegMask::B | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "rlc b",
        },
        Opcode::RLC_C => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::C | RegMask::F,
            writes: RegMask::C | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "rlc c",
        },
        Opcode::RLC_D => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::D | RegMask::F,
            writes: RegMask::D | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "rlc d",
        },
        Opcode::RLC_E => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::E | RegMask::F,
            writes: RegMask::E | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "rlc e",
        },
        Opcode::RLC_H => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::H | RegMask::F,
            writes: RegMask::H | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "rlc h",
        },
        Opcode::RLC_L => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::L | RegMask::F,
            writes: RegMask::L | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "rlc l",
        },
        Opcode::RRC_A => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::A | RegMask::F,
            writes: RegMask::A | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "rrc a",
        },
        Opcode::RRC_B => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::B | RegMask::F,
            writes: RegMask::B | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "rrc b",
        },
        Opcode::RRC_C => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::C | RegMask::F,
            writes: RegMask::C | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "rrc c",
        },
        Opcode::RRC_D => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::D | RegMask::F,
            writes: RegMask::D | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "rrc d",
        },
        Opcode::RRC_E => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::E | RegMask::F,
            writes: RegMask::E | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "rrc e",
        },
        Opcode::RRC_H => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::H | RegMask::F,
            writes: RegMask::H | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "rrc h",
        },
        Opcode::RRC_L => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::L | RegMask::F,
            writes: RegMask::L | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "rrc l",
        },
        Opcode::RL_A => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::A | RegMask::F,
            writes: RegMask::A | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "rl a",
        },
        Opcode::RL_B => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::B | RegMask::F,
            writes: RegMask::B | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "rl b",
        },
        Opcode::RL_C => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::C | RegMask::F,
            writes: RegMask::C | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "rl c",
        },
        Opcode::RL_D => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::D | RegMask::F,
            writes: RegMask::D | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "rl d",
        },
        Opcode::RL_E => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::E | RegMask::F,
            writes: RegMask::E | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "rl e",
        },
        Opcode::RL_H => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::H | RegMask::F,
            writes: RegMask::H | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "rl h",
        },
        Opcode::RL_L => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::L | RegMask::F,
            writes: RegMask::L | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "rl l",
        },
        Opcode::RR_A => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::A | RegMask::F,
            writes: RegMask::A | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "rr a",
        },
        Opcode::RR_B => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::B | RegMask::F,
            writes: RegMask::B | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "rr b",
        },
        Opcode::RR_C => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::C | RegMask::F,
            writes: RegMask::C | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "rr c",
        },
        Opcode::RR_D => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::D | RegMask::F,
            writes: RegMask::D | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "rr d",
        },
        Opcode::RR_E => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::E | RegMask::F,
            writes: RegMask::E | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "rr e",
        },
        Opcode::RR_H => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::H | RegMask::F,
            writes: RegMask::H | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "rr h",
        },
        Opcode::RR_L => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::L | RegMask::F,
            writes: RegMask::L | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "rr l",
        },
        Opcode::SLA_A => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::A | RegMask::F,
            writes: RegMask::A | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "sla a",
        },
        Opcode::SLA_B => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::B | RegMask::F,
            writes: RegMask::B | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "sla b",
        },
        Opcode::SLA_C => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::C | RegMask::F,
            writes: RegMask::C | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "sla c",
        },
        Opcode::SLA_D => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::D | RegMask::F,
            writes: RegMask::D | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "sla d",
        },
        Opcode::SLA_E => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::E | RegMask::F,
            writes: RegMask::E | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "sla e",
        },
        Opcode::SLA_H => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::H | RegMask::F,
            writes: RegMask::H | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "sla h",
        },
        Opcode::SLA_L => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::L | RegMask::F,
            writes: RegMask::L | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "sla l",
        },
        Opcode::SRA_A => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::A | RegMask::F,
            writes: RegMask::A | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "sra a",
        },
        Opcode::SRA_B => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::B | RegMask::F,
            writes: RegMask::B | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "sra b",
        },
        Opcode::SRA_C => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::C | RegMask::F,
            writes: RegMask::C | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "sra c",
        },
        Opcode::SRA_D => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::D | RegMask::F,
            writes: RegMask::D | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "sra d",
        },
        Opcode::SRA_E => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::E | RegMask::F,
            writes: RegMask::E | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "sra e",
        },
        Opcode::SRA_H => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::H | RegMask::F,
            writes: RegMask::H | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "sra h",
        },
        Opcode::SRA_L => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::L | RegMask::F,
            writes: RegMask::L | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "sra l",
        },
        Opcode::SLL_A => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::A | RegMask::F,
            writes: RegMask::A | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "sll a",
        },
        Opcode::SLL_B => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::B | RegMask::F,
            writes: RegMask::B | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "sll b",
        },
        Opcode::SLL_C => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::C | RegMask::F,
            writes: RegMask::C | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "sll c",
        },
        Opcode::SLL_D => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::D | RegMask::F,
            writes: RegMask::D | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "sll d",
        },
        Opcode::SLL_E => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::E | RegMask::F,
            writes: RegMask::E | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "sll e",
        },
        Opcode::SLL_H => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::H | RegMask::F,
            writes: RegMask::H | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "sll h",
        },
        Opcode::SLL_L => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::L | RegMask::F,
            writes: RegMask::L | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "sll l",
        },
        Opcode::SRL_A => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::A | RegMask::F,
            writes: RegMask::A | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "srl a",
        },
        Opcode::SRL_B => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::B | RegMask::F,
            writes: RegMask::B | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "srl b",
        },
        Opcode::SRL_C => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::C | RegMask::F,
            writes: RegMask::C | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "srl c",
        },
        Opcode::SRL_D => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::D | RegMask::F,
            writes: RegMask::D | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "srl d",
        },
        Opcode::SRL_E => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::E | RegMask::F,
            writes: RegMask::E | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "srl e",
        },
        Opcode::SRL_H => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::H | RegMask::F,
            writes: RegMask::H | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "srl h",
        },
        Opcode::SRL_L => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::L | RegMask::F,
            writes: RegMask::L | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "srl l",
        },
        Opcode::BIT_0_A => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::A | RegMask::F,
            writes: RegMask::empty() | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "bit 0,a",
        },
        Opcode::BIT_0_B => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::B | RegMask::F,
            writes: RegMask::empty() | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "bit 0,b",
        },
        Opcode::BIT_0_C => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::C | RegMask::F,
            writes: RegMask::empty() | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "bit 0,c",
        },
        Opcode::BIT_0_D => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::D | RegMask::F,
            writes: RegMask::empty() | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "bit 0,d",
        },
        Opcode::BIT_0_E => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::E | RegMask::F,
            writes: RegMask::empty() | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "bit 0,e",
        },
        Opcode::BIT_0_H => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::H | RegMask::F,
            writes: RegMask::empty() | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "bit 0,h",
        },
        Opcode::BIT_0_L => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::L | RegMask::F,
            writes: RegMask::empty() | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "bit 0,l",
        },
        Opcode::BIT_1_A => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::A | RegMask::F,
            writes: RegMask::empty() | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "bit 1,a",
        },
        Opcode::BIT_1_B => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::B | RegMask::F,
            writes: RegMask::empty() | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "bit 1,b",
        },
        Opcode::BIT_1_C => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::C | RegMask::F,
            writes: RegMask::empty() | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "bit 1,c",
        },
        Opcode::BIT_1_D => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::D | RegMask::F,
            writes: RegMask::empty() | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "bit 1,d",
        },
        Opcode::BIT_1_E => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::E | RegMask::F,
            writes: RegMask::empty() | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "bit 1,e",
        },
        Opcode::BIT_1_H => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::H | RegMask::F,
            writes: RegMask::empty() | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "bit 1,h",
        },
        Opcode::BIT_1_L => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::L | RegMask::F,
            writes: RegMask::empty() | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "bit 1,l",
        },
        Opcode::BIT_2_A => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::A | RegMask::F,
            writes: RegMask::empty() | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "bit 2,a",
        },
        Opcode::BIT_2_B => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::B | RegMask::F,
            writes: RegMask::empty() | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "bit 2,b",
        },
        Opcode::BIT_2_C => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::C | RegMask::F,
            writes: RegMask::empty() | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "bit 2,c",
        },
        Opcode::BIT_2_D => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::D | RegMask::F,
            writes: RegMask::empty() | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "bit 2,d",
        },
        Opcode::BIT_2_E => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::E | RegMask::F,
            writes: RegMask::empty() | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "bit 2,e",
        },
        Opcode::BIT_2_H => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::H | RegMask::F,
            writes: RegMask::empty() | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "bit 2,h",
        },
        Opcode::BIT_2_L => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::L | RegMask::F,
            writes: RegMask::empty() | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "bit 2,l",
        },
        Opcode::BIT_3_A => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::A | RegMask::F,
            writes: RegMask::empty() | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "bit 3,a",
        },
        Opcode::BIT_3_B => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::B | RegMask::F,
            writes: RegMask::empty() | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "bit 3,b",
        },
        Opcode::BIT_3_C => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::C | RegMask::F,
            writes: RegMask::empty() | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "bit 3,c",
        },
        Opcode::BIT_3_D => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::D | RegMask::F,
            writes: RegMask::empty() | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "bit 3,d",
        },
        Opcode::BIT_3_E => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::E | RegMask::F,
            writes: RegMask::empty() | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "bit 3,e",
        },
        Opcode::BIT_3_H => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::H | RegMask::F,
            writes: RegMask::empty() | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "bit 3,h",
        },
        Opcode::BIT_3_L => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::L | RegMask::F,
            writes: RegMask::empty() | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "bit 3,l",
        },
        Opcode::BIT_4_A => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::A | RegMask::F,
            writes: RegMask::empty() | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "bit 4,a",
        },
        Opcode::BIT_4_B => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::B | RegMask::F,
            writes: RegMask::empty() | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "bit 4,b",
        },
        Opcode::BIT_4_C => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::C | RegMask::F,
            writes: RegMask::empty() | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "bit 4,c",
        },
        Opcode::BIT_4_D => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::D | RegMask::F,
            writes: RegMask::empty() | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "bit 4,d",
        },
        Opcode::BIT_4_E => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::E | RegMask::F,
            writes: RegMask::empty() | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "bit 4,e",
        },
        Opcode::BIT_4_H => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::H | RegMask::F,
            writes: RegMask::empty() | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "bit 4,h",
        },
        Opcode::BIT_4_L => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::L | RegMask::F,
            writes: RegMask::empty() | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "bit 4,l",
        },
        Opcode::BIT_5_A => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::A | RegMask::F,
            writes: RegMask::empty() | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "bit 5,a",
        },
        Opcode::BIT_5_B => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::B | RegMask::F,
            writes: RegMask::empty() | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "bit 5,b",
        },
        Opcode::BIT_5_C => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::C | RegMask::F,
            writes: RegMask::empty() | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "bit 5,c",
        },
        Opcode::BIT_5_D => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::D | RegMask::F,
            writes: RegMask::empty() | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "bit 5,d",
        },
        Opcode::BIT_5_E => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::E | RegMask::F,
            writes: RegMask::empty() | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "bit 5,e",
        },
        Opcode::BIT_5_H => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::H | RegMask::F,
            writes: RegMask::empty() | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "bit 5,h",
        },
        Opcode::BIT_5_L => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::L | RegMask::F,
            writes: RegMask::empty() | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "bit 5,l",
        },
        Opcode::BIT_6_A => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::A | RegMask::F,
            writes: RegMask::empty() | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "bit 6,a",
        },
        Opcode::BIT_6_B => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::B | RegMask::F,
            writes: RegMask::empty() | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "bit 6,b",
        },
        Opcode::BIT_6_C => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::C | RegMask::F,
            writes: RegMask::empty() | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "bit 6,c",
        },
        Opcode::BIT_6_D => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::D | RegMask::F,
            writes: RegMask::empty() | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "bit 6,d",
        },
        Opcode::BIT_6_E => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::E | RegMask::F,
            writes: RegMask::empty() | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "bit 6,e",
        },
        Opcode::BIT_6_H => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::H | RegMask::F,
            writes: RegMask::empty() | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "bit 6,h",
        },
        Opcode::BIT_6_L => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::L | RegMask::F,
            writes: RegMask::empty() | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "bit 6,l",
        },
        Opcode::BIT_7_A => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::A | RegMask::F,
            writes: RegMask::empty() | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "bit 7,a",
        },
        Opcode::BIT_7_B => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::B | RegMask::F,
            writes: RegMask::empty() | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "bit 7,b",
        },
        Opcode::BIT_7_C => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::C | RegMask::F,
            writes: RegMask::empty() | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "bit 7,c",
        },
        Opcode::BIT_7_D => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::D | RegMask::F,
            writes: RegMask::empty() | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "bit 7,d",
        },
        Opcode::BIT_7_E => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::E | RegMask::F,
            writes: RegMask::empty() | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "bit 7,e",
        },
        Opcode::BIT_7_H => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::H | RegMask::F,
            writes: RegMask::empty() | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "bit 7,h",
        },
        Opcode::BIT_7_L => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::L | RegMask::F,
            writes: RegMask::empty() | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "bit 7,l",
        },
        Opcode::RES_0_A => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::A,
            writes: RegMask::A,
            has_immediate: false,
            has_imm16: false,
            asm_template: "res 0,a",
        },
        Opcode::RES_0_B => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::B,
            writes: RegMask::B,
            has_immediate: false,
            has_imm16: false,
            asm_template: "res 0,b",
        },
        Opcode::RES_0_C => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::C,
            writes: RegMask::C,
            has_immediate: false,
            has_imm16: false,
            asm_template: "res 0,c",
        },
        Opcode::RES_0_D => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::D,
            writes: RegMask::D,
            has_immediate: false,
            has_imm16: false,
            asm_template: "res 0,d",
        },
        Opcode::RES_0_E => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::E,
            writes: RegMask::E,
            has_immediate: false,
            has_imm16: false,
            asm_template: "res 0,e",
        },
        Opcode::RES_0_H => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::H,
            writes: RegMask::H,
            has_immediate: false,
            has_imm16: false,
            asm_template: "res 0,h",
        },
        Opcode::RES_0_L => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::L,
            writes: RegMask::L,
            has_immediate: false,
            has_imm16: false,
            asm_template: "res 0,l",
        },
        Opcode::RES_1_A => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::A,
            writes: RegMask::A,
            has_immediate: false,
            has_imm16: false,
            asm_template: "res 1,a",
        },
        Opcode::RES_1_B => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::B,
            writes: RegMask::B,
            has_immediate: false,
            has_imm16: false,
            asm_template: "res 1,b",
        },
        Opcode::RES_1_C => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::C,
            writes: RegMask::C,
            has_immediate: false,
            has_imm16: false,
            asm_template: "res 1,c",
        },
        Opcode::RES_1_D => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::D,
            writes: RegMask::D,
            has_immediate: false,
            has_imm16: false,
            asm_template: "res 1,d",
        },
        Opcode::RES_1_E => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::E,
            writes: RegMask::E,
            has_immediate: false,
            has_imm16: false,
            asm_template: "res 1,e",
        },
        Opcode::RES_1_H => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::H,
            writes: RegMask::H,
            has_immediate: false,
            has_imm16: false,
            asm_template: "res 1,h",
        },
        Opcode::RES_1_L => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::L,
            writes: RegMask::L,
            has_immediate: false,
            has_imm16: false,
            asm_template: "res 1,l",
        },
        Opcode::RES_2_A => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::A,
            writes: RegMask::A,
            has_immediate: false,
            has_imm16: false,
            asm_template: "res 2,a",
        },
        Opcode::RES_2_B => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::B,
            writes: RegMask::B,
            has_immediate: false,
            has_imm16: false,
            asm_template: "res 2,b",
        },
        Opcode::RES_2_C => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::C,
            writes: RegMask::C,
            has_immediate: false,
            has_imm16: false,
            asm_template: "res 2,c",
        },
        Opcode::RES_2_D => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::D,
            writes: RegMask::D,
            has_immediate: false,
            has_imm16: false,
            asm_template: "res 2,d",
        },
        Opcode::RES_2_E => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::E,
            writes: RegMask::E,
            has_immediate: false,
            has_imm16: false,
            asm_template: "res 2,e",
        },
        Opcode::RES_2_H => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::H,
            writes: RegMask::H,
            has_immediate: false,
            has_imm16: false,
            asm_template: "res 2,h",
        },
        Opcode::RES_2_L => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::L,
            writes: RegMask::L,
            has_immediate: false,
            has_imm16: false,
            asm_template: "res 2,l",
        },
        Opcode::RES_3_A => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::A,
            writes: RegMask::A,
            has_immediate: false,
            has_imm16: false,
            asm_template: "res 3,a",
        },
        Opcode::RES_3_B => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::B,
            writes: RegMask::B,
            has_immediate: false,
            has_imm16: false,
            asm_template: "res 3,b",
        },
        Opcode::RES_3_C => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::C,
            writes: RegMask::C,
            has_immediate: false,
            has_imm16: false,
            asm_template: "res 3,c",
        },
        Opcode::RES_3_D => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::D,
            writes: RegMask::D,
            has_immediate: false,
            has_imm16: false,
            asm_template: "res 3,d",
        },
        Opcode::RES_3_E => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::E,
            writes: RegMask::E,
            has_immediate: false,
            has_imm16: false,
            asm_template: "res 3,e",
        },
        Opcode::RES_3_H => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::H,
            writes: RegMask::H,
            has_immediate: false,
            has_imm16: false,
            asm_template: "res 3,h",
        },
        Opcode::RES_3_L => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::L,
            writes: RegMask::L,
            has_immediate: false,
            has_imm16: false,
            asm_template: "res 3,l",
        },
        Opcode::RES_4_A => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::A,
            writes: RegMask::A,
            has_immediate: false,
            has_imm16: false,
            asm_template: "res 4,a",
        },
        Opcode::RES_4_B => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::B,
            writes: RegMask::B,
            has_immediate: false,
            has_imm16: false,
            asm_template: "res 4,b",
        },
        Opcode::RES_4_C => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::C,
            writes: RegMask::C,
            has_immediate: false,
            has_imm16: false,
            asm_template: "res 4,c",
        },
        Opcode::RES_4_D => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::D,
            writes: RegMask::D,
            has_immediate: false,
            has_imm16: false,
            asm_template: "res 4,d",
        },
        Opcode::RES_4_E => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::E,
            writes: RegMask::E,
            has_immediate: false,
            has_imm16: false,
            asm_template: "res 4,e",
        },
        Opcode::RES_4_H => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::H,
            writes: RegMask::H,
            has_immediate: false,
            has_imm16: false,
            asm_template: "res 4,h",
        },
        Opcode::RES_4_L => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::L,
            writes: RegMask::L,
            has_immediate: false,
            has_imm16: false,
            asm_template: "res 4,l",
        },
        Opcode::RES_5_A => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::A,
            writes: RegMask::A,
            has_immediate: false,
            has_imm16: false,
            asm_template: "res 5,a",
        },
        Opcode::RES_5_B => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::B,
            writes: RegMask::B,
            has_immediate: false,
            has_imm16: false,
            asm_template: "res 5,b",
        },
        Opcode::RES_5_C => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::C,
            writes: RegMask::C,
            has_immediate: false,
            has_imm16: false,
            asm_template: "res 5,c",
        },
        Opcode::RES_5_D => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::D,
            writes: RegMask::D,
            has_immediate: false,
            has_imm16: false,
            asm_template: "res 5,d",
        },
        Opcode::RES_5_E => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::E,
            writes: RegMask::E,
            has_immediate: false,
            has_imm16: false,
            asm_template: "res 5,e",
        },
        Opcode::RES_5_H => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::H,
            writes: RegMask::H,
            has_immediate: false,
            has_imm16: false,
            asm_template: "res 5,h",
        },
        Opcode::RES_5_L => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::L,
            writes: RegMask::L,
            has_immediate: false,
            has_imm16: false,
            asm_template: "res 5,l",
        },
        Opcode::RES_6_A => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::A,
            writes: RegMask::A,
            has_immediate: false,
            has_imm16: false,
            asm_template: "res 6,a",
        },
        Opcode::RES_6_B => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::B,
            writes: RegMask::B,
            has_immediate: false,
            has_imm16: false,
            asm_template: "res 6,b",
        },
        Opcode::RES_6_C => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::C,
            writes: RegMask::C,
            has_immediate: false,
            has_imm16: false,
            asm_template: "res 6,c",
        },
        Opcode::RES_6_D => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::D,
            writes: RegMask::D,
            has_immediate: false,
            has_imm16: false,
            asm_template: "res 6,d",
        },
        Opcode::RES_6_E => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::E,
            writes: RegMask::E,
            has_immediate: false,
            has_imm16: false,
            asm_template: "res 6,e",
        },
        Opcode::RES_6_H => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::H,
            writes: RegMask::H,
            has_immediate: false,
            has_imm16: false,
            asm_template: "res 6,h",
        },
        Opcode::RES_6_L => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::L,
            writes: RegMask::L,
            has_immediate: false,
            has_imm16: false,
            asm_template: "res 6,l",
        },
        Opcode::RES_7_A => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::A,
            writes: RegMask::A,
            has_immediate: false,
            has_imm16: false,
            asm_template: "res 7,a",
        },
        Opcode::RES_7_B => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::B,
            writes: RegMask::B,
            has_immediate: false,
            has_imm16: false,
            asm_template: "res 7,b",
        },
        Opcode::RES_7_C => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::C,
            writes: RegMask::C,
            has_immediate: false,
            has_imm16: false,
            asm_template: "res 7,c",
        },
        Opcode::RES_7_D => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::D,
            writes: RegMask::D,
            has_immediate: false,
            has_imm16: false,
            asm_template: "res 7,d",
        },
        Opcode::RES_7_E => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::E,
            writes: RegMask::E,
            has_immediate: false,
            has_imm16: false,
            asm_template: "res 7,e",
        },
        Opcode::RES_7_H => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::H,
            writes: RegMask::H,
            has_immediate: false,
            has_imm16: false,
            asm_template: "res 7,h",
        },
        Opcode::RES_7_L => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::L,
            writes: RegMask::L,
            has_immediate: false,
            has_imm16: false,
            asm_template: "res 7,l",
        },
        Opcode::SET_0_A => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::A,
            writes: RegMask::A,
            has_immediate: false,
            has_imm16: false,
            asm_template: "set 0,a",
        },
        Opcode::SET_0_B => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::B,
            writes: RegMask::B,
            has_immediate: false,
            has_imm16: false,
            asm_template: "set 0,b",
        },
        Opcode::SET_0_C => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::C,
            writes: RegMask::C,
            has_immediate: false,
            has_imm16: false,
            asm_template: "set 0,c",
        },
        Opcode::SET_0_D => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::D,
            writes: RegMask::D,
            has_immediate: false,
            has_imm16: false,
            asm_template: "set 0,d",
        },
        Opcode::SET_0_E => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::E,
            writes: RegMask::E,
            has_immediate: false,
            has_imm16: false,
            asm_template: "set 0,e",
        },
        Opcode::SET_0_H => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::H,
            writes: RegMask::H,
            has_immediate: false,
            has_imm16: false,
            asm_template: "set 0,h",
        },
        Opcode::SET_0_L => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::L,
            writes: RegMask::L,
            has_immediate: false,
            has_imm16: false,
            asm_template: "set 0,l",
        },
        Opcode::SET_1_A => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::A,
            writes: RegMask::A,
            has_immediate: false,
            has_imm16: false,
            asm_template: "set 1,a",
        },
        Opcode::SET_1_B => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::B,
            writes: RegMask::B,
            has_immediate: false,
            has_imm16: false,
            asm_template: "set 1,b",
        },
        Opcode::SET_1_C => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::C,
            writes: RegMask::C,
            has_immediate: false,
            has_imm16: false,
            asm_template: "set 1,c",
        },
        Opcode::SET_1_D => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::D,
            writes: RegMask::D,
            has_immediate: false,
            has_imm16: false,
            asm_template: "set 1,d",
        },
        Opcode::SET_1_E => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::E,
            writes: RegMask::E,
            has_immediate: false,
            has_imm16: false,
            asm_template: "set 1,e",
        },
        Opcode::SET_1_H => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::H,
            writes: RegMask::H,
            has_immediate: false,
            has_imm16: false,
            asm_template: "set 1,h",
        },
        Opcode::SET_1_L => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::L,
            writes: RegMask::L,
            has_immediate: false,
            has_imm16: false,
            asm_template: "set 1,l",
        },
        Opcode::SET_2_A => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::A,
            writes: RegMask::A,
            has_immediate: false,
            has_imm16: false,
            asm_template: "set 2,a",
        },
        Opcode::SET_2_B => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::B,
            writes: RegMask::B,
            has_immediate: false,
            has_imm16: false,
            asm_template: "set 2,b",
        },
        Opcode::SET_2_C => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::C,
            writes: RegMask::C,
            has_immediate: false,
            has_imm16: false,
            asm_template: "set 2,c",
        },
        Opcode::SET_2_D => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::D,
            writes: RegMask::D,
            has_immediate: false,
            has_imm16: false,
            asm_template: "set 2,d",
        },
        Opcode::SET_2_E => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::E,
            writes: RegMask::E,
            has_immediate: false,
            has_imm16: false,
            asm_template: "set 2,e",
        },
        Opcode::SET_2_H => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::H,
            writes: RegMask::H,
            has_immediate: false,
            has_imm16: false,
            asm_template: "set 2,h",
        },
        Opcode::SET_2_L => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::L,
            writes: RegMask::L,
            has_immediate: false,
            has_imm16: false,
            asm_template: "set 2,l",
        },
        Opcode::SET_3_A => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::A,
            writes: RegMask::A,
            has_immediate: false,
            has_imm16: false,
            asm_template: "set 3,a",
        },
        Opcode::SET_3_B => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::B,
            writes: RegMask::B,
            has_immediate: false,
            has_imm16: false,
            asm_template: "set 3,b",
        },
        Opcode::SET_3_C => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::C,
            writes: RegMask::C,
            has_immediate: false,
            has_imm16: false,
            asm_template: "set 3,c",
        },
        Opcode::SET_3_D => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::D,
            writes: RegMask::D,
            has_immediate: false,
            has_imm16: false,
            asm_template: "set 3,d",
        },
        Opcode::SET_3_E => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::E,
            writes: RegMask::E,
            has_immediate: false,
            has_imm16: false,
            asm_template: "set 3,e",
        },
        Opcode::SET_3_H => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::H,
            writes: RegMask::H,
            has_immediate: false,
            has_imm16: false,
            asm_template: "set 3,h",
        },
        Opcode::SET_3_L => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::L,
            writes: RegMask::L,
            has_immediate: false,
            has_imm16: false,
            asm_template: "set 3,l",
        },
        Opcode::SET_4_A => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::A,
            writes: RegMask::A,
            has_immediate: false,
            has_imm16: false,
            asm_template: "set 4,a",
        },
        Opcode::SET_4_B => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::B,
            writes: RegMask::B,
            has_immediate: false,
            has_imm16: false,
            asm_template: "set 4,b",
        },
        Opcode::SET_4_C => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::C,
            writes: RegMask::C,
            has_immediate: false,
            has_imm16: false,
            asm_template: "set 4,c",
        },
        Opcode::SET_4_D => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::D,
            writes: RegMask::D,
            has_immediate: false,
            has_imm16: false,
            asm_template: "set 4,d",
        },
        Opcode::SET_4_E => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::E,
            writes: RegMask::E,
            has_immediate: false,
            has_imm16: false,
            asm_template: "set 4,e",
        },
        Opcode::SET_4_H => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::H,
            writes: RegMask::H,
            has_immediate: false,
            has_imm16: false,
            asm_template: "set 4,h",
        },
        Opcode::SET_4_L => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::L,
            writes: RegMask::L,
            has_immediate: false,
            has_imm16: false,
            asm_template: "set 4,l",
        },
        Opcode::SET_5_A => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::A,
            writes: RegMask::A,
            has_immediate: false,
            has_imm16: false,
            asm_template: "set 5,a",
        },
        Opcode::SET_5_B => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::B,
            writes: RegMask::B,
            has_immediate: false,
            has_imm16: false,
            asm_template: "set 5,b",
        },
        Opcode::SET_5_C => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::C,
            writes: RegMask::C,
            has_immediate: false,
            has_imm16: false,
            asm_template: "set 5,c",
        },
        Opcode::SET_5_D => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::D,
            writes: RegMask::D,
            has_immediate: false,
            has_imm16: false,
            asm_template: "set 5,d",
        },
        Opcode::SET_5_E => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::E,
            writes: RegMask::E,
            has_immediate: false,
            has_imm16: false,
            asm_template: "set 5,e",
        },
        Opcode::SET_5_H => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::H,
            writes: RegMask::H,
            has_immediate: false,
            has_imm16: false,
            asm_template: "set 5,h",
        },
        Opcode::SET_5_L => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::L,
            writes: RegMask::L,
            has_immediate: false,
            has_imm16: false,
            asm_template: "set 5,l",
        },
        Opcode::SET_6_A => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::A,
            writes: RegMask::A,
            has_immediate: false,
            has_imm16: false,
            asm_template: "set 6,a",
        },
        Opcode::SET_6_B => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::B,
            writes: RegMask::B,
            has_immediate: false,
            has_imm16: false,
            asm_template: "set 6,b",
        },
        Opcode::SET_6_C => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::C,
            writes: RegMask::C,
            has_immediate: false,
            has_imm16: false,
            asm_template: "set 6,c",
        },
        Opcode::SET_6_D => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::D,
            writes: RegMask::D,
            has_immediate: false,
            has_imm16: false,
            asm_template: "set 6,d",
        },
        Opcode::SET_6_E => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::E,
            writes: RegMask::E,
            has_immediate: false,
            has_imm16: false,
            asm_template: "set 6,e",
        },
        Opcode::SET_6_H => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::H,
            writes: RegMask::H,
            has_immediate: false,
            has_imm16: false,
            asm_template: "set 6,h",
        },
        Opcode::SET_6_L => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::L,
            writes: RegMask::L,
            has_immediate: false,
            has_imm16: false,
            asm_template: "set 6,l",
        },
        Opcode::SET_7_A => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::A,
            writes: RegMask::A,
            has_immediate: false,
            has_imm16: false,
            asm_template: "set 7,a",
        },
        Opcode::SET_7_B => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::B,
            writes: RegMask::B,
            has_immediate: false,
            has_imm16: false,
            asm_template: "set 7,b",
        },
        Opcode::SET_7_C => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::C,
            writes: RegMask::C,
            has_immediate: false,
            has_imm16: false,
            asm_template: "set 7,c",
        },
        Opcode::SET_7_D => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::D,
            writes: RegMask::D,
            has_immediate: false,
            has_imm16: false,
            asm_template: "set 7,d",
        },
        Opcode::SET_7_E => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::E,
            writes: RegMask::E,
            has_immediate: false,
            has_imm16: false,
            asm_template: "set 7,e",
        },
        Opcode::SET_7_H => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::H,
            writes: RegMask::H,
            has_immediate: false,
            has_imm16: false,
            asm_template: "set 7,h",
        },
        Opcode::SET_7_L => OpMeta {
            encoded_bytes: 2,
            t_states: 8,
            reads: RegMask::L,
            writes: RegMask::L,
            has_immediate: false,
            has_imm16: false,
            asm_template: "set 7,l",
        },
        Opcode::INC_BC => OpMeta {
            encoded_bytes: 1,
            t_states: 6,
            reads: RegMask::empty() | RegMask::BC,
            writes: RegMask::empty() | RegMask::BC,
            has_immediate: false,
            has_imm16: false,
            asm_template: "inc bc",
        },
        Opcode::INC_DE => OpMeta {
            encoded_bytes: 1,
            t_states: 6,
            reads: RegMask::empty() | RegMask::DE,
            writes: RegMask::empty() | RegMask::DE,
            has_immediate: false,
            has_imm16: false,
            asm_template: "inc de",
        },
        Opcode::INC_HL => OpMeta {
            encoded_bytes: 1,
            t_states: 6,
            reads: RegMask::empty() | RegMask::HL,
            writes: RegMask::empty() | RegMask::HL,
            has_immediate: false,
            has_imm16: false,
            asm_template: "inc hl",
        },
        Opcode::INC_SP => OpMeta {
            encoded_bytes: 1,
            t_states: 6,
            reads: RegMask::empty() | RegMask::SP,
            writes: RegMask::empty() | RegMask::SP,
            has_immediate: false,
            has_imm16: false,
            asm_template: "inc sp",
        },
        Opcode::DEC_BC => OpMeta {
            encoded_bytes: 1,
            t_states: 6,
            reads: RegMask::empty() | RegMask::BC,
            writes: RegMask::empty() | RegMask::BC,
            has_immediate: false,
            has_imm16: false,
            asm_template: "dec bc",
        },
        Opcode::DEC_DE => OpMeta {
            encoded_bytes: 1,
            t_states: 6,
            reads: RegMask::empty() | RegMask::DE,
            writes: RegMask::empty() | RegMask::DE,
            has_immediate: false,
            has_imm16: false,
            asm_template: "dec de",
        },
        Opcode::DEC_HL => OpMeta {
            encoded_bytes: 1,
            t_states: 6,
            reads: RegMask::empty() | RegMask::HL,
            writes: RegMask::empty() | RegMask::HL,
            has_immediate: false,
            has_imm16: false,
            asm_template: "dec hl",
        },
        Opcode::DEC_SP => OpMeta {
            encoded_bytes: 1,
            t_states: 6,
            reads: RegMask::empty() | RegMask::SP,
            writes: RegMask::empty() | RegMask::SP,
            has_immediate: false,
            has_imm16: false,
            asm_template: "dec sp",
        },
        Opcode::ADD_HL_BC => OpMeta {
            encoded_bytes: 1,
            t_states: 11,
            reads: RegMask::empty() | RegMask::HL | RegMask::BC | RegMask::F,
            writes: RegMask::empty() | RegMask::HL | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "add hl,bc",
        },
        Opcode::ADD_HL_DE => OpMeta {
            encoded_bytes: 1,
            t_states: 11,
            reads: RegMask::empty() | RegMask::HL | RegMask::DE | RegMask::F,
            writes: RegMask::empty() | RegMask::HL | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "add hl,de",
        },
        Opcode::ADD_HL_HL => OpMeta {
            encoded_bytes: 1,
            t_states: 11,
            reads: RegMask::empty() | RegMask::HL | RegMask::HL | RegMask::F,
            writes: RegMask::empty() | RegMask::HL | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "add hl,hl",
        },
        Opcode::ADD_HL_SP => OpMeta {
            encoded_bytes: 1,
            t_states: 11,
            reads: RegMask::empty() | RegMask::HL | RegMask::SP | RegMask::F,
            writes: RegMask::empty() | RegMask::HL | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "add hl,sp",
        },
        Opcode::EX_DE_HL => OpMeta {
            encoded_bytes: 1,
            t_states: 4,
            reads: RegMask::empty() | RegMask::DE | RegMask::HL,
            writes: RegMask::empty() | RegMask::DE | RegMask::HL,
            has_immediate: false,
            has_imm16: false,
            asm_template: "ex de,hl",
        },
        Opcode::LD_SP_HL => OpMeta {
            encoded_bytes: 1,
            t_states: 6,
            reads: RegMask::empty() | RegMask::HL,
            writes: RegMask::empty() | RegMask::SP,
            has_immediate: false,
            has_imm16: false,
            asm_template: "ld sp,hl",
        },
        Opcode::LD_BC_NN => OpMeta {
            encoded_bytes: 3,
            t_states: 10,
            reads: RegMask::empty(),
            writes: RegMask::empty() | RegMask::BC,
            has_immediate: true,
            has_imm16: true,
            asm_template: "ld bc,{nn}",
        },
        Opcode::LD_DE_NN => OpMeta {
            encoded_bytes: 3,
            t_states: 10,
            reads: RegMask::empty(),
            writes: RegMask::empty() | RegMask::DE,
            has_immediate: true,
            has_imm16: true,
            asm_template: "ld de,{nn}",
        },
        Opcode::LD_HL_NN => OpMeta {
            encoded_bytes: 3,
            t_states: 10,
            reads: RegMask::empty(),
            writes: RegMask::empty() | RegMask::HL,
            has_immediate: true,
            has_imm16: true,
            asm_template: "ld hl,{nn}",
        },
        Opcode::LD_SP_NN => OpMeta {
            encoded_bytes: 3,
            t_states: 10,
            reads: RegMask::empty(),
            writes: RegMask::empty() | RegMask::SP,
            has_immediate: true,
            has_imm16: true,
            asm_template: "ld sp,{nn}",
        },
        Opcode::ADC_HL_BC => OpMeta {
            encoded_bytes: 2,
            t_states: 15,
            reads: RegMask::empty() | RegMask::HL | RegMask::BC | RegMask::F,
            writes: RegMask::empty() | RegMask::HL | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "adc hl,bc",
        },
        Opcode::ADC_HL_DE => OpMeta {
            encoded_bytes: 2,
            t_states: 15,
            reads: RegMask::empty() | RegMask::HL | RegMask::DE | RegMask::F,
            writes: RegMask::empty() | RegMask::HL | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "adc hl,de",
        },
        Opcode::ADC_HL_HL => OpMeta {
            encoded_bytes: 2,
            t_states: 15,
            reads: RegMask::empty() | RegMask::HL | RegMask::HL | RegMask::F,
            writes: RegMask::empty() | RegMask::HL | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "adc hl,hl",
        },
        Opcode::ADC_HL_SP => OpMeta {
            encoded_bytes: 2,
            t_states: 15,
            reads: RegMask::empty() | RegMask::HL | RegMask::SP | RegMask::F,
            writes: RegMask::empty() | RegMask::HL | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "adc hl,sp",
        },
        Opcode::SBC_HL_BC => OpMeta {
            encoded_bytes: 2,
            t_states: 15,
            reads: RegMask::empty() | RegMask::HL | RegMask::BC | RegMask::F,
            writes: RegMask::empty() | RegMask::HL | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "sbc hl,bc",
        },
        Opcode::SBC_HL_DE => OpMeta {
            encoded_bytes: 2,
            t_states: 15,
            reads: RegMask::empty() | RegMask::HL | RegMask::DE | RegMask::F,
            writes: RegMask::empty() | RegMask::HL | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "sbc hl,de",
        },
        Opcode::SBC_HL_HL => OpMeta {
            encoded_bytes: 2,
            t_states: 15,
            reads: RegMask::empty() | RegMask::HL | RegMask::HL | RegMask::F,
            writes: RegMask::empty() | RegMask::HL | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "sbc hl,hl",
        },
        Opcode::SBC_HL_SP => OpMeta {
            encoded_bytes: 2,
            t_states: 15,
            reads: RegMask::empty() | RegMask::HL | RegMask::SP | RegMask::F,
            writes: RegMask::empty() | RegMask::HL | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "sbc hl,sp",
        },
        #[cfg(feature = "mem-ops")] Opcode::LD_A_MHL => OpMeta {
            encoded_bytes: 1,
            t_states: 7,
            reads: RegMask::M,
            writes: RegMask::A,
            has_immediate: false,
            has_imm16: false,
            asm_template: "ld a,(hl)",
        },
        #[cfg(feature = "mem-ops")] Opcode::LD_B_MHL => OpMeta {
            encoded_bytes: 1,
            t_states: 7,
            reads: RegMask::M,
            writes: RegMask::B,
            has_immediate: false,
            has_imm16: false,
            asm_template: "ld b,(hl)",
        },
        #[cfg(feature = "mem-ops")] Opcode::LD_C_MHL => OpMeta {
            encoded_bytes: 1,
            t_states: 7,
            reads: RegMask::M,
            writes: RegMask::C,
            has_immediate: false,
            has_imm16: false,
            asm_template: "ld c,(hl)",
        },
        #[cfg(feature = "mem-ops")] Opcode::LD_D_MHL => OpMeta {
            encoded_bytes: 1,
            t_states: 7,
            reads: RegMask::M,
            writes: RegMask::D,
            has_immediate: false,
            has_imm16: false,
            asm_template: "ld d,(hl)",
        },
        #[cfg(feature = "mem-ops")] Opcode::LD_E_MHL => OpMeta {
            encoded_bytes: 1,
            t_states: 7,
            reads: RegMask::M,
            writes: RegMask::E,
            has_immediate: false,
            has_imm16: false,
            asm_template: "ld e,(hl)",
        },
        #[cfg(feature = "mem-ops")] Opcode::LD_H_MHL => OpMeta {
            encoded_bytes: 1,
            t_states: 7,
            reads: RegMask::M,
            writes: RegMask::H,
            has_immediate: false,
            has_imm16: false,
            asm_template: "ld h,(hl)",
        },
        #[cfg(feature = "mem-ops")] Opcode::LD_L_MHL => OpMeta {
            encoded_bytes: 1,
            t_states: 7,
            reads: RegMask::M,
            writes: RegMask::L,
            has_immediate: false,
            has_imm16: false,
            asm_template: "ld l,(hl)",
        },
        #[cfg(feature = "mem-ops")] Opcode::LD_MHL_A => OpMeta {
            encoded_bytes: 1,
            t_states: 7,
            reads: RegMask::A,
            writes: RegMask::M,
            has_immediate: false,
            has_imm16: false,
            asm_template: "ld (hl),a",
        },
        #[cfg(feature = "mem-ops")] Opcode::LD_MHL_B => OpMeta {
            encoded_bytes: 1,
            t_states: 7,
            reads: RegMask::B,
            writes: RegMask::M,
            has_immediate: false,
            has_imm16: false,
            asm_template: "ld (hl),b",
        },
        #[cfg(feature = "mem-ops")] Opcode::LD_MHL_C => OpMeta {
            encoded_bytes: 1,
            t_states: 7,
            reads: RegMask::C,
            writes: RegMask::M,
            has_immediate: false,
            has_imm16: false,
            asm_template: "ld (hl),c",
        },
        #[cfg(feature = "mem-ops")] Opcode::LD_MHL_D => OpMeta {
            encoded_bytes: 1,
            t_states: 7,
            reads: RegMask::D,
            writes: RegMask::M,
            has_immediate: false,
            has_imm16: false,
            asm_template: "ld (hl),d",
        },
        #[cfg(feature = "mem-ops")] Opcode::LD_MHL_E => OpMeta {
            encoded_bytes: 1,
            t_states: 7,
            reads: RegMask::E,
            writes: RegMask::M,
            has_immediate: false,
            has_imm16: false,
            asm_template: "ld (hl),e",
        },
        #[cfg(feature = "mem-ops")] Opcode::LD_MHL_H => OpMeta {
            encoded_bytes: 1,
            t_states: 7,
            reads: RegMask::H,
            writes: RegMask::M,
            has_immediate: false,
            has_imm16: false,
            asm_template: "ld (hl),h",
        },
        #[cfg(feature = "mem-ops")] Opcode::LD_MHL_L => OpMeta {
            encoded_bytes: 1,
            t_states: 7,
            reads: RegMask::L,
            writes: RegMask::M,
            has_immediate: false,
            has_imm16: false,
            asm_template: "ld (hl),l",
        },
        #[cfg(feature = "mem-ops")] Opcode::LD_MHL_N => OpMeta {
            encoded_bytes: 2,
            t_states: 10,
            reads: RegMask::empty(),
            writes: RegMask::M,
            has_immediate: true,
            has_imm16: false,
            asm_template: "ld (hl),{n}",
        },
        #[cfg(feature = "mem-ops")] Opcode::ADD_A_MHL => OpMeta {
            encoded_bytes: 1,
            t_states: 7,
            reads: RegMask::A | RegMask::M,
            writes: RegMask::A | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "add a,(hl)",
        },
        #[cfg(feature = "mem-ops")] Opcode::ADC_A_MHL => OpMeta {
            encoded_bytes: 1,
            t_states: 7,
            reads: RegMask::A | RegMask::M,
            writes: RegMask::A | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "adc a,(hl)",
        },
        #[cfg(feature = "mem-ops")] Opcode::SUB_A_MHL => OpMeta {
            encoded_bytes: 1,
            t_states: 7,
            reads: RegMask::A | RegMask::M,
            writes: RegMask::A | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "sub a,(hl)",
        },
        #[cfg(feature = "mem-ops")] Opcode::SBC_A_MHL => OpMeta {
            encoded_bytes: 1,
            t_states: 7,
            reads: RegMask::A | RegMask::M,
            writes: RegMask::A | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "sbc a,(hl)",
        },
        #[cfg(feature = "mem-ops")] Opcode::AND_A_MHL => OpMeta {
            encoded_bytes: 1,
            t_states: 7,
            reads: RegMask::A | RegMask::M,
            writes: RegMask::A | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "and a,(hl)",
        },
        #[cfg(feature = "mem-ops")] Opcode::XOR_A_MHL => OpMeta {
            encoded_bytes: 1,
            t_states: 7,
            reads: RegMask::A | RegMask::M,
            writes: RegMask::A | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "xor a,(hl)",
        },
        #[cfg(feature = "mem-ops")] Opcode::OR_A_MHL => OpMeta {
            encoded_bytes: 1,
            t_states: 7,
            reads: RegMask::A | RegMask::M,
            writes: RegMask::A | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "or a,(hl)",
        },
        #[cfg(feature = "mem-ops")] Opcode::CP_A_MHL => OpMeta {
            encoded_bytes: 1,
            t_states: 7,
            reads: RegMask::A | RegMask::M,
            writes: RegMask::empty() | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "cp a,(hl)",
        },
        #[cfg(feature = "mem-ops")] Opcode::INC_MHL => OpMeta {
            encoded_bytes: 1,
            t_states: 11,
            reads: RegMask::M,
            writes: RegMask::M | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "inc (hl)",
        },
        #[cfg(feature = "mem-ops")] Opcode::DEC_MHL => OpMeta {
            encoded_bytes: 1,
            t_states: 11,
            reads: RegMask::M,
            writes: RegMask::M | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "dec (hl)",
        },
        #[cfg(feature = "mem-ops")] Opcode::RLC_MHL => OpMeta {
            encoded_bytes: 2,
            t_states: 15,
            reads: RegMask::M | RegMask::F,
            writes: RegMask::M | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "rlc (hl)",
        },
        #[cfg(feature = "mem-ops")] Opcode::RRC_MHL => OpMeta {
            encoded_bytes: 2,
            t_states: 15,
            reads: RegMask::M | RegMask::F,
            writes: RegMask::M | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "rrc (hl)",
        },
        #[cfg(feature = "mem-ops")] Opcode::RL_MHL => OpMeta {
            encoded_bytes: 2,
            t_states: 15,
            reads: RegMask::M | RegMask::F,
            writes: RegMask::M | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "rl (hl)",
        },
        #[cfg(feature = "mem-ops")] Opcode::RR_MHL => OpMeta {
            encoded_bytes: 2,
            t_states: 15,
            reads: RegMask::M | RegMask::F,
            writes: RegMask::M | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "rr (hl)",
        },
        #[cfg(feature = "mem-ops")] Opcode::SLA_MHL => OpMeta {
            encoded_bytes: 2,
            t_states: 15,
            reads: RegMask::M | RegMask::F,
            writes: RegMask::M | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "sla (hl)",
        },
        #[cfg(feature = "mem-ops")] Opcode::SRA_MHL => OpMeta {
            encoded_bytes: 2,
            t_states: 15,
            reads: RegMask::M | RegMask::F,
            writes: RegMask::M | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "sra (hl)",
        },
        #[cfg(feature = "mem-ops")] Opcode::SLL_MHL => OpMeta {
            encoded_bytes: 2,
            t_states: 15,
            reads: RegMask::M | RegMask::F,
            writes: RegMask::M | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "sll (hl)",
        },
        #[cfg(feature = "mem-ops")] Opcode::SRL_MHL => OpMeta {
            encoded_bytes: 2,
            t_states: 15,
            reads: RegMask::M | RegMask::F,
            writes: RegMask::M | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "srl (hl)",
        },
        #[cfg(feature = "mem-ops")] Opcode::BIT_0_MHL => OpMeta {
            encoded_bytes: 2,
            t_states: 12,
            reads: RegMask::M | RegMask::F,
            writes: RegMask::empty() | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "bit 0,(hl)",
        },
        #[cfg(feature = "mem-ops")] Opcode::BIT_1_MHL => OpMeta {
            encoded_bytes: 2,
            t_states: 12,
            reads: RegMask::M | RegMask::F,
            writes: RegMask::empty() | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "bit 1,(hl)",
        },
        #[cfg(feature = "mem-ops")] Opcode::BIT_2_MHL => OpMeta {
            encoded_bytes: 2,
            t_states: 12,
            reads: RegMask::M | RegMask::F,
            writes: RegMask::empty() | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "bit 2,(hl)",
        },
        #[cfg(feature = "mem-ops")] Opcode::BIT_3_MHL => OpMeta {
            encoded_bytes: 2,
            t_states: 12,
            reads: RegMask::M | RegMask::F,
            writes: RegMask::empty() | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "bit 3,(hl)",
        },
        #[cfg(feature = "mem-ops")] Opcode::BIT_4_MHL => OpMeta {
            encoded_bytes: 2,
            t_states: 12,
            reads: RegMask::M | RegMask::F,
            writes: RegMask::empty() | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "bit 4,(hl)",
        },
        #[cfg(feature = "mem-ops")] Opcode::BIT_5_MHL => OpMeta {
            encoded_bytes: 2,
            t_states: 12,
            reads: RegMask::M | RegMask::F,
            writes: RegMask::empty() | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "bit 5,(hl)",
        },
        #[cfg(feature = "mem-ops")] Opcode::BIT_6_MHL => OpMeta {
            encoded_bytes: 2,
            t_states: 12,
            reads: RegMask::M | RegMask::F,
            writes: RegMask::empty() | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "bit 6,(hl)",
        },
        #[cfg(feature = "mem-ops")] Opcode::BIT_7_MHL => OpMeta {
            encoded_bytes: 2,
            t_states: 12,
            reads: RegMask::M | RegMask::F,
            writes: RegMask::empty() | RegMask::F,
            has_immediate: false,
            has_imm16: false,
            asm_template: "bit 7,(hl)",
        },
        #[cfg(feature = "mem-ops")] Opcode::RES_0_MHL => OpMeta {
            encoded_bytes: 2,
            t_states: 15,
            reads: RegMask::M,
            writes: RegMask::M,
            has_immediate: false,
            has_imm16: false,
            asm_template: "res 0,(hl)",
        },
        #[cfg(feature = "mem-ops")] Opcode::RES_1_MHL => OpMeta {
            encoded_bytes: 2,
            t_states: 15,
            reads: RegMask::M,
            writes: RegMask::M,
            has_immediate: false,
            has_imm16: false,
            asm_template: "res 1,(hl)",
        },
        #[cfg(feature = "mem-ops")] Opcode::RES_2_MHL => OpMeta {
            encoded_bytes: 2,
            t_states: 15,
            reads: RegMask::M,
            writes: RegMask::M,
            has_immediate: false,
            has_imm16: false,
            asm_template: "res 2,(hl)",
        },
        #[cfg(feature = "mem-ops")] Opcode::RES_3_MHL => OpMeta {
            encoded_bytes: 2,
            t_states: 15,
            reads: RegMask::M,
            writes: RegMask::M,
            has_immediate: false,
            has_imm16: false,
            asm_template: "res 3,(hl)",
        },
        #[cfg(feature = "mem-ops")] Opcode::RES_4_MHL => OpMeta {
            encoded_bytes: 2,
            t_states: 15,
            reads: RegMask::M,
            writes: RegMask::M,
            has_immediate: false,
            has_imm16: false,
            asm_template: "res 4,(hl)",
        },
        #[cfg(feature = "mem-ops")] Opcode::RES_5_MHL => OpMeta {
            encoded_bytes: 2,
            t_states: 15,
            reads: RegMask::M,
            writes: RegMask::M,
            has_immediate: false,
            has_imm16: false,
            asm_template: "res 5,(hl)",
        },
        #[cfg(feature = "mem-ops")] Opcode::RES_6_MHL => OpMeta {
            encoded_bytes: 2,
            t_states: 15,
            reads: RegMask::M,
            writes: RegMask::M,
            has_immediate: false,
            has_imm16: false,
            asm_template: "res 6,(hl)",
        },
        #[cfg(feature = "mem-ops")] Opcode::RES_7_MHL => OpMeta {
            encoded_bytes: 2,
            t_states: 15,
            reads: RegMask::M,
            writes: RegMask::M,
            has_immediate: false,
            has_imm16: false,
            asm_template: "res 7,(hl)",
        },
        #[cfg(feature = "mem-ops")] Opcode::SET_0_MHL => OpMeta {
            encoded_bytes: 2,
            t_states: 15,
            reads: RegMask::M,
            writes: RegMask::M,
            has_immediate: false,
            has_imm16: false,
            asm_template: "set 0,(hl)",
        },
        #[cfg(feature = "mem-ops")] Opcode::SET_1_MHL => OpMeta {
            encoded_bytes: 2,
            t_states: 15,
            reads: RegMask::M,
            writes: RegMask::M,
            has_immediate: false,
            has_imm16: false,
            asm_template: "set 1,(hl)",
        },
        #[cfg(feature = "mem-ops")] Opcode::SET_2_MHL => OpMeta {
            encoded_bytes: 2,
            t_states: 15,
            reads: RegMask::M,
            writes: RegMask::M,
            has_immediate: false,
            has_imm16: false,
            asm_template: "set 2,(hl)",
        },
        #[cfg(feature = "mem-ops")] Opcode::SET_3_MHL => OpMeta {
            encoded_bytes: 2,
            t_states: 15,
            reads: RegMask::M,
            writes: RegMask::M,
            has_immediate: false,
            has_imm16: false,
            asm_template: "set 3,(hl)",
        },
        #[cfg(feature = "mem-ops")] Opcode::SET_4_MHL => OpMeta {
            encoded_bytes: 2,
            t_states: 15,
            reads: RegMask::M,
            writes: RegMask::M,
            has_immediate: false,
            has_imm16: false,
            asm_template: "set 4,(hl)",
        },
        #[cfg(feature = "mem-ops")] Opcode::SET_5_MHL => OpMeta {
            encoded_bytes: 2,
            t_states: 15,
            reads: RegMask::M,
            writes: RegMask::M,
            has_immediate: false,
            has_imm16: false,
            asm_template: "set 5,(hl)",
        },
        #[cfg(feature = "mem-ops")] Opcode::SET_6_MHL => OpMeta {
            encoded_bytes: 2,
            t_states: 15,
            reads: RegMask::M,
            writes: RegMask::M,
            has_immediate: false,
            has_imm16: false,
            asm_template: "set 6,(hl)",
        },
        #[cfg(feature = "mem-ops")] Opcode::SET_7_MHL => OpMeta {
            encoded_bytes: 2,
            t_states: 15,
            reads: RegMask::M,
            writes: RegMask::M,
            has_immediate: false,
            has_imm16: false,
            asm_template: "set 7,(hl)",
        },
        #[cfg(feature = "mem-ops")] Opcode::LD_A_MBC => OpMeta {
            encoded_bytes: 1,
            t_states: 7,
            reads: RegMask::M,
            writes: RegMask::A,
            has_immediate: false,
            has_imm16: false,
            asm_template: "ld a,(bc)",
        },
        #[cfg(feature = "mem-ops")] Opcode::LD_MBC_A => OpMeta {
            encoded_bytes: 1,
            t_states: 7,
            reads: RegMask::A,
            writes: RegMask::M,
            has_immediate: false,
            has_imm16: false,
            asm_template: "ld (bc),a",
        },
        #[cfg(feature = "mem-ops")] Opcode::LD_A_MDE => OpMeta {
            encoded_bytes: 1,
            t_states: 7,
            reads: RegMask::M,
            writes: RegMask::A,
            has_immediate: false,
            has_imm16: false,
            asm_template: "ld a,(de)",
        },
        #[cfg(feature = "mem-ops")] Opcode::LD_MDE_A => OpMeta {
            encoded_bytes: 1,
            t_states: 7,
            reads: RegMask::A,
            writes: RegMask::M,
            has_immediate: false,
            has_imm16: false,
            asm_template: "ld (de),a",
        },
    }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn every_opcode_has_metadata() {
        for op in Opcode::iter() {
            let meta = op.meta();
            assert!(meta.encoded_bytes >= 1);
            assert!(meta.t_states >= 4);
        }
    }

    #[test]
    fn immediate_opcodes_agree_with_encoded_length() {
        for op in Opcode::iter() {
            let meta = op.meta();
            if meta.has_imm16 {
                assert!(meta.has_immediate);
                assert!(meta.encoded_bytes >= 3);
            } else if meta.has_immediate {
                assert!(meta.encoded_bytes >= 2);
            }
        }
    }

    #[test]
    fn cp_never_writes_the_accumulator() {
        assert!(!Opcode::CP_A_B.meta().writes.contains(RegMask::A));
        assert!(Opcode::CP_A_B.meta().writes.contains(RegMask::F));
    }

    #[test]
    fn bit_preserves_the_tested_register() {
        assert!(!Opcode::BIT_0_A.meta().writes.contains(RegMask::A));
        assert_eq!(Opcode::BIT_0_A.meta().writes, RegMask::F);
    }

    #[test]
    fn res_and_set_touch_no_flags() {
        assert_eq!(Opcode::RES_3_D.meta().writes, RegMask::D);
        assert_eq!(Opcode::SET_3_D.meta().writes, RegMask::D);
    }
}
