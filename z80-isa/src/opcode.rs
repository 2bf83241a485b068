//! The closed, opaque `Opcode` tag set and its dense metadata/dispatch tables.
//!
//! Generated mechanically from the base Z80 subset plus the optional
//! memory-indirect extension described in the crate-level docs; see
//! `gen_opcodes.py` at the repository root for the generator. Hand-edit
//! only the helper functions in `executor.rs` that these arms call into.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use strum::EnumIter;

/// An opaque tag identifying a single Z80 instruction shape.
///
/// 394 base (non-memory) entries, plus 61 memory-indirect entries
/// behind the `mem-ops` feature. Register selection is baked into the
/// variant itself (e.g. `LD_A_B`); the only runtime operand is the
/// instruction's immediate value, carried alongside in `Instruction`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u16)]
#[allow(non_camel_case_types)]
pub enum Opcode {
    /// Self-load; semantically a NOP. `LD A,A`.
    LD_A_A = 0,
    /// Loads `B` into `A`. `LD A,B`.
    LD_A_B = 1,
    /// Loads `C` into `A`. `LD A,C`.
    LD_A_C = 2,
    /// Loads `D` into `A`. `LD A,D`.
    LD_A_D = 3,
    /// Loads `E` into `A`. `LD A,E`.
    LD_A_E = 4,
    /// Loads `H` into `A`. `LD A,H`.
    LD_A_H = 5,
    /// Loads `L` into `A`. `LD A,L`.
    LD_A_L = 6,
    /// Loads `A` into `B`. `LD B,A`.
    LD_B_A = 7,
    /// Self-load; semantically a NOP. `LD B,B`.
    LD_B_B = 8,
    /// Loads `C` into `B`. `LD B,C`.
    LD_B_C = 9,
    /// Loads `D` into `B`. `LD B,D`.
    LD_B_D = 10,
    /// Loads `E` into `B`. `LD B,E`.
    LD_B_E = 11,
    /// Loads `H` into `B`. `LD B,H`.
    LD_B_H = 12,
    /// Loads `L` into `B`. `LD B,L`.
    LD_B_L = 13,
    /// Loads `A` into `C`. `LD C,A`.
    LD_C_A = 14,
    /// Loads `B` into `C`. `LD C,B`.
    LD_C_B = 15,
    /// Self-load; semantically a NOP. `LD C,C`.
    LD_C_C = 16,
    /// Loads `D` into `C`. `LD C,D`.
    LD_C_D = 17,
    /// Loads `E` into `C`. `LD C,E`.
    LD_C_E = 18,
    /// Loads `H` into `C`. `LD C,H`.
    LD_C_H = 19,
    /// Loads `L` into `C`. `LD C,L`.
    LD_C_L = 20,
    /// Loads `A` into `D`. `LD D,A`.
    LD_D_A = 21,
    /// Loads `B` into `D`. `LD D,B`.
    LD_D_B = 22,
    /// Loads `C` into `D`. `LD D,C`.
    LD_D_C = 23,
    /// Self-load; semantically a NOP. `LD D,D`.
    LD_D_D = 24,
    /// Loads `E` into `D`. `LD D,E`.
    LD_D_E = 25,
    /// Loads `H` into `D`. `LD D,H`.
    LD_D_H = 26,
    /// Loads `L` into `D`. `LD D,L`.
    LD_D_L = 27,
    /// Loads `A` into `E`. `LD E,A`.
    LD_E_A = 28,
    /// Loads `B` into `E`. `LD E,B`.
    LD_E_B = 29,
    /// Loads `C` into `E`. `LD E,C`.
    LD_E_C = 30,
    /// Loads `D` into `E`. `LD E,D`.
    LD_E_D = 31,
    /// Self-load; semantically a NOP. `LD E,E`.
    LD_E_E = 32,
    /// Loads `H` into `E`. `LD E,H`.
    LD_E_H = 33,
    /// Loads `L` into `E`. `LD E,L`.
    LD_E_L = 34,
    /// Loads `A` into `H`. `LD H,A`.
    LD_H_A = 35,
    /// Loads `B` into `H`. `LD H,B`.
    LD_H_B = 36,
    /// Loads `C` into `H`. `LD H,C`.
    LD_H_C = 37,
    /// Loads `D` into `H`. `LD H,D`.
    LD_H_D = 38,
    /// Loads `E` into `H`. `LD H,E`.
    LD_H_E = 39,
    /// Self-load; semantically a NOP. `LD H,H`.
    LD_H_H = 40,
    /// Loads `L` into `H`. `LD H,L`.
    LD_H_L = 41,
    /// Loads `A` into `L`. `LD L,A`.
    LD_L_A = 42,
    /// Loads `B` into `L`. `LD L,B`.
    LD_L_B = 43,
    /// Loads `C` into `L`. `LD L,C`.
    LD_L_C = 44,
    /// Loads `D` into `L`. `LD L,D`.
    LD_L_D = 45,
    /// Loads `E` into `L`. `LD L,E`.
    LD_L_E = 46,
    /// Loads `H` into `L`. `LD L,H`.
    LD_L_H = 47,
    /// Self-load; semantically a NOP. `LD L,L`.
    LD_L_L = 48,
    /// Loads an 8-bit immediate into `A`. `LD A,n`.
    LD_A_N = 49,
    /// Loads an 8-bit immediate into `B`. `LD B,n`.
    LD_B_N = 50,
    /// Loads an 8-bit immediate into `C`. `LD C,n`.
    LD_C_N = 51,
    /// Loads an 8-bit immediate into `D`. `LD D,n`.
    LD_D_N = 52,
    /// Loads an 8-bit immediate into `E`. `LD E,n`.
    LD_E_N = 53,
    /// Loads an 8-bit immediate into `H`. `LD H,n`.
    LD_H_N = 54,
    /// Loads an 8-bit immediate into `L`. `LD L,n`.
    LD_L_N = 55,
    /// `ADD A,A`.
    ADD_A_A = 56,
    /// `ADD A,B`.
    ADD_A_B = 57,
    /// `ADD A,C`.
    ADD_A_C = 58,
    /// `ADD A,D`.
    ADD_A_D = 59,
    /// `ADD A,E`.
    ADD_A_E = 60,
    /// `ADD A,H`.
    ADD_A_H = 61,
    /// `ADD A,L`.
    ADD_A_L = 62,
    /// `ADD A,n`.
    ADD_A_N = 63,
    /// `ADC A,A`.
    ADC_A_A = 64,
    /// `ADC A,B`.
    ADC_A_B = 65,
    /// `ADC A,C`.
    ADC_A_C = 66,
    /// `ADC A,D`.
    ADC_A_D = 67,
    /// `ADC A,E`.
    ADC_A_E = 68,
    /// `ADC A,H`.
    ADC_A_H = 69,
    /// `ADC A,L`.
    ADC_A_L = 70,
    /// `ADC A,n`.
    ADC_A_N = 71,
    /// `SUB A,A`.
    SUB_A_A = 72,
    /// `SUB A,B`.
    SUB_A_B = 73,
    /// `SUB A,C`.
    SUB_A_C = 74,
    /// `SUB A,D`.
    SUB_A_D = 75,
    /// `SUB A,E`.
    SUB_A_E = 76,
    /// `SUB A,H`.
    SUB_A_H = 77,
    /// `SUB A,L`.
    SUB_A_L = 78,
    /// `SUB A,n`.
    SUB_A_N = 79,
    /// `SBC A,A`.
    SBC_A_A = 80,
    /// `SBC A,B`.
    SBC_A_B = 81,
    /// `SBC A,C`.
    SBC_A_C = 82,
    /// `SBC A,D`.
    SBC_A_D = 83,
    /// `SBC A,E`.
    SBC_A_E = 84,
    /// `SBC A,H`.
    SBC_A_H = 85,
    /// `SBC A,L`.
    SBC_A_L = 86,
    /// `SBC A,n`.
    SBC_A_N = 87,
    /// `AND A,A`.
    AND_A_A = 88,
    /// `AND A,B`.
    AND_A_B = 89,
    /// `AND A,C`.
    AND_A_C = 90,
    /// `AND A,D`.
    AND_A_D = 91,
    /// `AND A,E`.
    AND_A_E = 92,
    /// `AND A,H`.
    AND_A_H = 93,
    /// `AND A,L`.
    AND_A_L = 94,
    /// `AND A,n`.
    AND_A_N = 95,
    /// `XOR A,A`.
    XOR_A_A = 96,
    /// `XOR A,B`.
    XOR_A_B = 97,
    /// `XOR A,C`.
    XOR_A_C = 98,
    /// `XOR A,D`.
    XOR_A_D = 99,
    /// `XOR A,E`.
    XOR_A_E = 100,
    /// `XOR A,H`.
    XOR_A_H = 101,
    /// `XOR A,L`.
    XOR_A_L = 102,
    /// `XOR A,n`.
    XOR_A_N = 103,
    /// `OR A,A`.
    OR_A_A = 104,
    /// `OR A,B`.
    OR_A_B = 105,
    /// `OR A,C`.
    OR_A_C = 106,
    /// `OR A,D`.
    OR_A_D = 107,
    /// `OR A,E`.
    OR_A_E = 108,
    /// `OR A,H`.
    OR_A_H = 109,
    /// `OR A,L`.
    OR_A_L = 110,
    /// `OR A,n`.
    OR_A_N = 111,
    /// `CP A,A`.
    CP_A_A = 112,
    /// `CP A,B`.
    CP_A_B = 113,
    /// `CP A,C`.
    CP_A_C = 114,
    /// `CP A,D`.
    CP_A_D = 115,
    /// `CP A,E`.
    CP_A_E = 116,
    /// `CP A,H`.
    CP_A_H = 117,
    /// `CP A,L`.
    CP_A_L = 118,
    /// `CP A,n`.
    CP_A_N = 119,
    /// `INC A`.
    INC_A = 120,
    /// `INC B`.
    INC_B = 121,
    /// `INC C`.
    INC_C = 122,
    /// `INC D`.
    INC_D = 123,
    /// `INC E`.
    INC_E = 124,
    /// `INC H`.
    INC_H = 125,
    /// `INC L`.
    INC_L = 126,
    /// `DEC A`.
    DEC_A = 127,
    /// `DEC B`.
    DEC_B = 128,
    /// `DEC C`.
    DEC_C = 129,
    /// `DEC D`.
    DEC_D = 130,
    /// `DEC E`.
    DEC_E = 131,
    /// `DEC H`.
    DEC_H = 132,
    /// `DEC L`.
    DEC_L = 133,
    /// Rotates `A` left circularly. Preserves S/Z/P.
    RLCA = 134,
    /// Rotates `A` right circularly. Preserves S/Z/P.
    RRCA = 135,
    /// Rotates `A` left through carry. Preserves S/Z/P.
    RLA = 136,
    /// Rotates `A` right through carry. Preserves S/Z/P.
    RRA = 137,
    /// Decimal-adjusts `A` after a BCD add/subtract.
    DAA = 138,
    /// Complements `A` (one's complement).
    CPL = 139,
    /// Sets the carry flag.
    SCF = 140,
    /// Complements the carry flag.
    CCF = 141,
    /// Negates `A` (`A = 0 - A`).
    NEG = 142,
    /// No operation.
    NOP = 143,
    /// `RLC A`.
    RLC_A = 144,
    /// `RLC B`.
    RLC_B = 145,
    /// `RLC C`.
    RLC_C = 146,
    /// `RLC D`.
    RLC_D = 147,
    /// `RLC E`.
    RLC_E = 148,
    /// `RLC H`.
    RLC_H = 149,
    /// `RLC L`.
    RLC_L = 150,
    /// `RRC A`.
    RRC_A = 151,
    /// `RRC B`.
    RRC_B = 152,
    /// `RRC C`.
    RRC_C = 153,
    /// `RRC D`.
    RRC_D = 154,
    /// `RRC E`.
    RRC_E = 155,
    /// `RRC H`.
    RRC_H = 156,
    /// `RRC L`.
    RRC_L = 157,
    /// `RL A`.
    RL_A = 158,
    /// `RL B`.
    RL_B = 159,
    /// `RL C`.
    RL_C = 160,
    /// `RL D`.
    RL_D = 161,
    /// `RL E`.
    RL_E = 162,
    /// `RL H`.
    RL_H = 163,
    /// `RL L`.
    RL_L = 164,
    /// `RR A`.
    RR_A = 165,
    /// `RR B`.
    RR_B = 166,
    /// `RR C`.
    RR_C = 167,
    /// `RR D`.
    RR_D = 168,
    /// `RR E`.
    RR_E = 169,
    /// `RR H`.
    RR_H = 170,
    /// `RR L`.
    RR_L = 171,
    /// `SLA A`.
    SLA_A = 172,
    /// `SLA B`.
    SLA_B = 173,
    /// `SLA C`.
    SLA_C = 174,
    /// `SLA D`.
    SLA_D = 175,
    /// `SLA E`.
    SLA_E = 176,
    /// `SLA H`.
    SLA_H = 177,
    /// `SLA L`.
    SLA_L = 178,
    /// `SRA A`.
    SRA_A = 179,
    /// `SRA B`.
    SRA_B = 180,
    /// `SRA C`.
    SRA_C = 181,
    /// `SRA D`.
    SRA_D = 182,
    /// `SRA E`.
    SRA_E = 183,
    /// `SRA H`.
    SRA_H = 184,
    /// `SRA L`.
    SRA_L = 185,
    /// `SLL A`. Undocumented: shifts left, injecting 1 into bit 0.
    SLL_A = 186,
    /// `SLL B`. Undocumented: shifts left, injecting 1 into bit 0.
    SLL_B = 187,
    /// `SLL C`. Undocumented: shifts left, injecting 1 into bit 0.
    SLL_C = 188,
    /// `SLL D`. Undocumented: shifts left, injecting 1 into bit 0.
    SLL_D = 189,
    /// `SLL E`. Undocumented: shifts left, injecting 1 into bit 0.
    SLL_E = 190,
    /// `SLL H`. Undocumented: shifts left, injecting 1 into bit 0.
    SLL_H = 191,
    /// `SLL L`. Undocumented: shifts left, injecting 1 into bit 0.
    SLL_L = 192,
    /// `SRL A`.
    SRL_A = 193,
    /// `SRL B`.
    SRL_B = 194,
    /// `SRL C`.
    SRL_C = 195,
    /// `SRL D`.
    SRL_D = 196,
    /// `SRL E`.
    SRL_E = 197,
    /// `SRL H`.
    SRL_H = 198,
    /// `SRL L`.
    SRL_L = 199,
    /// `BIT 0,A`. Tests bit 0; register and carry are preserved.
    BIT_0_A = 200,
    /// `BIT 0,B`. Tests bit 0; register and carry are preserved.
    BIT_0_B = 201,
    /// `BIT 0,C`. Tests bit 0; register and carry are preserved.
    BIT_0_C = 202,
    /// `BIT 0,D`. Tests bit 0; register and carry are preserved.
    BIT_0_D = 203,
    /// `BIT 0,E`. Tests bit 0; register and carry are preserved.
    BIT_0_E = 204,
    /// `BIT 0,H`. Tests bit 0; register and carry are preserved.
    BIT_0_H = 205,
    /// `BIT 0,L`. Tests bit 0; register and carry are preserved.
    BIT_0_L = 206,
    /// `BIT 1,A`. Tests bit 1; register and carry are preserved.
    BIT_1_A = 207,
    /// `BIT 1,B`. Tests bit 1; register and carry are preserved.
    BIT_1_B = 208,
    /// `BIT 1,C`. Tests bit 1; register and carry are preserved.
    BIT_1_C = 209,
    /// `BIT 1,D`. Tests bit 1; register and carry are preserved.
    BIT_1_D = 210,
    /// `BIT 1,E`. Tests bit 1; register and carry are preserved.
    BIT_1_E = 211,
    /// `BIT 1,H`. Tests bit 1; register and carry are preserved.
    BIT_1_H = 212,
    /// `BIT 1,L`. Tests bit 1; register and carry are preserved.
    BIT_1_L = 213,
    /// `BIT 2,A`. Tests bit 2; register and carry are preserved.
    BIT_2_A = 214,
    /// `BIT 2,B`. Tests bit 2; register and carry are preserved.
    BIT_2_B = 215,
    /// `BIT 2,C`. Tests bit 2; register and carry are preserved.
    BIT_2_C = 216,
    /// `BIT 2,D`. Tests bit 2; register and carry are preserved.
    BIT_2_D = 217,
    /// `BIT 2,E`. Tests bit 2; register and carry are preserved.
    BIT_2_E = 218,
    /// `BIT 2,H`. Tests bit 2; register and carry are preserved.
    BIT_2_H = 219,
    /// `BIT 2,L`. Tests bit 2; register and carry are preserved.
    BIT_2_L = 220,
    /// `BIT 3,A`. Tests bit 3; register and carry are preserved.
    BIT_3_A = 221,
    /// `BIT 3,B`. Tests bit 3; register and carry are preserved.
    BIT_3_B = 222,
    /// `BIT 3,C`. Tests bit 3; register and carry are preserved.
    BIT_3_C = 223,
    /// `BIT 3,D`. Tests bit 3; register and carry are preserved.
    BIT_3_D = 224,
    /// `BIT 3,E`. Tests bit 3; register and carry are preserved.
    BIT_3_E = 225,
    /// `BIT 3,H`. Tests bit 3; register and carry are preserved.
    BIT_3_H = 226,
    /// `BIT 3,L`. Tests bit 3; register and carry are preserved.
    BIT_3_L = 227,
    /// `BIT 4,A`. Tests bit 4; register and carry are preserved.
    BIT_4_A = 228,
    /// `BIT 4,B`. Tests bit 4; register and carry are preserved.
    BIT_4_B = 229,
    /// `BIT 4,C`. Tests bit 4; register and carry are preserved.
    BIT_4_C = 230,
    /// `BIT 4,D`. Tests bit 4; register and carry are preserved.
    BIT_4_D = 231,
    /// `BIT 4,E`. Tests bit 4; register and carry are preserved.
    BIT_4_E = 232,
    /// `BIT 4,H`. Tests bit 4; register and carry are preserved.
    BIT_4_H = 233,
    /// `BIT 4,L`. Tests bit 4; register and carry are preserved.
    BIT_4_L = 234,
    /// `BIT 5,A`. Tests bit 5; register and carry are preserved.
    BIT_5_A = 235,
    /// `BIT 5,B`. Tests bit 5; register and carry are preserved.
    BIT_5_B = 236,
    /// `BIT 5,C`. Tests bit 5; register and carry are preserved.
    BIT_5_C = 237,
    /// `BIT 5,D`. Tests bit 5; register and carry are preserved.
    BIT_5_D = 238,
    /// `BIT 5,E`. Tests bit 5; register and carry are preserved.
    BIT_5_E = 239,
    /// `BIT 5,H`. Tests bit 5; register and carry are preserved.
    BIT_5_H = 240,
    /// `BIT 5,L`. Tests bit 5; register and carry are preserved.
    BIT_5_L = 241,
    /// `BIT 6,A`. Tests bit 6; register and carry are preserved.
    BIT_6_A = 242,
    /// `BIT 6,B`. Tests bit 6; register and carry are preserved.
    BIT_6_B = 243,
    /// `BIT 6,C`. Tests bit 6; register and carry are preserved.
    BIT_6_C = 244,
    /// `BIT 6,D`. Tests bit 6; register and carry are preserved.
    BIT_6_D = 245,
    /// `BIT 6,E`. Tests bit 6; register and carry are preserved.
    BIT_6_E = 246,
    /// `BIT 6,H`. Tests bit 6; register and carry are preserved.
    BIT_6_H = 247,
    /// `BIT 6,L`. Tests bit 6; register and carry are preserved.
    BIT_6_L = 248,
    /// `BIT 7,A`. Tests bit 7; register and carry are preserved.
    BIT_7_A = 249,
    /// `BIT 7,B`. Tests bit 7; register and carry are preserved.
    BIT_7_B = 250,
    /// `BIT 7,C`. Tests bit 7; register and carry are preserved.
    BIT_7_C = 251,
    /// `BIT 7,D`. Tests bit 7; register and carry are preserved.
    BIT_7_D = 252,
    /// `BIT 7,E`. Tests bit 7; register and carry are preserved.
    BIT_7_E = 253,
    /// `BIT 7,H`. Tests bit 7; register and carry are preserved.
    BIT_7_H = 254,
    /// `BIT 7,L`. Tests bit 7; register and carry are preserved.
    BIT_7_L = 255,
    /// `RES 0,A`. Clears bit 0; no flags affected.
    RES_0_A = 256,
    /// `RES 0,B`. Clears bit 0; no flags affected.
    RES_0_B = 257,
    /// `RES 0,C`. Clears bit 0; no flags affected.
    RES_0_C = 258,
    /// `RES 0,D`. Clears bit 0; no flags affected.
    RES_0_D = 259,
    /// `RES 0,E`. Clears bit 0; no flags affected.
    RES_0_E = 260,
    /// `RES 0,H`. Clears bit 0; no flags affected.
    RES_0_H = 261,
    /// `RES 0,L`. Clears bit 0; no flags affected.
    RES_0_L = 262,
    /// `RES 1,A`. Clears bit 1; no flags affected.
    RES_1_A = 263,
    /// `RES 1,B`. Clears bit 1; no flags affected.
    RES_1_B = 264,
    /// `RES 1,C`. Clears bit 1; no flags affected.
    RES_1_C = 265,
    /// `RES 1,D`. Clears bit 1; no flags affected.
    RES_1_D = 266,
    /// `RES 1,E`. Clears bit 1; no flags affected.
    RES_1_E = 267,
    /// `RES 1,H`. Clears bit 1; no flags affected.
    RES_1_H = 268,
    /// `RES 1,L`. Clears bit 1; no flags affected.
    RES_1_L = 269,
    /// `RES 2,A`. Clears bit 2; no flags affected.
    RES_2_A = 270,
    /// `RES 2,B`. Clears bit 2; no flags affected.
    RES_2_B = 271,
    /// `RES 2,C`. Clears bit 2; no flags affected.
    RES_2_C = 272,
    /// `RES 2,D`. Clears bit 2; no flags affected.
    RES_2_D = 273,
    /// `RES 2,E`. Clears bit 2; no flags affected.
    RES_2_E = 274,
    /// `RES 2,H`. Clears bit 2; no flags affected.
    RES_2_H = 275,
    /// `RES 2,L`. Clears bit 2; no flags affected.
    RES_2_L = 276,
    /// `RES 3,A`. Clears bit 3; no flags affected.
    RES_3_A = 277,
    /// `RES 3,B`. Clears bit 3; no flags affected.
    RES_3_B = 278,
    /// `RES 3,C`. Clears bit 3; no flags affected.
    RES_3_C = 279,
    /// `RES 3,D`. Clears bit 3; no flags affected.
    RES_3_D = 280,
    /// `RES 3,E`. Clears bit 3; no flags affected.
    RES_3_E = 281,
    /// `RES 3,H`. Clears bit 3; no flags affected.
    RES_3_H = 282,
    /// `RES 3,L`. Clears bit 3; no flags affected.
    RES_3_L = 283,
    /// `RES 4,A`. Clears bit 4; no flags affected.
    RES_4_A = 284,
    /// `RES 4,B`. Clears bit 4; no flags affected.
    RES_4_B = 285,
    /// `RES 4,C`. Clears bit 4; no flags affected.
    RES_4_C = 286,
    /// `RES 4,D`. Clears bit 4; no flags affected.
    RES_4_D = 287,
    /// `RES 4,E`. Clears bit 4; no flags affected.
    RES_4_E = 288,
    /// `RES 4,H`. Clears bit 4; no flags affected.
    RES_4_H = 289,
    /// `RES 4,L`. Clears bit 4; no flags affected.
    RES_4_L = 290,
    /// `RES 5,A`. Clears bit 5; no flags affected.
    RES_5_A = 291,
    /// `RES 5,B`. Clears bit 5; no flags affected.
    RES_5_B = 292,
    /// `RES 5,C`. Clears bit 5; no flags affected.
    RES_5_C = 293,
    /// `RES 5,D`. Clears bit 5; no flags affected.
    RES_5_D = 294,
    /// `RES 5,E`. Clears bit 5; no flags affected.
    RES_5_E = 295,
    /// `RES 5,H`. Clears bit 5; no flags affected.
    RES_5_H = 296,
    /// `RES 5,L`. Clears bit 5; no flags affected.
    RES_5_L = 297,
    /// `RES 6,A`. Clears bit 6; no flags affected.
    RES_6_A = 298,
    /// `RES 6,B`. Clears bit 6; no flags affected.
    RES_6_B = 299,
    /// `RES 6,C`. Clears bit 6; no flags affected.
    RES_6_C = 300,
    /// `RES 6,D`. Clears bit 6; no flags affected.
    RES_6_D = 301,
    /// `RES 6,E`. Clears bit 6; no flags affected.
    RES_6_E = 302,
    /// `RES 6,H`. Clears bit 6; no flags affected.
    RES_6_H = 303,
    /// `RES 6,L`. Clears bit 6; no flags affected.
    RES_6_L = 304,
    /// `RES 7,A`. Clears bit 7; no flags affected.
    RES_7_A = 305,
    /// `RES 7,B`. Clears bit 7; no flags affected.
    RES_7_B = 306,
    /// `RES 7,C`. Clears bit 7; no flags affected.
    RES_7_C = 307,
    /// `RES 7,D`. Clears bit 7; no flags affected.
    RES_7_D = 308,
    /// `RES 7,E`. Clears bit 7; no flags affected.
    RES_7_E = 309,
    /// `RES 7,H`. Clears bit 7; no flags affected.
    RES_7_H = 310,
    /// `RES 7,L`. Clears bit 7; no flags affected.
    RES_7_L = 311,
    /// `SET 0,A`. Sets bit 0; no flags affected.
    SET_0_A = 312,
    /// `SET 0,B`. Sets bit 0; no flags affected.
    SET_0_B = 313,
    /// `SET 0,C`. Sets bit 0; no flags affected.
    SET_0_C = 314,
    /// `SET 0,D`. Sets bit 0; no flags affected.
    SET_0_D = 315,
    /// `SET 0,E`. Sets bit 0; no flags affected.
    SET_0_E = 316,
    /// `SET 0,H`. Sets bit 0; no flags affected.
    SET_0_H = 317,
    /// `SET 0,L`. Sets bit 0; no flags affected.
    SET_0_L = 318,
    /// `SET 1,A`. Sets bit 1; no flags affected.
    SET_1_A = 319,
    /// `SET 1,B`. Sets bit 1; no flags affected.
    SET_1_B = 320,
    /// `SET 1,C`. Sets bit 1; no flags affected.
    SET_1_C = 321,
    /// `SET 1,D`. Sets bit 1; no flags affected.
    SET_1_D = 322,
    /// `SET 1,E`. Sets bit 1; no flags affected.
    SET_1_E = 323,
    /// `SET 1,H`. Sets bit 1; no flags affected.
    SET_1_H = 324,
    /// `SET 1,L`. Sets bit 1; no flags affected.
    SET_1_L = 325,
    /// `SET 2,A`. Sets bit 2; no flags affected.
    SET_2_A = 326,
    /// `SET 2,B`. Sets bit 2; no flags affected.
    SET_2_B = 327,
    /// `SET 2,C`. Sets bit 2; no flags affected.
    SET_2_C = 328,
    /// `SET 2,D`. Sets bit 2; no flags affected.
    SET_2_D = 329,
    /// `SET 2,E`. Sets bit 2; no flags affected.
    SET_2_E = 330,
    /// `SET 2,H`. Sets bit 2; no flags affected.
    SET_2_H = 331,
    /// `SET 2,L`. Sets bit 2; no flags affected.
    SET_2_L = 332,
    /// `SET 3,A`. Sets bit 3; no flags affected.
    SET_3_A = 333,
    /// `SET 3,B`. Sets bit 3; no flags affected.
    SET_3_B = 334,
    /// `SET 3,C`. Sets bit 3; no flags affected.
    SET_3_C = 335,
    /// `SET 3,D`. Sets bit 3; no flags affected.
    SET_3_D = 336,
    /// `SET 3,E`. Sets bit 3; no flags affected.
    SET_3_E = 337,
    /// `SET 3,H`. Sets bit 3; no flags affected.
    SET_3_H = 338,
    /// `SET 3,L`. Sets bit 3; no flags affected.
    SET_3_L = 339,
    /// `SET 4,A`. Sets bit 4; no flags affected.
    SET_4_A = 340,
    /// `SET 4,B`. Sets bit 4; no flags affected.
    SET_4_B = 341,
    /// `SET 4,C`. Sets bit 4; no flags affected.
    SET_4_C = 342,
    /// `SET 4,D`. Sets bit 4; no flags affected.
    SET_4_D = 343,
    /// `SET 4,E`. Sets bit 4; no flags affected.
    SET_4_E = 344,
    /// `SET 4,H`. Sets bit 4; no flags affected.
    SET_4_H = 345,
    /// `SET 4,L`. Sets bit 4; no flags affected.
    SET_4_L = 346,
    /// `SET 5,A`. Sets bit 5; no flags affected.
    SET_5_A = 347,
    /// `SET 5,B`. Sets bit 5; no flags affected.
    SET_5_B = 348,
    /// `SET 5,C`. Sets bit 5; no flags affected.
    SET_5_C = 349,
    /// `SET 5,D`. Sets bit 5; no flags affected.
    SET_5_D = 350,
    /// `SET 5,E`. Sets bit 5; no flags affected.
    SET_5_E = 351,
    /// `SET 5,H`. Sets bit 5; no flags affected.
    SET_5_H = 352,
    /// `SET 5,L`. Sets bit 5; no flags affected.
    SET_5_L = 353,
    /// `SET 6,A`. Sets bit 6; no flags affected.
    SET_6_A = 354,
    /// `SET 6,B`. Sets bit 6; no flags affected.
    SET_6_B = 355,
    /// `SET 6,C`. Sets bit 6; no flags affected.
    SET_6_C = 356,
    /// `SET 6,D`. Sets bit 6; no flags affected.
    SET_6_D = 357,
    /// `SET 6,E`. Sets bit 6; no flags affected.
    SET_6_E = 358,
    /// `SET 6,H`. Sets bit 6; no flags affected.
    SET_6_H = 359,
    /// `SET 6,L`. Sets bit 6; no flags affected.
    SET_6_L = 360,
    /// `SET 7,A`. Sets bit 7; no flags affected.
    SET_7_A = 361,
    /// `SET 7,B`. Sets bit 7; no flags affected.
    SET_7_B = 362,
    /// `SET 7,C`. Sets bit 7; no flags affected.
    SET_7_C = 363,
    /// `SET 7,D`. Sets bit 7; no flags affected.
    SET_7_D = 364,
    /// `SET 7,E`. Sets bit 7; no flags affected.
    SET_7_E = 365,
    /// `SET 7,H`. Sets bit 7; no flags affected.
    SET_7_H = 366,
    /// `SET 7,L`. Sets bit 7; no flags affected.
    SET_7_L = 367,
    /// `INC BC`. No flags affected.
    INC_BC = 368,
    /// `INC DE`. No flags affected.
    INC_DE = 369,
    /// `INC HL`. No flags affected.
    INC_HL = 370,
    /// `INC SP`. No flags affected.
    INC_SP = 371,
    /// `DEC BC`. No flags affected.
    DEC_BC = 372,
    /// `DEC DE`. No flags affected.
    DEC_DE = 373,
    /// `DEC HL`. No flags affected.
    DEC_HL = 374,
    /// `DEC SP`. No flags affected.
    DEC_SP = 375,
    /// `ADD HL,BC`. Preserves S/Z/P.
    ADD_HL_BC = 376,
    /// `ADD HL,DE`. Preserves S/Z/P.
    ADD_HL_DE = 377,
    /// `ADD HL,HL`. Preserves S/Z/P.
    ADD_HL_HL = 378,
    /// `ADD HL,SP`. Preserves S/Z/P.
    ADD_HL_SP = 379,
    /// Swaps `DE` and `HL`.
    EX_DE_HL = 380,
    /// Loads `HL` into `SP`.
    LD_SP_HL = 381,
    /// `LD BC,nn`.
    LD_BC_NN = 382,
    /// `LD DE,nn`.
    LD_DE_NN = 383,
    /// `LD HL,nn`.
    LD_HL_NN = 384,
    /// `LD SP,nn`.
    LD_SP_NN = 385,
    /// `ADC HL,BC`. Full flag computation.
    ADC_HL_BC = 386,
    /// `ADC HL,DE`. Full flag computation.
    ADC_HL_DE = 387,
    /// `ADC HL,HL`. Full flag computation.
    ADC_HL_HL = 388,
    /// `ADC HL,SP`. Full flag computation.
    ADC_HL_SP = 389,
    /// `SBC HL,BC`. Full flag computation.
    SBC_HL_BC = 390,
    /// `SBC HL,DE`. Full flag computation.
    SBC_HL_DE = 391,
    /// `SBC HL,HL`. Full flag computation.
    SBC_HL_HL = 392,
    /// `SBC HL,SP`. Full flag computation.
    SBC_HL_SP = 393,
    #[cfg(feature = "mem-ops")]
    /// Loads the virtual memory byte into `A`. `LD A,(HL)`.
    LD_A_MHL = 394,
    #[cfg(feature = "mem-ops")]
    /// Loads the virtual memory byte into `B`. `LD B,(HL)`.
    LD_B_MHL = 395,
    #[cfg(feature = "mem-ops")]
    /// Loads the virtual memory byte into `C`. `LD C,(HL)`.
    LD_C_MHL = 396,
    #[cfg(feature = "mem-ops")]
    /// Loads the virtual memory byte into `D`. `LD D,(HL)`.
    LD_D_MHL = 397,
    #[cfg(feature = "mem-ops")]
    /// Loads the virtual memory byte into `E`. `LD E,(HL)`.
    LD_E_MHL = 398,
    #[cfg(feature = "mem-ops")]
    /// Loads the virtual memory byte into `H`. `LD H,(HL)`.
    LD_H_MHL = 399,
    #[cfg(feature = "mem-ops")]
    /// Loads the virtual memory byte into `L`. `LD L,(HL)`.
    LD_L_MHL = 400,
    #[cfg(feature = "mem-ops")]
    /// Stores `A` into the virtual memory byte. `LD (HL),A`.
    LD_MHL_A = 401,
    #[cfg(feature = "mem-ops")]
    /// Stores `B` into the virtual memory byte. `LD (HL),B`.
    LD_MHL_B = 402,
    #[cfg(feature = "mem-ops")]
    /// Stores `C` into the virtual memory byte. `LD (HL),C`.
    LD_MHL_C = 403,
    #[cfg(feature = "mem-ops")]
    /// Stores `D` into the virtual memory byte. `LD (HL),D`.
    LD_MHL_D = 404,
    #[cfg(feature = "mem-ops")]
    /// Stores `E` into the virtual memory byte. `LD (HL),E`.
    LD_MHL_E = 405,
    #[cfg(feature = "mem-ops")]
    /// Stores `H` into the virtual memory byte. `LD (HL),H`.
    LD_MHL_H = 406,
    #[cfg(feature = "mem-ops")]
    /// Stores `L` into the virtual memory byte. `LD (HL),L`.
    LD_MHL_L = 407,
    #[cfg(feature = "mem-ops")]
    /// Stores an 8-bit immediate into the virtual memory byte. `LD (HL),n`.
    LD_MHL_N = 408,
    #[cfg(feature = "mem-ops")]
    /// `ADD A,(HL)`.
    ADD_A_MHL = 409,
    #[cfg(feature = "mem-ops")]
    /// `ADC A,(HL)`.
    ADC_A_MHL = 410,
    #[cfg(feature = "mem-ops")]
    /// `SUB A,(HL)`.
    SUB_A_MHL = 411,
    #[cfg(feature = "mem-ops")]
    /// `SBC A,(HL)`.
    SBC_A_MHL = 412,
    #[cfg(feature = "mem-ops")]
    /// `AND A,(HL)`.
    AND_A_MHL = 413,
    #[cfg(feature = "mem-ops")]
    /// `XOR A,(HL)`.
    XOR_A_MHL = 414,
    #[cfg(feature = "mem-ops")]
    /// `OR A,(HL)`.
    OR_A_MHL = 415,
    #[cfg(feature = "mem-ops")]
    /// `CP A,(HL)`.
    CP_A_MHL = 416,
    #[cfg(feature = "mem-ops")]
    /// `INC (HL)`.
    INC_MHL = 417,
    #[cfg(feature = "mem-ops")]
    /// `DEC (HL)`.
    DEC_MHL = 418,
    #[cfg(feature = "mem-ops")]
    /// `RLC (HL)`.
    RLC_MHL = 419,
    #[cfg(feature = "mem-ops")]
    /// `RRC (HL)`.
    RRC_MHL = 420,
    #[cfg(feature = "mem-ops")]
    /// `RL (HL)`.
    RL_MHL = 421,
    #[cfg(feature = "mem-ops")]
    /// `RR (HL)`.
    RR_MHL = 422,
    #[cfg(feature = "mem-ops")]
    /// `SLA (HL)`.
    SLA_MHL = 423,
    #[cfg(feature = "mem-ops")]
    /// `SRA (HL)`.
    SRA_MHL = 424,
    #[cfg(feature = "mem-ops")]
    /// `SLL (HL)`. Undocumented: shifts left, injecting 1 into bit 0.
    SLL_MHL = 425,
    #[cfg(feature = "mem-ops")]
    /// `SRL (HL)`.
    SRL_MHL = 426,
    #[cfg(feature = "mem-ops")]
    /// `BIT 0,(HL)`. Tests bit 0 of the virtual memory byte.
    BIT_0_MHL = 427,
    #[cfg(feature = "mem-ops")]
    /// `BIT 1,(HL)`. Tests bit 1 of the virtual memory byte.
    BIT_1_MHL = 428,
    #[cfg(feature = "mem-ops")]
    /// `BIT 2,(HL)`. Tests bit 2 of the virtual memory byte.
    BIT_2_MHL = 429,
    #[cfg(feature = "mem-ops")]
    /// `BIT 3,(HL)`. Tests bit 3 of the virtual memory byte.
    BIT_3_MHL = 430,
    #[cfg(feature = "mem-ops")]
    /// `BIT 4,(HL)`. Tests bit 4 of the virtual memory byte.
    BIT_4_MHL = 431,
    #[cfg(feature = "mem-ops")]
    /// `BIT 5,(HL)`. Tests bit 5 of the virtual memory byte.
    BIT_5_MHL = 432,
    #[cfg(feature = "mem-ops")]
    /// `BIT 6,(HL)`. Tests bit 6 of the virtual memory byte.
    BIT_6_MHL = 433,
    #[cfg(feature = "mem-ops")]
    /// `BIT 7,(HL)`. Tests bit 7 of the virtual memory byte.
    BIT_7_MHL = 434,
    #[cfg(feature = "mem-ops")]
    /// `RES 0,(HL)`. No flags affected.
    RES_0_MHL = 435,
    #[cfg(feature = "mem-ops")]
    /// `RES 1,(HL)`. No flags affected.
    RES_1_MHL = 436,
    #[cfg(feature = "mem-ops")]
    /// `RES 2,(HL)`. No flags affected.
    RES_2_MHL = 437,
    #[cfg(feature = "mem-ops")]
    /// `RES 3,(HL)`. No flags affected.
    RES_3_MHL = 438,
    #[cfg(feature = "mem-ops")]
    /// `RES 4,(HL)`. No flags affected.
    RES_4_MHL = 439,
    #[cfg(feature = "mem-ops")]
    /// `RES 5,(HL)`. No flags affected.
    RES_5_MHL = 440,
    #[cfg(feature = "mem-ops")]
    /// `RES 6,(HL)`. No flags affected.
    RES_6_MHL = 441,
    #[cfg(feature = "mem-ops")]
    /// `RES 7,(HL)`. No flags affected.
    RES_7_MHL = 442,
    #[cfg(feature = "mem-ops")]
    /// `SET 0,(HL)`. No flags affected.
    SET_0_MHL = 443,
    #[cfg(feature = "mem-ops")]
    /// `SET 1,(HL)`. No flags affected.
    SET_1_MHL = 444,
    #[cfg(feature = "mem-ops")]
    /// `SET 2,(HL)`. No flags affected.
    SET_2_MHL = 445,
    #[cfg(feature = "mem-ops")]
    /// `SET 3,(HL)`. No flags affected.
    SET_3_MHL = 446,
    #[cfg(feature = "mem-ops")]
    /// `SET 4,(HL)`. No flags affected.
    SET_4_MHL = 447,
    #[cfg(feature = "mem-ops")]
    /// `SET 5,(HL)`. No flags affected.
    SET_5_MHL = 448,
    #[cfg(feature = "mem-ops")]
    /// `SET 6,(HL)`. No flags affected.
    SET_6_MHL = 449,
    #[cfg(feature = "mem-ops")]
    /// `SET 7,(HL)`. No flags affected.
    SET_7_MHL = 450,
    #[cfg(feature = "mem-ops")]
    /// Loads the virtual memory byte into `A`. `LD A,(BC)`.
    LD_A_MBC = 451,
    #[cfg(feature = "mem-ops")]
    /// Stores `A` into the virtual memory byte. `LD (BC),A`.
    LD_MBC_A = 452,
    #[cfg(feature = "mem-ops")]
    /// Loads the virtual memory byte into `A`. `LD A,(DE)`.
    LD_A_MDE = 453,
    #[cfg(feature = "mem-ops")]
    /// Stores `A` into the virtual memory byte. `LD (DE),A`.
    LD_MDE_A = 454,
}

