//! Bit-exact Z80 register state, the closed opcode set, and the ALU core
//! that executes one instruction at a time against that state.
//!
//! This crate has no notion of a program counter, memory bus, or timing
//! beyond the static T-state count attached to each opcode: it is the
//! substrate a brute-force equivalence search is built on, not an
//! emulator for running real programs. See `z80-opt` for the search.

#![warn(missing_docs)]
#![deny(unsafe_code)]
#![deny(unused_must_use)]

mod executor;
mod metadata;
mod opcode;
mod instruction;
pub mod state;
pub mod tables;

pub use executor::execute_one;
pub use instruction::{sequence_to_asm_string, Instruction};
pub use metadata::{OpMeta, RegMask};
pub use opcode::Opcode;
pub use state::Z80State;
