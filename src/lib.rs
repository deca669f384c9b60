//! # 6502 Instruction Codec
//!
//! Single-instruction assembler and memory-aware disassembler for the NMOS
//! 6502, built for debugger tooling rather than for whole programs.
//!
//! The crate answers three questions a debugger asks about one instruction:
//!
//! - What bytes does this line of assembly become at this address?
//! - What does the instruction at this address do, given the current X, Y and
//!   memory contents?
//! - Which byte of the ROM file does it touch, given the current bank mapping?
//!
//! ## Quick Start
//!
//! ```rust
//! use codec6502::{assemble, disassemble, CpuContext, FlatMemory, MemoryBus};
//!
//! // Patch an instruction into memory
//! let mut memory = FlatMemory::new();
//! let instr = assemble(0x8000, "lda $10,x").unwrap();
//! memory.load(0x8000, instr.as_bytes());
//!
//! // Show it the way a debugger would, with X = 5
//! memory.write(0x0015, 0x3F);
//! let cpu = CpuContext::new(0x05, 0x00, 0xFD);
//! let text = disassemble(0x8000, instr.as_bytes(), &memory, &cpu);
//! assert_eq!(text, "LDA $10,X @ $0015 = #$3F");
//! ```
//!
//! ## Architecture
//!
//! - **Table-Driven Design**: every legal opcode is described once in
//!   [`opcodes`]; the assembler, both disassemblers and the tests all derive
//!   from that table
//! - **Collaborators as Traits**: live memory ([`MemoryBus`]) and the bank
//!   mapper ([`BankResolver`]) are supplied by the caller
//! - **WebAssembly Portability**: no OS dependencies in the library; browser
//!   bindings live behind the `wasm` feature
//!
//! ## Modules
//!
//! - `addressing` - Addressing mode enumerations
//! - `opcodes` - Opcode metadata table
//! - `assembler` - Line to bytes
//! - `disassembler` - Bytes to text, and to bank locations
//! - `memory` - MemoryBus trait and implementations
//! - `cpu` - Register snapshot used for effective address resolution
//! - `bank` - BankResolver trait and a PRG bank window

pub mod addressing;
pub mod assembler;
pub mod bank;
pub mod cpu;
pub mod disassembler;
pub mod memory;
pub mod opcodes;

pub mod wasm;

// Re-export public API
pub use addressing::{AddressingMode, IndexRegister};
pub use assembler::{assemble, assemble_into, AssembleError, AssembledInstruction};
pub use bank::{BankResolver, PrgBankMap};
pub use cpu::CpuContext;
pub use disassembler::locator::{disassemble_location, resolve_location, EffectiveLocation};
pub use disassembler::{
    disassemble, disassemble_at, disassemble_with, DecodedInstruction, DisassemblyOptions,
    UNKNOWN_INSTRUCTION,
};
pub use memory::{FlatMemory, MemoryBus, SnapshotMemory};
pub use opcodes::{
    is_mnemonic, lookup_by_mnemonic_and_mode, lookup_by_opcode, Flow, OpcodeMetadata,
    INSTRUCTIONS, OPCODE_TABLE,
};
