//! 6502 Disassembler Module
//!
//! Converts the bytes of one instruction back into text. Unlike a static
//! disassembler, the output reflects the machine's current state: the
//! effective address of indexed and indirect operands is resolved with the
//! live X/Y registers and the byte stored there is read from memory. This is
//! what a debugger shows next to the instruction about to execute.
//!
//! Two renderers share the same addressing arithmetic ([`decoder`]):
//!
//! - [`disassemble`] produces human-readable text (`LDA $10,X @ $0015 = #$3F`)
//! - [`locator::disassemble_location`] produces a `fileOffset|bank|value`
//!   triple for tools that correlate references with cartridge storage
//!
//! Neither can fail: undefined opcodes render as a marker, because these
//! functions run against arbitrary memory while stepping.

pub mod decoder;
pub mod formatter;
pub mod locator;

use std::fmt;

use tracing::trace;

use crate::addressing::AddressingMode;
use crate::cpu::CpuContext;
use crate::memory::MemoryBus;
use crate::opcodes::Flow;

/// Text rendered for an opcode byte with no table entry.
pub const UNKNOWN_INSTRUCTION: &str = "???";

/// A single decoded instruction together with its resolved operand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedInstruction {
    /// Memory address where this instruction starts
    pub address: u16,

    /// The opcode byte value (0x00-0xFF)
    pub opcode: u8,

    /// Instruction mnemonic (e.g., "LDA", "STA", "JMP")
    pub mnemonic: &'static str,

    /// Addressing mode used by this instruction
    pub addressing_mode: AddressingMode,

    /// Control-flow class from the opcode table
    pub flow: Flow,

    /// Operand bytes (0-2 bytes depending on addressing mode)
    pub operand_bytes: Vec<u8>,

    /// Operand in assembler syntax, e.g. `#$05`, `$10,X`, `($20),Y`.
    /// Branches show the absolute target. Empty for implied instructions.
    pub rendered_operand: String,

    /// Address the instruction reads or writes, for modes that dereference
    /// memory. For `JMP (ind)` this is the jump target read through the pointer.
    pub effective_address: Option<u16>,

    /// Byte currently stored at `effective_address` (data instructions only).
    pub effective_value: Option<u8>,

    /// The two bytes following BRK, when requested by the options.
    pub brk_signature: Option<[u8; 2]>,
}

impl DecodedInstruction {
    /// Total size in bytes (1-3 bytes: opcode + operands)
    pub fn size_bytes(&self) -> u8 {
        1 + self.operand_bytes.len() as u8
    }

    /// Mnemonic and operand only, without the resolved annotation.
    ///
    /// The result assembles back to the same opcode at the same address,
    /// except where a zero page operand was written with an absolute opcode.
    pub fn source_text(&self) -> String {
        if self.rendered_operand.is_empty() {
            self.mnemonic.to_string()
        } else {
            format!("{} {}", self.mnemonic, self.rendered_operand)
        }
    }
}

impl fmt::Display for DecodedInstruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&formatter::format_instruction(self))
    }
}

/// Options controlling disassembly output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisassemblyOptions {
    /// Render BRK together with the two bytes that follow it
    /// (`BRK 12 34`), for code that uses them as a signature.
    pub brk_signature: bool,
}

/// Disassemble one instruction at `address` with default options.
///
/// `bytes` holds the opcode and up to two operand bytes; missing operand
/// bytes read as zero.
///
/// # Examples
///
/// ```
/// use codec6502::{disassemble, CpuContext, FlatMemory};
///
/// let memory = FlatMemory::new();
/// let text = disassemble(0x8000, &[0xA9, 0x05], &memory, &CpuContext::default());
/// assert_eq!(text, "LDA #$05");
/// ```
pub fn disassemble<M: MemoryBus + ?Sized>(
    address: u16,
    bytes: &[u8],
    memory: &M,
    cpu: &CpuContext,
) -> String {
    disassemble_with(address, bytes, memory, cpu, &DisassemblyOptions::default())
}

/// Disassemble one instruction at `address`.
///
/// Returns [`UNKNOWN_INSTRUCTION`] for undefined opcodes and for an empty
/// byte slice.
pub fn disassemble_with<M: MemoryBus + ?Sized>(
    address: u16,
    bytes: &[u8],
    memory: &M,
    cpu: &CpuContext,
    options: &DisassemblyOptions,
) -> String {
    match decoder::decode(address, bytes, memory, cpu, options) {
        Some(instr) => formatter::format_instruction(&instr),
        None => {
            trace!(address, opcode = ?bytes.first(), "undefined opcode");
            UNKNOWN_INSTRUCTION.to_string()
        }
    }
}

/// Disassemble the instruction stored in `memory` at `address`.
pub fn disassemble_at<M: MemoryBus + ?Sized>(
    memory: &M,
    cpu: &CpuContext,
    address: u16,
    options: &DisassemblyOptions,
) -> String {
    let bytes = decoder::fetch(memory, address);
    disassemble_with(address, &bytes, memory, cpu, options)
}
