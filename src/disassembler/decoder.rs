//! Instruction decoder for the 6502 disassembler
//!
//! Holds the addressing-mode arithmetic shared by both renderers: operand
//! extraction, branch targets, and effective address resolution against live
//! registers and memory.

use crate::addressing::AddressingMode;
use crate::cpu::CpuContext;
use crate::disassembler::{formatter, DecodedInstruction, DisassemblyOptions};
use crate::memory::MemoryBus;
use crate::opcodes::{lookup_by_opcode, Flow, OpcodeMetadata};

/// Decode a single instruction from a byte slice
///
/// # Arguments
///
/// * `address` - The memory address of this instruction
/// * `bytes` - The opcode followed by up to two operand bytes
/// * `memory` - Memory read for effective values and indirect pointers
/// * `cpu` - Index registers used by indexed modes
/// * `options` - Rendering options
///
/// # Returns
///
/// Some(DecodedInstruction) if the opcode is defined, None for undefined
/// opcodes or an empty slice
pub fn decode<M: MemoryBus + ?Sized>(
    address: u16,
    bytes: &[u8],
    memory: &M,
    cpu: &CpuContext,
    options: &DisassemblyOptions,
) -> Option<DecodedInstruction> {
    let opcode = *bytes.first()?;
    let metadata = lookup_by_opcode(opcode)?;

    let operand_bytes: Vec<u8> = (1..=metadata.operand_len() as usize)
        .map(|i| byte_at(bytes, i))
        .collect();
    let operand = operand_value(metadata, bytes);
    let resolved = effective_address(metadata, address, operand, memory, cpu);

    let (effective_address, effective_value) = match (metadata.addressing_mode, metadata.flow) {
        (AddressingMode::Relative, _) => (None, None),
        (AddressingMode::Absolute, Flow::Jump | Flow::Call) => (None, None),
        (AddressingMode::Indirect, _) => (resolved, None),
        _ => (resolved, resolved.map(|addr| memory.read(addr))),
    };

    let brk_signature = (options.brk_signature && metadata.flow == Flow::Break)
        .then(|| [byte_at(bytes, 1), byte_at(bytes, 2)]);

    Some(DecodedInstruction {
        address,
        opcode,
        mnemonic: metadata.mnemonic,
        addressing_mode: metadata.addressing_mode,
        flow: metadata.flow,
        operand_bytes,
        rendered_operand: formatter::format_operand(metadata.addressing_mode, operand, address),
        effective_address,
        effective_value,
        brk_signature,
    })
}

/// Read the three bytes an instruction at `address` may occupy.
pub fn fetch<M: MemoryBus + ?Sized>(memory: &M, address: u16) -> [u8; 3] {
    [
        memory.read(address),
        memory.read(address.wrapping_add(1)),
        memory.read(address.wrapping_add(2)),
    ]
}

/// Size of the instruction starting with `opcode`; undefined opcodes count
/// as one byte so a linear sweep always makes progress.
pub fn instruction_size(opcode: u8) -> u8 {
    lookup_by_opcode(opcode).map_or(1, |metadata| metadata.size_bytes())
}

/// The operand as a number: one byte zero-extended, or a little-endian word.
pub fn operand_value(metadata: &OpcodeMetadata, bytes: &[u8]) -> u16 {
    match metadata.operand_len() {
        1 => byte_at(bytes, 1) as u16,
        2 => u16::from_le_bytes([byte_at(bytes, 1), byte_at(bytes, 2)]),
        _ => 0,
    }
}

/// Target of a branch at `address` with displacement byte `offset`.
pub fn branch_target(address: u16, offset: u8) -> u16 {
    address.wrapping_add(2).wrapping_add(offset as i8 as u16)
}

/// Resolve the address an instruction refers to.
///
/// Returns `None` for implied and immediate modes. Branches resolve to their
/// target and `JMP (ind)` to the address read through its pointer; every
/// other mode resolves to the memory location it reads or writes.
pub fn effective_address<M: MemoryBus + ?Sized>(
    metadata: &OpcodeMetadata,
    address: u16,
    operand: u16,
    memory: &M,
    cpu: &CpuContext,
) -> Option<u16> {
    use AddressingMode::*;

    let mode = metadata.addressing_mode;
    let zp = operand as u8;
    let index = mode.index_register().map_or(0, |register| cpu.index(register));

    let ea = match mode {
        Implied | Immediate => return None,
        Relative => branch_target(address, zp),
        ZeroPage | ZeroPageX | ZeroPageY => zp.wrapping_add(index) as u16,
        Absolute | AbsoluteX | AbsoluteY => operand.wrapping_add(index as u16),
        Indirect => memory.read_word(operand),
        IndirectX => memory.read_zero_page_word(zp.wrapping_add(index)),
        IndirectY => memory.read_zero_page_word(zp).wrapping_add(index as u16),
    };
    Some(ea)
}

fn byte_at(bytes: &[u8], index: usize) -> u8 {
    bytes.get(index).copied().unwrap_or(0)
}
