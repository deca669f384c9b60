//! Fuzz target for the disassembler.
//!
//! This target feeds arbitrary instruction bytes, registers and memory
//! to both renderers to find edge cases and crashes in decoding.

#![no_main]

use arbitrary::Arbitrary;
use codec6502::disassembler::decoder::decode;
use codec6502::{
    assemble, disassemble_location, disassemble_with, AddressingMode, CpuContext,
    DisassemblyOptions, PrgBankMap, SnapshotMemory, UNKNOWN_INSTRUCTION,
};
use libfuzzer_sys::fuzz_target;

/// Complete fuzz input
#[derive(Debug, Arbitrary)]
struct FuzzInput {
    address: u16,
    bytes: Vec<u8>,
    memory: Vec<u8>,
    x: u8,
    y: u8,
    sp: u8,
    brk_signature: bool,
    banks: Vec<u8>,
}

fuzz_target!(|input: FuzzInput| {
    // Limit input size to prevent OOM
    if input.memory.len() > 65536 || input.bytes.len() > 3 {
        return;
    }

    let memory = SnapshotMemory::new(input.memory);
    let cpu = CpuContext::new(input.x, input.y, input.sp);
    let options = DisassemblyOptions {
        brk_signature: input.brk_signature,
    };

    let text = disassemble_with(input.address, &input.bytes, &memory, &cpu, &options);
    assert!(!text.is_empty());

    // Without annotations the text must assemble again, except absolute
    // indexed forms written with a zero page sized operand
    let decoded = decode(input.address, &input.bytes, &memory, &cpu, &options);
    let narrow_indexed = decoded.as_ref().map_or(false, |instr| {
        matches!(
            instr.addressing_mode,
            AddressingMode::AbsoluteX | AddressingMode::AbsoluteY
        ) && instr.operand_bytes.get(1) == Some(&0)
    });
    if !options.brk_signature && text != UNKNOWN_INSTRUCTION && !narrow_indexed {
        let source = text.split(" = ").next().unwrap_or(&text);
        let source = source.split(" @ ").next().unwrap_or(source);
        assert!(assemble(input.address, source).is_ok(), "`{}` did not assemble", source);
    }

    let banks = input.banks.iter().map(|&b| b as usize).collect();
    if let Some(map) = PrgBankMap::new(0x2000, 0x8000, banks) {
        let location = disassemble_location(input.address, &input.bytes, &memory, &cpu, &map);
        assert!(!location.is_empty());
    }
});
