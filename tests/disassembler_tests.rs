//! Integration tests for the memory-aware 6502 disassembler

use codec6502::{
    disassemble, disassemble_at, disassemble_with, lookup_by_opcode, CpuContext,
    DisassemblyOptions, FlatMemory, MemoryBus, UNKNOWN_INSTRUCTION,
};

fn memory_with(writes: &[(u16, u8)]) -> FlatMemory {
    let mut mem = FlatMemory::new();
    for &(addr, value) in writes {
        mem.write(addr, value);
    }
    mem
}

#[test]
fn test_single_instruction_disassembly() {
    let mem = FlatMemory::new();
    let text = disassemble(0x8000, &[0xA9, 0x05], &mem, &CpuContext::default());
    assert_eq!(text, "LDA #$05");
}

#[test]
fn test_undefined_opcode_marker() {
    let mem = FlatMemory::new();
    let cpu = CpuContext::default();
    assert_eq!(disassemble(0x8000, &[0x02], &mem, &cpu), UNKNOWN_INSTRUCTION);
    assert_eq!(disassemble(0x8000, &[0xFF, 0x12, 0x34], &mem, &cpu), UNKNOWN_INSTRUCTION);
}

#[test]
fn test_implied_instructions() {
    let mem = FlatMemory::new();
    let cpu = CpuContext::default();
    assert_eq!(disassemble(0, &[0xEA], &mem, &cpu), "NOP");
    assert_eq!(disassemble(0, &[0x0A], &mem, &cpu), "ASL");
    assert_eq!(disassemble(0, &[0x60], &mem, &cpu), "RTS");
    assert_eq!(disassemble(0, &[0x00], &mem, &cpu), "BRK");
}

#[test]
fn test_zero_page_shows_value() {
    let mem = memory_with(&[(0x0010, 0x05)]);
    let text = disassemble(0, &[0xA5, 0x10], &mem, &CpuContext::default());
    assert_eq!(text, "LDA $10 = #$05");
}

#[test]
fn test_zero_page_indexed_wraps() {
    let mem = memory_with(&[(0x0015, 0x3F), (0x000F, 0x77)]);
    let cpu = CpuContext::new(0x05, 0x10, 0xFD);
    assert_eq!(
        disassemble(0, &[0xB5, 0x10], &mem, &cpu),
        "LDA $10,X @ $0015 = #$3F"
    );
    // $FF + Y stays on the zero page
    assert_eq!(
        disassemble(0, &[0xB6, 0xFF], &mem, &cpu),
        "LDX $FF,Y @ $000F = #$77"
    );
}

#[test]
fn test_absolute_data_and_jumps() {
    let mem = memory_with(&[(0x1234, 0x05)]);
    let cpu = CpuContext::default();
    assert_eq!(
        disassemble(0, &[0xAD, 0x34, 0x12], &mem, &cpu),
        "LDA $1234 = #$05"
    );
    assert_eq!(disassemble(0xC000, &[0x4C, 0x10, 0xC0], &mem, &cpu), "JMP $C010");
    assert_eq!(disassemble(0xC000, &[0x20, 0xD2, 0xFF], &mem, &cpu), "JSR $FFD2");
}

#[test]
fn test_absolute_indexed() {
    let mem = memory_with(&[(0x1238, 0x05), (0x0003, 0x09)]);
    let cpu = CpuContext::new(0x04, 0x04, 0xFD);
    assert_eq!(
        disassemble(0, &[0xBD, 0x34, 0x12], &mem, &cpu),
        "LDA $1234,X @ $1238 = #$05"
    );
    // Wraps at the top of the address space
    assert_eq!(
        disassemble(0, &[0x99, 0xFF, 0xFF], &mem, &cpu),
        "STA $FFFF,Y @ $0003 = #$09"
    );
}

#[test]
fn test_indirect_jump_shows_target() {
    let mem = memory_with(&[(0x1234, 0x78), (0x1235, 0x56)]);
    let text = disassemble(0, &[0x6C, 0x34, 0x12], &mem, &CpuContext::default());
    assert_eq!(text, "JMP ($1234) = $5678");
}

#[test]
fn test_indexed_indirect() {
    let mem = memory_with(&[(0x0014, 0x34), (0x0015, 0x12), (0x1234, 0x05)]);
    let cpu = CpuContext::new(0x04, 0x00, 0xFD);
    assert_eq!(
        disassemble(0, &[0xA1, 0x10], &mem, &cpu),
        "LDA ($10,X) @ $1234 = #$05"
    );
}

#[test]
fn test_indirect_indexed() {
    let mem = memory_with(&[(0x0010, 0x30), (0x0011, 0x12), (0x1234, 0x05)]);
    let cpu = CpuContext::new(0x00, 0x04, 0xFD);
    assert_eq!(
        disassemble(0, &[0xB1, 0x10], &mem, &cpu),
        "LDA ($10),Y @ $1234 = #$05"
    );
}

#[test]
fn test_relative_branch_targets() {
    let mem = FlatMemory::new();
    let cpu = CpuContext::default();
    assert_eq!(disassemble(0x8000, &[0xD0, 0x0E], &mem, &cpu), "BNE $8010");
    assert_eq!(disassemble(0x8000, &[0xF0, 0xFE], &mem, &cpu), "BEQ $8000");
    assert_eq!(disassemble(0x8000, &[0x10, 0x80], &mem, &cpu), "BPL $7F82");
}

#[test]
fn test_missing_operand_bytes_read_as_zero() {
    let mem = memory_with(&[(0x0000, 0x11)]);
    let cpu = CpuContext::default();
    assert_eq!(disassemble(0, &[0xA5], &mem, &cpu), "LDA $00 = #$11");
    assert_eq!(disassemble(0, &[0x4C, 0x10], &mem, &cpu), "JMP $0010");
}

#[test]
fn test_brk_signature_option() {
    let mem = FlatMemory::new();
    let cpu = CpuContext::default();
    let bytes = [0x00, 0x12, 0x34];

    assert_eq!(disassemble(0, &bytes, &mem, &cpu), "BRK");

    let options = DisassemblyOptions { brk_signature: true };
    assert_eq!(disassemble_with(0, &bytes, &mem, &cpu, &options), "BRK 12 34");
}

#[test]
fn test_disassemble_at_fetches_from_memory() {
    let mut mem = FlatMemory::new();
    mem.load(0xFFFE, &[0xAD, 0x00]);
    mem.write(0x0000, 0x02);
    mem.write(0x0200, 0xAA);
    let text = disassemble_at(&mem, &CpuContext::default(), 0xFFFE, &Default::default());
    assert_eq!(text, "LDA $0200 = #$AA");
}

#[test]
fn test_every_first_byte_disassembles() {
    let mem = memory_with(&[(0x1234, 0x56), (0x0034, 0x78)]);
    let cpu = CpuContext::new(0x01, 0x02, 0xFD);

    for opcode in 0..=0xFFu8 {
        let text = disassemble(0x8000, &[opcode, 0x34, 0x12], &mem, &cpu);
        assert!(!text.is_empty(), "opcode {opcode:02X}");
        match lookup_by_opcode(opcode) {
            Some(entry) => assert!(text.starts_with(entry.mnemonic), "opcode {opcode:02X}: {text}"),
            None => assert_eq!(text, UNKNOWN_INSTRUCTION, "opcode {opcode:02X}"),
        }
    }
}
