//! Walks a small routine showing the live-state disassembly and the bank
//! location of each instruction.
//!
//! Run with: `cargo run --example trace_listing`

use codec6502::disassembler::decoder::{fetch, instruction_size};
use codec6502::{
    disassemble_at, disassemble_location, CpuContext, DisassemblyOptions, FlatMemory,
    MemoryBus, PrgBankMap,
};

fn main() {
    let mut memory = FlatMemory::new();

    // Copy loop over a pointer in zero page
    memory.load(
        0xC000,
        &[
            0xA0, 0x00, // LDY #$00
            0xB1, 0x20, // LDA ($20),Y
            0x9D, 0x00, 0x02, // STA $0200,X
            0xC8, // INY
            0xD0, 0xF8, // BNE $C002
            0x6C, 0xFC, 0xFF, // JMP ($FFFC)
        ],
    );
    memory.write(0x0020, 0x00);
    memory.write(0x0021, 0x90);
    memory.load(0x9000, b"HELLO");
    memory.load(0xFFFC, &[0x00, 0xC0]);

    // UxROM with 8 banks: bank 3 switched in at $8000, bank 7 fixed at $C000
    let banks = PrgBankMap::new(0x4000, 0x8000, vec![3, 7]).expect("valid bank geometry");
    let cpu = CpuContext::new(0x04, 0x01, 0xFD);
    let options = DisassemblyOptions::default();

    let mut address = 0xC000u16;
    while address < 0xC00D {
        let bytes = fetch(&memory, address);
        println!(
            "{:04X}: {:<28} {}",
            address,
            disassemble_at(&memory, &cpu, address, &options),
            disassemble_location(address, &bytes, &memory, &cpu, &banks)
        );
        address = address.wrapping_add(instruction_size(memory.read(address)) as u16);
    }
}
