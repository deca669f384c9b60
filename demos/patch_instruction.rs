//! Patching instructions over memory, the way a debugger's "assemble here"
//! command does.
//!
//! Run with: `cargo run --example patch_instruction`

use codec6502::{assemble, disassemble_at, CpuContext, DisassemblyOptions, FlatMemory};

fn main() {
    let mut memory = FlatMemory::new();
    let cpu = CpuContext::default();
    let options = DisassemblyOptions::default();

    let patches = [
        (0x8000, "LDX #$00"),
        (0x8002, "lda $0300,x"),
        (0x8005, "beq $800D"),
        (0x8007, "JSR $FFD2 ; print it"),
        (0x800A, "INX"),
        (0x800B, "BNE $8002"),
        (0x800D, "RTS"),
        (0x800E, "BNE $9000"),
        (0x800E, "STX $1000,Y"),
    ];

    for (address, line) in patches {
        match assemble(address, line) {
            Ok(instr) => {
                memory.load(address, instr.as_bytes());
                println!(
                    "{:04X}: {:<9} {}",
                    address,
                    hex(instr.as_bytes()),
                    disassemble_at(&memory, &cpu, address, &options)
                );
            }
            Err(err) => println!("{:04X}: error: {} (`{}`)", address, err, line),
        }
    }
}

fn hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02X}", b))
        .collect::<Vec<_>>()
        .join(" ")
}
