//! Fuzz target for the assembler.
//!
//! This target feeds arbitrary lines to the assembler to find
//! edge cases, panics, and crashes in parsing and encoding.

#![no_main]

use arbitrary::Arbitrary;
use codec6502::{assemble, assemble_into, lookup_by_opcode};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    address: u16,
    line: Vec<u8>,
}

fuzz_target!(|input: FuzzInput| {
    // Lossy conversion exercises more edge cases in string handling
    let line = String::from_utf8_lossy(&input.line);

    let mut buffer = [0xFF; 3];
    match assemble_into(&mut buffer, input.address, &line) {
        Ok(()) => {
            // Only documented opcodes may be emitted
            let entry = lookup_by_opcode(buffer[0]).expect("assembler emitted undefined opcode");
            let size = entry.size_bytes() as usize;
            assert!(buffer[size..].iter().all(|&b| b == 0));
        }
        Err(_) => assert_eq!(buffer, [0, 0, 0]),
    }

    let _ = assemble(input.address, &line);
});
