//! WASM API for the instruction codec.
//!
//! JavaScript owns the emulator; it passes the relevant state (registers and a
//! copy of memory) into each call.

use crate::{assemble, disassemble_with, CpuContext, DisassemblyOptions, SnapshotMemory};
use wasm_bindgen::prelude::*;

/// Result of assembling one line
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct AssemblyResult {
    success: bool,
    bytes: Vec<u8>,
    error_message: Option<String>,
}

#[wasm_bindgen]
impl AssemblyResult {
    #[wasm_bindgen(getter)]
    pub fn success(&self) -> bool {
        self.success
    }

    /// The instruction bytes (1-3), empty on failure
    #[wasm_bindgen(getter)]
    pub fn bytes(&self) -> Vec<u8> {
        self.bytes.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn error_message(&self) -> Option<String> {
        self.error_message.clone()
    }
}

/// Assemble one line of source for the instruction at `address`
#[wasm_bindgen]
pub fn assemble_instruction(address: u16, line: &str) -> AssemblyResult {
    match assemble(address, line) {
        Ok(instr) => AssemblyResult {
            success: true,
            bytes: instr.as_bytes().to_vec(),
            error_message: None,
        },
        Err(err) => AssemblyResult {
            success: false,
            bytes: Vec::new(),
            error_message: Some(err.to_string()),
        },
    }
}

/// Disassemble one instruction against a memory image
///
/// `memory` is indexed by CPU address; addresses past its end read as zero.
#[wasm_bindgen]
pub fn disassemble_instruction(
    address: u16,
    bytes: &[u8],
    memory: js_sys::Uint8Array,
    x: u8,
    y: u8,
    sp: u8,
    brk_signature: bool,
) -> String {
    let memory = SnapshotMemory::from(memory.to_vec());
    let cpu = CpuContext::new(x, y, sp);
    let options = DisassemblyOptions { brk_signature };
    disassemble_with(address, bytes, &memory, &cpu, &options)
}
