//! WebAssembly bindings for the instruction codec.
//!
//! This module provides JavaScript-callable interfaces to the single-line
//! assembler and the memory-aware disassembler, so a browser debugger can
//! patch and display instructions.

#[cfg(feature = "wasm")]
pub mod api;

#[cfg(feature = "wasm")]
pub use api::{assemble_instruction, disassemble_instruction, AssemblyResult};
