//! 6502 Assembler Module
//!
//! Converts one line of assembly text into the 1-3 bytes of a single
//! instruction located at a known address. There is no symbol table and no
//! multi-line state: this is the "type an instruction over memory" half of a
//! debugger's patch feature.
//!
//! The work is split in two phases:
//!
//! 1. [`parser`] normalizes the line and classifies the operand syntax
//! 2. [`encoder`] picks the table entry for the mnemonic and syntax and emits bytes
//!
//! # Examples
//!
//! ```
//! use codec6502::assemble;
//!
//! let instr = assemble(0x8000, "lda #$05").unwrap();
//! assert_eq!(instr.as_bytes(), &[0xA9, 0x05]);
//!
//! let jump = assemble(0xC000, "JMP $C010").unwrap();
//! assert_eq!(jump.as_bytes(), &[0x4C, 0x10, 0xC0]);
//! ```

pub mod encoder;
pub mod parser;

use tracing::{debug, trace};

/// Longest accepted source line, in characters.
pub const MAX_LINE_LEN: usize = 127;

/// An error encountered while assembling a line.
///
/// Every variant is local and recoverable; the caller decides whether to
/// retry with corrected input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AssembleError {
    /// The line is empty, blank, or only a comment.
    #[error("nothing to assemble")]
    EmptyLine,

    /// The line exceeds [`MAX_LINE_LEN`] characters.
    #[error("line is {length} characters long (limit is {})", MAX_LINE_LEN)]
    LineTooLong { length: usize },

    /// The first token is not exactly three characters followed by whitespace.
    #[error("malformed mnemonic `{token}`")]
    MalformedMnemonic { token: String },

    /// A three-character token that is not a 6502 mnemonic taking this kind
    /// of operand (or lack of one).
    #[error("unknown mnemonic `{mnemonic}`")]
    UnknownMnemonic { mnemonic: String },

    /// The operand does not match any syntax the mnemonic supports, or its
    /// value does not fit the addressing mode.
    #[error("invalid operand `{operand}` for {mnemonic}")]
    InvalidOperand { mnemonic: String, operand: String },

    /// A branch target more than 128 bytes behind or 127 bytes ahead of the
    /// byte following the branch.
    #[error("branch target ${target:04X} is out of range (displacement {displacement})")]
    DisplacementOutOfRange { target: u16, displacement: i32 },
}

/// The bytes of one assembled instruction.
///
/// Always holds three bytes; those past [`size_bytes`](Self::size_bytes) are zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssembledInstruction {
    bytes: [u8; 3],
    size: u8,
}

impl AssembledInstruction {
    pub(crate) fn new(bytes: [u8; 3], size: u8) -> Self {
        Self { bytes, size }
    }

    /// The meaningful bytes: opcode followed by 0-2 operand bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.size as usize]
    }

    /// All three buffer bytes, zero-padded.
    pub fn raw(&self) -> [u8; 3] {
        self.bytes
    }

    /// Instruction size in bytes (1-3).
    pub fn size_bytes(&self) -> u8 {
        self.size
    }

    /// The opcode byte.
    pub fn opcode(&self) -> u8 {
        self.bytes[0]
    }
}

/// Assemble one line of source into the instruction located at `address`.
///
/// `address` only matters for relative branches, whose operand is written as
/// the absolute target.
pub fn assemble(address: u16, line: &str) -> Result<AssembledInstruction, AssembleError> {
    let result = parser::split_line(line)
        .and_then(|source| encoder::encode(&source.mnemonic, &source.operand, address));

    match &result {
        Ok(instr) => trace!(address, line, bytes = ?instr.as_bytes(), "assembled"),
        Err(err) => debug!(address, line, %err, "rejected assembly line"),
    }

    result
}

/// Assemble into a caller-supplied three byte buffer.
///
/// The buffer is zeroed first and only filled in on success; after an error
/// its contents are meaningless.
pub fn assemble_into(output: &mut [u8; 3], address: u16, line: &str) -> Result<(), AssembleError> {
    *output = [0; 3];
    let instr = assemble(address, line)?;
    *output = instr.raw();
    Ok(())
}
