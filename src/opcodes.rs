//! # Opcode Metadata Table
//!
//! This module contains the instruction table that serves as the single source
//! of truth for the 6502 instruction set. Both the assembler and the two
//! disassemblers consult it; neither encodes any fact about the instruction set
//! on its own.
//!
//! The table covers the **151 documented NMOS 6502 opcodes**. The remaining 105
//! byte values are undefined: they have no entry, the assembler can never emit
//! them and the disassemblers flag them explicitly.
//!
//! Each entry carries:
//! - Opcode byte
//! - Mnemonic (instruction name)
//! - Addressing mode (which fixes the operand length)
//! - Base cycle cost (excluding page-crossing penalties)
//! - Control-flow class

use crate::addressing::AddressingMode;

/// How an instruction affects the program counter.
///
/// Renderers use this instead of matching on mnemonic names: a `JMP $C000`
/// does not dereference its operand, an `RTS` takes its target from the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flow {
    /// Falls through to the next instruction.
    Sequential,
    /// Conditional relative branch.
    Branch,
    /// Unconditional jump (JMP).
    Jump,
    /// Subroutine call (JSR).
    Call,
    /// Return from subroutine (RTS).
    Return,
    /// Return from interrupt (RTI).
    ReturnFromInterrupt,
    /// Software interrupt (BRK).
    Break,
}

/// Metadata for a single 6502 opcode.
///
/// # Examples
///
/// ```
/// use codec6502::{lookup_by_opcode, AddressingMode};
///
/// let lda_imm = lookup_by_opcode(0xA9).unwrap();
/// assert_eq!(lda_imm.mnemonic, "LDA");
/// assert_eq!(lda_imm.addressing_mode, AddressingMode::Immediate);
/// assert_eq!(lda_imm.base_cycles, 2);
/// assert_eq!(lda_imm.size_bytes(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeMetadata {
    /// Opcode byte value.
    pub opcode: u8,

    /// Three-letter instruction mnemonic in upper case (e.g. "LDA").
    pub mnemonic: &'static str,

    /// Addressing mode for this instruction.
    pub addressing_mode: AddressingMode,

    /// Base cycle cost (before page crossing penalties).
    pub base_cycles: u8,

    /// Control-flow class.
    pub flow: Flow,
}

impl OpcodeMetadata {
    const fn new(
        opcode: u8,
        mnemonic: &'static str,
        addressing_mode: AddressingMode,
        base_cycles: u8,
        flow: Flow,
    ) -> Self {
        Self {
            opcode,
            mnemonic,
            addressing_mode,
            base_cycles,
            flow,
        }
    }

    /// Number of operand bytes (0, 1 or 2).
    pub const fn operand_len(&self) -> u8 {
        self.addressing_mode.operand_len()
    }

    /// Total instruction size in bytes (opcode + operands).
    pub const fn size_bytes(&self) -> u8 {
        1 + self.operand_len()
    }
}

use AddressingMode::*;
use Flow::*;

/// The documented NMOS 6502 instructions, ordered by opcode byte.
pub static INSTRUCTIONS: [OpcodeMetadata; 151] = INSTRUCTION_LIST;

const INSTRUCTION_LIST: [OpcodeMetadata; 151] = [
    // $0x
    OpcodeMetadata::new(0x00, "BRK", Implied, 7, Break),
    OpcodeMetadata::new(0x01, "ORA", IndirectX, 6, Sequential),
    OpcodeMetadata::new(0x05, "ORA", ZeroPage, 3, Sequential),
    OpcodeMetadata::new(0x06, "ASL", ZeroPage, 5, Sequential),
    OpcodeMetadata::new(0x08, "PHP", Implied, 3, Sequential),
    OpcodeMetadata::new(0x09, "ORA", Immediate, 2, Sequential),
    OpcodeMetadata::new(0x0A, "ASL", Implied, 2, Sequential),
    OpcodeMetadata::new(0x0D, "ORA", Absolute, 4, Sequential),
    OpcodeMetadata::new(0x0E, "ASL", Absolute, 6, Sequential),
    // $1x
    OpcodeMetadata::new(0x10, "BPL", Relative, 2, Branch),
    OpcodeMetadata::new(0x11, "ORA", IndirectY, 5, Sequential),
    OpcodeMetadata::new(0x15, "ORA", ZeroPageX, 4, Sequential),
    OpcodeMetadata::new(0x16, "ASL", ZeroPageX, 6, Sequential),
    OpcodeMetadata::new(0x18, "CLC", Implied, 2, Sequential),
    OpcodeMetadata::new(0x19, "ORA", AbsoluteY, 4, Sequential),
    OpcodeMetadata::new(0x1D, "ORA", AbsoluteX, 4, Sequential),
    OpcodeMetadata::new(0x1E, "ASL", AbsoluteX, 7, Sequential),
    // $2x
    OpcodeMetadata::new(0x20, "JSR", Absolute, 6, Call),
    OpcodeMetadata::new(0x21, "AND", IndirectX, 6, Sequential),
    OpcodeMetadata::new(0x24, "BIT", ZeroPage, 3, Sequential),
    OpcodeMetadata::new(0x25, "AND", ZeroPage, 3, Sequential),
    OpcodeMetadata::new(0x26, "ROL", ZeroPage, 5, Sequential),
    OpcodeMetadata::new(0x28, "PLP", Implied, 4, Sequential),
    OpcodeMetadata::new(0x29, "AND", Immediate, 2, Sequential),
    OpcodeMetadata::new(0x2A, "ROL", Implied, 2, Sequential),
    OpcodeMetadata::new(0x2C, "BIT", Absolute, 4, Sequential),
    OpcodeMetadata::new(0x2D, "AND", Absolute, 4, Sequential),
    OpcodeMetadata::new(0x2E, "ROL", Absolute, 6, Sequential),
    // $3x
    OpcodeMetadata::new(0x30, "BMI", Relative, 2, Branch),
    OpcodeMetadata::new(0x31, "AND", IndirectY, 5, Sequential),
    OpcodeMetadata::new(0x35, "AND", ZeroPageX, 4, Sequential),
    OpcodeMetadata::new(0x36, "ROL", ZeroPageX, 6, Sequential),
    OpcodeMetadata::new(0x38, "SEC", Implied, 2, Sequential),
    OpcodeMetadata::new(0x39, "AND", AbsoluteY, 4, Sequential),
    OpcodeMetadata::new(0x3D, "AND", AbsoluteX, 4, Sequential),
    OpcodeMetadata::new(0x3E, "ROL", AbsoluteX, 7, Sequential),
    // $4x
    OpcodeMetadata::new(0x40, "RTI", Implied, 6, ReturnFromInterrupt),
    OpcodeMetadata::new(0x41, "EOR", IndirectX, 6, Sequential),
    OpcodeMetadata::new(0x45, "EOR", ZeroPage, 3, Sequential),
    OpcodeMetadata::new(0x46, "LSR", ZeroPage, 5, Sequential),
    OpcodeMetadata::new(0x48, "PHA", Implied, 3, Sequential),
    OpcodeMetadata::new(0x49, "EOR", Immediate, 2, Sequential),
    OpcodeMetadata::new(0x4A, "LSR", Implied, 2, Sequential),
    OpcodeMetadata::new(0x4C, "JMP", Absolute, 3, Jump),
    OpcodeMetadata::new(0x4D, "EOR", Absolute, 4, Sequential),
    OpcodeMetadata::new(0x4E, "LSR", Absolute, 6, Sequential),
    // $5x
    OpcodeMetadata::new(0x50, "BVC", Relative, 2, Branch),
    OpcodeMetadata::new(0x51, "EOR", IndirectY, 5, Sequential),
    OpcodeMetadata::new(0x55, "EOR", ZeroPageX, 4, Sequential),
    OpcodeMetadata::new(0x56, "LSR", ZeroPageX, 6, Sequential),
    OpcodeMetadata::new(0x58, "CLI", Implied, 2, Sequential),
    OpcodeMetadata::new(0x59, "EOR", AbsoluteY, 4, Sequential),
    OpcodeMetadata::new(0x5D, "EOR", AbsoluteX, 4, Sequential),
    OpcodeMetadata::new(0x5E, "LSR", AbsoluteX, 7, Sequential),
    // $6x
    OpcodeMetadata::new(0x60, "RTS", Implied, 6, Return),
    OpcodeMetadata::new(0x61, "ADC", IndirectX, 6, Sequential),
    OpcodeMetadata::new(0x65, "ADC", ZeroPage, 3, Sequential),
    OpcodeMetadata::new(0x66, "ROR", ZeroPage, 5, Sequential),
    OpcodeMetadata::new(0x68, "PLA", Implied, 4, Sequential),
    OpcodeMetadata::new(0x69, "ADC", Immediate, 2, Sequential),
    OpcodeMetadata::new(0x6A, "ROR", Implied, 2, Sequential),
    OpcodeMetadata::new(0x6C, "JMP", Indirect, 5, Jump),
    OpcodeMetadata::new(0x6D, "ADC", Absolute, 4, Sequential),
    OpcodeMetadata::new(0x6E, "ROR", Absolute, 6, Sequential),
    // $7x
    OpcodeMetadata::new(0x70, "BVS", Relative, 2, Branch),
    OpcodeMetadata::new(0x71, "ADC", IndirectY, 5, Sequential),
    OpcodeMetadata::new(0x75, "ADC", ZeroPageX, 4, Sequential),
    OpcodeMetadata::new(0x76, "ROR", ZeroPageX, 6, Sequential),
    OpcodeMetadata::new(0x78, "SEI", Implied, 2, Sequential),
    OpcodeMetadata::new(0x79, "ADC", AbsoluteY, 4, Sequential),
    OpcodeMetadata::new(0x7D, "ADC", AbsoluteX, 4, Sequential),
    OpcodeMetadata::new(0x7E, "ROR", AbsoluteX, 7, Sequential),
    // $8x
    OpcodeMetadata::new(0x81, "STA", IndirectX, 6, Sequential),
    OpcodeMetadata::new(0x84, "STY", ZeroPage, 3, Sequential),
    OpcodeMetadata::new(0x85, "STA", ZeroPage, 3, Sequential),
    OpcodeMetadata::new(0x86, "STX", ZeroPage, 3, Sequential),
    OpcodeMetadata::new(0x88, "DEY", Implied, 2, Sequential),
    OpcodeMetadata::new(0x8A, "TXA", Implied, 2, Sequential),
    OpcodeMetadata::new(0x8C, "STY", Absolute, 4, Sequential),
    OpcodeMetadata::new(0x8D, "STA", Absolute, 4, Sequential),
    OpcodeMetadata::new(0x8E, "STX", Absolute, 4, Sequential),
    // $9x
    OpcodeMetadata::new(0x90, "BCC", Relative, 2, Branch),
    OpcodeMetadata::new(0x91, "STA", IndirectY, 6, Sequential),
    OpcodeMetadata::new(0x94, "STY", ZeroPageX, 4, Sequential),
    OpcodeMetadata::new(0x95, "STA", ZeroPageX, 4, Sequential),
    OpcodeMetadata::new(0x96, "STX", ZeroPageY, 4, Sequential),
    OpcodeMetadata::new(0x98, "TYA", Implied, 2, Sequential),
    OpcodeMetadata::new(0x99, "STA", AbsoluteY, 5, Sequential),
    OpcodeMetadata::new(0x9A, "TXS", Implied, 2, Sequential),
    OpcodeMetadata::new(0x9D, "STA", AbsoluteX, 5, Sequential),
    // $Ax
    OpcodeMetadata::new(0xA0, "LDY", Immediate, 2, Sequential),
    OpcodeMetadata::new(0xA1, "LDA", IndirectX, 6, Sequential),
    OpcodeMetadata::new(0xA2, "LDX", Immediate, 2, Sequential),
    OpcodeMetadata::new(0xA4, "LDY", ZeroPage, 3, Sequential),
    OpcodeMetadata::new(0xA5, "LDA", ZeroPage, 3, Sequential),
    OpcodeMetadata::new(0xA6, "LDX", ZeroPage, 3, Sequential),
    OpcodeMetadata::new(0xA8, "TAY", Implied, 2, Sequential),
    OpcodeMetadata::new(0xA9, "LDA", Immediate, 2, Sequential),
    OpcodeMetadata::new(0xAA, "TAX", Implied, 2, Sequential),
    OpcodeMetadata::new(0xAC, "LDY", Absolute, 4, Sequential),
    OpcodeMetadata::new(0xAD, "LDA", Absolute, 4, Sequential),
    OpcodeMetadata::new(0xAE, "LDX", Absolute, 4, Sequential),
    // $Bx
    OpcodeMetadata::new(0xB0, "BCS", Relative, 2, Branch),
    OpcodeMetadata::new(0xB1, "LDA", IndirectY, 5, Sequential),
    OpcodeMetadata::new(0xB4, "LDY", ZeroPageX, 4, Sequential),
    OpcodeMetadata::new(0xB5, "LDA", ZeroPageX, 4, Sequential),
    OpcodeMetadata::new(0xB6, "LDX", ZeroPageY, 4, Sequential),
    OpcodeMetadata::new(0xB8, "CLV", Implied, 2, Sequential),
    OpcodeMetadata::new(0xB9, "LDA", AbsoluteY, 4, Sequential),
    OpcodeMetadata::new(0xBA, "TSX", Implied, 2, Sequential),
    OpcodeMetadata::new(0xBC, "LDY", AbsoluteX, 4, Sequential),
    OpcodeMetadata::new(0xBD, "LDA", AbsoluteX, 4, Sequential),
    OpcodeMetadata::new(0xBE, "LDX", AbsoluteY, 4, Sequential),
    // $Cx
    OpcodeMetadata::new(0xC0, "CPY", Immediate, 2, Sequential),
    OpcodeMetadata::new(0xC1, "CMP", IndirectX, 6, Sequential),
    OpcodeMetadata::new(0xC4, "CPY", ZeroPage, 3, Sequential),
    OpcodeMetadata::new(0xC5, "CMP", ZeroPage, 3, Sequential),
    OpcodeMetadata::new(0xC6, "DEC", ZeroPage, 5, Sequential),
    OpcodeMetadata::new(0xC8, "INY", Implied, 2, Sequential),
    OpcodeMetadata::new(0xC9, "CMP", Immediate, 2, Sequential),
    OpcodeMetadata::new(0xCA, "DEX", Implied, 2, Sequential),
    OpcodeMetadata::new(0xCC, "CPY", Absolute, 4, Sequential),
    OpcodeMetadata::new(0xCD, "CMP", Absolute, 4, Sequential),
    OpcodeMetadata::new(0xCE, "DEC", Absolute, 6, Sequential),
    // $Dx
    OpcodeMetadata::new(0xD0, "BNE", Relative, 2, Branch),
    OpcodeMetadata::new(0xD1, "CMP", IndirectY, 5, Sequential),
    OpcodeMetadata::new(0xD5, "CMP", ZeroPageX, 4, Sequential),
    OpcodeMetadata::new(0xD6, "DEC", ZeroPageX, 6, Sequential),
    OpcodeMetadata::new(0xD8, "CLD", Implied, 2, Sequential),
    OpcodeMetadata::new(0xD9, "CMP", AbsoluteY, 4, Sequential),
    OpcodeMetadata::new(0xDD, "CMP", AbsoluteX, 4, Sequential),
    OpcodeMetadata::new(0xDE, "DEC", AbsoluteX, 7, Sequential),
    // $Ex
    OpcodeMetadata::new(0xE0, "CPX", Immediate, 2, Sequential),
    OpcodeMetadata::new(0xE1, "SBC", IndirectX, 6, Sequential),
    OpcodeMetadata::new(0xE4, "CPX", ZeroPage, 3, Sequential),
    OpcodeMetadata::new(0xE5, "SBC", ZeroPage, 3, Sequential),
    OpcodeMetadata::new(0xE6, "INC", ZeroPage, 5, Sequential),
    OpcodeMetadata::new(0xE8, "INX", Implied, 2, Sequential),
    OpcodeMetadata::new(0xE9, "SBC", Immediate, 2, Sequential),
    OpcodeMetadata::new(0xEA, "NOP", Implied, 2, Sequential),
    OpcodeMetadata::new(0xEC, "CPX", Absolute, 4, Sequential),
    OpcodeMetadata::new(0xED, "SBC", Absolute, 4, Sequential),
    OpcodeMetadata::new(0xEE, "INC", Absolute, 6, Sequential),
    // $Fx
    OpcodeMetadata::new(0xF0, "BEQ", Relative, 2, Branch),
    OpcodeMetadata::new(0xF1, "SBC", IndirectY, 5, Sequential),
    OpcodeMetadata::new(0xF5, "SBC", ZeroPageX, 4, Sequential),
    OpcodeMetadata::new(0xF6, "INC", ZeroPageX, 6, Sequential),
    OpcodeMetadata::new(0xF8, "SED", Implied, 2, Sequential),
    OpcodeMetadata::new(0xF9, "SBC", AbsoluteY, 4, Sequential),
    OpcodeMetadata::new(0xFD, "SBC", AbsoluteX, 4, Sequential),
    OpcodeMetadata::new(0xFE, "INC", AbsoluteX, 7, Sequential),
];

/// 256-entry opcode table indexed by opcode byte value.
///
/// Built at compile time from the instruction list; a duplicated opcode byte
/// fails the build.
///
/// ```
/// use codec6502::OPCODE_TABLE;
///
/// assert_eq!(OPCODE_TABLE[0x00].unwrap().mnemonic, "BRK");
/// assert!(OPCODE_TABLE[0x02].is_none());
/// ```
pub static OPCODE_TABLE: [Option<OpcodeMetadata>; 256] = build_opcode_table();

const fn build_opcode_table() -> [Option<OpcodeMetadata>; 256] {
    let mut table: [Option<OpcodeMetadata>; 256] = [None; 256];
    let mut i = 0;
    while i < INSTRUCTION_LIST.len() {
        let entry = INSTRUCTION_LIST[i];
        assert!(
            table[entry.opcode as usize].is_none(),
            "duplicate opcode byte in instruction table"
        );
        table[entry.opcode as usize] = Some(entry);
        i += 1;
    }
    table
}

/// Look up the instruction encoded by `opcode`.
///
/// Returns `None` for the undefined (illegal) opcode bytes.
pub fn lookup_by_opcode(opcode: u8) -> Option<&'static OpcodeMetadata> {
    OPCODE_TABLE[opcode as usize].as_ref()
}

/// Look up the instruction for a mnemonic in a specific addressing mode.
///
/// `mnemonic` is matched case-sensitively against the upper-case table names.
pub fn lookup_by_mnemonic_and_mode(
    mnemonic: &str,
    mode: AddressingMode,
) -> Option<&'static OpcodeMetadata> {
    INSTRUCTIONS
        .iter()
        .find(|entry| entry.addressing_mode == mode && entry.mnemonic == mnemonic)
}

/// All table entries for a mnemonic, in opcode order.
pub fn entries_for_mnemonic(mnemonic: &str) -> impl Iterator<Item = &'static OpcodeMetadata> + '_ {
    INSTRUCTIONS
        .iter()
        .filter(move |entry| entry.mnemonic == mnemonic)
}

/// Whether `mnemonic` names a documented 6502 instruction in any mode.
pub fn is_mnemonic(mnemonic: &str) -> bool {
    entries_for_mnemonic(mnemonic).next().is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documented_opcode_count() {
        let defined = OPCODE_TABLE.iter().filter(|e| e.is_some()).count();
        assert_eq!(defined, 151);
        assert_eq!(256 - defined, 105);
    }

    #[test]
    fn test_table_index_matches_opcode() {
        for (byte, entry) in OPCODE_TABLE.iter().enumerate() {
            if let Some(entry) = entry {
                assert_eq!(entry.opcode as usize, byte);
            }
        }
    }

    #[test]
    fn test_illegal_opcodes_absent() {
        for byte in [0x02u8, 0x03, 0x04, 0x0B, 0x1A, 0x80, 0x89, 0x9C, 0x9E, 0xEB, 0xFF] {
            assert!(lookup_by_opcode(byte).is_none(), "0x{:02X} should be undefined", byte);
        }
    }

    #[test]
    fn test_lookup_by_mnemonic_and_mode() {
        assert_eq!(lookup_by_mnemonic_and_mode("LDX", ZeroPageY).unwrap().opcode, 0xB6);
        assert_eq!(lookup_by_mnemonic_and_mode("JMP", Indirect).unwrap().opcode, 0x6C);
        assert_eq!(lookup_by_mnemonic_and_mode("ASL", Implied).unwrap().opcode, 0x0A);
        assert!(lookup_by_mnemonic_and_mode("STX", AbsoluteY).is_none());
        assert!(lookup_by_mnemonic_and_mode("STA", Immediate).is_none());
        assert!(lookup_by_mnemonic_and_mode("lda", Immediate).is_none());
    }

    #[test]
    fn test_asl_modes() {
        let modes: Vec<AddressingMode> = entries_for_mnemonic("ASL")
            .map(|e| e.addressing_mode)
            .collect();
        assert_eq!(modes, vec![ZeroPage, Implied, Absolute, ZeroPageX, AbsoluteX]);
    }

    #[test]
    fn test_flow_classes() {
        assert_eq!(lookup_by_opcode(0x4C).unwrap().flow, Jump);
        assert_eq!(lookup_by_opcode(0x6C).unwrap().flow, Jump);
        assert_eq!(lookup_by_opcode(0x20).unwrap().flow, Call);
        assert_eq!(lookup_by_opcode(0x60).unwrap().flow, Return);
        assert_eq!(lookup_by_opcode(0x40).unwrap().flow, ReturnFromInterrupt);
        assert_eq!(lookup_by_opcode(0xD0).unwrap().flow, Branch);
        assert!(INSTRUCTIONS
            .iter()
            .all(|e| (e.addressing_mode == Relative) == (e.flow == Branch)));
    }

    #[test]
    fn test_is_mnemonic() {
        assert!(is_mnemonic("NOP"));
        assert!(is_mnemonic("SBC"));
        assert!(!is_mnemonic("XYZ"));
        assert!(!is_mnemonic("???"));
    }
}
