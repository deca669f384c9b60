//! Instruction encoder for the 6502 assembler
//!
//! Addressing mode selection is driven entirely by the opcode table: the
//! operand syntax names a family of modes, the table says which of them the
//! mnemonic has, and the chosen entry carries the final opcode byte.

use crate::addressing::{AddressingMode, IndexRegister};
use crate::assembler::parser::{parse_operand, OperandSyntax};
use crate::assembler::{AssembleError, AssembledInstruction};
use crate::opcodes::{entries_for_mnemonic, lookup_by_mnemonic_and_mode, OpcodeMetadata};

/// Encode a normalized mnemonic and operand as the instruction at `address`.
pub fn encode(
    mnemonic: &str,
    operand: &str,
    address: u16,
) -> Result<AssembledInstruction, AssembleError> {
    let request = Request { mnemonic, operand };

    // Implied-only lookup for bare mnemonics, operand-bearing lookup otherwise.
    let implied = operand.is_empty();
    let known = entries_for_mnemonic(mnemonic)
        .any(|entry| (entry.addressing_mode == AddressingMode::Implied) == implied);
    if !known {
        return Err(AssembleError::UnknownMnemonic {
            mnemonic: mnemonic.to_string(),
        });
    }

    let syntax = parse_operand(operand).ok_or_else(|| request.invalid())?;
    let (entry, value) = request.select(syntax, address)?;

    Ok(emit(entry, value))
}

/// Signed distance from the byte after a branch at `address` to `target`.
///
/// The distance wraps at 64K like the program counter, so a branch near
/// `$0000` may reach a target near `$FFFF`.
pub fn branch_displacement(address: u16, target: u16) -> Result<i8, AssembleError> {
    let displacement = target.wrapping_sub(address.wrapping_add(2)) as i16 as i32;
    i8::try_from(displacement)
        .map_err(|_| AssembleError::DisplacementOutOfRange { target, displacement })
}

struct Request<'a> {
    mnemonic: &'a str,
    operand: &'a str,
}

impl Request<'_> {
    fn invalid(&self) -> AssembleError {
        AssembleError::InvalidOperand {
            mnemonic: self.mnemonic.to_string(),
            operand: self.operand.to_string(),
        }
    }

    fn entry(&self, mode: AddressingMode) -> Result<&'static OpcodeMetadata, AssembleError> {
        lookup_by_mnemonic_and_mode(self.mnemonic, mode).ok_or_else(|| self.invalid())
    }

    /// Zero page form when the value fits and the mnemonic has one, else the
    /// absolute form. Only JMP and JSR reach the absolute form with a small
    /// value.
    fn by_magnitude(
        &self,
        value: u16,
        zero_page: AddressingMode,
        absolute: AddressingMode,
    ) -> Result<&'static OpcodeMetadata, AssembleError> {
        if value <= 0xFF {
            if let Some(entry) = lookup_by_mnemonic_and_mode(self.mnemonic, zero_page) {
                return Ok(entry);
            }
        }
        self.entry(absolute)
    }

    /// Zero page indexed form when the value fits, else the absolute
    /// indexed form. A small value never widens: `LDA $10,Y` is rejected.
    fn indexed(
        &self,
        value: u16,
        zero_page: AddressingMode,
        absolute: AddressingMode,
    ) -> Result<&'static OpcodeMetadata, AssembleError> {
        if value <= 0xFF {
            self.entry(zero_page)
        } else {
            self.entry(absolute)
        }
    }

    fn byte(&self, value: u16) -> Result<u16, AssembleError> {
        if value <= 0xFF {
            Ok(value)
        } else {
            Err(self.invalid())
        }
    }

    fn select(
        &self,
        syntax: OperandSyntax,
        address: u16,
    ) -> Result<(&'static OpcodeMetadata, u16), AssembleError> {
        use AddressingMode::*;

        match syntax {
            OperandSyntax::None => Ok((self.entry(Implied)?, 0)),
            OperandSyntax::Immediate(value) => Ok((self.entry(Immediate)?, self.byte(value)?)),
            OperandSyntax::Direct(target) => {
                if let Some(entry) = lookup_by_mnemonic_and_mode(self.mnemonic, Relative) {
                    let displacement = branch_displacement(address, target)?;
                    Ok((entry, displacement as u8 as u16))
                } else {
                    Ok((self.by_magnitude(target, ZeroPage, Absolute)?, target))
                }
            }
            OperandSyntax::Indexed(value, IndexRegister::X) => {
                Ok((self.indexed(value, ZeroPageX, AbsoluteX)?, value))
            }
            OperandSyntax::Indexed(value, IndexRegister::Y) => {
                Ok((self.indexed(value, ZeroPageY, AbsoluteY)?, value))
            }
            OperandSyntax::Indirect(pointer) => Ok((self.entry(Indirect)?, pointer)),
            OperandSyntax::IndexedIndirect(pointer) => {
                Ok((self.entry(IndirectX)?, self.byte(pointer)?))
            }
            OperandSyntax::IndirectIndexed(pointer) => {
                Ok((self.entry(IndirectY)?, self.byte(pointer)?))
            }
        }
    }
}

fn emit(entry: &OpcodeMetadata, value: u16) -> AssembledInstruction {
    let mut bytes = [entry.opcode, 0, 0];
    match entry.operand_len() {
        1 => bytes[1] = value as u8,
        2 => bytes[1..].copy_from_slice(&value.to_le_bytes()),
        _ => {}
    }
    AssembledInstruction::new(bytes, entry.size_bytes())
}
