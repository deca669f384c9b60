//! Formatting functions for disassembled instructions

use crate::addressing::AddressingMode;
use crate::disassembler::decoder::branch_target;
use crate::disassembler::DecodedInstruction;

/// Format a single instruction as human-readable text
///
/// # Arguments
///
/// * `instr` - The decoded instruction to format
///
/// # Returns
///
/// The instruction in assembler syntax, followed by its resolved effective
/// address and the value stored there where the addressing mode reads memory:
///
/// ```text
/// LDA $10 = #$05
/// LDA $10,X @ $0015 = #$05
/// JMP ($1234) = $5678
/// ```
pub fn format_instruction(instr: &DecodedInstruction) -> String {
    use AddressingMode::*;

    if let Some([lo, hi]) = instr.brk_signature {
        return format!("{} {:02X} {:02X}", instr.mnemonic, lo, hi);
    }

    let text = instr.source_text();
    match (instr.addressing_mode, instr.effective_address, instr.effective_value) {
        (Indirect, Some(target), _) => format!("{} = ${:04X}", text, target),
        (ZeroPage | Absolute, _, Some(value)) => format!("{} = #${:02X}", text, value),
        (_, Some(address), Some(value)) => {
            format!("{} @ ${:04X} = #${:02X}", text, address, value)
        }
        _ => text,
    }
}

/// Format an operand in assembler syntax
///
/// `operand` is the zero-extended byte or little-endian word following the
/// opcode. Relative branches are shown as their absolute target, computed
/// from the instruction `address`.
pub fn format_operand(mode: AddressingMode, operand: u16, address: u16) -> String {
    use AddressingMode::*;

    match mode {
        Implied => String::new(),
        Immediate => format!("#${:02X}", operand),
        ZeroPage => format!("${:02X}", operand),
        ZeroPageX => format!("${:02X},X", operand),
        ZeroPageY => format!("${:02X},Y", operand),
        Relative => format!("${:04X}", branch_target(address, operand as u8)),
        Absolute => format!("${:04X}", operand),
        AbsoluteX => format!("${:04X},X", operand),
        AbsoluteY => format!("${:04X},Y", operand),
        Indirect => format!("(${:04X})", operand),
        IndirectX => format!("(${:02X},X)", operand),
        IndirectY => format!("(${:02X}),Y", operand),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::opcodes::Flow;

    fn instr(
        mnemonic: &'static str,
        addressing_mode: AddressingMode,
        rendered_operand: &str,
        effective_address: Option<u16>,
        effective_value: Option<u8>,
    ) -> DecodedInstruction {
        DecodedInstruction {
            address: 0x8000,
            opcode: 0x00,
            mnemonic,
            addressing_mode,
            flow: Flow::Sequential,
            operand_bytes: vec![],
            rendered_operand: rendered_operand.to_string(),
            effective_address,
            effective_value,
            brk_signature: None,
        }
    }

    #[test]
    fn test_format_immediate() {
        let i = instr("LDA", AddressingMode::Immediate, "#$42", None, None);
        assert_eq!(format_instruction(&i), "LDA #$42");
    }

    #[test]
    fn test_format_implied() {
        let i = instr("NOP", AddressingMode::Implied, "", None, None);
        assert_eq!(format_instruction(&i), "NOP");
    }

    #[test]
    fn test_format_direct_value() {
        let i = instr("STA", AddressingMode::Absolute, "$8000", Some(0x8000), Some(0x99));
        assert_eq!(format_instruction(&i), "STA $8000 = #$99");
    }

    #[test]
    fn test_format_indexed_value() {
        let i = instr("LDA", AddressingMode::IndirectY, "($10),Y", Some(0x1234), Some(0x05));
        assert_eq!(format_instruction(&i), "LDA ($10),Y @ $1234 = #$05");
    }

    #[test]
    fn test_format_indirect_jump() {
        let i = instr("JMP", AddressingMode::Indirect, "($1234)", Some(0x5678), None);
        assert_eq!(format_instruction(&i), "JMP ($1234) = $5678");
    }

    #[test]
    fn test_format_brk_signature() {
        let mut i = instr("BRK", AddressingMode::Implied, "", None, None);
        i.brk_signature = Some([0x12, 0x34]);
        assert_eq!(format_instruction(&i), "BRK 12 34");
    }

    #[test]
    fn test_format_operand_all_modes() {
        use AddressingMode::*;
        assert_eq!(format_operand(Implied, 0, 0), "");
        assert_eq!(format_operand(Immediate, 0x05, 0), "#$05");
        assert_eq!(format_operand(ZeroPage, 0x10, 0), "$10");
        assert_eq!(format_operand(ZeroPageX, 0x10, 0), "$10,X");
        assert_eq!(format_operand(ZeroPageY, 0x10, 0), "$10,Y");
        assert_eq!(format_operand(Absolute, 0x1234, 0), "$1234");
        assert_eq!(format_operand(AbsoluteX, 0x1234, 0), "$1234,X");
        assert_eq!(format_operand(AbsoluteY, 0x1234, 0), "$1234,Y");
        assert_eq!(format_operand(Indirect, 0x1234, 0), "($1234)");
        assert_eq!(format_operand(IndirectX, 0x10, 0), "($10,X)");
        assert_eq!(format_operand(IndirectY, 0x10, 0), "($10),Y");
        assert_eq!(format_operand(Relative, 0x0E, 0x8000), "$8010");
    }
}
