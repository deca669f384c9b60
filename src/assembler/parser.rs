//! Source line normalization and operand syntax classification

use crate::addressing::IndexRegister;
use crate::assembler::{AssembleError, MAX_LINE_LEN};

/// A normalized source line split into mnemonic and operand text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine {
    /// Upper-case three character mnemonic token.
    pub mnemonic: String,

    /// Operand text with all whitespace removed, brackets unified to
    /// parentheses and `0X` rewritten to `$`. Empty for implied instructions.
    pub operand: String,
}

/// The shape of an operand, before any mnemonic-specific checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperandSyntax {
    /// No operand.
    None,
    /// `#n`
    Immediate(u16),
    /// `n` (zero page, absolute, jump target or branch target)
    Direct(u16),
    /// `n,X` or `n,Y`
    Indexed(u16, IndexRegister),
    /// `(n)`
    Indirect(u16),
    /// `(n,X)`
    IndexedIndirect(u16),
    /// `(n),Y`
    IndirectIndexed(u16),
}

/// Normalize a raw line and split it into mnemonic and operand.
///
/// Comments start at `;`. Brackets `[` `{` and `]` `}` are accepted in place
/// of parentheses.
pub fn split_line(line: &str) -> Result<SourceLine, AssembleError> {
    let length = line.chars().count();
    if length > MAX_LINE_LEN {
        return Err(AssembleError::LineTooLong { length });
    }

    let code = match line.find(';') {
        Some(comment) => &line[..comment],
        None => line,
    };

    let code: String = code
        .chars()
        .map(|c| match c.to_ascii_uppercase() {
            '[' | '{' => '(',
            ']' | '}' => ')',
            c => c,
        })
        .collect();

    let code = code.trim();
    if code.is_empty() {
        return Err(AssembleError::EmptyLine);
    }

    let token_end = code.find(char::is_whitespace).unwrap_or(code.len());
    let (token, rest) = code.split_at(token_end);
    if token.chars().count() != 3 {
        return Err(AssembleError::MalformedMnemonic {
            token: token.to_string(),
        });
    }

    let operand: String = rest.chars().filter(|c| !c.is_whitespace()).collect();

    Ok(SourceLine {
        mnemonic: token.to_string(),
        operand: operand.replace("0X", "$"),
    })
}

/// Classify normalized operand text.
///
/// Returns `None` when the text matches no supported shape or a number in it
/// does not parse.
pub fn parse_operand(text: &str) -> Option<OperandSyntax> {
    if text.is_empty() {
        return Some(OperandSyntax::None);
    }

    if let Some(value) = text.strip_prefix('#') {
        return parse_number(value).ok().map(OperandSyntax::Immediate);
    }

    if let Some(inner) = text.strip_prefix('(') {
        if let Some(pointer) = inner.strip_suffix(",X)") {
            return parse_number(pointer).ok().map(OperandSyntax::IndexedIndirect);
        }
        if let Some(pointer) = inner.strip_suffix("),Y") {
            return parse_number(pointer).ok().map(OperandSyntax::IndirectIndexed);
        }
        if let Some(pointer) = inner.strip_suffix(')') {
            return parse_number(pointer).ok().map(OperandSyntax::Indirect);
        }
        return None;
    }

    if let Some(base) = text.strip_suffix(",X") {
        return parse_number(base)
            .ok()
            .map(|value| OperandSyntax::Indexed(value, IndexRegister::X));
    }
    if let Some(base) = text.strip_suffix(",Y") {
        return parse_number(base)
            .ok()
            .map(|value| OperandSyntax::Indexed(value, IndexRegister::Y));
    }

    parse_number(text).ok().map(OperandSyntax::Direct)
}

/// Parse a number from a string (supports hex $XX, decimal, binary %XXXXXXXX)
pub fn parse_number(s: &str) -> Result<u16, String> {
    let s = s.trim();

    if s.is_empty() {
        return Err("empty number string".to_string());
    }

    if let Some(digits) = s.strip_prefix('$') {
        // Hexadecimal
        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(format!("invalid hex number: {}", s));
        }
        u16::from_str_radix(digits, 16).map_err(|e| format!("invalid hex number: {}", e))
    } else if let Some(digits) = s.strip_prefix('%') {
        // Binary
        if digits.is_empty() || !digits.chars().all(|c| c == '0' || c == '1') {
            return Err(format!("invalid binary number: {}", s));
        }
        u16::from_str_radix(digits, 2).map_err(|e| format!("invalid binary number: {}", e))
    } else {
        // Decimal
        if !s.chars().all(|c| c.is_ascii_digit()) {
            return Err(format!("invalid decimal number: {}", s));
        }
        s.parse::<u16>()
            .map_err(|e| format!("invalid decimal number: {}", e))
    }
}
