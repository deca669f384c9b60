//! # CPU Register Context
//!
//! The disassemblers need a few live register values to resolve effective
//! addresses: X and Y for indexed modes, S for the return target of RTS/RTI.
//! The CPU subsystem hands them over as a [`CpuContext`] snapshot; nothing in
//! this crate reaches into emulator state on its own.

use crate::addressing::IndexRegister;
use crate::memory::MemoryBus;

/// Base address of the hardware stack (page one).
pub const STACK_PAGE: u16 = 0x0100;

/// Read-only snapshot of the registers used for effective address resolution.
///
/// # Examples
///
/// ```
/// use codec6502::CpuContext;
///
/// let ctx = CpuContext::new(0x04, 0x10, 0xFD);
/// assert_eq!(ctx.x, 0x04);
/// assert_eq!(ctx.stack_address(3), 0x0100);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CpuContext {
    /// X index register.
    pub x: u8,

    /// Y index register.
    pub y: u8,

    /// Stack pointer (offset into page one).
    pub sp: u8,
}

impl CpuContext {
    /// Creates a context from the current X, Y and stack pointer values.
    pub const fn new(x: u8, y: u8, sp: u8) -> Self {
        Self { x, y, sp }
    }

    /// Current value of an index register.
    pub const fn index(&self, register: IndexRegister) -> u8 {
        match register {
            IndexRegister::X => self.x,
            IndexRegister::Y => self.y,
        }
    }

    /// Address of the stack slot `offset` bytes above the stack pointer,
    /// wrapping within page one.
    pub const fn stack_address(&self, offset: u8) -> u16 {
        STACK_PAGE | self.sp.wrapping_add(offset) as u16
    }

    /// Little-endian word stored at stack offsets `offset` and `offset + 1`.
    pub fn stack_word<M: MemoryBus + ?Sized>(&self, memory: &M, offset: u8) -> u16 {
        u16::from_le_bytes([
            memory.read(self.stack_address(offset)),
            memory.read(self.stack_address(offset.wrapping_add(1))),
        ])
    }
}
