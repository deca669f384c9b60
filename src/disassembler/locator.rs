//! Bank-aware rendering of an instruction's effective location
//!
//! Instead of text for a person, this produces a `fileOffset|bank|value`
//! triple identifying the physical ROM byte an instruction will touch or jump
//! to. Code/data logging tools use it to attribute references to cartridge
//! storage across bank switches.

use std::fmt;

use tracing::trace;

use crate::bank::BankResolver;
use crate::cpu::CpuContext;
use crate::disassembler::decoder::{effective_address, operand_value};
use crate::memory::MemoryBus;
use crate::opcodes::{lookup_by_opcode, Flow};

/// Output for instructions without a resolvable location.
pub const NO_LOCATION: &str = "?";

/// The storage location an instruction refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EffectiveLocation {
    /// Run-time CPU address that was resolved.
    pub address: u16,

    /// Offset in the ROM file, negative when not backed by cartridge storage.
    pub file_offset: i64,

    /// Bank mapped at `address`, negative when not backed by cartridge storage.
    pub bank: i64,

    /// Byte currently readable at `address`.
    pub value: u8,
}

impl fmt::Display for EffectiveLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}|{}", self.file_offset, self.bank, self.value)
    }
}

/// Resolve where the instruction at `address` reads, writes or transfers
/// control to.
///
/// Branches and absolute jumps resolve to their target, `JMP (ind)` to the
/// address read through the pointer. RTS resolves to the return address on
/// the stack plus one and RTI to the address it pulls. Implied and immediate
/// instructions and undefined opcodes have no location.
pub fn resolve_location<M, B>(
    address: u16,
    bytes: &[u8],
    memory: &M,
    cpu: &CpuContext,
    banks: &B,
) -> Option<EffectiveLocation>
where
    M: MemoryBus + ?Sized,
    B: BankResolver + ?Sized,
{
    let metadata = lookup_by_opcode(*bytes.first()?)?;

    let target = match metadata.flow {
        // Stack holds the address of the last byte of the JSR.
        Flow::Return => cpu.stack_word(memory, 1).wrapping_add(1),
        // Status byte first, then the exact return address.
        Flow::ReturnFromInterrupt => cpu.stack_word(memory, 2),
        _ => effective_address(
            metadata,
            address,
            operand_value(metadata, bytes),
            memory,
            cpu,
        )?,
    };

    Some(EffectiveLocation {
        address: target,
        file_offset: banks.file_offset(target),
        bank: banks.bank(target),
        value: memory.read(target),
    })
}

/// Disassemble the instruction at `address` into its `fileOffset|bank|value`
/// triple, or [`NO_LOCATION`] when it has none.
///
/// # Examples
///
/// ```
/// use codec6502::{disassemble_location, CpuContext, FlatMemory, MemoryBus, PrgBankMap};
///
/// let mut memory = FlatMemory::new();
/// memory.write(0x8123, 0x42);
/// let banks = PrgBankMap::new(0x4000, 0x8000, vec![0, 1]).unwrap();
///
/// let text = disassemble_location(
///     0x9000,
///     &[0xAD, 0x23, 0x81],
///     &memory,
///     &CpuContext::default(),
///     &banks,
/// );
/// assert_eq!(text, "307|0|66");
/// ```
pub fn disassemble_location<M, B>(
    address: u16,
    bytes: &[u8],
    memory: &M,
    cpu: &CpuContext,
    banks: &B,
) -> String
where
    M: MemoryBus + ?Sized,
    B: BankResolver + ?Sized,
{
    match resolve_location(address, bytes, memory, cpu, banks) {
        Some(location) => location.to_string(),
        None => {
            trace!(address, opcode = ?bytes.first(), "no effective location");
            NO_LOCATION.to_string()
        }
    }
}
