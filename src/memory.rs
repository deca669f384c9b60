//! # Memory Bus Abstraction
//!
//! The disassemblers read live memory through the [`MemoryBus`] trait so that
//! rendered output can show the byte stored at an effective address. The
//! emulator owning that memory implements the trait; this crate only reads.
//!
//! ## Design Principles
//!
//! The MemoryBus trait follows 6502 hardware behavior:
//! - No bus errors - reads always succeed
//! - Unmapped reads may return garbage
//! - Any hardware quirks (mirroring, open bus, page-wrap of pointer fetches)
//!   are the implementation's business, not the disassembler's

/// Memory bus trait for reading and writing bytes.
///
/// # Design
///
/// - `read(&self)`: Immutable reference allows shared reads while disassembling
/// - `write(&mut self)`: Used by fixtures and tools that load memory images
/// - No error types: 6502 hardware has no bus error mechanism
///
/// # Examples
///
/// ```
/// use codec6502::{MemoryBus, FlatMemory};
///
/// let mut mem = FlatMemory::new();
/// mem.write(0x1234, 0x42);
/// assert_eq!(mem.read(0x1234), 0x42);
/// ```
pub trait MemoryBus {
    /// Reads a byte from the specified 16-bit address.
    ///
    /// This method must never panic. If the address is unmapped,
    /// implementations may return garbage data (matching 6502 hardware behavior).
    fn read(&self, addr: u16) -> u8;

    /// Writes a byte to the specified 16-bit address.
    ///
    /// Read-only or unmapped addresses may ignore the write.
    fn write(&mut self, addr: u16, value: u8);

    /// Reads a little-endian word from `addr` and `addr + 1` (wrapping at 64K).
    fn read_word(&self, addr: u16) -> u16 {
        u16::from_le_bytes([self.read(addr), self.read(addr.wrapping_add(1))])
    }

    /// Reads a little-endian word from zero page, the high byte wrapping to
    /// `$00` when `zp` is `$FF`.
    fn read_zero_page_word(&self, zp: u8) -> u16 {
        u16::from_le_bytes([self.read(zp as u16), self.read(zp.wrapping_add(1) as u16)])
    }
}

/// Simple 64KB flat memory implementation.
///
/// All addresses (0x0000-0xFFFF) are writable RAM initialized to 0x00.
/// Useful for tests and for tools working on a full memory dump.
///
/// # Examples
///
/// ```
/// use codec6502::{FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// memory.load(0x8000, &[0xA9, 0x05]);
/// assert_eq!(memory.read(0x8001), 0x05);
/// ```
pub struct FlatMemory {
    /// 64KB contiguous memory array
    data: Box<[u8; 65536]>,
}

impl FlatMemory {
    /// Creates a new FlatMemory instance with all bytes initialized to zero.
    pub fn new() -> Self {
        Self {
            data: Box::new([0; 65536]),
        }
    }

    /// Copies `bytes` into memory starting at `start`, wrapping at 64K.
    pub fn load(&mut self, start: u16, bytes: &[u8]) {
        let mut addr = start;
        for &byte in bytes {
            self.data[addr as usize] = byte;
            addr = addr.wrapping_add(1);
        }
    }
}

impl Default for FlatMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBus for FlatMemory {
    fn read(&self, addr: u16) -> u8 {
        self.data[addr as usize]
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.data[addr as usize] = value;
    }
}

/// Memory backed by a captured dump of arbitrary length.
///
/// Addresses past the end of the dump read as zero and ignore writes. Used by
/// the WebAssembly bindings and the command-line tool, where the caller hands
/// over whatever portion of the address space it has.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SnapshotMemory {
    data: Vec<u8>,
}

impl SnapshotMemory {
    /// Wraps a memory dump whose first byte is address `$0000`.
    pub fn new(data: Vec<u8>) -> Self {
        Self { data }
    }

    /// Number of captured bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether nothing was captured.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl From<Vec<u8>> for SnapshotMemory {
    fn from(data: Vec<u8>) -> Self {
        Self::new(data)
    }
}

impl MemoryBus for SnapshotMemory {
    fn read(&self, addr: u16) -> u8 {
        self.data.get(addr as usize).copied().unwrap_or(0)
    }

    fn write(&mut self, addr: u16, value: u8) {
        if let Some(slot) = self.data.get_mut(addr as usize) {
            *slot = value;
        }
    }
}
