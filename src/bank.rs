//! # Bank Resolution
//!
//! NES cartridges bank-switch their program ROM, so the physical byte behind a
//! CPU address depends on the mapper's current configuration. The
//! [`BankResolver`] trait is the boundary to that mapper subsystem: given a
//! run-time address it reports which bank is mapped there and where that byte
//! lives in the ROM file.

/// Maps run-time CPU addresses to physical storage locations.
///
/// Both methods return a negative value when the address is not backed by
/// cartridge storage (RAM, I/O registers, unmapped space).
pub trait BankResolver {
    /// Offset of the byte behind `addr` within the ROM file, header included.
    fn file_offset(&self, addr: u16) -> i64;

    /// Identifier of the bank currently mapped at `addr`.
    fn bank(&self, addr: u16) -> i64;
}

/// Size of the iNES file header preceding PRG data.
pub const INES_HEADER_LEN: usize = 16;

/// A switchable PRG-ROM window: `slots` consecutive banks of `bank_size`
/// bytes starting at `base_address`, each slot mapped to a physical bank.
///
/// This covers the common discrete-logic mappers (NROM, UxROM, AxROM) and is
/// what the command-line tool builds from its `--bank` arguments.
///
/// # Examples
///
/// ```
/// use codec6502::{BankResolver, PrgBankMap};
///
/// // UxROM: switchable 16K bank at $8000, last bank fixed at $C000.
/// let map = PrgBankMap::new(0x4000, 0x8000, vec![2, 7]).unwrap();
/// assert_eq!(map.bank(0x8123), 2);
/// assert_eq!(map.file_offset(0x8123), 16 + 2 * 0x4000 + 0x123);
/// assert_eq!(map.bank(0x0300), -1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrgBankMap {
    bank_size: usize,
    base_address: usize,
    banks: Vec<usize>,
    header_len: usize,
}

impl PrgBankMap {
    /// Creates a bank window. Returns `None` when `bank_size` is not a power
    /// of two or `base_address` is not aligned to it.
    pub fn new(bank_size: usize, base_address: u16, banks: Vec<usize>) -> Option<Self> {
        let base_address = base_address as usize;
        if bank_size == 0 || !bank_size.is_power_of_two() || base_address % bank_size != 0 {
            return None;
        }
        Some(Self {
            bank_size,
            base_address,
            banks,
            header_len: INES_HEADER_LEN,
        })
    }

    /// Overrides the number of header bytes preceding PRG data in the file.
    pub fn with_header_len(mut self, header_len: usize) -> Self {
        self.header_len = header_len;
        self
    }

    /// Maps slot `index` to physical bank `bank`, growing the window if
    /// `index` is one past the last slot.
    ///
    /// Returns `false` and leaves the window unchanged when `index` is further
    /// out than that.
    pub fn set_bank(&mut self, index: usize, bank: usize) -> bool {
        if index == self.banks.len() {
            self.banks.push(bank);
            true
        } else if let Some(slot) = self.banks.get_mut(index) {
            *slot = bank;
            true
        } else {
            false
        }
    }

    /// Physical bank and file offset for `addr`.
    ///
    /// `None` when the address is outside the window or the file offset does
    /// not fit in an `i64`.
    fn map_address(&self, addr: u16) -> Option<(i64, i64)> {
        let addr = addr as usize;
        let relative = addr.checked_sub(self.base_address)?;
        let bank = *self.banks.get(relative / self.bank_size)?;
        let offset = bank
            .checked_mul(self.bank_size)?
            .checked_add(relative & (self.bank_size - 1))?
            .checked_add(self.header_len)?;
        Some((i64::try_from(bank).ok()?, i64::try_from(offset).ok()?))
    }
}

impl BankResolver for PrgBankMap {
    fn file_offset(&self, addr: u16) -> i64 {
        self.map_address(addr).map_or(-1, |(_, offset)| offset)
    }

    fn bank(&self, addr: u16) -> i64 {
        self.map_address(addr).map_or(-1, |(bank, _)| bank)
    }
}
