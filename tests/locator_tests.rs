//! Integration tests for bank-aware location rendering

use codec6502::{
    disassemble_location, lookup_by_opcode, resolve_location, AddressingMode, BankResolver,
    CpuContext, FlatMemory, MemoryBus, PrgBankMap,
};

fn uxrom() -> PrgBankMap {
    PrgBankMap::new(0x4000, 0x8000, vec![2, 7]).unwrap()
}

#[test]
fn test_absolute_data_in_switchable_bank() {
    let mut mem = FlatMemory::new();
    mem.write(0x8123, 0x42);
    let text = disassemble_location(
        0xC000,
        &[0xAD, 0x23, 0x81],
        &mem,
        &CpuContext::default(),
        &uxrom(),
    );
    assert_eq!(text, format!("{}|2|66", 16 + 2 * 0x4000 + 0x123));
}

#[test]
fn test_ram_reference_is_not_cartridge_storage() {
    let mut mem = FlatMemory::new();
    mem.write(0x0015, 0x09);
    let cpu = CpuContext::new(0x05, 0, 0xFD);
    let text = disassemble_location(0xC000, &[0xB5, 0x10], &mem, &cpu, &uxrom());
    assert_eq!(text, "-1|-1|9");
}

#[test]
fn test_immediate_and_implied_have_no_location() {
    let mem = FlatMemory::new();
    let cpu = CpuContext::default();
    assert_eq!(disassemble_location(0xC000, &[0xA9, 0x05], &mem, &cpu, &uxrom()), "?");
    assert_eq!(disassemble_location(0xC000, &[0xE8], &mem, &cpu, &uxrom()), "?");
    assert_eq!(disassemble_location(0xC000, &[0x02], &mem, &cpu, &uxrom()), "?");
}

#[test]
fn test_branch_target_location() {
    let mut mem = FlatMemory::new();
    mem.write(0xC010, 0xEA);
    let location = resolve_location(
        0xC000,
        &[0xD0, 0x0E],
        &mem,
        &CpuContext::default(),
        &uxrom(),
    )
    .unwrap();
    assert_eq!(location.address, 0xC010);
    assert_eq!(location.bank, 7);
    assert_eq!(location.file_offset, 16 + 7 * 0x4000 + 0x10);
    assert_eq!(location.value, 0xEA);
}

#[test]
fn test_jump_targets() {
    let mut mem = FlatMemory::new();
    mem.load(0x0300, &[0x00, 0x90]);
    let cpu = CpuContext::default();
    let banks = uxrom();

    let jsr = resolve_location(0xC000, &[0x20, 0x00, 0x80], &mem, &cpu, &banks).unwrap();
    assert_eq!((jsr.address, jsr.bank), (0x8000, 2));

    let indirect = resolve_location(0xC000, &[0x6C, 0x00, 0x03], &mem, &cpu, &banks).unwrap();
    assert_eq!(indirect.address, 0x9000);
    assert_eq!(indirect.file_offset, 16 + 2 * 0x4000 + 0x1000);
}

#[test]
fn test_rts_resolves_past_pushed_address() {
    let mut mem = FlatMemory::new();
    // JSR at $8010 pushed $8012
    mem.load(0x01FC, &[0x12, 0x80]);
    let cpu = CpuContext::new(0, 0, 0xFB);
    let location = resolve_location(0x9000, &[0x60], &mem, &cpu, &uxrom()).unwrap();
    assert_eq!(location.address, 0x8013);
    assert_eq!(location.bank, 2);
}

#[test]
fn test_rti_resolves_to_pulled_address() {
    let mut mem = FlatMemory::new();
    // Status, then PC low/high
    mem.load(0x01FB, &[0x30, 0x40, 0xC1]);
    let cpu = CpuContext::new(0, 0, 0xFA);
    let location = resolve_location(0x9000, &[0x40], &mem, &cpu, &uxrom()).unwrap();
    assert_eq!(location.address, 0xC140);
    assert_eq!(location.bank, 7);
}

#[test]
fn test_bank_switch_changes_location() {
    let mem = FlatMemory::new();
    let cpu = CpuContext::default();
    let mut banks = uxrom();
    let before = disassemble_location(0xC000, &[0xAD, 0x00, 0x80], &mem, &cpu, &banks);
    assert!(banks.set_bank(0, 5));
    let after = disassemble_location(0xC000, &[0xAD, 0x00, 0x80], &mem, &cpu, &banks);
    assert_eq!(before, format!("{}|2|0", 16 + 2 * 0x4000));
    assert_eq!(after, format!("{}|5|0", 16 + 5 * 0x4000));
}

/// A resolver for a cartridge whose fixed bank sits at $E000.
struct FixedTop;

impl BankResolver for FixedTop {
    fn file_offset(&self, addr: u16) -> i64 {
        if addr >= 0xE000 {
            (addr - 0xE000) as i64
        } else {
            -1
        }
    }

    fn bank(&self, addr: u16) -> i64 {
        if addr >= 0xE000 {
            0
        } else {
            -1
        }
    }
}

#[test]
fn test_custom_resolver() {
    let mem = FlatMemory::new();
    let cpu = CpuContext::default();
    assert_eq!(
        disassemble_location(0xE000, &[0x4C, 0x20, 0xE0], &mem, &cpu, &FixedTop),
        "32|0|0"
    );
    assert_eq!(
        disassemble_location(0xE000, &[0x4C, 0x20, 0x60], &mem, &cpu, &FixedTop),
        "-1|-1|0"
    );
}

#[test]
fn test_every_first_byte_locates() {
    let mem = FlatMemory::new();
    let cpu = CpuContext::new(0x01, 0x02, 0xF0);
    let banks = uxrom();

    for opcode in 0..=0xFFu8 {
        let location = disassemble_location(0x8000, &[opcode, 0x34, 0x12], &mem, &cpu, &banks);
        match lookup_by_opcode(opcode) {
            None => assert_eq!(location, "?", "opcode {opcode:02X}"),
            Some(entry) if entry.addressing_mode == AddressingMode::Immediate => {
                assert_eq!(location, "?", "opcode {opcode:02X}")
            }
            Some(_) if location == "?" => {}
            Some(_) => {
                let fields: Vec<&str> = location.split('|').collect();
                assert_eq!(fields.len(), 3, "opcode {opcode:02X}: {location}");
                for field in fields {
                    assert!(field.parse::<i64>().is_ok(), "opcode {opcode:02X}: {location}");
                }
            }
        }
    }
}
