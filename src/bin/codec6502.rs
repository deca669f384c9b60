use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use codec6502::{
    assemble, disassemble_location, disassemble_with, CpuContext, DisassemblyOptions,
    FlatMemory, PrgBankMap,
};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Assemble and disassemble single 6502 instructions"
)]
struct Opts {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Assemble one line of source for the instruction at ADDR
    Asm {
        #[arg(value_parser = parse_u16)]
        address: u16,
        #[arg(value_name = "LINE", required = true)]
        line: Vec<String>,
    },
    /// Disassemble one instruction at ADDR
    Disasm {
        #[arg(value_parser = parse_u16)]
        address: u16,
        #[arg(value_name = "BYTE", value_parser = parse_u8, required = true)]
        bytes: Vec<u8>,
        #[command(flatten)]
        machine: MachineArgs,
    },
    /// Print the fileOffset|bank|value triple the instruction at ADDR refers to
    Locate {
        #[arg(value_parser = parse_u16)]
        address: u16,
        #[arg(value_name = "BYTE", value_parser = parse_u8, required = true)]
        bytes: Vec<u8>,
        #[command(flatten)]
        machine: MachineArgs,
        /// PRG bank size in bytes
        #[arg(long, value_parser = parse_usize, default_value = "0x4000")]
        bank_size: usize,
        /// CPU address of the first bank slot
        #[arg(long, value_parser = parse_u16, default_value = "0x8000")]
        base: u16,
        /// Physical bank mapped in each slot, in slot order
        #[arg(long = "bank", value_parser = parse_usize)]
        banks: Vec<usize>,
        /// Header bytes preceding PRG data in the ROM file
        #[arg(long, value_parser = parse_usize, default_value = "16")]
        header: usize,
    },
}

#[derive(Args, Debug)]
struct MachineArgs {
    #[arg(long, value_parser = parse_u8, default_value = "0")]
    x: u8,
    #[arg(long, value_parser = parse_u8, default_value = "0")]
    y: u8,
    #[arg(long, value_parser = parse_u8, default_value = "0xFD")]
    sp: u8,
    /// Raw memory dump loaded at $0000
    #[arg(long, value_name = "FILE")]
    memory: Option<PathBuf>,
    /// Render BRK with its two signature bytes
    #[arg(long)]
    brk_signature: bool,
}

impl MachineArgs {
    fn load(&self) -> Result<(FlatMemory, CpuContext, DisassemblyOptions)> {
        let mut memory = FlatMemory::new();
        if let Some(path) = &self.memory {
            let dump = std::fs::read(path)
                .with_context(|| format!("reading memory dump {}", path.display()))?;
            let len = dump.len().min(0x10000);
            memory.load(0x0000, &dump[..len]);
            debug!(path = %path.display(), len, "loaded memory dump");
        }
        let cpu = CpuContext::new(self.x, self.y, self.sp);
        let options = DisassemblyOptions {
            brk_signature: self.brk_signature,
        };
        Ok((memory, cpu, options))
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let opts = Opts::parse();

    match opts.command {
        Command::Asm { address, line } => {
            let line = line.join(" ");
            let instr = assemble(address, &line)
                .with_context(|| format!("assembling `{line}` at ${address:04X}"))?;
            let hex: Vec<String> = instr.as_bytes().iter().map(|b| format!("{b:02X}")).collect();
            println!("{}", hex.join(" "));
        }
        Command::Disasm {
            address,
            bytes,
            machine,
        } => {
            let (memory, cpu, options) = machine.load()?;
            println!("{}", disassemble_with(address, &bytes, &memory, &cpu, &options));
        }
        Command::Locate {
            address,
            bytes,
            machine,
            bank_size,
            base,
            banks,
            header,
        } => {
            let (memory, cpu, _) = machine.load()?;
            let map = PrgBankMap::new(bank_size, base, banks)
                .ok_or_else(|| {
                    anyhow!("bank size {bank_size:#X} must be a power of two dividing ${base:04X}")
                })?
                .with_header_len(header);
            println!("{}", disassemble_location(address, &bytes, &memory, &cpu, &map));
        }
    }

    Ok(())
}

fn parse_u64(s: &str) -> Result<u64, String> {
    let hex = s
        .strip_prefix('$')
        .or_else(|| s.strip_prefix("0x"))
        .or_else(|| s.strip_prefix("0X"));
    match hex {
        Some(digits) => u64::from_str_radix(digits, 16),
        None => s.parse(),
    }
    .map_err(|e| format!("invalid number `{s}`: {e}"))
}

fn parse_u16(s: &str) -> Result<u16, String> {
    u16::try_from(parse_u64(s)?).map_err(|_| format!("`{s}` does not fit in 16 bits"))
}

fn parse_u8(s: &str) -> Result<u8, String> {
    u8::try_from(parse_u64(s)?).map_err(|_| format!("`{s}` does not fit in 8 bits"))
}

fn parse_usize(s: &str) -> Result<usize, String> {
    usize::try_from(parse_u64(s)?).map_err(|_| format!("`{s}` is too large"))
}
