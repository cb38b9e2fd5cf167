//! Command-line options for the demo.
//!
//! ```text
//! paging-demo [--page-size N] [--memory-size N] [--pages N | --process-size N] [ADDR ...]
//! ```
//!
//! Addresses and sizes accept decimal or `0x`-prefixed hexadecimal. With no
//! addresses the classic ten-access trace is replayed.

use anyhow::{anyhow, bail, Context, Result};
use paging::{
    config::{DEFAULT_MEMORY_SIZE, DEFAULT_PAGE_COUNT, DEFAULT_PAGE_SIZE},
    SimulationConfig,
};

pub const DEFAULT_ADDRESSES: [usize; 10] = [1, 4, 9, 12, 8, 13, 20, 24, 4, 28];

#[derive(Debug, PartialEq, Eq)]
pub struct Options {
    pub config: SimulationConfig,
    pub addresses: Vec<usize>,
}

pub fn print_help() {
    eprintln!("Demand paging simulator with FIFO replacement");
    eprintln!();
    eprintln!("Usage: paging-demo [OPTIONS] [ADDR ...]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --page-size N     Page size in bytes (default {})", DEFAULT_PAGE_SIZE);
    eprintln!("  --memory-size N   Physical memory in bytes (default {})", DEFAULT_MEMORY_SIZE);
    eprintln!("  --pages N         Number of pages in the process (default {})", DEFAULT_PAGE_COUNT);
    eprintln!("  --process-size N  Process size in bytes, rounded up to whole pages");
    eprintln!("  -h, --help        Print this help message");
    eprintln!();
    eprintln!("Set RUST_LOG=debug to trace faults and replacements.");
}

fn parse_number(text: &str) -> Result<usize> {
    let parsed = match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        Some(hex) => usize::from_str_radix(hex, 16),
        None => text.parse(),
    };

    parsed.with_context(|| format!("invalid number '{}'", text))
}

/// Returns `None` when help was requested.
pub fn parse_args<I>(args: I) -> Result<Option<Options>>
where
    I: IntoIterator<Item = String>,
{
    let mut page_size = DEFAULT_PAGE_SIZE;
    let mut memory_size = DEFAULT_MEMORY_SIZE;
    let mut page_count = None;
    let mut process_size = None;
    let mut addresses = Vec::new();

    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        let mut value = |flag: &str| -> Result<usize> {
            let text = args
                .next()
                .ok_or_else(|| anyhow!("missing value for {}", flag))?;
            parse_number(&text)
        };

        match arg.as_str() {
            "-h" | "--help" => return Ok(None),
            "--page-size" => page_size = value("--page-size")?,
            "--memory-size" => memory_size = value("--memory-size")?,
            "--pages" => page_count = Some(value("--pages")?),
            "--process-size" => process_size = Some(value("--process-size")?),
            flag if flag.starts_with('-') => bail!("unknown option: {}", flag),
            address => addresses.push(parse_number(address)?),
        }
    }

    let config = match (page_count, process_size) {
        (Some(_), Some(_)) => bail!("--pages and --process-size are mutually exclusive"),
        (None, Some(process_size)) => {
            SimulationConfig::for_process(process_size, page_size, memory_size)?
        }
        (page_count, None) => {
            let config = SimulationConfig::new(
                page_size,
                memory_size,
                page_count.unwrap_or(DEFAULT_PAGE_COUNT),
            );
            config.validate()?;
            config
        }
    };

    if addresses.is_empty() {
        addresses.extend(DEFAULT_ADDRESSES);
    }

    Ok(Some(Options { config, addresses }))
}
