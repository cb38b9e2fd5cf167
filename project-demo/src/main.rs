mod cli;

use anyhow::Result;
use paging::{Access, PagingEngine, PagingError, Translation};

use cli::Options;

fn print_translation(translation: &Translation) {
    println!(
        "Accessing Logical Address: {} (Page {}, Offset {})",
        translation.logical_address, translation.page_number, translation.offset
    );

    if let Access::Fault { evicted } = translation.access {
        println!(
            "Page fault! Loading page {} into memory.",
            translation.page_number
        );

        if let Some(eviction) = evicted {
            println!(
                "Replacing Page {} from Frame {} with Page {}",
                eviction.page_number, eviction.frame_number, translation.page_number
            );
        }
    }

    println!(
        "Page {} is in Frame {}. Accessing data at physical location (Frame {}, Offset {}) = {:#06X}",
        translation.page_number,
        translation.frame_number,
        translation.frame_number,
        translation.offset,
        translation.physical_address
    );
}

fn print_memory(engine: &PagingEngine) {
    println!();
    println!("Current Memory State:");
    for frame in engine.frames() {
        println!("{}", frame);
    }
    println!();
}

fn print_page_table(engine: &PagingEngine) {
    println!("Page Table:");
    for row in engine.page_table().entries() {
        println!("{}", row);
    }
    println!();
}

fn run(options: Options) -> Result<()> {
    let mut engine = PagingEngine::from_config(&options.config)?;

    println!(
        "Process created with size: {} bytes, divided into {} pages over {} frames.",
        engine.process_size(),
        engine.page_count(),
        engine.frame_count()
    );
    println!();

    let mut rejected = 0;

    for &address in &options.addresses {
        match engine.access(address) {
            Ok(translation) => print_translation(&translation),
            Err(PagingError::AddressOutOfBounds { address, .. }) => {
                println!("Error: Logical address {} exceeds process size.", address);
                rejected += 1;
                println!();
                continue;
            }
            Err(err) => return Err(err.into()),
        }

        print_memory(&engine);
        print_page_table(&engine);
        println!("----------------------------------------");
    }

    let stats = engine.stats();
    println!(
        "Accesses: {}, hits: {}, page faults: {}, replacements: {}, rejected: {}",
        stats.accesses, stats.hits, stats.faults, stats.evictions, rejected
    );

    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let options = match cli::parse_args(std::env::args().skip(1))? {
        Some(options) => options,
        None => {
            cli::print_help();
            return Ok(());
        }
    };

    run(options)
}
