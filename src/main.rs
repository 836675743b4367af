use std::fs::File;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

use sorthat::catalog::Catalog;
use sorthat::cli;

#[derive(Parser)]
#[command(name = "sorthat", about = "Sorting Hat personality quiz")]
struct Args {
    /// TOML file with a custom question catalog (defaults to the built-in set)
    #[arg(short, long)]
    catalog: Option<PathBuf>,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();

    // Initialize file logger - writes to sorthat.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("sorthat.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let catalog = match &args.catalog {
        Some(path) => match Catalog::load(path) {
            Ok(catalog) => catalog,
            Err(e) => {
                eprintln!("Failed to load catalog {}: {e}", path.display());
                std::process::exit(1);
            }
        },
        None => Catalog::builtin(),
    };

    log::info!("Sorting quiz starting up with {} questions", catalog.len());

    cli::run(Arc::new(catalog))
}
