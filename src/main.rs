use std::path::PathBuf;

use clap::Parser;
use log::{error, info};

use rusted_hexa::config::Config;
use rusted_hexa::constants::EVENT_TYPE;
use rusted_hexa::converter::HexaBoardConverter;
use rusted_hexa::process::process_run;
use rusted_hexa::registry::ConverterRegistry;

/// Decode HexaBoard raw telemetry runs into zero-suppressed hit CSV files.
#[derive(Parser)]
#[command(name = "rusted_hexa")]
struct Cli {
    /// Path to the YAML run configuration
    config: PathBuf,
}

fn main() {
    //Setup logging
    simplelog::TermLogger::init(
        simplelog::LevelFilter::Info,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )
    .unwrap();

    let cli = Cli::parse();

    info!("Starting up rusted hexa...\n");

    let config = match Config::read_config_file(&cli.config) {
        Ok(c) => c,
        Err(e) => {
            error!("An error occurred reading the configuration: {} Shutting down.\n", e);
            return;
        }
    };

    //Register the converters the run can dispatch to
    let mut registry = ConverterRegistry::new();
    registry.register(EVENT_TYPE, || Box::new(HexaBoardConverter::new()));

    info!(
        "Processing run {} from {}...\n",
        config.run_number,
        config.raw_path.display()
    );

    match process_run(&config, &registry) {
        Ok(_) => info!("Processing successfully completed.\n"),
        Err(e) => error!("Processing ran into an error: {} Shutting down.\n", e),
    }

    return;
}
