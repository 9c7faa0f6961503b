use indicatif::{ProgressBar, ProgressStyle};
use log::info;

use crate::config::Config;
use crate::error::ProcessorError;
use crate::raw_file::{get_event_files, load_raw_event};
use crate::registry::ConverterRegistry;
use crate::writer::PlaneCsvWriter;

/*
    The run loop: walk the run directory event file by event file, decode
    each event through the registered converter, and stream the surviving
    hits to the CSV sink. The first event of the run doubles as the
    begin-of-run event and initializes the converter before being
    converted like any other.
 */
pub fn process_run(config: &Config, registry: &ConverterRegistry) -> Result<(), ProcessorError> {
    let run_dir = config.get_run_directory()?;
    let event_files = get_event_files(&run_dir)?;
    let mut writer = PlaneCsvWriter::new(&config.get_output_file_name()?)?;

    let bore = load_raw_event(&event_files[0])?;
    let mut converter = registry.create(&bore.event_type)?;
    converter.initialize(&bore, &config.decoder);

    let progress = ProgressBar::new(event_files.len() as u64);
    let style =
        ProgressStyle::with_template("[{elapsed}] {bar:40.cyan/blue} {pos}/{len} {msg}").unwrap();
    progress.set_style(style);

    let mut hit_total: usize = 0;
    for (event_number, path) in event_files.iter().enumerate() {
        let event = load_raw_event(path)?;
        let decoded = converter.convert(&event)?;
        hit_total += decoded.hit_count();
        writer.write_event(event_number as u64, &decoded)?;
        progress.inc(1);
    }

    progress.finish();
    info!(
        "Converted {} events with {} hits above threshold.\n",
        event_files.len(),
        hit_total
    );

    return Ok(());
}
