use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use super::constants::{EVENT_TYPE, RAW_BLOCK_SIZE_BYTES};
use super::error::RawFileError;
use super::raw_event::RawEvent;

/// Collect the .raw event files of a run directory, sorted by name so that
/// events replay in the order the run recorded them.
pub fn get_event_files(run_dir: &Path) -> Result<Vec<PathBuf>, RawFileError> {
    if !run_dir.exists() {
        return Err(RawFileError::BadFilePath(run_dir.to_path_buf()));
    }

    let mut files: Vec<PathBuf> = Vec::new();
    for item in run_dir.read_dir()? {
        let item_path = item?.path();
        if item_path.extension().map(|ext| ext == "raw").unwrap_or(false) {
            files.push(item_path);
        }
    }
    files.sort();

    if files.is_empty() {
        return Err(RawFileError::NoMatchingFiles(run_dir.to_path_buf()));
    }
    Ok(files)
}

/// Load one event file as a raw event, splitting the contents into
/// board-sized blocks. A trailing short chunk is kept as an undersized
/// block; the converter rejects it and decodes the rest of the event.
pub fn load_raw_event(path: &Path) -> Result<RawEvent, RawFileError> {
    if !path.exists() {
        return Err(RawFileError::BadFilePath(path.to_path_buf()));
    }

    let mut file = File::open(path)?;
    let mut contents: Vec<u8> = Vec::new();
    file.read_to_end(&mut contents)?;

    let mut event = RawEvent::new(EVENT_TYPE);
    for chunk in contents.chunks(RAW_BLOCK_SIZE_BYTES) {
        event.add_block(chunk.to_vec());
    }
    Ok(event)
}
