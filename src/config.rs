use std::path::{Path, PathBuf};
use serde_derive::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::ConfigError;

/// # DecoderConfig
/// Calibration values for the decoder. These are specific to one hardware
/// revision; the defaults are the values the boards this crate targets were
/// commissioned with, and overriding them in the run configuration only
/// makes sense for a different board batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecoderConfig {
    /// Channel mask selecting the SkiRoc bit-planes in each raw word.
    pub skiroc_mask: u32,
    /// Noise allowance added to the pedestal before the threshold test.
    pub noise: u16,
    /// Zero-suppression threshold above pedestal + noise.
    pub zs_threshold: u16,
    /// Latency, in slices, between the roll edge and the triggered slice.
    pub main_frame_offset: u32,
    /// The one chip/channel pair with no sensor bonded to it.
    pub disconnected_chip: usize,
    pub disconnected_channel: usize,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            skiroc_mask: DEFAULT_SKIROC_MASK,
            noise: DEFAULT_NOISE,
            zs_threshold: DEFAULT_ZS_THRESHOLD,
            main_frame_offset: DEFAULT_MAIN_FRAME_OFFSET,
            disconnected_chip: DISCONNECTED_CHIP,
            disconnected_channel: DISCONNECTED_CHANNEL,
        }
    }
}

/// # Config
/// Structure representing the application configuration. Contains pathing and
/// run information along with the decoder calibration. Configs are
/// serializable and deserializable to YAML using serde and serde_yaml.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub raw_path: PathBuf,
    pub output_path: PathBuf,
    pub run_number: i32,
    #[serde(default)]
    pub decoder: DecoderConfig,
}

impl Config {
    pub fn default() -> Self {
        Self {
            raw_path: PathBuf::from("None"),
            output_path: PathBuf::from("None"),
            run_number: 0,
            decoder: DecoderConfig::default(),
        }
    }

    /// Read the configuration in a YAML file
    pub fn read_config_file(config_path: &Path) -> Result<Self, ConfigError> {
        if !config_path.exists() {
            return Err(ConfigError::BadFilePath(config_path.to_path_buf()));
        }

        let yaml_str = std::fs::read_to_string(config_path)?;

        Ok(serde_yaml::from_str::<Self>(&yaml_str)?)
    }

    /// Construct the run directory
    pub fn get_run_directory(&self) -> Result<PathBuf, ConfigError> {
        let run_dir: PathBuf = self.raw_path.join(self.get_run_str());
        if run_dir.exists() {
            Ok(run_dir)
        } else {
            Err(ConfigError::BadFilePath(run_dir))
        }
    }

    /// Construct the output CSV file name
    pub fn get_output_file_name(&self) -> Result<PathBuf, ConfigError> {
        let output_file_path: PathBuf = self.output_path.join(format!("{}.csv", self.get_run_str()));
        if self.output_path.exists() {
            Ok(output_file_path)
        } else {
            Err(ConfigError::BadFilePath(self.output_path.clone()))
        }
    }

    fn get_run_str(&self) -> String {
        format!("run_{:0>4}", self.run_number)
    }
}
