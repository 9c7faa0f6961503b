use std::error::Error;
use std::fmt::Display;
use std::path::PathBuf;

use super::constants::*;

/*
    Config errors
 */
#[derive(Debug)]
pub enum ConfigError {
    BadFilePath(PathBuf),
    IOError(std::io::Error),
    ParsingError(serde_yaml::Error),
}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::IOError(value)
    }
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(value: serde_yaml::Error) -> Self {
        ConfigError::ParsingError(value)
    }
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BadFilePath(path) => write!(f, "File {} given to Config does not exist!", path.display()),
            Self::IOError(e) => write!(f, "Config received an io error: {}", e),
            Self::ParsingError(e) => write!(f, "Config received a parsing error: {}", e),
        }
    }
}

impl Error for ConfigError {

}

/*
    Raw block errors
 */
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockError {
    IncorrectBlockSize(usize),
}

impl Display for BlockError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BlockError::IncorrectBlockSize(s) => write!(f, "Incorrect raw block size! Found: {}, Expected: {}", s, RAW_BLOCK_SIZE_BYTES),
        }
    }
}

impl Error for BlockError {

}

/*
    Roll mask errors
 */
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RollMaskError {
    MissingEdges(u32),
    NonAdjacentEdges(usize, usize),
}

impl Display for RollMaskError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RollMaskError::MissingEdges(mask) => write!(f, "Fewer than two positions set in roll mask! RollMask: 0x{:04x}", mask),
            RollMaskError::NonAdjacentEdges(k1, k2) => write!(f, "The roll mask edges are not consecutive! k1: {}, k2: {}", k1, k2),
        }
    }
}

impl Error for RollMaskError {

}

/*
    Zero suppression errors
 */
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ZeroSuppressError {
    BadRollMask(RollMaskError),
    PedestalSampleCount(usize),
}

impl From<RollMaskError> for ZeroSuppressError {
    fn from(value: RollMaskError) -> Self {
        ZeroSuppressError::BadRollMask(value)
    }
}

impl Display for ZeroSuppressError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ZeroSuppressError::BadRollMask(e) => write!(f, "Zero suppression could not locate the main frame! Error: {}", e),
            ZeroSuppressError::PedestalSampleCount(n) => write!(f, "There is something wrong with the pedestal sample count! Found: {}, Expected: {}", n, PEDESTAL_SAMPLES),
        }
    }
}

impl Error for ZeroSuppressError {

}

/*
    Converter errors
 */
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConverterError {
    WrongEventType(String, String),
}

impl Display for ConverterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConverterError::WrongEventType(found, expected) => write!(f, "Converter was given an event of the wrong type! Found: {}, Expected: {}", found, expected),
        }
    }
}

impl Error for ConverterError {

}

/*
    Registry errors
 */
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    UnknownEventType(String),
}

impl Display for RegistryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegistryError::UnknownEventType(tag) => write!(f, "No converter is registered for event type {}!", tag),
        }
    }
}

impl Error for RegistryError {

}

/*
    Raw file errors
 */
#[derive(Debug)]
pub enum RawFileError {
    BadFilePath(PathBuf),
    NoMatchingFiles(PathBuf),
    IOError(std::io::Error),
}

impl From<std::io::Error> for RawFileError {
    fn from(value: std::io::Error) -> Self {
        RawFileError::IOError(value)
    }
}

impl Display for RawFileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RawFileError::BadFilePath(path) => write!(f, "Raw file {} does not exist!", path.display()),
            RawFileError::NoMatchingFiles(path) => write!(f, "No raw event files were found in {}!", path.display()),
            RawFileError::IOError(e) => write!(f, "Raw file reading received an io error: {}", e),
        }
    }
}

impl Error for RawFileError {

}

/*
    Writer errors
 */
#[derive(Debug)]
pub enum WriterError {
    IOError(std::io::Error),
    CsvError(csv::Error),
}

impl From<std::io::Error> for WriterError {
    fn from(value: std::io::Error) -> Self {
        WriterError::IOError(value)
    }
}

impl From<csv::Error> for WriterError {
    fn from(value: csv::Error) -> Self {
        WriterError::CsvError(value)
    }
}

impl Display for WriterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WriterError::IOError(e) => write!(f, "The plane writer received an io error: {}", e),
            WriterError::CsvError(e) => write!(f, "The plane writer received a csv error: {}", e),
        }
    }
}

impl Error for WriterError {

}

/*
    Processor errors
 */
#[derive(Debug)]
pub enum ProcessorError {
    ConfigError(ConfigError),
    RawFileError(RawFileError),
    RegistryError(RegistryError),
    ConverterError(ConverterError),
    WriterError(WriterError),
}

impl From<ConfigError> for ProcessorError {
    fn from(value: ConfigError) -> Self {
        ProcessorError::ConfigError(value)
    }
}

impl From<RawFileError> for ProcessorError {
    fn from(value: RawFileError) -> Self {
        ProcessorError::RawFileError(value)
    }
}

impl From<RegistryError> for ProcessorError {
    fn from(value: RegistryError) -> Self {
        ProcessorError::RegistryError(value)
    }
}

impl From<ConverterError> for ProcessorError {
    fn from(value: ConverterError) -> Self {
        ProcessorError::ConverterError(value)
    }
}

impl From<WriterError> for ProcessorError {
    fn from(value: WriterError) -> Self {
        ProcessorError::WriterError(value)
    }
}

impl Display for ProcessorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProcessorError::ConfigError(e) => write!(f, "A config error occurred while processing! Error: {}", e),
            ProcessorError::RawFileError(e) => write!(f, "A raw file error occurred while processing! Error: {}", e),
            ProcessorError::RegistryError(e) => write!(f, "A registry error occurred while processing! Error: {}", e),
            ProcessorError::ConverterError(e) => write!(f, "A converter error occurred while processing! Error: {}", e),
            ProcessorError::WriterError(e) => write!(f, "A writer error occurred while processing! Error: {}", e),
        }
    }
}

impl Error for ProcessorError {

}
