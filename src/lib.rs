//! # rusted_hexa
//!
//! rusted_hexa is a decoder for the raw telemetry of HexaBoard sensor readout
//! boards (four SKI-ROC front-end chips per board). Each raw block is a fixed
//! 123,152 byte bitstream in which the 1924 sixteen-bit registers of every
//! chip are bit-interleaved across 32-bit words. The library de-interleaves
//! the stream into per-chip register files, locates the trigger-aligned time
//! slice from the roll mask, converts the Gray-coded ADC samples to binary,
//! and zero-suppresses each chip against a per-event median pedestal. What
//! survives is emitted as fixed-layout hit records grouped into planes.
//!
//! The accompanying binary walks a run directory of `.raw` event files and
//! writes the decoded planes to a CSV file. A run configuration looks like:
//!
//! ```yml
//! raw_path: /data/hexa
//! output_path: /data/decoded
//! run_number: 42
//! decoder:
//!   skiroc_mask: 15
//!   noise: 10
//!   zs_threshold: 70
//!   main_frame_offset: 8
//!   disconnected_chip: 2
//!   disconnected_channel: 60
//! ```
//!
//! The decoder calibration values are specific to one hardware revision; the
//! defaults above match the boards this crate was written for.

pub mod config;
pub mod constants;
pub mod converter;
pub mod deinterleave;
pub mod error;
pub mod gray;
pub mod plane;
pub mod process;
pub mod raw_event;
pub mod raw_file;
pub mod register_file;
pub mod registry;
pub mod roll_mask;
pub mod writer;
pub mod zero_suppress;
