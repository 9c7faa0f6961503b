use byteorder::{ByteOrder, LittleEndian};
use log::{info, warn};

use super::config::DecoderConfig;
use super::constants::*;
use super::deinterleave::RawBlock;
use super::error::ConverterError;
use super::plane::{DecodedEvent, Plane};
use super::raw_event::RawEvent;
use super::zero_suppress::extract_boards;

/*
    EventConverter is the seam the processing loop dispatches through: one
    converter per event type. A converter is constructed by the registry,
    initialized once with the begin-of-run event and the decoder
    calibration, and then converts raw events into planes for the rest of
    the run.
 */
pub trait EventConverter {
    /// The event-type tag this converter handles.
    fn event_type(&self) -> &str;

    /// Called once per run, before any conversion, with the begin-of-run
    /// event and the decoder calibration.
    fn initialize(&mut self, bore: &RawEvent, config: &DecoderConfig);

    /// The trigger id stamped on the event, if one can be read.
    fn trigger_id(&self, event: &RawEvent) -> Option<u16>;

    /// Decode one raw event into zero-suppressed planes.
    fn convert(&self, event: &RawEvent) -> Result<DecodedEvent, ConverterError>;
}

/// # HexaBoardConverter
/// Decoder for HexaBoard raw blocks: deinterleaves the SkiRoc register
/// files out of each block, zero-suppresses them board by board, and places
/// the surviving channels on planes. Blocks that are not the expected raw
/// size are skipped with a warning; the rest of the event still decodes.
#[derive(Debug, Clone, Default)]
pub struct HexaBoardConverter {
    config: DecoderConfig,
}

impl HexaBoardConverter {
    pub fn new() -> Self {
        HexaBoardConverter {
            config: DecoderConfig::default(),
        }
    }
}

impl EventConverter for HexaBoardConverter {
    fn event_type(&self) -> &str {
        EVENT_TYPE
    }

    fn initialize(&mut self, bore: &RawEvent, config: &DecoderConfig) {
        self.config = config.clone();
        if let Some(tag) = bore.tag("HeXa") {
            info!("HexaBoard converter initialized with HeXa tag {}", tag);
        }
    }

    fn trigger_id(&self, event: &RawEvent) -> Option<u16> {
        let block = event.block(0)?;
        if block.len() < TRIGGER_ID_OFFSET + 2 {
            return None;
        }
        Some(LittleEndian::read_u16(&block[TRIGGER_ID_OFFSET..]))
    }

    fn convert(&self, event: &RawEvent) -> Result<DecodedEvent, ConverterError> {
        if event.event_type != EVENT_TYPE {
            return Err(ConverterError::WrongEventType(
                event.event_type.clone(),
                EVENT_TYPE.to_string(),
            ));
        }

        let trigger_id = self.trigger_id(event);
        let mut decoded = DecodedEvent::default();
        for (block_index, buffer) in event.blocks().iter().enumerate() {
            let block = match RawBlock::try_from(buffer.as_slice()) {
                Ok(block) => block,
                Err(e) => {
                    warn!(
                        "There is something wrong with the data in block {}! Skipping it. Error: {}",
                        block_index, e
                    );
                    continue;
                }
            };

            let chips = block.deinterleave(self.config.skiroc_mask);
            let boards = extract_boards(&chips, &self.config);
            for (board_index, board) in boards.iter().enumerate() {
                let plane_id = block_index as u32 * PLANE_ID_BLOCK_STRIDE + board_index as u32;
                decoded
                    .planes
                    .push(Plane::from_board(plane_id, board, trigger_id));
            }
        }

        Ok(decoded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trigger_id_is_read_from_the_first_block() {
        let converter = HexaBoardConverter::new();
        let mut event = RawEvent::new(EVENT_TYPE);
        let mut block = vec![0u8; 16];
        block[TRIGGER_ID_OFFSET] = 0x34;
        block[TRIGGER_ID_OFFSET + 1] = 0x12;
        event.add_block(block);

        assert_eq!(converter.trigger_id(&event), Some(0x1234));
    }

    #[test]
    fn trigger_id_is_none_for_short_or_missing_blocks() {
        let converter = HexaBoardConverter::new();
        let event = RawEvent::new(EVENT_TYPE);
        assert_eq!(converter.trigger_id(&event), None);

        let mut event = RawEvent::new(EVENT_TYPE);
        event.add_block(vec![0u8; TRIGGER_ID_OFFSET + 1]);
        assert_eq!(converter.trigger_id(&event), None);
    }

    #[test]
    fn converting_a_foreign_event_type_is_an_error() {
        let converter = HexaBoardConverter::new();
        let event = RawEvent::new("Telescope");
        assert!(converter.convert(&event).is_err());
    }

    #[test]
    fn undersized_blocks_are_skipped_without_failing_the_event() {
        let converter = HexaBoardConverter::new();
        let mut event = RawEvent::new(EVENT_TYPE);
        event.add_block(vec![0u8; 1000]);

        let decoded = converter.convert(&event).unwrap();
        assert_eq!(decoded.planes.len(), 0);
    }
}
