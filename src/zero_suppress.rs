use log::warn;

use super::config::DecoderConfig;
use super::constants::*;
use super::error::ZeroSuppressError;
use super::gray::decode_adc;
use super::register_file::ChipRegisterFile;
use super::roll_mask::{frame_window, FrameWindow};

/*
    Zero suppression works per chip, per event. The pedestal is the lower
    median of the 32 even channels' low-gain samples at the main frame, and a
    channel survives only when its main-frame low-gain charge clears
    pedestal + noise by at least the threshold. Odd channels are never read:
    the chip has 32 physical analog channels multiplexed onto 64 register
    slots, with the low and high gain halves alternating by 64.
 */

/// One channel that survived zero suppression. The field order is the wire
/// order of the fixed 17-word hit record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZsHit {
    /// Encoded as (chip within board) * 100 + channel.
    pub channel_id: u16,
    /// Low-gain charge over the five slices centered on the main frame, in
    /// ascending slice order (main - 2 first).
    pub low_gain: [u16; 5],
    /// High-gain charge over the same five slices.
    pub high_gain: [u16; 5],
    pub toa_fall: u16,
    pub toa_rise: u16,
    pub tot_slow: u16,
    pub tot_fast: u16,
    /// Low-gain samples from the two slices after the rolled window.
    pub pedestal_after: [u16; 2],
}

impl ZsHit {
    /// The full 17-word record.
    pub fn to_words(&self) -> [u16; ZS_HIT_WORDS] {
        let mut words = [0; ZS_HIT_WORDS];
        words[0] = self.channel_id;
        words[1..6].copy_from_slice(&self.low_gain);
        words[6..11].copy_from_slice(&self.high_gain);
        words[11] = self.toa_fall;
        words[12] = self.toa_rise;
        words[13] = self.tot_slow;
        words[14] = self.tot_fast;
        words[15..17].copy_from_slice(&self.pedestal_after);
        words
    }

    /// The 16 sample fields, everything after the channel id.
    pub fn sample_words(&self) -> [u16; ZS_SAMPLE_FIELDS] {
        let mut samples = [0; ZS_SAMPLE_FIELDS];
        samples.copy_from_slice(&self.to_words()[1..]);
        samples
    }
}

/// The zero-suppressed output of one board: four chips' hits, in extraction
/// order.
#[derive(Debug, Clone, Default)]
pub struct BoardHitStream {
    hits: Vec<ZsHit>,
}

impl BoardHitStream {
    pub fn new() -> Self {
        BoardHitStream { hits: Vec::new() }
    }

    pub fn add_hit(&mut self, hit: ZsHit) {
        self.hits.push(hit);
    }

    pub fn hits(&self) -> &[ZsHit] {
        &self.hits
    }

    pub fn hit_count(&self) -> usize {
        self.hits.len()
    }

    /// Flat view of the stream, `hit_count() * ZS_HIT_WORDS` words long.
    pub fn as_words(&self) -> Vec<u16> {
        let mut words = Vec::with_capacity(self.hits.len() * ZS_HIT_WORDS);
        for hit in self.hits.iter() {
            words.extend_from_slice(&hit.to_words());
        }
        words
    }
}

/// Per-event pedestal for one chip: collect the decoded low-gain samples of
/// the 32 even channels at the main frame, sort, and take the 16th smallest.
/// This is the lower median of the even-length set, not an average of the
/// two middle values.
pub fn chip_pedestal(
    chip: &ChipRegisterFile,
    main_frame: usize,
) -> Result<u16, ZeroSuppressError> {
    let mut samples: Vec<u16> = Vec::with_capacity(PEDESTAL_SAMPLES);
    for ch in (0..CHANNELS_PER_CHIP).step_by(2) {
        let position = ChipRegisterFile::channel_position(ch);
        samples.push(decode_adc(chip.low_gain(main_frame, position)));
    }

    if samples.len() != PEDESTAL_SAMPLES {
        return Err(ZeroSuppressError::PedestalSampleCount(samples.len()));
    }

    samples.sort_unstable();
    Ok(samples[PEDESTAL_SAMPLES / 2 - 1])
}

/// Extract the surviving channels of one chip. `chip_index` is the chip's
/// position within the block; it drives the encoded channel id and the
/// disconnected-channel veto.
pub fn extract_chip_hits(
    chip: &ChipRegisterFile,
    chip_index: usize,
    config: &DecoderConfig,
) -> Result<Vec<ZsHit>, ZeroSuppressError> {
    let window = frame_window(chip.roll_mask(), config.main_frame_offset)?;
    let pedestal = chip_pedestal(chip, window.main_frame)?;
    let floor = pedestal as i32 + config.noise as i32;

    let mut hits: Vec<ZsHit> = Vec::new();
    for ch in (0..CHANNELS_PER_CHIP).step_by(2) {
        //This channel has no sensor bonded to it, whatever it reads is noise
        if chip_index == config.disconnected_chip && ch == config.disconnected_channel {
            continue;
        }

        let position = ChipRegisterFile::channel_position(ch);
        let charge_low_gain = decode_adc(chip.low_gain(window.main_frame, position));
        if (charge_low_gain as i32) - floor < config.zs_threshold as i32 {
            continue;
        }

        hits.push(assemble_hit(chip, chip_index, ch, position, &window));
    }

    Ok(hits)
}

fn assemble_hit(
    chip: &ChipRegisterFile,
    chip_index: usize,
    channel: usize,
    position: usize,
    window: &FrameWindow,
) -> ZsHit {
    let mut low_gain = [0; 5];
    let mut high_gain = [0; 5];
    for (slot, slice) in window.slices.iter().enumerate() {
        low_gain[slot] = decode_adc(chip.low_gain(*slice, position));
        high_gain[slot] = decode_adc(chip.high_gain(*slice, position));
    }

    ZsHit {
        channel_id: ((chip_index % SKIROCS_PER_BOARD) * 100 + channel) as u16,
        low_gain,
        high_gain,
        toa_fall: decode_adc(chip.toa_fall(position)),
        toa_rise: decode_adc(chip.toa_rise(position)),
        tot_slow: decode_adc(chip.tot_slow(position)),
        tot_fast: decode_adc(chip.tot_fast(position)),
        pedestal_after: [
            decode_adc(chip.low_gain(window.after_track[0], position)),
            decode_adc(chip.low_gain(window.after_track[1], position)),
        ],
    }
}

/// Zero-suppress a block's worth of chips, grouped four chips to a board.
/// A chip whose roll mask cannot be resolved, or whose pedestal sample set
/// is malformed, contributes no hits; the rest of its board still decodes.
/// Chips beyond the last complete group of four are dropped.
pub fn extract_boards(chips: &[ChipRegisterFile], config: &DecoderConfig) -> Vec<BoardHitStream> {
    if chips.len() % SKIROCS_PER_BOARD != 0 {
        warn!("Number of SkiRocs is not right: {}", chips.len());
    }
    let board_count = chips.len() / SKIROCS_PER_BOARD;
    if board_count != BOARDS_PER_BLOCK {
        warn!("Number of HexaBoards is not right: {}", board_count);
    }

    let mut boards = vec![BoardHitStream::default(); board_count];
    for (chip_index, chip) in chips.iter().enumerate() {
        let board_index = chip_index / SKIROCS_PER_BOARD;
        if board_index >= board_count {
            break;
        }
        match extract_chip_hits(chip, chip_index, config) {
            Ok(hits) => boards[board_index].hits.extend(hits),
            Err(e) => warn!(
                "SkiRoc {} contributes no hits to this event! Error: {}",
                chip_index, e
            ),
        }
    }

    boards
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gray::binary_to_gray;

    //Roll mask bits 5 and 6: last = 6, main frame = 1 with the default offset
    const TEST_ROLL_MASK: u32 = (1 << 5) | (1 << 6);
    const TEST_MAIN_FRAME: usize = 1;

    fn set_low_gain(chip: &mut ChipRegisterFile, slice: usize, channel: usize, value: u16) {
        let position = ChipRegisterFile::channel_position(channel);
        chip.set_register(
            slice * SLOTS_PER_SLICE + position,
            binary_to_gray(value) as u32,
        );
    }

    fn set_high_gain(chip: &mut ChipRegisterFile, slice: usize, channel: usize, value: u16) {
        let position = ChipRegisterFile::channel_position(channel);
        chip.set_register(
            slice * SLOTS_PER_SLICE + HIGH_GAIN_OFFSET + position,
            binary_to_gray(value) as u32,
        );
    }

    /// A chip with a valid roll mask and every even channel reading
    /// `pedestal` at the main frame.
    fn quiet_chip(pedestal: u16) -> ChipRegisterFile {
        let mut chip = ChipRegisterFile::new();
        chip.set_register(ROLL_MASK_REGISTER, TEST_ROLL_MASK);
        for ch in (0..CHANNELS_PER_CHIP).step_by(2) {
            set_low_gain(&mut chip, TEST_MAIN_FRAME, ch, pedestal);
        }
        chip
    }

    #[test]
    fn pedestal_is_the_sixteenth_smallest_sample() {
        let mut chip = ChipRegisterFile::new();
        //Even channel ch reads 200 - ch, so the sorted set is 138, 140, ... 200
        for ch in (0..CHANNELS_PER_CHIP).step_by(2) {
            set_low_gain(&mut chip, 0, ch, 200 - ch as u16);
        }
        assert_eq!(chip_pedestal(&chip, 0).unwrap(), 138 + 2 * 15);
    }

    #[test]
    fn pedestal_is_not_an_averaged_median() {
        let mut chip = quiet_chip(100);
        //Push the upper half of the set to 300: sorted[15] = 100, sorted[16] = 300
        for ch in (0..CHANNELS_PER_CHIP / 2).step_by(2) {
            set_low_gain(&mut chip, TEST_MAIN_FRAME, ch, 300);
        }
        assert_eq!(chip_pedestal(&chip, TEST_MAIN_FRAME).unwrap(), 100);
    }

    #[test]
    fn threshold_boundary_is_inclusive() {
        let config = DecoderConfig::default();
        //pedestal 100, noise 10, threshold 70: the cut sits at exactly 180
        let mut chip = quiet_chip(100);
        set_low_gain(&mut chip, TEST_MAIN_FRAME, 8, 180);
        set_low_gain(&mut chip, TEST_MAIN_FRAME, 10, 179);

        let hits = extract_chip_hits(&chip, 0, &config).unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].channel_id, 8);
    }

    #[test]
    fn disconnected_channel_is_always_vetoed() {
        let config = DecoderConfig::default();
        let mut chip = quiet_chip(100);
        set_low_gain(&mut chip, TEST_MAIN_FRAME, 60, 4000);
        set_low_gain(&mut chip, TEST_MAIN_FRAME, 58, 4000);

        //On chip 2 channel 60 is vetoed no matter how much charge it reads
        let hits = extract_chip_hits(&chip, 2, &config).unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].channel_id, 258);

        //On any other chip the same channel passes
        let hits = extract_chip_hits(&chip, 1, &config).unwrap();
        assert_eq!(hits.len(), 2);
    }

    #[test]
    fn hit_record_layout() {
        let config = DecoderConfig::default();
        let mut chip = quiet_chip(100);
        let ch = 12;
        let position = ChipRegisterFile::channel_position(ch);

        //Main frame 1, so the window is slices {12, 0, 1, 2, 3} ascending
        for (slot, slice) in [12usize, 0, 1, 2, 3].iter().enumerate() {
            set_low_gain(&mut chip, *slice, ch, 1000 + slot as u16);
            set_high_gain(&mut chip, *slice, ch, 2000 + slot as u16);
        }
        chip.set_register(TOA_FALL_BASE + position, binary_to_gray(301) as u32);
        chip.set_register(TOA_RISE_BASE + position, binary_to_gray(302) as u32);
        chip.set_register(TOT_SLOW_BASE + position, binary_to_gray(303) as u32);
        chip.set_register(TOT_FAST_BASE + position, binary_to_gray(304) as u32);
        //After-track slices for last = 6 are 7 and 8
        set_low_gain(&mut chip, 7, ch, 401);
        set_low_gain(&mut chip, 8, ch, 402);

        let hits = extract_chip_hits(&chip, 5, &config).unwrap();
        assert_eq!(hits.len(), 1);
        let hit = &hits[0];
        //Chip 5 encodes as chip 1 of its board
        assert_eq!(hit.channel_id, 112);
        assert_eq!(hit.low_gain, [1000, 1001, 1002, 1003, 1004]);
        assert_eq!(hit.high_gain, [2000, 2001, 2002, 2003, 2004]);
        assert_eq!(
            hit.to_words(),
            [112, 1000, 1001, 1002, 1003, 1004, 2000, 2001, 2002, 2003, 2004, 301, 302, 303, 304, 401, 402]
        );
        assert_eq!(hit.sample_words()[0], 1000);
        assert_eq!(hit.sample_words()[15], 402);
    }

    #[test]
    fn chip_with_bad_roll_mask_contributes_no_hits() {
        let config = DecoderConfig::default();
        let mut chips = vec![
            quiet_chip(100),
            quiet_chip(100),
            quiet_chip(100),
            quiet_chip(100),
        ];
        for (index, chip) in chips.iter_mut().enumerate() {
            set_low_gain(chip, TEST_MAIN_FRAME, 20, 500);
            if index == 1 {
                chip.set_register(ROLL_MASK_REGISTER, 0);
            }
        }

        let boards = extract_boards(&chips, &config);
        assert_eq!(boards.len(), 1);
        let ids: Vec<u16> = boards[0].hits().iter().map(|h| h.channel_id).collect();
        assert_eq!(ids, vec![20, 220, 320]);
        assert_eq!(boards[0].as_words().len(), 3 * ZS_HIT_WORDS);
    }

    #[test]
    fn incomplete_chip_group_is_dropped() {
        let config = DecoderConfig::default();
        let mut chips = vec![quiet_chip(100); 5];
        for chip in chips.iter_mut() {
            set_low_gain(chip, TEST_MAIN_FRAME, 2, 600);
        }

        let boards = extract_boards(&chips, &config);
        assert_eq!(boards.len(), 1);
        assert_eq!(boards[0].hit_count(), 4);
    }
}
