use super::constants::*;

/*
    ChipRegisterFile is the de-interleaved view of one SKI-ROC: 1924 registers
    of 16 bits each, widened to u32 so the bit-assembly in the deinterleaver
    cannot overflow. The index space is fixed by the chip:
        [0, 1664)    13 time slices of 128 slots (64 low gain, then 64 high gain)
        [1664, 1920) TOA/TOT diagnostic fields, 4 groups of 64
        1920         the roll mask
        1921..1923   global timestamp (not decoded here)
    Channel numbering is reversed relative to slot order, so channel ch sits
    at slot position 63 - ch within its gain half.
 */
#[derive(Debug, Clone)]
pub struct ChipRegisterFile {
    registers: Box<[u32; REGISTERS_PER_CHIP]>,
}

impl Default for ChipRegisterFile {
    fn default() -> Self {
        Self::new()
    }
}

impl ChipRegisterFile {
    /// A register file with every register zeroed. The deinterleaver relies
    /// on this: registers never touched by a set bit stay zero.
    pub fn new() -> Self {
        ChipRegisterFile {
            registers: Box::new([0; REGISTERS_PER_CHIP]),
        }
    }

    /// Slot position of a channel within its gain half.
    pub fn channel_position(channel: usize) -> usize {
        CHANNELS_PER_CHIP - 1 - channel
    }

    pub fn register(&self, index: usize) -> u32 {
        self.registers[index]
    }

    pub fn set_register(&mut self, index: usize, value: u32) {
        self.registers[index] = value;
    }

    /// OR bits into a register. This is how the deinterleaver assembles
    /// values one bit-plane at a time.
    pub fn or_register(&mut self, index: usize, bits: u32) {
        self.registers[index] |= bits;
    }

    /// Raw (still Gray-coded) low-gain sample for a slot position at a time slice.
    pub fn low_gain(&self, slice: usize, position: usize) -> u32 {
        self.registers[slice * SLOTS_PER_SLICE + position]
    }

    /// Raw high-gain sample for a slot position at a time slice.
    pub fn high_gain(&self, slice: usize, position: usize) -> u32 {
        self.registers[slice * SLOTS_PER_SLICE + HIGH_GAIN_OFFSET + position]
    }

    pub fn toa_fall(&self, position: usize) -> u32 {
        self.registers[TOA_FALL_BASE + position]
    }

    pub fn toa_rise(&self, position: usize) -> u32 {
        self.registers[TOA_RISE_BASE + position]
    }

    pub fn tot_slow(&self, position: usize) -> u32 {
        self.registers[TOT_SLOW_BASE + position]
    }

    pub fn tot_fast(&self, position: usize) -> u32 {
        self.registers[TOT_FAST_BASE + position]
    }

    /// The 13-bit roll mask register.
    pub fn roll_mask(&self) -> u32 {
        self.registers[ROLL_MASK_REGISTER]
    }

    /// The three global timestamp words, raw and undecoded.
    pub fn global_timestamp(&self) -> [u32; GLOBAL_TIMESTAMP_WORDS] {
        [
            self.registers[GLOBAL_TIMESTAMP_BASE],
            self.registers[GLOBAL_TIMESTAMP_BASE + 1],
            self.registers[GLOBAL_TIMESTAMP_BASE + 2],
        ]
    }
}
