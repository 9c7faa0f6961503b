use bitvec::prelude::*;
use byteorder::{ByteOrder, LittleEndian};
use log::{debug, warn};

use super::constants::*;
use super::error::BlockError;
use super::register_file::ChipRegisterFile;

/*
    A raw block is 30,788 little-endian 32-bit words. Word 0 echoes the
    SkiRoc channel mask; every word after that carries one bit-plane row of
    one register across all chips at once. Word 1 + i*16 + j holds, for
    register i, bit 15-j of every active chip, with chip k sitting at the
    k-th set bit position of the mask (scanned low to high).
 */
#[derive(Debug, Clone)]
pub struct RawBlock {
    words: Vec<u32>,
}

impl TryFrom<&[u8]> for RawBlock {
    type Error = BlockError;

    fn try_from(buffer: &[u8]) -> Result<Self, Self::Error> {
        if buffer.len() != RAW_BLOCK_SIZE_BYTES {
            return Err(BlockError::IncorrectBlockSize(buffer.len()));
        }

        let mut words = vec![0; RAW_BLOCK_SIZE_WORDS];
        LittleEndian::read_u32_into(buffer, &mut words);
        Ok(RawBlock { words })
    }
}

impl RawBlock {
    /// The channel mask the firmware wrote into word 0.
    pub fn mask_echo(&self) -> u32 {
        self.words[0]
    }

    /// Expand the bit-interleaved stream into one register file per chip.
    /// The external mask decides which bit positions are read and how many
    /// chips come out; a disagreement with the mask echoed in the data, or a
    /// population count other than four, is reported but does not stop the
    /// decode.
    pub fn deinterleave(&self, skiroc_mask: u32) -> Vec<ChipRegisterFile> {
        if self.mask_echo() != skiroc_mask {
            debug!(
                "The external SkiRoc mask (0x{:08x}) does not agree with the one found in data (0x{:08x})",
                skiroc_mask,
                self.mask_echo()
            );
        }

        let fifo_positions: Vec<usize> = skiroc_mask.view_bits::<Lsb0>().iter_ones().collect();
        if fifo_positions.len() != SKIROCS_PER_BOARD {
            warn!(
                "The SkiRoc mask does not agree with the expected number of chips! Mask count: {}, Expected: {}",
                fifo_positions.len(),
                SKIROCS_PER_BOARD
            );
        }

        let mut chips = vec![ChipRegisterFile::new(); fifo_positions.len()];
        for i in 0..REGISTERS_PER_CHIP {
            for j in 0..BITS_PER_REGISTER {
                let word = self.words[RAW_DATA_OFFSET_WORDS + i * BITS_PER_REGISTER + j];
                for (chip, fifo) in chips.iter_mut().zip(fifo_positions.iter()) {
                    chip.or_register(i, ((word >> fifo) & 1) << (BITS_PER_REGISTER - 1 - j));
                }
            }
        }

        chips
    }
}

/// Pack register files into a raw byte block, the exact inverse of
/// [`RawBlock::deinterleave`]. Chips are laid onto the set bits of the mask
/// in ascending order and word 0 is set to the mask echo. This is the
/// producer side of the format; the decoder only needs it to generate
/// synthetic blocks.
pub fn interleave_registers(chips: &[ChipRegisterFile], skiroc_mask: u32) -> Vec<u8> {
    let fifo_positions: Vec<usize> = skiroc_mask.view_bits::<Lsb0>().iter_ones().collect();

    let mut words = vec![0u32; RAW_BLOCK_SIZE_WORDS];
    words[0] = skiroc_mask;
    for i in 0..REGISTERS_PER_CHIP {
        for j in 0..BITS_PER_REGISTER {
            let mut word = 0;
            for (chip, fifo) in chips.iter().zip(fifo_positions.iter()) {
                let bit = (chip.register(i) >> (BITS_PER_REGISTER - 1 - j)) & 1;
                word |= bit << fifo;
            }
            words[RAW_DATA_OFFSET_WORDS + i * BITS_PER_REGISTER + j] = word;
        }
    }

    let mut block = vec![0; RAW_BLOCK_SIZE_BYTES];
    LittleEndian::write_u32_into(&words, &mut block);
    block
}
