use bitvec::prelude::*;
use log::warn;

use super::constants::TIME_SLICES;
use super::error::RollMaskError;

/*
    The chip samples into a ring of 13 time slices and marks the edge of the
    currently rolled window with two set bits in the roll mask register. The
    two bits are adjacent, or {0, 12} when the window wraps the ring. From
    the trailing edge and a fixed calibration offset we recover which slice
    held the trigger.
 */

/// Index of the last rolled slice. The mask must carry exactly two set bits
/// within the 13 slice positions; extra bits are reported and the first two
/// are used, while fewer than two or a non-adjacent pair is an error that
/// leaves the window unrecoverable.
pub fn roll_mask_end(mask: u32) -> Result<usize, RollMaskError> {
    let positions: Vec<usize> = mask.view_bits::<Lsb0>()[..TIME_SLICES].iter_ones().collect();
    if positions.len() > 2 {
        warn!(
            "More than two positions set in roll mask! RollMask: 0x{:04x}",
            mask
        );
    } else if positions.len() < 2 {
        return Err(RollMaskError::MissingEdges(mask));
    }

    let k1 = positions[0];
    let k2 = positions[1];
    if k1 == 0 && k2 == TIME_SLICES - 1 {
        //Wrap at the 0/12 boundary: slice 0 is the last rolled slice
        return Ok(0);
    }
    if k2 - k1 != 1 {
        return Err(RollMaskError::NonAdjacentEdges(k1, k2));
    }

    Ok(k2)
}

/// Slice index aligned with the trigger, `offset` register slices behind the
/// roll edge. Slice order is reversed in the raw data, hence the subtraction
/// from 12. Intermediate values go negative, so everything runs through
/// `rem_euclid` rather than the remainder operator.
pub fn main_frame(last: usize, offset: u32) -> usize {
    let slices = TIME_SLICES as i64;
    let rolled = (last as i64 + slices - offset as i64).rem_euclid(slices);
    (slices - 1 - rolled).rem_euclid(slices) as usize
}

fn wrap_slice(slice: i64) -> usize {
    slice.rem_euclid(TIME_SLICES as i64) as usize
}

/// The set of slice indices extraction reads for one chip: the five slices
/// centered on the main frame, in ascending order, plus the two slices
/// immediately after the rolled window which sample the post-track pedestal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameWindow {
    pub main_frame: usize,
    pub slices: [usize; 5],
    pub after_track: [usize; 2],
}

pub fn frame_window(roll_mask: u32, offset: u32) -> Result<FrameWindow, RollMaskError> {
    let last = roll_mask_end(roll_mask)?;
    let main = main_frame(last, offset) as i64;

    Ok(FrameWindow {
        main_frame: main as usize,
        slices: [
            wrap_slice(main - 2),
            wrap_slice(main - 1),
            main as usize,
            wrap_slice(main + 1),
            wrap_slice(main + 2),
        ],
        after_track: [wrap_slice(last as i64 + 1), wrap_slice(last as i64 + 2)],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adjacent_edges() {
        assert_eq!(roll_mask_end((1 << 5) | (1 << 6)).unwrap(), 6);
        assert_eq!(roll_mask_end(0b11).unwrap(), 1);
        assert_eq!(roll_mask_end((1 << 11) | (1 << 12)).unwrap(), 12);
    }

    #[test]
    fn wrap_at_ring_boundary() {
        assert_eq!(roll_mask_end((1 << 0) | (1 << 12)).unwrap(), 0);
    }

    #[test]
    fn non_adjacent_edges_are_an_error() {
        match roll_mask_end((1 << 3) | (1 << 9)) {
            Err(RollMaskError::NonAdjacentEdges(3, 9)) => (),
            other => panic!("expected NonAdjacentEdges, got {:?}", other),
        }
    }

    #[test]
    fn missing_edges_are_an_error() {
        assert_eq!(roll_mask_end(0), Err(RollMaskError::MissingEdges(0)));
        assert_eq!(
            roll_mask_end(1 << 4),
            Err(RollMaskError::MissingEdges(1 << 4))
        );
    }

    #[test]
    fn extra_edges_use_the_first_two() {
        //Bits 2, 3, 7: first two are adjacent, so last comes from them
        assert_eq!(roll_mask_end((1 << 2) | (1 << 3) | (1 << 7)).unwrap(), 3);
    }

    #[test]
    fn main_frame_closed_form() {
        //mainFrame = (12 - ((last + 13 - offset) mod 13)) mod 13, offset 8
        assert_eq!(main_frame(0, 8), 7);
        assert_eq!(main_frame(6, 8), 1);
        assert_eq!(main_frame(12, 8), 8);
    }

    #[test]
    fn window_wraps_the_ring() {
        let window = frame_window((1 << 5) | (1 << 6), 8).unwrap();
        assert_eq!(window.main_frame, 1);
        assert_eq!(window.slices, [12, 0, 1, 2, 3]);
        assert_eq!(window.after_track, [7, 8]);
    }
}
