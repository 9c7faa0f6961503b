use log::warn;

use super::constants::*;
use super::zero_suppress::BoardHitStream;

/// # PlaneHit
/// One zero-suppressed channel placed on the plane grid, carrying the
/// sixteen sample fields of its hit record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaneHit {
    pub row: u16,
    pub column: u16,
    pub samples: [u16; ZS_SAMPLE_FIELDS],
}

/// # Plane
/// The decoded view of one board: a 4 x 64 grid where the row is the chip
/// and the column is the channel. Chip numbering is reversed on the
/// physical plane, so chip 0 sits in the bottom row.
#[derive(Debug, Clone, Default)]
pub struct Plane {
    pub id: u32,
    pub rows: u16,
    pub columns: u16,
    pub trigger_id: Option<u16>,
    pub hits: Vec<PlaneHit>,
}

impl Plane {
    /// Place the hits of one board onto the plane grid. A hit whose encoded
    /// chip is out of range indicates corrupt channel encoding and is
    /// dropped with a warning.
    pub fn from_board(id: u32, board: &BoardHitStream, trigger_id: Option<u16>) -> Self {
        let mut hits: Vec<PlaneHit> = Vec::with_capacity(board.hit_count());
        for hit in board.hits() {
            let chip = (hit.channel_id as usize) / 100;
            if chip >= SKIROCS_PER_BOARD {
                warn!(
                    "There is an error in the channel id encoding! Chip {} does not exist.",
                    chip
                );
                continue;
            }
            let row = (PLANE_ROWS - 1) - chip as u16;
            let column = hit.channel_id % 100;
            hits.push(PlaneHit {
                row,
                column,
                samples: hit.sample_words(),
            })
        }

        Plane {
            id,
            rows: PLANE_ROWS,
            columns: PLANE_COLUMNS,
            trigger_id,
            hits,
        }
    }

    pub fn hit_count(&self) -> usize {
        self.hits.len()
    }
}

/// All planes decoded from one raw event, in block order.
#[derive(Debug, Clone, Default)]
pub struct DecodedEvent {
    pub planes: Vec<Plane>,
}

impl DecodedEvent {
    pub fn hit_count(&self) -> usize {
        self.planes.iter().map(|plane| plane.hits.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zero_suppress::ZsHit;

    fn hit_with_id(channel_id: u16) -> ZsHit {
        ZsHit {
            channel_id,
            low_gain: [0; 5],
            high_gain: [0; 5],
            toa_fall: 0,
            toa_rise: 0,
            tot_slow: 0,
            tot_fast: 0,
            pedestal_after: [0; 2],
        }
    }

    fn board_of(hits: Vec<ZsHit>) -> BoardHitStream {
        let mut board = BoardHitStream::new();
        for hit in hits {
            board.add_hit(hit);
        }
        board
    }

    #[test]
    fn channel_id_maps_to_reversed_row_and_column() {
        let board = board_of(vec![hit_with_id(203), hit_with_id(5), hit_with_id(312)]);
        let plane = Plane::from_board(8, &board, Some(42));

        assert_eq!(plane.id, 8);
        assert_eq!(plane.rows, 4);
        assert_eq!(plane.columns, 64);
        assert_eq!(plane.trigger_id, Some(42));

        let placed: Vec<(u16, u16)> = plane.hits.iter().map(|h| (h.row, h.column)).collect();
        assert_eq!(placed, vec![(1, 3), (3, 5), (0, 12)]);
    }

    #[test]
    fn out_of_range_chip_is_dropped() {
        let board = board_of(vec![hit_with_id(405), hit_with_id(17)]);
        let plane = Plane::from_board(0, &board, None);

        assert_eq!(plane.hit_count(), 1);
        assert_eq!(plane.hits[0].column, 17);
    }
}
