//! Mask shape ids within a blend mode's mask atlas.
//!
//! Direction bit layout (bit = `Direction::index`):
//!
//! ```text
//!        0
//!     7     1
//!  6     @     2
//!     5     3
//!        4
//! ```
//!
//! Odd bits are edge neighbors, even bits corner neighbors.

use tessel_coord::TileCoord;

use crate::DirectionSet;

/// Straight edges. Each has four pre-rendered variants at `id..id+4`.
pub const EDGE_SE: u8 = 0;
pub const EDGE_NE: u8 = 4;
pub const EDGE_SW: u8 = 8;
pub const EDGE_NW: u8 = 12;

/// Corner-only masks for diagonal neighbors.
pub const CORNER_E: u8 = 16;
pub const CORNER_S: u8 = 17;
pub const CORNER_N: u8 = 18;
pub const CORNER_W: u8 = 19;

const ADJACENT_MASKS: [(u8, u8); 15] = [
    (0x08, EDGE_SE),
    (0x02, EDGE_NE),
    (0x20, EDGE_SW),
    (0x80, EDGE_NW),
    (0x22, 20),
    (0x88, 21),
    (0xA0, 22),
    (0x82, 23),
    (0x28, 24),
    (0x0A, 25),
    (0x2A, 26),
    (0xA8, 27),
    (0xA2, 28),
    (0x8A, 29),
    (0xAA, 30),
];

// Indexed by diagonal bit / 2: bits 0, 2, 4, 6.
const DIAGONAL_MASKS: [u8; 4] = [CORNER_N, CORNER_E, CORNER_S, CORNER_W];

/// Mask for the adjacent part of `directions`, if the pattern has one.
///
/// Straight edges get a variant offset from the tile position so long
/// borders do not repeat the same shape on every tile.
pub fn adjacent_mask(directions: DirectionSet, pos: TileCoord) -> Option<u8> {
    let bits = directions.adjacent().0;
    let (_, id) = ADJACENT_MASKS.iter().find(|(pattern, _)| *pattern == bits)?;
    if is_straight_edge(*id) {
        Some(id + edge_variant(pos))
    } else {
        Some(*id)
    }
}

/// One corner mask per diagonal direction in `directions`, in bit order.
/// Corners are never merged, even when they belong to the same terrain.
pub fn diagonal_masks(directions: DirectionSet) -> impl Iterator<Item = u8> {
    let bits = directions.diagonal().0;
    (0..4).filter_map(move |l| {
        if bits & (1 << (l * 2)) != 0 {
            Some(DIAGONAL_MASKS[l])
        } else {
            None
        }
    })
}

#[inline]
pub fn is_straight_edge(id: u8) -> bool {
    id <= EDGE_NW && id % 4 == 0
}

#[inline]
pub fn edge_variant(pos: TileCoord) -> u8 {
    (i64::from(pos.ne) + i64::from(pos.se)).rem_euclid(4) as u8
}
