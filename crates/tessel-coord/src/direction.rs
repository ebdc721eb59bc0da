use crate::TileDelta;

/// The eight neighbor directions around a tile or chunk.
///
/// Indices are fixed: a direction's index is also its bit in influence masks.
/// Odd indices share an edge with the center (adjacent), even indices only
/// touch a corner (diagonal). Names follow the on-screen orientation of the
/// isometric projection, where `+ne` points up-right and `+se` down-right.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Direction {
    North = 0,
    NorthEast = 1,
    East = 2,
    SouthEast = 3,
    South = 4,
    SouthWest = 5,
    West = 6,
    NorthWest = 7,
}

const OFFSETS: [TileDelta; 8] = [
    TileDelta::new(1, -1),
    TileDelta::new(1, 0),
    TileDelta::new(1, 1),
    TileDelta::new(0, 1),
    TileDelta::new(-1, 1),
    TileDelta::new(-1, 0),
    TileDelta::new(-1, -1),
    TileDelta::new(0, -1),
];

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// All adjacent directions, then all diagonal ones.
    pub const ADJACENT_FIRST: [Direction; 8] = [
        Direction::NorthEast,
        Direction::SouthEast,
        Direction::SouthWest,
        Direction::NorthWest,
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub const fn from_index(i: usize) -> Direction {
        Self::ALL[i & 0x07]
    }

    #[inline]
    pub const fn bit(self) -> u8 {
        1 << (self as u8)
    }

    #[inline]
    pub const fn is_adjacent(self) -> bool {
        (self as u8) % 2 == 1
    }

    #[inline]
    pub const fn is_diagonal(self) -> bool {
        !self.is_adjacent()
    }

    #[inline]
    pub const fn opposite(self) -> Direction {
        Self::from_index(self.index() + 4)
    }

    /// The two directions on either side of this one.
    #[inline]
    pub const fn flanks(self) -> (Direction, Direction) {
        (
            Self::from_index(self.index() + 7),
            Self::from_index(self.index() + 1),
        )
    }

    #[inline]
    pub const fn offset(self) -> TileDelta {
        OFFSETS[self.index()]
    }

    pub fn from_offset(delta: TileDelta) -> Option<Direction> {
        Self::ALL.into_iter().find(|d| d.offset() == delta)
    }
}
