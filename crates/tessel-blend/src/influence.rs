use tessel_catalog::TerrainId;
use tessel_coord::Direction;

/// Set of neighbor directions, one bit per `Direction::index`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct DirectionSet(pub u8);

impl DirectionSet {
    pub const ADJACENT_BITS: u8 = 0xAA;
    pub const DIAGONAL_BITS: u8 = 0x55;

    #[inline]
    pub const fn empty() -> Self {
        Self(0)
    }

    #[inline]
    pub const fn contains(self, dir: Direction) -> bool {
        self.0 & dir.bit() != 0
    }

    #[inline]
    pub fn insert(&mut self, dir: Direction) {
        self.0 |= dir.bit();
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn adjacent(self) -> DirectionSet {
        DirectionSet(self.0 & Self::ADJACENT_BITS)
    }

    #[inline]
    pub const fn diagonal(self) -> DirectionSet {
        DirectionSet(self.0 & Self::DIAGONAL_BITS)
    }

    pub fn iter(self) -> impl Iterator<Item = Direction> {
        Direction::ALL.into_iter().filter(move |d| self.contains(*d))
    }
}

impl FromIterator<Direction> for DirectionSet {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        let mut set = DirectionSet::empty();
        for d in iter {
            set.insert(d);
        }
        set
    }
}

/// What the resolver sees of one neighbor tile.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NeighborTile {
    /// No chunk there, or the tile has no terrain.
    #[default]
    Missing,
    Existing { terrain_id: TerrainId, priority: i32 },
}

/// One neighboring terrain type drawing over the base tile, and from where.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Influence {
    pub terrain_id: TerrainId,
    pub priority: i32,
    pub directions: DirectionSet,
}

/// Collects the terrains that draw over a tile of priority `base_priority`.
///
/// `neighbors` is indexed by `Direction`. Only strictly higher priorities
/// count, and neighbors of the same terrain merge into one entry. A diagonal
/// neighbor is dropped when its terrain already covers one of the two
/// adjacent directions beside it, so all adjacent directions are visited
/// first.
///
/// The result is ordered by ascending priority so the strongest terrain is
/// painted last. Equal priorities keep the order they were first seen in.
pub fn resolve_influences(base_priority: i32, neighbors: &[NeighborTile; 8]) -> Vec<Influence> {
    let mut out: Vec<Influence> = Vec::with_capacity(8);

    for dir in Direction::ADJACENT_FIRST {
        let NeighborTile::Existing {
            terrain_id,
            priority,
        } = neighbors[dir.index()]
        else {
            continue;
        };
        if priority <= base_priority {
            continue;
        }

        let slot = out.iter().position(|i| i.terrain_id == terrain_id);
        if dir.is_diagonal() {
            let (a, b) = dir.flanks();
            let covered = slot
                .map(|s| out[s].directions.contains(a) || out[s].directions.contains(b))
                .unwrap_or(false);
            if covered {
                continue;
            }
        }

        match slot {
            Some(s) => {
                out[s].directions.insert(dir);
                out[s].priority = priority;
            }
            None => out.push(Influence {
                terrain_id,
                priority,
                directions: [dir].into_iter().collect(),
            }),
        }
    }

    out.sort_by_key(|i| i.priority);
    out
}
