use tessel_blend::{DirectionSet, NeighborTile, resolve_influences};
use tessel_catalog::TerrainId;
use tessel_coord::Direction;

const GRASS_PRI: i32 = 1;

fn tile(id: i32, priority: i32) -> NeighborTile {
    NeighborTile::Existing {
        terrain_id: TerrainId(id),
        priority,
    }
}

fn around(entries: &[(Direction, NeighborTile)]) -> [NeighborTile; 8] {
    let mut n = [NeighborTile::Missing; 8];
    for (d, t) in entries {
        n[d.index()] = *t;
    }
    n
}

fn dirs(ds: &[Direction]) -> DirectionSet {
    ds.iter().copied().collect()
}

#[test]
fn diagonal_next_to_same_terrain_edge_is_shadowed() {
    // Sand on the edge next to a sand corner: the corner adds nothing.
    let sand = tile(2, 2);
    let n = around(&[(Direction::NorthEast, sand), (Direction::North, sand)]);
    let inf = resolve_influences(GRASS_PRI, &n);
    assert_eq!(inf.len(), 1);
    assert_eq!(inf[0].terrain_id, TerrainId(2));
    assert_eq!(inf[0].directions, dirs(&[Direction::NorthEast]));
}

#[test]
fn diagonal_next_to_other_terrain_edge_still_counts() {
    let sand = tile(2, 2);
    let water = tile(3, 5);
    let n = around(&[(Direction::NorthEast, water), (Direction::North, sand)]);
    let inf = resolve_influences(GRASS_PRI, &n);
    assert_eq!(inf.len(), 2);
    assert_eq!(inf[0].terrain_id, TerrainId(2));
    assert_eq!(inf[0].directions, dirs(&[Direction::North]));
    assert_eq!(inf[1].terrain_id, TerrainId(3));
}

#[test]
fn lone_diagonal_contributes_corner() {
    let n = around(&[(Direction::South, tile(4, 9))]);
    let inf = resolve_influences(GRASS_PRI, &n);
    assert_eq!(inf.len(), 1);
    assert_eq!(inf[0].directions, dirs(&[Direction::South]));
}

#[test]
fn equal_and_lower_priorities_never_blend() {
    let n = around(&[
        (Direction::NorthEast, tile(0, GRASS_PRI)),
        (Direction::SouthEast, tile(5, GRASS_PRI)),
        (Direction::SouthWest, tile(6, 0)),
        (Direction::North, tile(7, -3)),
    ]);
    assert!(resolve_influences(GRASS_PRI, &n).is_empty());
}

#[test]
fn same_terrain_merges_into_one_influence() {
    let sand = tile(2, 2);
    let n = around(&[
        (Direction::NorthEast, sand),
        (Direction::SouthWest, sand),
        (Direction::South, sand),
        (Direction::West, sand),
    ]);
    let inf = resolve_influences(GRASS_PRI, &n);
    assert_eq!(inf.len(), 1);
    // South and West both touch the SouthWest edge and are dropped.
    assert_eq!(
        inf[0].directions,
        dirs(&[Direction::NorthEast, Direction::SouthWest])
    );
}

#[test]
fn sorted_by_priority_with_ties_in_visit_order() {
    let n = around(&[
        (Direction::NorthEast, tile(8, 9)),
        (Direction::SouthEast, tile(3, 4)),
        (Direction::SouthWest, tile(5, 4)),
        (Direction::North, tile(6, 2)),
    ]);
    let inf = resolve_influences(GRASS_PRI, &n);
    let order: Vec<i32> = inf.iter().map(|i| i.terrain_id.0).collect();
    // 3 and 5 tie; 3 was visited first (SouthEast before SouthWest).
    assert_eq!(order, vec![6, 3, 5, 8]);
}

#[test]
fn missing_neighbors_are_skipped() {
    let inf = resolve_influences(GRASS_PRI, &[NeighborTile::Missing; 8]);
    assert!(inf.is_empty());
}

#[test]
fn surrounded_tile_has_at_most_eight_influences() {
    let mut n = [NeighborTile::Missing; 8];
    for d in Direction::ALL {
        n[d.index()] = tile(10 + d.index() as i32, 10 + d.index() as i32);
    }
    let inf = resolve_influences(GRASS_PRI, &n);
    assert_eq!(inf.len(), 8);
    assert!(inf.windows(2).all(|w| w[0].priority <= w[1].priority));
}
