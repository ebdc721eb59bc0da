use proptest::prelude::*;
use tessel_blend::{NeighborTile, resolve_influences};
use tessel_catalog::TerrainId;
use tessel_coord::Direction;

// Priority is a function of the terrain id, as it is in a real catalog.
fn priority_of(id: i32) -> i32 {
    (id * 7) % 5
}

fn neighbor() -> impl Strategy<Value = NeighborTile> {
    prop_oneof![
        1 => Just(NeighborTile::Missing),
        4 => (0i32..6).prop_map(|id| NeighborTile::Existing {
            terrain_id: TerrainId(id),
            priority: priority_of(id),
        }),
    ]
}

fn neighbors() -> impl Strategy<Value = [NeighborTile; 8]> {
    prop::array::uniform8(neighbor())
}

proptest! {
    // Only strictly stronger neighbors ever appear
    #[test]
    fn weaker_or_equal_never_influence(base in 0i32..6, n in neighbors()) {
        let base_pri = priority_of(base);
        for inf in resolve_influences(base_pri, &n) {
            prop_assert!(inf.priority > base_pri);
            prop_assert!(!inf.directions.is_empty());
        }
    }

    // One entry per terrain, ascending priority, every bit backed by a neighbor of that terrain
    #[test]
    fn influences_are_grouped_and_ordered(base in 0i32..6, n in neighbors()) {
        let inf = resolve_influences(priority_of(base), &n);
        prop_assert!(inf.len() <= 8);
        for (i, a) in inf.iter().enumerate() {
            for b in &inf[i + 1..] {
                prop_assert_ne!(a.terrain_id, b.terrain_id);
                prop_assert!(a.priority <= b.priority);
            }
            for d in a.directions.iter() {
                match n[d.index()] {
                    NeighborTile::Existing { terrain_id, .. } => prop_assert_eq!(terrain_id, a.terrain_id),
                    NeighborTile::Missing => prop_assert!(false, "bit without neighbor"),
                }
            }
        }
    }

    // A kept corner never sits next to an edge of the same terrain
    #[test]
    fn kept_corners_are_not_shadowed(base in 0i32..6, n in neighbors()) {
        for inf in resolve_influences(priority_of(base), &n) {
            for d in inf.directions.iter().filter(|d| d.is_diagonal()) {
                let (a, b) = d.flanks();
                prop_assert!(!inf.directions.contains(a));
                prop_assert!(!inf.directions.contains(b));
            }
        }
    }

    // Every stronger adjacent neighbor is represented
    #[test]
    fn adjacent_influence_is_never_lost(base in 0i32..6, n in neighbors()) {
        let base_pri = priority_of(base);
        let inf = resolve_influences(base_pri, &n);
        for d in Direction::ALL.into_iter().filter(|d| d.is_adjacent()) {
            if let NeighborTile::Existing { terrain_id, priority } = n[d.index()] {
                if priority > base_pri {
                    let hit = inf.iter().any(|i| i.terrain_id == terrain_id && i.directions.contains(d));
                    prop_assert!(hit);
                }
            }
        }
    }
}
