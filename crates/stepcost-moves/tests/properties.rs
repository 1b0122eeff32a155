use std::collections::HashSet;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use proptest::prelude::*;
use stepcost_core::{Offset, Position, TerrainKind};
use stepcost_moves::{InvalidRequest, Movement, SpatialIndex, Tile, shared_corners};

const SIDE: i32 = 6;

fn arb_terrain() -> impl Strategy<Value = TerrainKind> {
    prop_oneof![
        Just(TerrainKind::Open),
        Just(TerrainKind::Forest),
        Just(TerrainKind::Stone),
    ]
}

fn arb_index() -> impl Strategy<Value = SpatialIndex> {
    prop::collection::vec(arb_terrain(), (SIDE * SIDE) as usize).prop_map(|cells| {
        SpatialIndex::from_fn(SIDE as usize, SIDE as usize, |p| {
            cells[p.key(SIDE as usize)]
        })
        .unwrap()
    })
}

fn arb_cell() -> impl Strategy<Value = Position> {
    (0..SIDE, 0..SIDE).prop_map(|(x, y)| Position::new(x, y))
}

fn hash_of<T: Hash>(v: &T) -> u64 {
    let mut h = DefaultHasher::new();
    v.hash(&mut h);
    h.finish()
}

proptest! {
    #[test]
    fn tile_identity_is_position_identity(
        x in -100i32..100,
        y in -100i32..100,
        a in arb_terrain(),
        b in arb_terrain(),
    ) {
        let p = Position::new(x, y);
        let ta = Tile::new(p, a);
        let tb = Tile::new(Position::new(x, y), b);
        prop_assert_eq!(ta, tb);
        prop_assert_eq!(hash_of(&ta), hash_of(&tb));

        let mut set = HashSet::new();
        set.insert(ta);
        prop_assert!(!set.insert(tb));
        prop_assert!(set.contains(&p));
    }

    #[test]
    fn non_adjacent_pairs_are_rejected(
        idx in arb_index(),
        from in arb_cell(),
        to in arb_cell(),
    ) {
        let step = from.offset_to(to);
        prop_assume!(!step.is_adjacent());
        prop_assert_eq!(
            idx.evaluate(from, to),
            Err(InvalidRequest::NotAdjacent { from, to })
        );
    }

    #[test]
    fn orthogonal_cost_is_destination_weight(
        idx in arb_index(),
        from in arb_cell(),
        dir in 0usize..4,
    ) {
        let to = from + Offset::DIRECTIONS[dir];
        prop_assume!(idx.contains(to));
        let m = idx.evaluate(from, to).unwrap();
        match idx.terrain_at(to).weight() {
            Some(w) => prop_assert_eq!(m, Movement::Allowed { cost: w }),
            None => prop_assert_eq!(m, Movement::Blocked),
        }
    }

    #[test]
    fn diagonal_moves_are_symmetric_in_corners(
        idx in arb_index(),
        from in arb_cell(),
        dir in 4usize..8,
    ) {
        let to = from + Offset::DIRECTIONS[dir];
        prop_assume!(idx.contains(to));
        let corners = shared_corners(from, to).unwrap();
        let cut = corners
            .iter()
            .all(|&c| idx.lookup(c) == Some(TerrainKind::Stone));

        let there = idx.evaluate(from, to).unwrap();
        let back = idx.evaluate(to, from).unwrap();
        if cut {
            prop_assert_eq!(there, Movement::Blocked);
            prop_assert_eq!(back, Movement::Blocked);
        } else {
            prop_assert_eq!(there.allowed(), !idx.terrain_at(to).is_blocking());
            prop_assert_eq!(back.allowed(), !idx.terrain_at(from).is_blocking());
        }
        if let Some(cost) = there.cost() {
            prop_assert!(cost >= std::f64::consts::SQRT_2);
        }
    }

    #[test]
    fn evaluation_is_deterministic(
        idx in arb_index(),
        from in arb_cell(),
        dir in 0usize..8,
    ) {
        let to = from + Offset::DIRECTIONS[dir];
        prop_assert_eq!(idx.evaluate(from, to), idx.evaluate(from, to));
    }
}
