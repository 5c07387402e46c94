use std::collections::BTreeMap;

use avl_forest::AvlMap;
use proptest::prelude::*;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;

#[derive(Clone, Debug)]
enum Op {
    Insert(u8, u32),
    Remove(u8),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (any::<u8>(), any::<u32>()).prop_map(|(k, v)| Op::Insert(k, v)),
        any::<u8>().prop_map(Op::Remove),
    ]
}

fn within_height_bound(map: &AvlMap<u8, u32>) -> bool {
    let n = map.len() as f64;
    map.height() as f64 <= 1.45 * (n + 2.0).log2()
}

/// `(key, value, bf, left key, right key)` for every node, in key order.
fn layout(map: &AvlMap<u8, u32>) -> Vec<(u8, u32, i8, Option<u8>, Option<u8>)> {
    let mut out = Vec::new();
    map.for_each(|_i, n| {
        out.push((
            n.k,
            n.v,
            n.bf,
            n.l.map(|l| *map.key(l)),
            n.r.map(|r| *map.key(r)),
        ))
    });
    out
}

proptest! {
    #[test]
    fn every_operation_keeps_avl_invariants(ops in prop::collection::vec(op(), 1..200)) {
        let mut map = AvlMap::new();
        let mut model = BTreeMap::new();
        for op in ops {
            match op {
                Op::Insert(k, v) => {
                    map.insert(k, v);
                    model.insert(k, v);
                }
                Op::Remove(k) => {
                    prop_assert_eq!(map.remove(&k), model.remove(&k));
                }
            }
            prop_assert_eq!(map.assert_valid(), Ok(()));
            prop_assert!(within_height_bound(&map));
            prop_assert_eq!(map.len(), model.len());
        }
        let entries: Vec<(u8, u32)> = map.iter().map(|(k, v)| (*k, *v)).collect();
        let expected: Vec<(u8, u32)> = model.into_iter().collect();
        prop_assert_eq!(entries, expected);
    }

    #[test]
    fn overwrite_only_changes_the_value(keys in prop::collection::vec(any::<u8>(), 1..100), pick in any::<prop::sample::Index>()) {
        let mut map = AvlMap::new();
        for &k in &keys {
            map.insert(k, 0);
        }
        let key = keys[pick.index(keys.len())];
        let mut before = layout(&map);
        for entry in before.iter_mut() {
            if entry.0 == key {
                entry.1 = 7;
            }
        }

        map.insert(key, 7);
        prop_assert_eq!(layout(&map), before);
    }

    #[test]
    fn removing_absent_key_is_a_no_op(keys in prop::collection::vec(0u8..128, 0..100), absent in 128u8..) {
        let mut map = AvlMap::new();
        for &k in &keys {
            map.insert(k, u32::from(k));
        }
        let before = layout(&map);
        let root = map.root_index();

        prop_assert_eq!(map.remove(&absent), None);
        prop_assert_eq!(layout(&map), before);
        prop_assert_eq!(map.root_index(), root);
    }

    #[test]
    fn insert_all_then_remove_all_empties_the_tree(
        (inserts, removes) in prop::collection::btree_set(any::<u8>(), 1..150)
            .prop_flat_map(|set| {
                let keys: Vec<u8> = set.into_iter().collect();
                (Just(keys.clone()).prop_shuffle(), Just(keys).prop_shuffle())
            })
    ) {
        let mut map = AvlMap::new();
        for &k in &inserts {
            map.insert(k, u32::from(k));
        }
        prop_assert_eq!(map.len(), inserts.len());
        for k in &removes {
            prop_assert_eq!(map.remove(k), Some(u32::from(*k)));
            prop_assert_eq!(map.assert_valid(), Ok(()));
        }
        prop_assert!(map.is_empty());
        prop_assert!(map.arena().is_empty());
        prop_assert_eq!(map.root_index(), None);
    }
}

#[test]
fn seeded_random_ladder_matches_btree_map() {
    let mut rng = Xoshiro256StarStar::seed_from_u64(0x5eed);
    let mut map = AvlMap::<u16, u64>::new();
    let mut model = BTreeMap::new();

    for step in 0..5_000u64 {
        let key = rng.gen_range(0..400u16);
        if rng.gen_bool(0.55) {
            map.insert(key, step);
            model.insert(key, step);
        } else {
            assert_eq!(map.remove(&key), model.remove(&key));
        }
        map.assert_valid().unwrap();
        assert_eq!(map.len(), model.len());
    }

    for (k, v) in &model {
        assert_eq!(map.get(k), Some(v));
    }
}
