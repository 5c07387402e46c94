use std::cmp::Ordering;

use avl_forest::{AvlMap, AvlSet, TreeError};

#[test]
fn avl_map_smoke_matrix() {
    let mut map = AvlMap::<i64, i32>::new();
    map.insert(1, 1);
    map.insert(3, 5);
    map.insert(4, 5);
    map.insert(3, 15);
    map.insert(41, 0);
    map.insert(44, 123);

    assert_eq!(map.get(&44), Some(&123));
    assert_eq!(map.get(&3), Some(&15));
    assert_eq!(map.len(), 5);

    let keys: Vec<i64> = map.keys().copied().collect();
    assert_eq!(keys, vec![1, 3, 4, 41, 44]);
    map.assert_valid().unwrap();
}

#[test]
fn avl_map_iteration_matrix() {
    let mut map = AvlMap::<String, i32>::new();
    assert_eq!(map.first(), None);
    assert_eq!(map.iter().next(), None);

    map.insert("b".to_string(), 2);
    map.insert("a".to_string(), 1);
    map.insert("c".to_string(), 3);

    let mut list = Vec::new();
    let mut entry = map.first();
    while let Some(i) = entry {
        list.push((map.key(i).clone(), *map.value(i)));
        entry = map.next(i);
    }
    let expected = vec![
        ("a".to_string(), 1),
        ("b".to_string(), 2),
        ("c".to_string(), 3),
    ];
    assert_eq!(list, expected);

    let from_iter: Vec<(String, i32)> = map.iter().map(|(k, v)| (k.clone(), *v)).collect();
    assert_eq!(from_iter, expected);
    assert_eq!(map.iter().len(), 3);

    let mut backwards = Vec::new();
    let mut entry = map.last();
    while let Some(i) = entry {
        backwards.push(*map.value(i));
        entry = map.prev(i);
    }
    assert_eq!(backwards, vec![3, 2, 1]);

    let mut visited = Vec::new();
    map.for_each(|_i, n| visited.push(n.v));
    assert_eq!(visited, vec![1, 2, 3]);
}

#[test]
fn avl_map_ladder_insert_delete_matrix() {
    let mut map = AvlMap::<i32, i32>::new();

    for i in 0..300 {
        map.insert(i, i);
        map.assert_valid().unwrap();
    }
    assert_eq!(map.len(), 300);
    assert!(map.height() <= 11);

    for i in (0..300).step_by(3) {
        assert_eq!(map.remove(&i), Some(i));
        map.assert_valid().unwrap();
    }

    for i in 0..300 {
        if i % 3 == 0 {
            assert_eq!(map.get(&i), None);
        } else {
            assert_eq!(map.get(&i), Some(&i));
        }
    }
    assert_eq!(map.len(), 200);
    assert_eq!(map.arena().len(), 200);
}

#[test]
fn avl_map_misc_api_matrix() {
    let mut map = AvlMap::<i32, i32>::new();
    assert!(map.is_empty());
    assert_eq!(map.len(), 0);
    assert_eq!(map.height(), 0);
    assert_eq!(map.get_or_next_lower(&10), None);

    map.insert(10, 100);
    let i5 = map.insert(5, 50);
    let i20 = map.insert(20, 200);

    assert!(!map.is_empty());
    assert_eq!(map.find(&5), Some(i5));
    assert_eq!(map.get(&10), Some(&100));
    assert_eq!(map.first().map(|i| *map.key(i)), Some(5));
    assert_eq!(map.last().map(|i| *map.key(i)), Some(20));
    assert_eq!(map.get_or_next_lower(&4), None);
    assert_eq!(map.get_or_next_lower(&19).map(|i| *map.key(i)), Some(10));
    assert_eq!(map.get_or_next_lower(&21).map(|i| *map.key(i)), Some(20));

    *map.get_mut(&10).unwrap() = 101;
    *map.value_mut_by_index(i20) = 201;
    assert_eq!(map.get(&10), Some(&101));
    assert_eq!(map.get(&20), Some(&201));

    assert!(map.contains_key(&10));
    assert_eq!(map.remove_entry(&10), Some((10, 101)));
    assert_eq!(map.remove(&10), None);

    map.clear();
    assert!(map.is_empty());
    assert_eq!(map.len(), 0);
    assert_eq!(map.first(), None);
    map.assert_valid().unwrap();
}

#[test]
fn avl_map_collect_and_extend_matrix() {
    let mut map: AvlMap<i32, &str> = vec![(2, "two"), (1, "one")].into_iter().collect();
    map.extend([(3, "three"), (1, "uno")]);

    assert_eq!(map.len(), 3);
    assert_eq!(map.get(&1), Some(&"uno"));
    assert_eq!(format!("{map:?}"), r#"{1: "uno", 2: "two", 3: "three"}"#);
    map.assert_valid().unwrap();
}

#[test]
fn avl_map_custom_comparator_matrix() {
    let mut map = AvlMap::with_comparator(|a: &i32, b: &i32| b.cmp(a));
    for k in 0..20 {
        map.insert(k, ());
        map.assert_valid().unwrap();
    }
    let keys: Vec<i32> = map.keys().copied().collect();
    assert_eq!(keys, (0..20).rev().collect::<Vec<_>>());
}

#[test]
fn avl_map_print_matrix() {
    let mut map = AvlMap::<i32, char>::new();
    assert_eq!(map.print(), "∅");
    map.insert(1, 'a');
    map.insert(2, 'b');
    let out = map.print();
    assert!(out.starts_with("Node[0] [bf=1] { 1 = 'a' }"));
    assert!(out.contains("{ 2 = 'b' }"));
}

#[test]
fn tree_error_display_matrix() {
    let err = TreeError::BalanceMismatch {
        node: 3,
        expected: 1,
        actual: 0,
    };
    assert_eq!(
        err.to_string(),
        "balance factor mismatch at node 3: expected 1, got 0"
    );
}

#[test]
fn avl_set_matrix() {
    let mut set = AvlSet::<i32>::new();
    assert_eq!(set.len(), 0);
    assert!(!set.has(&1));

    set.add(1);
    set.add(24);
    set.add(42);
    set.add(42);
    assert_eq!(set.len(), 3);
    assert!(set.has(&1));
    assert!(set.has(&24));
    assert!(set.has(&42));
    assert!(!set.has(&25));

    let entries: Vec<i32> = set.iter().copied().collect();
    assert_eq!(entries, vec![1, 24, 42]);

    assert!(set.del(&24));
    assert!(set.del(&1));
    assert!(!set.del(&1));
    assert!(!set.has(&24));
    assert!(set.has(&42));
    assert_eq!(set.len(), 1);
    set.del(&42);
    assert!(set.is_empty());

    set.assert_valid().unwrap();
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct Pair(i32, i32);

#[test]
fn avl_set_custom_comparator_matrix() {
    let cmp = |a: &Pair, b: &Pair| -> Ordering { a.0.cmp(&b.0).then(a.1.cmp(&b.1)) };
    let mut set = AvlSet::<Pair, _>::with_comparator(cmp);
    set.add(Pair(0, 0));
    set.add(Pair(0, 1));
    set.add(Pair(2, 3));
    set.add(Pair(3, 3));
    assert_eq!(set.len(), 4);
    set.del(&Pair(0, 0));
    assert!(!set.has(&Pair(0, 0)));
    assert!(set.has(&Pair(0, 1)));
    set.assert_valid().unwrap();
}
