use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;

use crate::error::TreeError;
use crate::types::KvNode;
use crate::util::{
    assert_tree, find, find_or_next_lower, first, height, last, next, prev, relocate, size,
    Removal,
};

/// Tree operation callbacks required by [`OrderedMap`].
///
/// The map does the key search; the strategy decides how a new leaf is
/// attached and how a node is taken out, and may restructure the tree while
/// doing so. Rotations must not move nodes between arena slots.
pub trait MapTreeOps<K, V, N>
where
    N: KvNode<K, V>,
{
    fn new_node(key: K, value: V) -> N;

    /// Attaches leaf `node` as the left child of `parent`. Returns the root.
    fn insert_left(arena: &mut [N], root: u32, node: u32, parent: u32) -> u32;

    /// Attaches leaf `node` as the right child of `parent`. Returns the root.
    fn insert_right(arena: &mut [N], root: u32, node: u32, parent: u32) -> u32;

    fn remove(arena: &mut [N], root: Option<u32>, node: u32) -> Removal;
}

pub(crate) fn default_comparator<K: Ord>(a: &K, b: &K) -> Ordering {
    a.cmp(b)
}

/// Index of the last slot of a non-empty arena of `len` nodes.
///
/// Node links are `u32`, so an arena holds at most `u32::MAX + 1` nodes.
fn last_slot(len: usize) -> u32 {
    debug_assert!(
        len > 0 && len - 1 <= u32::MAX as usize,
        "arena of {len} nodes exceeds the u32 index space"
    );
    (len - 1) as u32
}

/// Arena-backed sorted map core.
///
/// Entries are addressed by arena index (`u32`). An index stays valid until
/// the next removal: removing a node moves the last arena slot into the
/// freed one so the arena always holds exactly the live nodes.
pub struct OrderedMap<K, V, N, O, C = fn(&K, &K) -> Ordering>
where
    N: KvNode<K, V>,
    O: MapTreeOps<K, V, N>,
    C: Fn(&K, &K) -> Ordering,
{
    arena: Vec<N>,
    root: Option<u32>,
    comparator: C,
    len: usize,
    _kv: PhantomData<(K, V)>,
    _ops: PhantomData<O>,
}

impl<K, V, N, O> OrderedMap<K, V, N, O, fn(&K, &K) -> Ordering>
where
    K: Ord,
    N: KvNode<K, V>,
    O: MapTreeOps<K, V, N>,
{
    pub fn new() -> Self {
        Self::with_comparator(default_comparator::<K>)
    }
}

impl<K, V, N, O> Default for OrderedMap<K, V, N, O, fn(&K, &K) -> Ordering>
where
    K: Ord,
    N: KvNode<K, V>,
    O: MapTreeOps<K, V, N>,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, N, O, C> OrderedMap<K, V, N, O, C>
where
    N: KvNode<K, V>,
    O: MapTreeOps<K, V, N>,
    C: Fn(&K, &K) -> Ordering,
{
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            arena: Vec::new(),
            root: None,
            comparator,
            len: 0,
            _kv: PhantomData,
            _ops: PhantomData,
        }
    }

    pub fn root_index(&self) -> Option<u32> {
        self.root
    }

    pub fn arena(&self) -> &[N] {
        &self.arena
    }

    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    pub fn node(&self, idx: u32) -> &N {
        &self.arena[idx as usize]
    }

    pub fn key(&self, idx: u32) -> &K {
        self.node(idx).key()
    }

    pub fn value(&self, idx: u32) -> &V {
        self.node(idx).value()
    }

    pub fn value_mut_by_index(&mut self, idx: u32) -> &mut V {
        self.arena[idx as usize].value_mut()
    }

    fn push_node(&mut self, key: K, value: V) -> u32 {
        self.arena.push(O::new_node(key, value));
        self.len += 1;
        last_slot(self.arena.len())
    }

    /// Inserts or overwrites `key`. Returns the index of the entry.
    pub fn set(&mut self, key: K, value: V) -> u32 {
        let Some(root) = self.root else {
            let idx = self.push_node(key, value);
            self.root = Some(idx);
            return idx;
        };

        let mut curr = root;
        loop {
            let node = &self.arena[curr as usize];
            match (self.comparator)(&key, node.key()) {
                Ordering::Equal => {
                    self.arena[curr as usize].set_value(value);
                    return curr;
                }
                Ordering::Less => match node.l() {
                    Some(l) => curr = l,
                    None => {
                        let idx = self.push_node(key, value);
                        self.root = Some(O::insert_left(&mut self.arena, root, idx, curr));
                        return idx;
                    }
                },
                Ordering::Greater => match node.r() {
                    Some(r) => curr = r,
                    None => {
                        let idx = self.push_node(key, value);
                        self.root = Some(O::insert_right(&mut self.arena, root, idx, curr));
                        return idx;
                    }
                },
            }
        }
    }

    pub fn find(&self, key: &K) -> Option<u32> {
        find(
            &self.arena,
            self.root,
            key,
            |n| n.key(),
            |a, b| (self.comparator)(a, b),
        )
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.find(key).map(|i| self.arena[i as usize].value())
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let idx = self.find(key)?;
        Some(self.arena[idx as usize].value_mut())
    }

    pub fn has(&self, key: &K) -> bool {
        self.find(key).is_some()
    }

    /// Removes `key` and returns its entry. Absent keys leave the map as is.
    pub fn take_entry(&mut self, key: &K) -> Option<(K, V)> {
        let node = self.find(key)?;
        let Removal { root, detached } = O::remove(&mut self.arena, self.root, node);
        self.root = root;
        self.len -= 1;
        Some(self.release(detached).into_entry())
    }

    pub fn take(&mut self, key: &K) -> Option<V> {
        self.take_entry(key).map(|(_, v)| v)
    }

    pub fn del(&mut self, key: &K) -> bool {
        self.take_entry(key).is_some()
    }

    /// Frees an unlinked slot by moving the last slot into it.
    fn release(&mut self, idx: u32) -> N {
        let last = last_slot(self.arena.len());
        self.root = relocate(&mut self.arena, self.root, last, idx);
        self.arena.swap_remove(idx as usize)
    }

    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
        self.len = 0;
    }

    pub fn size(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn height(&self) -> usize {
        height(&self.arena, self.root)
    }

    pub fn get_or_next_lower(&self, key: &K) -> Option<u32> {
        find_or_next_lower(
            &self.arena,
            self.root,
            key,
            |n| n.key(),
            |a, b| (self.comparator)(a, b),
        )
    }

    pub fn first(&self) -> Option<u32> {
        first(&self.arena, self.root)
    }

    pub fn last(&self) -> Option<u32> {
        last(&self.arena, self.root)
    }

    pub fn next(&self, curr: u32) -> Option<u32> {
        next(&self.arena, curr)
    }

    pub fn prev(&self, curr: u32) -> Option<u32> {
        prev(&self.arena, curr)
    }

    pub fn iter(&self) -> OrderedMapIter<'_, K, V, N> {
        OrderedMapIter {
            arena: &self.arena,
            curr: self.first(),
            remaining: self.len,
            _kv: PhantomData,
        }
    }

    pub fn for_each<G: FnMut(u32, &N)>(&self, mut f: G) {
        let mut curr = self.first();
        while let Some(i) = curr {
            f(i, &self.arena[i as usize]);
            curr = self.next(i);
        }
    }

    /// Checks links, key order and the entry count.
    pub fn assert_valid(&self) -> Result<(), TreeError> {
        assert_tree::<K, V, N, C>(&self.arena, self.root, &self.comparator)?;
        let actual = size(&self.arena, self.root);
        if actual != self.len || self.arena.len() != self.len {
            return Err(TreeError::SizeMismatch {
                expected: self.len,
                actual,
            });
        }
        Ok(())
    }
}

impl<K, V, N, O, C> fmt::Debug for OrderedMap<K, V, N, O, C>
where
    K: fmt::Debug,
    V: fmt::Debug,
    N: KvNode<K, V>,
    O: MapTreeOps<K, V, N>,
    C: Fn(&K, &K) -> Ordering,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// In-order iterator over `(key, value)` pairs.
pub struct OrderedMapIter<'a, K, V, N> {
    arena: &'a [N],
    curr: Option<u32>,
    remaining: usize,
    _kv: PhantomData<(&'a K, &'a V)>,
}

impl<'a, K, V, N> Iterator for OrderedMapIter<'a, K, V, N>
where
    N: KvNode<K, V>,
{
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let arena = self.arena;
        let i = self.curr?;
        self.curr = next(arena, i);
        self.remaining = self.remaining.saturating_sub(1);
        let node = &arena[i as usize];
        Some((node.key(), node.value()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V, N> ExactSizeIterator for OrderedMapIter<'_, K, V, N> where N: KvNode<K, V> {}
