use std::cmp::Ordering;
use std::fmt;

use crate::data_types::map::default_comparator;
use crate::data_types::{MapTreeOps, OrderedMap, OrderedMapIter};
use crate::error::TreeError;
use crate::util::Removal;

use super::types::AvlNode;
use super::util;

pub struct AvlOps;

impl<K, V> MapTreeOps<K, V, AvlNode<K, V>> for AvlOps {
    fn new_node(key: K, value: V) -> AvlNode<K, V> {
        AvlNode::new(key, value)
    }

    fn insert_left(arena: &mut [AvlNode<K, V>], root: u32, node: u32, parent: u32) -> u32 {
        util::insert_left::<K, V, _>(arena, root, node, parent)
    }

    fn insert_right(arena: &mut [AvlNode<K, V>], root: u32, node: u32, parent: u32) -> u32 {
        util::insert_right::<K, V, _>(arena, root, node, parent)
    }

    fn remove(arena: &mut [AvlNode<K, V>], root: Option<u32>, node: u32) -> Removal {
        util::remove::<K, V, _>(arena, root, node)
    }
}

/// Ordered map kept height-balanced as an AVL tree.
///
/// Entries live in an arena and are addressed by `u32` index. An index
/// stays valid until the next removal.
pub struct AvlMap<K, V, C = fn(&K, &K) -> Ordering>
where
    C: Fn(&K, &K) -> Ordering,
{
    inner: OrderedMap<K, V, AvlNode<K, V>, AvlOps, C>,
}

impl<K, V> AvlMap<K, V, fn(&K, &K) -> Ordering>
where
    K: Ord,
{
    pub fn new() -> Self {
        Self::with_comparator(default_comparator::<K>)
    }
}

impl<K, V> Default for AvlMap<K, V, fn(&K, &K) -> Ordering>
where
    K: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, C> AvlMap<K, V, C>
where
    C: Fn(&K, &K) -> Ordering,
{
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            inner: OrderedMap::with_comparator(comparator),
        }
    }

    /// Inserts `key`, or overwrites its value if present. Returns the index
    /// of the entry.
    pub fn insert(&mut self, key: K, value: V) -> u32 {
        self.inner.set(key, value)
    }

    /// Removes `key` and returns its value. Absent keys are a no-op.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.inner.take(key)
    }

    pub fn remove_entry(&mut self, key: &K) -> Option<(K, V)> {
        self.inner.take_entry(key)
    }

    pub fn find(&self, key: &K) -> Option<u32> {
        self.inner.find(key)
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.inner.get(key)
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.inner.get_mut(key)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.inner.has(key)
    }

    pub fn clear(&mut self) {
        self.inner.clear()
    }

    pub fn len(&self) -> usize {
        self.inner.size()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn height(&self) -> usize {
        self.inner.height()
    }

    pub fn get_or_next_lower(&self, key: &K) -> Option<u32> {
        self.inner.get_or_next_lower(key)
    }

    pub fn first(&self) -> Option<u32> {
        self.inner.first()
    }

    pub fn last(&self) -> Option<u32> {
        self.inner.last()
    }

    pub fn next(&self, curr: u32) -> Option<u32> {
        self.inner.next(curr)
    }

    pub fn prev(&self, curr: u32) -> Option<u32> {
        self.inner.prev(curr)
    }

    pub fn iter(&self) -> OrderedMapIter<'_, K, V, AvlNode<K, V>> {
        self.inner.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.inner.iter().map(|(k, _)| k)
    }

    pub fn for_each<G: FnMut(u32, &AvlNode<K, V>)>(&self, f: G) {
        self.inner.for_each(f)
    }

    pub fn root_index(&self) -> Option<u32> {
        self.inner.root_index()
    }

    pub fn arena(&self) -> &[AvlNode<K, V>] {
        self.inner.arena()
    }

    pub fn node(&self, idx: u32) -> &AvlNode<K, V> {
        self.inner.node(idx)
    }

    pub fn key(&self, idx: u32) -> &K {
        self.inner.key(idx)
    }

    pub fn value(&self, idx: u32) -> &V {
        self.inner.value(idx)
    }

    pub fn value_mut_by_index(&mut self, idx: u32) -> &mut V {
        self.inner.value_mut_by_index(idx)
    }

    pub fn assert_valid(&self) -> Result<(), TreeError> {
        self.inner.assert_valid()?;
        util::assert_avl_tree::<K, V, _, C>(
            self.inner.arena(),
            self.inner.root_index(),
            self.inner.comparator(),
        )
    }

    pub fn print(&self) -> String
    where
        K: fmt::Debug,
        V: fmt::Debug,
    {
        util::print::<K, V, _>(self.inner.arena(), self.inner.root_index(), "")
    }
}

impl<K, V, C> fmt::Debug for AvlMap<K, V, C>
where
    K: fmt::Debug,
    V: fmt::Debug,
    C: Fn(&K, &K) -> Ordering,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.inner, f)
    }
}

impl<K, V, C> Extend<(K, V)> for AvlMap<K, V, C>
where
    C: Fn(&K, &K) -> Ordering,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for AvlMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}
