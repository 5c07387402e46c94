use std::cmp::Ordering;

use crate::data_types::map::default_comparator;
use crate::error::TreeError;

use super::avl_map::AvlMap;

/// AVL tree set backed by [`AvlMap<T, ()>`].
pub struct AvlSet<T, C = fn(&T, &T) -> Ordering>
where
    C: Fn(&T, &T) -> Ordering,
{
    inner: AvlMap<T, (), C>,
}

impl<T> AvlSet<T, fn(&T, &T) -> Ordering>
where
    T: Ord,
{
    pub fn new() -> Self {
        Self::with_comparator(default_comparator::<T>)
    }
}

impl<T> Default for AvlSet<T, fn(&T, &T) -> Ordering>
where
    T: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C> AvlSet<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            inner: AvlMap::with_comparator(comparator),
        }
    }

    pub fn add(&mut self, value: T) -> u32 {
        self.inner.insert(value, ())
    }

    pub fn del(&mut self, value: &T) -> bool {
        self.inner.remove(value).is_some()
    }

    pub fn clear(&mut self) {
        self.inner.clear()
    }

    pub fn has(&self, value: &T) -> bool {
        self.inner.contains_key(value)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.inner.keys()
    }

    pub fn assert_valid(&self) -> Result<(), TreeError> {
        self.inner.assert_valid()
    }
}
