//! Node trait definitions.
//!
//! Every tree in this crate lives in a [`Vec`]-backed arena. A "pointer" is
//! an `Option<u32>` index into that arena, so the parent link is a plain
//! back-reference and never a second owner of the node. All
//! tree-manipulation functions take the arena as a slice and work with
//! indices.

/// Tree links (`p`, `l`, `r`).
pub trait Node {
    fn p(&self) -> Option<u32>;
    fn l(&self) -> Option<u32>;
    fn r(&self) -> Option<u32>;
    fn set_p(&mut self, v: Option<u32>);
    fn set_l(&mut self, v: Option<u32>);
    fn set_r(&mut self, v: Option<u32>);
}

/// Key/value node interface used by map-like structures.
pub trait KvNode<K, V>: Node {
    fn key(&self) -> &K;
    fn value(&self) -> &V;
    fn value_mut(&mut self) -> &mut V;
    fn set_value(&mut self, value: V);

    /// Exchanges key and value with `other`, leaving links untouched.
    fn swap_entry(&mut self, other: &mut Self)
    where
        Self: Sized;

    fn into_entry(self) -> (K, V)
    where
        Self: Sized;
}
