//! Ordered map base: binary-search-tree primitives over an index arena.
//!
//! These functions know nothing about balancing. The AVL layer
//! ([`crate::avl::util`]) and the unbalanced [`crate::bst::BstOps`] are both
//! built from them.
//!
//! Key-based helpers (`find`, `find_or_next_lower`) accept a `key_of`
//! accessor closure so callers can use any arena node layout.

pub mod swap;

use std::cmp::Ordering;

use crate::error::TreeError;
use crate::types::{KvNode, Node};

pub use swap::swap;

#[inline]
pub(crate) fn get_p<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].p()
}

#[inline]
pub(crate) fn get_l<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].l()
}

#[inline]
pub(crate) fn get_r<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].r()
}

#[inline]
pub(crate) fn set_p<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_p(v);
}

#[inline]
pub(crate) fn set_l<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_l(v);
}

#[inline]
pub(crate) fn set_r<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_r(v);
}

/// Result of removing a node from a tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Removal {
    /// Root after removal, `None` when the tree became empty.
    pub root: Option<u32>,
    /// Arena slot that was physically unlinked. It holds the removed entry
    /// and has no links left.
    pub detached: u32,
}

/// Leftmost node in the tree.
pub fn first<N: Node>(arena: &[N], root: Option<u32>) -> Option<u32> {
    let mut curr = root?;
    while let Some(l) = get_l(arena, curr) {
        curr = l;
    }
    Some(curr)
}

/// Rightmost node in the tree.
pub fn last<N: Node>(arena: &[N], root: Option<u32>) -> Option<u32> {
    let mut curr = root?;
    while let Some(r) = get_r(arena, curr) {
        curr = r;
    }
    Some(curr)
}

/// In-order successor.
pub fn next<N: Node>(arena: &[N], mut curr: u32) -> Option<u32> {
    if let Some(r) = get_r(arena, curr) {
        return first(arena, Some(r));
    }
    let mut p = get_p(arena, curr);
    while let Some(pi) = p {
        if get_r(arena, pi) == Some(curr) {
            curr = pi;
            p = get_p(arena, pi);
        } else {
            return Some(pi);
        }
    }
    None
}

/// In-order predecessor.
pub fn prev<N: Node>(arena: &[N], mut curr: u32) -> Option<u32> {
    if let Some(l) = get_l(arena, curr) {
        return last(arena, Some(l));
    }
    let mut p = get_p(arena, curr);
    while let Some(pi) = p {
        if get_l(arena, pi) == Some(curr) {
            curr = pi;
            p = get_p(arena, pi);
        } else {
            return Some(pi);
        }
    }
    None
}

fn size_inner<N: Node>(arena: &[N], root: u32) -> usize {
    1 + get_l(arena, root).map_or(0, |l| size_inner(arena, l))
        + get_r(arena, root).map_or(0, |r| size_inner(arena, r))
}

/// Number of nodes under `root`.
pub fn size<N: Node>(arena: &[N], root: Option<u32>) -> usize {
    root.map_or(0, |r| size_inner(arena, r))
}

/// Height of the subtree under `root`; an empty subtree has height 0.
pub fn height<N: Node>(arena: &[N], root: Option<u32>) -> usize {
    match root {
        None => 0,
        Some(i) => 1 + height(arena, get_l(arena, i)).max(height(arena, get_r(arena, i))),
    }
}

/// Finds a node by key.
pub fn find<N, K, F, C>(
    arena: &[N],
    root: Option<u32>,
    key: &K,
    key_of: F,
    comparator: C,
) -> Option<u32>
where
    N: Node,
    F: Fn(&N) -> &K,
    C: Fn(&K, &K) -> Ordering,
{
    let mut curr = root;
    while let Some(i) = curr {
        curr = match comparator(key, key_of(&arena[i as usize])) {
            Ordering::Equal => return Some(i),
            Ordering::Less => get_l(arena, i),
            Ordering::Greater => get_r(arena, i),
        };
    }
    None
}

/// Finds node by key, or the next lower node if the exact key does not exist.
pub fn find_or_next_lower<N, K, F, C>(
    arena: &[N],
    root: Option<u32>,
    key: &K,
    key_of: F,
    comparator: C,
) -> Option<u32>
where
    N: Node,
    F: Fn(&N) -> &K,
    C: Fn(&K, &K) -> Ordering,
{
    let mut curr = root;
    let mut result: Option<u32> = None;
    while let Some(i) = curr {
        match comparator(key_of(&arena[i as usize]), key) {
            Ordering::Equal => return Some(i),
            Ordering::Greater => curr = get_l(arena, i),
            Ordering::Less => {
                result = Some(i);
                curr = get_r(arena, i);
            }
        }
    }
    result
}

/// Attaches leaf `node` as the right child of `parent`.
///
/// The right slot of `parent` must be empty.
pub fn insert_right<N: Node>(arena: &mut [N], node: u32, parent: u32) {
    debug_assert!(get_r(arena, parent).is_none());
    set_r(arena, parent, Some(node));
    set_p(arena, node, Some(parent));
}

/// Attaches leaf `node` as the left child of `parent`.
///
/// The left slot of `parent` must be empty.
pub fn insert_left<N: Node>(arena: &mut [N], node: u32, parent: u32) {
    debug_assert!(get_l(arena, parent).is_none());
    set_l(arena, parent, Some(node));
    set_p(arena, node, Some(parent));
}

/// Structurally removes a node with at most one child.
///
/// A leaf is detached from its parent, a node with one child is replaced
/// by that child. The removed node ends up with no links. Returns the new
/// root.
pub fn unlink<N: Node>(arena: &mut [N], root: Option<u32>, node: u32) -> Option<u32> {
    let p = get_p(arena, node);
    let l = get_l(arena, node);
    let r = get_r(arena, node);
    debug_assert!(l.is_none() || r.is_none(), "unlink needs at most one child");
    set_p(arena, node, None);
    set_l(arena, node, None);
    set_r(arena, node, None);

    let child = l.or(r);
    if let Some(c) = child {
        set_p(arena, c, p);
    }
    match p {
        Some(p) => {
            if get_l(arena, p) == Some(node) {
                set_l(arena, p, child);
            } else {
                set_r(arena, p, child);
            }
            root
        }
        None => child,
    }
}

/// Unbalanced BST removal.
///
/// A node with two children first trades its entry with its in-order
/// predecessor, then the predecessor's slot is unlinked.
pub fn remove<K, V, N>(arena: &mut [N], root: Option<u32>, node: u32) -> Removal
where
    N: KvNode<K, V>,
{
    let mut target = node;
    if get_l(arena, node).is_some() && get_r(arena, node).is_some() {
        if let Some(pred) = prev(arena, node) {
            swap::<K, V, N>(arena, node, pred);
            target = pred;
        }
    }
    Removal {
        root: unlink(arena, root, target),
        detached: target,
    }
}

/// Rebinds every link that points at slot `from` so that it points at
/// slot `to` instead. Returns the root after rebinding.
///
/// Used right before `Vec::swap_remove(to)` moves the node at `from` (the
/// last slot) into `to`. Slot `to` must already be unlinked.
pub fn relocate<N: Node>(arena: &mut [N], root: Option<u32>, from: u32, to: u32) -> Option<u32> {
    if from == to {
        return root;
    }
    if let Some(p) = get_p(arena, from) {
        if get_l(arena, p) == Some(from) {
            set_l(arena, p, Some(to));
        } else {
            set_r(arena, p, Some(to));
        }
    }
    if let Some(l) = get_l(arena, from) {
        set_p(arena, l, Some(to));
    }
    if let Some(r) = get_r(arena, from) {
        set_p(arena, r, Some(to));
    }
    if root == Some(from) {
        Some(to)
    } else {
        root
    }
}

fn validate_links<N: Node>(arena: &[N], node: u32) -> Result<(), TreeError> {
    for child in [get_l(arena, node), get_r(arena, node)].into_iter().flatten() {
        if get_p(arena, child) != Some(node) {
            return Err(TreeError::BrokenParentLink { node, child });
        }
        validate_links(arena, child)?;
    }
    Ok(())
}

/// Checks parent links and strict in-order key order.
pub fn assert_tree<K, V, N, C>(arena: &[N], root: Option<u32>, comparator: &C) -> Result<(), TreeError>
where
    N: KvNode<K, V>,
    C: Fn(&K, &K) -> Ordering,
{
    let Some(root) = root else {
        return Ok(());
    };
    if get_p(arena, root).is_some() {
        return Err(TreeError::RootHasParent { root });
    }
    validate_links(arena, root)?;

    let mut prev_node: Option<u32> = None;
    let mut curr = first(arena, Some(root));
    while let Some(i) = curr {
        if let Some(prev) = prev_node {
            if comparator(arena[prev as usize].key(), arena[i as usize].key()) != Ordering::Less {
                return Err(TreeError::OrderViolated { node: i });
            }
        }
        prev_node = Some(i);
        curr = next(arena, i);
    }
    Ok(())
}
