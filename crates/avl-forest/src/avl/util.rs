use std::cmp::Ordering;
use std::fmt::Debug;

use crate::error::TreeError;
use crate::types::Node;
use crate::util::swap::{pair_mut, swap_positions};
use crate::util::{self, get_l, get_p, get_r, set_l, set_p, set_r, Removal};

use super::types::AvlNodeLike;

#[inline]
fn bf<K, V, N>(arena: &[N], i: u32) -> i8
where
    N: AvlNodeLike<K, V>,
{
    arena[i as usize].bf()
}

#[inline]
fn set_bf<K, V, N>(arena: &mut [N], i: u32, v: i8)
where
    N: AvlNodeLike<K, V>,
{
    arena[i as usize].set_bf(v);
}

/// Points the parent of `n` (or the root) at `replacement`.
fn replace_child<N: Node>(arena: &mut [N], root: u32, n: u32, replacement: u32) -> u32 {
    let p = get_p(arena, n);
    set_p(arena, replacement, p);
    match p {
        None => replacement,
        Some(p) => {
            if get_l(arena, p) == Some(n) {
                set_l(arena, p, Some(replacement));
            } else {
                set_r(arena, p, Some(replacement));
            }
            root
        }
    }
}

/// Promotes the right child of `n` into `n`'s position. Returns the root.
///
/// ```text
///   n               piv
///    \             /
///    piv    →     n
///    /             \
///   b               b
/// ```
///
/// Balance factors are left to the caller. Without a right child this is
/// a no-op.
pub fn rotate_left<N: Node>(arena: &mut [N], root: u32, n: u32) -> u32 {
    let Some(piv) = get_r(arena, n) else {
        tracing::warn!(node = n, "rotate_left on a node without a right child");
        return root;
    };
    let b = get_l(arena, piv);
    set_r(arena, n, b);
    if let Some(b) = b {
        set_p(arena, b, Some(n));
    }
    let root = replace_child(arena, root, n, piv);
    set_l(arena, piv, Some(n));
    set_p(arena, n, Some(piv));
    tracing::trace!(node = n, pivot = piv, "rotate_left");
    root
}

/// Mirror of [`rotate_left`]: promotes the left child of `n`.
pub fn rotate_right<N: Node>(arena: &mut [N], root: u32, n: u32) -> u32 {
    let Some(piv) = get_l(arena, n) else {
        tracing::warn!(node = n, "rotate_right on a node without a left child");
        return root;
    };
    let b = get_r(arena, piv);
    set_l(arena, n, b);
    if let Some(b) = b {
        set_p(arena, b, Some(n));
    }
    let root = replace_child(arena, root, n, piv);
    set_r(arena, piv, Some(n));
    set_p(arena, n, Some(piv));
    tracing::trace!(node = n, pivot = piv, "rotate_right");
    root
}

/// Restores balance after the subtree under `node` grew by one through
/// `child`. Returns the root.
fn insert_fix<K, V, N>(arena: &mut [N], mut root: u32, mut node: u32, mut child: u32) -> u32
where
    N: AvlNodeLike<K, V>,
{
    while let Some(g) = get_p(arena, node) {
        let node_is_left = get_l(arena, g) == Some(node);
        let gbf = bf(arena, g) + if node_is_left { -1 } else { 1 };
        set_bf(arena, g, gbf);
        match gbf {
            0 => return root,
            -1 | 1 => {
                child = node;
                node = g;
            }
            _ => {
                let child_is_left = get_l(arena, node) == Some(child);
                if node_is_left == child_is_left {
                    root = if node_is_left {
                        rotate_right(arena, root, g)
                    } else {
                        rotate_left(arena, root, g)
                    };
                    set_bf(arena, node, 0);
                    set_bf(arena, g, 0);
                    return root;
                }

                let (node_bf, g_bf) = if node_is_left {
                    root = rotate_left(arena, root, node);
                    root = rotate_right(arena, root, g);
                    match bf(arena, child) {
                        -1 => (0, 1),
                        1 => (-1, 0),
                        _ => (0, 0),
                    }
                } else {
                    root = rotate_right(arena, root, node);
                    root = rotate_left(arena, root, g);
                    match bf(arena, child) {
                        1 => (0, -1),
                        -1 => (1, 0),
                        _ => (0, 0),
                    }
                };
                set_bf(arena, node, node_bf);
                set_bf(arena, g, g_bf);
                set_bf(arena, child, 0);
                return root;
            }
        }
    }
    root
}

/// Updates `p` after leaf `n` was attached on the `side` (-1 left, +1
/// right) and rebalances upward if `p` got taller.
fn attach_balance<K, V, N>(arena: &mut [N], root: u32, n: u32, p: u32, side: i8) -> u32
where
    N: AvlNodeLike<K, V>,
{
    // A leaning parent had exactly one child, so the new leaf evens it out.
    if bf(arena, p) != 0 {
        set_bf(arena, p, 0);
        return root;
    }
    set_bf(arena, p, side);
    insert_fix(arena, root, p, n)
}

/// Attaches leaf `n` as the left child of `p` and rebalances. Returns the
/// root.
pub fn insert_left<K, V, N>(arena: &mut [N], root: u32, n: u32, p: u32) -> u32
where
    N: AvlNodeLike<K, V>,
{
    util::insert_left(arena, n, p);
    attach_balance(arena, root, n, p, -1)
}

/// Attaches leaf `n` as the right child of `p` and rebalances. Returns the
/// root.
pub fn insert_right<K, V, N>(arena: &mut [N], root: u32, n: u32, p: u32) -> u32
where
    N: AvlNodeLike<K, V>,
{
    util::insert_right(arena, n, p);
    attach_balance(arena, root, n, p, 1)
}

/// Inserts the unattached node `n` by key. Equal keys go to the right;
/// keyed maps resolve duplicates before calling this.
pub fn insert<K, V, N, C>(arena: &mut [N], root: Option<u32>, n: u32, comparator: &C) -> Option<u32>
where
    N: AvlNodeLike<K, V>,
    C: Fn(&K, &K) -> Ordering,
{
    let Some(root) = root else {
        return Some(n);
    };

    let mut curr = root;
    loop {
        let go_left = comparator(arena[n as usize].key(), arena[curr as usize].key()) == Ordering::Less;
        let next = if go_left {
            get_l(arena, curr)
        } else {
            get_r(arena, curr)
        };
        match next {
            Some(next) => curr = next,
            None if go_left => return Some(insert_left(arena, root, n, curr)),
            None => return Some(insert_right(arena, root, n, curr)),
        }
    }
}

/// Exchanges the tree positions of `x` and `y` together with their balance
/// factors, so every position keeps the balance it had. Returns the root.
pub fn node_swap<K, V, N>(arena: &mut [N], root: u32, x: u32, y: u32) -> u32
where
    N: AvlNodeLike<K, V>,
{
    if x == y {
        return root;
    }
    let root = swap_positions(arena, root, x, y);
    let (a, b) = pair_mut(arena, x, y);
    let tmp = a.bf();
    a.set_bf(b.bf());
    b.set_bf(tmp);
    root
}

/// Restores balance after the subtree on one side of `node` shrank by one.
/// `diff` is +1 when the left side shrank and -1 when the right side did.
/// Returns the root.
fn remove_fix<K, V, N>(arena: &mut [N], mut root: u32, node: u32, diff: i8) -> u32
where
    N: AvlNodeLike<K, V>,
{
    let mut curr = Some(node);
    let mut diff = diff;
    while let Some(n) = curr {
        let parent = get_p(arena, n);
        let next_diff = match parent {
            Some(p) if get_l(arena, p) == Some(n) => 1,
            _ => -1,
        };

        let nbf = bf(arena, n) + diff;
        match nbf {
            -2 => {
                let Some(t) = get_l(arena, n) else {
                    return root;
                };
                match bf(arena, t) {
                    -1 => {
                        root = rotate_right(arena, root, n);
                        set_bf(arena, n, 0);
                        set_bf(arena, t, 0);
                    }
                    0 => {
                        root = rotate_right(arena, root, n);
                        set_bf(arena, n, -1);
                        set_bf(arena, t, 1);
                        return root;
                    }
                    _ => {
                        let Some(g) = get_r(arena, t) else {
                            return root;
                        };
                        root = rotate_left(arena, root, t);
                        root = rotate_right(arena, root, n);
                        let (n_bf, t_bf) = match bf(arena, g) {
                            1 => (0, -1),
                            -1 => (1, 0),
                            _ => (0, 0),
                        };
                        set_bf(arena, n, n_bf);
                        set_bf(arena, t, t_bf);
                        set_bf(arena, g, 0);
                    }
                }
            }
            2 => {
                let Some(t) = get_r(arena, n) else {
                    return root;
                };
                match bf(arena, t) {
                    1 => {
                        root = rotate_left(arena, root, n);
                        set_bf(arena, n, 0);
                        set_bf(arena, t, 0);
                    }
                    0 => {
                        root = rotate_left(arena, root, n);
                        set_bf(arena, n, 1);
                        set_bf(arena, t, -1);
                        return root;
                    }
                    _ => {
                        let Some(g) = get_l(arena, t) else {
                            return root;
                        };
                        root = rotate_right(arena, root, t);
                        root = rotate_left(arena, root, n);
                        let (n_bf, t_bf) = match bf(arena, g) {
                            1 => (-1, 0),
                            -1 => (0, 1),
                            _ => (0, 0),
                        };
                        set_bf(arena, n, n_bf);
                        set_bf(arena, t, t_bf);
                        set_bf(arena, g, 0);
                    }
                }
            }
            -1 | 1 => {
                // Was balanced, so the untouched side still sets the height.
                set_bf(arena, n, nbf);
                return root;
            }
            _ => set_bf(arena, n, 0),
        }

        curr = parent;
        diff = next_diff;
    }
    root
}

/// Unlinks `n` from the tree and rebalances.
///
/// A node with two children first trades places with its in-order
/// predecessor (see [`node_swap`]), which leaves it with at most one child.
/// Slot `n` is always the one reported in [`Removal::detached`].
pub fn remove<K, V, N>(arena: &mut [N], root: Option<u32>, n: u32) -> Removal
where
    N: AvlNodeLike<K, V>,
{
    let mut root = root;
    if let (Some(r), Some(_)) = (root, get_r(arena, n)) {
        if let Some(pred) = util::last(arena, get_l(arena, n)) {
            tracing::trace!(node = n, predecessor = pred, "swap with predecessor");
            root = Some(node_swap::<K, V, N>(arena, r, n, pred));
        }
    }

    let parent = get_p(arena, n);
    let diff = match parent {
        Some(p) if get_l(arena, p) == Some(n) => 1,
        _ => -1,
    };

    let root = match (util::unlink(arena, root, n), parent) {
        (Some(root), Some(p)) => Some(remove_fix(arena, root, p, diff)),
        (root, _) => root,
    };

    Removal { root, detached: n }
}

fn check_balance<K, V, N>(arena: &[N], node: Option<u32>) -> Result<usize, TreeError>
where
    N: AvlNodeLike<K, V>,
{
    let Some(i) = node else {
        return Ok(0);
    };
    let lh = check_balance(arena, get_l(arena, i))?;
    let rh = check_balance(arena, get_r(arena, i))?;
    let expected = rh as i32 - lh as i32;
    let actual = i32::from(bf(arena, i));
    if actual != expected {
        return Err(TreeError::BalanceMismatch {
            node: i,
            expected,
            actual,
        });
    }
    if !(-1..=1).contains(&actual) {
        return Err(TreeError::Unbalanced { node: i, bf: actual });
    }
    Ok(1 + lh.max(rh))
}

/// Validates links, key order, stored balance factors against measured
/// heights, and the AVL bound.
pub fn assert_avl_tree<K, V, N, C>(
    arena: &[N],
    root: Option<u32>,
    comparator: &C,
) -> Result<(), TreeError>
where
    N: AvlNodeLike<K, V>,
    C: Fn(&K, &K) -> Ordering,
{
    util::assert_tree::<K, V, N, C>(arena, root, comparator)?;
    check_balance::<K, V, N>(arena, root).map(|_| ())
}

/// Debug printer for AVL trees.
pub fn print<K, V, N>(arena: &[N], node: Option<u32>, tab: &str) -> String
where
    K: Debug,
    V: Debug,
    N: AvlNodeLike<K, V>,
{
    match node {
        None => "∅".to_string(),
        Some(i) => {
            let n = &arena[i as usize];
            let left = print::<K, V, N>(arena, n.l(), &format!("{tab}  "));
            let right = print::<K, V, N>(arena, n.r(), &format!("{tab}  "));
            format!(
                "Node[{i}] [bf={}] {{ {:?} = {:?} }}\n{tab}L={left}\n{tab}R={right}",
                n.bf(),
                n.key(),
                n.value()
            )
        }
    }
}
