use crate::types::{KvNode, Node};

use super::{get_l, get_p, get_r, set_l, set_p, set_r};

/// Mutable references to two distinct arena slots.
pub(crate) fn pair_mut<N>(arena: &mut [N], x: u32, y: u32) -> (&mut N, &mut N) {
    let (x, y) = (x as usize, y as usize);
    assert_ne!(x, y, "pair_mut needs two distinct slots");
    if x < y {
        let (head, tail) = arena.split_at_mut(y);
        (&mut head[x], &mut tail[0])
    } else {
        let (head, tail) = arena.split_at_mut(x);
        (&mut tail[0], &mut head[y])
    }
}

/// Swaps the key/value payload of two nodes in place.
///
/// Tree links stay where they are, so `x` takes over the entry of `y` at
/// `x`'s position and vice versa.
pub fn swap<K, V, N: KvNode<K, V>>(arena: &mut [N], x: u32, y: u32) {
    if x == y {
        return;
    }
    let (a, b) = pair_mut(arena, x, y);
    a.swap_entry(b);
}

/// Exchanges the tree positions of `x` and `y`. Each slot keeps its
/// payload; every link into or out of the two nodes is rebound. Returns the
/// root after the swap.
pub fn swap_positions<N: Node>(arena: &mut [N], root: u32, x: u32, y: u32) -> u32 {
    if x == y {
        return root;
    }
    let sw = |v: Option<u32>| match v {
        Some(i) if i == x => Some(y),
        Some(i) if i == y => Some(x),
        v => v,
    };
    let xs = [get_p(arena, x), get_l(arena, x), get_r(arena, x)];
    let ys = [get_p(arena, y), get_l(arena, y), get_r(arena, y)];

    // Each neighbor is rebound once, siblings share a parent.
    let mut seen = [None::<u32>; 6];
    for (i, v) in xs.into_iter().chain(ys).enumerate() {
        let Some(v) = v else {
            continue;
        };
        if v == x || v == y || seen[..i].contains(&Some(v)) {
            continue;
        }
        seen[i] = Some(v);
        let (p, l, r) = (get_p(arena, v), get_l(arena, v), get_r(arena, v));
        set_p(arena, v, sw(p));
        set_l(arena, v, sw(l));
        set_r(arena, v, sw(r));
    }

    set_p(arena, x, sw(ys[0]));
    set_l(arena, x, sw(ys[1]));
    set_r(arena, x, sw(ys[2]));
    set_p(arena, y, sw(xs[0]));
    set_l(arena, y, sw(xs[1]));
    set_r(arena, y, sw(xs[2]));

    match root {
        r if r == x => y,
        r if r == y => x,
        r => r,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree_node::TreeNode;

    #[test]
    fn swap_exchanges_payload_but_not_links() {
        let mut arena = vec![TreeNode::new(1, "a"), TreeNode::new(2, "b")];
        arena[0].set_r(Some(1));
        arena[1].set_p(Some(0));

        swap::<i32, &str, _>(&mut arena, 1, 0);

        assert_eq!((arena[0].k, arena[0].v), (2, "b"));
        assert_eq!((arena[1].k, arena[1].v), (1, "a"));
        assert_eq!(arena[0].r(), Some(1));
        assert_eq!(arena[1].p(), Some(0));
    }

    #[test]
    fn swap_with_itself_is_a_no_op() {
        let mut arena = vec![TreeNode::new(7, ())];
        swap::<i32, (), _>(&mut arena, 0, 0);
        assert_eq!(arena[0].k, 7);
    }

    fn link(arena: &mut [TreeNode<i32, ()>], parent: u32, child: u32, left: bool) {
        if left {
            arena[parent as usize].set_l(Some(child));
        } else {
            arena[parent as usize].set_r(Some(child));
        }
        arena[child as usize].set_p(Some(parent));
    }

    fn links(arena: &[TreeNode<i32, ()>], i: u32) -> (Option<u32>, Option<u32>, Option<u32>) {
        let n = &arena[i as usize];
        (n.p, n.l, n.r)
    }

    #[test]
    fn swap_positions_with_direct_child() {
        // 0 -> (1, 2), 1 -> (3, _)
        let mut arena: Vec<_> = (0..4).map(|k| TreeNode::new(k, ())).collect();
        link(&mut arena, 0, 1, true);
        link(&mut arena, 0, 2, false);
        link(&mut arena, 1, 3, true);

        let root = swap_positions(&mut arena, 0, 0, 1);

        assert_eq!(root, 1);
        assert_eq!(links(&arena, 1), (None, Some(0), Some(2)));
        assert_eq!(links(&arena, 0), (Some(1), Some(3), None));
        assert_eq!(links(&arena, 2), (Some(1), None, None));
        assert_eq!(links(&arena, 3), (Some(0), None, None));
        assert_eq!((arena[0].k, arena[1].k), (0, 1));
    }

    #[test]
    fn swap_positions_of_distant_nodes() {
        // 0 -> (1, 2), 1 -> (_, 3), 3 -> (4, _)
        let mut arena: Vec<_> = (0..5).map(|k| TreeNode::new(k, ())).collect();
        link(&mut arena, 0, 1, true);
        link(&mut arena, 0, 2, false);
        link(&mut arena, 1, 3, false);
        link(&mut arena, 3, 4, true);

        let root = swap_positions(&mut arena, 0, 0, 3);

        assert_eq!(root, 3);
        assert_eq!(links(&arena, 3), (None, Some(1), Some(2)));
        assert_eq!(links(&arena, 0), (Some(1), Some(4), None));
        assert_eq!(links(&arena, 1), (Some(3), None, Some(0)));
        assert_eq!(links(&arena, 2), (Some(3), None, None));
        assert_eq!(links(&arena, 4), (Some(0), None, None));
    }

    #[test]
    fn swap_positions_of_siblings() {
        let mut arena: Vec<_> = (0..3).map(|k| TreeNode::new(k, ())).collect();
        link(&mut arena, 0, 1, true);
        link(&mut arena, 0, 2, false);

        assert_eq!(swap_positions(&mut arena, 0, 1, 2), 0);
        assert_eq!(links(&arena, 0), (None, Some(2), Some(1)));
        assert_eq!(links(&arena, 1), (Some(0), None, None));
        assert_eq!(links(&arena, 2), (Some(0), None, None));
    }
}
