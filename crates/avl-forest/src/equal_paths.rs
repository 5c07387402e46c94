//! Leaf-depth check for arbitrary arena binary trees.

use crate::types::Node;
use crate::util::{get_l, get_r};

pub use crate::util::height;

/// Returns `true` when every root-to-leaf path in the tree has the same
/// length.
///
/// A node with two children requires both subtrees to have equal height.
/// A node with a single child imposes no constraint of its own, so a bare
/// chain counts as one path.
pub fn equal_paths<N: Node>(arena: &[N], root: Option<u32>) -> bool {
    let Some(node) = root else {
        return true;
    };
    let (l, r) = (get_l(arena, node), get_r(arena, node));
    if l.is_some() && r.is_some() && height(arena, l) != height(arena, r) {
        return false;
    }
    equal_paths(arena, l) && equal_paths(arena, r)
}
