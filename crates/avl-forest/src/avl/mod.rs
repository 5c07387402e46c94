//! AVL tree: arena nodes with a balance factor, rotations and the map/set
//! facades built on them.

#[path = "AvlMap.rs"]
pub mod avl_map;
#[path = "AvlSet.rs"]
pub mod avl_set;
pub mod types;
pub mod util;

pub use avl_map::{AvlMap, AvlOps};
pub use avl_set::AvlSet;
pub use types::{AvlNode, AvlNodeLike};
pub use util::{
    assert_avl_tree, insert, insert_left, insert_right, node_swap, print, remove, rotate_left,
    rotate_right,
};
