//! Unbalanced binary search tree map.

use std::cmp::Ordering;

use crate::data_types::{MapTreeOps, OrderedMap};
use crate::tree_node::TreeNode;
use crate::util::{self, Removal};

pub struct BstOps;

impl<K, V> MapTreeOps<K, V, TreeNode<K, V>> for BstOps {
    fn new_node(key: K, value: V) -> TreeNode<K, V> {
        TreeNode::new(key, value)
    }

    fn insert_left(arena: &mut [TreeNode<K, V>], root: u32, node: u32, parent: u32) -> u32 {
        util::insert_left(arena, node, parent);
        root
    }

    fn insert_right(arena: &mut [TreeNode<K, V>], root: u32, node: u32, parent: u32) -> u32 {
        util::insert_right(arena, node, parent);
        root
    }

    fn remove(arena: &mut [TreeNode<K, V>], root: Option<u32>, node: u32) -> Removal {
        util::remove::<K, V, _>(arena, root, node)
    }
}

/// Plain BST map. Shape follows insertion order.
pub type BstMap<K, V, C = fn(&K, &K) -> Ordering> = OrderedMap<K, V, TreeNode<K, V>, BstOps, C>;
