//! Arena-based ordered maps with an AVL-balanced implementation.
//!
//! All "pointers" are `Option<u32>` indices into a `Vec<N>` arena owned by
//! the map, so parent links are plain back-references and the tree never
//! holds a second owner of any node.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! [`types`] | [`Node`] link trait and [`KvNode`] payload trait |
//! [`util`] | base BST primitives: search, traversal, attach, unlink, payload and position swap |
//! [`data_types`] | [`OrderedMap`], the keyed map over a [`MapTreeOps`] strategy |
//! [`bst`] | unbalanced strategy and [`BstMap`] |
//! [`avl`] | balance factors, rotations, [`AvlMap`] and [`AvlSet`] |
//! [`equal_paths`] | leaf-depth check for any arena tree |
//!
//! ```
//! use avl_forest::AvlMap;
//!
//! let mut map = AvlMap::new();
//! for k in [1, 2, 3] {
//!     map.insert(k, k * 10);
//! }
//! let root = map.root_index().unwrap();
//! assert_eq!(*map.key(root), 2);
//! assert_eq!(map.remove(&1), Some(10));
//! map.assert_valid().unwrap();
//! ```

pub mod avl;
pub mod bst;
#[path = "data-types/mod.rs"]
pub mod data_types;
pub mod equal_paths;
pub mod error;
#[path = "TreeNode.rs"]
pub mod tree_node;
pub mod types;
pub mod util;

pub use avl::{AvlMap, AvlNode, AvlSet};
pub use bst::BstMap;
pub use data_types::{MapTreeOps, OrderedMap};
pub use equal_paths::equal_paths;
pub use error::TreeError;
pub use tree_node::TreeNode;
pub use types::{KvNode, Node};
