//! Structural invariant violations reported by the tree validators.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    #[error("root node {root} has a parent link")]
    RootHasParent { root: u32 },
    #[error("child {child} of node {node} does not link back to its parent")]
    BrokenParentLink { node: u32, child: u32 },
    #[error("balance factor mismatch at node {node}: expected {expected}, got {actual}")]
    BalanceMismatch { node: u32, expected: i32, actual: i32 },
    #[error("AVL balance violated at node {node}: balance factor {bf}")]
    Unbalanced { node: u32, bf: i32 },
    #[error("node order violated at node {node}")]
    OrderViolated { node: u32 },
    #[error("size mismatch: map reports {expected} entries, tree holds {actual}")]
    SizeMismatch { expected: usize, actual: usize },
}
