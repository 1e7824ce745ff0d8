//! An implementation of an immutable k-dimensional tree with exact nearest-neighbor search.

#![warn(missing_docs)]

mod builder;
mod index;
mod search;
mod r#trait;
mod traversal;

pub use builder::KDTreeBuilder;
pub use index::{KDTree, TreeNode};
pub use r#trait::KDTreeIndex;
pub use search::Neighbor;
pub use traversal::Node;
