#[cfg(feature = "rayon")]
use rayon::prelude::*;

use crate::error::{KDTreeError, Result};
use crate::kdtree::index::TreeNode;
use crate::kdtree::search::{Neighbor, QueryContext};
use crate::kdtree::{KDTree, Node};
use crate::point::Point;
use crate::r#type::IndexableNum;

/// A trait for searching and accessing data out of a KDTree.
pub trait KDTreeIndex<N: IndexableNum, const D: usize>: Sized {
    /// The node arena of this tree
    fn nodes(&self) -> &[TreeNode<N, D>];

    /// Arena position of the root node, or `None` for an empty tree
    fn root_position(&self) -> Option<usize>;

    /// The number of items in this KDTree
    fn num_items(&self) -> usize {
        self.nodes().len()
    }

    /// Returns `true` if this tree holds no items.
    fn is_empty(&self) -> bool {
        self.root_position().is_none()
    }

    /// Find the stored point closest to `query`.
    ///
    /// Returns [`KDTreeError::EmptyTree`] if the tree holds no points.
    ///
    /// ```
    /// use kd_nearest::kdtree::{KDTree, KDTreeIndex};
    /// use kd_nearest::Point;
    ///
    /// let tree = KDTree::from_points([[1, 2], [2, 4], [9, 9]].map(Point::new));
    /// let neighbor = tree.nearest(&Point::new([0, 4])).unwrap();
    /// assert_eq!(neighbor.point(), &Point::new([2, 4]));
    /// assert_eq!(neighbor.distance(), 2.0);
    /// ```
    fn nearest(&self, query: &Point<N, D>) -> Result<Neighbor<N, D>> {
        let root = self.root_position().ok_or(KDTreeError::EmptyTree)?;
        let mut context = QueryContext::new(self.nodes(), query);
        context.search(Some(root), 0);
        context.finish()
    }

    /// Find the stored point closest to `query` without recursion.
    ///
    /// Visits the same nodes in the same order as [`KDTreeIndex::nearest`], but keeps pending
    /// subtrees on an explicit stack so call-stack use does not grow with tree depth.
    fn nearest_iterative(&self, query: &Point<N, D>) -> Result<Neighbor<N, D>> {
        let root = self.root_position().ok_or(KDTreeError::EmptyTree)?;
        let mut context = QueryContext::new(self.nodes(), query);
        context.search_iterative(Some(root));
        context.finish()
    }

    /// Find the nearest stored point for each of `queries`, in order.
    ///
    /// With the `rayon` feature, queries run in parallel over the shared tree.
    fn nearest_batch(&self, queries: &[Point<N, D>]) -> Result<Vec<Neighbor<N, D>>>
    where
        Self: Sync,
    {
        if self.is_empty() {
            return Err(KDTreeError::EmptyTree);
        }

        // each query carries its own context, so the tree is only ever read
        #[cfg(feature = "rayon")]
        let results: Result<Vec<_>> = queries
            .par_iter()
            .map(|query| self.nearest(query))
            .collect();

        #[cfg(not(feature = "rayon"))]
        let results: Result<Vec<_>> = queries
            .iter()
            .map(|query| self.nearest(query))
            .collect();

        results
    }

    /// Access the root node of the KDTree for manual traversal.
    fn root(&self) -> Option<Node<'_, N, D, Self>> {
        Node::from_root(self)
    }
}

impl<N: IndexableNum, const D: usize> KDTreeIndex<N, D> for KDTree<N, D> {
    fn nodes(&self) -> &[TreeNode<N, D>] {
        &self.nodes
    }

    fn root_position(&self) -> Option<usize> {
        self.root
    }
}
