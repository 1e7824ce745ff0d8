use geo_traits::CoordTrait;

use crate::error::Result;
use crate::kdtree::{KDTreeBuilder, KDTreeIndex, Neighbor};
use crate::point::Point;
use crate::r#type::IndexableNum;

/// A single entry of the node arena.
///
/// Child links are positions into the same arena, so a node can never outlive or point outside
/// the tree that owns it.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeNode<N: IndexableNum, const D: usize> {
    pub(crate) point: Point<N, D>,
    pub(crate) index: usize,
    pub(crate) left: Option<usize>,
    pub(crate) right: Option<usize>,
}

impl<N: IndexableNum, const D: usize> TreeNode<N, D> {
    pub(crate) fn new(point: Point<N, D>, index: usize) -> Self {
        Self {
            point,
            index,
            left: None,
            right: None,
        }
    }

    /// The point stored at this node.
    pub fn point(&self) -> &Point<N, D> {
        &self.point
    }

    /// The insertion index of this node's point.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Arena position of the left child, if any.
    pub fn left(&self) -> Option<usize> {
        self.left
    }

    /// Arena position of the right child, if any.
    pub fn right(&self) -> Option<usize> {
        self.right
    }

    #[inline]
    pub(crate) fn get(&self, axis: usize) -> N {
        self.point.get(axis)
    }
}

/// An owned, immutable KD-tree.
///
/// Usually this will be created via [`KDTree::from_points`] or from scratch via
/// [`KDTreeBuilder`].
#[derive(Debug, Clone, PartialEq)]
pub struct KDTree<N: IndexableNum, const D: usize> {
    pub(crate) nodes: Vec<TreeNode<N, D>>,
    pub(crate) root: Option<usize>,
    pub(crate) depth: usize,
}

impl<N: IndexableNum, const D: usize> KDTree<N, D> {
    /// Build a tree holding a copy of every point in `points`.
    ///
    /// An empty input yields an empty tree; querying it returns
    /// [`KDTreeError::EmptyTree`][crate::KDTreeError::EmptyTree].
    pub fn from_points(points: impl IntoIterator<Item = Point<N, D>>) -> Self {
        let points: Vec<_> = points.into_iter().collect();
        let mut builder = KDTreeBuilder::new(points.len());
        for point in points {
            builder.add(point);
        }
        builder.finish()
    }

    /// The number of levels in this tree. An empty tree has depth 0.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Iterate over the stored points in arena order.
    pub fn points(&self) -> impl Iterator<Item = &Point<N, D>> {
        self.nodes.iter().map(|node| &node.point)
    }
}

impl<N: IndexableNum> KDTree<N, 2> {
    /// Find the stored point closest to the given coordinate.
    ///
    /// Only the `x` and `y` values of `coord` are used.
    pub fn nearest_coord(&self, coord: &impl CoordTrait<T = N>) -> Result<Neighbor<N, 2>> {
        self.nearest(&Point::new([coord.x(), coord.y()]))
    }
}
