//! Branch-and-bound nearest-neighbor search.

use log::trace;
use tinyvec::TinyVec;

use crate::error::{KDTreeError, Result};
use crate::kdtree::index::TreeNode;
use crate::point::Point;
use crate::r#type::IndexableNum;

/// The closest stored point found for a query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor<N: IndexableNum, const D: usize> {
    point: Point<N, D>,
    position: usize,
    index: usize,
    squared_distance: f64,
    visited: usize,
}

impl<N: IndexableNum, const D: usize> Neighbor<N, D> {
    /// The nearest stored point.
    pub fn point(&self) -> &Point<N, D> {
        &self.point
    }

    /// The insertion index of the nearest point.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The arena position of the node holding the nearest point.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Squared Euclidean distance from the query to the nearest point.
    pub fn squared_distance(&self) -> f64 {
        self.squared_distance
    }

    /// Euclidean distance from the query to the nearest point.
    pub fn distance(&self) -> f64 {
        self.squared_distance.sqrt()
    }

    /// How many nodes the search examined.
    pub fn visited(&self) -> usize {
        self.visited
    }
}

/// Transient state of a single query.
///
/// Lives only for the duration of one search so the tree itself is never mutated by queries.
pub(crate) struct QueryContext<'a, N: IndexableNum, const D: usize> {
    nodes: &'a [TreeNode<N, D>],
    query: &'a Point<N, D>,
    best: Option<usize>,
    // only meaningful once `best` is set
    best_sq_dist: f64,
    visited: usize,
}

impl<'a, N: IndexableNum, const D: usize> QueryContext<'a, N, D> {
    pub(crate) fn new(nodes: &'a [TreeNode<N, D>], query: &'a Point<N, D>) -> Self {
        Self {
            nodes,
            query,
            best: None,
            best_sq_dist: 0.0,
            visited: 0,
        }
    }

    /// Examine one node, keeping it if it beats the current best.
    ///
    /// Returns the signed distance from the query to the node's splitting plane on `axis`.
    #[inline]
    fn visit(&mut self, pos: usize, axis: usize) -> f64 {
        let nodes = self.nodes;
        let node = &nodes[pos];
        self.visited += 1;

        let d = node.point.squared_distance(self.query);
        if self.best.is_none() || d < self.best_sq_dist {
            self.best = Some(pos);
            self.best_sq_dist = d;
        }

        node.get(axis).as_f64() - self.query.get(axis).as_f64()
    }

    /// Recursive descent from `pos`, splitting on `axis`.
    pub(crate) fn search(&mut self, pos: Option<usize>, axis: usize) {
        let Some(pos) = pos else {
            return;
        };

        let nodes = self.nodes;
        let dx = self.visit(pos, axis);

        // exact match, nothing can be closer
        if self.best_sq_dist == 0.0 {
            return;
        }

        let node = &nodes[pos];
        let (near, far) = if dx > 0.0 {
            (node.left, node.right)
        } else {
            (node.right, node.left)
        };
        let axis = (axis + 1) % D;

        self.search(near, axis);
        if dx * dx >= self.best_sq_dist {
            return;
        }
        self.search(far, axis);
    }

    /// Explicit-stack descent from `root`, visiting nodes in the same order as
    /// [`QueryContext::search`].
    pub(crate) fn search_iterative(&mut self, root: Option<usize>) {
        // (arena position, axis, squared plane distance that must beat the current best)
        let nodes = self.nodes;
        let mut stack: TinyVec<[(usize, usize, f64); 32]> = TinyVec::new();
        if let Some(root) = root {
            stack.push((root, 0, f64::NEG_INFINITY));
        }

        while let Some((pos, axis, plane_sq_dist)) = stack.pop() {
            if plane_sq_dist >= self.best_sq_dist {
                continue;
            }

            let dx = self.visit(pos, axis);
            if self.best_sq_dist == 0.0 {
                break;
            }

            let node = &nodes[pos];
            let (near, far) = if dx > 0.0 {
                (node.left, node.right)
            } else {
                (node.right, node.left)
            };
            let axis = (axis + 1) % D;

            // Note: pushed in backwards order to what gets popped
            if let Some(far) = far {
                stack.push((far, axis, dx * dx));
            }
            if let Some(near) = near {
                stack.push((near, axis, f64::NEG_INFINITY));
            }
        }
    }

    pub(crate) fn finish(self) -> Result<Neighbor<N, D>> {
        let position = self.best.ok_or(KDTreeError::EmptyTree)?;
        let node = &self.nodes[position];

        trace!(
            "nearest to {:?}: {:?} at squared distance {} after {} visits",
            self.query,
            node.point,
            self.best_sq_dist,
            self.visited
        );

        Ok(Neighbor {
            point: node.point,
            position,
            index: node.index,
            squared_distance: self.best_sq_dist,
            visited: self.visited,
        })
    }
}
