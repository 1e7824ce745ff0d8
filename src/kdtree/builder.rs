use std::cmp;

use log::debug;

use crate::kdtree::index::TreeNode;
use crate::kdtree::KDTree;
use crate::point::Point;
use crate::r#type::IndexableNum;

/// A builder to create a [`KDTree`].
///
/// ```
/// use kd_nearest::kdtree::{KDTreeBuilder, KDTreeIndex};
/// use kd_nearest::Point;
///
/// let mut builder = KDTreeBuilder::<i32, 2>::new(3);
/// builder.add(Point::new([0, 0]));
/// builder.add(Point::new([5, 5]));
/// builder.add(Point::new([9, 1]));
/// let tree = builder.finish();
///
/// let neighbor = tree.nearest(&Point::new([8, 2])).unwrap();
/// assert_eq!(neighbor.index(), 2);
/// ```
pub struct KDTreeBuilder<N: IndexableNum, const D: usize> {
    /// node arena, in insertion order until `finish`
    nodes: Vec<TreeNode<N, D>>,

    num_items: usize,
}

impl<N: IndexableNum, const D: usize> KDTreeBuilder<N, D> {
    /// Create a new builder with the provided number of items.
    pub fn new(num_items: usize) -> Self {
        assert!(D > 0, "Points must have at least one dimension.");

        Self {
            nodes: Vec::with_capacity(num_items),
            num_items,
        }
    }

    /// Add a point to the index, returning its insertion index.
    pub fn add(&mut self, point: Point<N, D>) -> usize {
        let index = self.nodes.len();
        assert!(
            index < self.num_items,
            "Added more items than the expected {}.",
            self.num_items
        );

        self.nodes.push(TreeNode::new(point, index));
        index
    }

    /// Consume this builder, performing the median partitioning and generating a KDTree ready
    /// for queries.
    pub fn finish(mut self) -> KDTree<N, D> {
        assert_eq!(
            self.nodes.len(),
            self.num_items,
            "Added {} items when expected {}.",
            self.nodes.len(),
            self.num_items
        );

        let mut depth = 0;
        let root = make_tree(&mut self.nodes, 0, self.num_items, 0, 1, &mut depth);

        debug!(
            "built kd-tree with {} items over {} levels",
            self.num_items, depth
        );

        KDTree {
            nodes: self.nodes,
            root,
            depth,
        }
    }
}

/// Arrange `nodes[begin..end]` into a subtree split on `axis`, returning the arena position of
/// its root.
fn make_tree<N: IndexableNum, const D: usize>(
    nodes: &mut [TreeNode<N, D>],
    begin: usize,
    end: usize,
    axis: usize,
    level: usize,
    depth: &mut usize,
) -> Option<usize> {
    if end <= begin {
        return None;
    }
    *depth = cmp::max(*depth, level);

    // lower median on even-length ranges
    let median = begin + (end - begin) / 2;

    // partition around the median so the halves lie below/above it on this axis
    select(nodes, median, begin, end - 1, axis);

    // recursively build both halves on the next axis
    let axis = (axis + 1) % D;
    let left = make_tree(nodes, begin, median, axis, level + 1, depth);
    let right = make_tree(nodes, median + 1, end, axis, level + 1, depth);

    nodes[median].left = left;
    nodes[median].right = right;

    Some(median)
}

/// Custom Floyd-Rivest selection algorithm: reorder nodes so that `[left..k-1]` items are not
/// greater than the k-th item and `[k+1..=right]` items are not smaller, on `axis`.
fn select<N: IndexableNum, const D: usize>(
    nodes: &mut [TreeNode<N, D>],
    k: usize,
    mut left: usize,
    mut right: usize,
    axis: usize,
) {
    while right > left {
        if right - left > 600 {
            let n = (right - left + 1) as f64;
            let m = (k - left + 1) as f64;
            let z = f64::ln(n);
            let s = 0.5 * f64::exp((2.0 * z) / 3.0);
            let sd = 0.5
                * f64::sqrt((z * s * (n - s)) / n)
                * (if m - n / 2.0 < 0.0 { -1.0 } else { 1.0 });
            let new_left = cmp::max(left, f64::floor(k as f64 - (m * s) / n + sd) as usize);
            let new_right = cmp::min(
                right,
                f64::floor(k as f64 + ((n - m) * s) / n + sd) as usize,
            );
            select(nodes, k, new_left, new_right, axis);
        }

        let t = nodes[k].get(axis);
        let mut i = left;
        let mut j = right;

        nodes.swap(left, k);
        if nodes[right].get(axis) > t {
            nodes.swap(left, right);
        }

        while i < j {
            nodes.swap(i, j);
            i += 1;
            j -= 1;
            while nodes[i].get(axis) < t {
                i += 1;
            }
            while nodes[j].get(axis) > t {
                j -= 1;
            }
        }

        if nodes[left].get(axis) == t {
            nodes.swap(left, j);
        } else {
            j += 1;
            nodes.swap(j, right);
        }

        if j <= k {
            left = j + 1;
        }
        if k <= j {
            // j == 0 implies k == 0, and left is already past right
            right = j.saturating_sub(1);
        }
    }
}
