//! Utilities to traverse the KDTree structure.

use std::marker::PhantomData;

use crate::kdtree::KDTreeIndex;
use crate::point::Point;
use crate::r#type::IndexableNum;

/// A node in the KDTree, viewed from a particular depth.
#[derive(Debug, Clone)]
pub struct Node<'a, N: IndexableNum, const D: usize, T: KDTreeIndex<N, D>> {
    /// The tree that this node is a reference onto
    tree: &'a T,

    /// Arena position of this node
    pos: usize,

    /// Distance from the root; the root is at depth 0
    depth: usize,

    phantom: PhantomData<N>,
}

impl<'a, N: IndexableNum, const D: usize, T: KDTreeIndex<N, D>> Node<'a, N, D, T> {
    pub(crate) fn from_root(tree: &'a T) -> Option<Self> {
        tree.root_position().map(|pos| Self {
            tree,
            pos,
            depth: 0,
            phantom: PhantomData,
        })
    }

    fn child(&self, pos: Option<usize>) -> Option<Node<'a, N, D, T>> {
        pos.map(|pos| Self {
            tree: self.tree,
            pos,
            depth: self.depth + 1,
            phantom: PhantomData,
        })
    }

    /// The axis that the children of this node are split over.
    #[inline]
    pub fn axis(&self) -> usize {
        self.depth % D
    }

    /// Distance from the root.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Note: this is the position in the node arena, not the insertion index.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// The original insertion index of this node's point.
    pub fn index(&self) -> usize {
        self.tree.nodes()[self.pos].index()
    }

    /// The point stored at this node.
    pub fn point(&self) -> &'a Point<N, D> {
        self.tree.nodes()[self.pos].point()
    }

    /// The child node holding points not greater than this one on [`Node::axis`].
    pub fn left_child(&self) -> Option<Node<'a, N, D, T>> {
        self.child(self.tree.nodes()[self.pos].left())
    }

    /// The child node holding points not smaller than this one on [`Node::axis`].
    pub fn right_child(&self) -> Option<Node<'a, N, D, T>> {
        self.child(self.tree.nodes()[self.pos].right())
    }

    /// Returns `true` if this is a leaf node without children.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        let node = &self.tree.nodes()[self.pos];
        node.left().is_none() && node.right().is_none()
    }

    /// Returns `true` if this is an intermediate node with children.
    #[inline]
    pub fn is_parent(&self) -> bool {
        !self.is_leaf()
    }
}
