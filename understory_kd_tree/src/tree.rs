// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core tree structure: the node arena and read-only accessors.

use alloc::vec::Vec;
use core::fmt;

use kurbo::Point;

use crate::types::{Axis, NodeId, TiePolicy};

/// A balanced 2-d tree over a fixed set of points.
///
/// The tree is immutable once built. When the point set changes, build a new tree with
/// [`KdTree::build`] instead of patching the old one.
///
/// Nodes live in a flat arena in pre-order, so the root is always the first node and a
/// node's parent always precedes it. Parent links are plain indices used to walk
/// upwards; they never own anything.
///
/// ## Example
///
/// ```rust
/// use kurbo::{Point, Rect};
/// use understory_kd_tree::{Axis, KdTree};
///
/// let tree = KdTree::build(&[
///     Point::new(0.0, 0.0),
///     Point::new(1.0, 1.0),
///     Point::new(-1.0, 1.0),
///     Point::new(1.0, -1.0),
///     Point::new(-1.0, -1.0),
/// ]);
///
/// let root = tree.root().unwrap();
/// assert_eq!(tree.point(root), Some(Point::new(0.0, 0.0)));
/// assert_eq!(tree.axis(root), Some(Axis::Y));
///
/// let mut found = tree.query_rect(Rect::new(-2.0, -2.0, 2.0, 0.5));
/// found.sort_by(|a, b| a.x.total_cmp(&b.x));
/// assert_eq!(
///     found,
///     [Point::new(-1.0, -1.0), Point::new(0.0, 0.0), Point::new(1.0, -1.0)]
/// );
/// ```
#[derive(Clone, Debug, Default)]
pub struct KdTree {
    pub(crate) nodes: Vec<Node>,
    pub(crate) ties: TiePolicy,
}

#[derive(Clone, Debug)]
pub(crate) struct Node {
    pub(crate) point: Point,
    pub(crate) axis: Axis,
    pub(crate) parent: Option<NodeId>,
    pub(crate) left: Option<NodeId>,
    pub(crate) right: Option<NodeId>,
}

impl KdTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of nodes in the tree.
    ///
    /// This equals the number of input points for every [`TiePolicy`].
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The tie policy the tree was built with.
    pub fn ties(&self) -> TiePolicy {
        self.ties
    }

    /// The root node, or `None` for an empty tree.
    pub fn root(&self) -> Option<NodeId> {
        (!self.nodes.is_empty()).then_some(NodeId::new(0))
    }

    /// Iterate all node ids in pre-order.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "Construction caps the arena at u32::MAX nodes."
    )]
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len()).map(|i| NodeId::new(i as u32))
    }

    /// Iterate the points stored in the tree in pre-order.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.nodes.iter().map(|n| n.point)
    }

    /// Whether `id` refers to a node of this tree.
    pub fn contains(&self, id: NodeId) -> bool {
        id.idx() < self.nodes.len()
    }

    /// The point stored at a node.
    pub fn point(&self, id: NodeId) -> Option<Point> {
        self.get(id).map(|n| n.point)
    }

    /// The axis a node splits on.
    pub fn axis(&self, id: NodeId) -> Option<Axis> {
        self.get(id).map(|n| n.axis)
    }

    /// Returns the parent of a node, or `None` for the root or foreign ids.
    pub fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.parent)
    }

    /// Returns the child holding points below the node's split coordinate.
    pub fn left_of(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.left)
    }

    /// Returns the child holding points above the node's split coordinate.
    pub fn right_of(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.right)
    }

    /// Depth of a node (the root has depth 0).
    pub fn depth_of(&self, id: NodeId) -> Option<usize> {
        let mut node = self.get(id)?;
        let mut depth = 0;
        while let Some(parent) = node.parent {
            node = self.node(parent);
            depth += 1;
        }
        Some(depth)
    }

    /// Number of levels in the tree: 0 when empty, 1 for a single node.
    ///
    /// For `n` points this is `⌈log2(n + 1)⌉`.
    pub fn depth(&self) -> usize {
        // Pre-order puts every parent before its children.
        let mut levels: Vec<usize> = Vec::with_capacity(self.nodes.len());
        let mut deepest = 0;
        for node in &self.nodes {
            let level = node.parent.map_or(1, |p| levels[p.idx()] + 1);
            deepest = deepest.max(level);
            levels.push(level);
        }
        deepest
    }

    #[inline]
    pub(crate) fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.idx())
    }

    #[inline]
    pub(crate) fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.idx()]
    }
}

/// Writes the tree as an indented outline: one `x, y` line per node, one tab per level,
/// left subtree before right.
impl fmt::Display for KdTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(root) = self.root() else {
            return Ok(());
        };
        let mut stack: Vec<(NodeId, usize)> = Vec::new();
        stack.push((root, 0));
        while let Some((id, level)) = stack.pop() {
            let node = self.node(id);
            for _ in 0..level {
                f.write_str("\t")?;
            }
            writeln!(f, "{}, {}", node.point.x, node.point.y)?;
            if let Some(right) = node.right {
                stack.push((right, level + 1));
            }
            if let Some(left) = node.left {
                stack.push((left, level + 1));
            }
        }
        Ok(())
    }
}
