// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the kd tree: node identifiers, split axes, and tie handling.

use core::cmp::Ordering;

use kurbo::{Point, Rect};

/// Identifier for a node in a [`KdTree`][crate::KdTree].
///
/// Ids are arena indices assigned in pre-order during construction. They are only
/// meaningful for the tree that produced them; a rebuilt tree hands out fresh ids.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    pub(crate) const fn new(idx: u32) -> Self {
        Self(idx)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

/// The coordinate a node splits its point subset on.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Axis {
    /// Split on the x coordinate; the boundary is a vertical line.
    X,
    /// Split on the y coordinate; the boundary is a horizontal line.
    Y,
}

impl Axis {
    /// Axis of the root node.
    pub const ROOT: Self = Self::Y;

    /// Axis used at a given depth (root is depth 0).
    #[inline]
    pub const fn at_depth(depth: usize) -> Self {
        if depth % 2 == 0 { Self::ROOT } else { Self::ROOT.flip() }
    }

    /// The other axis.
    #[inline]
    #[must_use]
    pub const fn flip(self) -> Self {
        match self {
            Self::X => Self::Y,
            Self::Y => Self::X,
        }
    }

    /// The coordinate of `p` on this axis.
    #[inline]
    pub fn coord(self, p: Point) -> f64 {
        match self {
            Self::X => p.x,
            Self::Y => p.y,
        }
    }

    /// The `(min, max)` extent of `rect` on this axis.
    #[inline]
    pub fn extent(self, rect: Rect) -> (f64, f64) {
        match self {
            Self::X => (rect.x0, rect.x1),
            Self::Y => (rect.y0, rect.y1),
        }
    }

    /// Compare two points on this axis, breaking ties on the other axis.
    ///
    /// This is the order of the per-axis orderings kept during construction. `-0.0` and
    /// `0.0` compare equal, as they do under `<` and `>`.
    #[inline]
    pub(crate) fn cmp_points(self, a: Point, b: Point) -> Ordering {
        let cross = self.flip();
        cmp_coord(self.coord(a), self.coord(b))
            .then_with(|| cmp_coord(cross.coord(a), cross.coord(b)))
    }
}

/// Total order on finite coordinates with both zeros folded together.
#[inline]
fn cmp_coord(a: f64, b: f64) -> Ordering {
    let fold = |v: f64| if v == 0.0 { 0.0 } else { v };
    fold(a).total_cmp(&fold(b))
}

/// How construction treats points whose split coordinate equals the median's.
///
/// Only matters when two points share a coordinate value on the axis being split.
/// Inputs without such ties produce the same tree under either policy.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum TiePolicy {
    /// Points equal to the median on the split axis are left out of the repartitioned
    /// ordering. The shorter sequence is written back from the start of the range and
    /// the tail of the range keeps its previous contents, so a tied point can be missing
    /// from the tree while another appears twice. The tree still has one node per input
    /// point and the same shape.
    ///
    /// Range queries prune with strict comparisons under this policy.
    #[default]
    Drop,
    /// Ties are ranked by the cross coordinate and then by input position, i.e. by the
    /// same order the construction sorts by, and routed to the side they sort on.
    /// Every input point ends up in exactly one node.
    ///
    /// Subtrees may hold points equal to their parent's split coordinate, so range
    /// queries prune inclusively under this policy.
    Keep,
}
