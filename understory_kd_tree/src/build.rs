// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Balanced construction.
//!
//! Both per-axis orderings are sorted once up front. Each level then picks the median of
//! the current axis's ordering and repartitions the other ordering around it in linear
//! time, so the children's ranges are already sorted on their own axis.

use alloc::vec::Vec;

use kurbo::Point;

use crate::tree::{KdTree, Node};
use crate::types::{Axis, NodeId, TiePolicy};
use crate::util::debug_event;

impl KdTree {
    /// Build a balanced tree over `points` with the default [`TiePolicy::Drop`].
    ///
    /// The root splits on [`Axis::Y`] and the axis alternates by depth. An empty slice
    /// yields an empty tree.
    ///
    /// # Panics
    ///
    /// Panics if `points` holds more than `u32::MAX` points.
    pub fn build(points: &[Point]) -> Self {
        Self::build_with(points, TiePolicy::default())
    }

    /// Build a balanced tree over `points`, resolving equal split coordinates with `ties`.
    ///
    /// # Panics
    ///
    /// Panics if `points` holds more than `u32::MAX` points.
    pub fn build_with(points: &[Point], ties: TiePolicy) -> Self {
        assert!(
            u32::try_from(points.len()).is_ok(),
            "KdTree supports at most u32::MAX points"
        );
        debug_assert!(
            points.iter().all(|p| p.is_finite()),
            "KdTree input points must be finite"
        );

        let mut builder = Builder::new(points, ties);
        let _root = builder.split(0, points.len(), Axis::ROOT, None);
        let tree = Self {
            nodes: builder.nodes,
            ties,
        };
        debug_event!(
            points = points.len(),
            nodes = tree.nodes.len(),
            depth = tree.depth(),
            ties = ?ties,
            "built kd tree"
        );
        tree
    }
}

/// Working storage for a single construction.
///
/// The orderings hold indices into `points`; the caller's slice is never touched.
struct Builder<'a> {
    points: &'a [Point],
    ties: TiePolicy,
    by_x: Vec<usize>,
    by_y: Vec<usize>,
    below: Vec<usize>,
    above: Vec<usize>,
    nodes: Vec<Node>,
}

impl<'a> Builder<'a> {
    fn new(points: &'a [Point], ties: TiePolicy) -> Self {
        // Stable sorts, so fully equal points stay in input order.
        let mut by_x: Vec<usize> = (0..points.len()).collect();
        by_x.sort_by(|&a, &b| Axis::X.cmp_points(points[a], points[b]));
        let mut by_y: Vec<usize> = (0..points.len()).collect();
        by_y.sort_by(|&a, &b| Axis::Y.cmp_points(points[a], points[b]));
        Self {
            points,
            ties,
            by_x,
            by_y,
            below: Vec::new(),
            above: Vec::new(),
            nodes: Vec::with_capacity(points.len()),
        }
    }

    /// Build the subtree for the half-open range `lo..hi` of `axis`'s ordering.
    fn split(
        &mut self,
        lo: usize,
        hi: usize,
        axis: Axis,
        parent: Option<NodeId>,
    ) -> Option<NodeId> {
        if lo >= hi {
            return None;
        }
        // Upper median of the inclusive range `lo..=hi - 1`.
        let mid = (lo + hi) / 2;
        let median = match axis {
            Axis::X => self.by_x[mid],
            Axis::Y => self.by_y[mid],
        };
        self.repartition(lo, hi, median, axis);

        #[allow(
            clippy::cast_possible_truncation,
            reason = "build_with rejects inputs longer than u32::MAX."
        )]
        let id = NodeId::new(self.nodes.len() as u32);
        self.nodes.push(Node {
            point: self.points[median],
            axis,
            parent,
            left: None,
            right: None,
        });

        let left = self.split(lo, mid, axis.flip(), Some(id));
        let right = self.split(mid + 1, hi, axis.flip(), Some(id));
        let node = &mut self.nodes[id.idx()];
        node.left = left;
        node.right = right;
        Some(id)
    }

    /// Regroup the other axis's ordering over `lo..hi` into points below the median,
    /// the median, and points above it, preserving relative order within each group.
    fn repartition(&mut self, lo: usize, hi: usize, median: usize, axis: Axis) {
        let Self {
            points,
            ties,
            by_x,
            by_y,
            below,
            above,
            ..
        } = self;
        let other = match axis {
            Axis::X => by_y,
            Axis::Y => by_x,
        };
        let pivot = points[median];
        below.clear();
        above.clear();

        match ties {
            TiePolicy::Drop => {
                let split = axis.coord(pivot);
                for &i in &other[lo..hi] {
                    let value = axis.coord(points[i]);
                    if value < split {
                        below.push(i);
                    } else if value > split {
                        above.push(i);
                    }
                }
            }
            TiePolicy::Keep => {
                for &i in &other[lo..hi] {
                    match axis.cmp_points(points[i], pivot).then(i.cmp(&median)) {
                        core::cmp::Ordering::Less => below.push(i),
                        core::cmp::Ordering::Greater => above.push(i),
                        core::cmp::Ordering::Equal => {}
                    }
                }
            }
        }

        // Under `Drop` the groups can be shorter than the range, leaving the tail as is.
        // Stale tails can also make them one longer; the excess is cut off.
        let regrouped = below
            .iter()
            .copied()
            .chain(core::iter::once(median))
            .chain(above.iter().copied());
        let mut written = 0;
        for (slot, i) in other[lo..hi].iter_mut().zip(regrouped) {
            *slot = i;
            written += 1;
        }
        debug_assert!(
            *ties == TiePolicy::Drop
                || (written == hi - lo && below.len() + above.len() + 1 == written),
            "repartition lost points under TiePolicy::Keep"
        );
    }
}
