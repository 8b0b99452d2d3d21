// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Orthogonal range search.

use alloc::vec::Vec;

use kurbo::{Point, Rect};
use smallvec::SmallVec;

use crate::tree::KdTree;
use crate::types::{NodeId, TiePolicy};
use crate::util::trace_event;

impl KdTree {
    /// Visit every node whose point lies inside `rect`, edges included.
    ///
    /// The rectangle is normalized with [`Rect::abs`] first, so corners may come in any
    /// order. Traversal is depth-first from the root, left subtree before right, and skips
    /// any subtree that lies entirely on the far side of the rectangle on its parent's
    /// split axis.
    pub fn visit_rect<F: FnMut(NodeId, Point)>(&self, rect: Rect, mut f: F) {
        let rect = rect.abs();
        let Some(root) = self.root() else {
            return;
        };
        // Tied points can sit on either side of a split under `Keep`.
        let inclusive = self.ties == TiePolicy::Keep;

        #[cfg_attr(
            not(feature = "tracing"),
            allow(unused_variables, unused_assignments, reason = "Only read by trace events.")
        )]
        let mut visited = 0_usize;
        let mut stack: SmallVec<[NodeId; 64]> = SmallVec::new();
        stack.push(root);
        while let Some(id) = stack.pop() {
            visited += 1;
            let node = self.node(id);
            if contains_inclusive(rect, node.point) {
                f(id, node.point);
            }

            let coord = node.axis.coord(node.point);
            let (low, high) = node.axis.extent(rect);
            let (descend_left, descend_right) = if inclusive {
                (low <= coord, high >= coord)
            } else {
                (low < coord, high > coord)
            };
            if descend_right && let Some(right) = node.right {
                stack.push(right);
            }
            if descend_left && let Some(left) = node.left {
                stack.push(left);
            }
        }
        trace_event!(visited, nodes = self.nodes.len(), "kd tree range visit");
    }

    /// Collect the points inside `rect`, edges included.
    ///
    /// See [`KdTree::visit_rect`] for traversal order and normalization.
    pub fn query_rect(&self, rect: Rect) -> Vec<Point> {
        let mut out = Vec::new();
        self.visit_rect(rect, |_, p| out.push(p));
        trace_event!(found = out.len(), "kd tree range query");
        out
    }

    /// Collect the points inside the rectangle spanned by two opposite corners, given in
    /// any order.
    pub fn query_corners(&self, a: Point, b: Point) -> Vec<Point> {
        self.query_rect(Rect::from_points(a, b))
    }
}

/// Inclusive on all four edges, unlike [`Rect::contains`].
#[inline]
pub(crate) fn contains_inclusive(rect: Rect, p: Point) -> bool {
    rect.x0 <= p.x && p.x <= rect.x1 && rect.y0 <= p.y && p.y <= rect.y1
}
