// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Split boundary projection for visualization.
//!
//! Every inner node's split is drawn as an axis-aligned segment through its point. The
//! segment runs along the axis the node does not split on and is clipped to the region
//! its ancestors carve out of the field.

use alloc::vec::Vec;

use kurbo::{Line, Rect};
use smallvec::SmallVec;

use crate::tree::{KdTree, Node};
use crate::types::{Axis, NodeId};

impl KdTree {
    /// The split segment of a single node, clipped to `field` and the node's ancestors.
    ///
    /// Returns `None` for leaves and for ids not in this tree.
    pub fn boundary_of(&self, id: NodeId, field: Rect) -> Option<Line> {
        let node = self.get(id)?;
        if node.left.is_none() && node.right.is_none() {
            return None;
        }
        Some(self.project(node, field.abs()))
    }

    /// Split segments for the whole tree.
    ///
    /// A node contributes its segment once per existing child, so a node with two
    /// children yields the same segment twice and leaves yield nothing. Segments come out
    /// depth-first: a node's segment, the left subtree's segments, the node's segment
    /// again, then the right subtree's.
    pub fn boundaries(&self, field: Rect) -> Vec<Line> {
        enum Step {
            Visit(NodeId),
            Emit(Line),
        }

        let field = field.abs();
        let mut out = Vec::new();
        let mut stack: SmallVec<[Step; 64]> = SmallVec::new();
        stack.extend(self.root().map(Step::Visit));
        while let Some(step) = stack.pop() {
            let id = match step {
                Step::Visit(id) => id,
                Step::Emit(line) => {
                    out.push(line);
                    continue;
                }
            };
            let node = self.node(id);
            if node.left.is_none() && node.right.is_none() {
                continue;
            }
            let line = self.project(node, field);
            if let Some(right) = node.right {
                stack.push(Step::Visit(right));
                stack.push(Step::Emit(line));
            }
            if let Some(left) = node.left {
                out.push(line);
                stack.push(Step::Visit(left));
            }
        }
        out
    }

    /// O(depth): walks parent links up to the root.
    fn project(&self, node: &Node, field: Rect) -> Line {
        let along = node.axis.flip();
        let (mut lower, mut upper) = along.extent(field);
        let reference = along.coord(node.point);

        let mut ancestor = node.parent;
        while let Some(id) = ancestor {
            let a = self.node(id);
            if a.axis == along {
                let value = along.coord(a.point);
                if value < reference && value > lower {
                    lower = value;
                }
                if value > reference && value < upper {
                    upper = value;
                }
            }
            ancestor = a.parent;
        }

        let split = node.axis.coord(node.point);
        match node.axis {
            Axis::Y => Line::new((lower, split), (upper, split)),
            Axis::X => Line::new((split, lower), (split, upper)),
        }
    }
}
