// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_kd_tree --heading-base-level=0

//! Understory KD Tree: a balanced 2-d tree over planar points.
//!
//! Understory KD Tree is a small building block for point editors, plotting tools, and
//! teaching aids that need orthogonal range search and a picture of how the plane is cut.
//!
//! - Build a balanced tree over a point set in O(n log n), alternating the split axis by
//!   depth (y at the root, then x, then y, …).
//! - Query all points inside an axis-aligned rectangle, edges included, pruning subtrees
//!   that cannot intersect it.
//! - Project every split into a finite segment clipped by its ancestors, ready to draw.
//!
//! Trees are immutable. When the point set changes, build a new tree; [`Session`] does
//! this for you and keeps the raw points, segments, and last query results together.
//!
//! ## API overview
//!
//! - [`KdTree`]: the tree. [`KdTree::build`] / [`KdTree::build_with`] construct it,
//!   [`KdTree::query_rect`] / [`KdTree::visit_rect`] search it, and
//!   [`KdTree::boundaries`] / [`KdTree::boundary_of`] project its splits.
//! - [`NodeId`]: arena handle of a node; see [`KdTree::parent_of`], [`KdTree::left_of`],
//!   [`KdTree::right_of`], and [`KdTree::point`].
//! - [`Axis`]: split axis of a node.
//! - [`TiePolicy`]: what happens to points whose split coordinate equals the median's.
//! - [`Session`] and [`SessionConfig`]: owned state for an interactive front end.
//!
//! # Example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use understory_kd_tree::KdTree;
//!
//! let tree = KdTree::build(&[
//!     Point::new(0.0, 0.0),
//!     Point::new(1.0, 1.0),
//!     Point::new(-1.0, 1.0),
//!     Point::new(1.0, -1.0),
//!     Point::new(-1.0, -1.0),
//! ]);
//! assert_eq!(tree.depth(), 3);
//!
//! let found = tree.query_rect(Rect::new(-2.0, -2.0, 2.0, 0.5));
//! assert_eq!(found.len(), 3);
//!
//! // Four segments: the root's split once per child, and one for each inner child.
//! let segments = tree.boundaries(Rect::new(-1.0, -1.0, 1.0, 1.0));
//! assert_eq!(segments.len(), 4);
//! ```
//!
//! ## Ties
//!
//! With the default [`TiePolicy::Drop`], a point whose coordinate on the axis being split
//! equals the median's is left out of the repartition, exactly like the classic
//! two-ordering construction this crate follows. The tree keeps its shape, but tied
//! points may be missing. Use [`TiePolicy::Keep`] when inputs can share coordinates and
//! every point must be found.
//!
//! ## Features
//!
//! - `std` *(default)*: enables `kurbo/std`.
//! - `libm`: enables `kurbo/libm` for `no_std` targets.
//! - `tracing`: emits `tracing` events for construction, queries, and session rebuilds.
//!
//! Float inputs are assumed to be finite (no NaNs). Debug builds assert this.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod boundary;
mod build;
mod query;
mod session;
mod tree;
mod types;
mod util;

pub use session::{Session, SessionConfig};
pub use tree::KdTree;
pub use types::{Axis, NodeId, TiePolicy};
