// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Editing session: the state a drawing surface keeps between frames.

use alloc::sync::Arc;
use alloc::vec::Vec;

use kurbo::{Line, Point, Rect};
use smallvec::SmallVec;

use crate::tree::KdTree;
use crate::types::TiePolicy;
use crate::util::{debug_event, trace_event};

/// Configuration for a [`Session`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SessionConfig {
    /// Extent that boundary segments are clipped to.
    pub field: Rect,
    /// Tie handling used for every rebuild.
    pub ties: TiePolicy,
}

impl SessionConfig {
    /// The unit field `[-1, 1] × [-1, 1]`, matching normalized device coordinates.
    pub const UNIT_FIELD: Rect = Rect::new(-1.0, -1.0, 1.0, 1.0);
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            field: Self::UNIT_FIELD,
            ties: TiePolicy::default(),
        }
    }
}

/// Point set, tree, and query state owned by whoever drives the kd tree.
///
/// A `Session` is the single piece of mutable state: replace the points and the tree is
/// rebuilt from scratch, set a query rectangle and the found points are recomputed. The
/// accessors hand out exactly what a renderer needs to draw: the raw points, the split
/// segments, and the found points.
///
/// The current tree is reference counted. [`Session::snapshot`] returns a handle that
/// stays valid and unchanged across later rebuilds.
///
/// ## Example
///
/// ```rust
/// use kurbo::Point;
/// use understory_kd_tree::Session;
///
/// let mut session = Session::new();
/// session.set_points([
///     Point::new(0.0, 0.0),
///     Point::new(0.5, 0.25),
///     Point::new(-0.5, 0.75),
/// ]);
/// assert_eq!(session.current_points().len(), 3);
/// assert_eq!(session.current_segments().len(), 2);
///
/// session.set_query_rectangle(Point::new(0.75, 0.75), Point::new(0.25, 0.1));
/// assert_eq!(session.current_found_points(), [Point::new(0.5, 0.25)]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Session {
    config: SessionConfig,
    points: Vec<Point>,
    tree: Arc<KdTree>,
    segments: Vec<Line>,
    corners: SmallVec<[Point; 2]>,
    query: Option<Rect>,
    found: Vec<Point>,
}

impl Session {
    /// Create an empty session with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty session with the given configuration.
    pub fn with_config(config: SessionConfig) -> Self {
        Self {
            config: SessionConfig {
                field: config.field.abs(),
                ..config
            },
            tree: Arc::new(KdTree::build_with(&[], config.ties)),
            ..Self::default()
        }
    }

    /// The session configuration.
    pub fn config(&self) -> SessionConfig {
        self.config
    }

    /// The extent boundary segments are clipped to.
    pub fn field(&self) -> Rect {
        self.config.field
    }

    /// Replace the point set and rebuild the tree.
    ///
    /// Any query rectangle and found points are discarded.
    pub fn set_points(&mut self, points: impl IntoIterator<Item = Point>) {
        self.points.clear();
        self.points.extend(points);
        self.rebuild();
    }

    /// Append one point and rebuild the tree.
    ///
    /// Any query rectangle and found points are discarded.
    pub fn add_point(&mut self, point: Point) {
        self.points.push(point);
        self.rebuild();
    }

    /// Set the query rectangle from two opposite corners in any order and run the query.
    pub fn set_query_rectangle(&mut self, a: Point, b: Point) {
        self.corners.clear();
        self.corners.push(a);
        self.corners.push(b);
        self.run_query(Rect::from_points(a, b));
    }

    /// Feed one corner of a query rectangle, as from a click.
    ///
    /// The first corner starts a new rectangle and the second completes it and runs the
    /// query. A further corner discards the finished rectangle and its results and starts
    /// over. Returns whether a query ran.
    pub fn push_query_corner(&mut self, corner: Point) -> bool {
        match self.corners.as_slice() {
            [first] => {
                let first = *first;
                self.set_query_rectangle(first, corner);
                true
            }
            _ => {
                self.clear_query();
                self.corners.push(corner);
                false
            }
        }
    }

    /// Drop the query rectangle, pending corners, and found points.
    pub fn clear_query(&mut self) {
        self.corners.clear();
        self.query = None;
        self.found.clear();
    }

    /// Clear everything: points, tree, segments, and query state.
    pub fn reset(&mut self) {
        self.points.clear();
        self.rebuild();
    }

    /// The raw input points, in the order they were supplied.
    pub fn current_points(&self) -> &[Point] {
        &self.points
    }

    /// Split segments of the current tree, clipped to the field.
    pub fn current_segments(&self) -> &[Line] {
        &self.segments
    }

    /// Points found by the last query, or empty when no rectangle is set.
    pub fn current_found_points(&self) -> &[Point] {
        &self.found
    }

    /// Corners fed so far for the rectangle being entered or last queried.
    pub fn query_corners(&self) -> &[Point] {
        &self.corners
    }

    /// The normalized query rectangle, if one is set.
    pub fn query_rectangle(&self) -> Option<Rect> {
        self.query
    }

    /// The current tree.
    pub fn tree(&self) -> &KdTree {
        &self.tree
    }

    /// A handle to the current tree that is unaffected by later rebuilds.
    pub fn snapshot(&self) -> Arc<KdTree> {
        Arc::clone(&self.tree)
    }

    fn rebuild(&mut self) {
        self.clear_query();
        self.tree = Arc::new(KdTree::build_with(&self.points, self.config.ties));
        self.segments = self.tree.boundaries(self.config.field);
        debug_event!(
            points = self.points.len(),
            segments = self.segments.len(),
            "session rebuilt kd tree"
        );
    }

    fn run_query(&mut self, rect: Rect) {
        self.query = Some(rect);
        self.found = self.tree.query_rect(rect);
        trace_event!(found = self.found.len(), "session ran range query");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn five() -> [Point; 5] {
        [
            Point::new(0.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(-1.0, 1.0),
            Point::new(1.0, -1.0),
            Point::new(-1.0, -1.0),
        ]
    }

    #[test]
    fn set_points_rebuilds() {
        let mut session = Session::new();
        assert!(session.tree().is_empty());
        session.set_points(five());
        assert_eq!(session.current_points(), five());
        assert_eq!(session.tree().len(), 5);
        assert_eq!(session.current_segments().len(), 4);
    }

    #[test]
    fn query_rectangle_is_normalized() {
        let mut session = Session::new();
        session.set_points(five());
        session.set_query_rectangle(Point::new(2.0, -2.0), Point::new(-2.0, 0.5));
        assert_eq!(
            session.query_rectangle(),
            Some(Rect::new(-2.0, -2.0, 2.0, 0.5))
        );
        let mut found = session.current_found_points().to_vec();
        found.sort_by(|a, b| a.x.total_cmp(&b.x));
        assert_eq!(
            found,
            [
                Point::new(-1.0, -1.0),
                Point::new(0.0, 0.0),
                Point::new(1.0, -1.0),
            ]
        );
    }

    #[test]
    fn corner_clicks_cycle() {
        let mut session = Session::new();
        session.set_points(five());

        assert!(!session.push_query_corner(Point::new(-0.5, -0.5)));
        assert_eq!(session.query_rectangle(), None);
        assert_eq!(session.query_corners(), [Point::new(-0.5, -0.5)]);

        assert!(session.push_query_corner(Point::new(0.5, 0.5)));
        assert_eq!(session.current_found_points(), [Point::new(0.0, 0.0)]);

        // A third click starts over.
        assert!(!session.push_query_corner(Point::new(0.9, 0.9)));
        assert_eq!(session.query_rectangle(), None);
        assert!(session.current_found_points().is_empty());
        assert_eq!(session.query_corners(), [Point::new(0.9, 0.9)]);
    }

    #[test]
    fn adding_a_point_discards_the_query() {
        let mut session = Session::new();
        session.set_points(five());
        session.set_query_rectangle(Point::new(-2.0, -2.0), Point::new(2.0, 2.0));
        assert_eq!(session.current_found_points().len(), 5);

        session.add_point(Point::new(0.25, 0.25));
        assert_eq!(session.tree().len(), 6);
        assert_eq!(session.query_rectangle(), None);
        assert!(session.current_found_points().is_empty());
    }

    #[test]
    fn snapshot_survives_rebuild() {
        let mut session = Session::new();
        session.set_points(five());
        let before = session.snapshot();
        session.reset();
        assert_eq!(before.len(), 5);
        assert!(session.tree().is_empty());
        assert!(session.current_points().is_empty());
        assert!(session.current_segments().is_empty());
    }

    #[test]
    fn config_controls_field_and_ties() {
        let config = SessionConfig {
            field: Rect::new(2.0, 2.0, -2.0, -2.0),
            ties: TiePolicy::Keep,
        };
        let mut session = Session::with_config(config);
        assert_eq!(session.field(), Rect::new(-2.0, -2.0, 2.0, 2.0));
        session.set_points([Point::new(0.0, 0.0), Point::new(1.0, 0.0)]);
        assert_eq!(session.tree().ties(), TiePolicy::Keep);
        assert_eq!(
            session.current_segments(),
            [Line::new((-2.0, 0.0), (2.0, 0.0))]
        );
    }
}
