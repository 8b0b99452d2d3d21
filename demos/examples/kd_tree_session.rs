// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drive a kd tree session the way a click-to-edit canvas would.
//!
//! Clicks in window pixels are mapped into the unit field, added as points, and then two
//! more clicks span a query rectangle. The tree outline, the split segments a renderer
//! would draw, and the found points are printed.
//!
//! Run:
//! - `RUST_LOG=understory_kd_tree=trace cargo run -p understory_demos --example kd_tree_session`

use kurbo::{Point, Size};
use tracing_subscriber::EnvFilter;
use understory_kd_tree::Session;

/// Map a window position to field coordinates: y up, the short side spanning `[-1, 1]`.
fn to_field(pos: Point, window: Size) -> Point {
    let (aspect_x, aspect_y) = if window.width > window.height {
        (window.width / window.height, 1.0)
    } else {
        (1.0, window.height / window.width)
    };
    Point::new(
        (2.0 * pos.x / window.width - 1.0) * aspect_x,
        -(2.0 * pos.y / window.height - 1.0) * aspect_y,
    )
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("understory_kd_tree=debug")),
        )
        .init();

    let window = Size::new(600.0, 600.0);
    let clicks = [
        (300.0, 300.0),
        (120.0, 90.0),
        (480.0, 140.0),
        (210.0, 420.0),
        (520.0, 510.0),
        (60.0, 330.0),
        (390.0, 250.0),
    ];

    let mut session = Session::new();
    for (x, y) in clicks {
        session.add_point(to_field(Point::new(x, y), window));
    }

    println!("tree:");
    print!("{}", session.tree());

    println!("segments:");
    for line in session.current_segments() {
        println!(
            "  ({:.3}, {:.3}) -> ({:.3}, {:.3})",
            line.p0.x, line.p0.y, line.p1.x, line.p1.y
        );
    }

    // Two clicks span the query rectangle, in any corner order.
    let _ = session.push_query_corner(to_field(Point::new(560.0, 320.0), window));
    let ran = session.push_query_corner(to_field(Point::new(250.0, 40.0), window));
    assert!(ran, "second corner completes the rectangle");

    if let Some(rect) = session.query_rectangle() {
        println!(
            "query: x in [{:.3}, {:.3}], y in [{:.3}, {:.3}]",
            rect.x0, rect.x1, rect.y0, rect.y1
        );
    }
    println!("found:");
    for p in session.current_found_points() {
        println!("  ({:.3}, {:.3})", p.x, p.y);
    }

    // Readers holding a snapshot keep their tree across rebuilds.
    let snapshot = session.snapshot();
    session.reset();
    println!(
        "after reset: {} points in session, {} in snapshot",
        session.current_points().len(),
        snapshot.len()
    );
}
