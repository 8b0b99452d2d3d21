// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared input generators for the Understory benchmarks.

use kurbo::{Point, Rect};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Benchmark point counts, smallest first.
pub const SIZES: [usize; 5] = [10, 100, 1_000, 10_000, 100_000];

/// `n` uniformly distributed points inside `field`, reproducible for a given `seed`.
pub fn uniform_points(n: usize, field: Rect, seed: u64) -> Vec<Point> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            Point::new(
                rng.random_range(field.x0..field.x1),
                rng.random_range(field.y0..field.y1),
            )
        })
        .collect()
}

/// `n` query rectangles inside `field`, each covering about `fraction` of its width and
/// height.
pub fn query_rects(n: usize, field: Rect, fraction: f64, seed: u64) -> Vec<Rect> {
    let mut rng = StdRng::seed_from_u64(seed);
    let w = field.width() * fraction;
    let h = field.height() * fraction;
    (0..n)
        .map(|_| {
            let x = rng.random_range(field.x0..field.x1 - w);
            let y = rng.random_range(field.y0..field.y1 - h);
            Rect::new(x, y, x + w, y + h)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generators_are_seeded() {
        let field = Rect::new(-1.0, -1.0, 1.0, 1.0);
        assert_eq!(uniform_points(16, field, 3), uniform_points(16, field, 3));
        let rects = query_rects(8, field, 0.25, 5);
        assert!(rects.iter().all(|r| field.union(*r) == field));
    }
}
