//! Distance links between point masses: relaxation, tearing and cut tests.

use crate::float::Float;
use crate::point::PointMass;
use crate::vec::{self, Vec2};

/// A distance constraint between two points, stored as indices into the mesh's
/// point collection.
///
/// Rest and tear lengths are uniform across the mesh and live in
/// [`ClothParams`](crate::config::ClothParams), not on the link.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Link {
    pub a: usize,
    pub b: usize,
}

impl Link {
    pub fn new(a: usize, b: usize) -> Self {
        Link { a, b }
    }

    /// Relax this link toward `rest_distance`.
    ///
    /// Returns `false` when the link is stretched past `tear_distance`; the
    /// points are left untouched and the caller is expected to drop the link.
    /// Links at or under rest length are not corrected. Otherwise the
    /// correction is split evenly and a pinned endpoint keeps its share
    /// unapplied.
    #[must_use]
    pub fn solve<F: Float>(
        &self,
        points: &mut [PointMass<F>],
        rest_distance: F,
        tear_distance: F,
    ) -> bool {
        let a_pos = points[self.a].pos;
        let b_pos = points[self.b].pos;
        let dist_sq = vec::distance_sq(a_pos, b_pos);

        if dist_sq > tear_distance * tear_distance {
            return false;
        }

        if dist_sq > rest_distance * rest_distance {
            let dist = dist_sq.sqrt();
            let diff = (rest_distance - dist) / dist;
            let correction = (b_pos - a_pos).scale(F::half() * diff);

            if !points[self.a].is_pinned() {
                points[self.a].pos -= correction;
            }
            if !points[self.b].is_pinned() {
                points[self.b].pos += correction;
            }
        }

        true
    }

    /// Whether the link's midpoint lies strictly within `radius` of `at`.
    pub fn is_near<F: Float>(&self, points: &[PointMass<F>], at: Vec2<F>, radius: F) -> bool {
        let mid = vec::midpoint(points[self.a].pos, points[self.b].pos);
        vec::distance_sq(at, mid) < radius * radius
    }

    /// Current endpoint positions.
    pub fn endpoints<F: Float>(&self, points: &[PointMass<F>]) -> (Vec2<F>, Vec2<F>) {
        (points[self.a].pos, points[self.b].pos)
    }

    /// Whether `index` is one of this link's endpoints.
    pub fn touches(&self, index: usize) -> bool {
        self.a == index || self.b == index
    }
}
