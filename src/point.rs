//! Verlet point masses with pinning, pointer drag and boundary clamping.

use crate::config::ClothParams;
use crate::float::Float;
use crate::vec::Vec2;

/// Pointer sample handed to every point during one substep.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Interaction<F: Float> {
    /// Interpolated pointer position for this substep.
    pub point: Vec2<F>,
    /// Pointer displacement for this substep, used as the drag force.
    pub force: Vec2<F>,
    /// Whether the drag button is held.
    pub active: bool,
}

impl<F: Float> Interaction<F> {
    /// A sample that applies no force anywhere.
    pub fn idle() -> Self {
        Interaction { point: Vec2::zero(), force: Vec2::zero(), active: false }
    }
}

/// A Verlet point mass. Velocity is implicit in `pos - prev_pos`.
#[derive(Clone, Debug, PartialEq)]
pub struct PointMass<F: Float> {
    pub pos: Vec2<F>,
    pub prev_pos: Vec2<F>,
    pinned: bool,
    anchor: Vec2<F>,
}

impl<F: Float> PointMass<F> {
    /// Create a free point at rest at `pos`.
    pub fn new(pos: Vec2<F>) -> Self {
        PointMass { pos, prev_pos: pos, pinned: false, anchor: pos }
    }

    /// Create a point pinned at `pos`.
    pub fn pinned(pos: Vec2<F>) -> Self {
        let mut p = Self::new(pos);
        p.pin();
        p
    }

    /// Hold this point where it currently is.
    pub fn pin(&mut self) {
        self.pinned = true;
        self.anchor = self.pos;
        self.prev_pos = self.pos;
    }

    /// Release the point. Pinning zeroed its implicit velocity, so it resumes from rest.
    pub fn unpin(&mut self) {
        self.pinned = false;
    }

    pub fn is_pinned(&self) -> bool {
        self.pinned
    }

    /// Location a pinned point is held at.
    pub fn anchor(&self) -> Vec2<F> {
        self.anchor
    }

    /// Implicit per-step velocity.
    pub fn velocity_raw(&self) -> Vec2<F> {
        self.pos - self.prev_pos
    }

    /// Advance one substep.
    ///
    /// Pinned points snap back to their anchor and nothing else happens. Free
    /// points pick up the drag force when `interaction` is active and within
    /// the interaction radius, integrate with damping and gravity, and are then
    /// clamped into `[0, bounds.x] x [0, bounds.y]`.
    ///
    /// Gravity is added as `gravity * dt` rather than `gravity * dt^2`; with a
    /// constant step the implicit velocity carries the remaining factor.
    pub fn update(
        &mut self,
        dt: F,
        interaction: &Interaction<F>,
        bounds: Vec2<F>,
        params: &ClothParams<F>,
    ) {
        if self.pinned {
            self.pos = self.anchor;
            return;
        }

        let config = &params.config;
        let mut applied = Vec2::zero();
        if interaction.active {
            let reach = config.interaction_radius;
            if self.pos.distance_sq(interaction.point) < reach * reach {
                applied = interaction.force;
            }
        }

        let drag_scale = config.interaction_strength / F::from_f32(100.0);
        let velocity = self.velocity_raw().scale(config.damping) + applied.scale(drag_scale);

        self.prev_pos = self.pos;
        self.pos = self.pos + velocity + config.gravity.scale(dt);
        self.pos = self.pos.clamp(Vec2::zero(), bounds);
    }
}
