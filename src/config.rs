//! Configuration for the cloth and its simulation loop.

use crate::error::ClothError;
use crate::float::Float;
use crate::vec::Vec2;

/// Raw, user-facing configuration. Validated into [`ClothParams`] by [`ClothConfig::build`].
///
/// # Builder Pattern
/// ```
/// use tatters::config::ClothConfig;
/// use tatters::vec::Vec2;
///
/// let params = ClothConfig::<f32>::new()
///     .with_quality(30)
///     .with_gravity(Vec2::new(0.0, 9.81))
///     .with_solves(4)
///     .with_viewport(Vec2::new(1024.0, 768.0))
///     .build()
///     .unwrap();
/// assert!(params.tear_distance > params.rest_distance);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ClothConfig<F: Float> {
    /// Acceleration applied every step. Positive y points down. Default: (0, 9.81).
    pub gravity: Vec2<F>,
    /// Fixed simulation steps per second. Default: 60.
    pub frequency: F,
    /// Grid resolution; the cloth is `quality x quality` points. Default: 50.
    pub quality: usize,
    /// Relaxation passes over all links per step. Default: 3.
    pub solves: usize,
    /// Tear distance as a multiple of the rest distance. Default: 5.
    pub tear_multiplier: F,
    /// Fraction of implicit velocity kept each step. 1.0 = no loss. Default: 0.999.
    pub damping: F,
    /// Radius around the pointer inside which drag force applies. Default: 60.
    pub interaction_radius: F,
    /// Drag force scale, as a percentage of pointer displacement. Default: 15.
    pub interaction_strength: F,
    /// Radius around the pointer inside which links are cut. Default: 20.
    pub cut_radius: F,
    /// Viewport the rest distance is derived from. Default: 800x600.
    pub viewport: Vec2<F>,
    /// Gap between the viewport top and the pinned row. Default: 20.
    pub top_padding: F,
    /// Upper bound on a single frame delta, in ms. Default: 250.
    pub max_frame_ms: F,
}

impl<F: Float> ClothConfig<F> {
    /// Create a new config with default values.
    pub fn new() -> Self {
        ClothConfig {
            gravity: Vec2::new(F::zero(), F::from_f32(9.81)),
            frequency: F::from_f32(60.0),
            quality: 50,
            solves: 3,
            tear_multiplier: F::from_f32(5.0),
            damping: F::from_f32(0.999),
            interaction_radius: F::from_f32(60.0),
            interaction_strength: F::from_f32(15.0),
            cut_radius: F::from_f32(20.0),
            viewport: Vec2::new(F::from_f32(800.0), F::from_f32(600.0)),
            top_padding: F::from_f32(20.0),
            max_frame_ms: F::from_f32(250.0),
        }
    }

    /// Set the gravity vector.
    pub fn with_gravity(mut self, gravity: Vec2<F>) -> Self {
        self.gravity = gravity;
        self
    }

    /// Set the fixed step frequency in Hz.
    pub fn with_frequency(mut self, frequency: F) -> Self {
        self.frequency = frequency;
        self
    }

    /// Set the grid resolution.
    pub fn with_quality(mut self, quality: usize) -> Self {
        self.quality = quality;
        self
    }

    /// Set the number of relaxation passes per step.
    pub fn with_solves(mut self, solves: usize) -> Self {
        self.solves = solves;
        self
    }

    /// Set the tear multiplier.
    pub fn with_tear_multiplier(mut self, tear_multiplier: F) -> Self {
        self.tear_multiplier = tear_multiplier;
        self
    }

    /// Set the damping factor.
    pub fn with_damping(mut self, damping: F) -> Self {
        self.damping = damping;
        self
    }

    /// Set the drag radius and strength.
    pub fn with_interaction(mut self, radius: F, strength: F) -> Self {
        self.interaction_radius = radius;
        self.interaction_strength = strength;
        self
    }

    /// Set the cut radius.
    pub fn with_cut_radius(mut self, cut_radius: F) -> Self {
        self.cut_radius = cut_radius;
        self
    }

    /// Set the viewport dimensions.
    pub fn with_viewport(mut self, viewport: Vec2<F>) -> Self {
        self.viewport = viewport;
        self
    }

    /// Set the padding above the pinned row.
    pub fn with_top_padding(mut self, top_padding: F) -> Self {
        self.top_padding = top_padding;
        self
    }

    /// Set the frame delta clamp in ms.
    pub fn with_max_frame_ms(mut self, max_frame_ms: F) -> Self {
        self.max_frame_ms = max_frame_ms;
        self
    }

    /// Validate and compute the derived constants.
    pub fn build(self) -> Result<ClothParams<F>, ClothError> {
        if self.quality == 0 {
            return Err(ClothError::InvalidQuality);
        }
        if !self.frequency.is_finite() || self.frequency <= F::zero() {
            return Err(ClothError::InvalidFrequency);
        }
        let viewport_ok = |v: F| v.is_finite() && v > F::zero();
        if !viewport_ok(self.viewport.x) || !viewport_ok(self.viewport.y) {
            return Err(ClothError::InvalidViewport);
        }
        if !self.tear_multiplier.is_finite() || self.tear_multiplier < F::one() {
            return Err(ClothError::InvalidTearMultiplier);
        }
        if !(self.damping >= F::zero() && self.damping <= F::one()) {
            return Err(ClothError::InvalidDamping);
        }
        let non_negative = |v: F| v.is_finite() && v >= F::zero();
        if !non_negative(self.interaction_radius)
            || !non_negative(self.interaction_strength)
            || !non_negative(self.cut_radius)
            || !self.gravity.x.is_finite()
            || !self.gravity.y.is_finite()
            || !self.top_padding.is_finite()
        {
            return Err(ClothError::InvalidInteraction);
        }
        if !self.max_frame_ms.is_finite() || self.max_frame_ms <= F::zero() {
            return Err(ClothError::InvalidFrameClamp);
        }

        let rest_distance =
            F::from_f32(0.75) * self.viewport.min_element() / F::from_usize(self.quality);
        let tear_distance = self.tear_multiplier * rest_distance;
        let step_ms = F::from_f32(1000.0) / self.frequency;

        Ok(ClothParams {
            rest_distance,
            tear_distance,
            step_ms,
            step_seconds: step_ms / F::from_f32(1000.0),
            config: self,
        })
    }
}

impl<F: Float> Default for ClothConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// Validated configuration plus the constants derived from it once at startup.
#[derive(Clone, Debug, PartialEq)]
pub struct ClothParams<F: Float> {
    /// The configuration these values were derived from.
    pub config: ClothConfig<F>,
    /// Resting link length: `0.75 * min(viewport) / quality`.
    pub rest_distance: F,
    /// Link length past which a link tears.
    pub tear_distance: F,
    /// Fixed step size in ms.
    pub step_ms: F,
    /// Fixed step size in seconds, the `dt` handed to point updates.
    pub step_seconds: F,
}
