//! Step observer trait for monitoring cloth simulation progress.

/// Trait for observing simulation steps.
///
/// Implement this to count tears, profile passes or drive debug overlays.
/// All methods have default no-op implementations.
pub trait StepObserver {
    /// Called after each relaxation pass with the number of links it tore.
    fn on_relax_iteration(&mut self, _iteration: usize, _torn: usize) {}

    /// Called after all points have been integrated.
    fn on_integrate(&mut self) {}

    /// Called after a cut pass with the number of links it removed.
    fn on_cut(&mut self, _removed: usize) {}

    /// Called when a fixed step is fully complete.
    fn on_step_complete(&mut self) {}
}

/// A no-op observer. Use as default when no observation needed.
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}
