//! Host-side collaborators: the render surface and the frame scheduler.

use crate::float::Float;
use crate::mesh::Mesh;
use crate::pointer::Pointer;
use crate::vec::Vec2;

/// Something the cloth can be drawn onto.
pub trait Surface<F: Float> {
    /// Current drawable size. Also used as the boundary points are clamped to.
    fn dimensions(&self) -> Vec2<F>;

    fn clear(&mut self);

    /// Draw every surviving link as a line segment.
    fn draw_links(&mut self, mesh: &Mesh<F>);

    /// Draw the frame-rate readout and the entity count.
    fn draw_stats(&mut self, fps: u32, entities: usize);
}

/// The environment that drives [`Simulation::run`](crate::simulation::Simulation::run).
pub trait Host<F: Float> {
    type Surface: Surface<F>;

    /// Block or yield until the next display frame and return its timestamp
    /// in ms, or `None` once the host is shutting down.
    fn next_frame(&mut self) -> Option<f64>;

    /// Latest pointer sample.
    fn pointer(&self) -> Pointer<F>;

    fn surface(&mut self) -> &mut Self::Surface;
}
