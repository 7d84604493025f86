//! Fixed-timestep driver: banks frame time, runs whole steps, and smooths
//! pointer motion across the steps of a frame.

use crate::config::ClothParams;
use crate::float::Float;
use crate::fps::FpsCounter;
use crate::mesh::Mesh;
use crate::observer::StepObserver;
use crate::point::Interaction;
use crate::pointer::Pointer;
use crate::surface::{Host, Surface};
use crate::vec::Vec2;

/// Owns the cloth and advances it in fixed steps regardless of display rate.
///
/// All state is mutated only inside [`advance`](Self::advance) /
/// [`frame`](Self::frame) or through `&mut self` between frames, so a
/// [`reset`](Self::reset) can never interleave with a step.
pub struct Simulation<F: Float> {
    params: ClothParams<F>,
    mesh: Mesh<F>,
    /// Wall clock in ms. Kept in f64 whatever `F` is: `performance.now()`
    /// after hours of uptime is too large for f32 to resolve frame deltas.
    last_time: Option<f64>,
    accumulator: F,
    /// Pointer position as of the last executed step.
    sim_pointer: Vec2<F>,
    fps: FpsCounter,
    running: bool,
}

impl<F: Float> Simulation<F> {
    /// A stopped simulation with an empty mesh. Call [`reset`](Self::reset) to build the cloth.
    pub fn new(params: ClothParams<F>) -> Self {
        Simulation {
            params,
            mesh: Mesh::empty(),
            last_time: None,
            accumulator: F::zero(),
            sim_pointer: Vec2::zero(),
            fps: FpsCounter::new(0.0),
            running: false,
        }
    }

    /// A stopped simulation with a fresh cloth for a surface `viewport_width` wide.
    pub fn with_mesh(params: ClothParams<F>, viewport_width: F) -> Self {
        let mut sim = Self::new(params);
        sim.reset(viewport_width);
        sim
    }

    /// Replace the mesh with a fresh cloth. Pacing state is left alone.
    pub fn reset(&mut self, viewport_width: F) {
        self.mesh = Mesh::reset(viewport_width, &self.params);
        log::debug!(
            "cloth reset: {} points, {} links",
            self.mesh.point_count(),
            self.mesh.link_count()
        );
    }

    /// [`reset`](Self::reset) sized to the surface's current width.
    pub fn reset_for<S: Surface<F>>(&mut self, surface: &S) {
        self.reset(surface.dimensions().x);
    }

    /// Begin running. `now` is the current timestamp in ms.
    pub fn start(&mut self, now: f64, pointer: &Pointer<F>) {
        self.running = true;
        self.last_time = Some(now);
        self.fps.restart(now);
        self.sim_pointer = pointer.position.unwrap_or_else(Vec2::zero);
        log::debug!("simulation started at {:?}ms", now);
    }

    /// Ask the host not to schedule another frame.
    pub fn stop(&mut self) {
        if self.running {
            log::debug!("simulation stopped");
        }
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Bank the time since the previous call and run every whole step owed.
    /// Returns the number of steps executed.
    ///
    /// The frame delta is clamped to `max_frame_ms` so a long stall (a
    /// backgrounded tab, a debugger) cannot queue unbounded catch-up work.
    /// Pointer displacement since the last executed step is split evenly
    /// across this frame's steps.
    pub fn advance<O: StepObserver>(
        &mut self,
        now: f64,
        pointer: &Pointer<F>,
        bounds: Vec2<F>,
        observer: &mut O,
    ) -> usize {
        let elapsed = match self.last_time {
            Some(last) => F::from_f64((now - last).max(0.0)),
            None => F::zero(),
        };
        self.last_time = Some(now);

        let max_frame = self.params.config.max_frame_ms;
        let frame_ms = if elapsed > max_frame {
            log::debug!("frame delta {:?}ms clamped to {:?}ms", elapsed, max_frame);
            max_frame
        } else {
            elapsed
        };
        self.accumulator = self.accumulator + frame_ms;

        let step_ms = self.params.step_ms;
        let steps = (self.accumulator / step_ms).floor().to_usize();
        if steps == 0 {
            return 0;
        }

        let target = pointer.position.unwrap_or(self.sim_pointer);
        let step_delta = (target - self.sim_pointer).scale(F::one() / F::from_usize(steps));
        let cutting = pointer.secondary && pointer.has_position();
        let cut_radius = self.params.config.cut_radius;
        let dt = self.params.step_seconds;

        let mut cursor = self.sim_pointer;
        let mut torn = 0;
        let mut cut = 0;

        for _ in 0..steps {
            cursor += step_delta;

            torn += self.mesh.relax(&self.params, observer);

            let interaction = Interaction { point: cursor, force: step_delta, active: pointer.primary };
            self.mesh.integrate(dt, &interaction, bounds, &self.params);
            observer.on_integrate();

            if cutting {
                let removed = self.mesh.cut(cursor, cut_radius);
                observer.on_cut(removed);
                cut += removed;
            }

            observer.on_step_complete();
        }

        self.accumulator = self.accumulator - F::from_usize(steps) * step_ms;
        self.sim_pointer = target;

        log::trace!("{} steps, {} links torn, {} links cut", steps, torn, cut);
        steps
    }

    /// One display frame: advance, then redraw the surface and the readout.
    ///
    /// Returns whether the host should schedule another frame. A stopped
    /// simulation does nothing and returns `false`.
    pub fn frame<S: Surface<F>, O: StepObserver>(
        &mut self,
        now: f64,
        pointer: &Pointer<F>,
        surface: &mut S,
        observer: &mut O,
    ) -> bool {
        if !self.running {
            return false;
        }

        let bounds = surface.dimensions();
        self.advance(now, pointer, bounds, observer);

        surface.clear();
        surface.draw_links(&self.mesh);

        self.fps.tick(now);
        surface.draw_stats(self.fps.fps(), self.mesh.point_count());

        self.running
    }

    /// Drive frames from `host` until it stops producing them or
    /// [`stop`](Self::stop) is called.
    pub fn run<H: Host<F>, O: StepObserver>(&mut self, host: &mut H, observer: &mut O) {
        let Some(now) = host.next_frame() else { return };
        let pointer = host.pointer();
        self.start(now, &pointer);

        while let Some(now) = host.next_frame() {
            let pointer = host.pointer();
            if !self.frame(now, &pointer, host.surface(), observer) {
                break;
            }
        }
        self.stop();
    }

    pub fn mesh(&self) -> &Mesh<F> {
        &self.mesh
    }

    /// Mutable mesh access, only possible between frames.
    pub fn mesh_mut(&mut self) -> &mut Mesh<F> {
        &mut self.mesh
    }

    pub fn params(&self) -> &ClothParams<F> {
        &self.params
    }

    /// Pointer position as of the last executed step.
    pub fn sim_pointer(&self) -> Vec2<F> {
        self.sim_pointer
    }

    /// Banked time not yet spent on a whole step, in ms.
    pub fn accumulator(&self) -> F {
        self.accumulator
    }

    pub fn fps(&self) -> u32 {
        self.fps.fps()
    }
}
