use tatters::{
    Button, ClothConfig, Mesh, NoOpStepObserver, Pointer, Simulation, Surface, Vec2,
};
use wasm_bindgen::prelude::*;

// ---- Line buffer surface ----

/// Collects link segments into a flat buffer the page strokes in one path.
struct LineBuffer {
    size: Vec2<f32>,
    segments: Vec<f32>,
    fps: u32,
    entities: usize,
}

impl Surface<f32> for LineBuffer {
    fn dimensions(&self) -> Vec2<f32> {
        self.size
    }

    fn clear(&mut self) {
        self.segments.clear();
    }

    fn draw_links(&mut self, mesh: &Mesh<f32>) {
        self.segments.reserve(mesh.link_count() * 4);
        for (a, b) in mesh.segments() {
            self.segments.extend_from_slice(&[a.x, a.y, b.x, b.y]);
        }
    }

    fn draw_stats(&mut self, fps: u32, entities: usize) {
        self.fps = fps;
        self.entities = entities;
    }
}

// ---- Cloth Demo ----

#[wasm_bindgen]
pub struct ClothDemo {
    sim: Simulation<f32>,
    pointer: Pointer<f32>,
    surface: LineBuffer,
}

#[wasm_bindgen]
impl ClothDemo {
    /// Build a cloth for a canvas of the given size.
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32) -> Result<ClothDemo, JsError> {
        let size = Vec2::new(width, height);
        let params = ClothConfig::new()
            .with_viewport(size)
            .build()
            .map_err(|e| JsError::new(&e.to_string()))?;

        Ok(ClothDemo {
            sim: Simulation::with_mesh(params, width),
            pointer: Pointer::new(),
            surface: LineBuffer { size, segments: Vec::new(), fps: 0, entities: 0 },
        })
    }

    /// Begin the loop. Pass `performance.now()`.
    pub fn start(&mut self, now: f64) {
        self.sim.start(now, &self.pointer);
    }

    pub fn stop(&mut self) {
        self.sim.stop();
    }

    /// Run one animation frame. Returns whether to request another.
    pub fn frame(&mut self, now: f64) -> bool {
        self.sim.frame(now, &self.pointer, &mut self.surface, &mut NoOpStepObserver)
    }

    /// Fresh cloth sized to the current canvas (bound to Space).
    pub fn reset(&mut self) {
        self.sim.reset_for(&self.surface);
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.surface.size = Vec2::new(width, height);
    }

    // ---- Pointer events, in canvas coordinates ----

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.pointer.move_to(Vec2::new(x, y));
    }

    pub fn pointer_down(&mut self, button: u16) {
        if let Some(button) = Button::from_code(button) {
            self.pointer.press(button);
        }
    }

    pub fn pointer_up(&mut self, button: u16) {
        if let Some(button) = Button::from_code(button) {
            self.pointer.release(button);
        }
    }

    pub fn pointer_leave(&mut self) {
        self.pointer.leave();
    }

    /// Window lost focus.
    pub fn blur(&mut self) {
        self.pointer.reset();
    }

    // ---- Render data ----

    /// Returns flat [ax0, ay0, bx0, by0, ax1, ...] link segments from the last frame.
    pub fn segments(&self) -> Vec<f32> {
        self.surface.segments.clone()
    }

    pub fn fps(&self) -> u32 {
        self.surface.fps
    }

    pub fn entities(&self) -> usize {
        self.surface.entities
    }

    pub fn link_count(&self) -> usize {
        self.sim.mesh().link_count()
    }
}
