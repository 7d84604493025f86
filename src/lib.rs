//! Tearable Verlet cloth for interactive 2D scenes.
//!
//! `tatters` simulates a rectangular cloth as a grid of point masses joined by
//! distance links. Points integrate with Verlet, links relax iteratively and
//! tear when overstretched, and a pointer can drag the cloth or cut it. A
//! fixed-timestep driver keeps the physics identical at any display rate.
//!
//! # Features
//!
//! - **Verlet points**: implicit velocity, damping, pinning, boundary clamp
//! - **Tearing links**: stretch-only relaxation, permanent removal past a threshold
//! - **Cutting**: remove links whose midpoint is under the cursor
//! - **Fixed timestep**: accumulator with frame clamp and per-step pointer interpolation
//! - **Observable**: Monitor steps via the `StepObserver` trait, diagnostics via `log`
//! - **`no_std` compatible**: Works in embedded and WASM environments
//!
//! # Example
//! ```
//! use tatters::{ClothConfig, NoOpStepObserver, Pointer, Simulation, Vec2};
//!
//! let params = ClothConfig::<f64>::new().with_quality(20).build().unwrap();
//! let mut sim = Simulation::with_mesh(params, 800.0);
//! let pointer = Pointer::new();
//! sim.start(0.0, &pointer);
//! let steps = sim.advance(50.0, &pointer, Vec2::new(800.0, 600.0), &mut NoOpStepObserver);
//! assert_eq!(steps, 3);
//! ```

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod point;
pub mod link;
pub mod mesh;
pub mod pointer;
pub mod surface;
pub mod fps;
pub mod simulation;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::{distance, distance_sq, midpoint, Vec2};
pub use point::{Interaction, PointMass};
pub use link::Link;
pub use mesh::Mesh;
pub use pointer::{Button, Pointer};
pub use surface::{Host, Surface};
pub use fps::FpsCounter;
pub use simulation::Simulation;
pub use config::{ClothConfig, ClothParams};
pub use observer::{NoOpStepObserver, StepObserver};
pub use error::ClothError;
