//! # Lorenz Trails
//!
//! Several Lorenz attractors integrated in real time and drawn as fading
//! trails on a small software pixel surface.
//!
//! Every displayed frame advances each attractor by a fixed number of
//! explicit-Euler sub-steps, drawing a translucent filled circle at its
//! projected position after each one. Nothing is cleared between frames;
//! instead an opaque black overlay is composited at alpha 1, so older points
//! lose one channel step per frame and fade out over a few seconds.
//!
//! ## Quick Start
//!
//! ```ignore
//! use lorenz_trails::prelude::*;
//!
//! fn main() {
//!     Simulation::new().run().unwrap();
//! }
//! ```
//!
//! ## Controls
//!
//! - `Escape` or closing the window quits after the current frame.
//! - `Enter` toggles the frame-rate counter in the top-left corner.
//!
//! ## Headless use
//!
//! The frame loop does not need a window. Drive it with any
//! [`EventSource`](input::EventSource) and [`Presenter`](present::Presenter):
//!
//! ```ignore
//! use lorenz_trails::prelude::*;
//!
//! let mut frames = Simulation::new().with_fps_limit(0).frame_loop();
//! let mut out = HeadlessPresenter::new();
//! frames.frame(Vec::new(), &mut out)?;
//! ```
//!
//! ## Logging
//!
//! Diagnostics go through the [`log`] facade. The binary installs
//! `env_logger`, so set `RUST_LOG=debug` to see rate updates.

pub mod config;
pub mod draw;
pub mod error;
pub mod font;
pub mod gpu;
pub mod input;
pub mod lorenz;
pub mod present;
pub mod projection;
pub mod renderer;
pub mod scene;
mod simulation;
pub mod surface;
pub mod time;
mod window;

pub use error::{GpuError, PresentError, SimulationError};
pub use glam::{DVec2, DVec3, IVec2};
pub use lorenz::Lorenz;
pub use projection::{Axis, Projection};
pub use renderer::{RenderStats, Renderer};
pub use scene::{Scene, SceneEntry};
pub use simulation::{FrameLoop, Simulation};
pub use surface::{Color, Surface};

/// Convenient re-exports for common usage.
///
/// ```ignore
/// use lorenz_trails::prelude::*;
/// ```
pub mod prelude {
    pub use crate::input::{EventSource, Input, InputEvent, KeyCode};
    pub use crate::lorenz::Lorenz;
    pub use crate::present::{HeadlessPresenter, Presenter};
    pub use crate::projection::{Axis, Projection};
    pub use crate::scene::{Scene, SceneEntry};
    pub use crate::simulation::{FrameLoop, Simulation};
    pub use crate::surface::Color;
    pub use crate::{DVec2, DVec3, IVec2};
}
