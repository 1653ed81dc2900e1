//! Simulation builder and frame loop.

use log::debug;
use winit::event_loop::{ControlFlow, EventLoop};

use crate::config::{FPS_LIMIT, SCREEN_HEIGHT, SCREEN_WIDTH, WINDOW_TITLE};
use crate::error::{PresentError, SimulationError};
use crate::input::{Controls, EventSource, InputEvent};
use crate::present::Presenter;
use crate::renderer::{RenderStats, Renderer};
use crate::scene::Scene;
use crate::surface::Surface;
use crate::time::{FrameClock, FrameLimiter, RateCounter};
use crate::window::App;

/// A Lorenz trail simulation builder.
///
/// Defaults to the reference scene at the compiled-in frame rate. Call
/// `.run()` to open a window, or [`Simulation::frame_loop`] to drive frames
/// yourself.
pub struct Simulation {
    scene: Scene,
    fps_limit: u32,
    title: String,
}

impl Simulation {
    /// Create a simulation with default settings.
    pub fn new() -> Self {
        Self {
            scene: Scene::reference(),
            fps_limit: FPS_LIMIT,
            title: WINDOW_TITLE.to_string(),
        }
    }

    /// Replace the scene.
    pub fn with_scene(mut self, scene: Scene) -> Self {
        self.scene = scene;
        self
    }

    /// Set the frame-rate cap. `0` disables limiting.
    pub fn with_fps_limit(mut self, fps: u32) -> Self {
        self.fps_limit = fps;
        self
    }

    /// Set the window title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Build the frame loop without a window.
    pub fn frame_loop(self) -> FrameLoop {
        FrameLoop::new(self.scene, self.fps_limit)
    }

    /// Open a window and run until it is closed or Escape is pressed.
    pub fn run(self) -> Result<(), SimulationError> {
        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let title = self.title.clone();
        let mut app = App::new(self.frame_loop(), title);
        event_loop.run_app(&mut app)?;
        app.finish()
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new()
    }
}

/// Everything one running simulation owns: the screen, the scene, the
/// renderer and its trail overlay, and the frame timing state.
#[derive(Debug)]
pub struct FrameLoop {
    screen: Surface,
    scene: Scene,
    renderer: Renderer,
    clock: FrameClock,
    limiter: FrameLimiter,
    rate: RateCounter,
    show_rate: bool,
    quit: bool,
}

impl FrameLoop {
    pub fn new(scene: Scene, fps_limit: u32) -> Self {
        Self {
            screen: Surface::new(SCREEN_WIDTH, SCREEN_HEIGHT),
            scene,
            renderer: Renderer::new(SCREEN_WIDTH, SCREEN_HEIGHT),
            clock: FrameClock::new(),
            limiter: FrameLimiter::new(fps_limit),
            rate: RateCounter::new(),
            show_rate: false,
            quit: false,
        }
    }

    /// Run one displayed frame: apply `events`, measure and pace, render,
    /// and present. Returns `Ok(true)` while the loop should keep going.
    ///
    /// A quit request still completes the current frame; it is observed by
    /// the caller through the return value.
    pub fn frame<I, P>(&mut self, events: I, presenter: &mut P) -> Result<bool, PresentError>
    where
        I: IntoIterator<Item = InputEvent>,
        P: Presenter + ?Sized,
    {
        let controls = Controls::from_events(events);
        if controls.quit {
            self.quit = true;
        }
        let show = controls.apply_toggle(self.show_rate);
        if show != self.show_rate {
            debug!("Rate display {}", if show { "on" } else { "off" });
            self.show_rate = show;
        }

        let dt = self.clock.tick();
        self.limiter.wait();
        if self.rate.record(dt) {
            debug!("Measured {} fps", self.rate.rate());
        }

        let rate = self.show_rate.then(|| self.rate.rate());
        self.renderer.render_frame(&mut self.screen, &mut self.scene, rate);
        presenter.present(&self.screen)?;

        Ok(!self.quit)
    }

    /// Poll `events` and run frames until termination is requested.
    /// Returns the renderer's counters at exit.
    pub fn run<S, P>(
        &mut self,
        events: &mut S,
        presenter: &mut P,
    ) -> Result<RenderStats, PresentError>
    where
        S: EventSource + ?Sized,
        P: Presenter + ?Sized,
    {
        while !self.quit {
            let pending = events.poll();
            self.frame(pending, presenter)?;
        }
        Ok(self.renderer.stats())
    }

    pub fn screen(&self) -> &Surface {
        &self.screen
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn stats(&self) -> RenderStats {
        self.renderer.stats()
    }

    /// Last measured frame rate.
    pub fn rate(&self) -> u32 {
        self.rate.rate()
    }

    pub fn show_rate(&self) -> bool {
        self.show_rate
    }

    /// Whether termination has been requested.
    pub fn is_finished(&self) -> bool {
        self.quit
    }
}
