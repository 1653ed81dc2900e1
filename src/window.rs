//! winit application driving the frame loop.

use std::sync::Arc;

use log::info;
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::WindowEvent,
    event_loop::ActiveEventLoop,
    window::{Window, WindowId},
};

use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH, WINDOW_SCALE};
use crate::error::SimulationError;
use crate::gpu::GpuPresenter;
use crate::input::Input;
use crate::simulation::FrameLoop;

/// Runs one [`FrameLoop`] iteration per redraw.
///
/// Window events are queued as input and consumed by the next frame, so a
/// close request still lets that frame finish before the loop exits.
pub(crate) struct App {
    frame_loop: FrameLoop,
    input: Input,
    title: String,
    window: Option<Arc<Window>>,
    presenter: Option<GpuPresenter>,
    error: Option<SimulationError>,
}

impl App {
    pub(crate) fn new(frame_loop: FrameLoop, title: String) -> Self {
        Self {
            frame_loop,
            input: Input::new(),
            title,
            window: None,
            presenter: None,
            error: None,
        }
    }

    /// Consume the app after the event loop returns, yielding the first
    /// fatal error if one stopped the run.
    pub(crate) fn finish(self) -> Result<(), SimulationError> {
        match self.error {
            Some(e) => Err(e),
            None => {
                info!("Finished after {} frames", self.frame_loop.stats().frames);
                Ok(())
            }
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, e: SimulationError) {
        self.error.get_or_insert(e);
        event_loop.exit();
    }

    fn open(&mut self, event_loop: &ActiveEventLoop) -> Result<(), SimulationError> {
        let window_attrs = Window::default_attributes()
            .with_title(self.title.as_str())
            .with_inner_size(LogicalSize::new(
                SCREEN_WIDTH * WINDOW_SCALE,
                SCREEN_HEIGHT * WINDOW_SCALE,
            ))
            .with_resizable(false);

        let window = Arc::new(event_loop.create_window(window_attrs)?);
        window.set_cursor_visible(false);
        info!(
            "Opened {}x{} window for a {}x{} screen",
            SCREEN_WIDTH * WINDOW_SCALE,
            SCREEN_HEIGHT * WINDOW_SCALE,
            SCREEN_WIDTH,
            SCREEN_HEIGHT
        );

        let presenter = pollster::block_on(GpuPresenter::new(
            window.clone(),
            SCREEN_WIDTH,
            SCREEN_HEIGHT,
        ))?;
        self.window = Some(window);
        self.presenter = Some(presenter);
        Ok(())
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            if let Err(e) = self.open(event_loop) {
                self.fail(event_loop, e);
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::Resized(physical_size) => {
                if let Some(presenter) = &mut self.presenter {
                    presenter.resize(physical_size);
                }
            }
            WindowEvent::RedrawRequested => {
                let Some(presenter) = &mut self.presenter else {
                    return;
                };
                match self.frame_loop.frame(self.input.drain(), presenter) {
                    Ok(true) => {}
                    Ok(false) => event_loop.exit(),
                    Err(e) => self.fail(event_loop, e.into()),
                }
            }
            other => self.input.handle_event(&other),
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}
