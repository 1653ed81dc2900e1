//! Frame presentation seam.
//!
//! The frame loop hands each finished [`Surface`] to a [`Presenter`]. The
//! window build uses the wgpu presenter; tests and benchmarks use
//! [`HeadlessPresenter`].

use crate::error::PresentError;
use crate::surface::Surface;

/// Puts a finished frame on screen (or wherever frames go).
pub trait Presenter {
    /// Present `frame`. Recoverable conditions should be handled internally;
    /// an `Err` ends the run.
    fn present(&mut self, frame: &Surface) -> Result<(), PresentError>;
}

/// A presenter with no display. Counts frames and keeps a copy of the last.
#[derive(Debug, Default)]
pub struct HeadlessPresenter {
    presented: u64,
    last: Option<Surface>,
}

impl HeadlessPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Frames presented so far.
    pub fn presented(&self) -> u64 {
        self.presented
    }

    /// The most recently presented frame.
    pub fn last_frame(&self) -> Option<&Surface> {
        self.last.as_ref()
    }
}

impl Presenter for HeadlessPresenter {
    fn present(&mut self, frame: &Surface) -> Result<(), PresentError> {
        self.presented += 1;
        match &mut self.last {
            Some(last) => last.clone_from(frame),
            None => self.last = Some(frame.clone()),
        }
        Ok(())
    }
}
