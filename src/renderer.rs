//! Per-frame drawing: attractor points, the fading trail and the rate counter.
//!
//! Nothing is ever cleared. Points accumulate on the screen surface and an
//! opaque black overlay, composited at a very low alpha once per frame,
//! darkens everything drawn earlier by one channel step. Older points fade
//! out over a few seconds.

use crate::config::{FADE_ALPHA, RADIUS, RATE_RECT, SUBSTEPS_PER_FRAME, SUBSTEP_DT};
use crate::draw;
use crate::scene::Scene;
use crate::surface::{Color, Rect, Surface};

/// Counters for what the renderer has done so far.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub frames: u64,
    /// Integration sub-steps applied to the scene (each steps every entry).
    pub substeps: u64,
    /// Trail overlay composites.
    pub fades: u64,
}

/// Draws frames onto a screen surface.
#[derive(Debug)]
pub struct Renderer {
    trail: Surface,
    fade_alpha: u8,
    radius: i32,
    substeps: u32,
    dt: f64,
    stats: RenderStats,
}

impl Renderer {
    /// Create a renderer for a `width x height` screen. The trail overlay is
    /// built here and never redrawn.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            trail: Surface::filled(width, height, Color::BLACK),
            fade_alpha: FADE_ALPHA,
            radius: RADIUS,
            substeps: SUBSTEPS_PER_FRAME,
            dt: SUBSTEP_DT,
            stats: RenderStats::default(),
        }
    }

    /// The trail overlay surface.
    pub fn trail(&self) -> &Surface {
        &self.trail
    }

    pub fn stats(&self) -> RenderStats {
        self.stats
    }

    /// Run the fixed sub-steps, drawing one translucent circle per entry
    /// after each. All drawing happens under a single pixel lock.
    pub fn draw_points(&mut self, screen: &mut Surface, scene: &mut Scene) {
        let mut lock = screen.lock();
        for _ in 0..self.substeps {
            scene.step(self.dt);
            for entry in scene.entries() {
                draw::filled_circle(&mut lock, entry.screen_position(), self.radius, entry.color);
            }
            self.stats.substeps += 1;
        }
    }

    /// Composite the trail overlay over the whole screen.
    pub fn fade(&mut self, screen: &mut Surface) {
        screen.blit_alpha(&self.trail, self.fade_alpha);
        self.stats.fades += 1;
    }

    /// Clear the counter rectangle and, if `rate` is given, print it there.
    pub fn draw_rate(&self, screen: &mut Surface, rate: Option<u32>) {
        let (x, y, w, h) = RATE_RECT;
        screen.fill_rect(Rect::new(x, y, w, h), Color::BLACK);
        if let Some(rate) = rate {
            draw::text(screen, x, y, &rate.to_string(), Color::WHITE);
        }
    }

    /// The whole per-frame sequence short of presenting.
    pub fn render_frame(&mut self, screen: &mut Surface, scene: &mut Scene, rate: Option<u32>) {
        self.draw_points(screen, scene);
        self.fade(screen);
        self.draw_rate(screen, rate);
        self.stats.frames += 1;
    }
}
