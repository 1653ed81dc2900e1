//! Compile-time tunables.
//!
//! Everything the simulation can be tuned with lives here. There is no
//! runtime configuration beyond `RUST_LOG`.

// ---------------------------------------------------------------------------
// Surface
// ---------------------------------------------------------------------------
pub const SCREEN_WIDTH: u32 = 320;
pub const SCREEN_HEIGHT: u32 = 240;
pub const WINDOW_SCALE: u32 = 2; // Window pixels per surface pixel
pub const WINDOW_TITLE: &str = "Lorenz Trails";

// ---------------------------------------------------------------------------
// Pacing
// ---------------------------------------------------------------------------
pub const FPS_LIMIT: u32 = 60;

// ---------------------------------------------------------------------------
// Drawing
// ---------------------------------------------------------------------------
pub const BRIGHTNESS: u8 = 255;
pub const ALPHA: u8 = 24; // Per-circle alpha
pub const RADIUS: i32 = 4;
pub const FADE_ALPHA: u8 = 1; // Trail overlay alpha, one channel step per frame

/// Corner rectangle holding the rate counter: `(x, y, w, h)`.
pub const RATE_RECT: (i32, i32, u32, u32) = (0, 0, 64, 16);

// ---------------------------------------------------------------------------
// Integration
// ---------------------------------------------------------------------------
pub const SUBSTEPS_PER_FRAME: u32 = 10;
pub const SUBSTEP_DT: f64 = 0.001; // Seconds per sub-step
