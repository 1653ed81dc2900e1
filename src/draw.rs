//! Drawing primitives on top of [`Surface`].

use glam::IVec2;

use crate::font::{self, GLYPH_WIDTH};
use crate::surface::{Color, Surface, SurfaceLock};

/// Fill a circle of `radius` centred on `center`, blending every covered
/// pixel exactly once with `color.a`.
///
/// Any part outside the surface is clipped. A circle entirely off-surface,
/// including one at a saturated coordinate, touches nothing.
pub fn filled_circle(lock: &mut SurfaceLock<'_>, center: IVec2, radius: i32, color: Color) {
    if radius < 0 {
        return;
    }
    let (cx, cy, r) = (center.x as i64, center.y as i64, radius as i64);
    let (w, h) = (lock.width() as i64, lock.height() as i64);
    if cx + r < 0 || cy + r < 0 || cx - r >= w || cy - r >= h {
        return;
    }

    let mut half = r;
    for dy in 0..=r {
        while half * half + dy * dy > r * r {
            half -= 1;
        }
        // Bounding box is on-surface, so every coordinate here fits in i32
        let (x0, x1) = ((cx - half) as i32, (cx + half) as i32);
        lock.blend_hline(x0, x1, (cy + dy) as i32, color);
        if dy != 0 {
            lock.blend_hline(x0, x1, (cy - dy) as i32, color);
        }
    }
}

/// Draw `text` with its top-left corner at `(x, y)`. Only the glyph's set
/// bits are written, as opaque `color`.
pub fn text(surface: &mut Surface, x: i32, y: i32, text: &str, color: Color) {
    let mut lock = surface.lock();
    let mut pen = x;
    for c in text.chars() {
        if let Some(rows) = font::glyph(c) {
            for (row, bits) in rows.iter().enumerate() {
                for col in 0..GLYPH_WIDTH {
                    if bits & (0x80 >> col) != 0 {
                        lock.set(pen.saturating_add(col), y + row as i32, color);
                    }
                }
            }
        }
        pen = pen.saturating_add(GLYPH_WIDTH);
    }
}
