//! CPU pixel surface with scoped, bounds-checked pixel access.
//!
//! Pixels are 32-bit `0xAARRGGBB`. Stored little-endian, the byte order is
//! B, G, R, A, which is what the presenter uploads as `Bgra8Unorm`.
//!
//! Direct pixel writes go through a [`SurfaceLock`] obtained from
//! [`Surface::lock`]. The lock borrows the surface mutably, so whole-surface
//! operations such as [`Surface::fill_rect`] and [`Surface::blit_alpha`] can
//! only run once it has been released.

/// An RGBA color with 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    /// Create a color with an explicit alpha.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    /// Same color with a different alpha.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Pack into `0xAARRGGBB`.
    #[inline]
    pub const fn to_argb(self) -> u32 {
        (self.a as u32) << 24 | (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }

    /// Unpack from `0xAARRGGBB`.
    #[inline]
    pub const fn from_argb(p: u32) -> Self {
        Self {
            a: (p >> 24) as u8,
            r: (p >> 16) as u8,
            g: (p >> 8) as u8,
            b: p as u8,
        }
    }
}

/// Blend one channel: `d + (((s - d) * a) >> 8)` with an arithmetic shift.
///
/// Rounding is toward negative infinity, so blending black at alpha 1 over
/// any non-zero channel always lowers it by one. Alpha 255 is opaque and
/// yields `s` unchanged.
#[inline]
fn blend_channel(d: u8, s: u8, a: u8) -> u8 {
    if a == u8::MAX {
        return s;
    }
    let d = d as i32;
    (d + (((s as i32 - d) * a as i32) >> 8)) as u8
}

/// Blend `src` over `dst` using `alpha`. The result is opaque.
#[inline]
pub fn blend(dst: u32, src: Color, alpha: u8) -> u32 {
    let d = Color::from_argb(dst);
    Color::rgb(
        blend_channel(d.r, src.r, alpha),
        blend_channel(d.g, src.g, alpha),
        blend_channel(d.b, src.b, alpha),
    )
    .to_argb()
}

/// Axis-aligned rectangle in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: u32,
    pub h: u32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    /// Intersect with a `width x height` surface. Returns `(x0, y0, x1, y1)`
    /// as exclusive index bounds, or `None` if nothing is left.
    fn clip(&self, width: u32, height: u32) -> Option<(usize, usize, usize, usize)> {
        let x0 = (self.x as i64).max(0);
        let y0 = (self.y as i64).max(0);
        let x1 = (self.x as i64 + self.w as i64).min(width as i64);
        let y1 = (self.y as i64 + self.h as i64).min(height as i64);
        if x0 >= x1 || y0 >= y1 {
            return None;
        }
        Some((x0 as usize, y0 as usize, x1 as usize, y1 as usize))
    }
}

/// A fixed-size 32-bit pixel buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Surface {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

impl Surface {
    /// Create a surface filled with opaque black.
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, Color::BLACK)
    }

    /// Create a surface filled with `color`.
    pub fn filled(width: u32, height: u32, color: Color) -> Self {
        Self {
            width,
            height,
            pixels: vec![color.to_argb(); width as usize * height as usize],
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Read-only view of the packed pixels, row-major.
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// The pixels as raw bytes, ready for texture upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Pixel at `(x, y)`, or `None` outside the surface.
    pub fn get(&self, x: i32, y: i32) -> Option<Color> {
        self.index(x, y).map(|i| Color::from_argb(self.pixels[i]))
    }

    /// Take exclusive access to the pixels for direct writes.
    pub fn lock(&mut self) -> SurfaceLock<'_> {
        SurfaceLock { surface: self }
    }

    /// Overwrite every pixel in `rect` (clipped) with `color`.
    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        let Some((x0, y0, x1, y1)) = rect.clip(self.width, self.height) else {
            return;
        };
        let value = color.to_argb();
        let stride = self.width as usize;
        for row in self.pixels[y0 * stride..y1 * stride].chunks_exact_mut(stride) {
            row[x0..x1].fill(value);
        }
    }

    /// Composite `src` over this surface at the origin with a single
    /// surface-wide `alpha`, ignoring the per-pixel alpha of `src`.
    pub fn blit_alpha(&mut self, src: &Surface, alpha: u8) {
        let w = self.width.min(src.width) as usize;
        let h = self.height.min(src.height) as usize;
        let (ds, ss) = (self.width as usize, src.width as usize);

        for y in 0..h {
            let dst_row = &mut self.pixels[y * ds..y * ds + w];
            let src_row = &src.pixels[y * ss..y * ss + w];
            for (d, &s) in dst_row.iter_mut().zip(src_row) {
                *d = blend(*d, Color::from_argb(s), alpha);
            }
        }
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }
}

/// Exclusive pixel access to a [`Surface`], released on drop.
///
/// Every accessor is bounds-checked: reads outside the surface return `None`
/// and writes outside it are ignored.
pub struct SurfaceLock<'a> {
    surface: &'a mut Surface,
}

impl SurfaceLock<'_> {
    #[inline]
    pub fn width(&self) -> u32 {
        self.surface.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.surface.height
    }

    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Option<Color> {
        self.surface.get(x, y)
    }

    /// Write an opaque pixel.
    #[inline]
    pub fn set(&mut self, x: i32, y: i32, color: Color) {
        if let Some(i) = self.surface.index(x, y) {
            self.surface.pixels[i] = color.with_alpha(255).to_argb();
        }
    }

    /// Blend `color` into the pixel using `color.a`.
    #[inline]
    pub fn blend(&mut self, x: i32, y: i32, color: Color) {
        if let Some(i) = self.surface.index(x, y) {
            let p = &mut self.surface.pixels[i];
            *p = blend(*p, color, color.a);
        }
    }

    /// Blend a horizontal span `[x0, x1]` on row `y`, clipped.
    pub fn blend_hline(&mut self, x0: i32, x1: i32, y: i32, color: Color) {
        if y < 0 || y as u32 >= self.surface.height {
            return;
        }
        let lo = x0.max(0);
        let hi = x1.min(self.surface.width as i32 - 1);
        for x in lo..=hi {
            self.blend(x, y, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argb_roundtrip_layout() {
        let c = Color::rgba(0x12, 0x34, 0x56, 0x78);
        assert_eq!(c.to_argb(), 0x7812_3456);
        assert_eq!(Color::from_argb(0x7812_3456), c);
    }

    #[test]
    fn test_bytes_are_bgra() {
        let s = Surface::filled(1, 1, Color::rgb(10, 20, 30));
        assert_eq!(s.as_bytes(), &[30, 20, 10, 255]);
    }

    #[test]
    fn test_blend_rounds_down() {
        // Black at alpha 1 lowers each non-zero channel by exactly one
        let out = Color::from_argb(blend(Color::rgb(255, 1, 0).to_argb(), Color::BLACK, 1));
        assert_eq!(out, Color::rgb(254, 0, 0));

        // Red at alpha 24 over black: 255 * 24 >> 8 = 23
        let out = Color::from_argb(blend(0xFF00_0000, Color::rgb(255, 0, 0), 24));
        assert_eq!(out, Color::rgb(23, 0, 0));

        // Alpha 255 replaces the destination outright
        let out = Color::from_argb(blend(Color::BLACK.to_argb(), Color::WHITE, 255));
        assert_eq!(out, Color::WHITE);
        let dst = Color::rgb(10, 200, 30).to_argb();
        let out = Color::from_argb(blend(dst, Color::rgb(1, 2, 3), 255));
        assert_eq!(out, Color::rgb(1, 2, 3));
    }

    #[test]
    fn test_lock_bounds_checked() {
        let mut s = Surface::new(4, 3);
        let before = s.clone();
        {
            let mut lock = s.lock();
            lock.set(-1, 0, Color::WHITE);
            lock.set(4, 0, Color::WHITE);
            lock.set(0, 3, Color::WHITE);
            lock.blend(i32::MAX, i32::MIN, Color::WHITE);
            assert_eq!(lock.get(10, 10), None);
        }
        assert_eq!(s, before);

        s.lock().set(3, 2, Color::WHITE);
        assert_eq!(s.get(3, 2), Some(Color::WHITE));
    }

    #[test]
    fn test_fill_rect_clips() {
        let mut s = Surface::new(4, 4);
        s.fill_rect(Rect::new(2, -5, 10, 7), Color::WHITE);
        for y in 0..4 {
            for x in 0..4 {
                let expected = if x >= 2 && y < 2 { Color::WHITE } else { Color::BLACK };
                assert_eq!(s.get(x, y), Some(expected), "pixel ({x}, {y})");
            }
        }

        let snapshot = s.clone();
        s.fill_rect(Rect::new(100, 100, 5, 5), Color::WHITE);
        assert_eq!(s, snapshot);
    }

    #[test]
    fn test_blit_alpha_uses_surface_alpha() {
        let mut dst = Surface::filled(2, 2, Color::rgb(200, 100, 0));
        let src = Surface::filled(2, 2, Color::BLACK.with_alpha(0));
        dst.blit_alpha(&src, 128);
        assert_eq!(dst.get(1, 1), Some(Color::rgb(100, 50, 0)));
    }
}
