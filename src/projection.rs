//! Affine projection of an attractor's position onto the pixel grid.

use glam::{DVec2, IVec2};

use crate::lorenz::Lorenz;

/// Phase-space coordinate selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    #[inline]
    fn of(self, l: &Lorenz) -> f64 {
        match self {
            Axis::X => l.x,
            Axis::Y => l.y,
            Axis::Z => l.z,
        }
    }
}

/// Maps two of `{x, y, z}` to screen pixels: `screen = coord * scale + offset`.
///
/// No bounds are applied. Results outside the surface are expected while an
/// attractor swings wide; the surface clips them when drawing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub horizontal: Axis,
    pub vertical: Axis,
    pub scale: DVec2,
    pub offset: DVec2,
}

impl Projection {
    pub fn new(horizontal: Axis, vertical: Axis, scale: DVec2, offset: DVec2) -> Self {
        Self {
            horizontal,
            vertical,
            scale,
            offset,
        }
    }

    /// Project to integer pixel coordinates.
    ///
    /// Fractions truncate toward zero. Values beyond the `i32` range saturate
    /// and NaN maps to `i32::MIN`, so a diverged attractor always lands off
    /// the surface.
    pub fn project(&self, l: &Lorenz) -> IVec2 {
        let p = DVec2::new(self.horizontal.of(l), self.vertical.of(l)) * self.scale + self.offset;
        IVec2::new(to_pixel(p.x), to_pixel(p.y))
    }
}

#[inline]
fn to_pixel(v: f64) -> i32 {
    if v.is_nan() {
        i32::MIN
    } else {
        v as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn xz() -> Projection {
        Projection::new(Axis::X, Axis::Z, DVec2::new(6.0, 4.0), DVec2::new(160.0, 15.0))
    }

    #[test]
    fn test_project_selects_axes() {
        let l = Lorenz::new(28.0, 10.0, 2.0).with_position(1.0, 100.0, 2.0);
        assert_eq!(xz().project(&l), IVec2::new(166, 23));

        let yz = Projection::new(Axis::Y, Axis::Z, DVec2::new(6.0, 4.0), DVec2::new(160.0, 15.0));
        assert_eq!(yz.project(&l), IVec2::new(760, 23));
    }

    #[test]
    fn test_project_truncates_toward_zero() {
        let l = Lorenz::new(28.0, 10.0, 2.0).with_position(-26.9, 0.0, -3.9);
        // -26.9 * 6 + 160 = -1.4 -> -1, -3.9 * 4 + 15 = -0.6 -> 0
        assert_eq!(xz().project(&l), IVec2::new(-1, 0));
    }

    #[test]
    fn test_project_saturates_on_divergence() {
        let far = Lorenz::new(28.0, 10.0, 2.0).with_position(1e300, f64::NAN, f64::NEG_INFINITY);
        let p = xz().project(&far);
        assert_eq!(p.x, i32::MAX);
        assert_eq!(p.y, i32::MIN);

        let nan = Lorenz::new(28.0, 10.0, 2.0).with_position(f64::NAN, 0.0, 0.0);
        assert_eq!(xz().project(&nan), IVec2::new(i32::MIN, 15));
    }
}
