//! Lorenz attractor state and its explicit-Euler integrator.
//!
//! ```ignore
//! use lorenz_trails::Lorenz;
//!
//! let mut l = Lorenz::new(28.0, 10.0, 8.0 / 3.0).with_position(10.0, 25.0, 53.0);
//! l.step(0.001);
//! ```

use glam::DVec3;

/// One chaotic system instance.
///
/// The parameters are fixed after construction. The position is only ever
/// changed by [`Lorenz::step`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lorenz {
    rho: f64,
    /// Carried with the parameters but not read by [`Lorenz::step`]: the
    /// x-equation is driven by `rho`.
    sigma: f64,
    beta: f64,
    pub(crate) x: f64,
    pub(crate) y: f64,
    pub(crate) z: f64,
}

impl Lorenz {
    /// Create an attractor at the origin.
    pub fn new(rho: f64, sigma: f64, beta: f64) -> Self {
        Self {
            rho,
            sigma,
            beta,
            x: 0.0,
            y: 0.0,
            z: 0.0,
        }
    }

    /// Set the initial position.
    pub fn with_position(mut self, x: f64, y: f64, z: f64) -> Self {
        self.x = x;
        self.y = y;
        self.z = z;
        self
    }

    /// Advance by one sub-step of `dt` seconds.
    ///
    /// All three derivatives are taken from the state before the update, so
    /// the result does not depend on the order the coordinates are written.
    /// Large `dt` values diverge; that is a property of the scheme and is not
    /// corrected here.
    #[inline]
    pub fn step(&mut self, dt: f64) {
        let (x, y, z) = (self.x, self.y, self.z);

        let dx = self.rho * (y - x);
        let dy = x * (self.rho - z) - y;
        let dz = x * y - self.beta * z;

        self.x = x + dx * dt;
        self.y = y + dy * dt;
        self.z = z + dz * dt;
    }

    /// Current position in phase space.
    #[inline]
    pub fn position(&self) -> DVec3 {
        DVec3::new(self.x, self.y, self.z)
    }

    #[inline]
    pub fn rho(&self) -> f64 {
        self.rho
    }

    #[inline]
    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    #[inline]
    pub fn beta(&self) -> f64 {
        self.beta
    }
}
