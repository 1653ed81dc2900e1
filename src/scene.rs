//! The set of attractors simulated and drawn every frame.

use glam::{DVec2, IVec2};

use crate::config::{ALPHA, BRIGHTNESS, SCREEN_WIDTH};
use crate::lorenz::Lorenz;
use crate::projection::{Axis, Projection};
use crate::surface::Color;

/// One attractor with its screen mapping and draw color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneEntry {
    pub lorenz: Lorenz,
    pub projection: Projection,
    pub color: Color,
}

impl SceneEntry {
    pub fn new(lorenz: Lorenz, projection: Projection, color: Color) -> Self {
        Self {
            lorenz,
            projection,
            color,
        }
    }

    /// Where the attractor currently lands on screen.
    #[inline]
    pub fn screen_position(&self) -> IVec2 {
        self.projection.project(&self.lorenz)
    }
}

/// Fixed collection of scene entries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    entries: Vec<SceneEntry>,
}

impl Scene {
    /// An empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry.
    pub fn with_entry(mut self, entry: SceneEntry) -> Self {
        self.entries.push(entry);
        self
    }

    /// The six-attractor scene the binary runs.
    pub fn reference() -> Self {
        let half_w = (SCREEN_WIDTH / 2) as f64;
        let scale = DVec2::new(6.0, 4.0);
        // Top band plots against z, the lower band against y
        let top = DVec2::new(half_w, 15.0);
        let mid = DVec2::new(half_w, 120.0);
        let b = BRIGHTNESS;

        let entry = |rho: f64,
                     sigma: f64,
                     beta: f64,
                     (x, y, z): (f64, f64, f64),
                     (h, v, offset): (Axis, Axis, DVec2),
                     (r, g, bl): (u8, u8, u8)| {
            SceneEntry::new(
                Lorenz::new(rho, sigma, beta).with_position(x, y, z),
                Projection::new(h, v, scale, offset),
                Color::rgba(r, g, bl, ALPHA),
            )
        };

        // 8.0 / 3.0 is the real quotient; an integer `8/3` would give 2
        let classic_beta = 8.0 / 3.0;

        Self::new()
            .with_entry(entry(
                28.0,
                10.0,
                classic_beta,
                (10.0, 25.0, 53.0),
                (Axis::X, Axis::Z, top),
                (b, 0, 0),
            ))
            .with_entry(entry(
                34.0,
                9.0,
                2.0,
                (0.5, 1.5, 1.0),
                (Axis::X, Axis::Y, mid),
                (0, b, 0),
            ))
            .with_entry(entry(
                28.0,
                9.0,
                2.0,
                (0.2, 0.7, 0.9),
                (Axis::Y, Axis::Z, top),
                (0, 0, b),
            ))
            .with_entry(entry(
                28.0,
                10.0,
                classic_beta,
                (1.0, 1.0, 1.0),
                (Axis::X, Axis::Z, top),
                (b, b, 0),
            ))
            .with_entry(entry(
                34.0,
                9.0,
                2.0,
                (5.0, 5.0, 5.0),
                (Axis::X, Axis::Y, mid),
                (0, b, b),
            ))
            .with_entry(entry(
                28.0,
                9.0,
                2.0,
                (20.0, 20.0, 20.0),
                (Axis::Y, Axis::Z, top),
                (b, 0, b),
            ))
    }

    /// Advance every attractor by one sub-step.
    pub fn step(&mut self, dt: f64) {
        for e in &mut self.entries {
            e.lorenz.step(dt);
        }
    }

    pub fn entries(&self) -> &[SceneEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_scene_layout() {
        let scene = Scene::reference();
        assert_eq!(scene.len(), 6);

        let first = &scene.entries()[0];
        assert_eq!(first.lorenz.position(), glam::DVec3::new(10.0, 25.0, 53.0));
        assert_eq!(first.lorenz.rho(), 28.0);
        assert_eq!(first.color, Color::rgba(255, 0, 0, 24));
        // 10 * 6 + 160, 53 * 4 + 15
        assert_eq!(first.screen_position(), IVec2::new(220, 227));

        let colors: Vec<_> = scene
            .entries()
            .iter()
            .map(|e| (e.color.r, e.color.g, e.color.b))
            .collect();
        assert_eq!(
            colors,
            vec![
                (255, 0, 0),
                (0, 255, 0),
                (0, 0, 255),
                (255, 255, 0),
                (0, 255, 255),
                (255, 0, 255),
            ]
        );
        assert_eq!(first.lorenz.beta(), 8.0 / 3.0);
        assert_eq!(scene.entries()[1].lorenz.beta(), 2.0);
    }

    #[test]
    fn test_step_advances_every_entry_independently() {
        let mut scene = Scene::reference();
        let mut expected: Vec<Lorenz> = scene.entries().iter().map(|e| e.lorenz).collect();

        scene.step(0.001);
        for l in &mut expected {
            l.step(0.001);
        }

        for (e, l) in scene.entries().iter().zip(&expected) {
            assert_eq!(e.lorenz, *l);
        }
    }
}
