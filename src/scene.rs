//! Host-side state: the two vectors, their readout, and when to redraw.
use core::f64::consts::PI;

use crate::controls::{Preset, Readout, ANGLE_RANGE_DEGREES, LENGTH_RANGE};
use crate::render::PlaneRenderer;
use crate::surface::Surface;
use crate::vector::Vector2D;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handle {
    U,
    V,
}

/// Every change replaces a vector with a new value, recomputes the readout
/// and flags the plane for redrawing.
#[derive(Debug, Clone)]
pub struct Scene {
    u: Vector2D,
    v: Vector2D,
    readout: Readout,
    dirty: bool,
}

impl Default for Scene {
    fn default() -> Self {
        Scene::new(Vector2D::new(5., PI / 6.), Vector2D::new(4., PI / 3.))
    }
}

impl Scene {
    pub fn new(u: Vector2D, v: Vector2D) -> Self {
        Scene {
            u,
            v,
            readout: Readout::new(u, v),
            dirty: true,
        }
    }
    pub fn u(&self) -> Vector2D {
        self.u
    }
    pub fn v(&self) -> Vector2D {
        self.v
    }
    pub fn vector(&self, handle: Handle) -> Vector2D {
        match handle {
            Handle::U => self.u,
            Handle::V => self.v,
        }
    }
    pub fn readout(&self) -> Readout {
        self.readout
    }
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Replaces a vector as is, bypassing slider ranges.
    pub fn set_vector(&mut self, handle: Handle, vector: Vector2D) {
        match handle {
            Handle::U => self.u = vector,
            Handle::V => self.v = vector,
        }
        self.changed();
    }
    pub fn set_length(&mut self, handle: Handle, length: f64) {
        let vector = self.vector(handle).with_length(LENGTH_RANGE.clamp(length));
        self.set_vector(handle, vector);
    }
    pub fn set_angle_degrees(&mut self, handle: Handle, degrees: f64) {
        let angle = ANGLE_RANGE_DEGREES.clamp(degrees).to_radians();
        let vector = self.vector(handle).with_angle(angle);
        self.set_vector(handle, vector);
    }
    pub fn apply_preset(&mut self, preset: Preset) {
        log::debug!("Applying preset: {:?}", preset);
        let (u, v) = preset.apply(self.u, self.v);
        self.u = u;
        self.v = v;
        self.changed();
    }

    /// Redraws the plane from scratch and clears the redraw flag.
    pub fn render<S: Surface>(&mut self, renderer: &PlaneRenderer, surface: &mut S) {
        renderer.render(surface, self.u, self.v);
        self.dirty = false;
    }

    fn changed(&mut self) {
        self.readout = Readout::new(self.u, self.v);
        self.dirty = true;
        log::debug!("Scene is now u: {:?}, v: {:?}, {:?}", self.u, self.v, self.readout);
    }
}
