use crate::world::{ColorId, GridIndex, Lattice};
use glam::Vec3;

/// The translucent brick that follows player input. There is exactly
/// one per session and it is never stored in the terrain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorBrick {
    pub position: Vec3,
    pub color: ColorId,
}

impl CursorBrick {
    /// A fresh cursor sits at the far clamp corner, on the ground, in
    /// the default color.
    pub fn new(lattice: &Lattice) -> Self {
        Self {
            position: Vec3::new(lattice.max_horizontal(), 0.0, lattice.max_horizontal()),
            color: ColorId::default(),
        }
    }

    /// Moves by a world-space delta, clamped to the travel volume.
    pub fn translate(&mut self, delta: Vec3, lattice: &Lattice) {
        self.position = lattice.clamp(self.position + delta);
    }

    /// Jumps the x axis to an absolute position (hardware control),
    /// clamped like any other motion.
    pub fn set_x(&mut self, x: f32, lattice: &Lattice) {
        self.position = lattice.clamp(Vec3::new(x, self.position.y, self.position.z));
    }

    pub fn grid_index(&self, lattice: &Lattice) -> GridIndex {
        lattice.index_of(self.position)
    }
}
