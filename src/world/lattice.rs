use crate::config::WorldConfig;
use crate::world::grid_index::GridIndex;
use glam::Vec3;

/// The placement lattice: world size plus the two physical spacings.
///
/// Horizontal axes step by one stud spacing, the vertical axis by one
/// brick height. Every world-to-index conversion in the crate goes
/// through this type so the axis-correct spacing is applied in exactly
/// one place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lattice {
    world_size: i32,
    stud_spacing: f32,
    brick_height: f32,
    flat_height: f32,
}

impl Lattice {
    pub fn new(world_size: u32, stud_spacing: f32, brick_height: f32, flat_height: f32) -> Self {
        Self {
            world_size: world_size as i32,
            stud_spacing,
            brick_height,
            flat_height,
        }
    }

    pub fn from_config(config: &WorldConfig) -> Self {
        Self::new(
            config.world_size,
            config.stud_spacing,
            config.brick_height,
            config.flat_height,
        )
    }

    pub fn world_size(&self) -> i32 {
        self.world_size
    }

    pub fn stud_spacing(&self) -> f32 {
        self.stud_spacing
    }

    pub fn brick_height(&self) -> f32 {
        self.brick_height
    }

    pub fn flat_height(&self) -> f32 {
        self.flat_height
    }

    /// Nearest cell for a world position.
    pub fn index_of(&self, position: Vec3) -> GridIndex {
        GridIndex::new(
            self.horizontal_index(position.x),
            self.vertical_index(position.y),
            self.horizontal_index(position.z),
        )
    }

    /// Exact world position of a cell. No rounding is involved, so this
    /// is a right inverse of [`index_of`](Self::index_of).
    pub fn position_of(&self, index: GridIndex) -> Vec3 {
        Vec3::new(
            index.x() as f32 * self.stud_spacing,
            index.y() as f32 * self.brick_height,
            index.z() as f32 * self.stud_spacing,
        )
    }

    pub fn horizontal_index(&self, v: f32) -> i32 {
        (v / self.stud_spacing).round() as i32
    }

    pub fn vertical_index(&self, y: f32) -> i32 {
        (y / self.brick_height).round() as i32
    }

    /// Smallest cursor position on a horizontal axis: one stud in from
    /// the world edge.
    pub fn min_horizontal(&self) -> f32 {
        self.stud_spacing
    }

    /// Largest cursor position on a horizontal axis.
    pub fn max_horizontal(&self) -> f32 {
        self.world_size as f32 * self.stud_spacing - self.stud_spacing
    }

    /// Top of the vertical travel range. The cell index at this height
    /// equals the world size, which the place operation refuses.
    pub fn max_height(&self) -> f32 {
        self.world_size as f32 * self.brick_height
    }

    pub fn in_horizontal_bounds(&self, v: f32) -> bool {
        v >= self.min_horizontal() && v <= self.max_horizontal()
    }

    /// Clamps a free position into the cursor's travel volume.
    pub fn clamp(&self, position: Vec3) -> Vec3 {
        Vec3::new(
            position.x.clamp(self.min_horizontal(), self.max_horizontal()),
            position.y.clamp(0.0, self.max_height()),
            position.z.clamp(self.min_horizontal(), self.max_horizontal()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_lattice() -> Lattice {
        Lattice::new(24, 0.5, 0.6, 0.2)
    }

    #[test]
    fn test_index_round_trip_over_the_whole_world() {
        let lattice = test_lattice();
        for x in 0..24 {
            for y in 0..24 {
                for z in 0..24 {
                    let index = GridIndex::new(x, y, z);
                    assert_eq!(lattice.index_of(lattice.position_of(index)), index);
                }
            }
        }
    }

    #[test]
    fn test_axes_use_their_own_spacing() {
        let lattice = test_lattice();
        // 1.2 world units is two brick heights but would be two full
        // studs plus change horizontally.
        let index = lattice.index_of(Vec3::new(1.2, 1.2, 0.0));
        assert_eq!(index.x(), 2);
        assert_eq!(index.y(), 2);

        let position = lattice.position_of(GridIndex::new(3, 3, 3));
        assert_eq!(position.x, 1.5);
        assert_eq!(position.z, 1.5);
        assert!((position.y - 1.8).abs() < 1e-6);
    }

    #[test]
    fn test_clamp_keeps_one_stud_margin() {
        let lattice = test_lattice();
        let clamped = lattice.clamp(Vec3::new(-4.0, -1.0, 99.0));
        assert_eq!(clamped, Vec3::new(0.5, 0.0, 11.5));

        assert!(lattice.in_horizontal_bounds(0.5));
        assert!(lattice.in_horizontal_bounds(11.5));
        assert!(!lattice.in_horizontal_bounds(0.49));
        assert!(!lattice.in_horizontal_bounds(11.51));
    }

    #[test]
    fn test_ceiling_height_maps_to_world_size_index() {
        let lattice = test_lattice();
        let top = lattice.clamp(Vec3::new(6.0, 1000.0, 6.0));
        assert_eq!(lattice.vertical_index(top.y), lattice.world_size());
    }
}
