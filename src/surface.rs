use crate::world::{ColorId, GridIndex};
use glam::Vec3;

/// How a visual brick should look. The recognized knobs are exactly
/// these four; there is no open-ended option bag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrickStyle {
    pub color: ColorId,
    pub transparent: bool,
    pub opacity: f32,
    pub flat: bool,
}

impl BrickStyle {
    /// Alpha of the translucent cursor brick.
    pub const CURSOR_OPACITY: f32 = 0.65;

    /// An ordinary placed brick.
    pub fn solid(color: ColorId) -> Self {
        Self {
            color,
            transparent: false,
            opacity: 1.0,
            flat: false,
        }
    }

    /// A flat plate, a third of a standard course tall.
    pub fn flat(color: ColorId) -> Self {
        Self {
            flat: true,
            ..Self::solid(color)
        }
    }

    /// The see-through cursor brick.
    pub fn cursor(color: ColorId) -> Self {
        Self {
            transparent: true,
            opacity: Self::CURSOR_OPACITY,
            ..Self::solid(color)
        }
    }
}

/// The rendering side of the toy, seen from the session: visual bricks
/// are created, removed and re-styled here, and nothing ever flows
/// back. A windowing front end implements this; tests and headless use
/// get [`NullSurface`].
pub trait BrickSurface {
    /// The world-sized plate everything rests on, announced once at
    /// session start. It is a boundary, not a terrain cell.
    fn baseplate_created(&mut self, center: Vec3, world_size: u32, style: BrickStyle);

    /// A brick appeared at a cell, by placement or load.
    fn brick_created(&mut self, index: GridIndex, position: Vec3, style: BrickStyle);

    /// The brick at a cell was removed by undo.
    fn brick_removed(&mut self, index: GridIndex);

    /// The cursor brick moved or changed color.
    fn cursor_moved(&mut self, position: Vec3, style: BrickStyle);
}

#[derive(Debug, Default)]
pub struct NullSurface;

impl BrickSurface for NullSurface {
    fn baseplate_created(&mut self, _center: Vec3, _world_size: u32, _style: BrickStyle) {}
    fn brick_created(&mut self, _index: GridIndex, _position: Vec3, _style: BrickStyle) {}
    fn brick_removed(&mut self, _index: GridIndex) {}
    fn cursor_moved(&mut self, _position: Vec3, _style: BrickStyle) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_styles_set_the_expected_knobs() {
        let color = ColorId::default();

        let solid = BrickStyle::solid(color);
        assert!(!solid.transparent);
        assert!(!solid.flat);
        assert_eq!(solid.opacity, 1.0);

        assert!(BrickStyle::flat(color).flat);

        let cursor = BrickStyle::cursor(color);
        assert!(cursor.transparent);
        assert_eq!(cursor.opacity, BrickStyle::CURSOR_OPACITY);
    }
}
