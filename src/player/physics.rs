use crate::player::cursor::CursorBrick;
use crate::world::{BrickTerrain, Lattice};
use glam::Vec3;

/// What one settle step did to the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettleMotion {
    /// Raised one brick height out of a collision.
    Raised,
    /// Dropped one brick height toward a supporting surface.
    Lowered,
    /// Already resting; nothing moved.
    Resting,
}

/// Whether a world position sits on a brick.
///
/// The check order matters: positions outside the horizontal play area
/// never report a brick, anything below the baseplate always does (the
/// ground is implicit, not stored), and only then is the cell itself
/// consulted.
pub fn brick_at(terrain: &BrickTerrain, lattice: &Lattice, position: Vec3) -> bool {
    if !lattice.in_horizontal_bounds(position.x) || !lattice.in_horizontal_bounds(position.z) {
        return false;
    }

    if lattice.vertical_index(position.y) < 0 {
        return true;
    }

    terrain.is_occupied(lattice.index_of(position))
}

/// The 3x3-neighborhood collision test: true if any of the nine cells
/// at the cursor's height (its own cell and the eight surrounding
/// studs) holds a brick. This is a neighborhood heuristic, not an
/// exact footprint overlap test: the two-stud cursor spills into the
/// bordering cells, so brushing against a brick counts as a collision.
pub fn intersects(terrain: &BrickTerrain, lattice: &Lattice, position: Vec3) -> bool {
    let spacing = lattice.stud_spacing();
    for dx in [-spacing, 0.0, spacing] {
        for dz in [-spacing, 0.0, spacing] {
            if brick_at(terrain, lattice, position + Vec3::new(dx, 0.0, dz)) {
                return true;
            }
        }
    }
    false
}

/// One gravity correction: rise one brick height out of a collision, or
/// drop one brick height when nothing is underneath. Applied once per
/// input event; the result is a fixed point, so repeated application
/// against a static terrain converges within world-height steps and
/// then keeps answering [`SettleMotion::Resting`].
pub fn settle_step(
    terrain: &BrickTerrain,
    lattice: &Lattice,
    cursor: &mut CursorBrick,
) -> SettleMotion {
    if intersects(terrain, lattice, cursor.position) {
        cursor.translate(Vec3::new(0.0, lattice.brick_height(), 0.0), lattice);
        return SettleMotion::Raised;
    }

    let beneath = cursor.position - Vec3::new(0.0, lattice.brick_height(), 0.0);
    if !intersects(terrain, lattice, beneath) {
        cursor.translate(Vec3::new(0.0, -lattice.brick_height(), 0.0), lattice);
        return SettleMotion::Lowered;
    }

    SettleMotion::Resting
}

/// Runs settle steps to the fixed point, bounded by the world height.
/// Returns how many corrections were applied.
pub fn settle(terrain: &BrickTerrain, lattice: &Lattice, cursor: &mut CursorBrick) -> u32 {
    let mut steps = 0;
    while steps < lattice.world_size() as u32
        && settle_step(terrain, lattice, cursor) != SettleMotion::Resting
    {
        steps += 1;
    }
    steps
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::{BrickRecord, ColorId, GridIndex};

    fn test_lattice() -> Lattice {
        Lattice::new(24, 0.5, 0.6, 0.2)
    }

    fn test_terrain() -> BrickTerrain {
        BrickTerrain::new(24)
    }

    fn brick() -> BrickRecord {
        BrickRecord::new(ColorId::default())
    }

    fn cursor_at(lattice: &Lattice, x: i32, y: i32, z: i32) -> CursorBrick {
        let mut cursor = CursorBrick::new(lattice);
        cursor.position = lattice.position_of(GridIndex::new(x, y, z));
        cursor
    }

    #[test]
    fn test_ground_is_an_implicit_brick() {
        let lattice = test_lattice();
        let terrain = test_terrain();
        assert!(brick_at(
            &terrain,
            &lattice,
            Vec3::new(5.0, -lattice.brick_height(), 5.0)
        ));
        assert!(!brick_at(&terrain, &lattice, Vec3::new(5.0, 0.0, 5.0)));
    }

    #[test]
    fn test_out_of_bounds_is_never_a_brick() {
        let lattice = test_lattice();
        let mut terrain = test_terrain();
        terrain.set(GridIndex::new(0, 0, 5), brick());

        // Below ground but off the edge: the bounds check wins.
        assert!(!brick_at(&terrain, &lattice, Vec3::new(-1.0, -1.0, 2.5)));
        assert!(!brick_at(&terrain, &lattice, Vec3::new(0.0, 0.0, 2.5)));
    }

    #[test]
    fn test_intersects_checks_the_full_neighborhood() {
        let lattice = test_lattice();
        let mut terrain = test_terrain();
        terrain.set(GridIndex::new(11, 0, 10), brick());

        let centered = lattice.position_of(GridIndex::new(11, 0, 10));
        let diagonal = lattice.position_of(GridIndex::new(10, 0, 9));
        let two_away = lattice.position_of(GridIndex::new(11, 0, 8));
        assert!(intersects(&terrain, &lattice, centered));
        assert!(intersects(&terrain, &lattice, diagonal));
        assert!(!intersects(&terrain, &lattice, two_away));

        // Same column, different height: no collision.
        let above = lattice.position_of(GridIndex::new(11, 1, 10));
        assert!(!intersects(&terrain, &lattice, above));
    }

    #[test]
    fn test_settle_raises_off_a_brick() {
        let lattice = test_lattice();
        let mut terrain = test_terrain();
        terrain.set(GridIndex::new(11, 0, 11), brick());

        let mut cursor = cursor_at(&lattice, 11, 0, 11);
        assert_eq!(
            settle_step(&terrain, &lattice, &mut cursor),
            SettleMotion::Raised
        );
        assert_eq!(cursor.grid_index(&lattice), GridIndex::new(11, 1, 11));
        assert_eq!(
            settle_step(&terrain, &lattice, &mut cursor),
            SettleMotion::Resting
        );
    }

    #[test]
    fn test_settle_drops_a_floating_cursor_to_ground() {
        let lattice = test_lattice();
        let terrain = test_terrain();

        let mut cursor = cursor_at(&lattice, 6, 5, 6);
        let steps = settle(&terrain, &lattice, &mut cursor);
        assert_eq!(steps, 5);
        assert_eq!(cursor.grid_index(&lattice), GridIndex::new(6, 0, 6));
    }

    #[test]
    fn test_settle_converges_from_any_height() {
        let lattice = test_lattice();
        let mut terrain = test_terrain();
        for y in 0..3 {
            terrain.set(GridIndex::new(12, y, 12), brick());
        }

        for start in 0..24 {
            let mut cursor = cursor_at(&lattice, 12, start, 12);
            let steps = settle(&terrain, &lattice, &mut cursor);
            assert!(steps <= lattice.world_size() as u32);
            assert_eq!(cursor.grid_index(&lattice), GridIndex::new(12, 3, 12));

            // Idempotent once resting.
            assert_eq!(
                settle_step(&terrain, &lattice, &mut cursor),
                SettleMotion::Resting
            );
        }
    }

    #[test]
    fn test_cursor_rests_on_stack_after_sideways_move() {
        let lattice = test_lattice();
        let mut terrain = test_terrain();
        terrain.set(GridIndex::new(10, 0, 10), brick());

        // Step onto the stack's rim from two cells out, then away again.
        let mut cursor = cursor_at(&lattice, 12, 0, 10);
        cursor.translate(Vec3::new(-lattice.stud_spacing(), 0.0, 0.0), &lattice);
        assert_eq!(
            settle_step(&terrain, &lattice, &mut cursor),
            SettleMotion::Raised
        );
        assert_eq!(cursor.grid_index(&lattice), GridIndex::new(11, 1, 10));

        cursor.translate(Vec3::new(2.0 * lattice.stud_spacing(), 0.0, 0.0), &lattice);
        assert_eq!(
            settle_step(&terrain, &lattice, &mut cursor),
            SettleMotion::Lowered
        );
        assert_eq!(cursor.grid_index(&lattice), GridIndex::new(13, 0, 10));
    }
}
