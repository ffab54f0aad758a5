use crate::world::brick::BrickRecord;
use crate::world::grid_index::GridIndex;
use serde::{Deserialize, Serialize};

/// The occupancy grid: one optional [`BrickRecord`] per lattice cell.
///
/// Cells are stored densely, ordered x-major, then z, then y, so the
/// natural walk over the backing vector is also the deterministic order
/// the terrain codec encodes in. The ground plane below y = 0 is a
/// boundary condition handled by the settle resolver, not a row of
/// records here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrickTerrain {
    size: i32,
    cells: Vec<Option<BrickRecord>>,
}

impl BrickTerrain {
    pub fn new(size: u32) -> Self {
        let size = size as i32;
        Self {
            size,
            cells: vec![None; (size * size * size) as usize],
        }
    }

    pub fn size(&self) -> i32 {
        self.size
    }

    pub fn in_bounds(&self, index: GridIndex) -> bool {
        let (x, y, z) = (index.x(), index.y(), index.z());
        x >= 0 && x < self.size && y >= 0 && y < self.size && z >= 0 && z < self.size
    }

    fn offset(&self, index: GridIndex) -> usize {
        ((index.x() * self.size + index.z()) * self.size + index.y()) as usize
    }

    /// The record at a cell. Any out-of-bounds index reads as empty.
    pub fn get(&self, index: GridIndex) -> Option<&BrickRecord> {
        if !self.in_bounds(index) {
            return None;
        }
        self.cells[self.offset(index)].as_ref()
    }

    pub fn is_occupied(&self, index: GridIndex) -> bool {
        self.get(index).is_some()
    }

    /// Overwrites a cell. Used only by place and load; writes outside
    /// the world are dropped.
    pub fn set(&mut self, index: GridIndex, record: BrickRecord) {
        if !self.in_bounds(index) {
            log::warn!("dropping brick write outside the world at {index}");
            return;
        }
        let offset = self.offset(index);
        self.cells[offset] = Some(record);
    }

    /// Empties a cell, returning the record that was there. Used by undo.
    pub fn clear(&mut self, index: GridIndex) -> Option<BrickRecord> {
        if !self.in_bounds(index) {
            return None;
        }
        let offset = self.offset(index);
        self.cells[offset].take()
    }

    /// Occupied cells in x, then z, then y order: the reproducible
    /// order the codec relies on.
    pub fn occupied(&self) -> impl Iterator<Item = (GridIndex, &BrickRecord)> + '_ {
        let size = self.size;
        self.cells.iter().enumerate().filter_map(move |(i, cell)| {
            let record = cell.as_ref()?;
            let i = i as i32;
            let y = i % size;
            let z = (i / size) % size;
            let x = i / (size * size);
            Some((GridIndex::new(x, y, z), record))
        })
    }

    pub fn len(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|c| c.is_none())
    }
}
