use glam::IVec3;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt::{self, Display, Formatter};

/// A cell address on the placement lattice.
///
/// Components are signed so that neighbor probes and the below-ground
/// check can be expressed directly; whether an index actually names a
/// cell inside the world is a separate bounds question answered by
/// [`BrickTerrain`](crate::world::BrickTerrain).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridIndex(pub IVec3);

impl Serialize for GridIndex {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        (self.0.x, self.0.y, self.0.z).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for GridIndex {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let (x, y, z) = <(i32, i32, i32)>::deserialize(deserializer)?;
        Ok(GridIndex(IVec3::new(x, y, z)))
    }
}

impl PartialOrd for GridIndex {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for GridIndex {
    // x, then z, then y: the order occupied cells are walked when the
    // terrain is serialized.
    fn cmp(&self, other: &Self) -> Ordering {
        match self.0.x.cmp(&other.0.x) {
            Ordering::Equal => match self.0.z.cmp(&other.0.z) {
                Ordering::Equal => self.0.y.cmp(&other.0.y),
                ord => ord,
            },
            ord => ord,
        }
    }
}

impl GridIndex {
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self(IVec3::new(x, y, z))
    }

    pub fn x(&self) -> i32 {
        self.0.x
    }

    pub fn y(&self) -> i32 {
        self.0.y
    }

    pub fn z(&self) -> i32 {
        self.0.z
    }

    /// The same cell one brick higher.
    pub fn above(&self) -> Self {
        Self(self.0 + IVec3::Y)
    }

    /// The same cell one brick lower.
    pub fn below(&self) -> Self {
        Self(self.0 - IVec3::Y)
    }
}

impl Display for GridIndex {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.0.x, self.0.y, self.0.z)
    }
}

impl From<IVec3> for GridIndex {
    fn from(vec: IVec3) -> Self {
        Self(vec)
    }
}

impl From<GridIndex> for IVec3 {
    fn from(index: GridIndex) -> Self {
        index.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering_walks_x_then_z_then_y() {
        let mut indices = vec![
            GridIndex::new(1, 0, 0),
            GridIndex::new(0, 5, 2),
            GridIndex::new(0, 0, 0),
            GridIndex::new(0, 2, 2),
        ];
        indices.sort();
        assert_eq!(
            indices,
            vec![
                GridIndex::new(0, 0, 0),
                GridIndex::new(0, 2, 2),
                GridIndex::new(0, 5, 2),
                GridIndex::new(1, 0, 0),
            ]
        );
    }

    #[test]
    fn test_vertical_neighbors() {
        let index = GridIndex::new(3, 1, 7);
        assert_eq!(index.above(), GridIndex::new(3, 2, 7));
        assert_eq!(index.below(), GridIndex::new(3, 0, 7));
        assert_eq!(index.below().below().y(), -1);
    }
}
