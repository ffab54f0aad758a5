use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// The classic 13-color brick palette, as 0xRRGGBB values.
pub const PALETTE: [u32; 13] = [
    0xFFFFFF, // white
    0x151515, // black
    0xA0A19F, // gray
    0x9675B4, // lavender
    0x006CB7, // blue
    0x00A3DA, // azure
    0x009247, // green
    0x00A8AF, // teal
    0xF7D112, // yellow
    0xF57D20, // orange
    0xA65322, // brown
    0xE51E26, // red
    0xE95DA2, // pink
];

/// The palette entry a fresh cursor starts on (orange).
pub const DEFAULT_COLOR: ColorId = ColorId(9);

/// Index into [`PALETTE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorId(u8);

impl ColorId {
    pub const COUNT: usize = PALETTE.len();

    /// `None` when the index has no palette entry.
    pub fn new(index: usize) -> Option<Self> {
        if index < Self::COUNT {
            Some(Self(index as u8))
        } else {
            None
        }
    }

    pub fn index(&self) -> usize {
        self.0 as usize
    }

    pub fn hex(&self) -> u32 {
        PALETTE[self.0 as usize]
    }

    /// Next palette entry, wrapping past the end.
    pub fn cycled(&self) -> Self {
        Self((self.0 + 1) % Self::COUNT as u8)
    }
}

impl Default for ColorId {
    fn default() -> Self {
        DEFAULT_COLOR
    }
}

impl Display for ColorId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06X}", self.hex())
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct BrickFlags: u8 {
        const NONE = 0;
        // Flat base-plate shape, a third of a standard brick's height.
        const FLAT = 1 << 0;
    }
}

impl Default for BrickFlags {
    fn default() -> Self {
        Self::NONE
    }
}

/// One placed brick. Owned by the terrain; created on place or load,
/// destroyed on undo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrickRecord {
    pub color: ColorId,
    pub flags: BrickFlags,
}

impl BrickRecord {
    pub fn new(color: ColorId) -> Self {
        Self {
            color,
            flags: BrickFlags::NONE,
        }
    }

    pub fn flat(color: ColorId) -> Self {
        Self {
            color,
            flags: BrickFlags::FLAT,
        }
    }

    pub fn is_flat(&self) -> bool {
        self.flags.contains(BrickFlags::FLAT)
    }
}
