pub mod brick;
pub mod codec;
pub mod grid_index;
pub mod history;
pub mod lattice;
pub mod terrain;

// Re-export commonly used types
pub use brick::{BrickFlags, BrickRecord, ColorId, DEFAULT_COLOR, PALETTE};
pub use codec::{decode_into, encode, CodecError, DecodeReport, ALPHABET};
pub use grid_index::GridIndex;
pub use history::PlacementHistory;
pub use lattice::Lattice;
pub use terrain::BrickTerrain;
