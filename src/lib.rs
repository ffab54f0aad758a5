pub mod bridge;
pub mod config;
pub mod player;
pub mod session;
pub mod surface;
pub mod utils;
pub mod world;

// Re-export commonly used types
pub use bridge::{BridgeError, ControlFrame, SerialBridge, SerialPort};
pub use config::{BridgeConfig, BuildConfig, ConfigError, WorldConfig};
pub use player::input::{action_for, Action};
pub use player::{CursorBrick, SettleMotion};
pub use session::BuildSession;
pub use surface::{BrickStyle, BrickSurface, NullSurface};
pub use utils::cue::{Cue, CueSink, LogCues, NullCues};
pub use world::{
    BrickFlags, BrickRecord, BrickTerrain, CodecError, ColorId, DecodeReport, GridIndex, Lattice,
    PlacementHistory,
};
