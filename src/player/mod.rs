pub mod cursor;
pub mod input;
pub mod physics;

pub use cursor::CursorBrick;
pub use input::{action_for, Action};
pub use physics::{brick_at, intersects, settle, settle_step, SettleMotion};
