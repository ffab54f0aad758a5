pub mod cue;

pub use cue::{Cue, CueSink, LogCues, NullCues};
