/// Named sound cues the session fires as it mutates state. Playback is
/// someone else's problem; these are fire-and-forget notifications and
/// nothing waits on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    Move,
    Place,
    Undo,
    SwitchColor,
}

impl Cue {
    pub fn name(&self) -> &'static str {
        match self {
            Cue::Move => "move",
            Cue::Place => "place",
            Cue::Undo => "undo",
            Cue::SwitchColor => "switch",
        }
    }
}

pub trait CueSink {
    fn play(&self, cue: Cue);
}

/// Default sink: traces cues to the log instead of a speaker.
#[derive(Debug, Default)]
pub struct LogCues;

impl CueSink for LogCues {
    fn play(&self, cue: Cue) {
        log::debug!("cue: {}", cue.name());
    }
}

/// Discards cues entirely.
#[derive(Debug, Default)]
pub struct NullCues;

impl CueSink for NullCues {
    fn play(&self, _cue: Cue) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingCues {
        played: RefCell<Vec<Cue>>,
    }

    impl CueSink for RecordingCues {
        fn play(&self, cue: Cue) {
            self.played.borrow_mut().push(cue);
        }
    }

    #[test]
    fn test_cue_names() {
        assert_eq!(Cue::Move.name(), "move");
        assert_eq!(Cue::SwitchColor.name(), "switch");
    }

    #[test]
    fn test_sinks_receive_cues() {
        let sink = RecordingCues::default();
        sink.play(Cue::Place);
        sink.play(Cue::Undo);
        assert_eq!(*sink.played.borrow(), vec![Cue::Place, Cue::Undo]);
    }
}
