pub mod frame;

pub use frame::{ControlFrame, FRAME_LEN, TERMINATOR};

use crate::config::BridgeConfig;
use crate::player::input::Action;
use crate::world::Lattice;
use crossbeam_channel::Sender;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("serial read failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed control frame {payload:?}")]
    MalformedFrame { payload: String },

    #[error("session queue closed")]
    Disconnected,
}

/// One read attempt against the physical port. Implementations must
/// not block: return whatever bytes are buffered, or `None` when
/// nothing has arrived yet.
pub trait SerialPort {
    fn read(&mut self) -> std::io::Result<Option<Vec<u8>>>;
}

/// Polls a serial controller and turns its frames into session
/// actions: the x potentiometer becomes absolute cursor positioning,
/// the two buttons edge-trigger place and color-cycle.
///
/// The poll is guarded by a `reading` flag so a driver never stacks a
/// second read on top of one in flight. A failed read logs, drops the
/// partial buffer and clears the flag; the next poll simply tries
/// again, which is the whole retry policy.
pub struct SerialBridge<P> {
    port: P,
    actions: Sender<Action>,
    buffer: String,
    reading: bool,
    axis_max: u16,
    min_x: f32,
    max_x: f32,
    last_place: bool,
    last_color: bool,
}

impl<P: SerialPort> SerialBridge<P> {
    pub fn new(port: P, config: &BridgeConfig, lattice: &Lattice, actions: Sender<Action>) -> Self {
        Self {
            port,
            actions,
            buffer: String::new(),
            reading: false,
            axis_max: config.axis_max.max(1),
            min_x: lattice.min_horizontal(),
            max_x: lattice.max_horizontal(),
            last_place: false,
            last_color: false,
        }
    }

    /// One poll cycle: read, accumulate, emit actions for every
    /// complete frame. Returns how many actions were queued.
    pub fn poll(&mut self) -> Result<usize, BridgeError> {
        if self.reading {
            return Ok(0);
        }
        self.reading = true;

        let chunk = match self.port.read() {
            Ok(chunk) => chunk,
            Err(err) => {
                self.buffer.clear();
                self.reading = false;
                log::error!("serial read failed: {err}");
                return Err(err.into());
            }
        };

        let mut queued = 0;
        if let Some(bytes) = chunk {
            self.buffer.push_str(&String::from_utf8_lossy(&bytes));

            while let Some(end) = self.buffer.find(TERMINATOR) {
                let payload: String = self.buffer.drain(..end + TERMINATOR.len()).collect();
                let payload = payload.trim_end_matches(TERMINATOR);
                match ControlFrame::parse(payload) {
                    Ok(frame) => queued += self.dispatch(frame)?,
                    // One garbled frame does not kill the bridge.
                    Err(err) => log::warn!("dropping control frame: {err}"),
                }
            }
        }

        self.reading = false;
        Ok(queued)
    }

    fn dispatch(&mut self, frame: ControlFrame) -> Result<usize, BridgeError> {
        let mut queued = 0;

        let span = self.max_x - self.min_x;
        let x = self.min_x + span * (frame.x_axis.min(self.axis_max) as f32 / self.axis_max as f32);
        self.send(Action::SetCursorX(x))?;
        queued += 1;

        // Buttons act on the rising edge only; a held button is one
        // press, not one per frame.
        if frame.place && !self.last_place {
            self.send(Action::Place)?;
            queued += 1;
        }
        if frame.color && !self.last_color {
            self.send(Action::CycleColor)?;
            queued += 1;
        }
        self.last_place = frame.place;
        self.last_color = frame.color;

        Ok(queued)
    }

    fn send(&self, action: Action) -> Result<(), BridgeError> {
        self.actions.send(action).map_err(|_| BridgeError::Disconnected)
    }
}
