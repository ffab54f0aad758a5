use crate::config::WorldConfig;
use crate::player::input::Action;
use crate::player::{physics, CursorBrick};
use crate::surface::{BrickStyle, BrickSurface, NullSurface};
use crate::utils::cue::{Cue, CueSink, NullCues};
use crate::world::{codec, BrickRecord, BrickTerrain, ColorId, DecodeReport, Lattice, PlacementHistory};
use crossbeam_channel::{unbounded, Receiver, Sender};
use glam::Vec3;

/// One building session: the terrain, the placement log, the cursor,
/// and the single queue every input source feeds.
///
/// All mutation flows through [`apply`](Self::apply), one action at a
/// time, so the exactly-one-record-per-cell and LIFO-undo invariants
/// hold without any locking. Producers clone the [`handle`](Self::handle)
/// sender; the event-loop driver calls [`pump`](Self::pump) once per
/// tick.
pub struct BuildSession {
    lattice: Lattice,
    terrain: BrickTerrain,
    history: PlacementHistory,
    cursor: CursorBrick,
    actions: Receiver<Action>,
    handle: Sender<Action>,
    surface: Box<dyn BrickSurface>,
    cues: Box<dyn CueSink>,
}

impl BuildSession {
    pub fn new(
        config: &WorldConfig,
        mut surface: Box<dyn BrickSurface>,
        cues: Box<dyn CueSink>,
    ) -> Self {
        let lattice = Lattice::from_config(config);
        let cursor = CursorBrick::new(&lattice);
        let (handle, actions) = unbounded();

        // The baseplate is a boundary condition, not terrain: announce
        // it to the surface once and never store it.
        let center = Vec3::new(
            config.world_size as f32 * config.stud_spacing / 2.0,
            -config.flat_height,
            config.world_size as f32 * config.stud_spacing / 2.0,
        );
        let baseplate_color = ColorId::new(0).unwrap();
        surface.baseplate_created(center, config.world_size, BrickStyle::flat(baseplate_color));
        surface.cursor_moved(cursor.position, BrickStyle::cursor(cursor.color));

        Self {
            lattice,
            terrain: BrickTerrain::new(config.world_size),
            history: PlacementHistory::new(),
            cursor,
            actions,
            handle,
            surface,
            cues,
        }
    }

    /// A session with no surface and no speaker, for tests and tools.
    pub fn headless(config: &WorldConfig) -> Self {
        Self::new(config, Box::new(NullSurface), Box::new(NullCues))
    }

    /// Builds a session and pre-populates it from a saved terrain
    /// string. Corrupt records are skipped and reported; the session
    /// always comes up.
    pub fn from_saved(
        config: &WorldConfig,
        data: &str,
        surface: Box<dyn BrickSurface>,
        cues: Box<dyn CueSink>,
    ) -> (Self, DecodeReport) {
        let mut session = Self::new(config, surface, cues);
        let report = codec::decode_into(&mut session.terrain, data);

        for (index, record) in session.terrain.occupied() {
            let style = if record.is_flat() {
                BrickStyle::flat(record.color)
            } else {
                BrickStyle::solid(record.color)
            };
            session
                .surface
                .brick_created(index, session.lattice.position_of(index), style);
        }

        // A loaded pile can bury the cursor several courses deep, so
        // run the settle fixed point rather than a single step.
        physics::settle(&session.terrain, &session.lattice, &mut session.cursor);
        session
            .surface
            .cursor_moved(session.cursor.position, BrickStyle::cursor(session.cursor.color));

        (session, report)
    }

    /// A sender any input source can feed actions through.
    pub fn handle(&self) -> Sender<Action> {
        self.handle.clone()
    }

    /// Drains queued actions and applies them in arrival order.
    /// Returns how many were applied.
    pub fn pump(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(action) = self.actions.try_recv() {
            self.apply(action);
            applied += 1;
        }
        applied
    }

    pub fn apply(&mut self, action: Action) {
        match action {
            Action::MoveNorth => self.shift_cursor(-1, 0),
            Action::MoveSouth => self.shift_cursor(1, 0),
            Action::MoveEast => self.shift_cursor(0, -1),
            Action::MoveWest => self.shift_cursor(0, 1),
            Action::Place => self.place(),
            Action::Undo => self.undo(),
            Action::CycleColor => self.cycle_color(),
            Action::SetCursorX(x) => self.set_cursor_x(x),
        }
    }

    fn shift_cursor(&mut self, dx: i32, dz: i32) {
        let delta = Vec3::new(
            dx as f32 * self.lattice.stud_spacing(),
            0.0,
            dz as f32 * self.lattice.stud_spacing(),
        );
        self.cursor.translate(delta, &self.lattice);
        self.cues.play(Cue::Move);
        self.resettle();
    }

    fn set_cursor_x(&mut self, x: f32) {
        let before = self.cursor.position;
        self.cursor.set_x(x, &self.lattice);
        // A periodic hardware feed repeats the same reading; only real
        // motion is audible.
        if self.cursor.position != before {
            self.cues.play(Cue::Move);
        }
        self.resettle();
    }

    fn place(&mut self) {
        let index = self.cursor.grid_index(&self.lattice);
        if index.y() == self.lattice.world_size() {
            log::debug!("place at the world ceiling ignored");
            return;
        }

        let record = BrickRecord::new(self.cursor.color);
        self.terrain.set(index, record);
        self.history.push(index);
        self.surface.brick_created(
            index,
            self.lattice.position_of(index),
            BrickStyle::solid(record.color),
        );
        self.cues.play(Cue::Place);

        // The cursor now stands inside its own brick's neighborhood
        // and pops up on the next settle.
        self.resettle();
    }

    fn undo(&mut self) {
        let Some(index) = self.history.pop() else {
            log::debug!("undo with empty history ignored");
            return;
        };

        if self.terrain.clear(index).is_none() {
            log::warn!("undo popped {index} but the cell was already empty");
        }
        self.surface.brick_removed(index);
        self.cues.play(Cue::Undo);
        self.resettle();
    }

    fn cycle_color(&mut self) {
        self.set_color(self.cursor.color.cycled());
    }

    /// Jumps the cursor straight to a palette entry.
    pub fn set_color(&mut self, color: ColorId) {
        self.cursor.color = color;
        self.surface
            .cursor_moved(self.cursor.position, BrickStyle::cursor(color));
        self.cues.play(Cue::SwitchColor);
    }

    /// One settle correction, then tell the surface where the cursor
    /// ended up.
    fn resettle(&mut self) {
        physics::settle_step(&self.terrain, &self.lattice, &mut self.cursor);
        self.surface
            .cursor_moved(self.cursor.position, BrickStyle::cursor(self.cursor.color));
    }

    /// The terrain as a save string.
    pub fn save(&self) -> String {
        codec::encode(&self.terrain)
    }

    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    pub fn terrain(&self) -> &BrickTerrain {
        &self.terrain
    }

    pub fn history(&self) -> &PlacementHistory {
        &self.history
    }

    pub fn cursor(&self) -> &CursorBrick {
        &self.cursor
    }
}
