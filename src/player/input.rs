use once_cell::sync::Lazy;
use std::collections::HashMap;

/// A discrete session action. Input sources translate whatever they
/// read (key presses, console commands, serial frames) into these;
/// the session never learns which device produced one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    MoveNorth,
    MoveSouth,
    MoveEast,
    MoveWest,
    Place,
    Undo,
    CycleColor,
    /// Absolute x-axis jump, used by the hardware bridge's
    /// potentiometer channel. The value is a world-space position and
    /// gets clamped like any other motion.
    SetCursorX(f32),
}

static COMMANDS: Lazy<HashMap<&'static str, Action>> = Lazy::new(|| {
    let mut commands = HashMap::new();
    // Mirrors the classic W/A/S/D, Space, Enter, U bindings.
    commands.insert("w", Action::MoveNorth);
    commands.insert("north", Action::MoveNorth);
    commands.insert("s", Action::MoveSouth);
    commands.insert("south", Action::MoveSouth);
    commands.insert("d", Action::MoveEast);
    commands.insert("east", Action::MoveEast);
    commands.insert("a", Action::MoveWest);
    commands.insert("west", Action::MoveWest);
    commands.insert("p", Action::Place);
    commands.insert("place", Action::Place);
    commands.insert("u", Action::Undo);
    commands.insert("undo", Action::Undo);
    commands.insert("c", Action::CycleColor);
    commands.insert("color", Action::CycleColor);
    commands
});

/// Looks a console command up in the binding table.
pub fn action_for(command: &str) -> Option<Action> {
    COMMANDS
        .get(command.trim().to_ascii_lowercase().as_str())
        .copied()
}
