use anyhow::Result;
use bricklet::{
    action_for, BrickStyle, BrickSurface, BuildConfig, BuildSession, GridIndex, LogCues,
};
use glam::Vec3;
use log::{info, LevelFilter};
use simple_logger::SimpleLogger;
use std::io::{self, BufRead, Write};

/// Console stand-in for a real renderer: brick events become log
/// lines, and the map command draws the column heights.
struct ConsoleSurface;

impl BrickSurface for ConsoleSurface {
    fn baseplate_created(&mut self, _center: Vec3, world_size: u32, _style: BrickStyle) {
        info!("baseplate ready, {world_size}x{world_size} studs");
    }

    fn brick_created(&mut self, index: GridIndex, _position: Vec3, style: BrickStyle) {
        info!("brick {} placed at {index}", style.color);
    }

    fn brick_removed(&mut self, index: GridIndex) {
        info!("brick removed from {index}");
    }

    fn cursor_moved(&mut self, position: Vec3, style: BrickStyle) {
        log::debug!("cursor at {position} in {}", style.color);
    }
}

fn render_map(session: &BuildSession) -> String {
    let size = session.lattice().world_size();
    let cursor = session.cursor().grid_index(session.lattice());
    let mut map = String::new();

    for z in 0..size {
        for x in 0..size {
            if cursor.x() == x && cursor.z() == z {
                map.push('@');
            } else {
                // Tallest occupied course in the column, as its
                // height symbol.
                let height = (0..size)
                    .rev()
                    .find(|&y| session.terrain().is_occupied(GridIndex::new(x, y, z)));
                match height {
                    Some(y) => map.push(bricklet::world::ALPHABET[y as usize]),
                    None => map.push('.'),
                }
            }
        }
        map.push('\n');
    }
    map
}

fn main() -> Result<()> {
    SimpleLogger::new().with_level(LevelFilter::Info).init()?;
    info!("Starting bricklet...");

    let config = BuildConfig::load_default()?;
    config.world.validate()?;
    if config.bridge.enabled {
        // No physical port in the console build; keyboard input still
        // drives everything.
        info!("serial bridge enabled in config but no port is attached");
    }

    let mut session = match std::env::args().nth(1) {
        Some(saved) => {
            let (session, report) =
                BuildSession::from_saved(&config.world, &saved, Box::new(ConsoleSurface), Box::new(LogCues));
            if !report.is_clean() {
                info!(
                    "loaded {} bricks, skipped {} corrupt records",
                    report.loaded,
                    report.errors.len()
                );
            } else {
                info!("loaded {} bricks", report.loaded);
            }
            session
        }
        None => BuildSession::new(&config.world, Box::new(ConsoleSurface), Box::new(LogCues)),
    };

    println!("commands: w/a/s/d move, p place, u undo, c color, map, save, quit");

    let handle = session.handle();
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let command = line.trim();

        if let Some(action) = action_for(command) {
            handle.send(action)?;
            session.pump();
            continue;
        }

        match command {
            "map" | "look" => print!("{}", render_map(&session)),
            "save" => println!("{}", session.save()),
            "quit" | "exit" => break,
            "" => {}
            _ => println!("unknown command {command:?}"),
        }
        io::stdout().flush()?;
    }

    info!("goodbye");
    Ok(())
}
