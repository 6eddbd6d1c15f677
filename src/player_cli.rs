#![cfg(feature = "std")]

use std::io::{self, BufRead, Write};
use std::string::String;
use std::time::Duration;

use crate::{
    ai::Targeting,
    common::{EngineError, ShotResult},
    game::{GameSession, Phase, ShotReport, Side},
    grid::{CellState, Coord, Grid},
    ship::Orientation,
};

/// Pause before each opponent shot, so the player can follow along.
pub const DEFAULT_PAUSE: Duration = Duration::from_millis(1000);

/// Terminal front end. Reads commands from `input`, draws boards to `out` and
/// drives a [`GameSession`] through placement and battle.
pub struct CliDriver<R: BufRead, W: Write> {
    input: R,
    out: W,
    pause: Duration,
}

pub fn coord_to_string(r: usize, c: usize) -> String {
    let col = (b'A' + c as u8) as char;
    format!("{}{}", col, r + 1)
}

/// Parse `A5`-style input (column letter, 1-based row) for an N×N board.
pub fn parse_coord(input: &str, size: usize) -> Result<Coord, String> {
    let last_col = (b'A' + size as u8 - 1) as char;
    if input.len() < 2 {
        return Err("Too short - need column letter and row number (e.g., A5)".to_string());
    }
    let mut chars = input.chars();
    let col_ch = chars.next().ok_or("No column letter")?.to_ascii_uppercase();
    if !col_ch.is_ascii_alphabetic() {
        return Err(format!("Invalid column '{}' - must be a letter A-{}", col_ch, last_col));
    }
    let col = (col_ch as u8 - b'A') as usize;
    if col >= size {
        return Err(format!("Column '{}' out of bounds - must be A-{}", col_ch, last_col));
    }
    let row_str: String = chars.collect();
    let row: usize = row_str
        .parse()
        .map_err(|_| format!("Invalid row '{}' - must be a number 1-{}", row_str, size))?;
    if row == 0 || row > size {
        return Err(format!("Row {} out of bounds - must be 1-{}", row, size));
    }
    Ok((row - 1, col))
}

fn parse_orientation(input: &str) -> Option<Orientation> {
    match input.to_ascii_lowercase().as_str() {
        "h" | "horizontal" => Some(Orientation::Horizontal),
        "v" | "vertical" => Some(Orientation::Vertical),
        _ => None,
    }
}

/// Draw a grid with column letters and 1-based row numbers. Unstruck ships
/// are shown only when `reveal` is set.
pub fn write_board<W: Write>(out: &mut W, grid: &Grid, reveal: bool) -> io::Result<()> {
    write!(out, "   ")?;
    for c in 0..grid.size() {
        write!(out, " {}", (b'A' + c as u8) as char)?;
    }
    writeln!(out)?;
    for r in 0..grid.size() {
        write!(out, "{:2} ", r + 1)?;
        for c in 0..grid.size() {
            let ch = match grid.get(r, c) {
                Ok(CellState::Hit) => 'X',
                Ok(CellState::Miss) => 'o',
                Ok(CellState::Ship) if reveal => 'S',
                _ => '.',
            };
            write!(out, " {}", ch)?;
        }
        writeln!(out)?;
    }
    Ok(())
}

fn describe(report: &ShotReport) -> String {
    let at = coord_to_string(report.row, report.col);
    match (report.shooter, report.result) {
        (_, _) if report.fleet_destroyed => format!("{} -> the last ship goes down!", at),
        (Side::Player, ShotResult::Miss) => format!("{} -> miss. Opponent's turn.", at),
        (Side::Player, ShotResult::Hit) => format!("{} -> hit! Fire again.", at),
        (Side::Player, ShotResult::Sunk(len)) => {
            format!("{} -> {}-decker sunk! Fire again.", at, len)
        }
        (Side::Opponent, ShotResult::Miss) => {
            format!("Opponent fires at {} -> miss. Your turn.", at)
        }
        (Side::Opponent, ShotResult::Hit) => format!("Opponent fires at {} -> hit!", at),
        (Side::Opponent, ShotResult::Sunk(len)) => {
            format!("Opponent fires at {} -> your {}-decker is sunk!", at, len)
        }
    }
}

impl<R: BufRead, W: Write> CliDriver<R, W> {
    pub fn new(input: R, out: W) -> Self {
        Self {
            input,
            out,
            pause: DEFAULT_PAUSE,
        }
    }

    pub fn with_pause(mut self, pause: Duration) -> Self {
        self.pause = pause;
        self
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Prompt and read one trimmed line. `None` on end of input.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.out, "{}", prompt)?;
        self.out.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Play `session` to the end. Returns the winner, or `None` if the player
    /// quit or input ran out.
    pub async fn play<T: Targeting>(
        &mut self,
        session: &mut GameSession<T>,
    ) -> anyhow::Result<Option<Side>> {
        if !self.place_fleet(session)? {
            return Ok(None);
        }
        loop {
            match session.phase() {
                Phase::PlayerTurn => {
                    if !self.player_turn(session)? {
                        return Ok(None);
                    }
                }
                Phase::OpponentTurn => {
                    tokio::time::sleep(self.pause).await;
                    let report = session.opponent_fire()?;
                    writeln!(self.out, "{}", describe(&report))?;
                }
                Phase::GameOver { winner } => {
                    self.game_over(session, winner)?;
                    return Ok(Some(winner));
                }
                Phase::Placement => anyhow::bail!("placement did not complete"),
            }
        }
    }

    /// Returns `false` if the player quit during placement.
    fn place_fleet<T: Targeting>(&mut self, session: &mut GameSession<T>) -> anyhow::Result<bool> {
        if session.phase() != Phase::Placement {
            return Ok(true);
        }
        writeln!(
            self.out,
            "Place your ships (e.g. A5 or A5 v). \
             'r' rotates, 'auto' places the rest at random, 'q' quits."
        )?;
        while let Some(length) = session.next_ship_length() {
            write_board(&mut self.out, session.player_fleet(), true)?;
            let prompt = format!(
                "Place {}-decker ({:?}): ",
                length,
                session.pending_orientation()
            );
            let Some(line) = self.read_line(&prompt)? else {
                return Ok(false);
            };
            let mut parts = line.split_whitespace();
            match parts.next() {
                None => continue,
                Some("q") | Some("quit") => return Ok(false),
                Some("r") | Some("rotate") => {
                    let orientation = session.rotate_pending();
                    writeln!(self.out, "Orientation: {:?}", orientation)?;
                }
                Some("auto") => {
                    if let Err(e) = session.auto_place_fleet() {
                        writeln!(self.out, "Error: {}. Try a larger board or place manually.", e)?;
                    }
                }
                Some(coord) => {
                    let orientation = match parts.next() {
                        Some(o) => match parse_orientation(o) {
                            Some(o) => o,
                            None => {
                                writeln!(self.out, "Orientation must be 'h' or 'v'")?;
                                continue;
                            }
                        },
                        None => session.pending_orientation(),
                    };
                    match parse_coord(coord, session.board_size()) {
                        Ok((r, c)) => {
                            if let Err(e) = session.place_ship(r, c, orientation) {
                                writeln!(self.out, "Error: {}", e)?;
                            }
                        }
                        Err(msg) => writeln!(self.out, "{}", msg)?,
                    }
                }
            }
        }
        writeln!(self.out, "All ships placed! Your turn.")?;
        Ok(true)
    }

    /// Returns `false` if the player quit.
    fn player_turn<T: Targeting>(&mut self, session: &mut GameSession<T>) -> anyhow::Result<bool> {
        writeln!(self.out, "\nOpponent waters:")?;
        write_board(&mut self.out, session.player_view(), false)?;
        writeln!(self.out, "\nYour fleet:")?;
        write_board(&mut self.out, session.player_fleet(), true)?;
        loop {
            let Some(line) = self.read_line("Fire at: ")? else {
                return Ok(false);
            };
            match line.as_str() {
                "" => continue,
                "q" | "quit" => return Ok(false),
                input => match parse_coord(input, session.board_size()) {
                    Ok((r, c)) => match session.fire_at_opponent(r, c) {
                        Ok(report) => {
                            writeln!(self.out, "{}", describe(&report))?;
                            return Ok(true);
                        }
                        Err(EngineError::AlreadyTargeted { .. }) => {
                            writeln!(self.out, "Already fired at {}", input)?;
                        }
                        Err(e) => return Err(e.into()),
                    },
                    Err(msg) => writeln!(self.out, "{}", msg)?,
                },
            }
        }
    }

    fn game_over<T: Targeting>(
        &mut self,
        session: &GameSession<T>,
        winner: Side,
    ) -> anyhow::Result<()> {
        writeln!(self.out, "\nGAME OVER")?;
        writeln!(self.out, "Opponent fleet:")?;
        write_board(&mut self.out, session.opponent_fleet(), true)?;
        writeln!(self.out, "\nYour fleet:")?;
        write_board(&mut self.out, session.player_fleet(), true)?;
        match winner {
            Side::Player => writeln!(
                self.out,
                "\nVICTORY! You sank the whole enemy fleet in {} shots.",
                session.player_shots()
            )?,
            Side::Opponent => writeln!(self.out, "\nDEFEAT. All your ships have been destroyed.")?,
        }
        Ok(())
    }
}
