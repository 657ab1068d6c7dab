//! Fleet Loader: turns a textual fleet definition into a [`Fleet`].
//!
//! # Format
//!
//! ```text
//! 5 5          <- plateau: max x, max y (both > 0)
//! 1 2 N        <- rover 1: x y heading
//! LMLMLMLMM    <- rover 1: instructions
//! 3 3 E        <- rover 2 ...
//! MMRMMRMRRM
//! ```
//!
//! A blank line where a rover state line is expected ends the fleet; anything
//! after it is ignored. Instruction lines are not inspected here, see
//! [`Rover::drive`](crate::Rover::drive).

use crate::error::{Result, RoverError};
use crate::fleet::{Fleet, Plateau};
use crate::rover::{Heading, Rover};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;

/// Parses a fleet definition held in memory.
pub fn parse_fleet(text: &str) -> Result<Fleet> {
    let mut lines = text.lines();
    let plateau_line = lines.next().unwrap_or_default();
    let plateau = parse_plateau(plateau_line)?;
    debug!(max_x = plateau.max_x(), max_y = plateau.max_y(), "plateau defined");

    let mut fleet = Fleet::new(plateau);
    let mut line = 2;
    while let Some(state_line) = lines.next() {
        if state_line.trim().is_empty() {
            debug!(line, "blank line ends fleet definition");
            break;
        }

        let ordinal = fleet.len() + 1;
        let rover = parse_rover(state_line, ordinal, line, &fleet)?;
        line += 1;

        let Some(instructions) = lines.next() else {
            return Err(RoverError::IncompleteDefinition {
                rover: ordinal,
                line,
            });
        };
        debug!(ordinal, %rover, instructions, "rover defined");
        fleet.add_rover(rover, instructions);
        line += 1;
    }

    if fleet.is_empty() {
        return Err(RoverError::EmptyFleet);
    }
    Ok(fleet)
}

/// Reads a fleet definition from a caller-owned source.
///
/// The reader is only borrowed and stays usable afterwards.
pub fn load_fleet_from_reader<R: BufRead + ?Sized>(reader: &mut R) -> Result<Fleet> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse_fleet(&text)
}

/// Opens `path`, reads a fleet definition from it and closes the file again.
pub fn load_fleet_from_path(path: impl AsRef<Path>) -> Result<Fleet> {
    let path = path.as_ref();
    if path.as_os_str().is_empty() {
        return Err(RoverError::InvalidArgument("path"));
    }
    if !path.is_file() {
        return Err(RoverError::FileNotFound(path.to_path_buf()));
    }

    debug!(path = %path.display(), "loading fleet");
    let mut reader = BufReader::new(File::open(path)?);
    load_fleet_from_reader(&mut reader)
}

fn parse_plateau(text: &str) -> Result<Plateau> {
    let format_error = || RoverError::Format {
        line: 1,
        rover: None,
        text: text.to_string(),
    };

    let [max_x, max_y] = split_tokens::<2>(text).ok_or_else(format_error)?;
    let max_x: i32 = max_x.parse().map_err(|_| format_error())?;
    let max_y: i32 = max_y.parse().map_err(|_| format_error())?;
    if max_x <= 0 || max_y <= 0 {
        return Err(format_error());
    }
    Ok(Plateau::new(max_x, max_y))
}

fn parse_rover(text: &str, ordinal: usize, line: usize, fleet: &Fleet) -> Result<Rover> {
    let format_error = || RoverError::Format {
        line,
        rover: Some(ordinal),
        text: text.to_string(),
    };

    let [x, y, heading] = split_tokens::<3>(text).ok_or_else(format_error)?;
    let x: i32 = x.parse().map_err(|_| format_error())?;
    let y: i32 = y.parse().map_err(|_| format_error())?;
    let heading: Heading = heading.parse().map_err(|_| format_error())?;

    let plateau = fleet.plateau();
    if !plateau.contains(glam::IVec2::new(x, y)) {
        return Err(format_error());
    }
    Ok(Rover::new(x, y, heading, plateau.clone()))
}

/// Splits on whitespace, requiring exactly `N` tokens.
fn split_tokens<const N: usize>(text: &str) -> Option<[&str; N]> {
    let mut tokens = text.split_whitespace();
    let mut out = [""; N];
    for slot in &mut out {
        *slot = tokens.next()?;
    }
    match tokens.next() {
        Some(_) => None,
        None => Some(out),
    }
}
