//! Runner: drives every rover of a fleet and assembles the report.

use crate::error::{Result, RoverError};
use crate::fleet::Fleet;
use crate::loader::{load_fleet_from_path, load_fleet_from_reader};
use crate::rover::{Heading, Rover};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::BufRead;
use std::path::Path;
use tracing::{debug, info};

/// Final state of one rover.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoverReport {
    pub x: i32,
    pub y: i32,
    pub heading: Heading,
}

impl From<&Rover> for RoverReport {
    fn from(rover: &Rover) -> Self {
        Self {
            x: rover.x(),
            y: rover.y(),
            heading: rover.heading(),
        }
    }
}

impl fmt::Display for RoverReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.x, self.y, self.heading)
    }
}

/// Final states of a whole fleet, in input order.
///
/// `Display` renders one `"{x} {y} {heading}"` line per rover, each followed
/// by `\n`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissionReport {
    pub rovers: Vec<RoverReport>,
}

impl MissionReport {
    pub fn to_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for MissionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rover in &self.rovers {
            writeln!(f, "{rover}")?;
        }
        Ok(())
    }
}

/// Owns a loaded fleet and runs it.
#[derive(Debug, Default)]
pub struct MissionControl {
    fleet: Option<Fleet>,
}

impl MissionControl {
    /// Creates a controller with no fleet loaded.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_fleet(fleet: Fleet) -> Self {
        Self { fleet: Some(fleet) }
    }

    /// Loads the fleet from a file, which is closed again before returning.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        load_fleet_from_path(path).map(Self::from_fleet)
    }

    /// Loads the fleet from a borrowed reader, leaving it open.
    pub fn from_reader<R: BufRead + ?Sized>(reader: &mut R) -> Result<Self> {
        load_fleet_from_reader(reader).map(Self::from_fleet)
    }

    /// Replaces the loaded fleet.
    pub fn load(&mut self, fleet: Fleet) {
        self.fleet = Some(fleet);
    }

    pub fn fleet(&self) -> Option<&Fleet> {
        self.fleet.as_ref()
    }

    /// Drives every rover in input order and reports their final states.
    ///
    /// The first rover that fails aborts the run and its error is returned
    /// unchanged. Rovers driven before it keep their new state.
    pub fn execute(&mut self) -> Result<MissionReport> {
        let fleet = self.fleet.as_mut().ok_or(RoverError::NotInitialized)?;

        let mut report = MissionReport {
            rovers: Vec::with_capacity(fleet.len()),
        };
        for (idx, entry) in fleet.entries_mut().iter_mut().enumerate() {
            entry.rover.drive(&entry.instructions)?;
            debug!(ordinal = idx + 1, rover = %entry.rover, "rover finished");
            report.rovers.push(RoverReport::from(&entry.rover));
        }

        info!(rovers = report.rovers.len(), "mission complete");
        Ok(report)
    }
}
