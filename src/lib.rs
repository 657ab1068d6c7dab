//! # rover-fleet
//!
//! Simulates rovers on a rectangular plateau. A fleet definition names the
//! plateau size followed by, per rover, a starting position/heading and a line
//! of `L`/`R`/`M` instructions. [`MissionControl`] loads the definition, drives
//! each rover in order and produces a [`MissionReport`] of final states.
//!
//! ```
//! use rover_fleet::{MissionControl, parse_fleet};
//!
//! let fleet = parse_fleet("5 5\n1 2 N\nLMLMLMLMM\n3 3 E\nMMRMMRMRRM\n").unwrap();
//! let report = MissionControl::from_fleet(fleet).execute().unwrap();
//! assert_eq!(report.to_text(), "1 3 N\n5 1 E\n");
//! ```

pub mod error;
pub mod fleet;
pub mod interpreter;
pub mod loader;
pub mod mission;
pub mod rover;
pub mod telemetry;

pub use error::*;
pub use fleet::*;
pub use interpreter::*;
pub use loader::*;
pub use mission::*;
pub use rover::*;
