//! Rover state and the per-instruction state machine.

use crate::error::{Result, RoverError};
use crate::fleet::Plateau;
use crate::interpreter::InstructionSet;
use glam::IVec2;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use thiserror::Error;
use tracing::trace;

/// Compass heading of a rover.
///
/// Headings form a cycle `North -> East -> South -> West -> North`. Turning is
/// expressed over [`Heading::CYCLE`] rather than the enum's discriminants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Heading {
    North,
    East,
    South,
    West,
}

impl Heading {
    /// Clockwise order of the four headings.
    pub const CYCLE: [Heading; 4] = [Heading::North, Heading::East, Heading::South, Heading::West];

    fn cycle_index(self) -> usize {
        match self {
            Heading::North => 0,
            Heading::East => 1,
            Heading::South => 2,
            Heading::West => 3,
        }
    }

    /// The heading one quarter turn clockwise.
    pub fn turn_right(self) -> Self {
        Self::CYCLE[(self.cycle_index() + 1) % Self::CYCLE.len()]
    }

    /// The heading one quarter turn counter-clockwise.
    pub fn turn_left(self) -> Self {
        Self::CYCLE[(self.cycle_index() + Self::CYCLE.len() - 1) % Self::CYCLE.len()]
    }

    /// Unit step on the grid when moving forward with this heading.
    pub fn delta(self) -> IVec2 {
        match self {
            Heading::North => IVec2::Y,
            Heading::East => IVec2::X,
            Heading::South => IVec2::NEG_Y,
            Heading::West => IVec2::NEG_X,
        }
    }

    /// Single-letter form used in fleet files and reports.
    pub fn letter(self) -> char {
        match self {
            Heading::North => 'N',
            Heading::East => 'E',
            Heading::South => 'S',
            Heading::West => 'W',
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Error returned when a heading token is not one of `N`, `E`, `S`, `W`.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
#[error("unknown heading '{0}'")]
pub struct ParseHeadingError(pub String);

impl FromStr for Heading {
    type Err = ParseHeadingError;

    /// Case-insensitive.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "N" => Ok(Heading::North),
            "E" => Ok(Heading::East),
            "S" => Ok(Heading::South),
            "W" => Ok(Heading::West),
            _ => Err(ParseHeadingError(s.to_string())),
        }
    }
}

/// Operations a rover understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoverOp {
    /// Quarter turn counter-clockwise (`L`).
    TurnLeft,
    /// Quarter turn clockwise (`R`).
    TurnRight,
    /// One grid unit forward (`M`). Moves that would leave the plateau are dropped.
    Move,
}

/// Position and heading of a rover.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoverState {
    /// Grid cell, `(0, 0)` is the south-west corner.
    pub position: IVec2,

    pub heading: Heading,
}

impl RoverState {
    pub fn new(x: i32, y: i32, heading: Heading) -> Self {
        Self {
            position: IVec2::new(x, y),
            heading,
        }
    }
}

/// A single rover on a shared plateau.
///
/// The rover trusts that it starts on the plateau; range checking happens in
/// the loader. From then on every move is clamped so the position never
/// leaves `0..=plateau.max()`.
#[derive(Clone, Debug)]
pub struct Rover {
    state: RoverState,
    plateau: Arc<Plateau>,
}

impl Rover {
    pub fn new(x: i32, y: i32, heading: Heading, plateau: Arc<Plateau>) -> Self {
        Self::from_state(RoverState::new(x, y, heading), plateau)
    }

    pub fn from_state(state: RoverState, plateau: Arc<Plateau>) -> Self {
        Self { state, plateau }
    }

    pub fn x(&self) -> i32 {
        self.state.position.x
    }

    pub fn y(&self) -> i32 {
        self.state.position.y
    }

    pub fn position(&self) -> IVec2 {
        self.state.position
    }

    pub fn heading(&self) -> Heading {
        self.state.heading
    }

    pub fn heading_letter(&self) -> char {
        self.state.heading.letter()
    }

    pub fn state(&self) -> RoverState {
        self.state
    }

    pub fn plateau(&self) -> &Arc<Plateau> {
        &self.plateau
    }

    /// Executes an instruction string against this rover.
    ///
    /// Instructions are case-insensitive and applied strictly left to right.
    /// An unknown character stops processing with
    /// [`RoverError::UnsupportedInstruction`]; instructions before it stay
    /// applied.
    pub fn drive(&mut self, instructions: &str) -> Result<()> {
        if instructions.trim().is_empty() {
            return Err(RoverError::InvalidArgument("instructions"));
        }

        let ops = InstructionSet::standard();
        for c in instructions.chars().map(|c| c.to_ascii_uppercase()) {
            let op = ops.decode(c)?;
            self.step(op);
            trace!(instruction = %c, x = self.x(), y = self.y(), heading = %self.heading(), "step");
        }
        Ok(())
    }

    /// Applies a single operation.
    ///
    /// A move that would leave the plateau, including one past an `i32::MAX`
    /// edge, leaves the position unchanged.
    pub fn step(&mut self, op: RoverOp) {
        match op {
            RoverOp::TurnLeft => self.state.heading = self.state.heading.turn_left(),
            RoverOp::TurnRight => self.state.heading = self.state.heading.turn_right(),
            RoverOp::Move => {
                let target = self.state.position.saturating_add(self.state.heading.delta());
                if self.plateau.contains(target) {
                    self.state.position = target;
                }
            }
        }
    }
}

impl fmt::Display for Rover {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.x(), self.y(), self.heading_letter())
    }
}
