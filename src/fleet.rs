use crate::rover::Rover;
use glam::IVec2;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// The rectangular plateau the rovers drive on.
///
/// Spans `(0, 0)` to `max` inclusive. Both components of `max` are at least 1
/// when built by the loader.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plateau {
    max: IVec2,
}

impl Plateau {
    pub fn new(max_x: i32, max_y: i32) -> Self {
        Self {
            max: IVec2::new(max_x, max_y),
        }
    }

    pub fn max(&self) -> IVec2 {
        self.max
    }

    pub fn max_x(&self) -> i32 {
        self.max.x
    }

    pub fn max_y(&self) -> i32 {
        self.max.y
    }

    /// Whether `position` lies on the plateau.
    pub fn contains(&self, position: IVec2) -> bool {
        position.cmpge(IVec2::ZERO).all() && position.cmple(self.max).all()
    }
}

/// One rover and the instruction line that belongs to it.
#[derive(Clone, Debug)]
pub struct FleetEntry {
    pub rover: Rover,

    /// Raw instruction line, validated only when the rover is driven.
    pub instructions: String,
}

/// Every rover parsed from one fleet definition, in input order.
///
/// All rovers hold the same `Arc<Plateau>`.
#[derive(Clone, Debug)]
pub struct Fleet {
    plateau: Arc<Plateau>,
    entries: Vec<FleetEntry>,
}

impl Fleet {
    pub fn new(plateau: Plateau) -> Self {
        Self {
            plateau: Arc::new(plateau),
            entries: Vec::new(),
        }
    }

    pub fn plateau(&self) -> &Arc<Plateau> {
        &self.plateau
    }

    pub fn entries(&self) -> &[FleetEntry] {
        &self.entries
    }

    pub fn entries_mut(&mut self) -> &mut [FleetEntry] {
        &mut self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Appends a rover that will share this fleet's plateau.
    pub fn add_rover(&mut self, rover: Rover, instructions: impl Into<String>) {
        self.entries.push(FleetEntry {
            rover,
            instructions: instructions.into(),
        });
    }
}
