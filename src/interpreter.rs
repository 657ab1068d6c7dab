//! Decoding of instruction characters into [`RoverOp`]s.
//!
//! [`InstructionSet::standard`] registers the three rover commands. Lookup is
//! done on the already-uppercased character, so callers normalise case first.

use crate::error::{Result, RoverError};
use crate::rover::RoverOp;

/// Table mapping ASCII instruction characters to operations.
#[derive(Clone, Debug)]
pub struct InstructionSet {
    op_map: [Option<RoverOp>; 128],
}

impl Default for InstructionSet {
    fn default() -> Self {
        Self::standard()
    }
}

impl InstructionSet {
    /// `L`, `R` and `M`.
    pub const fn standard() -> Self {
        let mut op_map = [None; 128];
        op_map[b'L' as usize] = Some(RoverOp::TurnLeft);
        op_map[b'R' as usize] = Some(RoverOp::TurnRight);
        op_map[b'M' as usize] = Some(RoverOp::Move);
        Self { op_map }
    }

    /// Returns the operation registered for `c`.
    ///
    /// Characters outside the table, including any non-ASCII character, yield
    /// [`RoverError::UnsupportedInstruction`].
    pub fn decode(&self, c: char) -> Result<RoverOp> {
        usize::try_from(u32::from(c))
            .ok()
            .and_then(|idx| self.op_map.get(idx).copied().flatten())
            .ok_or(RoverError::UnsupportedInstruction(c))
    }
}
