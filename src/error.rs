//! Error types for fleet loading and rover driving.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RoverError {
    /// A required input (instruction string, path) was missing or blank.
    #[error("Missing or empty argument: {0}")]
    InvalidArgument(&'static str),

    /// The plateau line or a rover state line could not be parsed.
    #[error("{}", describe_format(.line, .rover, .text))]
    Format {
        line: usize,
        rover: Option<usize>,
        text: String,
    },

    /// A rover state line was the last line of the input.
    #[error("Rover definition {rover} ends midway on line {line}")]
    IncompleteDefinition { rover: usize, line: usize },

    #[error("No rovers defined after plateau definition")]
    EmptyFleet,

    #[error("Unknown rover instruction character '{0}'")]
    UnsupportedInstruction(char),

    #[error("Mission control has no fleet loaded")]
    NotInitialized,

    #[error("Instruction file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn describe_format(line: &usize, rover: &Option<usize>, text: &str) -> String {
    match rover {
        Some(rover) => {
            format!("Rover definition {rover} on line {line} in unsupported format '{text}'")
        }
        None => format!("Plateau definition on line {line} in unsupported format '{text}'"),
    }
}

/// Result type for rover operations
pub type Result<T> = std::result::Result<T, RoverError>;
