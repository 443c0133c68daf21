//! Error types for match setup and console I/O.
//!
//! A bust is a game outcome and running out of time is a `TurnStatus`,
//! so neither appears here.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PigError {
    /// Player type token was neither `human` nor `computer`.
    #[error("Invalid player type: {0:?}")]
    InvalidPlayerType(String),

    /// An interactive player's input reached end-of-file.
    #[error("Input closed while waiting for {player}")]
    InputClosed { player: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PigError>;
