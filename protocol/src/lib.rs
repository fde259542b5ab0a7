use thiserror::Error;

pub mod event;
pub mod fields;

pub use event::{LogEvent, parse_log, parse_log_event};
pub use fields::{HpStatus, Player, PokemonRef, SideRef, SpeciesDetails, Stat};

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Invalid event format: {0}")]
    InvalidFormat(String),

    #[error("Missing required field: {0}")]
    MissingField(String),
}
