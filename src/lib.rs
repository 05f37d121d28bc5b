pub mod api;
pub mod chain;
pub mod cli;
pub mod matcher;
pub mod session;

pub use crate::matcher::resolver::Resolution;
pub use crate::session::{Lookup, Session};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PokevoError {
    #[error("Empty input: enter a Pokémon name")]
    EmptyInput,

    #[error("No Pokémon found matching '{0}'")]
    Unresolved(String),

    #[error("Upstream data unavailable: {0}")]
    Upstream(String),

    #[error("Malformed evolution chain: {0}")]
    MalformedChain(String),
}

pub type Result<T> = std::result::Result<T, PokevoError>;
