use thiserror::Error;

use crate::Run;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid {field}: {value}")]
    InvalidInput { field: &'static str, value: i64 },

    /// A computed key has no entry in one of the phrase tables. Never returned
    /// while the tables are complete; treat it as a bug, not as bad input.
    #[error("no entry for key {key} in the {table} table")]
    LookupMiss { table: &'static str, key: u8 },

    #[error("run {0} does not fit the letter grid")]
    RunOutOfBounds(Run),

    #[error("runs {first} and {second} light the same cell")]
    Overlap { first: Run, second: Run },
}
