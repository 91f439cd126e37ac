mod error;
pub mod grid;
mod mask;
pub mod phrase;
mod resolve;

pub use error::{Error, Result};
pub use grid::{GRID_SIZE, LETTER_GRID};
pub use mask::Mask;
pub use phrase::{validate_tables, Run};
pub use resolve::{display_hour, minute_bucket, resolve, round_minute, ClockTime};
