use std::fmt;

use log::debug;
use phf::phf_map;

use crate::{
    grid::{GRID_SIZE, LETTER_GRID},
    Error, Result,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Run {
    pub row: usize,
    pub start: usize,
    pub end: usize,
}

impl Run {
    /// First occurrence of `word` in grid row `row`.
    ///
    /// # Panics
    ///
    /// If the row does not exist or does not contain `word`. Used in constant
    /// context, where the panic surfaces at compile time.
    pub const fn locate(row: usize, word: &str) -> Self {
        assert!(row < GRID_SIZE, "row outside the letter grid");
        let line = LETTER_GRID[row].as_bytes();
        let word = word.as_bytes();
        assert!(!word.is_empty(), "cannot locate an empty word");

        let mut start = 0;
        while start + word.len() <= line.len() {
            let mut i = 0;
            while i < word.len() && line[start + i] == word[i] {
                i += 1;
            }
            if i == word.len() {
                return Self {
                    row,
                    start,
                    end: start + word.len(),
                };
            }
            start += 1;
        }
        panic!("word is not spelled in its grid row");
    }

    pub fn in_bounds(&self) -> bool {
        self.row < GRID_SIZE && self.start < self.end && self.end <= GRID_SIZE
    }

    pub fn overlaps(&self, other: &Run) -> bool {
        self.row == other.row && self.start < other.end && other.start < self.end
    }

    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> {
        let row = self.row;
        (self.start..self.end).map(move |col| (row, col))
    }

    pub fn text(&self) -> &'static str {
        LETTER_GRID
            .get(self.row)
            .copied()
            .and_then(|line| line.get(self.start..self.end))
            .unwrap_or("")
    }
}

impl fmt::Display for Run {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}..{}]", self.row, self.start, self.end)?;
        match self.text() {
            "" => Ok(()),
            text => write!(f, " {text:?}"),
        }
    }
}

pub const IT: Run = Run::locate(0, "IT");
pub const IS: Run = Run::locate(0, "IS");

pub const FIVE_MINUTES: Run = Run::locate(2, "FIVE");
pub const TEN_MINUTES: Run = Run::locate(3, "TEN");
pub const QUARTER: Run = Run::locate(1, "QUARTER");
pub const TWENTY: Run = Run::locate(2, "TWENTY");
pub const TWENTY_FIVE: Run = Run::locate(2, "TWENTYFIVE");
pub const HALF: Run = Run::locate(3, "HALF");
pub const PAST: Run = Run::locate(4, "PAST");
pub const TO: Run = Run::locate(3, "TO");
pub const OCLOCK: Run = Run::locate(9, "OCLOCK");

pub const ONE: Run = Run::locate(5, "ONE");
pub const TWO: Run = Run::locate(6, "TWO");
pub const THREE: Run = Run::locate(5, "THREE");
pub const FOUR: Run = Run::locate(6, "FOUR");
pub const FIVE: Run = Run::locate(6, "FIVE");
pub const SIX: Run = Run::locate(5, "SIX");
pub const SEVEN: Run = Run::locate(8, "SEVEN");
pub const EIGHT: Run = Run::locate(7, "EIGHT");
pub const NINE: Run = Run::locate(4, "NINE");
pub const TEN: Run = Run::locate(9, "TEN");
pub const ELEVEN: Run = Run::locate(7, "ELEVEN");
pub const TWELVE: Run = Run::locate(8, "TWELVE");

pub const AM: Run = Run::locate(10, "AM");
pub const PM: Run = Run::locate(10, "PM");

pub const MINUTE_BUCKETS: [u8; 12] = [0, 5, 10, 15, 20, 25, 30, 35, 40, 45, 50, 55];

pub static MINUTE_PHRASES: phf::Map<u8, &'static [Run]> = phf_map! {
    0u8 => &[OCLOCK],
    5u8 => &[FIVE_MINUTES, PAST],
    10u8 => &[TEN_MINUTES, PAST],
    15u8 => &[QUARTER, PAST],
    20u8 => &[TWENTY, PAST],
    25u8 => &[TWENTY_FIVE, PAST],
    30u8 => &[HALF, PAST],
    35u8 => &[TWENTY_FIVE, TO],
    40u8 => &[TWENTY, TO],
    45u8 => &[QUARTER, TO],
    50u8 => &[TEN_MINUTES, TO],
    55u8 => &[FIVE_MINUTES, TO],
};

pub static HOUR_PHRASES: phf::Map<u8, Run> = phf_map! {
    1u8 => ONE,
    2u8 => TWO,
    3u8 => THREE,
    4u8 => FOUR,
    5u8 => FIVE,
    6u8 => SIX,
    7u8 => SEVEN,
    8u8 => EIGHT,
    9u8 => NINE,
    10u8 => TEN,
    11u8 => ELEVEN,
    12u8 => TWELVE,
};

pub fn minute_phrase(bucket: u8) -> Result<&'static [Run]> {
    MINUTE_PHRASES
        .get(&bucket)
        .copied()
        .ok_or(Error::LookupMiss {
            table: "minute phrase",
            key: bucket,
        })
}

pub fn hour_phrase(hour: u8) -> Result<Run> {
    HOUR_PHRASES.get(&hour).copied().ok_or(Error::LookupMiss {
        table: "hour phrase",
        key: hour,
    })
}

pub fn meridiem(is_pm: bool) -> Run {
    match is_pm {
        true => PM,
        false => AM,
    }
}

pub fn validate_tables() -> Result<()> {
    for bucket in MINUTE_BUCKETS {
        for &run in minute_phrase(bucket)? {
            check_bounds(run)?;
        }
    }
    for hour in 1..=12 {
        check_bounds(hour_phrase(hour)?)?;
    }

    for bucket in MINUTE_BUCKETS {
        let minutes = minute_phrase(bucket)?;
        for hour in 1..=12 {
            let hour_run = hour_phrase(hour)?;
            for marker in [AM, PM] {
                let mut runs = vec![IT, IS, hour_run, marker];
                runs.extend_from_slice(minutes);
                check_disjoint(&runs)?;
            }
        }
    }

    debug!(
        "phrase tables valid: {} minute buckets, {} hours",
        MINUTE_PHRASES.len(),
        HOUR_PHRASES.len()
    );
    Ok(())
}

fn check_bounds(run: Run) -> Result<()> {
    match run.in_bounds() {
        true => Ok(()),
        false => Err(Error::RunOutOfBounds(run)),
    }
}

fn check_disjoint(runs: &[Run]) -> Result<()> {
    for (i, first) in runs.iter().enumerate() {
        if let Some(second) = runs[i + 1..].iter().find(|other| first.overlaps(other)) {
            return Err(Error::Overlap {
                first: *first,
                second: *second,
            });
        }
    }
    Ok(())
}
