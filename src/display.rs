use std::io::{self, Write};

use crossterm::{
    cursor::MoveTo,
    queue,
    style::Stylize as _,
    terminal::{Clear, ClearType},
};
use wordclock_core::{Mask, LETTER_GRID};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inactive {
    Dim,
    Hidden,
}

pub fn draw<W: Write>(out: &mut W, mask: &Mask, inactive: Inactive) -> io::Result<()> {
    for (row, line) in LETTER_GRID.iter().enumerate() {
        for (col, letter) in line.chars().enumerate() {
            match (mask.is_lit(row, col), inactive) {
                (true, _) => write!(out, "{} ", letter.bold().white())?,
                (false, Inactive::Dim) => write!(out, "{} ", letter.dark_grey())?,
                (false, Inactive::Hidden) => write!(out, "  ")?,
            }
        }
        writeln!(out)?;
    }
    out.flush()
}

pub fn redraw<W: Write>(out: &mut W, mask: &Mask, inactive: Inactive) -> io::Result<()> {
    queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;
    draw(out, mask, inactive)
}
