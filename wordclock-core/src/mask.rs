use std::fmt;

use crate::{
    grid::{GRID_SIZE, LETTER_GRID},
    Run,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Mask([[bool; GRID_SIZE]; GRID_SIZE]);

impl Mask {
    pub const EMPTY: Self = Self([[false; GRID_SIZE]; GRID_SIZE]);

    pub fn is_lit(&self, row: usize, col: usize) -> bool {
        self.0
            .get(row)
            .and_then(|cells| cells.get(col))
            .copied()
            .unwrap_or(false)
    }

    pub fn light(&mut self, run: Run) {
        for (row, col) in run.cells() {
            if let Some(cell) = self.0.get_mut(row).and_then(|cells| cells.get_mut(col)) {
                *cell = true;
            }
        }
    }

    pub fn lit_count(&self) -> usize {
        self.0.iter().flatten().filter(|&&lit| lit).count()
    }

    pub fn lit_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.0.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .filter(|&(_, &lit)| lit)
                .map(move |(col, _)| (row, col))
        })
    }

    pub fn as_bits(&self) -> [[u8; GRID_SIZE]; GRID_SIZE] {
        self.0.map(|cells| cells.map(u8::from))
    }

    pub fn words(&self) -> String {
        let mut words = Vec::new();
        for (cells, line) in self.0.iter().zip(LETTER_GRID) {
            let mut word = String::new();
            for (&lit, letter) in cells.iter().zip(line.chars()) {
                if lit {
                    word.push(letter);
                } else if !word.is_empty() {
                    words.push(std::mem::take(&mut word));
                }
            }
            if !word.is_empty() {
                words.push(word);
            }
        }
        words.join(" ")
    }
}

impl fmt::Display for Mask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cells in &self.0 {
            for &lit in cells {
                f.write_str(if lit { "#" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
