pub const GRID_SIZE: usize = 11;

pub const LETTER_GRID: [&str; GRID_SIZE] = [
    "ITLISASAMPM",
    "ACQUARTERDC",
    "TWENTYFIVEX",
    "HALFTENFTOU",
    "PASTERUNINE",
    "ONESIXTHREE",
    "FOURFIVETWO",
    "EIGHTELEVEN",
    "SEVENTWELVE",
    "TENSEOCLOCK",
    "ERZIPMNOTAM",
];

// 121 upper-case ASCII letters, checked at build time.
const _: () = {
    let mut row = 0;
    while row < GRID_SIZE {
        let line = LETTER_GRID[row].as_bytes();
        assert!(line.len() == GRID_SIZE, "every grid row must be 11 letters wide");
        let mut col = 0;
        while col < GRID_SIZE {
            assert!(line[col].is_ascii_uppercase(), "grid letters must be A-Z");
            col += 1;
        }
        row += 1;
    }
};

pub fn letter(row: usize, col: usize) -> Option<char> {
    LETTER_GRID
        .get(row)?
        .as_bytes()
        .get(col)
        .map(|&b| b as char)
}
