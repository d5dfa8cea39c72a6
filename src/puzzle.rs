use rand::{seq::SliceRandom, Rng};
use std::fmt;
use std::str::FromStr;

use crate::error::PuzzleError;

/// Board side length.
pub const SIZE: usize = 3;

/// The solved board: tiles 1..=8 in row-major order, blank last.
pub const GOAL: Configuration = Configuration {
    cells: [[1, 2, 3], [4, 5, 6], [7, 8, 0]],
};

/// A blank-swap, named by the direction the blank travels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

impl Move {
    /// Expansion order used by the solver.
    pub const ALL: [Move; 4] = [Move::Up, Move::Down, Move::Left, Move::Right];

    pub fn as_offset(&self) -> (isize, isize) {
        match self {
            Move::Up => (-1, 0),
            Move::Down => (1, 0),
            Move::Left => (0, -1),
            Move::Right => (0, 1),
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Move::Up => Move::Down,
            Move::Down => Move::Up,
            Move::Left => Move::Right,
            Move::Right => Move::Left,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            Move::Up => "Up",
            Move::Down => "Down",
            Move::Left => "Left",
            Move::Right => "Right",
        };
        write!(f, "{}", s)
    }
}

/// One arrangement of the eight tiles and the blank (`0`).
///
/// Always a permutation of `0..=8`; equality and hashing compare all nine
/// cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Configuration {
    cells: [[u8; SIZE]; SIZE],
}

impl Configuration {
    /// Builds a configuration, rejecting grids that are not a permutation of
    /// `0..=8`.
    pub fn new(cells: [[u8; SIZE]; SIZE]) -> Result<Self, PuzzleError> {
        let mut seen = [false; SIZE * SIZE];
        for &value in cells.iter().flatten() {
            let slot = seen.get_mut(value as usize).ok_or_else(|| {
                PuzzleError::invalid(format!("tile {value} is out of range 0..=8"))
            })?;
            if *slot {
                return Err(PuzzleError::invalid(format!("tile {value} appears twice")));
            }
            *slot = true;
        }
        Ok(Self { cells })
    }

    pub fn cells(&self) -> &[[u8; SIZE]; SIZE] {
        &self.cells
    }

    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.cells[row][col]
    }

    pub fn is_goal(&self) -> bool {
        *self == GOAL
    }

    /// Row and column of the blank.
    pub fn blank(&self) -> (usize, usize) {
        for (r, row) in self.cells.iter().enumerate() {
            for (c, &value) in row.iter().enumerate() {
                if value == 0 {
                    return (r, c);
                }
            }
        }
        unreachable!("configuration without a blank")
    }

    /// Applies a blank-swap, or `None` if it would leave the board.
    pub fn try_move(&self, movement: Move) -> Option<Self> {
        let (zr, zc) = self.blank();
        let (dr, dc) = movement.as_offset();
        let nr = zr.checked_add_signed(dr).filter(|&r| r < SIZE)?;
        let nc = zc.checked_add_signed(dc).filter(|&c| c < SIZE)?;

        let mut cells = self.cells;
        cells[zr][zc] = cells[nr][nc];
        cells[nr][nc] = 0;
        Some(Self { cells })
    }

    /// Every configuration one blank-swap away, in [`Move::ALL`] order.
    pub fn neighbors(&self) -> impl Iterator<Item = (Move, Configuration)> + '_ {
        Move::ALL
            .into_iter()
            .filter_map(move |m| self.try_move(m).map(|next| (m, next)))
    }

    /// Slides the tile at `(row, col)` into the blank when the two are
    /// orthogonally adjacent.
    pub fn slide_tile(&self, row: usize, col: usize) -> Option<Self> {
        let (zr, zc) = self.blank();
        if row >= SIZE || col >= SIZE || zr.abs_diff(row) + zc.abs_diff(col) != 1 {
            return None;
        }
        let mut cells = self.cells;
        cells[zr][zc] = cells[row][col];
        cells[row][col] = 0;
        Some(Self { cells })
    }

    /// The blank-swap that turns `self` into `next`, if there is one.
    pub fn move_between(&self, next: &Configuration) -> Option<Move> {
        self.neighbors()
            .find(|(_, candidate)| candidate == next)
            .map(|(m, _)| m)
    }

    /// Whether the goal is reachable by blank-swaps.
    ///
    /// On an odd-width board this holds exactly when the tile inversion count
    /// is even.
    pub fn is_solvable(&self) -> bool {
        self.inversions() % 2 == 0
    }

    fn inversions(&self) -> usize {
        let flat: Vec<u8> = self.cells.iter().flatten().copied().collect();
        flat.iter()
            .enumerate()
            .filter(|&(_, &val)| val != 0)
            .map(|(i, &val)| {
                flat[i + 1..]
                    .iter()
                    .filter(|&&next| next != 0 && next < val)
                    .count()
            })
            .sum()
    }

    /// Random walk of `moves` rounds starting from the goal.
    ///
    /// A round whose direction would leave the board is spent without moving.
    pub fn shuffled<R: Rng + ?Sized>(moves: usize, rng: &mut R) -> Self {
        let mut state = GOAL;
        for _ in 0..moves {
            let Some(&dir) = Move::ALL.choose(rng) else {
                continue;
            };
            if let Some(next) = state.try_move(dir) {
                state = next;
            }
        }
        state
    }

    /// Uniformly random solvable configuration.
    pub fn random_solvable<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut flat: Vec<u8> = (0..(SIZE * SIZE) as u8).collect();
        loop {
            flat.shuffle(rng);
            let mut cells = [[0; SIZE]; SIZE];
            for (i, &value) in flat.iter().enumerate() {
                cells[i / SIZE][i % SIZE] = value;
            }
            let candidate = Self { cells };
            if candidate.is_solvable() {
                return candidate;
            }
        }
    }
}

impl Default for Configuration {
    fn default() -> Self {
        GOAL
    }
}

impl FromStr for Configuration {
    type Err = PuzzleError;

    /// Parses nine digits in row-major order. Whitespace, `,` and `/` are
    /// accepted as separators.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut digits = Vec::with_capacity(SIZE * SIZE);
        for ch in s.chars() {
            if ch.is_whitespace() || ch == ',' || ch == '/' {
                continue;
            }
            let digit = ch
                .to_digit(10)
                .ok_or_else(|| PuzzleError::invalid(format!("unexpected character {ch:?}")))?;
            digits.push(digit as u8);
        }
        if digits.len() != SIZE * SIZE {
            return Err(PuzzleError::invalid(format!(
                "expected {} cells, found {}",
                SIZE * SIZE,
                digits.len()
            )));
        }

        let mut cells = [[0; SIZE]; SIZE];
        for (i, value) in digits.into_iter().enumerate() {
            cells[i / SIZE][i % SIZE] = value;
        }
        Self::new(cells)
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            for (c, &val) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, " ")?;
                }
                if val == 0 {
                    write!(f, ".")?;
                } else {
                    write!(f, "{}", val)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn board(s: &str) -> Configuration {
        s.parse().unwrap()
    }

    #[test]
    fn rejects_malformed_grids() {
        assert!(Configuration::new([[1, 2, 3], [4, 5, 6], [7, 8, 8]]).is_err());
        assert!(Configuration::new([[1, 2, 3], [4, 5, 6], [7, 9, 0]]).is_err());
        assert!("12345678".parse::<Configuration>().is_err());
        assert!("12345678x".parse::<Configuration>().is_err());
    }

    #[test]
    fn parses_with_separators() {
        assert_eq!(board("123/456/780"), GOAL);
        assert_eq!(board("1,2,3, 4,5,6, 7,8,0"), GOAL);
    }

    #[test]
    fn blank_moves_stay_on_board() {
        assert_eq!(GOAL.blank(), (2, 2));
        assert_eq!(GOAL.try_move(Move::Down), None);
        assert_eq!(GOAL.try_move(Move::Right), None);
        assert_eq!(GOAL.try_move(Move::Up), Some(board("123450786")));
        assert_eq!(GOAL.try_move(Move::Left), Some(board("123456708")));

        let moves: Vec<Move> = board("123405678").neighbors().map(|(m, _)| m).collect();
        assert_eq!(moves, Move::ALL.to_vec());
    }

    #[test]
    fn move_between_inverts_try_move() {
        let start = board("123405678");
        for (m, next) in start.neighbors() {
            assert_eq!(start.move_between(&next), Some(m));
            assert_eq!(next.move_between(&start), Some(m.opposite()));
        }
        assert_eq!(GOAL.move_between(&GOAL), None);
    }

    #[test]
    fn slide_tile_requires_adjacency() {
        assert_eq!(GOAL.slide_tile(2, 1), Some(board("123456708")));
        assert_eq!(GOAL.slide_tile(0, 0), None);
        assert_eq!(GOAL.slide_tile(2, 2), None);
    }

    #[test]
    fn solvability_follows_inversion_parity() {
        assert!(GOAL.is_solvable());
        assert!(!board("213456780").is_solvable());
        assert!(board("123456708").is_solvable());
    }

    #[test]
    fn shuffles_are_solvable() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            assert!(Configuration::shuffled(150, &mut rng).is_solvable());
            assert!(Configuration::random_solvable(&mut rng).is_solvable());
        }
        assert_eq!(Configuration::shuffled(0, &mut rng), GOAL);
    }

    #[test]
    fn displays_blank_as_dot() {
        assert_eq!(GOAL.to_string(), "1 2 3\n4 5 6\n7 8 .\n");
    }
}
