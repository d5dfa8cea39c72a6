//! Distance-to-goal estimate: Manhattan distance plus a row-only linear
//! conflict penalty.
//!
//! Column conflicts are not counted, so the penalty is smaller than the
//! textbook two-axis version. Solver output depends on this exact score.

use crate::puzzle::{Configuration, SIZE};

/// Goal cell of a non-blank tile.
fn goal_position(value: u8) -> (usize, usize) {
    let v = (value - 1) as usize;
    (v / SIZE, v % SIZE)
}

pub fn score(c: &Configuration) -> u32 {
    manhattan_distance(c) + 2 * linear_conflicts(c)
}

/// Sum over all tiles of row offset plus column offset from the goal cell.
pub fn manhattan_distance(c: &Configuration) -> u32 {
    let mut distance = 0;
    for (r, row) in c.cells().iter().enumerate() {
        for (col, &value) in row.iter().enumerate() {
            if value != 0 {
                let (tr, tc) = goal_position(value);
                distance += (r.abs_diff(tr) + col.abs_diff(tc)) as u32;
            }
        }
    }
    distance
}

/// Pairs of tiles sitting in their goal row in reversed order, counted per
/// row.
pub fn linear_conflicts(c: &Configuration) -> u32 {
    let mut conflicts = 0;
    for (r, row) in c.cells().iter().enumerate() {
        let tiles: Vec<u8> = row.iter().copied().filter(|&v| v != 0).collect();
        for (i, &earlier) in tiles.iter().enumerate() {
            for &later in &tiles[i + 1..] {
                if goal_position(earlier).0 == r && goal_position(later).0 == r && earlier > later
                {
                    conflicts += 1;
                }
            }
        }
    }
    conflicts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::GOAL;

    fn board(s: &str) -> Configuration {
        s.parse().unwrap()
    }

    #[test]
    fn goal_scores_zero() {
        assert_eq!(score(&GOAL), 0);
    }

    #[test]
    fn one_move_away() {
        let c = board("123456708");
        assert_eq!(manhattan_distance(&c), 1);
        assert_eq!(linear_conflicts(&c), 0);
        assert_eq!(score(&c), 1);
    }

    #[test]
    fn reversed_row_counts_every_pair() {
        // 3 2 1 in the top row: pairs (3,2) (3,1) (2,1).
        let c = board("321456780");
        assert_eq!(linear_conflicts(&c), 3);
        assert_eq!(manhattan_distance(&c), 4);
        assert_eq!(score(&c), 10);
    }

    #[test]
    fn ignores_tiles_outside_their_goal_row() {
        // 4 sits in row 0 ahead of 2 but belongs to row 1.
        let c = board("412356780");
        assert_eq!(linear_conflicts(&c), 0);
    }

    #[test]
    fn blank_does_not_separate_pairs() {
        let c = board("203145786");
        // Row 0 holds 2 . 3: in order, no conflict. Row 1 holds 1 4 5: only
        // 4 and 5 are home, and in order.
        assert_eq!(linear_conflicts(&c), 0);

        let c = board("302145786");
        assert_eq!(linear_conflicts(&c), 1);
    }

    #[test]
    fn column_conflicts_are_not_counted() {
        // 7 above 4 in column 0 would be a column conflict.
        let c = board("723156480");
        assert_eq!(linear_conflicts(&c), 0);
    }
}
