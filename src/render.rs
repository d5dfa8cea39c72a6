//! Terminal rendering for configurations and solution paths.

use crossterm::style::Stylize;

use crate::puzzle::{Configuration, SIZE};
use crate::solver::moves_for_path;

/// The board with tiles on their goal cell in green, misplaced tiles in
/// yellow and the blank dimmed.
pub fn styled_board(c: &Configuration) -> String {
    let mut out = String::new();
    for r in 0..SIZE {
        for col in 0..SIZE {
            if col > 0 {
                out.push(' ');
            }
            let value = c.get(r, col);
            let cell = if value == 0 {
                ".".dim().to_string()
            } else if (value - 1) as usize == r * SIZE + col {
                value.to_string().green().to_string()
            } else {
                value.to_string().yellow().bold().to_string()
            };
            out.push_str(&cell);
        }
        out.push('\n');
    }
    out
}

/// Every step of `path`, each board preceded by the move that produced it.
pub fn styled_path(path: &[Configuration]) -> String {
    let mut out = String::new();
    let Some(first) = path.first() else {
        return out;
    };
    out.push_str(&format!("{}\n", "Start".bold()));
    out.push_str(&styled_board(first));

    for (step, (movement, board)) in moves_for_path(path).iter().zip(&path[1..]).enumerate() {
        out.push_str(&format!("\n{} {}\n", format!("#{}", step + 1).bold(), movement));
        out.push_str(&styled_board(board));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::GOAL;

    fn strip_ansi(s: &str) -> String {
        let mut out = String::new();
        let mut chars = s.chars();
        while let Some(ch) = chars.next() {
            if ch == '\x1b' {
                for esc in chars.by_ref() {
                    if esc == 'm' {
                        break;
                    }
                }
            } else {
                out.push(ch);
            }
        }
        out
    }

    #[test]
    fn board_text_matches_display() {
        let c: Configuration = "123405786".parse().unwrap();
        assert_eq!(strip_ansi(&styled_board(&c)), c.to_string());
        assert_eq!(strip_ansi(&styled_board(&GOAL)), GOAL.to_string());
    }

    #[test]
    fn path_lists_every_move() {
        let start: Configuration = "123456078".parse().unwrap();
        let path = crate::solver::solve(start);
        let rendered = styled_path(&path);
        assert_eq!(rendered.matches("Right").count(), 2);
        assert!(styled_path(&[]).is_empty());
    }
}
