//! Colored console rendering of a grid snapshot.

use crossterm::{
    queue,
    style::{Print, ResetColor, SetForegroundColor},
};
use gridlock_core::{Grid, Position, BOX, SIZE};
use std::io::{self, Write};

use crate::theme::Theme;

const HEAVY_RULE: &str = "+===+===+===+===+===+===+===+===+===+";
const LIGHT_RULE: &str = "+---+---+---+---+---+---+---+---+---+";

/// Write `grid` to `out` with box borders and one color per digit.
pub fn render_grid(out: &mut impl Write, grid: &Grid) -> io::Result<()> {
    let theme = Theme::default();

    for row in 0..SIZE {
        queue_rule(out, &theme, row % BOX == 0)?;

        for col in 0..SIZE {
            let heavy = col % BOX == 0;
            queue!(
                out,
                SetForegroundColor(if heavy { theme.box_border } else { theme.border }),
                Print(if heavy { "║" } else { "│" })
            )?;

            match grid.get(Position::new(row, col)) {
                Some(digit) => queue!(
                    out,
                    SetForegroundColor(theme.digit(digit)),
                    Print(format!(" {} ", digit))
                )?,
                None => queue!(out, SetForegroundColor(theme.empty), Print(" . "))?,
            }
        }
        queue!(
            out,
            SetForegroundColor(theme.box_border),
            Print("║"),
            ResetColor,
            Print("\n")
        )?;
    }
    queue_rule(out, &theme, true)?;
    out.flush()
}

fn queue_rule(out: &mut impl Write, theme: &Theme, heavy: bool) -> io::Result<()> {
    queue!(
        out,
        SetForegroundColor(if heavy { theme.box_border } else { theme.border }),
        Print(if heavy { HEAVY_RULE } else { LIGHT_RULE }),
        ResetColor,
        Print("\n")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_contains_digits_and_holes() {
        let mut grid = Grid::empty();
        grid.set(Position::new(0, 0), 5);
        grid.set(Position::new(8, 8), 9);

        let mut out = Vec::new();
        render_grid(&mut out, &grid).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains(" 5 "));
        assert!(text.contains(" 9 "));
        assert!(text.contains(" . "));
    }

    #[test]
    fn test_render_draws_all_rules() {
        let mut out = Vec::new();
        render_grid(&mut out, &Grid::empty()).unwrap();
        let text = String::from_utf8(out).unwrap();

        // 9 cell rows, a rule above each plus the closing one.
        assert_eq!(text.matches(HEAVY_RULE).count(), 4);
        assert_eq!(text.matches(LIGHT_RULE).count(), 6);
        assert_eq!(text.lines().count(), 19);
    }
}
