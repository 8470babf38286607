//! Minimum-remaining-candidates cell selection

use crate::spatial::grid::Grid;

/// Pick the next cell to collapse
///
/// Scans all cells in row-major order and returns the undeveloped cell with
/// the strictly smallest computed domain; the first cell found wins ties.
/// Unexplored cells are never candidates. Empty and singleton domains are:
/// an empty domain selected here is the contradiction the collapse step
/// detects, and a collapsed-but-undeveloped cell still needs its choice
/// propagated. Returns `None` once every domain-bearing cell is developed.
pub fn select_next_cell(grid: &Grid) -> Option<(usize, usize)> {
    let mut best: Option<(usize, usize, usize)> = None;

    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            let Some(cell) = grid.cell(row, col) else {
                continue;
            };
            if cell.developed {
                continue;
            }
            let Some(domain) = cell.domain.as_ref() else {
                continue;
            };

            let size = domain.len();
            match best {
                Some((_, _, best_size)) if size >= best_size => {}
                _ => best = Some((row, col, size)),
            }
        }
    }

    best.map(|(row, col, _)| (row, col))
}
