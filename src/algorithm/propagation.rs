//! One-hop domain propagation from a freshly collapsed cell
//!
//! Propagation reaches exactly one cell in every direction: the four edge
//! neighbors first, then the four corner neighbors. Corner cells are never
//! narrowed against the origin directly; they are constrained through the two
//! edge neighbors they touch, which is why the diagonal pass must run after
//! the orthogonal pass for the same origin. Propagation itself cannot fail:
//! it only narrows or initializes domains, and an empty result is picked up
//! at the next collapse step.

use crate::algorithm::compatibility::{compatible_orthogonal, diagonal_candidate_allowed};
use crate::algorithm::domain::ModuleSet;
use crate::spatial::grid::Grid;
use crate::spatial::modules::{Direction, ModuleRegistry};

/// Corner offsets in propagation order, as (row delta, col delta)
const DIAGONAL_OFFSETS: [(i32, i32); 4] = [(-1, 1), (1, 1), (1, -1), (-1, -1)];

/// Narrow or initialize the four edge neighbors of a collapsed cell
///
/// For each in-bounds neighbor:
/// - a domain larger than one keeps only modules whose facing socket matches
///   the chosen module
/// - an unexplored cell is initialized to every registry module whose facing
///   socket matches
/// - a domain of size one or zero is left untouched; already-collapsed
///   neighbors are never re-validated against the new choice
pub fn propagate_orthogonal(
    grid: &mut Grid,
    registry: &ModuleRegistry,
    origin: (usize, usize),
    chosen: usize,
) {
    let Some(chosen_module) = registry.get(chosen) else {
        return;
    };

    for direction in Direction::ALL {
        let (row_delta, col_delta) = direction.offset();
        let target_row = origin.0 as i32 + row_delta;
        let target_col = origin.1 as i32 + col_delta;
        if !grid.in_bounds(target_row, target_col) {
            continue;
        }

        let Some(cell) = grid.cell_mut(target_row as usize, target_col as usize) else {
            continue;
        };

        match cell.domain.as_mut() {
            Some(domain) if domain.len() > 1 => {
                domain.retain(|index| {
                    registry
                        .get(index)
                        .is_some_and(|module| compatible_orthogonal(chosen_module, direction, module))
                });
            }
            Some(_) => {}
            None => {
                let mut domain = ModuleSet::new(registry.len());
                for (index, module) in registry.all().iter().enumerate() {
                    if compatible_orthogonal(chosen_module, direction, module) {
                        domain.insert(index);
                    }
                }
                cell.domain = Some(domain);
            }
        }
    }
}

/// Recompute or initialize the four corner neighbors of a collapsed cell
///
/// Each corner is constrained jointly by the vertical neighbor in its row and
/// the horizontal neighbor in its column, both of which the orthogonal pass
/// has already updated. A corner candidate survives when some member of each
/// adjacent domain accepts it. Corners already at size one or zero are left
/// untouched.
pub fn propagate_diagonal(grid: &mut Grid, registry: &ModuleRegistry, origin: (usize, usize)) {
    for (row_delta, col_delta) in DIAGONAL_OFFSETS {
        let target_row = origin.0 as i32 + row_delta;
        let target_col = origin.1 as i32 + col_delta;
        if !grid.in_bounds(target_row, target_col) {
            continue;
        }
        let target = (target_row as usize, target_col as usize);

        // Both edge neighbors are in bounds whenever the corner is
        let vertical_domain = grid
            .cell((origin.0 as i32 + row_delta) as usize, origin.1)
            .and_then(|cell| cell.domain.clone());
        let horizontal_domain = grid
            .cell(origin.0, (origin.1 as i32 + col_delta) as usize)
            .and_then(|cell| cell.domain.clone());
        let (Some(vertical_domain), Some(horizontal_domain)) =
            (vertical_domain, horizontal_domain)
        else {
            continue;
        };

        let horizontal_to_candidate = if col_delta > 0 {
            Direction::Right
        } else {
            Direction::Left
        };
        let vertical_to_candidate = if row_delta > 0 {
            Direction::Down
        } else {
            Direction::Up
        };

        let current = grid.cell(target.0, target.1).map(|cell| cell.domain.clone());
        let replacement = match current {
            Some(Some(domain)) if domain.len() > 1 => {
                let mut narrowed = ModuleSet::new(registry.len());
                for index in domain.iter() {
                    let allowed = registry.get(index).is_some_and(|candidate| {
                        diagonal_candidate_allowed(
                            registry,
                            candidate,
                            &vertical_domain,
                            horizontal_to_candidate,
                            &horizontal_domain,
                            vertical_to_candidate,
                        )
                    });
                    if allowed {
                        narrowed.insert(index);
                    }
                }
                Some(narrowed)
            }
            Some(None) => {
                let mut initialized = ModuleSet::new(registry.len());
                for (index, candidate) in registry.all().iter().enumerate() {
                    let allowed = diagonal_candidate_allowed(
                        registry,
                        candidate,
                        &vertical_domain,
                        horizontal_to_candidate,
                        &horizontal_domain,
                        vertical_to_candidate,
                    );
                    if allowed {
                        initialized.insert(index);
                    }
                }
                Some(initialized)
            }
            _ => None,
        };

        if let Some(domain) = replacement {
            if let Some(cell) = grid.cell_mut(target.0, target.1) {
                cell.domain = Some(domain);
            }
        }
    }
}
