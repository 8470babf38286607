//! Socket adjacency law and the derived diagonal test
//!
//! Orthogonal compatibility is the sole primitive: two modules may sit across
//! a shared edge only when the sockets facing that edge carry equal codes.
//! Diagonal compatibility is not its own rule; a diagonal candidate is judged
//! through the two orthogonal cells it shares an edge with.

use crate::algorithm::domain::ModuleSet;
use crate::spatial::modules::{Direction, Module, ModuleRegistry};

/// Test whether `b` may sit adjacent to `a` in the given direction
///
/// True iff `a`'s socket facing `direction` equals `b`'s socket facing back.
/// Symmetric under the opposite mapping: swapping the operands and flipping
/// the direction never changes the answer.
pub const fn compatible_orthogonal(a: &Module, direction: Direction, b: &Module) -> bool {
    a.socket(direction) == b.socket(direction.opposite())
}

/// Test whether a diagonal candidate fits between two orthogonal neighbors
///
/// `vertical_domain` belongs to the cell sharing the candidate's row (the
/// origin's vertical neighbor); `horizontal_to_candidate` is the direction
/// from that cell to the candidate's cell. Likewise `horizontal_domain` and
/// `vertical_to_candidate` for the origin's horizontal neighbor. The check is
/// existential on each side: one compatible pairing per neighbor suffices.
pub fn diagonal_candidate_allowed(
    registry: &ModuleRegistry,
    candidate: &Module,
    vertical_domain: &ModuleSet,
    horizontal_to_candidate: Direction,
    horizontal_domain: &ModuleSet,
    vertical_to_candidate: Direction,
) -> bool {
    let beside_vertical = vertical_domain.iter().any(|index| {
        registry
            .get(index)
            .is_some_and(|module| compatible_orthogonal(module, horizontal_to_candidate, candidate))
    });

    if !beside_vertical {
        return false;
    }

    horizontal_domain.iter().any(|index| {
        registry
            .get(index)
            .is_some_and(|module| compatible_orthogonal(module, vertical_to_candidate, candidate))
    })
}
