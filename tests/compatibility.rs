//! Validates the socket adjacency law and the derived diagonal test

use socketgrid::algorithm::compatibility::{compatible_orthogonal, diagonal_candidate_allowed};
use socketgrid::algorithm::domain::ModuleSet;
use socketgrid::spatial::modules::{Direction, ModuleDefinition, ModuleRegistry};

fn registry(modules: &[(&str, [u32; 4])]) -> ModuleRegistry {
    let definitions = modules
        .iter()
        .map(|(identity, sockets)| ModuleDefinition {
            identity: (*identity).to_string(),
            sockets: sockets.to_vec(),
        })
        .collect();
    ModuleRegistry::load(definitions).unwrap()
}

#[test]
fn test_opposite_direction_mapping() {
    assert_eq!(Direction::Up.opposite(), Direction::Down);
    assert_eq!(Direction::Right.opposite(), Direction::Left);
    assert_eq!(Direction::Down.opposite(), Direction::Up);
    assert_eq!(Direction::Left.opposite(), Direction::Right);

    for direction in Direction::ALL {
        assert_eq!(direction.opposite().opposite(), direction);
    }
}

#[test]
fn test_orthogonal_matches_on_equal_facing_sockets() {
    let registry = registry(&[("a", [1, 1, 1, 1]), ("b", [1, 2, 1, 2])]);
    let a = registry.get(0).unwrap();
    let b = registry.get(1).unwrap();

    // Vertical sockets all carry 1, horizontal sockets differ
    assert!(compatible_orthogonal(a, Direction::Up, b));
    assert!(compatible_orthogonal(a, Direction::Down, b));
    assert!(!compatible_orthogonal(a, Direction::Right, b));
    assert!(!compatible_orthogonal(a, Direction::Left, b));
}

// Symmetry under the opposite mapping is what makes one-sided propagation
// sound; verified by flipping an operand order in compatible_orthogonal
#[test]
fn test_socket_symmetry() {
    let registry = registry(&[
        ("a", [1, 1, 1, 1]),
        ("b", [1, 2, 1, 2]),
        ("c", [3, 4, 5, 6]),
    ]);

    for x in registry.all() {
        for y in registry.all() {
            for direction in Direction::ALL {
                assert_eq!(
                    compatible_orthogonal(x, direction, y),
                    compatible_orthogonal(y, direction.opposite(), x),
                );
            }
        }
    }
}

#[test]
fn test_diagonal_requires_a_match_on_both_sides() {
    let registry = registry(&[("a", [1, 1, 1, 1]), ("b", [2, 2, 2, 2])]);
    let a = registry.get(0).unwrap();

    let only_a = ModuleSet::singleton(registry.len(), 0);
    let only_b = ModuleSet::singleton(registry.len(), 1);

    // Candidate `a` beside an all-2 vertical neighbor has no horizontal pairing
    assert!(!diagonal_candidate_allowed(
        &registry,
        a,
        &only_b,
        Direction::Right,
        &only_a,
        Direction::Up,
    ));
    assert!(diagonal_candidate_allowed(
        &registry,
        a,
        &only_a,
        Direction::Right,
        &only_a,
        Direction::Up,
    ));
}

#[test]
fn test_diagonal_is_existential_not_universal() {
    let registry = registry(&[("a", [1, 1, 1, 1]), ("b", [2, 2, 2, 2])]);
    let a = registry.get(0).unwrap();

    let mut mixed = ModuleSet::new(registry.len());
    mixed.insert(0);
    mixed.insert(1);

    // One compatible member per adjacent domain is enough
    assert!(diagonal_candidate_allowed(
        &registry,
        a,
        &mixed,
        Direction::Right,
        &mixed,
        Direction::Up,
    ));
}
