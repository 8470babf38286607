//! Validates catalog parsing and registry load-time checks

use socketgrid::GenerationError;
use socketgrid::io::catalog::parse_definitions;
use socketgrid::spatial::modules::{ModuleDefinition, ModuleRegistry};
use std::path::Path;

#[test]
fn test_parse_skips_comments_and_blank_lines() {
    let text = "\n# wall pieces\ngrass 1 1 1 1\n\nroad_h 1 2 1 2  # east-west road\n";
    let definitions = parse_definitions(text, Path::new("walls.modules")).unwrap();

    assert_eq!(definitions.len(), 2);
    let grass = definitions.first().unwrap();
    assert_eq!(grass.identity, "grass");
    assert_eq!(grass.sockets, vec![1, 1, 1, 1]);
    let road = definitions.get(1).unwrap();
    assert_eq!(road.identity, "road_h");
    assert_eq!(road.sockets, vec![1, 2, 1, 2]);
}

#[test]
fn test_parse_rejects_non_integer_socket() {
    let text = "grass 1 1 x 1\n";
    match parse_definitions(text, Path::new("bad.modules")) {
        Err(GenerationError::CatalogParse { line, reason, .. }) => {
            assert_eq!(line, 1);
            assert!(reason.contains('x'));
        }
        other => unreachable!("Expected CatalogParse, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_parse_rejects_duplicate_identity() {
    let text = "grass 1 1 1 1\ngrass 2 2 2 2\n";
    match parse_definitions(text, Path::new("dup.modules")) {
        Err(GenerationError::CatalogParse { line, .. }) => assert_eq!(line, 2),
        other => unreachable!("Expected CatalogParse, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_registry_rejects_wrong_socket_count() {
    let definitions = vec![
        ModuleDefinition {
            identity: "ok".to_string(),
            sockets: vec![1, 1, 1, 1],
        },
        ModuleDefinition {
            identity: "short".to_string(),
            sockets: vec![1, 2, 3],
        },
    ];

    match ModuleRegistry::load(definitions) {
        Err(GenerationError::InvalidModuleDefinition {
            identity,
            socket_count,
        }) => {
            assert_eq!(identity, "short");
            assert_eq!(socket_count, 3);
        }
        other => unreachable!("Expected InvalidModuleDefinition, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_registry_rejects_empty_catalog() {
    assert!(matches!(
        ModuleRegistry::load(Vec::new()),
        Err(GenerationError::EmptyCatalog)
    ));
}

#[test]
fn test_registry_preserves_load_order() {
    let definitions = vec![
        ModuleDefinition {
            identity: "second-loaded-first".to_string(),
            sockets: vec![9, 9, 9, 9],
        },
        ModuleDefinition {
            identity: "first-loaded-second".to_string(),
            sockets: vec![1, 1, 1, 1],
        },
    ];

    let registry = ModuleRegistry::load(definitions).unwrap();
    assert_eq!(registry.len(), 2);
    assert_eq!(registry.get(0).unwrap().identity(), "second-loaded-first");
    assert_eq!(registry.get(1).unwrap().identity(), "first-loaded-second");
}
