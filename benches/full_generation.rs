//! Performance measurement for complete grid generation

// Criterion macros generate undocumented functions
#![allow(missing_docs)]

use criterion::{Criterion, criterion_group, criterion_main};
use socketgrid::algorithm::solver::{Generator, SolverConfig};
use socketgrid::spatial::modules::{ModuleDefinition, ModuleRegistry};
use std::hint::black_box;

fn road_registry() -> ModuleRegistry {
    let definitions = vec![
        ModuleDefinition {
            identity: "grass".to_string(),
            sockets: vec![1, 1, 1, 1],
        },
        ModuleDefinition {
            identity: "road_h".to_string(),
            sockets: vec![1, 2, 1, 2],
        },
        ModuleDefinition {
            identity: "road_v".to_string(),
            sockets: vec![2, 1, 2, 1],
        },
        ModuleDefinition {
            identity: "cross".to_string(),
            sockets: vec![2, 2, 2, 2],
        },
    ];
    ModuleRegistry::load(definitions).unwrap_or_else(|_| unreachable!("catalog is well-formed"))
}

/// Measures time to solve a 24x24 grid including regeneration retries
fn bench_generate_24x24(c: &mut Criterion) {
    let registry = road_registry();

    c.bench_function("generate_24x24", |b| {
        b.iter(|| {
            let config = SolverConfig::new(24, 24, 256);
            let Ok(mut generator) = Generator::new(&registry, config, 12345) else {
                return;
            };
            black_box(generator.generate().ok());
        });
    });
}

criterion_group!(benches, bench_generate_24x24);
criterion_main!(benches);
