//! Plain-text module catalog loading
//!
//! Catalog format, one module per line:
//!
//! ```text
//! # identity, then socket codes facing up, right, down, left
//! grass  1 1 1 1
//! road_h 1 2 1 2
//! ```
//!
//! Blank lines and `#` comments are ignored. The parser collects whatever
//! socket codes a line carries; the registry enforces the exactly-4 rule so
//! malformed definitions are reported as load failures, not parse failures.

use std::path::Path;

use crate::io::error::{GenerationError, Result};
use crate::spatial::modules::{ModuleDefinition, SocketCode};

/// Read and parse a catalog file into raw module definitions
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read
/// - Any line fails to parse (see [`parse_definitions`])
pub fn load_definitions(path: &Path) -> Result<Vec<ModuleDefinition>> {
    let text = std::fs::read_to_string(path).map_err(|source| GenerationError::CatalogRead {
        path: path.to_path_buf(),
        source,
    })?;

    parse_definitions(&text, path)
}

/// Parse catalog text into raw module definitions
///
/// # Errors
///
/// Returns an error if a socket code is not an unsigned integer or a line
/// names a duplicate identity.
pub fn parse_definitions(text: &str, path: &Path) -> Result<Vec<ModuleDefinition>> {
    let mut definitions: Vec<ModuleDefinition> = Vec::new();

    for (index, raw_line) in text.lines().enumerate() {
        let line = raw_line
            .split('#')
            .next()
            .unwrap_or_default()
            .trim();
        if line.is_empty() {
            continue;
        }

        let mut tokens = line.split_whitespace();
        let Some(identity) = tokens.next() else {
            continue;
        };

        if definitions
            .iter()
            .any(|definition| definition.identity == identity)
        {
            return Err(GenerationError::CatalogParse {
                path: path.to_path_buf(),
                line: index + 1,
                reason: format!("duplicate module identity '{identity}'"),
            });
        }

        let mut sockets: Vec<SocketCode> = Vec::with_capacity(4);
        for token in tokens {
            let code = token
                .parse::<SocketCode>()
                .map_err(|_| GenerationError::CatalogParse {
                    path: path.to_path_buf(),
                    line: index + 1,
                    reason: format!("socket '{token}' is not an unsigned integer"),
                })?;
            sockets.push(code);
        }

        definitions.push(ModuleDefinition {
            identity: identity.to_string(),
            sockets,
        });
    }

    Ok(definitions)
}
