//! Error types for catalog loading, configuration, and generation

use std::fmt;
use std::path::PathBuf;

/// Main error type for all generation operations
#[derive(Debug)]
pub enum GenerationError {
    /// A module definition does not carry exactly 4 socket codes
    InvalidModuleDefinition {
        /// Identity of the offending definition
        identity: String,
        /// Number of socket codes it actually carried
        socket_count: usize,
    },

    /// The module catalog holds no definitions at all
    EmptyCatalog,

    /// Grid dimensions cannot hold the configured seed cell
    OutOfBoundsConfiguration {
        /// Requested grid height
        height: usize,
        /// Requested grid width
        width: usize,
        /// Seed cell that does not fit
        seed_cell: (usize, usize),
    },

    /// Every allowed generation attempt was abandoned
    GenerationFailed {
        /// Number of attempts consumed
        attempts: usize,
    },

    /// An attempt ran past its step budget without resolving
    StepLimitExceeded {
        /// Attempt number that overran
        attempt: usize,
        /// Steps taken when the budget tripped
        steps: usize,
    },

    /// Failed to read a catalog file from the filesystem
    CatalogRead {
        /// Path to the catalog file
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// A catalog line could not be parsed
    CatalogParse {
        /// Path to the catalog file
        path: PathBuf,
        /// 1-based line number of the bad entry
        line: usize,
        /// Description of what went wrong
        reason: String,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Failed to save the rendered grid to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidModuleDefinition {
                identity,
                socket_count,
            } => {
                write!(
                    f,
                    "Module '{identity}' has {socket_count} sockets (exactly 4 required)"
                )
            }
            Self::EmptyCatalog => {
                write!(f, "Module catalog contains no definitions")
            }
            Self::OutOfBoundsConfiguration {
                height,
                width,
                seed_cell,
            } => {
                write!(
                    f,
                    "Grid {height}x{width} cannot hold seed cell ({}, {})",
                    seed_cell.0, seed_cell.1
                )
            }
            Self::GenerationFailed { attempts } => {
                write!(f, "Generation failed after {attempts} attempts")
            }
            Self::StepLimitExceeded { attempt, steps } => {
                write!(
                    f,
                    "Attempt {attempt} exceeded its step budget at {steps} steps"
                )
            }
            Self::CatalogRead { path, source } => {
                write!(f, "Failed to read catalog '{}': {source}", path.display())
            }
            Self::CatalogParse { path, line, reason } => {
                write!(
                    f,
                    "Catalog '{}' line {line}: {reason}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
        }
    }
}

impl std::error::Error for GenerationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::CatalogRead { source, .. } | Self::FileSystem { source, .. } => Some(source),
            Self::ImageExport { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for generation results
pub type Result<T> = std::result::Result<T, GenerationError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> GenerationError {
    GenerationError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_carries_context() {
        let err = GenerationError::CatalogParse {
            path: PathBuf::from("walls.modules"),
            line: 7,
            reason: "socket 'x' is not an integer".to_string(),
        };
        let rendered = err.to_string();
        assert!(rendered.contains("walls.modules"));
        assert!(rendered.contains("line 7"));
    }

    #[test]
    fn test_invalid_parameter_helper() {
        let err = invalid_parameter("max_attempts", &0, &"must be positive");
        match err {
            GenerationError::InvalidParameter {
                parameter, value, ..
            } => {
                assert_eq!(parameter, "max_attempts");
                assert_eq!(value, "0");
            }
            _ => unreachable!("Expected InvalidParameter error type"),
        }
    }
}
