//! Error types for generation and export operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all generation operations
///
/// Configuration problems are fatal and raised once at generator
/// construction; contradictions during an attempt are recovered internally
/// and never appear here.
#[derive(Debug)]
pub enum GenerationError {
    /// Generation parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// The tile alphabet has no members
    EmptyTileSet,

    /// An adjacency row permits no neighbor at all
    ///
    /// Such a table can never produce a valid collapse, so it is rejected at
    /// construction time rather than discovered mid-run.
    EmptyAdjacencyRow {
        /// Alphabet index of the unmappable tile
        tile: usize,
    },

    /// The configured restart cap was exhausted before an attempt succeeded
    ///
    /// Only reachable when an attempt limit is explicitly set; the default
    /// configuration retries without bound.
    AttemptLimitReached {
        /// The configured cap
        limit: usize,
    },

    /// Failed to save a rendered grid to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
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
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::EmptyTileSet => {
                write!(f, "Tile set must contain at least one tile kind")
            }
            Self::EmptyAdjacencyRow { tile } => {
                write!(
                    f,
                    "Adjacency row for tile {tile} is empty; no neighbor can ever satisfy it"
                )
            }
            Self::AttemptLimitReached { limit } => {
                write!(f, "No attempt succeeded within the configured limit of {limit}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
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
        }
    }
}

impl std::error::Error for GenerationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for generation results
pub type Result<T> = std::result::Result<T, GenerationError>;

impl From<std::io::Error> for GenerationError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

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
    fn test_invalid_parameter_display() {
        let err = invalid_parameter("width", &0, &"must be positive");
        assert_eq!(
            err.to_string(),
            "Invalid parameter 'width' = '0': must be positive"
        );
    }

    #[test]
    fn test_empty_adjacency_row_names_tile() {
        let err = GenerationError::EmptyAdjacencyRow { tile: 2 };
        assert!(err.to_string().contains("tile 2"));
    }
}
