use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a generation call could not produce a complete puzzle.
///
/// These are normal outcomes driven by the supplied word list, so they travel
/// inside result records rather than as `Err` values.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum GenerationFailure {
    #[error("need at least {required} unique words, got {supplied}")]
    InsufficientInput { required: usize, supplied: usize },

    #[error("anchor word {word} does not fit in a {grid_size}x{grid_size} grid")]
    UnplaceableAnchor { word: String, grid_size: usize },

    #[error("no valid arrangement found after {attempts} attempts")]
    NoSolvableAssignment { attempts: usize },

    #[error("time budget ran out after {attempts} attempts")]
    BudgetExhausted { attempts: usize },
}

/// Errors outside the generation engines: files, settings and user tokens.
#[derive(Debug, Error)]
pub enum VocabError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown difficulty '{0}' (expected easy, medium or hard)")]
    UnknownDifficulty(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_messages() {
        let failure = GenerationFailure::InsufficientInput {
            required: 6,
            supplied: 4,
        };
        assert_eq!(failure.to_string(), "need at least 6 unique words, got 4");

        let failure = GenerationFailure::UnplaceableAnchor {
            word: "EXTRAORDINARILY".to_string(),
            grid_size: 10,
        };
        assert_eq!(
            failure.to_string(),
            "anchor word EXTRAORDINARILY does not fit in a 10x10 grid"
        );
    }
}
