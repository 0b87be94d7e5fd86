//! Error types for relation-to-join translation
//!
//! All translation errors are immediate, synchronous and non-retryable; they
//! abort translation at the hop where they are detected.

/// Result type alias for translation operations
pub type JoinResult<T> = Result<T, JoinError>;

/// Error types for relation-to-join translation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum JoinError {
    /// The named relation is not registered on the current entity
    #[error("Unknown relation '{relation}' on entity '{entity}'")]
    UnknownRelation { entity: String, relation: String },

    /// The relation kind cannot be translated into a join
    #[error("Unsupported relation. Currently supported: BelongsTo and HasOne")]
    UnsupportedRelation,

    /// A table alias was requested for a relation carrying extra constraints
    #[error("You cannot use table alias when your relation has extra joins or wheres.")]
    AliasConflict,

    /// Invalid schema registration
    #[error("Configuration error: {0}")]
    Configuration(String),
}
