use thiserror::Error;

/// Result type for registry construction and lookup.
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Errors produced by the action type registry.
///
/// Both variants are logic errors detectable from the static name list;
/// neither is transient and no retry is meaningful.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// The same symbolic name was declared twice. Surfaced at build time
    /// instead of silently overwriting the earlier entry.
    #[error("duplicate action type name: {name}")]
    DuplicateName {
        /// Name that appeared more than once.
        name: String,
    },
    /// A name was looked up that was never registered. The caller decides
    /// whether this is a programming bug or a rejected message.
    #[error("unknown action type name: {name}")]
    UnknownName {
        /// Name that failed the lookup.
        name: String,
    },
}
