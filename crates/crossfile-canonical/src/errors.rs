use thiserror::Error;

/// Errors raised when resolving configured type names.
#[derive(Error, Debug)]
pub enum ResolveError {
    /// The configured name matches no registered property type.
    #[error("no such property type: '{name}'")]
    UnknownType {
        /// Name as supplied by the field schema, trimmed.
        name: String,
    },
}
