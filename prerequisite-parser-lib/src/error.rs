use thiserror::Error;

/// Structural anomalies found in catalog prose.
///
/// These are returned wrapped in an [`anyhow::Error`], and can be recovered with
/// `error.downcast_ref::<ParseError>()`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Several operands were found at the same nesting level without any "and"/"or"
    /// joining them, so there is no way of knowing which gate was intended.
    #[error("found {} operands with no connective between them: {}", operands.len(), operands.join(", "))]
    MissingConnective { operands: Vec<String> },
}
