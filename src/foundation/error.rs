/// Convenience result type used across uibounds.
pub type LayoutResult<T> = Result<T, LayoutError>;

/// Top-level error taxonomy used by layout APIs.
#[derive(thiserror::Error, Debug)]
pub enum LayoutError {
    /// Malformed layout declaration that cannot be resolved (e.g. fit-to-children without
    /// measurable children).
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Structural misuse of a bounds tree (unknown ids, ownership violations, reading
    /// unresolved nodes where resolution is required).
    #[error("tree error: {0}")]
    Tree(String),

    /// Invalid user-provided layout document data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing layout documents.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl LayoutError {
    /// Build a [`LayoutError::Configuration`] value.
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Build a [`LayoutError::Tree`] value.
    pub fn tree(msg: impl Into<String>) -> Self {
        Self::Tree(msg.into())
    }

    /// Build a [`LayoutError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`LayoutError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Whether this error stems from a malformed layout declaration.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }
}

impl From<serde_json::Error> for LayoutError {
    fn from(value: serde_json::Error) -> Self {
        Self::serde(value.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
