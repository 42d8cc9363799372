use crate::FieldPath;

/// Error type for form editing and submission.
#[derive(Debug, thiserror::Error)]
pub enum FormError {
    /// Type identifier that is not in the registry.
    #[error("Invalid form item type: {0}")]
    InvalidType(String),

    /// Editor operation addressed an item that does not exist.
    #[error("Item index {index} out of range (form has {len} items)")]
    IndexOutOfRange { index: usize, len: usize },

    /// The item dialog was confirmed while closed.
    #[error("No item dialog is open")]
    NoDialog,

    /// A required field is missing or malformed.
    #[error("{field}: {message}")]
    UserInput { field: FieldPath, message: String },

    /// The record store failed.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl FormError {
    /// Create a user input error for the given field.
    pub fn user_input(field: impl Into<FieldPath>, message: impl Into<String>) -> Self {
        Self::UserInput {
            field: field.into(),
            message: message.into(),
        }
    }

    /// The field a user input error refers to.
    pub fn field(&self) -> Option<&FieldPath> {
        match self {
            Self::UserInput { field, .. } => Some(field),
            _ => None,
        }
    }

    /// Check if this error should be shown next to a form field.
    pub fn is_user_input(&self) -> bool {
        matches!(self, Self::UserInput { .. })
    }
}

/// Error type for record store and key-value backends.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error in {context}: {source}")]
    Json {
        context: String,
        source: serde_json::Error,
    },

    /// Writing the value would exceed the backend's capacity.
    #[error("Storage quota exceeded: {requested} bytes requested, limit is {limit}")]
    QuotaExceeded { limit: usize, requested: usize },

    /// A previous writer panicked while holding the store lock.
    #[error("Store lock poisoned")]
    Poisoned,

    /// Backend-specific failure.
    #[error("Backend error: {0}")]
    Backend(#[from] anyhow::Error),
}

impl StorageError {
    /// Create a JSON error with context.
    pub fn json(context: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Json {
            context: context.into(),
            source,
        }
    }

    /// Create a backend error from any error type.
    pub fn backend(err: impl Into<anyhow::Error>) -> Self {
        Self::Backend(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_input_display() {
        let err = FormError::user_input("items.0.name", "Please enter an item name");
        assert_eq!(err.to_string(), "items.0.name: Please enter an item name");
        assert_eq!(err.field().map(FieldPath::as_str), Some("items.0.name"));
        assert!(err.is_user_input());
    }

    #[test]
    fn storage_error_is_transparent() {
        let err: FormError = StorageError::QuotaExceeded {
            limit: 10,
            requested: 20,
        }
        .into();
        assert!(err.to_string().starts_with("Storage quota exceeded"));
        assert!(!err.is_user_input());
    }
}
