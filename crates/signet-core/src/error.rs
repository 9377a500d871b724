//! Error types for header signature resolution.
//!
//! All errors here are raised while a resource method's signature is being
//! registered, never while serving a request. Any of them should abort the
//! registration of the resource method that produced it.

use thiserror::Error;

/// Result type alias using [`SignatureError`].
pub type SignatureResult<T> = Result<T, SignatureError>;

/// Registration-time error for header-bound parameters.
///
/// # Example
///
/// ```
/// use signet_core::SignatureError;
///
/// let err = SignatureError::invalid_declaration("readonly & int & string");
/// assert_eq!(
///     err.to_string(),
///     "invalid header param type 'readonly & int & string': only readonly intersection is allowed"
/// );
/// assert_eq!(err.error_code(), "INVALID_DECLARATION");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SignatureError {
    /// An intersection-typed header field combines more than a single type
    /// with the `readonly` marker.
    #[error("invalid header param type '{type_name}': only readonly intersection is allowed")]
    InvalidDeclaration {
        /// Display name of the declared type.
        type_name: String,
    },

    /// A header field resolved to a type the header decoder cannot produce.
    ///
    /// Only raised under strict validation.
    #[error("unsupported type '{type_name}' for header field '{field}': expected string, int, boolean, decimal, float or an array of those")]
    UnsupportedFieldType {
        /// Header key of the offending field.
        field: String,
        /// Display name of the resolved type.
        type_name: String,
    },

    /// Header parameters were already registered for this resource method.
    #[error("header parameters for resource '{resource}' are already registered")]
    DuplicateResource {
        /// The resource method identifier.
        resource: String,
    },
}

impl SignatureError {
    /// Creates an invalid declaration error for the named type.
    #[must_use]
    pub fn invalid_declaration(type_name: impl Into<String>) -> Self {
        Self::InvalidDeclaration {
            type_name: type_name.into(),
        }
    }

    /// Creates an unsupported field type error.
    #[must_use]
    pub fn unsupported_field_type(field: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self::UnsupportedFieldType {
            field: field.into(),
            type_name: type_name.into(),
        }
    }

    /// Creates a duplicate resource error.
    #[must_use]
    pub fn duplicate_resource(resource: impl Into<String>) -> Self {
        Self::DuplicateResource {
            resource: resource.into(),
        }
    }

    /// Returns the error code suitable for startup diagnostics.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidDeclaration { .. } => "INVALID_DECLARATION",
            Self::UnsupportedFieldType { .. } => "UNSUPPORTED_FIELD_TYPE",
            Self::DuplicateResource { .. } => "DUPLICATE_RESOURCE",
        }
    }
}
