//! Common error infrastructure for game-core.
//!
//! Character creation and equipping are total: every factory is a fixed
//! constructor and `equip` borrows its factory, so an absent factory cannot be
//! expressed. Errors only arise when selecting factories by name through the
//! [`FactoryRegistry`](crate::FactoryRegistry).

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: unknown class name, unknown theme name
    Validation,

    /// Internal error - the registry was assembled inconsistently.
    ///
    /// Examples: two factories registered under the same key
    Internal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    /// Returns true if this error indicates a wiring bug rather than bad input.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Common trait for all game-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on who has to fix it, not on impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Errors raised while registering or selecting factories by name.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("no character factory registered for class '{0}'")]
    UnknownClass(String),

    #[error("no equipment factory registered for theme '{0}'")]
    UnknownTheme(String),

    #[error("character class '{0}' is already registered")]
    DuplicateClass(String),

    #[error("equipment theme '{0}' is already registered")]
    DuplicateTheme(String),
}

impl GameError for RegistryError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::UnknownClass(_) | Self::UnknownTheme(_) => ErrorSeverity::Validation,
            Self::DuplicateClass(_) | Self::DuplicateTheme(_) => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownClass(_) => "REGISTRY_UNKNOWN_CLASS",
            Self::UnknownTheme(_) => "REGISTRY_UNKNOWN_THEME",
            Self::DuplicateClass(_) => "REGISTRY_DUPLICATE_CLASS",
            Self::DuplicateTheme(_) => "REGISTRY_DUPLICATE_THEME",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_failures_are_validation_errors() {
        let err = RegistryError::UnknownClass("paladin".into());
        assert_eq!(err.severity(), ErrorSeverity::Validation);
        assert!(!err.severity().is_internal());
        assert_eq!(err.error_code(), "REGISTRY_UNKNOWN_CLASS");
        assert_eq!(
            err.to_string(),
            "no character factory registered for class 'paladin'"
        );
    }

    #[test]
    fn duplicates_are_internal_errors() {
        let err = RegistryError::DuplicateTheme("magic".into());
        assert!(err.severity().is_internal());
        assert_eq!(err.severity().as_str(), "internal");
        assert_eq!(err.error_code(), "REGISTRY_DUPLICATE_THEME");
    }
}
