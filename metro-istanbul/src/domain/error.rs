//! Domain error types.
//!
//! These errors represent identifiers that fall outside the set the API is
//! known to use. They are distinct from transport and envelope errors.

/// Domain-level errors for identifier parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// Numeric line id not in the known set
    #[error("unknown line id: {0}")]
    UnknownLineId(u32),

    /// Line code (e.g. "M2") not in the known set
    #[error("unknown line code: {0:?}")]
    UnknownLineCode(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = DomainError::UnknownLineId(18);
        assert_eq!(err.to_string(), "unknown line id: 18");

        let err = DomainError::UnknownLineCode("M99".into());
        assert_eq!(err.to_string(), "unknown line code: \"M99\"");
    }
}
