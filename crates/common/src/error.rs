/// Errors reported by sequence, generator and range-map operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SeqError {
    /// An argument was outside the domain the operation accepts
    /// (zero divisor, inverted bounds, ...).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// The operation needs at least one element and the source had none.
    #[error("sequence was empty")]
    EmptySequence,
}

impl SeqError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}

pub type Result<T, E = SeqError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_argument_message() {
        let err = SeqError::invalid("divisions must be at least 1");
        assert_eq!(
            err.to_string(),
            "invalid argument: divisions must be at least 1"
        );
    }

    #[test]
    fn empty_sequence_message() {
        assert_eq!(SeqError::EmptySequence.to_string(), "sequence was empty");
    }
}
