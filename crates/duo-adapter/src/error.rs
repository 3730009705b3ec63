//! Command error taxonomy
//!
//! Every command handler returns `Result<_, CommandError>`; the failure
//! value carries its kind in the variant and a human-readable message in the
//! payload. Only the transport loop turns a `CommandError` into wire text -
//! nothing below it ever writes to the output stream.

/// Failure of a single protocol command.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    /// Wrong argument count or type, unrecognized color letter,
    /// unsupported game name
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Malformed move text, or a well-formed coordinate set that matches
    /// no legal move
    #[error("invalid move: {0}")]
    InvalidMove(String),

    /// A matched candidate was rejected by the defensive legality
    /// re-check; unreachable in correct operation
    #[error("illegal move: {0}")]
    IllegalMove(String),
}

impl CommandError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn invalid_move(msg: impl Into<String>) -> Self {
        Self::InvalidMove(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_carries_the_kind_and_message() {
        let err = CommandError::invalid_argument("unrecognized color 'x'");
        assert_eq!(err.to_string(), "invalid argument: unrecognized color 'x'");

        let err = CommandError::invalid_move("empty cell token");
        assert_eq!(err.to_string(), "invalid move: empty cell token");

        let err = CommandError::IllegalMove("rejected by re-check".into());
        assert_eq!(err.to_string(), "illegal move: rejected by re-check");
    }
}
