//! Error type shared by the text helpers.

/// Errors returned by helpers that validate their arguments.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TextError {
    #[error("Invalid argument `{argument}`: {reason}")]
    InvalidArgument {
        argument: &'static str,
        reason: &'static str,
    },
}

impl TextError {
    pub(crate) fn invalid(argument: &'static str, reason: &'static str) -> Self {
        TextError::InvalidArgument { argument, reason }
    }
}
