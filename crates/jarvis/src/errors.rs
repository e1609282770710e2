use thiserror::Error;

/// The only failure that crosses the agent boundary.
///
/// Network, authentication and response-shape failures all collapse into this
/// one kind. The underlying cause is logged where it happens and then dropped,
/// so callers can treat every failure the same way.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Failed to process input")]
pub struct ProcessingError;

pub type AgentResult<T> = Result<T, ProcessingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_processing_error_message() {
        assert_eq!(ProcessingError.to_string(), "Failed to process input");
    }
}
