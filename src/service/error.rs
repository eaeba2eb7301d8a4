use thiserror::Error;

/// Failures surfaced by a [`CounterService`](super::CounterService).
///
/// The display text is what ends up in the view's error message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    #[error("Network connection lost.")]
    Network,

    #[error("Invalid response from server.")]
    InvalidResponse,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(ServiceError::Network.to_string(), "Network connection lost.");
        assert_eq!(
            ServiceError::InvalidResponse.to_string(),
            "Invalid response from server."
        );
    }
}
