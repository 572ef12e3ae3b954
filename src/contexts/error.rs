use std::fmt;

/// Custom error types for the application
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    /// Error when deregistering an interaction listener that is not registered
    ListenerNotFound(u64),
    /// Error when creating Kubernetes client fails
    ClientCreationError(String),
    /// Error when listing resources from the cluster fails
    FetchError(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::ListenerNotFound(id) => write!(f, "Interaction listener not registered: {}", id),
            AppError::ClientCreationError(msg) => write!(f, "Client creation failed: {}", msg),
            AppError::FetchError(msg) => write!(f, "Fetch failed: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<kube::Error> for AppError {
    fn from(err: kube::Error) -> Self {
        AppError::ClientCreationError(err.to_string())
    }
}

/// Result type for application operations
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            AppError::ListenerNotFound(7).to_string(),
            "Interaction listener not registered: 7"
        );
        assert_eq!(
            AppError::FetchError("timeout".to_string()).to_string(),
            "Fetch failed: timeout"
        );
    }
}
