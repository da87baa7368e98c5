use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    /// A legitimate negative result: the name is not in the remote's table.
    /// Distinct from a transport failure so callers can tell "no such sign"
    /// apart from "could not reach the backend".
    #[error("Sign not found: {0}")]
    NotFound(String),

    #[error("Network unavailable: {0}")]
    Unavailable(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(#[from] serde_json::Error),
}

impl ApiError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_is_distinguishable() {
        assert!(ApiError::NotFound("Ophiuchus".to_string()).is_not_found());
        assert!(!ApiError::Unavailable("timeout".to_string()).is_not_found());
    }
}
