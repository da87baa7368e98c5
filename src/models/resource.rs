/// Tri-state wrapper for data that may arrive in stages from cache and
/// network.
///
/// Exactly one state is active at a time. `Loading` and `Error` may carry a
/// stale payload so consumers can show last-known data while revalidating or
/// after a failed refresh.
#[derive(Debug, Clone, PartialEq)]
pub enum Resource<T> {
    /// A load is in progress; `data` holds the stale snapshot, if any.
    Loading { data: Option<T> },
    /// Fresh data is available.
    Success { data: T },
    /// The load failed; `message` is human-readable, `data` holds the
    /// last-good fallback, if any.
    Error { message: String, data: Option<T> },
}

impl<T> Resource<T> {
    /// The payload carried by any state, stale or fresh.
    pub fn data(&self) -> Option<&T> {
        match self {
            Resource::Loading { data } | Resource::Error { data, .. } => data.as_ref(),
            Resource::Success { data } => Some(data),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Resource::Loading { .. })
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Resource::Success { .. })
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Resource::Error { .. })
    }

    /// The error message, if this is an error state.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Resource::Error { message, .. } => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_accessor_covers_all_states() {
        let loading: Resource<i32> = Resource::Loading { data: Some(1) };
        let success: Resource<i32> = Resource::Success { data: 2 };
        let error: Resource<i32> = Resource::Error {
            message: "offline".to_string(),
            data: None,
        };

        assert_eq!(loading.data(), Some(&1));
        assert_eq!(success.data(), Some(&2));
        assert_eq!(error.data(), None);
        assert_eq!(error.error_message(), Some("offline"));
    }

    #[test]
    fn test_state_predicates() {
        let loading: Resource<()> = Resource::Loading { data: None };
        assert!(loading.is_loading());
        assert!(!loading.is_success());
        assert!(!loading.is_error());
    }
}
