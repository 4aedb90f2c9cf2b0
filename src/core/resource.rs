//! # Resource Envelope
//!
//! Every use case answers with a `Resource<T>`: the payload (if any) plus
//! the state it was produced in.
//!
//! ```text
//! Loading { placeholder }  →  Success { data }
//!                          ↘  Error { message, data }
//! ```
//!
//! An envelope is never edited in place. A new state means a new envelope,
//! which replaces the old one in whatever stream is holding it.

/// Message used when a call produced no payload or faulted.
pub const NO_DATA: &str = "No Data";

/// Message used when the collaborator answered with a non-success status.
pub const REQUEST_FAILED: &str = "Error";

/// The state an envelope is in. Handy for logging and for assertions that
/// don't care about the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Loading,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Resource<T> {
    Loading { placeholder: Option<T> },
    Success { data: Option<T> },
    Error { message: String, data: Option<T> },
}

impl<T> Resource<T> {
    pub fn loading(placeholder: Option<T>) -> Self {
        Resource::Loading { placeholder }
    }

    pub fn success(data: T) -> Self {
        Resource::Success { data: Some(data) }
    }

    /// Success without a payload: what the update stream publishes once an
    /// update went through.
    pub fn success_empty() -> Self {
        Resource::Success { data: None }
    }

    pub fn error(message: impl Into<String>, data: Option<T>) -> Self {
        Resource::Error {
            message: message.into(),
            data,
        }
    }

    pub fn status(&self) -> Status {
        match self {
            Resource::Loading { .. } => Status::Loading,
            Resource::Success { .. } => Status::Success,
            Resource::Error { .. } => Status::Error,
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

    pub fn data(&self) -> Option<&T> {
        match self {
            Resource::Loading { placeholder } => placeholder.as_ref(),
            Resource::Success { data } | Resource::Error { data, .. } => data.as_ref(),
        }
    }

    pub fn into_data(self) -> Option<T> {
        match self {
            Resource::Loading { placeholder } => placeholder,
            Resource::Success { data } | Resource::Error { data, .. } => data,
        }
    }

    /// Converts the payload, keeping state and message.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Resource<U> {
        match self {
            Resource::Loading { placeholder } => Resource::Loading {
                placeholder: placeholder.map(f),
            },
            Resource::Success { data } => Resource::Success { data: data.map(f) },
            Resource::Error { message, data } => Resource::Error {
                message,
                data: data.map(f),
            },
        }
    }

    /// Only `Error` carries a message.
    pub fn message(&self) -> Option<&str> {
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
    fn test_loading_has_no_message() {
        let r: Resource<Vec<u8>> = Resource::loading(None);
        assert_eq!(r.status(), Status::Loading);
        assert!(r.data().is_none());
        assert!(r.message().is_none());
    }

    #[test]
    fn test_loading_keeps_placeholder() {
        let r = Resource::loading(Some(vec![1, 2]));
        assert_eq!(r.data(), Some(&vec![1, 2]));
    }

    #[test]
    fn test_success_with_and_without_payload() {
        let full = Resource::success(vec!["a".to_string()]);
        assert_eq!(full.data().map(Vec::len), Some(1));

        let empty: Resource<String> = Resource::success_empty();
        assert!(empty.is_success());
        assert!(empty.data().is_none());
        assert!(empty.message().is_none());
    }

    #[test]
    fn test_error_carries_message() {
        let r: Resource<()> = Resource::error(NO_DATA, None);
        assert!(r.is_error());
        assert_eq!(r.message(), Some("No Data"));
        assert!(r.into_data().is_none());
    }

    #[test]
    fn test_map_keeps_state_and_message() {
        assert_eq!(Resource::success(2).map(|n| n * 10), Resource::success(20));
        let err: Resource<i32> = Resource::error(REQUEST_FAILED, None);
        assert_eq!(err.map(|n| n.to_string()), Resource::error("Error", None));
    }

    #[test]
    fn test_equal_envelopes_compare_equal() {
        assert_eq!(Resource::success(3), Resource::success(3));
        assert_ne!(
            Resource::<i32>::error(NO_DATA, None),
            Resource::<i32>::error(REQUEST_FAILED, None)
        );
    }
}
