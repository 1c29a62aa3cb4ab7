/// Result alias that carries the custom [`SortVizError`] type.
pub type Result<T> = std::result::Result<T, SortVizError>;

/// Common error type for the core crate.
///
/// Every variant is a configuration-time failure. Once a run is underway it
/// cannot fail: running out of steps is reported as a completion record, not
/// as an error.
#[derive(Debug, thiserror::Error)]
pub enum SortVizError {
    /// The requested algorithm identifier is not one of the known kinds.
    #[error("unknown algorithm `{0}`")]
    UnknownAlgorithm(String),
    /// A run or session was configured with values it cannot honour.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    /// Wrapper around standard IO errors.
    #[error("{0}")]
    Io(#[from] std::io::Error),
    /// Wrapper around JSON (de)serialisation errors.
    #[error("{0}")]
    Json(#[from] serde_json::Error),
}

impl SortVizError {
    /// Creates an [`SortVizError::InvalidConfiguration`] from a message.
    pub fn invalid<T: Into<String>>(msg: T) -> Self {
        Self::InvalidConfiguration(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_value() {
        let err = SortVizError::UnknownAlgorithm("heapsort".to_string());
        assert_eq!(err.to_string(), "unknown algorithm `heapsort`");

        let err = SortVizError::invalid("throttle must be at least 1");
        assert!(err.to_string().contains("throttle must be at least 1"));
    }
}
