use thiserror::Error;

/// Engine-level error type.
///
/// The parse/score/match surface is total and never returns these. Errors
/// only appear at the seams: source-format dispatch on the caller side and
/// the model-backed capability traits in `backend`. The engine's policy for
/// backend failures is graceful degradation, so these never bubble out of
/// the core operations.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Unsupported input format: {0}")]
    UnsupportedInput(String),

    #[error("Backend unavailable: {0}")]
    BackendUnavailable(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_input_message() {
        let err = EngineError::UnsupportedInput("unknown file extension 'odt'".to_string());
        assert_eq!(
            err.to_string(),
            "Unsupported input format: unknown file extension 'odt'"
        );
    }

    #[test]
    fn test_backend_unavailable_message() {
        let err = EngineError::BackendUnavailable("no embedding model configured".to_string());
        assert!(err.to_string().contains("Backend unavailable"));
    }

    #[test]
    fn test_internal_wraps_anyhow() {
        let err: EngineError = anyhow::anyhow!("model file corrupt").into();
        assert!(matches!(err, EngineError::Internal(_)));
        assert!(err.to_string().contains("model file corrupt"));
    }
}
