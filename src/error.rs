use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    Storage,
    Validation,
    AmbiguousRef,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Storage => "STORAGE_ERROR",
            Self::Validation => "VALIDATION_ERROR",
            Self::AmbiguousRef => "AMBIGUOUS_REF",
        }
    }
}

#[derive(Debug, Error)]
#[error("{message}")]
pub struct FlowdeckError {
    pub code: ErrorCode,
    pub message: String,
}

impl FlowdeckError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Storage, message)
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Validation, message)
    }

    pub fn ambiguous_ref(reference: &str, candidates: &[String]) -> Self {
        Self::new(
            ErrorCode::AmbiguousRef,
            format!(
                "Ambiguous reference '{}'. Candidates: {}",
                reference,
                candidates.join(", ")
            ),
        )
    }
}

impl From<rusqlite::Error> for FlowdeckError {
    fn from(e: rusqlite::Error) -> Self {
        Self::storage(e.to_string())
    }
}
