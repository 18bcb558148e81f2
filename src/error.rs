use thiserror::Error;

/// Message shown for any failed generation call.
pub const GENERATION_FAILED_MESSAGE: &str =
    "Impossible de générer l'itinéraire. Veuillez vérifier votre clé API ou réessayer plus tard.";

/// Message shown when a share link cannot be restored.
pub const SHARE_LINK_INVALID_MESSAGE: &str = "Le lien partagé semble invalide ou expiré.";

/// Message shown when the form is submitted without a destination.
pub const MISSING_DESTINATION_MESSAGE: &str = "Veuillez entrer une destination.";

/// The three kinds of failure a user can ever see.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Blocked before any network effect.
    InputValidation,
    /// The text-generation service could not produce a usable itinerary.
    Generation,
    /// The shared link could not be decoded.
    ShareLink,
}

/// Main error type for the planner
#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("Empty response from the generation service")]
    EmptyResponse,

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Generation failed: {0}")]
    Generation(String),

    #[error("Invalid share link: {0}")]
    ShareLink(String),

    #[error("Export error: {0}")]
    Export(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, PlannerError>;

impl PlannerError {
    /// Which of the user-facing error kinds this error surfaces as.
    pub fn kind(&self) -> ErrorKind {
        match self {
            PlannerError::InvalidInput(_) => ErrorKind::InputValidation,
            PlannerError::ShareLink(_) => ErrorKind::ShareLink,
            _ => ErrorKind::Generation,
        }
    }

    /// The message a user sees. Detail is kept for logs only.
    pub fn user_message(&self) -> String {
        match self.kind() {
            ErrorKind::InputValidation => match self {
                PlannerError::InvalidInput(message) => message.clone(),
                _ => MISSING_DESTINATION_MESSAGE.to_string(),
            },
            ErrorKind::Generation => GENERATION_FAILED_MESSAGE.to_string(),
            ErrorKind::ShareLink => SHARE_LINK_INVALID_MESSAGE.to_string(),
        }
    }

    /// Whether the user may sensibly try the same action again.
    ///
    /// Nothing is ever retried automatically.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            PlannerError::Http(_)
                | PlannerError::EmptyResponse
                | PlannerError::Generation(_)
                | PlannerError::Validation(_)
        )
    }

    /// Get the error code for structured responses
    pub fn error_code(&self) -> &'static str {
        match self {
            PlannerError::Config(_) => "CONFIG_ERROR",
            PlannerError::InvalidInput(_) => "INVALID_INPUT",
            PlannerError::Http(_) => "HTTP_ERROR",
            PlannerError::EmptyResponse => "EMPTY_RESPONSE",
            PlannerError::Serialization(_) => "SERIALIZATION_ERROR",
            PlannerError::Validation(_) => "VALIDATION_ERROR",
            PlannerError::Generation(_) => "GENERATION_ERROR",
            PlannerError::ShareLink(_) => "SHARE_LINK_ERROR",
            PlannerError::Export(_) => "EXPORT_ERROR",
            PlannerError::Io(_) => "IO_ERROR",
        }
    }

    /// Convert to a structured error payload
    pub fn to_error_payload(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.error_code(),
                "message": self.user_message(),
                "retryable": self.is_retryable()
            }
        })
    }
}
