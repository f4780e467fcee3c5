use launchdeck_core_types::RequestId;
use thiserror::Error;

/// Result type alias using LaunchError
pub type Result<T> = std::result::Result<T, LaunchError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that callers (the CLI, an HTTP
/// layer, tests) can match on without parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Client input
    MissingField,
    InvalidDate,
    UnknownTarget,
    InvalidInput,

    // Infrastructure
    Persistence,
    ExternalService,
    Timeout,
    Concurrency,
    Serialization,
    Io,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::MissingField => "ERR_MISSING_FIELD",
            ExErrorKind::InvalidDate => "ERR_INVALID_DATE",
            ExErrorKind::UnknownTarget => "ERR_UNKNOWN_TARGET",
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::Persistence => "ERR_PERSISTENCE",
            ExErrorKind::ExternalService => "ERR_EXTERNAL_SERVICE",
            ExErrorKind::Timeout => "ERR_TIMEOUT",
            ExErrorKind::Concurrency => "ERR_CONCURRENCY",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Io => "ERR_IO",
        }
    }

    /// Whether the failure originates outside the caller's input
    ///
    /// Infrastructure failures are not recovered locally; the caller may retry
    /// the whole operation.
    pub fn is_infrastructure(&self) -> bool {
        matches!(
            self,
            ExErrorKind::Persistence
                | ExErrorKind::ExternalService
                | ExErrorKind::Timeout
                | ExErrorKind::Concurrency
                | ExErrorKind::Io
        )
    }
}

/// Canonical structured error type
///
/// Carries classification fields for programmatic handling plus optional
/// context for debugging. Built from `LaunchError` at reporting boundaries.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    flight_number: Option<i64>,
    request_id: Option<RequestId>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_id: None,
            flight_number: None,
            request_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity context (planet name, field name, upstream service)
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    pub fn with_flight_number(mut self, flight_number: i64) -> Self {
        self.flight_number = Some(flight_number);
        self
    }

    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    pub fn flight_number(&self) -> Option<i64> {
        self.flight_number
    }

    pub fn request_id(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (entity_id: {})", entity_id)?;
        }
        if let Some(flight_number) = self.flight_number {
            write!(f, " (flight_number: {})", flight_number)?;
        }
        if let Some(request_id) = &self.request_id {
            write!(f, " (request_id: {})", request_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Error taxonomy for launch lifecycle operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LaunchError {
    // ===== Client Input =====
    /// A mandatory draft field is absent or empty
    #[error("Missing required launch property: {field}")]
    MissingField { field: String },

    /// The launch date did not parse to a point in time
    #[error("Invalid launch date: {value:?}")]
    InvalidDate { value: String },

    /// The target planet is not in the planet catalog
    #[error("No matching planet found: {target}")]
    UnknownTarget { target: String },

    /// Input that is structurally wrong in some other way (e.g. a bad seed file)
    #[error("Invalid input: {reason}")]
    InvalidInput { reason: String },

    // ===== Infrastructure =====
    /// The launch store or planet catalog failed
    #[error("Persistence error: {message}")]
    Persistence { message: String },

    /// The upstream launch feed failed or answered with an error status
    #[error("{service} error: {message}")]
    ExternalService { service: String, message: String },

    /// A network call exceeded its deadline
    #[error("Timed out during {operation}")]
    Timeout { operation: String },

    /// A lock guarding shared state was poisoned by a panicking holder
    #[error("Concurrency error: {message}")]
    Concurrency { message: String },

    /// Encoding or decoding a record failed
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// Filesystem access failed
    #[error("IO error during {operation}: {message}")]
    Io { operation: String, message: String },
}

impl LaunchError {
    /// The stable kind of this error
    pub fn kind(&self) -> ExErrorKind {
        match self {
            LaunchError::MissingField { .. } => ExErrorKind::MissingField,
            LaunchError::InvalidDate { .. } => ExErrorKind::InvalidDate,
            LaunchError::UnknownTarget { .. } => ExErrorKind::UnknownTarget,
            LaunchError::InvalidInput { .. } => ExErrorKind::InvalidInput,
            LaunchError::Persistence { .. } => ExErrorKind::Persistence,
            LaunchError::ExternalService { .. } => ExErrorKind::ExternalService,
            LaunchError::Timeout { .. } => ExErrorKind::Timeout,
            LaunchError::Concurrency { .. } => ExErrorKind::Concurrency,
            LaunchError::Serialization { .. } => ExErrorKind::Serialization,
            LaunchError::Io { .. } => ExErrorKind::Io,
        }
    }

    /// Store or upstream failure rather than bad client input
    pub fn is_infrastructure(&self) -> bool {
        self.kind().is_infrastructure()
    }

    /// Error for a lock whose holder panicked
    pub fn poisoned(what: &str) -> Self {
        LaunchError::Concurrency {
            message: format!("{} lock poisoned", what),
        }
    }
}

impl From<LaunchError> for ExError {
    fn from(err: LaunchError) -> Self {
        let kind = err.kind();
        let message = err.to_string();
        match err {
            LaunchError::MissingField { field } => ExError::new(kind)
                .with_op("validate_draft")
                .with_entity_id(field)
                .with_message(message),

            LaunchError::InvalidDate { .. } => ExError::new(kind)
                .with_op("validate_draft")
                .with_message(message),

            LaunchError::UnknownTarget { target } => ExError::new(kind)
                .with_op("planet_lookup")
                .with_entity_id(target)
                .with_message(message),

            LaunchError::ExternalService { service, .. } => ExError::new(kind)
                .with_entity_id(service)
                .with_message(message),

            LaunchError::Timeout { operation } | LaunchError::Io { operation, .. } => {
                ExError::new(kind).with_op(operation).with_message(message)
            }

            LaunchError::InvalidInput { .. }
            | LaunchError::Persistence { .. }
            | LaunchError::Concurrency { .. }
            | LaunchError::Serialization { .. } => ExError::new(kind).with_message(message),
        }
    }
}

impl From<&LaunchError> for ExError {
    fn from(err: &LaunchError) -> Self {
        err.clone().into()
    }
}

impl From<serde_json::Error> for LaunchError {
    fn from(err: serde_json::Error) -> Self {
        LaunchError::Serialization {
            message: err.to_string(),
        }
    }
}
