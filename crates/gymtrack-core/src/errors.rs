use thiserror::Error;

/// Result type alias using PlannerError
pub type Result<T> = std::result::Result<T, PlannerError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// error handling, testing, and user-facing warnings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Validation
    InvalidInput,
    NotFound,

    // Storage
    /// Structured storage engine unreachable, unsupported, or schema setup failed
    Initialization,
    /// A load or save failed mid-flight
    Transaction,
    Io,
    Serialization,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::Initialization => "ERR_INITIALIZATION",
            ExErrorKind::Transaction => "ERR_TRANSACTION",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification kind for programmatic handling plus optional
/// context (operation, entity) for debugging.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    message: String,
    source: Option<Box<ExError>>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_id: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity ID context
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add source error
    pub fn with_source(mut self, source: ExError) -> Self {
        self.source = Some(Box::new(source));
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

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn source_error(&self) -> Option<&ExError> {
        self.source.as_deref()
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
        Ok(())
    }
}

impl std::error::Error for ExError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

// ========== End Error Facility ==========

/// Domain errors raised by the in-memory planner operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlannerError {
    /// Exercise not found in store
    #[error("Exercise not found: {exercise_id}")]
    ExerciseNotFound { exercise_id: String },

    /// Exercise name is empty or whitespace-only
    #[error("Invalid exercise name: {reason}")]
    InvalidName { reason: String },

    /// Weight is negative or not a finite number
    #[error("Invalid weight {weight}: must be a finite, non-negative number")]
    InvalidWeight { weight: f64 },

    /// Weekday code outside mon..fri
    #[error("Unknown day: {code} (expected one of mon, tue, wed, thu, fri)")]
    UnknownDay { code: String },

    /// Persisted blob could not be encoded or decoded
    #[error("Serialization failed: {message}")]
    Serialization { message: String },
}

impl PlannerError {
    /// True for errors that the state container treats as a silent no-op
    pub fn is_not_found(&self) -> bool {
        matches!(self, PlannerError::ExerciseNotFound { .. })
    }
}

impl From<PlannerError> for ExError {
    fn from(err: PlannerError) -> Self {
        let message = err.to_string();
        match err {
            PlannerError::ExerciseNotFound { exercise_id } => ExError::new(ExErrorKind::NotFound)
                .with_entity_id(exercise_id)
                .with_message(message),
            PlannerError::InvalidName { .. }
            | PlannerError::InvalidWeight { .. }
            | PlannerError::UnknownDay { .. } => {
                ExError::new(ExErrorKind::InvalidInput).with_message(message)
            }
            PlannerError::Serialization { .. } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }
        }
    }
}

impl From<serde_json::Error> for PlannerError {
    fn from(err: serde_json::Error) -> Self {
        PlannerError::Serialization {
            message: err.to_string(),
        }
    }
}
