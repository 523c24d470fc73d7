use apidiff_core_types::{RequestId, TraceId};
use thiserror::Error;

use crate::model::ElementType;

/// Result type alias using ApiDiffError
pub type Result<T> = std::result::Result<T, ApiDiffError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// This taxonomy provides a stable, structured classification of all errors
/// in the diff engine. Each kind maps to a stable error code that can be
/// used for programmatic error handling, testing, and external API
/// responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffErrorKind {
    // Construction preconditions
    /// Neither a newer nor an older element was supplied
    EmptyComparison,
    /// Two paired elements carry different type tags
    TypeMismatch,

    // Structural/Validation
    InvalidInput,

    // Integration/IO (future)
    Serialization,

    // Internal
    Internal,
}

impl DiffErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            DiffErrorKind::EmptyComparison => "ERR_EMPTY_COMPARISON",
            DiffErrorKind::TypeMismatch => "ERR_TYPE_MISMATCH",
            DiffErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            DiffErrorKind::Serialization => "ERR_SERIALIZATION",
            DiffErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Provides a structured representation of errors with classification
/// fields for programmatic handling and rich context for debugging. Built
/// up with the `with_*` methods; the diff engine itself raises only the
/// construction-precondition kinds.
#[derive(Debug, Clone)]
pub struct DiffError {
    kind: DiffErrorKind,
    op: Option<String>,
    element: Option<String>,
    request_id: Option<RequestId>,
    trace_id: Option<TraceId>,
    message: String,
    source: Option<Box<DiffError>>,
}

impl DiffError {
    /// Create a new error with the specified kind
    pub fn new(kind: DiffErrorKind) -> Self {
        Self {
            kind,
            op: None,
            element: None,
            request_id: None,
            trace_id: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add the name of the element involved
    pub fn with_element(mut self, element: impl Into<String>) -> Self {
        self.element = Some(element.into());
        self
    }

    /// Add request ID context
    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
        self
    }

    /// Add trace ID context
    pub fn with_trace_id(mut self, trace_id: TraceId) -> Self {
        self.trace_id = Some(trace_id);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add source error
    pub fn with_source(mut self, source: DiffError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> DiffErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the element name context, if any
    pub fn element(&self) -> Option<&str> {
        self.element.as_deref()
    }

    /// Get the request ID context, if any
    pub fn request_id(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
    }

    /// Get the trace ID context, if any
    pub fn trace_id(&self) -> Option<&TraceId> {
        self.trace_id.as_ref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the source error, if any
    pub fn source_error(&self) -> Option<&DiffError> {
        self.source.as_deref()
    }
}

impl std::fmt::Display for DiffError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(element) = &self.element {
            write!(f, " (element: {})", element)?;
        }
        Ok(())
    }
}

impl std::error::Error for DiffError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}

// ========== End Error Facility ==========

/// Error taxonomy for diff construction
///
/// Both variants are caller-misuse preconditions: the merge itself never
/// produces an empty or mismatched pairing, so these surface immediately
/// and are never silently recovered.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiDiffError {
    /// Both sides of a comparison were absent
    #[error("empty comparison: neither a newer nor an older element was supplied")]
    EmptyComparison,

    /// Two paired elements carry different type tags
    #[error("type mismatch pairing '{name}': newer is {newer}, older is {older}")]
    TypeMismatch {
        name: String,
        newer: ElementType,
        older: ElementType,
    },
}

impl From<ApiDiffError> for DiffError {
    fn from(err: ApiDiffError) -> Self {
        let message = err.to_string();
        match err {
            ApiDiffError::EmptyComparison => {
                DiffError::new(DiffErrorKind::EmptyComparison).with_message(message)
            }
            ApiDiffError::TypeMismatch { name, .. } => DiffError::new(DiffErrorKind::TypeMismatch)
                .with_element(name)
                .with_message(message),
        }
    }
}
