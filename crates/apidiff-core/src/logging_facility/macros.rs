//! Canonical logging macros
//!
//! These macros provide a structured, consistent way to log operations.

/// Log the start of an operation
///
/// # Example
///
/// ```
/// # use apidiff_core::log_op_start;
/// log_op_start!("compare");
/// log_op_start!("compare", element = "com.example.api");
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = apidiff_core_types::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = apidiff_core_types::schema::EVENT_START,
            $($field)*
        );
    };
}

/// Log the successful end of an operation
///
/// # Example
///
/// ```
/// # use apidiff_core::log_op_end;
/// log_op_end!("compare", duration_ms = 42);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = apidiff_core_types::schema::EVENT_END,
            duration_ms = $duration,
        );
    };
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = apidiff_core_types::schema::EVENT_END,
            duration_ms = $duration,
            $($field)*
        );
    };
}

/// Log an operation error
///
/// # Example
///
/// ```
/// # use apidiff_core::{log_op_error, errors::ApiDiffError};
/// let err = ApiDiffError::EmptyComparison;
/// log_op_error!("compare", err, duration_ms = 10);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {{
        use $crate::errors::DiffError;
        let diff_err: DiffError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = apidiff_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?diff_err.kind(),
            err_code = diff_err.code(),
        );
    }};
    ($op:expr, $err:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        use $crate::errors::DiffError;
        let diff_err: DiffError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = apidiff_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?diff_err.kind(),
            err_code = diff_err.code(),
            $($field)*
        );
    }};
}
