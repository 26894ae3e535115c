//! Shared error reporting
//!
//! Lets the startup path report any module error the same way while keeping
//! each module's own error enum.

/// Trait for errors that can distinguish between user-actionable and system errors
///
/// When `is_user_actionable()` returns `true`, `user_message()` must return
/// `Some(message)` with something the user can act on. Otherwise it returns `None`.
pub trait ContextualError: std::error::Error {
    /// Returns true if this error carries a message the user can act on
    /// (bad configuration, missing camera permission, unknown product)
    fn is_user_actionable(&self) -> bool;

    /// The user-facing message for actionable errors, `None` otherwise
    fn user_message(&self) -> Option<&str>;
}

/// Log a fatal error with the detail level appropriate to its kind
///
/// User-actionable errors print their own message; system errors print the
/// operation context and leave the detail to the debug level.
///
/// ```rust,no_run
/// # use nutriscan::core::error_handling::log_error_with_context;
/// # use nutriscan::app::cli::config::ConfigError;
/// let err = ConfigError::Invalid { message: "fps must be greater than 0".to_string() };
/// log_error_with_context(&err, "Loading configuration");
/// // Logs: "FATAL: fps must be greater than 0"
/// ```
pub fn log_error_with_context<E: ContextualError + std::fmt::Display + std::fmt::Debug>(
    error: &E,
    operation_context: &str,
) {
    match error.user_message() {
        Some(user_msg) if error.is_user_actionable() => log::error!("FATAL: {}", user_msg),
        _ => log::error!("FATAL: {}", operation_context),
    }
    log::debug!("DETAIL: {}", error);
    log::debug!("DEBUG_DETAILS: {:?}", error);
}
