use crate::components::common::{Msg, PopupActivityMsg};
use std::fmt::Display;
use std::sync::mpsc::Sender;

/// Application-wide error types for the Moodji terminal gallery.
///
/// Errors are cloneable and carry a message rather than a source so they can
/// travel through the main-loop channel and be shown in the error popup.
///
/// # Error Categories
///
/// - [`Catalog`](AppError::Catalog) - dataset loading and validation failures
/// - [`Component`](AppError::Component) - UI component mount/activation errors
/// - [`State`](AppError::State) - gallery state inconsistencies
/// - [`Config`](AppError::Config) - configuration loading and validation errors
/// - [`Channel`](AppError::Channel) - main-loop channel failures
///
/// # Examples
///
/// ```no_run
/// use moodji::error::{AppError, ErrorReporter};
///
/// fn handle(error: AppError, reporter: &ErrorReporter) {
///     match error {
///         AppError::Catalog(_) => reporter.report_catalog_error("reload", error),
///         other => reporter.report_error(other),
///     }
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    /// Archetype catalog could not be loaded or failed validation.
    Catalog(String),

    /// UI component mount, remount or activation failure.
    Component(String),

    /// Gallery state does not match what the UI expected.
    State(String),

    /// Configuration could not be loaded or is invalid.
    Config(String),

    /// Sending on the main-loop channel failed.
    Channel(String),
}

impl Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Catalog(msg) => write!(f, "Catalog Error: {msg}"),
            AppError::Component(msg) => write!(f, "Component Error: {msg}"),
            AppError::State(msg) => write!(f, "State Error: {msg}"),
            AppError::Config(msg) => write!(f, "Configuration Error: {msg}"),
            AppError::Channel(msg) => write!(f, "Channel Error: {msg}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<catalog::CatalogError> for AppError {
    fn from(err: catalog::CatalogError) -> Self {
        AppError::Catalog(err.to_string())
    }
}

impl From<tuirealm::ApplicationError> for AppError {
    fn from(err: tuirealm::ApplicationError) -> Self {
        AppError::Component(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;

/// How loudly an error is surfaced.
#[derive(Debug, Clone)]
pub enum ErrorSeverity {
    /// Logged and shown as a dismissible warning.
    Warning,
    /// Logged and shown in the error popup.
    Error,
    /// Logged with a critical marker; the application cannot continue.
    Critical,
}

/// Where an error happened and what to tell the user about it.
#[derive(Debug, Clone)]
pub struct ErrorContext {
    pub component: String,
    pub operation: String,
    pub user_message: String,
    pub technical_details: Option<String>,
    pub suggestion: Option<String>,
    pub severity: ErrorSeverity,
}

impl ErrorContext {
    pub fn new(component: &str, operation: &str) -> Self {
        Self {
            component: component.to_string(),
            operation: operation.to_string(),
            user_message: Self::generate_fallback_message(component),
            technical_details: None,
            suggestion: None,
            severity: ErrorSeverity::Error,
        }
    }

    fn generate_fallback_message(component: &str) -> String {
        format!("An error occurred in {component}. Please try again.")
    }

    pub fn with_message(mut self, message: &str) -> Self {
        self.user_message = message.to_string();
        self
    }

    pub fn with_technical_details(mut self, details: &str) -> Self {
        self.technical_details = Some(details.to_string());
        self
    }

    pub fn with_suggestion(mut self, suggestion: &str) -> Self {
        self.suggestion = Some(suggestion.to_string());
        self
    }

    pub fn with_severity(mut self, severity: ErrorSeverity) -> Self {
        self.severity = severity;
        self
    }
}

#[derive(Debug, Clone)]
pub struct ContextualError {
    pub error: AppError,
    pub context: ErrorContext,
}

impl ContextualError {
    pub fn new(error: AppError, context: ErrorContext) -> Self {
        Self { error, context }
    }
}

impl Display for ContextualError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.context.user_message, self.error)
    }
}

/// Logs errors and queues the matching popup on the main loop.
#[derive(Clone)]
pub struct ErrorReporter {
    tx: Sender<Msg>,
}

impl ErrorReporter {
    pub fn new(tx: Sender<Msg>) -> Self {
        Self { tx }
    }

    pub fn report_simple(&self, error: AppError, component: &str, operation: &str) {
        let context =
            ErrorContext::new(component, operation).with_technical_details(&error.to_string());
        self.report(error, context);
    }

    pub fn report_warning(&self, error: AppError, component: &str, operation: &str) {
        let context = ErrorContext::new(component, operation)
            .with_message(&error.to_string())
            .with_severity(ErrorSeverity::Warning);
        self.report(error, context);
    }

    pub fn report_critical_and_exit(
        &self,
        error: AppError,
        component: &str,
        operation: &str,
        user_message: &str,
    ) {
        let context = ErrorContext::new(component, operation)
            .with_message(user_message)
            .with_severity(ErrorSeverity::Critical)
            .with_suggestion("The application will terminate. Please fix the issue and restart.");
        self.report(error, context);
    }

    pub fn report_error(&self, error: AppError) {
        self.report_simple(error, "Application", "operation");
    }

    pub fn report(&self, error: AppError, context: ErrorContext) {
        let contextual_error = ContextualError::new(error.clone(), context.clone());

        match context.severity {
            ErrorSeverity::Warning => {
                log::warn!(
                    "[{}:{}] {} {}",
                    context.component,
                    context.operation,
                    contextual_error,
                    self.format_additional_context(&context)
                );
            }
            ErrorSeverity::Error => {
                log::error!(
                    "[{}:{}] {} {}",
                    context.component,
                    context.operation,
                    contextual_error,
                    self.format_additional_context(&context)
                );
            }
            ErrorSeverity::Critical => {
                log::error!(
                    "[CRITICAL] [{}:{}] {} {}",
                    context.component,
                    context.operation,
                    contextual_error,
                    self.format_additional_context(&context)
                );
            }
        }

        let popup_msg = match context.severity {
            ErrorSeverity::Warning => Msg::PopupActivity(PopupActivityMsg::ShowWarning(
                self.format_user_message(&context),
            )),
            ErrorSeverity::Error | ErrorSeverity::Critical => Msg::PopupActivity(
                PopupActivityMsg::ShowError(self.create_formatted_error(&error, &context)),
            ),
        };
        if let Err(e) = self.tx.send(popup_msg) {
            log::error!("Failed to send popup message: {e}");
        }
    }

    fn format_additional_context(&self, context: &ErrorContext) -> String {
        let mut parts = Vec::new();

        if let Some(ref technical_details) = context.technical_details {
            parts.push(format!("🔍 Technical: {technical_details}"));
        }

        if let Some(ref suggestion) = context.suggestion {
            parts.push(format!("💡 Suggestion: {suggestion}"));
        }

        if parts.is_empty() {
            String::new()
        } else {
            format!("\n{}", parts.join("\n"))
        }
    }

    fn format_user_message(&self, context: &ErrorContext) -> String {
        let mut message = context.user_message.clone();

        if let Some(ref suggestion) = context.suggestion {
            message.push_str(&format!("\n\n💡 Suggestion: {suggestion}"));
        }

        message
    }

    fn create_formatted_error(&self, error: &AppError, context: &ErrorContext) -> AppError {
        let emoji = match error {
            AppError::Catalog(_) => "📚",
            AppError::Config(_) => "⚙️",
            AppError::Component(_) => "🎛️",
            AppError::State(_) => "📊",
            AppError::Channel(_) => "📡",
        };

        let mut formatted_message = format!("{} {}", emoji, self.get_error_title(error));
        formatted_message.push_str(&format!("\n\n{}", context.user_message));

        if let Some(ref technical) = context.technical_details {
            formatted_message.push_str(&format!("\n\n🔍 Details: {technical}"));
        }

        if let Some(ref suggestion) = context.suggestion {
            formatted_message.push_str(&format!("\n\n💡 Suggestion: {suggestion}"));
        }

        match error {
            AppError::Catalog(_) => AppError::Catalog(formatted_message),
            AppError::Config(_) => AppError::Config(formatted_message),
            AppError::Component(_) => AppError::Component(formatted_message),
            AppError::State(_) => AppError::State(formatted_message),
            AppError::Channel(_) => AppError::Channel(formatted_message),
        }
    }

    fn get_error_title(&self, error: &AppError) -> &'static str {
        match error {
            AppError::Catalog(_) => "Catalog Error",
            AppError::Config(_) => "Configuration Error",
            AppError::Component(_) => "Component Error",
            AppError::State(_) => "Application State Error",
            AppError::Channel(_) => "Communication Error",
        }
    }

    // ========== Helper Methods for Common Error Patterns ==========

    pub fn report_mount_error(
        &self,
        component: &str,
        operation: &str,
        error: impl std::fmt::Display,
    ) {
        let app_error = AppError::Component(format!("Failed to {operation} {component}: {error}"));
        self.report_simple(app_error, component, operation);
    }

    pub fn report_theme_error(&self, operation: &str, error: impl std::fmt::Display) {
        let app_error = AppError::Component(format!("Theme {operation} failed: {error}"));
        self.report_warning(app_error, "ThemeManager", operation);
    }

    pub fn report_catalog_error(&self, operation: &str, error: impl std::fmt::Display) {
        let context = ErrorContext::new("Catalog", operation)
            .with_message("The archetype catalog could not be loaded")
            .with_technical_details(&error.to_string())
            .with_suggestion("Check the catalog file, or start without --catalog to use the built-in set");

        self.report(AppError::Catalog(error.to_string()), context);
    }
}
