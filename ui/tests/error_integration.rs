use moodji::error::ErrorReporter;
use moodji::{AppError, components::common::Msg};
/// Integration helpers for error handling testing patterns
use std::sync::mpsc::Sender;

/// Quick helper for reporting errors in existing code patterns
///
/// # Example Usage in Existing Code:
/// ```no_run
/// use std::sync::mpsc;
/// use moodji::{AppError, components::common::Msg};
/// use error_integration::report_error_simple;
///
/// let (tx, _rx) = mpsc::channel::<Msg>();
///
/// fn some_operation() -> Result<(), AppError> {
///     Err(AppError::Config("test error".to_string()))
/// }
///
/// if let Err(e) = some_operation() {
///     report_error_simple(&tx, e, "ComponentName", "operation_name");
/// }
/// ```
pub fn report_error_simple(tx: &Sender<Msg>, error: AppError, component: &str, operation: &str) {
    let reporter = ErrorReporter::new(tx.clone());
    reporter.report_simple(error, component, operation);
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::{Catalog, ColorPolicy};
    use moodji::components::common::PopupActivityMsg;
    use std::io::Write;
    use std::sync::mpsc;
    use tempfile::Builder;

    #[test]
    fn test_report_error_simple() {
        let (tx, rx) = mpsc::channel();
        let error = AppError::Config("test error".to_string());

        report_error_simple(&tx, error, "TestComponent", "test_operation");

        let received = rx.recv().unwrap();
        match received {
            Msg::PopupActivity(PopupActivityMsg::ShowError(AppError::Config(message))) => {
                assert!(message.contains("test error"));
            }
            other => panic!("Expected PopupActivity ShowError message, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_catalog_reaches_error_popup() {
        let mut file = Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, "[{{\"name\": \"Half an entry\"}}]").unwrap();

        let error: AppError = Catalog::load(file.path(), ColorPolicy::Strict)
            .unwrap_err()
            .into();

        let (tx, rx) = mpsc::channel();
        ErrorReporter::new(tx).report_catalog_error("load", &error);

        match rx.recv().unwrap() {
            Msg::PopupActivity(PopupActivityMsg::ShowError(AppError::Catalog(message))) => {
                assert!(message.contains("could not be loaded"));
            }
            other => panic!("unexpected message: {other:?}"),
        }
    }
}
