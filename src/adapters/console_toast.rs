use crate::domain::ports::Notifier;

/// Terminal stand-in for the storefront's toast layer: messages go to
/// stderr and are mirrored to the log.
#[derive(Debug, Clone, Default)]
pub struct ConsoleToast;

impl Notifier for ConsoleToast {
    fn error(&self, message: &str) {
        tracing::warn!("{}", message);
        eprintln!("⚠️  {}", message);
    }
}
