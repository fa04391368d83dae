//! Navigation and notification seams the dashboard shell implements.

use tracing::{error, info};

/// Client-side router. Both calls are fire-and-forget; the core never
/// observes a return value.
pub trait Navigator: Send + Sync {
    fn go_to(&self, path: &str);

    /// Ask the view layer to revalidate any visible listing of the resource
    fn refresh_listing(&self);
}

/// User-visible, non-blocking toasts
pub trait Notifier: Send + Sync {
    fn success(&self, message: &str);
    fn failure(&self, message: &str);
}

/// Notifier that writes toasts to the log, for headless runs
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn success(&self, message: &str) {
        info!(%message, "toast");
    }

    fn failure(&self, message: &str) {
        error!(%message, "toast");
    }
}
