use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use talentflow::hiring::{Notification, Notifier, Severity};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Prints notifications to stdout, standing in for the toast layer during the
/// CLI demo.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct StdoutNotifier;

impl Notifier for StdoutNotifier {
    fn notify(&self, notification: Notification) {
        let tag = match notification.severity {
            Severity::Success => "ok",
            Severity::Error => "error",
        };
        println!("  [{tag}] {}", notification.message);
    }
}
