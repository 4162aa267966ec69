use spectrumbrowser::AlertSink;

/// Alerts through `window.alert`, which blocks until dismissed.
#[derive(Clone, Copy, Default)]
pub struct WindowAlert;

impl AlertSink for WindowAlert {
    fn alert(&self, message: &str) {
        match web_sys::window() {
            Some(window) => {
                if let Err(err) = window.alert_with_message(message) {
                    log::error!("Failed to show alert: {:?}", err);
                }
            }
            // the screen may already be gone, keep the message in the log
            None => log::warn!("No window for alert: {}", message),
        }
    }
}
