//! Notification sink capability.

/// Receiver of transient user-facing confirmation messages.
///
/// The cart core and screen controllers call this when an action deserves
/// a confirmation ("Added to cart", "Order placed successfully!") but never
/// implement it themselves; the TUI surfaces the messages as toasts.
pub trait NotificationSink {
    /// Shows a transient message with a title and a description line.
    fn notify(&mut self, title: &str, body: &str);
}
