//! Driven port for blocking user alerts.
//!
//! Every outcome of a user action, success or failure, is reported through a
//! single alert. There is no other user-visible error channel.

/// Port delivering modal alerts to the user.
pub trait Notifier: Send + Sync {
    /// Show `message` and return once it has been delivered.
    fn alert(&self, message: &str);
}
