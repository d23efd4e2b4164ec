//! Notification sink: the engine's outward message channel.

/// Severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoticeKind {
    /// Informational (round outcomes).
    Info,
    /// Warning (stubbed or unavailable actions).
    Warning,
    /// Error (shoe exhaustion and other round-fatal conditions).
    Error,
}

/// Receiver for engine notifications.
///
/// The presentation layer implements this to surface round outcomes
/// ("won +50", "push") and warnings; no format beyond kind + message is
/// required.
pub trait NotifySink: Send + Sync {
    /// Delivers one notification.
    fn notify(&self, kind: NoticeKind, message: &str);
}

impl<T: NotifySink + ?Sized> NotifySink for alloc::sync::Arc<T> {
    fn notify(&self, kind: NoticeKind, message: &str) {
        (**self).notify(kind, message);
    }
}

/// A sink that drops every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl NotifySink for NullSink {
    fn notify(&self, _kind: NoticeKind, _message: &str) {}
}
