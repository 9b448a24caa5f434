use std::time::{Duration, Instant};

/// How long an alert stays up before it clears itself.
pub const ALERT_TTL: Duration = Duration::from_secs(5);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Danger,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Alert {
    pub kind: AlertKind,
    pub message: String,
    pub shown_at: Instant,
}

/// Holds at most one alert. A new alert replaces the old one and restarts
/// the timer.
#[derive(Clone, Debug, Default)]
pub struct AlertSlot {
    current: Option<Alert>,
}

impl AlertSlot {
    pub fn show(&mut self, kind: AlertKind, message: impl Into<String>, now: Instant) {
        let message = message.into();
        match kind {
            AlertKind::Success => tracing::info!("{}", message),
            AlertKind::Danger => tracing::warn!("{}", message),
        }
        self.current = Some(Alert {
            kind,
            message,
            shown_at: now,
        });
    }

    pub fn success(&mut self, message: impl Into<String>, now: Instant) {
        self.show(AlertKind::Success, message, now);
    }

    pub fn danger(&mut self, message: impl Into<String>, now: Instant) {
        self.show(AlertKind::Danger, message, now);
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    /// Drop the alert once it has been visible for [`ALERT_TTL`].
    pub fn tick(&mut self, now: Instant) {
        if let Some(alert) = &self.current {
            if now.saturating_duration_since(alert.shown_at) >= ALERT_TTL {
                self.current = None;
            }
        }
    }

    pub fn current(&self) -> Option<&Alert> {
        self.current.as_ref()
    }

    pub fn message(&self) -> Option<&str> {
        self.current.as_ref().map(|a| a.message.as_str())
    }

    pub fn kind(&self) -> Option<AlertKind> {
        self.current.as_ref().map(|a| a.kind)
    }
}
