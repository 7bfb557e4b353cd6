use std::cell::RefCell;

/// Severity of an emitted alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertLevel {
    Notice,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub level: AlertLevel,
    pub message: String,
}

impl Alert {
    pub fn notice(message: impl Into<String>) -> Self {
        Self {
            level: AlertLevel::Notice,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: AlertLevel::Warning,
            message: message.into(),
        }
    }
}

/// Destination for alerts. The ledger core never prints; the console shell
/// supplies a sink that does.
pub trait AlertSink {
    fn emit(&self, alert: Alert);
}

/// Keeps every alert in memory, in emission order.
#[derive(Debug, Default)]
pub struct BufferedSink {
    alerts: RefCell<Vec<Alert>>,
}

impl BufferedSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alerts(&self) -> Vec<Alert> {
        self.alerts.borrow().clone()
    }

    pub fn warnings(&self) -> Vec<Alert> {
        self.alerts
            .borrow()
            .iter()
            .filter(|alert| alert.level == AlertLevel::Warning)
            .cloned()
            .collect()
    }

    /// Returns and clears the buffered alerts.
    pub fn take(&self) -> Vec<Alert> {
        std::mem::take(&mut *self.alerts.borrow_mut())
    }
}

impl AlertSink for BufferedSink {
    fn emit(&self, alert: Alert) {
        self.alerts.borrow_mut().push(alert);
    }
}

/// Discards every alert.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl AlertSink for NullSink {
    fn emit(&self, _alert: Alert) {}
}
