use std::time::Duration;

use serde::Serialize;
use tokio::sync::mpsc;

/// How long a toast stays on screen.
pub const TOAST_TTL: Duration = Duration::from_secs(4);

pub const SENT_MESSAGE: &str = "Your message has been sent successfully!";
pub const FAILED_MESSAGE: &str = "Something went wrong. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Success,
    Error,
}

/// A transient notification for the visitor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Toast {
    pub tone: Tone,
    pub message: &'static str,
    pub ttl_ms: u64,
}

impl Toast {
    pub fn sent() -> Self {
        Self::new(Tone::Success, SENT_MESSAGE)
    }

    pub fn failed() -> Self {
        Self::new(Tone::Error, FAILED_MESSAGE)
    }

    fn new(tone: Tone, message: &'static str) -> Self {
        Self {
            tone,
            message,
            ttl_ms: TOAST_TTL.as_millis() as u64,
        }
    }
}

/// Sending half of the toast queue. Toasts sent with nobody listening are dropped.
#[derive(Debug, Clone)]
pub struct Toaster {
    tx: mpsc::UnboundedSender<Toast>,
}

impl Toaster {
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<Toast>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    pub fn show(&self, toast: Toast) {
        let _ = self.tx.send(toast);
    }
}
