use serde::Serialize;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastVariant {
    Success,
    Destructive,
}

/// A transient user notification
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Toast {
    pub variant: ToastVariant,
    pub description: String,
}

/// Sending half of the toast channel. Toasts sent after the receiver is
/// gone are dropped.
#[derive(Debug, Clone)]
pub struct Toaster {
    tx: UnboundedSender<Toast>,
}

impl Toaster {
    pub fn channel() -> (Self, UnboundedReceiver<Toast>) {
        let (tx, rx) = unbounded_channel();
        (Self { tx }, rx)
    }

    pub fn success(&self, description: impl Into<String>) {
        self.send(ToastVariant::Success, description.into());
    }

    pub fn destructive(&self, description: impl Into<String>) {
        self.send(ToastVariant::Destructive, description.into());
    }

    fn send(&self, variant: ToastVariant, description: String) {
        tracing::debug!(?variant, "toast: {}", description);
        let _ = self.tx.send(Toast { variant, description });
    }
}
