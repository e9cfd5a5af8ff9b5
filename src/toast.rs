//! Toast Notifications
//!
//! Stack of transient messages, oldest first. Expiry timers live in the
//! controller; this is just the model.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToastLevel {
    Info,
    Success,
    Error,
}

impl ToastLevel {
    pub fn class(self) -> &'static str {
        match self {
            ToastLevel::Info => "toast info",
            ToastLevel::Success => "toast success",
            ToastLevel::Error => "toast error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Toast {
    pub id: u32,
    pub message: String,
    pub level: ToastLevel,
}

#[derive(Debug, Clone, Default)]
pub struct ToastStack {
    toasts: Vec<Toast>,
    next_id: u32,
}

impl ToastStack {
    /// Add a toast and return its id for later dismissal
    pub fn push(&mut self, message: impl Into<String>, level: ToastLevel) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        self.toasts.push(Toast {
            id,
            message: message.into(),
            level,
        });
        id
    }

    pub fn dismiss(&mut self, id: u32) {
        self.toasts.retain(|t| t.id != id);
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}
