//! Transient notification state
//!
//! Toasts live in a small stack reducer; each pushed toast gets a unique id
//! so its auto-dismiss timer and close button can target it independently.

/// How long a toast stays visible before auto-dismissal
pub const TOAST_LIFETIME_MS: u32 = 5000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn as_class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast-success",
            ToastKind::Error => "toast toast-error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub kind: ToastKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ToastAction {
    Push { message: String, kind: ToastKind },
    Dismiss(u64),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastStack {
    pub toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastStack {
    /// Applies `action`, returning the id of a newly pushed toast so the
    /// caller can arm its dismissal timer.
    pub fn reduce_in_place(&mut self, action: ToastAction) -> Option<u64> {
        match action {
            ToastAction::Push { message, kind } => {
                let id = self.next_id;
                self.next_id += 1;
                self.toasts.push(Toast { id, message, kind });
                Some(id)
            }
            ToastAction::Dismiss(id) => {
                // Idempotent: the timer and the close button may race
                self.toasts.retain(|t| t.id != id);
                None
            }
        }
    }
}
