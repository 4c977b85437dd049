use dioxus::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

/// Transient notification shown by the toast in the layout.
#[derive(Clone, Copy)]
pub struct NoticeState(pub Signal<Option<Notice>>);

impl NoticeState {
    pub fn success(&mut self, message: impl Into<String>) {
        self.0.set(Some(Notice {
            kind: NoticeKind::Success,
            message: message.into(),
        }));
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.0.set(Some(Notice {
            kind: NoticeKind::Error,
            message: message.into(),
        }));
    }

    pub fn dismiss(&mut self) {
        self.0.set(None);
    }
}
