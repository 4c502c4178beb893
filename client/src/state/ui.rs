//! Transient UI notices surfaced after user-triggered operations.
//!
//! DESIGN
//! ======
//! Every mutation path reports its outcome as a short-lived toast rather
//! than inline state, keeping success/failure feedback out of domain models.
//! Notices are bounded; when the queue is full the oldest one is evicted.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Most notices kept on screen at once.
pub const NOTICE_CAP: usize = 4;

/// How long a notice stays up before the host dismisses it.
pub const NOTICE_DISMISS_MS: u32 = 3000;

/// Visual flavor of a notice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// One transient toast.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub level: NoticeLevel,
    pub text: String,
}

/// Notice queue plus its id counter.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub notices: Vec<Notice>,
    next_notice_id: u64,
}

impl UiState {
    /// Queue a success toast and return its id for later dismissal.
    pub fn push_success(&mut self, text: impl Into<String>) -> u64 {
        self.push(NoticeLevel::Success, text.into())
    }

    /// Queue an error toast and return its id for later dismissal.
    pub fn push_error(&mut self, text: impl Into<String>) -> u64 {
        self.push(NoticeLevel::Error, text.into())
    }

    fn push(&mut self, level: NoticeLevel, text: String) -> u64 {
        self.next_notice_id += 1;
        let id = self.next_notice_id;
        if self.notices.len() >= NOTICE_CAP {
            self.notices.remove(0);
        }
        self.notices.push(Notice { id, level, text });
        id
    }

    /// Drop a notice by id. Already-evicted ids are a no-op.
    pub fn dismiss(&mut self, id: u64) {
        self.notices.retain(|n| n.id != id);
    }
}
