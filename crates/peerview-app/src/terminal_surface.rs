//! 터미널 표시면.
//!
//! `ToastSurface` 포트 구현. 토스트를 stderr에 한 줄씩 출력한다.

use peerview_core::models::notification::{Notification, NotificationId};
use peerview_core::ports::surface::ToastSurface;
use tracing::debug;

pub struct TerminalSurface;

impl TerminalSurface {
    pub fn new() -> Self {
        Self
    }

    fn line(notification: &Notification) -> String {
        let marker = match notification.severity.as_str() {
            "success" => "✅",
            "error" => "❌",
            _ => "ℹ️ ",
        };
        format!("{marker} {}", notification.message)
    }
}

impl Default for TerminalSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl ToastSurface for TerminalSurface {
    fn mount(&self) {}

    fn unmount(&self) {}

    fn append(&self, notification: &Notification) {
        eprintln!("{}", Self::line(notification));
    }

    fn set_visible(&self, id: NotificationId, visible: bool) {
        debug!("토스트 {id} 표시 상태: {visible}");
    }

    fn remove(&self, id: NotificationId) {
        debug!("토스트 {id} 제거");
    }
}
