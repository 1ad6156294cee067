//! 폼 상단 인라인 메시지.
//!
//! 슬롯당 메시지는 하나만 유지한다. 새 메시지는 기존 메시지를 대체하고,
//! 표시 후 일정 시간이 지나면 스스로 사라진다.

use parking_lot::Mutex;
use peerview_core::models::notification::Severity;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

use crate::html_surface::escape_html;

/// 표시 중인 메시지
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineMessage {
    /// 슬롯 내 일련번호
    pub id: u64,
    /// 본문
    pub text: String,
    /// 종류 (`message {kind}` 클래스)
    pub kind: Severity,
}

#[derive(Debug)]
struct SlotInner {
    current: Mutex<Option<InlineMessage>>,
    next_id: AtomicU64,
    lifetime: Duration,
}

/// 인라인 메시지 슬롯
#[derive(Debug, Clone)]
pub struct MessageSlot {
    inner: Arc<SlotInner>,
}

impl MessageSlot {
    /// `lifetime` 후 자동 제거되는 슬롯
    pub fn new(lifetime: Duration) -> Self {
        Self {
            inner: Arc::new(SlotInner {
                current: Mutex::new(None),
                next_id: AtomicU64::new(1),
                lifetime,
            }),
        }
    }

    /// 메시지 표시 (기존 메시지 대체)
    pub fn show(&self, text: impl Into<String>, kind: impl Into<Severity>) -> u64 {
        let id = self.inner.next_id.fetch_add(1, Ordering::Relaxed);
        *self.inner.current.lock() = Some(InlineMessage {
            id,
            text: text.into(),
            kind: kind.into(),
        });

        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                let weak = Arc::downgrade(&self.inner);
                let lifetime = self.inner.lifetime;
                handle.spawn(async move {
                    tokio::time::sleep(lifetime).await;
                    if let Some(inner) = weak.upgrade() {
                        let mut current = inner.current.lock();
                        if current.as_ref().is_some_and(|m| m.id == id) {
                            *current = None;
                            debug!("인라인 메시지 만료: {id}");
                        }
                    }
                });
            }
            Err(_) => warn!("tokio 런타임 없음, 인라인 메시지 자동 제거 생략"),
        }

        id
    }

    /// 현재 메시지
    pub fn current(&self) -> Option<InlineMessage> {
        self.inner.current.lock().clone()
    }

    /// 메시지 즉시 제거
    pub fn clear(&self) {
        *self.inner.current.lock() = None;
    }

    /// HTML 렌더링 (메시지가 없으면 빈 문자열)
    pub fn render(&self) -> String {
        match self.current() {
            Some(message) => format!(
                r#"<div class="message {}">{}</div>"#,
                escape_html(message.kind.as_str()),
                escape_html(&message.text)
            ),
            None => String::new(),
        }
    }
}
