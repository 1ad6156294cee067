//! HTML 표시면.
//!
//! `ToastSurface` 포트 구현. 컨테이너와 토스트 요소를 메모리에 유지하고
//! 필요할 때 HTML 조각으로 렌더링한다.

use parking_lot::Mutex;
use peerview_core::models::notification::{Notification, NotificationId};
use peerview_core::ports::surface::{ToastSurface, CONTAINER_ID};
use std::fmt::Write as _;
use tracing::debug;

/// 진입 애니메이션 클래스
pub const VISIBLE_CLASS: &str = "visible";

/// 토스트 요소 하나
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastElement {
    /// 알림 ID
    pub id: NotificationId,
    /// 클래스 목록 (`toast`, 심각도, `visible`)
    pub classes: Vec<String>,
    /// 본문
    pub message: String,
    /// 닫기 버튼 포함 여부
    pub dismissible: bool,
}

#[derive(Debug, Default)]
struct SurfaceState {
    mounted: bool,
    /// 호스트 페이지가 제공한 컨테이너 (해제 시에도 남김)
    host_owned: bool,
    containers_created: usize,
    elements: Vec<ToastElement>,
}

/// 메모리 기반 HTML 표시면
#[derive(Debug, Default)]
pub struct HtmlSurface {
    state: Mutex<SurfaceState>,
}

impl HtmlSurface {
    /// 컨테이너가 없는 페이지
    pub fn new() -> Self {
        Self::default()
    }

    /// 호스트 페이지가 이미 컨테이너를 제공하는 경우
    pub fn with_container() -> Self {
        Self {
            state: Mutex::new(SurfaceState {
                mounted: true,
                host_owned: true,
                ..SurfaceState::default()
            }),
        }
    }

    /// 컨테이너 존재 여부
    pub fn is_mounted(&self) -> bool {
        self.state.lock().mounted
    }

    /// 이 표시면이 직접 만든 컨테이너 수
    pub fn containers_created(&self) -> usize {
        self.state.lock().containers_created
    }

    /// 문서 순서대로 요소 ID
    pub fn element_ids(&self) -> Vec<NotificationId> {
        self.state.lock().elements.iter().map(|e| e.id).collect()
    }

    /// 요소 스냅샷
    pub fn elements(&self) -> Vec<ToastElement> {
        self.state.lock().elements.clone()
    }

    /// 요소가 클래스를 가지고 있는지
    pub fn has_class(&self, id: NotificationId, class: &str) -> bool {
        self.state
            .lock()
            .elements
            .iter()
            .find(|e| e.id == id)
            .is_some_and(|e| e.classes.iter().any(|c| c == class))
    }

    /// 컨테이너를 HTML로 렌더링. 컨테이너가 없으면 빈 문자열.
    pub fn render(&self) -> String {
        let state = self.state.lock();
        if !state.mounted {
            return String::new();
        }

        let mut html = format!(r#"<div id="{CONTAINER_ID}" role="status" aria-live="polite">"#);
        for element in &state.elements {
            let _ = write!(
                html,
                r#"<div class="{}" data-toast-id="{}"><span>{}</span>"#,
                escape_html(&element.classes.join(" ")),
                element.id,
                escape_html(&element.message)
            );
            if element.dismissible {
                html.push_str(r#"<button class="dismiss" aria-label="Dismiss">×</button>"#);
            }
            html.push_str("</div>");
        }
        html.push_str("</div>");
        html
    }
}

impl ToastSurface for HtmlSurface {
    fn mount(&self) {
        let mut state = self.state.lock();
        if !state.mounted {
            state.mounted = true;
            state.containers_created += 1;
            debug!("#{CONTAINER_ID} 생성");
        }
    }

    fn unmount(&self) {
        let mut state = self.state.lock();
        state.elements.clear();
        if !state.host_owned {
            state.mounted = false;
        }
    }

    fn append(&self, notification: &Notification) {
        let mut state = self.state.lock();
        state.elements.push(ToastElement {
            id: notification.id,
            classes: vec!["toast".to_string(), notification.severity.to_string()],
            message: notification.message.clone(),
            dismissible: notification.is_dismissible(),
        });
    }

    fn set_visible(&self, id: NotificationId, visible: bool) {
        let mut state = self.state.lock();
        let Some(element) = state.elements.iter_mut().find(|e| e.id == id) else {
            return;
        };
        element.classes.retain(|c| c != VISIBLE_CLASS);
        if visible {
            element.classes.push(VISIBLE_CLASS.to_string());
        }
    }

    fn remove(&self, id: NotificationId) {
        self.state.lock().elements.retain(|e| e.id != id);
    }
}

/// HTML 텍스트/속성 이스케이프
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}
