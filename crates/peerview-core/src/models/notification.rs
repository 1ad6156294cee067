//! 토스트 알림 모델.
//!
//! 알림 한 건의 식별자, 심각도, 수명 단계를 표현한다.
//! 큐 관리와 타이머는 `peerview-ui`의 `ToastService`가 담당한다.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// 기본 표시 시간 (밀리초)
pub const DEFAULT_DURATION_MS: u64 = 4_000;

/// 알림 고유 ID (프로세스 내 단조 증가)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(u64);

impl NotificationId {
    /// 다음 ID 발급
    pub fn next() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// 내부 숫자값
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "toast-{}", self.0)
    }
}

/// 알림 심각도.
///
/// 알 수 없는 값도 거부하지 않고 `Other`로 보존하여 그대로 렌더링한다.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Severity {
    /// 정보성 메시지
    #[default]
    Info,
    /// 작업 성공
    Success,
    /// 에러. 자동 소멸하지 않고 수동으로 닫아야 함
    Error,
    /// 분류되지 않은 값 (원문 유지)
    Other(String),
}

impl Severity {
    /// CSS 클래스로 쓰이는 문자열
    pub fn as_str(&self) -> &str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Error => "error",
            Severity::Other(raw) => raw,
        }
    }

    /// 닫기 버튼 표시 여부 (에러만)
    pub fn is_dismissible(&self) -> bool {
        matches!(self, Severity::Error)
    }

    /// 타이머에 의한 자동 소멸 여부
    pub fn auto_dismisses(&self) -> bool {
        !self.is_dismissible()
    }
}

impl From<&str> for Severity {
    fn from(raw: &str) -> Self {
        match raw {
            "info" => Severity::Info,
            "success" => Severity::Success,
            "error" => Severity::Error,
            other => Severity::Other(other.to_string()),
        }
    }
}

impl From<String> for Severity {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "info" | "success" | "error" => Severity::from(raw.as_str()),
            _ => Severity::Other(raw),
        }
    }
}

impl From<Severity> for String {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 알림 수명 단계
///
/// `Created → Visible → Dismissing → Removed`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationPhase {
    /// 컨테이너에 추가됨 (진입 애니메이션 전)
    Created,
    /// 화면에 표시 중
    Visible,
    /// 퇴장 애니메이션 진행 중
    Dismissing,
    /// 컨테이너에서 제거됨
    Removed,
}

impl NotificationPhase {
    /// 허용된 전이인지 확인
    pub fn can_advance_to(self, next: NotificationPhase) -> bool {
        use NotificationPhase::*;
        matches!(
            (self, next),
            (Created, Visible)
                | (Created, Removed)
                | (Visible, Dismissing)
                | (Visible, Removed)
                | (Dismissing, Removed)
        )
    }
}

/// 표시 요청 한 건
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// 고유 ID
    pub id: NotificationId,
    /// 본문
    pub message: String,
    /// 심각도
    pub severity: Severity,
    /// 자동 소멸까지의 표시 시간 (에러에서는 무시)
    pub duration: Duration,
}

impl Notification {
    /// 새 알림 생성 (ID 자동 발급)
    pub fn new(message: impl Into<String>, severity: impl Into<Severity>, duration: Duration) -> Self {
        Self {
            id: NotificationId::next(),
            message: message.into(),
            severity: severity.into(),
            duration,
        }
    }

    /// 기본 표시 시간(4초)의 알림 생성
    pub fn with_default_duration(message: impl Into<String>, severity: impl Into<Severity>) -> Self {
        Self::new(message, severity, Duration::from_millis(DEFAULT_DURATION_MS))
    }

    /// 닫기 버튼 표시 여부
    pub fn is_dismissible(&self) -> bool {
        self.severity.is_dismissible()
    }
}
