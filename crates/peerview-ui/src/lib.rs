//! # peerview-ui
//!
//! 프런트엔드 공용 UI 헬퍼.
//!
//! - [`toast`]: 토스트 알림 큐 (유일한 상태 보유 컴포넌트)
//! - [`html_surface`]: `ToastSurface` 포트의 HTML 구현
//! - [`button`]: 버튼 로딩 상태 토글
//! - [`message`]: 자동 만료 인라인 메시지
//! - [`markdown`]: 요약 텍스트용 마크다운 변환
//! - [`clipboard`]: 클립보드 복사 + 결과 토스트
//! - [`location`]: URL 경로 세그먼트 추출

pub mod button;
pub mod clipboard;
pub mod html_surface;
pub mod location;
pub mod markdown;
pub mod message;
pub mod toast;

pub use clipboard::ClipboardHelper;
pub use html_surface::HtmlSurface;
pub use message::MessageSlot;
pub use toast::ToastService;
