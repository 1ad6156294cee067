//! 클립보드 포트.
//!
//! 구현: `peerview-ui` crate (arboard, 외부 복사 명령)

use crate::error::CoreError;

/// 텍스트를 시스템 클립보드에 쓰는 백엔드
pub trait ClipboardBackend: Send + Sync {
    /// 백엔드 이름 (로그용)
    fn name(&self) -> &str;

    /// 텍스트 복사
    fn write_text(&self, text: &str) -> Result<(), CoreError>;
}
