//! 세션 사용자 저장소 포트.
//!
//! 구현: `peerview-core::session` (`FileSessionStore`, `MemorySessionStore`)

use crate::error::CoreError;
use crate::models::user::CurrentUser;

/// 로그인한 사용자 레코드 저장소
pub trait SessionStore: Send + Sync {
    /// 저장된 사용자 조회 (없으면 `None`)
    fn current_user(&self) -> Result<Option<CurrentUser>, CoreError>;

    /// 사용자 저장 (기존 레코드 덮어쓰기)
    fn save(&self, user: &CurrentUser) -> Result<(), CoreError>;

    /// 사용자 삭제. 저장된 레코드가 없어도 성공.
    fn clear(&self) -> Result<(), CoreError>;
}
