//! 세션 사용자 저장소.
//!
//! 브라우저 localStorage의 `user` 키에 해당하는 레코드를 JSON 파일로 보관한다.
//! 인증 자체는 서버 책임이며 여기서는 조회/저장/삭제만 한다.

use crate::error::CoreError;
use crate::models::user::CurrentUser;
use crate::ports::session_store::SessionStore;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;
use tracing::{debug, info};

/// 세션 파일 이름
pub const SESSION_FILE_NAME: &str = "user.json";

/// 로그아웃/미로그인 시 이동할 경로
pub const LOGIN_PATH: &str = "/";

/// JSON 파일 기반 세션 저장소
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    /// 지정된 파일 경로로 저장소 생성
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// 디렉토리 안의 `user.json`을 사용하는 저장소 생성
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(SESSION_FILE_NAME))
    }

    /// 세션 파일 경로
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStore for FileSessionStore {
    fn current_user(&self) -> Result<Option<CurrentUser>, CoreError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(None);
        }
        let user = serde_json::from_str(&content)?;
        Ok(Some(user))
    }

    fn save(&self, user: &CurrentUser) -> Result<(), CoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        let content = serde_json::to_string(user)?;
        fs::write(&self.path, content)?;
        debug!("세션 저장: {}", self.path.display());
        Ok(())
    }

    fn clear(&self) -> Result<(), CoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                info!("세션 삭제: {}", self.path.display());
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// 메모리 세션 저장소 (테스트, 임시 실행용)
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    user: RwLock<Option<CurrentUser>>,
}

impl MemorySessionStore {
    /// 빈 저장소 생성
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn current_user(&self) -> Result<Option<CurrentUser>, CoreError> {
        let guard = self
            .user
            .read()
            .map_err(|e| CoreError::Internal(format!("세션 잠금 실패: {e}")))?;
        Ok(guard.clone())
    }

    fn save(&self, user: &CurrentUser) -> Result<(), CoreError> {
        let mut guard = self
            .user
            .write()
            .map_err(|e| CoreError::Internal(format!("세션 잠금 실패: {e}")))?;
        *guard = Some(user.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), CoreError> {
        let mut guard = self
            .user
            .write()
            .map_err(|e| CoreError::Internal(format!("세션 잠금 실패: {e}")))?;
        *guard = None;
        Ok(())
    }
}

/// 로그인 필수 화면 진입 시 사용자 확인
///
/// 저장된 사용자가 없으면 `CoreError::Auth`를 반환하고,
/// 호출자는 [`LOGIN_PATH`]로 이동시킨다.
pub fn require_login(store: &dyn SessionStore) -> Result<CurrentUser, CoreError> {
    store
        .current_user()?
        .ok_or_else(|| CoreError::Auth("로그인이 필요합니다".to_string()))
}

/// 세션 삭제 후 이동할 경로 반환
pub fn logout(store: &dyn SessionStore) -> Result<&'static str, CoreError> {
    store.clear()?;
    Ok(LOGIN_PATH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use tempfile::TempDir;

    fn sample_user() -> CurrentUser {
        CurrentUser {
            id: 7,
            email: "ana@example.com".to_string(),
            name: "Ana".to_string(),
            is_demo: false,
            created_at: Some("2024-03-01T09:00:00".to_string()),
            extra: Default::default(),
        }
    }

    #[test]
    fn file_store_roundtrip_and_clear() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileSessionStore::in_dir(temp_dir.path());

        assert_eq!(store.current_user().unwrap(), None);

        store.save(&sample_user()).unwrap();
        assert_eq!(store.current_user().unwrap(), Some(sample_user()));

        store.clear().unwrap();
        assert!(!store.path().exists());
        assert_eq!(store.current_user().unwrap(), None);
    }

    #[test]
    fn clear_without_session_is_ok() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileSessionStore::in_dir(temp_dir.path());
        assert!(store.clear().is_ok());
    }

    #[test]
    fn corrupt_session_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileSessionStore::in_dir(temp_dir.path());
        fs::write(store.path(), "{not json").unwrap();
        assert_matches!(store.current_user(), Err(CoreError::Serialization(_)));
    }

    #[test]
    fn user_record_tolerates_missing_optional_fields() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileSessionStore::in_dir(temp_dir.path());
        fs::write(store.path(), r#"{"id":1,"email":"a@b.c","name":"A"}"#).unwrap();
        let user = store.current_user().unwrap().unwrap();
        assert!(!user.is_demo);
        assert!(user.created_at.is_none());
    }

    #[test]
    fn require_login_without_user_fails() {
        let store = MemorySessionStore::new();
        let err = require_login(&store).unwrap_err();
        assert_matches!(err, CoreError::Auth(_));
        assert!(err.to_string().contains("인증"));
    }

    #[test]
    fn require_login_returns_saved_user() {
        let store = MemorySessionStore::new();
        store.save(&sample_user()).unwrap();
        assert_eq!(require_login(&store).unwrap().name, "Ana");
    }

    #[test]
    fn logout_clears_and_redirects_home() {
        let store = MemorySessionStore::new();
        store.save(&sample_user()).unwrap();
        assert_eq!(logout(&store).unwrap(), "/");
        assert_eq!(store.current_user().unwrap(), None);
    }
}
