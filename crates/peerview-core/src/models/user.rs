//! 세션 사용자 모델.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// 로그인 시 서버가 돌려주는 사용자 레코드
///
/// 모르는 필드는 `extra`에 보존되어 다시 저장할 때 그대로 기록된다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    /// 사용자 ID
    pub id: i64,
    /// 이메일 (없으면 빈 문자열)
    #[serde(default)]
    pub email: String,
    /// 표시 이름
    pub name: String,
    /// 데모 계정 여부
    #[serde(default)]
    pub is_demo: bool,
    /// 생성 시각 (서버 원문 그대로)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// 그 외 필드
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
