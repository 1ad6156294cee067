//! 네트워크 어댑터 에러.

use peerview_core::error::CoreError;
use thiserror::Error;

/// 요청 헬퍼가 돌려주는 단일 실패 타입.
///
/// `Display`는 그대로 토스트에 표시할 수 있는 메시지다.
#[derive(Debug, Error)]
pub enum NetworkError {
    /// 서버가 실패 상태 코드를 반환함 (메시지는 응답 본문에서 추출)
    #[error("{message}")]
    Api {
        /// HTTP 상태 코드
        status: u16,
        /// 응답 본문에서 추출한 메시지
        message: String,
    },

    /// 연결 실패, 타임아웃 등 전송 계층 에러
    #[error("네트워크 에러: {0}")]
    Transport(String),

    /// 성공 응답 본문 파싱 실패
    #[error("응답 파싱 실패: {0}")]
    Decode(String),

    /// 잘못된 요청 구성 (헤더 이름/값 등)
    #[error("잘못된 요청: {0}")]
    InvalidRequest(String),

    /// 코어 에러 래핑
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl NetworkError {
    /// 서버 응답 상태 코드 (API 에러인 경우)
    pub fn status(&self) -> Option<u16> {
        match self {
            NetworkError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
