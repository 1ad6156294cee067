//! 애플리케이션 설정 구조체.
//!
//! API 서버 주소, 요청 헤더/에러 처리 정책, 토스트와 인라인 메시지 타이밍을
//! 정의한다. `ConfigManager`를 통해 JSON 파일에서 로드.

use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// 최상위 애플리케이션 설정
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// API 연결 설정
    pub api: ApiConfig,
    /// 토스트 알림 설정
    #[serde(default)]
    pub toast: ToastConfig,
    /// 인라인 메시지 설정
    #[serde(default)]
    pub message: MessageConfig,
}

// ============================================================
// API 설정
// ============================================================

/// 기본 헤더와 호출자 헤더가 겹칠 때의 우선순위
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeaderPrecedence {
    /// 호출자 헤더가 기본 `Content-Type`을 덮어씀
    #[default]
    CallerWins,
    /// 기본 헤더가 호출자 헤더를 덮어씀 (초기 동작)
    DefaultWins,
}

/// 실패 응답 본문에서 메시지를 뽑는 방식
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorDetailPolicy {
    /// 문자열 `detail`만 인식
    Basic,
    /// 문자열 `detail` + 검증 에러 배열 (`loc`/`msg`)
    #[default]
    Validation,
}

/// API 연결 설정
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// 서버 origin (예: "http://localhost:8000")
    pub server_url: String,
    /// 모든 엔드포인트 앞에 붙는 경로
    #[serde(default = "default_base_path")]
    pub base_path: String,
    /// 요청 타임아웃 (초)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// 헤더 병합 우선순위
    #[serde(default)]
    pub header_precedence: HeaderPrecedence,
    /// 에러 메시지 추출 정책
    #[serde(default)]
    pub error_detail: ErrorDetailPolicy,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            server_url: default_server_url(),
            base_path: default_base_path(),
            timeout_secs: default_timeout_secs(),
            header_precedence: HeaderPrecedence::default(),
            error_detail: ErrorDetailPolicy::default(),
        }
    }
}

// ============================================================
// 토스트/메시지 설정
// ============================================================

/// 동시에 보이는 토스트 수의 상한
pub const MAX_VISIBLE: usize = 3;

/// 토스트 알림 설정
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToastConfig {
    /// 동시에 보이는 최대 개수 (`1..=MAX_VISIBLE`로 제한되어 적용)
    #[serde(default = "default_max_visible")]
    pub max_visible: usize,
    /// 기본 표시 시간 (밀리초)
    #[serde(default = "default_duration_ms")]
    pub default_duration_ms: u64,
    /// 퇴장 애니메이션 시간 (밀리초)
    #[serde(default = "default_exit_delay_ms")]
    pub exit_delay_ms: u64,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            max_visible: default_max_visible(),
            default_duration_ms: default_duration_ms(),
            exit_delay_ms: default_exit_delay_ms(),
        }
    }
}

impl ToastConfig {
    /// 실제 적용되는 최대 표시 개수
    pub fn visible_cap(&self) -> usize {
        self.max_visible.clamp(1, MAX_VISIBLE)
    }

    /// 기본 표시 시간을 Duration으로 반환
    pub fn default_duration(&self) -> Duration {
        Duration::from_millis(self.default_duration_ms)
    }

    /// 퇴장 애니메이션 시간을 Duration으로 반환
    pub fn exit_delay(&self) -> Duration {
        Duration::from_millis(self.exit_delay_ms)
    }
}

/// 인라인 메시지 설정
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageConfig {
    /// 메시지 자동 제거 시간 (밀리초)
    #[serde(default = "default_message_lifetime_ms")]
    pub lifetime_ms: u64,
}

impl Default for MessageConfig {
    fn default() -> Self {
        Self {
            lifetime_ms: default_message_lifetime_ms(),
        }
    }
}

impl MessageConfig {
    /// 자동 제거 시간을 Duration으로 반환
    pub fn lifetime(&self) -> Duration {
        Duration::from_millis(self.lifetime_ms)
    }
}

// ============================================================
// AppConfig impl
// ============================================================

impl AppConfig {
    /// 기본 설정값 반환
    pub fn default_config() -> Self {
        Self {
            api: ApiConfig::default(),
            toast: ToastConfig::default(),
            message: MessageConfig::default(),
        }
    }

    /// 요청 타임아웃을 Duration으로 반환
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.api.timeout_secs)
    }

    /// `섹션.필드` 키로 값 하나를 변경
    ///
    /// 정책 값은 설정 파일과 같은 snake_case 이름을 받는다.
    pub fn set_field(&mut self, key: &str, value: &str) -> Result<(), CoreError> {
        match key {
            "api.server_url" => self.api.server_url = value.to_string(),
            "api.base_path" => self.api.base_path = value.to_string(),
            "api.timeout_secs" => self.api.timeout_secs = parse_number(key, value)?,
            "api.header_precedence" => self.api.header_precedence = parse_named(key, value)?,
            "api.error_detail" => self.api.error_detail = parse_named(key, value)?,
            "toast.max_visible" => self.toast.max_visible = parse_number(key, value)?,
            "toast.default_duration_ms" => {
                self.toast.default_duration_ms = parse_number(key, value)?
            }
            "toast.exit_delay_ms" => self.toast.exit_delay_ms = parse_number(key, value)?,
            "message.lifetime_ms" => self.message.lifetime_ms = parse_number(key, value)?,
            _ => return Err(CoreError::Config(format!("알 수 없는 설정 키: {key}"))),
        }
        Ok(())
    }
}

fn parse_number<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, CoreError>
where
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e| CoreError::Config(format!("{key} 값이 올바르지 않음: {value}: {e}")))
}

fn parse_named<T: serde::de::DeserializeOwned>(key: &str, value: &str) -> Result<T, CoreError> {
    serde_json::from_value(serde_json::Value::String(value.to_string()))
        .map_err(|e| CoreError::Config(format!("{key} 값이 올바르지 않음: {value}: {e}")))
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::default_config()
    }
}

// ============================================================
// 기본값 함수
// ============================================================

fn default_server_url() -> String {
    "http://localhost:8000".to_string()
}
fn default_base_path() -> String {
    "/api".to_string()
}
fn default_timeout_secs() -> u64 {
    30
}
fn default_max_visible() -> usize {
    MAX_VISIBLE
}
fn default_duration_ms() -> u64 {
    crate::models::notification::DEFAULT_DURATION_MS
}
fn default_exit_delay_ms() -> u64 {
    300
}
fn default_message_lifetime_ms() -> u64 {
    5_000
}
