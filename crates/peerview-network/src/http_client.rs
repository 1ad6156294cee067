//! HTTP REST API 클라이언트.
//!
//! 기본 `Content-Type` 헤더 주입, 구조화된 본문 직렬화,
//! 실패 응답 정규화를 담당하는 얇은 요청 래퍼.

use peerview_core::config::{ApiConfig, ErrorDetailPolicy, HeaderPrecedence};
use peerview_core::error::CoreError;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

use crate::error::NetworkError;
use crate::error_body::extract_error_message;

/// 기본 Content-Type
const DEFAULT_CONTENT_TYPE: &str = "application/json";

/// 요청 본문
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    /// 구조화된 값. 전송 전에 JSON 문자열로 직렬화
    Json(Value),
    /// 이미 직렬화된 텍스트. 그대로 전송
    Text(String),
}

/// 요청 옵션 (메서드, 추가 헤더, 본문)
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// HTTP 메서드 (기본 GET)
    pub method: Method,
    /// 호출자 지정 헤더 (삽입 순서 유지)
    pub headers: Vec<(String, String)>,
    /// 본문
    pub body: Option<RequestBody>,
}

impl RequestOptions {
    /// 빈 GET 옵션
    pub fn new() -> Self {
        Self::default()
    }

    /// 메서드 지정
    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// 헤더 추가
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// 구조화된 본문 지정
    pub fn json(mut self, body: Value) -> Self {
        self.body = Some(RequestBody::Json(body));
        self
    }

    /// 텍스트 본문 지정
    pub fn text(mut self, body: impl Into<String>) -> Self {
        self.body = Some(RequestBody::Text(body.into()));
        self
    }
}

/// 기본 헤더와 호출자 헤더 병합
///
/// 헤더 이름은 대소문자를 구분하지 않는다.
pub fn merge_headers(
    caller: &[(String, String)],
    precedence: HeaderPrecedence,
) -> Result<HeaderMap, NetworkError> {
    let mut headers = HeaderMap::new();
    let default_value = HeaderValue::from_static(DEFAULT_CONTENT_TYPE);

    if precedence == HeaderPrecedence::CallerWins {
        headers.insert(CONTENT_TYPE, default_value.clone());
    }

    for (name, value) in caller {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| NetworkError::InvalidRequest(format!("헤더 이름 '{name}': {e}")))?;
        let value = HeaderValue::from_str(value)
            .map_err(|e| NetworkError::InvalidRequest(format!("헤더 값 '{name}': {e}")))?;
        headers.insert(name, value);
    }

    if precedence == HeaderPrecedence::DefaultWins {
        headers.insert(CONTENT_TYPE, default_value);
    }

    Ok(headers)
}

/// REST API 클라이언트
pub struct HttpApiClient {
    client: reqwest::Client,
    base_url: String,
    header_precedence: HeaderPrecedence,
    error_detail: ErrorDetailPolicy,
}

impl HttpApiClient {
    /// 설정으로 새 HTTP API 클라이언트 생성
    pub fn new(config: &ApiConfig) -> Result<Self, NetworkError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| CoreError::Internal(format!("HTTP 클라이언트 빌드 실패: {e}")))?;

        Ok(Self {
            client,
            base_url: format!(
                "{}{}",
                config.server_url.trim_end_matches('/'),
                config.base_path
            ),
            header_precedence: config.header_precedence,
            error_detail: config.error_detail,
        })
    }

    /// 헤더 병합 우선순위 변경
    pub fn with_header_precedence(mut self, precedence: HeaderPrecedence) -> Self {
        self.header_precedence = precedence;
        self
    }

    /// 에러 메시지 추출 정책 변경
    pub fn with_error_detail(mut self, policy: ErrorDetailPolicy) -> Self {
        self.error_detail = policy;
        self
    }

    /// 엔드포인트의 전체 URL
    pub fn url_for(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    /// 요청 실행
    ///
    /// 성공 시 응답 JSON을 `T`로 역직렬화한다. 빈 본문은 `null`로 취급하므로
    /// `()`, `Option<_>`, `Value`로 받을 수 있다.
    pub async fn request<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<T, NetworkError> {
        let url = self.url_for(endpoint);
        let headers = merge_headers(&options.headers, self.header_precedence)?;
        debug!("API 요청: {} {url}", options.method);

        let mut req = self
            .client
            .request(options.method.clone(), &url)
            .headers(headers);

        match options.body {
            Some(RequestBody::Json(value)) => {
                let text = serde_json::to_string(&value).map_err(CoreError::from)?;
                req = req.body(text);
            }
            Some(RequestBody::Text(text)) => {
                req = req.body(text);
            }
            None => {}
        }

        let resp = req.send().await.map_err(|e| {
            warn!("API 요청 실패: {} {url}: {e}", options.method);
            NetworkError::Transport(e.to_string())
        })?;

        let status = resp.status();
        let body = resp.text().await;

        if !status.is_success() {
            // 에러 응답은 본문을 못 읽어도 일반 메시지로 대체
            let text = body.unwrap_or_else(|e| {
                warn!("에러 응답 본문 읽기 실패: {e}");
                String::new()
            });
            let message = extract_error_message(&text, self.error_detail);
            debug!("API 에러 응답 ({status}): {message}");
            return Err(NetworkError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let text = body.map_err(|e| {
            warn!("응답 본문 읽기 실패: {} {url}: {e}", options.method);
            NetworkError::Transport(e.to_string())
        })?;
        let payload = if text.trim().is_empty() { "null" } else { text.as_str() };
        serde_json::from_str(payload).map_err(|e| NetworkError::Decode(e.to_string()))
    }

    /// GET 요청
    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, NetworkError> {
        self.request(endpoint, RequestOptions::new()).await
    }

    /// POST 요청 (구조화된 본문)
    pub async fn post<T, B>(&self, endpoint: &str, body: &B) -> Result<T, NetworkError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let value = serde_json::to_value(body).map_err(CoreError::from)?;
        self.request(endpoint, RequestOptions::new().method(Method::POST).json(value))
            .await
    }

    /// PUT 요청 (구조화된 본문)
    pub async fn put<T, B>(&self, endpoint: &str, body: &B) -> Result<T, NetworkError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let value = serde_json::to_value(body).map_err(CoreError::from)?;
        self.request(endpoint, RequestOptions::new().method(Method::PUT).json(value))
            .await
    }

    /// DELETE 요청
    pub async fn delete<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, NetworkError> {
        self.request(endpoint, RequestOptions::new().method(Method::DELETE))
            .await
    }
}
