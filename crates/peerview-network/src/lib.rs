//! # peerview-network
//!
//! REST API 요청 헬퍼.
//! 모든 요청은 고정된 base 경로(`/api`) 아래로 전송되며,
//! 실패 응답은 사람이 읽을 수 있는 메시지 하나로 정규화된다.
//!
//! ## 사용 예시
//!
//! ```rust,ignore
//! use peerview_core::config::ApiConfig;
//! use peerview_network::http_client::{HttpApiClient, RequestOptions};
//!
//! let client = HttpApiClient::new(&ApiConfig::default())?;
//! let cycles: serde_json::Value = client.get("/cycles").await?;
//! ```

pub mod error;
pub mod error_body;
pub mod http_client;

pub use error::NetworkError;
pub use http_client::{HttpApiClient, RequestBody, RequestOptions};
pub use reqwest::Method;
