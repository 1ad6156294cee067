//! Cross-crate 에러 경로 테스트.
//!
//! API 실패 응답 → NetworkError → 토스트, 세션 없음 → 인증 에러 흐름을 검증한다.

use peerview_core::config::{ApiConfig, ToastConfig};
use peerview_core::session::{require_login, MemorySessionStore};
use peerview_network::HttpApiClient;
use peerview_ui::html_surface::HtmlSurface;
use peerview_ui::ToastService;
use std::sync::Arc;

fn client_for(server: &mockito::ServerGuard) -> HttpApiClient {
    let config = ApiConfig {
        server_url: server.url(),
        ..ApiConfig::default()
    };
    HttpApiClient::new(&config).unwrap()
}

fn toasts() -> (Arc<HtmlSurface>, ToastService) {
    let surface = Arc::new(HtmlSurface::new());
    let service = ToastService::new(surface.clone(), ToastConfig::default());
    (surface, service)
}

#[tokio::test]
async fn validation_error_reaches_error_toast() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("POST", "/api/cycles")
        .with_status(422)
        .with_header("content-type", "application/json")
        .with_body(r#"{"detail":[{"loc":["body","name"],"msg":"field required"}]}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let (surface, service) = toasts();

    let err = client
        .post::<serde_json::Value, _>("/cycles", &serde_json::json!({}))
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(422));
    assert_eq!(err.to_string(), "body.name: field required");

    let id = service.report_error(&err);
    let html = surface.render();
    assert!(html.contains("body.name: field required"));
    assert!(html.contains(r#"class="toast error visible""#));
    assert!(html.contains(&format!(r#"data-toast-id="{id}""#)));
}

#[tokio::test]
async fn non_json_error_body_uses_generic_message() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/api/me")
        .with_status(500)
        .with_body("Internal Server Error")
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client.get::<serde_json::Value>("/me").await.unwrap_err();
    assert_eq!(err.to_string(), "An error occurred");
}

#[test]
fn whoami_without_session_is_auth_error() {
    let store = MemorySessionStore::new();
    let err = require_login(&store).unwrap_err();
    assert!(err.to_string().contains("인증"));

    let (surface, service) = toasts();
    service.report_error(&err);
    assert!(surface.render().contains("로그인이 필요합니다"));
}
