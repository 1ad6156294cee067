//! 설정 및 와이어링 통합 테스트.
//!
//! AppConfig → 어댑터 생성, 설정 파일/세션 파일 흐름 검증.

use peerview_core::config::AppConfig;
use peerview_core::config_manager::ConfigManager;
use peerview_core::models::user::CurrentUser;
use peerview_core::ports::session_store::SessionStore;
use peerview_core::session::{logout, require_login, FileSessionStore, LOGIN_PATH};
use peerview_network::HttpApiClient;
use peerview_ui::html_surface::HtmlSurface;
use peerview_ui::{MessageSlot, ToastService};
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;

#[test]
fn config_defaults_are_valid() {
    let config = AppConfig::default_config();

    assert_eq!(config.api.server_url, "http://localhost:8000");
    assert_eq!(config.api.base_path, "/api");
    assert!(config.request_timeout() > Duration::ZERO);

    assert_eq!(config.toast.max_visible, 3);
    assert_eq!(config.toast.visible_cap(), 3);
    assert_eq!(config.toast.default_duration(), Duration::from_millis(4_000));
    assert_eq!(config.toast.exit_delay(), Duration::from_millis(300));
    assert_eq!(config.message.lifetime(), Duration::from_secs(5));
}

#[test]
fn client_built_from_saved_config() {
    let temp_dir = TempDir::new().unwrap();
    let mut manager = ConfigManager::with_path(temp_dir.path().join("config.json")).unwrap();
    manager
        .set("api.server_url", "http://feedback.internal:9000/")
        .unwrap();

    let reloaded = ConfigManager::with_path(temp_dir.path().join("config.json")).unwrap();
    let client = HttpApiClient::new(&reloaded.get().api).unwrap();
    assert_eq!(
        client.url_for("/cycles/3"),
        "http://feedback.internal:9000/api/cycles/3"
    );
}

#[test]
fn session_file_login_and_logout() {
    let temp_dir = TempDir::new().unwrap();
    let store = FileSessionStore::in_dir(temp_dir.path());
    store
        .save(&CurrentUser {
            id: 1,
            email: "demo@example.com".to_string(),
            name: "Demo".to_string(),
            is_demo: true,
            created_at: None,
            extra: Default::default(),
        })
        .unwrap();

    assert_eq!(require_login(&store).unwrap().name, "Demo");
    assert_eq!(logout(&store).unwrap(), LOGIN_PATH);
    assert!(require_login(&store).is_err());
}

#[tokio::test(start_paused = true)]
async fn toast_and_message_timings_follow_config() {
    let config = AppConfig::default_config();
    let surface = Arc::new(HtmlSurface::new());
    let toasts = ToastService::new(surface.clone(), config.toast.clone());
    let slot = MessageSlot::new(config.message.lifetime());

    toasts.success("Saved");
    slot.show("Saved", "success");

    tokio::time::sleep(config.toast.default_duration() + config.toast.exit_delay()).await;
    tokio::time::sleep(Duration::from_millis(1)).await;
    assert_eq!(toasts.visible_count(), 0);
    assert!(slot.current().is_some());

    tokio::time::sleep(config.message.lifetime()).await;
    assert!(slot.current().is_none());
}
