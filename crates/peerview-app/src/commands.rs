//! 서브커맨드 실행.
//!
//! 각 핸들러는 결과를 토스트로 알리고 성공 여부를 돌려준다.

use anyhow::{Context, Result};
use peerview_core::config_manager::ConfigManager;
use peerview_core::labels::{format_frequency, format_relationship};
use peerview_core::ports::session_store::SessionStore;
use peerview_core::session::{logout, require_login};
use peerview_network::{HttpApiClient, Method, RequestOptions};
use peerview_ui::markdown;
use peerview_ui::{ClipboardHelper, ToastService};
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// 라벨 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum LabelKind {
    Relationship,
    Frequency,
}

/// API 엔드포인트 호출 후 응답 JSON 출력
pub async fn fetch(
    client: &HttpApiClient,
    toasts: &ToastService,
    endpoint: &str,
    method: &str,
    body: Option<&str>,
) -> Result<bool> {
    let method = method
        .to_uppercase()
        .parse::<Method>()
        .with_context(|| format!("잘못된 HTTP 메서드: {method}"))?;

    let mut options = RequestOptions::new().method(method);
    if let Some(body) = body {
        options = match serde_json::from_str::<serde_json::Value>(body) {
            Ok(value) => options.json(value),
            Err(_) => options.text(body),
        };
    }

    debug!("요청: {}", client.url_for(endpoint));
    match client.request::<serde_json::Value>(endpoint, options).await {
        Ok(value) => {
            println!("{}", serde_json::to_string_pretty(&value)?);
            Ok(true)
        }
        Err(e) => {
            toasts.report_error(&e);
            Ok(false)
        }
    }
}

/// 마크다운 파일(`-`이면 stdin)을 HTML로 변환
pub fn render(source: &Path) -> Result<bool> {
    let text = if source == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("stdin 읽기 실패")?;
        buf
    } else {
        std::fs::read_to_string(source)
            .with_context(|| format!("파일 읽기 실패: {}", source.display()))?
    };

    println!("{}", markdown::render(&text));
    Ok(true)
}

/// 코드값 라벨 출력
pub fn label(kind: LabelKind, code: &str) -> bool {
    let text = match kind {
        LabelKind::Relationship => format_relationship(code),
        LabelKind::Frequency => format_frequency(code),
    };
    println!("{text}");
    true
}

/// 클립보드 복사
pub fn copy(helper: &ClipboardHelper, text: &str) -> bool {
    helper.copy(text)
}

/// 로그인 사용자 출력
pub fn whoami(store: &dyn SessionStore, toasts: &ToastService) -> bool {
    match require_login(store) {
        Ok(user) => {
            let demo = if user.is_demo { " (demo)" } else { "" };
            println!("{} <{}>{demo}", user.name, user.email);
            true
        }
        Err(e) => {
            toasts.report_error(&e);
            false
        }
    }
}

/// 세션 삭제 후 이동 경로 출력
pub fn sign_out(store: &dyn SessionStore, toasts: &ToastService) -> Result<bool> {
    let redirect = logout(store)?;
    info!("로그아웃 완료");
    toasts.info("Signed out");
    println!("{redirect}");
    Ok(true)
}

/// 설정 파일 경로와 내용 출력
pub fn config_show(manager: &ConfigManager) -> Result<bool> {
    println!("# {}", manager.config_path().display());
    println!("{}", serde_json::to_string_pretty(&manager.get())?);
    Ok(true)
}

/// 설정 키 변경 후 저장
pub fn config_set(
    manager: &mut ConfigManager,
    toasts: &ToastService,
    key: &str,
    value: &str,
) -> bool {
    match manager.set(key, value) {
        Ok(_) => {
            toasts.success(format!("{key} updated"));
            true
        }
        Err(e) => {
            toasts.report_error(&e);
            false
        }
    }
}
