//! # peerview-app
//!
//! peerview CLI 진입점.
//! 설정 로드, 세션 저장소와 API 클라이언트 생성, 토스트 표시면 연결을 담당한다.

mod commands;
mod terminal_surface;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use peerview_core::config::AppConfig;
use peerview_core::config_manager::ConfigManager;
use peerview_core::session::FileSessionStore;
use peerview_network::HttpApiClient;
use peerview_ui::{ClipboardHelper, ToastService};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use crate::commands::LabelKind;
use crate::terminal_surface::TerminalSurface;

/// peerview 피드백 도구 CLI
#[derive(Parser, Debug)]
#[command(name = "peerview")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// 서버 URL 지정 (기본: 설정 파일 값)
    #[arg(long, short = 's', global = true)]
    server: Option<String>,

    /// 로그 레벨 (trace, debug, info, warn, error)
    #[arg(long, short = 'l', default_value = "warn", global = true)]
    log_level: String,

    /// 설정 파일 경로 (기본: 플랫폼 설정 디렉토리의 config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// API 엔드포인트 호출 (`/api` 아래 경로)
    Fetch {
        endpoint: String,
        #[arg(long, short = 'X', default_value = "GET")]
        method: String,
        /// 요청 본문 (JSON이 아니면 텍스트로 전송)
        #[arg(long, short = 'd')]
        body: Option<String>,
    },
    /// 마크다운 파일을 HTML로 변환 (`-`이면 stdin)
    Render { source: PathBuf },
    /// 코드값 라벨 출력
    Label {
        #[arg(value_enum)]
        kind: LabelKind,
        code: String,
    },
    /// 텍스트를 클립보드에 복사
    Copy { text: String },
    /// 로그인 사용자 확인
    Whoami,
    /// 세션 삭제
    Logout,
    /// 설정 파일 조회/변경
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigAction {
    /// 설정 파일 경로와 내용 출력
    Show,
    /// 키 하나 변경 (예: `api.server_url https://reviews.example.com`)
    Set { key: String, value: String },
}

/// 설정 관리자 생성 (경로 지정 시 해당 파일 사용)
fn load_config(path: Option<PathBuf>) -> Result<ConfigManager> {
    let manager = match path {
        Some(path) => ConfigManager::with_path(path)?,
        None => ConfigManager::new().or_else(|e| {
            warn!("설정 관리자 초기화 실패, 현재 디렉토리 사용: {e}");
            ConfigManager::with_path(PathBuf::from("./peerview-config.json"))
        })?,
    };
    info!("설정 파일: {:?}", manager.config_path());
    Ok(manager)
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level)),
        )
        .init();

    let mut config_manager = load_config(args.config.clone())?;
    let mut config: AppConfig = config_manager.get();
    if let Some(server) = &args.server {
        config.api.server_url = server.clone();
    }
    debug!("API 서버: {}{}", config.api.server_url, config.api.base_path);

    let toasts = ToastService::new(Arc::new(TerminalSurface::new()), config.toast.clone());
    toasts.init();

    // 세션 파일은 설정 파일과 같은 디렉토리에 둔다
    let session_dir = config_manager
        .config_path()
        .parent()
        .map(Path::to_path_buf)
        .context("설정 파일 디렉토리를 알 수 없음")?;
    let sessions = FileSessionStore::in_dir(&session_dir);

    let succeeded = match &args.command {
        Command::Fetch {
            endpoint,
            method,
            body,
        } => {
            let client = HttpApiClient::new(&config.api)?;
            commands::fetch(&client, &toasts, endpoint, method, body.as_deref()).await?
        }
        Command::Render { source } => commands::render(source)?,
        Command::Label { kind, code } => commands::label(*kind, code),
        Command::Copy { text } => {
            let helper = ClipboardHelper::system(toasts.clone());
            commands::copy(&helper, text)
        }
        Command::Whoami => commands::whoami(&sessions, &toasts),
        Command::Logout => commands::sign_out(&sessions, &toasts)?,
        Command::Config { action } => match action {
            ConfigAction::Show => commands::config_show(&config_manager)?,
            ConfigAction::Set { key, value } => {
                commands::config_set(&mut config_manager, &toasts, key, value)
            }
        },
    };

    toasts.dispose();

    Ok(if succeeded {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
