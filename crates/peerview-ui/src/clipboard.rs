//! 클립보드 어댑터와 복사 헬퍼.
//!
//! macOS/Windows는 arboard가 1차, 플랫폼 복사 명령(pbcopy, clip)이 대체 백엔드다.
//! X11/Wayland에서는 클립보드 내용을 소유 프로세스가 계속 제공해야 하므로
//! 프로세스 종료 후에도 남는 wl-copy/xclip을 1차로 쓰고 arboard를 대체로 둔다.
//! 결과는 토스트로 알린다.

use peerview_core::error::CoreError;
use peerview_core::ports::clipboard::ClipboardBackend;
use std::io::Write;
use std::process::{Command, Stdio};
use std::time::Duration;
use tracing::{debug, warn};

use crate::toast::ToastService;

/// 복사 성공 토스트
pub const COPY_SUCCESS_MESSAGE: &str = "Copied to clipboard!";
/// 복사 실패 토스트
pub const COPY_FAILURE_MESSAGE: &str = "Failed to copy";

/// X11/Wayland에서 arboard가 클립보드를 붙잡고 기다리는 최대 시간
pub const DEFAULT_LINUX_HOLD: Duration = Duration::from_secs(2);

/// 클립보드 소유자가 프로세스와 함께 사라지는 플랫폼인지
pub const fn selection_needs_owner() -> bool {
    cfg!(all(
        unix,
        not(any(target_os = "macos", target_os = "android", target_os = "emscripten"))
    ))
}

/// arboard 기반 시스템 클립보드
#[derive(Debug)]
pub struct ArboardClipboard {
    /// X11/Wayland에서 다른 앱이 가져갈 때까지 기다리는 시간
    hold: Duration,
}

impl ArboardClipboard {
    pub fn new() -> Self {
        Self::with_hold(DEFAULT_LINUX_HOLD)
    }

    pub fn with_hold(hold: Duration) -> Self {
        Self { hold }
    }
}

impl Default for ArboardClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl ClipboardBackend for ArboardClipboard {
    fn name(&self) -> &str {
        "arboard"
    }

    fn write_text(&self, text: &str) -> Result<(), CoreError> {
        let mut clipboard = arboard::Clipboard::new()
            .map_err(|e| CoreError::Clipboard(format!("클립보드 열기 실패: {e}")))?;
        self.set(&mut clipboard, text)
            .map_err(|e| CoreError::Clipboard(format!("클립보드 쓰기 실패: {e}")))
    }
}

impl ArboardClipboard {
    // Clipboard가 drop되면 내용이 사라지므로 hold 동안 소유권을 유지한다
    #[cfg(all(
        unix,
        not(any(target_os = "macos", target_os = "android", target_os = "emscripten"))
    ))]
    fn set(&self, clipboard: &mut arboard::Clipboard, text: &str) -> Result<(), arboard::Error> {
        use arboard::SetExtLinux;

        let deadline = std::time::Instant::now() + self.hold;
        clipboard.set().wait_until(deadline).text(text.to_string())
    }

    #[cfg(not(all(
        unix,
        not(any(target_os = "macos", target_os = "android", target_os = "emscripten"))
    )))]
    fn set(&self, clipboard: &mut arboard::Clipboard, text: &str) -> Result<(), arboard::Error> {
        let _ = self.hold;
        clipboard.set_text(text.to_string())
    }
}

/// 표준 입력으로 텍스트를 받는 복사 명령
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandClipboard {
    program: String,
    args: Vec<String>,
}

impl CommandClipboard {
    pub fn new(program: impl Into<String>, args: &[&str]) -> Self {
        Self {
            program: program.into(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }

    /// 현재 플랫폼의 기본 복사 명령
    pub fn platform_default() -> Self {
        if cfg!(target_os = "macos") {
            Self::new("pbcopy", &[])
        } else if cfg!(target_os = "windows") {
            Self::new("clip", &[])
        } else if std::env::var_os("WAYLAND_DISPLAY").is_some() {
            Self::new("wl-copy", &[])
        } else {
            Self::new("xclip", &["-selection", "clipboard"])
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl ClipboardBackend for CommandClipboard {
    fn name(&self) -> &str {
        &self.program
    }

    fn write_text(&self, text: &str) -> Result<(), CoreError> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| CoreError::Clipboard(format!("{} 실행 실패: {e}", self.program)))?;

        // stdin을 닫아야 명령이 입력 끝을 인식한다
        let written = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(text.as_bytes()),
            None => Ok(()),
        };

        if let Err(e) = written {
            let _ = child.kill();
            let _ = child.wait();
            return Err(CoreError::Clipboard(format!(
                "{} 입력 쓰기 실패: {e}",
                self.program
            )));
        }

        let status = child.wait()?;
        if status.success() {
            Ok(())
        } else {
            Err(CoreError::Clipboard(format!(
                "{} 종료 코드: {status}",
                self.program
            )))
        }
    }
}

/// 클립보드 복사 + 결과 토스트
pub struct ClipboardHelper {
    primary: Box<dyn ClipboardBackend>,
    fallback: Option<Box<dyn ClipboardBackend>>,
    toasts: ToastService,
}

impl ClipboardHelper {
    pub fn new(
        primary: Box<dyn ClipboardBackend>,
        fallback: Option<Box<dyn ClipboardBackend>>,
        toasts: ToastService,
    ) -> Self {
        Self {
            primary,
            fallback,
            toasts,
        }
    }

    /// arboard + 플랫폼 명령 조합
    ///
    /// X11/Wayland에서는 플랫폼 명령이 1차 백엔드다.
    pub fn system(toasts: ToastService) -> Self {
        let arboard: Box<dyn ClipboardBackend> = Box::new(ArboardClipboard::new());
        let command: Box<dyn ClipboardBackend> = Box::new(CommandClipboard::platform_default());
        let (primary, fallback) = if selection_needs_owner() {
            (command, arboard)
        } else {
            (arboard, command)
        };
        Self::new(primary, Some(fallback), toasts)
    }

    /// 시도 순서대로 백엔드 이름
    pub fn backend_names(&self) -> Vec<&str> {
        std::iter::once(self.primary.name())
            .chain(self.fallback.as_ref().map(|b| b.name()))
            .collect()
    }

    /// 텍스트 복사. 성공 여부를 반환하고 토스트로 알린다.
    pub fn copy(&self, text: &str) -> bool {
        let copied = match self.primary.write_text(text) {
            Ok(()) => {
                debug!("클립보드 복사 완료 ({})", self.primary.name());
                true
            }
            Err(e) => {
                warn!("클립보드 복사 실패 ({}): {e}", self.primary.name());
                self.copy_with_fallback(text)
            }
        };

        if copied {
            self.toasts.success(COPY_SUCCESS_MESSAGE);
        } else {
            self.toasts.error(COPY_FAILURE_MESSAGE);
        }
        copied
    }

    fn copy_with_fallback(&self, text: &str) -> bool {
        let Some(fallback) = &self.fallback else {
            return false;
        };
        match fallback.write_text(text) {
            Ok(()) => {
                debug!("대체 클립보드로 복사 완료 ({})", fallback.name());
                true
            }
            Err(e) => {
                warn!("대체 클립보드 복사 실패 ({}): {e}", fallback.name());
                false
            }
        }
    }
}

impl std::fmt::Debug for ClipboardHelper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClipboardHelper")
            .field("primary", &self.primary.name())
            .field("fallback", &self.fallback.as_ref().map(|b| b.name()))
            .finish()
    }
}
