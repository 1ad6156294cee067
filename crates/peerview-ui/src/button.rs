//! 버튼 로딩 상태.
//!
//! 비동기 작업 동안 버튼을 비활성화하고 라벨을 바꾼 뒤, 끝나면 원래 라벨로 되돌린다.

/// 로딩 라벨 기본값
pub const DEFAULT_LOADING_TEXT: &str = "Loading...";

/// 버튼 표시 상태
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonState {
    /// 현재 라벨
    pub text: String,
    /// 처음 로딩에 들어갈 때 저장한 원래 라벨 (한 번 저장되면 유지)
    pub original_text: Option<String>,
    /// 비활성화 여부
    pub disabled: bool,
    /// `aria-busy` 속성
    pub aria_busy: bool,
    /// 스피너 숨김 여부 (`None`이면 스피너 없는 버튼)
    pub spinner_hidden: Option<bool>,
}

impl ButtonState {
    /// 스피너 없는 버튼
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            original_text: None,
            disabled: false,
            aria_busy: false,
            spinner_hidden: None,
        }
    }

    /// 숨겨진 스피너를 가진 버튼
    pub fn with_spinner(text: impl Into<String>) -> Self {
        Self {
            spinner_hidden: Some(true),
            ..Self::new(text)
        }
    }

    /// 로딩 상태 전환
    ///
    /// `loading_text`가 없거나 비어 있으면 [`DEFAULT_LOADING_TEXT`].
    pub fn set_loading(&mut self, loading: bool, loading_text: Option<&str>) {
        let original = self
            .original_text
            .clone()
            .unwrap_or_else(|| self.text.clone());

        if loading {
            self.original_text = Some(original);
            self.aria_busy = true;
            self.disabled = true;
            self.text = loading_text
                .filter(|t| !t.is_empty())
                .unwrap_or(DEFAULT_LOADING_TEXT)
                .to_string();
            if let Some(hidden) = self.spinner_hidden.as_mut() {
                *hidden = false;
            }
        } else {
            self.aria_busy = false;
            self.disabled = false;
            self.text = original;
            if let Some(hidden) = self.spinner_hidden.as_mut() {
                *hidden = true;
            }
        }
    }

    /// 로딩 중 여부
    pub fn is_loading(&self) -> bool {
        self.aria_busy
    }
}
