//! 요약 텍스트용 최소 마크다운 → HTML 변환.
//!
//! 문법 파서가 아니라 고정된 순서의 정규식 치환이다. 중첩 구문의 결과는
//! 치환 순서로만 결정되며, 기존 콘텐츠의 출력이 바뀌지 않도록 순서를 유지한다.
//!
//! 줄 단위 규칙은 CRLF 모드(`R`)를 사용하여 `.`이 `\r`, `\n` 모두를 넘지 않게 한다.

use once_cell::sync::Lazy;
use regex::Regex;

/// (패턴, 치환 문자열), 적용 순서대로
static RULES: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    [
        // 제목
        (r"(?mR)^#### (.+)$", "<h4>${1}</h4>"),
        (r"(?mR)^### (.+)$", "<h3>${1}</h3>"),
        (r"(?mR)^## (.+)$", "<h2>${1}</h2>"),
        (r"(?mR)^# (.+)$", "<h1>${1}</h1>"),
        // 굵게
        (r"(?R)\*\*(.+?)\*\*", "<strong>${1}</strong>"),
        // 기울임
        (r"(?R)\*(.+?)\*", "<em>${1}</em>"),
        // 목록
        (r"(?mR)^- (.+)$", "<li>${1}</li>"),
        (r"(?R)(<li>.*</li>\n?)+", "<ul>${0}</ul>"),
        // 줄바꿈
        (r"\n\n", "</p><p>"),
        (r"\n", "<br>"),
    ]
    .into_iter()
    .map(|(pattern, replacement)| {
        let regex = Regex::new(pattern).expect("마크다운 규칙 정규식");
        (regex, replacement)
    })
    .collect()
});

/// 마크다운 텍스트를 HTML로 변환
///
/// 빈 문자열은 빈 문자열을 반환한다.
pub fn render(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    RULES
        .iter()
        .fold(text.to_string(), |acc, (regex, replacement)| {
            regex.replace_all(&acc, *replacement).into_owned()
        })
}

/// 값이 없을 수 있는 텍스트 변환 (`None`이면 빈 문자열)
pub fn render_optional(text: Option<&str>) -> String {
    text.map(render).unwrap_or_default()
}
