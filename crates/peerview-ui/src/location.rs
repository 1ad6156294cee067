//! URL 경로 헬퍼.

/// 경로의 `index`번째 세그먼트 (빈 세그먼트는 건너뜀)
///
/// `path_param("/cycles/42/summary", 1) == Some("42")`
pub fn path_param(path: &str, index: usize) -> Option<&str> {
    path.split('/').filter(|s| !s.is_empty()).nth(index)
}
