//! 코드값 → 표시 라벨 변환.
//!
//! 알 수 없는 코드는 그대로 돌려준다.

/// 리뷰어 관계 코드 라벨
///
/// `manager`, `peer`, `direct_report`, `xfn`
pub fn format_relationship(code: &str) -> &str {
    match code {
        "manager" => "Manager",
        "peer" => "Peer",
        "direct_report" => "Direct Report",
        "xfn" => "Cross-functional",
        other => other,
    }
}

/// 협업 빈도 코드 라벨
///
/// `weekly`, `monthly`, `rarely`
pub fn format_frequency(code: &str) -> &str {
    match code {
        "weekly" => "Weekly",
        "monthly" => "Monthly",
        "rarely" => "Rarely",
        other => other,
    }
}
