//! 실패 응답 본문 → 메시지 추출.
//!
//! 서버는 `{"detail": "..."}` 또는 검증 실패 시
//! `{"detail": [{"loc": ["body", "email"], "msg": "field required"}, ...]}`
//! 형태로 에러를 반환한다.

use peerview_core::config::ErrorDetailPolicy;
use serde_json::Value;

/// 본문을 해석할 수 없을 때 사용하는 메시지
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred";

/// 실패 응답 본문에서 표시용 메시지 추출
///
/// JSON이 아니거나 `detail`이 인식되지 않는 형태면 [`GENERIC_ERROR_MESSAGE`].
pub fn extract_error_message(body: &str, policy: ErrorDetailPolicy) -> String {
    let Ok(value) = serde_json::from_str::<Value>(body) else {
        return GENERIC_ERROR_MESSAGE.to_string();
    };

    match (value.get("detail"), policy) {
        (Some(Value::String(detail)), _) => detail.clone(),
        (Some(Value::Array(entries)), ErrorDetailPolicy::Validation) => {
            let joined = entries
                .iter()
                .map(format_validation_entry)
                .collect::<Vec<_>>()
                .join(", ");
            if joined.is_empty() {
                GENERIC_ERROR_MESSAGE.to_string()
            } else {
                joined
            }
        }
        _ => GENERIC_ERROR_MESSAGE.to_string(),
    }
}

/// 검증 에러 한 건: `loc`을 `.`으로 이어 붙인 경로 + `: ` + `msg`
///
/// `loc`이 없으면 메시지만 반환한다.
fn format_validation_entry(entry: &Value) -> String {
    let msg = entry
        .get("msg")
        .map(value_to_text)
        .unwrap_or_default();

    match entry.get("loc").and_then(Value::as_array) {
        Some(loc) => {
            let path = loc.iter().map(value_to_text).collect::<Vec<_>>().join(".");
            format!("{path}: {msg}")
        }
        None => msg,
    }
}

fn value_to_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_detail_is_returned_verbatim() {
        let msg = extract_error_message(r#"{"detail": "bad input"}"#, ErrorDetailPolicy::Validation);
        assert_eq!(msg, "bad input");
    }

    #[test]
    fn single_validation_entry() {
        let body = r#"{"detail": [{"loc": ["field"], "msg": "required"}]}"#;
        assert_eq!(
            extract_error_message(body, ErrorDetailPolicy::Validation),
            "field: required"
        );
    }

    #[test]
    fn multiple_entries_join_with_comma() {
        let body = r#"{"detail": [
            {"loc": ["body", "email"], "msg": "field required", "type": "value_error.missing"},
            {"loc": ["body", "reviewers", 0, "name"], "msg": "too short"}
        ]}"#;
        assert_eq!(
            extract_error_message(body, ErrorDetailPolicy::Validation),
            "body.email: field required, body.reviewers.0.name: too short"
        );
    }

    #[test]
    fn entry_without_loc_uses_message_only() {
        let body = r#"{"detail": [{"msg": "cycle is closed"}]}"#;
        assert_eq!(
            extract_error_message(body, ErrorDetailPolicy::Validation),
            "cycle is closed"
        );
    }

    #[test]
    fn basic_policy_ignores_validation_list() {
        let body = r#"{"detail": [{"loc": ["field"], "msg": "required"}]}"#;
        assert_eq!(
            extract_error_message(body, ErrorDetailPolicy::Basic),
            GENERIC_ERROR_MESSAGE
        );
        assert_eq!(
            extract_error_message(r#"{"detail": "nope"}"#, ErrorDetailPolicy::Basic),
            "nope"
        );
    }

    #[test]
    fn non_json_body_degrades_to_generic() {
        assert_eq!(
            extract_error_message("Internal Server Error", ErrorDetailPolicy::Validation),
            GENERIC_ERROR_MESSAGE
        );
        assert_eq!(extract_error_message("", ErrorDetailPolicy::Validation), GENERIC_ERROR_MESSAGE);
    }

    #[test]
    fn unexpected_shapes_degrade_to_generic() {
        for body in [r#"{"error": "x"}"#, r#"{"detail": 42}"#, "[1,2]", "null", r#"{"detail": []}"#] {
            assert_eq!(
                extract_error_message(body, ErrorDetailPolicy::Validation),
                GENERIC_ERROR_MESSAGE,
                "body: {body}"
            );
        }
    }
}
