//! # 문자열 유틸리티
//!
//! 폼 입력과 OAuth 쿼리 파라미터 정리에 쓰는 공통 함수들입니다.

use serde::Deserialize;
use crate::errors::AppError;

/// 필수 문자열을 검증하고 앞뒤 공백을 제거합니다.
///
/// 비어 있거나 공백뿐이면 `"{field_name} is required"` 메시지의 ValidationError
///
/// ```rust,ignore
/// assert_eq!(validate_required_string("  alice  ", "username").unwrap(), "alice");
/// assert!(validate_required_string("   ", "username").is_err());
/// ```
pub fn validate_required_string(value: &str, field_name: &str) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::ValidationError(
            format!("{} is required", field_name)
        ));
    }
    Ok(trimmed.to_string())
}

/// 공백뿐인 값은 None으로, 나머지는 trim 해서 Some으로 돌려줍니다.
pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// `#[serde(deserialize_with = "deserialize_optional_string")]`용 deserializer
///
/// 빈 쿼리 파라미터(`?state=`)를 값이 없는 것과 똑같이 취급합니다.
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(clean_optional_string(opt))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_required_string() {
        // 성공 케이스
        assert_eq!(validate_required_string("Hello", "name").unwrap(), "Hello");
        assert_eq!(validate_required_string("  World  ", "name").unwrap(), "World");
        
        // 실패 케이스
        assert!(validate_required_string("", "name").is_err());
        assert!(validate_required_string("   ", "name").is_err());
        assert!(validate_required_string("\t\n", "name").is_err());
    }

    #[test]
    fn test_clean_optional_string() {
        assert_eq!(clean_optional_string(Some("Hello".to_string())), Some("Hello".to_string()));
        assert_eq!(clean_optional_string(Some("  World  ".to_string())), Some("World".to_string()));
        assert_eq!(clean_optional_string(Some("".to_string())), None);
        assert_eq!(clean_optional_string(Some("   ".to_string())), None);
        assert_eq!(clean_optional_string(None), None);
    }

    #[test]
    fn test_deserialize_optional_string() {
        use serde_json;
        use serde::Deserialize;

        #[derive(Deserialize)]
        struct TestStruct {
            #[serde(deserialize_with = "deserialize_optional_string")]
            optional_field: Option<String>,
        }

        // 유효한 문자열 - 공백이 제거되고 Some 반환
        let json = r#"{"optional_field": "  Hello World  "}"#;
        let result: TestStruct = serde_json::from_str(json).unwrap();
        assert_eq!(result.optional_field, Some("Hello World".to_string()));

        // 빈 문자열 - None 반환
        let json = r#"{"optional_field": ""}"#;
        let result: TestStruct = serde_json::from_str(json).unwrap();
        assert_eq!(result.optional_field, None);

        // 공백만 있는 문자열 - None 반환
        let json = r#"{"optional_field": "   "}"#;
        let result: TestStruct = serde_json::from_str(json).unwrap();
        assert_eq!(result.optional_field, None);

        // 탭과 개행만 있는 문자열 - None 반환
        let json = r#"{"optional_field": "\t\n  "}"#;
        let result: TestStruct = serde_json::from_str(json).unwrap();
        assert_eq!(result.optional_field, None);

        // null 값 - None 반환
        let json = r#"{"optional_field": null}"#;
        let result: TestStruct = serde_json::from_str(json).unwrap();
        assert_eq!(result.optional_field, None);

        // 필드가 없는 경우 - None 반환 (기본값)
        let json = r#"{}"#;
        let result: TestStruct = serde_json::from_str(json).unwrap_or_else(|_| {
            // 필드가 없으면 default를 사용
            TestStruct { optional_field: None }
        });
        assert_eq!(result.optional_field, None);

        // 숫자 0을 문자열로 - 유효한 값으로 처리
        let json = r#"{"optional_field": "0"}"#;
        let result: TestStruct = serde_json::from_str(json).unwrap();
        assert_eq!(result.optional_field, Some("0".to_string()));

        // 단일 문자
        let json = r#"{"optional_field": "a"}"#;
        let result: TestStruct = serde_json::from_str(json).unwrap();
        assert_eq!(result.optional_field, Some("a".to_string()));
    }

    #[test]
    fn test_required_string_message_names_field() {
        match validate_required_string("  ", "subject id") {
            Err(AppError::ValidationError(msg)) => assert_eq!(msg, "subject id is required"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_deserialize_optional_string_from_query() {
        #[derive(serde::Deserialize)]
        struct Query {
            #[serde(default, deserialize_with = "deserialize_optional_string")]
            code: Option<String>,
            #[serde(default, deserialize_with = "deserialize_optional_string")]
            state: Option<String>,
        }

        let query = actix_web::web::Query::<Query>::from_query("code=%20abc%20&state=")
            .unwrap()
            .into_inner();
        assert_eq!(query.code, Some("abc".to_string()));
        assert_eq!(query.state, None);
    }
}
