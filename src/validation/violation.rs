use serde::{Deserialize, Serialize};
use validator::ValidationErrors;

/// 필드 단위 검증 위반 보고
///
/// `validator::ValidationErrors`의 중첩 구조를 API 응답과 로그에 쓰기 좋게
/// 평탄화한 형태입니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldViolation {
    pub field: String,
    pub code: String,
    pub message: String,
}

impl FieldViolation {
    /// 필드 에러를 필드 이름, 코드 순으로 정렬된 목록으로 변환합니다.
    ///
    /// 메시지가 없는 에러는 코드를 메시지로 사용합니다.
    pub fn from_errors(errors: &ValidationErrors) -> Vec<FieldViolation> {
        let mut violations: Vec<FieldViolation> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, field_errors)| {
                field_errors.iter().map(move |error| FieldViolation {
                    field: field.to_string(),
                    code: error.code.to_string(),
                    message: error
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| error.code.to_string()),
                })
            })
            .collect();

        violations.sort_by(|a, b| a.field.cmp(&b.field).then_with(|| a.code.cmp(&b.code)));
        violations
    }
}

impl std::fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::ValidationError;

    #[test]
    fn test_from_errors_sorts_by_field() {
        let mut errors = ValidationErrors::new();
        errors.add("name", ValidationError::new("length").with_message("too short".into()));
        errors.add("joinDate", ValidationError::new("past"));

        let violations = FieldViolation::from_errors(&errors);

        assert_eq!(violations.len(), 2);
        assert_eq!(violations[0].field, "joinDate");
        assert_eq!(violations[0].message, "past");
        assert_eq!(violations[1].field, "name");
        assert_eq!(violations[1].message, "too short");
    }

    #[test]
    fn test_display_format() {
        let violation = FieldViolation {
            field: "name".to_string(),
            code: "length".to_string(),
            message: "Name은 2글자 이상 입력해 주세요.".to_string(),
        };

        assert_eq!(violation.to_string(), "name: Name은 2글자 이상 입력해 주세요.");
    }
}
