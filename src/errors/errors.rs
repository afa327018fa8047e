//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 관리자 사용자 엔티티의 검증, 직렬화 필터, 설정 로딩 과정에서 발생하는
//! 에러를 하나의 타입으로 모읍니다. `thiserror`로 메시지를 정의하고
//! `actix_web::ResponseError`로 웹 계층이 그대로 응답으로 변환할 수 있게 합니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use validator::Validate;
//! use crate::errors::{AppError, AppResult};
//!
//! fn accept(user: &AdminUser) -> AppResult<()> {
//!     user.validate()?; // ValidationErrors → AppError::ValidationError
//!     Ok(())
//! }
//! ```

use actix_web::http::StatusCode;
use thiserror::Error;
use validator::ValidationErrors;

use crate::validation::FieldViolation;

/// 애플리케이션 전역 에러 타입
///
/// 검증 위반은 예외가 아니라 보고 대상이므로 위반 목록 전체를 그대로 담습니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 입력값 검증 에러 (400 Bad Request)
    #[error("Validation error: {}", summarize(.0))]
    ValidationError(Vec<FieldViolation>),

    /// 등록되지 않은 직렬화 필터 (500 Internal Server Error)
    #[error("Cannot resolve property filter with id '{0}'")]
    FilterNotFound(String),

    /// JSON 변환 에러 (500 Internal Server Error)
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// 설정값 에러 (500 Internal Server Error)
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

fn summarize(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(|v| format!("{}: {}", v.field, v.message))
        .collect::<Vec<_>>()
        .join(", ")
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        AppError::ValidationError(FieldViolation::from_errors(&errors))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        AppError::SerializationError(error.to_string())
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 검증 에러는 필드별 위반 목록을 `violations` 배열로 함께 내려줍니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let body = match self {
            AppError::ValidationError(violations) => serde_json::json!({
                "error": self.to_string(),
                "violations": violations,
            }),
            _ => serde_json::json!({
                "error": self.to_string()
            }),
        };

        actix_web::HttpResponse::build(self.status_code()).json(body)
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;
    use actix_web::body::MessageBody;

    fn name_violation() -> FieldViolation {
        FieldViolation {
            field: "name".to_string(),
            code: "length".to_string(),
            message: "Name은 2글자 이상 입력해 주세요.".to_string(),
        }
    }

    #[test]
    fn test_validation_error_response() {
        let error = AppError::ValidationError(vec![name_violation()]);
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_validation_error_body_lists_violations() {
        let error = AppError::ValidationError(vec![name_violation()]);
        let bytes = error
            .error_response()
            .into_body()
            .try_into_bytes()
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(body["violations"][0]["field"], "name");
        assert_eq!(body["violations"][0]["message"], "Name은 2글자 이상 입력해 주세요.");
        assert!(body["error"].as_str().unwrap().contains("name"));
    }

    #[test]
    fn test_filter_not_found_response() {
        let error = AppError::FilterNotFound("UserInfo".to_string());

        assert_eq!(error.error_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            error.to_string(),
            "Cannot resolve property filter with id 'UserInfo'"
        );
    }

    #[test]
    fn test_config_error_response() {
        let error = AppError::ConfigError("unknown field".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_serde_error_conversion() {
        let parse: Result<serde_json::Value, _> = serde_json::from_str("{not json");
        let error: AppError = parse.unwrap_err().into();

        assert!(matches!(error, AppError::SerializationError(_)));
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("original error");
        let app_result = result.context("Additional context");

        assert!(app_result.is_err());
        if let Err(AppError::InternalError(msg)) = app_result {
            assert!(msg.contains("Additional context"));
            assert!(msg.contains("original error"));
        } else {
            panic!("Expected InternalError");
        }
    }
}
