//! # Validation Module
//!
//! 엔티티 필드 검증을 선언적인 규칙 테이블로 표현합니다.
//! 어노테이션 대신 `필드 이름 → 조건 → 메시지` 테이블을 두고,
//! 엔진이 테이블을 순회하며 `validator::ValidationErrors`를 만듭니다.
//!
//! ## 모듈 구성
//!
//! - [`rule`] - 규칙 정의(`FieldRule`)와 평가 엔진(`evaluate`)
//! - [`violation`] - 위반 보고용 평탄화 타입(`FieldViolation`)
//!
//! ## 검증 시점
//!
//! 생성자와 setter는 값을 검증하지 않습니다. 검증은 호출자가
//! `Validate::validate()` 또는 `validate_at()`을 명시적으로 부를 때만 수행됩니다.
//!
//! ```rust,ignore
//! use validator::Validate;
//!
//! let user = AdminUser::new(Some(1), Some("A".into()), None, None, None);
//! let errors = user.validate().unwrap_err();
//! assert!(errors.field_errors().contains_key("name"));
//! ```

pub mod rule;
pub mod violation;

pub use rule::*;
pub use violation::*;
