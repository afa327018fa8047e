//! # Domain Entities Module
//!
//! 도메인의 핵심 엔티티들을 정의합니다.
//!
//! 엔티티는 필드 저장과 접근자만 가지는 값 타입입니다.
//! 검증은 `validation` 모듈의 규칙 테이블로, 외부 표현의 필드 선택은
//! `serialization` 모듈의 이름 붙은 필터로 분리되어 있습니다.
//!
//! ```text
//! Domain Layer
//! └── entities/
//!     └── users/    ← AdminUser
//! ```

pub mod users;

pub use users::*;
