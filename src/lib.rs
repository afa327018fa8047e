//! 관리자 사용자 엔티티 라이브러리
//!
//! 관리자 계정 레코드(`AdminUser`)와 그 레코드를 소비하는 외부 협력자를 위한
//! 검증 규칙 테이블, 이름 붙은 직렬화 필터를 제공합니다.
//!
//! # Features
//!
//! - **엔티티**: 다섯 필드(`id`, `name`, `joinDate`, `password`, `ssn`)의 값 타입
//! - **검증**: `필드 → 조건 → 메시지` 규칙 테이블과 `validator::Validate` 연동
//! - **직렬화 필터**: `UserInfo` 필터 이름 선언과 호출자 구성 기반 필드 선택
//! - **에러 처리**: `thiserror` 기반 `AppError`, 웹 계층용 `ResponseError` 변환
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │     Caller      │ ← API 계층 등 외부 협력자
//! └─────────────────┘
//!     │         │
//!     ▼         ▼
//! ┌────────┐ ┌───────────────┐
//! │validate│ │ MappingValue  │ ← 규칙 테이블 평가 / 필터 적용
//! └────────┘ └───────────────┘
//!     │         │
//!     ▼         ▼
//! ┌─────────────────┐
//! │    AdminUser    │ ← 데이터 + 선언적 메타데이터
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use validator::Validate;
//! use admin_user_service::domain::AdminUser;
//! use admin_user_service::serialization::{FilterProvider, MappingValue, PropertyFilter};
//!
//! let user = AdminUser::new(Some(1), Some("Kim".into()), None, Some("pw".into()), None);
//! user.validate()?;
//!
//! let provider = FilterProvider::new()
//!     .add_filter("UserInfo", PropertyFilter::serialize_all_except(["password", "ssn"]));
//! let json = MappingValue::new(&user).with_filters(provider).to_json_string()?;
//! ```

pub mod config;
pub mod domain;
pub mod errors;
pub mod serialization;
pub mod utils;
pub mod validation;
