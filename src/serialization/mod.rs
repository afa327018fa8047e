//! # Serialization Module
//!
//! 이름 붙은 속성 필터로 엔티티의 외부 표현에 포함될 필드를 고릅니다.
//! 엔티티는 자신이 참여하는 필터 이름만 선언하고(`Filterable`),
//! 어떤 필드를 뺄지는 호출자가 구성한 `FilterProvider`가 결정합니다.
//!
//! ## 모듈 구성
//!
//! - [`filter`] - `Filterable`, `PropertyFilter`, `FilterProvider`
//! - [`mapping_value`] - 값과 필터 구성을 묶어 JSON으로 변환하는 `MappingValue`
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::serialization::{FilterProvider, MappingValue, PropertyFilter};
//!
//! let provider = FilterProvider::new().add_filter(
//!     "UserInfo",
//!     PropertyFilter::serialize_all_except(["password", "ssn"]),
//! );
//!
//! let json = MappingValue::new(&admin_user)
//!     .with_filters(provider)
//!     .to_value()?;
//! // {"id": 1, "name": "Kim", "joinDate": "..."}
//! ```

pub mod filter;
pub mod mapping_value;

pub use filter::*;
pub use mapping_value::*;
