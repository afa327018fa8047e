//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 모듈입니다.
//! 영속성, 인증, 전송 계층은 이 crate 밖의 협력자가 담당하며,
//! 여기서는 그들이 소비할 데이터 형태만 정의합니다.
//!
//! ## 모듈 구성
//!
//! ### [`entities`] - 핵심 도메인 엔티티
//!
//! - `AdminUser`: 관리자 계정 레코드 (`id`, `name`, `joinDate`, `password`, `ssn`)
//!
//! ## 설계
//!
//! | 관심사 | 위치 |
//! |--------|------|
//! | 필드 저장, 접근자, 동등성 | `AdminUser` (`derive` + 접근자) |
//! | 필드 검증 규칙 | `AdminUser::RULES` 규칙 테이블 |
//! | 직렬화 필터 참여 | `impl Filterable for AdminUser` (`UserInfo`) |

pub mod entities;

pub use entities::*;
