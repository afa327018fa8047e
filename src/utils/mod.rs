//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`display_terminal`] - 검증/직렬화 결과 터미널 출력 포맷팅 함수들
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::display_terminal::{print_boxed_title, print_violations};
//!
//! print_boxed_title("AdminUser Demo");
//! print_violations("Kim", &violations);
//! ```

pub mod display_terminal;
