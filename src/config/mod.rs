//! # Configuration Module
//!
//! 서비스 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 로깅 관련 설정
//! - [`filter_config`] - `UserInfo` 직렬화 필터 관련 설정
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{Environment, FilterConfig, LogConfig};
//!
//! let env = Environment::current();
//! let default_filter = LogConfig::default_filter_for_env(&env);
//!
//! let provider = FilterConfig::provider()?;
//! ```
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 환경 설정
//! export ENVIRONMENT="development"  # development, test, staging, production
//!
//! # .env 파일 프로필 (main에서 로드)
//! export PROFILE="dev"              # dev → .env.dev, prod → .env.prod
//!
//! # UserInfo 필터 (기본값: 모든 필드 출력)
//! export USER_INFO_FILTER_EXCLUDE="password,ssn"
//! export USER_INFO_FILTER_INCLUDE="id,name,joinDate"
//! ```

pub mod data_config;
pub mod filter_config;

pub use data_config::*;
pub use filter_config::*;
