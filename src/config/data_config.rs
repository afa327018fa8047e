//! 실행 환경 및 로깅 설정 관리 모듈
//!
//! 실행 환경 감지와 환경별 기본 로그 필터를 관리합니다.

use std::env;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경 - 상세 로그 출력
    Development,
    /// 테스트 환경 - 자동화된 테스트용 설정
    Test,
    /// 스테이징 환경 - 프로덕션 유사 환경
    Staging,
    /// 프로덕션 환경
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 환경 변수를 확인하며,
    /// 설정되지 않은 경우 `Production`을 기본값으로 사용합니다.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let env = Environment::current();
    /// if env == Environment::Development {
    ///     println!("개발 환경");
    /// }
    /// ```
    pub fn current() -> Self {
        env::var("ENVIRONMENT")
            .map(|name| Self::from_name(&name))
            .unwrap_or(Environment::Production)
    }

    /// 환경 이름(대소문자 무관)으로 Environment를 만듭니다.
    ///
    /// 알 수 없는 값인 경우 `Production`을 반환합니다.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }
}

/// 로깅 설정
pub struct LogConfig;

impl LogConfig {
    /// `RUST_LOG`가 없을 때 사용할 기본 필터를 반환합니다.
    ///
    /// 개발/테스트 환경은 검증·필터 적용 과정을 볼 수 있도록 crate 로그를 debug로 올립니다.
    pub fn default_filter_for_env(env: &Environment) -> &'static str {
        match env {
            Environment::Development | Environment::Test => "info,admin_user_service=debug",
            Environment::Staging | Environment::Production => "info",
        }
    }
}
