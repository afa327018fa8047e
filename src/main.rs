//! 관리자 사용자 데모 애플리케이션
//!
//! 설정을 읽어 `UserInfo` 필터를 구성하고, 샘플 관리자 사용자를
//! 검증한 뒤 필터 적용 전후의 JSON 표현을 출력합니다.

use std::process::ExitCode;

use chrono::{Duration, TimeZone, Utc};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info, warn};
use validator::Validate;

use admin_user_service::config::{Environment, FilterConfig, LogConfig};
use admin_user_service::domain::AdminUser;
use admin_user_service::errors::AppResult;
use admin_user_service::serialization::MappingValue;
use admin_user_service::utils::display_terminal::{
    print_boxed_title, print_json, print_step_start, print_violations,
};
use admin_user_service::validation::FieldViolation;

fn main() -> ExitCode {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("데모 실행 실패: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> AppResult<()> {
    print_boxed_title("AdminUser Demo");

    let users = sample_users();

    print_step_start(1, "관리자 사용자 검증");
    for user in &users {
        let subject = user.name().unwrap_or("<이름 없음>");
        match user.validate() {
            Ok(()) => print_violations(subject, &[]),
            Err(errors) => {
                let violations = FieldViolation::from_errors(&errors);
                warn!("검증 위반 {}건: {}", violations.len(), user);
                print_violations(subject, &violations);
            }
        }
    }

    print_step_start(2, "UserInfo 필터 적용 직렬화");
    let provider = FilterConfig::provider()?;
    for user in &users {
        let unfiltered = MappingValue::new(user).to_value()?;
        let filtered = MappingValue::new(user)
            .with_filters(provider.clone())
            .to_value()?;

        print_json("전체", &unfiltered);
        print_json("UserInfo 필터", &filtered);
    }

    info!("✅ 데모 완료");
    Ok(())
}

/// 검증을 통과하는 사용자와 두 규칙을 모두 위반하는 사용자를 만듭니다
fn sample_users() -> Vec<AdminUser> {
    let joined = Utc
        .with_ymd_and_hms(2023, 1, 2, 9, 0, 0)
        .single()
        .unwrap_or_else(Utc::now);

    let valid = AdminUser::new(
        Some(1),
        Some("Kim".to_string()),
        Some(joined),
        Some("pw".to_string()),
        Some("000000-0000000".to_string()),
    );

    let mut invalid = AdminUser::default();
    invalid.set_id(Some(2));
    invalid.set_name(Some("A".to_string()));
    invalid.set_join_date(Some(Utc::now() + Duration::days(1)));

    vec![valid, invalid]
}

/// 환경별 설정 파일을 로드합니다
///
/// PROFILE 환경변수에 따라 적절한 .env 파일을 로드합니다.
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    match profile.as_str() {
        "prod" => {
            if let Err(e) = dotenv::from_filename(".env.prod") {
                eprintln!(".env.prod 파일 로드 실패: {}", e);
            }
        }
        "dev" => {
            if let Err(e) = dotenv::from_filename(".env.dev") {
                eprintln!(".env.dev 파일 로드 실패: {}", e);
            }
        }
        _ => {
            dotenv().ok();
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// `RUST_LOG`가 설정되지 않았으면 실행 환경에 맞는 기본 필터를 사용합니다.
///
/// ```bash
/// # 전체 debug 모드
/// RUST_LOG=debug cargo run
///
/// # 개발 환경 기본값 (crate 로그 debug)
/// ENVIRONMENT=development cargo run
/// ```
fn init_logging() {
    let environment = Environment::current();
    env_logger::init_from_env(
        Env::default().default_filter_or(LogConfig::default_filter_for_env(&environment)),
    );
    info!("Current environment: {:?}", environment);
}
