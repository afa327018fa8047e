//! 직렬화 필터 설정 관리 모듈
//!
//! `UserInfo` 필터가 어떤 필드를 내보낼지 환경 변수로 구성합니다.
//! 아무 것도 설정하지 않으면 모든 필드를 내보냅니다.

use std::env;

use crate::domain::AdminUser;
use crate::errors::{AppError, AppResult};
use crate::serialization::{FilterProvider, Filterable, PropertyFilter};

/// `UserInfo` 필터 설정
pub struct FilterConfig;

impl FilterConfig {
    /// 환경 변수로부터 필터 구성을 만듭니다.
    ///
    /// # Environment Variables
    ///
    /// - `USER_INFO_FILTER_INCLUDE`: 내보낼 필드 목록 (쉼표 구분). 설정되면 우선합니다.
    /// - `USER_INFO_FILTER_EXCLUDE`: 제외할 필드 목록 (쉼표 구분). 기본값: 없음
    ///
    /// # Errors
    ///
    /// * `AppError::ConfigError` - `AdminUser`에 없는 필드 이름이 포함된 경우
    ///
    /// # Examples
    ///
    /// ```bash
    /// # 응답에서 비밀번호와 주민등록번호 제외
    /// USER_INFO_FILTER_EXCLUDE=password,ssn
    /// ```
    pub fn provider() -> AppResult<FilterProvider> {
        let include = env::var("USER_INFO_FILTER_INCLUDE").ok();
        let exclude = env::var("USER_INFO_FILTER_EXCLUDE").ok();

        Self::provider_from(include.as_deref(), exclude.as_deref())
    }

    /// 설정 문자열로부터 필터 구성을 만듭니다.
    pub fn provider_from(include: Option<&str>, exclude: Option<&str>) -> AppResult<FilterProvider> {
        let filter = Self::user_info_filter(include, exclude)?;
        log::info!("필터 '{}' 구성: {:?}", AdminUser::FILTER_ID, filter);

        Ok(FilterProvider::new().add_filter(AdminUser::FILTER_ID, filter))
    }

    /// include 목록이 비어 있지 않으면 allow-list, 아니면 exclude 목록으로 필터를 고릅니다.
    pub fn user_info_filter(include: Option<&str>, exclude: Option<&str>) -> AppResult<PropertyFilter> {
        let include = include.map(Self::parse_field_list).transpose()?;
        if let Some(fields) = include.filter(|fields| !fields.is_empty()) {
            return Ok(PropertyFilter::filter_out_all_except(fields));
        }

        let exclude = exclude.map(Self::parse_field_list).transpose()?.unwrap_or_default();
        if exclude.is_empty() {
            Ok(PropertyFilter::SerializeAll)
        } else {
            Ok(PropertyFilter::serialize_all_except(exclude))
        }
    }

    /// 쉼표로 구분된 필드 목록을 파싱합니다. 빈 항목은 무시합니다.
    pub fn parse_field_list(raw: &str) -> AppResult<Vec<String>> {
        raw.split(',')
            .map(str::trim)
            .filter(|field| !field.is_empty())
            .map(|field| {
                if AdminUser::FIELDS.contains(&field) {
                    Ok(field.to_string())
                } else {
                    Err(AppError::ConfigError(format!(
                        "'{}'은(는) {} 필터에서 알 수 없는 필드입니다",
                        field,
                        AdminUser::FILTER_ID
                    )))
                }
            })
            .collect()
    }
}
