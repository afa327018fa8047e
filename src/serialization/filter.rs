//! 이름 붙은 속성 필터와 필터 구성

use std::collections::{BTreeSet, HashMap};

use serde::Serialize;
use serde_json::Value;

use crate::errors::{AppError, AppResult};

/// 이름 붙은 직렬화 필터에 참여하는 타입
///
/// 구현 타입은 필터 이름만 알리고, 실제 포함/제외 정책은
/// 호출자가 넘기는 [`FilterProvider`]가 정합니다.
pub trait Filterable: Serialize {
    const FILTER_ID: &'static str;
}

/// 외부 표현에 포함할 필드를 고르는 정책
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PropertyFilter {
    /// 모든 필드 포함
    #[default]
    SerializeAll,
    /// 나열된 필드만 제외
    SerializeAllExcept(BTreeSet<String>),
    /// 나열된 필드만 포함
    FilterOutAllExcept(BTreeSet<String>),
}

static SERIALIZE_ALL: PropertyFilter = PropertyFilter::SerializeAll;

impl PropertyFilter {
    pub fn serialize_all_except<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        PropertyFilter::SerializeAllExcept(fields.into_iter().map(Into::into).collect())
    }

    pub fn filter_out_all_except<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        PropertyFilter::FilterOutAllExcept(fields.into_iter().map(Into::into).collect())
    }

    /// 필드가 외부 표현에 포함되는지 확인
    pub fn includes(&self, field: &str) -> bool {
        match self {
            PropertyFilter::SerializeAll => true,
            PropertyFilter::SerializeAllExcept(excluded) => !excluded.contains(field),
            PropertyFilter::FilterOutAllExcept(included) => included.contains(field),
        }
    }

    /// 직렬화된 객체에서 포함되지 않는 필드를 제거합니다.
    ///
    /// 객체가 아닌 값은 그대로 반환합니다.
    pub fn apply(&self, value: Value) -> Value {
        match value {
            Value::Object(mut map) => {
                map.retain(|key, _| self.includes(key));
                Value::Object(map)
            }
            other => other,
        }
    }
}

/// 필터 이름 → 필터 정책 구성
///
/// 등록되지 않은 이름을 찾으면 기본 필터가 있을 경우 그것을 쓰고,
/// 없으면 `fail_on_unknown_id` 설정에 따라 에러를 내거나 모든 필드를 포함합니다.
#[derive(Debug, Clone)]
pub struct FilterProvider {
    filters: HashMap<String, PropertyFilter>,
    default_filter: Option<PropertyFilter>,
    fail_on_unknown_id: bool,
}

impl Default for FilterProvider {
    fn default() -> Self {
        Self {
            filters: HashMap::new(),
            default_filter: None,
            fail_on_unknown_id: true,
        }
    }
}

impl FilterProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// 필터를 등록합니다. 같은 이름이 있으면 교체합니다.
    pub fn add_filter(mut self, id: impl Into<String>, filter: PropertyFilter) -> Self {
        self.filters.insert(id.into(), filter);
        self
    }

    pub fn with_default_filter(mut self, filter: PropertyFilter) -> Self {
        self.default_filter = Some(filter);
        self
    }

    pub fn fail_on_unknown_id(mut self, fail: bool) -> Self {
        self.fail_on_unknown_id = fail;
        self
    }

    /// 필터 이름으로 정책을 찾습니다.
    ///
    /// # Errors
    ///
    /// * `AppError::FilterNotFound` - 등록되지 않은 이름이고 기본 필터가 없으며
    ///   `fail_on_unknown_id`가 켜져 있는 경우
    pub fn find(&self, id: &str) -> AppResult<&PropertyFilter> {
        if let Some(filter) = self.filters.get(id) {
            return Ok(filter);
        }

        if let Some(filter) = &self.default_filter {
            log::debug!("필터 '{}' 미등록, 기본 필터 사용", id);
            return Ok(filter);
        }

        if self.fail_on_unknown_id {
            log::warn!("필터 '{}'를 찾을 수 없습니다", id);
            return Err(AppError::FilterNotFound(id.to_string()));
        }

        Ok(&SERIALIZE_ALL)
    }
}
