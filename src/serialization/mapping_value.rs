//! 필터 구성을 함께 실어 나르는 직렬화 래퍼

use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::errors::{AppResult, ErrorContext};
use crate::serialization::filter::{FilterProvider, Filterable};

/// 값과 필터 구성을 묶은 직렬화 래퍼
///
/// 필터 구성이 없으면 값의 전체 표현을 그대로 내보냅니다.
/// 구성이 있으면 값이 선언한 `FILTER_ID`로 정책을 찾아 적용합니다.
///
/// ```rust,ignore
/// let body = MappingValue::new(&user).with_filters(provider);
/// HttpResponse::Ok().json(body)
/// ```
#[derive(Debug)]
pub struct MappingValue<'a, T: Filterable> {
    value: &'a T,
    filters: Option<FilterProvider>,
}

impl<'a, T: Filterable> MappingValue<'a, T> {
    pub fn new(value: &'a T) -> Self {
        Self { value, filters: None }
    }

    pub fn with_filters(mut self, filters: FilterProvider) -> Self {
        self.filters = Some(filters);
        self
    }

    /// 필터를 적용한 JSON 값을 만듭니다.
    ///
    /// # Errors
    ///
    /// * `AppError::SerializationError` - 값의 직렬화 실패
    /// * `AppError::FilterNotFound` - 구성에 `T::FILTER_ID` 필터가 없는 경우
    pub fn to_value(&self) -> AppResult<Value> {
        let raw = serde_json::to_value(self.value)?;

        match &self.filters {
            None => Ok(raw),
            Some(provider) => {
                let filter = provider.find(T::FILTER_ID)?;
                log::debug!("필터 '{}' 적용: {:?}", T::FILTER_ID, filter);
                Ok(filter.apply(raw))
            }
        }
    }

    pub fn to_json_string(&self) -> AppResult<String> {
        let value = self.to_value()?;
        serde_json::to_string(&value).context("JSON 문자열 변환 실패")
    }
}

impl<T: Filterable> Serialize for MappingValue<'_, T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_value()
            .map_err(serde::ser::Error::custom)?
            .serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;
    use crate::serialization::filter::PropertyFilter;
    use serde_json::json;

    #[derive(Debug, Serialize)]
    struct Account {
        id: u32,
        secret: &'static str,
    }

    impl Filterable for Account {
        const FILTER_ID: &'static str = "AccountInfo";
    }

    #[derive(Debug, Serialize)]
    struct Tag(&'static str);

    impl Filterable for Tag {
        const FILTER_ID: &'static str = "AccountInfo";
    }

    fn account() -> Account {
        Account { id: 7, secret: "s3cret" }
    }

    #[test]
    fn test_without_filters_emits_everything() {
        let account = account();
        let value = MappingValue::new(&account).to_value().unwrap();

        assert_eq!(value, json!({"id": 7, "secret": "s3cret"}));
    }

    #[test]
    fn test_registered_filter_is_applied() {
        let account = account();
        let provider = FilterProvider::new()
            .add_filter("AccountInfo", PropertyFilter::serialize_all_except(["secret"]));

        let value = MappingValue::new(&account)
            .with_filters(provider)
            .to_value()
            .unwrap();

        assert_eq!(value, json!({"id": 7}));
    }

    #[test]
    fn test_other_filter_ids_are_ignored() {
        let account = account();
        let provider = FilterProvider::new()
            .add_filter("Other", PropertyFilter::filter_out_all_except(["secret"]))
            .add_filter("AccountInfo", PropertyFilter::SerializeAll);

        let json = MappingValue::new(&account)
            .with_filters(provider)
            .to_json_string()
            .unwrap();

        assert!(json.contains("\"secret\""));
        assert!(json.contains("\"id\""));
    }

    #[test]
    fn test_missing_filter_is_an_error() {
        let account = account();
        let mapping = MappingValue::new(&account).with_filters(FilterProvider::new());

        assert!(matches!(mapping.to_value(), Err(AppError::FilterNotFound(_))));
        assert!(serde_json::to_string(&mapping).is_err());
    }

    #[test]
    fn test_non_object_values_pass_through() {
        let tag = Tag("admin");
        let provider = FilterProvider::new()
            .add_filter("AccountInfo", PropertyFilter::filter_out_all_except(["id"]));

        let value = MappingValue::new(&tag).with_filters(provider).to_value().unwrap();

        assert_eq!(value, json!("admin"));
    }

    #[test]
    fn test_serialize_impl_matches_to_value() {
        let account = account();
        let provider = FilterProvider::new()
            .add_filter("AccountInfo", PropertyFilter::filter_out_all_except(["secret"]));
        let mapping = MappingValue::new(&account).with_filters(provider);

        let serialized = serde_json::to_value(&mapping).unwrap();

        assert_eq!(serialized, mapping.to_value().unwrap());
        assert_eq!(serialized, json!({"secret": "s3cret"}));
    }
}
