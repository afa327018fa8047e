//! 필드 검증 규칙과 평가 엔진

use std::borrow::Cow;

use chrono::{DateTime, Utc};
use validator::{ValidationError, ValidationErrors};

/// 단일 필드에 대한 검증 규칙
///
/// `check`는 대상과 기준 시각을 받아 규칙을 만족하면 `true`를 반환합니다.
/// 값이 없는(`None`) 필드는 항상 만족으로 취급해야 합니다.
pub struct FieldRule<T> {
    /// 외부 표현 기준 필드 이름 (예: `joinDate`)
    pub field: &'static str,
    /// 위반 코드 (예: `length`, `past`)
    pub code: &'static str,
    /// 사용자에게 보여줄 메시지
    pub message: &'static str,
    pub check: fn(&T, DateTime<Utc>) -> bool,
}

impl<T> FieldRule<T> {
    pub fn is_satisfied_by(&self, target: &T, now: DateTime<Utc>) -> bool {
        (self.check)(target, now)
    }

    /// 이 규칙의 위반을 나타내는 `ValidationError`를 만듭니다.
    pub fn violation(&self) -> ValidationError {
        ValidationError::new(self.code).with_message(Cow::Borrowed(self.message))
    }
}

impl<T> std::fmt::Debug for FieldRule<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldRule")
            .field("field", &self.field)
            .field("code", &self.code)
            .field("message", &self.message)
            .finish()
    }
}

/// 규칙 테이블을 기준 시각 `now`에 대해 평가합니다.
///
/// 모든 규칙을 끝까지 평가하여 위반을 빠짐없이 모읍니다.
pub fn evaluate<T>(
    target: &T,
    rules: &[FieldRule<T>],
    now: DateTime<Utc>,
) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    for rule in rules {
        if !rule.is_satisfied_by(target, now) {
            log::debug!("검증 실패: {} ({}) - {}", rule.field, rule.code, rule.message);
            errors.add(rule.field, rule.violation());
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// 문자열 최소 길이 조건 (유니코드 문자 수 기준, 값이 없으면 통과)
///
/// UTF-16 코드 유닛이 아니라 `char` 개수를 셉니다. 보조 평면 문자(예: 이모지) 하나는 1글자입니다.
pub fn min_chars(value: Option<&str>, min: usize) -> bool {
    value.map_or(true, |v| v.chars().count() >= min)
}

/// 과거 시각 조건 (기준 시각보다 엄격히 이전, 값이 없으면 통과)
pub fn is_past(value: Option<&DateTime<Utc>>, now: DateTime<Utc>) -> bool {
    value.map_or(true, |v| *v < now)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    struct Sample {
        label: Option<String>,
        at: Option<DateTime<Utc>>,
    }

    fn label_length(sample: &Sample, _now: DateTime<Utc>) -> bool {
        min_chars(sample.label.as_deref(), 3)
    }

    fn at_past(sample: &Sample, now: DateTime<Utc>) -> bool {
        is_past(sample.at.as_ref(), now)
    }

    const SAMPLE_RULES: &[FieldRule<Sample>] = &[
        FieldRule {
            field: "label",
            code: "length",
            message: "too short",
            check: label_length,
        },
        FieldRule {
            field: "at",
            code: "past",
            message: "must be a past date",
            check: at_past,
        },
    ];

    #[test]
    fn test_min_chars_counts_characters() {
        assert!(min_chars(Some("김철"), 2));
        assert!(!min_chars(Some("김"), 2));
        assert!(min_chars(None, 2));
    }

    #[test]
    fn test_min_chars_counts_astral_char_once() {
        assert!(!min_chars(Some("😀"), 2));
        assert!(min_chars(Some("😀😀"), 2));
    }

    #[test]
    fn test_is_past_is_strict() {
        let now = Utc::now();

        assert!(is_past(Some(&(now - Duration::seconds(1))), now));
        assert!(!is_past(Some(&now), now));
        assert!(!is_past(Some(&(now + Duration::days(1))), now));
        assert!(is_past(None, now));
    }

    #[test]
    fn test_evaluate_collects_every_failure() {
        let now = Utc::now();
        let sample = Sample {
            label: Some("ab".to_string()),
            at: Some(now + Duration::hours(1)),
        };

        let errors = evaluate(&sample, SAMPLE_RULES, now).unwrap_err();
        let fields = errors.field_errors();

        assert_eq!(fields.len(), 2);
        assert_eq!(fields.get("label").unwrap()[0].code, "length");
        assert_eq!(fields.get("at").unwrap()[0].code, "past");
    }

    #[test]
    fn test_evaluate_passes_on_absent_values() {
        let sample = Sample { label: None, at: None };

        assert!(evaluate(&sample, SAMPLE_RULES, Utc::now()).is_ok());
    }

    #[test]
    fn test_violation_carries_message() {
        let error = SAMPLE_RULES[0].violation();

        assert_eq!(error.code, "length");
        assert_eq!(error.message.as_deref(), Some("too short"));
    }
}
