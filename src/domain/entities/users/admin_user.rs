//! Admin User Entity Implementation
//!
//! 관리자 계정 레코드를 표현하는 값 타입입니다.
//! 필드 저장과 접근자만 제공하고, 검증 규칙은 [`AdminUser::RULES`] 테이블로,
//! 직렬화 필터 참여는 [`Filterable`] 구현으로 선언합니다.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use crate::serialization::Filterable;
use crate::validation::{self, FieldRule};

/// `name` 최소 길이 위반 메시지
pub const NAME_LENGTH_MESSAGE: &str = "Name은 2글자 이상 입력해 주세요.";
/// `joinDate` 과거 시각 위반 메시지
pub const JOIN_DATE_PAST_MESSAGE: &str = "must be a past date";

/// 관리자 사용자 엔티티
///
/// 모든 필드는 비어 있을 수 있으며, 생성자와 setter는 값을 검증하지 않습니다.
/// 두 인스턴스는 다섯 필드가 모두 같을 때 같습니다.
///
/// `password`와 `ssn`은 기본 직렬화에서 제외되지 않습니다.
/// 응답에서 빼려면 `UserInfo` 필터를 명시적으로 구성해야 합니다.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminUser {
    /// 사용자 ID
    id: Option<i32>,
    /// 사용자 이름
    name: Option<String>,
    /// 가입 날짜
    join_date: Option<DateTime<Utc>>,
    /// 비밀번호
    password: Option<String>,
    /// 주민등록번호
    ssn: Option<String>,
}

fn name_min_length(user: &AdminUser, _now: DateTime<Utc>) -> bool {
    validation::min_chars(user.name.as_deref(), 2)
}

fn join_date_in_past(user: &AdminUser, now: DateTime<Utc>) -> bool {
    validation::is_past(user.join_date.as_ref(), now)
}

impl AdminUser {
    /// 외부 표현의 필드 이름 목록 (직렬화 순서)
    pub const FIELDS: [&'static str; 5] = ["id", "name", "joinDate", "password", "ssn"];

    /// 필드 검증 규칙 테이블
    ///
    /// `name` 길이는 `char` 개수로 셉니다. 이모지처럼 보조 평면 문자 하나는 1글자로 취급됩니다.
    pub const RULES: &'static [FieldRule<AdminUser>] = &[
        FieldRule {
            field: "name",
            code: "length",
            message: NAME_LENGTH_MESSAGE,
            check: name_min_length,
        },
        FieldRule {
            field: "joinDate",
            code: "past",
            message: JOIN_DATE_PAST_MESSAGE,
            check: join_date_in_past,
        },
    ];

    /// 모든 필드를 지정하여 생성합니다. 값은 검증 없이 그대로 저장됩니다.
    pub fn new(
        id: Option<i32>,
        name: Option<String>,
        join_date: Option<DateTime<Utc>>,
        password: Option<String>,
        ssn: Option<String>,
    ) -> Self {
        Self {
            id,
            name,
            join_date,
            password,
            ssn,
        }
    }

    pub fn id(&self) -> Option<i32> {
        self.id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn join_date(&self) -> Option<DateTime<Utc>> {
        self.join_date
    }

    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    pub fn ssn(&self) -> Option<&str> {
        self.ssn.as_deref()
    }

    pub fn set_id(&mut self, id: Option<i32>) {
        self.id = id;
    }

    pub fn set_name(&mut self, name: Option<String>) {
        self.name = name;
    }

    pub fn set_join_date(&mut self, join_date: Option<DateTime<Utc>>) {
        self.join_date = join_date;
    }

    pub fn set_password(&mut self, password: Option<String>) {
        self.password = password;
    }

    pub fn set_ssn(&mut self, ssn: Option<String>) {
        self.ssn = ssn;
    }

    /// 기준 시각 `now`에 대해 규칙 테이블을 평가합니다.
    ///
    /// `Validate::validate()`는 현재 시각으로 이 함수를 호출합니다.
    pub fn validate_at(&self, now: DateTime<Utc>) -> Result<(), ValidationErrors> {
        validation::evaluate(self, Self::RULES, now)
    }
}

impl Validate for AdminUser {
    fn validate(&self) -> Result<(), ValidationErrors> {
        self.validate_at(Utc::now())
    }
}

impl Filterable for AdminUser {
    const FILTER_ID: &'static str = "UserInfo";
}

struct OrNull<'a, T>(&'a Option<T>);

impl<T: fmt::Display> fmt::Display for OrNull<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => fmt::Display::fmt(value, f),
            None => f.write_str("null"),
        }
    }
}

impl fmt::Display for AdminUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "AdminUser(id={}, name={}, joinDate={}, password={}, ssn={})",
            OrNull(&self.id),
            OrNull(&self.name),
            OrNull(&self.join_date.map(|d| d.to_rfc3339())),
            OrNull(&self.password),
            OrNull(&self.ssn),
        )
    }
}
