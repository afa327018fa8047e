//! 터미널 출력 포맷팅 유틸리티
//!
//! 데모 실행 과정에서 검증 결과와 직렬화 결과를 보기 좋게 출력합니다.
//! 포맷 함수(`format_*`)는 문자열만 만들고, 출력 함수(`print_*`)가 이를 출력합니다.

use serde_json::Value;

use crate::validation::FieldViolation;

/// 박스 내부 콘텐츠 너비
const BOX_WIDTH: usize = 50;

/// 박스 형태로 둘러싸인 제목 문자열을 만듭니다
///
/// 텍스트는 자동으로 중앙 정렬됩니다.
///
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║                 AdminUser Demo                   ║
/// ╚══════════════════════════════════════════════════╝
/// ```
pub fn format_boxed_title(title: &str) -> String {
    let border = "═".repeat(BOX_WIDTH);

    format!(
        "╔{border}╗\n║{title:^width$}║\n╚{border}╝",
        border = border,
        title = title,
        width = BOX_WIDTH
    )
}

pub fn print_boxed_title(title: &str) {
    println!("{}", format_boxed_title(title));
}

/// 진행 단계 시작을 표시합니다
///
/// ```text
/// → Step 1: Validating admin users
/// ```
pub fn print_step_start(step: u8, description: &str) {
    println!("→ Step {}: {}", step, description);
}

/// 검증 결과를 트리 형태의 줄 목록으로 만듭니다
///
/// 위반이 없으면 통과 한 줄만 만듭니다.
///
/// ```text
///    ├─ name: Name은 2글자 이상 입력해 주세요.
///    └─ joinDate: must be a past date
/// ```
pub fn format_violations(subject: &str, violations: &[FieldViolation]) -> Vec<String> {
    if violations.is_empty() {
        return vec![format!("✓ {}: 위반 없음", subject)];
    }

    let mut lines = vec![format!("✗ {}: 위반 {}건", subject, violations.len())];
    let last = violations.len() - 1;
    lines.extend(violations.iter().enumerate().map(|(i, violation)| {
        let branch = if i == last { "└─" } else { "├─" };
        format!("   {} {}", branch, violation)
    }));
    lines
}

pub fn print_violations(subject: &str, violations: &[FieldViolation]) {
    for line in format_violations(subject, violations) {
        println!("{}", line);
    }
}

/// 라벨과 함께 JSON 값을 보기 좋게 출력합니다
pub fn print_json(label: &str, value: &Value) {
    let pretty = serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string());
    println!("   📄 {}:", label);
    for line in pretty.lines() {
        println!("      {}", line);
    }
}
