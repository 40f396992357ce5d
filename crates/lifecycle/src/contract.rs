//! 계약 검증 헬퍼 -- 응답이 기대 계약과 일치하는지 확인
//!
//! 각 헬퍼는 실패 시 시나리오명과 기대/실제 값을 담은 [`ContractError`]를
//! 반환합니다. 라이브러리 코드에서는 절대 panic하지 않습니다.
//! 상태 코드를 먼저 확인하고, 그 다음 본문 필드를 확인하는 순서가 관례입니다.

use serde_json::Value;

use restcanary_core::error::ContractError;
use restcanary_core::report::ScenarioKind;
use restcanary_core::types::ApiResponse;

/// JSON 값의 종류를 진단 메시지용 이름으로 돌려줍니다.
fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// 응답 상태 코드가 기대값과 일치하는지 확인합니다.
pub fn expect_status(
    scenario: ScenarioKind,
    response: &ApiResponse,
    expected: u16,
) -> Result<(), ContractError> {
    if response.status != expected {
        return Err(ContractError::UnexpectedStatus {
            scenario: scenario.name().to_owned(),
            expected,
            actual: response.status,
        });
    }
    Ok(())
}

/// 본문이 비어 있지 않은 JSON 배열인지 확인하고 요소들을 반환합니다.
pub fn expect_non_empty_array<'a>(
    scenario: ScenarioKind,
    body: &'a Value,
) -> Result<&'a [Value], ContractError> {
    let items = body.as_array().ok_or_else(|| ContractError::FieldMismatch {
        scenario: scenario.name().to_owned(),
        field: "body".to_owned(),
        expected: "an array".to_owned(),
        actual: value_kind(body).to_owned(),
    })?;
    if items.is_empty() {
        return Err(ContractError::EmptyCollection {
            scenario: scenario.name().to_owned(),
        });
    }
    Ok(items)
}

/// 필드가 존재하고 null이 아닌지 확인하고 값을 반환합니다.
///
/// 타임스탬프처럼 값 자체가 아니라 "정의되어 있음"이 계약인 필드에
/// 사용합니다.
pub fn expect_field_present<'a>(
    scenario: ScenarioKind,
    value: &'a Value,
    field: &str,
) -> Result<&'a Value, ContractError> {
    match value.get(field) {
        Some(found) if !found.is_null() => Ok(found),
        _ => Err(ContractError::MissingField {
            scenario: scenario.name().to_owned(),
            field: field.to_owned(),
        }),
    }
}

/// 필드 키가 존재하는지 확인합니다 (null 허용).
///
/// presence 모드의 시드 픽스처 검증처럼 키의 존재만이 계약인 경우에
/// 사용합니다. 시드 레코드 일부는 `"data": null`을 반환합니다.
pub fn expect_field_key<'a>(
    scenario: ScenarioKind,
    value: &'a Value,
    field: &str,
) -> Result<&'a Value, ContractError> {
    value.get(field).ok_or_else(|| ContractError::MissingField {
        scenario: scenario.name().to_owned(),
        field: field.to_owned(),
    })
}

/// 필드 값이 기대값과 정확히 일치하는지 확인합니다.
pub fn expect_field_eq(
    scenario: ScenarioKind,
    value: &Value,
    field: &str,
    expected: &Value,
) -> Result<(), ContractError> {
    let actual = expect_field_key(scenario, value, field)?;
    if actual != expected {
        return Err(ContractError::FieldMismatch {
            scenario: scenario.name().to_owned(),
            field: field.to_owned(),
            expected: expected.to_string(),
            actual: actual.to_string(),
        });
    }
    Ok(())
}

/// 필드가 비어 있지 않은 문자열인지 확인하고 그 값을 반환합니다.
///
/// 서버가 부여한 오브젝트 id 검증에 사용합니다. 빈 id는 이후 시나리오를
/// 무효화하므로 계약 위반입니다.
pub fn expect_non_empty_str<'a>(
    scenario: ScenarioKind,
    value: &'a Value,
    field: &str,
) -> Result<&'a str, ContractError> {
    let found = expect_field_present(scenario, value, field)?;
    let text = found.as_str().ok_or_else(|| ContractError::FieldMismatch {
        scenario: scenario.name().to_owned(),
        field: field.to_owned(),
        expected: "a string".to_owned(),
        actual: value_kind(found).to_owned(),
    })?;
    if text.is_empty() {
        return Err(ContractError::FieldMismatch {
            scenario: scenario.name().to_owned(),
            field: field.to_owned(),
            expected: "a non-empty string".to_owned(),
            actual: "\"\"".to_owned(),
        });
    }
    Ok(text)
}
