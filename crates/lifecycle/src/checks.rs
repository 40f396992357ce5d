//! 시나리오 체크 -- 여섯 CRUD 시나리오의 계약 검증
//!
//! 각 체크는 하나의 시나리오를 실행합니다: API를 한 번(Delete는 두 번)
//! 호출하고, 상태 코드와 본문이 계약을 지키는지 확인합니다.
//! 계약 위반은 [`ContractError`], 전송 실패는 [`TransportError`]로
//! [`CanaryError`]에 감싸여 반환됩니다.
//!
//! Create 체크는 서버가 부여한 id를 담은 [`CreatedObject`] 핸들을
//! 반환하고, 이후 모든 체크는 이 핸들을 명시적으로 전달받습니다.
//! 전역 상태는 없습니다.

use serde_json::{Value, json};

use restcanary_core::error::{CanaryError, ContractError};
use restcanary_core::report::ScenarioKind;
use restcanary_core::types::{STATUS_CODE_NOT_FOUND, STATUS_CODE_SUCCESS};

use crate::api::ObjectsApi;
use crate::catalog;
use crate::contract::{
    expect_field_eq, expect_field_key, expect_field_present, expect_non_empty_array,
    expect_non_empty_str, expect_status,
};

/// Create 시나리오가 만들어낸 오브젝트 핸들
///
/// 이후 시나리오(Read/Replace/Amend/Delete)는 이 핸들의 id로
/// 같은 오브젝트를 대상으로 동작합니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedObject {
    /// 서버가 부여한 오브젝트 id
    pub id: String,
}

/// 목록 조회 시나리오: GET /objects
///
/// 상태가 성공이고 본문이 비어 있지 않은 배열이어야 합니다.
/// `strict_seed`가 true면 첫 오브젝트의 id/name/data를 시드 픽스처와
/// 리터럴 비교하고, false면 세 필드의 존재만 확인합니다
/// (시드 데이터가 변해도 통과하는 완화 모드).
pub async fn check_list_objects<A: ObjectsApi>(
    api: &A,
    strict_seed: bool,
) -> Result<(), CanaryError> {
    let kind = ScenarioKind::ListObjects;
    let response = api.list_objects().await?;
    expect_status(kind, &response, STATUS_CODE_SUCCESS)?;

    let items = expect_non_empty_array(kind, &response.body)?;
    let first = &items[0];

    if strict_seed {
        expect_field_eq(kind, first, "id", &json!(catalog::SEED_OBJECT_ID))?;
        expect_field_eq(kind, first, "name", &json!(catalog::SEED_OBJECT_NAME))?;
        expect_field_eq(kind, first, "data", &Value::Object(catalog::seed_data()))?;
    } else {
        expect_field_present(kind, first, "id")?;
        expect_field_present(kind, first, "name")?;
        // 시드 레코드 일부는 data가 null이므로 키 존재만 확인
        expect_field_key(kind, first, "data")?;
    }

    Ok(())
}

/// 생성 시나리오: POST /objects
///
/// 서버가 `name`/`data`를 그대로 되돌려주고 `createdAt`과 비어 있지 않은
/// `id`를 부여해야 합니다. 반환된 핸들이 이후 시나리오의 대상입니다.
pub async fn check_create_object<A: ObjectsApi>(api: &A) -> Result<CreatedObject, CanaryError> {
    let kind = ScenarioKind::CreateObject;
    let draft = catalog::create_draft();
    let response = api.create_object(&draft).await?;
    expect_status(kind, &response, STATUS_CODE_SUCCESS)?;

    let body = &response.body;
    expect_field_eq(kind, body, "name", &json!(draft.name))?;
    expect_field_eq(kind, body, "data", &Value::Object(draft.data))?;
    expect_field_present(kind, body, "createdAt")?;
    let id = expect_non_empty_str(kind, body, "id")?;

    Ok(CreatedObject { id: id.to_owned() })
}

/// 단건 조회 시나리오: GET /objects/{id}
///
/// Create가 보낸 `name`/`data`가 저장된 그대로 조회되어야 합니다.
pub async fn check_read_object<A: ObjectsApi>(
    api: &A,
    created: &CreatedObject,
) -> Result<(), CanaryError> {
    let kind = ScenarioKind::ReadObject;
    let response = api.fetch_object(&created.id).await?;
    expect_status(kind, &response, STATUS_CODE_SUCCESS)?;

    let body = &response.body;
    expect_field_eq(kind, body, "id", &json!(created.id))?;
    expect_field_eq(kind, body, "name", &json!(catalog::CREATE_NAME))?;
    expect_field_eq(
        kind,
        body,
        "data",
        &Value::Object(catalog::create_draft().data),
    )?;

    Ok(())
}

/// 전체 교체 시나리오: PUT /objects/{id}
///
/// 응답이 교체 본문의 `name`/`data`를 완전히 반영하고
/// `updatedAt`이 정의되어야 합니다.
pub async fn check_replace_object<A: ObjectsApi>(
    api: &A,
    created: &CreatedObject,
) -> Result<(), CanaryError> {
    let kind = ScenarioKind::ReplaceObject;
    let draft = catalog::replacement_draft();
    let response = api.replace_object(&created.id, &draft).await?;
    expect_status(kind, &response, STATUS_CODE_SUCCESS)?;

    let body = &response.body;
    expect_field_eq(kind, body, "name", &json!(draft.name))?;
    expect_field_eq(kind, body, "data", &Value::Object(draft.data))?;
    expect_field_present(kind, body, "updatedAt")?;

    Ok(())
}

/// 부분 수정 시나리오: PATCH /objects/{id}
///
/// 이름만 바뀌고 `data`는 교체 본문 그대로 유지되어야 합니다
/// (부분 수정 격리). `updatedAt`이 정의되어야 합니다.
pub async fn check_amend_object<A: ObjectsApi>(
    api: &A,
    created: &CreatedObject,
) -> Result<(), CanaryError> {
    let kind = ScenarioKind::AmendObject;
    let patch = catalog::rename_patch();
    let response = api.amend_object(&created.id, &patch).await?;
    expect_status(kind, &response, STATUS_CODE_SUCCESS)?;

    let body = &response.body;
    expect_field_eq(kind, body, "name", &json!(catalog::AMEND_NAME))?;
    // 전송하지 않은 data가 변하면 부분 수정 격리 위반
    expect_field_eq(
        kind,
        body,
        "data",
        &Value::Object(catalog::replacement_draft().data),
    )?;
    expect_field_present(kind, body, "updatedAt")?;

    Ok(())
}

/// 삭제 시나리오: DELETE /objects/{id} + 삭제 검증 조회
///
/// 삭제 응답의 `message`가 정확한 확인 문구여야 하고, 곧바로 같은 id를
/// 다시 조회하면 NOT_FOUND여야 합니다. 성공 상태로 다시 조회되면
/// 전용 위반([`ContractError::StillRetrievable`])입니다.
pub async fn check_delete_object<A: ObjectsApi>(
    api: &A,
    created: &CreatedObject,
) -> Result<(), CanaryError> {
    let kind = ScenarioKind::DeleteObject;
    let response = api.delete_object(&created.id).await?;
    expect_status(kind, &response, STATUS_CODE_SUCCESS)?;
    expect_field_eq(
        kind,
        &response.body,
        "message",
        &json!(catalog::deletion_message(&created.id)),
    )?;

    // 삭제 검증 조회
    let verify = api.fetch_object(&created.id).await?;
    if verify.status == STATUS_CODE_SUCCESS {
        return Err(ContractError::StillRetrievable {
            id: created.id.clone(),
            status: verify.status,
        }
        .into());
    }
    expect_status(kind, &verify, STATUS_CODE_NOT_FOUND)?;

    Ok(())
}
