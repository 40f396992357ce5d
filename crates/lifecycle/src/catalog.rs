//! 정본 페이로드 카탈로그 -- 시나리오가 주고받는 리터럴 본문 정의
//!
//! 요청 본문과 기대 픽스처를 이 모듈 한 곳에서 정의하여
//! 모든 시나리오와 테스트가 같은 리터럴을 공유합니다.
//! 계약 검증은 여기 정의된 값과의 비교로 수행됩니다.

use serde_json::{Map, Value, json};

use restcanary_core::types::{ObjectDraft, ObjectPatch};

/// 시드 픽스처 오브젝트의 id
pub const SEED_OBJECT_ID: &str = "1";
/// 시드 픽스처 오브젝트의 이름
pub const SEED_OBJECT_NAME: &str = "Google Pixel 6 Pro";
/// 생성(POST) 요청의 이름
pub const CREATE_NAME: &str = "Apple MacBook Pro 18";
/// 교체(PUT) 요청의 이름
pub const REPLACEMENT_NAME: &str = "Apple MacBook Pro 18 Updated";
/// 부분 수정(PATCH) 요청의 이름
pub const AMEND_NAME: &str = "Apple MacBook Pro 16 (Updated Name)";

/// 시드 픽스처의 data 맵
///
/// 목록 첫 오브젝트가 strict 모드에서 정확히 일치해야 하는 값입니다.
pub fn seed_data() -> Map<String, Value> {
    let mut data = Map::new();
    data.insert("color".to_owned(), json!("Cloudy White"));
    data.insert("capacity".to_owned(), json!("128 GB"));
    data
}

/// 생성 요청 본문 (POST)
///
/// 서버는 이 본문의 `name`/`data`를 그대로 되돌려주고
/// `id`와 `createdAt`을 부여해야 합니다.
pub fn create_draft() -> ObjectDraft {
    let mut data = Map::new();
    data.insert("year".to_owned(), json!(2019));
    data.insert("price".to_owned(), json!(1849.99));
    data.insert("CPU model".to_owned(), json!("Intel Core i9"));
    data.insert("Hard disk size".to_owned(), json!("1 TB"));
    ObjectDraft::new(CREATE_NAME, data)
}

/// 교체 요청 본문 (PUT)
///
/// 생성 본문과 다른 `name`, 갱신된 `year`/`price`, 그리고
/// 새 필드 `color`를 포함한 완전한 교체 본문입니다.
pub fn replacement_draft() -> ObjectDraft {
    let mut data = Map::new();
    data.insert("year".to_owned(), json!(2020));
    data.insert("price".to_owned(), json!(1999.99));
    data.insert("CPU model".to_owned(), json!("Intel Core i9"));
    data.insert("Hard disk size".to_owned(), json!("1 TB"));
    data.insert("color".to_owned(), json!("silver"));
    ObjectDraft::new(REPLACEMENT_NAME, data)
}

/// 부분 수정 본문 (PATCH) -- 이름만 변경
///
/// `data` 필드는 직렬화되지 않으므로 서버의 기존 `data`는
/// 변경 없이 유지되어야 합니다.
pub fn rename_patch() -> ObjectPatch {
    ObjectPatch::rename(AMEND_NAME)
}

/// 삭제 확인 메시지
///
/// DELETE 응답의 `message` 필드가 정확히 이 문자열이어야 합니다.
pub fn deletion_message(id: &str) -> String {
    format!("Object with id = {id} has been deleted.")
}
