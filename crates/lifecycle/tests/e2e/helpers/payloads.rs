//! Canonical response payloads for the fake objects service.
//!
//! Bodies mirror what the real deployment returns for each call, built
//! from the same catalog constants the checks assert against.

use serde_json::{Value, json};

use restcanary_lifecycle::catalog;

/// GET /objects body with the pinned seed record first.
pub fn seed_list_body() -> Value {
    json!([
        {
            "id": catalog::SEED_OBJECT_ID,
            "name": catalog::SEED_OBJECT_NAME,
            "data": catalog::seed_data(),
        },
        { "id": "2", "name": "Apple iPhone 12 Mini, 256GB, Blue", "data": null },
    ])
}

/// POST /objects echo with server-assigned id and createdAt.
pub fn created_body(id: &str) -> Value {
    let draft = catalog::create_draft();
    json!({
        "id": id,
        "name": draft.name,
        "data": draft.data,
        "createdAt": "2024-11-29T21:57:28.721Z",
    })
}

/// GET /objects/{id} body, the object as created.
pub fn read_body(id: &str) -> Value {
    let draft = catalog::create_draft();
    json!({
        "id": id,
        "name": draft.name,
        "data": draft.data,
    })
}

/// PUT /objects/{id} echo with the full replacement body.
pub fn replaced_body(id: &str) -> Value {
    let draft = catalog::replacement_draft();
    json!({
        "id": id,
        "name": draft.name,
        "data": draft.data,
        "updatedAt": "2024-12-25T21:08:41.986Z",
    })
}

/// PATCH /objects/{id} echo, renamed with data preserved from the PUT.
pub fn amended_body(id: &str) -> Value {
    json!({
        "id": id,
        "name": catalog::AMEND_NAME,
        "data": catalog::replacement_draft().data,
        "updatedAt": "2024-12-25T21:09:12.543Z",
    })
}

/// DELETE /objects/{id} confirmation body.
pub fn delete_body(id: &str) -> Value {
    json!({ "message": catalog::deletion_message(id) })
}

/// GET /objects/{id} body after deletion.
pub fn not_found_body(id: &str) -> Value {
    json!({ "error": format!("Object with id={id} was not found.") })
}
