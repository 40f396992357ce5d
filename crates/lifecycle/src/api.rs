//! Remote objects API abstraction for testability.
//!
//! The [`ObjectsApi`] trait abstracts the six endpoint calls of the target
//! service, allowing production code to use [`HttpObjectsApi`] while tests
//! use `MockObjectsApi`.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │ LifecycleRunner │
//! └────────┬────────┘
//!          │
//!          ▼
//!   ┌─────────────┐
//!   │ ObjectsApi  │ (trait)
//!   └─────────────┘
//!        │     │
//!        ▼     ▼
//!   ┌──────┐ ┌──────┐
//!   │ Http │ │ Mock │
//!   └───┬──┘ └──────┘
//!       │
//!       ▼
//!   remote service
//! ```
//!
//! # Status codes are data, not errors
//!
//! A 4xx/5xx response is NOT a transport error: it comes back in
//! [`ApiResponse`] for the contract layer to judge. `TransportError` is
//! reserved for requests that never produced a readable response
//! (connection failure, timeout, undecodable body).
//!
//! # Object ID Validation
//!
//! Methods that accept object IDs validate them before building a URL:
//! - Must be 1-128 characters
//! - Must contain only ASCII alphanumerics or `-`
//! - Empty IDs and IDs with path characters are rejected
//!
//! # Examples
//!
//! ```ignore
//! use restcanary_core::config::ServiceConfig;
//! use restcanary_lifecycle::HttpObjectsApi;
//!
//! let api = HttpObjectsApi::from_config(&ServiceConfig::default())?;
//! let response = api.list_objects().await?;
//! assert_eq!(response.status, 200);
//! # Ok::<(), restcanary_core::error::TransportError>(())
//! ```

use std::future::Future;
use std::time::Duration;

use serde_json::Value;
use tracing::debug;

use restcanary_core::config::ServiceConfig;
use restcanary_core::error::TransportError;
use restcanary_core::types::{ApiResponse, ObjectDraft, ObjectPatch};

/// Objects collection endpoint, relative to the service base URL.
const OBJECTS_PATH: &str = "objects";

/// Validates an object ID before it is interpolated into a URL path.
///
/// The service assigns opaque string IDs (short decimals for seed data,
/// hex strings for created objects). This function rejects anything that
/// could alter the request path.
fn validate_object_id(id: &str) -> Result<(), TransportError> {
    if id.is_empty() || id.len() > 128 {
        return Err(TransportError::InvalidUrl {
            url: format!("{OBJECTS_PATH}/{id}"),
            reason: format!("invalid object id: length {} (must be 1-128)", id.len()),
        });
    }
    if !id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
        return Err(TransportError::InvalidUrl {
            url: format!("{OBJECTS_PATH}/{id}"),
            reason: "invalid object id: contains characters outside [0-9A-Za-z-]".to_owned(),
        });
    }
    Ok(())
}

/// Trait abstracting the six endpoint calls of the objects service.
///
/// All HTTP access goes through this trait, enabling testability via
/// mocking. The trait is `Send + Sync + 'static`, allowing safe sharing
/// across async contexts.
///
/// # Implementations
///
/// - [`HttpObjectsApi`]: Production implementation using `reqwest`
/// - `MockObjectsApi`: Test implementation with configurable responses
///   (available in tests only)
///
/// # Error Handling
///
/// Every method returns the raw [`ApiResponse`] (status + JSON body) on
/// success. `TransportError` is returned only when the service could not
/// be reached or the body could not be decoded.
pub trait ObjectsApi: Send + Sync + 'static {
    /// Lists all objects.
    ///
    /// `GET /objects`. The happy-path body is a JSON array of objects.
    ///
    /// # Errors
    ///
    /// Returns `TransportError` if the request fails or the body is
    /// unreadable.
    fn list_objects(&self) -> impl Future<Output = Result<ApiResponse, TransportError>> + Send;

    /// Creates a new object from the draft.
    ///
    /// `POST /objects`. The service assigns an `id` and a `createdAt`
    /// timestamp and echoes `name` and `data` back.
    fn create_object(
        &self,
        draft: &ObjectDraft,
    ) -> impl Future<Output = Result<ApiResponse, TransportError>> + Send;

    /// Fetches a single object by ID.
    ///
    /// `GET /objects/{id}`. A deleted or unknown ID yields a 404 response
    /// (still an `Ok(ApiResponse)`, not an error).
    ///
    /// # Errors
    ///
    /// - `TransportError::InvalidUrl`: the ID failed validation
    /// - `TransportError::RequestFailed` / `BodyDecode`: transport failure
    fn fetch_object(
        &self,
        id: &str,
    ) -> impl Future<Output = Result<ApiResponse, TransportError>> + Send;

    /// Replaces an object completely.
    ///
    /// `PUT /objects/{id}` with a full draft. The service sets `updatedAt`.
    fn replace_object(
        &self,
        id: &str,
        draft: &ObjectDraft,
    ) -> impl Future<Output = Result<ApiResponse, TransportError>> + Send;

    /// Partially updates an object.
    ///
    /// `PATCH /objects/{id}`. Only the fields present in the patch are
    /// sent; everything else must remain unchanged on the server.
    fn amend_object(
        &self,
        id: &str,
        patch: &ObjectPatch,
    ) -> impl Future<Output = Result<ApiResponse, TransportError>> + Send;

    /// Deletes an object.
    ///
    /// `DELETE /objects/{id}`. The happy-path body carries a confirmation
    /// `message`.
    fn delete_object(
        &self,
        id: &str,
    ) -> impl Future<Output = Result<ApiResponse, TransportError>> + Send;
}

/// Production objects API client using `reqwest`.
///
/// Holds one [`reqwest::Client`] configured from [`ServiceConfig`]
/// (timeout, user agent) and a normalized base URL. The client is cheap
/// to clone and connection pooling is handled internally by reqwest.
///
/// # Base URL Normalization
///
/// A trailing slash is appended to the configured base URL when missing,
/// so that joining `objects` always extends the path instead of replacing
/// its last segment.
#[derive(Debug)]
pub struct HttpObjectsApi {
    client: reqwest::Client,
    base_url: reqwest::Url,
    log_bodies: bool,
}

impl HttpObjectsApi {
    /// Builds a client from the service configuration.
    ///
    /// # Errors
    ///
    /// - `TransportError::InvalidUrl`: `base_url` does not parse
    /// - `TransportError::ClientBuild`: reqwest client construction failed
    ///   (e.g. the configured user agent is not a valid header value)
    pub fn from_config(config: &ServiceConfig) -> Result<Self, TransportError> {
        let mut base = config.base_url.clone();
        if !base.ends_with('/') {
            base.push('/');
        }
        let base_url = reqwest::Url::parse(&base).map_err(|e| TransportError::InvalidUrl {
            url: config.base_url.clone(),
            reason: format!("{e}"),
        })?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| TransportError::ClientBuild(format!("{e}")))?;

        Ok(Self {
            client,
            base_url,
            log_bodies: config.log_bodies,
        })
    }

    /// Resolves an endpoint path against the base URL.
    fn endpoint(&self, path: &str) -> Result<reqwest::Url, TransportError> {
        self.base_url
            .join(path)
            .map_err(|e| TransportError::InvalidUrl {
                url: format!("{}{path}", self.base_url),
                reason: format!("{e}"),
            })
    }

    /// Sends a prepared request and decodes the response into [`ApiResponse`].
    ///
    /// An empty body decodes to `Value::Null`; anything else must be valid
    /// JSON or the call fails with `TransportError::BodyDecode`.
    async fn dispatch(
        &self,
        method: &'static str,
        url: &reqwest::Url,
        request: reqwest::RequestBuilder,
    ) -> Result<ApiResponse, TransportError> {
        debug!(method, url = %url, "sending request");

        let response = request
            .send()
            .await
            .map_err(|e| TransportError::RequestFailed {
                method: method.to_owned(),
                url: url.to_string(),
                reason: format!("{e}"),
            })?;
        let status = response.status().as_u16();

        let bytes = response
            .bytes()
            .await
            .map_err(|e| TransportError::BodyDecode {
                method: method.to_owned(),
                url: url.to_string(),
                reason: format!("{e}"),
            })?;
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).map_err(|e| TransportError::BodyDecode {
                method: method.to_owned(),
                url: url.to_string(),
                reason: format!("{e}"),
            })?
        };

        if self.log_bodies {
            debug!(method, url = %url, status, body = %body, "received response");
        } else {
            debug!(method, url = %url, status, "received response");
        }

        Ok(ApiResponse::new(status, body))
    }
}

impl ObjectsApi for HttpObjectsApi {
    async fn list_objects(&self) -> Result<ApiResponse, TransportError> {
        let url = self.endpoint(OBJECTS_PATH)?;
        self.dispatch("GET", &url, self.client.get(url.clone())).await
    }

    async fn create_object(&self, draft: &ObjectDraft) -> Result<ApiResponse, TransportError> {
        let url = self.endpoint(OBJECTS_PATH)?;
        self.dispatch("POST", &url, self.client.post(url.clone()).json(draft))
            .await
    }

    async fn fetch_object(&self, id: &str) -> Result<ApiResponse, TransportError> {
        validate_object_id(id)?;
        let url = self.endpoint(&format!("{OBJECTS_PATH}/{id}"))?;
        self.dispatch("GET", &url, self.client.get(url.clone())).await
    }

    async fn replace_object(
        &self,
        id: &str,
        draft: &ObjectDraft,
    ) -> Result<ApiResponse, TransportError> {
        validate_object_id(id)?;
        let url = self.endpoint(&format!("{OBJECTS_PATH}/{id}"))?;
        self.dispatch("PUT", &url, self.client.put(url.clone()).json(draft))
            .await
    }

    async fn amend_object(
        &self,
        id: &str,
        patch: &ObjectPatch,
    ) -> Result<ApiResponse, TransportError> {
        validate_object_id(id)?;
        let url = self.endpoint(&format!("{OBJECTS_PATH}/{id}"))?;
        self.dispatch("PATCH", &url, self.client.patch(url.clone()).json(patch))
            .await
    }

    async fn delete_object(&self, id: &str) -> Result<ApiResponse, TransportError> {
        validate_object_id(id)?;
        let url = self.endpoint(&format!("{OBJECTS_PATH}/{id}"))?;
        self.dispatch("DELETE", &url, self.client.delete(url.clone()))
            .await
    }
}

/// 테스트용 Mock Objects API 클라이언트
///
/// 작업별로 설정된 응답을 반환하여 네트워크 없이 테스트할 수 있습니다.
/// `delete_object` 호출 이후의 `fetch_object`는 삭제 검증 조회로 간주되어
/// `fetch_after_delete_response`를 반환합니다.
#[cfg(test)]
pub struct MockObjectsApi {
    /// list_objects 호출 시 반환할 응답
    pub list_response: ApiResponse,
    /// create_object 호출 시 반환할 응답
    pub create_response: ApiResponse,
    /// 삭제 전 fetch_object 호출 시 반환할 응답
    pub fetch_response: ApiResponse,
    /// replace_object 호출 시 반환할 응답
    pub replace_response: ApiResponse,
    /// amend_object 호출 시 반환할 응답
    pub amend_response: ApiResponse,
    /// delete_object 호출 시 반환할 응답
    pub delete_response: ApiResponse,
    /// 삭제 후 fetch_object 호출 시 반환할 응답
    pub fetch_after_delete_response: ApiResponse,
    /// 모든 호출이 전송 실패를 시뮬레이션할지 여부
    pub fail_transport: bool,
    /// delete_object가 호출되었는지 여부
    deleted: std::sync::atomic::AtomicBool,
}

/// Mock 기본 응답이 사용하는 오브젝트 id
#[cfg(test)]
pub const MOCK_OBJECT_ID: &str = "7";

#[cfg(test)]
impl MockObjectsApi {
    /// 모든 시나리오가 통과하는 정상 응답 세트로 mock을 생성합니다.
    pub fn new() -> Self {
        use serde_json::json;

        use crate::catalog;

        let create_draft = catalog::create_draft();
        let replacement = catalog::replacement_draft();
        let seed = json!({
            "id": catalog::SEED_OBJECT_ID,
            "name": catalog::SEED_OBJECT_NAME,
            "data": catalog::seed_data(),
        });

        Self {
            list_response: ApiResponse::new(200, json!([seed])),
            create_response: ApiResponse::new(
                200,
                json!({
                    "id": MOCK_OBJECT_ID,
                    "name": create_draft.name,
                    "data": create_draft.data,
                    "createdAt": "2024-11-29T21:57:28.721Z",
                }),
            ),
            fetch_response: ApiResponse::new(
                200,
                json!({
                    "id": MOCK_OBJECT_ID,
                    "name": create_draft.name,
                    "data": create_draft.data,
                }),
            ),
            replace_response: ApiResponse::new(
                200,
                json!({
                    "id": MOCK_OBJECT_ID,
                    "name": replacement.name,
                    "data": replacement.data,
                    "updatedAt": "2024-12-25T21:08:41.986Z",
                }),
            ),
            amend_response: ApiResponse::new(
                200,
                json!({
                    "id": MOCK_OBJECT_ID,
                    "name": catalog::AMEND_NAME,
                    "data": replacement.data,
                    "updatedAt": "2024-12-25T21:09:12.543Z",
                }),
            ),
            delete_response: ApiResponse::new(
                200,
                json!({ "message": catalog::deletion_message(MOCK_OBJECT_ID) }),
            ),
            fetch_after_delete_response: ApiResponse::new(
                404,
                json!({ "error": format!("Object with id={MOCK_OBJECT_ID} was not found.") }),
            ),
            fail_transport: false,
            deleted: std::sync::atomic::AtomicBool::new(false),
        }
    }

    /// list 응답을 설정합니다.
    pub fn with_list_response(mut self, response: ApiResponse) -> Self {
        self.list_response = response;
        self
    }

    /// create 응답을 설정합니다.
    pub fn with_create_response(mut self, response: ApiResponse) -> Self {
        self.create_response = response;
        self
    }

    /// 삭제 전 fetch 응답을 설정합니다.
    pub fn with_fetch_response(mut self, response: ApiResponse) -> Self {
        self.fetch_response = response;
        self
    }

    /// replace 응답을 설정합니다.
    pub fn with_replace_response(mut self, response: ApiResponse) -> Self {
        self.replace_response = response;
        self
    }

    /// amend 응답을 설정합니다.
    pub fn with_amend_response(mut self, response: ApiResponse) -> Self {
        self.amend_response = response;
        self
    }

    /// delete 응답을 설정합니다.
    pub fn with_delete_response(mut self, response: ApiResponse) -> Self {
        self.delete_response = response;
        self
    }

    /// 삭제 후 fetch 응답을 설정합니다.
    pub fn with_fetch_after_delete_response(mut self, response: ApiResponse) -> Self {
        self.fetch_after_delete_response = response;
        self
    }

    /// 모든 호출이 전송 실패하도록 설정합니다.
    pub fn with_failing_transport(mut self) -> Self {
        self.fail_transport = true;
        self
    }

    fn transport_failure(&self, method: &str) -> TransportError {
        TransportError::RequestFailed {
            method: method.to_owned(),
            url: "mock://objects".to_owned(),
            reason: "mock transport failure".to_owned(),
        }
    }
}

#[cfg(test)]
impl Default for MockObjectsApi {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
impl ObjectsApi for MockObjectsApi {
    async fn list_objects(&self) -> Result<ApiResponse, TransportError> {
        if self.fail_transport {
            return Err(self.transport_failure("GET"));
        }
        Ok(self.list_response.clone())
    }

    async fn create_object(&self, _draft: &ObjectDraft) -> Result<ApiResponse, TransportError> {
        if self.fail_transport {
            return Err(self.transport_failure("POST"));
        }
        Ok(self.create_response.clone())
    }

    async fn fetch_object(&self, _id: &str) -> Result<ApiResponse, TransportError> {
        if self.fail_transport {
            return Err(self.transport_failure("GET"));
        }
        if self.deleted.load(std::sync::atomic::Ordering::Relaxed) {
            Ok(self.fetch_after_delete_response.clone())
        } else {
            Ok(self.fetch_response.clone())
        }
    }

    async fn replace_object(
        &self,
        _id: &str,
        _draft: &ObjectDraft,
    ) -> Result<ApiResponse, TransportError> {
        if self.fail_transport {
            return Err(self.transport_failure("PUT"));
        }
        Ok(self.replace_response.clone())
    }

    async fn amend_object(
        &self,
        _id: &str,
        _patch: &ObjectPatch,
    ) -> Result<ApiResponse, TransportError> {
        if self.fail_transport {
            return Err(self.transport_failure("PATCH"));
        }
        Ok(self.amend_response.clone())
    }

    async fn delete_object(&self, _id: &str) -> Result<ApiResponse, TransportError> {
        if self.fail_transport {
            return Err(self.transport_failure("DELETE"));
        }
        self.deleted
            .store(true, std::sync::atomic::Ordering::Relaxed);
        Ok(self.delete_response.clone())
    }
}
