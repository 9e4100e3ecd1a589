//! Generic operations shared by every resource.
//!
//! Each concrete resource composes list/find/create/update/destroy from
//! the functions here, parameterized by the payload type at the call site
//! and by a [`Scope`] declared when the resource is constructed. Path
//! building and envelope unwrapping live here once, not per resource.

use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{Error, Result};
use crate::response::{DeleteResponse, ListResponse, Response};
use crate::transport::{Query, RequestSpec, Transport};

/// Which path family a resource belongs to.
///
/// Account-scoped resources live under `/v3/grants/{identifier}/...`;
/// application-scoped resources operate on the application's own
/// configuration under `/v3/...`. A resource declares its family at
/// composition time; nothing defaults silently to either.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scope {
    /// Scoped to one connected account (grant).
    Grant(String),
    /// Scoped to the application itself.
    Application,
}

impl Scope {
    /// The collection path for `resource`.
    pub(crate) fn path(&self, resource: &str) -> String {
        match self {
            Self::Grant(identifier) => {
                format!("/v3/grants/{}/{resource}", urlencoding::encode(identifier))
            }
            Self::Application => format!("/v3/{resource}"),
        }
    }

    /// The item path for one object of `resource`.
    pub(crate) fn item_path(&self, resource: &str, id: &str) -> String {
        format!("{}/{}", self.path(resource), urlencoding::encode(id))
    }
}

/// HTTP method used by a resource's update operation.
///
/// Most resources replace the full object with `PUT`; partial-patch
/// resources opt into `PATCH` explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateMethod {
    Put,
    Patch,
}

impl UpdateMethod {
    fn http(self) -> Method {
        match self {
            Self::Put => Method::PUT,
            Self::Patch => Method::PATCH,
        }
    }
}

/// Fetches exactly one page of a collection.
pub(crate) async fn list<T: DeserializeOwned>(
    transport: &Transport,
    path: String,
    query: Query,
) -> Result<ListResponse<T>> {
    let (value, _headers) = transport
        .execute(RequestSpec::new(Method::GET, path).query(query))
        .await?;
    ListResponse::from_value(value)
}

/// Fetches a single object by id.
pub(crate) async fn find<T: DeserializeOwned>(
    transport: &Transport,
    path: String,
    query: Query,
) -> Result<Response<T>> {
    let (value, _headers) = transport
        .execute(RequestSpec::new(Method::GET, path).query(query))
        .await?;
    Response::from_value(value)
}

/// Creates an object with a JSON body.
pub(crate) async fn create<T: DeserializeOwned, B: Serialize>(
    transport: &Transport,
    path: String,
    body: &B,
    query: Query,
) -> Result<Response<T>> {
    let body = serde_json::to_value(body)
        .map_err(|e| Error::Validation(format!("unserializable request body: {e}")))?;
    let (value, _headers) = transport
        .execute(RequestSpec::new(Method::POST, path).query(query).json(body))
        .await?;
    Response::from_value(value)
}

/// Updates an object; the resource chooses `PUT` or `PATCH` explicitly.
pub(crate) async fn update<T: DeserializeOwned, B: Serialize>(
    transport: &Transport,
    method: UpdateMethod,
    path: String,
    body: &B,
    query: Query,
) -> Result<Response<T>> {
    let body = serde_json::to_value(body)
        .map_err(|e| Error::Validation(format!("unserializable request body: {e}")))?;
    let (value, _headers) = transport
        .execute(RequestSpec::new(method.http(), path).query(query).json(body))
        .await?;
    Response::from_value(value)
}

/// Deletes an object, expecting the bare acknowledgement envelope.
pub(crate) async fn destroy(
    transport: &Transport,
    path: String,
    query: Query,
) -> Result<DeleteResponse> {
    let (value, _headers) = transport
        .execute(RequestSpec::new(Method::DELETE, path).query(query))
        .await?;
    DeleteResponse::from_value(value)
}

/// Deletes an object whose endpoint returns a richer payload than the
/// default acknowledgement.
pub(crate) async fn destroy_as<T: DeserializeOwned>(
    transport: &Transport,
    path: String,
    query: Query,
) -> Result<Response<T>> {
    let (value, _headers) = transport
        .execute(RequestSpec::new(Method::DELETE, path).query(query))
        .await?;
    Response::from_value(value)
}
