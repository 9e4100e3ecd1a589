//! Connectors resource (application-scoped).
//!
//! Connectors are identified by their provider name, so the provider
//! string doubles as the item id in paths.

use serde::Serialize;
use serde_json::Value;

use crate::error::Result;
use crate::models::Connector;
use crate::pagination::Paginator;
use crate::response::{DeleteResponse, ListResponse, Response};
use crate::transport::{Query, Transport};

use super::base::{self, Scope, UpdateMethod};

#[derive(Debug, Serialize)]
pub struct CreateConnectorRequest {
    pub provider: String,
    /// Provider credentials and tuning, passed through opaquely.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<Value>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub scope: Vec<String>,
}

#[derive(Debug, Default, Serialize)]
pub struct UpdateConnectorRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<Vec<String>>,
}

/// The application's provider connectors.
#[derive(Debug)]
pub struct Connectors<'c> {
    transport: &'c Transport,
    scope: Scope,
}

impl<'c> Connectors<'c> {
    pub(crate) fn new(transport: &'c Transport) -> Self {
        Self {
            transport,
            scope: Scope::Application,
        }
    }

    pub async fn list(&self, query: Query) -> Result<ListResponse<Connector>> {
        base::list(self.transport, self.scope.path("connectors"), query).await
    }

    pub fn all(&self, filters: Query, limit: Option<u32>) -> Result<Paginator<'c, Connector>> {
        Paginator::new(
            self.transport,
            self.scope.path("connectors"),
            filters,
            limit,
        )
    }

    pub async fn find(&self, provider: &str) -> Result<Response<Connector>> {
        base::find(
            self.transport,
            self.scope.item_path("connectors", provider),
            Query::new(),
        )
        .await
    }

    pub async fn create(&self, request: &CreateConnectorRequest) -> Result<Response<Connector>> {
        base::create(
            self.transport,
            self.scope.path("connectors"),
            request,
            Query::new(),
        )
        .await
    }

    pub async fn update(
        &self,
        provider: &str,
        request: &UpdateConnectorRequest,
    ) -> Result<Response<Connector>> {
        base::update(
            self.transport,
            UpdateMethod::Put,
            self.scope.item_path("connectors", provider),
            request,
            Query::new(),
        )
        .await
    }

    pub async fn destroy(&self, provider: &str) -> Result<DeleteResponse> {
        base::destroy(
            self.transport,
            self.scope.item_path("connectors", provider),
            Query::new(),
        )
        .await
    }
}
