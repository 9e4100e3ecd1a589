//! Folders resource.

use serde::Serialize;

use crate::error::Result;
use crate::models::Folder;
use crate::pagination::Paginator;
use crate::response::{DeleteResponse, ListResponse, Response};
use crate::transport::{Query, Transport};

use super::base::{self, Scope, UpdateMethod};

#[derive(Debug, Serialize)]
pub struct CreateFolderRequest {
    pub name: String,
    /// Parent folder for providers with folder hierarchies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
}

impl CreateFolderRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent_id: None,
            background_color: None,
            text_color: None,
        }
    }
}

#[derive(Debug, Default, Serialize)]
pub struct UpdateFolderRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
}

/// Mail folders (or labels) of one connected account.
#[derive(Debug)]
pub struct Folders<'c> {
    transport: &'c Transport,
    scope: Scope,
}

impl<'c> Folders<'c> {
    pub(crate) fn new(transport: &'c Transport, identifier: &str) -> Self {
        Self {
            transport,
            scope: Scope::Grant(identifier.to_string()),
        }
    }

    pub async fn list(&self, query: Query) -> Result<ListResponse<Folder>> {
        base::list(self.transport, self.scope.path("folders"), query).await
    }

    pub fn all(&self, filters: Query, limit: Option<u32>) -> Result<Paginator<'c, Folder>> {
        Paginator::new(self.transport, self.scope.path("folders"), filters, limit)
    }

    pub async fn find(&self, folder_id: &str) -> Result<Response<Folder>> {
        base::find(
            self.transport,
            self.scope.item_path("folders", folder_id),
            Query::new(),
        )
        .await
    }

    pub async fn create(&self, request: &CreateFolderRequest) -> Result<Response<Folder>> {
        base::create(
            self.transport,
            self.scope.path("folders"),
            request,
            Query::new(),
        )
        .await
    }

    pub async fn update(
        &self,
        folder_id: &str,
        request: &UpdateFolderRequest,
    ) -> Result<Response<Folder>> {
        base::update(
            self.transport,
            UpdateMethod::Put,
            self.scope.item_path("folders", folder_id),
            request,
            Query::new(),
        )
        .await
    }

    pub async fn destroy(&self, folder_id: &str) -> Result<DeleteResponse> {
        base::destroy(
            self.transport,
            self.scope.item_path("folders", folder_id),
            Query::new(),
        )
        .await
    }
}
