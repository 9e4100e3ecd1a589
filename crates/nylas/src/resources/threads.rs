//! Threads resource.

use serde::Serialize;

use crate::error::Result;
use crate::models::Thread;
use crate::pagination::Paginator;
use crate::response::{DeleteResponse, ListResponse, Response};
use crate::transport::{Query, Transport};

use super::base::{self, Scope, UpdateMethod};

/// Mutable flags of a thread, applied to every message in it.
#[derive(Debug, Default, Clone, Serialize)]
pub struct UpdateThreadRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unread: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starred: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folders: Option<Vec<String>>,
}

/// Threads in one connected account.
#[derive(Debug)]
pub struct Threads<'c> {
    transport: &'c Transport,
    scope: Scope,
}

impl<'c> Threads<'c> {
    pub(crate) fn new(transport: &'c Transport, identifier: &str) -> Self {
        Self {
            transport,
            scope: Scope::Grant(identifier.to_string()),
        }
    }

    pub async fn list(&self, query: Query) -> Result<ListResponse<Thread>> {
        base::list(self.transport, self.scope.path("threads"), query).await
    }

    pub fn all(&self, filters: Query, limit: Option<u32>) -> Result<Paginator<'c, Thread>> {
        Paginator::new(self.transport, self.scope.path("threads"), filters, limit)
    }

    pub async fn find(&self, thread_id: &str) -> Result<Response<Thread>> {
        base::find(
            self.transport,
            self.scope.item_path("threads", thread_id),
            Query::new(),
        )
        .await
    }

    pub async fn update(
        &self,
        thread_id: &str,
        request: &UpdateThreadRequest,
    ) -> Result<Response<Thread>> {
        base::update(
            self.transport,
            UpdateMethod::Put,
            self.scope.item_path("threads", thread_id),
            request,
            Query::new(),
        )
        .await
    }

    pub async fn destroy(&self, thread_id: &str) -> Result<DeleteResponse> {
        base::destroy(
            self.transport,
            self.scope.item_path("threads", thread_id),
            Query::new(),
        )
        .await
    }
}
