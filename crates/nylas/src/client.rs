//! The top-level API client.

use std::time::Duration;

use crate::config::{DEFAULT_TIMEOUT, Region};
use crate::resources::{
    Attachments, Auth, Calendars, Connectors, Contacts, Drafts, Events, Folders, Grants, Messages,
    Notetakers, RedirectUris, Threads,
};
use crate::transport::Transport;

/// Entry point to the API.
///
/// The client is cheap to share: all state is the configuration fixed at
/// construction plus a connection pool. Resource accessors borrow the
/// client and carry no caches, so two accessors for the same grant are
/// interchangeable.
///
/// ```no_run
/// # async fn run() -> nylas::Result<()> {
/// use nylas::{Client, Query};
///
/// let client = Client::builder("NYLAS_API_KEY value").build();
/// let messages = client
///     .messages("grant-id")
///     .list(Query::new().with("unread", true))
///     .await?;
/// println!("{} unread", messages.data.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Client {
    transport: Transport,
}

impl Client {
    /// Starts building a client authenticated with `api_key`.
    pub fn builder(api_key: impl Into<String>) -> ClientBuilder {
        ClientBuilder {
            api_key: api_key.into(),
            api_uri: None,
            region: Region::default(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// A client for the default region with the default timeout.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::builder(api_key).build()
    }

    pub fn messages(&self, identifier: &str) -> Messages<'_> {
        Messages::new(&self.transport, identifier)
    }

    pub fn threads(&self, identifier: &str) -> Threads<'_> {
        Threads::new(&self.transport, identifier)
    }

    pub fn drafts(&self, identifier: &str) -> Drafts<'_> {
        Drafts::new(&self.transport, identifier)
    }

    pub fn attachments(&self, identifier: &str) -> Attachments<'_> {
        Attachments::new(&self.transport, identifier)
    }

    pub fn events(&self, identifier: &str) -> Events<'_> {
        Events::new(&self.transport, identifier)
    }

    pub fn calendars(&self, identifier: &str) -> Calendars<'_> {
        Calendars::new(&self.transport, identifier)
    }

    pub fn contacts(&self, identifier: &str) -> Contacts<'_> {
        Contacts::new(&self.transport, identifier)
    }

    pub fn folders(&self, identifier: &str) -> Folders<'_> {
        Folders::new(&self.transport, identifier)
    }

    pub fn notetakers(&self, identifier: &str) -> Notetakers<'_> {
        Notetakers::new(&self.transport, identifier)
    }

    pub fn grants(&self) -> Grants<'_> {
        Grants::new(&self.transport)
    }

    pub fn connectors(&self) -> Connectors<'_> {
        Connectors::new(&self.transport)
    }

    pub fn redirect_uris(&self) -> RedirectUris<'_> {
        RedirectUris::new(&self.transport)
    }

    pub fn auth(&self) -> Auth<'_> {
        Auth::new(&self.transport)
    }
}

/// Builder for [`Client`].
#[derive(Debug)]
pub struct ClientBuilder {
    api_key: String,
    api_uri: Option<String>,
    region: Region,
    timeout: Duration,
}

impl ClientBuilder {
    /// Selects a deployment region. Ignored when [`api_uri`] is set.
    ///
    /// [`api_uri`]: ClientBuilder::api_uri
    pub fn region(mut self, region: Region) -> Self {
        self.region = region;
        self
    }

    /// Overrides the base URL entirely (self-hosted deployments, tests).
    pub fn api_uri(mut self, api_uri: impl Into<String>) -> Self {
        self.api_uri = Some(api_uri.into());
        self
    }

    /// Per-request timeout applied unless a call overrides it.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build(self) -> Client {
        let api_uri = self
            .api_uri
            .unwrap_or_else(|| self.region.api_url().to_string());
        Client {
            transport: Transport::new(self.api_key, api_uri, self.timeout),
        }
    }
}
