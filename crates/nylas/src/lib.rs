//! Async client for the Nylas v3 email, calendar and contacts API.
//!
//! The crate is organized in three layers:
//!
//! - [`transport`]: one HTTP door the whole library walks through
//!   (auth headers, query serialization, error decoding)
//! - [`models`] and [`response`]: immutable wire records and the
//!   `{request_id, data, next_cursor}` envelopes around them
//! - [`resources`]: one handle per endpoint family, composed from a
//!   small set of generic operations plus [`pagination`] for cursor
//!   traversal and [`attachments`] for the size-based send encoding
//!
//! ```no_run
//! # async fn run() -> nylas::Result<()> {
//! use nylas::{Client, Query, Region};
//!
//! let client = Client::builder("api-key").region(Region::Us).build();
//! let mut pages = client.messages("grant-id").all(Query::new(), None)?;
//! while let Some(page) = pages.next_page().await? {
//!     for message in page.data {
//!         println!("{}: {:?}", message.id, message.subject);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod attachments;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod pagination;
pub mod resources;
pub mod response;
pub mod transport;

pub use attachments::{
    AttachmentContent, CreateAttachment, MULTIPART_THRESHOLD_BYTES,
};
pub use client::{Client, ClientBuilder};
pub use config::{DEFAULT_PAGE_SIZE, DEFAULT_TIMEOUT, MAX_PAGE_SIZE, Region};
pub use error::{ApiError, Error, OAuthError, Result};
pub use pagination::Paginator;
pub use response::{DeleteResponse, ListResponse, Response};
pub use transport::{Download, Query, QueryValue};
