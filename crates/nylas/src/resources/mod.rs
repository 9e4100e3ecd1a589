//! Concrete API resources.
//!
//! Every resource is a thin composition of the generic operations in
//! [`base`] with its endpoint path and scope family; the payload type is
//! passed explicitly at each call site.

pub mod attachments;
pub mod auth;
pub(crate) mod base;
pub mod calendars;
pub mod connectors;
pub mod contacts;
pub mod drafts;
pub mod events;
pub mod folders;
pub mod grants;
pub mod messages;
pub mod notetakers;
pub mod redirect_uris;
pub mod threads;

pub use attachments::Attachments;
pub use auth::{Auth, AuthUrlParams, CodeExchangeRequest, CodeExchangeResponse, PkceChallenge,
    TokenRefreshRequest};
pub use base::{Scope, UpdateMethod};
pub use calendars::{Calendars, CreateCalendarRequest, UpdateCalendarRequest};
pub use connectors::{Connectors, CreateConnectorRequest, UpdateConnectorRequest};
pub use contacts::{Contacts, CreateContactRequest};
pub use drafts::{CreateDraftRequest, Drafts};
pub use events::{CreateEventRequest, Events, RsvpStatus, UpdateEventRequest};
pub use folders::{CreateFolderRequest, Folders, UpdateFolderRequest};
pub use grants::{Grants, UpdateGrantRequest};
pub use messages::{Messages, SendMessageRequest, UpdateMessageRequest};
pub use notetakers::{CreateNotetakerRequest, Notetakers, UpdateNotetakerRequest};
pub use redirect_uris::{CreateRedirectUriRequest, RedirectUris};
pub use threads::{Threads, UpdateThreadRequest};
