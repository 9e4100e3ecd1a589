//! Encoding of outgoing message bodies with attachments.
//!
//! Small payloads travel as a single JSON body with each attachment's
//! bytes base64-encoded inline. Once the declared attachment sizes reach
//! [`MULTIPART_THRESHOLD_BYTES`], the body switches to
//! `multipart/form-data`: one part named `message` carrying the JSON
//! remainder, plus one part per attachment named by its `content_id`
//! (so inline images keep working via `cid:` references) or `file{index}`.
//!
//! Both paths write non-ASCII text verbatim as UTF-8 on the wire, never
//! as `\uXXXX` escapes.

use std::fmt;
use std::io::Read;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::Serialize;
use serde_json::Value;

use crate::error::{Error, Result};

/// Declared-size threshold at which a send body switches from inline
/// JSON+base64 to multipart/form-data.
pub const MULTIPART_THRESHOLD_BYTES: u64 = 3 * 1024 * 1024;

/// Binary content of an outgoing attachment.
pub enum AttachmentContent {
    /// Content already in memory.
    Bytes(Vec<u8>),
    /// Content read on encode. The reader is consumed from its current
    /// position to completion; the encoder never rewinds a stream it did
    /// not create.
    Reader(Box<dyn Read + Send>),
}

impl AttachmentContent {
    fn into_bytes(self, filename: &str) -> Result<Vec<u8>> {
        match self {
            Self::Bytes(bytes) => Ok(bytes),
            Self::Reader(mut reader) => {
                let mut bytes = Vec::new();
                reader.read_to_end(&mut bytes).map_err(|e| {
                    Error::Validation(format!("unreadable content for attachment {filename}: {e}"))
                })?;
                Ok(bytes)
            }
        }
    }
}

impl fmt::Debug for AttachmentContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bytes(bytes) => f.debug_tuple("Bytes").field(&bytes.len()).finish(),
            Self::Reader(_) => f.debug_tuple("Reader").finish(),
        }
    }
}

/// An attachment to include in an outgoing message or draft.
#[derive(Debug)]
pub struct CreateAttachment {
    pub filename: String,
    pub content_type: String,
    /// Declared size in bytes; drives the encoding decision.
    pub size: u64,
    /// Content id for inline attachments referenced as `cid:` URLs. Also
    /// used as the multipart part name when present.
    pub content_id: Option<String>,
    pub is_inline: bool,
    pub content: AttachmentContent,
}

impl CreateAttachment {
    /// Creates an attachment from in-memory bytes; `size` is taken from
    /// the buffer length.
    pub fn from_bytes(
        filename: impl Into<String>,
        content_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            filename: filename.into(),
            content_type: content_type.into(),
            size: bytes.len() as u64,
            content_id: None,
            is_inline: false,
            content: AttachmentContent::Bytes(bytes),
        }
    }

    /// Creates an attachment read from a stream at encode time. `size` is
    /// the declared size used for the encoding decision; the stream is
    /// read from its current position.
    pub fn from_reader(
        filename: impl Into<String>,
        content_type: impl Into<String>,
        size: u64,
        reader: Box<dyn Read + Send>,
    ) -> Self {
        Self {
            filename: filename.into(),
            content_type: content_type.into(),
            size,
            content_id: None,
            is_inline: false,
            content: AttachmentContent::Reader(reader),
        }
    }

    pub fn with_content_id(mut self, content_id: impl Into<String>) -> Self {
        self.content_id = Some(content_id.into());
        self
    }

    pub fn inline(mut self) -> Self {
        self.is_inline = true;
        self
    }
}

/// The chosen encoding for a send body.
#[derive(Debug)]
pub(crate) enum EncodedBody {
    Json(Value),
    Multipart(reqwest::multipart::Form),
}

/// The multipart part name for each attachment: `content_id` when set,
/// `file{index}` (0-based, array order) otherwise. Duplicate names are a
/// caller error, caught before any network call.
pub(crate) fn part_names(attachments: &[CreateAttachment]) -> Result<Vec<String>> {
    let mut names = Vec::with_capacity(attachments.len());
    for (index, attachment) in attachments.iter().enumerate() {
        let name = match &attachment.content_id {
            Some(content_id) => content_id.clone(),
            None => format!("file{index}"),
        };
        if names.contains(&name) {
            return Err(Error::Validation(format!(
                "ambiguous attachment naming: duplicate part name {name:?}"
            )));
        }
        names.push(name);
    }
    Ok(names)
}

/// Encodes a send body and its attachments.
pub(crate) fn encode_send_body<B: Serialize>(
    body: &B,
    attachments: Vec<CreateAttachment>,
) -> Result<EncodedBody> {
    let mut message = serde_json::to_value(body)
        .map_err(|e| Error::Validation(format!("unserializable request body: {e}")))?;

    if attachments.is_empty() {
        return Ok(EncodedBody::Json(message));
    }

    let names = part_names(&attachments)?;
    let total: u64 = attachments.iter().map(|a| a.size).sum();

    if total >= MULTIPART_THRESHOLD_BYTES {
        // serde_json keeps non-ASCII characters unescaped here, so the
        // `message` part carries raw UTF-8.
        let message_json = serde_json::to_string(&message)
            .map_err(|e| Error::Validation(format!("unserializable request body: {e}")))?;
        let mut form = reqwest::multipart::Form::new().text("message", message_json);

        for (attachment, name) in attachments.into_iter().zip(names) {
            let filename = attachment.filename;
            let bytes = attachment.content.into_bytes(&filename)?;
            let part = reqwest::multipart::Part::bytes(bytes)
                .file_name(filename.clone())
                .mime_str(&attachment.content_type)
                .map_err(|e| {
                    Error::Validation(format!(
                        "invalid content type for attachment {filename}: {e}"
                    ))
                })?;
            form = form.part(name, part);
        }
        return Ok(EncodedBody::Multipart(form));
    }

    let Value::Object(ref mut fields) = message else {
        return Err(Error::Validation("request body is not a JSON object".into()));
    };

    let mut inline = Vec::with_capacity(attachments.len());
    for attachment in attachments {
        let mut entry = serde_json::Map::new();
        entry.insert("filename".into(), attachment.filename.clone().into());
        entry.insert("content_type".into(), attachment.content_type.into());
        entry.insert("size".into(), attachment.size.into());
        if let Some(content_id) = attachment.content_id {
            entry.insert("content_id".into(), content_id.into());
        }
        if attachment.is_inline {
            entry.insert("is_inline".into(), true.into());
        }
        let filename = attachment.filename;
        let bytes = attachment.content.into_bytes(&filename)?;
        entry.insert("content".into(), STANDARD.encode(bytes).into());
        inline.push(Value::Object(entry));
    }
    fields.insert("attachments".into(), Value::Array(inline));

    Ok(EncodedBody::Json(message))
}
