/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/25
******************************************************************************/
use crate::error::AppError;
use reqwest::multipart::{Form, Part};
use serde::Serialize;
use std::path::Path;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Per-request options: extra headers, query pairs, timeout and cancellation
///
/// # Example
///
/// ```rust
/// use careermate_client::model::requests::RequestOptions;
/// use std::time::Duration;
/// use tokio_util::sync::CancellationToken;
///
/// let cancel = CancellationToken::new();
/// let options = RequestOptions::new()
///     .query("page", 0)
///     .query_opt("keyword", Some("rust"))
///     .header("Accept-Language", "vi")
///     .timeout(Duration::from_secs(5))
///     .cancel_with(cancel.clone());
/// assert_eq!(options.query.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// Extra headers; `Authorization` is owned by the client and ignored here
    pub headers: Vec<(String, String)>,
    /// Query string pairs
    pub query: Vec<(String, String)>,
    /// Overrides the client's default timeout
    pub timeout: Option<Duration>,
    /// Aborts the request when cancelled
    pub cancel: Option<CancellationToken>,
}

impl RequestOptions {
    /// Empty options
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a header
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Adds a query pair
    #[must_use]
    pub fn query(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((name.into(), value.to_string()));
        self
    }

    /// Adds a query pair when a value is present and not blank
    #[must_use]
    pub fn query_opt<V: ToString>(self, name: impl Into<String>, value: Option<V>) -> Self {
        match value.map(|v| v.to_string()) {
            Some(v) if !v.trim().is_empty() => self.query(name, v),
            _ => self,
        }
    }

    /// Adds `page` and `size` query pairs
    #[must_use]
    pub fn paged(self, page: u32, size: u32) -> Self {
        self.query("page", page).query("size", size)
    }

    /// Sets a timeout for this request
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Attaches a cancellation token
    #[must_use]
    pub fn cancel_with(mut self, token: CancellationToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// Whether the attached token has already been cancelled
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancel.as_ref().is_some_and(CancellationToken::is_cancelled)
    }
}

/// A file sent as one part of a `multipart/form-data` body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePart {
    /// Form field name
    pub field_name: String,
    /// File name reported to the server
    pub file_name: String,
    /// MIME type, when known
    pub mime_type: Option<String>,
    /// File contents
    pub bytes: Vec<u8>,
}

impl FilePart {
    /// Creates a part from in-memory bytes
    pub fn new(
        field_name: impl Into<String>,
        file_name: impl Into<String>,
        bytes: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            field_name: field_name.into(),
            file_name: file_name.into(),
            mime_type: None,
            bytes: bytes.into(),
        }
    }

    /// Reads a part from disk, naming it after the file
    pub async fn from_path(
        field_name: impl Into<String>,
        path: impl AsRef<Path>,
    ) -> Result<Self, AppError> {
        let path = path.as_ref();
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| AppError::InvalidInput(format!("no file name in {}", path.display())))?
            .to_string();
        let bytes = tokio::fs::read(path).await?;
        let mime_type = mime_from_extension(&file_name).map(str::to_string);
        Ok(Self {
            field_name: field_name.into(),
            file_name,
            mime_type,
            bytes,
        })
    }

    /// Sets the MIME type
    #[must_use]
    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }

    /// Builds a fresh form holding this part
    ///
    /// Forms are consumed when sent, so a retried upload builds a new one.
    pub fn to_form(&self) -> Result<Form, AppError> {
        let mut part = Part::bytes(self.bytes.clone()).file_name(self.file_name.clone());
        if let Some(mime) = &self.mime_type {
            part = part
                .mime_str(mime)
                .map_err(|e| AppError::InvalidInput(format!("invalid mime type {mime}: {e}")))?;
        }
        Ok(Form::new().part(self.field_name.clone(), part))
    }
}

fn mime_from_extension(file_name: &str) -> Option<&'static str> {
    let extension = file_name.rsplit_once('.')?.1.to_ascii_lowercase();
    match extension.as_str() {
        "pdf" => Some("application/pdf"),
        "doc" => Some("application/msword"),
        "docx" => Some("application/vnd.openxmlformats-officedocument.wordprocessingml.document"),
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "webp" => Some("image/webp"),
        _ => None,
    }
}

/// Body of an outgoing request
pub enum Payload<'a, B: Serialize + ?Sized> {
    /// No body
    Empty,
    /// JSON body
    Json(&'a B),
    /// Multipart body with a single file
    File(&'a FilePart),
}

impl<'a, B: Serialize + ?Sized> Payload<'a, B> {
    /// Wraps an optional JSON body
    pub fn from_option(body: Option<&'a B>) -> Self {
        match body {
            Some(b) => Payload::Json(b),
            None => Payload::Empty,
        }
    }
}
