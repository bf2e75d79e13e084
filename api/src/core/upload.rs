//! Reads the multipart fields the endpoints accept: `file`, `text`, `url`.

use ai_llm_service::InlineImage;
use axum::extract::Multipart;
use tracing::debug;

use crate::error_handler::AppResult;

/// Media type assumed when a file part carries none.
const FALLBACK_MEDIA_TYPE: &str = "application/octet-stream";

/// Known fields of one multipart submission. Unknown fields are ignored.
#[derive(Debug, Default)]
pub struct Upload {
    pub file: Option<InlineImage>,
    pub text: Option<String>,
    pub url: Option<String>,
}

impl Upload {
    /// Drains `multipart`. A repeated field keeps its last value.
    pub async fn read(mut multipart: Multipart) -> AppResult<Self> {
        let mut upload = Upload::default();

        while let Some(field) = multipart.next_field().await? {
            let Some(name) = field.name().map(str::to_owned) else {
                continue;
            };

            match name.as_str() {
                "file" => {
                    let mime_type = field
                        .content_type()
                        .unwrap_or(FALLBACK_MEDIA_TYPE)
                        .to_string();
                    let file_name = field.file_name().map(str::to_owned);
                    let bytes = field.bytes().await?;

                    debug!(?file_name, %mime_type, size = bytes.len(), "file part received");

                    // An untouched optional file input still sends an empty part.
                    let unnamed = file_name.as_deref().is_none_or(str::is_empty);
                    if bytes.is_empty() && unnamed {
                        continue;
                    }
                    upload.file = Some(InlineImage::new(mime_type, bytes));
                }
                "text" => upload.text = Some(field.text().await?),
                "url" => upload.url = Some(field.text().await?),
                other => debug!(field = other, "ignoring unknown multipart field"),
            }
        }

        Ok(upload)
    }
}
