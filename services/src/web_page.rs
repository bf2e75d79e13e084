//! Fetch a web page and reduce it to the text a visitor would actually read.
//!
//! Script, style and other non-rendered markup is dropped; whitespace is
//! collapsed so the result can be embedded straight into a prompt.

use std::time::Duration;

use reqwest::StatusCode;
use scraper::{ElementRef, Html, Node, Selector};
use thiserror::Error;
use tracing::{debug, warn};

/// Upper bound for the amount of page text handed to callers (chars).
pub const MAX_PAGE_CHARS: usize = 10_000;

/// Upper bound for the raw page body read off the wire (bytes).
pub const MAX_PAGE_BYTES: usize = 2 * 1024 * 1024;

const FETCH_TIMEOUT_SECS: u64 = 15;
const USER_AGENT: &str = "Mozilla/5.0 (compatible; ScamOrNot/0.1; +https://example.invalid/bot)";

/// Elements whose text never reaches the screen.
const SKIPPED_TAGS: &[&str] = &["script", "style", "noscript", "template", "head"];

#[derive(Debug, Error)]
pub enum FetchError {
    /// DNS/connect/TLS/timeout or an unparsable URL.
    #[error("failed to fetch {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status.
    #[error("failed to fetch {url}: HTTP {status}")]
    Status { url: String, status: StatusCode },
}

/// Reusable page fetcher; holds one HTTP client for all requests.
#[derive(Debug, Clone)]
pub struct PageFetcher {
    client: reqwest::Client,
    max_bytes: usize,
}

impl PageFetcher {
    pub fn new() -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(FETCH_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self {
            client,
            max_bytes: MAX_PAGE_BYTES,
        })
    }

    /// Overrides the body size cap ([`MAX_PAGE_BYTES`] by default).
    pub fn with_max_bytes(mut self, max_bytes: usize) -> Self {
        self.max_bytes = max_bytes;
        self
    }

    /// Downloads `url` and returns its visible text, capped at [`MAX_PAGE_CHARS`].
    ///
    /// An empty string means the page was reachable but had no readable text.
    pub async fn fetch_visible_text(&self, url: &str) -> Result<String, FetchError> {
        let transport = |source| FetchError::Transport {
            url: url.to_string(),
            source,
        };

        let mut resp = self.client.get(url).send().await.map_err(transport)?;

        let status = resp.status();
        if !status.is_success() {
            warn!(%url, %status, "page fetch returned non-success status");
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }

        if let Some(len) = resp.content_length() {
            debug!(%url, content_length = len, cap = self.max_bytes, "page body announced");
        }

        let mut body = Vec::new();
        while let Some(chunk) = resp.chunk().await.map_err(transport)? {
            let room = self.max_bytes - body.len();
            if chunk.len() >= room {
                body.extend_from_slice(&chunk[..room]);
                debug!(%url, cap = self.max_bytes, "page body truncated");
                break;
            }
            body.extend_from_slice(&chunk);
        }

        let html = String::from_utf8_lossy(&body);
        let text = truncate_chars(extract_visible_text(&html), MAX_PAGE_CHARS);

        debug!(%url, html_len = html.len(), text_len = text.len(), "page fetched");
        Ok(text)
    }
}

/// Extracts visible text from an HTML document.
///
/// Walks `<body>` (or the whole document when there is none), skipping
/// [`SKIPPED_TAGS`], and collapses runs of whitespace into single spaces.
pub fn extract_visible_text(html: &str) -> String {
    let document = Html::parse_document(html);

    let root = Selector::parse("body")
        .ok()
        .and_then(|sel| document.select(&sel).next())
        .unwrap_or_else(|| document.root_element());

    let mut raw = String::new();
    collect_text(root, &mut raw);

    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn collect_text(element: ElementRef<'_>, out: &mut String) {
    for node in element.children() {
        match node.value() {
            Node::Text(text) => {
                out.push_str(text);
                out.push(' ');
            }
            Node::Element(el) if SKIPPED_TAGS.contains(&el.name()) => {}
            Node::Element(_) => {
                if let Some(child) = ElementRef::wrap(node) {
                    collect_text(child, out);
                }
            }
            _ => {}
        }
    }
}

/// Cuts `text` to at most `max` chars, never splitting a code point.
fn truncate_chars(text: String, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((idx, _)) => text[..idx].to_string(),
        None => text,
    }
}
