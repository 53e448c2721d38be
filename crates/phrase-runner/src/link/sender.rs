use thiserror::Error;

use crate::codec::{self, UrlSafeDecodeError};
use crate::config::PhraseConfig;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LinkError {
    #[error("enter a word or phrase first")]
    EmptyPhrase,

    #[error("no link has been generated yet")]
    NoLink,

    #[error(transparent)]
    Decode(#[from] UrlSafeDecodeError),

    #[error(transparent)]
    Clipboard(#[from] ClipboardError),
}

/// The clipboard refused the write.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("clipboard write failed: {0}")]
pub struct ClipboardError(pub String);

/// Where the sender page reads the phrase from (the text input in the browser).
pub trait PhraseSource {
    fn phrase(&self) -> String;
}

impl PhraseSource for str {
    fn phrase(&self) -> String {
        self.to_string()
    }
}

impl PhraseSource for String {
    fn phrase(&self) -> String {
        self.clone()
    }
}

/// Capability to put text on the system clipboard.
pub trait ClipboardWriter {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Build the game link for `phrase`.
///
/// The phrase is trimmed first; a blank phrase is rejected. The sender page
/// name is removed from `pathname` so the link points at the game page that
/// sits next to it.
pub fn share_url(
    origin: &str,
    pathname: &str,
    phrase: &str,
    config: &PhraseConfig,
) -> Result<String, LinkError> {
    let phrase = phrase.trim();
    if phrase.is_empty() {
        return Err(LinkError::EmptyPhrase);
    }

    let token = codec::encode(phrase);
    let base_path = pathname.replacen(&config.sender_page, "", 1);
    Ok(format!(
        "{}{}{}?{}={}",
        origin, base_path, config.game_page, config.query_param, token
    ))
}

/// The link-generation page: reads a phrase, builds the link, copies it.
pub struct Sender {
    config: PhraseConfig,
    origin: String,
    pathname: String,
    link: Option<String>,
}

impl Sender {
    /// `origin` and `pathname` are the sender page's own location parts.
    pub fn new(config: PhraseConfig, origin: impl Into<String>, pathname: impl Into<String>) -> Self {
        Self {
            config,
            origin: origin.into(),
            pathname: pathname.into(),
            link: None,
        }
    }

    /// Generate a link from the current phrase. On error the previous link is kept.
    pub fn generate_link<S: PhraseSource + ?Sized>(&mut self, source: &S) -> Result<&str, LinkError> {
        let url = share_url(&self.origin, &self.pathname, &source.phrase(), &self.config)?;
        log::debug!("share link generated ({} bytes)", url.len());
        Ok(self.link.insert(url).as_str())
    }

    /// The most recently generated link.
    pub fn link(&self) -> Option<&str> {
        self.link.as_deref()
    }

    pub fn copy_link<C: ClipboardWriter + ?Sized>(&self, clipboard: &mut C) -> Result<(), LinkError> {
        let link = self.link.as_deref().ok_or(LinkError::NoLink)?;
        clipboard.write_text(link)?;
        Ok(())
    }
}
