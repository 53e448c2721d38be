use serde::Serialize;

/// Something that happened during a session, forwarded to the UI layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum SessionEvent {
    /// A piece went from uncollected to collected.
    #[serde(rename_all = "camelCase")]
    PieceCollected { index: usize, piece: char, score: u32 },
    /// The last missing piece was collected.
    PhraseComplete { score: u32 },
    /// Player progress was wiped for a replay.
    CollectionReset,
}

/// Where the session's phrase came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PhraseOrigin {
    /// Decoded from the link's query parameter.
    Link,
    /// Passed in directly by the caller.
    Direct,
    /// The link carried no phrase; the configured default is in use.
    Default,
    /// The link carried a token that did not decode; the default is in use.
    InvalidLink,
}

impl PhraseOrigin {
    /// Whether the UI should tell the player their link was broken.
    pub fn is_fallback(self) -> bool {
        matches!(self, PhraseOrigin::Default | PhraseOrigin::InvalidLink)
    }
}
