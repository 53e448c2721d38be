pub mod api;
pub mod codec;
pub mod config;
pub mod link;
pub mod puzzle;
pub mod session;

// Re-export key types at crate root for convenience
pub use api::types::{PhraseOrigin, SessionEvent};
pub use codec::{decode, encode, UrlSafeDecodeError};
pub use config::PhraseConfig;
pub use link::{
    phrase_from_query, share_url, token_from_query,
    ClipboardError, ClipboardWriter, LinkError, PhraseSource, Sender,
};
pub use puzzle::{HudSnapshot, PieceDealer, Puzzle, MASK_CHAR};
pub use session::GameSession;
