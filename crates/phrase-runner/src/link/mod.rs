pub mod query;
pub mod sender;

pub use query::{phrase_from_query, token_from_query};
pub use sender::{share_url, ClipboardError, ClipboardWriter, LinkError, PhraseSource, Sender};
