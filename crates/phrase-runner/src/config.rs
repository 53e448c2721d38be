use serde::{Deserialize, Serialize};

/// Game-wide settings, loadable from JSON.
/// Every field is optional in the JSON; missing ones take the defaults below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhraseConfig {
    /// Query parameter that carries the phrase token (default: "p").
    pub query_param: String,
    /// Page the share link points at (default: "game.html").
    pub game_page: String,
    /// Page name stripped from the sender's path when building links (default: "sender.html").
    pub sender_page: String,
    /// Placeholder for uncollected pieces on the HUD (default: '_').
    pub mask_char: char,
    /// Phrase used when the link carries no usable token.
    pub default_phrase: String,
    /// Score for each newly collected piece (default: 10).
    pub points_per_piece: u32,
}

impl Default for PhraseConfig {
    fn default() -> Self {
        Self {
            query_param: "p".to_string(),
            game_page: "game.html".to_string(),
            sender_page: "sender.html".to_string(),
            mask_char: crate::puzzle::MASK_CHAR,
            default_phrase: "HELLO WORLD".to_string(),
            points_per_piece: 10,
        }
    }
}

impl PhraseConfig {
    /// Parse a config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_gives_defaults() {
        let config = PhraseConfig::from_json("{}").unwrap();
        assert_eq!(config, PhraseConfig::default());
        assert_eq!(config.query_param, "p");
        assert_eq!(config.mask_char, '_');
    }

    #[test]
    fn partial_override() {
        let json = r#"{ "default_phrase": "TRY AGAIN", "points_per_piece": 25 }"#;
        let config = PhraseConfig::from_json(json).unwrap();
        assert_eq!(config.default_phrase, "TRY AGAIN");
        assert_eq!(config.points_per_piece, 25);
        assert_eq!(config.game_page, "game.html");
    }

    #[test]
    fn rejects_bad_mask() {
        assert!(PhraseConfig::from_json(r#"{ "mask_char": "ab" }"#).is_err());
    }
}
