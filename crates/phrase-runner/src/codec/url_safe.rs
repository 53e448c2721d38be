use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};
use base64::Engine;
use thiserror::Error;

/// Why a token could not be turned back into a phrase.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UrlSafeDecodeError {
    #[error("token is not valid base64: {0}")]
    InvalidBase64(#[from] base64::DecodeError),

    #[error("decoded bytes are not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}

/// Encode `text` into a token over `[A-Za-z0-9-_]` with no padding.
///
/// The token is the standard base64 of the UTF-8 bytes with `+` → `-`,
/// `/` → `_` and trailing `=` removed.
pub fn encode(text: &str) -> String {
    URL_SAFE_NO_PAD.encode(text.as_bytes())
}

/// Decode a token produced by [`encode`].
///
/// The URL-safe alphabet is mapped back to the standard one and padding is
/// restored before decoding, so tokens that still carry `=` or use `+`/`/`
/// are accepted as well.
pub fn decode(token: &str) -> Result<String, UrlSafeDecodeError> {
    let bytes = STANDARD.decode(restore_standard(token))?;
    Ok(String::from_utf8(bytes)?)
}

fn restore_standard(token: &str) -> String {
    let mut base64: String = token
        .chars()
        .map(|c| match c {
            '-' => '+',
            '_' => '/',
            other => other,
        })
        .collect();
    while base64.len() % 4 != 0 {
        base64.push('=');
    }
    base64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_url_safe(token: &str) -> bool {
        token
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    }

    #[test]
    fn hi_round_trips() {
        let token = encode("hi");
        assert_eq!(token, "aGk");
        assert_eq!(decode(&token).unwrap(), "hi");
    }

    #[test]
    fn empty_string() {
        assert_eq!(encode(""), "");
        assert_eq!(decode("").unwrap(), "");
    }

    #[test]
    fn multibyte_and_emoji_round_trip() {
        for phrase in ["héllo wörld", "日本語のフレーズ", "I 💖 Rust 🦀", "e\u{301}"] {
            let token = encode(phrase);
            assert!(is_url_safe(&token), "token {:?} for {:?}", token, phrase);
            assert_eq!(decode(&token).unwrap(), phrase);
        }
    }

    #[test]
    fn uses_url_safe_substitutions() {
        // "~~~" and "???" encode to "fn5+" and "Pz8/" in the standard alphabet.
        assert_eq!(encode("~~~"), "fn5-");
        assert_eq!(encode("???"), "Pz8_");
        assert_eq!(decode("fn5-").unwrap(), "~~~");
        assert_eq!(decode("Pz8_").unwrap(), "???");
    }

    #[test]
    fn strips_padding() {
        assert_eq!(encode("a"), "YQ");
        assert_eq!(encode("ab"), "YWI");
        assert_eq!(encode("abc"), "YWJj");
    }

    #[test]
    fn accepts_padded_standard_token() {
        assert_eq!(decode("aGk=").unwrap(), "hi");
    }

    #[test]
    fn rejects_bad_alphabet() {
        let err = decode("a$b!").unwrap_err();
        assert!(matches!(err, UrlSafeDecodeError::InvalidBase64(_)));
    }

    #[test]
    fn rejects_truncated_token() {
        // A single leftover character can never be valid base64.
        let err = decode("aGkhY").unwrap_err();
        assert!(matches!(err, UrlSafeDecodeError::InvalidBase64(_)));
    }

    #[test]
    fn rejects_invalid_utf8() {
        let token = URL_SAFE_NO_PAD.encode([0xC3, 0x28]);
        let err = decode(&token).unwrap_err();
        assert!(matches!(err, UrlSafeDecodeError::InvalidUtf8(_)));
    }
}
