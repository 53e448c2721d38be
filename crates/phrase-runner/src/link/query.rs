use std::borrow::Cow;

use crate::codec::{self, UrlSafeDecodeError};

/// Value of `param` in a `location.search` string, percent-decoded.
///
/// The leading `?` is optional. The first matching pair wins; a bare `p`
/// with no `=` yields an empty token. `+` is left alone since tokens never
/// contain a space.
pub fn token_from_query<'a>(search: &'a str, param: &str) -> Option<Cow<'a, str>> {
    let query = search.strip_prefix('?').unwrap_or(search);
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .find_map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (percent_decode(key) == param).then(|| percent_decode(value))
        })
}

fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

/// `%XX` escapes become bytes; malformed escapes are kept verbatim.
fn percent_decode(raw: &str) -> Cow<'_, str> {
    if !raw.contains('%') {
        return Cow::Borrowed(raw);
    }

    let bytes = raw.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            if let (Some(hi), Some(lo)) = (
                bytes.get(i + 1).copied().and_then(hex_value),
                bytes.get(i + 2).copied().and_then(hex_value),
            ) {
                out.push(hi << 4 | lo);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }
    Cow::Owned(String::from_utf8_lossy(&out).into_owned())
}

/// Decode the phrase carried by `param`.
///
/// `Ok(None)` when the parameter is absent; a present but undecodable token
/// is an error so the caller can choose its fallback.
pub fn phrase_from_query(search: &str, param: &str) -> Result<Option<String>, UrlSafeDecodeError> {
    token_from_query(search, param)
        .map(|token| codec::decode(&token))
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_param_with_or_without_question_mark() {
        assert_eq!(token_from_query("?p=aGk", "p"), Some("aGk".into()));
        assert_eq!(token_from_query("p=aGk", "p"), Some("aGk".into()));
        assert_eq!(token_from_query("?lang=en&p=aGk&x=1", "p"), Some("aGk".into()));
    }

    #[test]
    fn missing_param() {
        assert_eq!(token_from_query("", "p"), None);
        assert_eq!(token_from_query("?", "p"), None);
        assert_eq!(token_from_query("?phrase=aGk", "p"), None);
    }

    #[test]
    fn first_match_wins() {
        assert_eq!(token_from_query("?p=aGk&p=bad", "p"), Some("aGk".into()));
    }

    #[test]
    fn bare_key_is_empty_token() {
        assert_eq!(token_from_query("?p", "p"), Some("".into()));
        assert_eq!(phrase_from_query("?p", "p").unwrap(), Some(String::new()));
    }

    #[test]
    fn percent_escapes_are_decoded() {
        // A messenger re-escaped "_" and "-" in the token for "???" / "~~~".
        assert_eq!(token_from_query("?p=Pz8%5F", "p"), Some("Pz8_".into()));
        assert_eq!(token_from_query("?%70=fn5%2d", "p"), Some("fn5-".into()));
        assert_eq!(phrase_from_query("?p=Pz8%5F", "p").unwrap().as_deref(), Some("???"));
    }

    #[test]
    fn malformed_escapes_kept_verbatim() {
        assert_eq!(percent_decode("a%zz%4"), "a%zz%4");
        assert_eq!(percent_decode("%41%42"), "AB");
        assert_eq!(percent_decode("%C3%A9"), "é");
    }

    #[test]
    fn decodes_phrase() {
        let search = format!("?p={}", codec::encode("SEE YOU SOON"));
        assert_eq!(
            phrase_from_query(&search, "p").unwrap().as_deref(),
            Some("SEE YOU SOON")
        );
        assert_eq!(phrase_from_query("?q=1", "p").unwrap(), None);
    }

    #[test]
    fn corrupt_token_is_error() {
        assert!(phrase_from_query("?p=%%%", "p").is_err());
    }
}
