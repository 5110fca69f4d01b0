//! Output encoders used by the safe handlers.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Bytes left untouched by `application/x-www-form-urlencoded`, besides
/// ASCII alphanumerics.
const FORM: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'*')
    .remove(b'-')
    .remove(b'.')
    .remove(b'_');

/// Escapes `& < > " ' /` so the result can sit in element content or a
/// quoted attribute without opening a tag.
pub fn escape_html(input: &str) -> String {
    html_escape::encode_safe(input).into_owned()
}

/// Form-style URL encoding: space becomes `+`, anything outside the
/// unreserved set becomes `%XX` over its UTF-8 bytes.
pub fn form_urlencode(input: &str) -> String {
    // '%' itself encodes to "%25", so "%20" can only come from a space.
    utf8_percent_encode(input, FORM)
        .to_string()
        .replace("%20", "+")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html_script_tag() {
        let out = escape_html("<script>alert(1)</script>");
        assert!(!out.contains("<script"));
        assert!(!out.contains('<'));
        assert!(!out.contains('>'));
        assert!(out.starts_with("&lt;script&gt;"));
    }

    #[test]
    fn test_escape_html_quotes_and_ampersand() {
        let out = escape_html(r#"a & "b" 'c'"#);
        assert!(out.contains("&amp;"));
        assert!(out.contains("&quot;"));
        assert!(!out.contains('"'));
        assert!(!out.contains('\''));
    }

    #[test]
    fn test_escape_html_plain_text_untouched() {
        assert_eq!(escape_html("hello world"), "hello world");
        assert_eq!(escape_html(""), "");
    }

    #[test]
    fn test_form_urlencode() {
        assert_eq!(form_urlencode("a b"), "a+b");
        assert_eq!(form_urlencode("AZaz09*-._"), "AZaz09*-._");
        assert_eq!(form_urlencode("a&b=c"), "a%26b%3Dc");
        assert_eq!(form_urlencode("100% sure"), "100%25+sure");
        assert_eq!(form_urlencode("/?#"), "%2F%3F%23");
        assert_eq!(form_urlencode(""), "");
    }

    #[test]
    fn test_form_urlencode_utf8() {
        assert_eq!(form_urlencode("é"), "%C3%A9");
        assert_eq!(form_urlencode("€ 1"), "%E2%82%AC+1");
    }
}
