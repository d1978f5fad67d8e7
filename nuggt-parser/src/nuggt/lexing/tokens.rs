//! Token definitions for the nuggt splitter
//!
//! The tokens are defined using the logos derive macro. Only the characters that matter to
//! top-level splitting get their own token; everything else is folded into [`Token::Text`] runs.
use logos::Logos;

#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Token {
    // Composite quoting: "<text with , : ( ) and friends>"
    #[token("\"<")]
    CompositeOpen,
    #[token(">\"")]
    CompositeClose,

    #[token("\"")]
    Quote,

    // Escapes are resolved by the splitter, which knows the quoting state
    #[token("\\")]
    Backslash,

    #[regex(r"[(\[{]")]
    Open,
    #[regex(r"[)\]}]")]
    Close,

    #[token(",")]
    Comma,
    #[token(":")]
    Colon,

    // A lone angle bracket outside the composite quote pair
    #[regex(r"[<>]")]
    Angle,

    #[regex(r#"[^"\\()\[\]{},:<>]+"#)]
    Text,
}

/// Tokenize `source`, pairing each token with its byte range.
///
/// Every byte of the input is covered by exactly one token, so the spans can be used to slice
/// the source back into fragments.
pub fn tokenize(source: &str) -> Vec<(Token, logos::Span)> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        if let Ok(token) = result {
            tokens.push((token, lexer.span()));
        }
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<Token> {
        tokenize(source).into_iter().map(|(token, _)| token).collect()
    }

    #[test]
    fn test_property_list() {
        assert_eq!(
            kinds("a: 1, b: (x)"),
            vec![
                Token::Text,
                Token::Colon,
                Token::Text,
                Token::Comma,
                Token::Text,
                Token::Colon,
                Token::Text,
                Token::Open,
                Token::Text,
                Token::Close,
            ]
        );
    }

    #[test]
    fn test_composite_quote_pair() {
        assert_eq!(
            kinds(r#""<a, b>""#),
            vec![
                Token::CompositeOpen,
                Token::Text,
                Token::Comma,
                Token::Text,
                Token::CompositeClose,
            ]
        );
    }

    #[test]
    fn test_lone_angles_and_escapes() {
        assert_eq!(
            kinds(r#"<x> \" \"#),
            vec![
                Token::Angle,
                Token::Text,
                Token::Angle,
                Token::Text,
                Token::Backslash,
                Token::Quote,
                Token::Text,
                Token::Backslash,
            ]
        );
    }

    #[test]
    fn test_backslash_before_composite_close() {
        assert_eq!(
            kinds(r#""<C:\dir\>""#),
            vec![
                Token::CompositeOpen,
                Token::Text,
                Token::Colon,
                Token::Backslash,
                Token::Text,
                Token::Backslash,
                Token::CompositeClose,
            ]
        );
    }

    #[test]
    fn test_spans_cover_input() {
        let source = r#"card: (title: "Hi, there", x: "<[1]>")"#;
        let rebuilt: String = tokenize(source)
            .into_iter()
            .map(|(_, span)| &source[span])
            .collect();
        assert_eq!(rebuilt, source);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(tokenize(""), vec![]);
    }
}
