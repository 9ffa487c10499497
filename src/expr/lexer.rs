use super::{
    error::{ParseError, Reason},
    SpdxOperator,
};
use std::ops::Range;

/// A single token in an SPDX expression
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Token<'a> {
    /// A license, license reference or exception identifier, classified
    /// by the parser depending on where it appears
    Term(&'a str),
    /// One of the `AND`, `OR` or `WITH` keywords, in any case
    Operator(SpdxOperator),
    /// The `+` "or later" suffix
    Plus,
    OpenParen,
    CloseParen,
}

impl std::fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Term(t) => f.write_str(t),
            Self::Operator(op) => op.fmt(f),
            Self::Plus => f.write_str("+"),
            Self::OpenParen => f.write_str("("),
            Self::CloseParen => f.write_str(")"),
        }
    }
}

/// A token along with its byte range in the original expression
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LexerToken<'a> {
    pub token: Token<'a>,
    pub span: Range<usize>,
}

/// Splits an expression into tokens, whitespace between tokens is skipped
pub struct Lexer<'a> {
    original: &'a str,
    offset: usize,
}

impl<'a> Lexer<'a> {
    #[inline]
    pub fn new(original: &'a str) -> Self {
        Self {
            original,
            offset: 0,
        }
    }
}

#[inline]
fn is_term_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '.' | ':')
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<LexerToken<'a>, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = &self.original[self.offset..];
        let trimmed = rest.trim_start();
        self.offset += rest.len() - trimmed.len();

        let start = self.offset;
        let c = trimmed.chars().next()?;

        let token = match c {
            '(' => Token::OpenParen,
            ')' => Token::CloseParen,
            '+' => Token::Plus,
            c if c.is_ascii_alphanumeric() => {
                let len = trimmed.find(|c| !is_term_char(c)).unwrap_or(trimmed.len());
                let term = &trimmed[..len];

                self.offset += len;

                let token = match term.parse::<SpdxOperator>() {
                    Ok(op) => Token::Operator(op),
                    Err(_) => Token::Term(term),
                };

                return Some(Ok(LexerToken {
                    token,
                    span: start..start + len,
                }));
            }
            other => {
                // Stop lexing entirely, nothing after an invalid character is
                // going to be meaningful
                self.offset = self.original.len();

                return Some(Err(ParseError {
                    original: self.original.to_owned(),
                    span: start..start + other.len_utf8(),
                    reason: Reason::InvalidCharacters,
                }));
            }
        };

        self.offset += 1;

        Some(Ok(LexerToken {
            token,
            span: start..start + 1,
        }))
    }
}

#[cfg(test)]
mod test {
    use super::{Lexer, Token};
    use crate::expr::SpdxOperator;

    fn tokens(s: &str) -> Vec<Token<'_>> {
        Lexer::new(s).map(|t| t.unwrap().token).collect()
    }

    #[test]
    fn lexes_all_tokens() {
        assert_eq!(
            tokens("(MIT OR GPL-2.0+) and Apache-2.0 WiTh LLVM-exception"),
            vec![
                Token::OpenParen,
                Token::Term("MIT"),
                Token::Operator(SpdxOperator::Or),
                Token::Term("GPL-2.0"),
                Token::Plus,
                Token::CloseParen,
                Token::Operator(SpdxOperator::And),
                Token::Term("Apache-2.0"),
                Token::Operator(SpdxOperator::With),
                Token::Term("LLVM-exception"),
            ]
        );
    }

    #[test]
    fn keeps_document_refs_whole() {
        assert_eq!(
            tokens("DocumentRef-spdx-tool-1.2:LicenseRef-MIT-Style-2"),
            vec![Token::Term("DocumentRef-spdx-tool-1.2:LicenseRef-MIT-Style-2")]
        );
    }

    #[test]
    fn spans_cover_terms() {
        let spans: Vec<_> = Lexer::new("  MIT  OR\tX11 ")
            .map(|t| t.unwrap().span)
            .collect();
        assert_eq!(spans, vec![2..5, 7..9, 10..13]);
    }

    #[test]
    fn rejects_invalid_characters() {
        let mut lexer = Lexer::new("MIT & Apache-2.0");
        assert!(lexer.next().unwrap().is_ok());

        let err = lexer.next().unwrap().unwrap_err();
        assert_eq!(err.span, 4..5);
        assert_eq!(err.offending(), "&");
        assert!(lexer.next().is_none());
    }
}
