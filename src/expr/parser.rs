use super::{
    error::{ParseError, Reason},
    is_exception_id, is_license_ref,
    lexer::{Lexer, LexerToken, Token},
    CompoundExpression, LicenseExceptionExpression, LicenseIdExpression, LicenseRefExpression,
    SpdxExpression, SpdxOperator, MAX_DEPTH,
};
use crate::catalog;
use std::ops::Range;

const LICENSE_START: &[&str] = &["<license>", "("];
const EXCEPTION: &[&str] = &["<exception>"];
const AFTER_TERM: &[&str] = &["AND", "OR", "WITH"];
const AFTER_TERM_IN_PARENS: &[&str] = &["AND", "OR", "WITH", ")"];
const AFTER_GROUP: &[&str] = &["AND", "OR"];
const AFTER_GROUP_IN_PARENS: &[&str] = &["AND", "OR", ")"];

/// Each level of parentheses costs several stack frames while parsing
const MAX_NESTING: usize = 64;

/// Parses an SPDX expression with the usual precedence of
/// `WITH` > `AND` > `OR`, all binary operators are left associative.
///
/// ```text
/// or      := and ("OR" and)*
/// and     := with ("AND" with)*
/// with    := primary ("WITH" exception)?
/// primary := "(" or ")" | license "+"? | license-ref
/// ```
pub(super) fn parse(original: &str) -> Result<SpdxExpression, ParseError> {
    let tokens = Lexer::new(original).collect::<Result<Vec<_>, _>>()?;

    if tokens.is_empty() {
        return Err(ParseError {
            original: original.to_owned(),
            span: 0..original.len(),
            reason: Reason::Empty,
        });
    }

    let mut parser = Parser {
        original,
        tokens,
        pos: 0,
        depth: 0,
        last_was_term: false,
    };

    let expr = parser.parse_or()?;

    if let Some(tok) = parser.peek() {
        let reason = match tok.token {
            Token::CloseParen => Reason::UnopenedParens,
            _ => Reason::Unexpected(if parser.last_was_term {
                AFTER_TERM
            } else {
                AFTER_GROUP
            }),
        };

        return Err(parser.err(tok.span.clone(), reason));
    }

    Ok(expr)
}

struct Parser<'a> {
    original: &'a str,
    tokens: Vec<LexerToken<'a>>,
    pos: usize,
    /// The number of currently open parentheses
    depth: usize,
    /// Whether the most recently completed operand was a bare license term,
    /// which is the only thing `WITH` may follow
    last_was_term: bool,
}

impl<'a> Parser<'a> {
    #[inline]
    fn peek(&self) -> Option<&LexerToken<'a>> {
        self.tokens.get(self.pos)
    }

    #[inline]
    fn next(&mut self) -> Option<LexerToken<'a>> {
        let tok = self.tokens.get(self.pos).cloned();
        if tok.is_some() {
            self.pos += 1;
        }
        tok
    }

    #[inline]
    fn peek_operator(&self, op: SpdxOperator) -> bool {
        matches!(self.peek(), Some(LexerToken { token: Token::Operator(o), .. }) if *o == op)
    }

    #[inline]
    fn err(&self, span: Range<usize>, reason: Reason) -> ParseError {
        ParseError {
            original: self.original.to_owned(),
            span,
            reason,
        }
    }

    /// An error for input that ended before the expression was complete
    #[inline]
    fn eof(&self, reason: Reason) -> ParseError {
        let len = self.original.len();
        self.err(len..len, reason)
    }

    /// Joins two operands, failing if the tree would become too deep
    fn join(
        &self,
        left: SpdxExpression,
        operator: SpdxOperator,
        right: SpdxExpression,
        op_span: Range<usize>,
    ) -> Result<SpdxExpression, ParseError> {
        let compound = CompoundExpression::new_unchecked(left, operator, right);
        if compound.depth() > MAX_DEPTH {
            return Err(self.err(op_span, Reason::TooDeep));
        }

        Ok(SpdxExpression::Compound(compound))
    }

    fn parse_or(&mut self) -> Result<SpdxExpression, ParseError> {
        let mut left = self.parse_and()?;

        while self.peek_operator(SpdxOperator::Or) {
            let op_span = self.tokens[self.pos].span.clone();
            self.pos += 1;
            let right = self.parse_and()?;
            left = self.join(left, SpdxOperator::Or, right, op_span)?;
        }

        Ok(left)
    }

    fn parse_and(&mut self) -> Result<SpdxExpression, ParseError> {
        let mut left = self.parse_with()?;

        while self.peek_operator(SpdxOperator::And) {
            let op_span = self.tokens[self.pos].span.clone();
            self.pos += 1;
            let right = self.parse_with()?;
            left = self.join(left, SpdxOperator::And, right, op_span)?;
        }

        Ok(left)
    }

    fn parse_with(&mut self) -> Result<SpdxExpression, ParseError> {
        let license = self.parse_primary()?;

        if !self.peek_operator(SpdxOperator::With) {
            return Ok(license);
        }

        if !self.last_was_term {
            let span = self.peek().map(|t| t.span.clone()).unwrap_or_default();
            return Err(self.err(span, Reason::WithRequiresSimpleLicense));
        }

        self.pos += 1;

        let exception = match self.next() {
            Some(LexerToken {
                token: Token::Term(term),
                span,
            }) => {
                if !is_exception_id(term) {
                    return Err(self.err(span, Reason::NotAnException));
                }

                if is_license_ref(term) {
                    LicenseExceptionExpression::new(term)
                        .map_err(|_err| self.err(span, Reason::InvalidLicenseRef))?
                } else {
                    LicenseExceptionExpression { id: term.to_owned() }
                }
            }
            Some(tok) => return Err(self.err(tok.span, Reason::Unexpected(EXCEPTION))),
            None => return Err(self.eof(Reason::Unexpected(EXCEPTION))),
        };

        self.last_was_term = false;

        Ok(SpdxExpression::Compound(CompoundExpression::new_unchecked(
            license,
            SpdxOperator::With,
            SpdxExpression::LicenseException(exception),
        )))
    }

    fn parse_primary(&mut self) -> Result<SpdxExpression, ParseError> {
        let Some(tok) = self.next() else {
            return Err(self.eof(Reason::Unexpected(LICENSE_START)));
        };

        match tok.token {
            Token::OpenParen => {
                if self.depth >= MAX_NESTING {
                    return Err(self.err(tok.span, Reason::TooDeep));
                }

                self.depth += 1;
                let inner = self.parse_or()?;

                match self.next() {
                    Some(LexerToken {
                        token: Token::CloseParen,
                        ..
                    }) => {}
                    Some(other) => {
                        let expected = if self.last_was_term {
                            AFTER_TERM_IN_PARENS
                        } else {
                            AFTER_GROUP_IN_PARENS
                        };
                        return Err(self.err(other.span, Reason::Unexpected(expected)));
                    }
                    None => return Err(self.err(tok.span, Reason::UnclosedParens)),
                }

                self.depth -= 1;
                self.last_was_term = false;

                Ok(inner)
            }
            Token::CloseParen if self.depth == 0 => Err(self.err(tok.span, Reason::UnopenedParens)),
            Token::Term(term) => {
                let expr = self.license(term, tok.span)?;
                self.last_was_term = true;
                Ok(expr)
            }
            _ => Err(self.err(tok.span, Reason::Unexpected(LICENSE_START))),
        }
    }

    /// Classifies a term in license position, consuming a trailing `+`
    fn license(&mut self, term: &str, span: Range<usize>) -> Result<SpdxExpression, ParseError> {
        if is_license_ref(term) {
            let lr = LicenseRefExpression::new(term)
                .map_err(|_err| self.err(span, Reason::InvalidLicenseRef))?;

            if let Some(LexerToken {
                token: Token::Plus,
                span,
            }) = self.peek()
            {
                return Err(self.err(span.clone(), Reason::Unexpected(AFTER_TERM)));
            }

            return Ok(SpdxExpression::LicenseRef(lr));
        }

        if catalog::license(term).is_none() && is_exception_id(term) {
            return Err(self.err(span, Reason::UnexpectedException));
        }

        let or_later = matches!(
            self.peek(),
            Some(LexerToken {
                token: Token::Plus,
                ..
            })
        );
        if or_later {
            self.pos += 1;
        }

        Ok(SpdxExpression::LicenseId(LicenseIdExpression {
            id: term.to_owned(),
            or_later,
        }))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn reason(s: &str) -> (Range<usize>, Reason) {
        let err = parse(s).unwrap_err();
        (err.span, err.reason)
    }

    #[test]
    fn respects_precedence() {
        let expr = parse("MIT OR Apache-2.0 AND BSD-3-Clause").unwrap();
        let c = expr.as_compound().unwrap();
        assert_eq!(c.operator(), SpdxOperator::Or);
        assert_eq!(c.left().to_string(), "MIT");
        assert_eq!(c.right().to_string(), "Apache-2.0 AND BSD-3-Clause");

        let expr = parse("A AND B WITH LLVM-exception OR C").unwrap();
        let c = expr.as_compound().unwrap();
        assert_eq!(c.operator(), SpdxOperator::Or);
        assert_eq!(c.left().to_string(), "A AND B WITH LLVM-exception");
    }

    #[test]
    fn is_left_associative() {
        let expr = parse("A OR B OR C").unwrap();
        let c = expr.as_compound().unwrap();
        assert_eq!(c.left().to_string(), "A OR B");
        assert_eq!(c.right().to_string(), "C");
    }

    #[test]
    fn handles_plus() {
        let expr = parse("GPL-2.0 +").unwrap();
        match &expr {
            SpdxExpression::LicenseId(lic) => {
                assert_eq!(lic.id(), "GPL-2.0");
                assert!(lic.has_or_later_operator());
            }
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(expr.to_string(), "GPL-2.0+");

        assert_eq!(
            reason("LicenseRef-foo+"),
            (14..15, Reason::Unexpected(AFTER_TERM))
        );
    }

    #[test]
    fn reports_unbalanced_parens() {
        assert_eq!(reason("(MIT OR X11"), (0..1, Reason::UnclosedParens));
        assert_eq!(reason("MIT OR X11)"), (10..11, Reason::UnopenedParens));
        assert_eq!(reason("MIT AND )"), (8..9, Reason::UnopenedParens));
        assert_eq!(reason("()"), (1..2, Reason::Unexpected(LICENSE_START)));
    }

    #[test]
    fn reports_misplaced_terms() {
        assert_eq!(reason(""), (0..0, Reason::Empty));
        assert_eq!(reason("  "), (0..2, Reason::Empty));
        assert_eq!(reason("AND MIT"), (0..3, Reason::Unexpected(LICENSE_START)));
        assert_eq!(reason("MIT OR"), (6..6, Reason::Unexpected(LICENSE_START)));
        assert_eq!(reason("MIT X11"), (4..7, Reason::Unexpected(AFTER_TERM)));
        assert_eq!(reason("MIT WITH"), (8..8, Reason::Unexpected(EXCEPTION)));
    }

    #[test]
    fn checks_exceptions() {
        assert_eq!(reason("MIT WITH X11"), (9..12, Reason::NotAnException));
        assert_eq!(
            reason("Classpath-exception-2.0 OR MIT"),
            (0..23, Reason::UnexpectedException)
        );
        assert_eq!(
            reason("(MIT OR X11) WITH LLVM-exception"),
            (13..17, Reason::WithRequiresSimpleLicense)
        );

        let expr = parse("GPL-2.0-or-later WITH LicenseRef-scancode-foo-exception").unwrap();
        assert_eq!(
            expr.exceptions(),
            vec!["LicenseRef-scancode-foo-exception"]
        );
    }

    #[test]
    fn limits_nesting() {
        let nested = format!("{}MIT{}", "(".repeat(5000), ")".repeat(5000));
        assert_eq!(reason(&nested), (64..65, Reason::TooDeep));

        let nested = format!("{}MIT{}", "(".repeat(MAX_NESTING), ")".repeat(MAX_NESTING));
        assert_eq!(parse(&nested).unwrap().to_string(), "MIT");
    }

    #[test]
    fn limits_depth() {
        let chain = vec!["MIT"; 50_000].join(" AND ");
        assert_eq!(reason(&chain), (2044..2047, Reason::TooDeep));

        let chain = vec!["MIT"; MAX_DEPTH].join(" OR ");
        let expr = parse(&chain).unwrap();
        assert_eq!(expr.depth(), MAX_DEPTH);
        assert_eq!(expr.to_string(), chain);
    }

    #[test]
    fn checks_license_refs() {
        assert!(parse("DocumentRef-spdx-tool-1.2:LicenseRef-MIT-Style-2").is_ok());
        assert_eq!(reason("LicenseRef-"), (0..11, Reason::InvalidLicenseRef));
        assert_eq!(reason("Foo:LicenseRef-a"), (0..16, Reason::InvalidLicenseRef));
        // The prefix is case-sensitive, so this is just an unknown license
        assert!(matches!(
            parse("licenseref-lowercase").unwrap(),
            SpdxExpression::LicenseId(_)
        ));
    }
}
