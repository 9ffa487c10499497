use std::{error::Error, fmt, ops::Range};

/// An error that occurred while parsing an SPDX expression. There is no
/// recovery, the first error encountered is the one reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// The expression that was being parsed
    pub original: String,
    /// The byte range of the offending term within the original expression,
    /// empty if the error is that the input ended too early
    pub span: Range<usize>,
    /// The reason parsing failed
    pub reason: Reason,
}

impl ParseError {
    /// The portion of the original expression that caused the error
    #[inline]
    pub fn offending(&self) -> &str {
        self.original.get(self.span.clone()).unwrap_or_default()
    }
}

/// The particular reason for a [`ParseError`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reason {
    /// The expression was empty, or only whitespace
    Empty,
    /// A character outside of the SPDX character set was encountered
    InvalidCharacters,
    /// An opening parenthesis was never closed
    UnclosedParens,
    /// A closing parenthesis was found without a matching opener
    UnopenedParens,
    /// A token was found where one of the listed terms was expected
    Unexpected(&'static [&'static str]),
    /// The term after `WITH` is not a license exception
    NotAnException,
    /// A license exception was used where a license was expected
    UnexpectedException,
    /// A `LicenseRef-` or `DocumentRef-` term is malformed
    InvalidLicenseRef,
    /// `WITH` was applied to something other than a single license
    WithRequiresSimpleLicense,
    /// The parentheses are nested too deeply, or the expression has more
    /// levels than [`MAX_DEPTH`](super::MAX_DEPTH)
    TooDeep,
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("empty expression"),
            Self::InvalidCharacters => f.write_str("invalid character(s)"),
            Self::UnclosedParens => f.write_str("unclosed parens"),
            Self::UnopenedParens => f.write_str("unopened parens"),
            Self::Unexpected(expected) => {
                if expected.len() > 1 {
                    f.write_str("expected one of ")?;

                    for (i, exp) in expected.iter().enumerate() {
                        f.write_fmt(format_args!("{}`{exp}`", if i > 0 { ", " } else { "" }))?;
                    }
                    f.write_str(" here")
                } else if expected.len() == 1 {
                    f.write_fmt(format_args!("expected a `{}` here", expected[0]))
                } else {
                    f.write_str("the term was not expected here")
                }
            }
            Self::NotAnException => f.write_str("the term after `WITH` is not a license exception"),
            Self::UnexpectedException => {
                f.write_str("a license exception can only be used after `WITH`")
            }
            Self::InvalidLicenseRef => f.write_str("malformed `LicenseRef-` or `DocumentRef-` term"),
            Self::WithRequiresSimpleLicense => {
                f.write_str("`WITH` can only be applied to a single license")
            }
            Self::TooDeep => f.write_str("the expression is nested too deeply"),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.original)?;
        f.write_str("\n")?;

        for _ in 0..self.span.start {
            f.write_str(" ")?;
        }

        // Mark the end of input with a single caret
        let width = std::cmp::max(self.span.end - self.span.start, 1);
        for _ in 0..width {
            f.write_str("^")?;
        }

        f.write_fmt(format_args!(" {}", self.reason))
    }
}

impl Error for ParseError {}

/// Programmatic misuse when building an expression by hand, as opposed to
/// parsing one
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConstructionError {
    /// The identifier does not follow the SPDX identifier syntax
    InvalidIdentifier(String),
    /// The right hand side of a `WITH` is not a license exception
    NotAnException(String),
    /// The left hand side of a `WITH` is not a single license
    WithRequiresSimpleLicense,
    /// A license exception was used as an `AND`/`OR` operand
    ExceptionOperand(String),
    /// The result would be deeper than [`MAX_DEPTH`](super::MAX_DEPTH)
    TooDeep,
}

impl fmt::Display for ConstructionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidIdentifier(id) => write!(f, "'{id}' is not a valid SPDX identifier"),
            Self::NotAnException(exp) => write!(f, "'{exp}' is not a license exception"),
            Self::WithRequiresSimpleLicense => {
                f.write_str("`WITH` can only be applied to a single license")
            }
            Self::ExceptionOperand(id) => {
                write!(f, "license exception '{id}' can only be used with `WITH`")
            }
            Self::TooDeep => f.write_str("the expression is nested too deeply"),
        }
    }
}

impl Error for ConstructionError {}
