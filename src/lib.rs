#![doc = include_str!("../README.md")]

/// The SPDX license and exception identifier catalog
pub mod catalog;
pub mod diag;
/// Parsing and manipulation of SPDX license expressions
pub mod expr;
/// Association of license and copyright findings detected in source trees
pub mod findings;
/// Mapping of free-text declared licenses onto SPDX expressions
pub mod mapping;

pub use camino::{Utf8Path as Path, Utf8PathBuf as PathBuf};
pub use expr::{ParseError, SpdxExpression, SpdxOperator};
pub use findings::{
    CopyrightFinding, CopyrightFindings, FindingsMatcher, LicenseFinding, LicenseFindings,
    TextLocation,
};
pub use toml_span::{
    span::{Span, Spanned},
    DeserError, Deserialize,
};
